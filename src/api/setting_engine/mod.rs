
use crate::{RECEIVE_BUFFER_PACKETS, RECEIVE_MTU};

/// SettingEngine allows influencing behavior in ways that are not
/// supported by the WebRTC API. This allows us to support additional
/// use-cases without deviating from the WebRTC API elsewhere.
#[derive(Default, Debug, Clone)]
pub struct SettingEngine {
    pub(crate) receive_mtu: usize,
    pub(crate) receive_buffer_packets: usize,
}

impl SettingEngine {
    /// get_receive_mtu returns the configured MTU. If SettingEngine's MTU is configured to 0 it returns the default
    pub(crate) fn get_receive_mtu(&self) -> usize {
        if self.receive_mtu != 0 {
            self.receive_mtu
        } else {
            RECEIVE_MTU
        }
    }

    /// get_receive_buffer_packets returns how many packets each lossy read
    /// stream retains, or the default when configured to 0
    pub(crate) fn get_receive_buffer_packets(&self) -> usize {
        if self.receive_buffer_packets != 0 {
            self.receive_buffer_packets
        } else {
            RECEIVE_BUFFER_PACKETS
        }
    }

    /// set_receive_mtu sets the size of read buffer that copy incoming packets. This is optional.
    /// Leave this 0 for the default receiveMTU
    pub fn set_receive_mtu(&mut self, receive_mtu: usize) {
        self.receive_mtu = receive_mtu;
    }

    /// set_receive_buffer_packets sets how many unread packets a receiver keeps
    /// per read stream before the oldest ones are discarded.
    /// Leave this 0 for the default.
    pub fn set_receive_buffer_packets(&mut self, receive_buffer_packets: usize) {
        self.receive_buffer_packets = receive_buffer_packets;
    }
}
