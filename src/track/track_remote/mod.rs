
use std::sync::Weak;

use util::marshal::Unmarshal;

use crate::error::{Error, Result};
use crate::rtp_transceiver::rtp_codec::RTPCodecType;
use crate::rtp_transceiver::rtp_receiver::RTPReceiverInternal;
use crate::rtp_transceiver::{PayloadType, SSRC};

/// TrackRemote represents a single inbound source of media
pub struct TrackRemote {
    receive_mtu: usize,
    kind: RTPCodecType,
    ssrc: SSRC,
    rid: String,
    payload_type: PayloadType,

    receiver: Weak<RTPReceiverInternal>,
}

impl std::fmt::Debug for TrackRemote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackRemote")
            .field("kind", &self.kind)
            .field("ssrc", &self.ssrc)
            .field("rid", &self.rid)
            .field("payload_type", &self.payload_type)
            .finish()
    }
}

impl TrackRemote {
    pub(crate) fn new(
        receive_mtu: usize,
        kind: RTPCodecType,
        ssrc: SSRC,
        rid: String,
        payload_type: PayloadType,
        receiver: Weak<RTPReceiverInternal>,
    ) -> Self {
        TrackRemote {
            receive_mtu,
            kind,
            ssrc,
            rid,
            payload_type,
            receiver,
        }
    }

    /// kind gets the Kind of the track
    pub fn kind(&self) -> RTPCodecType {
        self.kind
    }

    /// ssrc gets the SSRC of the track
    pub fn ssrc(&self) -> SSRC {
        self.ssrc
    }

    /// rid gets the RTP Stream ID of this Track
    /// With Simulcast you will have multiple tracks with the same ID, but different RID values.
    /// In many cases a TrackRemote will not have an RID, so it is important to assert it is non-zero
    pub fn rid(&self) -> &str {
        self.rid.as_str()
    }

    /// payload_type gets the PayloadType of the track
    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    /// read reads data from the track.
    pub async fn read(&self, b: &mut [u8]) -> Result<usize> {
        match self.receiver.upgrade() {
            Some(receiver) => receiver.read_rtp(b).await,
            None => Err(Error::ErrRTPReceiverStopped),
        }
    }

    /// read_rtp is a convenience method that wraps read and unmarshals for you.
    pub async fn read_rtp(&self) -> Result<rtp::packet::Packet> {
        let mut b = vec![0u8; self.receive_mtu];
        let n = self.read(&mut b).await?;

        let mut buf = &b[..n];
        let pkt = rtp::packet::Packet::unmarshal(&mut buf)?;

        Ok(pkt)
    }
}
