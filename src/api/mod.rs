#[cfg(test)]
mod api_test;

pub mod setting_engine;

use std::sync::Arc;

use setting_engine::*;

use crate::error::Result;
use crate::rtp_transceiver::rtp_codec::RTPCodecType;
use crate::rtp_transceiver::rtp_receiver::RTCRtpReceiver;
use crate::srtp_transport::SrtpTransport;

/// API bundles the global functions of the receive-side API.
pub struct API {
    pub(crate) setting_engine: Arc<SettingEngine>,
}

impl API {
    /// new_rtp_receiver constructs a new RTPReceiver bound to transport.
    /// It fails with `ErrRTPReceiverTransportNil` when transport is None.
    pub fn new_rtp_receiver(
        &self,
        kind: RTPCodecType,
        transport: Option<Arc<dyn SrtpTransport + Send + Sync>>,
    ) -> Result<RTCRtpReceiver> {
        RTCRtpReceiver::new(
            self.setting_engine.get_receive_mtu(),
            self.setting_engine.get_receive_buffer_packets(),
            kind,
            transport,
        )
    }
}

#[derive(Default)]
pub struct APIBuilder {
    setting_engine: Option<Arc<SettingEngine>>,
}

impl APIBuilder {
    pub fn new() -> Self {
        APIBuilder::default()
    }

    pub fn build(mut self) -> API {
        API {
            setting_engine: if let Some(setting_engine) = self.setting_engine.take() {
                setting_engine
            } else {
                Arc::new(SettingEngine::default())
            },
        }
    }

    /// WithSettingEngine allows providing a SettingEngine to the API.
    /// Settings should not be changed after passing the engine to an API.
    pub fn with_setting_engine(mut self, setting_engine: SettingEngine) -> Self {
        self.setting_engine = Some(Arc::new(setting_engine));
        self
    }
}
