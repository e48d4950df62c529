
pub mod srtp_session;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::rtp_transceiver::SSRC;

/// SrtpReadStream is a decrypted, packet-oriented byte source for a single
/// SSRC. Each read returns at most one packet.
#[async_trait]
pub trait SrtpReadStream {
    async fn read(&self, buf: &mut [u8]) -> Result<usize>;
    async fn close(&self) -> Result<()>;
}

/// SrtpSession demultiplexes a secured RTP or RTCP flow into per-SSRC
/// read streams.
#[async_trait]
pub trait SrtpSession {
    async fn open_read_stream(&self, ssrc: SSRC) -> Result<Arc<dyn SrtpReadStream + Send + Sync>>;
}

/// SrtpTransport yields the secured sessions a RTPReceiver reads from,
/// one for media and one for control feedback.
#[async_trait]
pub trait SrtpTransport {
    async fn get_srtp_session(&self) -> Result<Arc<dyn SrtpSession + Send + Sync>>;
    async fn get_srtcp_session(&self) -> Result<Arc<dyn SrtpSession + Send + Sync>>;
}

#[derive(Default)]
struct SrtpSessions {
    srtp_session: Option<Arc<dyn SrtpSession + Send + Sync>>,
    srtcp_session: Option<Arc<dyn SrtpSession + Send + Sync>>,
}

/// RTCSrtpTransport holds the SRTP and SRTCP sessions produced once the
/// secure handshake has finished. Until start is called, or after stop,
/// both session getters fail.
#[derive(Default)]
pub struct RTCSrtpTransport {
    sessions: Mutex<SrtpSessions>,
}

impl RTCSrtpTransport {
    pub fn new() -> Self {
        RTCSrtpTransport::default()
    }

    /// start installs the sessions negotiated by the secure handshake.
    pub async fn start(
        &self,
        srtp_session: Arc<dyn SrtpSession + Send + Sync>,
        srtcp_session: Arc<dyn SrtpSession + Send + Sync>,
    ) {
        let mut sessions = self.sessions.lock().await;
        sessions.srtp_session = Some(srtp_session);
        sessions.srtcp_session = Some(srtcp_session);
    }

    /// stop forgets both sessions. Closing them belongs to whoever created them.
    pub async fn stop(&self) {
        let mut sessions = self.sessions.lock().await;
        sessions.srtp_session.take();
        sessions.srtcp_session.take();
    }

    pub async fn is_started(&self) -> bool {
        let sessions = self.sessions.lock().await;
        sessions.srtp_session.is_some() && sessions.srtcp_session.is_some()
    }
}

#[async_trait]
impl SrtpTransport for RTCSrtpTransport {
    async fn get_srtp_session(&self) -> Result<Arc<dyn SrtpSession + Send + Sync>> {
        let sessions = self.sessions.lock().await;
        sessions
            .srtp_session
            .clone()
            .ok_or(Error::ErrSRTPSessionNotStarted)
    }

    async fn get_srtcp_session(&self) -> Result<Arc<dyn SrtpSession + Send + Sync>> {
        let sessions = self.sessions.lock().await;
        sessions
            .srtcp_session
            .clone()
            .ok_or(Error::ErrSRTCPSessionNotStarted)
    }
}
