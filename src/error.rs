use thiserror::Error;

use crate::rtp_transceiver::SSRC;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// ErrRTPReceiverTransportNil indicates that a RTPReceiver was constructed
    /// without a transport to receive from.
    #[error("SRTP transport must not be nil")]
    ErrRTPReceiverTransportNil,

    /// ErrRTPReceiverReceiveAlreadyCalled indicates that receive was called
    /// more than once on the same RTPReceiver, whether or not the first call
    /// succeeded.
    #[error("Receive has already been called")]
    ErrRTPReceiverReceiveAlreadyCalled,

    /// ErrRTPReceiverStopped indicates an operation executed after the
    /// RTPReceiver has been stopped, or a read against a receiver whose
    /// activation never produced read streams.
    #[error("RTPReceiver has been stopped")]
    ErrRTPReceiverStopped,

    /// ErrSRTPSessionNotStarted indicates that the transport has no SRTP
    /// session yet.
    #[error("the SRTP session has not started yet")]
    ErrSRTPSessionNotStarted,

    /// ErrSRTCPSessionNotStarted indicates that the transport has no SRTCP
    /// session yet.
    #[error("the SRTCP session has not started yet")]
    ErrSRTCPSessionNotStarted,

    /// ErrStreamOpenFailed indicates that a session could not open a read
    /// stream for the given SSRC.
    #[error("failed to open read stream for SSRC {ssrc}: {source}")]
    ErrStreamOpenFailed {
        ssrc: SSRC,
        #[source]
        source: Box<Error>,
    },

    #[error("io: read/write on closed pipe")]
    ErrClosedPipe,
    #[error("buffer: short")]
    ErrShortBuffer,

    #[error("RtcpError: {0}")]
    ErrRtcpError(#[from] rtcp::Error),
    #[error("RtpError: {0}")]
    ErrRtpError(#[from] rtp::Error),
    #[error("SrtpError: {0}")]
    ErrSrtpError(#[from] srtp::Error),
    #[error("UtilError: {0}")]
    ErrUtilError(#[from] util::Error),

    #[error("Other errors: {0}")]
    ErrOthers(String),
}

impl Error {
    pub fn new(message: String) -> Self {
        Error::ErrOthers(message)
    }
}
