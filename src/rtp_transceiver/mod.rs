pub mod lossy_read_closer;
pub mod rtp_codec;
pub mod rtp_receiver;

/// SSRC represents a synchronization source
/// A synchronization source is a randomly chosen
/// value meant to be globally unique within a particular
/// RTP session. Used to identify a single stream of media.
/// <https://tools.ietf.org/html/rfc3550#section-3>
#[allow(clippy::upper_case_acronyms)]
pub type SSRC = u32;

/// PayloadType identifies the format of the RTP payload and determines
/// its interpretation by the application. Each codec in a RTP Session
/// will have a different PayloadType
/// <https://tools.ietf.org/html/rfc3550#section-3>
pub type PayloadType = u8;

/// RTCRtpDecodingParameters provides information relating to both encoding and decoding.
/// This is a subset of the RFC since no decoding happens at this layer
/// <http://draft.ortc.org/#dom-rtcrtpdecodingparameters>
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RTCRtpDecodingParameters {
    pub rid: String,
    pub ssrc: SSRC,
    pub payload_type: PayloadType,
}

/// RTCRtpReceiveParameters contains the RTP stack settings used by receivers
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RTCRtpReceiveParameters {
    pub encoding: RTCRtpDecodingParameters,
}

impl RTCRtpReceiveParameters {
    pub fn new(ssrc: SSRC) -> Self {
        RTCRtpReceiveParameters {
            encoding: RTCRtpDecodingParameters {
                ssrc,
                ..Default::default()
            },
        }
    }
}
