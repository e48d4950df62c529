
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::rtp_transceiver::lossy_read_closer::LossyReadCloser;
use crate::rtp_transceiver::rtp_codec::RTPCodecType;
use crate::rtp_transceiver::{RTCRtpReceiveParameters, SSRC};
use crate::srtp_transport::{SrtpReadStream, SrtpTransport};
use crate::track::track_remote::TrackRemote;
use crate::utilities::gate::Gate;

/// Everything receive publishes. Either all of it is present or none of it;
/// stop may remove the read streams it managed to close.
#[derive(Default)]
struct ReceiverStreams {
    track: Option<Arc<TrackRemote>>,
    rtp_read_stream: Option<Arc<LossyReadCloser>>,
    rtcp_read_stream: Option<Arc<LossyReadCloser>>,
}

pub struct RTPReceiverInternal {
    pub(crate) kind: RTPCodecType,
    streams: RwLock<ReceiverStreams>,

    received: Gate,
    closed: Gate,
}

impl RTPReceiverInternal {
    /// wait_for_read_stream blocks until the receiver is either started or
    /// stopped. Stopped always wins, including when both fire together.
    async fn wait_for_read_stream(
        &self,
        pick: fn(&ReceiverStreams) -> Option<Arc<LossyReadCloser>>,
    ) -> Result<Arc<LossyReadCloser>> {
        tokio::select! {
            biased;
            _ = self.closed.wait() => return Err(Error::ErrRTPReceiverStopped),
            _ = self.received.wait() => {}
        }

        // receive still holds the write lock until its streams are published
        let streams = self.streams.read().await;
        if self.closed.is_closed() {
            return Err(Error::ErrRTPReceiverStopped);
        }

        // a failed receive leaves nothing to read from
        pick(&*streams).ok_or(Error::ErrRTPReceiverStopped)
    }

    async fn read_from(&self, read_stream: &LossyReadCloser, b: &mut [u8]) -> Result<usize> {
        tokio::select! {
            biased;
            _ = self.closed.wait() => Err(Error::ErrRTPReceiverStopped),
            result = read_stream.read(b) => match result {
                // stop is tearing this stream down but has not finished yet
                Err(_) if read_stream.closed_by_owner() => Err(Error::ErrRTPReceiverStopped),
                result => result,
            },
        }
    }

    /// read reads incoming RTCP for this RTPReceiver
    async fn read(&self, b: &mut [u8]) -> Result<usize> {
        let rtcp_read_stream = self
            .wait_for_read_stream(|streams| streams.rtcp_read_stream.clone())
            .await?;
        self.read_from(&rtcp_read_stream, b).await
    }

    /// read_rtcp is a convenience method that wraps read and unmarshal for you.
    async fn read_rtcp(
        &self,
        b: &mut [u8],
    ) -> Result<Vec<Box<dyn rtcp::packet::Packet + Send + Sync>>> {
        let n = self.read(b).await?;

        let mut buf = &b[..n];
        let pkts = rtcp::packet::unmarshal(&mut buf)?;

        Ok(pkts)
    }

    /// read_rtp should only be called by a track, this only exists so we can keep state in one place
    pub(crate) async fn read_rtp(&self, b: &mut [u8]) -> Result<usize> {
        let rtp_read_stream = self
            .wait_for_read_stream(|streams| streams.rtp_read_stream.clone())
            .await?;
        self.read_from(&rtp_read_stream, b).await
    }
}

/// close_read_stream closes the read stream in slot and empties the slot.
/// On failure the stream is put back so a later stop can retry it.
async fn close_read_stream(slot: &mut Option<Arc<LossyReadCloser>>) -> Option<Error> {
    let read_stream = slot.take()?;
    match read_stream.close().await {
        Ok(()) => None,
        Err(err) => {
            *slot = Some(read_stream);
            Some(err)
        }
    }
}

/// RTPReceiver allows an application to inspect the receipt of a TrackRemote
pub struct RTCRtpReceiver {
    receive_mtu: usize,
    receive_buffer_packets: usize,
    kind: RTPCodecType,
    transport: Arc<dyn SrtpTransport + Send + Sync>,

    pub internal: Arc<RTPReceiverInternal>,
}

impl RTCRtpReceiver {
    pub fn new(
        receive_mtu: usize,
        receive_buffer_packets: usize,
        kind: RTPCodecType,
        transport: Option<Arc<dyn SrtpTransport + Send + Sync>>,
    ) -> Result<Self> {
        let transport = transport.ok_or(Error::ErrRTPReceiverTransportNil)?;

        Ok(RTCRtpReceiver {
            receive_mtu,
            receive_buffer_packets,
            kind,
            transport,

            internal: Arc::new(RTPReceiverInternal {
                kind,
                streams: RwLock::new(ReceiverStreams::default()),
                received: Gate::new(),
                closed: Gate::new(),
            }),
        })
    }

    pub fn kind(&self) -> RTPCodecType {
        self.kind
    }

    /// transport returns the transport this receiver reads from
    pub fn transport(&self) -> Arc<dyn SrtpTransport + Send + Sync> {
        Arc::clone(&self.transport)
    }

    /// track returns the TrackRemote, or None before receive has produced one
    pub async fn track(&self) -> Option<Arc<TrackRemote>> {
        let streams = self.internal.streams.read().await;
        streams.track.clone()
    }

    /// receive initialize the track and starts all the transports.
    ///
    /// It can be called once. A failed call still counts: any further call
    /// returns `ErrRTPReceiverReceiveAlreadyCalled`.
    pub async fn receive(&self, parameters: &RTCRtpReceiveParameters) -> Result<()> {
        let mut streams = self.internal.streams.write().await;

        if self.internal.received.is_closed() {
            return Err(Error::ErrRTPReceiverReceiveAlreadyCalled);
        }
        if self.internal.closed.is_closed() {
            return Err(Error::ErrRTPReceiverStopped);
        }
        self.internal.received.close();

        let ssrc = parameters.encoding.ssrc;
        let track = Arc::new(TrackRemote::new(
            self.receive_mtu,
            self.kind,
            ssrc,
            parameters.encoding.rid.clone(),
            parameters.encoding.payload_type,
            Arc::downgrade(&self.internal),
        ));

        let (rtp_read_stream, rtcp_read_stream) = self.open_read_streams(ssrc).await?;

        streams.track = Some(track);
        streams.rtp_read_stream = Some(Arc::new(LossyReadCloser::new(
            rtp_read_stream,
            ssrc,
            self.receive_buffer_packets,
            self.receive_mtu,
        )));
        streams.rtcp_read_stream = Some(Arc::new(LossyReadCloser::new(
            rtcp_read_stream,
            ssrc,
            self.receive_buffer_packets,
            self.receive_mtu,
        )));

        log::debug!("RTPReceiver({}) started for ssrc {}", self.kind, ssrc);

        Ok(())
    }

    async fn open_read_streams(
        &self,
        ssrc: SSRC,
    ) -> Result<(
        Arc<dyn SrtpReadStream + Send + Sync>,
        Arc<dyn SrtpReadStream + Send + Sync>,
    )> {
        let srtp_session = self.transport.get_srtp_session().await?;
        let rtp_read_stream = srtp_session
            .open_read_stream(ssrc)
            .await
            .map_err(|err| Error::ErrStreamOpenFailed {
                ssrc,
                source: Box::new(err),
            })?;

        let rtcp_read_stream = match self.transport.get_srtcp_session().await {
            Ok(srtcp_session) => srtcp_session.open_read_stream(ssrc).await.map_err(|err| {
                Error::ErrStreamOpenFailed {
                    ssrc,
                    source: Box::new(err),
                }
            }),
            Err(err) => Err(err),
        };

        match rtcp_read_stream {
            Ok(rtcp_read_stream) => Ok((rtp_read_stream, rtcp_read_stream)),
            Err(err) => {
                if let Err(close_err) = rtp_read_stream.close().await {
                    log::warn!(
                        "failed to close SRTP read stream for ssrc {}: {}",
                        ssrc,
                        close_err
                    );
                }
                Err(err)
            }
        }
    }

    /// read reads incoming RTCP for this RTPReceiver
    pub async fn read(&self, b: &mut [u8]) -> Result<usize> {
        self.internal.read(b).await
    }

    /// read_rtcp is a convenience method that wraps read and unmarshal for you.
    pub async fn read_rtcp(
        &self,
        b: &mut [u8],
    ) -> Result<Vec<Box<dyn rtcp::packet::Packet + Send + Sync>>> {
        self.internal.read_rtcp(b).await
    }

    /// read_media reads incoming RTP for this RTPReceiver, exactly as the
    /// track does.
    pub async fn read_media(&self, b: &mut [u8]) -> Result<usize> {
        self.internal.read_rtp(b).await
    }

    pub fn have_received(&self) -> bool {
        self.internal.received.is_closed()
    }

    pub fn have_stopped(&self) -> bool {
        self.internal.closed.is_closed()
    }

    /// stop irreversibly stops the RTPReceiver. Stopping a stopped receiver
    /// is a no-op. If a read stream fails to close the receiver is left
    /// running and stop may be called again.
    pub async fn stop(&self) -> Result<()> {
        let mut streams = self.internal.streams.write().await;

        if self.internal.closed.is_closed() {
            return Ok(());
        }

        if self.internal.received.is_closed() {
            let mut errs = vec![];
            if let Some(err) = close_read_stream(&mut streams.rtcp_read_stream).await {
                errs.push(err);
            }
            if let Some(err) = close_read_stream(&mut streams.rtp_read_stream).await {
                errs.push(err);
            }

            let mut errs = errs.into_iter();
            if let Some(first) = errs.next() {
                for err in errs {
                    log::warn!("RTPReceiver({}) stop: {}", self.kind, err);
                }
                return Err(first);
            }
        }

        self.internal.closed.close();
        log::debug!("RTPReceiver({}) stopped", self.kind);

        Ok(())
    }
}
