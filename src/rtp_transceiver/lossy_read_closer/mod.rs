
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, Mutex};

use crate::error::{Error, Result};
use crate::rtp_transceiver::SSRC;
use crate::srtp_transport::SrtpReadStream;
use crate::utilities::gate::Gate;

/// LossyReadCloser wraps a SrtpReadStream so that a slow reader never stalls
/// the stream. A background task drains the stream into a ring of
/// `buffer_packets` packets; once the ring is full the oldest unread packets
/// are overwritten.
pub struct LossyReadCloser {
    ssrc: SSRC,
    stream: Arc<dyn SrtpReadStream + Send + Sync>,
    packets_rx: Mutex<broadcast::Receiver<Bytes>>,
    read_err: Arc<Mutex<Option<Error>>>,
    done: Arc<Gate>,
    closing: AtomicBool,
}

impl LossyReadCloser {
    pub fn new(
        stream: Arc<dyn SrtpReadStream + Send + Sync>,
        ssrc: SSRC,
        buffer_packets: usize,
        receive_mtu: usize,
    ) -> Self {
        let (packets_tx, packets_rx) = broadcast::channel(buffer_packets.max(1));
        let read_err = Arc::new(Mutex::new(None));
        let done = Arc::new(Gate::new());

        tokio::spawn(LossyReadCloser::read_loop(
            Arc::clone(&stream),
            ssrc,
            receive_mtu,
            packets_tx,
            Arc::clone(&read_err),
            Arc::clone(&done),
        ));

        LossyReadCloser {
            ssrc,
            stream,
            packets_rx: Mutex::new(packets_rx),
            read_err,
            done,
            closing: AtomicBool::new(false),
        }
    }

    async fn read_loop(
        stream: Arc<dyn SrtpReadStream + Send + Sync>,
        ssrc: SSRC,
        receive_mtu: usize,
        packets_tx: broadcast::Sender<Bytes>,
        read_err: Arc<Mutex<Option<Error>>>,
        done: Arc<Gate>,
    ) {
        let mut b = vec![0u8; receive_mtu];
        loop {
            let result = tokio::select! {
                biased;
                _ = done.wait() => break,
                result = stream.read(&mut b) => result,
            };

            match result {
                Ok(n) => {
                    // send only fails once the reader side is gone
                    if packets_tx.send(Bytes::copy_from_slice(&b[..n])).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    if !done.is_closed() {
                        log::debug!("lossy read stream for ssrc {} read error: {}", ssrc, err);
                        let mut read_err = read_err.lock().await;
                        *read_err = Some(err);
                    }
                    break;
                }
            }
        }

        log::trace!("lossy read loop for ssrc {} exited", ssrc);
    }

    pub fn ssrc(&self) -> SSRC {
        self.ssrc
    }

    /// read copies the oldest retained packet into buf. Packets overwritten
    /// while nobody was reading are skipped.
    pub async fn read(&self, buf: &mut [u8]) -> Result<usize> {
        let mut packets_rx = self.packets_rx.lock().await;
        loop {
            match packets_rx.recv().await {
                Ok(pkt) => {
                    if buf.len() < pkt.len() {
                        return Err(Error::ErrShortBuffer);
                    }
                    buf[..pkt.len()].copy_from_slice(&pkt);
                    return Ok(pkt.len());
                }
                Err(RecvError::Lagged(n)) => {
                    log::debug!(
                        "lossy read stream for ssrc {} dropped {} packets",
                        self.ssrc,
                        n
                    );
                    continue;
                }
                Err(RecvError::Closed) => {
                    let mut read_err = self.read_err.lock().await;
                    return Err(read_err.take().unwrap_or(Error::ErrClosedPipe));
                }
            }
        }
    }

    /// closed_by_owner reports whether close has been called and has not
    /// failed. Errors read after that point come from the close itself.
    pub fn closed_by_owner(&self) -> bool {
        self.closing.load(Ordering::SeqCst)
    }

    /// close closes the underlying stream and stops draining it. A failed
    /// close leaves the stream draining so close can be tried again.
    pub async fn close(&self) -> Result<()> {
        self.closing.store(true, Ordering::SeqCst);
        if let Err(err) = self.stream.close().await {
            self.closing.store(false, Ordering::SeqCst);
            return Err(err);
        }
        self.done.close();
        Ok(())
    }
}

impl Drop for LossyReadCloser {
    fn drop(&mut self) {
        // the pump holds its own reference to the stream
        self.done.close();
    }
}
