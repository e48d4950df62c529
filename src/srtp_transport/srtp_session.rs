use std::sync::Arc;

use async_trait::async_trait;
use srtp::session::Session;
use srtp::stream::Stream;

use super::{SrtpReadStream, SrtpSession};
use crate::error::Result;
use crate::rtp_transceiver::SSRC;

#[async_trait]
impl SrtpReadStream for Stream {
    async fn read(&self, buf: &mut [u8]) -> Result<usize> {
        Ok(Stream::read(self, buf).await?)
    }

    async fn close(&self) -> Result<()> {
        Ok(Stream::close(self).await?)
    }
}

#[async_trait]
impl SrtpSession for Session {
    async fn open_read_stream(&self, ssrc: SSRC) -> Result<Arc<dyn SrtpReadStream + Send + Sync>> {
        let stream = self.open(ssrc).await;
        Ok(stream as Arc<dyn SrtpReadStream + Send + Sync>)
    }
}
