use super::*;

use crate::error::Error;
use crate::srtp_transport::srtp_transport_test::create_started_transport;

#[test]
fn test_new_api() -> Result<()> {
    let mut s = SettingEngine::default();
    s.set_receive_mtu(1200);
    s.set_receive_buffer_packets(32);

    let api = APIBuilder::new().with_setting_engine(s).build();

    assert_eq!(
        api.setting_engine.get_receive_mtu(),
        1200,
        "Failed to set settings engine"
    );
    assert_eq!(api.setting_engine.get_receive_buffer_packets(), 32);

    Ok(())
}

#[test]
fn test_new_api_defaults() {
    let api = APIBuilder::new().build();

    assert_eq!(api.setting_engine.get_receive_mtu(), crate::RECEIVE_MTU);
    assert_eq!(
        api.setting_engine.get_receive_buffer_packets(),
        crate::RECEIVE_BUFFER_PACKETS
    );
}

#[test]
fn test_new_rtp_receiver_without_transport() {
    let api = APIBuilder::new().build();

    let result = api.new_rtp_receiver(RTPCodecType::Audio, None);
    assert!(matches!(result, Err(Error::ErrRTPReceiverTransportNil)));
}

#[tokio::test]
async fn test_new_rtp_receiver() -> Result<()> {
    let api = APIBuilder::new().build();
    let (transport, _, _) = create_started_transport().await;

    let receiver = api.new_rtp_receiver(
        RTPCodecType::Video,
        Some(transport as Arc<dyn SrtpTransport + Send + Sync>),
    )?;

    assert_eq!(receiver.kind(), RTPCodecType::Video);
    assert!(receiver.track().await.is_none());
    assert!(!receiver.have_received());
    assert!(!receiver.have_stopped());

    Ok(())
}
