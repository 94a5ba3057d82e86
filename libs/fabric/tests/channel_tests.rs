use std::time::Duration;

use serde::{Deserialize, Serialize};
use waypoint_core::{
    BodyKind, Data, Envelope, Message, Metadata, Payload, ProcessingInstance, RequestBody,
    RequestEnvelope, ResponseEnvelope, ResponseStatus, Route, SwapMode,
};
use waypoint_fabric::{
    channel::Channel,
    codec::JsonCodec,
    error::Error,
    request::{request, send},
    transport::{MemoryTransport, Transport},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Verdict {
    language: String,
    score: u32,
}

fn request_envelope() -> RequestEnvelope {
    Envelope::new(
        Route::new(
            "2cf16549d989b25fdd1bb6251",
            ProcessingInstance::new("content_validation", "0").with_correlation_id("378df32521"),
            ProcessingInstance::new("language_validator", "1").with_node("node-7"),
        ),
        RequestBody::new(
            Data::new("This is a new content.").with_option("threshold", "98"),
            Metadata {
                retry_number: 1,
                processing_time_nanos: "13243438".to_string(),
                request_stamp: "2024-05-06T09:32:04Z".to_string(),
            },
        ),
    )
}

#[tokio::test]
async fn memory_send_receive_single_frame() {
    let (mut a, mut b) = MemoryTransport::pair();

    a.send(b"hello world").await.unwrap();
    let received = b.receive().await.unwrap();

    assert_eq!(received, b"hello world");
}

#[tokio::test]
async fn memory_multiple_frames_preserve_boundaries() {
    let (mut a, mut b) = MemoryTransport::pair();
    let frames = vec![b"first".to_vec(), b"second".to_vec(), b"third".to_vec()];

    for frame in &frames {
        a.send(frame).await.unwrap();
    }
    for frame in &frames {
        assert_eq!(&b.receive().await.unwrap(), frame);
    }
}

#[tokio::test]
async fn memory_receive_timeout_fires() {
    let (mut client, _server) = MemoryTransport::builder()
        .receive_timeout(Duration::from_millis(50))
        .pair();

    match client.receive().await.unwrap_err() {
        Error::Custom(msg) => assert!(msg.contains("timeout")),
        e => panic!("Expected timeout error, got {:?}", e),
    }
}

#[tokio::test]
async fn memory_send_timeout_fires_when_peer_is_full() {
    let (mut client, _server) = MemoryTransport::builder()
        .capacity(1)
        .send_timeout(Duration::from_millis(20))
        .pair();

    client.send(b"fills the buffer").await.unwrap();

    match client.send(b"blocked").await.unwrap_err() {
        Error::Custom(msg) => assert!(msg.contains("timeout")),
        e => panic!("Expected timeout error, got {:?}", e),
    }
}

#[tokio::test]
async fn connection_closed_error() {
    let (mut client, mut server) = MemoryTransport::pair();

    server.close().await.unwrap();

    match client.receive().await.unwrap_err() {
        Error::ConnectionClosed => {}
        e => panic!("Expected ConnectionClosed, got {:?}", e),
    }
    match server.send(b"late").await.unwrap_err() {
        Error::ConnectionClosed => {}
        e => panic!("Expected ConnectionClosed, got {:?}", e),
    }
}

#[tokio::test]
async fn channel_request_round_trip() {
    let (mut client, mut server) = Channel::memory_pair(JsonCodec::default());

    client.send(&request_envelope()).await.unwrap();
    let received: RequestEnvelope = server.receive().await.unwrap();

    assert_eq!(received, request_envelope());
}

#[tokio::test]
async fn channel_reply_swaps_route_asynchronously() {
    let (mut client, mut server) = Channel::memory_pair(JsonCodec::default());

    client.send(&request_envelope()).await.unwrap();

    let incoming = match server.receive_message(BodyKind::Request).await.unwrap() {
        Message::Request(envelope) => envelope,
        other => panic!("Expected request, got {:?}", other),
    };
    server.reply(incoming, SwapMode::Asynchronous).await.unwrap();

    let echoed: RequestEnvelope = client.receive().await.unwrap();
    assert_eq!(echoed.route.correlation_key, "2cf16549d989b25fdd1bb6251");
    assert_eq!(echoed.route.origin, request_envelope().route.destination);
    assert_eq!(
        echoed.route.destination,
        ProcessingInstance::new("content_validation", "0")
    );
    assert_eq!(echoed.body, request_envelope().body);
}

#[tokio::test]
async fn one_off_request_returns_response() {
    let (client, server) = MemoryTransport::pair();

    let responder = tokio::spawn(async move {
        let mut channel = Channel::from_transport(server, JsonCodec::default());
        let incoming: RequestEnvelope = channel.receive().await.unwrap();

        let verdict = Verdict {
            language: "en".to_string(),
            score: 98,
        };
        let response = ResponseEnvelope::respond_to(
            &incoming,
            SwapMode::Synchronous,
            Payload::from_value(&verdict).unwrap(),
            ResponseStatus::new(200, "OK"),
        );
        channel.send(&response).await.unwrap();
    });

    let response = request(client, &request_envelope(), JsonCodec::default())
        .await
        .unwrap();
    responder.await.unwrap();

    assert_eq!(response.body.status, ResponseStatus::new(200, "OK"));
    assert_eq!(response.route.destination, request_envelope().route.origin);
    assert_eq!(
        response.body.data.decode::<Verdict>().unwrap(),
        Verdict {
            language: "en".to_string(),
            score: 98,
        }
    );
}

#[tokio::test]
async fn relay_forwards_generic_envelope_untouched() {
    let (producer, relay_in) = MemoryTransport::pair();
    let (mut relay_out, consumer) = MemoryTransport::pair();

    send(producer, &request_envelope(), JsonCodec::default())
        .await
        .unwrap();

    // The relay reads the envelope without knowing its body shape
    let mut inbound = Channel::from_transport(relay_in, JsonCodec::default());
    let forwarded = match inbound.receive_message(BodyKind::Generic).await.unwrap() {
        Message::Generic(envelope) => envelope,
        other => panic!("Expected generic, got {:?}", other),
    };
    let bytes = forwarded.to_vec().unwrap();
    relay_out.send(&bytes).await.unwrap();

    let mut terminal = Channel::from_transport(consumer, JsonCodec::default());
    let delivered: RequestEnvelope = terminal.receive().await.unwrap();
    assert_eq!(delivered, request_envelope());
}

#[tokio::test]
async fn undecodable_frame_is_decode_error() {
    let (mut raw, server) = MemoryTransport::pair();
    let mut channel = Channel::from_transport(server, JsonCodec::default());

    raw.send(br#"{"msg":{}}"#).await.unwrap();

    let err = channel.receive::<RequestEnvelope>().await.unwrap_err();
    assert!(err.is_decode());
}
