mod common;

use common::{connect_subscribers, create_test_server, publish};

use ps_relay::Message;

#[tokio::test]
async fn given_ten_subscribers_when_three_messages_published_then_all_receive_in_order() {
    // Given
    let test_server = create_test_server();
    let mut clients = connect_subscribers(&test_server, 10).await;
    let messages = ["first message", "second message", "third message"];

    for body in messages {
        // When
        publish(&test_server, body).await.assert_status_ok();

        // Then
        for client in &mut clients {
            let received = client.receive_message().await;
            assert_eq!(received.body(), body);
        }
    }

    for client in clients {
        client.close().await;
    }
}

#[tokio::test]
async fn given_subscribers_when_back_to_back_publishes_then_frames_arrive_whole_and_ordered() {
    // Given
    let test_server = create_test_server();
    let mut clients = connect_subscribers(&test_server, 3).await;

    // When - publish without reading in between
    publish(&test_server, "one").await.assert_status_ok();
    publish(&test_server, "two").await.assert_status_ok();

    // Then - every frame parses on its own and order is kept
    for client in &mut clients {
        assert_eq!(client.receive_message().await, Message::new("one"));
        assert_eq!(client.receive_message().await, Message::new("two"));
    }
}

#[tokio::test]
async fn given_closed_subscriber_when_publish_then_others_still_receive() {
    // Given - first of three subscribers hangs up
    let test_server = create_test_server();
    let mut clients = connect_subscribers(&test_server, 3).await;
    let gone = clients.remove(0);
    gone.close().await;

    // When - publish a few times so writes to the dead socket start failing
    for body in ["a", "b", "c"] {
        publish(&test_server, body).await.assert_status_ok();
    }

    // Then
    for client in &mut clients {
        for body in ["a", "b", "c"] {
            assert_eq!(client.receive_message().await.body(), body);
        }
    }
    assert_eq!(test_server.app_state.registry.subscriber_count(), 3);
}
