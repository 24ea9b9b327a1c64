use crate::SubscriberId;

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::Extensions;

#[test]
fn given_socket_addr_when_converted_then_ip_and_port() {
    let addr: SocketAddr = "127.0.0.1:54321".parse().unwrap();

    assert_eq!(SubscriberId::from(addr).as_str(), "127.0.0.1:54321");
}

#[test]
fn given_connect_info_in_extensions_when_read_then_peer_address_used() {
    let addr: SocketAddr = "10.1.2.3:4000".parse().unwrap();
    let mut extensions = Extensions::new();
    extensions.insert(ConnectInfo(addr));

    assert_eq!(
        SubscriberId::from_extensions(&extensions),
        SubscriberId::new("10.1.2.3:4000")
    );
}

#[test]
fn given_no_connect_info_when_read_then_unknown() {
    let extensions = Extensions::new();

    assert_eq!(SubscriberId::from_extensions(&extensions), SubscriberId::unknown());
}
