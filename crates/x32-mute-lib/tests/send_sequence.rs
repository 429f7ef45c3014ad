//! Integration tests: config file → message → one datagram on a loopback socket.
//!
//! The receiver binds an ephemeral port so these tests do not need the
//! console's fixed port to be free.

use std::net::UdpSocket;
use std::time::Duration;

use rosc::{OscPacket, OscType, decoder};
use x32_mute_lib::command::MuteCommand;
use x32_mute_lib::config::MixerConfig;
use x32_mute_lib::mute::send_mute;
use x32_mute_lib::transport::UdpLink;

/// Helper: bind a loopback receiver with a read timeout.
fn receiver() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

/// Helper: receive one datagram and decode it as a single OSC message.
fn recv_message(socket: &UdpSocket) -> rosc::OscMessage {
    let mut buf = [0u8; 1024];
    let (len, _) = socket.recv_from(&mut buf).unwrap();
    let (rest, packet) = decoder::decode_udp(&buf[..len]).unwrap();
    assert!(rest.is_empty(), "datagram should hold exactly one packet");
    match packet {
        OscPacket::Message(m) => m,
        OscPacket::Bundle(_) => panic!("expected a message, got a bundle"),
    }
}

/// Helper: assert nothing else arrives.
fn assert_no_more(socket: &UdpSocket) {
    socket
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buf = [0u8; 64];
    assert!(socket.recv_from(&mut buf).is_err(), "expected a single datagram");
}

#[test]
fn mute_channel_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x32-mute");
    std::fs::write(&path, "[x32]\nip = 127.0.0.1\n\n[channel]\nnumber = 12\n").unwrap();
    let loaded = MixerConfig::load_from(&path);
    assert!(loaded.warnings.is_empty());

    let (socket, port) = receiver();
    let link = UdpLink::connect(&loaded.config.address, port).unwrap();
    let report = send_mute(&link, MuteCommand::Mute, &loaded.config).unwrap();
    drop(link);

    let msg = recv_message(&socket);
    assert_eq!(msg.addr, "/ch/12/mix/on");
    assert_eq!(msg.args, vec![OscType::Int(0)]);
    assert_eq!(report.channel, 12);
    assert_no_more(&socket);
}

#[test]
fn unmute_with_defaults_when_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = MixerConfig::load_from(&dir.path().join("absent"));
    assert!(!loaded.found);

    let (socket, port) = receiver();
    let link = UdpLink::connect(&loaded.config.address, port).unwrap();
    send_mute(&link, MuteCommand::Unmute, &loaded.config).unwrap();

    let msg = recv_message(&socket);
    assert_eq!(msg.addr, "/ch/37/mix/on");
    assert_eq!(msg.args, vec![OscType::Int(1)]);
}

#[test]
fn bad_channel_falls_back_and_still_sends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x32-mute");
    std::fs::write(&path, "[channel]\nnumber = abc\n").unwrap();
    let loaded = MixerConfig::load_from(&path);
    assert_eq!(loaded.warnings.len(), 1);

    let (socket, port) = receiver();
    let link = UdpLink::connect(&loaded.config.address, port).unwrap();
    send_mute(&link, MuteCommand::Mute, &loaded.config).unwrap();

    let msg = recv_message(&socket);
    assert_eq!(msg.addr, "/ch/37/mix/on");
}

#[test]
fn single_digit_channel_is_padded_on_the_wire() {
    let config = MixerConfig {
        address: "127.0.0.1".into(),
        channel: 5,
    };
    let (socket, port) = receiver();
    let link = UdpLink::connect(&config.address, port).unwrap();
    send_mute(&link, MuteCommand::Mute, &config).unwrap();

    assert_eq!(recv_message(&socket).addr, "/ch/05/mix/on");
}
