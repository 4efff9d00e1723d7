extern crate std;

mod buffer;



use std::{string::String, vec::Vec};

use crate::{Bytes, FromBytes, ToBytes};

/// Sample buffers shared across conformer tests, including edge cases.
fn samples() -> Vec<Bytes> {
    std::vec![
        Bytes::new(),
        Bytes::from_static(&[0x00]),
        Bytes::from_static(&[0xFF]),
        Bytes::from_static(b"hi"),
        Bytes::from_static("snowman \u{2603}, crab \u{1F980}".as_bytes()),
        Bytes::from_static(&[0xC3, 0x28]),
        Bytes::from((0..=255u8).collect::<Vec<u8>>()),
    ]
}

#[test]
fn empty_buffer_converts_for_every_conformer() {
    assert_eq!(String::try_from_bytes(Bytes::new()), Some(String::new()));
    assert_eq!(Vec::<u8>::try_from_bytes(Bytes::new()), Some(Vec::new()));
    assert_eq!(Bytes::try_from_bytes(Bytes::new()), Some(Bytes::new()));
}

#[test]
fn into_buffer_matches_to_bytes() {
    let text = String::from("caf\u{e9}");
    assert_eq!(text.clone().into_buffer(), text.to_bytes());

    let raw: Vec<u8> = std::vec![9, 8, 7];
    assert_eq!(raw.clone().into_buffer(), raw.to_bytes());

    let buf = Bytes::from_static(b"xyz");
    assert_eq!(buf.clone().into_buffer(), buf.to_bytes());

    let borrowed: &str = "abc";
    assert_eq!(borrowed.into_buffer(), borrowed.to_bytes());
}

#[test]
fn into_buffer_is_not_shadowed_by_inherent_methods() {
    // The result must be a Bytes, not String::into_bytes's Vec<u8>.
    let buf: Bytes = String::from("hi").into_buffer();
    assert_eq!(&buf[..], [0x68, 0x69]);
}

#[test]
fn byte_len_matches_encoding() {
    for buf in samples() {
        let raw = Vec::<u8>::try_from_bytes(buf.clone()).unwrap();
        assert_eq!(raw.byte_len(), raw.to_bytes().len());
        assert_eq!(buf.byte_len(), buf.len());

        if let Some(text) = String::try_from_bytes(buf) {
            assert_eq!(text.byte_len(), text.to_bytes().len());
        }
    }
}
