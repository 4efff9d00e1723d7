extern crate std;

use super::samples;
use crate::{Bytes, FromBytes, ToBytes};

#[test]
fn identity_returns_input() {
    for buf in samples() {
        assert_eq!(Bytes::try_from_bytes(buf.clone()), Some(buf));
    }
}

#[test]
fn identity_of_empty_buffer() {
    let out = Bytes::try_from_bytes(Bytes::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn identity_round_trip() {
    for buf in samples() {
        let value = Bytes::try_from_bytes(buf.clone()).unwrap();
        assert_eq!(value.to_bytes(), buf);
    }
}

#[test]
fn to_bytes_shares_storage() {
    let buf = Bytes::from(std::vec![1u8, 2, 3, 4]);
    let out = buf.to_bytes();
    assert_eq!(out.as_ptr(), buf.as_ptr());
    assert_eq!(out.len(), buf.len());
}

#[test]
fn conversion_is_idempotent() {
    let buf = Bytes::from_static(b"\x01\x02\xff");
    let once = Bytes::try_from_bytes(buf.clone()).unwrap();
    let twice = Bytes::try_from_bytes(once.clone()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice, buf);
}
