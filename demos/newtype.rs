use bytesconv::{Bytes, ConvertExt, DeriveFromBytes, DeriveToBytes, ToBytes};

#[derive(DeriveToBytes, DeriveFromBytes, Debug, PartialEq)]
struct Username(String);

fn main() {
    let user = Username(String::from("ferris"));
    let wire = user.to_bytes();
    println!("serialized: {:?}", &wire[..]);

    let decoded: Username = wire.convert().unwrap();
    println!("deserialized: {decoded:?}");
    assert_eq!(decoded, user);

    assert!(Bytes::from_static(&[0xC3]).convert::<Username>().is_none());
}
