use bytesconv::{Bytes, ConvertExt, FromBytes, ToBytes};

fn main() {
    // Text
    let wire = Bytes::from_static(&[0x68, 0x69]);
    let text: String = wire.clone().convert().unwrap();
    println!("String: {text:?}");
    assert_eq!(text.to_bytes(), wire);

    // Not every buffer is text
    let bad = Bytes::from_static(&[0xFF]);
    println!("0xFF as String: {:?}", bad.clone().convert::<String>());
    if let Err(err) = bad.clone().try_convert::<String>() {
        println!("error: {err}");
    }

    // Raw bytes accept anything
    let raw = Vec::<u8>::try_from_bytes(bad.clone()).unwrap();
    println!("Vec<u8>: {raw:?}");
    assert_eq!(raw.to_bytes(), bad);

    // Identity
    let same: Bytes = bad.clone().convert().unwrap();
    assert_eq!(same, bad);
}
