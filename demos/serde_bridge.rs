use bytesconv::BytesSerde;

fn main() {
    let wrapped = BytesSerde(vec![0xDEu8, 0xAD, 0xBE, 0xEF]);
    let json = serde_json::to_string(&wrapped).unwrap();
    println!("json: {json}");

    let decoded: BytesSerde<Vec<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, wrapped);

    let text: Result<BytesSerde<String>, _> = serde_json::from_str(&json);
    println!("as String: {:?}", text.map(BytesSerde::into_inner));
}
