use super::*;

fn sample_payload() -> EchoPayload {
    EchoPayload {
        number: 9,
        name: "john".to_owned(),
    }
}

#[test]
fn encode_decode_round_trip_preserves_payload() {
    let payload = sample_payload();
    let bytes = encode_payload(&payload);
    let decoded = decode_payload(&bytes).expect("decode should succeed");
    assert_eq!(decoded, payload);
}

#[test]
fn encoded_bytes_match_wire_contract() {
    // field 1 as a varint, field 2 length-delimited
    let bytes = encode_payload(&sample_payload());
    assert_eq!(bytes, [0x08, 0x09, 0x12, 0x04, b'j', b'o', b'h', b'n']);
}

#[test]
fn default_payload_encodes_empty() {
    let bytes = encode_payload(&EchoPayload::default());
    assert!(bytes.is_empty());
}

#[test]
fn empty_bytes_decode_to_default_payload() {
    let decoded = decode_payload(&[]).expect("empty input decodes");
    assert_eq!(decoded, EchoPayload::default());
}

#[test]
fn decode_payload_rejects_malformed_bytes() {
    assert!(decode_payload(&[0xff, 0x00, 0x01]).is_err());
}

#[test]
fn negative_numbers_round_trip() {
    let payload = EchoPayload {
        number: -7,
        name: String::new(),
    };
    let decoded = decode_payload(&encode_payload(&payload)).expect("decode");
    assert_eq!(decoded, payload);
}
