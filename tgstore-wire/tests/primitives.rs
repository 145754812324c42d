use tgstore_wire::{BOOL_FALSE_ID, BOOL_TRUE_ID, Error, WireBuffer};

// ── Integer round-trips ───────────────────────────────────────────────────────

#[test]
fn roundtrip_i32() {
    for v in [0i32, -1, 42, i32::MAX, i32::MIN] {
        let mut buf = WireBuffer::new();
        buf.write_i32(v);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.read_i32().unwrap(), v);
    }
}

#[test]
fn roundtrip_i64() {
    for v in [0i64, -1, 1_234_567_890, i64::MAX, i64::MIN] {
        let mut buf = WireBuffer::new();
        buf.write_i64(v);
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.read_i64().unwrap(), v);
    }
}

#[test]
fn roundtrip_f64() {
    for v in [0.0f64, -2.5, f64::MAX, f64::MIN_POSITIVE] {
        let mut buf = WireBuffer::new();
        buf.write_f64(v);
        assert_eq!(buf.read_f64().unwrap(), v);
    }
}

#[test]
fn integers_are_little_endian() {
    let mut buf = WireBuffer::new();
    buf.write_i32(0x0403_0201);
    assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0x03, 0x04]);
}

// ── Booleans ──────────────────────────────────────────────────────────────────

#[test]
fn bool_true_is_magic_tag() {
    let mut buf = WireBuffer::new();
    buf.write_bool(true);
    assert_eq!(buf.as_bytes(), BOOL_TRUE_ID.to_le_bytes());
    assert_eq!(buf.read_bool().unwrap(), true);
}

#[test]
fn bool_false_is_magic_tag() {
    let mut buf = WireBuffer::new();
    buf.write_bool(false);
    assert_eq!(buf.as_bytes(), BOOL_FALSE_ID.to_le_bytes());
    assert_eq!(buf.read_bool().unwrap(), false);
}

#[test]
fn bool_rejects_raw_byte_encoding() {
    let mut buf = WireBuffer::from_bytes(vec![1, 0, 0, 0]);
    assert_eq!(
        buf.read_bool(),
        Err(Error::UnexpectedConstructor { id: 1 })
    );
}

// ── Byte strings: padding and length prefixes ─────────────────────────────────

#[test]
fn short_string_padding() {
    // 1 length byte + 5 payload + 2 padding = 8
    let mut buf = WireBuffer::new();
    buf.write_bytes(b"hello");
    assert_eq!(buf.as_bytes(), &[5, b'h', b'e', b'l', b'l', b'o', 0, 0]);
    assert_eq!(buf.read_bytes().unwrap(), b"hello");
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn empty_string_is_one_word() {
    // 1 length byte + 0 payload + 3 padding = 4
    let mut buf = WireBuffer::new();
    buf.write_bytes(b"");
    assert_eq!(buf.as_bytes(), &[0, 0, 0, 0]);
    assert_eq!(buf.read_bytes().unwrap(), b"");
}

#[test]
fn boundary_253_stays_short_form() {
    let payload = vec![0xabu8; 253];
    let mut buf = WireBuffer::new();
    buf.write_bytes(&payload);
    assert_eq!(buf.as_bytes()[0], 253);
    // 1 + 253 = 254, padded to 256
    assert_eq!(buf.len(), 256);
    assert_eq!(buf.read_bytes().unwrap(), payload);
}

#[test]
fn boundary_254_uses_long_form() {
    let payload = vec![0xcdu8; 254];
    let mut buf = WireBuffer::new();
    buf.write_bytes(&payload);
    assert_eq!(buf.as_bytes()[..4], [0xfe, 254, 0, 0]);
    // 4 + 254 = 258, padded to 260
    assert_eq!(buf.len(), 260);
    assert_eq!(buf.read_bytes().unwrap(), payload);
}

#[test]
fn long_form_300_bytes() {
    let payload = vec![7u8; 300];
    let mut buf = WireBuffer::new();
    buf.write_bytes(&payload);
    // marker + 300 as 3 LE bytes, then the payload; 304 is already aligned
    assert_eq!(buf.as_bytes()[..4], [0xfe, 0x2c, 0x01, 0x00]);
    assert_eq!(buf.len(), 304);
    assert_eq!(buf.read_bytes().unwrap(), payload);
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn all_encoded_strings_are_aligned() {
    for len in [0usize, 1, 2, 3, 4, 5, 252, 253, 254, 255, 256, 1000] {
        let mut buf = WireBuffer::new();
        buf.write_bytes(&vec![1u8; len]);
        assert_eq!(buf.len() % 4, 0, "length {len} not aligned");
    }
}

// ── Strings ───────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_utf8_string() {
    let mut buf = WireBuffer::new();
    buf.write_string("héllo wörld");
    assert_eq!(buf.read_string().unwrap(), "héllo wörld");
}

#[test]
fn invalid_utf8_decodes_lossily() {
    let mut buf = WireBuffer::new();
    buf.write_bytes(&[b'a', 0xff, 0xfe, b'b']);
    assert_eq!(buf.read_string().unwrap(), "a\u{fffd}\u{fffd}b");
    // the damaged string consumed its full aligned extent
    assert_eq!(buf.remaining(), 0);
}

// ── Underruns ─────────────────────────────────────────────────────────────────

#[test]
fn truncated_i32_is_eof() {
    let mut buf = WireBuffer::from_bytes(vec![0x01, 0x02]);
    assert_eq!(buf.read_i32(), Err(Error::UnexpectedEof));
}

#[test]
fn truncated_payload_is_eof() {
    // length prefix says 10 bytes but only 2 follow
    let mut buf = WireBuffer::from_bytes(vec![10, 1, 2]);
    assert_eq!(buf.read_bytes(), Err(Error::UnexpectedEof));
}

#[test]
fn truncated_long_form_prefix_is_eof() {
    let mut buf = WireBuffer::from_bytes(vec![0xfe, 0x2c]);
    assert_eq!(buf.read_bytes(), Err(Error::UnexpectedEof));
}

#[test]
fn read_raw_wants_exact_count() {
    let mut buf = WireBuffer::from_bytes(vec![1, 2, 3]);
    assert_eq!(buf.read_raw(2).unwrap(), vec![1, 2]);
    assert_eq!(buf.read_raw(2), Err(Error::UnexpectedEof));
}

// ── Cursor behavior ───────────────────────────────────────────────────────────

#[test]
fn rewind_allows_rereading() {
    let mut buf = WireBuffer::new();
    buf.write_i64(99);
    assert_eq!(buf.read_i64().unwrap(), 99);
    buf.rewind();
    assert_eq!(buf.read_i64().unwrap(), 99);
}

#[test]
fn int128_roundtrip() {
    let nonce: [u8; 16] = core::array::from_fn(|i| i as u8);
    let mut buf = WireBuffer::new();
    buf.write_int128(&nonce);
    assert_eq!(buf.read_int128().unwrap(), nonce);
}
