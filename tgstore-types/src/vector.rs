//! Boxed and bare list codecs.
//!
//! A boxed `Vector<T>` is wire-encoded as the `0x1cb5c415` constructor tag,
//! a 32-bit count and the items. A bare `vector<t>` omits the tag because
//! the enclosing object already fixes the item type. Item codecs are passed
//! as closures so the same helpers serve primitives, per-entity enum
//! dispatch and bare structs alike.

use tgstore_wire::{Error, Result, WireBuffer};

/// Constructor ID of the boxed `Vector` container.
pub const VECTOR_ID: u32 = 0x1cb5c415;

/// Read a boxed vector: tag, count, items.
pub fn read<T>(
    buf: &mut WireBuffer,
    strict: bool,
    read_item: impl FnMut(&mut WireBuffer, bool) -> Result<T>,
) -> Result<Vec<T>> {
    let id = buf.read_u32()?;
    if id != VECTOR_ID {
        return Err(Error::UnexpectedConstructor { id });
    }
    read_bare(buf, strict, read_item)
}

/// Read a bare vector: count, items, no tag.
pub fn read_bare<T>(
    buf: &mut WireBuffer,
    strict: bool,
    mut read_item: impl FnMut(&mut WireBuffer, bool) -> Result<T>,
) -> Result<Vec<T>> {
    let count = buf.read_i32()?;
    if count < 0 {
        // no byte sequence can satisfy a negative count
        return Err(Error::UnexpectedEof);
    }
    let mut items = Vec::new();
    for _ in 0..count {
        items.push(read_item(buf, strict)?);
    }
    Ok(items)
}

/// Write a boxed vector: tag, count, items.
pub fn write<T>(
    buf: &mut WireBuffer,
    items: &[T],
    write_item: impl FnMut(&mut WireBuffer, &T),
) {
    buf.write_u32(VECTOR_ID);
    write_bare(buf, items, write_item);
}

/// Write a bare vector: count and items only.
pub fn write_bare<T>(
    buf: &mut WireBuffer,
    items: &[T],
    mut write_item: impl FnMut(&mut WireBuffer, &T),
) {
    buf.write_i32(items.len() as i32);
    for item in items {
        write_item(buf, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_roundtrip() {
        let mut buf = WireBuffer::new();
        write(&mut buf, &[1i64, -2, 3], |b, v| b.write_i64(*v));
        assert_eq!(buf.as_bytes()[..4], VECTOR_ID.to_le_bytes());
        let items = read(&mut buf, true, |b, _| b.read_i64()).unwrap();
        assert_eq!(items, vec![1, -2, 3]);
    }

    #[test]
    fn bare_roundtrip_has_no_tag() {
        let mut buf = WireBuffer::new();
        write_bare(&mut buf, &[7i32, 8], |b, v| b.write_i32(*v));
        assert_eq!(buf.len(), 4 + 8);
        let items = read_bare(&mut buf, true, |b, _| b.read_i32()).unwrap();
        assert_eq!(items, vec![7, 8]);
    }

    #[test]
    fn boxed_requires_vector_tag() {
        let mut buf = WireBuffer::new();
        buf.write_u32(0xdeadbeef);
        buf.write_i32(0);
        let result = read(&mut buf, true, |b, _| b.read_i64());
        assert_eq!(result, Err(Error::UnexpectedConstructor { id: 0xdeadbeef }));
    }

    #[test]
    fn negative_count_is_rejected() {
        let mut buf = WireBuffer::new();
        buf.write_i32(-1);
        let result = read_bare(&mut buf, true, |b, _| b.read_i32());
        assert_eq!(result, Err(Error::UnexpectedEof));
    }

    #[test]
    fn oversized_count_fails_at_first_missing_item() {
        let mut buf = WireBuffer::new();
        buf.write_i32(1000);
        buf.write_i32(42);
        let result = read_bare(&mut buf, true, |b, _| b.read_i32());
        assert_eq!(result, Err(Error::UnexpectedEof));
    }
}
