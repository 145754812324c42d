//! TL object model, constructor registry and deserialization entry points.
//!
//! Every entity that crosses the wire starts with a 32-bit constructor tag
//! selecting one concrete layout. This crate provides the machinery around
//! that rule:
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | Tag → factory registry and the `deserialize` entry points   |
//! | [`vector`]  | Boxed (`0x1cb5c415`-tagged) and bare list codecs            |
//! | [`mtproto`] | Handshake and service-message variants                      |
//! | [`media`]   | Media-attachment variants, including all legacy layouts     |
//! | [`enums`]   | Per-entity sum types over the historical wire layouts       |
//!
//! # Reading an incoming object
//!
//! ```rust
//! use tgstore_types::{TlObject, from_bytes, serialize};
//! use tgstore_types::mtproto::Pong;
//!
//! let bytes = serialize(&Pong { msg_id: 1, ping_id: 2 });
//! let object = from_bytes(&bytes, true).unwrap().unwrap();
//! let pong = object.as_any().downcast_ref::<Pong>().unwrap();
//! assert_eq!(pong.ping_id, 2);
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod enums;
pub mod media;
pub mod mtproto;
pub mod store;
pub mod vector;

use std::any::Any;
use std::fmt;

pub use store::{ClassStore, deserialize, from_bytes, serialize};
#[cfg(feature = "name-for-id")]
pub use store::name_for_id;
pub use tgstore_wire::{Error, Result, WireBuffer};

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Every wire variant has a unique 32-bit constructor ID.
pub trait Identifiable {
    /// The constructor ID as specified in the TL schema.
    const CONSTRUCTOR_ID: u32;
}

/// The contract every wire entity obeys.
///
/// Implementations must consume exactly the bytes belonging to their own
/// body: the dispatcher has already consumed the constructor tag before
/// calling [`read_params`](TlObject::read_params), and under- or
/// over-consumption misaligns every following field of a containing object.
///
/// `strict` does not affect codec-level failures (those always propagate);
/// it only controls whether an unknown constructor tag is tolerated in the
/// few container contexts that define such tolerance.
pub trait TlObject: fmt::Debug + Send {
    /// The variant's constructor ID (the static constant, via `&self`).
    fn constructor_id(&self) -> u32;

    /// Populate `self` from the body bytes in `buf`.
    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()>;

    /// Append the constructor tag followed by the body, in the same field
    /// order `read_params` expects.
    fn serialize_to_stream(&self, buf: &mut WireBuffer);

    /// Downcast hook for callers that know the concrete variant.
    fn as_any(&self) -> &dyn Any;
}

// ─── Known-type parse paths ───────────────────────────────────────────────────

/// Parse a variant whose type the caller already knows from context.
///
/// `constructor_id` is the tag just read from the wire; it must match
/// `T::CONSTRUCTOR_ID`. On mismatch, strict mode fails and lenient mode
/// returns `None` without consuming further bytes.
pub fn deserialize_known<T>(
    buf: &mut WireBuffer,
    constructor_id: u32,
    strict: bool,
) -> Result<Option<T>>
where
    T: TlObject + Identifiable + Default,
{
    if constructor_id != T::CONSTRUCTOR_ID {
        if strict {
            log::error!(
                "[tgstore] can't parse magic {constructor_id:#010x} in {}",
                std::any::type_name::<T>()
            );
            return Err(Error::UnexpectedConstructor { id: constructor_id });
        }
        log::warn!(
            "[tgstore] skipping magic {constructor_id:#010x} in {}",
            std::any::type_name::<T>()
        );
        return Ok(None);
    }
    let mut value = T::default();
    value.read_params(buf, strict)?;
    Ok(Some(value))
}

/// Parse a bare-encoded value: the surrounding structure already fixes the
/// type, so no constructor tag is present on the wire at all.
pub fn deserialize_bare<T>(buf: &mut WireBuffer, strict: bool) -> Result<T>
where
    T: TlObject + Default,
{
    let mut value = T::default();
    value.read_params(buf, strict)?;
    Ok(value)
}
