//! Wire buffer and primitive codec for the TL binary format.
//!
//! Every TL object on the wire is a sequence of little-endian primitives:
//! fixed-width integers, IEEE-754 doubles, magic-tagged booleans and
//! length-prefixed byte strings padded to 4-byte boundaries. This crate
//! provides [`WireBuffer`], the single in-memory medium both sides of the
//! codec operate on: parsing reads advance a cursor and fail cleanly at the
//! end of the buffer, serializing writes append and always succeed.
//!
//! Object-level concerns (constructor tags, polymorphic dispatch, the
//! registry) live in `tgstore-types`; this crate knows nothing about them
//! except the two reserved boolean tags, which are primitives here.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod error;

pub use buffer::{BOOL_FALSE_ID, BOOL_TRUE_ID, WireBuffer};
pub use error::{Error, Result};
