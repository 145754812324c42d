//! # tgstore — typed binary wire-protocol objects
//!
//! `tgstore` is a small, modular implementation of the TL binary object
//! system: every network message, RPC payload and stored blob is a tagged
//! binary structure, identified by a 32-bit constructor tag and parsed
//! without reflection or textual schemas at runtime.
//!
//! | Sub-crate       | Role                                                |
//! |-----------------|-----------------------------------------------------|
//! | `tgstore-wire`  | Wire buffer, primitive codec, parse errors          |
//! | `tgstore-types` | Object model, constructor registry, schema variants |
//!
//! ## Quick start
//!
//! ```rust
//! use tgstore::types::{TlObject, from_bytes, serialize};
//! use tgstore::types::mtproto::Pong;
//!
//! let bytes = serialize(&Pong { msg_id: 1, ping_id: 2 });
//!
//! let object = from_bytes(&bytes, true).unwrap().unwrap();
//! let pong = object.as_any().downcast_ref::<Pong>().unwrap();
//! assert_eq!(pong.ping_id, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`tgstore_wire`] — the wire buffer and primitive codec.
pub use tgstore_wire as wire;

/// Re-export of [`tgstore_types`] — object model, registry and variants.
pub use tgstore_types as types;
