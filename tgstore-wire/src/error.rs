//! Errors that can occur while parsing TL wire data.

use std::fmt;

/// Errors that can occur during deserialization.
///
/// There is deliberately no variant for a malformed UTF-8 string: string
/// payloads are decoded lossily because the byte length consumed is fixed
/// by the length prefix, so recovery cannot misalign sibling fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Ran out of bytes before the value was fully read. Always fatal to
    /// the current parse: a partial field means every following field in
    /// the same object is misaligned.
    UnexpectedEof,
    /// Decoded a 32-bit constructor tag that doesn't match any known
    /// variant in the current context.
    UnexpectedConstructor {
        /// The offending tag as read from the wire.
        id: u32,
    },
    /// A registered factory produced an instance whose constructor tag
    /// differs from the tag it was registered under. This is a
    /// configuration error in the registry, not a wire-data problem.
    FactoryMismatch {
        /// The tag the factory was registered under.
        id: u32,
        /// The tag the produced instance reports.
        produced: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of buffer"),
            Self::UnexpectedConstructor { id } => {
                write!(f, "unexpected constructor id: {id:#010x}")
            }
            Self::FactoryMismatch { id, produced } => {
                write!(
                    f,
                    "factory registered for {id:#010x} produced {produced:#010x}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for wire parsing.
pub type Result<T> = std::result::Result<T, Error>;
