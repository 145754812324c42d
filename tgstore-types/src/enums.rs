//! Per-entity sum types over the historical wire layouts.
//!
//! Downstream code that wants "any Video" regardless of which era produced
//! it matches on these enums; the wire variants themselves stay fully
//! independent because the historical layouts are genuinely different
//! shapes. `deserialize_from` dispatches on an already-read constructor
//! tag, exactly like the per-entity switch in the original client.

use tgstore_wire::{Error, Result, WireBuffer};

use crate::TlObject;
use crate::media;

macro_rules! entity {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
        default = $default_variant:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $($variant($ty),)+
        }

        impl $name {
            /// The wire tag of the contained variant.
            pub fn constructor_id(&self) -> u32 {
                match self {
                    $(Self::$variant(x) => x.constructor_id(),)+
                }
            }

            /// Dispatch on an already-read constructor tag.
            ///
            /// Unknown tags fail in strict mode; lenient mode logs and
            /// returns `None` without consuming further bytes.
            pub fn deserialize_from(
                buf: &mut WireBuffer,
                constructor_id: u32,
                strict: bool,
            ) -> Result<Option<Self>> {
                match constructor_id {
                    $(
                        id if id == <$ty as crate::Identifiable>::CONSTRUCTOR_ID => {
                            Ok(Some(Self::$variant(crate::deserialize_bare(buf, strict)?)))
                        }
                    )+
                    _ => {
                        if strict {
                            log::error!(
                                "[tgstore] can't parse magic {constructor_id:#010x} in {}",
                                stringify!($name),
                            );
                            Err(Error::UnexpectedConstructor { id: constructor_id })
                        } else {
                            log::warn!(
                                "[tgstore] skipping magic {constructor_id:#010x} in {}",
                                stringify!($name),
                            );
                            Ok(None)
                        }
                    }
                }
            }

            /// Read the leading tag and dispatch.
            ///
            /// Used for required nested fields, where an unknown tag fails
            /// even in lenient mode: tolerating a hole here would misalign
            /// every following field of the containing object.
            pub fn deserialize(buf: &mut WireBuffer, strict: bool) -> Result<Self> {
                let id = buf.read_u32()?;
                Self::deserialize_from(buf, id, strict)?
                    .ok_or(Error::UnexpectedConstructor { id })
            }

            /// Append the contained variant, tag included.
            pub fn serialize_to_stream(&self, buf: &mut WireBuffer) {
                match self {
                    $(Self::$variant(x) => x.serialize_to_stream(buf),)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default_variant(Default::default())
            }
        }
    };
}

entity! {
    /// Any of the historical `Video` wire layouts.
    Video {
        Empty(media::VideoEmpty),
        Old(media::VideoOld),
        Old2(media::VideoOld2),
        Old3(media::VideoOld3),
        Video(media::Video),
    }
    default = Empty
}

entity! {
    /// Any of the historical `Audio` wire layouts.
    Audio {
        Empty(media::AudioEmpty),
        Old(media::AudioOld),
        Old2(media::AudioOld2),
        Audio(media::Audio),
    }
    default = Empty
}

entity! {
    /// Any of the historical `Document` wire layouts.
    Document {
        Empty(media::DocumentEmpty),
        Old(media::DocumentOld),
        Document(media::Document),
    }
    default = Empty
}

entity! {
    /// Any of the historical `Photo` wire layouts.
    Photo {
        Empty(media::PhotoEmpty),
        Old(media::PhotoOld),
        Photo(media::Photo),
    }
    default = Empty
}

entity! {
    /// A thumbnail descriptor in any of its wire layouts.
    PhotoSize {
        Empty(media::PhotoSizeEmpty),
        Size(media::PhotoSize),
        Cached(media::PhotoCachedSize),
    }
    default = Empty
}

entity! {
    /// A file location, available or not.
    FileLocation {
        Unavailable(media::FileLocationUnavailable),
        Location(media::FileLocation),
    }
    default = Unavailable
}

entity! {
    /// A geographic point or its empty placeholder.
    GeoPoint {
        Empty(media::GeoPointEmpty),
        Point(media::GeoPoint),
    }
    default = Empty
}
