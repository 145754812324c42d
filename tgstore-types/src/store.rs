//! The constructor registry and the deserialization entry points.
//!
//! Process-wide state with a clear init boundary: the registry is built
//! exactly once on first use (any thread may race to be first; `OnceLock`
//! guarantees a single initialization), then never mutated again, so
//! concurrent lookups need no locking. It holds pure data — fn pointers —
//! and requires no teardown.

use std::collections::HashMap;
use std::sync::OnceLock;

use tgstore_wire::{Error, Result, WireBuffer};

use crate::{Identifiable, TlObject, media, mtproto};

/// Produces a fresh, empty instance of one registered variant.
pub type Factory = fn() -> Box<dyn TlObject>;

fn make<T>() -> Box<dyn TlObject>
where
    T: TlObject + Default + 'static,
{
    Box::new(T::default())
}

/// Tag → factory table for polymorphic deserialization.
///
/// Use [`ClassStore::global`] in normal code; constructing a fresh store is
/// only useful for tests.
pub struct ClassStore {
    map: HashMap<u32, Factory>,
}

impl ClassStore {
    /// Build a store holding every known variant.
    pub fn new() -> Self {
        let mut store = Self { map: HashMap::new() };

        // service / handshake
        store.register::<mtproto::TlNull>();
        store.register::<mtproto::TlError>();
        store.register::<mtproto::ResPq>();
        store.register::<mtproto::ServerDhParamsFail>();
        store.register::<mtproto::ServerDhParamsOk>();
        store.register::<mtproto::ServerDhInnerData>();
        store.register::<mtproto::ClientDhInnerData>();
        store.register::<mtproto::DhGenOk>();
        store.register::<mtproto::DhGenRetry>();
        store.register::<mtproto::DhGenFail>();
        store.register::<mtproto::Pong>();
        store.register::<mtproto::NewSessionCreated>();
        store.register::<mtproto::BadMsgNotification>();
        store.register::<mtproto::BadServerSalt>();
        store.register::<mtproto::MsgsAck>();
        store.register::<mtproto::RpcError>();
        store.register::<mtproto::RpcResult>();
        store.register::<mtproto::FutureSalt>();
        store.register::<mtproto::FutureSalts>();
        store.register::<mtproto::MsgContainer>();
        store.register::<mtproto::GzipPacked>();

        // media attachments, legacy layouts included
        store.register::<media::VideoEmpty>();
        store.register::<media::VideoOld>();
        store.register::<media::VideoOld2>();
        store.register::<media::VideoOld3>();
        store.register::<media::Video>();
        store.register::<media::AudioEmpty>();
        store.register::<media::AudioOld>();
        store.register::<media::AudioOld2>();
        store.register::<media::Audio>();
        store.register::<media::DocumentEmpty>();
        store.register::<media::DocumentOld>();
        store.register::<media::Document>();
        store.register::<media::PhotoEmpty>();
        store.register::<media::PhotoOld>();
        store.register::<media::Photo>();
        store.register::<media::PhotoSizeEmpty>();
        store.register::<media::PhotoSize>();
        store.register::<media::PhotoCachedSize>();
        store.register::<media::FileLocationUnavailable>();
        store.register::<media::FileLocation>();
        store.register::<media::GeoPointEmpty>();
        store.register::<media::GeoPoint>();

        store
    }

    /// The process-wide registry, built on first access.
    pub fn global() -> &'static ClassStore {
        static STORE: OnceLock<ClassStore> = OnceLock::new();
        STORE.get_or_init(ClassStore::new)
    }

    fn register<T>(&mut self)
    where
        T: TlObject + Identifiable + Default + 'static,
    {
        let previous = self.map.insert(T::CONSTRUCTOR_ID, make::<T>);
        debug_assert!(
            previous.is_none(),
            "duplicate constructor id {:#010x}",
            T::CONSTRUCTOR_ID,
        );
    }

    /// Look up the factory for a constructor tag.
    pub fn lookup(&self, constructor_id: u32) -> Option<Factory> {
        self.map.get(&constructor_id).copied()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` when no variants are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All registered constructor tags, in no particular order.
    pub fn constructor_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.map.keys().copied()
    }

    /// Resolve `constructor_id` and parse the body that follows it.
    ///
    /// On an unknown tag, strict mode fails with the buffer left right
    /// after the tag; lenient mode returns `Ok(None)`, the null-object
    /// sentinel, which only the allow-listed container contexts accept.
    pub fn deserialize(
        &self,
        buf: &mut WireBuffer,
        constructor_id: u32,
        strict: bool,
    ) -> Result<Option<Box<dyn TlObject>>> {
        let Some(factory) = self.lookup(constructor_id) else {
            if strict {
                log::error!("[tgstore] can't parse magic {constructor_id:#010x}");
                return Err(Error::UnexpectedConstructor { id: constructor_id });
            }
            log::warn!("[tgstore] skipping unknown constructor {constructor_id:#010x}");
            return Ok(None);
        };

        let mut object = factory();
        let produced = object.constructor_id();
        if produced != constructor_id {
            log::error!(
                "[tgstore] factory for {constructor_id:#010x} produced {produced:#010x}"
            );
            return Err(Error::FactoryMismatch { id: constructor_id, produced });
        }

        object.read_params(buf, strict)?;
        Ok(Some(object))
    }
}

impl Default for ClassStore {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Read a 4-byte constructor tag from `buf` and parse the object it selects
/// using the global registry.
pub fn deserialize(buf: &mut WireBuffer, strict: bool) -> Result<Option<Box<dyn TlObject>>> {
    let constructor_id = buf.read_u32()?;
    ClassStore::global().deserialize(buf, constructor_id, strict)
}

/// Parse one object tree out of raw bytes.
///
/// This is the entry the network layer calls on an incoming message body
/// and the storage layer calls on a persisted blob.
pub fn from_bytes(bytes: &[u8], strict: bool) -> Result<Option<Box<dyn TlObject>>> {
    let mut buf = WireBuffer::from_bytes(bytes);
    deserialize(&mut buf, strict)
}

/// Serialize one object tree (tag plus body, recursively) into fresh bytes.
pub fn serialize(object: &dyn TlObject) -> Vec<u8> {
    let mut buf = WireBuffer::new();
    object.serialize_to_stream(&mut buf);
    buf.into_bytes()
}

// ─── Diagnostics ─────────────────────────────────────────────────────────────

/// Returns the TL schema name for a known constructor ID.
#[cfg(feature = "name-for-id")]
pub fn name_for_id(id: u32) -> Option<&'static str> {
    Some(match id {
        0x997275b5 => "boolTrue",
        0xbc799737 => "boolFalse",
        crate::vector::VECTOR_ID => "vector",
        0x56730bcc => "null",
        0xc4b9f9bb => "error",
        0x05162463 => "resPQ",
        0x79cb045d => "server_DH_params_fail",
        0xd0e8075c => "server_DH_params_ok",
        0xb5890dba => "server_DH_inner_data",
        0x6643b654 => "client_DH_inner_data",
        0x3bcbf734 => "dh_gen_ok",
        0x46dc1fb9 => "dh_gen_retry",
        0xa69dae02 => "dh_gen_fail",
        0x347773c5 => "pong",
        0x9ec20908 => "new_session_created",
        0xa7eff811 => "bad_msg_notification",
        0xedab447b => "bad_server_salt",
        0x62d6b459 => "msgs_ack",
        0x2144ca19 => "rpc_error",
        0xf35c6d01 => "rpc_result",
        0x0949d9dc => "future_salt",
        0xae500895 => "future_salts",
        0x73f1f8dc => "msg_container",
        0x3072cfa1 => "gzip_packed",
        0xc10658a8 => "videoEmpty",
        0x5a04a49f => "video_old",
        0x388fa391 => "video_old2",
        0xee9f4a4d => "video_old3",
        0xf72887d3 => "video",
        0x586988d8 => "audioEmpty",
        0x427425e7 => "audio_old",
        0xc7ac6496 => "audio_old2",
        0xf9e35055 => "audio",
        0x36f8c871 => "documentEmpty",
        0x9efc6326 => "document_old",
        0xf9a39f4f => "document",
        0x2331b22d => "photoEmpty",
        0x22b56751 => "photo_old",
        0xcded42fe => "photo",
        0x0e17e23c => "photoSizeEmpty",
        0x77bfb61b => "photoSize",
        0xe9a734fa => "photoCachedSize",
        0x7c596b46 => "fileLocationUnavailable",
        0x53d69076 => "fileLocation",
        0x1117dd5f => "geoPointEmpty",
        0x2049d70c => "geoPoint",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_factory_is_surfaced() {
        let mut store = ClassStore { map: HashMap::new() };
        // register TlNull's factory under a foreign tag
        store.map.insert(0x11223344, make::<mtproto::TlNull>);

        let mut buf = WireBuffer::new();
        let result = store.deserialize(&mut buf, 0x11223344, true);
        assert_eq!(
            result.map(|_| ()),
            Err(Error::FactoryMismatch {
                id: 0x11223344,
                produced: <mtproto::TlNull as Identifiable>::CONSTRUCTOR_ID,
            })
        );
    }

    #[test]
    fn every_tag_registers_exactly_once() {
        // HashMap::insert plus the debug_assert in register() guards this
        // at build time; double-check the final count here.
        assert_eq!(ClassStore::new().len(), 43);
    }

    #[cfg(feature = "name-for-id")]
    #[test]
    fn names_cover_the_whole_registry() {
        let store = ClassStore::new();
        for id in store.constructor_ids() {
            assert!(name_for_id(id).is_some(), "no name for {id:#010x}");
        }
        assert_eq!(name_for_id(0xdeadbeef), None);
    }
}
