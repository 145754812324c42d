//! Handshake and service-message variants.
//!
//! These are the objects the registry excerpt of the original protocol
//! covers besides media: key-exchange structures, acknowledgements, RPC
//! envelopes and the self-describing containers.

use std::any::Any;

use tgstore_wire::{Error, Result, WireBuffer};

use crate::store::ClassStore;
use crate::{Identifiable, TlObject, vector};

// ─── null / error ────────────────────────────────────────────────────────────

/// `null` — the designated no-value object; its body is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlNull;

impl Identifiable for TlNull {
    const CONSTRUCTOR_ID: u32 = 0x56730bcc;
}

impl TlObject for TlNull {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, _buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `error` — a numeric code plus free-form text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TlError {
    pub code: i32,
    pub text: String,
}

impl Identifiable for TlError {
    const CONSTRUCTOR_ID: u32 = 0xc4b9f9bb;
}

impl TlObject for TlError {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.code = buf.read_i32()?;
        self.text = buf.read_string()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i32(self.code);
        buf.write_string(&self.text);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Key exchange ────────────────────────────────────────────────────────────

/// `resPQ` — the server's opening handshake response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResPq {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}

impl Identifiable for ResPq {
    const CONSTRUCTOR_ID: u32 = 0x05162463;
}

impl TlObject for ResPq {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.pq = buf.read_bytes()?;
        self.server_public_key_fingerprints =
            vector::read(buf, strict, |b, _| b.read_i64())?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_bytes(&self.pq);
        vector::write(buf, &self.server_public_key_fingerprints, |b, v| {
            b.write_i64(*v)
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `server_DH_params_fail`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerDhParamsFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash: [u8; 16],
}

impl Identifiable for ServerDhParamsFail {
    const CONSTRUCTOR_ID: u32 = 0x79cb045d;
}

impl TlObject for ServerDhParamsFail {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.new_nonce_hash = buf.read_int128()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_int128(&self.new_nonce_hash);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `server_DH_params_ok`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerDhParamsOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_answer: Vec<u8>,
}

impl Identifiable for ServerDhParamsOk {
    const CONSTRUCTOR_ID: u32 = 0xd0e8075c;
}

impl TlObject for ServerDhParamsOk {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.encrypted_answer = buf.read_bytes()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_bytes(&self.encrypted_answer);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `server_DH_inner_data`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub g: i32,
    pub dh_prime: Vec<u8>,
    pub g_a: Vec<u8>,
    pub server_time: i32,
}

impl Identifiable for ServerDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0xb5890dba;
}

impl TlObject for ServerDhInnerData {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.g = buf.read_i32()?;
        self.dh_prime = buf.read_bytes()?;
        self.g_a = buf.read_bytes()?;
        self.server_time = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_i32(self.g);
        buf.write_bytes(&self.dh_prime);
        buf.write_bytes(&self.g_a);
        buf.write_i32(self.server_time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `client_DH_inner_data`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub retry_id: i64,
    pub g_b: Vec<u8>,
}

impl Identifiable for ClientDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0x6643b654;
}

impl TlObject for ClientDhInnerData {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.retry_id = buf.read_i64()?;
        self.g_b = buf.read_bytes()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_i64(self.retry_id);
        buf.write_bytes(&self.g_b);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `dh_gen_ok`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DhGenOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash1: [u8; 16],
}

impl Identifiable for DhGenOk {
    const CONSTRUCTOR_ID: u32 = 0x3bcbf734;
}

impl TlObject for DhGenOk {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.new_nonce_hash1 = buf.read_int128()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_int128(&self.new_nonce_hash1);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `dh_gen_retry`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DhGenRetry {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash2: [u8; 16],
}

impl Identifiable for DhGenRetry {
    const CONSTRUCTOR_ID: u32 = 0x46dc1fb9;
}

impl TlObject for DhGenRetry {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.new_nonce_hash2 = buf.read_int128()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_int128(&self.new_nonce_hash2);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `dh_gen_fail`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DhGenFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash3: [u8; 16],
}

impl Identifiable for DhGenFail {
    const CONSTRUCTOR_ID: u32 = 0xa69dae02;
}

impl TlObject for DhGenFail {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.nonce = buf.read_int128()?;
        self.server_nonce = buf.read_int128()?;
        self.new_nonce_hash3 = buf.read_int128()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_int128(&self.nonce);
        buf.write_int128(&self.server_nonce);
        buf.write_int128(&self.new_nonce_hash3);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Service messages ────────────────────────────────────────────────────────

/// `pong`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}

impl Identifiable for Pong {
    const CONSTRUCTOR_ID: u32 = 0x347773c5;
}

impl TlObject for Pong {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.msg_id = buf.read_i64()?;
        self.ping_id = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.msg_id);
        buf.write_i64(self.ping_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `new_session_created`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewSessionCreated {
    pub first_msg_id: i64,
    pub unique_id: i64,
    pub server_salt: i64,
}

impl Identifiable for NewSessionCreated {
    const CONSTRUCTOR_ID: u32 = 0x9ec20908;
}

impl TlObject for NewSessionCreated {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.first_msg_id = buf.read_i64()?;
        self.unique_id = buf.read_i64()?;
        self.server_salt = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.first_msg_id);
        buf.write_i64(self.unique_id);
        buf.write_i64(self.server_salt);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `bad_msg_notification`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
}

impl Identifiable for BadMsgNotification {
    const CONSTRUCTOR_ID: u32 = 0xa7eff811;
}

impl TlObject for BadMsgNotification {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.bad_msg_id = buf.read_i64()?;
        self.bad_msg_seqno = buf.read_i32()?;
        self.error_code = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.bad_msg_id);
        buf.write_i32(self.bad_msg_seqno);
        buf.write_i32(self.error_code);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `bad_server_salt`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadServerSalt {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
    pub new_server_salt: i64,
}

impl Identifiable for BadServerSalt {
    const CONSTRUCTOR_ID: u32 = 0xedab447b;
}

impl TlObject for BadServerSalt {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.bad_msg_id = buf.read_i64()?;
        self.bad_msg_seqno = buf.read_i32()?;
        self.error_code = buf.read_i32()?;
        self.new_server_salt = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.bad_msg_id);
        buf.write_i32(self.bad_msg_seqno);
        buf.write_i32(self.error_code);
        buf.write_i64(self.new_server_salt);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `msgs_ack`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MsgsAck {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsAck {
    const CONSTRUCTOR_ID: u32 = 0x62d6b459;
}

impl TlObject for MsgsAck {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.msg_ids = vector::read(buf, strict, |b, _| b.read_i64())?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        vector::write(buf, &self.msg_ids, |b, v| b.write_i64(*v));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `rpc_error`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}

impl TlObject for RpcError {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.error_code = buf.read_i32()?;
        self.error_message = buf.read_string()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i32(self.error_code);
        buf.write_string(&self.error_message);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `rpc_result` — an RPC response envelope whose body is any registered
/// object, dispatched through the registry.
///
/// `result` is the final field of the object, so a lenient parse may leave
/// it `None` on an unknown body tag without misaligning anything.
#[derive(Debug, Default)]
pub struct RpcResult {
    pub req_msg_id: i64,
    pub result: Option<Box<dyn TlObject>>,
}

impl Identifiable for RpcResult {
    const CONSTRUCTOR_ID: u32 = 0xf35c6d01;
}

impl TlObject for RpcResult {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.req_msg_id = buf.read_i64()?;
        let id = buf.read_u32()?;
        self.result = ClassStore::global().deserialize(buf, id, strict)?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.req_msg_id);
        match &self.result {
            Some(result) => result.serialize_to_stream(buf),
            None => TlNull.serialize_to_stream(buf),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `future_salt`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FutureSalt {
    pub valid_since: i32,
    pub valid_until: i32,
    pub salt: i64,
}

impl Identifiable for FutureSalt {
    const CONSTRUCTOR_ID: u32 = 0x0949d9dc;
}

impl TlObject for FutureSalt {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.valid_since = buf.read_i32()?;
        self.valid_until = buf.read_i32()?;
        self.salt = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i32(self.valid_since);
        buf.write_i32(self.valid_until);
        buf.write_i64(self.salt);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `future_salts` — carries its salts as a bare vector: the item type is
/// fixed by this layout, so the items have no constructor tags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FutureSalts {
    pub req_msg_id: i64,
    pub now: i32,
    pub salts: Vec<FutureSalt>,
}

impl Identifiable for FutureSalts {
    const CONSTRUCTOR_ID: u32 = 0xae500895;
}

impl TlObject for FutureSalts {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.req_msg_id = buf.read_i64()?;
        self.now = buf.read_i32()?;
        self.salts = vector::read_bare(buf, strict, crate::deserialize_bare::<FutureSalt>)?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.req_msg_id);
        buf.write_i32(self.now);
        vector::write_bare(buf, &self.salts, |b, salt| {
            b.write_i32(salt.valid_since);
            b.write_i32(salt.valid_until);
            b.write_i64(salt.salt);
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Containers ──────────────────────────────────────────────────────────────

/// One entry of a [`MsgContainer`].
#[derive(Debug, Default)]
pub struct ContainerMessage {
    pub msg_id: i64,
    pub seqno: i32,
    /// `None` when a lenient parse skipped an unrecognized body.
    pub body: Option<Box<dyn TlObject>>,
}

/// `msg_container` — a bare list of independently framed messages.
///
/// Each entry declares its body's byte length, which makes this the one
/// context where an unknown constructor can be tolerated safely: the body
/// is skipped by its declared extent and the following entries still parse.
#[derive(Debug, Default)]
pub struct MsgContainer {
    pub messages: Vec<ContainerMessage>,
}

impl Identifiable for MsgContainer {
    const CONSTRUCTOR_ID: u32 = 0x73f1f8dc;
}

impl TlObject for MsgContainer {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        let count = buf.read_i32()?;
        if count < 0 {
            return Err(Error::UnexpectedEof);
        }
        for _ in 0..count {
            let msg_id = buf.read_i64()?;
            let seqno = buf.read_i32()?;
            let length = buf.read_i32()?;
            if length < 0 {
                return Err(Error::UnexpectedEof);
            }
            let end = buf
                .position()
                .checked_add(length as usize)
                .ok_or(Error::UnexpectedEof)?;
            if end > buf.len() {
                return Err(Error::UnexpectedEof);
            }

            let id = buf.read_u32()?;
            let body = ClassStore::global().deserialize(buf, id, strict)?;
            match &body {
                None => {
                    // unknown body, skipped by its declared extent
                    buf.set_position(end)?;
                }
                Some(_) if buf.position() != end => {
                    // the framing is authoritative; realign to it
                    log::warn!(
                        "[tgstore] container body {id:#010x} consumed {} of {length} bytes",
                        buf.position() + (length as usize) - end,
                    );
                    buf.set_position(end)?;
                }
                Some(_) => {}
            }
            self.messages.push(ContainerMessage { msg_id, seqno, body });
        }
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i32(self.messages.len() as i32);
        for message in &self.messages {
            buf.write_i64(message.msg_id);
            buf.write_i32(message.seqno);
            let mut body = WireBuffer::new();
            match &message.body {
                Some(object) => object.serialize_to_stream(&mut body),
                None => TlNull.serialize_to_stream(&mut body),
            }
            buf.write_i32(body.len() as i32);
            buf.write_raw(body.as_bytes());
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `gzip_packed` — a compressed object carried opaque.
///
/// Inflating `packed_data` and re-parsing the result belongs to the
/// transport layer; at this level the payload is just bytes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GzipPacked {
    pub packed_data: Vec<u8>,
}

impl Identifiable for GzipPacked {
    const CONSTRUCTOR_ID: u32 = 0x3072cfa1;
}

impl TlObject for GzipPacked {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.packed_data = buf.read_bytes()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_bytes(&self.packed_data);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
