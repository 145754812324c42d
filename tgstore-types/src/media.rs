//! Media-attachment variants.
//!
//! Several logical entities here exist in multiple wire layouts, one per
//! historical constructor tag. Each layout is an independent implementation
//! of the [`TlObject`] contract — old formats are genuinely different
//! shapes, not field subsets of the current one — and [`crate::enums`]
//! provides the "any Video"-style view over a family.

use std::any::Any;

use tgstore_wire::{Result, WireBuffer};

use crate::{Identifiable, TlObject, vector};

// ─── Video ───────────────────────────────────────────────────────────────────

/// `videoEmpty`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoEmpty {
    pub id: i64,
}

impl Identifiable for VideoEmpty {
    const CONSTRUCTOR_ID: u32 = 0xc10658a8;
}

impl TlObject for VideoEmpty {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `video_old` — the first non-empty layout; has a caption but no MIME type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoOld {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub caption: String,
    pub duration: i32,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
    pub w: i32,
    pub h: i32,
}

impl Identifiable for VideoOld {
    const CONSTRUCTOR_ID: u32 = 0x5a04a49f;
}

impl TlObject for VideoOld {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.caption = buf.read_string()?;
        self.duration = buf.read_i32()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_string(&self.caption);
        buf.write_i32(self.duration);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `video_old2` — adds a MIME type after the duration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoOld2 {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub caption: String,
    pub duration: i32,
    pub mime_type: String,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
    pub w: i32,
    pub h: i32,
}

impl Identifiable for VideoOld2 {
    const CONSTRUCTOR_ID: u32 = 0x388fa391;
}

impl TlObject for VideoOld2 {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.caption = buf.read_string()?;
        self.duration = buf.read_i32()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_string(&self.caption);
        buf.write_i32(self.duration);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `video_old3` — drops the caption and MIME type again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoOld3 {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub duration: i32,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
    pub w: i32,
    pub h: i32,
}

impl Identifiable for VideoOld3 {
    const CONSTRUCTOR_ID: u32 = 0xee9f4a4d;
}

impl TlObject for VideoOld3 {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.duration = buf.read_i32()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_i32(self.duration);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `video` — the current layout; no owner field, MIME type is back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Video {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub duration: i32,
    pub mime_type: String,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
    pub w: i32,
    pub h: i32,
}

impl Identifiable for Video {
    const CONSTRUCTOR_ID: u32 = 0xf72887d3;
}

impl TlObject for Video {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.date = buf.read_i32()?;
        self.duration = buf.read_i32()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.date);
        buf.write_i32(self.duration);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Audio ───────────────────────────────────────────────────────────────────

/// `audioEmpty`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioEmpty {
    pub id: i64,
}

impl Identifiable for AudioEmpty {
    const CONSTRUCTOR_ID: u32 = 0x586988d8;
}

impl TlObject for AudioEmpty {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `audio_old`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioOld {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub duration: i32,
    pub size: i32,
    pub dc_id: i32,
}

impl Identifiable for AudioOld {
    const CONSTRUCTOR_ID: u32 = 0x427425e7;
}

impl TlObject for AudioOld {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.duration = buf.read_i32()?;
        self.size = buf.read_i32()?;
        self.dc_id = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_i32(self.duration);
        buf.write_i32(self.size);
        buf.write_i32(self.dc_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `audio_old2` — adds the MIME type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioOld2 {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub duration: i32,
    pub mime_type: String,
    pub size: i32,
    pub dc_id: i32,
}

impl Identifiable for AudioOld2 {
    const CONSTRUCTOR_ID: u32 = 0xc7ac6496;
}

impl TlObject for AudioOld2 {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.duration = buf.read_i32()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.dc_id = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_i32(self.duration);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        buf.write_i32(self.dc_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `audio` — current layout, owner field gone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Audio {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub duration: i32,
    pub mime_type: String,
    pub size: i32,
    pub dc_id: i32,
}

impl Identifiable for Audio {
    const CONSTRUCTOR_ID: u32 = 0xf9e35055;
}

impl TlObject for Audio {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.date = buf.read_i32()?;
        self.duration = buf.read_i32()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.dc_id = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.date);
        buf.write_i32(self.duration);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        buf.write_i32(self.dc_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Document ────────────────────────────────────────────────────────────────

/// `documentEmpty`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentEmpty {
    pub id: i64,
}

impl Identifiable for DocumentEmpty {
    const CONSTRUCTOR_ID: u32 = 0x36f8c871;
}

impl TlObject for DocumentEmpty {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `document_old` — carries the uploader and a file name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentOld {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub file_name: String,
    pub mime_type: String,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
}

impl Identifiable for DocumentOld {
    const CONSTRUCTOR_ID: u32 = 0x9efc6326;
}

impl TlObject for DocumentOld {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.file_name = buf.read_string()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_string(&self.file_name);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `document` — current layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub mime_type: String,
    pub size: i32,
    pub thumb: crate::enums::PhotoSize,
    pub dc_id: i32,
}

impl Identifiable for Document {
    const CONSTRUCTOR_ID: u32 = 0xf9a39f4f;
}

impl TlObject for Document {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.date = buf.read_i32()?;
        self.mime_type = buf.read_string()?;
        self.size = buf.read_i32()?;
        self.thumb = crate::enums::PhotoSize::deserialize(buf, strict)?;
        self.dc_id = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.date);
        buf.write_string(&self.mime_type);
        buf.write_i32(self.size);
        self.thumb.serialize_to_stream(buf);
        buf.write_i32(self.dc_id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Photo ───────────────────────────────────────────────────────────────────

/// `photoEmpty`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoEmpty {
    pub id: i64,
}

impl Identifiable for PhotoEmpty {
    const CONSTRUCTOR_ID: u32 = 0x2331b22d;
}

impl TlObject for PhotoEmpty {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `photo_old` — caption and geo point, plus the size list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoOld {
    pub id: i64,
    pub access_hash: i64,
    pub user_id: i32,
    pub date: i32,
    pub caption: String,
    pub geo: crate::enums::GeoPoint,
    pub sizes: Vec<crate::enums::PhotoSize>,
}

impl Identifiable for PhotoOld {
    const CONSTRUCTOR_ID: u32 = 0x22b56751;
}

impl TlObject for PhotoOld {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.user_id = buf.read_i32()?;
        self.date = buf.read_i32()?;
        self.caption = buf.read_string()?;
        self.geo = crate::enums::GeoPoint::deserialize(buf, strict)?;
        self.sizes = vector::read(buf, strict, crate::enums::PhotoSize::deserialize)?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.user_id);
        buf.write_i32(self.date);
        buf.write_string(&self.caption);
        self.geo.serialize_to_stream(buf);
        vector::write(buf, &self.sizes, |b, size| size.serialize_to_stream(b));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `photo` — current layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub sizes: Vec<crate::enums::PhotoSize>,
}

impl Identifiable for Photo {
    const CONSTRUCTOR_ID: u32 = 0xcded42fe;
}

impl TlObject for Photo {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.id = buf.read_i64()?;
        self.access_hash = buf.read_i64()?;
        self.date = buf.read_i32()?;
        self.sizes = vector::read(buf, strict, crate::enums::PhotoSize::deserialize)?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.id);
        buf.write_i64(self.access_hash);
        buf.write_i32(self.date);
        vector::write(buf, &self.sizes, |b, size| size.serialize_to_stream(b));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── PhotoSize ───────────────────────────────────────────────────────────────

/// `photoSizeEmpty`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoSizeEmpty {
    pub ty: String,
}

impl Identifiable for PhotoSizeEmpty {
    const CONSTRUCTOR_ID: u32 = 0x0e17e23c;
}

impl TlObject for PhotoSizeEmpty {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.ty = buf.read_string()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_string(&self.ty);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `photoSize`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoSize {
    pub ty: String,
    pub location: crate::enums::FileLocation,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

impl Identifiable for PhotoSize {
    const CONSTRUCTOR_ID: u32 = 0x77bfb61b;
}

impl TlObject for PhotoSize {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.ty = buf.read_string()?;
        self.location = crate::enums::FileLocation::deserialize(buf, strict)?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        self.size = buf.read_i32()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_string(&self.ty);
        self.location.serialize_to_stream(buf);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
        buf.write_i32(self.size);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `photoCachedSize` — the payload travels inline instead of by location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoCachedSize {
    pub ty: String,
    pub location: crate::enums::FileLocation,
    pub w: i32,
    pub h: i32,
    pub bytes: Vec<u8>,
}

impl Identifiable for PhotoCachedSize {
    const CONSTRUCTOR_ID: u32 = 0xe9a734fa;
}

impl TlObject for PhotoCachedSize {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, strict: bool) -> Result<()> {
        self.ty = buf.read_string()?;
        self.location = crate::enums::FileLocation::deserialize(buf, strict)?;
        self.w = buf.read_i32()?;
        self.h = buf.read_i32()?;
        self.bytes = buf.read_bytes()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_string(&self.ty);
        self.location.serialize_to_stream(buf);
        buf.write_i32(self.w);
        buf.write_i32(self.h);
        buf.write_bytes(&self.bytes);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── FileLocation ────────────────────────────────────────────────────────────

/// `fileLocationUnavailable`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileLocationUnavailable {
    pub volume_id: i64,
    pub local_id: i32,
    pub secret: i64,
}

impl Identifiable for FileLocationUnavailable {
    const CONSTRUCTOR_ID: u32 = 0x7c596b46;
}

impl TlObject for FileLocationUnavailable {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.volume_id = buf.read_i64()?;
        self.local_id = buf.read_i32()?;
        self.secret = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i64(self.volume_id);
        buf.write_i32(self.local_id);
        buf.write_i64(self.secret);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `fileLocation`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileLocation {
    pub dc_id: i32,
    pub volume_id: i64,
    pub local_id: i32,
    pub secret: i64,
}

impl Identifiable for FileLocation {
    const CONSTRUCTOR_ID: u32 = 0x53d69076;
}

impl TlObject for FileLocation {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.dc_id = buf.read_i32()?;
        self.volume_id = buf.read_i64()?;
        self.local_id = buf.read_i32()?;
        self.secret = buf.read_i64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_i32(self.dc_id);
        buf.write_i64(self.volume_id);
        buf.write_i32(self.local_id);
        buf.write_i64(self.secret);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── GeoPoint ────────────────────────────────────────────────────────────────

/// `geoPointEmpty`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPointEmpty;

impl Identifiable for GeoPointEmpty {
    const CONSTRUCTOR_ID: u32 = 0x1117dd5f;
}

impl TlObject for GeoPointEmpty {
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

/// `geoPoint` — longitude first, as on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl Identifiable for GeoPoint {
    const CONSTRUCTOR_ID: u32 = 0x2049d70c;
}

impl TlObject for GeoPoint {
    fn constructor_id(&self) -> u32 {
        Self::CONSTRUCTOR_ID
    }

    fn read_params(&mut self, buf: &mut WireBuffer, _strict: bool) -> Result<()> {
        self.lon = buf.read_f64()?;
        self.lat = buf.read_f64()?;
        Ok(())
    }

    fn serialize_to_stream(&self, buf: &mut WireBuffer) {
        buf.write_u32(Self::CONSTRUCTOR_ID);
        buf.write_f64(self.lon);
        buf.write_f64(self.lat);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
