use tgstore_types::{
    Error, Identifiable, TlObject, WireBuffer, enums, from_bytes, media, serialize,
};

fn sample_thumb() -> enums::PhotoSize {
    enums::PhotoSize::Size(media::PhotoSize {
        ty: "m".into(),
        location: enums::FileLocation::Location(media::FileLocation {
            dc_id: 2,
            volume_id: 800,
            local_id: 14,
            secret: -3,
        }),
        w: 320,
        h: 240,
        size: 16_384,
    })
}

// ── Legacy-variant coexistence ────────────────────────────────────────────────

#[test]
fn video_old2_decodes_only_as_video_old2() {
    let video = media::VideoOld2 {
        id: 9_000_000_001,
        access_hash: -42,
        user_id: 777,
        date: 1_300_000_000,
        caption: "holiday".into(),
        duration: 15,
        mime_type: "video/mp4".into(),
        size: 1_048_576,
        thumb: sample_thumb(),
        dc_id: 4,
        w: 640,
        h: 480,
    };

    let bytes = serialize(&video);
    assert_eq!(bytes[..4], media::VideoOld2::CONSTRUCTOR_ID.to_le_bytes());

    let object = from_bytes(&bytes, true).unwrap().unwrap();
    assert!(object.as_any().downcast_ref::<media::Video>().is_none());
    assert!(object.as_any().downcast_ref::<media::VideoOld>().is_none());
    let parsed = object.as_any().downcast_ref::<media::VideoOld2>().unwrap();
    assert_eq!(*parsed, video);
}

#[test]
fn all_video_layouts_roundtrip_through_the_entity_enum() {
    let thumb = sample_thumb();
    let variants = [
        enums::Video::Empty(media::VideoEmpty { id: 1 }),
        enums::Video::Old(media::VideoOld {
            id: 2,
            access_hash: 3,
            user_id: 4,
            date: 5,
            caption: "old".into(),
            duration: 6,
            size: 7,
            thumb: thumb.clone(),
            dc_id: 8,
            w: 9,
            h: 10,
        }),
        enums::Video::Old2(media::VideoOld2 {
            id: 2,
            access_hash: 3,
            user_id: 4,
            date: 5,
            caption: "old2".into(),
            duration: 6,
            mime_type: "video/avi".into(),
            size: 7,
            thumb: thumb.clone(),
            dc_id: 8,
            w: 9,
            h: 10,
        }),
        enums::Video::Old3(media::VideoOld3 {
            id: 2,
            access_hash: 3,
            user_id: 4,
            date: 5,
            duration: 6,
            size: 7,
            thumb: thumb.clone(),
            dc_id: 8,
            w: 9,
            h: 10,
        }),
        enums::Video::Video(media::Video {
            id: 2,
            access_hash: 3,
            date: 5,
            duration: 6,
            mime_type: "video/mp4".into(),
            size: 7,
            thumb,
            dc_id: 8,
            w: 9,
            h: 10,
        }),
    ];

    for video in variants {
        let mut buf = WireBuffer::new();
        video.serialize_to_stream(&mut buf);
        let parsed = enums::Video::deserialize(&mut buf, true).unwrap();
        assert_eq!(parsed, video);
        assert_eq!(parsed.constructor_id(), video.constructor_id());
        assert_eq!(buf.remaining(), 0, "body must be consumed exactly");
    }
}

#[test]
fn entity_dispatch_rejects_a_sibling_family_tag() {
    // an audio payload must not decode through the Video entity
    let audio = media::AudioEmpty { id: 12 };
    let mut buf = WireBuffer::new();
    tgstore_types::TlObject::serialize_to_stream(&audio, &mut buf);
    let result = enums::Video::deserialize(&mut buf, true);
    assert_eq!(
        result,
        Err(Error::UnexpectedConstructor { id: media::AudioEmpty::CONSTRUCTOR_ID })
    );
}

#[test]
fn entity_dispatch_lenient_returns_none_for_unknown_tags() {
    let mut buf = WireBuffer::new();
    let parsed = enums::Photo::deserialize_from(&mut buf, 0xdeadbeef, false).unwrap();
    assert!(parsed.is_none());
}

// ── Audio / Document families ─────────────────────────────────────────────────

#[test]
fn audio_layouts_roundtrip() {
    let variants = [
        enums::Audio::Empty(media::AudioEmpty { id: 31 }),
        enums::Audio::Old(media::AudioOld {
            id: 32,
            access_hash: 1,
            user_id: 2,
            date: 3,
            duration: 4,
            size: 5,
            dc_id: 6,
        }),
        enums::Audio::Old2(media::AudioOld2 {
            id: 33,
            access_hash: 1,
            user_id: 2,
            date: 3,
            duration: 4,
            mime_type: "audio/ogg".into(),
            size: 5,
            dc_id: 6,
        }),
        enums::Audio::Audio(media::Audio {
            id: 34,
            access_hash: 1,
            date: 3,
            duration: 4,
            mime_type: "audio/mpeg".into(),
            size: 5,
            dc_id: 6,
        }),
    ];
    for audio in variants {
        let mut buf = WireBuffer::new();
        audio.serialize_to_stream(&mut buf);
        assert_eq!(enums::Audio::deserialize(&mut buf, true).unwrap(), audio);
    }
}

#[test]
fn document_old_keeps_its_own_field_set() {
    let doc = media::DocumentOld {
        id: 51,
        access_hash: 52,
        user_id: 53,
        date: 54,
        file_name: "notes.txt".into(),
        mime_type: "text/plain".into(),
        size: 55,
        thumb: enums::PhotoSize::Empty(media::PhotoSizeEmpty { ty: "s".into() }),
        dc_id: 56,
    };
    let object = from_bytes(&serialize(&doc), true).unwrap().unwrap();
    let parsed = object.as_any().downcast_ref::<media::DocumentOld>().unwrap();
    assert_eq!(*parsed, doc);
}

// ── Photos: nested vectors and geo points ─────────────────────────────────────

#[test]
fn photo_roundtrips_nested_size_list() {
    let photo = media::Photo {
        id: 61,
        access_hash: 62,
        date: 63,
        sizes: vec![
            enums::PhotoSize::Empty(media::PhotoSizeEmpty { ty: "s".into() }),
            sample_thumb(),
            enums::PhotoSize::Cached(media::PhotoCachedSize {
                ty: "x".into(),
                location: enums::FileLocation::Unavailable(media::FileLocationUnavailable {
                    volume_id: 1,
                    local_id: 2,
                    secret: 3,
                }),
                w: 90,
                h: 60,
                bytes: vec![0xde, 0xad, 0xbe, 0xef, 0x05],
            }),
        ],
    };
    let object = from_bytes(&serialize(&photo), true).unwrap().unwrap();
    let parsed = object.as_any().downcast_ref::<media::Photo>().unwrap();
    assert_eq!(*parsed, photo);
}

#[test]
fn photo_old_carries_caption_and_geo() {
    let photo = media::PhotoOld {
        id: 71,
        access_hash: 72,
        user_id: 73,
        date: 74,
        caption: "sunset".into(),
        geo: enums::GeoPoint::Point(media::GeoPoint { lon: 13.4050, lat: 52.5200 }),
        sizes: vec![sample_thumb()],
    };
    let object = from_bytes(&serialize(&photo), true).unwrap().unwrap();
    let parsed = object.as_any().downcast_ref::<media::PhotoOld>().unwrap();
    assert_eq!(*parsed, photo);
}

#[test]
fn geo_point_doubles_survive_exactly() {
    let geo = media::GeoPoint { lon: -0.127758, lat: 51.507351 };
    let mut buf = WireBuffer::new();
    tgstore_types::TlObject::serialize_to_stream(&geo, &mut buf);
    assert_eq!(buf.len(), 4 + 8 + 8);
    let parsed = enums::GeoPoint::deserialize(&mut buf, true).unwrap();
    assert_eq!(parsed, enums::GeoPoint::Point(geo));
}

// ── Corruption is contained, never guessed around ─────────────────────────────

#[test]
fn truncated_nested_thumb_fails_the_whole_video() {
    let video = media::VideoOld3 {
        id: 2,
        access_hash: 3,
        user_id: 4,
        date: 5,
        duration: 6,
        size: 7,
        thumb: sample_thumb(),
        dc_id: 8,
        w: 9,
        h: 10,
    };
    let bytes = serialize(&video);
    // chop the buffer inside the nested thumb
    let result = from_bytes(&bytes[..bytes.len() - 24], true);
    assert_eq!(result.map(|_| ()), Err(Error::UnexpectedEof));
}

#[test]
fn unknown_required_thumb_fails_even_leniently() {
    let video = media::VideoOld3 {
        thumb: sample_thumb(),
        ..Default::default()
    };
    let mut bytes = serialize(&video);
    // overwrite the thumb's constructor tag (after id, access_hash,
    // user_id, date, duration, size = 8 + 8 + 4 + 4 + 4 + 4 body bytes)
    let thumb_tag_at = 4 + 32;
    bytes[thumb_tag_at..thumb_tag_at + 4].copy_from_slice(&0xdeadbeefu32.to_le_bytes());
    let result = from_bytes(&bytes, false);
    assert_eq!(
        result.map(|_| ()),
        Err(Error::UnexpectedConstructor { id: 0xdeadbeef })
    );
}
