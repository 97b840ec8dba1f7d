use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decodes_png_and_keeps_straight_colors() {
    let bytes = png_bytes(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    let sprite = Sprite::from_image_bytes(&bytes).unwrap();
    assert_eq!((sprite.width(), sprite.height()), (2, 1));
    assert_eq!(sprite.pixel(0, 0), Some(Rgba8::RED));
    assert_eq!(sprite.pixel(1, 0), Some(Rgba8::BLUE));
    assert_eq!(sprite.pixel(2, 0), None);
}

#[test]
fn translucent_pixels_survive_premultiply_round_trip_closely() {
    let sprite = Sprite::from_rgba8(1, 1, vec![100, 50, 200, 128]).unwrap();
    let px = sprite.pixel(0, 0).unwrap();
    assert_eq!(px.a, 128);
    for (got, want) in [(px.r, 100u8), (px.g, 50), (px.b, 200)] {
        assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
    }
}

#[test]
fn rejects_garbage_and_bad_lengths() {
    assert!(Sprite::from_image_bytes(b"not an image").is_err());
    assert!(Sprite::from_rgba8(2, 2, vec![0; 3]).is_err());
    assert!(Sprite::from_rgba8(0, 2, Vec::new()).is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = Sprite::load(Path::new("no/such/actor.png")).unwrap_err();
    assert!(err.to_string().contains("actor.png"));
}

#[test]
fn solid_fills_every_pixel() {
    let sprite = Sprite::solid(3, 2, Rgba8::GREEN).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(sprite.pixel(x, y), Some(Rgba8::GREEN));
        }
    }
}

#[test]
fn zero_sized_crosshairs_are_rejected() {
    assert!(matches!(
        Sprite::crosshairs(0, Rgba8::WHITE, 4.0),
        Err(TweenError::Render(_))
    ));
    assert!(Sprite::default_actor_frames(0).is_err());
}

#[test]
fn crosshair_arms_follow_divisor() {
    let sprite = Sprite::crosshairs(16, Rgba8::WHITE, 4.0).unwrap();
    // Center (8, 8), arms reach 4 pixels.
    assert_eq!(sprite.pixel(8, 8), Some(Rgba8::WHITE));
    assert_eq!(sprite.pixel(8, 4), Some(Rgba8::WHITE));
    assert_eq!(sprite.pixel(12, 8), Some(Rgba8::WHITE));
    assert_eq!(sprite.pixel(8, 3).unwrap().a, 0);
    assert_eq!(sprite.pixel(13, 8).unwrap().a, 0);
    assert_eq!(sprite.pixel(0, 0).unwrap().a, 0);

    assert!(Sprite::crosshairs(16, Rgba8::WHITE, 0.5).is_err());
}

#[test]
fn default_actor_has_three_shrinking_frames() {
    let frames = Sprite::default_actor_frames(64).unwrap();
    assert_eq!(frames.len(), 3);
    let lit = |s: &Sprite| {
        (0..64)
            .flat_map(|y| (0..64).map(move |x| (x, y)))
            .filter(|&(x, y)| s.pixel(x, y).unwrap().a > 0)
            .count()
    };
    assert!(lit(&frames[0]) > lit(&frames[1]));
    assert!(lit(&frames[1]) > lit(&frames[2]));
}

#[test]
fn unpremultiply_handles_transparent() {
    assert_eq!(unpremultiply([0, 0, 0, 0]), Rgba8::new(0, 0, 0, 0));
    assert_eq!(unpremultiply([128, 0, 0, 128]), Rgba8::new(255, 0, 0, 128));
}
