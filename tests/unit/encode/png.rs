use super::*;
use std::path::PathBuf;

fn red_frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        // Opaque red, then half-transparent premultiplied red.
        data: vec![255, 0, 0, 255, 128, 0, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn writes_straight_alpha_png() {
    let path = PathBuf::from("target")
        .join("unit_png")
        .join("nested")
        .join("out.png");
    let _ = std::fs::remove_file(&path);

    save_png(&path, &red_frame()).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
}

#[test]
fn rejects_mismatched_buffer() {
    let mut frame = red_frame();
    frame.data.pop();
    let path = PathBuf::from("target").join("unit_png").join("bad.png");
    assert!(matches!(
        save_png(&path, &frame),
        Err(OrbError::Validation(_))
    ));
}
