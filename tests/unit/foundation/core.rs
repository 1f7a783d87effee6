use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(1)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn region_keeps_origin_and_size() {
    let r = region(10.0, 20.0, 200.0, 100.0);
    assert_eq!(r.width(), 200.0);
    assert_eq!(r.height(), 100.0);
    assert_eq!(r.center(), Point::new(110.0, 70.0));

    let zero = region(5.0, 5.0, 0.0, 0.0);
    assert_eq!(zero.width(), 0.0);
    assert_eq!(zero.center(), Point::new(5.0, 5.0));
}

#[test]
fn canvas_u16_bounds() {
    assert_eq!(
        Canvas {
            width: 64,
            height: 32
        }
        .to_u16()
        .unwrap(),
        (64, 32)
    );
    assert!(
        Canvas {
            width: 0,
            height: 32
        }
        .to_u16()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 32
        }
        .to_u16()
        .is_err()
    );
}

#[test]
fn premul_roundtrip_is_close() {
    let p = Rgba8Premul::from_straight_rgba(200, 100, 50, 128);
    let [r, g, b, a] = p.to_straight_rgba();
    assert_eq!(a, 128);
    assert!((i32::from(r) - 200).abs() <= 2);
    assert!((i32::from(g) - 100).abs() <= 2);
    assert!((i32::from(b) - 50).abs() <= 2);
    assert_eq!(Rgba8Premul::transparent().to_straight_rgba(), [0, 0, 0, 0]);
}

#[test]
fn seekable_frames_are_capped() {
    assert_eq!(
        FrameIndex(MAX_FRAME_INDEX).check_seekable().unwrap(),
        FrameIndex(MAX_FRAME_INDEX)
    );
    assert!(matches!(
        FrameIndex(MAX_FRAME_INDEX + 1).check_seekable(),
        Err(OrbError::Validation(_))
    ));
    assert!(FrameIndex(u64::MAX).check_seekable().is_err());
}
