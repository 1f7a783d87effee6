use super::*;
use serde_json::json;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Rgba = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!(close(c.b, 1.0));
    assert!(close(c.a, 128.0 / 255.0));

    assert!(serde_json::from_value::<Rgba>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba>(json!("#zz0000")).is_err());
}

#[test]
fn parses_rgba_object_hsla_object_and_array() {
    let c: Rgba = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Rgba::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Rgba = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Rgba::rgba(0.25, 0.5, 0.75, 0.9));

    let c: Rgba = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!(close(c.r, 1.0));
    assert!(close(c.g, 0.0));
    assert!(close(c.b, 0.0));

    assert!(serde_json::from_value::<Rgba>(json!([0.1, 0.2])).is_err());
}

#[test]
fn from_str_accepts_hex_and_json_forms() {
    let c: Rgba = "#3366ff".parse().unwrap();
    assert!(close(c.r, 0.2));
    let c: Rgba = "[1, 0, 0]".parse().unwrap();
    assert_eq!(c, Rgba::rgb(1.0, 0.0, 0.0));
    assert!("not-a-color".parse::<Rgba>().is_err());
}

#[test]
fn hsl_of_primaries_and_grays() {
    let red = Rgba::rgb(1.0, 0.0, 0.0).to_hsl();
    assert!(close(red.h, 0.0) && close(red.s, 1.0) && close(red.l, 0.5));

    let green = Rgba::rgb(0.0, 1.0, 0.0).to_hsl();
    assert!(close(green.h, 120.0));

    let blue = Rgba::rgb(0.0, 0.0, 1.0).to_hsl();
    assert!(close(blue.h, 240.0));

    let gray = Rgba::rgb(0.4, 0.4, 0.4).to_hsl();
    assert!(close(gray.s, 0.0) && close(gray.l, 0.4));
}

#[test]
fn hsl_roundtrip_preserves_channels() {
    for c in [
        Rgba::rgb(0.2, 0.6, 0.9),
        Rgba::rgb(0.9, 0.1, 0.5),
        Rgba::rgb(0.3, 0.3, 0.1),
    ] {
        let hsl = c.to_hsl();
        let back = Rgba::from_hsla(hsl.h, hsl.s, hsl.l, c.a);
        assert!((back.r - c.r).abs() < 1e-9, "{c:?} -> {back:?}");
        assert!((back.g - c.g).abs() < 1e-9, "{c:?} -> {back:?}");
        assert!((back.b - c.b).abs() < 1e-9, "{c:?} -> {back:?}");
    }
}

#[test]
fn with_luminosity_keeps_hue_and_saturation() {
    let base = Rgba::rgba(0.2, 0.6, 0.9, 0.5);
    let lighter = base.with_luminosity(0.8);
    assert!((lighter.luminosity() - 0.8).abs() < 1e-9);
    assert!((lighter.hue() - base.hue()).abs() < 1e-6);
    assert!((lighter.saturation() - base.saturation()).abs() < 1e-6);
    assert_eq!(lighter.a, 0.5);

    let clamped = base.with_luminosity(1.7);
    assert!(close(clamped.luminosity(), 1.0));
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Rgba::rgba(1.0, 0.4, 0.4, 1.0);
    let b = Rgba::rgba(1.0, 0.0, 0.0, 0.25);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    let mid = a.lerp(b, 0.5);
    assert!(close(mid.g, 0.2));
    assert!(close(mid.a, 0.625));

    let odd = Rgba::rgba(0.1, 0.3, 0.7, 0.9);
    let other = Rgba::rgba(0.7, 0.1, 0.3, 0.2);
    assert_eq!(odd.lerp(other, 1.0), other);
    assert_eq!(odd.lerp(other, 0.0), odd);
}

#[test]
fn quantization_clamps_out_of_range_channels() {
    assert_eq!(Rgba::rgba(1.5, -0.2, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    assert_eq!(
        Rgba::rgba(1.0, 1.0, 1.0, 0.0).to_rgba8_premul(),
        Rgba8Premul::transparent()
    );
}

#[test]
fn lerp_tracks_the_difference_form_between_endpoints() {
    let a = Rgba::rgba(0.1, 0.3, 0.7, 0.9);
    let b = Rgba::rgba(0.7, 0.1, 0.3, 0.2);
    for i in 0..=1000 {
        let t = f64::from(i) / 1000.0;
        let got = a.lerp(b, t);
        assert!((got.r - (a.r + (b.r - a.r) * t)).abs() < 1e-12);
        assert!((got.g - (a.g + (b.g - a.g) * t)).abs() < 1e-12);
        assert!((got.b - (a.b + (b.b - a.b) * t)).abs() < 1e-12);
        assert!((got.a - (a.a + (b.a - a.a) * t)).abs() < 1e-12);
    }
}
