use palette::{FromColor, Srgb};

use super::*;

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        assert_approx_eq!($a, $b, 1e-9)
    };
    ($a:expr, $b:expr, $eps:expr) => {
        assert!(
            ($a - $b).abs() < $eps,
            "assertion failed: `(left ~= right)` (left: `{:?}`, right: `{:?}`)",
            $a,
            $b
        );
    };
}

fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn test_rgb_hsv_round_trip_every_color() {
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                let hsv = rgb_to_hsv(r, g, b);
                let back = hsv_to_rgb(hsv.h / 360.0, hsv.s, hsv.v);
                assert!(
                    channel_distance(back, Rgb::new(r, g, b)) <= 1,
                    "({r}, {g}, {b}) came back as {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_full_turn_wraps_to_first_sector() {
    for (s, v) in [(1.0, 1.0), (0.5, 0.8), (0.25, 0.3), (0.0, 0.6)] {
        assert_eq!(hsv_to_rgb(1.0, s, v), hsv_to_rgb(0.0, s, v));
    }
}

#[test]
fn test_sector_table() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), Rgb::new(255, 255, 0));
    assert_eq!(hsv_to_rgb(2.0 / 6.0, 1.0, 1.0), Rgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(3.0 / 6.0, 1.0, 1.0), Rgb::new(0, 255, 255));
    assert_eq!(hsv_to_rgb(4.0 / 6.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    assert_eq!(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    assert_eq!(hsv_to_rgb(0.5, 0.0, 0.0), Rgb::new(0, 0, 0));
}

#[test]
fn test_agrees_with_palette() {
    for step in 0..72 {
        let h = step as f64 * 5.0;
        for (s, v) in [(1.0, 1.0), (0.7, 0.4), (0.3, 0.9)] {
            let ours = hsv_to_rgb(h / 360.0, s, v);
            let (pr, pg, pb) =
                Srgb::from_color(palette::Hsv::new(h as f32, s as f32, v as f32)).into_components();
            let theirs = Rgb::new(to_u8(pr as f64), to_u8(pg as f64), to_u8(pb as f64));
            assert!(
                channel_distance(ours, theirs) <= 1,
                "hue {h}: {ours:?} vs palette {theirs:?}"
            );
        }
    }
}

#[test]
fn test_achromatic_is_stable() {
    let hsv = rgb_to_hsv(128, 128, 128);
    assert_approx_eq!(hsv.h, 0.0);
    assert_approx_eq!(hsv.s, 0.0);
    assert_approx_eq!(hsv.v, 128.0 / 255.0);

    let black = rgb_to_hsv(0, 0, 0);
    assert!(!black.h.is_nan() && !black.s.is_nan());
    assert_approx_eq!(black.s, 0.0);
}

#[test]
fn test_hsv_known_values() {
    let blue = rgb_to_hsv(0, 0, 255);
    assert_approx_eq!(blue.h, 240.0);
    assert_approx_eq!(blue.s, 1.0);
    assert_approx_eq!(blue.v, 1.0);

    // red is max with green < blue, so the hue wraps into the last sector
    let rose = rgb_to_hsv(255, 0, 128);
    assert!(rose.h > 300.0 && rose.h < 360.0);

    // hue is not rounded
    let odd = rgb_to_hsv(200, 100, 51);
    assert!(odd.h.fract() != 0.0);
}

#[test]
fn test_hex_formatting() {
    assert_eq!(rgb_to_hex(255, 0, 0), "#FF0000");
    assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    assert_eq!(rgb_to_hex(10, 171, 205), "#0AABCD");
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
}

#[test]
fn test_hex_parsing() {
    assert_eq!(hex_to_rgb("#00FF00"), Some(Rgb::new(0, 255, 0)));
    assert_eq!(hex_to_rgb("00ff00"), Some(Rgb::new(0, 255, 0)));
    assert_eq!(hex_to_rgb("#aBcDeF"), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
    assert_eq!(hex_to_rgb("not-a-color"), None);
    assert_eq!(hex_to_rgb("#FFF"), None);
    assert_eq!(hex_to_rgb("#FF00FF80"), None);
    assert_eq!(hex_to_rgb("##FF00FF"), None);
    assert_eq!(hex_to_rgb("#GG0000"), None);
    assert_eq!(hex_to_rgb(""), None);
    assert_eq!(hex_to_rgb("#ÿÿÿ"), None);
}

#[test]
fn test_rgb_from_str() {
    assert_eq!("#1E90FF".parse::<Rgb>(), Ok(Rgb::new(30, 144, 255)));
    assert_eq!(
        "#12".parse::<Rgb>(),
        Err(ParseColorError::InvalidHex("#12".to_owned()))
    );
}

#[test]
fn test_hsl_known_values() {
    assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
    assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
    assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
    assert_eq!(rgb_to_hsl(0, 0, 255), Hsl { h: 240, s: 100, l: 50 });
    assert_eq!(rgb_to_hsl(128, 128, 128), Hsl { h: 0, s: 0, l: 50 });
    // light colors take the lightness-dependent denominator
    assert_eq!(rgb_to_hsl(245, 245, 220), Hsl { h: 60, s: 56, l: 91 });
}

#[test]
fn test_hsl_hue_never_reports_full_turn() {
    assert_eq!(rgb_to_hsl(255, 0, 1).h, 0);
}

#[test]
fn test_channel_access() {
    let c = Rgb::new(1, 2, 3);
    assert_eq!(Channel::ALL.map(|ch| c.channel(ch)), [1, 2, 3]);
    assert_eq!(c.with_channel(Channel::Green, 200), Rgb::new(1, 200, 3));
}
