use vgaball_core::color::hsv::hsv_to_rgb;
use vgaball_core::Rgb;

fn max_channel_delta(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn sector0_dim_red_truncates() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 0.3), Rgb::new(76, 0, 0));
}

#[test]
fn zero_saturation_is_grey() {
    let mut h = -30.0f32;
    while h < 400.0 {
        let c = hsv_to_rgb(h, 0.0, 0.6);
        assert!(c.r == c.g && c.g == c.b, "hue {h}: {c:?}");
        assert_eq!(c.r, (0.6f32 * 255.0) as u8);
        h += 7.3;
    }
}

#[test]
fn hue_wraps_both_ways() {
    assert_eq!(hsv_to_rgb(360.25, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0));
    assert_eq!(hsv_to_rgb(-0.25, 1.0, 1.0), hsv_to_rgb(359.75, 1.0, 1.0));
    assert_eq!(hsv_to_rgb(720.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
    assert_eq!(hsv_to_rgb(-359.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
}

#[test]
fn full_saturation_spans_zero_to_full() {
    for i in 0..720 {
        let h = i as f32 * 0.5;
        let c = hsv_to_rgb(h, 1.0, 1.0);
        let lo = c.r.min(c.g).min(c.b);
        let hi = c.r.max(c.g).max(c.b);
        assert_eq!(lo, 0, "hue {h}: {c:?}");
        assert_eq!(hi, 255, "hue {h}: {c:?}");
    }
}

#[test]
fn exactly_one_channel_off_mid_sector() {
    for k in 0..6 {
        let h = 30.0 + 60.0 * k as f32;
        let c = hsv_to_rgb(h, 1.0, 1.0);
        let zeros = [c.r, c.g, c.b].iter().filter(|&&x| x == 0).count();
        assert_eq!(zeros, 1, "hue {h}: {c:?}");
    }
}

#[test]
fn continuous_across_sector_boundaries() {
    for k in 1..=6 {
        let edge = 60.0 * k as f32;
        let before = hsv_to_rgb(edge - 0.1, 1.0, 1.0);
        let at = hsv_to_rgb(edge, 1.0, 1.0);
        assert!(
            max_channel_delta(before, at) <= 1,
            "edge {edge}: {before:?} vs {at:?}"
        );
    }
}

#[test]
fn fine_sweep_has_no_jumps() {
    let mut prev = hsv_to_rgb(0.0, 1.0, 1.0);
    for i in 1..=3600 {
        let h = i as f32 * 0.1;
        let c = hsv_to_rgb(h, 1.0, 1.0);
        assert!(max_channel_delta(prev, c) <= 1, "hue {h}: {prev:?} -> {c:?}");
        prev = c;
    }
}

#[test]
fn primaries_and_secondaries() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
}
