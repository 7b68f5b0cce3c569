use vgaball_core::config::defaults::{normalized_preset, pixel_preset};
use vgaball_core::config::MotionConfig;
use vgaball_core::motion::normalized::{self, NormalizedMotion, NormalizedParams};
use vgaball_core::motion::pixel::{self, PixelMotion, PixelParams};

fn pixel_params() -> PixelParams {
    match pixel_preset().motion {
        MotionConfig::Pixel(p) => p,
        other => panic!("unexpected preset motion: {other:?}"),
    }
}

fn normalized_params() -> NormalizedParams {
    match normalized_preset().motion {
        MotionConfig::Normalized(n) => n,
        other => panic!("unexpected preset motion: {other:?}"),
    }
}

#[test]
fn left_bound_contact_lands_inside() {
    let mut m = PixelMotion::new(PixelParams {
        start: (20, 100),
        velocity: (-1, 1),
        ..pixel_params()
    });

    for _ in 0..3 {
        let s = m.step();
        assert!(!s.bounce.x);
    }
    assert_eq!(m.xy().0, 17);

    // 17 -> 16 touches the radius line; reflect and re-apply in the same tick.
    let s = m.step();
    assert!(s.bounce.x);
    assert!(!s.bounce.y);
    assert_eq!(m.xy().0, 17);
    assert_eq!(m.velocity().0, 1);
    assert_eq!(s.position.x, 17 << 6);
}

#[test]
fn preset_first_bounces() {
    let mut m = PixelMotion::new(pixel_params());

    let mut first_y = None;
    let mut first_x = None;
    for tick in 1..=1000u32 {
        let s = m.step();
        if s.bounce.y && first_y.is_none() {
            first_y = Some((tick, m.xy().1));
        }
        if s.bounce.x && first_x.is_none() {
            first_x = Some((tick, m.xy().0));
        }
    }

    // y runs 20 -> 464 (480 - 16), x runs 20 -> 624 (640 - 16)
    assert_eq!(first_y, Some((444, 463)));
    assert_eq!(first_x, Some((604, 623)));
}

#[test]
fn pixel_flip_then_reapply() {
    let mut m = PixelMotion::new(pixel_params());
    for _ in 0..5000 {
        let (x0, y0) = m.xy();
        let (dx0, dy0) = m.velocity();
        let s = m.step();
        let (x1, y1) = m.xy();
        let (dx1, dy1) = m.velocity();

        if s.bounce.x {
            assert_eq!(dx1, -dx0);
            assert_eq!(x1, x0 + dx0 + dx1);
        } else {
            assert_eq!(dx1, dx0);
            assert_eq!(x1, x0 + dx0);
        }
        if s.bounce.y {
            assert_eq!(dy1, -dy0);
            assert_eq!(y1, y0 + dy0 + dy1);
        } else {
            assert_eq!(dy1, dy0);
            assert_eq!(y1, y0 + dy0);
        }
    }
}

#[test]
fn normalized_flip_then_reapply() {
    let mut m = NormalizedMotion::new(normalized_params());
    let mut bounces = 0;
    for _ in 0..1000 {
        let (x0, _) = m.xy();
        let (dx0, dy0) = m.velocity();
        let s = m.step();
        let (x1, _) = m.xy();
        let (dx1, dy1) = m.velocity();

        if s.bounce.x {
            bounces += 1;
            assert_eq!(dx1, -dx0);
            assert!((x1 - x0).abs() < 1e-5, "bounce should land back at {x0}, got {x1}");
        } else {
            assert_eq!(dx1, dx0);
        }
        if !s.bounce.y {
            assert_eq!(dy1, dy0);
        }
    }
    assert!(bounces > 0);
}

#[test]
fn normalized_stays_on_scaled_grid() {
    let mut m = NormalizedMotion::new(normalized_params());
    for _ in 0..2000 {
        let p = m.step().position;
        assert!(p.x <= 170, "{p:?}");
        assert!(p.y <= 120, "{p:?}");
    }
}

#[test]
fn device_scaling_is_monotonic() {
    let mut prev = 0u16;
    for x in 0..640 {
        let d = pixel::to_device(x, 6);
        assert!(d >= prev);
        prev = d;
    }

    let mut prev = 0u16;
    for i in 0..=1000 {
        let d = normalized::to_device(i as f32 / 1000.0, 170.0);
        assert!(d >= prev);
        prev = d;
    }
    assert_eq!(prev, 170);
}
