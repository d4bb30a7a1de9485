// Host-side tests for the background animator, drawn into a recording surface.

use folio_core::background::{glow, network};
use folio_core::constants::*;
use folio_core::*;
use glam::Vec2;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f32, f32),
    Disc { center: Vec2, radius: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, width: f32, alpha: f32 },
    Glow { center: Vec2, radius: f32 },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn lines(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|o| matches!(o, Op::Line { .. }))
            .collect()
    }
    fn discs(&self) -> usize {
        self.ops
            .iter()
            .filter(|o| matches!(o, Op::Disc { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Disc {
            center,
            radius,
            alpha: color.a,
        });
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(Op::Line {
            from,
            to,
            width,
            alpha: color.a,
        });
    }
    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, _inner: Rgba, _outer: Rgba) {
        self.ops.push(Op::Glow { center, radius });
    }
}

const FRAME: Duration = Duration::from_micros(16_667);

fn point(pos: Vec2, vel: Vec2) -> Point {
    Point {
        pos,
        vel,
        radius: 1.0,
        opacity: 0.5,
    }
}

#[test]
fn point_count_floors_area_over_divisor() {
    assert_eq!(point_count(800.0, 600.0, 9000.0), 53);
    assert_eq!(point_count(1920.0, 1080.0, 25000.0), 82);
    assert_eq!(point_count(90.0, 100.0, 9000.0), 1);
    assert_eq!(point_count(89.0, 100.0, 9000.0), 0);
}

#[test]
fn point_count_is_zero_for_degenerate_viewports() {
    assert_eq!(point_count(0.0, 600.0, 9000.0), 0);
    assert_eq!(point_count(-800.0, 600.0, 9000.0), 0);
    assert_eq!(point_count(-800.0, -600.0, 9000.0), 0);
    assert_eq!(point_count(f32::NAN, 600.0, 9000.0), 0);
    assert_eq!(point_count(800.0, 600.0, 0.0), 0);
}

#[test]
fn background_spawns_expected_counts_per_style() {
    let net = Background::new(BackgroundStyle::Network, 800.0, 600.0, 1).unwrap();
    assert_eq!(net.points().len(), 53);
    let glow = Background::new(BackgroundStyle::Glow, 800.0, 600.0, 1).unwrap();
    assert_eq!(glow.points().len(), 19);
    for p in net.points().iter().chain(glow.points()) {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        assert!(p.radius > 0.0);
    }
}

#[test]
fn background_rejects_invalid_viewport() {
    assert!(matches!(
        Background::new(BackgroundStyle::Network, -1.0, 600.0, 1),
        Err(FolioError::InvalidViewport { .. })
    ));
    let mut bg = Background::new(BackgroundStyle::Network, 800.0, 600.0, 1).unwrap();
    assert!(bg.resize(f32::INFINITY, 10.0).is_err());
    // the previous set survives a rejected resize
    assert_eq!(bg.points().len(), 53);
}

#[test]
fn oversized_viewport_is_rejected_not_allocated() {
    assert_eq!(point_count(1.0e19, 1.0e19, NETWORK_AREA_PER_POINT), MAX_POINTS);
    assert_eq!(checked_point_count(1.0e19, 1.0e19, NETWORK_AREA_PER_POINT), None);
    assert_eq!(checked_point_count(7680.0, 4320.0, NETWORK_AREA_PER_POINT), Some(3686));

    assert!(matches!(
        Background::new(BackgroundStyle::Glow, 1.0e19, 1.0e19, 1),
        Err(FolioError::InvalidViewport { .. })
    ));
    let mut bg = Background::new(BackgroundStyle::Network, 800.0, 600.0, 1).unwrap();
    assert!(bg.resize(1.0e19, 1.0e19).is_err());
    assert_eq!(bg.points().len(), 53);
    assert_eq!(bg.size(), Vec2::new(800.0, 600.0));
}

#[test]
fn resize_regenerates_the_whole_point_set() {
    let mut bg = Background::new(BackgroundStyle::Network, 800.0, 600.0, 7).unwrap();
    let before: Vec<Point> = bg.points().to_vec();
    let gen_before = bg.generation();

    bg.resize(400.0, 300.0).unwrap();

    assert_eq!(bg.generation(), gen_before + 1);
    assert_eq!(bg.points().len(), point_count(400.0, 300.0, NETWORK_AREA_PER_POINT));
    assert_eq!(bg.size(), Vec2::new(400.0, 300.0));
    for p in bg.points() {
        assert!(!before.contains(p), "point survived a resize: {p:?}");
        assert!(p.pos.x <= 400.0 && p.pos.y <= 300.0);
    }
}

#[test]
fn bounce_flips_velocity_and_clamps_inside() {
    let size = Vec2::new(100.0, 50.0);

    let mut p = point(Vec2::new(100.4, 25.0), Vec2::new(0.5, 0.1));
    network::bounce(&mut p, size);
    assert_eq!(p.vel.x, -0.5);
    assert_eq!(p.vel.y, 0.1);
    assert_eq!(p.pos.x, 100.0);

    let mut p = point(Vec2::new(10.0, -0.3), Vec2::new(0.2, -0.4));
    network::bounce(&mut p, size);
    assert_eq!(p.vel.y, 0.4);
    assert_eq!(p.pos.y, 0.0);
}

#[test]
fn bounce_does_not_reflip_a_point_already_heading_back() {
    let size = Vec2::new(100.0, 50.0);
    let mut p = point(Vec2::new(100.2, 25.0), Vec2::new(-0.5, 0.0));
    network::bounce(&mut p, size);
    assert_eq!(p.vel.x, -0.5);
    assert_eq!(p.pos.x, 100.0);
}

#[test]
fn wrap_moves_points_to_the_opposite_edge() {
    let size = Vec2::new(100.0, 50.0);

    let mut p = point(Vec2::new(100.5, 25.0), Vec2::new(0.5, 0.0));
    glow::wrap(&mut p, size);
    assert!((p.pos.x - 0.5).abs() < 1e-4);
    assert_eq!(p.vel.x, 0.5, "wrapping keeps velocity");

    let mut p = point(Vec2::new(20.0, -1.0), Vec2::new(0.0, -1.0));
    glow::wrap(&mut p, size);
    assert!((p.pos.y - 49.0).abs() < 1e-4);
}

#[test]
fn points_stay_in_bounds_over_many_ticks() {
    for style in [BackgroundStyle::Network, BackgroundStyle::Glow] {
        let mut bg = Background::new(style, 320.0, 240.0, 99).unwrap();
        for i in 0..2000 {
            // mix of normal frames and long stalls
            let dt = if i % 97 == 0 {
                Duration::from_secs(2)
            } else {
                FRAME
            };
            bg.tick(dt);
            for p in bg.points() {
                assert!(
                    (0.0..=320.0).contains(&p.pos.x) && (0.0..=240.0).contains(&p.pos.y),
                    "{style:?} point out of bounds: {p:?}"
                );
            }
        }
    }
}

#[test]
fn tick_scales_motion_by_elapsed_time() {
    let size = Vec2::new(1000.0, 1000.0);
    let mut pts = vec![point(Vec2::new(500.0, 500.0), Vec2::new(0.5, -0.25))];
    network::step(&mut pts, size, 2.0);
    assert_eq!(pts[0].pos, Vec2::new(501.0, 499.5));
}

#[test]
fn network_links_close_pairs_once_with_fading_alpha() {
    let pts = vec![
        point(Vec2::new(0.0, 0.0), Vec2::ZERO),
        point(Vec2::new(50.0, 0.0), Vec2::ZERO),
        point(Vec2::new(300.0, 0.0), Vec2::ZERO),
    ];
    let mut rec = Recorder::default();
    network::draw(&pts, None, &mut rec);

    assert_eq!(rec.discs(), 3);
    let lines = rec.lines();
    assert_eq!(lines.len(), 1);
    match lines[0] {
        Op::Line { width, alpha, .. } => {
            assert_eq!(*width, NETWORK_LINK_WIDTH);
            assert!((alpha - 0.5).abs() < 1e-6);
        }
        _ => unreachable!(),
    }
}

#[test]
fn network_links_pointer_to_particles_within_range() {
    let pts = vec![
        point(Vec2::new(0.0, 0.0), Vec2::ZERO),
        point(Vec2::new(400.0, 0.0), Vec2::ZERO),
    ];
    let mut rec = Recorder::default();
    network::draw(&pts, Some(Vec2::new(0.0, 75.0)), &mut rec);

    let lines = rec.lines();
    assert_eq!(lines.len(), 1);
    match lines[0] {
        Op::Line {
            from, width, alpha, ..
        } => {
            assert_eq!(*from, Vec2::new(0.0, 75.0));
            assert_eq!(*width, NETWORK_POINTER_WIDTH);
            assert!((alpha - 0.5).abs() < 1e-6);
        }
        _ => unreachable!(),
    }
}

#[test]
fn draw_starts_with_a_full_clear() {
    let mut bg = Background::new(BackgroundStyle::Network, 640.0, 480.0, 3).unwrap();
    bg.set_pointer(Vec2::new(10.0, 10.0));
    let mut rec = Recorder::default();
    bg.draw(&mut rec);
    assert_eq!(rec.ops.first(), Some(&Op::Clear(640.0, 480.0)));
    assert_eq!(rec.discs(), bg.points().len());
}

#[test]
fn glow_smoothed_pointer_converges_without_overshoot() {
    let mut bg = Background::new(BackgroundStyle::Glow, 800.0, 600.0, 5).unwrap();
    assert_eq!(bg.smoothed_pointer(), Vec2::new(400.0, 300.0));

    let target = Vec2::new(100.0, 100.0);
    bg.set_pointer(target);
    bg.tick(FRAME);
    let first = bg.smoothed_pointer();
    // roughly a tenth of the way after one 60 Hz frame
    let moved = Vec2::new(400.0, 300.0).distance(first);
    let gap = Vec2::new(400.0, 300.0).distance(target);
    assert!(moved > gap * 0.08 && moved < gap * 0.12, "moved {moved}");

    for _ in 0..600 {
        bg.tick(FRAME);
        let s = bg.smoothed_pointer();
        assert!(s.x >= target.x - 1e-3 && s.y >= target.y - 1e-3);
    }
    assert!(bg.smoothed_pointer().distance(target) < 0.01);
}

#[test]
fn resize_recenters_the_glow_until_the_pointer_moves() {
    let mut bg = Background::new(BackgroundStyle::Glow, 800.0, 600.0, 5).unwrap();
    bg.resize(400.0, 300.0).unwrap();
    assert_eq!(bg.smoothed_pointer(), Vec2::new(200.0, 150.0));

    bg.set_pointer(Vec2::new(50.0, 50.0));
    for _ in 0..600 {
        bg.tick(FRAME);
    }
    let settled = bg.smoothed_pointer();
    bg.resize(1000.0, 800.0).unwrap();
    // a known pointer keeps its glow where it is
    assert_eq!(bg.smoothed_pointer(), settled);
}

#[test]
fn glow_draws_gradient_then_boosted_dots_near_cursor() {
    let cursor = Vec2::new(100.0, 100.0);
    let near = point(Vec2::new(100.0, 150.0), Vec2::ZERO);
    let far = point(Vec2::new(500.0, 500.0), Vec2::ZERO);
    let mut rec = Recorder::default();
    glow::draw(&[near, far], cursor, &mut rec);

    assert_eq!(
        rec.ops[0],
        Op::Glow {
            center: cursor,
            radius: GLOW_GRADIENT_RADIUS
        }
    );
    match (&rec.ops[1], &rec.ops[2]) {
        (
            Op::Disc {
                radius: r_near,
                alpha: a_near,
                ..
            },
            Op::Disc {
                radius: r_far,
                alpha: a_far,
                ..
            },
        ) => {
            // f = 1 - 50/200 = 0.75
            assert!((r_near - 2.5).abs() < 1e-5);
            assert!((a_near - 0.95).abs() < 1e-5);
            assert_eq!(*r_far, 1.0);
            assert_eq!(*a_far, 0.5);
        }
        other => panic!("unexpected ops {other:?}"),
    }
}

#[test]
fn style_attr_parsing_defaults_to_network() {
    assert_eq!(BackgroundStyle::from_attr(Some("glow")), BackgroundStyle::Glow);
    assert_eq!(BackgroundStyle::from_attr(Some(" GLOW ")), BackgroundStyle::Glow);
    assert_eq!(BackgroundStyle::from_attr(Some("network")), BackgroundStyle::Network);
    assert_eq!(BackgroundStyle::from_attr(Some("sparkles")), BackgroundStyle::Network);
    assert_eq!(BackgroundStyle::from_attr(None), BackgroundStyle::Network);
}

#[test]
fn rgba_css_clamps_alpha() {
    assert_eq!(Rgba::new(ACCENT_RGB, 0.5).css(), "rgba(0, 243, 255, 0.500)");
    assert_eq!(Rgba::new([1, 2, 3], 1.7).css(), "rgba(1, 2, 3, 1.000)");
}
