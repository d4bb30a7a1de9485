//! Connected-particle network: bouncing particles, links between close
//! pairs, and links from the cursor to nearby particles.

use super::{Point, Rgba, Surface};
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

pub fn spawn(rng: &mut StdRng, size: Vec2, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
            vel: Vec2::new(
                rng.gen_range(-NETWORK_MAX_SPEED..NETWORK_MAX_SPEED),
                rng.gen_range(-NETWORK_MAX_SPEED..NETWORK_MAX_SPEED),
            ),
            radius: NETWORK_MIN_RADIUS + rng.gen::<f32>() * NETWORK_RADIUS_SPAN,
            opacity: 1.0,
        })
        .collect()
}

pub fn step(points: &mut [Point], size: Vec2, frames: f32) {
    for p in points.iter_mut() {
        p.pos += p.vel * frames;
        bounce(p, size);
    }
}

/// Reflect a point that crossed an edge and pull it back inside.
///
/// The velocity is only flipped when it points outward, so a point sitting
/// exactly on an edge does not jitter between directions.
pub fn bounce(p: &mut Point, size: Vec2) {
    if p.pos.x < 0.0 || p.pos.x > size.x {
        if (p.pos.x < 0.0) == (p.vel.x < 0.0) {
            p.vel.x = -p.vel.x;
        }
        p.pos.x = p.pos.x.clamp(0.0, size.x);
    }
    if p.pos.y < 0.0 || p.pos.y > size.y {
        if (p.pos.y < 0.0) == (p.vel.y < 0.0) {
            p.vel.y = -p.vel.y;
        }
        p.pos.y = p.pos.y.clamp(0.0, size.y);
    }
}

/// Opacity of a link of length `distance`, or `None` past `max_distance`.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32) -> Option<f32> {
    (distance < max_distance).then(|| 1.0 - distance / max_distance)
}

pub fn draw<S: Surface>(points: &[Point], pointer: Option<Vec2>, surface: &mut S) {
    let accent = Rgba::new(ACCENT_RGB, 1.0);
    for p in points {
        surface.fill_disc(p.pos, p.radius, accent);
    }

    // Each unordered pair once
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if let Some(alpha) = link_alpha(a.pos.distance(b.pos), NETWORK_LINK_DISTANCE) {
                surface.stroke_line(a.pos, b.pos, NETWORK_LINK_WIDTH, accent.with_alpha(alpha));
            }
        }
    }

    if let Some(m) = pointer {
        for p in points {
            if let Some(alpha) = link_alpha(m.distance(p.pos), NETWORK_POINTER_DISTANCE) {
                surface.stroke_line(m, p.pos, NETWORK_POINTER_WIDTH, accent.with_alpha(alpha));
            }
        }
    }
}
