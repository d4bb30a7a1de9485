//! Cursor-glow field: slowly drifting dots that wrap around the viewport and
//! brighten near a smoothed cursor, under a soft radial glow.

use super::{Point, Rgba, Surface};
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

pub fn spawn(rng: &mut StdRng, size: Vec2, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
            vel: Vec2::new(
                rng.gen_range(-GLOW_MAX_SPEED..GLOW_MAX_SPEED),
                rng.gen_range(-GLOW_MAX_SPEED..GLOW_MAX_SPEED),
            ),
            radius: GLOW_MIN_RADIUS + rng.gen::<f32>() * GLOW_RADIUS_SPAN,
            opacity: GLOW_MIN_OPACITY + rng.gen::<f32>() * GLOW_OPACITY_SPAN,
        })
        .collect()
}

pub fn step(points: &mut [Point], size: Vec2, frames: f32) {
    for p in points.iter_mut() {
        p.pos += p.vel * frames;
        wrap(p, size);
    }
}

/// Move a point that left the viewport to the opposite edge.
pub fn wrap(p: &mut Point, size: Vec2) {
    p.pos.x = wrap_axis(p.pos.x, size.x);
    p.pos.y = wrap_axis(p.pos.y, size.y);
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    if v < 0.0 || v > extent {
        v.rem_euclid(extent)
    } else {
        v
    }
}

/// Exponential low-pass of `current` toward `target` over `dt_sec`.
#[inline]
pub fn follow(current: Vec2, target: Vec2, dt_sec: f32) -> Vec2 {
    let alpha = 1.0 - (-dt_sec.max(0.0) / GLOW_FOLLOW_TAU_SEC).exp();
    current + (target - current) * alpha
}

/// Proximity factor in `[0, 1]`: 1 at the cursor, 0 at the influence edge.
#[inline]
pub fn proximity(distance: f32) -> f32 {
    if distance < GLOW_INFLUENCE_DISTANCE {
        1.0 - distance / GLOW_INFLUENCE_DISTANCE
    } else {
        0.0
    }
}

pub fn draw<S: Surface>(points: &[Point], cursor: Vec2, surface: &mut S) {
    let accent = Rgba::new(ACCENT_RGB, 1.0);
    surface.fill_radial_glow(
        cursor,
        GLOW_GRADIENT_RADIUS,
        accent.with_alpha(GLOW_CENTER_ALPHA),
        accent.with_alpha(0.0),
    );
    for p in points {
        let f = proximity(cursor.distance(p.pos));
        let radius = p.radius * (1.0 + GLOW_RADIUS_BOOST * f);
        let alpha = (p.opacity + GLOW_OPACITY_BOOST * f).min(1.0);
        surface.fill_disc(p.pos, radius, accent.with_alpha(alpha));
    }
}
