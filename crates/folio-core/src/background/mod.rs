//! Animated canvas background.
//!
//! One animator, two strategies: a particle network with distance-faded
//! links, or a field of dots lit up around a smoothed cursor. The animator
//! owns its points and the last pointer position; the host calls
//! [`Background::tick`] and [`Background::draw`] once per display frame.

pub mod glow;
pub mod network;
mod surface;

pub use surface::{Rgba, Surface};

use crate::constants::*;
use crate::error::FolioError;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundStyle {
    #[default]
    Network,
    Glow,
}

impl BackgroundStyle {
    /// Parse the canvas `data-background` attribute. Unknown values fall back
    /// to the network style.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("glow") => BackgroundStyle::Glow,
            _ => BackgroundStyle::Network,
        }
    }

    pub fn area_per_point(self) -> f32 {
        match self {
            BackgroundStyle::Network => NETWORK_AREA_PER_POINT,
            BackgroundStyle::Glow => GLOW_AREA_PER_POINT,
        }
    }
}

/// `floor(width * height / divisor)`, zero for empty or degenerate input, or
/// `None` when the count would exceed [`MAX_POINTS`].
pub fn checked_point_count(width: f32, height: f32, divisor: f32) -> Option<usize> {
    if !(width > 0.0 && height > 0.0 && divisor > 0.0) {
        return Some(0);
    }
    let n = (width * height / divisor).floor();
    (n <= MAX_POINTS as f32).then_some(n as usize)
}

/// [`checked_point_count`] saturated at [`MAX_POINTS`].
pub fn point_count(width: f32, height: f32, divisor: f32) -> usize {
    checked_point_count(width, height, divisor).unwrap_or(MAX_POINTS)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    /// px per reference frame
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

pub struct Background {
    style: BackgroundStyle,
    size: Vec2,
    points: Vec<Point>,
    pointer: Option<Vec2>,
    smoothed_pointer: Vec2,
    rng: StdRng,
    generation: u64,
}

impl Background {
    pub fn new(
        style: BackgroundStyle,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, FolioError> {
        let mut bg = Self {
            style,
            size: Vec2::ZERO,
            points: Vec::new(),
            pointer: None,
            smoothed_pointer: Vec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
            generation: 0,
        };
        bg.resize(width, height)?;
        Ok(bg)
    }

    /// Replace the whole point set for a new viewport size.
    ///
    /// Sizes that are negative, non-finite or would need more than
    /// [`MAX_POINTS`] points are rejected and leave the current set in place.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), FolioError> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(FolioError::InvalidViewport { width, height });
        }
        let n = checked_point_count(width, height, self.style.area_per_point())
            .ok_or(FolioError::InvalidViewport { width, height })?;
        self.size = Vec2::new(width, height);
        if self.pointer.is_none() {
            self.smoothed_pointer = self.size * 0.5;
        }
        self.points = match self.style {
            BackgroundStyle::Network => network::spawn(&mut self.rng, self.size, n),
            BackgroundStyle::Glow => glow::spawn(&mut self.rng, self.size, n),
        };
        self.generation += 1;
        log::debug!(
            "[background] {:?} {}x{} -> {} points",
            self.style,
            width,
            height,
            n
        );
        Ok(())
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn tick(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        let frames = (dt_sec * REFERENCE_FPS).clamp(0.0, MAX_FRAMES_PER_TICK);
        match self.style {
            BackgroundStyle::Network => network::step(&mut self.points, self.size, frames),
            BackgroundStyle::Glow => {
                glow::step(&mut self.points, self.size, frames);
                if let Some(target) = self.pointer {
                    self.smoothed_pointer =
                        glow::follow(self.smoothed_pointer, target, dt_sec);
                }
            }
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        match self.style {
            BackgroundStyle::Network => network::draw(&self.points, self.pointer, surface),
            BackgroundStyle::Glow => glow::draw(&self.points, self.smoothed_pointer, surface),
        }
    }

    pub fn style(&self) -> BackgroundStyle {
        self.style
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn smoothed_pointer(&self) -> Vec2 {
        self.smoothed_pointer
    }

    /// Incremented on every full regeneration of the point set.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
