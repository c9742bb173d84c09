//! Core state types for the ball simulation.
//!
//! Defines the body/system structs plus the axis-aligned rectangle used
//! both as the confining wall boundary and as quadtree node bounds:
//! - `Body` / `System` using `NVec2`
//! - `Aabb` rectangle with containment/intersection tests
//!
//! The system holds the list of bodies and the current simulation time `t`.

use anyhow::{bail, Result};
use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64, // contact radius
}

impl Body {
    /// Construct a body, rejecting a non-positive radius up front.
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            bail!("body radius must be positive, got {radius}");
        }
        Ok(Self { x, v, radius })
    }

    /// Advance position by one explicit Euler step: `x += v * dt`.
    /// Purely kinematic; no bounds or collision logic here.
    pub fn integrate(&mut self, dt: f64) {
        self.x += self.v * dt;
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

/// Axis-aligned rectangle: origin corner plus extents.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    /// Construct a rectangle, rejecting negative extents up front.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if width < 0.0 || height < 0.0 {
            bail!("rectangle extents must be non-negative, got {width} x {height}");
        }
        Ok(Self { x, y, width, height })
    }

    /// True if the body's bounding square lies fully inside this rectangle.
    pub fn contains(&self, body: &Body) -> bool {
        body.x.x - body.radius >= self.x
            && body.x.x + body.radius <= self.x + self.width
            && body.x.y - body.radius >= self.y
            && body.x.y + body.radius <= self.y + self.height
    }

    /// True if the two rectangles overlap (shared edges count).
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.x > self.x + self.width
            || other.x + other.width < self.x
            || other.y > self.y + self.height
            || other.y + other.height < self.y)
    }
}
