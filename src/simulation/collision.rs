//! Circle-circle collision detection and resolution
//!
//! Detection is a center-distance test (touching counts as colliding).
//! Resolution applies a single impulse along the separation normal with
//! restitution, using each body's inverse radius as a stand-in for inverse
//! mass, clamps speeds to the global cap, and injects a small random
//! horizontal kick to break exact-alignment configurations.

use rand::Rng;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

pub struct Collision;

impl Collision {
    /// True iff the distance between centers is at most the sum of radii.
    pub fn detect_body_body(a: &Body, b: &Body) -> bool {
        (a.x - b.x).norm() <= a.radius + b.radius
    }

    /// Resolve an overlapping pair with an impulse along the separation
    /// normal.
    ///
    /// No-ops on two singular configurations:
    /// - coincident centers (the normal is undefined), and
    /// - pairs already separating (`v_rel · n > 0`), which also makes a
    ///   repeated resolution of the same pair within a frame a no-op.
    ///
    /// Smaller bodies receive proportionally larger velocity change since
    /// the inverse radius plays the role of inverse mass. Both speeds are
    /// clamped to `params.max_speed` before the random kick is added.
    pub fn resolve_body_body<R: Rng>(a: &mut Body, b: &mut Body, params: &Parameters, rng: &mut R) {
        let delta = a.x - b.x;
        let dist = delta.norm();
        if dist == 0.0 {
            return; // coincident centers: normal undefined
        }
        let normal = delta / dist;

        let relative_v = a.v - b.v;
        let v_along_normal = relative_v.dot(&normal);
        if v_along_normal > 0.0 {
            return; // already separating
        }

        let inv_mass_a = 1.0 / a.radius;
        let inv_mass_b = 1.0 / b.radius;
        let impulse_scalar =
            -(1.0 + params.restitution) * v_along_normal / (inv_mass_a + inv_mass_b);
        let impulse = normal * impulse_scalar;

        // Equal and opposite, scaled by inverse radius
        a.v += impulse * inv_mass_a;
        b.v -= impulse * inv_mass_b;

        Self::clamp_speed(a, params.max_speed);
        Self::clamp_speed(b, params.max_speed);

        a.v.x += Self::random_perturbation(rng, params.perturbation);
        b.v.x += Self::random_perturbation(rng, params.perturbation);
    }

    /// Reflect the velocity component along `wall_normal` when the body is
    /// moving into the wall: `v' = v - 2 (v · n) n` for `v · n < 0`,
    /// otherwise leave the velocity unchanged.
    pub fn resolve_body_wall(body: &mut Body, wall_normal: NVec2) {
        let v_along_normal = body.v.dot(&wall_normal);
        if v_along_normal < 0.0 {
            body.v -= wall_normal * (2.0 * v_along_normal);
        }
    }

    /// Uniform kick in `[-amplitude, amplitude]`. Deterministic under a
    /// seeded generator; an amplitude of zero disables it.
    pub fn random_perturbation<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
        rng.gen_range(-amplitude..=amplitude)
    }

    /// Rescale the velocity to `max_speed` if it exceeds it.
    pub fn clamp_speed(body: &mut Body, max_speed: f64) {
        let speed = body.v.norm();
        if speed > max_speed {
            body.v *= max_speed / speed;
        }
    }
}
