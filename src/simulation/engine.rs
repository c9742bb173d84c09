//! Per-frame simulation orchestrator
//!
//! `PhysicsEngine` owns the authoritative body collection, the quadtree
//! over the fixed domain, the interior wall rectangle, and all mutable
//! toggles (gravity flag, random number state) as explicit fields.
//!
//! Each frame the external caller supplies `dt` and invokes [`PhysicsEngine::step`];
//! the phases run strictly in order with no branching back:
//!
//! 1. gravity (if enabled)
//! 2. Euler integration + friction damping
//! 3. quadtree clear + rebuild in collection order
//! 4. wall confinement (clamp + restitution flip + horizontal kick)
//! 5. body-body resolution over quadtree candidates
//! 6. global speed clamp
//!
//! `dt` is expected to be pre-clamped by the caller; arbitrarily large
//! values are treated as valid-but-extreme input and never clamped here.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::collision::Collision;
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::Quadtree;
use crate::simulation::states::{Aabb, Body, System};

pub struct PhysicsEngine {
    pub system: System,
    pub parameters: Parameters,
    quadtree: Quadtree,
    walls: Aabb,
    gravity_enabled: bool,
    rng: StdRng,
    candidates: Vec<usize>, // scratch buffer reused across frames
}

impl PhysicsEngine {
    /// Build an engine over `domain` with the confining `walls` rectangle.
    ///
    /// Fails fast on a degenerate domain or wall rectangle, or walls that
    /// reach outside the domain.
    pub fn new(domain: Aabb, walls: Aabb, parameters: Parameters) -> Result<Self> {
        if domain.width <= 0.0 || domain.height <= 0.0 {
            bail!(
                "degenerate domain rectangle: {} x {}",
                domain.width,
                domain.height
            );
        }
        if walls.width <= 0.0 || walls.height <= 0.0 {
            bail!(
                "degenerate wall rectangle: {} x {}",
                walls.width,
                walls.height
            );
        }
        if walls.x < domain.x
            || walls.y < domain.y
            || walls.x + walls.width > domain.x + domain.width
            || walls.y + walls.height > domain.y + domain.height
        {
            bail!("wall rectangle must lie inside the domain");
        }

        let rng = StdRng::seed_from_u64(parameters.seed);
        Ok(Self {
            system: System {
                bodies: Vec::new(),
                t: 0.0,
            },
            quadtree: Quadtree::new(domain),
            walls,
            gravity_enabled: false,
            rng,
            parameters,
            candidates: Vec::new(),
        })
    }

    /// Append a body to the collection. Bodies are added at setup and never
    /// removed during a run.
    pub fn add_body(&mut self, body: Body) {
        self.system.bodies.push(body);
    }

    /// Current body states, read by the rendering collaborator each frame.
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// The static wall rectangle, for overlay drawing.
    pub fn walls(&self) -> Aabb {
        self.walls
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Toggle gravity; the signal itself comes from the caller's input
    /// handling.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Advance the simulation by one frame of length `dt`.
    pub fn step(&mut self, dt: f64) {
        let p = self.parameters.clone();

        // 1. Force application
        if self.gravity_enabled {
            for body in &mut self.system.bodies {
                body.v.y -= p.gravity * dt;
            }
        }

        // 2. Integration, then friction damping
        for body in &mut self.system.bodies {
            body.integrate(dt);
            body.v *= p.friction;
        }

        // 3. Rebuild the spatial index in collection order
        self.quadtree.clear();
        for idx in 0..self.system.bodies.len() {
            self.quadtree.insert(&self.system.bodies, idx);
        }

        // 4. Wall confinement: clamp to the boundary, flip and scale the
        // offending component, kick the horizontal component. The kick is
        // horizontal even on top/bottom hits, matching the original model.
        for body in &mut self.system.bodies {
            if body.x.x - body.radius < self.walls.x {
                body.x.x = self.walls.x + body.radius;
                body.v.x = -body.v.x * p.restitution;
                body.v.x += Collision::random_perturbation(&mut self.rng, p.perturbation);
            } else if body.x.x + body.radius > self.walls.x + self.walls.width {
                body.x.x = self.walls.x + self.walls.width - body.radius;
                body.v.x = -body.v.x * p.restitution;
                body.v.x += Collision::random_perturbation(&mut self.rng, p.perturbation);
            }

            if body.x.y - body.radius < self.walls.y {
                body.x.y = self.walls.y + body.radius;
                body.v.y = -body.v.y * p.restitution;
                body.v.x += Collision::random_perturbation(&mut self.rng, p.perturbation);
            } else if body.x.y + body.radius > self.walls.y + self.walls.height {
                body.x.y = self.walls.y + self.walls.height - body.radius;
                body.v.y = -body.v.y * p.restitution;
                body.v.x += Collision::random_perturbation(&mut self.rng, p.perturbation);
            }
        }

        // 5. Body-body resolution over quadtree candidates. Pairs may be
        // visited twice (once from each side); the separating-pair no-op in
        // the resolver keeps the second visit from double-applying impulses.
        let n = self.system.bodies.len();
        let mut candidates = std::mem::take(&mut self.candidates);
        for i in 0..n {
            candidates.clear();
            self.quadtree.retrieve(&mut candidates, &self.system.bodies, i);
            for &j in &candidates {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.system.bodies, i, j);
                if Collision::detect_body_body(a, b) {
                    Collision::resolve_body_body(a, b, &p, &mut self.rng);
                }
            }
        }
        self.candidates = candidates;

        // 6. Post-condition: no body exceeds the global speed cap
        for body in &mut self.system.bodies {
            Collision::clamp_speed(body, p.max_speed);
        }

        self.system.t += dt;
    }
}

/// Disjoint mutable references to two distinct body slots.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
