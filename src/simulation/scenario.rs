//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - a ready [`PhysicsEngine`] with all bodies inserted at t = 0
//!
//! The headless runner in `main.rs` consumes the bundle directly.

use anyhow::Result;

use crate::configuration::config::{BodyConfig, RectConfig, ScenarioConfig};
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Aabb, Body, NVec2};

/// A fully-initialized runtime scenario.
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: PhysicsEngine,
}

impl Scenario {
    /// Validate and assemble a runtime scenario from its YAML-facing form.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            seed: p_cfg.seed,
            gravity: p_cfg.gravity,
            friction: p_cfg.friction,
            restitution: p_cfg.restitution,
            max_speed: p_cfg.max_speed,
            perturbation: p_cfg.perturbation,
        };

        let domain = rect(cfg.world.domain)?;
        let walls = rect(cfg.world.walls)?;

        let mut engine = PhysicsEngine::new(domain, walls, parameters.clone())?;
        engine.set_gravity_enabled(cfg.engine.gravity_enabled);

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        for bc in &cfg.bodies {
            engine.add_body(body(bc)?);
        }

        Ok(Self { parameters, engine })
    }
}

fn rect(cfg: RectConfig) -> Result<Aabb> {
    Aabb::new(cfg.x, cfg.y, cfg.width, cfg.height)
}

fn body(cfg: &BodyConfig) -> Result<Body> {
    Body::new(
        NVec2::new(cfg.x[0], cfg.x[1]),
        NVec2::new(cfg.v[0], cfg.v[1]),
        cfg.radius,
    )
}
