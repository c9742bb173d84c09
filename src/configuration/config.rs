//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine toggles (gravity)
//! - [`WorldConfig`]      – domain and interior wall rectangles
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   gravity_enabled: false
//!
//! world:
//!   domain: { x: 0.0, y: 0.0, width: 1920.0, height: 1080.0 }
//!   walls:  { x: 660.0, y: 90.0, width: 600.0, height: 900.0 }
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.01                # fixed step size
//!   seed: 42                # deterministic seed
//!   gravity: 29.4           # downward acceleration
//!   friction: 0.997         # per-step damping multiplier
//!   restitution: 0.75       # bounce energy retained
//!   max_speed: 200.0        # global speed cap
//!   perturbation: 0.025     # symmetry-breaking kick amplitude
//!
//! bodies:
//!   - x: [ 960.0, 950.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 10.0
//!   - x: [ 960.0, 900.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 10.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Engine toggles supplied by the scenario.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub gravity_enabled: bool, // apply gravity from the first frame on
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,        // time end
    pub h0: f64,           // time step size
    pub seed: u64,         // deterministic seed to make runs reproducible
    pub gravity: f64,      // downward acceleration when gravity is enabled
    pub friction: f64,     // per-step velocity damping multiplier
    pub restitution: f64,  // fraction of normal velocity kept after impact
    pub max_speed: f64,    // global speed cap
    pub perturbation: f64, // random kick amplitude
}

/// An axis-aligned rectangle as it appears in scenario files.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RectConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// World geometry: the quadtree domain and the confining wall rectangle.
#[derive(Deserialize, Debug)]
pub struct WorldConfig {
    pub domain: RectConfig, // outer rectangle the quadtree partitions
    pub walls: RectConfig,  // interior rectangle the bodies bounce inside
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in simulation units
    pub v: Vec<f64>, // initial velocity in simulation units per time unit
    pub radius: f64, // contact radius, also used for visualization scaling
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // engine toggles
    pub world: WorldConfig,           // world geometry
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
