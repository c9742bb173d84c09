pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, Aabb, NVec2};
pub use simulation::quadtree::{Quadtree, QuadtreeNode, MAX_LEVELS, MAX_OBJECTS};
pub use simulation::collision::Collision;
pub use simulation::engine::PhysicsEngine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, WorldConfig, RectConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_broadphase, bench_step_curve};
