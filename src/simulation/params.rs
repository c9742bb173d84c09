//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step size and end time for the headless runner,
//! - gravity, friction, restitution and the global speed cap,
//! - perturbation amplitude and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub seed: u64, // deterministic seed
    pub gravity: f64, // downward acceleration when gravity is enabled
    pub friction: f64, // per-step velocity damping multiplier
    pub restitution: f64, // fraction of normal velocity kept after impact
    pub max_speed: f64, // global speed cap
    pub perturbation: f64, // symmetry-breaking kick amplitude, 0 disables
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: 0.01,
            seed: 42,
            gravity: 29.4,
            friction: 0.997,
            restitution: 0.75,
            max_speed: 200.0,
            perturbation: 0.025,
        }
    }
}
