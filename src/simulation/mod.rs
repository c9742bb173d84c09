pub mod states;
pub mod params;
pub mod engine;
pub mod collision;
pub mod scenario;
pub mod quadtree;
