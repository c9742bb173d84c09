use std::time::Instant;
use crate::simulation::collision::Collision;
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::Quadtree;
use crate::simulation::states::{Aabb, Body, NVec2};
use crate::simulation::engine::PhysicsEngine;

/// Helper to build `n` bodies scattered inside the wall rectangle
fn make_bodies(n: usize, walls: Aabb) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            walls.x + walls.width * (0.5 + 0.45 * (i_f * 0.37).sin()),
            walls.y + walls.height * (0.5 + 0.45 * (i_f * 0.13).cos()),
        );
        let v = NVec2::new((i_f * 0.07).sin() * 50.0, (i_f * 0.11).cos() * 50.0);

        bodies.push(Body { x, v, radius: 2.0 });
    }

    bodies
}

fn bench_walls() -> Aabb {
    Aabb {
        x: 660.0,
        y: 90.0,
        width: 600.0,
        height: 900.0,
    }
}

fn bench_domain() -> Aabb {
    Aabb {
        x: 0.0,
        y: 0.0,
        width: 1920.0,
        height: 1080.0,
    }
}

/// Compare the quadtree-pruned candidate scan against the brute-force
/// all-pairs detection pass for a range of body counts
pub fn bench_broadphase() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let bodies = make_bodies(n, bench_walls());

        // Brute force: every unordered pair
        let t0 = Instant::now();
        let mut brute_hits = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if Collision::detect_body_body(&bodies[i], &bodies[j]) {
                    brute_hits += 1;
                }
            }
        }
        let dt_brute = t0.elapsed().as_secs_f64();

        // Quadtree: rebuild, then detect over retrieved candidates only
        let t1 = Instant::now();
        let mut tree = Quadtree::new(bench_domain());
        for idx in 0..n {
            tree.insert(&bodies, idx);
        }
        let mut tree_hits = 0usize;
        let mut candidates = Vec::new();
        for i in 0..n {
            candidates.clear();
            tree.retrieve(&mut candidates, &bodies, i);
            for &j in &candidates {
                if j > i && Collision::detect_body_body(&bodies[i], &bodies[j]) {
                    tree_hits += 1;
                }
            }
        }
        let dt_tree = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, brute = {dt_brute:8.6} s ({brute_hits} hits), quadtree = {dt_tree:8.6} s ({tree_hits} hits)"
        );
    }
}

/// Benchmark full `step` cost for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 200 to give smoother graph
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let params = Parameters::default();
        let mut engine = PhysicsEngine::new(bench_domain(), bench_walls(), params)
            .expect("benchmark geometry is valid");
        for body in make_bodies(n, bench_walls()) {
            engine.add_body(body);
        }

        // Warm-up
        engine.step(0.01);

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.step(0.01);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
