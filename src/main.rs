// src/main.rs

use std::time::Instant;
use log::{info, warn, debug, error};
use env_logger::Env;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use wordpoly::config::{DemoConfig, PolyConfig, RingKind};
use wordpoly::multiplication;
use wordpoly::{IntegerRing, ModularRing, Poly, Ring};

fn random_poly<R: Ring>(ring: &R, demo: &DemoConfig, rng: &mut ChaCha8Rng) -> Poly<R> {
    let bound = demo.coefficient_bound.max(0);
    let coefficients: Vec<i64> = (0..=demo.degree)
        .map(|_| rng.random_range(-bound..=bound))
        .collect();
    Poly::from_slice(ring.clone(), &coefficients)
}

/// Multiply random pairs along every path and check that they agree.
fn run_demo<R: Ring>(ring: R, demo: &DemoConfig) -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(demo.seed);
    let mut consistent = true;

    for round in 0..demo.rounds {
        let a = random_poly(&ring, demo, &mut rng);
        let b = random_poly(&ring, demo, &mut rng);
        debug!("Round {}: deg(a) = {}, deg(b) = {}", round, a.degree(), b.degree());

        let start = Instant::now();
        let mut reference = a.clone();
        if let Err(e) = reference.multiply_safe(&b) {
            error!("Safe multiplication failed: {}", e);
            return false;
        }
        info!("Round {}: dispatched safe product in {:?}", round, start.elapsed());

        let paths: [(&str, fn(&R, &[i64], &[i64]) -> Vec<i64>); 4] = [
            ("classical safe", |r, x, y| multiplication::multiply_classical_safe(r, x, y)),
            ("karatsuba safe", |r, x, y| multiplication::multiply_karatsuba_safe(r, x, y)),
            ("classical unsafe", |r, x, y| {
                let mut product = multiplication::multiply_classical_unsafe(x, y);
                r.value_of_all(&mut product);
                product
            }),
            ("karatsuba unsafe", |r, x, y| {
                let mut product = multiplication::multiply_karatsuba_unsafe(x, y);
                r.value_of_all(&mut product);
                product
            }),
        ];

        for (name, path) in paths {
            let start = Instant::now();
            let product = path(&ring, a.coefficients(), b.coefficients());
            let elapsed = start.elapsed();
            let result = Poly::from_slice(ring.clone(), &product);
            if result == reference {
                info!("Round {}: {} in {:?}", round, name, elapsed);
            } else {
                warn!("Round {}: {} disagrees with the safe product", round, name);
                consistent = false;
            }
        }

        let start = Instant::now();
        let mut automatic = a.clone();
        if let Err(e) = automatic.multiply(&b) {
            error!("Multiplication failed: {}", e);
            return false;
        }
        info!("Round {}: automatic path in {:?}", round, start.elapsed());
        if automatic != reference {
            warn!("Round {}: automatic path disagrees with the safe product", round);
            consistent = false;
        }

        let mut squared = a.clone();
        squared.square();
        let mut expected = a.clone();
        if expected.multiply_safe(&a).is_err() || squared != expected {
            warn!("Round {}: square disagrees with a * a", round);
            consistent = false;
        }
    }
    consistent
}

fn main() {
    let config = match PolyConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration, using defaults: {}", e);
            PolyConfig::default()
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("WORDPOLY_LOG", config.log_level.as_str())
        .write_style_or("WORDPOLY_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    info!("Configuration: {:?}", config);

    let demo = &config.demo;
    let consistent = match demo.ring {
        RingKind::Modular => match ModularRing::new(demo.modulus) {
            Ok(ring) => {
                info!("Multiplying degree {} polynomials over {}", demo.degree, ring);
                run_demo(ring, demo)
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(2);
            }
        },
        RingKind::Integer => {
            let ring = IntegerRing::new();
            info!("Multiplying degree {} polynomials over {}", demo.degree, ring);
            run_demo(ring, demo)
        }
    };

    if consistent {
        info!("All multiplication paths agree");
    } else {
        error!("Multiplication paths disagree");
        std::process::exit(1);
    }
}
