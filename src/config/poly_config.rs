// src/config/poly_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Configuration of the `wordpoly` demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Random multiplication workload
    pub demo: DemoConfig,
}

/// Coefficient ring of the demo workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    /// Plain integers, overflow-checked
    Integer,
    /// Integers modulo `demo.modulus`
    Modular,
}

/// Workload run by the binary to compare multiplication paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Degree of each random operand
    pub degree: usize,

    /// Coefficient ring ("integer" or "modular")
    pub ring: RingKind,

    /// Modulus used when `ring` is "modular"
    pub modulus: i64,

    /// Random coefficients are drawn from `-bound..=bound`, then reduced into the ring
    pub coefficient_bound: i64,

    /// Seed of the ChaCha generator
    pub seed: u64,

    /// Number of products per path
    pub rounds: usize,
}

impl Default for PolyConfig {
    fn default() -> Self {
        PolyConfig {
            log_level: "info".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            degree: 1000,
            ring: RingKind::Modular,
            modulus: 1_000_003,
            coefficient_bound: 1000,
            seed: 42,
            rounds: 3,
        }
    }
}

impl PolyConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("demo.degree", 1000)?
            .set_default("demo.ring", "modular")?
            .set_default("demo.modulus", 1_000_003)?
            .set_default("demo.coefficient_bound", 1000)?
            .set_default("demo.seed", 42)?
            .set_default("demo.rounds", 3)
    }

    fn environment() -> Environment {
        // Override with environment variables (WORDPOLY_DEMO__DEGREE=...)
        Environment::with_prefix("WORDPOLY")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if Path::new("wordpoly.toml").exists() {
            builder = builder.add_source(File::with_name("wordpoly.toml"));
        } else if Path::new("wordpoly.yaml").exists() {
            builder = builder.add_source(File::with_name("wordpoly.yaml"));
        }

        builder.add_source(Self::environment()).build()?.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder.add_source(Self::environment()).build()?.try_deserialize()
    }
}
