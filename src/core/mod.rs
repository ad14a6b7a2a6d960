// src/core/mod.rs

pub mod error;
pub mod ring;

pub use error::{PolyError, Result};
pub use ring::Ring;
