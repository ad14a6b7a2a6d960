// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;
pub mod multiplication;
pub mod polynomial;
pub mod rings;

pub use crate::core::{PolyError, Result, Ring};
pub use crate::polynomial::{BigPoly, Poly};
pub use crate::rings::{IntegerRing, ModularRing};
