// src/polynomial/mod.rs

pub mod arithmetic;
pub mod big_poly;
pub mod content;
pub mod dense;
pub mod product;

pub use big_poly::BigPoly;
pub use dense::Poly;
