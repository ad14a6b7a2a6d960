// src/rings/mod.rs

pub mod integer;
pub mod modular;

pub use integer::IntegerRing;
pub use modular::ModularRing;
