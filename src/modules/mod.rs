//! Modules layer - Infrastructure components shared across features
//!
//! Contains alternative storage backends used outside production wiring.

#[cfg(test)]
pub mod persistence;
