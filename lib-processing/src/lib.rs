#![cfg_attr(not(test), no_std)]

#[cfg(test)]
use math::*;

pub mod config;
pub use config::*;

pub mod sample;
pub use sample::*;

pub mod state;
pub use state::*;

pub mod gravity;
pub use gravity::*;

pub mod linear_acceleration;
pub use linear_acceleration::*;

pub mod integrator;
pub use integrator::*;

pub mod drift;
pub use drift::*;

pub mod orientation;
pub use orientation::*;

pub mod algorithm;
pub use algorithm::*;

/// Re-exported so downstream crates do not need a direct dependency on the math crate.
pub use math::Vector3;
