//! Background Tasks Module
//!
//! Optional tasks that run alongside a shared cache.
//!
//! # Tasks
//! - Expiry Sweep: Purges expired entries at a fixed interval instead of waiting for access

mod sweep;

pub use sweep::spawn_sweep_task;
