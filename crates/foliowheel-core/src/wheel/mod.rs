//! Wheel rotation pipeline.
//!
//! Turns noisy wheel and key input into a stable, spring-damped rotation
//! that always comes to rest on a fixed angular step, plus the derived
//! values the UI renders from it (active panel index, palette position,
//! bob displacement).
//!
//! # Architecture
//!
//! - `input` - merges all input sources into one raw step position,
//!   capping continuous bursts
//! - `snap` - rounds the raw position onto whole steps and times the
//!   idle resync
//! - `spring` - damped spring integration shared by rotation and bob
//! - `derive` - pure mappings from rotation state to presentation values
//! - `controller` - owns the pieces and advances them once per frame
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use foliowheel_core::wheel::WheelController;
//!
//! let mut wheel = WheelController::new(config.wheel.clone(), panel_count);
//! wheel.start(Instant::now());
//!
//! // On input:
//! wheel.step(1.0, Instant::now());
//!
//! // Every frame:
//! wheel.update(Instant::now());
//! let angle = wheel.rotation();
//! ```

pub mod controller;
pub mod derive;
pub mod input;
pub mod snap;
pub mod spring;

pub use controller::WheelController;
pub use spring::{SpringParams, SpringState};
