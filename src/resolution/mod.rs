//! Counter resolution.
//!
//! - `CounterResolver`: Runs the pipeline against a registry
//! - `Resolution`: Final quantity plus derivation steps
//! - `ResolutionEvent`: Entry or combat
//!
//! ## Pipeline
//!
//! 1. Clamp the base to 0 or more
//! 2. Apply active additive modifiers in registry order (and triggered
//!    bonuses, for entry events)
//! 3. Apply active multipliers in registry order, rounding up
//!
//! Resolution is a pure function of `(base, active)`: the same inputs
//! always give the same value and the same steps.

mod resolver;
mod step;

pub use resolver::{CounterResolver, ResolutionEvent};
pub use step::{Resolution, Step, StepOp, Steps};
