//! Controller layer: UI events, per-flow state machines, and command dispatch.

pub mod events;
pub mod flow;
pub mod orchestration;
