//! Controller layer: UI events and pre-submit constraint checks.

pub mod events;
pub mod validation;
