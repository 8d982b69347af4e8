//! Sliding-tile ("n-puzzle") game logic.
//!
//! Everything stateful lives under [`puzzle`]; rendering, input capture and
//! HUD display are external collaborators that talk to the core through
//! indices and notification callbacks only.

pub mod puzzle;
