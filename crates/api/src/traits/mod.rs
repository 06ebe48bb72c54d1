//! Trait definitions for the collaborators of the ucrypt primitives

pub mod random;

pub use random::RandomSource;
