//! Internal utilities for the ucrypt library
//!
//! Not part of the public API: constant-time helpers and the little-endian
//! digit codec shared by the member crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
