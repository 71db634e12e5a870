//! Shared utilities for the demo binaries.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
