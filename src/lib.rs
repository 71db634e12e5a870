// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: lossy numeric casts and exact float comparisons against
// constants are routine
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::struct_excessive_bools)]

//! Small rendering tutorials built on wgpu: textured geometry, coordinate
//! systems, and a first-person fly camera.
//!
//! The crate is a library of shared building blocks plus two demo binaries
//! (`coordinate-systems` and `fly-camera`) that assemble their pipelines
//! inline.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - first-person yaw/pitch camera core
//! - [`camera::CameraController`] - camera plus its GPU uniform resources
//! - [`input::InputState`] - per-frame input accumulator drained by the
//!   camera update step
//! - [`gpu::RenderContext`] - wgpu device, queue, and surface wrapper
//! - [`options::Options`] - runtime configuration (window, camera, key
//!   bindings)

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraController, MoveDirection};
pub use error::GlintError;
pub use input::InputState;
