//! Rating-scale geometry
//!
//! Builds the geometric description of an N-point rating scale: button
//! centers laid out symmetrically about the canvas midline, a shared button
//! radius, and the submit control. The layout is built once per batch of
//! prompts sharing the same scale and is immutable afterwards; response
//! sessions hold it behind an `Arc` and use its hit tests.

pub mod layout;

pub use layout::{ScaleGeometry, ScaleLayout, ScalePoint, SubmitControl};
