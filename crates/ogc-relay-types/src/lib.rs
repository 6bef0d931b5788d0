//! Shared data model for the OGC API Processes relay adapters.
//!
//! These types describe what flows between the input normalizer and the
//! execution client: the canonical [`Geometry`], the scalar and geometric
//! [`InputValue`]s, and the [`ExecutionRequest`] envelope that is posted to
//! `/processes/{id}/execution`.

pub mod geometry;
pub mod request;

pub use geometry::{Geometry, Position};
pub use request::{ExecutionRequest, InputValue};
