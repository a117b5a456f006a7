//! Backend and scene-state library for a 3-D globe satellite visualization.
//!
//! The web layer relays position lookups to an upstream tracking API; the
//! [`scene`] module holds the engine-agnostic geometry a renderer needs:
//! precomputed orbit paths, trail buffers and marker state.

pub mod catalog;
pub mod relay;
pub mod scene;
pub mod web;
