//! Test fixtures for route-print.
//!
//! Provides:
//! - Real route geometries (coordinates from OpenStreetMap)
//! - A spherical Web Mercator projection at a fixed zoom level
//! - Mock rasterizer and document assembler

// Each test binary uses only part of the fixtures.
#![allow(dead_code)]

pub mod routes;
pub mod host;

pub use host::*;
pub use routes::*;
