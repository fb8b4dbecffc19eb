//! route-print core
//!
//! Splits a route into fixed-size map pages for printing, and plans the
//! page-by-page capture of those pages at a chosen paper scale.

pub mod cover;
pub mod error;
pub mod geometry;
pub mod haversine;
pub mod pages;
pub mod paper;
pub mod polyline;
pub mod print;
pub mod scale;
pub mod traits;
