#![forbid(unsafe_code)]

//! Core: geometry value types shared by the wrapflow crates.

pub mod geometry;

pub use geometry::{Point, Proposal, Rect, Size};
