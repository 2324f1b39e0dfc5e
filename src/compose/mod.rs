//! Combining programs together
//!
//! This module provides sequencing and request/return transformations for programs.

mod chain;
mod map;

pub use chain::{chain, Chain};
pub use map::{init_map_return, init_map_yield, map_return, map_yield, MapReturn, MapYield};
