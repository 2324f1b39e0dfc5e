//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{InitProgram, IntoOutcome, Outcome, Program, Pure, Step};

// Constructors
pub use crate::{failure, success, success_if, success_if_some};

// Building programs
pub use crate::build::{from_fn, init, init_from_fn, init_once, once};

// Composition
pub use crate::compose::{chain, map_return, map_yield};

// Execution
pub use crate::{attempt, handle, run};
#[cfg(feature = "async")]
pub use crate::{attempt_async, handle_async, run_async, OutcomeFutureExt};
