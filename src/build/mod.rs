//! Building programs from closures
//!
//! Do-block programs are usually small state machines. These builders turn a
//! closure into a [`Program`](crate::Program), optionally paired with the first
//! request so the result is an [`InitProgram`](crate::InitProgram).

mod func;
mod init;

pub use func::{from_fn, once, FromFn, Once};
pub use init::{init, init_from_fn, init_once};
