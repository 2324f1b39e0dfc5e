//! Combining many outcomes into one.
//!
//! Every short-circuiting aggregate stops at the first failure in iteration order
//! and returns that failure unchanged; nothing after it is looked at. The duals
//! (`*_err`) stop at the first success instead. [`separate`] and [`partition`]
//! never short-circuit.
//!
//! - Lists: [`reduce`], [`reduce_err`], [`collect`], [`collect_err`], [`separate`],
//!   [`partition`], [`sequence`]
//! - Keyed entries: [`reduce_keyed`], [`reduce_keyed_err`], [`collect_keyed`],
//!   [`collect_keyed_err`]
//! - Heterogeneous tuples: [`OutcomeTuple`], [`collect_tuple`]
//! - Futures: [`collect_async`], [`collect_keyed_async`], [`sequence_async`]

mod keyed;
mod list;
mod tuple;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "async")]
pub use future::{collect_async, collect_keyed_async, sequence_async};
pub use keyed::{collect_keyed, collect_keyed_err, reduce_keyed, reduce_keyed_err};
pub use list::{collect, collect_err, partition, reduce, reduce_err, separate, sequence};
pub use tuple::{collect_tuple, OutcomeTuple};
