//! Bit-packed classification labels for telemetry data.
//!
//! This crate separates:
//! - **Classification**: which labels a piece of data carries (PII,
//!   user-generated content, high cardinality, ...), packed into one `i64`.
//! - **Aggregation**: how records composed of many fields report the union of
//!   their fields' labels.
//!
//! Consumers read the labels to decide whether to redact, drop, or retain data
//! before it leaves a system boundary.
//!
//! Key rules:
//! - [`Classification::combine`] is a union; combining nothing yields
//!   [`Classification::NO_VALUE`].
//! - [`Classification::contains`] is a subset test, except that
//!   `NO_VALUE` is only contained in `NO_VALUE`.
//! - [`Classification::remove`] toggles bits; it sets flags that were absent.
//! - `Display` renders labels comma-separated in bit order, and `NO_VALUE` as
//!   `no-value`.
//!
//! What this crate does:
//! - defines the [`Classification`] value type and its label table
//! - defines the [`Classified`] trait for aggregates, with container impls
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform redaction, I/O, or logging on its own
//! - inspect field values to decide their classification
//!
//! The `Classified` derive macro lives in `data-classifier-derive` and is
//! re-exported here.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use data_classifier_derive::Classified;

mod classification;
mod classified;
#[cfg(feature = "slog")]
pub mod slog;

pub use classification::{Classification, Flags};
pub use classified::{combine_all, Classified};
