//! Adapters for emitting classification labels through `slog`.
//!
//! This module exists to connect [`Classification`] and [`Classified`] with
//! `slog` so that log records can carry the label of the data they describe.
//!
//! It is responsible for:
//! - Rendering labels with the canonical `Display` format, so log output and
//!   `to_string()` never disagree.
//! - Logging the *classification* of a value, never the value itself.
//!
//! It does not configure `slog` or decide what to do with classified data.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue, KV};

use crate::{classification::Classification, classified::Classified};

/// Key used by [`ClassificationKv`].
pub const CLASSIFICATION_KEY: Key = "classification";

impl SlogValue for Classification {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self}"))
    }
}

/// A `slog::Value` that emits the combined classification of a borrowed value.
///
/// Construct it with [`classification_of`].
pub struct ClassificationOf<'a, T: ?Sized> {
    value: &'a T,
}

/// Wraps `value` so that logging it emits its classification label.
///
/// ## Example
/// ```ignore
/// use data_classifier::slog::classification_of;
///
/// info!(logger, "dropping record"; "classification" => classification_of(&record));
/// ```
pub fn classification_of<T>(value: &T) -> ClassificationOf<'_, T>
where
    T: Classified + ?Sized,
{
    ClassificationOf { value }
}

impl<T> SlogValue for ClassificationOf<'_, T>
where
    T: Classified + ?Sized,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.value.classification(), record, key, serializer)
    }
}

/// A `slog::KV` pair that attaches a label under [`CLASSIFICATION_KEY`].
///
/// ## Example
/// ```ignore
/// use data_classifier::{slog::ClassificationKv, Classification};
///
/// info!(logger, "emitting"; ClassificationKv(Classification::PII));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ClassificationKv(pub Classification);

impl KV for ClassificationKv {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        SlogValue::serialize(&self.0, record, CLASSIFICATION_KEY, serializer)
    }
}
