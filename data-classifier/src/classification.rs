//! The classification bit set: "what kind of data is this?"
//!
//! A [`Classification`] packs any subset of a closed set of labels into a
//! single `i64`. Values are `Copy`, never allocated, and every operation is a
//! pure function over the bits, so they can be shared freely across threads.
//!
//! The rendered form (`Display`) is the only serialization this crate offers:
//! canonical labels joined by `,` in ascending bit order.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitOr, BitOrAssign},
};

/// A set of classification flags.
///
/// Each named constant occupies exactly one bit, starting at bit 0;
/// [`Classification::NO_VALUE`] is the empty set. Bits without a registered
/// name are carried through every operation and ignored when rendering.
///
/// ```rust
/// use data_classifier::Classification;
///
/// let record = Classification::combine([Classification::PII, Classification::UGC]);
/// assert!(record.contains(Classification::PII));
/// assert!(!record.contains(Classification::SENSITIVE));
/// assert_eq!(
///     record.to_string(),
///     "user-generated-content,personal-identifiable-information"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Classification(i64);

impl Classification {
    /// No classification assigned.
    pub const NO_VALUE: Self = Self(0);
    /// Data that must be retained, not dropped.
    pub const PERSIST: Self = Self(1 << 0);
    /// Free-text content originating from an end user.
    pub const USER_GENERATED_CONTENT: Self = Self(1 << 1);
    /// Content identifying a natural person.
    pub const PERSONAL_IDENTIFIABLE_INFORMATION: Self = Self(1 << 2);
    /// Content requiring elevated protection, distinct from PII.
    pub const SENSITIVE: Self = Self(1 << 3);
    /// Content whose value space is large or unbounded (timestamps, IDs).
    pub const HIGH_CARDINALITY: Self = Self(1 << 4);
    /// Content used to compute SLOs or SLAs.
    pub const SERVICE_LEVEL_OBJECTIVE: Self = Self(1 << 5);

    /// Shorthand for [`Classification::USER_GENERATED_CONTENT`].
    pub const UGC: Self = Self::USER_GENERATED_CONTENT;
    /// Shorthand for [`Classification::PERSONAL_IDENTIFIABLE_INFORMATION`].
    pub const PII: Self = Self::PERSONAL_IDENTIFIABLE_INFORMATION;
    /// Personal data; same flag as [`Classification::PII`].
    pub const PD: Self = Self::PERSONAL_IDENTIFIABLE_INFORMATION;

    /// Wraps raw bits. Unregistered bits are kept as-is.
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> i64 {
        self.0
    }

    /// Returns `true` for [`Classification::NO_VALUE`].
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combines every value into one (bitwise union).
    ///
    /// An empty input yields [`Classification::NO_VALUE`], the identity.
    pub fn combine<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Classification>,
    {
        values.into_iter().fold(Self::NO_VALUE, Self::union)
    }

    /// Union of two values, usable in `const` contexts.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Reports whether every flag of `target` is present in `self`.
    ///
    /// Equal values always contain each other, so `NO_VALUE` contains
    /// `NO_VALUE`. A non-empty value never contains `NO_VALUE`.
    pub const fn contains(self, target: Self) -> bool {
        self.0 == target.0 || (target.0 != 0 && self.0 & target.0 == target.0)
    }

    /// Reports whether `self` and `other` share at least one flag.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Toggles the flags of `value` (bitwise exclusive-or).
    ///
    /// Flags of `value` that are not present in `self` get *set*. Only pass
    /// flags known to be present when the intent is to clear them.
    #[must_use]
    pub const fn remove(self, value: Self) -> Self {
        Self(self.0 ^ value.0)
    }

    /// Canonical label when `self` is exactly one registered flag or
    /// `NO_VALUE`.
    pub fn label(self) -> Option<&'static str> {
        LABELS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, label)| *label)
    }

    /// Iterates the registered flags contained in `self`, in ascending bit
    /// order. Never yields `NO_VALUE`.
    pub fn flags(self) -> Flags {
        Flags {
            value: self,
            // Skip the NO_VALUE entry.
            next: 1,
        }
    }
}

/// Registered flags and their canonical labels, in ascending bit order.
static LABELS: [(Classification, &str); 7] = [
    (Classification::NO_VALUE, "no-value"),
    (Classification::PERSIST, "persist"),
    (Classification::USER_GENERATED_CONTENT, "user-generated-content"),
    (
        Classification::PERSONAL_IDENTIFIABLE_INFORMATION,
        "personal-identifiable-information",
    ),
    (Classification::SENSITIVE, "sensitive"),
    (Classification::HIGH_CARDINALITY, "high-cardinality"),
    (Classification::SERVICE_LEVEL_OBJECTIVE, "service-level-objective"),
];

/// Iterator returned by [`Classification::flags`].
#[derive(Clone, Debug)]
pub struct Flags {
    value: Classification,
    next: usize,
}

impl Iterator for Flags {
    type Item = Classification;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((flag, _)) = LABELS.get(self.next) {
            self.next += 1;
            if self.value.contains(*flag) {
                return Some(*flag);
            }
        }
        None
    }
}

impl FusedIterator for Flags {}

impl Default for Classification {
    fn default() -> Self {
        Self::NO_VALUE
    }
}

impl BitOr for Classification {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Classification {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl FromIterator<Classification> for Classification {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, label) in &LABELS {
            if !self.contains(*flag) {
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            f.write_str(label)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Classification")
            .field(&format_args!("{self}"))
            .finish()
    }
}
