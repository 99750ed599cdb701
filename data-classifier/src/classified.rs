//! Aggregation: values that *carry* classifications.
//!
//! [`Classified`] reports the combined classification of everything a value
//! holds. Aggregates (records, resources, batches) keep their running total by
//! combining the classification of each item they append; this module only
//! describes how to read that total, it never owns one.
//!
//! ## Container Implementations
//!
//! | Type | Classification |
//! |------|----------------|
//! | `Classification` | itself |
//! | `PhantomData<T>` | `NO_VALUE` |
//! | `&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>` | the pointee's |
//! | `Option<T>` | the inner value's, `NO_VALUE` for `None` |
//! | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>`, sets | union of all elements |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | union of all values |
//!
//! Structs and enums get an implementation from `#[derive(Classified)]`.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

use crate::classification::Classification;

/// A value that carries zero or more classifications.
///
/// Implementations must be consistent with the collaborator rule: an
/// aggregate's classification is the [`Classification::combine`] of the
/// classifications of its parts.
///
/// ```rust
/// use data_classifier::{Classification, Classified};
///
/// struct Field {
///     hint: Classification,
/// }
///
/// impl Classified for Field {
///     fn classification(&self) -> Classification {
///         self.hint
///     }
/// }
///
/// let fields = vec![
///     Field { hint: Classification::PII },
///     Field { hint: Classification::HIGH_CARDINALITY },
/// ];
/// assert_eq!(
///     fields.classification(),
///     Classification::PII | Classification::HIGH_CARDINALITY
/// );
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Classified`",
    label = "this type cannot report a classification",
    note = "use `#[derive(Classified)]` on the type definition",
    note = "or annotate the field with `#[classified(FLAG)]` instead of a bare `#[classified]`"
)]
pub trait Classified {
    /// Returns the combined classification carried by this value.
    fn classification(&self) -> Classification;
}

/// Combines the classifications of every item.
///
/// This is the running-total rule aggregates follow on append, applied to a
/// whole sequence at once. An empty sequence yields `NO_VALUE`.
pub fn combine_all<I>(items: I) -> Classification
where
    I: IntoIterator,
    I::Item: Classified,
{
    items
        .into_iter()
        .map(|item| item.classification())
        .collect()
}

impl Classified for Classification {
    fn classification(&self) -> Classification {
        *self
    }
}

impl<T: ?Sized> Classified for PhantomData<T> {
    fn classification(&self) -> Classification {
        Classification::NO_VALUE
    }
}

// =============================================================================
// Pointer-like wrappers
// =============================================================================

macro_rules! impl_classified_deref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Classified for $ty
            where
                T: Classified + ?Sized,
            {
                fn classification(&self) -> Classification {
                    T::classification(self)
                }
            }
        )*
    };
}

impl_classified_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// =============================================================================
// Collections
// =============================================================================

impl<T> Classified for Option<T>
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        self.as_ref()
            .map_or(Classification::NO_VALUE, Classified::classification)
    }
}

impl<T> Classified for [T]
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<T, const N: usize> Classified for [T; N]
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<T> Classified for Vec<T>
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<T> Classified for VecDeque<T>
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<T> Classified for BTreeSet<T>
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<T, S> Classified for HashSet<T, S>
where
    T: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self)
    }
}

impl<K, V> Classified for BTreeMap<K, V>
where
    V: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self.values())
    }
}

impl<K, V, S> Classified for HashMap<K, V, S>
where
    V: Classified,
{
    fn classification(&self) -> Classification {
        combine_all(self.values())
    }
}
