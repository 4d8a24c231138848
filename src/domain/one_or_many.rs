//! `OneOrMany<T>`: exactly one value, or an ordered run of two or more
//!
//! `One` and `Many` are distinct tags. A `Many` never holds fewer than two
//! elements; every constructor in this module rejects or reroutes input that
//! would break that.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{DomainError, DomainResult};

/// Either a single value or an ordered sequence of at least two values.
///
/// ```
/// use oneormany::domain::OneOrMany;
///
/// assert_eq!(OneOrMany::<i32>::from_list(vec![]), None);
/// assert_eq!(OneOrMany::from_list(vec![3]), Some(OneOrMany::One(3)));
/// assert_eq!(
///     OneOrMany::from_list(vec![3, 4, 5]),
///     Some(OneOrMany::Many(vec![3, 4, 5]))
/// );
/// ```
///
/// The variants are public for pattern matching. Building a `Many` directly
/// bypasses the length check; prefer [`OneOrMany::many`] or
/// [`OneOrMany::from_list`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "tag",
    content = "value",
    try_from = "Repr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
#[serde(tag = "tag", content = "value")]
enum Repr<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> TryFrom<Repr<T>> for OneOrMany<T> {
    type Error = DomainError;

    fn try_from(repr: Repr<T>) -> Result<Self, Self::Error> {
        match repr {
            Repr::One(value) => Ok(Self::One(value)),
            Repr::Many(values) => Self::many(values),
        }
    }
}

impl<T> OneOrMany<T> {
    /// Wraps a single value.
    pub fn one(value: T) -> Self {
        Self::One(value)
    }

    /// Wraps a sequence of at least two values, preserving order.
    ///
    /// # Errors
    /// `DomainError::InvalidArgument` if `values` has fewer than two elements.
    pub fn many(values: Vec<T>) -> DomainResult<Self> {
        if values.len() < 2 {
            return Err(DomainError::InvalidArgument(format!(
                "Many requires at least 2 elements, got {}",
                values.len()
            )));
        }
        Ok(Self::Many(values))
    }

    /// Converts an arbitrary sequence, signalling absence for empty input.
    pub fn from_list(mut values: Vec<T>) -> Option<Self> {
        trace!("from_list: len={}", values.len());
        match values.len() {
            0 => None,
            1 => values.pop().map(Self::One),
            _ => Some(Self::Many(values)),
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Number of elements.
    ///
    /// At least 1 for values built through this module; a hand-built `Many`
    /// can report fewer.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    /// True only for a hand-built, empty `Many`.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The first element in order, `None` only for a hand-built, empty `Many`.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values.as_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Flattens into an ordered `Vec`, dropping the tag.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    /// Applies `f` to every element, keeping the tag, order and count.
    pub fn map<U, F>(self, mut f: F) -> OneOrMany<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::One(value) => OneOrMany::One(f(value)),
            Self::Many(values) => OneOrMany::Many(values.into_iter().map(f).collect()),
        }
    }

    /// Like [`OneOrMany::map`], but borrowing the elements.
    pub fn map_ref<U, F>(&self, mut f: F) -> OneOrMany<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Self::One(value) => OneOrMany::One(f(value)),
            Self::Many(values) => OneOrMany::Many(values.iter().map(f).collect()),
        }
    }

    /// Fallible mapping: stops at the first error and returns it unchanged.
    ///
    /// No partial result is produced; elements after the failing one are not
    /// visited.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<OneOrMany<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Self::One(value) => f(value).map(OneOrMany::One),
            Self::Many(values) => values
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, E>>()
                .map(OneOrMany::Many),
        }
    }
}

impl<T: Send> OneOrMany<T> {
    /// Parallel [`OneOrMany::map`] using rayon.
    ///
    /// Output order matches the sequential map regardless of scheduling.
    pub fn par_map<U, F>(self, f: F) -> OneOrMany<U>
    where
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        match self {
            Self::One(value) => OneOrMany::One(f(value)),
            Self::Many(values) => {
                debug!("par_map: mapping {} elements", values.len());
                OneOrMany::Many(values.into_par_iter().map(f).collect())
            }
        }
    }
}

impl<T> TryFrom<Vec<T>> for OneOrMany<T> {
    type Error = DomainError;

    /// Like [`OneOrMany::from_list`], but empty input is an error.
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_list(values).ok_or_else(|| {
            DomainError::InvalidArgument("cannot build OneOrMany from an empty list".into())
        })
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// Owning iterator over the elements of a `OneOrMany`.
#[derive(Debug)]
pub enum IntoIter<T> {
    One(Option<T>),
    Many(std::vec::IntoIter<T>),
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Self::One(value) => value.take(),
            Self::Many(values) => values.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::One(value) => {
                let n = usize::from(value.is_some());
                (n, Some(n))
            }
            Self::Many(values) => values.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::One(value) => IntoIter::One(Some(value)),
            Self::Many(values) => IntoIter::Many(values.into_iter()),
        }
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_two_or_more_when_many_then_wraps_in_order() {
        let value = OneOrMany::many(vec![3, 1, 2]).unwrap();
        assert_eq!(value, OneOrMany::Many(vec![3, 1, 2]));
    }

    #[test]
    fn given_empty_when_many_then_invalid_argument() {
        let err = OneOrMany::<i32>::many(vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn given_single_when_many_then_invalid_argument() {
        let err = OneOrMany::many(vec![7]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: Many requires at least 2 elements, got 1"
        );
    }

    #[test]
    fn given_one_when_querying_then_reports_single_element() {
        let value = OneOrMany::one("a");
        assert!(value.is_one());
        assert!(!value.is_many());
        assert_eq!(value.len(), 1);
        assert_eq!(value.first(), Some(&"a"));
        assert!(!value.is_empty());
        assert_eq!(value.as_slice(), &["a"]);
    }

    #[test]
    fn given_many_when_iterating_then_yields_in_order() {
        let value = OneOrMany::many(vec![1, 2, 3]).unwrap();
        assert_eq!(value.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!((&value).into_iter().count(), 3);
        assert_eq!(value.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn given_hand_built_empty_many_when_querying_then_accessors_agree() {
        let value: OneOrMany<i32> = OneOrMany::Many(vec![]);
        assert_eq!(value.len(), 0);
        assert!(value.is_empty());
        assert_eq!(value.first(), None);
        assert_eq!(value.iter().count(), 0);
    }

    #[test]
    fn given_one_when_into_iter_then_exact_size_one() {
        let mut iter = OneOrMany::one(5).into_iter();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn given_empty_vec_when_try_from_then_error() {
        let result: Result<OneOrMany<u8>, _> = OneOrMany::try_from(Vec::new());
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn given_map_ref_when_applied_then_source_is_kept() {
        let value = OneOrMany::many(vec!["a".to_string(), "bc".to_string()]).unwrap();
        let lengths = value.map_ref(String::len);
        assert_eq!(lengths, OneOrMany::Many(vec![1, 2]));
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn given_many_when_par_map_then_matches_sequential_map() {
        let source: Vec<u64> = (0..1_000).collect();
        let value = OneOrMany::many(source).unwrap();
        let parallel = value.clone().par_map(|x| x * x);
        let sequential = value.map(|x| x * x);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn given_one_when_serialized_then_uses_tag_and_value() {
        let json = serde_json::to_string(&OneOrMany::one(3)).unwrap();
        assert_eq!(json, r#"{"tag":"One","value":3}"#);
    }

    #[test]
    fn given_many_json_when_deserialized_then_round_trips() {
        let value: OneOrMany<i32> =
            serde_json::from_str(r#"{"tag":"Many","value":[3,4,5]}"#).unwrap();
        assert_eq!(value, OneOrMany::Many(vec![3, 4, 5]));
    }

    #[test]
    fn given_short_many_json_when_deserialized_then_rejected() {
        let result: Result<OneOrMany<i32>, _> =
            serde_json::from_str(r#"{"tag":"Many","value":[3]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least 2 elements"), "unexpected error: {err}");
    }
}
