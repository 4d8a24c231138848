//! Explicit element-equality capability
//!
//! Equality over `OneOrMany` is parameterized by an `Equivalence` rather than
//! relying on `PartialEq`, so element types without a natural equality
//! (floats within a tolerance, case-insensitive strings, ...) can be compared.

use std::marker::PhantomData;

use super::one_or_many::OneOrMany;

/// An equivalence relation over `T`.
///
/// Implementations are expected to be reflexive, symmetric and transitive;
/// `OneOrManyEq` only preserves those properties if the inner relation has them.
pub trait Equivalence<T: ?Sized> {
    /// Returns true if, and only if, `a` and `b` are equivalent.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Equivalence delegating to the element's `PartialEq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T: PartialEq + ?Sized> Equivalence<T> for Structural {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Lifts an element equivalence to an equivalence over `OneOrMany<T>`,
/// following the rules of [`equals`].
pub struct OneOrManyEq<E, T> {
    inner: E,
    _marker: PhantomData<fn(&T)>,
}

impl<E, T> OneOrManyEq<E, T>
where
    E: Equivalence<T>,
{
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// The element equivalence this instance was lifted from.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Clone, T> Clone for OneOrManyEq<E, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, T> Equivalence<OneOrMany<T>> for OneOrManyEq<E, T>
where
    E: Equivalence<T>,
{
    fn equivalent(&self, a: &OneOrMany<T>, b: &OneOrMany<T>) -> bool {
        equals(&self.inner, a, b)
    }
}

/// Builds the `OneOrMany` equivalence from an element equivalence.
pub fn get_eq<E, T>(inner: E) -> OneOrManyEq<E, T>
where
    E: Equivalence<T>,
{
    OneOrManyEq::new(inner)
}

/// Compares two `OneOrMany` values using `eq_inner` for the elements.
///
/// - `One(a)` vs `One(b)`: `eq_inner(a, b)`
/// - `Many(a)` vs `Many(b)`: same length and `eq_inner` holds pairwise, in order
/// - `One` vs `Many`: never equal
pub fn equals<E, T>(eq_inner: &E, x: &OneOrMany<T>, y: &OneOrMany<T>) -> bool
where
    E: Equivalence<T>,
{
    match (x, y) {
        (OneOrMany::One(a), OneOrMany::One(b)) => eq_inner.equivalent(a, b),
        (OneOrMany::Many(a), OneOrMany::Many(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| eq_inner.equivalent(a, b))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(x: i32) -> OneOrMany<i32> {
        OneOrMany::one(x)
    }

    fn many(xs: &[i32]) -> OneOrMany<i32> {
        OneOrMany::many(xs.to_vec()).expect("at least two elements")
    }

    #[test]
    fn given_structural_when_comparing_then_uses_partial_eq() {
        assert!(Structural.equivalent(&1, &1));
        assert!(!Structural.equivalent(&1, &2));
        assert!(Structural.equivalent("abc", "abc"));
    }

    #[test]
    fn given_closure_when_comparing_then_closure_decides() {
        let case_insensitive = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
        assert!(case_insensitive.equivalent(&"Quito".to_string(), &"QUITO".to_string()));
    }

    #[test]
    fn given_one_and_many_when_equals_then_false_both_ways() {
        assert!(!equals(&Structural, &one(1), &many(&[1, 2])));
        assert!(!equals(&Structural, &many(&[1, 2]), &one(1)));
    }

    #[test]
    fn given_lifted_eq_when_same_as_free_function_then_agrees() {
        let eq = get_eq::<_, i32>(Structural);
        let values = [one(1), one(2), many(&[1, 2]), many(&[2, 1]), many(&[1, 2, 3])];
        for a in &values {
            for b in &values {
                assert_eq!(eq.equivalent(a, b), equals(&Structural, a, b));
            }
        }
    }

    #[test]
    fn given_nested_containers_when_lifting_twice_then_compares_deeply() {
        let eq = get_eq::<_, OneOrMany<i32>>(get_eq::<_, i32>(Structural));
        let a = OneOrMany::one(many(&[1, 2]));
        let b = OneOrMany::one(many(&[1, 2]));
        let c = OneOrMany::one(one(1));
        assert!(eq.equivalent(&a, &b));
        assert!(!eq.equivalent(&a, &c));
    }
}
