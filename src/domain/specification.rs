use std::{rc::Rc, sync::Arc};

/// A predicate over a single item.
///
/// Implementations must be pure: evaluating the same specification against
/// the same item always gives the same answer and changes nothing.
///
/// Leaf specifications test one attribute of an item. Composite
/// specifications ([`AndSpecification`], [`OrSpecification`],
/// [`NotSpecification`]) combine other specifications, and can themselves be
/// combined, so arbitrary boolean trees can be built from a few leaves.
pub trait Specification<T: ?Sized> {
    /// Returns `true` if the item satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Rc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// A specification satisfied by every item.
///
/// Useful as the root of a specification that is built up incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Everything;

impl<T: ?Sized> Specification<T> for Everything {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Satisfied when both child specifications are satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    /// Combine two specifications.
    ///
    /// The children may be owned values, references, or boxed trait objects.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T>
    for AndSpecification<A, B>
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Satisfied when either child specification is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    /// Combine two specifications.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T>
    for OrSpecification<A, B>
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Satisfied when the inner specification is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    /// Negate a specification.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Combinators available on every sized specification.
///
/// ```
/// use principles::{Color, ColorSpecification, Size, SizeSpecification, SpecificationExt};
///
/// let blue_and_large = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
/// # let _ = blue_and_large;
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> {
    /// Satisfied when both `self` and `other` are.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
    {
        AndSpecification::new(self, other)
    }

    /// Satisfied when either `self` or `other` is.
    fn or<S: Specification<T>>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
    {
        OrSpecification::new(self, other)
    }

    /// Satisfied when `self` is not.
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Specification<u32> for Even {
        fn is_satisfied(&self, item: &u32) -> bool {
            item % 2 == 0
        }
    }

    struct GreaterThan(u32);

    impl Specification<u32> for GreaterThan {
        fn is_satisfied(&self, item: &u32) -> bool {
            *item > self.0
        }
    }

    #[test]
    fn everything_is_always_satisfied() {
        assert!(Everything.is_satisfied(&0u32));
        assert!(Everything.is_satisfied("anything"));
    }

    #[test]
    fn and_matches_boolean_conjunction() {
        let spec = AndSpecification::new(Even, GreaterThan(4));
        for n in 0..20u32 {
            assert_eq!(
                spec.is_satisfied(&n),
                Even.is_satisfied(&n) && GreaterThan(4).is_satisfied(&n),
                "mismatch for {n}"
            );
        }
    }

    #[test]
    fn and_result_does_not_depend_on_child_order() {
        let forward = Even.and(GreaterThan(7));
        let reverse = GreaterThan(7).and(Even);
        for n in 0..20u32 {
            assert_eq!(forward.is_satisfied(&n), reverse.is_satisfied(&n));
        }
    }

    #[test]
    fn or_and_not_match_boolean_logic() {
        let or = Even.or(GreaterThan(10));
        let not = Even.not();
        for n in 0..20u32 {
            assert_eq!(or.is_satisfied(&n), n % 2 == 0 || n > 10);
            assert_eq!(not.is_satisfied(&n), n % 2 != 0);
        }
    }

    #[test]
    fn composites_nest() {
        // (even AND > 4) AND NOT > 12
        let spec = Even.and(GreaterThan(4)).and(GreaterThan(12).not());
        let matching: Vec<u32> = (0..20).filter(|n| spec.is_satisfied(n)).collect();
        assert_eq!(matching, vec![6, 8, 10, 12]);
    }

    #[test]
    fn children_can_be_borrowed_or_boxed() {
        let even = Even;
        let boxed: Box<dyn Specification<u32>> = Box::new(GreaterThan(2));
        let spec = AndSpecification::new(&even, boxed);
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&2));
        assert!(!spec.is_satisfied(&5));

        let shared = Arc::new(Even);
        let spec = AndSpecification::new(Arc::clone(&shared), shared);
        assert!(spec.is_satisfied(&10));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let spec = Even.and(GreaterThan(3));
        let first = spec.is_satisfied(&8);
        for _ in 0..10 {
            assert_eq!(spec.is_satisfied(&8), first);
        }
    }
}
