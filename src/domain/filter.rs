use crate::domain::Specification;

/// Lazily select the items satisfying `spec`.
///
/// The returned iterator yields matches in input order. The specification is
/// evaluated exactly once per item, and only as the iterator is advanced. The
/// input is never modified.
pub fn filter<'a, T, S, I>(items: I, spec: &'a S) -> impl Iterator<Item = &'a T>
where
    T: 'a,
    S: Specification<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(move |item| spec.is_satisfied(*item))
}

/// Something that can select items from a slice using a specification.
///
/// High-level code can depend on `&dyn Filter<T>` rather than on a concrete
/// filtering strategy.
pub trait Filter<T> {
    /// Select the items in `items` that satisfy `spec`, preserving order.
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// A [`Filter`] which tests each item against the specification in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecificationFilter;

impl<T> Filter<T> for SpecificationFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(filter(items, spec))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::{
        Color, ColorSpecification, Everything, Product, Size, SizeSpecification, SpecificationExt,
    };

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small).unwrap(),
            Product::new("Tree", Color::Green, Size::Large).unwrap(),
            Product::new("House", Color::Blue, Size::Large).unwrap(),
        ]
    }

    fn names<'a>(matches: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        matches.map(Product::name).collect()
    }

    #[test]
    fn selects_green_products() {
        let products = products();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(names(filter(&products, &green)), ["Apple", "Tree"]);
    }

    #[test]
    fn selects_blue_and_large_products() {
        let products = products();
        let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
        assert_eq!(names(filter(&products, &spec)), ["House"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let products: Vec<Product> = Vec::new();
        assert_eq!(filter(&products, &Everything).count(), 0);
    }

    #[test]
    fn everything_yields_all_items_in_order() {
        let products = products();
        assert_eq!(
            names(filter(&products, &Everything)),
            ["Apple", "Tree", "House"]
        );
    }

    #[test]
    fn output_preserves_order_and_has_no_duplicates() {
        let products = products();
        let large = SizeSpecification::new(Size::Large);
        let matched: Vec<&Product> = filter(&products, &large).collect();
        let expected: Vec<&Product> = products
            .iter()
            .filter(|product| product.size() == Size::Large)
            .collect();
        assert_eq!(matched, expected);
    }

    struct Counting<'c> {
        calls: &'c Cell<usize>,
    }

    impl Specification<Product> for Counting<'_> {
        fn is_satisfied(&self, _item: &Product) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    #[test]
    fn evaluates_lazily_and_once_per_item() {
        let products = products();
        let calls = Cell::new(0);
        let spec = Counting { calls: &calls };

        let mut matches = filter(&products, &spec);
        assert_eq!(calls.get(), 0);

        matches.next();
        assert_eq!(calls.get(), 1);

        assert_eq!(matches.count(), 2);
        assert_eq!(calls.get(), products.len());
    }

    #[test]
    fn filter_trait_object_matches_free_function() {
        let products = products();
        let strategy: &dyn Filter<Product> = &SpecificationFilter;
        let green = ColorSpecification::new(Color::Green);

        let via_trait: Vec<&Product> = strategy.filter(&products, &green).collect();
        let via_fn: Vec<&Product> = filter(&products, &green).collect();
        assert_eq!(via_trait, via_fn);
    }

    #[test]
    fn input_is_reusable_after_filtering() {
        let products = products();
        let before = products.clone();
        let _ = filter(&products, &ColorSpecification::new(Color::Red)).count();
        assert_eq!(products, before);
    }
}
