//! Pure filter engine over the product catalog.

use crate::domain::{Price, Product};

/// Category constraint: everything, or one category id.
///
/// Category ids match exactly (case-sensitive); only the free-text
/// search is case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match products whose category id equals this one.
    Category(String),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => product.category() == id,
        }
    }
}

/// Inclusive price bounds.
///
/// Callers keep the `min <= max` invariant; the filter does not correct
/// inverted bounds, it just finds no product satisfying both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// Create a price range.
    #[must_use]
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    fn contains(&self, price: Price) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The combined category/price/search constraints for one filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    category: CategoryFilter,
    price_range: PriceRange,
    search_text: String,
}

impl FilterCriteria {
    /// Create criteria from all three constraints.
    #[must_use]
    pub fn new(
        category: CategoryFilter,
        price_range: PriceRange,
        search_text: impl Into<String>,
    ) -> Self {
        Self {
            category,
            price_range,
            search_text: search_text.into(),
        }
    }

    /// Unconstrained criteria over the given price ceiling.
    #[must_use]
    pub fn any_under(ceiling: Price) -> Self {
        Self::new(
            CategoryFilter::All,
            PriceRange::new(Price::ZERO, ceiling),
            "",
        )
    }

    /// Get the category constraint.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Get the price bounds.
    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Get the search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the category constraint.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Replace the price bounds.
    #[must_use]
    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    /// Replace the search text.
    #[must_use]
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Check a single product against all three constraints.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self.price_range.contains(product.price())
            && self.matches_search(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        product.title().to_lowercase().contains(&needle)
            || product.description().to_lowercase().contains(&needle)
            || product.category().to_lowercase().contains(&needle)
    }
}

/// Filter a catalog slice down to the products matching `criteria`.
///
/// Pure and side-effect free: the input is only borrowed, the output
/// preserves catalog order, and equal inputs always produce equal
/// output. The caller decides when to recompute (typically after a
/// debounced criteria change) and whether to memoize.
#[must_use]
pub fn filter_products<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    catalog.iter().filter(|p| criteria.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use rust_decimal_macros::dec;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                ProductId::new("1"),
                "Red Shoe",
                dec!(10),
                "A bright red running shoe",
                "a",
                "",
                None,
            ),
            Product::new(
                ProductId::new("2"),
                "Blue Hat",
                dec!(50),
                "Wide-brimmed hat",
                "b",
                "",
                None,
            ),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id().as_str().to_string()).collect()
    }

    #[test]
    fn unconstrained_criteria_match_everything_in_order() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000));

        let result = filter_products(&catalog, &criteria);
        assert_eq!(ids(&result), ["1", "2"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000))
            .with_category(CategoryFilter::Category("a".into()));

        let result = filter_products(&catalog, &criteria);
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000))
            .with_category(CategoryFilter::Category("A".into()));

        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = catalog();

        let at_min = FilterCriteria::any_under(dec!(1000))
            .with_price_range(PriceRange::new(dec!(10), dec!(1000)));
        assert_eq!(ids(&filter_products(&catalog, &at_min)), ["1", "2"]);

        let above_min = FilterCriteria::any_under(dec!(1000))
            .with_price_range(PriceRange::new(dec!(20), dec!(1000)));
        assert_eq!(ids(&filter_products(&catalog, &above_min)), ["2"]);

        let at_max = FilterCriteria::any_under(dec!(1000))
            .with_price_range(PriceRange::new(dec!(0), dec!(10)));
        assert_eq!(ids(&filter_products(&catalog, &at_max)), ["1"]);
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000))
            .with_price_range(PriceRange::new(dec!(60), dec!(10)));

        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog();

        let by_title = FilterCriteria::any_under(dec!(1000)).with_search_text("red");
        assert_eq!(ids(&filter_products(&catalog, &by_title)), ["1"]);

        let by_description = FilterCriteria::any_under(dec!(1000)).with_search_text("BRIM");
        assert_eq!(ids(&filter_products(&catalog, &by_description)), ["2"]);

        let by_category = FilterCriteria::any_under(dec!(1000)).with_search_text("b");
        // "b" also appears in "bright" and "brimmed", so both match.
        assert_eq!(ids(&filter_products(&catalog, &by_category)), ["1", "2"]);
    }

    #[test]
    fn empty_search_text_is_vacuously_true() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000)).with_search_text("");

        assert_eq!(filter_products(&catalog, &criteria).len(), 2);
    }

    #[test]
    fn predicates_compose_with_and() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000))
            .with_category(CategoryFilter::Category("a".into()))
            .with_search_text("hat");

        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn filter_is_pure() {
        let catalog = catalog();
        let criteria = FilterCriteria::any_under(dec!(1000)).with_search_text("shoe");

        let first = ids(&filter_products(&catalog, &criteria));
        let second = ids(&filter_products(&catalog, &criteria));

        assert_eq!(first, second);
        assert_eq!(catalog.len(), 2);
    }
}
