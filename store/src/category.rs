use floem_reactive::{RwSignal, SignalUpdate, SignalWith};
use tracing::debug;

use crate::catalog::{self, Category, Product};

/// The store page's selected category.
///
/// The selection is a raw key rather than a [`Category`] so that an unknown
/// key can be selected; it simply matches no products.
#[derive(Clone, Copy, Debug)]
pub struct CategorySelector {
    selected: RwSignal<String>,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::new(Category::Ranks.key())
    }
}

impl CategorySelector {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            selected: RwSignal::new(key.into()),
        }
    }

    pub fn select(&self, key: impl Into<String>) {
        let key = key.into();
        debug!(%key, "select category");
        self.selected.set(key);
    }

    pub fn selected_key(&self) -> String {
        self.selected.with(Clone::clone)
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected.with(|key| Category::from_key(key))
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.with(|key| key == category.key())
    }

    /// Products in the selected category, in catalog order.
    pub fn products(&self) -> Vec<&'static Product> {
        self.selected
            .with(|key| catalog::products_in(key).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ranks() {
        let selector = CategorySelector::default();
        assert_eq!(selector.selected_category(), Some(Category::Ranks));
        assert_eq!(
            selector
                .products()
                .iter()
                .map(|product| product.id)
                .collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn unknown_key_yields_no_products() {
        let selector = CategorySelector::default();
        selector.select("pets");
        assert_eq!(selector.selected_category(), None);
        assert!(selector.products().is_empty());
        assert!(!selector.is_selected(Category::Ranks));
    }
}
