//! Product list with the Pick & Pack filters.
//!
//! Search and category selection each recompute the visible list from the
//! full catalog; the last one applied wins.

use tracing::debug;

use crate::models::{Product, WasteCategory, WasteTypeId};

/// Carousel entries. Ids match `waste_type_id` on the server.
pub const CATEGORIES: &[WasteCategory] = &[
    WasteCategory { waste_type_id: 1, name: "Plastik", image: "/images/categories/plastik.png" },
    WasteCategory { waste_type_id: 2, name: "Kertas", image: "/images/categories/kertas.png" },
    WasteCategory { waste_type_id: 3, name: "Logam", image: "/images/categories/logam.png" },
    WasteCategory { waste_type_id: 4, name: "Kaca", image: "/images/categories/kaca.png" },
    WasteCategory { waste_type_id: 5, name: "Elektronik", image: "/images/categories/elektronik.png" },
    WasteCategory { waste_type_id: 6, name: "Minyak Jelantah", image: "/images/categories/minyak.png" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    None,
    Search(String),
    Category(WasteTypeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    displayed: Vec<Product>,
    filter: ActiveFilter,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            displayed: products.clone(),
            products,
            filter: ActiveFilter::None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn filter(&self) -> &ActiveFilter {
        &self.filter
    }

    pub fn selected_category(&self) -> Option<WasteTypeId> {
        match self.filter {
            ActiveFilter::Category(id) => Some(id),
            _ => None,
        }
    }

    /// Case-insensitive substring match on the product name. An empty term
    /// matches everything.
    pub fn search(&mut self, term: &str) {
        let needle = term.to_lowercase();
        self.displayed = self
            .products
            .iter()
            .filter(|p| p.waste_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.filter = if term.is_empty() {
            ActiveFilter::None
        } else {
            ActiveFilter::Search(term.to_string())
        };
        debug!("Search '{}' matched {} products", term, self.displayed.len());
    }

    pub fn select_category(&mut self, id: WasteTypeId) {
        self.displayed = self
            .products
            .iter()
            .filter(|p| p.waste_type_id == id)
            .cloned()
            .collect();
        self.filter = ActiveFilter::Category(id);
        debug!("Category {} matched {} products", id, self.displayed.len());
    }

    pub fn clear_filter(&mut self) {
        self.displayed = self.products.clone();
        self.filter = ActiveFilter::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, type_id: WasteTypeId) -> Product {
        Product {
            waste_name: name.to_string(),
            point: 25,
            image: format!("/uploads/{}.png", name.to_lowercase()),
            waste_type_id: type_id,
        }
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            product("Kardus Bekas", 2),
            product("Botol Plastik", 1),
            product("kardus susu", 2),
            product("Kaleng Minuman", 3),
            product("Koran", 2),
        ])
    }

    fn names(catalog: &ProductCatalog) -> Vec<&str> {
        catalog.displayed().iter().map(|p| p.waste_name.as_str()).collect()
    }

    #[test]
    fn test_new_catalog_shows_everything() {
        let catalog = catalog();
        assert_eq!(catalog.displayed().len(), 5);
        assert_eq!(catalog.filter(), &ActiveFilter::None);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut catalog = catalog();
        catalog.search("kardus");
        assert_eq!(names(&catalog), vec!["Kardus Bekas", "kardus susu"]);

        catalog.search("KARDUS");
        assert_eq!(names(&catalog), vec!["Kardus Bekas", "kardus susu"]);
    }

    #[test]
    fn test_empty_search_returns_full_list() {
        let mut catalog = catalog();
        catalog.search("kaleng");
        catalog.search("");
        assert_eq!(catalog.displayed(), catalog.products());
        assert_eq!(catalog.filter(), &ActiveFilter::None);
    }

    #[test]
    fn test_category_replaces_search() {
        let mut catalog = catalog();
        catalog.search("kardus");
        catalog.select_category(2);

        assert_eq!(names(&catalog), vec!["Kardus Bekas", "kardus susu", "Koran"]);
        assert_eq!(catalog.selected_category(), Some(2));
    }

    #[test]
    fn test_search_replaces_category() {
        let mut catalog = catalog();
        catalog.select_category(3);
        catalog.search("botol");

        assert_eq!(names(&catalog), vec!["Botol Plastik"]);
        assert_eq!(catalog.selected_category(), None);
    }

    #[test]
    fn test_category_without_products_is_empty() {
        let mut catalog = catalog();
        catalog.select_category(6);
        assert!(catalog.displayed().is_empty());
    }

    #[test]
    fn test_clear_filter() {
        let mut catalog = catalog();
        catalog.select_category(1);
        catalog.clear_filter();
        assert_eq!(catalog.displayed().len(), 5);
    }
}
