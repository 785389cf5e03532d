use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Category {
    Fresh,
    Snacks,
    Drinks,
    Household,
    #[serde(rename = "Personal Care")]
    PersonalCare,
}

/// One sellable item. Shelf assignment is optional: a product without one is
/// a normal state (not yet placed on the floor), and the location endpoint
/// reports it as not found rather than as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price_cents: u32,
    pub category: Category,
    pub shelf_code: Option<String>,
    pub directions: Option<String>,
}

pub trait ProductStore {
    /// All products, sorted by display name.
    fn list(&self) -> Vec<&Product>;
    fn get(&self, id: &str) -> Option<&Product>;
}

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Vec<Product>,
}

impl InMemoryProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Compact convenience-store selection matching the demo layout. Shelf
    /// assignments cover the snack, drink, and chilled items; household and
    /// personal-care products are intentionally unplaced.
    pub fn demo_catalog() -> Self {
        fn product(
            id: &str,
            name: &str,
            price_cents: u32,
            category: Category,
            shelf: Option<(&str, &str)>,
        ) -> Product {
            let (shelf_code, directions) = match shelf {
                Some((code, directions)) => {
                    (Some(code.to_string()), Some(directions.to_string()))
                }
                None => (None, None),
            };
            Product {
                id: id.to_string(),
                name: name.to_string(),
                price_cents,
                category,
                shelf_code,
                directions,
            }
        }

        Self::new(vec![
            product(
                "apple-pack",
                "Crisp Apple Pack",
                199,
                Category::Fresh,
                Some(("D1-L1", "Chilled wall, aisle D1, first bay at eye level.")),
            ),
            product(
                "avocado",
                "Ripe Avocado",
                75,
                Category::Fresh,
                None,
            ),
            product(
                "salad-kit",
                "Garden Salad Kit",
                249,
                Category::Fresh,
                Some(("D1-L2", "Chilled wall, aisle D1, second bay near the floor.")),
            ),
            product(
                "chips-sea-salt",
                "Sea Salt Chips",
                110,
                Category::Snacks,
                Some(("S1-L1", "Aisle S1, left side, top shelf by the endcap.")),
            ),
            product(
                "granola-bar",
                "Honey Granola Bar",
                45,
                Category::Snacks,
                Some(("S1-L2", "Aisle S1, left side, halfway down at waist height.")),
            ),
            product(
                "trail-mix",
                "Trail Mix Pouch",
                180,
                Category::Snacks,
                Some(("S2-R1", "Aisle S2, right side, first rack past the entrance.")),
            ),
            product(
                "sparkling-water",
                "Sparkling Citrus Water",
                55,
                Category::Drinks,
                Some(("B1-L1", "Aisle B1, left side, near the front cooler.")),
            ),
            product(
                "cold-brew",
                "Cold Brew Coffee",
                160,
                Category::Drinks,
                Some(("B1-L2", "Aisle B1, left side, middle of the cooler run.")),
            ),
            product(
                "green-tea",
                "Iced Green Tea",
                90,
                Category::Drinks,
                Some(("B2-R1", "Aisle B2, right side, second cooler door.")),
            ),
            product(
                "laundry-pods",
                "Laundry Pods (10 ct)",
                420,
                Category::Household,
                None,
            ),
            product(
                "paper-towels",
                "Paper Towel Roll",
                120,
                Category::Household,
                None,
            ),
            product(
                "dish-soap",
                "Citrus Dish Soap",
                150,
                Category::Household,
                None,
            ),
            product(
                "hand-sanitizer",
                "Hand Sanitizer",
                95,
                Category::PersonalCare,
                None,
            ),
            product(
                "toothpaste",
                "Mint Toothpaste",
                130,
                Category::PersonalCare,
                None,
            ),
            product(
                "face-wipes",
                "Refreshing Face Wipes",
                210,
                Category::PersonalCare,
                None,
            ),
        ])
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Vec<&Product> {
        let mut out: Vec<&Product> = self.products.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryProductStore, ProductStore};

    #[test]
    fn list_is_sorted_by_name() {
        let store = InMemoryProductStore::demo_catalog();
        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn get_by_id() {
        let store = InMemoryProductStore::demo_catalog();
        assert_eq!(store.get("cold-brew").unwrap().name, "Cold Brew Coffee");
        assert!(store.get("unknown-sku").is_none());
    }

    #[test]
    fn demo_shelf_codes_exist_in_demo_layout() {
        let store = InMemoryProductStore::demo_catalog();
        let layout = layout::StoreLayout::demo_store().unwrap();
        for product in store.list() {
            if let Some(code) = &product.shelf_code {
                assert!(
                    layout.shelves().iter().any(|s| &s.code == code),
                    "product {} references unknown shelf {code}",
                    product.id
                );
            }
        }
    }
}
