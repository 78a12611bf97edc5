//! Product catalog snapshot.
//!
//! The catalog is read-only input supplied at startup, the in-memory
//! equivalent of the storefront's product/category/hero tables. Prices are
//! integer cents; no floating point enters cart arithmetic.

use serde::{Deserialize, Serialize};

pub type ProductId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    pub category: String,
    /// Asset keys of the product images, gallery order. May be empty - the
    /// gallery then renders inert with a placeholder card.
    pub images: Vec<String>,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_cents(self.price_cents)
    }
}

/// One slide of the home-page hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlide {
    pub caption: String,
    pub asset: String,
}

/// Immutable product/hero snapshot the widgets navigate over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub hero: Vec<HeroSlide>,
}

impl Catalog {
    /// Load a catalog snapshot from a JSON file.
    pub fn from_json(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        Ok(catalog)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for product in &self.products {
            if !out.contains(&product.category.as_str()) {
                out.push(&product.category);
            }
        }
        out
    }

    /// Case-insensitive name/description search, optionally narrowed to one
    /// category. Empty query matches everything.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Built-in demo storefront used when no catalog file is supplied.
    pub fn demo() -> Self {
        let mk = |id, name: &str, desc: &str, cents, cat: &str, images: &[&str]| Product {
            id,
            name: name.to_string(),
            description: desc.to_string(),
            price_cents: cents,
            category: cat.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            products: vec![
                mk(
                    1,
                    "Trail Runner X",
                    "Lightweight trail shoe with rock plate",
                    8999,
                    "Footwear",
                    &["trail_runner_1", "trail_runner_2", "trail_runner_3"],
                ),
                mk(
                    2,
                    "Canvas Daypack",
                    "20L daypack, waxed canvas, laptop sleeve",
                    5450,
                    "Bags",
                    &["daypack_1", "daypack_2"],
                ),
                mk(
                    3,
                    "Merino Crew Tee",
                    "Mid-weight merino, flatlock seams",
                    4200,
                    "Apparel",
                    &["merino_tee_1"],
                ),
                mk(
                    4,
                    "Thermos Flask 750",
                    "Vacuum flask, 12h hot / 24h cold",
                    2875,
                    "Gear",
                    &["flask_1", "flask_2"],
                ),
                mk(
                    5,
                    "Wool Beanie",
                    "Ribbed knit beanie, one size",
                    1999,
                    "Apparel",
                    &[],
                ),
            ],
            hero: vec![
                HeroSlide {
                    caption: "Flash sale - up to 40% off trail gear".to_string(),
                    asset: "hero_sale".to_string(),
                },
                HeroSlide {
                    caption: "New season apparel has landed".to_string(),
                    asset: "hero_apparel".to_string(),
                },
                HeroSlide {
                    caption: "Free shipping on orders over $50".to_string(),
                    asset: "hero_shipping".to_string(),
                },
            ],
        }
    }
}

/// Render integer cents as a dollar label.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = Catalog::demo();

        let by_name = catalog.search("trail", None);
        assert!(by_name.iter().any(|p| p.name == "Trail Runner X"));

        let by_desc = catalog.search("vacuum", None);
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].name, "Thermos Flask 750");

        assert!(catalog.search("no such thing", None).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::demo();
        assert_eq!(
            catalog.search("MERINO", None).len(),
            catalog.search("merino", None).len()
        );
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::demo();
        let apparel = catalog.search("", Some("Apparel"));
        assert_eq!(apparel.len(), 2);
        assert!(apparel.iter().all(|p| p.category == "Apparel"));
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(8999), "$89.99");
        assert_eq!(format_cents(10000), "$100.00");
    }
}
