//! The static product catalog and its queries.

use crate::catalog::{Category, CategorySummary, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// A read-only, ordered collection of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products. Later duplicates of an id are dropped.
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "duplicate catalog id ignored");
                continue;
            }
            unique.push(product);
        }
        Self { products: unique }
    }

    /// The NADER storefront catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_products())
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products in one category.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Categories present in the catalog, in first-seen order, with counts.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for product in &self.products {
            match summaries.iter_mut().find(|s| s.category == product.category) {
                Some(summary) => summary.count += 1,
                None => summaries.push(CategorySummary {
                    category: product.category.clone(),
                    count: 1,
                }),
            }
        }
        summaries
    }
}

fn placeholder(text: &str) -> String {
    format!("https://placehold.co/600x600?text={}", text)
}

struct Seed {
    id: &'static str,
    name: &'static str,
    dollars: i64,
    category: Category,
    description: &'static str,
    images: [&'static str; 3],
    stock: u32,
    features: &'static [&'static str],
}

fn builtin_products() -> Vec<Product> {
    let seeds = [
        Seed {
            id: "luxury-tshirt-1",
            name: "Luxury T-Shirt",
            dollars: 35,
            category: Category::Clothes,
            description: "Premium cotton t-shirt crafted with attention to detail. Features a minimalist design with the NADER signature subtle branding. Perfect for everyday luxury.",
            images: [
                "Luxury+Premium+Cotton+T-Shirt+Black+Minimalist+Design+NADER+Brand",
                "Luxury+T-Shirt+Back+View+Minimalist+Black+Cotton",
                "Luxury+T-Shirt+Detail+Close+Up+Premium+Cotton+Fabric",
            ],
            stock: 50,
            features: &["100% Premium Cotton", "Minimalist Design", "Machine Washable", "Available in Multiple Sizes"],
        },
        Seed {
            id: "black-mug-1",
            name: "Black Mug",
            dollars: 15,
            category: Category::Mugs,
            description: "Elegant matte black ceramic mug with subtle NADER branding. Perfect for your morning coffee or evening tea. Dishwasher and microwave safe.",
            images: [
                "Elegant+Black+Ceramic+Mug+Matte+Finish+NADER+Brand+Coffee",
                "Black+Mug+With+Coffee+Steam+Morning+Luxury+Ceramic",
                "Black+Mug+Handle+Detail+Premium+Ceramic+Craftsmanship",
            ],
            stock: 100,
            features: &["Premium Ceramic", "Matte Black Finish", "Dishwasher Safe", "Microwave Safe", "350ml Capacity"],
        },
        Seed {
            id: "insulated-bottle-1",
            name: "Insulated Bottle",
            dollars: 25,
            category: Category::Bottles,
            description: "Double-wall vacuum insulated stainless steel bottle. Keeps drinks cold for 24 hours or hot for 12 hours. Features leak-proof design with premium finish.",
            images: [
                "Premium+Insulated+Steel+Water+Bottle+Black+NADER+Luxury+Design",
                "Insulated+Bottle+Lifestyle+Outdoor+Adventure+Premium+Steel",
                "Water+Bottle+Cap+Detail+Leak+Proof+Design+Stainless+Steel",
            ],
            stock: 75,
            features: &["Double-Wall Vacuum Insulation", "Leak-Proof Design", "BPA-Free", "500ml Capacity", "24h Cold / 12h Hot"],
        },
        Seed {
            id: "minimalist-notebook-1",
            name: "Minimalist Notebook",
            dollars: 20,
            category: Category::Notebooks,
            description: "Premium hardcover notebook with dotted pages. Perfect for journaling, note-taking, or creative work. Features high-quality paper and minimalist design.",
            images: [
                "Premium+Minimalist+Hardcover+Notebook+Black+NADER+Dotted+Pages",
                "Notebook+Open+Pages+Dotted+Paper+Premium+Quality+Minimalist",
                "Notebook+Cover+Detail+Hardcover+Luxury+Black+Finish",
            ],
            stock: 80,
            features: &["Premium Paper Quality", "Hardcover Design", "Dotted Pages", "Ribbon Bookmark", "192 Pages"],
        },
        Seed {
            id: "phone-cover-1",
            name: "Phone Cover",
            dollars: 18,
            category: Category::PhoneCovers,
            description: "Minimalist phone case providing excellent protection with style. Available for various phone models. Features precise cutouts and premium materials.",
            images: [
                "Minimalist+Black+Phone+Case+Premium+Protection+NADER+Design",
                "Phone+Case+On+Device+Lifestyle+Premium+Black+Protection",
                "Phone+Case+Corner+Protection+Detail+Premium+Material",
            ],
            stock: 120,
            features: &["Drop Protection", "Precise Cutouts", "Wireless Charging Compatible", "Premium Materials", "Multiple Models Available"],
        },
        Seed {
            id: "luxury-hoodie-1",
            name: "Premium Hoodie",
            dollars: 65,
            category: Category::Clothes,
            description: "Ultra-soft premium cotton hoodie with minimalist design. Features subtle NADER branding and perfect fit. Ideal for casual luxury comfort.",
            images: [
                "Premium+Cotton+Hoodie+Black+Minimalist+NADER+Luxury+Comfort",
                "Hoodie+Detail+Premium+Cotton+Soft+Comfort+Minimalist",
                "Hoodie+Lifestyle+Casual+Luxury+Premium+Black+Design",
            ],
            stock: 30,
            features: &["Premium Cotton Blend", "Ultra-Soft Interior", "Adjustable Hood", "Kangaroo Pocket", "Machine Washable"],
        },
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let images: Vec<String> = seed.images.iter().map(|t| placeholder(t)).collect();
            Product {
                id: ProductId::new(seed.id),
                name: seed.name.to_string(),
                price: Money::usd(seed.dollars),
                category: seed.category,
                description: seed.description.to_string(),
                image: images[0].clone(),
                images,
                in_stock: true,
                stock_quantity: Some(seed.stock),
                features: seed.features.iter().map(|f| f.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);

        let mug = catalog.get(&ProductId::new("black-mug-1")).unwrap();
        assert_eq!(mug.price, Money::usd(15));
        assert_eq!(mug.image, mug.images[0]);
    }

    #[test]
    fn test_require_missing() {
        let catalog = Catalog::builtin();
        let err = catalog.require(&ProductId::new("nope")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::builtin();
        let clothes: Vec<&str> = catalog
            .by_category(Category::Clothes)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(clothes, vec!["luxury-tshirt-1", "luxury-hoodie-1"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = Catalog::builtin();

        let hits = catalog.search("MUG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "black-mug-1");

        // "cotton" appears in the t-shirt and hoodie descriptions
        assert_eq!(catalog.search("cotton").len(), 2);

        // category names are searchable too
        assert_eq!(catalog.search("phone covers").len(), 1);

        assert!(catalog.search("zeppelin").is_empty());
    }

    #[test]
    fn test_blank_search_returns_all() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search("   ").len(), 6);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::builtin();
        let summaries = catalog.categories();

        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].category, Category::Clothes);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[4].category, Category::PhoneCovers);
        assert_eq!(summaries[4].count, 1);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let a = Product::new("x", "First", Money::usd(1), Category::Mugs);
        let b = Product::new("x", "Second", Money::usd(2), Category::Mugs);
        let catalog = Catalog::new(vec![a, b]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name, "First");
    }
}
