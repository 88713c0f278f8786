//! Static product catalog backing the products endpoint.
//!
//! Fixture data: the tables are fixed at compile time and never mutated.
//! Category ids are the real backend ids the client under test knows about.

use serde::Serialize;

/// A single product record, serialized verbatim to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    pub category_id: u32,
    pub icon: &'static str,
}

/// A product category with its ordered product list.
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub products: &'static [Product],
}

const ELECTRONICS: u32 = 456;
const CLOTHING: u32 = 457;
const BOOKS: u32 = 458;

// Declaration order is catalog iteration order: the unfiltered listing
// concatenates the categories exactly as written here
static CATALOG: &[Category] = &[
    Category {
        id: ELECTRONICS,
        name: "Electronics",
        products: &[
            Product {
                id: 1,
                name: "Laptop Pro",
                price: 1299,
                category_id: ELECTRONICS,
                icon: "💻",
            },
            Product {
                id: 2,
                name: "Smartphone X",
                price: 899,
                category_id: ELECTRONICS,
                icon: "📱",
            },
            Product {
                id: 3,
                name: "Wireless Mouse",
                price: 49,
                category_id: ELECTRONICS,
                icon: "🖱️",
            },
            Product {
                id: 4,
                name: "Headphones",
                price: 199,
                category_id: ELECTRONICS,
                icon: "🎧",
            },
        ],
    },
    Category {
        id: CLOTHING,
        name: "Clothing",
        products: &[
            Product {
                id: 5,
                name: "T-Shirt",
                price: 29,
                category_id: CLOTHING,
                icon: "👕",
            },
            Product {
                id: 6,
                name: "Jeans",
                price: 79,
                category_id: CLOTHING,
                icon: "👖",
            },
        ],
    },
    Category {
        id: BOOKS,
        name: "Books",
        products: &[
            Product {
                id: 7,
                name: "JavaScript Book",
                price: 45,
                category_id: BOOKS,
                icon: "📚",
            },
            Product {
                id: 8,
                name: "Python Guide",
                price: 39,
                category_id: BOOKS,
                icon: "📖",
            },
        ],
    },
];

/// All categories in catalog order.
pub fn categories() -> impl Iterator<Item = &'static Category> {
    CATALOG.iter()
}

/// Look up a category's products by the raw query-string value.
///
/// Returns `None` for unknown or non-numeric ids; callers answer those with
/// an empty listing rather than an error.
pub fn products_in(category: &str) -> Option<&'static [Product]> {
    let id = category.parse::<u32>().ok()?;
    CATALOG.iter().find(|c| c.id == id).map(|c| c.products)
}

/// All products across every category, in catalog order.
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    CATALOG.iter().flat_map(|c| c.products.iter())
}
