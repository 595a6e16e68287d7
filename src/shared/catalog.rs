//! Product catalog fixtures
//!
//! The storefront has no product endpoint yet, so the seller and buyer
//! catalogs are generated from the product id. Every value is a pure
//! function of the id: the same id always yields the same product, across
//! renders and process restarts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the pass-through category filter
pub const ALL_CATEGORIES: &str = "All";

/// Default number of generated catalog entries
pub const DEFAULT_CATALOG_SIZE: u32 = 50;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Dish,
    Food,
    Books,
    Sports,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::Dish,
        Category::Food,
        Category::Books,
        Category::Sports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Dish => "Dish",
            Category::Food => "Food",
            Category::Books => "Books",
            Category::Sports => "Sports",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Electronics => "📱",
            Category::Fashion => "👗",
            Category::Dish => "🍽",
            Category::Food => "🍎",
            Category::Books => "📚",
            Category::Sports => "⚽",
        }
    }

    fn templates(self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "iPhone 15 Pro",
                "Samsung Galaxy S24",
                "MacBook Pro",
                "iPad Air",
                "AirPods Pro",
                "Sony Headphones",
                "Apple Watch",
                "Dell Laptop",
                "Nintendo Switch",
                "PlayStation 5",
            ],
            Category::Fashion => &[
                "Nike Air Max",
                "Adidas Ultraboost",
                "Designer Jeans",
                "Leather Jacket",
                "Summer Dress",
                "Winter Coat",
                "Luxury Watch",
                "Designer Handbag",
                "Sunglasses",
                "Perfume",
            ],
            Category::Dish => &[
                "Dinner Set",
                "Cookware Set",
                "Non-stick Pan",
                "Glass Bowls",
                "Chef Knife",
                "Cutting Board",
            ],
            Category::Food => &[
                "Organic Fruits",
                "Fresh Vegetables",
                "Premium Coffee",
                "Organic Rice",
                "Olive Oil",
                "Honey",
            ],
            Category::Books => &[
                "Programming Guide",
                "Business Book",
                "Self-Help",
                "Cook Book",
                "Travel Guide",
                "Art Book",
            ],
            Category::Sports => &[
                "Football",
                "Basketball",
                "Tennis Racket",
                "Yoga Mat",
                "Dumbbells",
                "Running Shoes",
            ],
        }
    }

    fn description(self) -> &'static str {
        match self {
            Category::Electronics => "Cutting-edge technology with premium build quality and advanced features. This product combines innovation with reliability to deliver exceptional performance for both professional and personal use.",
            Category::Fashion => "Premium fashion item crafted with attention to detail and quality materials. Designed to complement your style while providing comfort and durability for everyday wear.",
            Category::Dish => "High-quality kitchenware designed for both functionality and aesthetic appeal. Perfect for everyday cooking and special occasions, built to last with professional-grade materials.",
            Category::Food => "Fresh, premium quality product sourced from trusted suppliers. Rich in nutrients and flavor, perfect for healthy cooking and gourmet preparations.",
            Category::Books => "Comprehensive and well-researched content from expert authors. Essential reading for learning and professional development in the field.",
            Category::Sports => "Professional-grade sports equipment designed for optimal performance and safety. Suitable for both beginners and advanced athletes.",
        }
    }

    fn specifications(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Category::Electronics => &[
                ("Brand", "Premium Brand"),
                ("Warranty", "2 Years International"),
                ("Connectivity", "Bluetooth, WiFi, USB-C"),
                ("Battery Life", "All-day usage"),
                ("Material", "Premium aluminum and glass"),
                ("Compatibility", "Universal"),
                ("Weight", "Lightweight design"),
            ],
            Category::Fashion => &[
                ("Material", "Premium cotton blend"),
                ("Size Range", "XS - XXL available"),
                ("Care Instructions", "Machine washable"),
                ("Origin", "Imported"),
                ("Season", "All seasons"),
                ("Style", "Contemporary"),
                ("Fit", "Regular fit"),
            ],
            Category::Dish => &[
                ("Material", "Food-grade stainless steel"),
                ("Dishwasher Safe", "Yes"),
                ("Heat Resistance", "Up to 300°C"),
                ("Coating", "Non-stick ceramic"),
                ("Handle", "Ergonomic design"),
                ("Set Includes", "Multiple pieces"),
                ("Origin", "Premium manufacturer"),
            ],
            Category::Food => &[
                ("Origin", "Locally sourced"),
                ("Organic", "Yes"),
                ("Shelf Life", "Fresh for 7 days"),
                ("Storage", "Keep refrigerated"),
                ("Nutrition", "High in vitamins"),
                ("Packaging", "Eco-friendly"),
                ("Certification", "Organic certified"),
            ],
            Category::Books => &[
                ("Pages", "300+ pages"),
                ("Language", "English"),
                ("Publisher", "Premium Publisher"),
                ("Edition", "Latest edition"),
                ("Format", "Paperback/Hardcover"),
                ("ISBN", "978-XXXXXXXXX"),
                ("Publication Year", "2024"),
            ],
            Category::Sports => &[
                ("Material", "Professional grade"),
                ("Size", "Standard/Multiple sizes"),
                ("Weight", "Official specifications"),
                ("Durability", "Professional quality"),
                ("Certification", "Official standards"),
                ("Usage", "Indoor/Outdoor"),
                ("Maintenance", "Easy to clean"),
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub img: String,
    pub rating: f64,
    pub sales: u64,
    pub category: Category,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some()
    }
}

/// Format an amount in Rwandan francs with thousands separators.
pub fn format_rwf(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped} RWF")
}

/// Build the catalog entry for `id`. Ids start at 1.
pub fn generate_product(id: u32) -> Option<Product> {
    if id == 0 {
        return None;
    }
    let index = (id - 1) as usize;
    let category = Category::ALL[index % Category::ALL.len()];
    let templates = category.templates();
    let name = templates[(index / Category::ALL.len()) % templates.len()];

    let n = u64::from(id);
    let base_price = 50_000 + n * 15_000 + (n % 7) * 10_000;
    // base_price is a multiple of 5000, so this is exact
    let original_price = (n % 4 == 0).then(|| base_price * 5 / 4);

    Some(Product {
        id,
        name: name.to_string(),
        price: format_rwf(base_price),
        original_price: original_price.map(format_rwf),
        img: format!("https://picsum.photos/200/300?random={id}"),
        rating: f64::from(35 + id % 15) / 10.0,
        sales: 10 + n * 8 + (n % 13) * 5,
        category,
    })
}

/// Generate products `1..=size`.
pub fn generate_catalog(size: u32) -> Vec<Product> {
    (1..=size).filter_map(generate_product).collect()
}

/// Select products whose category equals `category`; "All" passes everything through.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category == ALL_CATEGORIES {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| product.category.as_str() == category)
        .collect()
}

/// Client-side "load more" cursor over a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    page_size: usize,
    visible: usize,
}

impl VisibleWindow {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items shown out of `total`
    pub fn visible(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Reveal one more page. Returns false when everything is already shown.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.visible = self.visible.saturating_add(self.page_size);
        true
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(..self.visible(items.len())).unwrap_or(items)
    }
}

/// Seller shown on the product page
#[derive(Debug, Clone, PartialEq)]
pub struct SellerInfo {
    pub name: String,
    pub rating: f64,
    pub location: &'static str,
}

/// Everything the product page shows beyond the catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub description: &'static str,
    pub specifications: &'static [(&'static str, &'static str)],
    pub in_stock: bool,
    pub seller: SellerInfo,
    pub images: Vec<String>,
    pub discount_percent: Option<u32>,
}

impl ProductDetails {
    pub fn from_product(product: Product) -> Self {
        let id = product.id.max(1);
        let images = vec![
            product.img.clone(),
            format!("https://picsum.photos/400/500?random={}", id + 100),
            format!("https://picsum.photos/400/500?random={}", id + 200),
            format!("https://picsum.photos/400/500?random={}", id + 300),
        ];
        let discount_percent = product
            .original_price
            .as_deref()
            .and_then(|original| discount_percent(original, &product.price));
        Self {
            description: product.category.description(),
            specifications: product.category.specifications(),
            in_stock: id % 10 != 0,
            seller: SellerInfo {
                name: format!("{} Store Rwanda", product.category),
                rating: f64::from(45 + id % 5) / 10.0,
                location: "Kigali, Rwanda",
            },
            images,
            discount_percent,
            product,
        }
    }
}

fn digits_value(price: &str) -> Option<u64> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Percentage saved going from `original` to `current`, when there is a saving.
pub fn discount_percent(original: &str, current: &str) -> Option<u32> {
    let original = digits_value(original)?;
    let current = digits_value(current)?;
    if original == 0 || current >= original {
        return None;
    }
    let savings = ((original - current) as f64 / original as f64 * 100.0).round();
    (savings > 0.0).then_some(savings as u32)
}

/// Product shown when the detail page is opened without a known id
pub fn sample_product() -> Product {
    Product {
        id: 1,
        name: "iPhone 15 Pro Max".to_string(),
        price: "1,200,000 RWF".to_string(),
        original_price: Some("1,400,000 RWF".to_string()),
        img: "https://picsum.photos/400/500?random=1".to_string(),
        rating: 4.8,
        sales: 156,
        category: Category::Electronics,
    }
}
