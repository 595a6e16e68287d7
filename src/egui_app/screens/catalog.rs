//! Product grid for buyers and sellers.
//!
//! Both variants share this controller; the seller one additionally offers
//! "add product". Products come from the deterministic generator.

use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::{CatalogMode, Route};
use crate::shared::catalog::{
    filter_by_category, generate_catalog, Category, Product, VisibleWindow, ALL_CATEGORIES,
};

#[derive(Debug, Clone)]
pub struct CatalogScreen {
    mode: CatalogMode,
    products: Vec<Product>,
    category: String,
    window: VisibleWindow,
}

impl CatalogScreen {
    pub fn new(mode: CatalogMode, catalog_size: u32, page_size: usize) -> Self {
        Self {
            mode,
            products: generate_catalog(catalog_size),
            category: ALL_CATEGORIES.to_string(),
            window: VisibleWindow::new(page_size),
        }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    /// Chip labels, "All" first
    pub fn categories(&self) -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(Category::ALL.iter().map(|c| c.as_str()))
            .collect()
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    /// Select a category chip; the visible window starts over
    pub fn select_category(&mut self, category: &str) {
        if self.category == category {
            return;
        }
        self.category = category.to_string();
        self.window.reset();
    }

    pub fn filtered(&self) -> Vec<&Product> {
        filter_by_category(&self.products, &self.category)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Products currently revealed by the window
    pub fn visible(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        self.window.slice(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.filtered_count())
    }

    pub fn load_more(&mut self) -> bool {
        let total = self.filtered_count();
        self.window.load_more(total)
    }

    pub fn open_product(&self, id: u32) -> Vec<Effect> {
        vec![Effect::Navigate(Route::ProductDetail(id))]
    }

    pub fn add_product(&self) -> Vec<Effect> {
        match self.mode {
            CatalogMode::Seller => vec![Effect::Navigate(Route::CreateProduct)],
            CatalogMode::Buyer => Vec::new(),
        }
    }
}
