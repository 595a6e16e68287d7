use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::{CatalogMode, Route};

/// A role the user can enter the marketplace as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCard {
    pub mode: CatalogMode,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

pub const ROLE_CARDS: [RoleCard; 2] = [
    RoleCard {
        mode: CatalogMode::Buyer,
        title: "Buyer",
        subtitle: "Browse products and shop",
        icon: "🛒",
    },
    RoleCard {
        mode: CatalogMode::Seller,
        title: "Seller",
        subtitle: "List and manage your products",
        icon: "🏪",
    },
];

/// Welcome screen with the buyer / seller choice
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn cards(&self) -> &'static [RoleCard] {
        &ROLE_CARDS
    }

    pub fn choose(&self, mode: CatalogMode) -> Vec<Effect> {
        vec![Effect::Navigate(Route::Catalog(mode))]
    }
}
