//! Routes and the navigation stack.

/// Which side of the marketplace the catalog is shown for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogMode {
    Buyer,
    Seller,
}

impl CatalogMode {
    pub fn title(self) -> &'static str {
        match self {
            CatalogMode::Buyer => "Shop",
            CatalogMode::Seller => "My Products",
        }
    }
}

/// Every screen the client can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    VerifyOtp,
    Home,
    Profile,
    Catalog(CatalogMode),
    CreateProduct,
    ProductDetail(u32),
}

impl Route {
    /// Routes that sit behind the bottom tab bar
    pub fn is_tab(self) -> bool {
        matches!(self, Route::Home | Route::Profile)
    }

    /// Routes reachable without a session
    pub fn is_public(self) -> bool {
        matches!(self, Route::Login | Route::Register | Route::VerifyOtp)
    }
}

/// History stack with a mount counter.
///
/// `generation` changes on every route change, so work started for one
/// mounted screen can tell that the screen is gone.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
    generation: u64,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
            generation: 0,
        }
    }

    /// `Home` with a stored token, `Login` otherwise
    pub fn for_startup(has_token: bool) -> Self {
        Self::new(if has_token { Route::Home } else { Route::Login })
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(from = ?self.current(), to = ?route, "Navigate");
        self.stack.push(route);
        self.generation += 1;
    }

    /// Replace the whole history with `route`
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(from = ?self.current(), to = ?route, "Replace");
        self.stack.clear();
        self.stack.push(route);
        self.generation += 1;
    }

    /// Switch tabs without growing the history
    pub fn switch_tab(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        match self.stack.last_mut() {
            Some(top) if top.is_tab() => {
                *top = route;
                self.generation += 1;
            }
            _ => self.push(route),
        }
    }

    /// Pop the current route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        self.generation += 1;
        true
    }
}
