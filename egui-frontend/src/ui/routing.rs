//! # Routing Module
//!
//! Client-side route table for the mock-up. There is no real URL bar; routes
//! are an enum, but each one keeps its path string so the navigation rules
//! stay expressed the same way the screens talk about them.
//!
//! ## Key Types:
//! - `Route` - One variant per screen, with `path()` / `from_path()`
//! - `NavTab` - The three bottom-navigation tabs and the active-tab rule

/// A route-addressable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Cards,
    Support,
    SendMoney,
}

impl Route {
    /// The path string this route answers to.
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Cards => "/cards",
            Route::Support => "/support",
            Route::SendMoney => "/send",
        }
    }

    /// Parse a path back into a route. Unknown paths are not navigable.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/dashboard" => Some(Route::Dashboard),
            "/cards" => Some(Route::Cards),
            "/support" => Some(Route::Support),
            "/send" => Some(Route::SendMoney),
            _ => None,
        }
    }
}

/// Tabs in the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Cards,
    Support,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Home, NavTab::Cards, NavTab::Support];

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Cards => "Cards",
            NavTab::Support => "Support",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            NavTab::Home => "🏠",
            NavTab::Cards => "💳",
            NavTab::Support => "❓",
        }
    }

    /// Route this tab navigates to when pressed.
    pub fn target_route(self) -> Route {
        match self {
            NavTab::Home => Route::Dashboard,
            NavTab::Cards => Route::Cards,
            NavTab::Support => Route::Support,
        }
    }

    /// Which tab is highlighted for a given route. Exact match per tab, with
    /// the send-money flow counting as Home. Exactly one tab is active for
    /// every route.
    pub fn for_route(route: Route) -> NavTab {
        match route {
            Route::Dashboard | Route::SendMoney => NavTab::Home,
            Route::Cards => NavTab::Cards,
            Route::Support => NavTab::Support,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_round_trip() {
        for route in [Route::Dashboard, Route::Cards, Route::Support, Route::SendMoney] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_are_not_routes() {
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path("/card/1/transactions"), None);
    }

    #[test]
    fn test_active_tab_mapping() {
        assert_eq!(NavTab::for_route(Route::Dashboard), NavTab::Home);
        assert_eq!(NavTab::for_route(Route::Cards), NavTab::Cards);
        assert_eq!(NavTab::for_route(Route::Support), NavTab::Support);
        // The send flow highlights Home even though its path is /send
        assert_eq!(NavTab::for_route(Route::SendMoney), NavTab::Home);
    }

    #[test]
    fn test_exactly_one_tab_active_per_route() {
        for route in [Route::Dashboard, Route::Cards, Route::Support, Route::SendMoney] {
            let active_count = NavTab::ALL
                .iter()
                .filter(|tab| NavTab::for_route(route) == **tab)
                .count();
            assert_eq!(active_count, 1, "route {:?}", route);
        }
    }

    #[test]
    fn test_tab_targets() {
        assert_eq!(NavTab::Home.target_route(), Route::Dashboard);
        assert_eq!(NavTab::Cards.target_route(), Route::Cards);
        assert_eq!(NavTab::Support.target_route(), Route::Support);
    }
}
