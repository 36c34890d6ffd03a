//! Path to handler resolution.
//!
//! The route set is small and flat, so a [`Router`] is an ordered list of
//! `(pattern, handler)` pairs compared by exact string equality. The first
//! matching pattern wins and anything else goes to the not-found handler.

use strum_macros::{EnumIter, IntoStaticStr};

/// The fixed set of pages the site knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Route {
    Home,
    Servers,
    Leaderboard,
    Store,
    Discord,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Servers => "/sunucular",
            Route::Leaderboard => "/siralama",
            Route::Store => "/magaza",
            Route::Discord => "/discord",
        }
    }

    /// The label shown in the navigation bar.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Ana Sayfa",
            Route::Servers => "Sunucular",
            Route::Leaderboard => "Sıralama",
            Route::Store => "Mağaza",
            Route::Discord => "Discord",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::Servers => "🖥",
            Route::Leaderboard => "🏆",
            Route::Store => "🛒",
            Route::Discord => "💬",
        }
    }

    /// Exact match only: no trailing slash folding, no query strings.
    pub fn from_path(path: &str) -> Option<Route> {
        use strum::IntoEnumIterator;
        Route::iter().find(|route| route.path() == path)
    }
}

/// Outcome of [`Router::resolve`].
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved<'a, H> {
    Found { pattern: &'a str, handler: &'a H },
    NotFound { handler: &'a H },
}

impl<'a, H> Resolved<'a, H> {
    pub fn handler(&self) -> &'a H {
        match self {
            Resolved::Found { handler, .. } | Resolved::NotFound { handler } => handler,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found { .. })
    }
}

pub struct Router<H> {
    routes: Vec<(String, H)>,
    not_found: H,
}

impl<H> Router<H> {
    pub fn new(not_found: H) -> Self {
        Self {
            routes: Vec::new(),
            not_found,
        }
    }

    /// Appends a route. Earlier routes take precedence over later ones with
    /// the same pattern.
    pub fn route(mut self, pattern: impl Into<String>, handler: H) -> Self {
        self.routes.push((pattern.into(), handler));
        self
    }

    pub fn resolve(&self, path: &str) -> Resolved<'_, H> {
        match self.routes.iter().find(|(pattern, _)| pattern == path) {
            Some((pattern, handler)) => Resolved::Found { pattern, handler },
            None => Resolved::NotFound {
                handler: &self.not_found,
            },
        }
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(pattern, _)| pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn route_paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/magaza/"), None);
        assert_eq!(Route::from_path("/MAGAZA"), None);
        assert_eq!(Route::from_path("/magaza?x=1"), None);
    }

    #[test]
    fn first_match_wins() {
        let router = Router::new("missing")
            .route("/", "home")
            .route("/", "shadowed");
        assert_eq!(
            router.resolve("/"),
            Resolved::Found {
                pattern: "/",
                handler: &"home"
            }
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        let router = Router::new("missing").route("/magaza", "store");
        let resolved = router.resolve("/kurallar");
        assert!(!resolved.is_found());
        assert_eq!(*resolved.handler(), "missing");
        assert_eq!(router.patterns().collect::<Vec<_>>(), ["/magaza"]);
    }
}
