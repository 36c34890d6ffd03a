//! The root view and the state shared by every part of it.

use floem::{
    reactive::{create_effect, RwSignal, SignalGet, SignalUpdate},
    views::{dyn_container, scroll, stack, v_stack, Decorators},
    IntoView,
};
use nautilus_store::{anim::CopyFeedback, CartStore, PathStore, Route};
use tracing::debug;

use crate::{config::SiteConfig, footer, nav, pages, theme, widgets};

/// The visible part of the page, in scroll content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

/// Handles to the application-wide state. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Site {
    pub config: &'static SiteConfig,
    pub paths: PathStore,
    pub cart: CartStore,
    /// The "IP copied" popup raised by the join buttons.
    pub popup: RwSignal<CopyFeedback>,
    pub viewport: RwSignal<Viewport>,
    pub window_width: RwSignal<f64>,
    pub menu_open: RwSignal<bool>,
}

impl Site {
    pub fn new(config: &'static SiteConfig) -> Self {
        Self {
            config,
            paths: PathStore::new(config.start_path.clone()),
            cart: CartStore::new(),
            popup: RwSignal::new(CopyFeedback::default()),
            viewport: RwSignal::new(Viewport {
                top: 0.0,
                height: config.window.height,
            }),
            window_width: RwSignal::new(config.window.width),
            menu_open: RwSignal::new(false),
        }
    }

    /// Goes to `path` and closes the navigation menu.
    pub fn navigate(&self, path: &str) {
        self.paths.navigate(path);
        self.menu_open.set(false);
    }

    /// The way out of the not-found page.
    pub fn go_home(&self) {
        self.navigate(Route::Home.path());
    }

    /// Copies the server address for the join buttons.
    pub fn join(&self) {
        widgets::join_server(self.popup, &self.config.server_address);
    }

    pub fn is_compact(&self) -> bool {
        self.window_width.get() < theme::COMPACT_BELOW
    }

    pub fn is_scrolled(&self) -> bool {
        self.viewport.get().top > 50.0
    }
}

pub fn app_view(config: &'static SiteConfig) -> impl IntoView {
    let site = Site::new(config);
    let router = pages::site_router();

    site.paths.subscribe(|path| {
        let route: &'static str = Route::from_path(path).map_or("NotFound", Into::into);
        debug!(path, route, "path changed");
    });

    // The menu only exists in the compact layout.
    create_effect(move |_| {
        if !site.is_compact() {
            site.menu_open.set(false);
        }
    });

    let page = dyn_container(
        move || site.paths.current_path(),
        move |path| (router.resolve(&path).handler())(site),
    )
    .style(|s| s.width_full().flex_col().items_center());

    let content = scroll(
        v_stack((page, footer::footer(site))).style(|s| s.width_full().flex_col().items_center()),
    )
    .on_scroll(move |rect| {
        site.viewport.set(Viewport {
            top: rect.y0,
            height: rect.height(),
        })
    })
    .style(|s| s.width_full().flex_grow(1.0).flex_basis(0.0));

    stack((
        widgets::particles(),
        v_stack((nav::nav_bar(site), content)).style(|s| s.size_full().flex_col()),
        nav::menu_overlay(site),
        widgets::ip_popup(site.popup, &config.server_address),
    ))
    .on_resize(move |rect| site.window_width.set(rect.width()))
    .style(|s| {
        s.size_full()
            .background(theme::BACKGROUND)
            .color(theme::WHITE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::new(Box::leak(Box::new(SiteConfig::default())))
    }

    #[test]
    fn go_home_leaves_not_found_and_closes_menu() {
        let site = site();
        site.navigate("/unknown");
        assert!(Route::from_path(&site.paths.current_path()).is_none());

        site.menu_open.set(true);
        site.go_home();

        assert_eq!(site.paths.current_path(), "/");
        assert!(!site.menu_open.get());
        assert!(site.paths.back());
        assert_eq!(site.paths.current_path(), "/unknown");
    }
}
