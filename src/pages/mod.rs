//! One view per route, plus the not-found view.

mod home;
mod servers;
mod store;

use floem::{
    peniko::Color,
    views::{empty, text, v_stack, Decorators},
    AnyView, IntoView,
};
use nautilus_store::{Route, Router};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::{
    app::Site,
    theme,
    widgets::{glow_button, Size, Variant},
};

pub type Page = fn(Site) -> AnyView;

pub fn page_for(route: Route) -> Page {
    match route {
        Route::Home => home::home_page,
        Route::Servers => servers::servers_page,
        Route::Leaderboard => leaderboard_page,
        Route::Store => store::store_page,
        Route::Discord => discord_page,
    }
}

/// Maps every known route to its page. Anything else is not found.
pub fn site_router() -> Router<Page> {
    Route::iter().fold(Router::new(not_found_page as Page), |router, route| {
        router.route(route.path(), page_for(route))
    })
}

/// A centered title, a line of text and an optional action.
fn notice(
    title: &'static str,
    title_color: Color,
    body: &'static str,
    action: Option<AnyView>,
) -> AnyView {
    let action = action.unwrap_or_else(|| empty().into_any());
    v_stack((
        text(title).style(move |s| s.font_size(40.0).font_bold().color(title_color)),
        text(body).style(|s| s.color(theme::GRAY_300)),
        action,
    ))
    .style(|s| {
        s.width_full()
            .min_height(560.0)
            .items_center()
            .justify_center()
            .gap(20.0)
    })
    .into_any()
}

fn leaderboard_page(_site: Site) -> AnyView {
    notice("Sıralama", theme::CYAN_400, "Bu sayfa yakında gelecek...", None)
}

fn discord_page(site: Site) -> AnyView {
    let url = site.config.discord_url.as_str();
    let join = glow_button(text("Discord'a Katıl"), Variant::Primary, Size::Normal).action(move || {
        if let Err(err) = open::that(url) {
            warn!(%err, url, "failed to open Discord invite");
        }
    });
    notice(
        "Discord",
        theme::CYAN_400,
        "Discord sunucumuza katılın!",
        Some(join.into_any()),
    )
}

fn not_found_page(site: Site) -> AnyView {
    let home = glow_button(text("Ana Sayfaya Dön"), Variant::Primary, Size::Normal)
        .action(move || site.go_home());
    notice("404", theme::RED_400, "Sayfa bulunamadı", Some(home.into_any()))
}

#[cfg(test)]
mod tests {
    use nautilus_store::Resolved;

    use super::*;

    #[test]
    fn every_route_has_a_page() {
        let router = site_router();
        for route in Route::iter() {
            match router.resolve(route.path()) {
                Resolved::Found { pattern, .. } => assert_eq!(pattern, route.path()),
                Resolved::NotFound { .. } => panic!("{route:?} has no page"),
            }
        }
        assert_eq!(router.patterns().count(), Route::iter().count());
    }

    #[test]
    fn unknown_paths_render_not_found() {
        let router = site_router();
        for path in ["/unknown", "/kurallar", "/magaza/", ""] {
            match router.resolve(path) {
                Resolved::NotFound { .. } => {}
                Resolved::Found { pattern, .. } => panic!("{path} matched {pattern}"),
            }
        }
    }
}
