//! The top navigation bar and the collapsed menu used on narrow windows.

use floem::{
    reactive::{SignalGet, SignalUpdate},
    style::{CursorStyle, Style},
    views::{
        button, h_stack, h_stack_from_iter, label, text, v_stack_from_iter, Button, Decorators,
    },
    IntoView,
};
use nautilus_store::Route;
use strum::IntoEnumIterator;

use crate::{
    app::Site,
    theme,
    widgets::{logo, server_status, LogoSize},
};

const BAR_HEIGHT: f64 = 64.0;

fn nav_item(site: Site, route: Route, large: bool) -> Button {
    button(h_stack((text(route.icon()), text(route.title()))).style(|s| s.gap(8.0).items_center()))
        .action(move || site.navigate(route.path()))
        .style(move |s| {
            let active = site.paths.is_current(route.path());
            s.padding_horiz(if large { 16.0 } else { 12.0 })
                .padding_vert(if large { 14.0 } else { 8.0 })
                .font_size(if large { 18.0 } else { 15.0 })
                .border(0.0)
                .border_radius(10.0)
                .background(theme::NAV_CLEAR)
                .color(theme::GRAY_300)
                .cursor(CursorStyle::Pointer)
                .apply_if(large, |s| s.width_full())
                .apply_if(active, |s| s.color(theme::CYAN_400).background(theme::SURFACE_RAISED))
                .hover(|s| s.color(theme::CYAN_400))
        })
}

fn history_button(glyph: &'static str, enabled: impl Fn() -> bool + 'static) -> Button {
    button(text(glyph)).style(move |s| {
        let enabled = enabled();
        s.size(32.0, 32.0)
            .items_center()
            .justify_center()
            .border(0.0)
            .border_radius(8.0)
            .background(theme::NAV_CLEAR)
            .color(if enabled { theme::GRAY_300 } else { theme::GRAY_700 })
            .apply_if(enabled, |s| {
                s.cursor(CursorStyle::Pointer)
                    .hover(|s| s.background(theme::GRAY_800))
            })
    })
}

fn bar_style(s: Style, scrolled: bool) -> Style {
    s.width_full()
        .height(BAR_HEIGHT)
        .padding_horiz(16.0)
        .items_center()
        .justify_between()
        .z_index(40)
        .background(if scrolled { theme::NAV_SOLID } else { theme::BACKGROUND })
        .border_bottom(1.0)
        .border_color(if scrolled { theme::CYAN_500 } else { theme::NAV_CLEAR })
}

pub fn nav_bar(site: Site) -> impl IntoView {
    let brand = h_stack((
        logo(LogoSize::Small),
        button(text("Nautilus PvP"))
            .action(move || site.navigate(Route::Home.path()))
            .style(|s| {
                s.font_size(22.0)
                    .font_bold()
                    .border(0.0)
                    .background(theme::NAV_CLEAR)
                    .color(theme::CYAN_400)
                    .cursor(CursorStyle::Pointer)
                    .hover(|s| s.color(theme::BLUE_500))
            }),
        history_button("←", move || site.paths.tracked_can_go_back()).action(move || {
            site.paths.back();
        }),
        history_button("→", move || site.paths.tracked_can_go_forward()).action(move || {
            site.paths.forward();
        }),
    ))
    .style(|s| s.items_center().gap(12.0));

    let links = h_stack_from_iter(Route::iter().map(move |route| nav_item(site, route, false)))
        .style(move |s| s.gap(24.0).items_center().apply_if(site.is_compact(), |s| s.hide()));

    let full_status = server_status(false)
        .style(move |s| s.apply_if(site.is_compact(), |s| s.hide()));
    let compact_status = server_status(true)
        .style(move |s| s.apply_if(!site.is_compact(), |s| s.hide()));

    let menu_toggle = button(label(move || {
        let glyph = if site.menu_open.get() { "✕" } else { "☰" };
        glyph.to_owned()
    }))
        .action(move || site.menu_open.update(|open| *open = !*open))
        .style(move |s| {
            s.size(48.0, 48.0)
                .items_center()
                .justify_center()
                .font_size(22.0)
                .border(0.0)
                .border_radius(12.0)
                .background(theme::NAV_CLEAR)
                .color(theme::WHITE)
                .cursor(CursorStyle::Pointer)
                .hover(|s| s.background(theme::GRAY_800))
                .apply_if(!site.is_compact(), |s| s.hide())
        });

    h_stack((
        brand,
        links,
        h_stack((full_status, compact_status, menu_toggle)).style(|s| s.items_center().gap(12.0)),
    ))
    .style(move |s| bar_style(s, site.is_scrolled()))
}

/// The dropdown list of routes shown under the bar while the menu is open.
pub fn menu_overlay(site: Site) -> impl IntoView {
    v_stack_from_iter(Route::iter().map(move |route| nav_item(site, route, true))).style(move |s| {
        s.absolute()
            .inset_top(BAR_HEIGHT)
            .inset_left(0.0)
            .width_full()
            .z_index(45)
            .padding(16.0)
            .gap(4.0)
            .background(theme::NAV_SOLID)
            .border_bottom(1.0)
            .border_color(theme::GRAY_700)
            .apply_if(!(site.menu_open.get() && site.is_compact()), |s| s.hide())
    })
}
