use floem::{
    style::CursorStyle,
    views::{button, h_stack, text, v_stack, v_stack_from_iter, Decorators},
    IntoView,
};
use nautilus_store::catalog::{FOOTER_COMMUNITY_LINKS, FOOTER_MODE_LINKS};

use crate::{
    app::Site,
    theme,
    widgets::{logo, LogoSize},
};

fn link_column(
    site: Site,
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    v_stack((
        text(title).style(|s| s.font_size(18.0).font_bold().color(theme::CYAN_400)),
        v_stack_from_iter(links.iter().map(move |&(name, path)| {
            button(text(name))
                .action(move || site.navigate(path))
                .style(|s| {
                    s.border(0.0)
                        .padding(0.0)
                        .background(theme::NAV_CLEAR)
                        .color(theme::GRAY_400)
                        .cursor(CursorStyle::Pointer)
                        .hover(|s| s.color(theme::CYAN_400))
                })
        }))
        .style(|s| s.gap(12.0)),
    ))
    .style(|s| s.gap(16.0).min_width(180.0))
}

fn info_row(name: &'static str, value: String) -> impl IntoView {
    h_stack((text(name), text(value).style(theme::accent))).style(|s| s.gap(8.0))
}

pub fn footer(site: Site) -> impl IntoView {
    let config = site.config;

    let about = v_stack((
        h_stack((
            logo(LogoSize::Normal),
            text("Nautilus PvP").style(|s| s.font_size(28.0).font_bold().color(theme::CYAN_400)),
        ))
        .style(|s| s.items_center().gap(12.0)),
        text(
            "Savaşçıların şan, şeref ve epik ödüller için savaştığı nihai Minecraft PvP \
             savaş alanı. Bugün savaşa katıl!",
        )
        .style(|s| s.color(theme::GRAY_400).max_width(440.0)),
        info_row("Sunucu IP:", config.server_address.clone()),
        info_row("Versiyon:", config.minecraft_version.clone()),
    ))
    .style(|s| s.gap(12.0).flex_grow(1.0).color(theme::GRAY_400));

    let columns = h_stack((
        about,
        link_column(site, "Oyun Modları", &FOOTER_MODE_LINKS),
        link_column(site, "Topluluk", &FOOTER_COMMUNITY_LINKS),
    ))
    .style(move |s| {
        s.width_full()
            .gap(32.0)
            .apply_if(site.is_compact(), |s| s.flex_col())
    });

    let legal = v_stack((
        text("© 2025 Nautilus PvP Sunucusu. Savaşçılar için, savaşçılar tarafından yapıldı.")
            .style(|s| s.color(theme::GRAY_400)),
        text("Mojang AB veya Microsoft Corporation ile bağlantılı değildir.").style(theme::muted),
    ))
    .style(|s| {
        s.width_full()
            .items_center()
            .gap(8.0)
            .padding_top(24.0)
            .border_top(1.0)
            .border_color(theme::GRAY_800)
    });

    v_stack((columns, legal)).style(|s| {
        theme::section(s)
            .padding_vert(48.0)
            .border_top(1.0)
            .border_color(theme::GRAY_800)
    })
}
