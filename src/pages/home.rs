use floem::{
    views::{dyn_container, empty, h_stack, h_stack_from_iter, label, text, v_stack, Decorators},
    AnyView, IntoView,
};
use nautilus_store::{
    catalog::{GameStat, GAME_MODES, GAME_STATS, PVP_FEATURES},
    GameMode,
};

use crate::{
    app::Site,
    theme,
    widgets::{
        copy_button, count_up, glow_button, glow_card, logo, reveal_section, typed_text, LogoSize,
        RevealScope, Size, Variant,
    },
};

pub fn home_page(site: Site) -> AnyView {
    let scope = RevealScope::new(site.viewport);
    v_stack((
        hero(site),
        reveal_section(scope, "servers", modes_section(site)),
        reveal_section(scope, "stats", stats_section(scope)),
    ))
    .style(|s| s.width_full().items_center())
    .into_any()
}

fn divider() -> impl IntoView {
    empty().style(|s| s.width(1.0).height(16.0).background(theme::GRAY_600))
}

fn hero(site: Site) -> impl IntoView {
    let config = site.config;

    let title = v_stack((
        text("Hoş Geldin").style(|s| s.font_size(56.0).font_bold().color(theme::CYAN_400)),
        typed_text("Nautilus PvP", 56.0),
    ))
    .style(|s| s.items_center().gap(12.0));

    let tagline = v_stack((
        text("Efsanelerin doğduğu Minecraft PvP savaş alanına hoş geldin!"),
        text("Savaş, fethet ve tahtını kurtar!"),
    ))
    .style(|s| s.items_center().font_size(20.0).color(theme::GRAY_300));

    let actions = h_stack((
        glow_button(text("Savaşa Katıl  →"), Variant::Primary, Size::Large)
            .action(move || site.join()),
        glow_button(text("▶  Videoyu İzle"), Variant::Secondary, Size::Normal),
    ))
    .style(move |s| {
        s.gap(16.0)
            .items_center()
            .apply_if(site.is_compact(), |s| s.flex_col())
    });

    let ready = glow_card(
        v_stack((
            text("Savaşa Hazır mısın?").style(|s| s.font_size(20.0).font_bold().color(theme::CYAN_400)),
            copy_button(config.server_address.clone(), "Sunucu IP"),
            h_stack((
                text("Java Edition"),
                text("•"),
                label(move || format!("Versiyon {}", config.minecraft_version)),
            ))
            .style(|s| s.gap(16.0).color(theme::GRAY_400)),
        ))
        .style(|s| s.items_center().gap(20.0).width_full()),
        false,
    )
    .style(|s| s.width_full().max_width(520.0));

    let stats_bar = h_stack((
        text("★ 4.9★").style(|s| s.color(theme::YELLOW_400)),
        divider(),
        text("1000+ Savaşçı"),
        divider(),
        text("2020'den beri"),
    ))
    .style(|s| s.items_center().gap(24.0).color(theme::GRAY_400));

    v_stack((logo(LogoSize::XLarge), title, tagline, actions, ready, stats_bar)).style(|s| {
        s.width_full()
            .min_height(720.0)
            .padding_vert(48.0)
            .padding_horiz(16.0)
            .items_center()
            .justify_center()
            .gap(32.0)
    })
}

fn mode_card(site: Site, mode: &'static GameMode) -> impl IntoView {
    let online = mode.status.is_online();
    let status_color = if online { theme::GREEN_400 } else { theme::RED_400 };
    let join_label = if online { "Sunucuya Katıl" } else { "Yakında" };
    let variant = if online { Variant::Primary } else { Variant::Secondary };

    glow_card(
        v_stack((
            h_stack((
                text(mode.name).style(|s| s.font_size(20.0).font_bold().color(theme::CYAN_400)),
                text(mode.players).style(move |s| theme::pill(s, status_color).font_bold()),
            ))
            .style(|s| s.width_full().justify_between().items_center()),
            text(mode.summary).style(theme::body),
            v_stack((
                text("Sunucu IP:").style(theme::muted),
                text(site.config.server_address.clone()).style(|s| s.color(theme::CYAN_400)),
            ))
            .style(|s| {
                s.width_full()
                    .gap(4.0)
                    .padding(12.0)
                    .border_radius(8.0)
                    .background(theme::GRAY_800)
            }),
            glow_button(text(join_label), variant, Size::Small)
                .action(move || {
                    if online {
                        site.join();
                    }
                })
                .style(|s| s.width_full()),
        ))
        .style(|s| s.gap(16.0).width_full()),
        true,
    )
    .style(|s| s.width(400.0))
}

fn modes_section(site: Site) -> impl IntoView {
    let features = h_stack_from_iter(PVP_FEATURES.iter().map(|&(title, description, icon)| {
        glow_card(
            v_stack((
                text(icon).style(|s| s.font_size(32.0).color(theme::CYAN_400)),
                text(title).style(|s| s.font_size(18.0).font_bold().color(theme::CYAN_400)),
                text(description).style(theme::body),
            ))
            .style(|s| s.items_center().gap(12.0)),
            true,
        )
        .style(|s| s.width(260.0))
    }))
    .style(theme::card_grid);

    v_stack((
        text("Oyun Modları").style(theme::heading),
        text("Farklı PvP deneyimleri için özel olarak tasarlanmış oyun modları")
            .style(theme::subheading),
        h_stack_from_iter(GAME_MODES.iter().map(move |mode| mode_card(site, mode)))
            .style(theme::card_grid),
        features,
    ))
    .style(|s| theme::section(s).items_center())
}

fn stat_card(scope: RevealScope, stat: GameStat) -> impl IntoView {
    // The counter starts from zero the moment the section is first seen.
    let value = dyn_container(
        move || scope.is_revealed("stats"),
        move |revealed| {
            if revealed {
                count_up(stat.target, stat.suffix).into_any()
            } else {
                text(format!("{}{}", stat.target, stat.suffix)).into_any()
            }
        },
    )
    .style(|s| s.font_size(44.0).font_bold().color(theme::CYAN_400));

    glow_card(
        v_stack((value, text(stat.label).style(theme::body)))
            .style(|s| s.items_center().gap(8.0)),
        false,
    )
    .style(|s| s.width(240.0))
}

fn stats_section(scope: RevealScope) -> impl IntoView {
    h_stack_from_iter(GAME_STATS.iter().map(move |&stat| stat_card(scope, stat)))
        .style(|s| theme::card_grid(theme::section(s)))
}
