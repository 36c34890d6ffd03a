use floem::{
    views::{empty, h_stack, h_stack_from_iter, stack, text, v_stack, v_stack_from_iter, Decorators},
    AnyView, IntoView,
};
use nautilus_store::{
    catalog::{CONNECTION_STEPS, GAME_MODES, REQUIREMENTS, SERVER_STATS},
    GameMode,
};

use crate::{
    app::Site,
    theme,
    widgets::{copy_button, glow_button, glow_card, reveal_section, RevealScope, Size, Variant},
};

pub fn servers_page(site: Site) -> AnyView {
    let scope = RevealScope::new(site.viewport);
    v_stack((
        header(),
        reveal_section(scope, "stats", stats()),
        reveal_section(scope, "servers", modes(site)),
        reveal_section(scope, "guide", guide(site)),
    ))
    .style(|s| s.width_full().items_center())
    .into_any()
}

fn header() -> impl IntoView {
    v_stack((
        text("Oyun Modlarımız").style(|s| s.font_size(56.0).font_bold().color(theme::CYAN_400)),
        text("Farklı PvP deneyimleri için özel olarak tasarlanmış oyun modları")
            .style(theme::subheading),
    ))
    .style(|s| {
        s.width_full()
            .items_center()
            .gap(24.0)
            .padding_vert(64.0)
            .background(theme::GRAY_900)
    })
}

fn stats() -> impl IntoView {
    h_stack_from_iter(SERVER_STATS.iter().map(|&(title, value, icon)| {
        glow_card(
            v_stack((
                text(icon).style(|s| s.font_size(24.0).color(theme::CYAN_400)),
                text(value).style(|s| s.font_size(30.0).font_bold().color(theme::CYAN_400)),
                text(title).style(theme::body),
            ))
            .style(|s| s.items_center().gap(8.0)),
            false,
        )
        .style(|s| s.width(240.0))
    }))
    .style(|s| theme::card_grid(theme::section(s)).padding_vert(48.0))
}

fn labeled(name: &'static str, value: impl IntoView + 'static) -> impl IntoView {
    h_stack((text(name).style(|s| s.font_size(14.0).color(theme::GRAY_400)), value))
        .style(|s| s.width_full().justify_between().items_center())
}

fn bullet(feature: &'static str) -> impl IntoView {
    h_stack((
        empty().style(|s| {
            s.size(6.0, 6.0)
                .border_radius(3.0)
                .background(theme::CYAN_400)
        }),
        text(feature),
    ))
    .style(|s| s.items_center().gap(8.0).font_size(13.0).color(theme::GRAY_300))
}

fn mode_card(site: Site, mode: &'static GameMode) -> impl IntoView {
    let online = mode.status.is_online();
    let status_color = if online { theme::GREEN_400 } else { theme::RED_400 };

    let mut rows: Vec<AnyView> = vec![
        v_stack((
            text(mode.name).style(|s| s.font_size(26.0).font_bold().color(theme::CYAN_400)),
            text(mode.description).style(theme::body),
        ))
        .style(|s| s.items_center().gap(8.0))
        .into_any(),
        labeled(
            "Durum:",
            text(mode.players).style(move |s| theme::pill(s, status_color).font_bold()),
        )
        .into_any(),
    ];
    if let Some(version) = mode.version {
        rows.push(labeled("Versiyon:", text(version).style(theme::accent)).into_any());
    }
    rows.push(
        v_stack((
            text("Özellikler:").style(|s| s.font_size(14.0).font_bold().color(theme::GRAY_400)),
            v_stack_from_iter(mode.features.iter().map(|&feature| bullet(feature)))
                .style(|s| s.gap(6.0)),
        ))
        .style(|s| s.gap(10.0))
        .into_any(),
    );
    if let Some(announcement) = mode.announcement {
        rows.push(
            v_stack((
                text("Duyuru:").style(|s| s.font_size(12.0).font_bold().color(theme::YELLOW_400)),
                text(announcement).style(|s| s.font_size(12.0).color(theme::YELLOW_400)),
            ))
            .style(|s| {
                s.gap(4.0)
                    .padding(12.0)
                    .border(1.0)
                    .border_radius(8.0)
                    .border_color(theme::ORANGE_500)
            })
            .into_any(),
        );
    }
    rows.push(
        v_stack((
            text("Sunucu IP:").style(theme::muted),
            copy_button(site.config.server_address.clone(), "IP"),
        ))
        .style(|s| {
            s.gap(8.0)
                .padding(16.0)
                .border_radius(8.0)
                .background(theme::GRAY_900)
        })
        .into_any(),
    );
    rows.push(
        glow_button(
            text(if online { "Sunucuya Katıl" } else { "Yakında Açılacak" }),
            if online { Variant::Primary } else { Variant::Secondary },
            Size::Normal,
        )
        .action(move || {
            if online {
                site.join();
            }
        })
        .style(|s| s.width_full())
        .into_any(),
    );

    let offline_badge = text("KAPALI").style(move |s| {
        theme::pill(s, theme::RED_400)
            .font_bold()
            .absolute()
            .inset_top(16.0)
            .inset_right(16.0)
            .apply_if(online, |s| s.hide())
    });

    stack((
        glow_card(v_stack_from_iter(rows).style(|s| s.gap(24.0)), true)
            .style(move |s| s.width_full().apply_if(!online, |s| s.border_color(theme::GRAY_800))),
        offline_badge,
    ))
    .style(|s| s.width(520.0))
}

fn modes(site: Site) -> impl IntoView {
    h_stack_from_iter(GAME_MODES.iter().map(move |mode| mode_card(site, mode)))
        .style(|s| theme::card_grid(theme::section(s)).gap(32.0))
}

fn guide(site: Site) -> impl IntoView {
    let steps = v_stack((
        text("Adım Adım Rehber:").style(|s| s.font_size(18.0).font_bold().color(theme::CYAN_400)),
        v_stack_from_iter(CONNECTION_STEPS.iter().enumerate().map(|(index, &step)| {
            h_stack((
                text(index + 1).style(|s| {
                    s.size(32.0, 32.0)
                        .items_center()
                        .justify_center()
                        .border_radius(16.0)
                        .background(theme::SURFACE_RAISED)
                        .color(theme::CYAN_400)
                        .font_bold()
                }),
                text(step).style(|s| s.color(theme::GRAY_300)),
            ))
            .style(|s| s.items_center().gap(16.0))
        }))
        .style(|s| s.gap(16.0)),
    ))
    .style(|s| s.gap(16.0).flex_grow(1.0).flex_basis(0.0).min_width(280.0));

    let version = site.config.minecraft_version.clone();
    let requirement_rows = std::iter::once(("Minecraft Versiyonu:", version))
        .chain(REQUIREMENTS.iter().map(|&(name, value)| (name, value.to_owned())))
        .map(|(name, value)| labeled(name, text(value).style(theme::accent)));

    let requirements = v_stack((
        text("Sistem Gereksinimleri:").style(|s| s.font_size(18.0).font_bold().color(theme::CYAN_400)),
        v_stack_from_iter(requirement_rows).style(|s| s.gap(12.0)),
        v_stack((
            text("💡 İpucu:").style(|s| s.font_size(14.0).font_bold().color(theme::GREEN_400)),
            text("En iyi deneyim için Optifine veya benzer performans modları kullanmanızı öneririz.")
                .style(|s| s.font_size(14.0).color(theme::GREEN_400)),
        ))
        .style(|s| {
            s.gap(8.0)
                .padding(16.0)
                .border(1.0)
                .border_radius(8.0)
                .border_color(theme::GREEN_600)
        }),
    ))
    .style(|s| s.gap(16.0).flex_grow(1.0).flex_basis(0.0).min_width(280.0));

    glow_card(
        v_stack((
            text("🎮  Sunucuya Nasıl Bağlanılır?")
                .style(|s| s.font_size(24.0).font_bold().color(theme::CYAN_400)),
            h_stack((steps, requirements)).style(|s| theme::card_grid(s).gap(32.0)),
        ))
        .style(|s| s.items_center().gap(24.0)),
        true,
    )
    .style(|s| s.width_full().max_width(900.0).margin_vert(48.0))
}
