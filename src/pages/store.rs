use floem::{
    style::CursorStyle,
    unit::UnitExt,
    views::{
        button, dyn_stack, empty, h_stack, h_stack_from_iter, label, stack, text, v_stack,
        v_stack_from_iter, Decorators,
    },
    AnyView, IntoView,
};
use nautilus_store::{
    catalog::PAYMENT_METHODS, CartEntry, CartStore, Category, CategorySelector, Price, Product,
};
use strum::IntoEnumIterator;

use crate::{
    app::Site,
    theme,
    widgets::{glow_button, glow_card, Size, Variant},
};

pub fn store_page(site: Site) -> AnyView {
    let selector = CategorySelector::default();

    let body = h_stack((sidebar(site.cart, selector), catalog(site.cart, selector))).style(move |s| {
        s.width_full()
            .max_width(theme::CONTENT_WIDTH)
            .padding(24.0)
            .gap(32.0)
            .apply_if(site.is_compact(), |s| s.flex_col())
    });

    v_stack((header(), body))
        .style(|s| s.width_full().items_center())
        .into_any()
}

fn header() -> impl IntoView {
    v_stack((
        text("Nautilus Mağaza").style(|s| s.font_size(56.0).font_bold().color(theme::CYAN_400)),
        text("Savaş gücünü artıracak özel öğeler ve rütbeler").style(theme::subheading),
        h_stack((
            text("🛡 Güvenli Ödeme"),
            text("•"),
            text("⚡ Anında Teslimat"),
        ))
        .style(|s| s.gap(16.0).color(theme::GRAY_400)),
    ))
    .style(|s| {
        s.width_full()
            .items_center()
            .gap(24.0)
            .padding_vert(64.0)
            .background(theme::GRAY_900)
    })
}

fn category_button(selector: CategorySelector, category: Category) -> impl IntoView {
    button(h_stack((text(category.icon()), text(category.label()))).style(|s| s.gap(12.0)))
        .action(move || selector.select(category.key()))
        .style(move |s| {
            s.width_full()
                .padding(12.0)
                .border(1.0)
                .border_radius(12.0)
                .border_color(theme::NAV_CLEAR)
                .background(theme::NAV_CLEAR)
                .color(theme::GRAY_300)
                .cursor(CursorStyle::Pointer)
                .hover(|s| s.color(theme::CYAN_400).background(theme::GRAY_800))
                .apply_if(selector.is_selected(category), |s| {
                    s.color(theme::CYAN_400)
                        .background(theme::SURFACE_RAISED)
                        .border_color(theme::CYAN_500)
                })
        })
}

fn cart_line(cart: CartStore, entry: CartEntry) -> impl IntoView {
    let id = entry.id();
    let price = if entry.quantity > 1 {
        format!("{} ×{}", entry.unit_price(), entry.quantity)
    } else {
        entry.unit_price().to_string()
    };
    h_stack((
        text(entry.name()).style(|s| s.color(theme::GRAY_300).flex_grow(1.0)),
        text(price).style(|s| s.color(theme::CYAN_400)),
        button(text("×"))
            .action(move || cart.remove(id))
            .style(|s| {
                s.border(0.0)
                    .padding_horiz(6.0)
                    .background(theme::NAV_CLEAR)
                    .color(theme::RED_400)
                    .cursor(CursorStyle::Pointer)
                    .hover(|s| s.color(theme::RED_500))
            }),
    ))
    .style(|s| s.width_full().items_center().gap(8.0).font_size(14.0))
}

fn cart_summary(cart: CartStore) -> impl IntoView {
    v_stack((
        label(move || format!("🛒 Sepet ({})", cart.len()))
            .style(|s| s.font_size(18.0).font_bold().color(theme::CYAN_400)),
        dyn_stack(
            move || cart.entries(),
            |entry| (entry.id(), entry.quantity),
            move |entry| cart_line(cart, entry),
        )
        .style(|s| s.flex_col().width_full().gap(12.0)),
        h_stack((
            text("Toplam:"),
            label(move || cart.total().to_string()),
        ))
        .style(|s| {
            s.width_full()
                .justify_between()
                .font_bold()
                .color(theme::CYAN_400)
                .padding_top(12.0)
                .border_top(1.0)
                .border_color(theme::GRAY_700)
        }),
        glow_button(text("Satın Al"), Variant::Success, Size::Normal).style(|s| s.width_full()),
    ))
    .style(move |s| {
        s.width_full()
            .gap(16.0)
            .margin_top(32.0)
            .padding_top(24.0)
            .border_top(1.0)
            .border_color(theme::GRAY_700)
            .apply_if(cart.is_empty(), |s| s.hide())
    })
}

fn sidebar(cart: CartStore, selector: CategorySelector) -> impl IntoView {
    glow_card(
        v_stack((
            text("📦 Kategoriler").style(|s| s.font_size(20.0).font_bold().color(theme::CYAN_400)),
            v_stack_from_iter(Category::iter().map(move |category| category_button(selector, category)))
                .style(|s| s.gap(8.0).width_full()),
            cart_summary(cart),
        ))
        .style(|s| s.gap(24.0).width_full()),
        false,
    )
    .style(|s| s.width(300.0).flex_shrink(0.0))
}

fn struck_price(price: Price) -> impl IntoView {
    stack((
        text(price).style(|s| s.font_size(18.0).color(theme::GRAY_500)),
        empty().style(|s| {
            s.absolute()
                .inset_top(50.pct())
                .width_full()
                .height(1.0)
                .background(theme::GRAY_500)
        }),
    ))
}

fn product_card(cart: CartStore, product: &'static Product) -> impl IntoView {
    let prices = h_stack((
        match product.original_price {
            Some(original) => struck_price(original).into_any(),
            None => empty().into_any(),
        },
        text(product.price).style(|s| s.font_size(26.0).font_bold().color(theme::CYAN_400)),
    ))
    .style(|s| s.items_center().justify_center().gap(8.0));

    let features = v_stack((
        text("Özellikler:").style(|s| s.font_size(14.0).font_bold().color(theme::GRAY_400)),
        v_stack_from_iter(product.features.iter().map(|&feature| {
            text(format!("• {feature}")).style(|s| s.font_size(14.0).color(theme::GRAY_300))
        }))
        .style(|s| s.gap(4.0)),
    ))
    .style(|s| s.gap(8.0).width_full());

    let card = glow_card(
        v_stack((
            v_stack((
                text(product.icon).style(|s| s.font_size(56.0)),
                text(product.name).style(|s| s.font_size(20.0).font_bold().color(theme::CYAN_400)),
                text(product.description).style(theme::body),
            ))
            .style(|s| s.items_center().gap(8.0)),
            features,
            empty().style(|s| s.flex_grow(1.0)),
            prices,
            glow_button(text("Sepete Ekle"), Variant::Primary, Size::Small)
                .action(move || cart.add(product))
                .style(|s| s.width_full()),
        ))
        .style(|s| s.gap(16.0).size_full()),
        true,
    )
    .style(move |s| {
        s.size_full()
            .apply_if(product.popular, |s| s.border(2.0).border_color(theme::YELLOW_400))
    });

    let badge = text("En Popüler").style(move |s| {
        s.absolute()
            .inset_top(-12.0)
            .inset_left(16.0)
            .padding_horiz(12.0)
            .padding_vert(4.0)
            .border_radius(100.0)
            .background(theme::YELLOW_400)
            .color(theme::BACKGROUND)
            .font_size(13.0)
            .font_bold()
            .apply_if(!product.popular, |s| s.hide())
    });

    stack((card, badge)).style(|s| s.width(280.0).margin_top(12.0))
}

fn payment_methods() -> impl IntoView {
    glow_card(
        v_stack((
            text("Ödeme Yöntemleri").style(|s| s.font_size(20.0).font_bold().color(theme::CYAN_400)),
            h_stack_from_iter(PAYMENT_METHODS.iter().map(|&(name, icon)| {
                v_stack((
                    text(icon).style(|s| s.font_size(28.0)),
                    text(name).style(|s| s.font_size(14.0).color(theme::GRAY_300)),
                ))
                .style(|s| {
                    s.width(140.0)
                        .items_center()
                        .gap(8.0)
                        .padding(16.0)
                        .border_radius(12.0)
                        .background(theme::GRAY_800)
                        .hover(|s| s.background(theme::GRAY_700))
                })
            }))
            .style(|s| theme::card_grid(s).gap(16.0)),
            text(
                "Tüm ödemeler SSL ile güvenceye alınmıştır. \
                 Satın aldığınız öğeler anında hesabınıza eklenir.",
            )
            .style(|s| s.font_size(14.0).color(theme::GRAY_400)),
        ))
        .style(|s| s.items_center().gap(24.0)),
        true,
    )
    .style(|s| s.width_full())
}

fn catalog(cart: CartStore, selector: CategorySelector) -> impl IntoView {
    v_stack((
        dyn_stack(
            move || selector.products(),
            |product| product.id,
            move |product| product_card(cart, product),
        )
        .style(|s| theme::card_grid(s).justify_start()),
        payment_methods(),
    ))
    .style(|s| s.flex_grow(1.0).gap(48.0))
}
