use floem::{
    peniko::Color,
    style::{CursorStyle, Style},
    views::{button, Button, Decorators},
    IntoView,
};

use crate::theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
}

impl Variant {
    /// `(background, hovered background, text)`
    fn colors(self) -> (Color, Color, Color) {
        match self {
            Variant::Primary => (theme::CYAN_400, theme::BLUE_500, theme::BACKGROUND),
            Variant::Secondary => (theme::GRAY_700, theme::GRAY_600, theme::WHITE),
            Variant::Success => (theme::GREEN_500, theme::GREEN_600, theme::BACKGROUND),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Small,
    #[default]
    Normal,
    Large,
}

impl Size {
    /// `(horizontal padding, min height, font size)`
    fn metrics(self) -> (f64, f64, f64) {
        match self {
            Size::Small => (16.0, 48.0, 14.0),
            Size::Normal => (28.0, 52.0, 16.0),
            Size::Large => (40.0, 56.0, 20.0),
        }
    }
}

/// The site's call-to-action button.
pub fn glow_button(child: impl IntoView + 'static, variant: Variant, size: Size) -> Button {
    button(child).style(move |s| glow_style(s, variant, size))
}

fn glow_style(s: Style, variant: Variant, size: Size) -> Style {
    let (background, hovered, color) = variant.colors();
    let (padding, min_height, font_size) = size.metrics();
    s.padding_horiz(padding)
        .min_height(min_height)
        .font_size(font_size)
        .font_bold()
        .items_center()
        .justify_center()
        .gap(8.0)
        .border(0.0)
        .border_radius(12.0)
        .background(background)
        .color(color)
        .apply_if(variant == Variant::Secondary, |s| {
            s.border(1.0).border_color(theme::GRAY_500)
        })
        .cursor(CursorStyle::Pointer)
        .hover(|s| s.background(hovered))
        .active(|s| s.background(background))
}
