//! Colors and shared style fragments.

use floem::{peniko::Color, style::Style, taffy::style::FlexWrap, unit::UnitExt};

pub const BACKGROUND: Color = Color::rgb8(3, 7, 18);
pub const SURFACE: Color = Color::rgba8(17, 24, 39, 204);
pub const SURFACE_RAISED: Color = Color::rgba8(31, 41, 55, 178);
pub const NAV_SOLID: Color = Color::rgba8(3, 7, 18, 242);
pub const NAV_CLEAR: Color = Color::rgba8(3, 7, 18, 0);

pub const CYAN_400: Color = Color::rgb8(34, 211, 238);
pub const CYAN_500: Color = Color::rgb8(6, 182, 212);
pub const BLUE_500: Color = Color::rgb8(59, 130, 246);

pub const WHITE: Color = Color::rgb8(255, 255, 255);
pub const GRAY_300: Color = Color::rgb8(209, 213, 219);
pub const GRAY_400: Color = Color::rgb8(156, 163, 175);
pub const GRAY_500: Color = Color::rgb8(107, 114, 128);
pub const GRAY_600: Color = Color::rgb8(75, 85, 99);
pub const GRAY_700: Color = Color::rgb8(55, 65, 81);
pub const GRAY_800: Color = Color::rgb8(31, 41, 55);
pub const GRAY_900: Color = Color::rgb8(17, 24, 39);

pub const GREEN_400: Color = Color::rgb8(74, 222, 128);
pub const GREEN_500: Color = Color::rgb8(34, 197, 94);
pub const GREEN_600: Color = Color::rgb8(22, 163, 74);
pub const RED_400: Color = Color::rgb8(248, 113, 113);
pub const RED_500: Color = Color::rgb8(239, 68, 68);
pub const YELLOW_400: Color = Color::rgb8(250, 204, 21);
pub const ORANGE_500: Color = Color::rgb8(249, 115, 22);

/// Widest the page content gets before it is centered.
pub const CONTENT_WIDTH: f64 = 1200.0;
/// Below this window width the navigation collapses into a menu.
pub const COMPACT_BELOW: f64 = 1024.0;

/// Centered, width-limited column used by every page section.
pub fn section(s: Style) -> Style {
    s.flex_col()
        .width_full()
        .max_width(CONTENT_WIDTH)
        .padding_horiz(24.0)
        .padding_vert(64.0)
        .gap(24.0)
}

/// A row that wraps its cards onto new lines and centers them.
pub fn card_grid(s: Style) -> Style {
    s.flex_row()
        .flex_wrap(FlexWrap::Wrap)
        .justify_center()
        .width_full()
        .gap(24.0)
}

pub fn heading(s: Style) -> Style {
    s.font_size(36.0).font_bold().color(WHITE)
}

pub fn subheading(s: Style) -> Style {
    s.font_size(18.0).color(GRAY_400)
}

pub fn body(s: Style) -> Style {
    s.font_size(14.0).color(GRAY_300)
}

pub fn muted(s: Style) -> Style {
    s.font_size(12.0).color(GRAY_500)
}

pub fn accent(s: Style) -> Style {
    s.color(CYAN_400).font_bold()
}

/// Rounded outline used for inline badges.
pub fn pill(s: Style, color: Color) -> Style {
    s.padding_horiz(10.0)
        .padding_vert(4.0)
        .border(1.0)
        .border_radius(100.pct())
        .border_color(color)
        .color(color)
        .font_size(12.0)
}
