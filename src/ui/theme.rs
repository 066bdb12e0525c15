//! Theme system for the demo application
//!
//! Dark and light palettes plus the stock spinner colors, and the small
//! color utilities the spinner renderer blends with.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector, color};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

// ============================================================================
// Stock spinner palette
// ============================================================================

/// Outer ring default: deep blue
pub const RING_BLUE: Color = color!(0x0099cc);
/// Inner circle default while downloading and on success: lime green
pub const SUCCESS_GREEN: Color = color!(0x99cc00);
/// Inner circle default on failure: warm red
pub const FAILURE_RED: Color = color!(0xff4444);
/// Inner circle default on unknown outcome: amber
pub const UNKNOWN_ORANGE: Color = color!(0xffbb33);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Floating toast container
pub fn toast_container(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Scenario button tinted with the outcome it triggers
pub fn scenario_button(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base = button::Style {
            background: Some(Background::Color(accent)),
            text_color: Color::WHITE,
            border: Border {
                radius: 20.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color { a: 0.85, ..accent })),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(Color { a: 0.4, ..accent })),
                ..base
            },
            _ => base,
        }
    }
}

// ============================================================================
// Color utilities
// ============================================================================

/// Blend two colors channel-wise: `channel = to·p + from·(1−p)`
///
/// Works on 8-bit channels with truncation, so the endpoints reproduce
/// the inputs exactly for colors built from 8-bit values.
pub fn blend_colors(from: Color, to: Color, progress: f32) -> Color {
    let inverse = 1.0 - progress;
    let channel = |from: f32, to: f32| {
        // Recover the 8-bit channels first so the blend runs on whole
        // numbers, as the endpoints must survive the round-trip exactly
        let from = (from * 255.0).round();
        let to = (to * 255.0).round();
        (to * progress + from * inverse) as u8
    };

    Color::from_rgb8(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

/// Parse a `#rrggbb` hex string into a color
///
/// Returns `None` for anything that is not exactly that shape; callers
/// fall back to their defaults.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod blend {
        use super::*;

        #[test]
        fn endpoints_reproduce_inputs_exactly() {
            let from = Color::from_rgb8(0x12, 0x34, 0x56);
            let to = Color::from_rgb8(0xab, 0xcd, 0xef);
            assert_eq!(blend_colors(from, to, 0.0), from);
            assert_eq!(blend_colors(from, to, 1.0), to);
        }

        #[test]
        fn midpoint_is_per_channel_linear() {
            let from = Color::from_rgb8(0, 100, 200);
            let to = Color::from_rgb8(100, 200, 250);
            let mid = blend_colors(from, to, 0.5);
            assert_eq!(mid, Color::from_rgb8(50, 150, 225));
        }

        #[test]
        fn channels_are_truncated_not_rounded() {
            let from = Color::from_rgb8(0, 0, 0);
            let to = Color::from_rgb8(255, 255, 255);
            // 255 * 0.003 = 0.765 truncates to 0
            assert_eq!(blend_colors(from, to, 0.003), from);
        }
    }

    mod hex {
        use super::*;

        #[test]
        fn parses_well_formed_colors() {
            assert_eq!(parse_hex_color("#0099cc"), Some(RING_BLUE));
            assert_eq!(
                parse_hex_color("#ffffff"),
                Some(Color::from_rgb8(255, 255, 255))
            );
        }

        #[test]
        fn rejects_malformed_input() {
            assert_eq!(parse_hex_color("0099cc"), None, "missing hash");
            assert_eq!(parse_hex_color("#09c"), None, "short form unsupported");
            assert_eq!(parse_hex_color("#0099cg"), None, "non-hex digit");
            assert_eq!(parse_hex_color("#0099cc00"), None, "too long");
            assert_eq!(parse_hex_color(""), None);
        }
    }
}
