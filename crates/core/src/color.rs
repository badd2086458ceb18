//! Color token resolution.
//!
//! Tokens are either a palette name (`"red"`) or a decimal SGR code already in
//! the palette range (`"41"`). Anything else is rejected with
//! [`RasterError::Unrecognized`]; the resolver never hands back a default.

use crate::types::{Color, RasterError, Result};

/// Resolve a color token to a palette color.
///
/// # Examples
///
/// ```
/// use tui_raster_core::resolve_color;
/// use tui_raster_types::Color;
///
/// assert_eq!(resolve_color("red").unwrap(), Color::Red);
/// assert_eq!(resolve_color("44").unwrap(), Color::Blue);
/// assert!(resolve_color("purple").is_err());
/// assert!(resolve_color("99").is_err());
/// ```
pub fn resolve_color(token: &str) -> Result<Color> {
    if let Some(color) = Color::from_name(token) {
        return Ok(color);
    }

    // Only plain decimal digits count as a raw code; "+41" or " 41" do not.
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(color) = token.parse::<u8>().ok().and_then(Color::from_code) {
            return Ok(color);
        }
    }

    Err(RasterError::Unrecognized {
        token: token.to_string(),
    })
}

/// Resolve a token, substituting `fallback` when it is not recognized.
///
/// The rejection is handed to `on_fallback` before the fallback is returned, so
/// the caller decides how to surface it (a warning line, a status message).
pub fn resolve_color_or_default(
    token: &str,
    fallback: Color,
    on_fallback: impl FnOnce(&RasterError),
) -> Color {
    match resolve_color(token) {
        Ok(color) => color,
        Err(err) => {
            on_fallback(&err);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_palette_name() {
        for color in Color::ALL {
            assert_eq!(resolve_color(color.as_str()), Ok(color));
        }
    }

    #[test]
    fn resolves_raw_codes_in_range() {
        assert_eq!(resolve_color("40"), Ok(Color::Black));
        assert_eq!(resolve_color("47"), Ok(Color::White));
    }

    #[test]
    fn rejects_codes_outside_range_and_odd_numerics() {
        for token in ["39", "48", "99", "0", "-41", "+41", " 41", "41.0", "300"] {
            assert_eq!(
                resolve_color(token),
                Err(RasterError::Unrecognized {
                    token: token.to_string()
                }),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn rejects_unknown_names_and_wrong_case() {
        assert!(resolve_color("purple").is_err());
        assert!(resolve_color("Red").is_err());
        assert!(resolve_color("").is_err());
        assert!(resolve_color("error").is_err());
    }

    #[test]
    fn fallback_reports_the_rejected_token() {
        let mut seen = None;
        let color = resolve_color_or_default("mauve", Color::Black, |e| seen = Some(e.clone()));
        assert_eq!(color, Color::Black);
        assert_eq!(
            seen,
            Some(RasterError::Unrecognized {
                token: "mauve".to_string()
            })
        );
    }

    #[test]
    fn fallback_is_silent_on_success() {
        let mut called = false;
        let color = resolve_color_or_default("green", Color::Black, |_| called = true);
        assert_eq!(color, Color::Green);
        assert!(!called);
    }
}
