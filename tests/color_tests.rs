//! Color resolution tests

use tui_raster::core::{resolve_color, resolve_color_or_default};
use tui_raster::types::{Color, RasterError};

#[test]
fn test_resolve_is_stable() {
    let first = resolve_color("red").unwrap();
    for _ in 0..3 {
        assert_eq!(resolve_color("red"), Ok(first));
    }
    assert_eq!(first, Color::Red);
}

#[test]
fn test_unknown_tokens_are_unrecognized() {
    for token in ["purple", "99"] {
        assert_eq!(
            resolve_color(token),
            Err(RasterError::Unrecognized {
                token: token.to_string()
            })
        );
    }
}

#[test]
fn test_numeric_and_named_forms_agree() {
    for color in Color::ALL {
        assert_eq!(resolve_color(&color.code().to_string()), resolve_color(color.as_str()));
    }
}

#[test]
fn test_fallback_surfaces_diagnostic() {
    let mut messages = Vec::new();
    let color = resolve_color_or_default("99", Color::White, |e| messages.push(e.to_string()));
    assert_eq!(color, Color::White);
    assert_eq!(messages, vec!["unrecognized color token \"99\"".to_string()]);
}
