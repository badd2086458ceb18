//! Framebuffer tests - bounds-checked writes and row reads

use tui_raster::core::Framebuffer;
use tui_raster::types::{Color, RasterError};

#[test]
fn test_new_fills_every_cell() {
    let fb = Framebuffer::new(4, 6, Color::Blue).unwrap();
    assert_eq!(fb.height(), 4);
    assert_eq!(fb.width(), 6);
    for y in 0..4 {
        for x in 0..6 {
            assert_eq!(fb.get(x, y), Some(Color::Blue), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_set_then_get_every_cell_and_color() {
    let mut fb = Framebuffer::new(5, 5, Color::Black).unwrap();
    for (i, color) in Color::ALL.iter().cycle().take(25).enumerate() {
        let (x, y) = ((i % 5) as i32, (i / 5) as i32);
        fb.set(x, y, *color).unwrap();
        assert_eq!(fb.get(x, y), Some(*color));
    }
}

#[test]
fn test_set_out_of_bounds_fails_and_changes_nothing() {
    let mut fb = Framebuffer::new(3, 4, Color::Black).unwrap();
    fb.set(1, 1, Color::Red).unwrap();
    let before = fb.clone();

    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (4, 3), (i32::MAX, i32::MIN)] {
        assert_eq!(
            fb.set(x, y, Color::White),
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: 4,
                height: 3
            })
        );
    }
    assert_eq!(fb, before);
}

#[test]
fn test_render_rows_is_row_major_and_restartable() {
    let mut fb = Framebuffer::new(2, 3, Color::Black).unwrap();
    fb.set(2, 0, Color::Red).unwrap();
    fb.set(0, 1, Color::Green).unwrap();

    let first: Vec<Vec<Color>> = fb.render_rows().map(|r| r.to_vec()).collect();
    let second: Vec<Vec<Color>> = fb.render_rows().map(|r| r.to_vec()).collect();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            vec![Color::Black, Color::Black, Color::Red],
            vec![Color::Green, Color::Black, Color::Black],
        ]
    );
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        Framebuffer::new(0, 0, Color::Black),
        Err(RasterError::InvalidDimensions { .. })
    ));
}
