//! Shape tests - rasterization and all-or-nothing painting

use std::collections::HashSet;

use tui_raster::core::{Ellipse, Framebuffer, Line, Rectangle, Shape};
use tui_raster::types::{Color, Point, RasterError};

fn cell_set(shape: &Shape) -> HashSet<(i32, i32)> {
    shape.occupied_cells().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn test_rectangle_occupies_its_bounding_cells() {
    let rect: Shape = Rectangle::new(2, 2, 3, 3, Color::Red).into();
    let cells = rect.occupied_cells();
    assert_eq!(cells.len(), 9);

    let expected: HashSet<(i32, i32)> = (2..5).flat_map(|y| (2..5).map(move |x| (x, y))).collect();
    assert_eq!(cell_set(&rect), expected);
}

#[test]
fn test_paint_then_erase_restores_buffer() {
    let mut fb = Framebuffer::new(10, 10, Color::Blue).unwrap();
    fb.set(0, 0, Color::Yellow).unwrap();
    let before = fb.clone();

    let shapes: [Shape; 3] = [
        Rectangle::new(2, 2, 3, 3, Color::Red).into(),
        Line::new((1, 8), (8, 1), Color::Green).into(),
        Ellipse::new((5, 5), 4, 3, Color::White).into(),
    ];
    for shape in shapes {
        shape.paint(&mut fb, shape.color()).unwrap();
        assert_ne!(fb, before);
        shape.erase(&mut fb, Color::Blue).unwrap();
        assert_eq!(fb, before);
    }
}

#[test]
fn test_erase_is_idempotent() {
    let mut fb = Framebuffer::new(6, 6, Color::Black).unwrap();
    let rect: Shape = Rectangle::new(1, 1, 2, 2, Color::Red).into();
    rect.paint(&mut fb, Color::Red).unwrap();

    rect.erase(&mut fb, Color::Black).unwrap();
    let once = fb.clone();
    rect.erase(&mut fb, Color::Black).unwrap();
    assert_eq!(fb, once);
}

#[test]
fn test_diagonal_line_cells() {
    let line: Shape = Line::new((0, 0), (4, 4), Color::Red).into();
    let expected: Vec<Point> = (0..5).map(|i| Point::new(i, i)).collect();
    assert_eq!(line.occupied_cells(), expected);

    let reversed: Shape = Line::new((4, 4), (0, 0), Color::Red).into();
    assert_eq!(cell_set(&line), cell_set(&reversed));
}

#[test]
fn test_line_is_connected() {
    let line: Shape = Line::new((1, 9), (12, 2), Color::Red).into();
    let cells = line.occupied_cells();
    for pair in cells.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1, "gap between {:?} and {:?}", a, b);
        assert_ne!(a, b);
    }
    assert_eq!(cells.len(), 12);
}

#[test]
fn test_occupied_cells_do_not_mutate_geometry() {
    let line: Shape = Line::new((0, 3), (9, 0), Color::Red).into();
    let copy = line;
    let _ = line.occupied_cells();
    let _ = line.occupied_cells();
    assert_eq!(line, copy);
}

#[test]
fn test_ellipse_cells_are_symmetric() {
    let ellipse: Shape = Ellipse::new((8, 6), 5, 3, Color::Red).into();
    let cells = cell_set(&ellipse);
    assert_eq!(cells.len(), ellipse.occupied_cells().len(), "no duplicates");
    for &(x, y) in &cells {
        let (dx, dy) = (x - 8, y - 6);
        assert!(cells.contains(&(8 - dx, y)), "missing x-mirror of ({}, {})", x, y);
        assert!(cells.contains(&(x, 6 - dy)), "missing y-mirror of ({}, {})", x, y);
    }
}

#[test]
fn test_out_of_bounds_shapes_do_not_mutate() {
    let mut fb = Framebuffer::new(8, 8, Color::Black).unwrap();
    let before = fb.clone();

    let shapes: [Shape; 4] = [
        Rectangle::new(6, 6, 3, 3, Color::Red).into(),
        Rectangle::new(-1, 0, 2, 2, Color::Red).into(),
        Line::new((0, 0), (8, 3), Color::Red).into(),
        Ellipse::new((1, 4), 2, 2, Color::Red).into(),
    ];
    for shape in shapes {
        let err = shape.paint(&mut fb, Color::Red).unwrap_err();
        assert!(matches!(err, RasterError::OutOfBounds { .. }), "{:?}", shape);
        assert_eq!(fb, before);
    }
}
