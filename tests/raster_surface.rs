use eframe_sketch::{BACKGROUND, CanvasError, Document, Point, RasterSurface};
use egui::Color32;
use std::path::PathBuf;

// Unique path in the temp dir so parallel tests don't collide
fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{}.png", name, uuid::Uuid::new_v4()))
}

#[test]
fn test_point_click_scenario() {
    let mut surface = RasterSurface::new(600, 400).unwrap();
    let before = surface.snapshot();

    surface.draw_line(Point::new(10, 10), Point::new(10, 10), Color32::BLACK, 1);

    let after = surface.snapshot();
    assert_eq!(surface.get_pixel(Point::new(10, 10)).unwrap(), Color32::BLACK);
    let changed = before
        .pixels()
        .zip(after.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(changed, 1);
}

#[test]
fn test_export_round_trip() {
    let mut doc = Document::new(600, 400).unwrap();
    doc.set_color(Color32::RED);
    doc.set_brush_width(5).unwrap();
    doc.on_pointer_down(0, 0);
    doc.on_pointer_move(100, 0);
    doc.on_pointer_up();

    let path = temp_png("round-trip");
    doc.export_png(&path).unwrap();

    let reloaded = RasterSurface::load_png(&path).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (600, 400));
    assert_eq!(reloaded.snapshot(), doc.surface().snapshot());

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_exported_png_is_rgb_without_alpha() {
    let surface = RasterSurface::new(32, 16).unwrap();
    let path = temp_png("rgb");
    surface.export_png(&path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!((decoded.width(), decoded.height()), (32, 16));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_export_to_missing_directory_fails_cleanly() {
    let mut surface = RasterSurface::new(10, 10).unwrap();
    surface.set_pixel(Point::new(1, 1), Color32::GREEN).unwrap();
    let path = std::env::temp_dir()
        .join(uuid::Uuid::new_v4().to_string())
        .join("nested")
        .join("out.png");

    let err = surface.export_png(&path).unwrap_err();
    assert!(matches!(err, CanvasError::Io(_)));
    assert_eq!(surface.get_pixel(Point::new(1, 1)).unwrap(), Color32::GREEN);
}

#[test]
fn test_background_export_uses_snapshot() {
    let mut doc = Document::new(50, 50).unwrap();
    doc.on_pointer_down(0, 25);
    doc.on_pointer_move(49, 25);
    doc.on_pointer_up();
    let expected = doc.surface().snapshot();

    let path = temp_png("snapshot");
    let job = doc.begin_export(&path);

    // Keep drawing while the worker writes
    doc.on_pointer_down(25, 0);
    doc.on_pointer_move(25, 49);
    doc.on_pointer_up();

    let written = job.wait().unwrap();
    let reloaded = RasterSurface::load_png(&written).unwrap();
    assert_eq!(reloaded.snapshot(), expected);
    assert_ne!(reloaded.snapshot(), doc.surface().snapshot());

    let _ = std::fs::remove_file(written);
}

#[test]
fn test_resize_then_clear_is_same_as_resize() {
    let mut a = RasterSurface::new(100, 100).unwrap();
    a.draw_line(Point::new(0, 0), Point::new(99, 99), Color32::BLACK, 10);
    let mut b = a.clone();

    a.resize(80, 60).unwrap();
    b.resize(80, 60).unwrap();
    b.clear();

    assert_eq!(a.snapshot(), b.snapshot());
    assert!(a.snapshot().pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn test_out_of_bounds_pick_leaves_state() {
    let mut doc = Document::new(20, 20).unwrap();
    doc.set_color(Color32::BLUE);

    for (x, y) in [(-1, 0), (0, -1), (20, 5), (5, 20), (i32::MAX, i32::MIN)] {
        assert!(matches!(
            doc.on_pick_color(x, y),
            Err(CanvasError::OutOfBounds { .. })
        ));
    }
    assert_eq!(doc.engine().color(), Color32::BLUE);
    assert_eq!(doc.engine().previous_color(), Color32::BLACK);
}

#[test]
fn test_pick_background_switches_to_eraser() {
    let mut doc = Document::new(20, 20).unwrap();
    doc.on_pick_color(3, 3).unwrap();
    assert_eq!(doc.engine().color(), BACKGROUND);
    assert!(doc.engine().is_erasing());

    doc.toggle_eraser();
    assert_eq!(doc.engine().color(), Color32::BLACK);
}
