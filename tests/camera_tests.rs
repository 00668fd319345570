use sparselife::camera::Camera;
use sparselife::cell::Cell;
use sparselife::grid::CellGrid;
use sparselife::patterns;

#[test]
fn block_fills_one_braille_quad() {
    let mut grid = CellGrid::new();
    patterns::stamp(&mut grid, patterns::BLOCK, 0, 0);

    let mut cam = Camera::new(1, 1);
    cam.draw_cells(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @"⠛");
}

#[test]
fn glider_renders_across_characters() {
    let mut grid = CellGrid::new();
    patterns::stamp(&mut grid, patterns::GLIDER, 0, 0);

    let mut cam = Camera::new(2, 1);
    cam.draw_cells(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @"⠬⠆");
}

#[test]
fn pan_shifts_cells_out_of_view() {
    let mut grid = CellGrid::new();
    patterns::stamp(&mut grid, patterns::BLOCK, 0, 0);

    let mut cam = Camera::new(1, 1);
    cam.offset_x(10);
    cam.draw_cells(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @"⠀");
}

#[test]
fn mouse_position_maps_through_the_pan() {
    let mut cam = Camera::new(40, 20);
    cam.offset_x(2);
    cam.offset_y(-4);

    assert_eq!(cam.cell_at(3, 2), Cell::new(8, 4));
}

#[test]
fn reset_clears_the_frame() {
    let mut grid = CellGrid::new();
    patterns::stamp(&mut grid, patterns::BLOCK, 0, 0);

    let mut cam = Camera::new(1, 1);
    cam.draw_cells(&grid);
    cam.reset();

    insta::assert_snapshot!(cam.render().trim_end(), @"⠀");
}
