use pretty_assertions::assert_eq;
use sketchpad_core::{Canvas, Cell, InvalidArgument, MAX_CELLS};

fn canvas_5x6() -> Canvas {
    Canvas::create(5, 6).unwrap()
}

// ============================================================================
// Creation Tests
// ============================================================================

#[test]
fn test_create_stores_dimensions() {
    let canvas = Canvas::create(12, 34).unwrap();
    assert_eq!(canvas.width(), 12);
    assert_eq!(canvas.height(), 34);
    assert_eq!(canvas.marked_count(), 0);
}

#[test]
fn test_create_rejects_zero_width() {
    let err = Canvas::create(0, 34).unwrap_err();
    assert_eq!(err, InvalidArgument::Dimension { name: "width", value: 0 });
}

#[test]
fn test_create_rejects_negative_height() {
    let err = Canvas::create(12, -1).unwrap_err();
    assert_eq!(err, InvalidArgument::Dimension { name: "height", value: -1 });
}

#[test]
fn test_create_rejects_oversized_canvas() {
    assert_eq!(
        Canvas::create(i32::MAX, i32::MAX),
        Err(InvalidArgument::TooLarge { width: i32::MAX, height: i32::MAX })
    );
    assert_eq!(
        Canvas::create(100_000, 100_000),
        Err(InvalidArgument::TooLarge { width: 100_000, height: 100_000 })
    );
    assert!(Canvas::create(i32::MAX, 1).is_err());
}

#[test]
fn test_create_at_cell_limit() {
    let canvas = Canvas::create(4096, 4096).unwrap();
    assert_eq!(canvas.width() as usize * canvas.height() as usize, MAX_CELLS);
    assert_eq!(canvas.cell(4096, 4096), Some(Cell::Empty));
}

#[test]
fn test_create_smallest_canvas() {
    let canvas = Canvas::create(1, 1).unwrap();
    assert_eq!(canvas.print(), "---\n| |\n---");
}

#[test]
fn test_create_blank_5x6() {
    let expected = "-------\n\
                    |     |\n\
                    |     |\n\
                    |     |\n\
                    |     |\n\
                    |     |\n\
                    |     |\n\
                    -------";
    assert_eq!(canvas_5x6().print(), expected);
}

#[test]
fn test_blank_canvas_shape_for_many_sizes() {
    for width in 1..=8 {
        for height in 1..=8 {
            let text = Canvas::create(width, height).unwrap().print();
            let lines: Vec<&str> = text.split('\n').collect();
            let border = "-".repeat(width as usize + 2);
            let blank_row = format!("|{}|", " ".repeat(width as usize));

            assert_eq!(lines.len(), height as usize + 2);
            assert_eq!(lines[0], border);
            assert_eq!(lines[lines.len() - 1], border);
            assert!(lines[1..lines.len() - 1].iter().all(|l| *l == blank_row));
            assert!(!text.ends_with('\n'));
        }
    }
}

#[test]
fn test_print_is_repeatable() {
    let mut canvas = canvas_5x6();
    canvas.draw_rectangle(2, 2, 4, 5).unwrap();
    assert_eq!(canvas.print(), canvas.print());
    assert_eq!(canvas.print(), canvas.to_string());
}

// ============================================================================
// Cell Access Tests
// ============================================================================

#[test]
fn test_cell_outside_canvas_is_none() {
    let canvas = canvas_5x6();
    assert_eq!(canvas.cell(0, 1), None);
    assert_eq!(canvas.cell(6, 1), None);
    assert_eq!(canvas.cell(1, 7), None);
    assert_eq!(canvas.cell(5, 6), Some(Cell::Empty));
    assert!(!canvas.is_marked(6, 6));
}

// ============================================================================
// Line Tests
// ============================================================================

#[test]
fn test_line_rejects_out_of_bounds() {
    let mut canvas = canvas_5x6();
    let err = canvas.draw_line(12, 23, 5, 9).unwrap_err();
    assert_eq!(
        err,
        InvalidArgument::OutOfBounds { x: 12, y: 23, width: 5, height: 6 }
    );
    assert!(canvas.draw_line(1, 3, 2, 8).is_err());
    assert!(canvas.draw_line(0, 1, 3, 1).is_err());
    assert!(canvas.draw_line(1, 1, 1, 7).is_err());
}

#[test]
fn test_line_rejects_diagonal() {
    let mut canvas = canvas_5x6();
    let err = canvas.draw_line(1, 1, 3, 3).unwrap_err();
    assert_eq!(err, InvalidArgument::Diagonal { x1: 1, y1: 1, x2: 3, y2: 3 });
}

#[test]
fn test_line_accepts_axis_aligned() {
    let mut canvas = canvas_5x6();
    assert!(canvas.draw_line(2, 3, 2, 6).is_ok());
    assert!(canvas.draw_line(5, 6, 2, 6).is_ok());
}

#[test]
fn test_failed_line_leaves_canvas_untouched() {
    let mut canvas = canvas_5x6();
    canvas.draw_line(1, 1, 5, 1).unwrap();
    let before = canvas.print();

    assert!(canvas.draw_line(1, 2, 5, 9).is_err());
    assert!(canvas.draw_line(1, 2, 4, 5).is_err());
    assert_eq!(canvas.print(), before);
}

#[test]
fn test_vertical_line() {
    let expected = "-------\n\
                    |     |\n\
                    |     |\n\
                    |x    |\n\
                    |x    |\n\
                    |x    |\n\
                    |x    |\n\
                    -------";
    let mut canvas = canvas_5x6();
    canvas.draw_line(1, 3, 1, 6).unwrap();
    assert_eq!(canvas.print(), expected);
}

#[test]
fn test_horizontal_line() {
    let expected = "-------\n\
                    |     |\n\
                    |     |\n\
                    | xxxx|\n\
                    |     |\n\
                    |     |\n\
                    |     |\n\
                    -------";
    let mut canvas = canvas_5x6();
    canvas.draw_line(2, 3, 5, 3).unwrap();
    assert_eq!(canvas.print(), expected);
}

#[test]
fn test_single_point_line() {
    let mut canvas = canvas_5x6();
    canvas.draw_line(4, 2, 4, 2).unwrap();
    assert_eq!(canvas.marked_count(), 1);
    assert!(canvas.is_marked(4, 2));
}

#[test]
fn test_line_order_independent() {
    let mut forward = canvas_5x6();
    let mut backward = canvas_5x6();
    forward.draw_line(2, 6, 5, 6).unwrap();
    backward.draw_line(5, 6, 2, 6).unwrap();
    assert_eq!(forward, backward);

    forward.draw_line(3, 1, 3, 5).unwrap();
    backward.draw_line(3, 5, 3, 1).unwrap();
    assert_eq!(forward.print(), backward.print());
}

#[test]
fn test_lines_are_additive_and_idempotent() {
    let mut canvas = canvas_5x6();
    canvas.draw_line(1, 1, 5, 1).unwrap();
    canvas.draw_line(1, 3, 1, 6).unwrap();
    assert_eq!(canvas.marked_count(), 5 + 4);

    let snapshot = canvas.clone();
    canvas.draw_line(1, 3, 1, 6).unwrap();
    assert_eq!(canvas, snapshot);
}

#[test]
fn test_different_lines() {
    let expected = "-------\n\
                    |  x  |\n\
                    |  x  |\n\
                    | xxxx|\n\
                    |  x  |\n\
                    |  x  |\n\
                    |x  xx|\n\
                    -------";
    let mut canvas = canvas_5x6();
    canvas.draw_line(2, 3, 5, 3).unwrap();
    canvas.draw_line(3, 5, 3, 1).unwrap();
    canvas.draw_line(1, 6, 1, 6).unwrap();
    canvas.draw_line(4, 6, 5, 6).unwrap();
    assert_eq!(canvas.print(), expected);
}

// ============================================================================
// Rectangle Tests
// ============================================================================

#[test]
fn test_rectangle_rejects_out_of_bounds() {
    let mut canvas = canvas_5x6();
    assert!(canvas.draw_rectangle(12, 23, 5, 9).is_err());
    assert!(canvas.draw_rectangle(1, 3, 2, 8).is_err());
    assert_eq!(canvas.marked_count(), 0);
}

#[test]
fn test_rectangle_accepts_degenerate_corners() {
    let mut canvas = canvas_5x6();
    assert!(canvas.draw_rectangle(2, 3, 2, 6).is_ok());
    assert!(canvas.draw_rectangle(5, 6, 2, 6).is_ok());
    assert!(canvas.draw_rectangle(1, 1, 1, 1).is_ok());
}

#[test]
fn test_degenerate_rectangle_is_a_line() {
    let mut as_rect = canvas_5x6();
    let mut as_line = canvas_5x6();
    as_rect.draw_rectangle(2, 3, 2, 6).unwrap();
    as_line.draw_line(2, 3, 2, 6).unwrap();
    assert_eq!(as_rect, as_line);
}

#[test]
fn test_rectangle_has_no_fill() {
    let mut canvas = canvas_5x6();
    canvas.draw_rectangle(1, 1, 5, 6).unwrap();
    assert_eq!(canvas.marked_count(), 2 * 5 + 2 * 4);
    for x in 2..=4 {
        for y in 2..=5 {
            assert!(!canvas.is_marked(x, y));
        }
    }
}

#[test]
fn test_rectangle_corner_order_independent() {
    let mut a = canvas_5x6();
    let mut b = canvas_5x6();
    a.draw_rectangle(1, 2, 4, 5).unwrap();
    b.draw_rectangle(4, 2, 1, 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_rectangles() {
    let expected = "-------\n\
                    |xxxx |\n\
                    |x  x |\n\
                    |x xxx|\n\
                    |xxxxx|\n\
                    |  x x|\n\
                    |x xxx|\n\
                    -------";
    let mut canvas = canvas_5x6();
    canvas.draw_rectangle(1, 1, 4, 4).unwrap();
    canvas.draw_rectangle(3, 3, 5, 6).unwrap();
    canvas.draw_rectangle(1, 6, 1, 6).unwrap();
    assert_eq!(canvas.print(), expected);
}

// ============================================================================
// Error Display Tests
// ============================================================================

#[test]
fn test_error_messages() {
    let dim = InvalidArgument::Dimension { name: "width", value: 0 };
    assert_eq!(dim.to_string(), "width must be a positive integer, got 0");

    let oob = InvalidArgument::OutOfBounds { x: 9, y: 1, width: 5, height: 6 };
    assert_eq!(oob.to_string(), "point (9, 1) is outside the 5x6 canvas");

    let big = InvalidArgument::TooLarge { width: 5000, height: 5000 };
    assert_eq!(
        big.to_string(),
        format!("5000x5000 canvas exceeds the limit of {MAX_CELLS} cells")
    );

    let diag = InvalidArgument::Diagonal { x1: 1, y1: 1, x2: 2, y2: 2 };
    assert!(diag.to_string().contains("neither horizontal nor vertical"));
}
