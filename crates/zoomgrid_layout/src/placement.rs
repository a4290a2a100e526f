//! Grid placement math
//!
//! Pure functions shared by static layout, zoom-in and zoom-out. Every cell
//! rectangle the grid produces comes from [`compute_cell_geometry`].

use crate::cell::CellSpan;
use zoomgrid_core::{Point, Rect, Size};

/// Uniform cell size for a grid of `rows` x `cols` inside `bounds`.
///
/// Extents are floored to whole pixels and never negative. An empty grid
/// has a zero cell size.
pub fn compute_cell_size(bounds: Rect, spacing: f32, rows: usize, cols: usize) -> Size {
    if rows == 0 || cols == 0 {
        return Size::ZERO;
    }
    let width = (bounds.width() - (cols - 1) as f32 * spacing) / cols as f32;
    let height = (bounds.height() - (rows - 1) as f32 * spacing) / rows as f32;
    Size::new(width.floor().max(0.0), height.floor().max(0.0))
}

/// Rectangle covered by `span` when cells are `cell` sized
pub fn compute_cell_geometry(bounds: Rect, cell: Size, spacing: f32, span: CellSpan) -> Rect {
    let col = span.col as f32;
    let row = span.row as f32;
    let col_span = span.col_span as f32;
    let row_span = span.row_span as f32;
    Rect::new(
        bounds.x() + col * cell.width + col * spacing,
        bounds.y() + row * cell.height + row * spacing,
        col_span * cell.width + (col_span - 1.0) * spacing,
        row_span * cell.height + (row_span - 1.0) * spacing,
    )
}

/// Direction a non-focused entry leaves in when another entry is zoomed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Rows decide first; only entries on the focused row move sideways.
pub fn exit_direction(entry: CellSpan, focused: CellSpan) -> ExitDirection {
    if entry.row < focused.row {
        ExitDirection::Up
    } else if entry.row > focused.row {
        ExitDirection::Down
    } else if entry.col < focused.col {
        ExitDirection::Left
    } else {
        ExitDirection::Right
    }
}

/// Off-screen origin for an entry currently at `rect`.
///
/// The entry travels from its far edge to the near edge of `area`, then one
/// more cell, so it ends fully outside `area` whatever its own size. The
/// other axis is left unchanged.
pub fn exit_position(direction: ExitDirection, rect: Rect, area: Rect, cell: Size) -> Point {
    match direction {
        ExitDirection::Up => Point::new(rect.x(), area.y() - cell.height - rect.height()),
        ExitDirection::Down => Point::new(rect.x(), area.bottom() + cell.height),
        ExitDirection::Left => Point::new(area.x() - cell.width - rect.width(), rect.y()),
        ExitDirection::Right => Point::new(area.right() + cell.width, rect.y()),
    }
}

/// Aggregate per-entry sizes into the size the whole grid needs.
///
/// Each entry adds its width plus `spacing` to every row it occupies and its
/// height plus `spacing` to every column it occupies. The widest row gives
/// the width, the tallest column the height.
pub fn aggregate_size<I>(items: I, rows: usize, cols: usize, spacing: f32) -> Size
where
    I: IntoIterator<Item = (CellSpan, Size)>,
{
    let mut row_widths = vec![0.0_f32; rows];
    let mut col_heights = vec![0.0_f32; cols];

    for (span, size) in items {
        for total in row_widths.iter_mut().take(span.row_end()).skip(span.row) {
            *total += size.width + spacing;
        }
        for total in col_heights.iter_mut().take(span.col_end()).skip(span.col) {
            *total += size.height + spacing;
        }
    }

    Size::new(
        row_widths.into_iter().fold(0.0, f32::max),
        col_heights.into_iter().fold(0.0, f32::max),
    )
}
