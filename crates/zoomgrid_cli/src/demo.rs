//! Headless demo tiles

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use zoomgrid_core::{Rect, Size};
use zoomgrid_layout::{AnimatedGridLayout, CellSpan, VisualElement};

/// A labelled rectangle standing in for a real widget
#[derive(Debug)]
pub struct DemoTile {
    label: String,
    rect: Rect,
    visible: bool,
    preferred: Size,
}

impl DemoTile {
    pub fn new(label: impl Into<String>, preferred: Size) -> Self {
        Self {
            label: label.into(),
            rect: Rect::ZERO,
            visible: true,
            preferred,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl VisualElement for DemoTile {
    fn minimum_size(&self) -> Size {
        Size::new(24.0, 24.0)
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

pub type TileRef = Rc<RefCell<DemoTile>>;

/// Fill `rows` x `cols` with tiles, then add a footer spanning the full
/// width on the row below.
pub fn populate(
    grid: &mut AnimatedGridLayout,
    rows: usize,
    cols: usize,
) -> zoomgrid_layout::Result<Vec<TileRef>> {
    let mut tiles = Vec::with_capacity(rows * cols + 1);
    for row in 0..rows {
        for col in 0..cols {
            let tile = Rc::new(RefCell::new(DemoTile::new(
                format!("tile {row},{col}"),
                Size::new(120.0, 80.0),
            )));
            grid.add_widget(tile.clone(), row, col)?;
            tiles.push(tile);
        }
    }

    let footer = Rc::new(RefCell::new(DemoTile::new(
        "footer",
        Size::new(cols as f32 * 120.0, 48.0),
    )));
    grid.register(footer.clone(), CellSpan::at(rows, 0).spanning(1, cols))?;
    tiles.push(footer);
    Ok(tiles)
}

#[derive(Debug, Serialize)]
pub struct TileReport {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

impl From<&DemoTile> for TileReport {
    fn from(tile: &DemoTile) -> Self {
        Self {
            label: tile.label().to_string(),
            x: tile.rect.x(),
            y: tile.rect.y(),
            width: tile.rect.width(),
            height: tile.rect.height(),
            visible: tile.visible,
        }
    }
}

/// Geometry of every tile after one phase of the demo
#[derive(Debug, Serialize)]
pub struct PhaseReport {
    pub phase: String,
    pub frames: usize,
    pub tiles: Vec<TileReport>,
}

impl PhaseReport {
    pub fn capture(phase: impl Into<String>, frames: usize, tiles: &[TileRef]) -> Self {
        Self {
            phase: phase.into(),
            frames,
            tiles: tiles.iter().map(|t| TileReport::from(&*t.borrow())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_adds_footer_row() {
        let mut grid = AnimatedGridLayout::new();
        let tiles = populate(&mut grid, 3, 4).unwrap();
        assert_eq!(tiles.len(), 13);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.col_count(), 4);
        assert_eq!(tiles[12].borrow().label(), "footer");
    }

    #[test]
    fn test_capture_reports_geometry() {
        let mut grid = AnimatedGridLayout::new();
        let tiles = populate(&mut grid, 1, 2).unwrap();
        grid.set_geometry(Rect::new(0.0, 0.0, 206.0, 206.0));

        let report = PhaseReport::capture("grid", 0, &tiles);
        assert_eq!(report.tiles[1].x, 106.0);
        assert_eq!(report.tiles[2].label, "footer");
        assert_eq!(report.tiles[2].width, 206.0);
    }
}
