//! Integration tests for the animated grid
//!
//! These tests drive a 3x4 grid of tiles plus a full-width footer row through
//! zoom-in and show-all cycles and verify that:
//! - Static layout keeps every tile inside the content rectangle
//! - Zoom-in then show-all returns every tile to its cell
//! - Tiles leave in the direction of their position relative to the focus
//! - Listeners run once per transition, after the grid has settled
//! - Removed and dropped tiles never break a transition

use std::cell::RefCell;
use std::rc::Rc;
use zoomgrid_core::{Rect, Size};
use zoomgrid_layout::{
    aggregate_size, compute_cell_geometry, AnimatedGridLayout, AnimationFinished, CellSpan,
    Easing, ElementRef, VisibleArea, VisualElement, ZoomPhase, ZoomTransition,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 830.0, 630.0);

struct Tile {
    rect: Rect,
    visible: bool,
    preferred: Size,
}

impl VisualElement for Tile {
    fn minimum_size(&self) -> Size {
        Size::new(self.preferred.width / 2.0, self.preferred.height / 2.0)
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

type TileRef = Rc<RefCell<Tile>>;

fn tile(width: f32, height: f32) -> TileRef {
    Rc::new(RefCell::new(Tile {
        rect: Rect::ZERO,
        visible: true,
        preferred: Size::new(width, height),
    }))
}

/// Tiles 0..12 fill rows 0..3, tile 12 is the footer spanning row 3
fn dashboard() -> (AnimatedGridLayout, Vec<TileRef>) {
    let mut grid = AnimatedGridLayout::new();
    let mut tiles = Vec::new();
    for row in 0..3 {
        for col in 0..4 {
            let t = tile(100.0 + col as f32 * 10.0, 60.0 + row as f32 * 5.0);
            grid.add_widget(t.clone(), row, col).unwrap();
            tiles.push(t);
        }
    }
    let footer = tile(300.0, 40.0);
    grid.register(footer.clone(), CellSpan::at(3, 0).spanning(1, 4)).unwrap();
    tiles.push(footer);

    grid.set_geometry(BOUNDS);
    (grid, tiles)
}

fn finish(grid: &mut AnimatedGridLayout) -> AnimationFinished {
    for _ in 0..1000 {
        if let Some(event) = grid.tick_by(16.0) {
            return event;
        }
    }
    panic!("animation never finished");
}

fn rects(tiles: &[TileRef]) -> Vec<Rect> {
    tiles.iter().map(|t| t.borrow().rect).collect()
}

#[test]
fn test_dimensions_follow_registrations() {
    let (grid, _tiles) = dashboard();
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.col_count(), 4);
    assert_eq!(grid.entry_count(), 13);
}

/// Every tile sits inside the content rectangle in grid view
#[test]
fn test_static_layout_is_contained() {
    let (grid, tiles) = dashboard();
    let content = grid.content_rect();
    for t in &tiles {
        assert!(content.contains_rect(&t.borrow().rect), "{:?}", t.borrow().rect);
    }

    // (830 - 3 * 6) / 4 = 203, (630 - 3 * 6) / 4 = 153
    assert_eq!(grid.cell_size(content), Size::new(203.0, 153.0));
    assert_eq!(tiles[12].borrow().rect, Rect::new(0.0, 477.0, 830.0, 153.0));
}

#[test]
fn test_cell_geometry_matches_layout() {
    let (grid, tiles) = dashboard();
    let content = grid.content_rect();
    let cell = grid.cell_size(content);
    for (index, t) in tiles.iter().enumerate() {
        let span = grid.entry_at(index).unwrap().span();
        let expected = compute_cell_geometry(content, cell, grid.spacing(), span);
        assert_eq!(t.borrow().rect, expected);
        assert_eq!(grid.cell_geometry(index, content), Some(expected));
    }
}

#[test]
fn test_preferred_size_aggregates_rows_and_columns() {
    let (grid, tiles) = dashboard();
    let items = (0..tiles.len()).map(|i| {
        (
            grid.entry_at(i).unwrap().span(),
            tiles[i].borrow().preferred_size(),
        )
    });
    let expected = aggregate_size(items, 4, 4, grid.spacing());
    assert_eq!(grid.preferred_size(), expected);

    // Row 0: 100 + 110 + 120 + 130 plus four spacings
    assert_eq!(expected.width, 460.0 + 4.0 * 6.0);
    // Column 0: 60 + 65 + 70 + 40 plus four spacings
    assert_eq!(expected.height, 235.0 + 4.0 * 6.0);
}

/// Zooming in and showing all again restores every cell rectangle
#[test]
fn test_zoom_round_trip_restores_grid() {
    let (mut grid, tiles) = dashboard();
    let before = rects(&tiles);

    assert!(grid.zoom_to(&tiles[6]));
    let event = finish(&mut grid);
    assert_eq!(event.transition, ZoomTransition::ZoomIn);
    assert_eq!(event.focused, Some(6));
    assert_eq!(tiles[6].borrow().rect, BOUNDS);
    for (i, t) in tiles.iter().enumerate() {
        assert_eq!(t.borrow().visible, i == 6);
    }

    assert!(grid.show_all());
    let event = finish(&mut grid);
    assert_eq!(event.transition, ZoomTransition::ZoomOut);
    assert_eq!(grid.phase(), ZoomPhase::Grid);
    assert_eq!(rects(&tiles), before);
    assert!(tiles.iter().all(|t| t.borrow().visible));
}

#[test]
fn test_zoom_to_is_not_reentrant() {
    let (mut grid, tiles) = dashboard();
    assert!(grid.zoom_to(&tiles[6]));
    assert!(!grid.zoom_to(&tiles[6]));
    finish(&mut grid);

    let zoomed = rects(&tiles);
    assert!(!grid.zoom_to(&tiles[6]));
    assert!(!grid.zoom_to(&tiles[0]));
    assert!(!grid.is_animating());
    assert_eq!(grid.zoomed_index(), Some(6));
    assert_eq!(rects(&tiles), zoomed);
}

/// With focus at (1, 2): tiles above exit up, below exit down, and tiles on
/// the focused row exit sideways
#[test]
fn test_exit_directions() {
    let (mut grid, tiles) = dashboard();
    let before = rects(&tiles);
    grid.zoom_to(&tiles[6]);
    finish(&mut grid);

    // (0, 1) leaves upward and keeps its column
    let up = tiles[1].borrow().rect;
    assert!(up.bottom() < BOUNDS.y());
    assert_eq!(up.x(), before[1].x());
    assert_eq!(up.size(), before[1].size());

    // (1, 3) leaves to the right and keeps its row
    let right = tiles[7].borrow().rect;
    assert!(right.x() > BOUNDS.right());
    assert_eq!(right.y(), before[7].y());

    // (1, 0) leaves to the left
    assert!(tiles[4].borrow().rect.right() < BOUNDS.x());

    // The footer leaves downward
    assert!(tiles[12].borrow().rect.y() > BOUNDS.bottom());

    for (i, t) in tiles.iter().enumerate().filter(|(i, _)| *i != 6) {
        assert!(!t.borrow().rect.intersects(&BOUNDS), "tile {i} still on screen");
    }
}

#[test]
fn test_exit_positions_use_visible_region() {
    let (mut grid, tiles) = dashboard();
    let region = Rect::new(-100.0, -100.0, 1030.0, 830.0);
    grid.set_visible_area_reference(VisibleArea::Region(region));
    grid.zoom_to(&tiles[6]);
    finish(&mut grid);

    // region.y - cell height - tile height
    assert_eq!(tiles[1].borrow().rect.y(), -100.0 - 153.0 - 153.0);
    // region.right + cell width
    assert_eq!(tiles[7].borrow().rect.x(), 930.0 + 203.0);
    // The focused tile still fills the layout, not the region
    assert_eq!(tiles[6].borrow().rect, BOUNDS);
}

#[test]
fn test_exit_positions_follow_viewport_element() {
    let (mut grid, tiles) = dashboard();
    let viewport = tile(0.0, 0.0);
    viewport.borrow_mut().rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let viewport_ref: ElementRef = viewport.clone();
    grid.set_visible_area_reference(VisibleArea::element(&viewport_ref));

    grid.zoom_to(&tiles[6]);
    finish(&mut grid);
    assert_eq!(tiles[12].borrow().rect.y(), 1000.0 + 153.0);

    // A dropped viewport falls back to the layout bounds
    grid.show_all();
    finish(&mut grid);
    drop(viewport_ref);
    drop(viewport);
    grid.zoom_to(&tiles[6]);
    finish(&mut grid);
    assert_eq!(tiles[12].borrow().rect.y(), BOUNDS.bottom() + 153.0);
}

/// Tweens stay between their endpoints with a non-overshooting curve
#[test]
fn test_frames_interpolate_monotonically() {
    let (mut grid, tiles) = dashboard();
    grid.set_easing(Easing::Linear);
    grid.set_animation_duration(160);
    let start = tiles[0].borrow().rect;

    grid.zoom_to(&tiles[6]);
    let mut last_y = start.y();
    let mut frames = 0;
    while grid.tick_by(16.0).is_none() {
        let y = tiles[0].borrow().rect.y();
        assert!(y <= last_y);
        last_y = y;
        frames += 1;
    }
    assert_eq!(frames, 9);
}

/// Listeners run once per transition and see the settled grid
#[test]
fn test_listeners_observe_settled_state() {
    let (mut grid, tiles) = dashboard();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_clone = seen.clone();
    let watched = tiles.clone();
    grid.on_animation_finished(move |event| {
        let all_visible = watched.iter().all(|t| t.borrow().visible);
        seen_clone.borrow_mut().push((event.transition, all_visible));
    });

    grid.zoom_to(&tiles[0]);
    finish(&mut grid);
    grid.show_all();
    finish(&mut grid);
    grid.tick_by(16.0);

    assert_eq!(
        *seen.borrow(),
        vec![(ZoomTransition::ZoomIn, false), (ZoomTransition::ZoomOut, true)]
    );
}

#[test]
fn test_removed_listener_is_not_called() {
    let (mut grid, tiles) = dashboard();
    let calls = Rc::new(RefCell::new(0));
    let calls_clone = calls.clone();
    let id = grid.on_animation_finished(move |_| *calls_clone.borrow_mut() += 1);

    grid.zoom_to(&tiles[0]);
    finish(&mut grid);
    assert!(grid.remove_listener(id));
    grid.show_all();
    finish(&mut grid);
    assert_eq!(*calls.borrow(), 1);
}

/// Removing the zoomed tile returns to grid view without a completion event
#[test]
fn test_remove_focused_tile_returns_to_grid() {
    let (mut grid, tiles) = dashboard();
    let calls = Rc::new(RefCell::new(0));
    let calls_clone = calls.clone();
    grid.on_animation_finished(move |_| *calls_clone.borrow_mut() += 1);

    grid.zoom_to(&tiles[5]);
    finish(&mut grid);
    assert_eq!(*calls.borrow(), 1);

    let removed = grid.remove_at(5).unwrap();
    let expected: ElementRef = tiles[5].clone();
    assert!(Rc::ptr_eq(&removed, &expected));

    assert_eq!(grid.phase(), ZoomPhase::Grid);
    assert!(!grid.is_zoomed());
    assert!(grid.tick_by(16.0).is_none());
    assert_eq!(*calls.borrow(), 1);

    let content = grid.content_rect();
    for (i, t) in tiles.iter().enumerate().filter(|(i, _)| *i != 5) {
        assert!(t.borrow().visible);
        let index = grid.index_of(t).unwrap();
        assert_eq!(Some(t.borrow().rect), grid.cell_geometry(index, content), "tile {i}");
    }
}

/// A tile dropped by its host is skipped by every later pass
#[test]
fn test_dropped_tile_is_skipped() {
    let (mut grid, mut tiles) = dashboard();
    let dropped = tiles.remove(3);
    drop(dropped);
    assert!(grid.entry_at(3).unwrap().is_stale());

    grid.set_geometry(Rect::new(0.0, 0.0, 400.0, 300.0));
    grid.zoom_to(&tiles[0]);
    let event = finish(&mut grid);
    assert_eq!(event.focused, Some(0));

    grid.show_all();
    finish(&mut grid);
    assert!(tiles.iter().all(|t| t.borrow().visible));

    // The stale entry still counts toward dimensions but not toward size
    assert_eq!(grid.col_count(), 4);
    assert!(grid.preferred_size().width > 0.0);
}

#[test]
fn test_dropping_focused_tile_mid_zoom() {
    let (mut grid, mut tiles) = dashboard();
    grid.zoom_to(&tiles[6]);
    grid.tick_by(16.0);

    drop(tiles.remove(6));
    let event = finish(&mut grid);
    assert_eq!(event.transition, ZoomTransition::ZoomIn);
    assert!(grid.zoomed_element().is_none());

    grid.show_all();
    finish(&mut grid);
    assert!(tiles.iter().all(|t| t.borrow().visible));
}

#[test]
fn test_resize_while_zoomed_refills_bounds() {
    let (mut grid, tiles) = dashboard();
    grid.zoom_to(&tiles[2]);
    finish(&mut grid);

    let bigger = Rect::new(0.0, 0.0, 1200.0, 900.0);
    grid.set_geometry(bigger);
    assert_eq!(tiles[2].borrow().rect, bigger);

    grid.show_all();
    finish(&mut grid);
    let content = grid.content_rect();
    assert!(tiles.iter().all(|t| content.contains_rect(&t.borrow().rect)));
}
