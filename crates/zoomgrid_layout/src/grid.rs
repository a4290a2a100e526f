//! Animated grid layout
//!
//! Arranges elements in uniform rows and columns and animates between two
//! views: the grid, where every element sits in its cell, and the zoomed
//! view, where one element fills the layout while the others slide out past
//! the nearest edge and hide.
//!
//! # Example
//!
//! ```ignore
//! let mut grid = AnimatedGridLayout::new();
//! grid.add_widget(button.clone(), 0, 0)?;
//! grid.set_geometry(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! grid.zoom_to(&button);
//! while grid.is_animating() {
//!     grid.tick_by(16.0);
//! }
//! ```
//!
//! Animations only advance when the host ticks the grid, once per frame.

use crate::cell::{CellEntry, CellSpan};
use crate::config::{GridConfig, DEFAULT_DURATION_MS, DEFAULT_SPACING};
use crate::element::{element_addr, weak_addr, ElementRef, VisibleArea, WeakElement};
use crate::error::Result;
use crate::events::{AnimationFinished, EventDispatcher, ListenerId, ZoomTransition};
use crate::phase::{zoom_machine, ZoomEvent, ZoomPhase};
use crate::placement::{
    aggregate_size, compute_cell_geometry, compute_cell_size, exit_direction, exit_position,
};
use slotmap::SecondaryMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use zoomgrid_animation::{
    AnimationScheduler, Easing, GroupId, GroupTick, ParallelGroup, RectTween, TweenId,
};
use zoomgrid_core::{Insets, Rect, Size, StateMachine};

/// Lazily computed size metrics
#[derive(Clone, Copy, Debug, Default)]
struct SizeCache {
    minimum: Option<Size>,
    preferred: Option<Size>,
}

/// A tween's target element
struct GroupMember {
    element: WeakElement,
    hide_on_finish: bool,
}

/// The group currently in flight
struct RunningGroup {
    id: GroupId,
    members: SecondaryMap<TweenId, GroupMember>,
}

/// Grid layout with animated zoom-to-cell transitions
pub struct AnimatedGridLayout {
    entries: Vec<CellEntry>,
    row_count: usize,
    col_count: usize,
    spacing: f32,
    margins: Insets,
    geometry: Option<Rect>,
    /// Set by registry changes, cleared by a completed layout pass
    layout_dirty: bool,
    size_cache: Cell<SizeCache>,
    duration_ms: u32,
    easing: Easing,
    focused: Option<usize>,
    phase: StateMachine<ZoomPhase, ZoomEvent>,
    scheduler: AnimationScheduler,
    running: Option<RunningGroup>,
    visible_area: Option<VisibleArea>,
    listeners: EventDispatcher,
}

impl AnimatedGridLayout {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            row_count: 0,
            col_count: 0,
            spacing: DEFAULT_SPACING,
            margins: Insets::ZERO,
            geometry: None,
            layout_dirty: true,
            size_cache: Cell::new(SizeCache::default()),
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            focused: None,
            phase: zoom_machine(),
            scheduler: AnimationScheduler::new(),
            running: None,
            visible_area: None,
            listeners: EventDispatcher::new(),
        }
    }

    /// Create a layout with settings from a validated config
    pub fn with_config(config: &GridConfig) -> Result<Self> {
        let mut layout = Self::new();
        layout.apply_config(config)?;
        Ok(layout)
    }

    /// Replace duration, easing, spacing and margins.
    ///
    /// Running animations keep the settings they started with.
    pub fn apply_config(&mut self, config: &GridConfig) -> Result<()> {
        config.validate()?;
        self.duration_ms = config.duration_ms;
        self.easing = config.easing;
        self.set_spacing(config.spacing);
        self.set_contents_margins(config.margins);
        Ok(())
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Register an element at `span`, returning its index.
    ///
    /// The grid keeps only a weak reference; the host must hold on to the
    /// element. Overlapping placements are allowed and not detected.
    pub fn register(&mut self, element: ElementRef, span: CellSpan) -> Result<usize> {
        span.validate()?;
        Ok(self.insert_entry(element, span))
    }

    /// Register an element in a single cell
    pub fn add_widget(&mut self, element: ElementRef, row: usize, col: usize) -> Result<usize> {
        self.register(element, CellSpan::at(row, col))
    }

    /// `span` must already be validated
    pub(crate) fn insert_entry(&mut self, element: ElementRef, span: CellSpan) -> usize {
        if self.focused.is_some() {
            // Joins the hidden set; show_all brings it in with the others
            element.borrow_mut().hide();
        }

        self.entries.push(CellEntry::new(Rc::downgrade(&element), span));
        self.row_count = self.row_count.max(span.row_end());
        self.col_count = self.col_count.max(span.col_end());
        self.invalidate();

        let index = self.entries.len() - 1;
        tracing::debug!(index, ?span, "registered grid entry");
        index
    }

    pub fn entry_at(&self, index: usize) -> Option<&CellEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    /// Remove the entry at `index` and hand its element back.
    ///
    /// Removing the focused entry clears focus. No completion event is
    /// emitted for that; any running group still completes normally.
    pub fn remove_at(&mut self, index: usize) -> Option<ElementRef> {
        if index >= self.entries.len() {
            tracing::debug!(index, "remove_at out of range");
            return None;
        }

        let entry = self.entries.remove(index);
        self.cancel_tweens_for(entry.addr());

        match self.focused {
            Some(focused) if focused == index => {
                self.focused = None;
                self.phase.send(ZoomEvent::FocusLost);
                tracing::debug!(index, phase = ?self.phase(), "focused entry removed");
                if self.phase() == ZoomPhase::Grid {
                    self.show_all_elements();
                }
            }
            Some(focused) if focused > index => self.focused = Some(focused - 1),
            _ => {}
        }

        self.invalidate();
        self.relayout();
        entry.element()
    }

    /// Drop every entry.
    ///
    /// Elements hidden by a zoom are shown again before they are released,
    /// so re-registering them starts from a visible grid.
    pub fn clear(&mut self) {
        let addrs: Vec<_> = self.entries.iter().map(CellEntry::addr).collect();
        for addr in addrs {
            self.cancel_tweens_for(addr);
        }
        let lost_focus = self.focused.take().is_some();
        if lost_focus {
            self.phase.send(ZoomEvent::FocusLost);
        }
        if lost_focus || self.running.is_some() {
            self.show_all_elements();
        }
        self.entries.clear();
        self.row_count = 0;
        self.col_count = 0;
        self.invalidate();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Index of the first entry holding `element`
    pub fn index_of<E: ?Sized>(&self, element: &Rc<RefCell<E>>) -> Option<usize> {
        let addr = element_addr(element);
        self.entries.iter().position(|e| e.addr() == addr)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Takes effect on the next animation
    pub fn set_animation_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn animation_duration(&self) -> u32 {
        self.duration_ms
    }

    /// Takes effect on the next animation
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
        self.invalidate();
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_contents_margins(&mut self, margins: Insets) {
        self.margins = margins;
        self.invalidate();
    }

    pub fn contents_margins(&self) -> Insets {
        self.margins
    }

    /// Use another element or a fixed region as the viewport that
    /// non-focused elements exit from during zoom-in
    pub fn set_visible_area_reference(&mut self, area: VisibleArea) {
        self.visible_area = Some(area);
    }

    pub fn clear_visible_area_reference(&mut self) {
        self.visible_area = None;
    }

    /// Target frame rate used by [`Self::frame_interval`]
    pub fn set_target_fps(&mut self, fps: u32) {
        self.scheduler.set_target_fps(fps);
    }

    pub fn frame_interval(&self) -> Duration {
        self.scheduler.frame_interval()
    }

    // =========================================================================
    // Size metrics
    // =========================================================================

    /// Mark cached sizes and the current arrangement as stale
    pub fn invalidate(&mut self) {
        self.size_cache.set(SizeCache::default());
        self.layout_dirty = true;
    }

    pub fn minimum_size(&self) -> Size {
        let mut cache = self.size_cache.get();
        if let Some(size) = cache.minimum {
            return size;
        }
        let size = self.aggregate(|e| e.borrow().minimum_size());
        cache.minimum = Some(size);
        self.size_cache.set(cache);
        size
    }

    pub fn preferred_size(&self) -> Size {
        let mut cache = self.size_cache.get();
        if let Some(size) = cache.preferred {
            return size;
        }
        let size = self.aggregate(|e| e.borrow().preferred_size());
        cache.preferred = Some(size);
        self.size_cache.set(cache);
        size
    }

    fn aggregate(&self, size_of: impl Fn(&ElementRef) -> Size) -> Size {
        let items = self
            .entries
            .iter()
            .filter_map(|entry| entry.element().map(|e| (entry.span(), size_of(&e))));
        aggregate_size(items, self.row_count, self.col_count, self.spacing)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Outer geometry last given to [`Self::set_geometry`]
    pub fn geometry(&self) -> Rect {
        self.geometry.unwrap_or(Rect::ZERO)
    }

    /// Outer geometry minus contents margins
    pub fn content_rect(&self) -> Rect {
        self.geometry().inset_by(self.margins)
    }

    /// Container resize entry point.
    ///
    /// Lays out again when the rect changed or the registry was touched.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.layout_dirty || self.geometry != Some(rect) {
            self.geometry = Some(rect);
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        if self.geometry.is_some() && self.apply_layout(self.content_rect()) {
            self.layout_dirty = false;
        }
    }

    /// Place every element for `bounds`. Returns whether anything was placed.
    ///
    /// Dropped while a group is in flight or when the grid is empty. When
    /// zoomed only the focused element is placed; the others stay hidden
    /// where the zoom-in left them.
    pub fn apply_layout(&mut self, bounds: Rect) -> bool {
        if self.is_animating() {
            tracing::trace!("layout pass dropped while animating");
            return false;
        }
        if self.row_count == 0 || self.col_count == 0 {
            return false;
        }

        if let Some(index) = self.focused {
            if let Some(element) = self.entries.get(index).and_then(CellEntry::element) {
                element.borrow_mut().set_geometry(bounds);
            }
            return true;
        }

        let cell = self.cell_size(bounds);
        for entry in &self.entries {
            let Some(element) = entry.element() else {
                continue;
            };
            let rect = compute_cell_geometry(bounds, cell, self.spacing, entry.span());
            element.borrow_mut().set_geometry(rect);
        }
        true
    }

    /// Cell size for `bounds` with the current grid dimensions
    pub fn cell_size(&self, bounds: Rect) -> Size {
        compute_cell_size(bounds, self.spacing, self.row_count, self.col_count)
    }

    /// Grid-view rectangle of the entry at `index` within `bounds`
    pub fn cell_geometry(&self, index: usize, bounds: Rect) -> Option<Rect> {
        let entry = self.entries.get(index)?;
        Some(compute_cell_geometry(
            bounds,
            self.cell_size(bounds),
            self.spacing,
            entry.span(),
        ))
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    pub fn phase(&self) -> ZoomPhase {
        self.phase.current_state()
    }

    pub fn is_zoomed(&self) -> bool {
        self.focused.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    pub fn zoomed_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn zoomed_element(&self) -> Option<ElementRef> {
        self.entries.get(self.focused?)?.element()
    }

    /// Zoom `element` to fill the layout.
    ///
    /// Ignored unless the grid is in grid view with nothing animating, or if
    /// `element` is not registered. Returns whether a zoom-in started.
    pub fn zoom_to<E: ?Sized>(&mut self, element: &Rc<RefCell<E>>) -> bool {
        if !self.phase.can_send(ZoomEvent::ZoomRequested) {
            tracing::debug!(phase = ?self.phase(), "zoom_to ignored");
            return false;
        }
        let Some(index) = self.index_of(element) else {
            tracing::debug!("zoom_to ignored: element is not in the grid");
            return false;
        };
        let Some(target) = self.entries[index].element() else {
            return false;
        };

        let bounds = self.content_rect();
        let cell = self.cell_size(bounds);
        let area = self
            .visible_area
            .as_ref()
            .and_then(VisibleArea::rect)
            .unwrap_or(bounds);
        let focused_span = self.entries[index].span();
        let focused_addr = self.entries[index].addr();

        let mut group = ParallelGroup::new();
        let mut members = SecondaryMap::new();

        for entry in &self.entries {
            if entry.addr() == focused_addr {
                continue;
            }
            let Some(element) = entry.element() else {
                continue;
            };
            let cell_rect = compute_cell_geometry(bounds, cell, self.spacing, entry.span());
            let direction = exit_direction(entry.span(), focused_span);
            let exit = exit_position(direction, cell_rect, area, cell);
            let from = element.borrow().geometry();

            let id = group.add(RectTween::position(from, exit, self.duration_ms, self.easing));
            members.insert(
                id,
                GroupMember {
                    element: entry.weak().clone(),
                    hide_on_finish: true,
                },
            );
        }

        let from = target.borrow().geometry();
        let id = group.add(RectTween::geometry(from, bounds, self.duration_ms, self.easing));
        members.insert(
            id,
            GroupMember {
                element: self.entries[index].weak().clone(),
                hide_on_finish: false,
            },
        );

        self.focused = Some(index);
        self.phase.send(ZoomEvent::ZoomRequested);
        self.start_group(group, members);
        tracing::debug!(index, ?bounds, "zoom-in started");
        true
    }

    /// Return every element to its cell.
    ///
    /// Ignored unless fully zoomed. Focus clears immediately; the grid counts
    /// as animating until the group completes. Returns whether a zoom-out
    /// started.
    pub fn show_all(&mut self) -> bool {
        if !self.phase.can_send(ZoomEvent::ShowAllRequested) {
            tracing::debug!(phase = ?self.phase(), "show_all ignored");
            return false;
        }

        let bounds = self.content_rect();
        let cell = self.cell_size(bounds);

        let mut group = ParallelGroup::new();
        let mut members = SecondaryMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let Some(element) = entry.element() else {
                continue;
            };
            if Some(index) != self.focused {
                element.borrow_mut().show();
            }
            let from = element.borrow().geometry();
            let to = compute_cell_geometry(bounds, cell, self.spacing, entry.span());
            let id = group.add(RectTween::geometry(from, to, self.duration_ms, self.easing));
            members.insert(
                id,
                GroupMember {
                    element: entry.weak().clone(),
                    hide_on_finish: false,
                },
            );
        }

        self.focused = None;
        self.phase.send(ZoomEvent::ShowAllRequested);
        self.start_group(group, members);
        tracing::debug!(?bounds, "zoom-out started");
        true
    }

    fn start_group(&mut self, group: ParallelGroup, members: SecondaryMap<TweenId, GroupMember>) {
        let id = self.scheduler.start_group(group);
        self.running = Some(RunningGroup { id, members });
    }

    fn cancel_tweens_for(&mut self, addr: *const ()) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        let stale: Vec<TweenId> = running
            .members
            .iter()
            .filter(|(_, m)| weak_addr(&m.element) == addr)
            .map(|(id, _)| id)
            .collect();
        for id in stale {
            running.members.remove(id);
            self.scheduler.cancel_tween(running.id, id);
        }
    }

    fn show_all_elements(&mut self) {
        for element in self.entries.iter().filter_map(CellEntry::element) {
            element.borrow_mut().show();
        }
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Advance animations by the wall-clock time since the last tick
    pub fn tick(&mut self) -> Option<AnimationFinished> {
        let ticks = self.scheduler.tick();
        self.process_ticks(ticks)
    }

    /// Advance animations by `dt_ms` milliseconds
    pub fn tick_by(&mut self, dt_ms: f32) -> Option<AnimationFinished> {
        let ticks = self.scheduler.tick_by(dt_ms);
        self.process_ticks(ticks)
    }

    fn process_ticks(
        &mut self,
        ticks: impl IntoIterator<Item = (GroupId, GroupTick)>,
    ) -> Option<AnimationFinished> {
        let mut finished = None;
        for (group_id, tick) in ticks {
            let Some(running) = self.running.as_ref().filter(|r| r.id == group_id) else {
                continue;
            };

            for (tween, rect) in &tick.frames {
                let Some(element) = running.members.get(*tween).and_then(|m| m.element.upgrade())
                else {
                    tracing::trace!("skipping frame for dropped element");
                    continue;
                };
                element.borrow_mut().set_geometry(*rect);
            }

            for tween in &tick.completed {
                let Some(member) = running.members.get(*tween) else {
                    continue;
                };
                if member.hide_on_finish {
                    if let Some(element) = member.element.upgrade() {
                        element.borrow_mut().hide();
                    }
                }
            }

            if tick.finished {
                finished = Some(self.finish_group());
            }
        }
        finished
    }

    /// Settle internal state for the completed group, then notify listeners.
    ///
    /// The reported transition is the one the grid actually completed: a
    /// zoom-in whose focused entry was removed mid-flight lands in grid view
    /// and reports `ZoomOut`.
    fn finish_group(&mut self) -> AnimationFinished {
        self.running = None;
        self.phase.send(ZoomEvent::AnimationFinished);

        let transition = if self.phase() == ZoomPhase::Grid {
            self.show_all_elements();
            ZoomTransition::ZoomOut
        } else {
            ZoomTransition::ZoomIn
        };
        self.layout_dirty = true;
        self.relayout();

        let event = AnimationFinished {
            transition,
            focused: self.focused,
        };
        tracing::debug!(?event, "animation group finished");
        self.listeners.dispatch(&event);
        event
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Call `handler` once per completed zoom-in or zoom-out
    pub fn on_animation_finished<F>(&mut self, handler: F) -> ListenerId
    where
        F: FnMut(&AnimationFinished) + 'static,
    {
        self.listeners.subscribe(handler)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl Default for AnimatedGridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimatedGridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedGridLayout")
            .field("entries", &self.entries.len())
            .field("rows", &self.row_count)
            .field("cols", &self.col_count)
            .field("phase", &self.phase())
            .field("focused", &self.focused)
            .field("geometry", &self.geometry)
            .finish()
    }
}
