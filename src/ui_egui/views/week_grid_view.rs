//! Week grid rendering and pointer plumbing.
//!
//! Input for a frame is applied against what the previous frame painted (the
//! cell hit map and the pending-overlay control rects), then the grid is
//! painted again from `WeekGrid` state. Header, time axis, cells, confirmed
//! events and the pending event all live inside one vertical scroll area.

use egui::{pos2, vec2, Align2, Color32, CursorIcon, FontId, Id, Pos2, Rect, Sense, Stroke};

use super::palette::GridPalette;
use super::utils::{parse_color, readable_text_color};
use crate::models::cell::Cell;
use crate::models::day::{Day, DayDirection, DAYS_PER_WEEK};
use crate::models::layout::{EventGeometry, LayoutMetrics};
use crate::services::geometry::edge_scroll_delta;
use crate::services::grid::WeekGrid;
use crate::services::pending::FocusTarget;
use crate::services::selection::{CellResolver, SelectionPhase};
use crate::ui_egui::hit_map::{to_screen_point, to_screen_rect, CellHitMap};

const TITLE_ID: &str = "week_grid_pending_title";
const PALETTE_ID: &str = "week_grid_palette";
const SCROLL_ID: &str = "week_grid_scroll";
const TOGGLE_SIZE: f32 = 22.0;
const SWATCH_SIZE: f32 = 20.0;
const FALLBACK_COLOR: Color32 = Color32::from_rgb(0xad, 0xd8, 0xe6);

/// Screen-space placement of the grid inside its scroll content.
struct GridLayout {
    container: Rect,
    days_left: f32,
    days_width: f32,
    axis_left: f32,
    metrics: LayoutMetrics,
    direction: DayDirection,
}

impl GridLayout {
    fn new(container: Rect, metrics: LayoutMetrics, direction: DayDirection) -> Self {
        let days_width = metrics.column_width * DAYS_PER_WEEK as f32;
        let (days_left, axis_left) = match direction {
            DayDirection::LeftToRight => (
                container.left() + metrics.time_axis_width,
                container.left(),
            ),
            DayDirection::RightToLeft => (container.left(), container.left() + days_width),
        };
        Self {
            container,
            days_left,
            days_width,
            axis_left,
            metrics,
            direction,
        }
    }

    fn column_left(&self, day: Day) -> f32 {
        let offset = day.index() as f32 * self.metrics.column_width;
        match self.direction {
            DayDirection::LeftToRight => self.days_left + offset,
            DayDirection::RightToLeft => {
                self.days_left + self.days_width - offset - self.metrics.column_width
            }
        }
    }

    fn row_top(&self, slot_index: usize) -> f32 {
        self.container.top() + self.metrics.header_height + slot_index as f32 * self.metrics.row_height
    }

    fn cell_rect(&self, day: Day, slot_index: usize) -> Rect {
        Rect::from_min_size(
            pos2(self.column_left(day), self.row_top(slot_index)),
            vec2(self.metrics.column_width, self.metrics.row_height),
        )
    }

    fn header_rect(&self, day: Day) -> Rect {
        Rect::from_min_size(
            pos2(self.column_left(day), self.container.top()),
            vec2(self.metrics.column_width, self.metrics.header_height),
        )
    }

    fn axis_rect(&self, slot_index: usize) -> Rect {
        Rect::from_min_size(
            pos2(self.axis_left, self.row_top(slot_index)),
            vec2(self.metrics.time_axis_width, self.metrics.row_height),
        )
    }

    fn overlay_rect(&self, geometry: &EventGeometry) -> Rect {
        Rect::from_min_size(
            pos2(
                self.days_left + geometry.left_within(self.days_width),
                self.container.top() + geometry.top,
            ),
            vec2(geometry.width, geometry.height),
        )
    }
}

/// Per-frame interaction state for the week grid.
#[derive(Default)]
pub struct WeekGridView {
    hit_map: CellHitMap,
    /// Confirmed event blocks; presses there never start a drag.
    event_rects: Vec<Rect>,
    /// The whole pending overlay, including its palette popup.
    pending_rects: Vec<Rect>,
    /// Controls whose press must not confirm the pending event.
    pending_controls: Vec<Rect>,
    /// Where focus went on the last press, consumed by the title blur.
    focus_target: Option<FocusTarget>,
    viewport: Option<Rect>,
    scroll_offset: f32,
    scroll_to: Option<f32>,
}

impl WeekGridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, grid: &mut WeekGrid) {
        self.handle_pointer(ui.ctx(), grid);

        let palette = GridPalette::from_visuals(ui.visuals());
        let mut scroll = egui::ScrollArea::vertical()
            .id_source(SCROLL_ID)
            .auto_shrink([false, false]);
        if let Some(offset) = self.scroll_to.take() {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let output = scroll.show(ui, |ui| self.paint(ui, grid, &palette));
        self.viewport = Some(output.inner_rect);
        self.scroll_offset = output.state.offset.y;

        self.show_palette_popup(ui.ctx(), grid);

        if matches!(grid.phase(), SelectionPhase::Dragging(_)) {
            ui.ctx().request_repaint();
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, grid: &mut WeekGrid) {
        let (pressed, released, moving, pos) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.interact_pos(),
            )
        });

        if pressed {
            if let Some(pos) = pos {
                self.on_press(ctx, grid, pos);
            }
        }

        if moving && matches!(grid.phase(), SelectionPhase::Dragging(_)) {
            if let Some(pos) = pos {
                grid.pointer_move(to_screen_point(pos), &self.hit_map);
                if let Some(viewport) = self.viewport {
                    let delta = edge_scroll_delta(pos.y, viewport.top(), viewport.bottom());
                    if delta != 0.0 {
                        self.scroll_to = Some((self.scroll_offset + delta).max(0.0));
                    }
                }
            }
        }

        if released {
            grid.pointer_up();
        }
    }

    fn on_press(&mut self, ctx: &egui::Context, grid: &mut WeekGrid, pos: Pos2) {
        if grid.workflow().is_active() {
            let title_focused = ctx.memory(|mem| mem.has_focus(Id::new(TITLE_ID)));
            if self.pending_controls.iter().any(|r| r.contains(pos)) {
                if title_focused {
                    grid.arm_ignore_blur();
                }
                self.focus_target = Some(FocusTarget::PendingControl);
            } else if self.pending_rects.iter().any(|r| r.contains(pos)) {
                self.focus_target = Some(FocusTarget::PendingControl);
            } else {
                self.focus_target = Some(FocusTarget::Elsewhere);
                if grid.workflow().palette_open() {
                    grid.close_palette();
                }
                // Focus already left the title, so no blur will follow.
                if !title_focused {
                    grid.title_blurred(FocusTarget::Elsewhere);
                }
            }
            return;
        }

        if self.event_rects.iter().any(|r| r.contains(pos)) {
            return;
        }
        if let Some(cell) = self.hit_map.resolve(to_screen_point(pos)) {
            grid.pointer_down(cell);
        }
    }

    fn paint(&mut self, ui: &mut egui::Ui, grid: &mut WeekGrid, palette: &GridPalette) {
        grid.measure(Some(ui.available_width()));
        let metrics = *grid.metrics();
        let slot_count = grid.slots().len();
        let height = metrics.header_height + slot_count as f32 * metrics.row_height;
        let (container, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let layout = GridLayout::new(container, metrics, grid.direction());

        self.hit_map.begin_frame(ui.clip_rect());
        self.paint_header(ui, grid, &layout, palette);
        self.paint_cells(ui, grid, &layout, palette);
        self.paint_events(ui, grid, &layout);
        self.paint_pending(ui, grid, &layout, palette);
    }

    fn paint_header(&self, ui: &egui::Ui, grid: &WeekGrid, layout: &GridLayout, palette: &GridPalette) {
        let painter = ui.painter();
        let header = Rect::from_min_size(
            layout.container.min,
            vec2(layout.container.width(), layout.metrics.header_height),
        );
        painter.rect_filled(header, 0.0, palette.header_bg);

        for (day, label) in grid.days().iter() {
            let rect = layout.header_rect(day);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(14.0),
                palette.header_text,
            );
            painter.line_segment(
                [rect.right_top(), rect.right_bottom()],
                Stroke::new(1.0, palette.divider),
            );
        }
    }

    fn paint_cells(
        &mut self,
        ui: &egui::Ui,
        grid: &WeekGrid,
        layout: &GridLayout,
        palette: &GridPalette,
    ) {
        let painter = ui.painter();
        let hover_pos = ui.ctx().pointer_hover_pos();
        let idle = matches!(grid.phase(), SelectionPhase::Idle);

        for (index, slot) in grid.slots().iter().enumerate() {
            let is_hour_start = slot.ends_with(":00");
            let axis = layout.axis_rect(index);
            painter.text(
                axis.center(),
                Align2::CENTER_CENTER,
                slot,
                FontId::proportional(if is_hour_start { 12.0 } else { 10.0 }),
                palette.axis_text,
            );

            let line_color = if is_hour_start {
                palette.hour_line
            } else {
                palette.slot_line
            };

            for day in Day::all() {
                let rect = layout.cell_rect(day, index);
                let cell = Cell::new(day, slot);

                painter.rect_filled(rect, 0.0, palette.cell_bg);
                if grid.is_highlighted(&cell) {
                    painter.rect_filled(rect, 0.0, palette.selection_fill);
                } else if idle && hover_pos.is_some_and(|p| rect.contains(p)) {
                    painter.rect_filled(rect, 0.0, palette.hover_overlay);
                    ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                }

                painter.line_segment(
                    [rect.left_top(), rect.right_top()],
                    Stroke::new(1.0, line_color),
                );
                painter.line_segment(
                    [rect.right_top(), rect.right_bottom()],
                    Stroke::new(1.0, palette.divider),
                );

                self.hit_map.record(rect, cell);
            }
        }
    }

    fn paint_events(&mut self, ui: &egui::Ui, grid: &WeekGrid, layout: &GridLayout) {
        let painter = ui.painter();
        self.event_rects.clear();

        for event in grid.events() {
            let geometry = grid.layout_event(event);
            let rect = layout.overlay_rect(&geometry).shrink(1.0);
            let fill = parse_color(&geometry.background_color).unwrap_or(FALLBACK_COLOR);
            let border = parse_color(&geometry.border_color).unwrap_or(fill);

            painter.rect_filled(rect, 4.0, fill);
            painter.rect_stroke(rect, 4.0, Stroke::new(1.0, border));
            painter.with_clip_rect(rect).text(
                rect.left_top() + vec2(6.0, 4.0),
                Align2::LEFT_TOP,
                event.title(),
                FontId::proportional(13.0),
                readable_text_color(fill),
            );
            self.event_rects.push(rect);
        }
    }

    fn paint_pending(
        &mut self,
        ui: &mut egui::Ui,
        grid: &mut WeekGrid,
        layout: &GridLayout,
        palette: &GridPalette,
    ) {
        self.pending_rects.clear();
        self.pending_controls.clear();

        let Some(geometry) = grid.layout_pending() else {
            return;
        };
        let rect = layout.overlay_rect(&geometry).shrink(1.0);
        let fill = parse_color(&geometry.background_color).unwrap_or(FALLBACK_COLOR);
        let text_color = readable_text_color(fill);

        ui.painter().rect_filled(rect, 4.0, fill);
        ui.painter()
            .rect_stroke(rect, 4.0, Stroke::new(1.5, palette.pending_outline));

        let title_rect = Rect::from_min_max(
            rect.left_top() + vec2(4.0, 4.0),
            pos2(
                (rect.right() - TOGGLE_SIZE - 8.0).max(rect.left() + 4.0),
                rect.top() + 4.0 + TOGGLE_SIZE,
            ),
        );
        let toggle_rect = Rect::from_min_size(
            pos2(rect.right() - TOGGLE_SIZE - 4.0, rect.top() + 4.0),
            vec2(TOGGLE_SIZE, TOGGLE_SIZE),
        );

        let title = ui.put(
            title_rect,
            egui::TextEdit::singleline(grid.title_mut())
                .id(Id::new(TITLE_ID))
                .hint_text("Event title")
                .frame(false)
                .text_color(text_color),
        );
        // The release that ended the drag still counts as a click elsewhere
        // this frame, so focus is moved one frame later.
        if ui.input(|i| i.pointer.any_released()) {
            ui.ctx().request_repaint();
        } else if grid.take_focus_request() {
            title.request_focus();
        }

        let toggle = ui.put(toggle_rect, egui::Button::new("🎨").small().frame(false));
        if toggle.clicked() {
            grid.toggle_palette(Some(to_screen_rect(toggle.rect)));
        }

        if title.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                grid.confirm();
            } else {
                let focus = self.focus_target.take().unwrap_or(FocusTarget::Elsewhere);
                grid.title_blurred(focus);
            }
        }

        self.pending_rects.push(rect);
        self.pending_controls.push(toggle.rect);
    }

    fn show_palette_popup(&mut self, ctx: &egui::Context, grid: &mut WeekGrid) {
        let workflow = grid.workflow();
        if !workflow.is_active() || !workflow.palette_open() {
            return;
        }
        let Some(anchor) = workflow.palette_anchor() else {
            return;
        };
        let colors = workflow.palette().to_vec();
        let current = workflow.color().to_string();
        let mut chosen = None;

        let area = egui::Area::new(Id::new(PALETTE_ID))
            .fixed_pos(pos2(anchor.x, anchor.y))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for color in &colors {
                            let (rect, response) =
                                ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
                            let fill = parse_color(color).unwrap_or(FALLBACK_COLOR);
                            ui.painter().rect_filled(rect, 3.0, fill);
                            if *color == current || response.hovered() {
                                ui.painter().rect_stroke(
                                    rect,
                                    3.0,
                                    Stroke::new(2.0, readable_text_color(fill)),
                                );
                            }
                            if response.clicked() {
                                chosen = Some(color.clone());
                            }
                        }
                    });
                });
            });

        self.pending_rects.push(area.response.rect);
        self.pending_controls.push(area.response.rect);

        if let Some(color) = chosen {
            grid.choose_color(color);
            ctx.memory_mut(|mem| mem.request_focus(Id::new(TITLE_ID)));
        }
    }
}
