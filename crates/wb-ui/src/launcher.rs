//! Floating launcher icon.
//!
//! A small draggable affordance rendered in a foreground [`egui::Area`].
//! Drag discrimination and viewport clamping live in
//! [`wb_input::DragController`]; this module only feeds it pointer
//! events and paints the icon.

use crate::config::UiConfig;
use crate::style;
use egui::{Align2, FontId, Sense, Stroke};
use wb_input::{ClickOutcome, DragController, Vec2};

/// Event emitted by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherEvent {
    /// No action taken.
    None,
    /// Genuine click on the icon — open the panel.
    Activated,
}

/// The launcher icon control.
pub struct Launcher {
    drag: DragController,
    icon_size: f32,
    mounted: bool,
}

impl Launcher {
    pub fn new(config: &UiConfig) -> Self {
        let icon = Vec2::new(config.icon_size, config.icon_size);
        // Clamped against the real viewport on the first frame.
        let viewport = Vec2::new(f32::MAX, f32::MAX);
        Self {
            drag: DragController::new(
                Vec2::new(config.icon_pos[0], config.icon_pos[1]),
                icon,
                viewport,
            ),
            icon_size: config.icon_size,
            mounted: false,
        }
    }

    /// Mount the icon. Idempotent: the first call installs the overlay
    /// style, later calls do nothing.
    pub fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        style::install(ctx);
        self.mounted = true;
        tracing::info!("worldbook launcher mounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Render the icon and run drag/click discrimination.
    pub fn ui(&mut self, ctx: &egui::Context) -> LauncherEvent {
        if !self.mounted {
            return LauncherEvent::None;
        }

        let screen = ctx.screen_rect().size();
        self.drag.set_viewport(Vec2::new(screen.x, screen.y));

        let pos = self.drag.pos();
        let mut event = LauncherEvent::None;

        egui::Area::new(egui::Id::new("wb_launcher_icon"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(pos.x, pos.y))
            .show(ctx, |ui| {
                let size = egui::vec2(self.icon_size, self.icon_size);
                let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

                self.paint_icon(ui, rect, response.hovered());

                if response.is_pointer_button_down_on() && !self.drag.is_armed() {
                    if let Some(p) = response.interact_pointer_pos() {
                        self.drag.pointer_down(Vec2::new(p.x, p.y));
                    }
                }

                if self.drag.is_armed() {
                    let (delta, latest, released) = ui.input(|i| {
                        (i.pointer.delta(), i.pointer.latest_pos(), i.pointer.any_released())
                    });

                    if delta != egui::Vec2::ZERO {
                        if let Some(p) = latest {
                            self.drag.pointer_move(Vec2::new(p.x, p.y));
                        }
                    }

                    if released {
                        self.drag.pointer_up();
                        // egui withholds `clicked` after its own drag
                        // detection, so the click is synthesized from
                        // the release and discriminated here.
                        if self.drag.click() == ClickOutcome::Activate {
                            event = LauncherEvent::Activated;
                        }
                    }
                }
            });

        event
    }

    fn paint_icon(&self, ui: &egui::Ui, rect: egui::Rect, hovered: bool) {
        let painter = ui.painter();
        let fill = if hovered || self.drag.is_armed() {
            style::ICON_FILL_HOVER
        } else {
            style::ICON_FILL
        };

        painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
        painter.circle_stroke(
            rect.center(),
            rect.width() / 2.0,
            Stroke::new(1.5, style::ICON_STROKE),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            style::ICON_GLYPH,
            FontId::proportional(rect.width() * 0.55),
            egui::Color32::WHITE,
        );
    }
}
