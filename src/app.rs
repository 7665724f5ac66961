//! Frame driver: owns the live snapshot and re-captures it on request.

use std::time::Instant;

use eframe::egui;

use crate::snapshot::Snapshot;
use crate::ui::InspectorUi;

pub struct InspectorApp {
    snapshot: Snapshot,
    ui: InspectorUi,
    previous_frame: Instant,
}

impl InspectorApp {
    /// Captures an initial snapshot so the first frame has data to show.
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::capture(),
            ui: InspectorUi::default(),
            previous_frame: Instant::now(),
        }
    }
}

impl Default for InspectorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let delta_seconds = now.duration_since(self.previous_frame).as_secs_f32();
        self.previous_frame = now;

        // The refresh runs synchronously on the UI thread; the new snapshot
        // replaces the old one by value before the next frame reads it.
        if self.ui.show(ctx, delta_seconds, &self.snapshot) {
            self.snapshot = Snapshot::capture();
        }
    }
}
