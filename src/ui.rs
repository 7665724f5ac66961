//! Immediate-mode presentation of the current snapshot.

use chrono::{DateTime, Local};
use eframe::egui;

use crate::snapshot::{ProcessAggregate, Snapshot};
use crate::windowing::{NO_TITLE, UNKNOWN_CLASS};

/// Longest accepted filter string, in characters.
pub const FILTER_MAX_LEN: usize = 128;

const UNKNOWN_PROCESS: &str = "<Unknown>";

/// UI state that persists across frames: the process-name filter.
#[derive(Default)]
pub struct InspectorUi {
    filter: String,
}

impl InspectorUi {
    /// Draws the full-viewport inspector panel.
    ///
    /// Returns `true` exactly when the refresh control was activated this
    /// frame; the signal is not latched. Never enumerates anything itself.
    pub fn show(&mut self, ctx: &egui::Context, delta_seconds: f32, snapshot: &Snapshot) -> bool {
        let mut refresh_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Refresh").clicked() {
                    refresh_requested = true;
                }
                ui.add(
                    egui::TextEdit::singleline(&mut self.filter)
                        .hint_text("Filter by process name")
                        .char_limit(FILTER_MAX_LEN)
                        .desired_width(250.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{:.1} ms", delta_seconds * 1000.0));
                });
            });

            if snapshot.processes.is_empty() {
                ui.label("No snapshot collected yet. Press Refresh to gather data.");
            } else {
                ui.label(format!(
                    "Processes: {} | Windows: {} | Last refresh: {}",
                    snapshot.total_process_count,
                    snapshot.total_window_count,
                    format_timestamp(snapshot.captured_at),
                ));
            }

            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let mut visible = 0usize;
                    for aggregate in &snapshot.processes {
                        if !group_matches(aggregate, &self.filter) {
                            continue;
                        }
                        visible += 1;
                        show_group(ui, aggregate);
                    }

                    if visible == 0 && !snapshot.processes.is_empty() {
                        ui.weak("No processes match the current filter.");
                    }
                });
        });

        refresh_requested
    }
}

fn show_group(ui: &mut egui::Ui, aggregate: &ProcessAggregate) {
    let name = display_process_name(&aggregate.process.name);
    let header = format!("{} [PID {}]", name, aggregate.process.pid);

    egui::CollapsingHeader::new(header)
        .id_salt(("process-group", aggregate.process.pid))
        .default_open(true)
        .show(ui, |ui| {
            ui.label(format!("Windows: {}", aggregate.windows.len()));
            if aggregate.windows.is_empty() {
                ui.weak("No top-level windows.");
                return;
            }

            egui::Grid::new(("window-table", aggregate.process.pid))
                .striped(true)
                .num_columns(6)
                .show(ui, |ui| {
                    ui.strong("HWND");
                    ui.strong("Title");
                    ui.strong("Class");
                    ui.strong("Thread/Visible");
                    ui.strong("Styles");
                    ui.strong("Bounds");
                    ui.end_row();

                    for window in &aggregate.windows {
                        ui.monospace(format!("{:#014X}", window.handle));
                        ui.label(display_title(&window.title));
                        ui.label(display_class(&window.class_name));
                        ui.label(format!(
                            "TID {}\n{}",
                            window.thread_id,
                            if window.visible { "Visible" } else { "Hidden" }
                        ));
                        ui.monospace(format!(
                            "S:{:#010X}\nE:{:#010X}",
                            window.style, window.ex_style
                        ));
                        ui.label(format!(
                            "({},{})-({},{})\n[{}x{}]",
                            window.bounds.left,
                            window.bounds.top,
                            window.bounds.right,
                            window.bounds.bottom,
                            window.bounds.width(),
                            window.bounds.height(),
                        ));
                        ui.end_row();
                    }
                });
        });
}

/// Whether a process group passes the name filter.
pub fn group_matches(aggregate: &ProcessAggregate, filter: &str) -> bool {
    contains_case_insensitive(display_process_name(&aggregate.process.name), filter)
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn display_process_name(name: &str) -> &str {
    if name.is_empty() {
        UNKNOWN_PROCESS
    } else {
        name
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        NO_TITLE
    } else {
        title
    }
}

fn display_class(class_name: &str) -> &str {
    if class_name.is_empty() {
        UNKNOWN_CLASS
    } else {
        class_name
    }
}

/// Formats the capture time for the summary line; "N/A" before any capture.
pub fn format_timestamp(captured_at: Option<DateTime<Local>>) -> String {
    match captured_at {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processes::ProcessRecord;
    use crate::snapshot::Snapshot;
    use crate::windowing::{Bounds, WindowRecord};
    use chrono::TimeZone;

    fn aggregate(pid: u32, name: &str) -> ProcessAggregate {
        ProcessAggregate {
            process: ProcessRecord {
                pid,
                name: name.to_string(),
            },
            windows: Vec::new(),
        }
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot::build(
            vec![
                ProcessRecord {
                    pid: 10,
                    name: "a.exe".to_string(),
                },
                ProcessRecord {
                    pid: 20,
                    name: "b.exe".to_string(),
                },
                ProcessRecord {
                    pid: 30,
                    name: "chrome.exe".to_string(),
                },
            ],
            Vec::new(),
            chrono::Local::now(),
        )
    }

    fn visible_pids(snapshot: &Snapshot, filter: &str) -> Vec<u32> {
        snapshot
            .processes
            .iter()
            .filter(|a| group_matches(a, filter))
            .map(|a| a.process.pid)
            .collect()
    }

    #[test]
    fn empty_filter_matches_every_group() {
        let snapshot = sample_snapshot();
        assert_eq!(visible_pids(&snapshot, ""), [10, 20, 30]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let snapshot = sample_snapshot();
        assert_eq!(
            visible_pids(&snapshot, "CHROME"),
            visible_pids(&snapshot, "chrome")
        );
        assert_eq!(visible_pids(&snapshot, "CHROME"), [30]);
    }

    #[test]
    fn filter_is_idempotent() {
        let snapshot = sample_snapshot();
        let once: Vec<&ProcessAggregate> = snapshot
            .processes
            .iter()
            .filter(|a| group_matches(a, "e.exe"))
            .collect();
        let twice: Vec<&&ProcessAggregate> = once
            .iter()
            .filter(|a| group_matches(a, "e.exe"))
            .collect();
        assert_eq!(once.len(), twice.len());
        assert!(!once.is_empty());
    }

    #[test]
    fn name_substring_selects_a_single_group() {
        let snapshot = sample_snapshot();
        assert_eq!(visible_pids(&snapshot, "a.exe"), [10]);
    }

    #[test]
    fn unmatched_filter_leaves_no_visible_groups() {
        let snapshot = sample_snapshot();
        // The presentation layer renders its explicit no-match line off
        // this condition rather than an empty list.
        assert!(visible_pids(&snapshot, "zzz").is_empty());
        assert!(!snapshot.processes.is_empty());
    }

    #[test]
    fn empty_process_name_displays_as_unknown() {
        let group = aggregate(5, "");
        assert_eq!(display_process_name(&group.process.name), "<Unknown>");
        // The sentinel, not the raw name, is what the filter sees.
        assert!(group_matches(&group, "unknown"));
    }

    #[test]
    fn empty_title_and_class_fall_back_to_sentinels() {
        let window = WindowRecord {
            handle: 0x20_0A4,
            pid: 1,
            thread_id: 2,
            title: String::new(),
            class_name: String::new(),
            style: 0,
            ex_style: 0,
            visible: false,
            bounds: Bounds::default(),
        };
        assert_eq!(display_title(&window.title), NO_TITLE);
        assert_eq!(display_class(&window.class_name), UNKNOWN_CLASS);
        assert_eq!((window.bounds.width(), window.bounds.height()), (0, 0));
    }

    #[test]
    fn timestamp_formats_or_reads_not_available() {
        assert_eq!(format_timestamp(None), "N/A");

        let at = chrono::Local
            .with_ymd_and_hms(2026, 8, 23, 14, 5, 9)
            .unwrap();
        assert_eq!(format_timestamp(Some(at)), "2026-08-23 14:05:09");
    }
}
