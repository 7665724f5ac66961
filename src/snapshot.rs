//! Point-in-time join of the process and window enumerations.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::processes::{self, ProcessRecord};
use crate::windowing::{self, WindowRecord};

/// One process together with its top-level windows.
///
/// Window order within the group is window-enumeration order, not z-order.
#[derive(Debug, Clone)]
pub struct ProcessAggregate {
    pub process: ProcessRecord,
    pub windows: Vec<WindowRecord>,
}

/// Immutable capture of process and window state. Replaced wholesale on
/// refresh, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// `None` only for the never-captured default.
    pub captured_at: Option<DateTime<Local>>,
    /// Aggregates in process-enumeration order.
    pub processes: Vec<ProcessAggregate>,
    pub total_process_count: usize,
    /// Raw enumerated window count. Windows whose owner process vanished
    /// between the two enumeration passes are counted here even though
    /// they appear in no aggregate, so per-group sums may add up short.
    pub total_window_count: usize,
}

impl Snapshot {
    /// Joins the two enumerated sequences. Each window groups under the
    /// process owning it, preserving enumeration order on both sides;
    /// windows with no matching process are dropped from the aggregates.
    pub fn build(
        processes: Vec<ProcessRecord>,
        windows: Vec<WindowRecord>,
        captured_at: DateTime<Local>,
    ) -> Self {
        let total_process_count = processes.len();
        let total_window_count = windows.len();

        let mut by_pid: HashMap<u32, Vec<WindowRecord>> = HashMap::with_capacity(windows.len());
        for window in windows {
            by_pid.entry(window.pid).or_default().push(window);
        }

        let processes = processes
            .into_iter()
            .map(|process| {
                let windows = by_pid.remove(&process.pid).unwrap_or_default();
                ProcessAggregate { process, windows }
            })
            .collect();

        Self {
            captured_at: Some(captured_at),
            processes,
            total_process_count,
            total_window_count,
        }
    }

    /// Runs both enumerators and builds a fresh snapshot.
    ///
    /// Enumeration failures are absorbed into empty or partial inputs and
    /// logged; a failed process pass still lets the window pass run, and
    /// vice versa.
    pub fn capture() -> Self {
        let processes = match processes::enumerate_processes() {
            Ok(processes) => processes,
            Err(err) => {
                error!(error = %err, "continuing with zero processes");
                Vec::new()
            }
        };

        let (windows, window_error) = windowing::enumerate_windows();
        if let Some(err) = window_error {
            error!(error = %err, collected = windows.len(), "continuing with partial windows");
        }

        let snapshot = Self::build(processes, windows, Local::now());
        info!(
            processes = snapshot.total_process_count,
            windows = snapshot.total_window_count,
            "captured snapshot"
        );
        snapshot
    }
}
