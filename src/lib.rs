//! Snapshots running processes and their top-level windows and presents
//! the inventory as a filterable, refreshable table.

pub mod app;
pub mod error;
pub mod processes;
pub mod snapshot;
pub mod ui;
pub mod windowing;

pub use error::{InspectorError, InspectorResult};
pub use processes::ProcessRecord;
pub use snapshot::{ProcessAggregate, Snapshot};
pub use windowing::{Bounds, WindowRecord};
