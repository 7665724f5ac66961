//! Top-level window enumeration.

#[cfg(target_os = "windows")]
mod enumerate;

use crate::error::InspectorError;

/// Placeholder for windows that report an empty title.
pub const NO_TITLE: &str = "<No Title>";
/// Placeholder when the class name query fails.
pub const UNKNOWN_CLASS: &str = "<UnknownClass>";

/// Window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// One top-level window at enumeration time.
#[derive(Debug, Clone)]
pub struct WindowRecord {
    /// Raw platform handle. Only unique among currently existing windows.
    pub handle: isize,
    /// Owning process id.
    pub pid: u32,
    /// Owning thread id.
    pub thread_id: u32,
    pub title: String,
    pub class_name: String,
    /// Basic style word.
    pub style: u32,
    /// Extended style word.
    pub ex_style: u32,
    pub visible: bool,
    /// All-zero when the bounds query failed.
    pub bounds: Bounds,
}

/// Walks every top-level window in the current desktop session.
///
/// Returns the records collected so far together with the enumeration
/// error, if the walk itself aborted. Per-window query failures never
/// abort the walk; they degrade to sentinel values inside the record.
#[cfg(target_os = "windows")]
pub fn enumerate_windows() -> (Vec<WindowRecord>, Option<InspectorError>) {
    let (records, error) = enumerate::top_level_windows();
    (
        records,
        error.map(|e| InspectorError::WindowEnumerationFailed(e.to_string())),
    )
}

#[cfg(not(target_os = "windows"))]
pub fn enumerate_windows() -> (Vec<WindowRecord>, Option<InspectorError>) {
    (Vec::new(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_derive_width_and_height() {
        let bounds = Bounds {
            left: 100,
            top: 50,
            right: 740,
            bottom: 530,
        };
        assert_eq!(bounds.width(), 640);
        assert_eq!(bounds.height(), 480);
    }

    #[test]
    fn failed_bounds_query_reads_as_zero_sized() {
        let bounds = Bounds::default();
        assert_eq!((bounds.width(), bounds.height()), (0, 0));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn enumeration_collects_without_aborting() {
        let (records, error) = enumerate_windows();
        assert!(error.is_none());
        // A desktop session always carries at least the shell windows.
        assert!(!records.is_empty());
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(!record.class_name.is_empty());
        }
    }
}
