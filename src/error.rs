use thiserror::Error;

/// Failures the inspector can signal.
///
/// Per-window query failures (title, class, bounds) never surface here;
/// they degrade to sentinel values at the point of failure.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// The platform process snapshot could not be created. The pipeline
    /// proceeds with zero processes.
    #[error("process enumeration failed: {0}")]
    ProcessEnumerationFailed(String),

    /// The top-level window walk aborted. Records collected before the
    /// failure are still used.
    #[error("window enumeration failed: {0}")]
    WindowEnumerationFailed(String),

    /// The draw surface could not be created. Fatal: without it there is
    /// no way to present results.
    #[error("render surface initialization failed: {0}")]
    RenderSurfaceInitFailed(#[from] eframe::Error),
}

pub type InspectorResult<T> = Result<T, InspectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_stage() {
        let err = InspectorError::ProcessEnumerationFailed("access denied".into());
        assert_eq!(
            err.to_string(),
            "process enumeration failed: access denied"
        );

        let err = InspectorError::WindowEnumerationFailed("walk aborted".into());
        assert!(err.to_string().starts_with("window enumeration failed"));
    }
}
