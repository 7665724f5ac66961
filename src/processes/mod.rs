//! Process enumeration over a point-in-time platform snapshot.

#[cfg(target_os = "windows")]
mod toolhelp;

use crate::error::InspectorResult;

/// One running process at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Process id. Unique among live processes, reused after exit.
    pub pid: u32,
    /// Executable name as reported by the platform. May be empty.
    pub name: String,
}

/// Lists every process visible at the caller's privilege level.
///
/// Ordering is whatever the platform returns and is not stable across
/// calls. Failure to create the snapshot is reported to the caller, which
/// treats it as "zero processes".
#[cfg(target_os = "windows")]
pub fn enumerate_processes() -> InspectorResult<Vec<ProcessRecord>> {
    use crate::error::InspectorError;

    let snapshot = toolhelp::ProcessSnapshot::new()
        .map_err(|e| InspectorError::ProcessEnumerationFailed(e.to_string()))?;
    Ok(snapshot.collect())
}

#[cfg(not(target_os = "windows"))]
pub fn enumerate_processes() -> InspectorResult<Vec<ProcessRecord>> {
    Ok(Vec::new())
}

#[cfg(all(test, target_os = "windows"))]
mod tests {
    use super::*;

    #[test]
    fn enumeration_sees_the_current_session() {
        let processes = enumerate_processes().expect("toolhelp snapshot");
        // At minimum the test runner itself is in the list.
        assert!(!processes.is_empty());
        assert!(processes.iter().any(|p| p.pid == std::process::id()));
    }
}
