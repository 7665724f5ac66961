use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::core::Error;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W, TH32CS_SNAPPROCESS,
};

use super::ProcessRecord;

/// Iterator over a ToolHelp32 process snapshot. The snapshot handle is
/// closed when the iterator is dropped.
pub(super) struct ProcessSnapshot {
    handle: HANDLE,
    initialized: bool,
}

impl ProcessSnapshot {
    pub(super) fn new() -> Result<Self, Error> {
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }?;

        Ok(Self {
            handle,
            initialized: false,
        })
    }
}

impl Iterator for ProcessSnapshot {
    type Item = ProcessRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let mut entry = PROCESSENTRY32W::default();
        entry.dwSize = std::mem::size_of::<PROCESSENTRY32W>() as u32;

        if !self.initialized {
            unsafe { Process32FirstW(self.handle, &mut entry) }.ok()?;
            self.initialized = true;
        } else {
            unsafe { Process32NextW(self.handle, &mut entry) }.ok()?;
        }

        Some(ProcessRecord {
            pid: entry.th32ProcessID,
            name: exe_name(&entry),
        })
    }
}

impl Drop for ProcessSnapshot {
    fn drop(&mut self) {
        unsafe { CloseHandle(self.handle).ok() };
    }
}

fn exe_name(entry: &PROCESSENTRY32W) -> String {
    let len = entry
        .szExeFile
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(entry.szExeFile.len());

    OsString::from_wide(&entry.szExeFile[..len])
        .to_string_lossy()
        .into_owned()
}
