use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::core::Error;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClassNameW, GetWindowLongW, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, IsWindow, IsWindowVisible, GWL_EXSTYLE, GWL_STYLE,
};

use super::{Bounds, WindowRecord, NO_TITLE, UNKNOWN_CLASS};

/// Collects a record for every top-level window. On enumeration failure
/// the records gathered before the abort are returned alongside the error.
pub(super) fn top_level_windows() -> (Vec<WindowRecord>, Option<Error>) {
    let mut records = Vec::new();
    let walked = walk_top_level(|hwnd| {
        if let Some(record) = inspect(hwnd) {
            records.push(record);
        }
    });
    (records, walked.err())
}

/// Drives `EnumWindows` with a typed closure instead of a hand-cast
/// accumulator pointer.
fn walk_top_level<F: FnMut(HWND)>(mut visit: F) -> Result<(), Error> {
    unsafe extern "system" fn thunk<F: FnMut(HWND)>(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let visit = &mut *(lparam.0 as *mut F);
        visit(hwnd);
        true.into()
    }

    unsafe { EnumWindows(Some(thunk::<F>), LPARAM(&mut visit as *mut F as isize)) }
}

/// Queries one candidate handle. Returns `None` when the window went away
/// between enumeration and inspection.
fn inspect(hwnd: HWND) -> Option<WindowRecord> {
    if !unsafe { IsWindow(Some(hwnd)) }.as_bool() {
        return None;
    }

    let mut pid = 0u32;
    let thread_id = unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };

    Some(WindowRecord {
        handle: hwnd.0 as isize,
        pid,
        thread_id,
        title: window_title(hwnd),
        class_name: window_class(hwnd),
        style: unsafe { GetWindowLongW(hwnd, GWL_STYLE) } as u32,
        ex_style: unsafe { GetWindowLongW(hwnd, GWL_EXSTYLE) } as u32,
        visible: unsafe { IsWindowVisible(hwnd) }.as_bool(),
        bounds: window_bounds(hwnd),
    })
}

fn window_title(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return NO_TITLE.to_string();
    }

    let mut buffer = vec![0u16; length as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    if copied <= 0 {
        return NO_TITLE.to_string();
    }

    let title = OsString::from_wide(&buffer[..copied as usize])
        .to_string_lossy()
        .into_owned();
    if title.is_empty() {
        NO_TITLE.to_string()
    } else {
        title
    }
}

fn window_class(hwnd: HWND) -> String {
    let mut buffer = [0u16; 256];
    let length = unsafe { GetClassNameW(hwnd, &mut buffer) };
    if length <= 0 {
        return UNKNOWN_CLASS.to_string();
    }

    OsString::from_wide(&buffer[..length as usize])
        .to_string_lossy()
        .into_owned()
}

fn window_bounds(hwnd: HWND) -> Bounds {
    let mut rect = RECT::default();
    match unsafe { GetWindowRect(hwnd, &mut rect) } {
        Ok(()) => Bounds {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        },
        Err(_) => Bounds::default(),
    }
}
