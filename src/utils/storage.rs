use web_sys::{window, Storage};

use super::constants::{SESSION_MARKER_VALUE, STORAGE_KEY_SESSION};

/// Key-value store holding the session marker.
pub trait MarkerStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

impl MarkerStore for Storage {
    fn read(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value)
            .map_err(|_| "Could not write to sessionStorage".to_string())
    }
}

/// `None` when there is no window or the browser blocks site data
/// (`window.sessionStorage` throws `SecurityError`).
pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// True when a session marker was left by an earlier page in this tab.
pub fn has_session_marker() -> bool {
    marker_present(get_session_storage().as_ref())
}

pub fn save_session_marker() -> Result<(), String> {
    write_marker(get_session_storage().as_ref())
}

fn marker_present<S: MarkerStore>(store: Option<&S>) -> bool {
    store
        .and_then(|store| store.read(STORAGE_KEY_SESSION))
        .is_some()
}

fn write_marker<S: MarkerStore>(store: Option<&S>) -> Result<(), String> {
    let store = store.ok_or("sessionStorage is not available")?;
    store.write(STORAGE_KEY_SESSION, SESSION_MARKER_VALUE)
}
