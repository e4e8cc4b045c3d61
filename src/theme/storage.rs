/// Durable key-value slot holding the persisted theme label.
///
/// Implementations never fail: an unavailable backend reads as "nothing
/// stored" and silently drops writes.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
}

/// `window.localStorage` under a single fixed key.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::debug!("localStorage is not accessible: {:?}", err);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        let storage = local_storage()?;
        match storage.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("Failed to read '{}' from localStorage: {:?}", self.key, err);
                None
            }
        }
    }

    fn store(&self, value: &str) {
        let Some(storage) = local_storage() else {
            log::debug!("localStorage unavailable, '{}' not persisted", value);
            return;
        };
        if let Err(err) = storage.set_item(&self.key, value) {
            log::debug!("Failed to write '{}' to localStorage: {:?}", self.key, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        log::debug!("No localStorage outside the browser, '{}' reads as unset", self.key);
        None
    }

    fn store(&self, value: &str) {
        log::debug!("No localStorage outside the browser, '{}' not persisted", value);
    }
}
