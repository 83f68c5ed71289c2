use web_sys::window;

/// Session key recording that the intro already played in this tab.
pub const INTRO_PLAYED_KEY: &str = "intro_played";

/// Minimal key-value view over session-scoped storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub fn intro_played<S: SessionStore + ?Sized>(store: &S) -> bool {
    store.get(INTRO_PLAYED_KEY).as_deref() == Some("true")
}

pub fn mark_intro_played<S: SessionStore + ?Sized>(store: &S) {
    store.set(INTRO_PLAYED_KEY, "true");
}

/// `window.sessionStorage`. Storage that is unavailable (private mode,
/// sandboxed iframe) reads as empty and swallows writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.session_storage().ok()).flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to write session key {}: {:?}", key, e);
                }
            }
            None => log::warn!("Session storage unavailable, {} not persisted", key),
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
pub mod testing {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Session storage that lives only as long as the test.
    #[derive(Debug, Default)]
    pub struct MemorySessionStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemorySessionStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemorySessionStore;
    use super::*;

    #[test]
    fn flag_absent_until_marked() {
        let store = MemorySessionStore::default();
        assert!(!intro_played(&store));
        mark_intro_played(&store);
        assert!(intro_played(&store));
        assert_eq!(store.get(INTRO_PLAYED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn only_true_counts_as_played() {
        let store = MemorySessionStore::default();
        store.set(INTRO_PLAYED_KEY, "false");
        assert!(!intro_played(&store));
    }
}
