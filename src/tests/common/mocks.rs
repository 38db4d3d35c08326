use std::cell::RefCell;

use crate::theme::ThemeStore;

/// In-memory stand-in for the browser's `localStorage`.
#[allow(dead_code)]
pub struct MockThemeStore {
    value: RefCell<Option<String>>,
}

#[allow(dead_code)]
impl MockThemeStore {
    pub fn empty() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }

    pub fn seeded(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MockThemeStore {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}
