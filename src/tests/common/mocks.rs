use std::cell::RefCell;
use std::rc::Rc;
use crate::error::PortalError;
use crate::theme::{ Theme, ThemeEnvironment, ThemeStorage };

/// In-memory storage slot; clones share the slot.
#[derive(Clone)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    available: bool,
}

impl MemoryStorage {
    pub fn empty() -> Self {
        Self { slot: Rc::new(RefCell::new(None)), available: true }
    }

    pub fn with(value: &str) -> Self {
        let storage = Self::empty();
        *storage.slot.borrow_mut() = Some(value.to_string());
        storage
    }

    /// Behaves like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::empty() }
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        self.slot.borrow().clone()
    }

    fn store(&self, value: &str) {
        if self.available {
            *self.slot.borrow_mut() = Some(value.to_string());
        }
    }
}

#[derive(Default)]
struct EnvState {
    marker: Option<Theme>,
    pending: Vec<Box<dyn FnOnce()>>,
    transitions: usize,
}

/// Environment whose view transitions are queued until [`FakeEnvironment::flush`],
/// like a browser deferring the update callback to its next frame.
#[derive(Clone)]
pub struct FakeEnvironment {
    prefers_dark: Option<bool>,
    transitions: bool,
    rejects_transitions: bool,
    state: Rc<RefCell<EnvState>>,
}

impl FakeEnvironment {
    pub fn new(prefers_dark: Option<bool>, transitions: bool) -> Self {
        Self {
            prefers_dark,
            transitions,
            rejects_transitions: false,
            state: Rc::new(RefCell::new(EnvState::default())),
        }
    }

    /// Advertises view transitions but fails every start, dropping the update.
    pub fn rejecting(prefers_dark: Option<bool>) -> Self {
        Self { rejects_transitions: true, ..Self::new(prefers_dark, true) }
    }

    pub fn marker(&self) -> Option<Theme> {
        self.state.borrow().marker
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn transitions_started(&self) -> usize {
        self.state.borrow().transitions
    }

    pub fn flush(&self) {
        let pending = std::mem::take(&mut self.state.borrow_mut().pending);
        for update in pending {
            update();
        }
    }
}

impl ThemeEnvironment for FakeEnvironment {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn apply_marker(&self, theme: Theme) {
        self.state.borrow_mut().marker = Some(theme);
    }

    fn supports_transitions(&self) -> bool {
        self.transitions
    }

    fn start_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), PortalError> {
        let mut state = self.state.borrow_mut();
        state.transitions += 1;
        if self.rejects_transitions {
            return Err(PortalError::Transition("rejected".to_string()));
        }
        state.pending.push(update);
        Ok(())
    }
}
