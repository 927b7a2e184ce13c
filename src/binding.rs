//! Shared presentation flag between the host application and a card.
//!
//! The host owns a [`State`]; widgets receive a [`Binding`] to it. A binding
//! only holds a weak reference, so once the owner is dropped reads return
//! `T::default()` and writes are ignored.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Owned value the host application keeps alive for as long as it renders
/// widgets bound to it.
#[derive(Debug, Default)]
pub struct State<T: Copy> {
    value: Rc<Cell<T>>,
}

impl<T: Copy> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, value: T) {
        self.value.set(value);
    }

    /// Hand out a binding to this state
    pub fn binding(&self) -> Binding<T> {
        Binding {
            value: Rc::downgrade(&self.value),
        }
    }
}

impl State<bool> {
    /// Flip a boolean state, returning the new value
    pub fn toggle(&self) -> bool {
        let next = !self.get();
        self.set(next);
        next
    }
}

/// Read/write handle to a [`State`] owned elsewhere.
#[derive(Clone)]
pub struct Binding<T: Copy> {
    value: Weak<Cell<T>>,
}

impl<T: Copy + Default> Binding<T> {
    /// Current value, or `T::default()` once the owner is gone
    pub fn get(&self) -> T {
        self.value
            .upgrade()
            .map(|cell| cell.get())
            .unwrap_or_default()
    }

    /// Write through to the owner. Returns false if the owner was dropped.
    pub fn set(&self, value: T) -> bool {
        match self.value.upgrade() {
            Some(cell) => {
                cell.set(value);
                true
            }
            None => {
                tracing::debug!("binding owner dropped, ignoring write");
                false
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.value.strong_count() > 0
    }
}

impl<T: Copy + Default + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_writes_through() {
        let state = State::new(false);
        let binding = state.binding();

        assert!(binding.set(true));
        assert!(state.get());
        assert!(binding.get());

        state.set(false);
        assert!(!binding.get());
    }

    #[test]
    fn test_binding_after_owner_dropped() {
        let state = State::new(true);
        let binding = state.binding();
        drop(state);

        assert!(!binding.is_attached());
        assert!(!binding.get());
        assert!(!binding.set(true));
    }

    #[test]
    fn test_toggle() {
        let state = State::new(false);
        assert!(state.toggle());
        assert!(!state.toggle());
    }
}
