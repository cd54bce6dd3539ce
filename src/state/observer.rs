//! Change notification for view state.
//!
//! Listeners are plain closures registered on a [`ViewState`](super::ViewState).
//! They run synchronously, in registration order, after a field and anything
//! derived from it have been updated.

use crate::state::RoomId;
use crate::theme::ThemeName;

/// A single applied change, carrying the new value of the field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewChange {
    HighlightedRoom(Option<RoomId>),
    Theme(ThemeName),
    Labels(bool),
    Interaction(bool),
    Opacity(f32),
    Scale(f32),
}

/// Handle returned by `subscribe`, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ViewChange)>;

/// Registered listeners in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, change: &ViewChange) {
        for (_, listener) in &mut self.entries {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = Rc::clone(&log);
        listeners.add(Box::new(move |_| first.borrow_mut().push("first")));
        let second = Rc::clone(&log);
        listeners.add(Box::new(move |_| second.borrow_mut().push("second")));

        listeners.emit(&ViewChange::Labels(false));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_remove() {
        let mut listeners = Listeners::default();
        let id = listeners.add(Box::new(|_| {}));
        let other = listeners.add(Box::new(|_| {}));
        assert_ne!(id, other);

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 1);
    }
}
