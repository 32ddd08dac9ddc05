use std::collections::VecDeque;

use super::types::InputEvent;

/// FIFO of input events waiting to be dispatched.
///
/// The runtime pushes translated platform events as they arrive; the frame loop
/// drains them at its poll points.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: InputEvent) {
        self.events.push_back(ev);
    }

    /// Removes and returns the oldest pending event.
    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_come_out_in_arrival_order() {
        let mut q = EventQueue::new();
        q.push(InputEvent::Focused(true));
        q.push(InputEvent::PointerLeft);
        q.push(InputEvent::CloseRequested);
        assert_eq!(q.len(), 3);

        assert_eq!(q.pop(), Some(InputEvent::Focused(true)));
        assert_eq!(q.pop(), Some(InputEvent::PointerLeft));
        assert_eq!(q.pop(), Some(InputEvent::CloseRequested));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }
}
