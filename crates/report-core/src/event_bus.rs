//! Toast queue between `ChatState` and the frame loop.
//!
//! The view-model pushes while applying results; the UI takes the whole
//! batch once per frame. Both sides hold a clone of the same queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use report_types::event::Notification;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<Notification>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification. An exact repeat of the newest pending one is
    /// dropped, so a burst of identical failures shows a single toast.
    pub fn emit(&self, notification: Notification) {
        let mut queue = self.queue.borrow_mut();
        if queue.back() == Some(&notification) {
            log::debug!("Collapsing repeated notification: {}", notification.text);
            return;
        }
        queue.push_back(notification);
    }

    /// Take everything queued since the last frame, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
