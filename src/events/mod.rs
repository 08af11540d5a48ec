//! DOM listeners. Callbacks only record input: pointer, hover and resize go
//! into the shared [`EventQueue`], scroll deltas into the scroll provider.
//! Everything is consumed at the start of the next animation frame.

use planes_core::SceneEvent;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub mod hover;
pub mod pointer;
pub mod window;

pub type EventQueue = Rc<RefCell<VecDeque<SceneEvent>>>;

#[inline]
pub fn push(queue: &EventQueue, event: SceneEvent) {
    queue.borrow_mut().push_back(event);
}
