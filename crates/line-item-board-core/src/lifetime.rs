//! Component Lifetime
//!
//! Shared flag checked by every continuation of a remote call, so responses
//! arriving after teardown are dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    ended: Rc<Cell<bool>>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        !self.ended.get()
    }

    /// Idempotent
    pub fn end(&self) {
        self.ended.set(true);
    }
}
