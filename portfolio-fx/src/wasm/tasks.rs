//! Timers owned by the mounted controller.
//!
//! Every delayed mutation (ripple removal, staggered reveal, typing steps,
//! notification hide, float setup) goes through `Tasks`, so dropping the
//! controller cancels all of them at once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;

struct Slot {
    fired: Rc<Cell<bool>>,
    _timeout: Timeout,
}

#[derive(Clone, Default)]
pub(super) struct Tasks {
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl Tasks {
    /// Run `f` once after `delay_ms`, unless cancelled first.
    pub(super) fn after(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            f();
            flag.set(true);
        });

        let mut slots = self.slots.borrow_mut();
        slots.retain(|s| !s.fired.get());
        slots.push(Slot {
            fired,
            _timeout: timeout,
        });
    }

    pub(super) fn pending(&self) -> usize {
        self.slots.borrow().iter().filter(|s| !s.fired.get()).count()
    }

    /// Cancel everything still scheduled.
    pub(super) fn cancel_all(&self) {
        let dropped = std::mem::take(&mut *self.slots.borrow_mut());
        drop(dropped);
    }
}
