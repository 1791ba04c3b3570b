//! Change-listener fan-out.
//!
//! Callbacks are held strongly by the [`Subscription`] returned to the
//! subscriber and weakly by the listener set. Dropping the subscription
//! stops delivery; dead entries are pruned on the next notify.

use livepts_core::AttrName;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(AttrName)>;
type CallbackWeak = Weak<dyn Fn(AttrName)>;

/// Keeps a change callback registered. Drop it to unsubscribe.
#[must_use = "dropping the subscription unregisters the callback"]
pub struct Subscription {
    _callback: Callback,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[derive(Default)]
pub(crate) struct Listeners {
    subscribers: RefCell<SmallVec<[CallbackWeak; 2]>>,
}

impl Listeners {
    pub(crate) fn subscribe(&self, callback: impl Fn(AttrName) + 'static) -> Subscription {
        let strong: Callback = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::downgrade(&strong));
        Subscription { _callback: strong }
    }

    /// Call every live subscriber in registration order.
    ///
    /// No borrow is held during the calls, so callbacks may subscribe or
    /// trigger further notifications.
    pub(crate) fn notify(&self, name: AttrName) {
        let callbacks: SmallVec<[Callback; 2]> = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.retain(|w| w.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in callbacks {
            callback(name);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("subscriber_count", &self.len())
            .finish()
    }
}
