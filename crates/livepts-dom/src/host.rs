//! The host boundary: where attribute text lives.
//!
//! Live values do not own their attribute. They read and write it through
//! [`AttributeHost`], and the host reports every change back to the live
//! value registered for that attribute. [`Element`] is the reference host.

use crate::animated_points::AnimatedPoints;
use livepts_core::{AttrName, ListConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ─── Host Trait ──────────────────────────────────────────────────────────

/// Attribute storage seen by a live value.
///
/// Implemented differently by each embedding:
/// - a DOM node backed by its own attribute map
/// - a scene-graph node that stores properties as text
/// - test doubles that count writes
pub trait AttributeHost {
    /// Current text of the attribute, or `None` if it is not set.
    fn attribute(&self, name: AttrName) -> Option<String>;

    /// Store `value`. Implementations must then synchronously report the
    /// change to the live value registered for `name` (`attr_added` for a
    /// new attribute, `attr_modified` otherwise).
    fn set_attribute(&self, name: AttrName, value: &str);
}

// ─── Element ─────────────────────────────────────────────────────────────

/// A document node holding string attributes and their live values.
///
/// Live values are created on demand, one per attribute, and live as long as
/// the element. They refer back to the element weakly.
#[derive(Debug, Default)]
pub struct Element {
    attributes: RefCell<HashMap<AttrName, String>>,
    live_values: RefCell<HashMap<AttrName, Rc<AnimatedPoints>>>,
}

impl Element {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create an element with initial attributes. No live values exist yet,
    /// so nothing is notified.
    pub fn with_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Rc<Self> {
        let element = Self::default();
        element.attributes.borrow_mut().extend(
            attributes
                .into_iter()
                .map(|(name, value)| (AttrName::intern(name), value.to_owned())),
        );
        Rc::new(element)
    }

    pub fn has_attribute(&self, name: AttrName) -> bool {
        self.attributes.borrow().contains_key(&name)
    }

    /// Remove the attribute, notifying its live value. Returns the old text.
    pub fn remove_attribute(&self, name: AttrName) -> Option<String> {
        let old = self.attributes.borrow_mut().remove(&name);
        if let Some(old) = &old
            && let Some(live) = self.live_value(name)
        {
            live.attr_removed(old);
        }
        old
    }

    /// The live point-list value for `name`, created on first request.
    ///
    /// `config` only applies when the value is created; later calls return
    /// the existing value unchanged.
    pub fn animated_points(
        self: &Rc<Self>,
        name: AttrName,
        config: ListConfig,
    ) -> Rc<AnimatedPoints> {
        if let Some(live) = self.live_value(name) {
            return live;
        }
        let host: Rc<dyn AttributeHost> = self.clone();
        let live = Rc::new(AnimatedPoints::new(Rc::downgrade(&host), name, config));
        self.live_values.borrow_mut().insert(name, Rc::clone(&live));
        log::debug!("created live value for `{name}`");
        live
    }

    fn live_value(&self, name: AttrName) -> Option<Rc<AnimatedPoints>> {
        self.live_values.borrow().get(&name).cloned()
    }
}

impl AttributeHost for Element {
    fn attribute(&self, name: AttrName) -> Option<String> {
        self.attributes.borrow().get(&name).cloned()
    }

    fn set_attribute(&self, name: AttrName, value: &str) {
        // Release the map before notifying: listeners may read attributes.
        let old = self.attributes.borrow_mut().insert(name, value.to_owned());
        if let Some(live) = self.live_value(name) {
            match old {
                Some(old) => live.attr_modified(&old, value),
                None => live.attr_added(value),
            }
        }
    }
}
