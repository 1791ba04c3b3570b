//! Animated point-list value: the single entry point for a live
//! `points`-style attribute.
//!
//! `AnimatedPoints` owns the authored base list and the animated override
//! list for one attribute of one element:
//!
//! - **Host → value**: the element reports attribute changes through
//!   [`attr_added`](AnimatedPoints::attr_added),
//!   [`attr_modified`](AnimatedPoints::attr_modified) and
//!   [`attr_removed`](AnimatedPoints::attr_removed). External changes
//!   invalidate the base list; it is re-parsed on the next read.
//!
//! - **Value → host**: structural edits on the base view serialize the list
//!   and write it back to the attribute. The host reports that write like any
//!   other change, so the write runs under a guard that stops this value from
//!   invalidating itself.
//!
//! - **Animation**: [`install_override`](AnimatedPoints::install_override)
//!   merges sampled coordinates into the animated list and makes the animated
//!   view read from it until [`clear_override`](AnimatedPoints::clear_override).

use crate::anim_list::AnimList;
use crate::base_list::BaseList;
use crate::error::{LiveAttributeError, Result};
use crate::host::AttributeHost;
use crate::item::PointItem;
use crate::list::{ListKind, PointList};
use crate::notify::{Listeners, Subscription};
use livepts_core::{AttrName, ListConfig};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

pub struct AnimatedPoints {
    host: Weak<dyn AttributeHost>,
    name: AttrName,
    config: ListConfig,

    /// Created on first access to either view.
    base: RefCell<Option<BaseList>>,

    /// Created on first access to the animated view or first override.
    anim: RefCell<Option<AnimList>>,

    has_override: Cell<bool>,

    /// Set while this value is writing its own attribute.
    changing: Cell<bool>,

    base_listeners: Listeners,
    anim_listeners: Listeners,
}

impl AnimatedPoints {
    /// An invalid separator is replaced by the default one, so every
    /// write-back stays parseable.
    pub fn new(host: Weak<dyn AttributeHost>, name: AttrName, mut config: ListConfig) -> Self {
        if !config.has_valid_separator() {
            log::warn!(
                "separator {:?} for `{name}` is not comma-whitespace; using the default",
                config.separator
            );
            config.separator = ListConfig::default().separator;
        }
        Self {
            host,
            name,
            config,
            base: RefCell::new(None),
            anim: RefCell::new(None),
            has_override: Cell::new(false),
            changing: Cell::new(false),
            base_listeners: Listeners::default(),
            anim_listeners: Listeners::default(),
        }
    }

    pub fn name(&self) -> AttrName {
        self.name
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Whether the animated view currently reads from the override list.
    pub fn has_override(&self) -> bool {
        self.has_override.get()
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// The authored value, parsed from the attribute and editable.
    pub fn base_view(&self) -> PointList<'_> {
        self.base.borrow_mut().get_or_insert_with(BaseList::default);
        PointList::new(self, ListKind::Base)
    }

    /// The presented value: the override while one is installed, otherwise
    /// the authored value. Read-only.
    pub fn animated_view(&self) -> PointList<'_> {
        self.anim.borrow_mut().get_or_insert_with(AnimList::default);
        PointList::new(self, ListKind::Animated)
    }

    // ─── Animation ───────────────────────────────────────────────────────

    /// Install interleaved `x, y` coordinates as the animated value.
    pub fn install_override(&self, coords: &[f64]) {
        self.anim
            .borrow_mut()
            .get_or_insert_with(AnimList::default)
            .merge(coords);
        self.has_override.set(true);
        self.anim_listeners.notify(self.name);
    }

    /// Stop presenting the override. The override items are kept.
    pub fn clear_override(&self) {
        self.has_override.set(false);
        self.anim_listeners.notify(self.name);
    }

    /// Text of the override list regardless of whether it is installed.
    pub fn override_text(&self) -> String {
        self.anim
            .borrow()
            .as_ref()
            .map(|anim| anim.to_text(&self.config.separator))
            .unwrap_or_default()
    }

    // ─── Host notifications ──────────────────────────────────────────────

    pub fn attr_added(&self, _value: &str) {
        self.attr_changed();
    }

    pub fn attr_modified(&self, _old: &str, _new: &str) {
        self.attr_changed();
    }

    pub fn attr_removed(&self, _old: &str) {
        self.attr_changed();
    }

    fn attr_changed(&self) {
        if !self.changing.get()
            && let Some(base) = self.base.borrow_mut().as_mut()
        {
            log::trace!("invalidate `{}`", self.name);
            base.invalidate();
        }
        self.base_listeners.notify(self.name);
        if !self.has_override.get() {
            self.anim_listeners.notify(self.name);
        }
    }

    // ─── Listeners ───────────────────────────────────────────────────────

    /// Called after every change to the authored value.
    pub fn on_base_changed(&self, callback: impl Fn(AttrName) + 'static) -> Subscription {
        self.base_listeners.subscribe(callback)
    }

    /// Called whenever the presented value may have changed.
    pub fn on_animated_changed(&self, callback: impl Fn(AttrName) + 'static) -> Subscription {
        self.anim_listeners.subscribe(callback)
    }

    // ─── List plumbing ───────────────────────────────────────────────────

    /// Run `read` over the items a view of `kind` currently presents.
    pub(crate) fn read<R>(
        &self,
        kind: ListKind,
        read: impl FnOnce(&[PointItem]) -> R,
    ) -> Result<R> {
        if kind == ListKind::Animated && self.has_override.get() {
            let anim = self.anim.borrow();
            return Ok(read(anim.as_ref().map(AnimList::items).unwrap_or_default()));
        }
        self.revalidate()?;
        let base = self.base.borrow();
        Ok(read(base.as_ref().map(BaseList::items).unwrap_or_default()))
    }

    pub(crate) fn value_text(&self, kind: ListKind) -> Result<String> {
        if kind == ListKind::Animated && self.has_override.get() {
            return Ok(self.override_text());
        }
        self.revalidate()?;
        Ok(self
            .base
            .borrow()
            .as_ref()
            .map(|base| base.to_text(&self.config.separator))
            .unwrap_or_default())
    }

    /// Apply a structural edit to the base list and write it back.
    pub(crate) fn edit<R>(
        &self,
        kind: ListKind,
        edit: impl FnOnce(&mut Vec<PointItem>) -> Result<R>,
    ) -> Result<R> {
        if !kind.is_mutable() {
            return Err(LiveAttributeError::ReadOnly { name: self.name });
        }
        let host = self.host()?;
        self.revalidate()?;

        let (result, text) = self
            .base
            .borrow_mut()
            .get_or_insert_with(BaseList::default)
            .edit(&self.config.separator, edit)?;

        self.write_back(host.as_ref(), &text);
        Ok(result)
    }

    fn revalidate(&self) -> Result<()> {
        let valid = self.base.borrow().as_ref().is_some_and(BaseList::is_valid);
        if valid {
            return Ok(());
        }
        // Read before borrowing: the host must not see a held borrow.
        let text = self
            .host()?
            .attribute(self.name)
            .or_else(|| self.config.default_value.clone());
        self.base
            .borrow_mut()
            .get_or_insert_with(BaseList::default)
            .revalidate(self.name, text.as_deref())
    }

    fn write_back(&self, host: &dyn AttributeHost, text: &str) {
        log::trace!("write back `{}` = {text:?}", self.name);
        let _guard = WriteBackGuard::enter(&self.changing);
        host.set_attribute(self.name, text);
    }

    fn host(&self) -> Result<Rc<dyn AttributeHost>> {
        self.host
            .upgrade()
            .ok_or(LiveAttributeError::HostDropped { name: self.name })
    }
}

impl fmt::Debug for AnimatedPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedPoints")
            .field("name", &self.name)
            .field("base", &self.base.borrow())
            .field("anim", &self.anim.borrow())
            .field("has_override", &self.has_override.get())
            .field("changing", &self.changing.get())
            .finish_non_exhaustive()
    }
}

/// Holds the write-back flag for one host call; restores the previous state
/// on drop so nested write-backs from listeners unwind correctly.
struct WriteBackGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> WriteBackGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for WriteBackGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepts_core::Point;
    use pretty_assertions::assert_eq;

    /// Host with one attribute slot that counts writes and reports them back
    /// to the registered value, like an element would.
    #[derive(Default)]
    struct RecordingHost {
        value: RefCell<Option<String>>,
        writes: Cell<usize>,
        live: RefCell<Weak<AnimatedPoints>>,
    }

    impl AttributeHost for RecordingHost {
        fn attribute(&self, _name: AttrName) -> Option<String> {
            self.value.borrow().clone()
        }

        fn set_attribute(&self, _name: AttrName, value: &str) {
            let old = self.value.borrow_mut().replace(value.to_owned());
            self.writes.set(self.writes.get() + 1);
            let live = self.live.borrow().upgrade();
            if let Some(live) = live {
                match old {
                    Some(old) => live.attr_modified(&old, value),
                    None => live.attr_added(value),
                }
            }
        }
    }

    fn setup(text: Option<&str>, config: ListConfig) -> (Rc<RecordingHost>, Rc<AnimatedPoints>) {
        let host = Rc::new(RecordingHost::default());
        *host.value.borrow_mut() = text.map(str::to_owned);
        let dyn_host: Rc<dyn AttributeHost> = host.clone();
        let points = Rc::new(AnimatedPoints::new(
            Rc::downgrade(&dyn_host),
            AttrName::intern("points"),
            config,
        ));
        *host.live.borrow_mut() = Rc::downgrade(&points);
        (host, points)
    }

    #[test]
    fn guard_restores_previous_state() {
        let flag = Cell::new(false);
        {
            let _outer = WriteBackGuard::enter(&flag);
            {
                let _inner = WriteBackGuard::enter(&flag);
                assert!(flag.get());
            }
            assert!(flag.get(), "inner guard must not release the outer one");
        }
        assert!(!flag.get());
    }

    #[test]
    fn append_writes_once_without_invalidating() {
        let (host, points) = setup(Some("1,2"), ListConfig::default());
        let base = points.base_view();

        base.append(Point::new(3.0, 4.0)).unwrap();

        assert_eq!(host.writes.get(), 1);
        assert_eq!(host.value.borrow().as_deref(), Some("1,2 3,4"));
        assert!(
            points.base.borrow().as_ref().is_some_and(BaseList::is_valid),
            "own write-back must not invalidate"
        );
        assert!(!points.changing.get());
    }

    #[test]
    fn external_change_invalidates() {
        let (host, points) = setup(Some("1,2"), ListConfig::default());
        assert_eq!(points.base_view().len().unwrap(), 1);

        *host.value.borrow_mut() = Some("1,2 3,4".to_owned());
        points.attr_modified("1,2", "1,2 3,4");

        assert_eq!(points.base_view().len().unwrap(), 2);
    }

    #[test]
    fn change_before_first_access_is_harmless() {
        let (_host, points) = setup(Some("1,2"), ListConfig::default());
        points.attr_modified("", "1,2");
        assert!(points.base.borrow().is_none());
    }

    #[test]
    fn readonly_check_precedes_host_lookup() {
        let points = AnimatedPoints::new(
            Weak::<RecordingHost>::new(),
            AttrName::intern("points"),
            ListConfig::default(),
        );
        let err = points.animated_view().clear().unwrap_err();
        assert!(matches!(err, LiveAttributeError::ReadOnly { .. }));

        let err = points.base_view().clear().unwrap_err();
        assert!(matches!(err, LiveAttributeError::HostDropped { .. }));
    }

    #[test]
    fn listeners_follow_override_state() {
        let (_host, points) = setup(Some("1,2"), ListConfig::default());
        let base_hits = Rc::new(Cell::new(0));
        let anim_hits = Rc::new(Cell::new(0));
        let (b, a) = (Rc::clone(&base_hits), Rc::clone(&anim_hits));
        let _base_sub = points.on_base_changed(move |_| b.set(b.get() + 1));
        let _anim_sub = points.on_animated_changed(move |_| a.set(a.get() + 1));

        points.attr_modified("1,2", "1,2");
        assert_eq!((base_hits.get(), anim_hits.get()), (1, 1));

        points.install_override(&[0.0, 0.0]);
        assert_eq!((base_hits.get(), anim_hits.get()), (1, 2));

        // Base changes are hidden behind the override.
        points.attr_modified("1,2", "1,2");
        assert_eq!((base_hits.get(), anim_hits.get()), (2, 2));

        points.clear_override();
        assert_eq!((base_hits.get(), anim_hits.get()), (2, 3));
    }

    #[test]
    fn override_text_ignores_flag() {
        let (_host, points) = setup(Some("1,2"), ListConfig::default().with_separator(", "));
        assert_eq!(points.override_text(), "");
        points.install_override(&[5.0, 6.0, 7.0, 8.0]);
        points.clear_override();
        assert_eq!(points.override_text(), "5,6, 7,8");
        assert_eq!(points.animated_view().value_as_string().unwrap(), "1,2");
    }
}
