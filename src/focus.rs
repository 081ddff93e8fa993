//! Scroll-Focus Tracking
//!
//! Keeps the row a user just acted on visually stable across list
//! re-renders: the row element is captured at click time and scrolled back
//! into view (centered, no animation) once the updated DOM is committed.

use std::cell::RefCell;

/// Opaque handle to an on-screen row.
pub trait RowHandle {
    /// Center the row in the viewport without animation. A row that has
    /// left the document is a silent no-op.
    fn scroll_into_center(&self);
}

/// Resolves an item id to its on-screen row, if one is rendered.
pub trait RowLocator {
    type Handle: RowHandle;

    fn locate(&self, id: u32) -> Option<Self::Handle>;
}

/// Last-action slot: filled on user intent, drained after the re-render.
pub struct FocusTracker<L: RowLocator> {
    locator: L,
    slot: RefCell<Option<L::Handle>>,
}

impl<L: RowLocator> FocusTracker<L> {
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            slot: RefCell::new(None),
        }
    }

    /// Remember the row for `id` as the last acted-upon element. Must run
    /// synchronously with the user intent, before the row can disappear.
    pub fn capture(&self, id: u32) {
        *self.slot.borrow_mut() = self.locator.locate(id);
    }

    /// Scroll the remembered row back into view, then forget it. Nothing
    /// remembered means nothing happens.
    pub fn restore(&self) {
        if let Some(handle) = self.slot.borrow_mut().take() {
            handle.scroll_into_center();
        }
    }
}

/// DOM id carried by every rendered row, keyed by item id.
pub fn row_dom_id(id: u32) -> String {
    format!("item-{id}")
}

/// Locator over the real document.
#[derive(Clone, Copy, Default)]
pub struct DomRowLocator;

impl RowLocator for DomRowLocator {
    type Handle = web_sys::Element;

    fn locate(&self, id: u32) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(&row_dom_id(id))
    }
}

impl RowHandle for web_sys::Element {
    fn scroll_into_center(&self) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Auto);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub type DomFocusTracker = FocusTracker<DomRowLocator>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    struct FakeHandle {
        id: u32,
        scrolled: Rc<RefCell<Vec<u32>>>,
    }

    impl RowHandle for FakeHandle {
        fn scroll_into_center(&self) {
            self.scrolled.borrow_mut().push(self.id);
        }
    }

    struct FakeLocator {
        rows: HashSet<u32>,
        scrolled: Rc<RefCell<Vec<u32>>>,
    }

    impl RowLocator for FakeLocator {
        type Handle = FakeHandle;

        fn locate(&self, id: u32) -> Option<FakeHandle> {
            self.rows.contains(&id).then(|| FakeHandle {
                id,
                scrolled: Rc::clone(&self.scrolled),
            })
        }
    }

    fn tracker(rows: &[u32]) -> (FocusTracker<FakeLocator>, Rc<RefCell<Vec<u32>>>) {
        let scrolled = Rc::new(RefCell::new(Vec::new()));
        let locator = FakeLocator {
            rows: rows.iter().copied().collect(),
            scrolled: Rc::clone(&scrolled),
        };
        (FocusTracker::new(locator), scrolled)
    }

    #[test]
    fn capture_then_restore_scrolls_once_and_drains_the_slot() {
        let (tracker, scrolled) = tracker(&[3]);

        tracker.capture(3);
        tracker.restore();
        tracker.restore();

        assert_eq!(*scrolled.borrow(), vec![3]);
    }

    #[test]
    fn restore_without_capture_is_a_noop() {
        let (tracker, scrolled) = tracker(&[1]);

        tracker.restore();

        assert!(scrolled.borrow().is_empty());
    }

    #[test]
    fn capturing_a_missing_row_is_a_noop() {
        let (tracker, scrolled) = tracker(&[1]);

        tracker.capture(9);
        tracker.restore();

        assert!(scrolled.borrow().is_empty());
    }

    #[test]
    fn a_new_capture_replaces_the_previous_one() {
        let (tracker, scrolled) = tracker(&[1, 2]);

        tracker.capture(1);
        tracker.capture(2);
        tracker.restore();

        assert_eq!(*scrolled.borrow(), vec![2]);
    }
}
