//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::__reexports::send_wrapper::SendWrapper;

use crate::focus::DomFocusTracker;

/// Focus tracker shared between row actions (capture) and the app shell
/// (restore after re-render).
///
/// `provide_context` requires `Send + Sync`; the tracker is `Rc`/`RefCell`
/// backed and stays on the single CSR thread, so it is wrapped in
/// `SendWrapper` (access from another thread would panic, which never
/// happens in the browser).
#[derive(Clone)]
pub struct FocusContext(pub SendWrapper<Rc<DomFocusTracker>>);

pub fn use_focus_tracker() -> FocusContext {
    expect_context::<FocusContext>()
}
