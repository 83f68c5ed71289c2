use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

const BAR_ID: &str = "top-progress";
const ACTIVE_CLASS: &str = "active";

/// Indeterminate progress indicator shown while the intro loads.
pub trait ProgressIndicator {
    fn start(&self);
    fn done(&self);
}

impl<P: ProgressIndicator + ?Sized> ProgressIndicator for Rc<P> {
    fn start(&self) {
        (**self).start()
    }

    fn done(&self) {
        (**self).done()
    }
}

/// Thin bar pinned to the top of the viewport, toggled directly on the DOM
/// so it survives the page re-rendering underneath it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopProgressBar;

impl TopProgressBar {
    fn bar(create: bool) -> Option<HtmlElement> {
        let document = window()?.document()?;
        if let Some(existing) = document.get_element_by_id(BAR_ID) {
            return existing.dyn_into::<HtmlElement>().ok();
        }
        if !create {
            return None;
        }
        let bar = document.create_element("div").ok()?;
        bar.set_id(BAR_ID);
        document.body()?.append_child(&bar).ok()?;
        bar.dyn_into::<HtmlElement>().ok()
    }
}

impl ProgressIndicator for TopProgressBar {
    fn start(&self) {
        if let Some(bar) = Self::bar(true) {
            let _ = bar.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn done(&self) {
        if let Some(bar) = Self::bar(false) {
            let _ = bar.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ProgressCall {
        Start,
        Done,
    }

    #[derive(Default)]
    pub struct RecordingProgress {
        pub calls: RefCell<Vec<ProgressCall>>,
    }

    impl ProgressIndicator for RecordingProgress {
        fn start(&self) {
            self.calls.borrow_mut().push(ProgressCall::Start);
        }

        fn done(&self) {
            self.calls.borrow_mut().push(ProgressCall::Done);
        }
    }
}
