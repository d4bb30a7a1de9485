//! Page chrome decisions: menu state, in-page anchors, the contact form stub
//! and the reveal-on-scroll threshold.

use crate::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon classes to (remove, add) on the hamburger icon.
    pub fn icon_classes(&self) -> (&'static str, &'static str) {
        if self.open {
            (ICON_MENU_CLOSED, ICON_MENU_OPEN)
        } else {
            (ICON_MENU_OPEN, ICON_MENU_CLOSED)
        }
    }
}

/// Element id an in-page anchor points at.
///
/// `"#about"` gives `Some("about")`; a bare `"#"`, an empty href or a link to
/// another page gives `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Resolve an anchor click to the element to scroll to. `lookup` is only
/// asked for real fragment ids; `None` means the click scrolls nowhere.
pub fn scroll_target<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    anchor_target(href).and_then(lookup)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitFeedback {
    Banner,
    Alert,
}

/// What the contact form handler can do to the page. There is deliberately
/// no way to send anything anywhere.
pub trait ContactForm {
    fn has_success_banner(&self) -> bool;
    fn show_success_banner(&mut self);
    fn alert(&mut self, message: &str);
    fn reset(&mut self);
}

pub fn submit_contact<F: ContactForm>(form: &mut F) -> SubmitFeedback {
    let feedback = if form.has_success_banner() {
        form.show_success_banner();
        SubmitFeedback::Banner
    } else {
        form.alert(THANK_YOU_MESSAGE);
        SubmitFeedback::Alert
    };
    form.reset();
    feedback
}

#[inline]
pub fn should_reveal(is_intersecting: bool, ratio: f64) -> bool {
    // observers report the crossing ratio with float noise
    is_intersecting && ratio + 1e-3 >= REVEAL_THRESHOLD
}
