use crate::constants::*;
use crate::dom;
use folio_core::constants::SUCCESS_BANNER_MS;
use folio_core::{scroll_target, should_reveal, submit_contact, ContactForm, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hamburger button toggling the nav panel; any nav link closes it again.
pub fn wire_menu(document: &web::Document) {
    let (Some(button), Some(nav)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(NAV_LINKS_ID),
    ) else {
        return;
    };
    let menu = Rc::new(RefCell::new(MenuState::default()));

    {
        let menu = menu.clone();
        let button_el = button.clone();
        let nav = nav.clone();
        dom::listen(&button, "click", move |_: web::MouseEvent| {
            let mut m = menu.borrow_mut();
            m.toggle();
            apply_menu(&m, &button_el, &nav);
        });
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        let button = button.clone();
        let nav = nav.clone();
        dom::listen(&link, "click", move |_: web::MouseEvent| {
            let mut m = menu.borrow_mut();
            if m.is_open() {
                m.close();
                apply_menu(&m, &button, &nav);
            }
        });
    }
}

fn apply_menu(menu: &MenuState, button: &web::Element, nav: &web::Element) {
    _ = nav.class_list().toggle_with_force(ACTIVE_CLASS, menu.is_open());
    let (remove, add) = menu.icon_classes();
    dom::swap_child_class(button, MENU_ICON_SELECTOR, remove, add);
}

/// Same-page anchors scroll smoothly; a missing target is ignored.
pub fn wire_smooth_scroll(document: &web::Document) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = scroll_target(&href, |id| doc.get_element_by_id(id)) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

pub fn decorate_hero(document: &web::Document) {
    if let Some(title) = dom::query(document, HERO_TITLE_SELECTOR) {
        _ = title.class_list().add_1(GLITCH_CLASS);
        let text = title.text_content().unwrap_or_default();
        _ = title.set_attribute(GLITCH_TEXT_ATTR, &text);
    }
}

struct PageForm {
    form: web::HtmlFormElement,
    banner: Option<web::Element>,
}

impl ContactForm for PageForm {
    fn has_success_banner(&self) -> bool {
        self.banner.is_some()
    }

    fn show_success_banner(&mut self) {
        if let Some(banner) = &self.banner {
            _ = banner.class_list().add_1(SHOW_CLASS);
            let banner = banner.clone();
            dom::set_timeout(Duration::from_millis(SUCCESS_BANNER_MS), move || {
                _ = banner.class_list().remove_1(SHOW_CLASS);
            });
        }
    }

    fn alert(&mut self, message: &str) {
        if let Some(w) = web::window() {
            _ = w.alert_with_message(message);
        }
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(());
    };
    let form = el
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let page_form = Rc::new(RefCell::new(PageForm {
        form: form.clone(),
        banner: document.get_element_by_id(FORM_SUCCESS_ID),
    }));
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let feedback = submit_contact(&mut *page_form.borrow_mut());
        log::info!("[chrome] contact form handled: {:?}", feedback);
    });
    Ok(())
}

/// Sections fade in once a tenth of them is on screen.
pub fn wire_reveal_on_scroll(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if should_reveal(entry.is_intersecting(), entry.intersection_ratio()) {
                    let target = entry.target();
                    _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(
        folio_core::constants::REVEAL_THRESHOLD,
    ));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let sections = dom::query_all(document, SECTION_SELECTOR);
    for section in &sections {
        _ = section.class_list().add_1(FADE_IN_CLASS);
        observer.observe(section);
    }
    log::info!("[chrome] observing {} sections", sections.len());
    Ok(())
}
