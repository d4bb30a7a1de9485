use crate::constants::{ACTIVE_CLASS, CURSOR_SELECTOR, FOLLOWER_SELECTOR, HOVER_SELECTOR};
use crate::dom;
use folio_core::{css_position, TrailSequencer, FOLLOWER_DELAY};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_cursor(document: &web::Document) -> anyhow::Result<()> {
    let cursor = dom::query(document, CURSOR_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", CURSOR_SELECTOR))?;
    let follower = dom::query(document, FOLLOWER_SELECTOR);
    let trail = Rc::new(RefCell::new(TrailSequencer::default()));

    {
        let cursor = cursor.clone();
        let follower = follower.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let (left, top) =
                css_position(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            dom::set_style_px(&cursor, &left, &top);

            if let Some(follower) = follower.clone() {
                let seq = trail.borrow_mut().issue();
                let trail = trail.clone();
                dom::set_timeout(FOLLOWER_DELAY, move || {
                    if trail.borrow_mut().accept(seq) {
                        dom::set_style_px(&follower, &left, &top);
                    }
                });
            }
        });
    }

    let targets = dom::query_all(document, HOVER_SELECTOR);
    for el in &targets {
        for (event, active) in [("mouseenter", true), ("mouseleave", false)] {
            let cursor = cursor.clone();
            let follower = follower.clone();
            dom::listen(el, event, move |_: web::MouseEvent| {
                set_active(&cursor, active);
                if let Some(f) = &follower {
                    set_active(f, active);
                }
            });
        }
    }
    log::info!(
        "[cursor] ready, follower={} hover targets={}",
        follower.is_some(),
        targets.len()
    );
    Ok(())
}

fn set_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    if active {
        _ = cl.add_1(ACTIVE_CLASS);
    } else {
        _ = cl.remove_1(ACTIVE_CLASS);
    }
}
