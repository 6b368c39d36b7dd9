use crate::constants::{COMBINE_PANEL_ID, HIDDEN_CLASS, STATUS_CLEAR_MS, STATUS_ID};
use crate::dom;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Bumped per message so an older timeout never clears a newer one.
    static STATUS_SEQ: Cell<u32> = Cell::new(0);
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_combination_panel(document: &web::Document, open: bool) {
    if open {
        show(document, COMBINE_PANEL_ID);
    } else {
        hide(document, COMBINE_PANEL_ID);
    }
}

/// Show a transient status line; it clears itself after a few seconds.
pub fn show_status(document: &web::Document, message: &str) {
    dom::set_text(document, STATUS_ID, message);
    show(document, STATUS_ID);

    let seq = STATUS_SEQ.with(|s| {
        s.set(s.get().wrapping_add(1));
        s.get()
    });
    let Some(window) = web::window() else {
        return;
    };
    let clear = Closure::once_into_js(move || {
        if STATUS_SEQ.with(|s| s.get()) != seq {
            return;
        }
        if let Some(doc) = dom::window_document() {
            clear_status(&doc);
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.unchecked_ref(),
        STATUS_CLEAR_MS,
    );
}

pub fn clear_status(document: &web::Document) {
    dom::set_text(document, STATUS_ID, "");
    hide(document, STATUS_ID);
}
