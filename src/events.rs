use crate::constants::*;
use crate::frame::{self, SharedSession};
use crate::{dom, input, overlay};
use instant::Instant;
use soundscape_core::{SoundscapeError, ToggleOutcome};
use wasm_bindgen::JsCast;
use web_sys as web;

fn refresh(document: &web::Document, session: &SharedSession) {
    let snap = session.borrow().snapshot(Instant::now());
    frame::render(document, &snap);
}

pub fn wire_all(document: &web::Document, session: &SharedSession) {
    wire_sound_tiles(document, session);
    wire_volume(document, session);
    wire_timer(document, session);
    wire_combination_panel(document, session);
}

fn wire_sound_tiles(document: &web::Document, session: &SharedSession) {
    for (el, id) in dom::elements_with_attr(document, SOUND_ATTR) {
        let session = session.clone();
        let doc = document.clone();
        dom::add_listener(&el, "click", move |_| {
            let outcome = session.borrow_mut().toggle_by_id(&id);
            match outcome {
                ToggleOutcome::Failed(c) => {
                    overlay::show_status(&doc, &format!("Couldn't start {}", c.label()))
                }
                ToggleOutcome::Ignored => log::warn!("[ui] unknown sound tile {:?}", id),
                _ => overlay::clear_status(&doc),
            }
            refresh(&doc, &session);
        });
    }
}

fn wire_volume(document: &web::Document, session: &SharedSession) {
    let Some(slider) = dom::input_by_id(document, VOLUME_ID) else {
        log::warn!("[dom] missing #{}", VOLUME_ID);
        return;
    };
    slider.set_value(&input::volume_to_slider(session.borrow().volume()));

    let session = session.clone();
    let doc = document.clone();
    let target = slider.clone();
    dom::add_listener(&slider, "input", move |_| {
        if let Some(v) = input::slider_to_volume(&target.value()) {
            session.borrow_mut().set_volume(v);
            dom::set_text(&doc, VOLUME_VALUE_ID, &input::volume_label(v));
        }
    });
}

fn wire_timer(document: &web::Document, session: &SharedSession) {
    let Some(select) = document
        .get_element_by_id(TIMER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        log::warn!("[dom] missing #{}", TIMER_ID);
        return;
    };
    let session = session.clone();
    let doc = document.clone();
    let target = select.clone();
    dom::add_listener(&select, "change", move |_| {
        match input::parse_timer_minutes(&target.value()) {
            Some(minutes) => session.borrow_mut().arm_timer(minutes, Instant::now()),
            None => log::warn!("[ui] bad timer value {:?}", target.value()),
        }
        refresh(&doc, &session);
    });
}

fn wire_combination_panel(document: &web::Document, session: &SharedSession) {
    {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, COMBINE_TOGGLE_ID, move || {
            session.borrow_mut().toggle_combination_panel();
            refresh(&doc, &session);
        });
    }
    {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, COMBINE_CANCEL_ID, move || {
            session.borrow_mut().set_combination_panel(false);
            refresh(&doc, &session);
        });
    }
    {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, COMBINE_PLAY_ID, move || {
            let result = session.borrow_mut().commit_combination();
            match result {
                Ok(started) if started.is_empty() => {
                    overlay::show_status(&doc, "None of the selected sounds could start")
                }
                Ok(_) => overlay::clear_status(&doc),
                Err(SoundscapeError::EmptySelection) => {
                    overlay::show_status(&doc, "Pick at least one sound to combine")
                }
                Err(e) => overlay::show_status(&doc, &e.to_string()),
            }
            refresh(&doc, &session);
        });
    }

    for (el, id) in dom::elements_with_attr(document, COMBINE_ATTR) {
        let Ok(checkbox) = el.dyn_into::<web::HtmlInputElement>() else {
            continue;
        };
        let session = session.clone();
        let target = checkbox.clone();
        dom::add_listener(&checkbox, "change", move |_| {
            if !session
                .borrow_mut()
                .select_for_combination_by_id(&id, target.checked())
            {
                log::warn!("[ui] unknown combination entry {:?}", id);
            }
        });
    }
}
