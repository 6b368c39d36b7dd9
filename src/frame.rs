use crate::audio::WebAudioPlatform;
use crate::constants::*;
use crate::{dom, input, overlay};
use instant::Instant;
use soundscape_core::{Session, SessionSnapshot, SoundCategory};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSession = Rc<RefCell<Session<WebAudioPlatform>>>;

pub struct FrameContext {
    pub session: SharedSession,
    pub document: web::Document,
    pub last: Option<SessionSnapshot>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (report, snapshot) = {
            let mut s = self.session.borrow_mut();
            let report = s.tick(now);
            (report, s.snapshot(now))
        };
        if report.timer_expired {
            overlay::show_status(&self.document, "Sleep timer finished; sounds stopped");
        }
        if self.last.as_ref() != Some(&snapshot) {
            render(&self.document, &snapshot);
            self.last = Some(snapshot);
        }
    }
}

/// Drive scheduler ticks and countdown updates from a page interval.
///
/// An interval rather than requestAnimationFrame so scheduling keeps
/// running while the tab is in the background.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        log::error!("[frame] no window; scheduler not started");
        return;
    };
    let tick = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TICK_INTERVAL_MS,
    ) {
        log::error!("[frame] setInterval failed: {:?}", e);
    }
    tick.forget();
}

/// Reflect a snapshot onto the page: tile highlights, labels, countdown and
/// the combination panel.
pub fn render(document: &web::Document, snap: &SessionSnapshot) {
    for (el, id) in dom::elements_with_attr(document, SOUND_ATTR) {
        let on = id
            .parse::<SoundCategory>()
            .map_or(false, |c| snap.active.contains(&c));
        dom::set_class(&el, ACTIVE_CLASS, on);
    }

    let labels: Vec<&str> = snap.active.iter().map(|c| c.label()).collect();
    dom::set_text(document, NOW_PLAYING_ID, &input::now_playing_text(&labels));
    dom::set_text(document, VOLUME_VALUE_ID, &input::volume_label(snap.volume));
    dom::set_text(
        document,
        TIMER_DISPLAY_ID,
        snap.countdown.as_deref().unwrap_or(""),
    );
    if snap.countdown.is_none() {
        // Expiry or a manual stop disarms; the picker should say so.
        if let Some(sel) = document
            .get_element_by_id(TIMER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
        {
            if input::parse_timer_minutes(&sel.value()) != Some(0) {
                sel.set_value("0");
            }
        }
    }

    overlay::set_combination_panel(document, snap.combination_panel_open);
    for (el, id) in dom::elements_with_attr(document, COMBINE_ATTR) {
        if let Ok(cb) = el.dyn_into::<web::HtmlInputElement>() {
            let picked = id
                .parse::<SoundCategory>()
                .map_or(false, |c| snap.pending.contains(&c));
            cb.set_checked(picked);
        }
    }
}
