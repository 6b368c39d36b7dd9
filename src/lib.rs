#![cfg(target_arch = "wasm32")]
use soundscape_core::{Session, SessionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundscape-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The context may start suspended until a gesture; the first start resumes it.
    let platform = audio::WebAudioPlatform::new()?;
    let session = Session::new(platform, SessionConfig::default())
        .map_err(|e| anyhow::anyhow!("output stage: {}", e))?;
    let session: frame::SharedSession = Rc::new(RefCell::new(session));

    events::wire_all(&document, &session);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        document,
        last: None,
    }));
    ctx.borrow_mut().frame();
    frame::start_loop(ctx);
    log::info!("[init] ready");
    Ok(())
}
