#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod chrome;
mod constants;
mod cursor;
mod dom;
mod frame;
mod render;
mod typewriter;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Components are independent: one failing to wire must not stop the rest.
fn report(component: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] not started: {:?}", component, e);
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    report("cursor", cursor::wire_cursor(&document));
    chrome::decorate_hero(&document);
    report("sound", audio::wire_sound(&document));
    report("background", frame::wire_background(&document));
    report("typewriter", typewriter::wire_typewriter(&document));

    chrome::wire_menu(&document);
    chrome::set_footer_year(&document);
    chrome::wire_smooth_scroll(&document);
    report("contact", chrome::wire_contact_form(&document));
    report("reveal", chrome::wire_reveal_on_scroll(&document));
    Ok(())
}
