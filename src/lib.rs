#![cfg(target_arch = "wasm32")]
use crate::core::{Bell, BellParams, DetectorParams, MotionDetector};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod haptics;
mod overlay;
mod trigger;
mod visual;

use constants::{BELL_ID, RIPPLE_LAYER_ID, SOUND_URL};
use trigger::BellTrigger;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shake-bell starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let visuals = visual::BellVisuals::new(&document, BELL_ID, RIPPLE_LAYER_ID)?;
    let player = Rc::new(audio::BellPlayer::new(SOUND_URL));
    // Only seeds visual ripple jitter
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let trigger = Rc::new(BellTrigger::new(
        Bell::new(BellParams::default(), seed),
        player.clone(),
        visuals,
    ));

    events::wire_bell_click(&document, trigger.clone());
    events::wire_ring_keys(trigger.clone());

    let detector = Rc::new(RefCell::new(MotionDetector::new(DetectorParams::default())));
    {
        let trigger = trigger.clone();
        detector.borrow_mut().subscribe(move |shake| {
            log::debug!(
                "[motion] shake delta={:.1} intensity={:.2}",
                shake.delta,
                shake.intensity
            );
            trigger.ring(shake.intensity);
        });
    }
    events::wire_motion(&document, detector, player);

    Ok(())
}
