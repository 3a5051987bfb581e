use crate::constants::{BELL_ID, CLICK_INTENSITY, ENABLE_MOTION_ID};
use crate::core::{should_ring, KeyTarget};
use crate::trigger::BellTrigger;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, trigger: &Rc<BellTrigger>) {
    let target = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok());
    let (tag, id) = target
        .as_ref()
        .map(|el| (el.tag_name(), el.id()))
        .unwrap_or_default();
    let key_target = target.as_ref().map(|_| KeyTarget { tag: &tag, id: &id });
    if !should_ring(
        &ev.key(),
        ev.repeat(),
        key_target,
        BELL_ID,
        &[ENABLE_MOTION_ID],
    ) {
        return;
    }
    trigger.player().resume();
    trigger.ring(CLICK_INTENSITY);
    ev.prevent_default();
}

pub fn wire_ring_keys(trigger: Rc<BellTrigger>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &trigger);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
