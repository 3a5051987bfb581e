use crate::constants::{BELL_ID, CLICK_INTENSITY};
use crate::dom;
use crate::trigger::BellTrigger;
use std::rc::Rc;
use web_sys as web;

// Tap/click is the alternate trigger path and always rings at a fixed strength.
pub fn wire_bell_click(document: &web::Document, trigger: Rc<BellTrigger>) {
    dom::add_click_listener(document, BELL_ID, move || {
        trigger.player().resume();
        trigger.ring(CLICK_INTENSITY);
        log::info!("[click] ring");
    });
}
