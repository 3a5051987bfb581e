use crate::audio::BellPlayer;
use crate::constants::{
    ENABLE_MOTION_ID, STATUS_ASK_MOTION, STATUS_NO_SENSOR, STATUS_READY, STATUS_TAP_ONLY,
};
use crate::core::{MotionDetector, MotionSample, Permission};
use crate::{dom, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type ListenerSlot = Rc<RefCell<Option<MotionListener>>>;

/// A `devicemotion` subscription that can be detached again.
pub struct MotionListener {
    closure: Closure<dyn FnMut(web::DeviceMotionEvent)>,
}

impl MotionListener {
    fn attach(detector: Rc<RefCell<MotionDetector>>) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            if let Some(sample) = sample_from_event(&ev) {
                detector.borrow_mut().process(sample, Instant::now());
            }
        }) as Box<dyn FnMut(_)>);
        match window
            .add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref())
        {
            Ok(()) => Some(Self { closure }),
            Err(e) => {
                log::error!("[motion] devicemotion listener error: {:?}", e);
                None
            }
        }
    }

    pub fn detach(self) {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "devicemotion",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Events without gravity-inclusive acceleration are skipped; a missing axis reads as 0.
#[inline]
pub fn sample_from_event(ev: &web::DeviceMotionEvent) -> Option<MotionSample> {
    let acc = ev.acceleration_including_gravity()?;
    Some(MotionSample::new(
        acc.x().unwrap_or(0.0),
        acc.y().unwrap_or(0.0),
        acc.z().unwrap_or(0.0),
    ))
}

pub fn motion_api_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("DeviceMotionEvent"))
        .unwrap_or(false)
}

// iOS-style consent: `DeviceMotionEvent.requestPermission()` returning a promise.
fn permission_request_fn() -> Option<(JsValue, js_sys::Function)> {
    let ctor = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("DeviceMotionEvent"))
        .ok()?;
    let f = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    f.dyn_into::<js_sys::Function>().ok().map(|f| (ctor, f))
}

/// Invoke `requestPermission` synchronously so the call stays inside the user
/// gesture; `Err` carries an immediate answer.
fn begin_permission_request() -> Result<js_sys::Promise, Permission> {
    let Some((ctor, f)) = permission_request_fn() else {
        return Err(Permission::NotRequired);
    };
    match f.call0(&ctor).map(|p| p.dyn_into::<js_sys::Promise>()) {
        Ok(Ok(p)) => Ok(p),
        Ok(Err(v)) => {
            log::warn!("[motion] requestPermission returned {:?}", v);
            Err(Permission::Denied)
        }
        Err(e) => {
            log::warn!("[motion] requestPermission threw {:?}", e);
            Err(Permission::Denied)
        }
    }
}

async fn await_permission(promise: js_sys::Promise) -> Permission {
    match JsFuture::from(promise).await {
        Ok(v) if v.as_string().as_deref() == Some("granted") => Permission::Granted,
        Ok(v) => {
            log::info!("[motion] permission answer {:?}", v);
            Permission::Denied
        }
        Err(e) => {
            log::warn!("[motion] permission request rejected: {:?}", e);
            Permission::Denied
        }
    }
}

fn apply_permission(
    document: &web::Document,
    detector: &Rc<RefCell<MotionDetector>>,
    slot: &ListenerSlot,
    permission: Permission,
) {
    overlay::hide(document);
    let started = {
        let mut d = detector.borrow_mut();
        d.set_permission(permission);
        d.start()
    };
    match started {
        Ok(()) => {
            attach_once(detector, slot);
            overlay::set_status(document, STATUS_READY);
            log::info!("[motion] listening ({:?})", permission);
        }
        Err(e) => {
            log::warn!("[motion] {}; tap-only mode", e);
            overlay::set_status(document, STATUS_TAP_ONLY);
        }
    }
}

fn attach_once(detector: &Rc<RefCell<MotionDetector>>, slot: &ListenerSlot) {
    if slot.borrow().is_none() {
        let listener = MotionListener::attach(detector.clone());
        *slot.borrow_mut() = listener;
    }
}

// Detach on pagehide; re-attach on pageshow if consent still holds.
fn wire_page_lifecycle(detector: Rc<RefCell<MotionDetector>>, slot: ListenerSlot) {
    let Some(window) = web::window() else {
        return;
    };

    let det_hide = detector.clone();
    let slot_hide = slot.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        det_hide.borrow_mut().stop();
        if let Some(listener) = slot_hide.borrow_mut().take() {
            listener.detach();
            log::info!("[motion] detached");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move || {
        if detector.borrow_mut().start().is_ok() {
            attach_once(&detector, &slot);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}

/// Start shake detection, going through the consent overlay where required.
/// Without a sensor or consent the page stays tap-only.
pub fn wire_motion(
    document: &web::Document,
    detector: Rc<RefCell<MotionDetector>>,
    player: Rc<BellPlayer>,
) {
    if !motion_api_available() {
        log::info!("[motion] DeviceMotionEvent unsupported; tap-only mode");
        overlay::set_status(document, STATUS_NO_SENSOR);
        return;
    }

    let slot: ListenerSlot = Rc::new(RefCell::new(None));
    wire_page_lifecycle(detector.clone(), slot.clone());

    if permission_request_fn().is_none() {
        apply_permission(document, &detector, &slot, Permission::NotRequired);
        return;
    }

    overlay::show(document);
    overlay::set_status(document, STATUS_ASK_MOTION);
    let doc = document.clone();
    dom::add_click_listener(document, ENABLE_MOTION_ID, move || {
        player.resume();
        let doc = doc.clone();
        let detector = detector.clone();
        let slot = slot.clone();
        match begin_permission_request() {
            Ok(promise) => spawn_local(async move {
                let permission = await_permission(promise).await;
                apply_permission(&doc, &detector, &slot, permission);
            }),
            Err(permission) => apply_permission(&doc, &detector, &slot, permission),
        }
    });
}
