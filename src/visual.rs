use crate::constants::{RIPPLE_CLASS, RIPPLE_ID_PREFIX};
use crate::core::{Ripple, RippleId, SwingStrength};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the bell animation: swing classes on the bell element and
/// short-lived ripple elements in an overlay layer.
pub struct BellVisuals {
    document: web::Document,
    bell: web::Element,
    ripple_layer: Option<web::Element>,
}

impl BellVisuals {
    pub fn new(
        document: &web::Document,
        bell_id: &str,
        ripple_layer_id: &str,
    ) -> anyhow::Result<Self> {
        let bell = document
            .get_element_by_id(bell_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", bell_id))?;
        let ripple_layer = document.get_element_by_id(ripple_layer_id);
        if ripple_layer.is_none() {
            log::warn!("[visual] missing #{}; ripples disabled", ripple_layer_id);
        }
        Ok(Self {
            document: document.clone(),
            bell,
            ripple_layer,
        })
    }

    pub fn start_swing(&self, strength: SwingStrength) {
        let cl = self.bell.class_list();
        for s in SwingStrength::ALL {
            _ = cl.remove_1(s.class_name());
        }
        // Force a reflow so re-adding the same class restarts the keyframes
        if let Some(el) = self.bell.dyn_ref::<web::HtmlElement>() {
            _ = el.offset_width();
        }
        _ = cl.add_1(strength.class_name());
    }

    pub fn end_swing(&self, strength: SwingStrength) {
        _ = self.bell.class_list().remove_1(strength.class_name());
    }

    pub fn spawn_ripple(&self, ripple: &Ripple) {
        let Some(layer) = &self.ripple_layer else {
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("[visual] ripple element error: {:?}", e);
                return;
            }
        };
        el.set_id(&ripple_dom_id(ripple.id));
        _ = el.class_list().add_1(RIPPLE_CLASS);
        let style = format!(
            "--ripple-scale:{:.3};transform:translate({:.1}px,{:.1}px);",
            ripple.scale, ripple.offset_px[0], ripple.offset_px[1]
        );
        _ = el.set_attribute("style", &style);
        _ = layer.append_child(&el);
    }

    // Removing a ripple that is already gone is fine.
    pub fn remove_ripple(&self, id: RippleId) {
        if let Some(el) = self.document.get_element_by_id(&ripple_dom_id(id)) {
            el.remove();
        }
    }
}

#[inline]
fn ripple_dom_id(id: RippleId) -> String {
    format!("{}{}", RIPPLE_ID_PREFIX, id.0)
}
