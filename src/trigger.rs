use crate::audio::BellPlayer;
use crate::core::{Bell, BellPhase};
use crate::dom;
use crate::haptics;
use crate::visual::BellVisuals;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Fans a ring out to audio, animation and haptics.
pub struct BellTrigger {
    bell: RefCell<Bell>,
    player: Rc<BellPlayer>,
    visuals: BellVisuals,
}

impl BellTrigger {
    pub fn new(bell: Bell, player: Rc<BellPlayer>, visuals: BellVisuals) -> Self {
        Self {
            bell: RefCell::new(bell),
            player,
            visuals,
        }
    }

    pub fn player(&self) -> &Rc<BellPlayer> {
        &self.player
    }

    pub fn ring(self: &Rc<Self>, intensity: f32) {
        let now = Instant::now();
        let (ev, swing_duration, live_ripples) = {
            let mut bell = self.bell.borrow_mut();
            let ev = bell.ring(intensity, now);
            (ev, bell.params.swing_duration, bell.ripples().len())
        };
        log::debug!(
            "[bell] ring intensity={:.2} swing={} audio={} ripples={}",
            ev.intensity,
            ev.swing.strength.class_name(),
            ev.playback.is_some(),
            live_ripples
        );

        if let Some(p) = ev.playback {
            self.player.play(p.volume);
        }

        self.visuals.start_swing(ev.swing.strength);
        let this = self.clone();
        let cue = ev.swing;
        dom::set_timeout(swing_duration, move || {
            if this.bell.borrow_mut().finish_swing(cue.generation) {
                this.visuals.end_swing(cue.strength);
            }
        });

        self.visuals.spawn_ripple(&ev.ripple);
        let this = self.clone();
        let ripple_id = ev.ripple.id;
        let lifetime = self.bell.borrow().ripples().lifetime();
        dom::set_timeout(lifetime, move || {
            let idle = {
                let mut bell = this.bell.borrow_mut();
                bell.remove_ripple(ripple_id);
                bell.ripples().is_empty() && bell.phase(Instant::now()) == BellPhase::Idle
            };
            this.visuals.remove_ripple(ripple_id);
            if idle {
                log::debug!("[bell] idle");
            }
        });

        haptics::vibrate(ev.vibration);
    }
}
