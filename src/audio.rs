use crate::constants::MASTER_GAIN;
use crate::core::{synthesize_bell, ToneParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

enum SoundState {
    Idle,
    Loading,
    Ready(web::AudioBuffer),
    Unavailable,
}

#[derive(Clone)]
struct Output {
    ctx: web::AudioContext,
    master_gain: web::GainNode,
}

/// Lazily-initialized bell sound output.
///
/// The `AudioContext` is created on first use (browsers only allow audible
/// contexts after a user gesture). The bundled asset is fetched and decoded
/// once; if that fails a synthesized tone takes its place. The resulting
/// buffer is shared by every subsequent play.
pub struct BellPlayer {
    url: String,
    output: RefCell<Option<Output>>,
    context_failed: Cell<bool>,
    sound: RefCell<SoundState>,
}

impl BellPlayer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output: RefCell::new(None),
            context_failed: Cell::new(false),
            sound: RefCell::new(SoundState::Idle),
        }
    }

    /// Resume a suspended context; call from user-gesture handlers.
    pub fn resume(&self) {
        if let Some(out) = self.output.borrow().as_ref() {
            _ = out.ctx.resume();
        }
    }

    /// Play the bell at `volume`. Never fails; problems are logged.
    pub fn play(self: &Rc<Self>, volume: f32) {
        let Some(out) = self.ensure_output() else {
            return;
        };
        _ = out.ctx.resume();

        let ready = match &*self.sound.borrow() {
            SoundState::Ready(buf) => Some(buf.clone()),
            SoundState::Loading => {
                log::debug!("[audio] sound still loading; ring dropped");
                return;
            }
            SoundState::Unavailable => return,
            SoundState::Idle => None,
        };

        match ready {
            Some(buf) => {
                _ = play_buffer(&out, &buf, volume);
            }
            None => {
                *self.sound.borrow_mut() = SoundState::Loading;
                let this = self.clone();
                spawn_local(async move {
                    match load_or_synthesize(&out.ctx, &this.url).await {
                        Some(buf) => {
                            *this.sound.borrow_mut() = SoundState::Ready(buf.clone());
                            _ = play_buffer(&out, &buf, volume);
                        }
                        None => {
                            log::error!("[audio] no bell sound available; ringing silently");
                            *this.sound.borrow_mut() = SoundState::Unavailable;
                        }
                    }
                });
            }
        }
    }

    fn ensure_output(&self) -> Option<Output> {
        if let Some(out) = self.output.borrow().as_ref() {
            return Some(out.clone());
        }
        if self.context_failed.get() {
            return None;
        }
        match build_output() {
            Ok(out) => {
                log::info!("[audio] context ready at {} Hz", out.ctx.sample_rate());
                *self.output.borrow_mut() = Some(out.clone());
                Some(out)
            }
            Err(e) => {
                log::error!("[audio] AudioContext unavailable: {:#}", e);
                self.context_failed.set(true);
                None
            }
        }
    }
}

fn build_output() -> anyhow::Result<Output> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let master_gain = create_gain(&ctx, MASTER_GAIN, "Master")
        .map_err(|_| anyhow::anyhow!("master gain unavailable"))?;
    master_gain
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(Output { ctx, master_gain })
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

async fn load_or_synthesize(ctx: &web::AudioContext, url: &str) -> Option<web::AudioBuffer> {
    match fetch_and_decode(ctx, url).await {
        Ok(buf) => {
            log::info!("[audio] loaded {} ({:.2}s)", url, buf.duration());
            Some(buf)
        }
        Err(e) => {
            log::warn!("[audio] {} unavailable ({:#}); using synthesized tone", url, e);
            match synthesize_fallback(ctx) {
                Ok(buf) => Some(buf),
                Err(e) => {
                    log::error!("[audio] fallback synthesis failed: {:#}", e);
                    None
                }
            }
        }
    }
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let body = resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body: js_sys::ArrayBuffer = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("read failed: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not an ArrayBuffer: {:?}", e))?;
    let decoded = ctx
        .decode_audio_data(&body)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode failed: {:?}", e))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("not an AudioBuffer: {:?}", e))
}

/// Render the procedural bell into a mono buffer at the context's sample rate.
pub fn synthesize_fallback(ctx: &web::AudioContext) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let mut samples = synthesize_bell(sr, &ToneParams::default());
    if samples.is_empty() {
        anyhow::bail!("no samples at {} Hz", sr);
    }
    let buf = ctx
        .create_buffer(1, samples.len() as u32, sr)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    buf.copy_to_channel(&mut samples, 0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[audio] synthesized {:.2}s fallback tone", buf.duration());
    Ok(buf)
}

fn play_buffer(out: &Output, buffer: &web::AudioBuffer, volume: f32) -> Result<(), ()> {
    let src = out
        .ctx
        .create_buffer_source()
        .map_err(|e| log::error!("AudioBufferSourceNode error: {:?}", e))?;
    src.set_buffer(Some(buffer));
    let gain = create_gain(&out.ctx, volume, "Ring")?;
    _ = src.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&out.master_gain);
    src.start()
        .map_err(|e| log::error!("[audio] playback error: {:?}", e))?;
    log::debug!("[audio] ring at volume {:.2}", volume);
    Ok(())
}
