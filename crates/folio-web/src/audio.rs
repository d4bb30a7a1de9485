use crate::constants::{HOVER_SELECTOR, SOUND_ICON_SELECTOR, SOUND_TOGGLE_ID};
use crate::dom;
use folio_core::{mute_icon_classes, SoundBoard, ToneSink, ToneSpec, Waveform};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct WebAudioSink {
    ctx: web::AudioContext,
}

impl WebAudioSink {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl ToneSink for WebAudioSink {
    fn ensure_running(&mut self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    fn play(&mut self, tone: &ToneSpec) {
        if let Err(e) = schedule_tone(&self.ctx, tone) {
            log::warn!("[sound] tone not scheduled: {:?}", e);
        }
    }
}

// Oscillator -> gain -> destination, both params ramped exponentially and the
// source stopped when the envelope ends.
fn schedule_tone(ctx: &web::AudioContext, tone: &ToneSpec) -> Result<(), wasm_bindgen::JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    let gain = web::GainNode::new(ctx)?;
    osc.set_type(match tone.waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
    });

    let now = ctx.current_time();
    let end = now + tone.duration_sec;
    let freq = osc.frequency();
    freq.set_value_at_time(tone.start_hz, now)?;
    freq.exponential_ramp_to_value_at_time(tone.end_hz, end)?;
    let level = gain.gain();
    level.set_value_at_time(tone.start_gain, now)?;
    level.exponential_ramp_to_value_at_time(tone.end_gain, end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(now)?;
    osc.stop_with_when(end)?;
    Ok(())
}

/// Sound toggle button plus hover/click cues on every `[data-hover]` element.
pub fn wire_sound(document: &web::Document) -> anyhow::Result<()> {
    let toggle = dom::require_by_id(document, SOUND_TOGGLE_ID)?;
    let board = Rc::new(RefCell::new(SoundBoard::new(WebAudioSink::new()?)));

    let board_toggle = board.clone();
    let toggle_el = toggle.clone();
    dom::add_click_listener(document, SOUND_TOGGLE_ID, move || {
        let muted = board_toggle.borrow_mut().toggle_mute();
        let (remove, add) = mute_icon_classes(muted);
        dom::swap_child_class(&toggle_el, SOUND_ICON_SELECTOR, remove, add);
        log::info!("[sound] muted={}", muted);
    });

    let targets = dom::query_all(document, HOVER_SELECTOR);
    for el in &targets {
        let b = board.clone();
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| {
            b.borrow_mut().play_hover();
        });
        let b = board.clone();
        dom::listen(el, "click", move |_: web::MouseEvent| {
            b.borrow_mut().play_click();
        });
    }
    log::info!("[sound] ready, {} hover targets", targets.len());
    Ok(())
}
