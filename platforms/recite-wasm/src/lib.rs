use recite_engine::clues::ClueRequest;
use recite_engine::view::{Progress, SpanView, TokenView};
use recite_engine::{Trainer, TrainerConfig};
use recite_protocol::{DifficultyLevel, Generation, GroupId};
use recite_segmenter::Boundaries;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Everything the page needs to redraw, sent back to JavaScript in one go.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub generation: Generation,
    pub level: DifficultyLevel,
    pub boundaries: Boundaries,
    pub tokens: Vec<TokenView>,
    pub spans: Vec<SpanView>,
    pub progress: Progress,
}

impl Snapshot {
    pub fn of(trainer: &Trainer) -> Self {
        let engine = trainer.engine();
        Self {
            generation: engine.generation(),
            level: trainer.level(),
            boundaries: engine.segmentation().boundaries(),
            tokens: engine.tokens(),
            spans: engine.spans(),
            progress: engine.progress(),
        }
    }
}

fn js_error(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// A practice session running in the browser.
///
/// Clue generation happens on the JavaScript side: take a request with
/// `clue_request`, run it however the page likes, and hand the array of
/// clues back to `apply_clue_response` together with the request. Answers
/// for a superseded passage or level are dropped.
#[wasm_bindgen]
pub struct ReciteEngine {
    trainer: Trainer,
}

#[wasm_bindgen]
impl ReciteEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReciteEngine, JsValue> {
        let config: TrainerConfig = if config.is_undefined() || config.is_null() {
            TrainerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            trainer: Trainer::new(config),
        })
    }

    /// Returns the current generation.
    pub fn set_text(&mut self, text: &str) -> u32 {
        self.trainer.set_text(text).get()
    }

    pub fn set_level(&mut self, level: u8) -> Result<u32, JsValue> {
        let level = DifficultyLevel::try_from(level).map_err(js_error)?;
        Ok(self.trainer.set_level(level).get())
    }

    /// New state of the span, or `undefined` for an unknown group.
    pub fn activate(&mut self, group: u32) -> Result<JsValue, JsValue> {
        let state = self.trainer.activate(GroupId(group));
        Ok(serde_wasm_bindgen::to_value(&state)?)
    }

    pub fn reset_all(&mut self) {
        self.trainer.reset_all();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&Snapshot::of(&self.trainer))?)
    }

    /// `null` when nothing is left to ask for, or a request was already
    /// handed out for this generation.
    pub fn clue_request(&mut self) -> Result<JsValue, JsValue> {
        match self.trainer.take_clue_request() {
            Some(request) => Ok(serde_wasm_bindgen::to_value(&request)?),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn apply_clue_response(&mut self, request: JsValue, clues: JsValue) -> Result<JsValue, JsValue> {
        let request: ClueRequest = serde_wasm_bindgen::from_value(request)?;
        let clues: Vec<String> = serde_wasm_bindgen::from_value(clues)?;
        let outcome = self.trainer.apply_batch(request.answer(clues));
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }
}
