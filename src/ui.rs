use crate::constants::{
    ENCOURAGEMENT_MESSAGES, FEEDBACK_ERROR_MS, FEEDBACK_ID, FEEDBACK_SUCCESS_MS, SCORE_ID,
    SUCCESS_MESSAGES,
};
use crate::dom;
use rand::prelude::*;
use trash_sort_core::{BinCategory, Feedback, TrashCategory};
use web_sys as web;

/// Score label and one-line cheer messages in the page.
pub struct DomFeedback {
    document: web::Document,
    rng: StdRng,
}

impl DomFeedback {
    pub fn new(document: web::Document, seed: u64) -> Self {
        let fb = Self {
            document,
            rng: StdRng::seed_from_u64(seed),
        };
        fb.set_score(0);
        fb
    }

    pub fn set_score(&self, score: u32) {
        if let Some(el) = self.document.get_element_by_id(SCORE_ID) {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn show_message(&self, message: &str, kind: &str, duration_ms: i32) {
        let Some(el) = self.document.get_element_by_id(FEEDBACK_ID) else {
            return;
        };
        el.set_text_content(Some(message));
        el.set_class_name(&format!("feedback show {kind}"));
        dom::after_ms(duration_ms, move || {
            _ = el.class_list().remove_1("show");
        });
    }
}

impl Feedback for DomFeedback {
    fn on_pickup(&mut self, category: TrashCategory) {
        log::debug!("[ui] holding {}", category.name());
    }

    fn on_correct(&mut self, bin: BinCategory, score: u32) {
        let msg = SUCCESS_MESSAGES.choose(&mut self.rng).copied().unwrap_or("YAY!");
        log::info!("[ui] {} bin, score {}", bin.name(), score);
        self.set_score(score);
        self.show_message(msg, "success", FEEDBACK_SUCCESS_MS);
    }

    fn on_incorrect(&mut self, _category: TrashCategory) {
        let msg = ENCOURAGEMENT_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("AYO!");
        self.show_message(msg, "error", FEEDBACK_ERROR_MS);
    }
}
