use crate::category::{BinCategory, TrashCategory};

/// Notifications for whatever plays sounds and shows messages. All hooks are
/// fire-and-forget.
pub trait Feedback {
    fn on_pickup(&mut self, _category: TrashCategory) {}
    fn on_correct(&mut self, _bin: BinCategory, _score: u32) {}
    fn on_incorrect(&mut self, _category: TrashCategory) {}
    fn on_batch_spawned(&mut self, _count: usize) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullFeedback;

impl Feedback for NullFeedback {}
