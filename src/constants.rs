// Front-end tuning constants: DOM hooks, marker sizing and feedback timing.

// DOM element ids
pub const CANVAS_ID: &str = "game-canvas";
pub const START_BUTTON_ID: &str = "start-btn";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const LOADING_ID: &str = "loading-screen";
pub const SCORE_ID: &str = "score";
pub const FEEDBACK_ID: &str = "feedback";

// Body class while an item is held (cursor styling)
pub const DRAGGING_CLASS: &str = "dragging";

// Background sky
pub const CLEAR_COLOR: [f64; 3] = [0.682, 0.851, 0.878];

// Visual sizing (world units, marker diameter)
pub const BIN_MARKER_SCALE: f32 = 3.0; // bins are 1.5 wide in radius
pub const TRASH_MARKER_SCALE: f32 = 1.6; // matches the pick sphere
pub const GROUND_MARKER_SCALE: f32 = 30.0;
pub const GROUND_COLOR: [f32; 3] = [0.565, 0.933, 0.565];
pub const GROUND_Y: f32 = -1.0;

// Color adjustments
pub const HELD_BRIGHTEN: f32 = 1.3;
pub const SHAKE_TINT: f32 = 0.7;

// Instance buffer capacity; ground + bins + a few batches of falling items
pub const MAX_INSTANCES: usize = 64;

// Feedback message lifetime (milliseconds)
pub const FEEDBACK_SUCCESS_MS: i32 = 1800;
pub const FEEDBACK_ERROR_MS: i32 = 1400;
pub const LOADING_HIDE_DELAY_MS: i32 = 1000;

pub const SUCCESS_MESSAGES: &[&str] = &[
    "HORE! 🎉",
    "PINTAR! ⭐",
    "HEBAT! 🌟",
    "YAY! 👏",
    "BAGUS! 💚",
    "KEREN! ✨",
    "WOW! 💫",
    "OK! 👍",
    "LUCU! 😊",
];

pub const ENCOURAGEMENT_MESSAGES: &[&str] = &[
    "AYO! 💪",
    "LAGI! 😊",
    "COBA! 🎯",
    "SEMANGAT! 🌈",
    "HMM? 🤔",
    "BISA! ⭐",
    "SINI! 🎨",
];
