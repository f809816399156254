//! Test utilities for Scenecraft tests.
//!
//! This module provides a mock driver and form/response fixtures.

#![allow(dead_code)]

use scenecraft::{FormState, TimedEntry};
use serde_json::{Value, json};

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockPromptDriver};

/// The Knight example form: one action, one dialogue line, no image.
pub fn knight_form() -> FormState {
    FormState::builder()
        .actions(vec![TimedEntry::new("0", "2", "Knight walks")])
        .timed_dialogues(vec![TimedEntry::new("0", "2", "Mau pergi kemana?")])
        .build()
        .expect("Failed to build knight form")
}

/// A form with only blank entries and no image.
pub fn empty_form() -> FormState {
    FormState::builder()
        .actions(vec![TimedEntry::new("0", "2", "   ")])
        .timed_dialogues(vec![TimedEntry::default()])
        .build()
        .expect("Failed to build empty form")
}

/// A complete, schema-valid model reply.
pub fn valid_prompt_json() -> Value {
    json!({
        "prompt": "A lone knight walks through a misty forest and asks where they are going.",
        "keyword": ["knight", "forest", "mist"],
        "style": "cinematic realism",
        "tone": "mysterious",
        "camera": "ARRI Alexa",
        "motion": "slow tracking shot",
        "angle": "eye level",
        "lens": "35mm",
        "lighting": "soft diffused morning light",
        "audio": "footsteps on leaves, a voice asks \"Mau pergi kemana?\"",
        "setting": "medieval fantasy",
        "place": "misty forest path",
        "time": "dawn",
        "characters": ["a knight in worn plate armor"],
        "plot_point": "The knight walks and asks \"Mau pergi kemana?\"",
        "duration_second": 2,
        "aspect_ratio": "16:9",
        "negative_prompt": "blurry, low quality, text, watermark"
    })
}
