//! Tests for response validation and pretty-printing.

use scenecraft_core::{GeneratedPrompt, PromptSchema};
use scenecraft_error::{ScenecraftErrorKind, SchemaErrorKind};
use serde_json::{Value, json};

fn complete_prompt() -> Value {
    json!({
        "prompt": "A lone knight walks through a misty forest as a villager calls out to him.",
        "keyword": ["knight", "forest", "mist"],
        "style": "cinematic",
        "tone": "mysterious",
        "camera": "ARRI Alexa",
        "motion": "slow tracking shot",
        "angle": "eye level",
        "lens": "35mm",
        "lighting": "soft diffused morning light",
        "audio": "Footsteps on wet leaves; a voice asks \"Mau pergi kemana?\"",
        "setting": "forest",
        "place": "a narrow trail between ancient oaks",
        "time": "early morning, medieval era",
        "characters": ["a knight in worn armor", "an unseen villager"],
        "plot_point": "The knight is stopped by a voice asking \"Mau pergi kemana?\"",
        "duration_second": 2,
        "aspect_ratio": "16:9",
        "negative_prompt": "blurry, low quality, modern objects"
    })
}

fn schema_kind(text: &str) -> SchemaErrorKind {
    let err = GeneratedPrompt::from_response_text(text).unwrap_err();
    match err.kind() {
        ScenecraftErrorKind::Schema(e) => e.kind.clone(),
        other => panic!("expected schema error, got {other}"),
    }
}

#[test]
fn not_json_is_rejected_before_parsing() {
    assert_eq!(schema_kind("not json"), SchemaErrorKind::NotJson);
    assert_eq!(schema_kind("```json\n{}\n```"), SchemaErrorKind::NotJson);
    assert_eq!(schema_kind(""), SchemaErrorKind::NotJson);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        schema_kind("{\"prompt\": "),
        SchemaErrorKind::MalformedJson(_)
    ));
}

#[test]
fn missing_aspect_ratio_is_a_schema_violation() {
    let mut value = complete_prompt();
    value.as_object_mut().unwrap().remove("aspect_ratio");

    let kind = schema_kind(&value.to_string());

    assert_eq!(kind, SchemaErrorKind::MissingField("aspect_ratio".to_string()));
}

#[test]
fn wrong_type_is_a_schema_violation() {
    let mut value = complete_prompt();
    value["duration_second"] = json!("2 seconds");

    let kind = schema_kind(&value.to_string());

    assert!(matches!(kind, SchemaErrorKind::WrongType { ref field, .. } if field == "duration_second"));
}

#[test]
fn top_level_array_is_not_an_object() {
    assert_eq!(schema_kind("[1, 2, 3]"), SchemaErrorKind::NotAnObject);
}

#[test]
fn schema_violations_share_the_invalid_json_message() {
    let mut value = complete_prompt();
    value.as_object_mut().unwrap().remove("aspect_ratio");

    let err = GeneratedPrompt::from_response_text(&value.to_string()).unwrap_err();

    assert_eq!(
        err.user_message(),
        "Failed to generate prompt: The API did not return a valid JSON format."
    );
}

#[test]
fn valid_response_is_pretty_printed_with_two_spaces() {
    let compact = r#"{"prompt":"p","keyword":["k"],"style":"s","tone":"t","camera":"c","motion":"m","angle":"a","lens":"l","lighting":"li","audio":"au","setting":"se","place":"pl","time":"ti","characters":["ch"],"plot_point":"pp","duration_second":8,"aspect_ratio":"16:9","negative_prompt":"np"}"#;

    let prompt = GeneratedPrompt::from_response_text(compact).unwrap();

    let expected = "{\n  \"prompt\": \"p\",\n  \"keyword\": [\n    \"k\"\n  ],\n  \"style\": \"s\"";
    assert!(prompt.pretty().starts_with(expected), "{}", prompt.pretty());
    assert!(prompt.pretty().ends_with("\"negative_prompt\": \"np\"\n}"));
    assert_eq!(prompt.duration_second(), Some(8));
}

#[test]
fn model_key_order_is_preserved() {
    let mut object = serde_json::Map::new();
    let complete = complete_prompt();
    for name in PromptSchema::required().into_iter().rev() {
        object.insert(name.to_string(), complete[name].clone());
    }
    let text = Value::Object(object).to_string();

    let prompt = GeneratedPrompt::from_response_text(&text).unwrap();

    let first_key = prompt.value().as_object().unwrap().keys().next().unwrap();
    assert_eq!(first_key, "negative_prompt");
}

#[test]
fn surrounding_whitespace_and_extra_fields_are_accepted() {
    let mut value = complete_prompt();
    value["seed"] = json!(42);
    let text = format!("\n  {}\n", value);

    let prompt = GeneratedPrompt::from_response_text(&text).unwrap();

    assert_eq!(prompt.field("seed"), Some(&json!(42)));
    assert_eq!(prompt.to_string(), prompt.pretty());
}

#[test]
fn quoted_dialogue_survives_round_trip() {
    let prompt = GeneratedPrompt::from_response_text(&complete_prompt().to_string()).unwrap();
    assert!(prompt.pretty().contains("Mau pergi kemana?"));
}
