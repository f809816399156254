//! Conversion between Scenecraft types and Gemini wire types.

use super::GeminiResult;
use super::dto::{
    GeminiContent, GeminiGenerationConfig, GeminiInlineData, GeminiPart, GeminiRequest,
    GeminiResponse,
};
use scenecraft_core::{GenerateRequest, GenerateResponse, RequestPart};
use scenecraft_error::{GeminiError, GeminiErrorKind};
use tracing::{debug, instrument};

/// Convert a request part to a Gemini content part.
pub fn to_gemini_part(part: &RequestPart) -> GeminiPart {
    match part {
        RequestPart::Text(text) => GeminiPart::Text { text: text.clone() },
        RequestPart::Image { data, mime_type } => GeminiPart::InlineData {
            inline_data: GeminiInlineData {
                mime_type: mime_type.as_str().to_string(),
                data: data.clone(),
            },
        },
    }
}

/// Convert a generation request to a `generateContent` body.
///
/// All parts go into one user turn in their original order. The instruction
/// travels as the system instruction.
#[instrument(skip(req), fields(parts = req.parts().len()))]
pub fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let parts = req.parts().iter().map(to_gemini_part).collect();

    let system_instruction = (!req.system_instruction().trim().is_empty()).then(|| GeminiContent {
        role: None,
        parts: vec![GeminiPart::Text {
            text: req.system_instruction().clone(),
        }],
    });

    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts,
        }],
        system_instruction,
        generation_config: GeminiGenerationConfig {
            response_mime_type: req.response_mime_type().clone(),
            response_schema: req.response_schema().clone(),
        },
    }
}

/// Extract the response text from a `generateContent` response.
///
/// Text parts of the first candidate are concatenated, skipping thought
/// parts. A blocked prompt or a missing candidate is an error. Any other
/// candidate is returned as is, even with empty text, so the reply is
/// judged by the JSON check upstream.
pub fn from_gemini_response(response: GeminiResponse) -> GeminiResult<GenerateResponse> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        debug!(reason = %reason, "Prompt blocked");
        return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| part.thought != Some(true))
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) =
            candidate.finish_reason.as_deref()
        {
            return Err(GeminiError::new(GeminiErrorKind::Blocked(reason.to_string())));
        }
        debug!(finish_reason = ?candidate.finish_reason, "Candidate carried no text");
    }

    Ok(GenerateResponse::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::dto::{
        GeminiCandidate, GeminiPromptFeedback, GeminiResponseContent, GeminiResponsePart,
    };
    use scenecraft_core::ImageMime;
    use serde_json::json;

    fn text_part(text: &str) -> GeminiResponsePart {
        GeminiResponsePart {
            text: Some(text.to_string()),
            thought: None,
        }
    }

    fn response_with(parts: Vec<GeminiResponsePart>) -> GeminiResponse {
        GeminiResponse {
            candidates: vec![GeminiCandidate {
                content: Some(GeminiResponseContent {
                    parts,
                    role: Some("model".to_string()),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn image_part_serializes_as_inline_data() {
        let part = to_gemini_part(&RequestPart::Image {
            data: "aGk=".to_string(),
            mime_type: ImageMime::Png,
        });
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"inlineData": {"mimeType": "image/png", "data": "aGk="}})
        );
    }

    #[test]
    fn request_keeps_part_order_in_one_user_turn() {
        let req = GenerateRequest::builder()
            .model("gemini-2.5-flash")
            .parts(vec![
                RequestPart::Image {
                    data: "aGk=".to_string(),
                    mime_type: ImageMime::Jpeg,
                },
                RequestPart::Text("caption".to_string()),
                RequestPart::Text("ACTION TIMELINE:\n- 0–2 sec: Knight walks".to_string()),
            ])
            .system_instruction("Describe the scene.")
            .build()
            .unwrap();

        let body = serde_json::to_value(to_gemini_request(&req)).unwrap();

        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["text"], "caption");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Describe the scene."
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn response_text_concatenates_parts_and_skips_thoughts() {
        let mut parts = vec![text_part("{\"prompt\":"), text_part(" \"x\"}")];
        parts.insert(
            0,
            GeminiResponsePart {
                text: Some("thinking...".to_string()),
                thought: Some(true),
            },
        );
        let response = from_gemini_response(response_with(parts)).unwrap();
        assert_eq!(response.text(), "{\"prompt\": \"x\"}");
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let response = GeminiResponse {
            prompt_feedback: Some(GeminiPromptFeedback {
                block_reason: Some("SAFETY".to_string()),
            }),
            ..Default::default()
        };
        let err = from_gemini_response(response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::Blocked("SAFETY".to_string()));
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let err = from_gemini_response(GeminiResponse::default()).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::EmptyResponse);
    }

    #[test]
    fn textless_candidate_is_passed_through() {
        let response = from_gemini_response(response_with(vec![])).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn textless_safety_candidate_is_blocked() {
        let mut response = response_with(vec![]);
        response.candidates[0].finish_reason = Some("SAFETY".to_string());
        let err = from_gemini_response(response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::Blocked("SAFETY".to_string()));
    }
}
