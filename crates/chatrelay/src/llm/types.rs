//! Request and response shapes for the Gemini `generateContent` API.

use serde::{Deserialize, Serialize};

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying `text` verbatim as one part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
        }
    }
}

/// One turn of request content.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A text part of request content.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// A `generateContent` response body.
///
/// Every field is optional: blocked prompts, tool calls and other unusual
/// completions omit pieces of the usual shape.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

/// A response part. Non-text parts (function calls, inline data) decode with
/// `text: None`.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> Option<&[ResponsePart]> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()
    }

    /// Reply text of the first candidate.
    ///
    /// Prefers the first part's text; otherwise joins the text of every part
    /// that has some with `'\n'`. Returns `None` when neither yields text.
    pub fn reply_text(&self) -> Option<String> {
        let parts = self.first_parts()?;

        if let Some(text) = parts.first().and_then(|p| p.text.as_deref())
            && !text.is_empty()
        {
            return Some(text.to_string());
        }

        let joined = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        (!joined.is_empty()).then_some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::from_text("Hello!");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "Hello!" } ] } ] })
        );
    }

    #[test]
    fn test_request_keeps_text_verbatim() {
        let text = "  line one\n\"quoted\" \u{1F600}  ";
        let request = GenerateContentRequest::from_text(text);
        assert_eq!(request.contents[0].parts[0].text, text);
    }

    #[test]
    fn test_reply_from_first_part() {
        let response = decode(
            r#"{
                "candidates": [
                    {
                        "content": { "role": "model", "parts": [ { "text": "hello" } ] },
                        "finishReason": "STOP"
                    }
                ],
                "usageMetadata": { "totalTokenCount": 12 }
            }"#,
        );
        assert_eq!(response.reply_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_first_part_wins_over_later_parts() {
        let response = decode(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}}]}"#,
        );
        assert_eq!(response.reply_text().as_deref(), Some("a"));
    }

    #[test]
    fn test_reply_joins_parts_without_first_text() {
        let response = decode(
            r#"{"candidates":[{"content":{"parts":[
                {"functionCall":{"name":"lookup","args":{}}},
                {"text":"a"},
                {"text":"b"}
            ]}}]}"#,
        );
        assert_eq!(response.reply_text().as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_empty_first_text_falls_through_to_join() {
        let response = decode(r#"{"candidates":[{"content":{"parts":[{"text":""},{"text":"b"}]}}]}"#);
        assert_eq!(response.reply_text().as_deref(), Some("\nb"));
    }

    #[test]
    fn test_only_first_candidate_is_used() {
        let response = decode(
            r#"{"candidates":[
                {"content":{"parts":[]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        );
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn test_missing_pieces_yield_none() {
        assert!(decode("{}").reply_text().is_none());
        assert!(decode(r#"{"candidates":[]}"#).reply_text().is_none());
        assert!(decode(r#"{"candidates":[{}]}"#).reply_text().is_none());
        assert!(decode(r#"{"candidates":[{"content":{}}]}"#).reply_text().is_none());
        assert!(
            decode(r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#)
                .reply_text()
                .is_none()
        );
    }

    #[test]
    fn test_blocked_prompt_has_no_reply() {
        let response = decode(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(response.candidates.is_none());
        assert!(response.reply_text().is_none());
    }
}
