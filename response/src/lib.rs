use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Body returned by `POST /api/generate` with streaming disabled.
///
/// Only `response` is ever emitted; the other fields are optional and read
/// for logging. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub done_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Informational fields fall back to `None` when the server sends an unexpected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl GenerateResponse {
    /// The generated text, if the server sent any.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn into_text(self) -> Option<String> {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_response_field() {
        let response: GenerateResponse = serde_json::from_str(r#"{"response": "hello"}"#).unwrap();
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn missing_response_field_is_none() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn null_response_field_is_none() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": null}"#).unwrap();
        assert!(response.into_text().is_none());
    }

    #[test]
    fn reads_full_ollama_body_and_ignores_unknown_fields() {
        let body = r#"{
            "model": "mistral",
            "created_at": "2024-06-01T12:00:00.000Z",
            "response": "I am a helpful assistant.",
            "done": true,
            "done_reason": "stop",
            "context": [1, 2, 3],
            "total_duration": 5043500667,
            "load_duration": 5025959,
            "prompt_eval_count": 26,
            "eval_count": 290
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("I am a helpful assistant."));
        assert_eq!(response.model.as_deref(), Some("mistral"));
        assert_eq!(response.done, Some(true));
        assert_eq!(response.done_reason.as_deref(), Some("stop"));
        assert_eq!(response.total_duration, Some(5043500667));
        assert_eq!(response.eval_count, Some(290));
    }

    #[test]
    fn mistyped_informational_fields_do_not_hide_text() {
        let bodies = [
            r#"{"response": "hello", "total_duration": 1.5}"#,
            r#"{"response": "hello", "created_at": 1717243200}"#,
            r#"{"response": "hello", "done": "true"}"#,
            r#"{"response": "hello", "model": {"name": "mistral"}, "error": ["x"]}"#,
        ];

        for body in bodies {
            let response: GenerateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.text(), Some("hello"), "body: {body}");
        }

        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": "hello", "done": "true", "eval_count": 7}"#)
                .unwrap();
        assert!(response.done.is_none());
        assert_eq!(response.eval_count, Some(7));
    }

    #[test]
    fn error_body_has_no_text() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"error": "model 'mistral' not found"}"#).unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.error.as_deref(), Some("model 'mistral' not found"));
    }

    #[test]
    fn malformed_body_fails_to_parse() {
        assert!(serde_json::from_str::<GenerateResponse>("not json").is_err());
        assert!(serde_json::from_str::<GenerateResponse>(r#"{"response": 42}"#).is_err());
    }
}
