use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "mistral";

/// Body of a `POST /api/generate` call.
///
/// Responses are always requested in one piece, so `stream` is fixed to
/// `false` and the builder has no setter for it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl GenerateRequest {
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

pub struct GenerateRequestBuilder {
    model: String,
    prompt: String,
    system: Option<String>,
}

impl Default for GenerateRequestBuilder {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: String::new(),
            system: None,
        }
    }
}

impl GenerateRequestBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn system(mut self, system: Option<String>) -> Self {
        self.system = system;
        self
    }

    pub fn build(self) -> GenerateRequest {
        GenerateRequest {
            model: self.model,
            prompt: self.prompt,
            stream: false,
            system: self.system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_defaults_to_mistral_without_streaming() {
        let request = GenerateRequest::builder()
            .prompt("What is your purpose")
            .build();

        assert_eq!(request.model, "mistral");
        assert!(!request.stream);
        assert!(request.system.is_none());
    }

    #[test]
    fn serializes_to_generate_body() {
        let request = GenerateRequest::builder()
            .prompt("What is your purpose")
            .build();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "mistral",
                "prompt": "What is your purpose",
                "stream": false
            })
        );
    }

    #[test]
    fn system_is_serialized_only_when_set() {
        let request = GenerateRequest::builder()
            .model("llama3")
            .prompt("hi")
            .system(Some("Answer in one word.".to_string()))
            .build();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama3");
        assert_eq!(value["system"], "Answer in one word.");
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn empty_prompt_is_passed_through() {
        let request = GenerateRequest::builder().build();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["prompt"], "");
    }
}
