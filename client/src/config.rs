use request::DEFAULT_MODEL;

pub const PUBLIC_BASE_URL: &str = "http://104.230.97.51:25570";
pub const LOCAL_BASE_URL: &str = "http://192.168.50.149:25570";
pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub model_id: String,
    pub system: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PUBLIC_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL.to_string(),
            system: None,
        }
    }
}

impl ClientConfig {
    pub fn generate_url(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url.trim_end_matches('/'))
    }
}
