use crate::protocol::Input;

/// Typed view of the recognized parameters, with explicit defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub token: String,
    pub action: String,
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: String,
    pub offset: i32,
    pub webhook_url: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            action: "send_message".to_string(),
            chat_id: 0,
            text: String::new(),
            parse_mode: String::new(),
            offset: 0,
            webhook_url: String::new(),
        }
    }
}

impl RequestConfig {
    /// Extract the recognized fields from the parameter list. Keys match
    /// case-insensitively after trimming; values are trimmed; later
    /// occurrences overwrite earlier ones; unknown keys are ignored.
    pub fn from_input(input: &Input) -> Self {
        let mut cfg = Self::default();

        for param in &input.params {
            let val = param.compvalue.trim();
            match param.inputname.trim().to_ascii_lowercase().as_str() {
                "token" => cfg.token = val.to_string(),
                "action" => {
                    // Empty value keeps the send_message default
                    if !val.is_empty() {
                        cfg.action = val.to_ascii_lowercase();
                    }
                }
                "chat_id" => cfg.chat_id = val.parse().unwrap_or(0),
                "text" => cfg.text = val.to_string(),
                "parse_mode" => cfg.parse_mode = val.to_string(),
                "offset" => cfg.offset = val.parse().unwrap_or(0),
                "webhook_url" => cfg.webhook_url = val.to_string(),
                _ => {}
            }
        }

        cfg
    }
}
