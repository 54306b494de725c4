use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `{inputname, compvalue}` pair from the caller. The upstream component
/// system omits fields freely, so both default to empty rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub inputname: String,
    #[serde(default)]
    pub compvalue: String,
}

/// The full stdin document.
#[derive(Debug, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub params: Vec<Param>,
}

/// The single stdout line. Exactly one of `result`/`error` is populated:
/// success carries a non-null result and an empty error string, failure
/// carries a null result and the error text. Both keys are always emitted.
#[derive(Debug, Serialize)]
pub struct Output {
    pub result: Option<Value>,
    pub error: String,
}

impl Output {
    pub fn success(result: Value) -> Self {
        Self {
            result: Some(result),
            error: String::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: None,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_decodes_params() {
        let input: Input = serde_json::from_str(
            r#"{"params":[{"inputname":"token","compvalue":"123:abc"}]}"#,
        )
        .unwrap();
        assert_eq!(input.params.len(), 1);
        assert_eq!(input.params[0].inputname, "token");
        assert_eq!(input.params[0].compvalue, "123:abc");
    }

    #[test]
    fn test_input_tolerates_missing_fields() {
        let input: Input = serde_json::from_str(r#"{"params":[{}]}"#).unwrap();
        assert_eq!(input.params[0].inputname, "");
        assert_eq!(input.params[0].compvalue, "");

        let empty: Input = serde_json::from_str("{}").unwrap();
        assert!(empty.params.is_empty());
    }

    #[test]
    fn test_malformed_input_fails_to_decode() {
        assert!(serde_json::from_str::<Input>("{not json").is_err());
        assert!(serde_json::from_str::<Input>(r#"{"params":"nope"}"#).is_err());
    }

    #[test]
    fn test_success_output_has_empty_error() {
        let out = serde_json::to_value(Output::success(json!({"ok": true}))).unwrap();
        assert_eq!(out["result"]["ok"], json!(true));
        assert_eq!(out["error"], json!(""));
    }

    #[test]
    fn test_failure_output_has_null_result() {
        let out = serde_json::to_value(Output::failure("token is required")).unwrap();
        assert!(out["result"].is_null());
        assert_eq!(out["error"], json!("token is required"));
    }
}
