use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a custom parameter line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Bare token without `=`
    Flag(bool),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(flag) => write!(f, "{flag}"),
            ParamValue::Text(text) => f.write_str(text),
        }
    }
}

pub type Params = BTreeMap<String, ParamValue>;

/// Parses `key=value` lines. Blank and `#` lines are skipped, bare tokens become
/// `true`, only the first `=` splits, and a repeated key keeps its last value.
pub fn parse_params(text: &str) -> Params {
    let mut params = Params::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                params.insert(
                    key.trim().to_string(),
                    ParamValue::Text(value.trim().to_string()),
                );
            }
            None => {
                params.insert(line.to_string(), ParamValue::Flag(true));
            }
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_params() {
        let params = parse_params("bogus_code_amount=50\nstring_encrypt=true");
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("bogus_code_amount"),
            Some(&ParamValue::Text("50".to_string()))
        );
        assert_eq!(
            params.get("string_encrypt"),
            Some(&ParamValue::Text("true".to_string()))
        );
    }

    #[test]
    fn test_comments_blanks_and_flags() {
        let params = parse_params("# tuning\n\n  flatten  \n key = a=b \n");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("flatten"), Some(&ParamValue::Flag(true)));
        assert_eq!(params.get("key"), Some(&ParamValue::Text("a=b".to_string())));
    }

    #[test]
    fn test_last_value_wins() {
        let params = parse_params("level=1\nlevel=2");
        assert_eq!(params.get("level"), Some(&ParamValue::Text("2".to_string())));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_params("").is_empty());
        assert!(parse_params("#only a comment").is_empty());
    }

    #[test]
    fn test_json_shape() {
        let params = parse_params("flag\nname=value");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"flag": true, "name": "value"}));
    }
}
