//! JSON codec
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use super::Codec;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::Path;

/// JSON documents (`.json`)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &str {
        "JSON"
    }

    fn decode(&self, text: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(text).map_err(|e| Error::json_parse_error(path, e))
    }

    /// Pretty-prints with `indent` spaces; zero produces compact output
    fn encode(&self, value: &Value, indent: usize) -> Result<String> {
        if indent == 0 {
            return serde_json::to_string(value).map_err(|e| Error::encode_error(self.name(), e));
        }

        let indent_str = " ".repeat(indent);
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent_str.as_bytes()));
        value
            .serialize(&mut serializer)
            .map_err(|e| Error::encode_error(self.name(), e))?;

        String::from_utf8(buffer).map_err(|e| Error::encode_error(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode() -> Result<()> {
        let value = JsonCodec.decode(r#"{"a": [1, 2], "b": null}"#, Path::new("t.json"))?;
        assert_eq!(value, json!({"a": [1, 2], "b": null}));
        Ok(())
    }

    #[test]
    fn test_decode_errors_name_the_file() {
        let err = JsonCodec.decode("{not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, Error::JsonParse { .. }));
        assert!(err.to_string().contains("broken.json"));

        assert!(JsonCodec.decode("", Path::new("empty.json")).is_err());
    }

    #[test]
    fn test_encode_indent_widths() -> Result<()> {
        let value = json!({"a": {"b": 1}});

        assert_eq!(JsonCodec.encode(&value, 2)?, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
        assert_eq!(JsonCodec.encode(&value, 4)?, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
        assert_eq!(JsonCodec.encode(&value, 0)?, r#"{"a":{"b":1}}"#);

        Ok(())
    }

    #[test]
    fn test_encode_keeps_key_order() -> Result<()> {
        let value: Value = serde_json::from_str(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
        assert_eq!(JsonCodec.encode(&value, 0)?, r#"{"zebra":1,"apple":2,"mango":3}"#);
        Ok(())
    }
}
