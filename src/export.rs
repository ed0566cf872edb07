// Author: Dustin Pilgrim
// License: MIT

use std::fs;

use crate::ast::Document;
use crate::error::ConfigError;
use crate::parser::parse;

/// Convert a parsed document to a JSON value.
///
/// - integers → JSON integers
/// - decimals → JSON numbers carrying the exact decimal text (no exponent, no float rounding)
/// - nested documents → JSON objects, keys in document order
pub fn document_to_json(doc: &Document) -> Result<serde_json::Value, ConfigError> {
    Ok(serde_json::to_value(doc)?)
}

/// Serialize a document to JSON text, pretty-printed or compact.
pub fn to_json_string(doc: &Document, pretty: bool) -> Result<String, ConfigError> {
    let out = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(out)
}

/// Read, parse and export a config file in one call.
///
/// # Examples
/// ```no_run
/// use dictcfg::export::export_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_file("settings.cfg", true)?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file(path: &str, pretty: bool) -> Result<String, ConfigError> {
    let input = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_string(),
        source: e,
    })?;

    let doc = parse(&input)?;
    to_json_string(&doc, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIRCLE: &str = "const pi = 3.1415\nconst radius = 10\n([\n area : @{radius radius * pi *},\n])";

    #[test]
    fn test_export_circle_area() {
        let doc = parse(CIRCLE).unwrap();
        assert_eq!(to_json_string(&doc, false).unwrap(), r#"{"area":314.15}"#);
    }

    #[test]
    fn test_export_nested_object() {
        let doc = parse("([\n outer : ([\n inner : 5\n ])\n])").unwrap();
        assert_eq!(to_json_string(&doc, false).unwrap(), r#"{"outer":{"inner":5}}"#);

        let v = document_to_json(&doc).unwrap();
        assert_eq!(v["outer"]["inner"].as_i64(), Some(5));
    }

    #[test]
    fn test_decimals_keep_exact_text() {
        let doc = parse("([\n a : 2.50,\n b : 0.1000000000000000000001,\n c : @{1 3 /},\n d : @{4 2 /}\n])").unwrap();
        let json = to_json_string(&doc, false).unwrap();
        assert_eq!(json, r#"{"a":2.50,"b":0.1000000000000000000001,"c":0.333,"d":2}"#);
        let value = document_to_json(&doc).unwrap();
        assert!(value["a"].is_number());
        assert_eq!(value.to_string(), json);
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let doc = parse(CIRCLE).unwrap();
        let pretty = to_json_string(&doc, true).unwrap();
        assert!(pretty.contains('\n'));

        let back: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, document_to_json(&doc).unwrap());
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circle.cfg");
        fs::write(&path, CIRCLE).unwrap();

        let json = export_file(path.to_str().unwrap(), false).unwrap();
        assert_eq!(json, r#"{"area":314.15}"#);

        let err = export_file(dir.path().join("missing.cfg").to_str().unwrap(), false).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
