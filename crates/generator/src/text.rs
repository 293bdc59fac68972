//! Table cell formatting

use serde_json::Value;

/// Split `text` into chunks of `width` characters joined by `marker`
///
/// Text at or under `width` characters is returned unchanged, so a cell
/// never breaks table syntax while stripping the markers restores the input.
pub fn wrap_description(text: &str, width: usize, marker: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if width == 0 || chars.len() <= width {
        return text.to_string();
    }

    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(marker)
}

/// Plain-text rendering of a JSON value: strings unquoted, null empty
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn optional_value_text(value: Option<&Value>) -> String {
    value.map(value_text).unwrap_or_default()
}

/// Enum values joined by `, `
pub fn enum_text(values: &[Value]) -> String {
    values.iter().map(value_text).collect::<Vec<_>>().join(", ")
}

pub fn required_text(required: bool) -> &'static str {
    if required {
        "True"
    } else {
        "False"
    }
}

/// Example payload as code block content; strings are emitted verbatim
pub fn example_text(example: &Value) -> String {
    match example {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_description_unchanged() {
        let text = "a".repeat(50);
        assert_eq!(wrap_description(&text, 50, "<br/>"), text);
        assert_eq!(wrap_description("", 50, "<br/>"), "");
    }

    #[test]
    fn test_long_description_chunks() {
        let text = format!("{}{}{}", "a".repeat(50), "b".repeat(50), "c".repeat(7));
        let wrapped = wrap_description(&text, 50, "<br/>");

        assert_eq!(
            wrapped,
            format!("{}<br/>{}<br/>{}", "a".repeat(50), "b".repeat(50), "c".repeat(7))
        );
        assert_eq!(wrapped.replace("<br/>", ""), text);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_marker() {
        let text = "x".repeat(100);
        let wrapped = wrap_description(&text, 50, "<br/>");

        assert_eq!(wrapped.matches("<br/>").count(), 1);
        assert!(!wrapped.ends_with("<br/>"));
    }

    #[test]
    fn test_chunks_count_characters_not_bytes() {
        let text = "描述".repeat(30);
        let wrapped = wrap_description(&text, 50, "<br/>");
        let chunks: Vec<&str> = wrapped.split("<br/>").collect();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 50);
        assert_eq!(chunks[1].chars().count(), 10);
    }

    #[test]
    fn test_value_cells() {
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(12)), "12");
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(optional_value_text(None), "");
        assert_eq!(enum_text(&[json!("on"), json!("off"), json!(3)]), "on, off, 3");
        assert_eq!(required_text(true), "True");
        assert_eq!(required_text(false), "False");
    }

    #[test]
    fn test_example_text() {
        assert_eq!(example_text(&json!("{\"raw\": 1}")), "{\"raw\": 1}");
        assert_eq!(example_text(&json!({"id": 1})), "{\n  \"id\": 1\n}");
    }
}
