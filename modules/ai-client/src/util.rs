/// Greedy span from the first `{` to the last `}`, inclusive.
///
/// Models tend to wrap JSON in prose or code fences; this picks out the
/// object without trying to validate it.
pub fn extract_json_object(text: &str) -> Option<&str> {
    span_between(text, '{', '}')
}

/// Greedy span from the first `[` to the last `]`, inclusive.
pub fn extract_json_array(text: &str) -> Option<&str> {
    span_between(text, '[', ']')
}

fn span_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..end + close.len_utf8()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_object_from_prose() {
        let text = "Sure! Here you go:\n```json\n{\"location\": \"Goa\"}\n```\nEnjoy.";
        assert_eq!(extract_json_object(text), Some("{\"location\": \"Goa\"}"));
    }

    #[test]
    fn test_extract_object_is_greedy() {
        let text = "{\"a\": {\"b\": 1}} trailing }";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}} trailing }"));
    }

    #[test]
    fn test_extract_object_missing_braces() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_extract_array() {
        let text = "Hotels: [{\"name\": \"A\"}, {\"name\": \"B\"}] done";
        assert_eq!(
            extract_json_array(text),
            Some("[{\"name\": \"A\"}, {\"name\": \"B\"}]")
        );
        assert_eq!(extract_json_array("{}"), None);
    }
}
