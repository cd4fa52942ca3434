use std::borrow::Cow;

/// Escape the characters that would break out of a double-quoted attribute
/// value. Returns the input untouched when nothing needs escaping.
pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}

/// Substitute each `placeholder` in `message` with its value.
///
/// Every placeholder is replaced in a single left-to-right pass, so a value
/// that happens to contain another placeholder is never substituted again.
/// Where placeholders overlap, the longest one is used.
pub(crate) fn replace_placeholders<'a>(
    message: Cow<'a, str>,
    replacements: &[(&str, &str)],
) -> Cow<'a, str> {
    let mut replacements: Vec<_> = replacements
        .iter()
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .collect();
    // longest placeholder wins when several match at the same position
    replacements.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
    if replacements.is_empty() {
        return message;
    }
    let mut result = String::with_capacity(message.len());
    let mut rest: &str = &message;
    let mut replaced = false;
    'outer: while !rest.is_empty() {
        for (placeholder, value) in replacements.iter() {
            if let Some(tail) = rest.strip_prefix(*placeholder) {
                result.push_str(value);
                rest = tail;
                replaced = true;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }

    if !replaced {
        message
    } else {
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let text = "A & B";
        assert_eq!(serialize_attribute(text.into()), "A &amp; B");
    }

    #[test]
    fn test_serialize_multiple() {
        let text = "&><\"";
        assert_eq!(serialize_attribute(text.into()), "&amp;&gt;&lt;&quot;");
    }

    #[test]
    fn test_serialize_keeps_apostrophe() {
        assert_eq!(serialize_attribute("it's".into()), "it's");
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_attribute(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_replace() {
        let result = replace_placeholders("Hello %name%!".into(), &[("%name%", "World")]);
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_replace_is_single_pass() {
        let result = replace_placeholders(
            "%a% and %b%".into(),
            &[("%a%", "%b%"), ("%b%", "two")],
        );
        assert_eq!(result, "%b% and two");
    }

    #[test]
    fn test_replace_longest_placeholder_wins() {
        let result = replace_placeholders(
            "%count%s left, %count% done".into(),
            &[("%count%", "3"), ("%count%s", "many")],
        );
        assert_eq!(result, "many left, 3 done");
    }

    #[test]
    fn test_replace_nothing_found() {
        let text = "no placeholders";
        let result = replace_placeholders(text.into(), &[("%x%", "y")]);
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_replace_empty_placeholder_ignored() {
        assert_eq!(replace_placeholders("abc".into(), &[("", "x")]), "abc");
    }
}
