//! Decoding of `PostgreSQL` array literals.
//!
//! Catalogue columns such as `color_options` may be real `TEXT[]` columns or
//! plain `TEXT` holding an array literal, depending on how the table was
//! created. Queries cast them to text and decode here, so both layouts end up
//! as an ordered `Vec<String>`.

/// Parse a one-dimensional array literal like `{red,"space gray",blue}`.
///
/// - `None`, empty text, and text that is not wrapped in braces yield `[]`.
/// - Unquoted elements are trimmed; quoted elements keep inner whitespace and
///   honour backslash escapes.
/// - Unquoted `NULL` elements are skipped.
#[must_use]
pub fn parse_pg_array(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim) else {
        return Vec::new();
    };
    let Some(body) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' if !in_quotes => {
                push_element(&mut items, &current, quoted);
                current.clear();
                quoted = false;
            }
            _ => current.push(c),
        }
    }

    if !body.trim().is_empty() {
        push_element(&mut items, &current, quoted);
    }

    items
}

fn push_element(items: &mut Vec<String>, element: &str, quoted: bool) {
    if quoted {
        items.push(element.to_owned());
        return;
    }
    let trimmed = element.trim();
    if !trimmed.eq_ignore_ascii_case("null") {
        items.push(trimmed.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_empty() {
        assert!(parse_pg_array(None).is_empty());
        assert!(parse_pg_array(Some("")).is_empty());
        assert!(parse_pg_array(Some("{}")).is_empty());
    }

    #[test]
    fn test_not_an_array_literal() {
        assert!(parse_pg_array(Some("red,blue")).is_empty());
    }

    #[test]
    fn test_simple_elements_keep_order() {
        assert_eq!(
            parse_pg_array(Some("{black, white ,gold}")),
            vec!["black", "white", "gold"]
        );
    }

    #[test]
    fn test_quoted_elements() {
        assert_eq!(
            parse_pg_array(Some(r#"{"space gray","red, matte",blue}"#)),
            vec!["space gray", "red, matte", "blue"]
        );
    }

    #[test]
    fn test_escaped_quote_inside_element() {
        assert_eq!(
            parse_pg_array(Some(r#"{"12\" display"}"#)),
            vec!["12\" display"]
        );
    }

    #[test]
    fn test_null_elements_are_skipped() {
        assert_eq!(parse_pg_array(Some("{a,NULL,b}")), vec!["a", "b"]);
        assert_eq!(parse_pg_array(Some(r#"{"NULL"}"#)), vec!["NULL"]);
    }

    #[test]
    fn test_empty_quoted_element_is_kept() {
        assert_eq!(parse_pg_array(Some(r#"{"",x}"#)), vec!["", "x"]);
    }
}
