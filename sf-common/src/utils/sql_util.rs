pub struct SqlUtil {}

const IDENTIFIER_ESCAPE: char = '"';
const LITERAL_QUOTE: char = '\'';

impl SqlUtil {
    pub fn quote_identifier(token: &str) -> String {
        format!(r#"{}{}{}"#, IDENTIFIER_ESCAPE, token, IDENTIFIER_ESCAPE)
    }

    /// All statement builders in this workspace must pass user-supplied text
    /// through this before embedding it in a single-quoted literal.
    pub fn escape_literal(text: &str) -> String {
        text.replace(LITERAL_QUOTE, "''")
    }

    pub fn unescape_literal(text: &str) -> String {
        text.replace("''", "'")
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(SqlUtil::quote_identifier("my_db"), r#""my_db""#);
        assert_eq!(SqlUtil::quote_identifier("UPPER"), r#""UPPER""#);
        // segments are wrapped, not rewritten
        assert_eq!(SqlUtil::quote_identifier("a.b"), r#""a.b""#);
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(SqlUtil::escape_literal("plain"), "plain");
        assert_eq!(SqlUtil::escape_literal("it's"), "it''s");
        assert_eq!(SqlUtil::escape_literal("'; DROP"), "''; DROP");
        assert_eq!(SqlUtil::escape_literal("''"), "''''");
    }

    #[test]
    fn test_escape_literal_round_trip() {
        for text in ["", "plain", "it's", "a'b'c", "'''"] {
            assert_eq!(
                SqlUtil::unescape_literal(&SqlUtil::escape_literal(text)),
                text
            );
        }
    }
}
