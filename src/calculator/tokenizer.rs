use super::delimiter::DelimiterSpec;

/// Split `body` on every occurrence of any spec member.
///
/// Leftmost-match-first: at each position the first matching member consumes
/// its whole length, so a multi-character delimiter is never partially eaten
/// by a shorter match later in the set. Consecutive or trailing delimiters
/// produce empty tokens; the accumulator skips those.
pub fn split<'a>(body: &'a str, spec: &DelimiterSpec) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < body.len() {
        if let Some(len) = spec.match_at(body, pos) {
            tokens.push(&body[start..pos]);
            pos += len;
            start = pos;
        } else {
            // Safe to index: pos always sits on a char boundary.
            pos += body[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    tokens.push(&body[start..]);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(delimiters: &[&str]) -> DelimiterSpec {
        DelimiterSpec::new(delimiters.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_split_on_comma() {
        assert_eq!(split("1,2,3", &spec(&[","])), ["1", "2", "3"]);
    }

    #[test]
    fn test_split_on_mixed_defaults() {
        assert_eq!(split("1\n2,3", &spec(&[",", "\n"])), ["1", "2", "3"]);
    }

    #[test]
    fn test_split_on_multichar_delimiter() {
        assert_eq!(split("1***2***3", &spec(&["***"])), ["1", "2", "3"]);
    }

    #[test]
    fn test_split_on_multiple_delimiters() {
        assert_eq!(split("1*2%3", &spec(&["*", "%"])), ["1", "2", "3"]);
    }

    #[test]
    fn test_consecutive_delimiters_yield_empty_tokens() {
        assert_eq!(split("1,,2", &spec(&[","])), ["1", "", "2"]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_token() {
        assert_eq!(split("1,2,", &spec(&[","])), ["1", "2", ""]);
    }

    #[test]
    fn test_no_delimiter_present() {
        assert_eq!(split("42", &spec(&[","])), ["42"]);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(split("", &spec(&[","])), [""]);
    }

    #[test]
    fn test_empty_delimiter_does_not_split() {
        assert_eq!(split("15", &spec(&[""])), ["15"]);
    }

    #[test]
    fn test_multibyte_body_survives_scanning() {
        assert_eq!(split("1,é,2", &spec(&[","])), ["1", "é", "2"]);
    }

    #[test]
    fn test_split_is_recomputable() {
        let s = spec(&[","]);
        assert_eq!(split("1,2", &s), split("1,2", &s));
    }
}
