/// Marker introducing a custom delimiter declaration.
const DECLARATION_MARKER: &str = "//";

/// Ordered set of literal delimiter strings.
///
/// Members are compared by exact substring match only, so characters that a
/// pattern engine would treat as special (`*`, `%`, `.`) match themselves.
/// Zero-length members never match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSpec {
    delimiters: Vec<String>,
}

impl DelimiterSpec {
    pub fn new(delimiters: Vec<String>) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Length of the first member matching at byte offset `pos`, checked in
    /// declaration order so the scan stays deterministic when members
    /// overlap.
    pub(crate) fn match_at(&self, body: &str, pos: usize) -> Option<usize> {
        self.delimiters
            .iter()
            .filter(|d| !d.is_empty())
            .find(|d| body[pos..].starts_with(d.as_str()))
            .map(|d| d.len())
    }
}

/// Split `input` into its delimiter spec and numeric body.
///
/// Inputs without a `//` declaration keep `default` and pass through
/// unchanged. A declaration with no following newline is malformed and is
/// ignored the same way, so the whole input becomes the body.
pub fn resolve<'a>(input: &'a str, default: &DelimiterSpec) -> (DelimiterSpec, &'a str) {
    let Some(declaration) = input.strip_prefix(DECLARATION_MARKER) else {
        return (default.clone(), input);
    };

    let Some(newline) = declaration.find('\n') else {
        // Malformed declaration: no terminating newline. Fall back to the
        // default delimiters and tokenize the raw input as-is.
        return (default.clone(), input);
    };

    let segment = &declaration[..newline];
    let body = &declaration[newline + 1..];

    (parse_segment(segment), body)
}

/// Parse the declaration segment between `//` and the newline.
///
/// A segment starting with `[` declares one or more bracketed delimiters,
/// each of any length (`[***]`, `[*][%]`). Anything else is a single bare
/// literal. A leading `[` with no complete `[...]` group degrades to the
/// bare-literal form so the spec is never empty.
fn parse_segment(segment: &str) -> DelimiterSpec {
    if segment.starts_with('[') {
        let groups = parse_bracketed_groups(segment);
        if !groups.is_empty() {
            return DelimiterSpec::new(groups);
        }
    }

    DelimiterSpec::new(vec![segment.to_string()])
}

/// Collect the inner text of every complete `[...]` group, left to right,
/// non-greedy per group.
fn parse_bracketed_groups(segment: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut rest = segment;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(']') else {
            break;
        };
        groups.push(after_open[..close].to_string());
        rest = &after_open[close + 1..];
    }

    groups
}
