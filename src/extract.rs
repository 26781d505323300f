use once_cell::sync::Lazy;
use regex::Regex;

/// One quoted import path found in the source text, together with the
/// surrounding text of the statement and the byte range of the whole
/// match.
#[derive(Debug)]
pub struct ImportMatch<'a> {
    pub prefix: &'a str,
    pub import_path: &'a str,
    pub suffix: &'a str,
    pub start: usize,
    pub end: usize,
}

// An `import` token, an optional single-line clause, then a quoted path.
// The clause may not contain quotes, parentheses or newlines, so
// multi-line imports and dynamic import() calls are never matched.
static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\bimport\b[^'"(\n]*?['"])([^'"\n]+)(['"])"#).unwrap());

/// Scans `source_code` for import path literals, left to right,
/// non-overlapping.
pub fn import_matches(source_code: &str) -> Vec<ImportMatch<'_>> {
    IMPORT_PATTERN
        .captures_iter(source_code)
        .map(|captures| {
            let full = captures.get(0).unwrap();
            ImportMatch {
                prefix: captures.get(1).unwrap().as_str(),
                import_path: captures.get(2).unwrap().as_str(),
                suffix: captures.get(3).unwrap().as_str(),
                start: full.start(),
                end: full.end(),
            }
        })
        .collect()
}
