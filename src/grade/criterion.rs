#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use typed_builder::TypedBuilder;

use super::RubricError;

/// How a criterion's pattern is compared against submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The pattern must appear verbatim.
    Exact,
    /// The pattern is a regular expression searched case-insensitively.
    Regex,
    /// The pattern must appear verbatim. Same behavior as `Exact`; the label
    /// marks markup fragments rather than whole declarations.
    Substring,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchKind::Exact => "exact",
            MatchKind::Regex => "regex",
            MatchKind::Substring => "substring",
        };
        write!(f, "{label}")
    }
}

/// Unvalidated description of a criterion, as written in a catalog.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
pub struct CriterionSpec {
    /// Display label, unique within a rubric.
    pub name:       String,
    /// Literal text or regular expression, depending on `kind`.
    pub pattern:    String,
    /// Points awarded when the criterion passes.
    #[builder(setter(!into))]
    pub points:     u32,
    /// How `pattern` is matched.
    pub kind:       MatchKind,
    /// Remediation hint shown when the criterion fails.
    pub suggestion: String,
}

/// Compiled form of a pattern.
#[derive(Debug, Clone)]
enum Matcher {
    /// Case-sensitive substring test.
    Literal(String),
    /// Case-insensitive regex search.
    Pattern(Regex),
}

impl Matcher {
    /// Checks `text` against the compiled pattern.
    fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Literal(needle) => text.contains(needle.as_str()),
            Matcher::Pattern(re) => re.is_match(text),
        }
    }
}

/// One named, scored rubric check.
#[derive(Debug, Clone)]
pub struct Criterion {
    /// Display label.
    name:       String,
    /// The pattern as written in the catalog.
    pattern:    String,
    /// Points awarded on a match.
    points:     u32,
    /// Matching kind.
    kind:       MatchKind,
    /// Remediation hint for a failed match.
    suggestion: String,
    /// Pattern compiled for `kind`.
    matcher:    Matcher,
}

impl Criterion {
    /// Validates a spec and compiles its pattern.
    ///
    /// Fails when `points` is zero or a `Regex` pattern does not compile.
    pub fn new(spec: CriterionSpec) -> Result<Self, RubricError> {
        let CriterionSpec {
            name,
            pattern,
            points,
            kind,
            suggestion,
        } = spec;

        if points == 0 {
            return Err(RubricError::ZeroPoints(name));
        }

        let matcher = match kind {
            MatchKind::Exact | MatchKind::Substring => Matcher::Literal(pattern.clone()),
            MatchKind::Regex => {
                let re = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| RubricError::InvalidPattern {
                        name:    name.clone(),
                        pattern: pattern.clone(),
                        source:  e,
                    })?;
                Matcher::Pattern(re)
            }
        };

        Ok(Self {
            name,
            pattern,
            points,
            kind,
            suggestion,
            matcher,
        })
    }

    /// Display label of the criterion.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pattern as written in the catalog.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Points awarded on a match.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// How the pattern is matched.
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Remediation hint for a failed match.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Returns true if `text` satisfies this criterion.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Returns true if `text` satisfies `criterion`.
pub fn matches(criterion: &Criterion, text: &str) -> bool {
    criterion.matches(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(kind: MatchKind, pattern: &str) -> Criterion {
        Criterion::new(
            CriterionSpec::builder()
                .name("sample")
                .pattern(pattern)
                .points(1)
                .kind(kind)
                .suggestion("fix it")
                .build(),
        )
        .expect("valid criterion")
    }

    #[test]
    fn literal_kinds_are_case_sensitive() {
        for kind in [MatchKind::Exact, MatchKind::Substring] {
            let c = criterion(kind, r#"class="m-3""#);
            assert!(c.matches(r#"<div class="m-3">"#));
            assert!(!c.matches(r#"<div class="M-3">"#));
        }
    }

    #[test]
    fn literal_kinds_do_not_interpret_regex_syntax() {
        let c = criterion(MatchKind::Exact, "a.c");
        assert!(c.matches("xa.cx"));
        assert!(!c.matches("abc"));
    }

    #[test]
    fn regex_kind_ignores_case() {
        let c = criterion(MatchKind::Regex, r"<title>.*?</title>");
        assert!(c.matches("<Title>Test</Title>"));
        assert!(c.matches("<TITLE></TITLE>"));
        assert!(!c.matches("<title>unterminated"));
    }

    #[test]
    fn regex_dot_does_not_cross_lines() {
        let c = criterion(MatchKind::Regex, r"<title>.*?</title>");
        assert!(!c.matches("<title>\nsplit\n</title>"));
    }

    #[test]
    fn zero_points_are_rejected() {
        let spec = CriterionSpec::builder()
            .name("free")
            .pattern("x")
            .points(0)
            .kind(MatchKind::Exact)
            .suggestion("")
            .build();
        assert!(matches!(Criterion::new(spec), Err(RubricError::ZeroPoints(name)) if name == "free"));
    }

    #[test]
    fn malformed_regex_fails_at_construction() {
        let spec = CriterionSpec::builder()
            .name("broken")
            .pattern("<html(")
            .points(1)
            .kind(MatchKind::Regex)
            .suggestion("")
            .build();
        assert!(matches!(Criterion::new(spec), Err(RubricError::InvalidPattern { .. })));
    }

    #[test]
    fn malformed_regex_is_fine_as_a_literal() {
        let c = criterion(MatchKind::Substring, "<html(");
        assert!(c.matches("<html("));
    }
}
