#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::HashSet;

use super::{
    RubricError,
    criterion::{Criterion, CriterionSpec, MatchKind},
    engine,
    results::GradeReport,
};

/// An ordered, immutable set of criteria for one assignment.
#[derive(Debug, Clone)]
pub struct Rubric {
    /// Criteria in grading and display order.
    criteria: Vec<Criterion>,
}

impl Rubric {
    /// Compiles `specs` into a rubric, keeping their order.
    pub fn new<I>(specs: I) -> Result<Self, RubricError>
    where
        I: IntoIterator<Item = CriterionSpec>,
    {
        let mut seen = HashSet::new();
        let mut criteria = Vec::new();
        let mut total: u32 = 0;

        for spec in specs {
            if !seen.insert(spec.name.clone()) {
                return Err(RubricError::DuplicateName(spec.name));
            }
            total = total
                .checked_add(spec.points)
                .ok_or_else(|| RubricError::ScoreOverflow(spec.name.clone()))?;
            criteria.push(Criterion::new(spec)?);
        }

        Ok(Self { criteria })
    }

    /// The rubric for the Bootstrap spacing demo page.
    pub fn bootstrap_spacing() -> Result<Self, RubricError> {
        Self::new(bootstrap_spacing_specs())
    }

    /// Criteria in catalog order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Sum of every criterion's points. Construction guarantees it fits.
    pub fn max_score(&self) -> u32 {
        self.criteria.iter().map(Criterion::points).sum()
    }

    /// Grades `text` against this rubric.
    pub fn grade(&self, text: &str) -> GradeReport {
        engine::grade(self, text)
    }
}

/// Shorthand for one catalog entry.
fn spec(
    name: &str,
    kind: MatchKind,
    pattern: &str,
    points: u32,
    suggestion: &str,
) -> CriterionSpec {
    CriterionSpec::builder()
        .name(name)
        .pattern(pattern)
        .points(points)
        .kind(kind)
        .suggestion(suggestion)
        .build()
}

/// Catalog entries for the Bootstrap spacing demo page, in grading order.
pub fn bootstrap_spacing_specs() -> Vec<CriterionSpec> {
    use MatchKind::{Exact, Regex, Substring};

    vec![
        spec(
            "DOCTYPE declaration",
            Exact,
            "<!DOCTYPE html>",
            5,
            "Add `<!DOCTYPE html>` at the very beginning of your HTML file",
        ),
        spec(
            "HTML lang attribute",
            Regex,
            r#"<html\s+lang="en">"#,
            5,
            r#"Ensure your `<html>` tag includes `lang="en"`"#,
        ),
        spec(
            "Character encoding (UTF-8)",
            Regex,
            r#"<meta\s+charset="UTF-8">"#,
            5,
            r#"Add `<meta charset="UTF-8">` in the `<head>` section"#,
        ),
        spec(
            "Viewport meta tag",
            Regex,
            r#"<meta\s+name="viewport""#,
            5,
            r#"Include viewport meta tag: `<meta name="viewport" content="width=device-width, initial-scale=1">`"#,
        ),
        spec(
            "Page title",
            Regex,
            r"<title>.*?</title>",
            5,
            "Add a `<title>` tag in the `<head>` section",
        ),
        spec(
            "Bootstrap CSS CDN (v5.3.2)",
            Regex,
            r"bootstrap@5\.3\.2/dist/css/bootstrap\.min\.css",
            10,
            "Link Bootstrap 5.3.2 CSS from CDN in the `<head>` section",
        ),
        spec(
            "Container class (mt-4)",
            Substring,
            r#"class="container mt-4""#,
            10,
            r#"Use `class="container mt-4"` for the main container div"#,
        ),
        spec(
            "Heading with mb-4",
            Substring,
            r#"class="mb-4""#,
            8,
            r#"Add `class="mb-4"` to your `<h2>` heading"#,
        ),
        spec(
            "Margin all sides (m-3)",
            Substring,
            r#"class="m-3 bg-light border p-2""#,
            10,
            r#"Create a div with `class="m-3 bg-light border p-2"` for margin all sides demo"#,
        ),
        spec(
            "Margin top (mt-4)",
            Substring,
            r#"class="mt-4 bg-light border p-2""#,
            10,
            r#"Create a div with `class="mt-4 bg-light border p-2"` for margin top demo"#,
        ),
        spec(
            "Margin bottom (mb-2)",
            Substring,
            r#"class="mb-2 bg-light border p-2""#,
            10,
            r#"Create a div with `class="mb-2 bg-light border p-2"` for margin bottom demo"#,
        ),
        spec(
            "Padding all sides (p-3)",
            Substring,
            r#"class="p-3 bg-primary text-white mb-3""#,
            10,
            r#"Create a div with `class="p-3 bg-primary text-white mb-3"` for padding all sides demo"#,
        ),
        spec(
            "Padding top (pt-5)",
            Substring,
            r#"class="pt-5 bg-success text-white""#,
            10,
            r#"Create a div with `class="pt-5 bg-success text-white"` for padding top demo"#,
        ),
        spec(
            "Bootstrap JS CDN",
            Regex,
            r"bootstrap@5\.3\.2/dist/js/bootstrap\.bundle\.min\.js",
            7,
            "Include Bootstrap 5.3.2 JS bundle from CDN before closing `</body>` tag",
        ),
    ]
}
