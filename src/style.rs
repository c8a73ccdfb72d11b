//! Presentation configuration for generated status annotations.
//!
//! Two construction paths produce interchangeable results: chaining setters
//! on [`AnnotationStyle`] itself, or [`AnnotationStyleBuilder`], which keeps
//! "never set" distinct from "explicitly set to an empty string" and resolves
//! unset fields against the defaults at build time.

use serde::{Deserialize, Deserializer, Serialize};

/// Inline style carried by every generated heading unless overridden.
pub const DEFAULT_STYLE: &str = "font-weight: normal; text-decoration: none; color: #bb5050;";

const DEFAULT_HEADING_TAG: &str = "h5";
const DEFAULT_REASON_PREFIX: &str = "Reason:";
const DEFAULT_EXPECTED_TO_FAIL_TEXT: &str = "This example has been marked as EXPECTED TO FAIL";
const DEFAULT_IGNORED_TEXT: &str = "This example has been marked as IGNORED";
const DEFAULT_UNIMPLEMENTED_TEXT: &str = "This example has been marked as UNIMPLEMENTED";

const ALLOWED_HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

fn heading_tag_is_allowed(value: &str) -> bool {
    ALLOWED_HEADING_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(value))
}

/// User-overridable presentation choices for status annotations: the inline
/// style string, the heading level to generate, the note/reason prefixes, and
/// the three status headline texts.
///
/// Construction never fails; every field starts at a usable default. The
/// heading tag is the only validated field: it stays within `h1`..`h6`
/// (compared case-insensitively, stored as supplied) after any mutation,
/// including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    style: String,
    #[serde(deserialize_with = "deserialize_heading_tag")]
    heading_tag: String,
    note_prefix: String,
    reason_prefix: String,
    expected_to_fail_text: String,
    ignored_text: String,
    unimplemented_text: String,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            heading_tag: DEFAULT_HEADING_TAG.to_string(),
            note_prefix: String::new(),
            reason_prefix: DEFAULT_REASON_PREFIX.to_string(),
            expected_to_fail_text: DEFAULT_EXPECTED_TO_FAIL_TEXT.to_string(),
            ignored_text: DEFAULT_IGNORED_TEXT.to_string(),
            unimplemented_text: DEFAULT_UNIMPLEMENTED_TEXT.to_string(),
        }
    }
}

fn deserialize_heading_tag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    // an out-of-set tag in config input falls back to the default rather
    // than failing deserialization, mirroring the setter's silent rejection.
    let value = String::deserialize(deserializer)?;
    if heading_tag_is_allowed(&value) {
        Ok(value)
    } else {
        Ok(DEFAULT_HEADING_TAG.to_string())
    }
}

impl AnnotationStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnnotationStyleBuilder {
        AnnotationStyleBuilder::default()
    }

    pub fn set_style(&mut self, value: impl Into<String>) -> &mut Self {
        self.style = value.into();
        self
    }

    /// Accepts only `h1`..`h6`, compared case-insensitively; any other value
    /// is ignored and the current tag is retained.
    pub fn set_heading_tag(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if heading_tag_is_allowed(&value) {
            self.heading_tag = value;
        }
        self
    }

    pub fn set_note_prefix(&mut self, value: impl Into<String>) -> &mut Self {
        self.note_prefix = value.into();
        self
    }

    pub fn set_reason_prefix(&mut self, value: impl Into<String>) -> &mut Self {
        self.reason_prefix = value.into();
        self
    }

    pub fn set_expected_to_fail_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.expected_to_fail_text = value.into();
        self
    }

    pub fn set_ignored_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.ignored_text = value.into();
        self
    }

    pub fn set_unimplemented_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.unimplemented_text = value.into();
        self
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn heading_tag(&self) -> &str {
        &self.heading_tag
    }

    pub fn note_prefix(&self) -> &str {
        &self.note_prefix
    }

    pub fn reason_prefix(&self) -> &str {
        &self.reason_prefix
    }

    pub fn expected_to_fail_text(&self) -> &str {
        &self.expected_to_fail_text
    }

    pub fn ignored_text(&self) -> &str {
        &self.ignored_text
    }

    pub fn unimplemented_text(&self) -> &str {
        &self.unimplemented_text
    }
}

/// Accumulates overrides and materializes an [`AnnotationStyle`] on
/// [`build`](Self::build). Fields never set resolve to their defaults.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStyleBuilder {
    style: Option<String>,
    heading_tag: Option<String>,
    note_prefix: Option<String>,
    reason_prefix: Option<String>,
    expected_to_fail_text: Option<String>,
    ignored_text: Option<String>,
    unimplemented_text: Option<String>,
}

impl AnnotationStyleBuilder {
    pub fn style(mut self, value: impl Into<String>) -> Self {
        self.style = Some(value.into());
        self
    }

    /// Same validation as [`AnnotationStyle::set_heading_tag`]: an out-of-set
    /// value is ignored, keeping whatever was set before (or the default).
    pub fn heading_tag(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if heading_tag_is_allowed(&value) {
            self.heading_tag = Some(value);
        }
        self
    }

    pub fn note_prefix(mut self, value: impl Into<String>) -> Self {
        self.note_prefix = Some(value.into());
        self
    }

    pub fn reason_prefix(mut self, value: impl Into<String>) -> Self {
        self.reason_prefix = Some(value.into());
        self
    }

    pub fn expected_to_fail_text(mut self, value: impl Into<String>) -> Self {
        self.expected_to_fail_text = Some(value.into());
        self
    }

    pub fn ignored_text(mut self, value: impl Into<String>) -> Self {
        self.ignored_text = Some(value.into());
        self
    }

    pub fn unimplemented_text(mut self, value: impl Into<String>) -> Self {
        self.unimplemented_text = Some(value.into());
        self
    }

    pub fn build(self) -> AnnotationStyle {
        let mut style = AnnotationStyle::default();
        if let Some(v) = self.style {
            style.style = v;
        }
        if let Some(v) = self.heading_tag {
            style.heading_tag = v;
        }
        if let Some(v) = self.note_prefix {
            style.note_prefix = v;
        }
        if let Some(v) = self.reason_prefix {
            style.reason_prefix = v;
        }
        if let Some(v) = self.expected_to_fail_text {
            style.expected_to_fail_text = v;
        }
        if let Some(v) = self.ignored_text {
            style.ignored_text = v;
        }
        if let Some(v) = self.unimplemented_text {
            style.unimplemented_text = v;
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fully_populated() {
        let style = AnnotationStyle::new();
        assert_eq!(style.style(), DEFAULT_STYLE);
        assert_eq!(style.heading_tag(), "h5");
        assert_eq!(style.note_prefix(), "");
        assert_eq!(style.reason_prefix(), "Reason:");
        assert_eq!(
            style.expected_to_fail_text(),
            "This example has been marked as EXPECTED TO FAIL"
        );
        assert_eq!(style.ignored_text(), "This example has been marked as IGNORED");
        assert_eq!(
            style.unimplemented_text(),
            "This example has been marked as UNIMPLEMENTED"
        );
    }

    #[test]
    fn invalid_heading_tag_retains_previous_value() {
        let mut style = AnnotationStyle::new();
        style.set_heading_tag("h2").set_heading_tag("bogus");
        assert_eq!(style.heading_tag(), "h2");

        style.set_heading_tag("h7");
        assert_eq!(style.heading_tag(), "h2");
    }

    #[test]
    fn heading_tag_compare_is_case_insensitive_and_stored_as_supplied() {
        let mut style = AnnotationStyle::new();
        style.set_heading_tag("H2");
        assert_eq!(style.heading_tag(), "H2");
    }

    #[test]
    fn setters_chain_and_accept_empty_strings() {
        let mut style = AnnotationStyle::new();
        style
            .set_style("")
            .set_note_prefix("Note:")
            .set_reason_prefix("")
            .set_expected_to_fail_text("custom")
            .set_ignored_text("")
            .set_unimplemented_text("");
        assert_eq!(style.style(), "");
        assert_eq!(style.note_prefix(), "Note:");
        assert_eq!(style.reason_prefix(), "");
        assert_eq!(style.expected_to_fail_text(), "custom");
    }

    #[test]
    fn builder_matches_direct_setters() {
        let built = AnnotationStyle::builder()
            .style("color: red;")
            .heading_tag("h1")
            .note_prefix("Note:")
            .ignored_text("skipped")
            .build();

        let mut direct = AnnotationStyle::new();
        direct
            .set_style("color: red;")
            .set_heading_tag("h1")
            .set_note_prefix("Note:")
            .set_ignored_text("skipped");

        assert_eq!(built, direct);
    }

    #[test]
    fn builder_distinguishes_unset_from_empty_string() {
        let unset = AnnotationStyle::builder().build();
        assert_eq!(unset.reason_prefix(), "Reason:");

        let empty = AnnotationStyle::builder().reason_prefix("").build();
        assert_eq!(empty.reason_prefix(), "");
    }

    #[test]
    fn builder_rejects_invalid_heading_tag() {
        let style = AnnotationStyle::builder()
            .heading_tag("h3")
            .heading_tag("div")
            .build();
        assert_eq!(style.heading_tag(), "h3");

        let untouched = AnnotationStyleBuilder::default().heading_tag("span").build();
        assert_eq!(untouched.heading_tag(), "h5");
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let style = AnnotationStyle::builder()
            .style("color: #ffff00;")
            .heading_tag("h1")
            .note_prefix("Note:")
            .reason_prefix("Because:")
            .expected_to_fail_text("etf")
            .ignored_text("ign")
            .unimplemented_text("unimpl")
            .build();

        let json = serde_json::to_string(&style).expect("serialize");
        let back: AnnotationStyle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(style, back);
    }

    #[test]
    fn deserializing_invalid_heading_tag_falls_back_to_default() {
        let style: AnnotationStyle =
            serde_json::from_str(r#"{"heading_tag": "h9", "note_prefix": "Note:"}"#)
                .expect("deserialize");
        assert_eq!(style.heading_tag(), "h5");
        assert_eq!(style.note_prefix(), "Note:");
    }
}
