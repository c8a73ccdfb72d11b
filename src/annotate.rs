//! Rewrites status-annotated example blocks in a rendered specification tree.

use tracing::debug;

use crate::dom::Element;
use crate::style::AnnotationStyle;

/// Namespace URI of the status-extension attributes (`status`, `example`)
/// stamped onto example blocks by the authoring layer. Attribute lookups are
/// scoped to this URI; a `status` attribute in any other namespace is not an
/// annotation marker.
pub const STATUS_NAMESPACE: &str = "http://www.concordion.org/2007/concordion";

/// Why an example did not run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    ExpectedToFail,
    Ignored,
    Unimplemented,
}

impl StatusKind {
    /// Classifies a raw `status` attribute value, trimmed and lowercased.
    /// Unrecognized values map to `None`; those blocks are left untouched.
    fn classify(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "expectedtofail" => Some(Self::ExpectedToFail),
            "ignored" => Some(Self::Ignored),
            "unimplemented" => Some(Self::Unimplemented),
            _ => None,
        }
    }

    fn headline<'a>(self, style: &'a AnnotationStyle) -> &'a str {
        match self {
            Self::ExpectedToFail => style.expected_to_fail_text(),
            Self::Ignored => style.ignored_text(),
            Self::Unimplemented => style.unimplemented_text(),
        }
    }
}

/// Post-processing pass over a fully rendered specification document.
///
/// [`annotate`](Self::annotate) walks the direct `div` children of the
/// document body and rewrites every block that carries both status-extension
/// attributes: the block's placeholder paragraph is replaced by a reason
/// heading and a status headline, both styled from the configured
/// [`AnnotationStyle`].
#[derive(Debug, Clone, Default)]
pub struct StatusAnnotator {
    style: AnnotationStyle,
}

impl StatusAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: AnnotationStyle) -> Self {
        Self { style }
    }

    /// Replaces the presentation configuration.
    pub fn set_style(&mut self, style: AnnotationStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }

    /// Mutates `root` in place. Invoked once per finished document, after
    /// rendering and before serialization.
    ///
    /// Blocks missing either marker attribute, or carrying an unrecognized
    /// status value, are left exactly as they were. A document without a
    /// `body` has nothing to annotate. Re-running over an already-rewritten
    /// tree is a no-op: rewritten blocks keep their marker attributes but no
    /// longer have a placeholder paragraph.
    pub fn annotate(&self, root: &mut Element) {
        let Some(body) = root.first_child_element_mut("body") else {
            return;
        };

        for block in body.child_elements_mut("div") {
            let status = block
                .attribute_ns("status", Some(STATUS_NAMESPACE))
                .map(str::to_owned);
            let reason = block
                .attribute_ns("example", Some(STATUS_NAMESPACE))
                .map(str::to_owned);

            let (Some(status), Some(reason)) = (status, reason) else {
                continue;
            };
            let Some(kind) = StatusKind::classify(&status) else {
                continue;
            };
            let Some(placeholder) = block.position_of("p") else {
                continue;
            };

            let reason_heading = self.heading(self.style.reason_prefix(), &reason);
            let status_heading = self.heading(self.style.note_prefix(), kind.headline(&self.style));

            let at = block.insert_after(placeholder, reason_heading);
            block.insert_after(at, status_heading);
            block.remove_child(placeholder);

            debug!(status = ?kind, reason = %reason, "annotated example block");
        }
    }

    /// One generated heading: `prefix`, a single space, then `body`, with the
    /// prefix doubling as the style class.
    fn heading(&self, prefix: &str, body: &str) -> Element {
        let mut el = Element::new(self.style.heading_tag());
        el.push_text(format!("{prefix} {body}"));
        el.add_class(prefix);
        el.set_attribute("style", self.style.style());
        el
    }
}
