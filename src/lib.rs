//! Post-processing pass over rendered test-specification reports.
//!
//! A specification runner renders each example into a report document. When
//! an example is authored with a status modifier (expected to fail, ignored,
//! or unimplemented) plus a free-text reason, the rendered block carries two
//! namespaced attributes and a placeholder paragraph. This crate rewrites
//! those blocks after rendering: the placeholder is replaced by a styled
//! reason line and a styled status headline.
//!
//! The host pipeline owns parsing and serialization; this crate operates on
//! an already-parsed [`dom::Element`] tree and mutates it in place:
//!
//! ```
//! use status_info::{AnnotationStyle, Element, STATUS_NAMESPACE, StatusAnnotator};
//!
//! let mut block = Element::new("div");
//! block.set_attribute_ns("c", "status", STATUS_NAMESPACE, "expectedToFail");
//! block.set_attribute_ns("c", "example", STATUS_NAMESPACE, "flaky under load");
//! block.push_element(Element::new("p"));
//!
//! let mut body = Element::new("body");
//! body.push_element(block);
//! let mut doc = Element::new("html");
//! doc.push_element(body);
//!
//! let annotator = StatusAnnotator::with_style(AnnotationStyle::default());
//! annotator.annotate(&mut doc);
//!
//! let div = doc
//!     .first_child_element("body")
//!     .unwrap()
//!     .first_child_element("div")
//!     .unwrap();
//! assert!(div.first_child_element("p").is_none());
//! assert_eq!(
//!     div.first_child_element("h5").unwrap().text(),
//!     "Reason: flaky under load"
//! );
//! ```

pub mod annotate;
pub mod dom;
pub mod style;

pub use annotate::{STATUS_NAMESPACE, StatusAnnotator};
pub use dom::{Element, Node};
pub use style::{AnnotationStyle, AnnotationStyleBuilder, DEFAULT_STYLE};
