//! Mutable document tree consumed and rewritten by the annotator.
//!
//! The host pipeline parses a rendered specification report into this tree,
//! hands it to [`crate::StatusAnnotator`], and serializes the mutated result.
//! The surface is deliberately narrow: read attributes by `(local name,
//! namespace)`, read/enumerate child elements by tag name, insert a sibling
//! after an existing child, remove a child, and build new elements.

use std::fmt;

/// A node in the document tree: an element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A namespaced attribute. The prefix is only used when serializing; lookups
/// match on `(local, namespace)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub prefix: Option<String>,
    pub local: String,
    pub namespace: Option<String>,
    pub value: String,
}

/// An element with a tag name, ordered attributes, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Value of the attribute with this local name outside any namespace.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attribute_ns(local, None)
    }

    /// Value of the attribute matching both local name and namespace URI.
    ///
    /// An attribute with the same local name under a different namespace (or
    /// under no namespace at all) never matches.
    pub fn attribute_ns(&self, local: &str, namespace: Option<&str>) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local == local && a.namespace.as_deref() == namespace)
            .map(|a| a.value.as_str())
    }

    /// Sets (or replaces) an un-namespaced attribute.
    pub fn set_attribute(
        &mut self,
        local: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.set_attribute_inner(None, local.into(), None, value.into())
    }

    /// Sets (or replaces) a namespaced attribute.
    pub fn set_attribute_ns(
        &mut self,
        prefix: impl Into<String>,
        local: impl Into<String>,
        namespace: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.set_attribute_inner(
            Some(prefix.into()),
            local.into(),
            Some(namespace.into()),
            value.into(),
        )
    }

    fn set_attribute_inner(
        &mut self,
        prefix: Option<String>,
        local: String,
        namespace: Option<String>,
        value: String,
    ) -> &mut Self {
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|a| a.local == local && a.namespace == namespace)
        {
            existing.value = value;
        } else {
            self.attributes.push(Attribute {
                prefix,
                local,
                namespace,
                value,
            });
        }
        self
    }

    /// Appends a name to the space-separated `class` attribute.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let merged = match self.attribute("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute("class", merged)
    }

    /// Appends a child element.
    pub fn push_element(&mut self, element: Element) -> &mut Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Appends character data as the last child.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// First direct child element with this tag name, if any.
    pub fn first_child_element(&self, name: &str) -> Option<&Element> {
        self.child_elements(name).next()
    }

    pub fn first_child_element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.child_elements_mut(name).next()
    }

    /// Direct child elements with this tag name, in document order.
    pub fn child_elements<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    pub fn child_elements_mut<'a>(
        &'a mut self,
        name: &str,
    ) -> impl Iterator<Item = &'a mut Element> {
        self.children.iter_mut().filter_map(move |node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Child-list index of the first child element with this tag name.
    ///
    /// Indexes count text nodes too, so they are valid arguments for
    /// [`insert_after`](Self::insert_after) and
    /// [`remove_child`](Self::remove_child).
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, Node::Element(el) if el.name == name))
    }

    /// Inserts `element` as a sibling immediately after the child at `index`
    /// and returns the inserted element's index.
    pub fn insert_after(&mut self, index: usize, element: Element) -> usize {
        self.children.insert(index + 1, Node::Element(element));
        index + 1
    }

    /// Removes and returns the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Node {
        self.children.remove(index)
    }

    /// Concatenated character data of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

impl fmt::Display for Element {
    /// Serializes the subtree as markup. Character data and attribute values
    /// are entity-escaped, so text can never be re-read as live markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            f.write_str(" ")?;
            if let Some(prefix) = &attr.prefix {
                write!(f, "{prefix}:")?;
            }
            write!(
                f,
                "{}=\"{}\"",
                attr.local,
                html_escape::encode_double_quoted_attribute(&attr.value)
            )?;
        }
        if self.children.is_empty() {
            return f.write_str(" />");
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Text(t) => write!(f, "{}", html_escape::encode_text(t))?,
                Node::Element(el) => write!(f, "{el}")?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}
