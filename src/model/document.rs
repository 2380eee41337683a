//! Host-agnostic document tree.
//!
//! The changelog is produced as a small tree of tagged nodes. Adapters in
//! [`crate::formatting`] turn it into whatever the documentation host consumes
//! (HTML, or the JSON form for an external renderer).

use serde::{Deserialize, Serialize};

/// One node of the changelog document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A titled section; `id` is unique per build.
    Section {
        id: String,
        title: String,
        children: Vec<DocumentNode>,
    },
    Paragraph {
        children: Vec<DocumentNode>,
    },
    Emphasis {
        children: Vec<DocumentNode>,
    },
    /// Inline code-style text.
    Literal {
        text: String,
    },
    /// A hyperlink.
    Reference {
        text: String,
        uri: String,
    },
    /// Markup passed through to the output untouched.
    Raw {
        format: String,
        content: String,
    },
    Warning {
        children: Vec<DocumentNode>,
    },
    Tip {
        children: Vec<DocumentNode>,
    },
    Text {
        text: String,
    },
}

impl DocumentNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn reference(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Reference {
            text: text.into(),
            uri: uri.into(),
        }
    }

    pub fn raw_html(content: impl Into<String>) -> Self {
        Self::Raw {
            format: "html".to_string(),
            content: content.into(),
        }
    }

    pub fn paragraph(children: Vec<DocumentNode>) -> Self {
        Self::Paragraph { children }
    }

    pub fn emphasis(children: Vec<DocumentNode>) -> Self {
        Self::Emphasis { children }
    }

    pub fn warning(children: Vec<DocumentNode>) -> Self {
        Self::Warning { children }
    }

    pub fn tip(children: Vec<DocumentNode>) -> Self {
        Self::Tip { children }
    }

    /// Name of the node kind, as used in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Section { .. } => "section",
            Self::Paragraph { .. } => "paragraph",
            Self::Emphasis { .. } => "emphasis",
            Self::Literal { .. } => "literal",
            Self::Reference { .. } => "reference",
            Self::Raw { .. } => "raw",
            Self::Warning { .. } => "warning",
            Self::Tip { .. } => "tip",
            Self::Text { .. } => "text",
        }
    }

    /// Child nodes; leaves return an empty slice.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            Self::Section { children, .. }
            | Self::Paragraph { children }
            | Self::Emphasis { children }
            | Self::Warning { children }
            | Self::Tip { children } => children,
            Self::Literal { .. } | Self::Reference { .. } | Self::Raw { .. } | Self::Text { .. } => {
                &[]
            }
        }
    }

    /// Concatenated human-readable text of this node and its descendants.
    ///
    /// Raw markup is skipped and section titles are included.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } | Self::Literal { text } | Self::Reference { text, .. } => {
                out.push_str(text)
            }
            Self::Section { title, .. } => {
                out.push_str(title);
                for child in self.children() {
                    child.collect_text(out);
                }
            }
            Self::Raw { .. } => {}
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}
