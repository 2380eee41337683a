// src/formatting/html.rs
//! HTML adapter for the changelog document tree.
//!
//! Produces the markup a documentation HTML builder would emit for the same
//! nodes: admonition blocks for warnings and tips, external references,
//! `<code>` literals. Text and attribute values are escaped; raw nodes are
//! written verbatim.

use crate::model::DocumentNode;

/// Settings for an HTML rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct HtmlContext {
    /// Heading level used for top-level section titles.
    pub heading_level: u8,
}

impl Default for HtmlContext {
    fn default() -> Self {
        Self { heading_level: 2 }
    }
}

impl HtmlContext {
    fn nested(self) -> Self {
        Self {
            heading_level: self.heading_level.saturating_add(1).min(6),
        }
    }
}

/// Renders a sequence of nodes into an HTML fragment.
pub fn render_html(nodes: &[DocumentNode], context: &HtmlContext) -> String {
    let mut output = String::new();
    for node in nodes {
        render_node(node, *context, &mut output);
    }
    output
}

fn render_node(node: &DocumentNode, context: HtmlContext, out: &mut String) {
    match node {
        DocumentNode::Section {
            id,
            title,
            children,
        } => {
            let level = context.heading_level;
            out.push_str(&format!("<section id=\"{}\">\n", escape_html(id)));
            out.push_str(&format!("<h{level}>{}</h{level}>\n", escape_html(title)));
            for child in children {
                render_node(child, context.nested(), out);
            }
            out.push_str("</section>\n");
        }
        DocumentNode::Paragraph { children } => {
            out.push_str("<p>");
            render_children(children, context, out);
            out.push_str("</p>\n");
        }
        DocumentNode::Emphasis { children } => {
            out.push_str("<em>");
            render_children(children, context, out);
            out.push_str("</em>");
        }
        DocumentNode::Literal { text } => {
            out.push_str(&format!(
                "<code class=\"docutils literal notranslate\"><span class=\"pre\">{}</span></code>",
                escape_html(text)
            ));
        }
        DocumentNode::Reference { text, uri } => {
            out.push_str(&format!(
                "<a class=\"reference external\" href=\"{}\">{}</a>",
                escape_html(uri),
                escape_html(text)
            ));
        }
        DocumentNode::Raw { format, content } => {
            if format == "html" {
                out.push_str(content);
                out.push('\n');
            } else {
                log::debug!("Skipping raw {} content in HTML output", format);
            }
        }
        DocumentNode::Warning { children } => {
            render_admonition("warning", "Warning", children, context, out)
        }
        DocumentNode::Tip { children } => render_admonition("tip", "Tip", children, context, out),
        DocumentNode::Text { text } => out.push_str(&escape_html(text)),
    }
}

fn render_children(children: &[DocumentNode], context: HtmlContext, out: &mut String) {
    for child in children {
        render_node(child, context, out);
    }
}

fn render_admonition(
    class: &str,
    label: &str,
    children: &[DocumentNode],
    context: HtmlContext,
    out: &mut String,
) {
    out.push_str(&format!("<div class=\"admonition {}\">\n", class));
    out.push_str(&format!("<p class=\"admonition-title\">{}</p>\n", label));
    render_children(children, context, out);
    out.push_str("</div>\n");
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
