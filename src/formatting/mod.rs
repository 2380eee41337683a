//! Renders releases into the changelog document tree, and the tree into
//! the formats a documentation host consumes.

pub mod html;
pub mod notice;
pub mod release_section;

pub use html::{render_html, HtmlContext};
pub use notice::no_token_document;
pub use release_section::{make_id, node_for_release, release_title};

use crate::config::OutputFormat;
use crate::error::ChangelogError;
use crate::model::DocumentNode;

/// Renders `nodes` in the requested host format.
pub fn render_document(
    nodes: &[DocumentNode],
    format: OutputFormat,
) -> Result<String, ChangelogError> {
    log::debug!("Rendering {} document nodes as {:?}", nodes.len(), format);
    match format {
        OutputFormat::Html => Ok(render_html(nodes, &HtmlContext::default())),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(nodes)?;
            json.push('\n');
            Ok(json)
        }
    }
}
