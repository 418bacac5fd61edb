use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::models::TipRecord;

const SCHEMA_VERSION: &str = "2.0";
const HEADING: &str = "Tip of the day";
const HEADING_COLOR: &str = "#d22030";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub metadata: Metadata,
    pub content_container_width: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub version: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "elementType", rename_all = "camelCase")]
pub enum ContentBlock {
    #[serde(rename_all = "camelCase")]
    BlockHeading {
        heading: String,
        heading_font_weight: String,
        heading_level: u8,
        heading_text_alignment: String,
        heading_text_color: String,
    },
    Html { html: String },
}

pub fn build_document(tip: &TipRecord) -> ContentDocument {
    ContentDocument {
        metadata: Metadata {
            version: SCHEMA_VERSION.to_string(),
        },
        content_container_width: "wide".to_string(),
        content: vec![
            ContentBlock::BlockHeading {
                heading: HEADING.to_string(),
                heading_font_weight: "bold".to_string(),
                heading_level: 2,
                heading_text_alignment: "center".to_string(),
                heading_text_color: HEADING_COLOR.to_string(),
            },
            ContentBlock::Html {
                html: tip_html(tip),
            },
        ],
    }
}

fn tip_html(tip: &TipRecord) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"container\" style=\"text-align:center; font-weight:bold;\">\r\n");
    if !tip.category.is_empty() {
        let _ = write!(
            html,
            "<p style=\"text-transform:uppercase;\">{}</p>\r\n",
            escape_html(&tip.category)
        );
    }
    let _ = write!(html, "<p>{}</p>\r\n", escape_html(&tip.title));
    if !tip.description.is_empty() {
        let _ = write!(html, "<p>{}</p>\r\n", escape_html(&tip.description));
    }
    if !tip.link.is_empty() {
        let _ = write!(
            html,
            "<a href=\"{}\" target=\"_blank\">Learn more</a>\r\n",
            escape_html(&tip.link)
        );
    }
    html.push_str("</div>");

    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Writes the document as pretty JSON, creating parent directories.
pub fn write_document(document: &ContentDocument, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}
