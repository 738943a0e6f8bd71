//! Text extraction from resume file formats

use crate::error::{Result, ScorerError};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static DOCX_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:(?:br|cr)\b[^>]*/>").expect("valid break regex"));

static DOCX_TAB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:tab\b[^>]*/>").expect("valid tab regex"));

/// Body part of a WordprocessingML package
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScorerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text.trim().to_string())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let docx_error = |e: &dyn std::fmt::Display| {
            ScorerError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        };

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_error(&e))?;
        let mut document = archive
            .by_name(DOCX_DOCUMENT_PART)
            .map_err(|e| docx_error(&e))?;

        let mut xml = String::new();
        document.read_to_string(&mut xml)?;
        Ok(docx_xml_to_text(&xml))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content.trim().to_string())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown and strip the markup, one non-empty line per block
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br />", "\n")
        .replace("</p>", "\n\n");
    let stripped = HTML_TAG.replace_all(&text, "");

    let stripped = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    decode_entities(&stripped)
}

/// Raw text of a DOCX body, one non-empty line per paragraph
pub fn docx_xml_to_text(xml: &str) -> String {
    let text = xml.replace("</w:p>", "\n");
    let text = DOCX_BREAK.replace_all(&text, "\n");
    let text = DOCX_TAB.replace_all(&text, "\t");
    let stripped = HTML_TAG.replace_all(&text, "");

    let stripped = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    decode_entities(&stripped)
}

// `&amp;` goes last so escaped entities stay literal
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
