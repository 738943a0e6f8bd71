//! Input manager for resume files

use crate::error::{Result, ScorerError};
use crate::input::file_detector::{FileType, MAX_RESUME_BYTES, SUPPORTED_EXTENSIONS};
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        let file_type = validate_resume_file(path).await?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Check existence, extension and size of a resume file
pub async fn validate_resume_file(path: &Path) -> Result<FileType> {
    let metadata = tokio::fs::metadata(path).await.map_err(|_| {
        ScorerError::InvalidInput(format!("File does not exist: {}", path.display()))
    })?;

    if !metadata.is_file() {
        return Err(ScorerError::InvalidInput(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    let file_type = FileType::from_path(path);
    if !file_type.is_supported() {
        return Err(ScorerError::UnsupportedFormat(format!(
            "{} (allowed: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }

    if metadata.len() > MAX_RESUME_BYTES {
        return Err(ScorerError::InvalidInput(format!(
            "File exceeds the {} MB limit: {}",
            MAX_RESUME_BYTES / (1024 * 1024),
            path.display()
        )));
    }

    Ok(file_type)
}

/// Expand directories into the supported resume files they contain.
///
/// Directories are read one level deep and their files sorted by name;
/// explicit file arguments are passed through for later validation.
pub fn collect_resume_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.is_file() && FileType::from_path(path).is_supported())
                .collect();
            entries.sort();
            debug!("Found {} resume files in {}", entries.len(), input.display());
            paths.extend(entries);
        } else {
            paths.push(input.clone());
        }
    }

    Ok(paths)
}
