//! One-shot import and export.
//!
//! Import parses pasted text and merges it into a [`TokenStore`]. Export
//! renders the current set into an [`ExportArtifact`] and hands it to an
//! [`ArtifactSink`], the seam behind which clipboard or download delivery
//! lives. Either way the caller gets back something it can turn into a
//! [`Notice`] for the user.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokensmith_core::config::ExportConfig;
use tokensmith_core::utils::{ensure_dir_exists, paths::get_app_data_dir, read_to_string, write_string_to_file};
use tracing::{info, warn};

use crate::tokens::errors::TokenError;
use crate::tokens::serializer::{from_json, render};
use crate::tokens::store::{ImportSummary, TokenStore};
use crate::tokens::types::{ExportFormat, TokenSet};

/// `<base>.<ext>` for the given format.
pub fn export_file_name(base_name: &str, format: ExportFormat) -> String {
    format!("{}.{}", base_name, format.extension())
}

/// A rendered export, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
}

impl ExportArtifact {
    pub fn render(tokens: &TokenSet, base_name: &str, format: ExportFormat) -> Result<Self, TokenError> {
        Ok(ExportArtifact {
            format,
            file_name: export_file_name(base_name, format),
            content: render(tokens, format)?,
        })
    }

    /// Renders using the configured base name, falling back to the configured
    /// default format when `format` is `None`.
    pub fn from_config(
        tokens: &TokenSet,
        config: &ExportConfig,
        format: Option<ExportFormat>,
    ) -> Result<Self, TokenError> {
        let format = match format {
            Some(format) => format,
            None => config.default_format.parse()?,
        };
        Self::render(tokens, &config.base_name, format)
    }
}

/// Destination for rendered artifacts.
pub trait ArtifactSink {
    /// Hands `artifact` over. Failures are reported as `TokenError::ExternalIo`.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), TokenError>;
}

/// Writes artifacts as files into one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemSink {
    directory: PathBuf,
}

impl FileSystemSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        FileSystemSink {
            directory: directory.into(),
        }
    }

    /// Uses `output_dir` from the config, or `exports/` under the app data directory.
    pub fn from_config(config: &ExportConfig) -> Result<Self, TokenError> {
        match &config.output_dir {
            Some(dir) => Ok(Self::new(dir.clone())),
            None => get_app_data_dir()
                .map(|data_dir| Self::new(data_dir.join("exports")))
                .map_err(|e| TokenError::ExternalIo {
                    target: "exports".to_string(),
                    source_error: e,
                }),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, artifact: &ExportArtifact) -> PathBuf {
        self.directory.join(&artifact.file_name)
    }
}

impl ArtifactSink for FileSystemSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), TokenError> {
        let path = self.path_for(artifact);
        ensure_dir_exists(&self.directory)
            .and_then(|_| write_string_to_file(&path, &artifact.content))
            .map_err(|e| TokenError::ExternalIo {
                target: artifact.file_name.clone(),
                source_error: e,
            })?;
        info!("Wrote {} tokens to {:?}", artifact.format, path);
        Ok(())
    }
}

/// Parses `text` as canonical JSON and merges it into `store`.
///
/// On any parse failure the store is left exactly as it was.
pub fn import_json(store: &mut TokenStore, text: &str) -> Result<ImportSummary, TokenError> {
    let partial = from_json(text).map_err(|e| {
        warn!("Rejected token import: {}", e);
        TokenError::from(e)
    })?;
    let summary = store.import_merge(partial);
    info!(
        "Imported {} tokens across {} categories",
        summary.tokens,
        summary.categories.len()
    );
    Ok(summary)
}

/// Reads a token document from disk and imports it like pasted text.
pub fn import_json_file(store: &mut TokenStore, path: &Path) -> Result<ImportSummary, TokenError> {
    let text = read_to_string(path).map_err(|e| TokenError::ExternalIo {
        target: path.display().to_string(),
        source_error: e,
    })?;
    import_json(store, &text)
}

/// Renders `tokens` and delivers the result through `sink`.
pub fn export_tokens(
    tokens: &TokenSet,
    base_name: &str,
    format: ExportFormat,
    sink: &mut dyn ArtifactSink,
) -> Result<ExportArtifact, TokenError> {
    let artifact = ExportArtifact::render(tokens, base_name, format)?;
    sink.deliver(&artifact).map_err(|e| {
        warn!("Export of {} failed: {}", artifact.file_name, e);
        e
    })?;
    Ok(artifact)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient message for whatever notifies the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

impl From<&TokenError> for Notice {
    fn from(err: &TokenError) -> Self {
        match err {
            TokenError::Parse(_) => Notice::error(format!("Invalid token JSON: {}", err)),
            TokenError::Validation { message } => Notice::error(message.clone()),
            TokenError::Serialization(_) => Notice::error(format!("Export failed: {}", err)),
            TokenError::ExternalIo { target, .. } => Notice::error(format!("Could not deliver {}", target)),
        }
    }
}

/// What a completed exchange did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Imported(ImportSummary),
    Exported { format: ExportFormat, file_name: String },
}

impl ExchangeOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            ExchangeOutcome::Imported(summary) if summary.categories.is_empty() => {
                Notice::info("No token categories found to import")
            }
            ExchangeOutcome::Imported(summary) => {
                Notice::success(format!("Imported {} tokens", summary.tokens))
            }
            ExchangeOutcome::Exported { format, file_name } => {
                Notice::success(format!("Exported {} tokens to {}", format, file_name))
            }
        }
    }
}

impl From<&ExportArtifact> for ExchangeOutcome {
    fn from(artifact: &ExportArtifact) -> Self {
        ExchangeOutcome::Exported {
            format: artifact.format,
            file_name: artifact.file_name.clone(),
        }
    }
}

/// Collapses an exchange result into the notice to show.
pub fn notice_for(result: &Result<ExchangeOutcome, TokenError>) -> Notice {
    match result {
        Ok(outcome) => outcome.notice(),
        Err(err) => Notice::from(err),
    }
}
