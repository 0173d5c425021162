// SPDX-License-Identifier: MPL-2.0
//! Case dataset model, loading, and display formatting.
//!
//! A dataset is a playlist of educational imaging cases, loaded once at
//! startup from a JSON document and read-only afterwards. When the
//! document is missing, unreachable, or malformed, the built-in sample
//! dataset is substituted so the UI always has cases to render.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative resource consulted when neither the CLI nor the config
/// names a dataset source.
pub const DEFAULT_DATASET_PATH: &str = "data/playlist_data.json";

/// Number of presentation characters shown in a case's summary line.
pub const SUMMARY_PRESENTATION_CHARS: usize = 60;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: Option<String>,
    pub presentation: Option<String>,
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub images: Vec<CaseImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseImage {
    pub url: String,
    pub alt: Option<String>,
    pub title: Option<String>,
}

/// Returns the first populated string, treating `Some("")` as absent.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Case {
    /// Title shown in the case list and detail pane.
    pub fn display_title(&self) -> String {
        non_empty(self.title.as_ref())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Case {}", self.id))
    }

    /// One-line summary shown under the title in the case list:
    /// diagnosis, else a truncated presentation, else a generic prompt.
    pub fn summary_line(&self) -> String {
        if let Some(diagnosis) = non_empty(self.diagnosis.as_ref()) {
            return diagnosis.to_owned();
        }
        if let Some(presentation) = non_empty(self.presentation.as_ref()) {
            let truncated: String = presentation
                .chars()
                .take(SUMMARY_PRESENTATION_CHARS)
                .collect();
            return format!("{truncated}...");
        }
        "Click to view details".to_owned()
    }

    /// Case-insensitive substring match against the displayed title and
    /// summary. Filtering uses the same strings the list renders, so a
    /// term hidden by summary truncation does not match.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.display_title().to_lowercase().contains(&term)
            || self.summary_line().to_lowercase().contains(&term)
    }
}

impl CaseImage {
    /// Caption shown under a thumbnail and in the lightbox.
    /// `index` is zero-based; the fallback label is one-based.
    pub fn caption(&self, index: usize) -> String {
        non_empty(self.title.as_ref())
            .or_else(|| non_empty(self.alt.as_ref()))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Image {}", index + 1))
    }
}

/// Where a dataset document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Interprets a CLI argument or config value: anything starting
    /// with an HTTP scheme is fetched, everything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_owned())
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Directory against which relative image paths are resolved.
    /// Remote datasets have no base directory.
    pub fn base_dir(&self) -> Option<PathBuf> {
        match self {
            Source::Path(path) => path.parent().map(Path::to_path_buf),
            Source::Url(_) => None,
        }
    }
}

/// Parses a dataset document.
pub fn parse(json: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(json)?)
}

/// Loads and parses the dataset from `source`.
///
/// # Errors
///
/// Returns [`Error::Io`] when a file source cannot be read,
/// [`Error::Http`] when a remote source fails or answers with a
/// non-success status, and [`Error::Json`] when the document does not
/// match the dataset shape. The caller substitutes the placeholder
/// dataset on any of these.
pub async fn load(source: Source) -> Result<Dataset> {
    match source {
        Source::Path(path) => {
            let content = fs::read_to_string(&path)?;
            parse(&content)
        }
        Source::Url(url) => {
            let response = reqwest::get(&url).await?;
            let response = response.error_for_status().map_err(Error::from)?;
            let content = response.text().await?;
            parse(&content)
        }
    }
}

/// The built-in sample dataset used whenever the real document cannot
/// be loaded. The content is fixed; downstream tests compare against
/// these literals.
pub fn placeholder() -> Dataset {
    Dataset {
        id: "85715".to_owned(),
        title: "Sample Medical Imaging Playlist".to_owned(),
        description: "Educational cases for medical imaging".to_owned(),
        cases: vec![
            Case {
                id: "1".to_owned(),
                title: Some("Case 1: Brain MRI".to_owned()),
                presentation: Some(
                    "This case demonstrates a typical brain MRI scan with various sequences."
                        .to_owned(),
                ),
                diagnosis: Some("Normal brain anatomy".to_owned()),
                images: vec![
                    CaseImage {
                        url: "https://via.placeholder.com/800x600/667eea/ffffff?text=Brain+MRI+T1"
                            .to_owned(),
                        alt: Some("Brain MRI - T1 weighted".to_owned()),
                        title: Some("T1 weighted sequence".to_owned()),
                    },
                    CaseImage {
                        url: "https://via.placeholder.com/800x600/764ba2/ffffff?text=Brain+MRI+T2"
                            .to_owned(),
                        alt: Some("Brain MRI - T2 weighted".to_owned()),
                        title: Some("T2 weighted sequence".to_owned()),
                    },
                ],
            },
            Case {
                id: "2".to_owned(),
                title: Some("Case 2: Chest CT".to_owned()),
                presentation: Some(
                    "CT scan of the chest showing normal anatomical structures.".to_owned(),
                ),
                diagnosis: Some("Normal chest anatomy".to_owned()),
                images: vec![
                    CaseImage {
                        url: "https://via.placeholder.com/800x600/48bb78/ffffff?text=Chest+CT+Axial"
                            .to_owned(),
                        alt: Some("Chest CT - Axial view".to_owned()),
                        title: Some("Axial view".to_owned()),
                    },
                    CaseImage {
                        url: "https://via.placeholder.com/800x600/38ada9/ffffff?text=Chest+CT+Coronal"
                            .to_owned(),
                        alt: Some("Chest CT - Coronal view".to_owned()),
                        title: Some("Coronal view".to_owned()),
                    },
                ],
            },
            Case {
                id: "3".to_owned(),
                title: Some("Case 3: Abdominal MRI".to_owned()),
                presentation: Some(
                    "Abdominal MRI demonstrating liver and adjacent structures.".to_owned(),
                ),
                diagnosis: Some("Normal abdominal anatomy".to_owned()),
                images: vec![CaseImage {
                    url: "https://via.placeholder.com/800x600/f39c12/ffffff?text=Abdominal+MRI+T1"
                        .to_owned(),
                    alt: Some("Abdominal MRI - T1".to_owned()),
                    title: Some("T1 weighted".to_owned()),
                }],
            },
        ],
    }
}
