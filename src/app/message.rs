// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::dataset::Dataset;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::case_detail;
use crate::ui::case_list;
use crate::ui::lightbox;
use iced::keyboard;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the startup dataset load.
    DatasetLoaded(Result<Dataset, Error>),
    CaseList(case_list::Message),
    CaseDetail(case_detail::Message),
    Lightbox(lightbox::Message),
    /// Result of one gallery image load. `case_id` guards against
    /// results arriving after the user selected another case.
    ImageLoaded {
        case_id: String,
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Keyboard event not captured by a focused widget.
    KeyPressed(keyboard::Key),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional dataset path or URL to load instead of the default.
    pub dataset: Option<String>,
}
