// SPDX-License-Identifier: MPL-2.0
//! UI components: the case list sidebar, the detail pane, the image
//! lightbox, and the shared styling layers.

pub mod case_detail;
pub mod case_list;
pub mod design_tokens;
pub mod lightbox;
pub mod styles;
pub mod zoom;
