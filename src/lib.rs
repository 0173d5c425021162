// SPDX-License-Identifier: MPL-2.0
//! `iced_atlas` is a viewer for educational medical-imaging case
//! collections, built with the Iced GUI framework.
//!
//! It loads a case dataset (a playlist of cases, each with a clinical
//! presentation, a diagnosis, and a set of images), renders a
//! searchable case list, and shows the selected case with a zoomable
//! image lightbox.

pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod media;
pub mod ui;
