// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the dataset and every piece of view state
//! (search term, selection, lightbox) and translates messages into
//! state changes or side effects like dataset and image loading. All
//! mutation happens inside `update`, so the UI state has a single
//! writer.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::dataset::{self, Case, Dataset, Source};
use crate::media;
use crate::ui::case_detail::{GallerySlot, SlotContent};
use crate::ui::case_list;
use crate::ui::lightbox::{self, Lightbox};
use iced::{keyboard, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

const APP_TITLE: &str = "IcedAtlas";

/// Selection mirror: the selected case's id plus one load slot per
/// image. Replaced wholesale whenever another case is selected.
#[derive(Debug, Clone)]
struct Selected {
    case_id: String,
    slots: Vec<GallerySlot>,
}

/// Root Iced application state.
pub struct App {
    dataset: Dataset,
    /// Directory the dataset was loaded from, for resolving relative
    /// image paths. `None` for remote datasets.
    base_dir: Option<PathBuf>,
    case_list: case_list::State,
    selected: Option<Selected>,
    lightbox: Lightbox,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cases", &self.dataset.cases.len())
            .field("selected", &self.selected.as_ref().map(|s| &s.case_id))
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            base_dir: None,
            case_list: case_list::State::default(),
            selected: None,
            lightbox: Lightbox::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming flags once (iced 0.14 requires
    // Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the asynchronous
    /// dataset load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_default();
        if config.normalize() {
            // Rewrite the file so future runs read the clamped value.
            if let Err(err) = config::save(&config) {
                eprintln!("Failed to save settings: {err}");
            }
        }

        let mut app = App::default();
        if let Some(step) = config.zoom_step {
            app.lightbox.zoom.set_step(step);
        }

        let source_arg = flags
            .dataset
            .or(config.dataset_path)
            .unwrap_or_else(|| dataset::DEFAULT_DATASET_PATH.to_owned());
        let source = Source::from_arg(&source_arg);
        app.base_dir = source.base_dir();

        let task = Task::perform(dataset::load(source), Message::DatasetLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        if self.dataset.title.is_empty() {
            APP_TITLE.to_owned()
        } else {
            format!("{} - {APP_TITLE}", self.dataset.title)
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(Ok(dataset)) => {
                self.dataset = dataset;
                Task::none()
            }
            Message::DatasetLoaded(Err(err)) => {
                // The UI must never be empty; fall back to the sample
                // dataset and keep the failure in the diagnostic log.
                eprintln!("Failed to load dataset: {err}");
                self.dataset = dataset::placeholder();
                Task::none()
            }
            Message::CaseList(list_message) => {
                let selection = match &list_message {
                    case_list::Message::CasePressed(id) => Some(id.clone()),
                    case_list::Message::SearchChanged(_) => None,
                };
                self.case_list.handle(list_message);
                match selection {
                    Some(id) => self.select_case(&id),
                    None => Task::none(),
                }
            }
            Message::CaseDetail(crate::ui::case_detail::Message::ThumbnailPressed(index)) => {
                self.lightbox
                    .handle(lightbox::Message::Open(index), self.image_count());
                Task::none()
            }
            Message::Lightbox(lightbox_message) => {
                self.lightbox.handle(lightbox_message, self.image_count());
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.handle_key(key);
                Task::none()
            }
            Message::ImageLoaded {
                case_id,
                index,
                result,
            } => {
                self.handle_image_loaded(&case_id, index, result);
                Task::none()
            }
        }
    }

    /// Selects the case with `id`, replacing the mirrored image slots,
    /// closing the lightbox, and spawning one load task per image.
    fn select_case(&mut self, id: &str) -> Task<Message> {
        let Some(case) = self.dataset.cases.iter().find(|case| case.id == id) else {
            return Task::none();
        };

        let images = case.images.clone();
        self.selected = Some(Selected {
            case_id: id.to_owned(),
            slots: images.iter().map(|_| GallerySlot::loading()).collect(),
        });
        self.lightbox
            .handle(lightbox::Message::Close, images.len());

        let base_dir = self.base_dir.clone();
        let case_id = id.to_owned();
        let tasks = images.into_iter().enumerate().map(move |(index, image)| {
            let source = media::resolve(&image.url, base_dir.as_deref());
            let case_id = case_id.clone();
            Task::perform(media::load_image(source), move |result| {
                Message::ImageLoaded {
                    case_id: case_id.clone(),
                    index,
                    result,
                }
            })
        });

        Task::batch(tasks)
    }

    fn handle_key(&mut self, key: keyboard::Key) {
        if !self.lightbox.is_open() {
            return;
        }

        let count = self.image_count();
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.lightbox.handle(lightbox::Message::Close, count);
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.lightbox.handle(lightbox::Message::Previous, count);
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.lightbox.handle(lightbox::Message::Next, count);
            }
            _ => {}
        }
    }

    fn handle_image_loaded(
        &mut self,
        case_id: &str,
        index: usize,
        result: crate::error::Result<media::ImageData>,
    ) {
        // Results for a case that is no longer selected are stale.
        let Some(selected) = self.selected.as_mut().filter(|s| s.case_id == case_id) else {
            return;
        };
        let Some(slot) = selected.slots.get_mut(index) else {
            return;
        };

        slot.content = match result {
            Ok(data) => SlotContent::Ready(data),
            Err(err) => {
                eprintln!("Failed to load image {index} for case {case_id}: {err}");
                SlotContent::Failed
            }
        };
    }

    /// Image count of the selected case; zero before any selection.
    fn image_count(&self) -> usize {
        self.selected.as_ref().map_or(0, |s| s.slots.len())
    }

    fn selected_case(&self) -> Option<&Case> {
        let selected = self.selected.as_ref()?;
        self.dataset
            .cases
            .iter()
            .find(|case| case.id == selected.case_id)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            case_list: &self.case_list,
            cases: &self.dataset.cases,
            selected_case: self.selected_case(),
            slots: self
                .selected
                .as_ref()
                .map_or(&[][..], |s| s.slots.as_slice()),
            lightbox: &self.lightbox,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Case, CaseImage};
    use crate::error::Error;
    use crate::media::ImageData;
    use crate::ui::zoom::DEFAULT_ZOOM;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    fn sample_image_data() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255_u8; 4])
    }

    fn app_with_placeholder() -> App {
        let mut app = App::default();
        let _ = app.update(Message::DatasetLoaded(Ok(dataset::placeholder())));
        app
    }

    fn select(app: &mut App, id: &str) {
        let _ = app.update(Message::CaseList(case_list::Message::CasePressed(
            id.to_owned(),
        )));
    }

    fn open_lightbox(app: &mut App, index: usize) {
        let _ = app.update(Message::CaseDetail(
            crate::ui::case_detail::Message::ThumbnailPressed(index),
        ));
    }

    #[test]
    fn default_app_has_no_selection() {
        let app = App::default();
        assert!(app.selected.is_none());
        assert!(!app.lightbox.is_open());
        assert!(app.dataset.cases.is_empty());
    }

    #[test]
    fn dataset_loaded_ok_replaces_dataset() {
        let mut app = App::default();
        let _ = app.update(Message::DatasetLoaded(Ok(dataset::placeholder())));
        assert_eq!(app.dataset.cases.len(), 3);
        assert_eq!(app.title(), "Sample Medical Imaging Playlist - IcedAtlas");
    }

    #[test]
    fn dataset_load_failure_falls_back_to_placeholder() {
        let mut app = App::default();
        let _ = app.update(Message::DatasetLoaded(Err(Error::Io("boom".into()))));
        assert_eq!(app.dataset, dataset::placeholder());
    }

    #[test]
    fn selecting_a_case_mirrors_its_images() {
        let mut app = app_with_placeholder();
        select(&mut app, "2");

        let selected = app.selected.as_ref().expect("case should be selected");
        assert_eq!(selected.case_id, "2");
        assert_eq!(selected.slots.len(), 2);
        assert_eq!(app.selected_case().map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn exactly_one_case_is_active_after_selection() {
        let mut app = app_with_placeholder();
        select(&mut app, "2");

        let active_id = app.selected_case().map(|c| c.id.as_str());
        let active: Vec<&Case> = app
            .dataset
            .cases
            .iter()
            .filter(|case| Some(case.id.as_str()) == active_id)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "2");
    }

    #[test]
    fn reselection_replaces_mirrored_slots() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        assert_eq!(app.image_count(), 2);

        select(&mut app, "3");
        assert_eq!(app.image_count(), 1);
        assert_eq!(app.selected.as_ref().unwrap().case_id, "3");
    }

    #[test]
    fn selecting_unknown_case_is_ignored() {
        let mut app = app_with_placeholder();
        select(&mut app, "99");
        assert!(app.selected.is_none());
    }

    #[test]
    fn selection_closes_the_lightbox() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        open_lightbox(&mut app, 1);
        assert!(app.lightbox.is_open());

        select(&mut app, "2");
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn thumbnail_press_opens_lightbox_at_index() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        open_lightbox(&mut app, 1);

        assert_eq!(app.lightbox.index(), Some(1));
        assert_eq!(app.lightbox.zoom.factor, DEFAULT_ZOOM);
    }

    #[test]
    fn arrow_keys_navigate_with_wrap_while_open() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        open_lightbox(&mut app, 1);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.lightbox.index(), Some(0));

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowLeft)));
        assert_eq!(app.lightbox.index(), Some(1));
    }

    #[test]
    fn escape_closes_the_lightbox() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        open_lightbox(&mut app, 0);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn keys_are_ignored_while_lightbox_is_closed() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn zoom_controls_clamp_and_reset_through_update() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        open_lightbox(&mut app, 0);

        for _ in 0..30 {
            let _ = app.update(Message::Lightbox(lightbox::Message::ZoomIn));
        }
        assert_eq!(app.lightbox.zoom.factor, crate::ui::zoom::MAX_ZOOM);

        let _ = app.update(Message::Lightbox(lightbox::Message::ResetZoom));
        assert_eq!(app.lightbox.zoom.factor, DEFAULT_ZOOM);
    }

    #[test]
    fn image_loaded_fills_the_matching_slot() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");

        let _ = app.update(Message::ImageLoaded {
            case_id: "1".to_owned(),
            index: 0,
            result: Ok(sample_image_data()),
        });

        let selected = app.selected.as_ref().unwrap();
        assert!(matches!(selected.slots[0].content, SlotContent::Ready(_)));
        assert!(matches!(selected.slots[1].content, SlotContent::Loading));
    }

    #[test]
    fn image_load_failure_marks_slot_failed_only() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");

        let _ = app.update(Message::ImageLoaded {
            case_id: "1".to_owned(),
            index: 1,
            result: Err(Error::Http("404 Not Found".into())),
        });

        let selected = app.selected.as_ref().unwrap();
        assert!(matches!(selected.slots[0].content, SlotContent::Loading));
        assert!(matches!(selected.slots[1].content, SlotContent::Failed));
    }

    #[test]
    fn stale_image_results_are_dropped() {
        let mut app = app_with_placeholder();
        select(&mut app, "1");
        select(&mut app, "3");

        let _ = app.update(Message::ImageLoaded {
            case_id: "1".to_owned(),
            index: 0,
            result: Ok(sample_image_data()),
        });

        let selected = app.selected.as_ref().unwrap();
        assert_eq!(selected.case_id, "3");
        assert!(matches!(selected.slots[0].content, SlotContent::Loading));
    }

    #[test]
    fn case_without_images_never_opens_the_lightbox() {
        let mut app = App::default();
        let dataset = Dataset {
            id: "x".into(),
            title: "Playlist".into(),
            description: String::new(),
            cases: vec![Case {
                id: "empty".into(),
                title: None,
                presentation: None,
                diagnosis: None,
                images: Vec::new(),
            }],
        };
        let _ = app.update(Message::DatasetLoaded(Ok(dataset)));
        select(&mut app, "empty");

        open_lightbox(&mut app, 0);
        assert!(!app.lightbox.is_open());

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn case_with_remote_and_relative_images_resolves_sources() {
        let mut app = App::default();
        app.base_dir = Some(PathBuf::from("data"));
        let dataset = Dataset {
            id: "x".into(),
            title: "Playlist".into(),
            description: String::new(),
            cases: vec![Case {
                id: "1".into(),
                title: None,
                presentation: None,
                diagnosis: None,
                images: vec![CaseImage {
                    url: "images/a.png".into(),
                    alt: None,
                    title: None,
                }],
            }],
        };
        let _ = app.update(Message::DatasetLoaded(Ok(dataset)));

        // Selection spawns the load task without touching slot state.
        select(&mut app, "1");
        assert_eq!(app.image_count(), 1);
        assert!(matches!(
            app.selected.as_ref().unwrap().slots[0].content,
            SlotContent::Loading
        ));
    }

    #[test]
    fn search_query_survives_selection() {
        let mut app = app_with_placeholder();
        let _ = app.update(Message::CaseList(case_list::Message::SearchChanged(
            "mri".to_owned(),
        )));
        select(&mut app, "1");

        assert_eq!(app.case_list.query, "mri");
        assert_eq!(app.selected.as_ref().unwrap().case_id, "1");
    }

    #[test]
    fn title_falls_back_to_app_name_without_dataset() {
        let app = App::default();
        assert_eq!(app.title(), "IcedAtlas");
    }
}
