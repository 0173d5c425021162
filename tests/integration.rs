// SPDX-License-Identifier: MPL-2.0
use iced_atlas::config::{self, Config, DEFAULT_ZOOM_STEP};
use iced_atlas::dataset::{self, Source};
use iced_atlas::media::{self, ImageSource};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn config_round_trip_via_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        dataset_path: Some("archive/playlist.json".to_string()),
        zoom_step: Some(DEFAULT_ZOOM_STEP),
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded.dataset_path, config.dataset_path);
    assert_eq!(loaded.zoom_step, Some(DEFAULT_ZOOM_STEP));
}

#[tokio::test]
async fn dataset_loads_from_disk_and_formats_for_display() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    let dataset_path = data_dir.join("playlist_data.json");

    fs::write(
        &dataset_path,
        r#"{
            "id": "200",
            "title": "Neuro Teaching Set",
            "description": "",
            "cases": [
                {
                    "id": "7",
                    "presentation": "Adult patient with acute onset headache and photophobia now",
                    "images": [ { "url": "images/slice1.png" } ]
                }
            ]
        }"#,
    )
    .expect("Failed to write dataset");

    let source = Source::Path(dataset_path);
    let base_dir = source.base_dir();
    let dataset = dataset::load(source).await.expect("Dataset should load");

    let case = &dataset.cases[0];
    assert_eq!(case.display_title(), "Case 7");
    assert!(case.summary_line().ends_with("..."));
    assert_eq!(case.images[0].caption(0), "Image 1");

    // Relative image paths resolve next to the dataset document.
    let resolved = media::resolve(&case.images[0].url, base_dir.as_deref());
    assert_eq!(
        resolved,
        ImageSource::Path(data_dir.join("images/slice1.png"))
    );
}

#[tokio::test]
async fn missing_dataset_load_is_an_io_error() {
    let missing = Source::Path(PathBuf::from("/no/such/dir/playlist_data.json"));
    match dataset::load(missing).await {
        Err(iced_atlas::error::Error::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_dataset_is_a_json_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let dataset_path = dir.path().join("playlist_data.json");
    fs::write(&dataset_path, "{ definitely not json").expect("Failed to write file");

    match dataset::load(Source::Path(dataset_path)).await {
        Err(iced_atlas::error::Error::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[tokio::test]
async fn gallery_image_loads_relative_to_dataset() {
    use image_rs::{Rgba, RgbaImage};

    let dir = tempdir().expect("Failed to create temporary directory");
    let images_dir = dir.path().join("images");
    fs::create_dir_all(&images_dir).expect("Failed to create images dir");
    RgbaImage::from_pixel(8, 6, Rgba([0, 0, 255, 255]))
        .save(images_dir.join("slice1.png"))
        .expect("Failed to write png");

    let source = media::resolve("images/slice1.png", Some(dir.path()));
    let data = media::load_image(source)
        .await
        .expect("Image should decode");
    assert_eq!((data.width, data.height), (8, 6));
}
