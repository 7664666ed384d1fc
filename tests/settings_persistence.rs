use std::fs;
use std::path::Path;

use cadenza_settings::{Colour, Settings, StorageOptions};
use tempfile::TempDir;

fn options_in(dir: &TempDir) -> StorageOptions {
    StorageOptions::new("cadenza").with_folder(dir.path())
}

#[test]
fn first_run_then_reopen_round_trips() {
    let dir = TempDir::new().expect("tempdir");

    {
        let mut settings = Settings::open(options_in(&dir));
        // Nothing on disk yet: defaults answer.
        assert_eq!(settings.int_value("FontSize"), 14);

        settings.set_value("FontSize", 16);
        settings.set_colour("Editor - Caret", Colour::rgb(1, 2, 3));
        settings.add_recent_file(Path::new("/home/rw/drone.csd"));
        settings.flush().expect("flush");
    }

    let mut reopened = Settings::open(options_in(&dir));
    assert_eq!(reopened.int_value("FontSize"), 16);
    assert_eq!(
        reopened.colour("Editor - Caret", Colour::BLACK),
        Colour::rgb(1, 2, 3)
    );
    reopened.refresh_recent_files();
    assert_eq!(
        reopened.most_recent_file().as_deref(),
        Some(Path::new("/home/rw/drone.csd"))
    );
}

#[test]
fn drop_flushes_pending_changes() {
    let dir = TempDir::new().expect("tempdir");

    {
        let mut settings = Settings::open(options_in(&dir));
        settings.set_value("GridSize", 8);
        // No explicit flush; Drop persists best-effort.
    }

    let reopened = Settings::open(options_in(&dir));
    assert_eq!(reopened.int_value("GridSize"), 8);
}

#[test]
fn corrupt_properties_file_degrades_to_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let options = options_in(&dir);
    let path = options.file_path().expect("path");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "FontSize = [this is not").unwrap();

    let settings = Settings::open(options);
    assert_eq!(settings.int_value("FontSize"), 14);
}

#[test]
fn defaults_stay_out_of_the_user_file() {
    let dir = TempDir::new().expect("tempdir");
    let options = options_in(&dir);

    {
        let mut settings = Settings::open(options.clone());
        settings.set_value("FontSize", 15);
        settings.flush().expect("flush");
    }

    let content = fs::read_to_string(options.file_path().unwrap()).expect("read");
    assert!(content.contains("FontSize"));
    // Untouched defaults are fallback-only; they are not written out.
    assert!(!content.contains("GridSize"));
}

#[test]
fn legacy_audio_setup_round_trips_without_declaration() {
    let dir = TempDir::new().expect("tempdir");

    {
        let mut settings = Settings::open(options_in(&dir));
        settings.set_audio_setup(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><DEVICESETUP deviceType=\"ALSA\"/>",
        );
        settings.flush().expect("flush");
    }

    let reopened = Settings::open(options_in(&dir));
    assert_eq!(
        reopened.audio_setup().as_deref(),
        Some("<DEVICESETUP deviceType=\"ALSA\"/>")
    );
}
