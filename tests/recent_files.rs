use std::path::Path;

use cadenza_settings::recent::DEFAULT_MAX_RECENT_FILES;
use cadenza_settings::Settings;

#[test]
fn add_then_refresh_round_trips() {
    let mut settings = Settings::in_memory();
    settings.add_recent_file(Path::new("/home/rw/patches/additive.csd"));
    settings.refresh_recent_files();

    assert_eq!(
        settings.most_recent_file().as_deref(),
        Some(Path::new("/home/rw/patches/additive.csd"))
    );
}

#[test]
fn most_recent_first_and_bounded() {
    let mut settings = Settings::in_memory();
    for i in 0..(DEFAULT_MAX_RECENT_FILES + 5) {
        settings.add_recent_file(Path::new(&format!("/patches/{i}.csd")));
    }

    assert_eq!(settings.recent_files().len(), DEFAULT_MAX_RECENT_FILES);
    // Newest survives at the front; the oldest five were dropped.
    assert_eq!(
        settings.most_recent_file().as_deref(),
        Some(Path::new(&format!(
            "/patches/{}.csd",
            DEFAULT_MAX_RECENT_FILES + 4
        )))
    );
    assert_eq!(
        settings
            .recent_file(DEFAULT_MAX_RECENT_FILES - 1)
            .as_deref(),
        Some(Path::new("/patches/5.csd"))
    );
}

#[test]
fn reopening_a_file_promotes_it() {
    let mut settings = Settings::in_memory();
    settings.add_recent_file(Path::new("/a.csd"));
    settings.add_recent_file(Path::new("/b.csd"));
    settings.add_recent_file(Path::new("/a.csd"));

    assert_eq!(settings.recent_files().len(), 2);
    assert_eq!(settings.most_recent_file().as_deref(), Some(Path::new("/a.csd")));
}

#[test]
fn out_of_range_access_is_defined_and_quiet() {
    let settings = Settings::in_memory();
    assert_eq!(settings.recent_file(0), None);
    assert_eq!(settings.recent_file(999), None);
}

#[test]
fn refresh_survives_a_corrupt_persisted_string() {
    let mut settings = Settings::in_memory();
    settings.set_value("recentlyOpenedFiles", "\n\n/ok.csd\n\n/ok.csd\n   ");
    settings.refresh_recent_files();

    assert_eq!(settings.recent_files().len(), 1);
    assert_eq!(settings.most_recent_file().as_deref(), Some(Path::new("/ok.csd")));
}
