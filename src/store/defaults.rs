//! The application default table installed as the store's fallback set.
//!
//! This is configuration data, not logic: install-relative resource paths
//! (platform-specific), UI dimensions, feature toggles and the stock
//! colour scheme. User values in the primary store shadow all of it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories_next::UserDirs;

use crate::store::Value;

/// Store-key prefix under which colour-scheme entries are mirrored.
pub const COLOURS_PREFIX: &str = "Colours_";

/// Store key of the serialized recent-files list.
pub const RECENT_FILES_KEY: &str = "recentlyOpenedFiles";

/// Store key of the legacy audio-setup XML sub-document.
pub const AUDIO_SETUP_KEY: &str = "audioSetup";

/// The stock colour scheme, in the order the preferences panel lists it.
/// Values are `AARRGGBB` hex strings; display names carry the section
/// prefix the panel groups by.
pub fn colour_defaults() -> &'static [(&'static str, &'static str)] {
    &[
        ("Interface - Menu Bar Background", "ff52636a"),
        ("Interface - Menu Bar Text", "ffffffff"),
        ("Interface - Menu Bar Highlight", "ff5c7387"),
        ("Interface - Popup Menu Background", "ff474e54"),
        ("Interface - Popup Menu Text", "ffd9e4e7"),
        ("Interface - Popup Menu Highlight", "ff6c8090"),
        ("Interface - Popup Menu Highlighted Text", "ffffffff"),
        ("Interface - Main Background", "ff000000"),
        ("Interface - Status Bar", "ff000000"),
        ("Interface - Status Bar Text", "ffffffff"),
        ("Interface - Property Panel Background", "ff222222"),
        ("Interface - Property Label Text", "ff000000"),
        ("Interface - Property Label Background", "ffd4d4d4"),
        ("Interface - Alert Window Background", "ff000000"),
        ("Interface - Scrollbars", "ff5a626f"),
        ("Interface - File Tab Bar", "ff323232"),
        ("Interface - File Tab Button", "ff52636a"),
        ("Interface - File Tab Text", "ffc8c8c8"),
        ("Interface - Generic Plugin Interface", "ff666666"),
        ("Editor - Background", "ff263238"),
        ("Editor - Line Number Background", "ff323e44"),
        ("Editor - Line Numbers", "e999a7ae"),
        ("Editor - Selected Text Background", "ff3f616c"),
        ("Editor - Caret", "fff39636"),
        ("Editor - Identifier Literal", "ffcfcfcf"),
        ("Editor - String Literal", "ff8ac3f3"),
        ("Editor - Keyword", "ffee6f6f"),
        ("Editor - Comment", "ff72d20c"),
        ("Editor - Numbers", "ffe9ec64"),
        ("Editor - Score Tags", "ffbf74c5"),
        ("Console - Text", "ff566c7b"),
        ("Console - Background", "ff16191d"),
        ("Console - Outline", "ffa6b3b9"),
    ]
}

/// Build the complete default property set for this platform.
pub fn default_property_set() -> BTreeMap<String, Value> {
    let home = home_dir();
    let paths = platform_paths(&home);

    let mut defaults: BTreeMap<String, Value> = BTreeMap::new();
    let mut put = |key: &str, value: Value| {
        defaults.insert(key.to_string(), value);
    };

    put("EngineManualDir", text(&paths.engine_manual));
    put("IdeManualDir", text(&paths.ide_manual));
    put("ExamplesDir", text(&paths.examples));
    put("CustomIconsDir", text(&paths.icons));
    put("PatchLibraryDir", text(&home.join("Patches")));
    put("MostRecentDirectory", text(&home));
    put("UserFilesDir", text(&home));

    put("OpenMostRecentFileOnStartup", Value::Int(1));
    put("ShowEditorConsole", Value::Int(1));
    put("ShowConsoleWithEditor", Value::Int(1));
    put("ExternalEditor", Value::Int(0));
    put("AudioEnabled", Value::Int(1));
    put("CompileOnSave", Value::Int(1));
    put("SetAlwaysOnTop", Value::Int(1));
    put("ShowTabs", Value::Int(1));
    put("EnablePopupDisplay", Value::Int(1));
    put("ShowAutoComplete", Value::Int(0));
    put("ShowNativeFileDialogues", Value::Int(1));
    put("SearchCaseSensitive", Value::Int(0));

    put("FontSize", Value::Int(14));
    put("FontSizeConsole", Value::Int(14));
    put("GridSize", Value::Int(4));
    put("SpacesInTabs", Value::Int(4));
    put("NumberOfLinesToScroll", Value::Int(1));
    put("EditorColourScheme", Value::Int(0));
    put("NumberOfOpenFiles", Value::Int(1));

    put("windowX", Value::Int(100));
    put("windowY", Value::Int(100));
    put("IDE_LastKnownWidth", Value::Int(1200));
    put("IDE_LastKnownHeight", Value::Int(800));
    put("IDE_LastKnownX", Value::Int(10));
    put("IDE_LastKnownY", Value::Int(10));
    put("IDE_StatusBarPos", Value::Int(500));

    put(AUDIO_SETUP_KEY, Value::Text(String::new()));

    for (name, hex) in colour_defaults() {
        put(
            &format!("{COLOURS_PREFIX}{name}"),
            Value::Text((*hex).to_string()),
        );
    }

    defaults
}

struct PlatformPaths {
    engine_manual: PathBuf,
    ide_manual: PathBuf,
    examples: PathBuf,
    icons: PathBuf,
}

#[cfg(windows)]
fn platform_paths(_home: &Path) -> PlatformPaths {
    let exe = exe_dir();
    PlatformPaths {
        engine_manual: PathBuf::from("C:\\Program Files\\Cadenza\\doc\\manual"),
        ide_manual: exe.join("Manual"),
        examples: exe.join("Examples"),
        icons: exe.join("Icons").join("modern-darkBG"),
    }
}

#[cfg(target_os = "macos")]
fn platform_paths(_home: &Path) -> PlatformPaths {
    // App bundle layout: resources sit beside the bundle, not the binary.
    let exe = exe_dir();
    let bundle = exe.parent().map(PathBuf::from).unwrap_or_else(|| exe.clone());
    PlatformPaths {
        engine_manual: PathBuf::from(
            "/Library/Frameworks/CadenzaEngine.framework/Resources/Manual",
        ),
        ide_manual: bundle.join("Manual"),
        examples: bundle.join("Examples"),
        icons: exe.join("Icons").join("modern-darkBG"),
    }
}

#[cfg(not(any(windows, target_os = "macos")))]
fn platform_paths(_home: &Path) -> PlatformPaths {
    PlatformPaths {
        engine_manual: PathBuf::from("/usr/share/doc/cadenza-engine/manual"),
        ide_manual: PathBuf::from("/usr/share/doc/cadenza/manual"),
        examples: PathBuf::from("/usr/share/doc/cadenza/examples"),
        icons: exe_dir().join("Icons").join("modern-darkBG"),
    }
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn home_dir() -> PathBuf {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn text(path: &Path) -> Value {
    Value::Text(path.to_string_lossy().into_owned())
}
