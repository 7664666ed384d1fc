//! Preferences-panel model.
//!
//! Pure data: the host toolkit renders these rows however it likes. Each
//! row carries an explicit [`PropertyKind`] tag instead of relying on the
//! renderer downcasting to a concrete widget type, and an explicit write
//! target so edits flow back through the correct channel (colours via the
//! tree sync path, everything else straight into the store).

use std::path::PathBuf;

use crate::colour::Colour;
use crate::settings::Settings;
use crate::store::Value;

/// What kind of editor a row needs, with its current value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKind {
    Colour(Colour),
    Toggle(bool),
    Path(PathBuf),
    Number(i64),
}

/// Where an edited row is written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A colour-scheme identifier (tree + mirrored store key).
    ColourEntry(String),
    /// A flat store key.
    StoreKey(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyItem {
    pub label: String,
    pub target: Target,
    pub kind: PropertyKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub items: Vec<PropertyItem>,
}

/// Placeholder for colour entries whose stored value fails to parse.
const BROKEN_COLOUR: Colour = Colour::rgb(255, 0, 0);

/// Build the colour-scheme sections by enumerating the Colours bag in
/// order and grouping on the display-name prefix. Entries with an unknown
/// prefix land in a trailing "Other" section rather than being dropped.
pub fn colour_sections(settings: &Settings) -> Vec<Section> {
    let mut interface = Vec::new();
    let mut editor = Vec::new();
    let mut console = Vec::new();
    let mut other = Vec::new();

    for index in 0..settings.colour_count() {
        let (name, colour) = settings.colour_at(index, BROKEN_COLOUR);
        let item = PropertyItem {
            label: name.clone(),
            target: Target::ColourEntry(name.clone()),
            kind: PropertyKind::Colour(colour),
        };
        if name.starts_with("Interface -") {
            interface.push(item);
        } else if name.starts_with("Editor -") {
            editor.push(item);
        } else if name.starts_with("Console -") {
            console.push(item);
        } else {
            other.push(item);
        }
    }

    let mut sections = vec![
        Section {
            title: "Interface".to_string(),
            items: interface,
        },
        Section {
            title: "Editor".to_string(),
            items: editor,
        },
        Section {
            title: "Console".to_string(),
            items: console,
        },
    ];
    if !other.is_empty() {
        sections.push(Section {
            title: "Other".to_string(),
            items: other,
        });
    }
    sections
}

/// The miscellaneous rows: startup/compile toggles and resource dirs.
pub fn misc_properties(settings: &Settings) -> Vec<PropertyItem> {
    let toggle = |label: &str, key: &str| PropertyItem {
        label: label.to_string(),
        target: Target::StoreKey(key.to_string()),
        kind: PropertyKind::Toggle(settings.int_value(key) != 0),
    };
    let dir = |label: &str, key: &str| PropertyItem {
        label: label.to_string(),
        target: Target::StoreKey(key.to_string()),
        kind: PropertyKind::Path(PathBuf::from(settings.value(key))),
    };

    vec![
        toggle("Auto-load last opened file", "OpenMostRecentFileOnStartup"),
        toggle("Always show plugin on top", "SetAlwaysOnTop"),
        toggle("Compile on save", "CompileOnSave"),
        dir("Engine manual dir.", "EngineManualDir"),
        dir("Patch library dir.", "PatchLibraryDir"),
        dir("Examples dir.", "ExamplesDir"),
    ]
}

/// Write an edited row back through its target channel.
pub fn apply(settings: &mut Settings, item: &PropertyItem) {
    match (&item.target, &item.kind) {
        (Target::ColourEntry(identifier), PropertyKind::Colour(colour)) => {
            settings.set_colour(identifier, *colour);
        }
        (Target::ColourEntry(identifier), kind) => {
            // A non-colour edit aimed at a colour entry is a host bug;
            // keep the store coherent by storing the rendered value.
            tracing::warn!("non-colour edit for colour entry {identifier}: {kind:?}");
        }
        (Target::StoreKey(key), kind) => {
            settings.set_value(key, render(kind));
        }
    }
}

fn render(kind: &PropertyKind) -> Value {
    match kind {
        PropertyKind::Colour(c) => Value::Text(c.to_hex()),
        PropertyKind::Toggle(b) => Value::Int(*b as i64),
        PropertyKind::Path(p) => Value::Text(p.to_string_lossy().into_owned()),
        PropertyKind::Number(n) => Value::Int(*n),
    }
}
