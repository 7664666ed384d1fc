//! The settings facade the rest of the IDE talks to.
//!
//! One `Settings` value owns the property store, the settings tree, the
//! recent-files list and the external change notifier. It is constructed
//! explicitly at application start and passed by reference to whatever
//! needs it; there is no global instance. Dropping it flushes to disk.
//!
//! Colour entries live in both layers: the tree's `"Colours"` child is the
//! editing surface, and every colour mutation made through the facade is
//! mirrored into the store under a `Colours_`-prefixed key before the
//! generic changed signal goes out. All other property families live in
//! the store alone.

use std::path::{Path, PathBuf};

use crate::colour::Colour;
use crate::errors::SettingsError;
use crate::notify::{ChangeNotifier, SettingsEvent, Subscription};
use crate::recent::RecentFilesList;
use crate::store::defaults::{self, AUDIO_SETUP_KEY, COLOURS_PREFIX};
use crate::store::{PropertyStore, StorageOptions, Value};
use crate::tree::{SettingsTree, COLOURS_NODE};

/// Saved main-window placement, backed by the `IDE_LastKnown*` keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

pub struct Settings {
    store: PropertyStore,
    tree: SettingsTree,
    recent: RecentFilesList,
    notifier: ChangeNotifier,
}

impl Settings {
    /// Load the per-user properties file, install the platform default
    /// table as the fallback set, and seed the tree's `"Colours"` child
    /// from the effective colour values.
    pub fn open(options: StorageOptions) -> Self {
        tracing::debug!("opening settings for {}", options.application_name);
        Self::build(PropertyStore::load(options))
    }

    /// A fully initialized in-memory instance that never touches disk.
    /// Hosts embedding the IDE headlessly use this; so do tests.
    pub fn in_memory() -> Self {
        Self::build(PropertyStore::new())
    }

    fn build(mut store: PropertyStore) -> Self {
        store.set_fallback(defaults::default_property_set());

        let mut tree = SettingsTree::new("Settings");
        let colours = tree.ensure_child(COLOURS_NODE);
        for (name, _) in defaults::colour_defaults() {
            // Effective value: the user's stored colour, else the default.
            let value = store.get(&format!("{COLOURS_PREFIX}{name}"));
            colours.set(name, &value);
        }

        Self {
            store,
            tree,
            recent: RecentFilesList::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    // ---- flat store access ------------------------------------------------

    /// String value for `key`; missing keys resolve through the fallback
    /// chain to `""`.
    pub fn value(&self, key: &str) -> String {
        self.store.get(key)
    }

    /// Integer value for `key`; missing or non-numeric values are zero.
    pub fn int_value(&self, key: &str) -> i64 {
        self.store.get_int(key)
    }

    /// Insert or overwrite a flat store value.
    pub fn set_value(&mut self, key: &str, value: impl Into<Value>) {
        self.store.set(key, value);
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    // ---- tree / colour scheme --------------------------------------------

    pub fn tree(&self) -> &SettingsTree {
        &self.tree
    }

    /// Set `identifier` under `child` in the tree. When the `"Colours"`
    /// bag holds a value for the identifier afterwards, it is mirrored
    /// into the store under the namespaced key; either way the generic
    /// changed signal is broadcast.
    pub fn set_tree_property(&mut self, child: &str, identifier: &str, value: &str) {
        self.tree.set_property(child, identifier, value);
        self.sync_colour(identifier);
    }

    /// Set a colour-scheme entry.
    pub fn set_colour(&mut self, identifier: &str, colour: Colour) {
        self.set_tree_property(COLOURS_NODE, identifier, &colour.to_hex());
    }

    pub fn tree_property(&self, child: &str, identifier: &str) -> String {
        self.tree.get_property(child, identifier)
    }

    /// Colour-scheme entry by identifier; absent or malformed entries
    /// yield `fallback`.
    pub fn colour(&self, identifier: &str, fallback: Colour) -> Colour {
        self.tree.colour(identifier, fallback)
    }

    /// Colour-scheme entry by position, for building the preferences
    /// panel. Out-of-range indices yield `fallback` with an empty name.
    pub fn colour_at(&self, index: usize, fallback: Colour) -> (String, Colour) {
        self.tree.colour_at(index, fallback)
    }

    pub fn colour_count(&self) -> usize {
        self.tree.colour_count()
    }

    // The one place the two storage layers are kept consistent.
    fn sync_colour(&mut self, identifier: &str) {
        let value = self.tree.get_property(COLOURS_NODE, identifier);
        if !value.is_empty() {
            self.store
                .set(&format!("{COLOURS_PREFIX}{identifier}"), value);
        }
        self.notifier.broadcast(&SettingsEvent::Changed);
    }

    // ---- change notification ---------------------------------------------

    /// Observe the generic "settings changed" signal. Keep the returned
    /// subscription alive for as long as deliveries are wanted.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SettingsEvent) + Send + Sync + 'static,
    {
        self.notifier.subscribe(callback)
    }

    // ---- recent files -----------------------------------------------------

    /// Record `path` as the most recently opened file.
    pub fn add_recent_file(&mut self, path: &Path) {
        self.recent.add(&mut self.store, path);
    }

    /// Rebuild the recent-files list from its persisted form (and write
    /// the normalized form back).
    pub fn refresh_recent_files(&mut self) {
        self.recent.refresh(&mut self.store);
    }

    /// Recently opened file at `index` (0 = most recent), if any.
    pub fn recent_file(&self, index: usize) -> Option<PathBuf> {
        self.recent.entry(index).map(Path::to_path_buf)
    }

    pub fn most_recent_file(&self) -> Option<PathBuf> {
        self.recent_file(0)
    }

    pub fn recent_files(&self) -> &RecentFilesList {
        &self.recent
    }

    // ---- legacy audio setup ----------------------------------------------

    /// The audio-device setup captured by earlier releases, as normalized
    /// XML (declaration stripped). Absent or malformed content is `None`.
    pub fn audio_setup(&self) -> Option<String> {
        self.store.xml_value(AUDIO_SETUP_KEY)
    }

    pub fn set_audio_setup(&mut self, xml: &str) {
        self.store.set(AUDIO_SETUP_KEY, xml);
    }

    // ---- window geometry ---------------------------------------------------

    pub fn window_geometry(&self) -> WindowGeometry {
        WindowGeometry {
            x: self.store.get_int("IDE_LastKnownX"),
            y: self.store.get_int("IDE_LastKnownY"),
            width: self.store.get_int("IDE_LastKnownWidth"),
            height: self.store.get_int("IDE_LastKnownHeight"),
        }
    }

    pub fn set_window_geometry(&mut self, geometry: WindowGeometry) {
        self.store.set("IDE_LastKnownX", geometry.x);
        self.store.set("IDE_LastKnownY", geometry.y);
        self.store.set("IDE_LastKnownWidth", geometry.width);
        self.store.set("IDE_LastKnownHeight", geometry.height);
    }

    // ---- lifecycle ---------------------------------------------------------

    /// Persist the store. Call at shutdown; `Drop` repeats it best-effort.
    pub fn flush(&self) -> Result<(), SettingsError> {
        self.store.flush()
    }
}

impl Drop for Settings {
    fn drop(&mut self) {
        if let Err(e) = self.store.flush() {
            tracing::error!("failed to flush settings on shutdown: {e}");
        }
    }
}
