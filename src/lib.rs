pub mod colour;
pub mod errors;
pub mod notify;
pub mod panel;
pub mod recent;
pub mod settings;
pub mod store;
pub mod tree;

// Re-export commonly used types for convenience
pub use crate::colour::Colour;
pub use crate::errors::SettingsError;
pub use crate::notify::{ChangeNotifier, SettingsEvent, Subscription};
pub use crate::recent::RecentFilesList;
pub use crate::settings::{Settings, WindowGeometry};
pub use crate::store::{PropertyStore, StorageOptions, Value};
pub use crate::tree::{Node, SettingsTree, COLOURS_NODE};
