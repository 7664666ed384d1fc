//! Hierarchical settings tree.
//!
//! Named nodes carry an ordered property bag plus named children. The tree
//! models grouped settings — in practice the colour scheme under the
//! `"Colours"` child — and broadcasts the changed identifier on every
//! property mutation so the facade can mirror colours into the store.

use crate::colour::Colour;
use crate::notify::{ChangeNotifier, SettingsEvent};

/// Name of the child node holding the colour scheme.
pub const COLOURS_NODE: &str = "Colours";

/// A tree node: a name, an ordered identifier→value bag, named children.
///
/// The bag preserves insertion order because the preferences panel lists
/// colour entries positionally. At most one child exists per name.
#[derive(Clone, Debug, Default)]
pub struct Node {
    name: String,
    properties: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Existing child named `name`, or a newly appended empty one.
    /// Create-or-reuse: calling twice never duplicates a child.
    pub fn ensure_child(&mut self, name: &str) -> &mut Node {
        if let Some(pos) = self.children.iter().position(|c| c.name == name) {
            return &mut self.children[pos];
        }
        self.children.push(Node::new(name));
        self.children.last_mut().unwrap()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Set `identifier` in this node's bag, overwriting in place so the
    /// entry keeps its position.
    pub fn set(&mut self, identifier: &str, value: &str) {
        if let Some(entry) = self
            .properties
            .iter_mut()
            .find(|(id, _)| id == identifier)
        {
            entry.1 = value.to_string();
        } else {
            self.properties
                .push((identifier.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, v)| v.as_str())
    }

    /// Bag entry at `index`, in insertion order.
    pub fn property_at(&self, index: usize) -> Option<(&str, &str)> {
        self.properties
            .get(index)
            .map(|(id, v)| (id.as_str(), v.as_str()))
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// The settings tree plus its change notifier.
pub struct SettingsTree {
    root: Node,
    notifier: ChangeNotifier,
}

impl SettingsTree {
    pub fn new(root_name: &str) -> Self {
        Self {
            root: Node::new(root_name),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn ensure_child(&mut self, name: &str) -> &mut Node {
        self.root.ensure_child(name)
    }

    /// Notifier carrying `SettingsEvent::Property` broadcasts for every
    /// mutation made through [`set_property`].
    ///
    /// [`set_property`]: SettingsTree::set_property
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Resolve `child` (creating it if needed), set `identifier`, and
    /// broadcast the changed identifier.
    pub fn set_property(&mut self, child: &str, identifier: &str, value: &str) {
        self.root.ensure_child(child).set(identifier, value);
        self.notifier
            .broadcast(&SettingsEvent::Property(identifier.to_string()));
    }

    /// Value of `identifier` under `child`, or `""` when either is absent.
    pub fn get_property(&self, child: &str, identifier: &str) -> String {
        self.root
            .child(child)
            .and_then(|c| c.get(identifier))
            .unwrap_or_default()
            .to_string()
    }

    /// Colour stored under the `"Colours"` child. Absent or malformed
    /// entries yield `fallback`.
    pub fn colour(&self, identifier: &str, fallback: Colour) -> Colour {
        self.root
            .child(COLOURS_NODE)
            .and_then(|c| c.get(identifier))
            .and_then(Colour::from_hex)
            .unwrap_or(fallback)
    }

    /// Colour entry at `index` in the `"Colours"` bag, for positional
    /// enumeration. Out-of-range or malformed entries yield `fallback`
    /// with an empty name; indexed access never errors.
    pub fn colour_at(&self, index: usize, fallback: Colour) -> (String, Colour) {
        match self
            .root
            .child(COLOURS_NODE)
            .and_then(|c| c.property_at(index))
        {
            Some((name, value)) => (
                name.to_string(),
                Colour::from_hex(value).unwrap_or(fallback),
            ),
            None => (String::new(), fallback),
        }
    }

    /// Number of entries in the `"Colours"` bag.
    pub fn colour_count(&self) -> usize {
        self.root
            .child(COLOURS_NODE)
            .map(|c| c.property_count())
            .unwrap_or(0)
    }
}
