use std::collections::BTreeMap;

use crate::error::{RenderError, Result};

/// A named fragment buffer. Fragments accumulate in append order and are
/// never replaced or reordered; rendering into the same mount twice leaves
/// both batches in place.
#[derive(Debug, Default)]
pub struct Mount {
    fragments: Vec<String>,
}

impl Mount {
    pub fn new() -> Mount {
        Mount { fragments: vec![] }
    }

    pub fn append(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn inner_html(&self) -> String {
        self.fragments.join("\n")
    }
}

/// In-memory registry of mounts, keyed by their stable element id. This is
/// the string-buffer stand-in for the page a browser would hold.
#[derive(Debug, Default)]
pub struct Document {
    mounts: BTreeMap<String, Mount>,
}

impl Document {
    pub fn new() -> Document {
        Document {
            mounts: BTreeMap::new(),
        }
    }

    pub fn with_mount(id: &str) -> Document {
        let mut document = Document::new();
        document.add_mount(id);
        document
    }

    pub fn add_mount(&mut self, id: &str) {
        self.mounts.insert(id.to_string(), Mount::new());
    }

    pub fn mount(&self, id: &str) -> Option<&Mount> {
        self.mounts.get(id)
    }

    pub fn mount_mut(&mut self, id: &str) -> Result<&mut Mount> {
        self.mounts
            .get_mut(id)
            .ok_or_else(|| RenderError::MissingMount { id: id.to_string() })
    }

    pub fn inner_html(&self, id: &str) -> Result<String> {
        self.mounts
            .get(id)
            .map(Mount::inner_html)
            .ok_or_else(|| RenderError::MissingMount { id: id.to_string() })
    }
}
