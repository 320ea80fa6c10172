/// Ordered collection of bindings produced by one import

use super::{clamp_selection, ResourceBinding};

/// Bindings of one successfully imported asset, plus the selected member
///
/// Replaced wholesale on every selection change; never patched incrementally.
#[derive(Default)]
pub struct TextureSet {
    bindings: Vec<ResourceBinding>,
    selected: usize,
}

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding; bindings keep the importer's texture order
    pub fn push(&mut self, binding: ResourceBinding) {
        self.bindings.push(binding);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a member, clamped like every other UI selection
    pub fn select(&mut self, value: i64) -> usize {
        self.selected = clamp_selection(value, self.bindings.len() as u32) as usize;
        self.selected
    }

    pub fn selected(&self) -> Option<&ResourceBinding> {
        self.bindings.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut ResourceBinding> {
        self.bindings.get_mut(self.selected)
    }

    pub fn get(&self, index: usize) -> Option<&ResourceBinding> {
        self.bindings.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceBinding> {
        self.bindings.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ResourceBinding> {
        self.bindings.iter_mut()
    }

    /// Remove every binding, resetting the selection
    pub fn drain(&mut self) -> Vec<ResourceBinding> {
        self.selected = 0;
        std::mem::take(&mut self.bindings)
    }
}

#[cfg(test)]
#[path = "texture_set_tests.rs"]
mod tests;
