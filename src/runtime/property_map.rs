use std::{collections::HashMap, rc::Rc};

use crate::runtime::gc::GcHandle;

/// Insertion-ordered property table of an object or array.
///
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: Vec<(Rc<str>, GcHandle)>,
    index: HashMap<Rc<str>, usize>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<GcHandle> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn insert(&mut self, key: Rc<str>, handle: GcHandle) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = handle,
            None => {
                self.index.insert(Rc::clone(&key), self.entries.len());
                self.entries.push((key, handle));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GcHandle)> + '_ {
        self.entries.iter().map(|(key, handle)| (key.as_ref(), *handle))
    }

    pub fn handles(&self) -> impl Iterator<Item = GcHandle> + '_ {
        self.entries.iter().map(|(_, handle)| *handle)
    }
}

impl FromIterator<(Rc<str>, GcHandle)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (Rc<str>, GcHandle)>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for (key, handle) in iter {
            map.insert(key, handle);
        }
        map
    }
}
