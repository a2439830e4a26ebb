use crate::parser::TractRecord;
use crate::stats::{AreaKey, CoreArea};
use std::collections::HashMap;

/// Core areas keyed by (code, title), iterated in first-seen order.
#[derive(Debug, Default)]
pub struct CoreAreaMap {
    index: HashMap<AreaKey, usize>,
    areas: Vec<CoreArea>,
}

impl CoreAreaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one tract into its core area, creating the area on first sight.
    pub fn add(&mut self, tract: TractRecord) {
        let key = tract.key();
        match self.index.get(&key) {
            Some(&slot) => self.areas[slot].add_tract(&tract),
            None => {
                self.index.insert(key, self.areas.len());
                self.areas.push(CoreArea::from_tract(tract));
            }
        }
    }

    pub fn get(&self, key: &AreaKey) -> Option<&CoreArea> {
        self.index.get(key).map(|&slot| &self.areas[slot])
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoreArea> {
        self.areas.iter()
    }
}
