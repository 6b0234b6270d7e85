//! Insertion-ordered record arena with an identifier index

use std::collections::HashMap;

use roster_core::{RecordId, Student, Task, Vehicle};

/// Records addressable by a [`RecordId`]
pub trait Keyed {
    fn key(&self) -> RecordId;
}

impl Keyed for Student {
    fn key(&self) -> RecordId {
        self.id
    }
}

impl Keyed for Task {
    fn key(&self) -> RecordId {
        self.id
    }
}

impl Keyed for Vehicle {
    fn key(&self) -> RecordId {
        self.id
    }
}

/// Vector of records in insertion order, plus a map from id to position
#[derive(Debug, Clone)]
pub struct RecordArena<T> {
    records: Vec<T>,
    index: HashMap<RecordId, usize>,
}

impl<T> Default for RecordArena<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> RecordArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record. Returns `false` and leaves the arena unchanged if the
    /// id is already present.
    pub fn push(&mut self, record: T) -> bool {
        let id = record.key();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        true
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        match self.index.get(&id) {
            Some(&pos) => self.records.get_mut(pos),
            None => None,
        }
    }

    /// Remove a record, preserving the order of the rest
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let pos = self.index.remove(&id)?;
        let record = self.records.remove(pos);
        for shifted in &self.records[pos..] {
            if let Some(slot) = self.index.get_mut(&shifted.key()) {
                *slot -= 1;
            }
        }
        Some(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}
