use std::collections::HashMap;

use log::debug;

/// Sorts the characters of `word` by code point.
///
/// Two words are anagrams of each other iff their signatures are equal.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Words sharing one signature, in the order they were inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub signature: String,
    pub words: Vec<String>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Maps a signature to its `Group`.
///
/// Iteration yields groups in the order their signature was first seen.
#[derive(Debug, Default)]
pub struct GroupTable {
    slots: HashMap<String, usize>,
    groups: Vec<Group>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self { slots: HashMap::new(), groups: vec![] }
    }

    /// Appends `word` to the group of its signature, creating the group on first insert.
    pub fn insert(&mut self, word: String) {
        let signature = signature(&word);
        match self.slots.get(&signature) {
            Some(&slot) => self.groups[slot].words.push(word),
            None => {
                self.slots.insert(signature.clone(), self.groups.len());
                self.groups.push(Group { signature, words: vec![word] });
            },
        }
    }

    pub fn get(&self, signature: &str) -> Option<&Group> {
        self.slots.get(signature).map(|&slot| &self.groups[slot])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}

impl FromIterator<String> for GroupTable {
    fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut table = Self::new();
        for word in words {
            table.insert(word);
        }
        table
    }
}

pub fn group_words(words: Vec<String>) -> GroupTable {
    let word_count = words.len();
    let table: GroupTable = words.into_iter().collect();
    debug!("{} words grouped under {} signatures", word_count, table.len());
    table
}
