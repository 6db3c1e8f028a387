//! Filter for items sharing characters with a user-given list.
//!
//! The threshold is a space-separated list such as `金 曜日 -髪`: plain
//! tokens add their characters to the include set, `-` tokens add theirs
//! to the exclude set.

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::registry::FilterDescriptor;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use item_data::Item;
use std::collections::HashSet;

pub const NAME: &str = "related_items";
const LABEL: &str = "Related Items";
const PLACEHOLDER: &str = "金 -曜";
const HOVER_TIP: &str = "Only include items containing at least one of the given characters.\n \
* Separate entries with spaces; each entry may hold several characters.\n \
* Prefix an entry with - to exclude items containing any of its characters.";

/// Include and exclude character sets parsed from the filter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSets {
    pub include: HashSet<char>,
    pub exclude: HashSet<char>,
}

impl CharacterSets {
    pub fn parse(text: &str) -> Self {
        let mut sets = Self::default();
        for token in text.split_whitespace() {
            match token.strip_prefix('-') {
                Some(excluded) => sets.exclude.extend(excluded.chars()),
                None => sets.include.extend(token.chars()),
            }
        }
        sets
    }

    /// Whether `characters` hits the include set and misses the exclude set.
    ///
    /// An empty include set admits nothing.
    pub fn admits(&self, characters: &str) -> bool {
        let mut included = false;
        for c in characters.chars() {
            if self.exclude.contains(&c) {
                return false;
            }
            included |= self.include.contains(&c);
        }
        included
    }
}

/// Keeps items whose characters intersect the include set and avoid the exclude set.
pub struct RelatedItemsFilter {
    sets: CharacterSets,
}

impl RelatedItemsFilter {
    pub fn new(sets: CharacterSets) -> Self {
        Self { sets }
    }

    /// Value map: any value is read as text and split into character sets
    pub fn from_value(value: &FilterValue) -> Result<Self> {
        Ok(Self::new(CharacterSets::parse(&value.as_text())))
    }

    pub fn sets(&self) -> &CharacterSets {
        &self.sets
    }
}

fn build(value: &FilterValue) -> Result<Box<dyn ItemFilter>> {
    Ok(Box::new(RelatedItemsFilter::from_value(value)?))
}

pub fn descriptor() -> FilterDescriptor {
    FilterDescriptor {
        name: NAME,
        label: LABEL,
        kind: FilterValueKind::Text,
        default_value: FilterValue::Text(String::new()),
        placeholder: Some(PLACEHOLDER),
        hover_tip: HOVER_TIP,
        required_fields: RequiredFields::NONE,
        constructor: build,
    }
}

impl ItemFilter for RelatedItemsFilter {
    fn name(&self) -> &str {
        NAME
    }

    fn required_fields(&self) -> RequiredFields {
        RequiredFields::NONE
    }

    fn matches(&self, item: &Item, _context: &EvaluationContext) -> bool {
        match item.characters() {
            Some(characters) => self.sets.admits(characters),
            None => false,
        }
    }
}
