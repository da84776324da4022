//! Caught pokemon collection and catch rules

use rand::Rng;
use std::collections::BTreeMap;

use crate::data::Pokemon;

/// Exclusive upper bound of a catch roll; rolls fall in `1..CATCH_ROLL_MAX`
pub const CATCH_ROLL_MAX: u32 = 170;

/// Rolls a catch attempt
pub fn roll_catch<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..CATCH_ROLL_MAX)
}

/// Whether `roll` is enough to catch a pokemon with the given base experience
///
/// The threshold is half the base experience, so stronger pokemon escape more
/// often and anything at 340 or above can never be caught.
pub fn catch_succeeds(base_experience: Option<u32>, roll: u32) -> bool {
    roll >= base_experience.unwrap_or(0) / 2
}

/// Pokemon the user has caught this session, keyed by name
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught pokemon, replacing an earlier catch of the same name
    pub fn add(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    /// Caught pokemon in name order
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }
}
