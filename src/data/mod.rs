//! Core data models for the Pokedex CLI
//!
//! This module contains the response types mirroring the PokeAPI schema, plus the
//! client that fetches them through the response cache.

pub mod pokeapi;

pub use pokeapi::{ApiError, PokeApiClient, POKEAPI_BASE_URL};

use serde::{Deserialize, Serialize};

/// A named link to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g., "canalave-city-area")
    pub name: String,
    /// Absolute URL of the resource
    #[serde(default)]
    pub url: String,
}

/// One page of the location-area listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A pokemon that can be encountered in a location area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Detail for a single pokemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Experience gained for defeating it; drives catch difficulty.
    /// Null for some alternate forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// A base stat value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// A type slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_area_page_parses_api_shape() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).expect("Failed to parse page");

        assert_eq!(page.count, 1089);
        assert!(page.next.as_deref().unwrap().contains("offset=20"));
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_parses_encounters_and_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                 "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "https://pokeapi.co/api/v2/pokemon/73/"},
                 "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).expect("Failed to parse area");

        let names: Vec<&str> = area
            .pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
            .collect();
        assert_eq!(names, vec!["tentacool", "tentacruel"]);
    }

    #[test]
    fn test_location_area_without_encounters() {
        let area: LocationArea =
            serde_json::from_str(r#"{"name": "empty-area"}"#).expect("Failed to parse area");
        assert!(area.pokemon_encounters.is_empty());
    }

    #[test]
    fn test_pokemon_parses_stats_and_types() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": ""}},
                {"slot": 2, "type": {"name": "flying", "url": ""}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).expect("Failed to parse pokemon");

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 45);
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_pokemon_with_null_base_experience() {
        let json = r#"{"name": "pikachu-cosplay", "base_experience": null, "height": 4, "weight": 60}"#;

        let pokemon: Pokemon = serde_json::from_str(json).expect("Failed to parse pokemon");

        assert!(pokemon.base_experience.is_none());
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
    }
}
