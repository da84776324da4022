//! Session state for the Pokedex CLI
//!
//! This module contains the state a REPL session carries between commands: the
//! API client, where the user is in the location-area listing, and what they
//! have caught.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::{LocationAreaPage, PokeApiClient};
use crate::pokedex::Pokedex;

/// Position in the paginated location-area listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Link to the page after the one last shown
    pub next: Option<String>,
    /// Link to the page before the one last shown
    pub previous: Option<String>,
    /// Whether any page has been shown yet
    pub started: bool,
}

impl Pagination {
    /// Records the links of a page that was just shown
    pub fn update(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.started = true;
    }

    /// Whether the last page has already been shown
    pub fn at_last_page(&self) -> bool {
        self.started && self.next.is_none()
    }
}

/// Main application struct managing per-session state
pub struct App {
    /// API client (owns the response cache)
    pub client: PokeApiClient,
    /// Location-area listing cursor
    pub pagination: Pagination,
    /// Pokemon caught this session
    pub pokedex: Pokedex,
    /// Random source for catch rolls
    pub rng: StdRng,
}

impl App {
    /// Creates a new App with an entropy-seeded random source
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a new App with a specific random source (for reproducible catches)
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            pagination: Pagination::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }
}
