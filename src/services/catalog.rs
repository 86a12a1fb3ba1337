/// Hand-curated fallback lists
///
/// Each failure stage of the engine has its own catalog so the fallback that reaches
/// the client tells an operator where the pipeline broke.
use crate::{models::Recommendation, services::prompt::RECOMMENDATION_COUNT};

type Entry = (&'static str, &'static str, &'static str);

/// Served when no model credential is configured
const OFFLINE: [Entry; RECOMMENDATION_COUNT] = [
    (
        "In the Mood for Love",
        "2000",
        "Matches the longing and aesthetic beauty of your vibe.",
    ),
    (
        "Blade Runner 2049",
        "2017",
        "Matches the neon-soaked loneliness and visual splendor.",
    ),
    (
        "Lost in Translation",
        "2003",
        "Explores connection and isolation in a foreign city.",
    ),
    (
        "Her",
        "2013",
        "A futuristic love story with a distinct, soft visual palette.",
    ),
    (
        "Chungking Express",
        "1994",
        "Fast-paced, colorful, and emotionally resonant.",
    ),
    (
        "Moonlight",
        "2016",
        "A tender, visually stunning coming-of-age story.",
    ),
];

/// Served when the model answered but no array could be extracted
const UNPARSABLE: [Entry; RECOMMENDATION_COUNT] = [
    (
        "Everything Everywhere All At Once",
        "2022",
        "A chaotic, genre-bending masterpiece that fits any wild vibe.",
    ),
    (
        "Spider-Man: Into the Spider-Verse",
        "2018",
        "Visually stunning animation that feels like a living comic book.",
    ),
    (
        "Mad Max: Fury Road",
        "2015",
        "High-octane visual storytelling at its absolute peak.",
    ),
    (
        "Pulp Fiction",
        "1994",
        "Cool, non-linear, and effortlessly stylish.",
    ),
    (
        "Spirited Away",
        "2001",
        "A magical journey that fits dreamy and fantastical vibes.",
    ),
    (
        "The Grand Budapest Hotel",
        "2014",
        "Perfect symmetry and quirky humor for a unique aesthetic.",
    ),
];

/// Served when the model call itself failed
const UNREACHABLE: [Entry; RECOMMENDATION_COUNT] = [
    (
        "Parasite",
        "2019",
        "A universal masterpiece of tension and class struggle.",
    ),
    (
        "Inception",
        "2010",
        "Mind-bending sci-fi that fits 'complex' or 'dreamy' vibes.",
    ),
    (
        "The Dark Knight",
        "2008",
        "The definitive gritty superhero crime saga.",
    ),
    (
        "Interstellar",
        "2014",
        "Epic exploration of love, time, and space.",
    ),
    (
        "Whiplash",
        "2014",
        "Intense, rhythmic, and obsessed with perfection.",
    ),
    (
        "La La Land",
        "2016",
        "A colorful, musical celebration of dreams and romance.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// No model credential
    Offline,
    /// Model output had no usable JSON array
    Unparsable,
    /// Model call failed
    Unreachable,
}

impl Catalog {
    pub fn name(&self) -> &'static str {
        match self {
            Catalog::Offline => "offline",
            Catalog::Unparsable => "unparsable",
            Catalog::Unreachable => "unreachable",
        }
    }

    /// Fresh copy of the catalog's entries
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let entries = match self {
            Catalog::Offline => &OFFLINE,
            Catalog::Unparsable => &UNPARSABLE,
            Catalog::Unreachable => &UNREACHABLE,
        };

        entries
            .iter()
            .map(|(title, year, reason)| Recommendation::new(title, year, reason))
            .collect()
    }
}
