pub mod catalog;
pub mod engine;
pub mod extractor;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use engine::RecommendationEngine;
