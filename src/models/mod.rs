// ABOUTME: Core data models for deckmate: the static catalog and the mock slide deck

pub mod catalog;
pub mod deck;

pub use catalog::{
    display_label, Brand, BrandSelection, Catalog, Channel, SlideSpec, TemplateDefinition,
    TemplateKey,
};
pub use deck::{CanvasSlide, Deck, DeckSlide, CANVAS_INSIGHTS};
