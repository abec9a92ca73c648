//! Saved wardrobe: owned garments and the body profile, as versioned JSON.

mod model;
mod persistence;

pub use model::{SavedBodyProfile, SavedGarment, WARDROBE_VERSION, Wardrobe};
