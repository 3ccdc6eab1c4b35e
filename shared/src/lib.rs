//! # Sabor Shared
//! Engine-agnostic marker registration, anchor lifecycle and highlight
//! coordination, shared by every sabor scene adapter.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod anchor;
mod beam;
mod config;
mod guide;
mod highlight;
mod marker;
mod recipe;
mod registry;
mod scene;

pub use anchor::AnchorLifecycleManager;
pub use beam::{BeamCoordinator, BeamSegment, BeamUpdate};
pub use config::{GuideConfig, IngredientConfig};
pub use guide::Guide;
pub use highlight::{
    error::HighlightError, flash_schedule::FlashSchedule, HighlightChange,
    HighlightStateMachine, Visibility,
};
pub use marker::{MarkerEvent, MarkerOutcome, MarkersChanged, Pose};
pub use recipe::{
    error::RecipeError,
    recipe_cursor::{RecipeCursor, StepChanged},
    recipe_loader::{RecipeLoader, RecipeSource, RecipeStatus},
    Recipe, RecipeStep,
};
pub use registry::{
    error::RegistryError, ingredient_entry::AnchorState, ingredient_entry::IngredientEntry,
    ingredient_registry::IngredientRegistry, IngredientKey,
};
pub use scene::{SceneMut, SceneRef};
