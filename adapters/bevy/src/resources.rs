use std::sync::Arc;

use bevy_ecs::{entity::Entity, prelude::Resource};

use sabor_shared::{Guide, GuideConfig, RecipeCursor, RecipeLoader, RecipeSource};

use crate::plugin::IngredientSpec;

/// The running guide, inserted once the ingredient visuals have been
/// resolved at Startup. Absent if the configuration was rejected.
#[derive(Resource)]
pub struct GuideState {
    pub guide: Guide<Entity>,
}

impl GuideState {
    pub fn new(guide: Guide<Entity>) -> Self {
        Self { guide }
    }
}

// consumed by the Startup system that builds the Guide
#[derive(Resource)]
pub(crate) struct GuideSetup {
    pub(crate) config: GuideConfig,
    pub(crate) ingredients: Vec<IngredientSpec>,
}

pub(crate) struct RecipeRequest {
    pub(crate) source: Arc<dyn RecipeSource>,
    pub(crate) recipe_id: String,
}

/// Loaded recipe, the active step, and any fetch still in flight
#[derive(Resource, Default)]
pub struct RecipeState {
    pub loader: RecipeLoader,
    pub cursor: RecipeCursor,
    pub(crate) request: Option<RecipeRequest>,
}

impl RecipeState {
    /// Starts loading a recipe. The result is applied by the ReceiveRecipe
    /// systems on a later tick.
    pub fn request(&mut self, source: Arc<dyn RecipeSource>, recipe_id: &str) {
        self.loader.request(source, recipe_id);
    }
}
