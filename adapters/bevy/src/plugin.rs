use std::sync::{Arc, Mutex};

use bevy_app::{App, Plugin as PluginType, Startup, Update};
use bevy_ecs::schedule::IntoScheduleConfigs;

use log::warn;

use sabor_shared::{GuideConfig, RecipeSource};

use crate::{
    events::{
        AnchorRegisteredEvent, HighlightCommand, MarkersChangedEvent, RecipeNavigation,
        StepChangedEvent,
    },
    resources::{GuideSetup, RecipeRequest, RecipeState},
    system_set::{
        HandleHighlightCommands, HandleSteps, InitGuide, ReceiveMarkers, ReceiveRecipe,
        UpdateHighlights,
    },
    systems::{
        handle_highlight_commands, handle_steps, init_guide, receive_markers, receive_recipe,
        request_recipe, update_highlights,
    },
};

/// An ingredient as configured before its visual entity is known.
/// The visual is the entity whose `IngredientVisual` has the same display name,
/// looked up once in the `InitGuide` Startup set.
#[derive(Clone, Debug)]
pub struct IngredientSpec {
    pub marker_payload: String,
    pub display_name: String,
}

impl IngredientSpec {
    pub fn new(marker_payload: &str, display_name: &str) -> Self {
        Self {
            marker_payload: marker_payload.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

struct PluginConfig {
    setup: GuideSetup,
    recipe: Option<RecipeRequest>,
}

pub struct GuidePlugin {
    config: Mutex<Option<PluginConfig>>,
}

impl GuidePlugin {
    pub fn new(guide_config: GuideConfig, ingredients: Vec<IngredientSpec>) -> Self {
        let config = PluginConfig {
            setup: GuideSetup {
                config: guide_config,
                ingredients,
            },
            recipe: None,
        };
        Self {
            config: Mutex::new(Some(config)),
        }
    }

    /// Fetch this recipe at Startup and walk its steps
    pub fn with_recipe(self, source: Arc<dyn RecipeSource>, recipe_id: &str) -> Self {
        if let Ok(mut config) = self.config.lock() {
            if let Some(config) = config.as_mut() {
                config.recipe = Some(RecipeRequest {
                    source,
                    recipe_id: recipe_id.to_string(),
                });
            }
        }
        self
    }
}

impl PluginType for GuidePlugin {
    fn build(&self, app: &mut App) {
        let Some(config) = self.config.lock().ok().and_then(|mut config| config.take()) else {
            warn!("attempted to build GuidePlugin twice");
            return;
        };

        let recipe_state = RecipeState {
            request: config.recipe,
            ..Default::default()
        };

        app
            // RESOURCES //
            .insert_resource(config.setup)
            .insert_resource(recipe_state)
            // EVENTS //
            .add_event::<MarkersChangedEvent>()
            .add_event::<StepChangedEvent>()
            .add_event::<HighlightCommand>()
            .add_event::<RecipeNavigation>()
            .add_event::<AnchorRegisteredEvent>()
            // SYSTEM SETS //
            .configure_sets(Update, ReceiveMarkers.before(ReceiveRecipe))
            .configure_sets(Update, ReceiveRecipe.before(HandleSteps))
            .configure_sets(Update, HandleSteps.before(HandleHighlightCommands))
            .configure_sets(Update, HandleHighlightCommands.before(UpdateHighlights))
            // SYSTEMS //
            .add_systems(Startup, (init_guide, request_recipe).in_set(InitGuide))
            .add_systems(Update, receive_markers.in_set(ReceiveMarkers))
            .add_systems(Update, receive_recipe.in_set(ReceiveRecipe))
            .add_systems(Update, handle_steps.in_set(HandleSteps))
            .add_systems(
                Update,
                handle_highlight_commands.in_set(HandleHighlightCommands),
            )
            .add_systems(Update, update_highlights.in_set(UpdateHighlights));
    }
}
