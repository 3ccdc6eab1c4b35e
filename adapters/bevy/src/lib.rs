pub use sabor_shared::{
    BeamUpdate, Guide, GuideConfig, HighlightError, MarkerEvent, MarkerOutcome, MarkersChanged,
    Pose, Recipe, RecipeError, RecipeSource, RecipeStatus, RecipeStep,
};

mod components;
mod events;
mod plugin;
mod resources;
mod scene;
mod system_set;
mod systems;


pub use components::{Active, BeamLine, BeamOrigin, GuideBeam, IngredientVisual, MarkerAnchor};
pub use events::{
    AnchorRegisteredEvent, HighlightCommand, MarkersChangedEvent, RecipeNavigation,
    StepChangedEvent,
};
pub use plugin::{GuidePlugin, IngredientSpec};
pub use resources::{GuideState, RecipeState};
pub use scene::BevyScene;
pub use system_set::{
    HandleHighlightCommands, HandleSteps, InitGuide, ReceiveMarkers, ReceiveRecipe,
    UpdateHighlights,
};
