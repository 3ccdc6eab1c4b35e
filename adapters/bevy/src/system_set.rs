use bevy_ecs::schedule::SystemSet;

/// Startup set that builds the guide from the `IngredientVisual` entities
/// present at that point. Startup systems that spawn visuals must run
/// `.before(InitGuide)`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InitGuide;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ReceiveMarkers;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ReceiveRecipe;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct HandleSteps;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct HandleHighlightCommands;

// flash expiry, then beam redraw
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct UpdateHighlights;
