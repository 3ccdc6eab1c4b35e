use bevy_ecs::{entity::Entity, prelude::Event};

use sabor_shared::MarkersChanged;

// MarkersChangedEvent
#[derive(Event, Clone, Debug)]
pub struct MarkersChangedEvent(pub MarkersChanged);

// StepChangedEvent
#[derive(Event, Clone, Debug)]
pub struct StepChangedEvent(pub Option<String>);

impl StepChangedEvent {
    pub fn new(ingredient: Option<&str>) -> Self {
        Self(ingredient.map(str::to_string))
    }
}

// HighlightCommand
#[derive(Event, Clone, Debug)]
pub enum HighlightCommand {
    SetVisible { display_name: String, show: bool },
    HideAll,
}

// RecipeNavigation
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipeNavigation {
    Next,
    Previous,
}

// AnchorRegisteredEvent
#[derive(Event, Clone, Debug)]
pub struct AnchorRegisteredEvent {
    pub display_name: String,
    pub anchor: Entity,
}
