use bevy_ecs::component::Component;
use bevy_math::Vec3;

/// Tags the scene object that highlights the named ingredient
#[derive(Component, Clone, Debug)]
pub struct IngredientVisual {
    pub display_name: String,
}

impl IngredientVisual {
    pub fn new(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
        }
    }
}

/// Whether an entity is active. Entities without it count as active, and
/// an entity is only active in the hierarchy if all its ancestors are.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Self(true)
    }
}

/// Spatial anchor created where an ingredient's marker was first decoded
#[derive(Component, Clone, Debug)]
pub struct MarkerAnchor {
    pub label: String,
}

/// Line segment drawn by the beam, in world space
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct BeamLine {
    pub enabled: bool,
    pub origin: Vec3,
    pub destination: Vec3,
}

/// Tracked hand or tool the beam is drawn from.
/// The beam is parented under the first entity carrying this.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BeamOrigin;

// the single shared beam entity
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GuideBeam;
