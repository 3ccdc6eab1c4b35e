use bevy_math::{Quat, Vec3};

use crate::registry::IngredientKey;

/// Position and orientation of a tracked object in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single detected marker, as reported by the marker subsystem this tick.
///
/// `decoded_text` may still be empty on the first frames after detection.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerEvent {
    pub decoded_text: String,
    pub pose: Pose,
}

impl MarkerEvent {
    pub fn new(decoded_text: &str, pose: Pose) -> Self {
        Self {
            decoded_text: decoded_text.to_string(),
            pose,
        }
    }

    pub fn undecoded(pose: Pose) -> Self {
        Self {
            decoded_text: String::new(),
            pose,
        }
    }

    pub fn is_decoded(&self) -> bool {
        !self.decoded_text.is_empty()
    }
}

/// One batch of marker changes, delivered once per tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkersChanged {
    pub added: Vec<MarkerEvent>,
    pub updated: Vec<MarkerEvent>,
}

impl MarkersChanged {
    pub fn new(added: Vec<MarkerEvent>, updated: Vec<MarkerEvent>) -> Self {
        Self { added, updated }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// What processing a single MarkerEvent did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerOutcome {
    /// Marker detected, but its payload has not been decoded yet
    Undecoded,
    /// Payload does not belong to any known ingredient
    Unmatched(String),
    /// Ingredient was already anchored, nothing changed
    AlreadyRegistered(IngredientKey),
    /// Ingredient matched but has no highlight visual to anchor
    MissingVisual(IngredientKey),
    /// A new anchor was created for the ingredient
    Registered(IngredientKey),
}
