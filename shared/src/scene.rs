use bevy_math::Vec3;

use crate::marker::Pose;

/// Read access to the scene hosting the highlight visuals, anchors and beam.
///
/// `E` is the scene's entity handle. Handles may outlive the objects they
/// point at, so every query must tolerate a despawned entity.
pub trait SceneRef<E> {
    /// Whether the entity exists and it and all of its ancestors are active
    fn is_active_in_hierarchy(&self, entity: &E) -> bool;
    /// The entity's own active flag, ignoring ancestors. False if despawned.
    fn is_active(&self, entity: &E) -> bool;
    /// Current world-space position, None if despawned
    fn world_position(&self, entity: &E) -> Option<Vec3>;
    /// Whether the beam entity carries a line it can be drawn with
    fn has_beam_line(&self, beam: &E) -> bool;
    /// Whether the beam entity's line is currently drawn
    fn is_beam_line_enabled(&self, beam: &E) -> bool;
}

/// Mutable access to the scene. Only ever called from the main loop.
pub trait SceneMut<E>: SceneRef<E> {
    /// Spawns a spatially fixed anchor at the given world pose
    fn spawn_anchor(&mut self, label: &str, pose: &Pose) -> E;
    /// Parents `visual` under `anchor`, resetting its local transform to
    /// identity so it sits exactly at the anchor
    fn attach_to_anchor(&mut self, visual: &E, anchor: &E);
    fn set_active(&mut self, entity: &E, active: bool);
    /// Spawns the entity the shared beam is drawn from. Its position is
    /// driven externally, e.g. by hand tracking.
    fn spawn_beam(&mut self) -> E;
    fn set_beam_line_enabled(&mut self, beam: &E, enabled: bool);
    fn set_beam_line_points(&mut self, beam: &E, origin: Vec3, destination: Vec3);
}
