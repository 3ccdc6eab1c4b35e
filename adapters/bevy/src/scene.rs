use bevy_ecs::{entity::Entity, hierarchy::ChildOf, query::With, world::World};
use bevy_math::Vec3;
use bevy_transform::components::Transform;

use sabor_shared::{Pose, SceneMut, SceneRef};

use crate::components::{Active, BeamLine, BeamOrigin, GuideBeam, MarkerAnchor};

/// Exposes a Bevy World to the guide.
///
/// World positions are composed from local `Transform`s along `ChildOf`, so
/// they are correct immediately after a reparent, before transform
/// propagation has run.
pub struct BevyScene<'w> {
    world: &'w mut World,
}

impl<'w> BevyScene<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    fn contains(&self, entity: &Entity) -> bool {
        self.world.entities().contains(*entity)
    }

    fn parent(&self, entity: &Entity) -> Option<Entity> {
        self.world
            .get::<ChildOf>(*entity)
            .map(|child_of| child_of.parent())
    }

    fn world_transform(&self, entity: &Entity) -> Option<Transform> {
        if !self.contains(entity) {
            return None;
        }
        let local = self
            .world
            .get::<Transform>(*entity)
            .copied()
            .unwrap_or(Transform::IDENTITY);
        match self.parent(entity) {
            Some(parent) => Some(self.world_transform(&parent)?.mul_transform(local)),
            None => Some(local),
        }
    }
}

impl SceneRef<Entity> for BevyScene<'_> {
    fn is_active_in_hierarchy(&self, entity: &Entity) -> bool {
        if !self.is_active(entity) {
            return false;
        }
        match self.parent(entity) {
            Some(parent) => self.is_active_in_hierarchy(&parent),
            None => true,
        }
    }

    fn is_active(&self, entity: &Entity) -> bool {
        if !self.contains(entity) {
            return false;
        }
        self.world
            .get::<Active>(*entity)
            .map_or(true, |active| active.0)
    }

    fn world_position(&self, entity: &Entity) -> Option<Vec3> {
        self.world_transform(entity)
            .map(|transform| transform.translation)
    }

    fn has_beam_line(&self, beam: &Entity) -> bool {
        self.contains(beam) && self.world.get::<BeamLine>(*beam).is_some()
    }

    fn is_beam_line_enabled(&self, beam: &Entity) -> bool {
        self.contains(beam)
            && self
                .world
                .get::<BeamLine>(*beam)
                .map_or(false, |line| line.enabled)
    }
}

impl SceneMut<Entity> for BevyScene<'_> {
    fn spawn_anchor(&mut self, label: &str, pose: &Pose) -> Entity {
        self.world
            .spawn((
                Transform::from_translation(pose.translation).with_rotation(pose.rotation),
                MarkerAnchor {
                    label: label.to_string(),
                },
                Active(true),
            ))
            .id()
    }

    fn attach_to_anchor(&mut self, visual: &Entity, anchor: &Entity) {
        if let Ok(mut visual) = self.world.get_entity_mut(*visual) {
            visual.insert((ChildOf(*anchor), Transform::IDENTITY));
        }
    }

    fn set_active(&mut self, entity: &Entity, active: bool) {
        if let Ok(mut entity) = self.world.get_entity_mut(*entity) {
            entity.insert(Active(active));
        }
    }

    fn spawn_beam(&mut self) -> Entity {
        let origin = self
            .world
            .query_filtered::<Entity, With<BeamOrigin>>()
            .iter(self.world)
            .next();

        let mut beam = self.world.spawn((
            Transform::IDENTITY,
            BeamLine::default(),
            GuideBeam,
            Active(true),
        ));
        if let Some(origin) = origin {
            beam.insert(ChildOf(origin));
        }
        beam.id()
    }

    fn set_beam_line_enabled(&mut self, beam: &Entity, enabled: bool) {
        if !self.contains(beam) {
            return;
        }
        if let Some(mut line) = self.world.get_mut::<BeamLine>(*beam) {
            line.enabled = enabled;
        }
    }

    fn set_beam_line_points(&mut self, beam: &Entity, origin: Vec3, destination: Vec3) {
        if !self.contains(beam) {
            return;
        }
        if let Some(mut line) = self.world.get_mut::<BeamLine>(*beam) {
            line.origin = origin;
            line.destination = destination;
        }
    }
}
