use bevy_math::Vec3;

use log::{debug, info};

use crate::scene::SceneMut;

/// Endpoints of the beam drawn this tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamSegment {
    pub origin: Vec3,
    pub destination: Vec3,
}

/// Result of a single BeamCoordinator::update
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeamUpdate {
    /// No beam is being shown
    Idle,
    /// The target became invalid and the beam switched itself off
    Stopped,
    /// The beam was redrawn between these points
    Drawn(BeamSegment),
}

/// Owns the single directional beam shared by every ingredient.
///
/// The beam entity is spawned on first use and toggled afterwards. The
/// target is a plain handle that never implies ownership; it is checked
/// again on every update.
pub struct BeamCoordinator<E> {
    beam: Option<E>,
    target: Option<E>,
}

impl<E: Copy + PartialEq> BeamCoordinator<E> {
    pub fn new() -> Self {
        Self {
            beam: None,
            target: None,
        }
    }

    pub fn beam(&self) -> Option<E> {
        self.beam
    }

    pub fn target(&self) -> Option<E> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn point_at<S: SceneMut<E>>(&mut self, scene: &mut S, target: &E) {
        let beam = match self.beam {
            Some(beam) => beam,
            None => {
                let beam = scene.spawn_beam();
                info!("beam created");
                self.beam = Some(beam);
                beam
            }
        };

        self.target = Some(*target);
        if scene.has_beam_line(&beam) {
            scene.set_beam_line_enabled(&beam, true);
        }
    }

    pub fn stop<S: SceneMut<E>>(&mut self, scene: &mut S) {
        self.target = None;
        if let Some(beam) = self.beam {
            if scene.has_beam_line(&beam) {
                scene.set_beam_line_enabled(&beam, false);
            }
        }
    }

    /// Redraws the beam from its own position to the target, or switches it
    /// off if the target is gone, hidden, or the beam has nothing to draw with.
    pub fn update<S: SceneMut<E>>(&mut self, scene: &mut S) -> BeamUpdate {
        let Some(beam) = self.beam else {
            return BeamUpdate::Idle;
        };

        let target = match self.target {
            Some(target) if scene.has_beam_line(&beam) && scene.is_active_in_hierarchy(&target) => {
                target
            }
            _ => {
                if self.target.is_some() || scene.is_beam_line_enabled(&beam) {
                    debug!("beam target is no longer visible, stopping beam");
                    self.stop(scene);
                    return BeamUpdate::Stopped;
                }
                return BeamUpdate::Idle;
            }
        };

        let (Some(origin), Some(destination)) =
            (scene.world_position(&beam), scene.world_position(&target))
        else {
            debug!("beam endpoints could not be resolved, stopping beam");
            self.stop(scene);
            return BeamUpdate::Stopped;
        };

        scene.set_beam_line_points(&beam, origin, destination);
        BeamUpdate::Drawn(BeamSegment {
            origin,
            destination,
        })
    }
}

impl<E: Copy + PartialEq> Default for BeamCoordinator<E> {
    fn default() -> Self {
        Self::new()
    }
}
