use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    highlight::HighlightStateMachine,
    marker::{MarkerEvent, MarkerOutcome, MarkersChanged},
    registry::ingredient_registry::IngredientRegistry,
    scene::SceneMut,
};

/// Turns marker detections into spatial anchors.
///
/// Each ingredient is anchored at most once, at the pose of the first
/// detection whose payload matches it. Later detections of the same marker
/// leave the anchor and the visual's parent untouched.
pub struct AnchorLifecycleManager {
    anchors_created: usize,
}

impl AnchorLifecycleManager {
    pub fn new() -> Self {
        Self { anchors_created: 0 }
    }

    pub fn anchors_created(&self) -> usize {
        self.anchors_created
    }

    /// Processes one tick's batch, `added` before `updated`.
    /// Outcomes are returned in the same order.
    pub fn on_markers_changed<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &mut IngredientRegistry<E>,
        highlights: &mut HighlightStateMachine,
        scene: &mut S,
        markers: &MarkersChanged,
        now: &Instant,
    ) -> Vec<MarkerOutcome> {
        if markers.is_empty() {
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for marker in &markers.added {
            outcomes.push(self.process_marker(registry, highlights, scene, marker, now, "added"));
        }
        for marker in &markers.updated {
            outcomes.push(self.process_marker(registry, highlights, scene, marker, now, "updated"));
        }
        outcomes
    }

    fn process_marker<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &mut IngredientRegistry<E>,
        highlights: &mut HighlightStateMachine,
        scene: &mut S,
        marker: &MarkerEvent,
        now: &Instant,
        change: &'static str,
    ) -> MarkerOutcome {
        // detected, but not decoded yet
        if !marker.is_decoded() {
            return MarkerOutcome::Undecoded;
        }

        let Some(key) = registry.key_for_payload(&marker.decoded_text) else {
            warn!(
                "[{}] marker payload {:?} does not match any configured ingredient",
                change, marker.decoded_text
            );
            return MarkerOutcome::Unmatched(marker.decoded_text.clone());
        };

        let Some(entry) = registry.entry_mut(&key) else {
            return MarkerOutcome::Unmatched(marker.decoded_text.clone());
        };

        if entry.is_registered() {
            return MarkerOutcome::AlreadyRegistered(key);
        }

        // already reported once when the registry was built
        let Some(visual) = entry.highlight_visual() else {
            debug!(
                "[{}] marker for {} ignored, no highlight visual to anchor",
                change,
                entry.display_name()
            );
            return MarkerOutcome::MissingVisual(key);
        };

        let label = format!("Anchor_{}", entry.display_name());
        let anchor = scene.spawn_anchor(&label, &marker.pose);
        scene.attach_to_anchor(&visual, &anchor);
        entry.register(anchor);
        self.anchors_created += 1;

        info!(
            "[{}] anchored {} at {:?}",
            change,
            entry.display_name(),
            marker.pose.translation
        );

        highlights.start_flash(key, &visual, scene, now);

        MarkerOutcome::Registered(key)
    }
}

impl Default for AnchorLifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}
