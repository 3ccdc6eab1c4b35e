pub mod error;
pub mod flash_schedule;

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::{
    beam::BeamCoordinator,
    highlight::{error::HighlightError, flash_schedule::FlashSchedule},
    registry::{ingredient_registry::IngredientRegistry, IngredientKey},
    scene::SceneMut,
};

/// Command-driven visibility of an ingredient's highlight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

/// Effective change made by a successful set_visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightChange {
    Shown(IngredientKey),
    Hidden(IngredientKey),
}

/// Owns the visibility of every highlight visual in the registry.
///
/// Visibility changes only through `set_visible` and `hide_all`. The
/// registration flash is tracked apart from it and, when it expires, hands the
/// visual back to whatever the last command asked for.
pub struct HighlightStateMachine {
    visibility: Vec<Visibility>,
    flashes: FlashSchedule,
}

impl HighlightStateMachine {
    pub fn new(entry_count: usize, flash_duration: Duration) -> Self {
        Self {
            visibility: vec![Visibility::Hidden; entry_count],
            flashes: FlashSchedule::new(flash_duration),
        }
    }

    pub fn visibility(&self, key: &IngredientKey) -> Visibility {
        self.visibility
            .get(key.index())
            .copied()
            .unwrap_or(Visibility::Hidden)
    }

    pub fn is_flashing(&self, key: &IngredientKey) -> bool {
        self.flashes.is_flashing(key)
    }

    fn set_visibility(&mut self, key: &IngredientKey, visibility: Visibility) {
        match self.visibility.get_mut(key.index()) {
            Some(slot) => *slot = visibility,
            None => warn!("no highlight state for ingredient key {:?}", key),
        }
    }

    /// Puts every configured visual into its initial hidden state
    pub fn initialize<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &IngredientRegistry<E>,
        scene: &mut S,
    ) {
        for (_, entry) in registry.iter() {
            if let Some(visual) = entry.highlight_visual() {
                scene.set_active(&visual, false);
            }
        }
    }

    pub fn set_visible<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &IngredientRegistry<E>,
        beam: &mut BeamCoordinator<E>,
        scene: &mut S,
        display_name: &str,
        show: bool,
    ) -> Result<HighlightChange, HighlightError> {
        let key = registry.key_for_name(display_name).ok_or_else(|| {
            HighlightError::UnknownIngredient {
                display_name: display_name.to_string(),
            }
        })?;
        let entry = registry
            .entry(&key)
            .ok_or_else(|| HighlightError::UnknownIngredient {
                display_name: display_name.to_string(),
            })?;
        let visual = entry
            .highlight_visual()
            .ok_or_else(|| HighlightError::MissingVisual {
                display_name: display_name.to_string(),
            })?;
        if !entry.is_registered() {
            return Err(HighlightError::NotRegistered {
                display_name: display_name.to_string(),
            });
        }

        if show {
            self.set_visibility(&key, Visibility::Shown);
            scene.set_active(&visual, true);
            beam.point_at(scene, &visual);
            info!("highlight on: {}", display_name);
            Ok(HighlightChange::Shown(key))
        } else {
            self.set_visibility(&key, Visibility::Hidden);
            if self.flashes.cancel(&key) {
                info!("registration flash for {} superseded", display_name);
            }
            scene.set_active(&visual, false);
            info!("highlight off: {}", display_name);
            Ok(HighlightChange::Hidden(key))
        }
    }

    pub fn hide_all<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &IngredientRegistry<E>,
        beam: &mut BeamCoordinator<E>,
        scene: &mut S,
    ) {
        self.flashes.cancel_all();
        for (key, entry) in registry.iter() {
            self.set_visibility(&key, Visibility::Hidden);
            if let Some(visual) = entry.highlight_visual() {
                scene.set_active(&visual, false);
            }
        }
        beam.stop(scene);
    }

    /// Shows a freshly anchored visual for the flash duration
    pub(crate) fn start_flash<E: Copy, S: SceneMut<E>>(
        &mut self,
        key: IngredientKey,
        visual: &E,
        scene: &mut S,
        now: &Instant,
    ) {
        scene.set_active(visual, true);
        self.flashes.start(key, now);
    }

    /// Ends expired flashes, leaving each visual as its command state says
    pub fn update_flashes<E: Copy + PartialEq, S: SceneMut<E>>(
        &mut self,
        registry: &IngredientRegistry<E>,
        scene: &mut S,
        now: &Instant,
    ) -> Vec<IngredientKey> {
        let expired = self.flashes.take_expired(now);
        for key in &expired {
            let Some(entry) = registry.entry(key) else {
                warn!("flash expired for unknown ingredient key {:?}", key);
                continue;
            };
            let Some(visual) = entry.highlight_visual() else {
                continue;
            };
            let shown = self.visibility(key) == Visibility::Shown;
            scene.set_active(&visual, shown);
        }
        expired
    }
}
