use std::time::Instant;

use log::{error, info, warn};

use crate::{
    anchor::AnchorLifecycleManager,
    beam::{BeamCoordinator, BeamUpdate},
    config::{GuideConfig, IngredientConfig},
    highlight::{error::HighlightError, HighlightChange, HighlightStateMachine},
    marker::{MarkerOutcome, MarkersChanged},
    registry::{error::RegistryError, ingredient_registry::IngredientRegistry},
    scene::SceneMut,
};

/// Ties together the ingredient registry, anchor lifecycle, highlights and
/// the shared beam. Every method is meant to be called from the main loop.
pub struct Guide<E> {
    config: GuideConfig,
    registry: IngredientRegistry<E>,
    anchors: AnchorLifecycleManager,
    highlights: HighlightStateMachine,
    beam: BeamCoordinator<E>,
}

impl<E: Copy + PartialEq> Guide<E> {
    pub fn new(
        config: GuideConfig,
        ingredients: Vec<IngredientConfig<E>>,
    ) -> Result<Self, RegistryError> {
        let registry = IngredientRegistry::try_new(ingredients)?;
        let highlights = HighlightStateMachine::new(registry.len(), config.flash_duration);

        Ok(Self {
            config,
            registry,
            anchors: AnchorLifecycleManager::new(),
            highlights,
            beam: BeamCoordinator::new(),
        })
    }

    /// Hides every configured highlight visual. Call once, after the scene
    /// objects exist and before the first tick.
    pub fn startup<S: SceneMut<E>>(&mut self, scene: &mut S) {
        self.highlights.initialize(&self.registry, scene);
        info!(
            "guide started with {} ingredients",
            self.registry.len()
        );
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn registry(&self) -> &IngredientRegistry<E> {
        &self.registry
    }

    pub fn highlights(&self) -> &HighlightStateMachine {
        &self.highlights
    }

    pub fn beam(&self) -> &BeamCoordinator<E> {
        &self.beam
    }

    pub fn anchors_created(&self) -> usize {
        self.anchors.anchors_created()
    }

    pub fn on_markers_changed<S: SceneMut<E>>(
        &mut self,
        scene: &mut S,
        markers: &MarkersChanged,
        now: &Instant,
    ) -> Vec<MarkerOutcome> {
        self.anchors.on_markers_changed(
            &mut self.registry,
            &mut self.highlights,
            scene,
            markers,
            now,
        )
    }

    /// Changes a single ingredient's highlight. Failures are logged here and
    /// returned, and never affect other ingredients.
    pub fn set_visible<S: SceneMut<E>>(
        &mut self,
        scene: &mut S,
        display_name: &str,
        show: bool,
    ) -> Result<HighlightChange, HighlightError> {
        let result = self.highlights.set_visible(
            &self.registry,
            &mut self.beam,
            scene,
            display_name,
            show,
        );
        if let Err(err) = &result {
            match err {
                HighlightError::MissingVisual { .. } => error!("{}", err),
                HighlightError::UnknownIngredient { .. } | HighlightError::NotRegistered { .. } => {
                    warn!("{}", err)
                }
            }
        }
        result
    }

    pub fn hide_all<S: SceneMut<E>>(&mut self, scene: &mut S) {
        self.highlights
            .hide_all(&self.registry, &mut self.beam, scene);
    }

    /// Applies a recipe step change: clears the previous highlight and beam,
    /// then highlights the step's ingredient if it names one.
    pub fn on_step_changed<S: SceneMut<E>>(
        &mut self,
        scene: &mut S,
        ingredient: Option<&str>,
    ) -> Option<Result<HighlightChange, HighlightError>> {
        self.hide_all(scene);

        let display_name = ingredient.filter(|name| !name.is_empty())?;
        info!("step requests highlight for {}", display_name);
        Some(self.set_visible(scene, display_name, true))
    }

    /// Per-tick housekeeping: ends expired registration flashes, then
    /// redraws or self-heals the beam.
    pub fn update<S: SceneMut<E>>(&mut self, scene: &mut S, now: &Instant) -> BeamUpdate {
        self.highlights
            .update_flashes(&self.registry, scene, now);
        self.beam.update(scene)
    }
}
