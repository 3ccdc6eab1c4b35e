use std::time::{Duration, Instant};

use bevy_math::Vec3;

use sabor_shared::{
    BeamUpdate, Guide, GuideConfig, IngredientConfig, MarkerEvent, MarkerOutcome, MarkersChanged,
    Pose,
};

use crate::test_scene::{TestEntity, TestScene};

pub const FLASH_DURATION: Duration = Duration::from_secs(3);

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn marker_at(decoded_text: &str, x: f32, y: f32, z: f32) -> MarkerEvent {
    MarkerEvent::new(decoded_text, Pose::from_translation(Vec3::new(x, y, z)))
}

/// A scene with salt and pepper visuals, a tracked hand, and a Guide over them
pub struct Kitchen {
    pub scene: TestScene,
    pub guide: Guide<TestEntity>,
    pub salt: TestEntity,
    pub pepper: TestEntity,
    pub hand: TestEntity,
    pub start: Instant,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::with_extra(Vec::new())
    }

    /// Salt and pepper plus the given extra ingredients, visuals included
    pub fn with_extra(extra: Vec<IngredientConfig<TestEntity>>) -> Self {
        init_logger();

        let mut scene = TestScene::new();
        let salt = scene.spawn_visual("SaltHighlight");
        let pepper = scene.spawn_visual("PepperHighlight");
        let hand = scene.spawn_beam_origin(Pose::from_translation(Vec3::new(0.0, 1.0, 0.0)));

        let mut ingredients = vec![
            IngredientConfig::new("SALT", "Salt", Some(salt)),
            IngredientConfig::new("PEPPER", "Pepper", Some(pepper)),
        ];
        ingredients.extend(extra);

        let config = GuideConfig {
            flash_duration: FLASH_DURATION,
        };
        let mut guide = Guide::new(config, ingredients).expect("kitchen registry is valid");
        guide.startup(&mut scene);

        Self {
            scene,
            guide,
            salt,
            pepper,
            hand,
            start: Instant::now(),
        }
    }

    pub fn at(&self, elapsed: Duration) -> Instant {
        self.start + elapsed
    }

    pub fn markers(
        &mut self,
        added: Vec<MarkerEvent>,
        updated: Vec<MarkerEvent>,
        elapsed: Duration,
    ) -> Vec<MarkerOutcome> {
        let now = self.at(elapsed);
        self.guide
            .on_markers_changed(&mut self.scene, &MarkersChanged::new(added, updated), &now)
    }

    /// Decodes the marker and lets its registration flash run out
    pub fn register(&mut self, payload: &str) {
        self.markers(vec![marker_at(payload, 1.0, 0.0, 2.0)], Vec::new(), Duration::ZERO);
        self.tick(FLASH_DURATION);
    }

    pub fn tick(&mut self, elapsed: Duration) -> BeamUpdate {
        let now = self.at(elapsed);
        self.guide.update(&mut self.scene, &now)
    }

    pub fn step(&mut self, ingredient: Option<&str>) {
        let _ = self.guide.on_step_changed(&mut self.scene, ingredient);
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
