//! Integration tests for the shared beam
//! The beam is redrawn every tick and must switch itself off within one tick
//! of its target becoming hidden or disappearing.

use std::time::Duration;

use bevy_math::Vec3;

use sabor_shared::{BeamSegment, BeamUpdate, SceneRef};
use sabor_test::{assert_beam_stopped, Kitchen, TestScene};

fn highlighted_salt() -> Kitchen {
    let mut kitchen = Kitchen::new();
    kitchen.register("SALT");
    kitchen.step(Some("Salt"));
    kitchen
}

fn beam_count(scene: &TestScene, hand: &sabor_test::TestEntity) -> usize {
    scene.children_of(hand).len()
}

#[test]
fn beam_is_drawn_from_hand_to_target() {
    let mut kitchen = highlighted_salt();

    let update = kitchen.tick(Duration::from_secs(4));

    assert_eq!(
        update,
        BeamUpdate::Drawn(BeamSegment {
            origin: Vec3::new(0.0, 1.0, 0.0),
            destination: Vec3::new(1.0, 0.0, 2.0),
        })
    );
    let beam = kitchen.guide.beam().beam().unwrap();
    let line = kitchen.scene.beam_line(&beam).unwrap();
    assert!(line.enabled);
    assert_eq!(line.origin, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(line.destination, Vec3::new(1.0, 0.0, 2.0));
}

#[test]
fn beam_endpoints_are_recomputed_every_tick() {
    let mut kitchen = highlighted_salt();
    kitchen.tick(Duration::from_secs(4));

    kitchen.scene.set_local_translation(&kitchen.hand, Vec3::new(0.5, 1.5, 0.0));
    let update = kitchen.tick(Duration::from_secs(5));

    assert_eq!(
        update,
        BeamUpdate::Drawn(BeamSegment {
            origin: Vec3::new(0.5, 1.5, 0.0),
            destination: Vec3::new(1.0, 0.0, 2.0),
        })
    );
}

#[test]
fn beam_stops_when_target_is_hidden() {
    let mut kitchen = highlighted_salt();
    kitchen.guide.set_visible(&mut kitchen.scene, "Salt", false).unwrap();

    assert_eq!(kitchen.tick(Duration::from_secs(4)), BeamUpdate::Stopped);
    assert_beam_stopped!(kitchen);
    assert_eq!(kitchen.tick(Duration::from_secs(5)), BeamUpdate::Idle);
}

#[test]
fn beam_stops_when_target_is_despawned() {
    let mut kitchen = highlighted_salt();
    let anchor = kitchen.scene.parent_of(&kitchen.salt).unwrap();

    kitchen.scene.despawn(&anchor);

    assert!(!kitchen.scene.has_entity(&kitchen.salt));
    assert_eq!(kitchen.tick(Duration::from_secs(4)), BeamUpdate::Stopped);
    assert_beam_stopped!(kitchen);
}

#[test]
fn beam_stops_when_its_line_is_removed() {
    let mut kitchen = highlighted_salt();
    let beam = kitchen.guide.beam().beam().unwrap();

    kitchen.scene.remove_beam_line(&beam);

    assert_eq!(kitchen.tick(Duration::from_secs(4)), BeamUpdate::Stopped);
    assert!(kitchen.guide.beam().target().is_none());
    assert_eq!(kitchen.tick(Duration::from_secs(5)), BeamUpdate::Idle);
}

#[test]
fn beam_spawned_without_line_never_draws() {
    let mut kitchen = Kitchen::new();
    kitchen.scene.spawn_beams_without_line();
    kitchen.register("SALT");
    kitchen.step(Some("Salt"));

    assert_eq!(kitchen.tick(Duration::from_secs(4)), BeamUpdate::Stopped);
    assert_eq!(kitchen.tick(Duration::from_secs(5)), BeamUpdate::Idle);
}

#[test]
fn beam_is_created_lazily_and_reused() {
    let mut kitchen = Kitchen::new();
    kitchen.register("SALT");
    kitchen.register("PEPPER");
    assert!(kitchen.guide.beam().beam().is_none());
    assert_eq!(kitchen.tick(Duration::from_secs(4)), BeamUpdate::Idle);

    kitchen.step(Some("Salt"));
    let beam = kitchen.guide.beam().beam().unwrap();
    kitchen.step(Some("Pepper"));
    kitchen.step(None);
    kitchen.step(Some("Salt"));

    assert_eq!(kitchen.guide.beam().beam(), Some(beam));
    assert_eq!(beam_count(&kitchen.scene, &kitchen.hand), 1);
}

#[test]
fn beam_is_never_drawn_to_an_inactive_target() {
    let mut kitchen = highlighted_salt();

    for second in 4..10 {
        if second == 6 {
            let anchor = kitchen.scene.parent_of(&kitchen.salt).unwrap();
            sabor_shared::SceneMut::set_active(&mut kitchen.scene, &anchor, false);
        }
        let update = kitchen.tick(Duration::from_secs(second));
        if let BeamUpdate::Drawn(_) = update {
            assert!(kitchen.scene.is_active_in_hierarchy(&kitchen.salt));
        }
        if second >= 6 {
            assert_ne!(update, BeamUpdate::Drawn(BeamSegment {
                origin: Vec3::new(0.0, 1.0, 0.0),
                destination: Vec3::new(1.0, 0.0, 2.0),
            }));
        }
    }
}
