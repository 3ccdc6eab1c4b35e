//! Integration tests for the registration flash
//! A flash shows a freshly anchored visual briefly. When it ends, the visual
//! is left however the last highlight command wanted it.

use std::time::Duration;

use sabor_test::{assert_hidden, assert_shown, marker_at, Kitchen, FLASH_DURATION};

fn flashing_salt() -> Kitchen {
    let mut kitchen = Kitchen::new();
    kitchen.markers(vec![marker_at("SALT", 1.0, 0.0, 2.0)], Vec::new(), Duration::ZERO);
    kitchen
}

#[test]
fn hide_during_flash_ends_hidden() {
    let mut kitchen = flashing_salt();
    kitchen.tick(Duration::from_secs(1));

    kitchen.guide.set_visible(&mut kitchen.scene, "Salt", false).unwrap();
    assert_hidden!(kitchen.scene, kitchen.salt);

    kitchen.tick(FLASH_DURATION);
    kitchen.tick(FLASH_DURATION * 2);
    assert_hidden!(kitchen.scene, kitchen.salt);
}

#[test]
fn show_during_flash_stays_shown_after_flash() {
    let mut kitchen = flashing_salt();
    kitchen.tick(Duration::from_secs(1));

    let salt_key = kitchen.guide.registry().key_for_name("Salt").unwrap();
    kitchen.guide.set_visible(&mut kitchen.scene, "Salt", true).unwrap();
    assert_shown!(kitchen.scene, kitchen.salt);
    assert!(kitchen.guide.highlights().is_flashing(&salt_key));

    kitchen.tick(FLASH_DURATION);
    assert!(!kitchen.guide.highlights().is_flashing(&salt_key));
    assert_shown!(kitchen.scene, kitchen.salt);
    assert_eq!(kitchen.guide.beam().target(), Some(kitchen.salt));
}

#[test]
fn step_change_during_flash_supersedes_it() {
    let mut kitchen = flashing_salt();
    let salt_key = kitchen.guide.registry().key_for_name("Salt").unwrap();

    kitchen.step(Some("Pepper"));

    assert!(!kitchen.guide.highlights().is_flashing(&salt_key));
    assert_hidden!(kitchen.scene, kitchen.salt);
    kitchen.tick(FLASH_DURATION);
    assert_hidden!(kitchen.scene, kitchen.salt);
}

#[test]
fn flash_does_not_draw_the_beam() {
    let mut kitchen = flashing_salt();

    kitchen.tick(Duration::from_secs(1));

    assert!(kitchen.guide.beam().beam().is_none());
}

#[test]
fn flashes_of_different_ingredients_expire_independently() {
    let mut kitchen = Kitchen::new();
    kitchen.markers(vec![marker_at("SALT", 1.0, 0.0, 0.0)], Vec::new(), Duration::ZERO);
    kitchen.markers(vec![marker_at("PEPPER", 2.0, 0.0, 0.0)], Vec::new(), Duration::from_secs(2));

    kitchen.tick(FLASH_DURATION);
    assert_hidden!(kitchen.scene, kitchen.salt);
    assert_shown!(kitchen.scene, kitchen.pepper);

    kitchen.tick(Duration::from_secs(2) + FLASH_DURATION);
    assert_hidden!(kitchen.scene, kitchen.pepper);
}

#[test]
fn flash_expires_even_when_started_with_an_earlier_time() {
    let mut kitchen = Kitchen::new();
    kitchen.markers(vec![marker_at("SALT", 1.0, 0.0, 0.0)], Vec::new(), Duration::from_secs(2));
    kitchen.markers(vec![marker_at("PEPPER", 2.0, 0.0, 0.0)], Vec::new(), Duration::ZERO);

    kitchen.tick(Duration::from_secs(4));
    assert_hidden!(kitchen.scene, kitchen.pepper);
    assert_shown!(kitchen.scene, kitchen.salt);

    kitchen.tick(Duration::from_secs(5));
    assert_hidden!(kitchen.scene, kitchen.salt);
}
