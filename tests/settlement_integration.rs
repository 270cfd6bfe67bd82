//! Integration tests for the settlement engine
//!
//! These tests drive the public API the way a front end would:
//! - Menu -> playing -> paused lifecycle
//! - Placement through the snapping grid and the affordability gate
//! - Frame loop combining the clock and the resource tick
//! - Config loading from the sample TOML shipped in data/

use heritage_village::city::building::BuildingType;
use heritage_village::city::stockpile::ResourceDelta;
use heritage_village::core::config::SettlementConfig;
use heritage_village::core::types::{BuildingId, Position};
use heritage_village::simulation::settlement::{
    GamePhase, PlacementOutcome, Settlement, SettlementEvent, MAX_PENDING_EVENTS,
};
use heritage_village::ui::state::{toggle_selection, Hud};
use heritage_village::world::placement::PlacementGrid;

const EPS: f64 = 1e-9;

// ============================================================================
// Economy
// ============================================================================

/// Farm on a fresh settlement, then one tick:
/// food 40 + (10 - 5 * 0.5) * 0.01 = 40.075, population recomputed to 0
#[test]
fn test_farm_then_single_tick() {
    let mut s = Settlement::new();

    let outcome = s.place_building(BuildingType::Farm, Position::ZERO);
    assert!(outcome.is_placed());
    assert_eq!(s.resources().wood, 35.0);
    assert_eq!(s.resources().stone, 25.0);

    s.tick();

    let pool = s.resources();
    assert!((pool.food - 40.075).abs() < EPS);
    assert_eq!(pool.population, 0.0);
    assert_eq!(pool.happiness, 50.0);
    assert_eq!(pool.wood, 35.0);
}

#[test]
fn test_cannot_afford_home_with_ten_wood() {
    let mut s = Settlement::new();
    s.update_resources(&ResourceDelta {
        wood: -40.0,
        ..Default::default()
    });
    assert_eq!(s.resources().wood, 10.0);
    assert!(!s.can_afford(BuildingType::Home));

    let outcome = s.place_building(BuildingType::Home, Position::ZERO);
    match outcome {
        PlacementOutcome::InsufficientResources { missing } => {
            assert_eq!(missing.wood, 10.0);
            assert_eq!(missing.stone, 0.0);
        }
        PlacementOutcome::Placed(_) => panic!("home should not be affordable"),
    }
    assert!(s.buildings().is_empty());
    assert_eq!(s.resources().wood, 10.0);
}

#[test]
fn test_workshops_grow_wood_and_stone() {
    let mut s = Settlement::new();
    s.place_building(BuildingType::Workshop, Position::ZERO);
    let wood = s.resources().wood;
    let stone = s.resources().stone;

    for _ in 0..100 {
        s.tick();
    }

    // 100 ticks * 3 * 0.01 = 3 wood, 100 * 2 * 0.01 = 2 stone
    assert!((s.resources().wood - (wood + 3.0)).abs() < 1e-6);
    assert!((s.resources().stone - (stone + 2.0)).abs() < 1e-6);
}

#[test]
fn test_homes_and_wells_set_population_and_happiness() {
    let mut s = Settlement::new();
    s.place_building(BuildingType::Home, Position::new(0.0, 0.0, 0.0));
    s.place_building(BuildingType::Well, Position::new(2.0, 0.0, 0.0));
    s.tick();

    assert_eq!(s.resources().population, 5.0);
    // 50 + (2 + 5) * 0.5
    assert_eq!(s.resources().happiness, 53.5);
}

#[test]
fn test_starving_village_never_goes_negative() {
    let mut s = Settlement::new();
    s.update_resources(&ResourceDelta {
        food: -39.99,
        ..Default::default()
    });
    for _ in 0..10 {
        s.tick();
    }
    assert!(s.resources().food >= 0.0);
    assert!(s.resources().is_valid());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_reset_restores_start_state() {
    let mut s = Settlement::new();
    s.set_phase(GamePhase::Playing);
    s.place_building(BuildingType::Farm, Position::ZERO);
    s.select_building_type(Some(BuildingType::Well));
    s.advance_time(0.4);
    s.tick();

    s.reset();

    assert_eq!(s.phase(), GamePhase::Menu);
    assert!(s.buildings().is_empty());
    assert_eq!(s.resources().wood, 50.0);
    assert_eq!(s.resources().stone, 30.0);
    assert_eq!(s.resources().food, 40.0);
    assert_eq!(s.resources().population, 5.0);
    assert_eq!(s.resources().happiness, 50.0);
    assert_eq!(s.time_of_day(), 0.25);
    assert_eq!(s.season(), 0.0);
    assert_eq!(s.selected_building_type(), None);
    assert_eq!(s.sustainability_score(), 100.0);
}

#[test]
fn test_ids_are_not_reused_after_reset() {
    let mut s = Settlement::new();
    let first = s.place_building(BuildingType::Farm, Position::ZERO).building_id();
    s.reset();
    let second = s.place_building(BuildingType::Farm, Position::ZERO).building_id();
    assert_ne!(first, second);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut s = Settlement::new();
    s.place_building(BuildingType::Farm, Position::ZERO);
    let before = s.snapshot();

    assert!(s.remove_building(BuildingId(999)).is_none());

    let after = s.snapshot();
    assert_eq!(before.buildings, after.buildings);
    assert_eq!(before.resources, after.resources);
}

#[test]
fn test_remove_does_not_refund() {
    let mut s = Settlement::new();
    let id = s
        .place_building(BuildingType::Well, Position::ZERO)
        .building_id()
        .unwrap();
    let stone = s.resources().stone;
    assert!(s.remove_building(id).is_some());
    assert_eq!(s.resources().stone, stone);
    assert!(s.building(id).is_none());
}

#[test]
fn test_frames_only_run_while_playing() {
    let mut s = Settlement::new();
    assert!(s.advance_frame(1.0).is_none());

    s.set_phase(GamePhase::Playing);
    assert!(s.advance_frame(1.0).is_some());
    assert!((s.time_of_day() - 0.27).abs() < EPS);

    s.toggle_pause();
    assert_eq!(s.phase(), GamePhase::Paused);
    assert!(s.advance_frame(1.0).is_none());
    assert!((s.time_of_day() - 0.27).abs() < EPS);
}

// ============================================================================
// Clock
// ============================================================================

#[test]
fn test_time_sums_within_a_day() {
    let mut s = Settlement::new();
    s.advance_time(0.1);
    s.advance_time(0.2);
    assert!((s.time_of_day() - 0.55).abs() < EPS);
    assert_eq!(s.season(), 0.0);
}

#[test]
fn test_day_wrap_advances_season_once() {
    let mut s = Settlement::new();
    s.advance_time(0.5);
    let wraps = s.advance_time(0.3);

    assert_eq!(wraps, 1);
    assert!((s.time_of_day() - 0.05).abs() < 1e-6);
    assert!((s.season() - 0.01).abs() < EPS);

    let days: u64 = s
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            SettlementEvent::DayCompleted { days, .. } => Some(days),
            _ => None,
        })
        .sum();
    assert_eq!(days, 1);
}

#[test]
fn test_full_day_of_frames() {
    let mut s = Settlement::new();
    s.set_phase(GamePhase::Playing);
    // 50 seconds per day at day_speed 0.02
    for _ in 0..51 {
        s.advance_frame(1.0);
    }
    assert!((s.season() - 0.01).abs() < EPS);
    assert!((s.time_of_day() - 0.27).abs() < 1e-6);
}

#[test]
fn test_huge_time_jump_is_one_event() {
    let mut s = Settlement::new();
    let wraps = s.advance_time(1.0e10);
    assert_eq!(wraps, 10_000_000_000);
    assert!((0.0..1.0).contains(&s.season()));

    let events = s.take_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        SettlementEvent::DayCompleted { days: 10_000_000_000, .. }
    ));
}

#[test]
fn test_infinite_time_jump_keeps_clock_usable() {
    let mut s = Settlement::new();
    assert_eq!(s.advance_time(f64::INFINITY), 0);
    assert_eq!(s.advance_time(f64::NAN), 0);
    assert_eq!(s.time_of_day(), 0.25);
    assert_eq!(s.season(), 0.0);

    s.advance_time(0.1);
    assert!((s.time_of_day() - 0.35).abs() < EPS);
}

#[test]
fn test_long_headless_run_keeps_event_log_bounded() {
    let mut s = Settlement::new();
    s.set_phase(GamePhase::Playing);
    // One simulated hour at 60 frames per second
    for _ in 0..(60 * 60 * 60) {
        s.advance_frame(1.0 / 60.0);
    }
    assert!(s.take_events().len() <= MAX_PENDING_EVENTS);
}

// ============================================================================
// Input layer
// ============================================================================

#[test]
fn test_menu_click_flow() {
    let mut s = Settlement::new();
    let grid = PlacementGrid::from_config(&s.config().placement);
    s.set_phase(GamePhase::Playing);

    toggle_selection(&mut s, BuildingType::Home);
    let hud = Hud::from_settlement(&s);
    assert_eq!(hud.prompt, "Click on the terrain to place");

    let outcome = grid.click(&mut s, Position::new(-3.2, 0.0, 9.1)).unwrap();
    assert!(outcome.is_placed());
    assert_eq!(s.buildings()[0].position, Position::new(-4.0, 0.0, 10.0));
    assert_eq!(s.selected_building_type(), None);

    // A second click with nothing selected does nothing
    assert!(grid.click(&mut s, Position::ZERO).is_none());
    assert_eq!(s.buildings().len(), 1);
}

#[test]
fn test_snapshot_serializes_lowercase_names() {
    let mut s = Settlement::new();
    s.set_phase(GamePhase::Playing);
    s.place_building(BuildingType::Workshop, Position::new(2.0, 0.0, 4.0));

    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["buildings"][0]["building_type"], "workshop");
    assert_eq!(json["selected_building_type"], serde_json::Value::Null);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_sample_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/village.toml");
    let config = SettlementConfig::load_from_toml(path).unwrap();
    assert_eq!(config, SettlementConfig::default());
}

#[test]
fn test_custom_costs_drive_affordability() {
    let config = SettlementConfig::parse_toml(
        r#"
        [buildings.home]
        cost = { wood = 100.0 }
        benefit = { population = 5.0 }
        "#,
    )
    .unwrap();
    let s = Settlement::with_config(config);
    assert!(!s.can_afford(BuildingType::Home));
    assert!(s.can_afford(BuildingType::Farm));
}
