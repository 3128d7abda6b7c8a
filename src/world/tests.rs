//! World domain: unit tests for the lava fill cadence.

use super::LavaFlood;

#[test]
fn test_first_column_spawns_immediately() {
    let mut flood = LavaFlood::default();
    assert_eq!(flood.tick(0.016, 10, 0.2), Some(0));
}

#[test]
fn test_columns_follow_the_delay() {
    let mut flood = LavaFlood::default();
    assert_eq!(flood.tick(0.016, 10, 0.2), Some(0));

    // Not enough time elapsed for the next column
    assert_eq!(flood.tick(0.1, 10, 0.2), None);
    assert_eq!(flood.tick(0.05, 10, 0.2), None);

    // Delay reached
    assert_eq!(flood.tick(0.1, 10, 0.2), Some(1));
}

#[test]
fn test_fill_stops_at_region_width() {
    let mut flood = LavaFlood::default();
    let mut spawned = 0;

    // Advance far past the full fill time
    for _ in 0..1000 {
        if flood.tick(0.1, 5, 0.2).is_some() {
            spawned += 1;
        }
    }

    assert_eq!(spawned, 5);
    assert_eq!(flood.tick(10.0, 5, 0.2), None);
}

#[test]
fn test_one_column_per_tick_even_after_a_stall() {
    let mut flood = LavaFlood::default();
    flood.tick(0.016, 10, 0.2);

    // A long frame still only releases one column per tick
    assert_eq!(flood.tick(1.0, 10, 0.2), Some(1));
    assert_eq!(flood.tick(0.0, 10, 0.2), Some(2));
}
