use pretty_assertions::assert_eq;

use mazebound::formatter::{get_tick_count, increment_tick};

#[test]
fn test_tick_counter_increments() {
    // The counter is process-global, so only relative movement is observable.
    let before = get_tick_count();
    increment_tick();
    increment_tick();
    increment_tick();
    assert_eq!(get_tick_count(), before + 3);
}
