use super::*;

#[test]
fn defaults_to_the_top_of_an_unmeasured_page() {
    let state = ScrollState::default();
    assert_eq!(state.offset_y, 0.0);
    assert_eq!(state.viewport_height, 0.0);
}

#[test]
fn measurements_replace_wholesale() {
    let mut state = ScrollState::default();
    state.offset_y = 120.0;
    state.viewport_height = 900.0;
    assert_eq!(state, ScrollState { offset_y: 120.0, viewport_height: 900.0 });
}
