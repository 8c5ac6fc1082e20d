use zombie_room::input::{ActionMap, InputState, KeyCode};
use zombie_room::scene::{Action, default_bindings};

// ── InputState ───────────────────────────────────────────────────────────────

#[test]
fn press_sets_held_and_pressed() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyE);
    assert!(input.is_key_held(KeyCode::KeyE));
    assert!(input.is_key_pressed(KeyCode::KeyE));
}

#[test]
fn clearing_frame_state_keeps_held_keys() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyW);
    input.clear_frame_state();
    assert!(input.is_key_held(KeyCode::KeyW));
    assert!(!input.is_key_pressed(KeyCode::KeyW));
}

#[test]
fn auto_repeat_is_not_a_new_press() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyE);
    input.clear_frame_state();
    input.press(KeyCode::KeyE);
    assert!(!input.is_key_pressed(KeyCode::KeyE));
}

#[test]
fn release_clears_held() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyA);
    input.release(KeyCode::KeyA);
    assert!(!input.is_key_held(KeyCode::KeyA));
}

#[test]
fn press_after_release_is_a_new_press() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyE);
    input.clear_frame_state();
    input.release(KeyCode::KeyE);
    input.press(KeyCode::KeyE);
    assert!(input.is_key_pressed(KeyCode::KeyE));
}

#[test]
fn tap_within_one_tick_still_counts_as_pressed() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyE);
    input.release(KeyCode::KeyE);
    assert!(input.is_key_pressed(KeyCode::KeyE));
    assert!(!input.is_key_held(KeyCode::KeyE));
}

// ── ActionMap ────────────────────────────────────────────────────────────────

#[test]
fn unbound_action_is_never_active() {
    let map: ActionMap<Action> = ActionMap::new();
    let mut input = InputState::new();
    input.press(KeyCode::KeyE);
    assert!(!map.is_pressed(Action::Interact, &input));
    assert!(!map.is_held(Action::Interact, &input));
}

#[test]
fn any_bound_key_triggers_action() {
    let map = ActionMap::new()
        .with(Action::MoveUp, KeyCode::KeyW)
        .with(Action::MoveUp, KeyCode::ArrowUp);
    let mut input = InputState::new();
    input.press(KeyCode::ArrowUp);
    assert!(map.is_held(Action::MoveUp, &input));
    assert!(map.is_pressed(Action::MoveUp, &input));
}

#[test]
fn bind_adds_to_existing_keys() {
    let mut map = ActionMap::new();
    map.bind(Action::Interact, KeyCode::KeyE);
    map.bind(Action::Interact, KeyCode::Enter);
    let mut input = InputState::new();
    input.press(KeyCode::Enter);
    assert!(map.is_pressed(Action::Interact, &input));
    assert!(!map.is_pressed(Action::Quit, &input));
}

#[test]
fn default_bindings_are_wasd_e_escape() {
    let map = default_bindings();
    let cases = [
        (Action::MoveUp, KeyCode::KeyW),
        (Action::MoveDown, KeyCode::KeyS),
        (Action::MoveLeft, KeyCode::KeyA),
        (Action::MoveRight, KeyCode::KeyD),
        (Action::Interact, KeyCode::KeyE),
        (Action::Quit, KeyCode::Escape),
    ];
    for (action, key) in cases {
        let mut input = InputState::new();
        input.press(key);
        assert!(map.is_pressed(action, &input), "{action:?} not bound to {key:?}");
    }
}
