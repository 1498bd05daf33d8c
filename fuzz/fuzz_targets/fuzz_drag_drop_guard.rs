#![no_main]

use libfuzzer_sys::fuzz_target;
use retro_grouping::{DragDropState, is_valid_drag_drop_state, resolve_drop_action};

fuzz_target!(|data: &[u8]| {
    // Cap length to keep fuzzing fast.
    if data.len() > 4096 {
        return;
    }
    let Ok(candidate) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // The guard and the typed conversion must agree.
    let valid = is_valid_drag_drop_state(&candidate);
    let converted = DragDropState::from_value(&candidate);
    assert_eq!(valid, converted.is_ok(), "guard disagrees with from_value");

    if let Ok(state) = converted {
        assert!(state.validate().is_ok(), "guarded state failed validation");
        let action = resolve_drop_action(&state);
        assert_eq!(action, resolve_drop_action(&state), "resolver not deterministic");
        if state.active_id == state.target_id {
            assert_eq!(action, None, "self-drop must be a no-op");
        }
    }
});
