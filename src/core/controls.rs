use super::scene::SceneKind;

/// What a key press asks the host to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SelectScene(SceneKind),
    NextScene,
    CyclePostEffect,
    ToggleHint,
    TogglePerf,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "1" => Some(KeyAction::SelectScene(SceneKind::Gameboy)),
        "2" => Some(KeyAction::SelectScene(SceneKind::Diorama)),
        "n" | "N" => Some(KeyAction::NextScene),
        "p" | "P" => Some(KeyAction::CyclePostEffect),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "f" | "F" => Some(KeyAction::TogglePerf),
        _ => None,
    }
}
