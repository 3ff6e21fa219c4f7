use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::ui::KeyInput;

/// Panel input for a keyboard event; releases and unmapped keys yield `None`.
pub fn key_input(event: &KeyEvent) -> Option<KeyInput> {
    if event.state != ElementState::Pressed {
        return None;
    }
    let code = match event.physical_key {
        PhysicalKey::Code(code) => Some(code),
        PhysicalKey::Unidentified(_) => None,
    };
    translate_key(code, event.text.as_deref())
}

/// Map a pressed key to panel input. Editing keys win over the text they may carry.
pub fn translate_key(code: Option<KeyCode>, text: Option<&str>) -> Option<KeyInput> {
    let named = match code {
        Some(KeyCode::ArrowLeft) => Some(KeyInput::Left),
        Some(KeyCode::ArrowRight) => Some(KeyInput::Right),
        Some(KeyCode::ArrowUp) => Some(KeyInput::Up),
        Some(KeyCode::ArrowDown) => Some(KeyInput::Down),
        Some(KeyCode::Home) => Some(KeyInput::Home),
        Some(KeyCode::End) => Some(KeyInput::End),
        Some(KeyCode::Enter | KeyCode::NumpadEnter) => Some(KeyInput::Enter),
        Some(KeyCode::Escape) => Some(KeyInput::Escape),
        Some(KeyCode::Backspace) => Some(KeyInput::Backspace),
        _ => None,
    };
    named.or_else(|| {
        let printable: String = text?.chars().filter(|c| !c.is_control()).collect();
        (!printable.is_empty()).then_some(KeyInput::Text(printable))
    })
}
