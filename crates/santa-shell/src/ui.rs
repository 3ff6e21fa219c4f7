//! Transient interaction state: focus, hex entry draft, slider drag.

use crate::shell::ControlEvent;

// `#RRGGBB`; the suit has no alpha.
const MAX_HEX_DRAFT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    HexField,
    Slider,
}

/// Keys the panel reacts to, independent of the windowing backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Enter,
    Escape,
    Backspace,
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub focus: Option<Focus>,
    pub hex_draft: String,
    pub dragging: bool,
}

impl UiState {
    /// Focus the hex field, seeding the draft with the current color.
    pub fn focus_hex(&mut self, current_hex: &str) {
        self.focus = Some(Focus::HexField);
        self.hex_draft = current_hex.to_string();
        self.dragging = false;
    }

    pub fn focus_slider(&mut self) {
        self.focus = Some(Focus::Slider);
        self.dragging = true;
    }

    pub fn blur(&mut self) {
        self.focus = None;
        self.dragging = false;
        self.hex_draft.clear();
    }

    /// Translate a key press into a control event, updating local state.
    ///
    /// Returns `None` when the key only edits the draft or is not handled.
    pub fn on_key(&mut self, key: &KeyInput, slider_bounds: (f32, f32)) -> Option<ControlEvent> {
        match self.focus? {
            Focus::Slider => match key {
                KeyInput::Left | KeyInput::Down => Some(ControlEvent::NudgeBeardWidth(-1)),
                KeyInput::Right | KeyInput::Up => Some(ControlEvent::NudgeBeardWidth(1)),
                KeyInput::Home => Some(ControlEvent::BeardWidth(slider_bounds.0)),
                KeyInput::End => Some(ControlEvent::BeardWidth(slider_bounds.1)),
                KeyInput::Escape => {
                    self.blur();
                    None
                }
                _ => None,
            },
            Focus::HexField => match key {
                KeyInput::Enter => Some(ControlEvent::SuitColor(self.hex_draft.clone())),
                KeyInput::Escape => {
                    self.blur();
                    None
                }
                KeyInput::Backspace => {
                    self.hex_draft.pop();
                    None
                }
                KeyInput::Text(text) => {
                    for ch in text.chars() {
                        let accepted = ch.is_ascii_hexdigit() || (ch == '#' && self.hex_draft.is_empty());
                        if accepted && self.hex_draft.len() < MAX_HEX_DRAFT {
                            self.hex_draft.push(ch.to_ascii_uppercase());
                        }
                    }
                    None
                }
                _ => None,
            },
        }
    }
}
