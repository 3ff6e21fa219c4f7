//! The two editable controls of a session.

use santa_core::Color;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("invalid color {0:?}")]
    InvalidColor(String),
}

/// Suit color selector: a set of preset swatches plus free-form color entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPicker {
    label: String,
    value: Color,
    swatches: Vec<Color>,
}

impl ColorPicker {
    pub const LABEL: &'static str = "Choose Suit Color";

    pub fn new(label: impl Into<String>, initial: Color, swatches: Vec<Color>) -> Self {
        Self {
            label: label.into(),
            value: initial,
            swatches,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Color {
        self.value
    }

    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Parse and apply a color. Invalid input leaves the value untouched.
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, input: &str) -> Result<bool, ControlError> {
        let color = Color::parse(input).map_err(|e| ControlError::InvalidColor(e.input))?;
        Ok(self.set_color(color))
    }

    /// The suit is always opaque; any alpha in `color` is dropped.
    pub fn set_color(&mut self, color: Color) -> bool {
        let color = Color { a: 255, ..color };
        if self.value == color {
            return false;
        }
        self.value = color;
        true
    }

    /// Select the swatch at `index`; out-of-range indices are ignored.
    pub fn select_swatch(&mut self, index: usize) -> bool {
        match self.swatches.get(index).copied() {
            Some(color) => self.set_color(color),
            None => false,
        }
    }

    pub fn selected_swatch(&self) -> Option<usize> {
        self.swatches.iter().position(|c| *c == self.value)
    }
}

/// Bounded numeric range selector with a fixed step.
///
/// The value is always within `[min, max]` and on the step grid anchored at `min`.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    label: String,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
}

// Snapped values are rounded to this many steps per unit so that, e.g., 1.5 + 8 * 0.1
// lands on the same float as the literal 2.3.
const QUANTUM: f32 = 10_000.0;

impl Slider {
    pub const LABEL: &'static str = "Adjust Beard Width";

    pub fn new(label: impl Into<String>, min: f32, max: f32, step: f32, initial: f32) -> Self {
        let mut slider = Self {
            label: label.into(),
            min: min.min(max),
            max: max.max(min),
            step: if step > 0.0 { step } else { max - min },
            value: min,
        };
        slider.value = slider.snap(initial);
        slider
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Clamp to the range and round to the nearest step.
    pub fn snap(&self, v: f32) -> f32 {
        let clamped = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = ((self.min + steps * self.step) * QUANTUM).round() / QUANTUM;
        snapped.clamp(self.min, self.max)
    }

    /// Returns whether the value changed. Non-finite input is ignored.
    pub fn set(&mut self, v: f32) -> bool {
        if !v.is_finite() {
            return false;
        }
        let snapped = self.snap(v);
        if snapped == self.value {
            return false;
        }
        self.value = snapped;
        true
    }

    /// Position of the value along the track, in [0, 1].
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    pub fn set_from_fraction(&mut self, t: f32) -> bool {
        let t = t.clamp(0.0, 1.0);
        self.set(self.min + t * (self.max - self.min))
    }

    /// Move by whole steps (negative moves down).
    pub fn nudge(&mut self, steps: i32) -> bool {
        self.set(self.value + steps as f32 * self.step)
    }

    /// Value as shown next to the label, with as many decimals as the step needs.
    pub fn display_value(&self) -> String {
        let decimals = if self.step.fract() == 0.0 {
            0
        } else {
            (-self.step.log10().floor()).max(1.0) as usize
        };
        format!("{:.*}", decimals, self.value)
    }
}
