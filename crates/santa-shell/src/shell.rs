//! Session state: two controls, the current figure, and the render cycle.

use santa_core::Color;
use santa_figure::{
    BEARD_WIDTH_STEP, DEFAULT_BEARD_WIDTH, DEFAULT_SUIT_COLOR, Figure, MAX_BEARD_WIDTH,
    MIN_BEARD_WIDTH, RenderParameters, build_santa,
};

use crate::controls::{ColorPicker, ControlError, Slider};

/// Input that may change a control value.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    /// Initial load; always renders.
    Load,
    SuitColor(String),
    SuitSwatch(usize),
    BeardWidth(f32),
    /// Track position in [0, 1].
    BeardWidthFraction(f32),
    NudgeBeardWidth(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rendering,
}

type PhaseObserver = Box<dyn FnMut(Phase, Phase)>;

/// Holds the control values of one session and the figure they produce.
pub struct Shell {
    color: ColorPicker,
    beard: Slider,
    phase: Phase,
    figure: Option<Figure>,
    renders: u64,
    observer: Option<PhaseObserver>,
}

impl Shell {
    /// A fresh session at the default control values.
    pub fn new(swatches: Vec<Color>) -> Self {
        Self {
            color: ColorPicker::new(ColorPicker::LABEL, DEFAULT_SUIT_COLOR, swatches),
            beard: Slider::new(
                Slider::LABEL,
                MIN_BEARD_WIDTH,
                MAX_BEARD_WIDTH,
                BEARD_WIDTH_STEP,
                DEFAULT_BEARD_WIDTH,
            ),
            phase: Phase::Idle,
            figure: None,
            renders: 0,
            observer: None,
        }
    }

    /// Observe every phase transition as `(from, to)`.
    pub fn set_observer(&mut self, observer: impl FnMut(Phase, Phase) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn color_picker(&self) -> &ColorPicker {
        &self.color
    }

    pub fn slider(&self) -> &Slider {
        &self.beard
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Parameters for the next render, read from the controls.
    pub fn parameters(&self) -> RenderParameters {
        RenderParameters::new(self.color.value(), self.beard.value())
    }

    /// Apply `event` and re-render if it changed a value.
    ///
    /// Returns whether a new figure was produced. Rejected input leaves the
    /// controls and the current figure untouched.
    pub fn handle(&mut self, event: ControlEvent) -> Result<bool, ControlError> {
        let changed = match event {
            ControlEvent::Load => true,
            ControlEvent::SuitColor(input) => self.color.set(&input)?,
            ControlEvent::SuitSwatch(index) => self.color.select_swatch(index),
            ControlEvent::BeardWidth(w) => self.beard.set(w),
            ControlEvent::BeardWidthFraction(t) => self.beard.set_from_fraction(t),
            ControlEvent::NudgeBeardWidth(steps) => self.beard.nudge(steps),
        };
        if changed {
            self.render();
        }
        Ok(changed)
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        self.phase = to;
        if let Some(observer) = self.observer.as_mut() {
            observer(from, to);
        }
    }

    fn render(&mut self) {
        self.transition(Phase::Rendering);
        let params = self.parameters();
        log::debug!(
            "rendering figure: suit={} beard_width={}",
            params.suit_color,
            params.beard_width
        );
        self.figure = Some(build_santa(&params));
        self.renders += 1;
        self.transition(Phase::Idle);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
