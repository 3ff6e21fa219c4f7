//! santa-shell: the interactive customizer around the Santa figure.
//!
//! [`Shell`] owns the two controls and re-renders the figure when one of them
//! changes. [`run`] opens a winit + wgpu window with a control sidebar and the
//! rendered figure, and drives the shell from pointer and keyboard input.

use anyhow::Result;
use santa_config::SantaConfig;

pub mod app;
pub mod controls;
pub mod events;
pub mod panel;
pub mod shell;
pub mod ui;
pub mod window;

pub use app::SantaApp;
pub use controls::{ColorPicker, ControlError, Slider};
pub use shell::{ControlEvent, Phase, Shell};
pub use window::{EventHandler, SantaWindow, WindowCtx};

/// Open the customizer window and block until it is closed.
pub fn run(config: SantaConfig) -> Result<()> {
    let window = SantaWindow::new(&config.window)?;
    let app = SantaApp::new(config);
    window.run(app)
}
