//! santa-core: colors, geometry, display lists and frame rasterization.
//!
//! Scene code records draw commands through a [`Painter`]; the resulting
//! [`DisplayList`] is rasterized on the CPU by [`Rasterizer`] and presented with
//! the wgpu [`Compositor`].

/// Re-export wgpu for downstream crates while avoiding direct dependency leakage.
pub use wgpu;

mod color;
mod display_list;
mod gpu;
mod hit_test;
mod painter;
mod raster;
mod scene;
mod text;

pub mod dpi;

pub use color::{Color, ParseColorError};
pub use display_list::*;
pub use gpu::{Compositor, choose_srgb_surface_format, make_surface_config};
pub use hit_test::{HitIndex, HitResult};
pub use painter::*;
pub use raster::{RasterError, Rasterizer};
pub use scene::*;
pub use text::{FontdueProvider, LineMetrics, RasterizedGlyph, TextProvider};
