//! santa-figure: the parametrized Santa composition.
//!
//! [`build_santa`] maps [`RenderParameters`] to a [`Figure`], a fixed, layered
//! list of [`Shape`]s. [`FigureView`] projects a figure onto a painter.

mod builder;
mod figure;
mod shape;
mod view;

pub use builder::*;
pub use figure::*;
pub use shape::*;
pub use view::{FigureView, TitleStyle};
