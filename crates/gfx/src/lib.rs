//! egui rendering for rich inputs.
//!
//! Turns the segments of a value into a [`egui::text::LayoutJob`] where each
//! capture group carries its own [`GroupStyle`], then paints it. Hosts draw the
//! editable text layer themselves and place this output over or under it.

mod job;
mod paint;
mod style;

pub use job::{layout_job, placeholder_job};
pub use paint::paint_rich_input;
pub use style::{GroupStyle, GroupStyles, parse_color};
