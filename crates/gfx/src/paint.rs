use egui::text::LayoutJob;
use egui::{Color32, Painter, Pos2, Rect};

/// Lay out `job` and paint it with its top-left corner at `pos`.
///
/// `fallback` colours sections whose format uses [`Color32::PLACEHOLDER`].
/// Returns the painted rectangle.
pub fn paint_rich_input(painter: &Painter, pos: Pos2, job: LayoutJob, fallback: Color32) -> Rect {
    let galley = painter.layout_job(job);
    let rect = Rect::from_min_size(pos, galley.size());
    painter.galley(pos, galley, fallback);
    rect
}
