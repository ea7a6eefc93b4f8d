use crate::style::GroupStyles;
use egui::text::{LayoutJob, TextFormat};
use segment::{Segment, SegmentKind};

/// Build a single-line layout job for `segments`.
///
/// Plain segments use `base`; group segments use `base` overlaid with their
/// group's style, or `base` alone when the group has none. Empty segments add
/// no section.
pub fn layout_job(segments: &[Segment<'_>], base: &TextFormat, styles: &GroupStyles) -> LayoutJob {
    let mut job = LayoutJob::default();
    // Single line: the host scrolls horizontally.
    job.wrap.max_width = f32::INFINITY;

    for segment in segments.iter().filter(|s| !s.is_empty()) {
        let format = match segment.kind {
            SegmentKind::Plain => base.clone(),
            SegmentKind::Group(group) => styles
                .get(group)
                .map_or_else(|| base.clone(), |style| style.apply(base)),
        };
        job.append(segment.text, 0.0, format);
    }
    job
}

/// Layout job for the placeholder, shown while the value is empty.
pub fn placeholder_job(placeholder: &str, base: &TextFormat) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = f32::INFINITY;
    let format = TextFormat {
        color: base.color.gamma_multiply(0.6),
        ..base.clone()
    };
    job.append(placeholder, 0.0, format);
    job
}
