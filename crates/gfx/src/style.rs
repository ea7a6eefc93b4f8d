//! Per-group text styles.
//!
//! A capture group may only recolour its text: foreground, background and
//! line decorations. Font, size and spacing stay those of the whole input so
//! group text lines up with the caret of the editable layer underneath.

use egui::text::TextFormat;
use egui::{Color32, Stroke};
use std::collections::BTreeMap;

const DECORATION_WIDTH: f32 = 1.0;

/// Visual overrides for one capture group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupStyle {
    pub color: Option<Color32>,
    pub background: Option<Color32>,
    pub underline: Option<Stroke>,
    pub strikethrough: Option<Stroke>,
}

impl GroupStyle {
    pub fn color(color: Color32) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_underline(mut self, stroke: Stroke) -> Self {
        self.underline = Some(stroke);
        self
    }

    pub fn with_strikethrough(mut self, stroke: Stroke) -> Self {
        self.strikethrough = Some(stroke);
        self
    }

    /// Build a style from CSS-like declarations (`"color: red; text-decoration: underline"`).
    ///
    /// Only `color`, `background-color`/`background` and
    /// `text-decoration`/`text-decoration-line` are honoured; other properties
    /// and unparseable values are dropped.
    pub fn from_declarations(input: &str) -> Self {
        let mut style = Self::default();
        for (name, value) in parse_declarations(input) {
            match name.as_str() {
                "color" => style.color = parse_color(value).or(style.color),
                "background" | "background-color" => {
                    style.background = parse_color(value).or(style.background);
                }
                "text-decoration" | "text-decoration-line" => {
                    apply_decoration(&mut style, value);
                }
                _ => {
                    log::debug!(
                        target: "richinput.gfx",
                        "dropping disallowed group property {name:?}"
                    );
                }
            }
        }
        style
    }

    /// `base` with this style laid over it.
    pub fn apply(&self, base: &TextFormat) -> TextFormat {
        let mut format = base.clone();
        if let Some(color) = self.color {
            format.color = color;
        }
        if let Some(background) = self.background {
            format.background = background;
        }
        if let Some(stroke) = self.underline {
            format.underline = stroke;
        }
        if let Some(stroke) = self.strikethrough {
            format.strikethrough = stroke;
        }
        format
    }
}

/// Styles keyed by 1-based capture group index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupStyles {
    by_group: BTreeMap<usize, GroupStyle>,
}

impl GroupStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, group: usize, style: GroupStyle) -> Self {
        self.insert(group, style);
        self
    }

    pub fn insert(&mut self, group: usize, style: GroupStyle) {
        self.by_group.insert(group, style);
    }

    pub fn get(&self, group: usize) -> Option<&GroupStyle> {
        self.by_group.get(&group)
    }

    pub fn is_empty(&self) -> bool {
        self.by_group.is_empty()
    }

    /// One foreground colour per group, cycling through `colors`.
    pub fn palette(group_count: usize, colors: &[Color32]) -> Self {
        let mut styles = Self::new();
        if colors.is_empty() {
            return styles;
        }
        for group in 1..=group_count {
            styles.insert(group, GroupStyle::color(colors[(group - 1) % colors.len()]));
        }
        styles
    }
}

fn parse_declarations(input: &str) -> impl Iterator<Item = (String, &str)> {
    input.split(';').filter_map(|pair| {
        let (n, v) = pair.split_once(':')?;
        let name = n.trim().to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }
        Some((name, v.trim()))
    })
}

fn apply_decoration(style: &mut GroupStyle, value: &str) {
    let mut color = style.color.unwrap_or(Color32::PLACEHOLDER);
    let mut underline = false;
    let mut strikethrough = false;
    for word in value.split_ascii_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "underline" => underline = true,
            "line-through" => strikethrough = true,
            "none" => {
                style.underline = None;
                style.strikethrough = None;
            }
            other => {
                if let Some(c) = parse_color(other) {
                    color = c;
                }
            }
        }
    }
    let stroke = Stroke::new(DECORATION_WIDTH, color);
    if underline {
        style.underline = Some(stroke);
    }
    if strikethrough {
        style.strikethrough = Some(stroke);
    }
}

/// `#rgb`, `#rrggbb` or a basic named colour.
pub fn parse_color(value: &str) -> Option<Color32> {
    let s = value.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            let digits = &hex[range];
            let digits = if digits.len() == 1 {
                digits.repeat(2)
            } else {
                digits.to_string()
            };
            u8::from_str_radix(&digits, 16).ok()
        };
        return match hex.len() {
            3 => Some(Color32::from_rgb(channel(0..1)?, channel(1..2)?, channel(2..3)?)),
            6 => Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => None,
        };
    }

    let (r, g, b) = match s.as_str() {
        "black" => (0, 0, 0),
        "blue" => (0, 0, 255),
        "cyan" => (0, 255, 255),
        "gray" | "grey" => (128, 128, 128),
        "green" => (0, 128, 0),
        "magenta" => (255, 0, 255),
        "maroon" => (128, 0, 0),
        "navy" => (0, 0, 128),
        "olive" => (128, 128, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "red" => (255, 0, 0),
        "silver" => (192, 192, 192),
        "teal" => (0, 128, 128),
        "white" => (255, 255, 255),
        "yellow" => (255, 255, 0),
        "transparent" => return Some(Color32::TRANSPARENT),
        _ => return None,
    };
    Some(Color32::from_rgb(r, g, b))
}
