//! Reflected configuration of a rich input.
//!
//! Every attribute the control reacts to maps onto a named field of
//! [`RichInputConfig`]. Hosts push attribute changes in with
//! [`RichInputConfig::apply_attribute`] and read the reflected attribute set
//! back with [`RichInputConfig::to_attributes`].

use crate::input_type::InputType;

/// Attributes observed by a rich input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeName {
    StylePattern,
    ReadOnly,
    Value,
    Disabled,
    Required,
    Pattern,
    Placeholder,
    Type,
    Size,
    List,
    DirName,
    Autocomplete,
    MaxLength,
    Name,
}

impl AttributeName {
    pub const OBSERVED: [AttributeName; 14] = [
        AttributeName::StylePattern,
        AttributeName::ReadOnly,
        AttributeName::Value,
        AttributeName::Disabled,
        AttributeName::Required,
        AttributeName::Pattern,
        AttributeName::Placeholder,
        AttributeName::Type,
        AttributeName::Size,
        AttributeName::List,
        AttributeName::DirName,
        AttributeName::Autocomplete,
        AttributeName::MaxLength,
        AttributeName::Name,
    ];

    /// Case-insensitive lookup; `None` for attributes the control ignores.
    pub fn parse(name: &str) -> Option<Self> {
        Self::OBSERVED
            .into_iter()
            .find(|attr| attr.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::StylePattern => "stylepattern",
            AttributeName::ReadOnly => "readonly",
            AttributeName::Value => "value",
            AttributeName::Disabled => "disabled",
            AttributeName::Required => "required",
            AttributeName::Pattern => "pattern",
            AttributeName::Placeholder => "placeholder",
            AttributeName::Type => "type",
            AttributeName::Size => "size",
            AttributeName::List => "list",
            AttributeName::DirName => "dirname",
            AttributeName::Autocomplete => "autocomplete",
            AttributeName::MaxLength => "maxlength",
            AttributeName::Name => "name",
        }
    }

    /// Boolean attributes are on when present, whatever their value.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            AttributeName::ReadOnly | AttributeName::Disabled | AttributeName::Required
        )
    }
}

/// Explicit form of the attribute surface of a rich input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichInputConfig {
    pub input_type: InputType,
    /// Default value (the `value` attribute), not the live value.
    pub value: Option<String>,
    /// Source of the colourization pattern.
    pub style_pattern: Option<String>,
    /// Source of the validation pattern.
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    /// Maximum length in UTF-16 code units.
    pub max_length: Option<usize>,
    pub size: Option<u32>,
    /// Id of the datalist offering suggestions.
    pub list: Option<String>,
    pub dir_name: Option<String>,
    /// Form submission name.
    pub name: Option<String>,
}

impl RichInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `(name, value)` attribute pairs. As in
    /// [`apply_attribute`](Self::apply_attribute), `None` is an absent
    /// attribute; a valueless one (`<x-input required>`) is `Some("")`.
    /// Unknown names are ignored.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            let Some(attr) = AttributeName::parse(name.as_ref()) else {
                continue;
            };
            if let Some(value) = &value {
                config.set(attr, Some(value.as_ref()));
            }
        }
        config
    }

    /// Apply one attribute change. `value == None` means the attribute was
    /// removed. Returns the attribute that changed, or `None` if the name is
    /// not observed.
    pub fn apply_attribute(&mut self, name: &str, value: Option<&str>) -> Option<AttributeName> {
        let attr = AttributeName::parse(name)?;
        self.set(attr, value);
        Some(attr)
    }

    /// Set the field behind `attr` from its attribute value.
    pub fn set(&mut self, attr: AttributeName, value: Option<&str>) {
        let text = || value.map(str::to_string);
        match attr {
            AttributeName::StylePattern => self.style_pattern = text(),
            AttributeName::ReadOnly => self.read_only = value.is_some(),
            AttributeName::Value => self.value = text(),
            AttributeName::Disabled => self.disabled = value.is_some(),
            AttributeName::Required => self.required = value.is_some(),
            AttributeName::Pattern => self.pattern = text(),
            AttributeName::Placeholder => self.placeholder = text(),
            AttributeName::Type => self.input_type = InputType::parse(value),
            AttributeName::Size => self.size = value.and_then(parse_positive_u32),
            AttributeName::List => self.list = text(),
            AttributeName::DirName => self.dir_name = text(),
            AttributeName::Autocomplete => self.autocomplete = text(),
            AttributeName::MaxLength => self.max_length = value.and_then(parse_non_negative),
            AttributeName::Name => self.name = text(),
        }
    }

    /// The attribute value reflecting the field behind `attr`; `None` means
    /// the attribute is absent.
    pub fn attribute(&self, attr: AttributeName) -> Option<String> {
        let flag = |on: bool| on.then(String::new);
        match attr {
            AttributeName::StylePattern => self.style_pattern.clone(),
            AttributeName::ReadOnly => flag(self.read_only),
            AttributeName::Value => self.value.clone(),
            AttributeName::Disabled => flag(self.disabled),
            AttributeName::Required => flag(self.required),
            AttributeName::Pattern => self.pattern.clone(),
            AttributeName::Placeholder => self.placeholder.clone(),
            // Text is the default; it is reflected only when not implied.
            AttributeName::Type => {
                (self.input_type != InputType::Text).then(|| self.input_type.as_str().to_string())
            }
            AttributeName::Size => self.size.map(|n| n.to_string()),
            AttributeName::List => self.list.clone(),
            AttributeName::DirName => self.dir_name.clone(),
            AttributeName::Autocomplete => self.autocomplete.clone(),
            AttributeName::MaxLength => self.max_length.map(|n| n.to_string()),
            AttributeName::Name => self.name.clone(),
        }
    }

    /// All observed attributes with their reflected values.
    pub fn to_attributes(&self) -> Vec<(AttributeName, Option<String>)> {
        AttributeName::OBSERVED
            .into_iter()
            .map(|attr| (attr, self.attribute(attr)))
            .collect()
    }

    /// Only the attributes that are present, as `(name, value)` pairs.
    pub fn present_attributes(&self) -> Vec<(&'static str, String)> {
        self.to_attributes()
            .into_iter()
            .filter_map(|(attr, value)| value.map(|v| (attr.as_str(), v)))
            .collect()
    }
}

fn parse_non_negative(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_positive_u32(raw: &str) -> Option<u32> {
    parse_non_negative(raw)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
}
