/// The text-like input modes a rich input may take.
///
/// Only modes whose native control is a single line of free text are allowed;
/// everything else (checkbox, number, date, ...) falls back to [`InputType::Text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Tel,
    Email,
    Url,
}

impl InputType {
    /// Map a `type` attribute value onto an allowed mode.
    pub fn parse(raw: Option<&str>) -> Self {
        let ty = raw.map(str::trim).filter(|s| !s.is_empty());
        match ty {
            None => InputType::Text, // missing type defaults to text
            Some(t) if t.eq_ignore_ascii_case("text") => InputType::Text,
            Some(t) if t.eq_ignore_ascii_case("tel") => InputType::Tel,
            Some(t) if t.eq_ignore_ascii_case("email") => InputType::Email,
            Some(t) if t.eq_ignore_ascii_case("url") => InputType::Url,
            Some(t) => {
                log::debug!(
                    target: "richinput.element",
                    "unsupported input type {t:?}, using text"
                );
                InputType::Text
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Tel => "tel",
            InputType::Email => "email",
            InputType::Url => "url",
        }
    }

    /// Whether the selection APIs apply to this mode.
    ///
    /// Email inputs are excluded: their selection getters report nothing and
    /// their setters fail with an invalid-state error.
    pub fn supports_selection(self) -> bool {
        !matches!(self, InputType::Email)
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
