//! Constraint validation for rich inputs.
//!
//! Mirrors the validity flags a native single-line text control reports. The
//! rich input computes them from its own configuration because its value lives
//! in a host store rather than in a native control.

use crate::config::RichInputConfig;
use crate::input_type::InputType;
use input_core::utf16_len;
use regex::Regex;
use std::sync::LazyLock;

/// Message used when the control is invalid but no specific message exists.
pub const FALLBACK_MESSAGE: &str = "Error";

// https://html.spec.whatwg.org/multipage/input.html#valid-e-mail-address
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

/// Validity flags of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub custom_error: bool,
}

impl ValidityState {
    #[inline]
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.custom_error)
    }
}

/// Validity flags plus the message a host would show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub state: ValidityState,
    /// Empty when valid.
    pub message: String,
}

/// Compiled form of the `pattern` attribute.
///
/// Like the style pattern it must match the whole value. A pattern that fails
/// to compile imposes no constraint.
#[derive(Clone, Debug, Default)]
pub struct ValidationPattern {
    source: Option<String>,
    regex: Option<Regex>,
}

impl ValidationPattern {
    pub fn compile(source: Option<&str>) -> Self {
        let regex = source.and_then(|src| match Regex::new(&format!("^(?:{src})$")) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log::debug!(
                    target: "richinput.validity",
                    "ignoring validation pattern {src:?}: {err}"
                );
                None
            }
        });
        Self {
            source: source.map(str::to_string),
            regex,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// `None` when no (valid) pattern is set.
    pub fn matches(&self, value: &str) -> Option<bool> {
        self.regex.as_ref().map(|r| r.is_match(value))
    }
}

/// Inputs to a validity check beyond the configuration itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidityContext<'a> {
    /// Whether the value was last changed by the user (length limits only
    /// apply to user edits).
    pub dirty: bool,
    /// Custom validity message; empty means none.
    pub custom_message: &'a str,
}

/// Compute the validity of `value` under `config`.
pub fn validate(
    value: &str,
    config: &RichInputConfig,
    pattern: &ValidationPattern,
    ctx: ValidityContext<'_>,
) -> Validation {
    let mut state = ValidityState {
        custom_error: !ctx.custom_message.is_empty(),
        ..ValidityState::default()
    };

    state.value_missing = config.required && value.is_empty();

    if !value.is_empty() {
        state.type_mismatch = match config.input_type {
            InputType::Email => !is_valid_email(value),
            InputType::Url => !is_valid_url(value),
            InputType::Text | InputType::Tel => false,
        };
        state.pattern_mismatch = pattern.matches(value) == Some(false);
    }

    let length = utf16_len(value);
    if let Some(max) = config.max_length {
        state.too_long = ctx.dirty && length > max;
    }

    let message = if state.custom_error {
        ctx.custom_message.to_string()
    } else if state.value_missing {
        "Please fill out this field.".to_string()
    } else if state.type_mismatch {
        match config.input_type {
            InputType::Email => format!(
                "Please enter an email address. '{value}' is missing an '@' or a domain."
            ),
            _ => "Please enter a URL.".to_string(),
        }
    } else if state.pattern_mismatch {
        "Please match the requested format.".to_string()
    } else if state.too_long {
        format!(
            "Please shorten this text to {} characters or less (you are currently using {length} characters).",
            config.max_length.unwrap_or_default()
        )
    } else {
        String::new()
    };

    let message = if !state.valid() && message.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    };

    Validation { state, message }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
