//! The rich input control.
//!
//! [`RichInputElement`] owns no text editing of its own. The value and the
//! selection live in the host primitive behind [`InputStore`]; the element
//! keeps the reflected configuration, the compiled patterns, the validity of
//! the current value and the colourized output derived from it.

mod error;

pub use error::ControlError;

use crate::config::{AttributeName, RichInputConfig};
use crate::datalist::DatalistSource;
use crate::input_type::InputType;
use crate::validity::{Validation, ValidationPattern, ValidityContext, ValidityState, validate};
use input_core::{InputId, InputStore, InputValueStore, SelectMode, SelectionDirection};
use segment::{Segment, SegmentSpan, StylePattern, render_markup, split};

const SELECTION_UNSUPPORTED: &str = "selection is not supported for this input type";

/// A form-associated, single-line input whose value is split by a style
/// pattern into plain and group segments for display.
///
/// # Example
///
/// ```
/// use form_control::RichInputElement;
/// use input_core::{InputId, InputValueStore};
///
/// let mut input = RichInputElement::new(InputId::from_raw(1), InputValueStore::new());
/// input.connected([("stylepattern", Some(r"(\d+)-(\d+)"))]);
/// input.set_value("12-34");
/// assert_eq!(
///     input.markup(),
///     r#"<b part="group-1">12</b>-<b part="group-2">34</b>"#
/// );
/// ```
#[derive(Debug)]
pub struct RichInputElement<S: InputStore = InputValueStore> {
    id: InputId,
    store: S,
    config: RichInputConfig,

    /// Source the current `style` was compiled from, kept even when
    /// compilation failed so an identical re-set does not retry.
    style_source: Option<String>,
    style: Option<StylePattern>,
    validation_pattern: ValidationPattern,

    spans: Vec<SegmentSpan>,
    markup: String,
    no_selection: bool,

    /// The value no longer follows the `value` attribute.
    value_dirty: bool,
    /// The value was last changed by the user.
    user_edited: bool,
    form_value: String,
    form_owner: Option<String>,

    custom_validity: String,
    validation: Validation,
    reported_message: Option<String>,

    focused: bool,
    datalist: Option<Vec<String>>,
}

impl RichInputElement<InputValueStore> {
    /// A connected element over a fresh store, configured from `attributes`.
    pub fn with_attributes<I, K, V>(id: InputId, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut element = Self::new(id, InputValueStore::new());
        element.connected(attributes);
        element
    }
}

impl<S: InputStore> RichInputElement<S> {
    pub fn new(id: InputId, store: S) -> Self {
        Self {
            id,
            store,
            config: RichInputConfig::default(),
            style_source: None,
            style: None,
            validation_pattern: ValidationPattern::default(),
            spans: Vec::new(),
            markup: String::new(),
            no_selection: true,
            value_dirty: false,
            user_edited: false,
            form_value: String::new(),
            form_owner: None,
            custom_validity: String::new(),
            validation: Validation::default(),
            reported_message: None,
            focused: false,
            datalist: None,
        }
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct access to the host primitive. Call [`Self::on_input`] or
    /// [`Self::update`] after changing the value through it.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn config(&self) -> &RichInputConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Initial synchronization when the element enters a document. A `None`
    /// value is an absent attribute, as in [`attribute_changed`](Self::attribute_changed).
    pub fn connected<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.config = RichInputConfig::from_attributes(attributes);
        self.recompile_style();
        self.validation_pattern = ValidationPattern::compile(self.config.pattern.as_deref());
        self.store
            .ensure_initial(self.id, self.config.value.clone().unwrap_or_default());
        log::debug!(
            target: "richinput.element",
            "connected {:?} as {} (style pattern {:?})",
            self.id,
            self.config.input_type,
            self.config.style_pattern
        );
        self.update();
    }

    /// An attribute was set (`Some`) or removed (`None`). Returns the observed
    /// attribute that changed, or `None` if the control ignores `name`.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Option<AttributeName> {
        let attr = AttributeName::parse(name)?;
        self.set_attribute(attr, value);
        Some(attr)
    }

    /// Set one observed attribute and bring the element up to date.
    pub fn set_attribute(&mut self, attr: AttributeName, value: Option<&str>) {
        self.config.set(attr, value);
        match attr {
            AttributeName::StylePattern => self.recompile_style(),
            AttributeName::Pattern => {
                self.validation_pattern =
                    ValidationPattern::compile(self.config.pattern.as_deref());
            }
            AttributeName::Value if !self.value_dirty => {
                self.store
                    .set(self.id, self.config.value.clone().unwrap_or_default());
            }
            _ => {}
        }
        self.update();
    }

    /// All present reflected attributes, for writing back to the host element.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        self.config.present_attributes()
    }

    fn recompile_style(&mut self) {
        if self.style_source == self.config.style_pattern {
            log::trace!(target: "richinput.element", "style pattern unchanged");
            return;
        }
        self.style = self
            .config
            .style_pattern
            .as_deref()
            .and_then(StylePattern::try_compile);
        self.style_source = self.config.style_pattern.clone();
    }

    /// Recompute the form value, the validity and the colourized output from
    /// the current value.
    pub fn update(&mut self) {
        let value = self.store.get(self.id).unwrap_or_default();

        self.form_value.clear();
        self.form_value.push_str(value);

        self.validation = validate(
            value,
            &self.config,
            &self.validation_pattern,
            ValidityContext {
                dirty: self.user_edited,
                custom_message: &self.custom_validity,
            },
        );

        let segments = split(value, self.style.as_ref());
        self.markup = render_markup(&segments);
        self.spans = segments.iter().map(Segment::span).collect();

        log::trace!(
            target: "richinput.element",
            "update {:?}: {} segment(s), valid={}",
            self.id,
            self.spans.len(),
            self.validation.state.valid()
        );
        self.on_selection_change();
    }

    // =========================================================================
    // Value
    // =========================================================================

    pub fn value(&self) -> &str {
        self.store.get(self.id).unwrap_or_default()
    }

    /// Script-side value assignment. The value stops following the `value`
    /// attribute and no longer counts as a user edit.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.store.set(self.id, value.into());
        self.value_dirty = true;
        self.user_edited = false;
        self.update();
    }

    /// The host changed the value in response to user input.
    pub fn on_input(&mut self) {
        self.value_dirty = true;
        self.user_edited = true;
        self.update();
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Segments of the current value under the current style pattern.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let value = self.value();
        self.spans
            .iter()
            .filter_map(|span| span.attach(value))
            .collect()
    }

    /// HTML for the output region.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// `true` when nothing is selected, meaning the input layer sits above the
    /// output so the caret shows.
    pub fn no_selection(&self) -> bool {
        self.no_selection
    }

    pub fn style_pattern_compiled(&self) -> Option<&StylePattern> {
        self.style.as_ref()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    fn selection_supported(&self) -> bool {
        self.config.input_type.supports_selection()
    }

    fn ensure_selection(&self) -> Result<(), ControlError> {
        if self.selection_supported() {
            Ok(())
        } else {
            Err(ControlError::InvalidState(SELECTION_UNSUPPORTED))
        }
    }

    pub fn selection_start(&self) -> Option<usize> {
        self.selection_supported()
            .then(|| self.store.selection(self.id))
            .flatten()
            .map(|(range, _)| range.start)
    }

    pub fn selection_end(&self) -> Option<usize> {
        self.selection_supported()
            .then(|| self.store.selection(self.id))
            .flatten()
            .map(|(range, _)| range.end)
    }

    pub fn selection_direction(&self) -> Option<SelectionDirection> {
        self.selection_supported()
            .then(|| self.store.selection(self.id))
            .flatten()
            .map(|(_, direction)| direction)
    }

    /// Currently selected text; `None` when nothing is selected.
    pub fn selected_text(&self) -> Option<&str> {
        let (range, _) = self.store.selection(self.id)?;
        if !self.selection_supported() || range.is_empty() {
            return None;
        }
        range.slice(self.value())
    }

    pub fn set_selection_range(
        &mut self,
        start: usize,
        end: usize,
        direction: Option<SelectionDirection>,
    ) -> Result<(), ControlError> {
        self.ensure_selection()?;
        self.store
            .set_selection_range(self.id, start, end, direction.unwrap_or_default());
        self.on_selection_change();
        Ok(())
    }

    /// Moves the start; the end follows if it would fall before it.
    pub fn set_selection_start(&mut self, start: usize) -> Result<(), ControlError> {
        self.ensure_selection()?;
        let (range, direction) = self.store.selection(self.id).unwrap_or_default();
        self.set_selection_range(start, range.end.max(start), Some(direction))
    }

    pub fn set_selection_end(&mut self, end: usize) -> Result<(), ControlError> {
        self.ensure_selection()?;
        let (range, direction) = self.store.selection(self.id).unwrap_or_default();
        self.set_selection_range(range.start, end, Some(direction))
    }

    pub fn set_selection_direction(
        &mut self,
        direction: SelectionDirection,
    ) -> Result<(), ControlError> {
        self.ensure_selection()?;
        let (range, _) = self.store.selection(self.id).unwrap_or_default();
        self.set_selection_range(range.start, range.end, Some(direction))
    }

    /// Replace `range` (or the selection) with `replacement`.
    pub fn set_range_text(
        &mut self,
        replacement: &str,
        range: Option<(usize, usize)>,
        mode: SelectMode,
    ) -> Result<(), ControlError> {
        self.ensure_selection()?;
        self.store
            .set_range_text(self.id, replacement, range, mode)?;
        self.value_dirty = true;
        self.update();
        Ok(())
    }

    /// Select the whole value. Allowed for every input type.
    pub fn select(&mut self) {
        self.store.select_all(self.id);
        self.on_selection_change();
    }

    /// The host moved the caret or changed the selection.
    pub fn on_selection_change(&mut self) {
        self.no_selection = self.selection_supported()
            && self
                .store
                .selection(self.id)
                .is_none_or(|(range, _)| range.is_empty());
    }

    // =========================================================================
    // Focus and datalist
    // =========================================================================

    /// Focus the control and copy the options of its datalist, if any.
    pub fn focus(&mut self, lists: &impl DatalistSource) {
        self.focused = true;
        self.datalist = self.config.list.as_deref().and_then(|id| {
            let options = lists.datalist(id);
            if options.is_none() {
                log::debug!(target: "richinput.element", "datalist {id:?} not found");
            }
            options
        });
    }

    /// Blur the control and drop the datalist copy.
    pub fn blur(&mut self) {
        self.focused = false;
        self.datalist = None;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Id of the datalist offering suggestions.
    pub fn list(&self) -> Option<&str> {
        self.config.list.as_deref()
    }

    /// Options copied on focus; `None` while blurred.
    pub fn datalist_options(&self) -> Option<&[String]> {
        self.datalist.as_deref()
    }

    // =========================================================================
    // Form association
    // =========================================================================

    pub fn form_value(&self) -> &str {
        &self.form_value
    }

    /// Name/value pair contributed on submission.
    pub fn form_entry(&self) -> Option<(&str, &str)> {
        if self.config.disabled {
            return None;
        }
        let name = self.config.name.as_deref().filter(|n| !n.is_empty())?;
        Some((name, &self.form_value))
    }

    pub fn form(&self) -> Option<&str> {
        self.form_owner.as_deref()
    }

    pub fn set_form_owner(&mut self, form: Option<String>) {
        self.form_owner = form;
    }

    // =========================================================================
    // Constraint validation
    // =========================================================================

    pub fn validity(&self) -> ValidityState {
        self.validation.state
    }

    pub fn validation_message(&self) -> &str {
        if self.will_validate() {
            &self.validation.message
        } else {
            ""
        }
    }

    /// Disabled and read-only controls are barred from validation.
    pub fn will_validate(&self) -> bool {
        !(self.config.disabled || self.config.read_only)
    }

    pub fn check_validity(&self) -> bool {
        !self.will_validate() || self.validation.state.valid()
    }

    /// Like [`Self::check_validity`], but an invalid control also reports its
    /// message to the user.
    pub fn report_validity(&mut self) -> bool {
        let valid = self.check_validity();
        if valid {
            self.reported_message = None;
        } else {
            log::info!(
                target: "richinput.validity",
                "{:?} is invalid: {}",
                self.id,
                self.validation.message
            );
            self.reported_message = Some(self.validation.message.clone());
        }
        valid
    }

    /// Message shown by the last failing [`Self::report_validity`].
    pub fn reported_message(&self) -> Option<&str> {
        self.reported_message.as_deref()
    }

    /// A non-empty message makes the control invalid until cleared.
    ///
    /// The message is kept across value changes, like `setCustomValidity` on a
    /// native input; user input does not reset it. Only another call with `""`
    /// clears the custom error.
    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.custom_validity = message.into();
        self.update();
    }

    // =========================================================================
    // Reflected attributes
    // =========================================================================

    pub fn input_type(&self) -> InputType {
        self.config.input_type
    }

    pub fn set_input_type(&mut self, ty: InputType) {
        self.set_attribute(AttributeName::Type, Some(ty.as_str()));
    }

    pub fn style_pattern(&self) -> Option<&str> {
        self.config.style_pattern.as_deref()
    }

    pub fn set_style_pattern(&mut self, source: Option<&str>) {
        self.set_attribute(AttributeName::StylePattern, source);
    }

    pub fn pattern(&self) -> Option<&str> {
        self.config.pattern.as_deref()
    }

    pub fn set_pattern(&mut self, source: Option<&str>) {
        self.set_attribute(AttributeName::Pattern, source);
    }

    /// The `value` attribute.
    pub fn default_value(&self) -> Option<&str> {
        self.config.value.as_deref()
    }

    pub fn set_default_value(&mut self, value: Option<&str>) {
        self.set_attribute(AttributeName::Value, value);
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.config.placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, value: Option<&str>) {
        self.set_attribute(AttributeName::Placeholder, value);
    }

    pub fn autocomplete(&self) -> Option<&str> {
        self.config.autocomplete.as_deref()
    }

    pub fn set_autocomplete(&mut self, value: Option<&str>) {
        self.set_attribute(AttributeName::Autocomplete, value);
    }

    pub fn required(&self) -> bool {
        self.config.required
    }

    pub fn set_required(&mut self, on: bool) {
        self.set_attribute(AttributeName::Required, on.then_some(""));
    }

    pub fn disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn set_disabled(&mut self, on: bool) {
        self.set_attribute(AttributeName::Disabled, on.then_some(""));
    }

    pub fn read_only(&self) -> bool {
        self.config.read_only
    }

    pub fn set_read_only(&mut self, on: bool) {
        self.set_attribute(AttributeName::ReadOnly, on.then_some(""));
    }

    pub fn max_length(&self) -> Option<usize> {
        self.config.max_length
    }

    pub fn set_max_length(&mut self, max: Option<usize>) {
        let raw = max.map(|n| n.to_string());
        self.set_attribute(AttributeName::MaxLength, raw.as_deref());
    }

    pub fn size(&self) -> Option<u32> {
        self.config.size
    }

    pub fn set_size(&mut self, size: Option<u32>) {
        let raw = size.map(|n| n.to_string());
        self.set_attribute(AttributeName::Size, raw.as_deref());
    }

    pub fn set_list(&mut self, id: Option<&str>) {
        self.set_attribute(AttributeName::List, id);
    }

    pub fn dir_name(&self) -> Option<&str> {
        self.config.dir_name.as_deref()
    }

    pub fn set_dir_name(&mut self, value: Option<&str>) {
        self.set_attribute(AttributeName::DirName, value);
    }

    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<&str>) {
        self.set_attribute(AttributeName::Name, value);
    }
}

#[cfg(test)]
mod tests;
