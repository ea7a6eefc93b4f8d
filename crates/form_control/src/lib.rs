//! # form_control
//!
//! The adapter layer of a rich input: a form-associated single-line text
//! control that colourizes its value with a style pattern.
//!
//! - [`RichInputConfig`]: the reflected attribute surface, synced both ways
//! - [`InputType`]: the text-like modes the control may take
//! - [`validity`]: constraint validation (required, type, pattern, maxlength)
//! - [`RichInputElement`]: the control itself, generic over the host
//!   [`InputStore`](input_core::InputStore)
//!
//! The control never edits text; value and selection belong to the host.

mod config;
mod datalist;
mod element;
mod input_type;
pub mod validity;

pub use config::{AttributeName, RichInputConfig};
pub use datalist::DatalistSource;
pub use element::{ControlError, RichInputElement};
pub use input_type::InputType;
pub use validity::{Validation, ValidityState};
