//! Controlled input primitives.
//!
//! None of these hold state. Each is built from the current value on every
//! frame and key press, renders it, and turns key presses into a typed change
//! message for the caller to fold into the wizard.

pub mod radio_group;
pub mod slider;
pub mod text_input;

pub use radio_group::{RadioCursor, RadioGroup, RadioMsg, RadioRow, RadioSize, RadioVariant};
pub use slider::Slider;
pub use text_input::TextInput;
