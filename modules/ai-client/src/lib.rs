//! Provider-agnostic text generation client.
//!
//! Callers depend on [`TextModel`]; [`Gemini`] is the concrete backend.

pub mod gemini;
pub mod traits;
pub mod util;

pub use gemini::Gemini;
pub use traits::TextModel;
pub use util::{extract_json_array, extract_json_object};
