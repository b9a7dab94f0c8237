//! Text Formatting Domain
//!
//! Independent leaf helpers, no shared state.
//!
//! ```text
//! domain/
//! ├── join.rs            # "a, b and c"
//! ├── case_format.rs     # "Hello World"
//! ├── censor.rs          # sequential substring masking
//! └── duration_text.rs   # "1 minute, 30 secondes"
//! ```

pub mod case_format;
pub mod censor;
pub mod duration_text;
pub mod join;

pub use case_format::format_words;
pub use censor::{censor, censor_all, DEFAULT_REPLACEMENT};
pub use duration_text::{duration_text, duration_text_with, DurationParts, Locale, UnitLabels};
pub use join::join;
