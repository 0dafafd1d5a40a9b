//! Formatting code parser
//!
//! Decodes entities, then scans text for two-character control sequences
//! (`§` or `&` followed by a code) and turns the rest into fragments.

mod actions;
mod entities;
mod state;

pub use actions::Action;
pub use entities::{decode_entities, lookup_entity};
pub use state::{Formatter, Scanner};
