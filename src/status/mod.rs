//! Server status
//!
//! Interpretation of status API payloads: the status widget and the player
//! roster. Fetching the payload is left to the caller.

mod payload;
mod roster;
mod view;

pub use payload::{Motd, Players, ServerStatus};
pub use roster::{encode_uri_component, player_name, roster, slug, PlayerEntry};
pub use view::{motd_html, StatusView, UNKNOWN_MAX};
