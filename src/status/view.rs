//! Status View
//!
//! Decides what the status widget shows for a payload: the player counter,
//! the MOTD block and the version line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::payload::{Motd, ServerStatus};
use crate::app::MotdConfig;
use crate::render::{escape_text, format, HtmlWriter};

/// Shown in place of an unknown player maximum
pub const UNKNOWN_MAX: &str = "—";

/// Rendered status widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusView {
    /// Server answered and is online
    Online {
        players_online: u64,
        players_max: Option<u64>,
        /// `online / max` as displayed
        counter: String,
        /// MOTD markup, safe to insert as HTML
        motd_html: String,
        version: Option<String>,
    },
    /// Server answered but is offline
    Offline,
    /// No usable answer from the status API
    Unavailable,
}

impl StatusView {
    /// Build the view for a parsed payload
    pub fn from_status(status: &ServerStatus, config: &MotdConfig) -> Self {
        if !status.online {
            debug!("server reported offline");
            return StatusView::Offline;
        }

        let players = status.players.as_ref();
        let players_online = players.and_then(|p| p.online).unwrap_or(0);
        // A zero maximum is treated as unknown
        let players_max = players.and_then(|p| p.max).filter(|&max| max != 0);
        let counter = match players_max {
            Some(max) => format!("{players_online} / {max}"),
            None => format!("{players_online} / {UNKNOWN_MAX}"),
        };

        StatusView::Online {
            players_online,
            players_max,
            counter,
            motd_html: motd_html(status.motd.as_ref(), config),
            version: status.version.clone(),
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, StatusView::Online { .. })
    }
}

/// Render the MOTD block.
///
/// The first present form wins, in the order `html`, `raw`, `clean`. HTML
/// lines from the API are trusted as-is; the other forms go through the
/// formatter. Without any lines the fallback text is shown.
pub fn motd_html(motd: Option<&Motd>, config: &MotdConfig) -> String {
    let (lines, trusted) = match motd {
        Some(Motd { html: Some(lines), .. }) => (lines, true),
        Some(Motd { raw: Some(lines), .. }) => (lines, false),
        Some(Motd { clean: Some(lines), .. }) => (lines, false),
        _ => {
            debug!("no MOTD in payload, using fallback");
            return escape_text(&config.fallback);
        }
    };
    if lines.is_empty() {
        debug!("empty MOTD in payload, using fallback");
        return escape_text(&config.fallback);
    }

    let mut writer = HtmlWriter::new();
    for (i, line) in lines.iter().take(config.max_lines).enumerate() {
        if i > 0 {
            writer.push_raw(&config.line_separator);
        }
        if trusted {
            writer.push_raw(line);
        } else {
            writer.push_raw(&format(line));
        }
    }
    writer.finish()
}
