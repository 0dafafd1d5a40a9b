//! Player Roster
//!
//! Turns the player list of a status payload into entries with profile and
//! avatar links.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::payload::ServerStatus;
use crate::app::RosterConfig;

/// One online player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Display name, unescaped
    pub name: String,
    /// URL-safe form of the name
    pub slug: String,
    /// Link to the player's profile page
    pub profile_url: String,
    /// Link to the player's head avatar
    pub avatar_url: String,
}

impl PlayerEntry {
    pub fn new(name: String, config: &RosterConfig) -> Self {
        let slug = slug(&name);
        let profile_url = format!("{}{}/", config.profile_base, slug);
        let avatar_url = format!(
            "{}{}/{}",
            config.avatar_base,
            encode_uri_component(&name),
            config.avatar_size
        );
        Self {
            name,
            slug,
            profile_url,
            avatar_url,
        }
    }
}

/// Build the roster from `players.list`, falling back to `players.sample`.
///
/// A present but empty `list` does not fall back. Anything that is not an
/// array yields no entries, and `null` entries are skipped.
pub fn roster(status: &ServerStatus, config: &RosterConfig) -> Vec<PlayerEntry> {
    let Some(players) = &status.players else {
        return Vec::new();
    };
    let source = match (&players.list, &players.sample) {
        (Some(list), _) if !list.is_null() => list,
        (_, Some(sample)) => sample,
        _ => return Vec::new(),
    };
    let Value::Array(entries) = source else {
        debug!("player list is not an array");
        return Vec::new();
    };
    entries
        .iter()
        .filter(|entry| {
            if entry.is_null() {
                debug!("skipping null roster entry");
            }
            !entry.is_null()
        })
        .map(|entry| PlayerEntry::new(player_name(entry), config))
        .collect()
}

/// Name of a roster entry: the string itself, else `name`, else `id`, else
/// the entry's compact JSON.
pub fn player_name(entry: &Value) -> String {
    if let Value::String(name) = entry {
        return name.clone();
    }
    ["name", "id"]
        .iter()
        .filter_map(|&key| entry.get(key))
        .find_map(truthy_text)
        .unwrap_or_else(|| entry.to_string())
}

/// Text of a field that counts as set: non-empty strings and non-zero numbers
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => None,
    }
}

/// Lowercase and keep only `[a-z0-9_-]`
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect()
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(hex_digit(byte >> 4));
            out.push(hex_digit(byte & 0x0F));
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::payload::Players;
    use serde_json::json;

    fn status_with(players: Players) -> ServerStatus {
        ServerStatus {
            online: true,
            players: Some(players),
            ..Default::default()
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Steve_01"), "steve_01");
        assert_eq!(slug("Dr. Who-Me"), "drwho-me");
        assert_eq!(slug("Олег"), "");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Steve"), "Steve");
        assert_eq!(encode_uri_component("a b/c?"), "a%20b%2Fc%3F");
        assert_eq!(encode_uri_component("it's(ok)!~*"), "it's(ok)!~*");
        assert_eq!(encode_uri_component("Ж"), "%D0%96");
    }

    #[test]
    fn test_player_name_variants() {
        assert_eq!(player_name(&json!("Alex")), "Alex");
        assert_eq!(player_name(&json!({"name": "Alex", "id": "x"})), "Alex");
        assert_eq!(player_name(&json!({"name": "", "id": "1234-ab"})), "1234-ab");
        assert_eq!(player_name(&json!({"uuid": "u"})), r#"{"uuid":"u"}"#);
        assert_eq!(player_name(&json!(42)), "42");
    }

    #[test]
    fn test_roster_from_list() {
        let status = status_with(Players {
            list: Some(json!(["Steve", {"name": "Alex Two"}])),
            ..Default::default()
        });
        let entries = roster(&status, &RosterConfig::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].profile_url, "/players/profile/steve/");
        assert_eq!(entries[0].avatar_url, "https://crafthead.net/helm/Steve/128");
        assert_eq!(entries[1].slug, "alextwo");
        assert_eq!(entries[1].avatar_url, "https://crafthead.net/helm/Alex%20Two/128");
    }

    #[test]
    fn test_roster_falls_back_to_sample() {
        let status = status_with(Players {
            sample: Some(json!([{"name": "Notch", "id": "069a"}])),
            ..Default::default()
        });
        let entries = roster(&status, &RosterConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Notch");
    }

    #[test]
    fn test_roster_empty_list_does_not_fall_back() {
        let status = status_with(Players {
            list: Some(json!([])),
            sample: Some(json!(["Hidden"])),
            ..Default::default()
        });
        assert!(roster(&status, &RosterConfig::default()).is_empty());
    }

    #[test]
    fn test_roster_non_array_and_missing() {
        let status = status_with(Players {
            list: Some(json!({"Steve": true})),
            ..Default::default()
        });
        assert!(roster(&status, &RosterConfig::default()).is_empty());
        assert!(roster(&ServerStatus::default(), &RosterConfig::default()).is_empty());
    }

    #[test]
    fn test_roster_skips_null_entries() {
        let status = status_with(Players {
            list: Some(json!([null, "Steve", null])),
            ..Default::default()
        });
        let entries = roster(&status, &RosterConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Steve");
        assert!(entries.iter().all(|entry| entry.name != "null"));
    }

    #[test]
    fn test_roster_custom_config() {
        let config = RosterConfig {
            profile_base: "https://example.org/u/".to_string(),
            avatar_base: "https://img.example.org/".to_string(),
            avatar_size: 64,
        };
        let entry = PlayerEntry::new("Bob".to_string(), &config);
        assert_eq!(entry.profile_url, "https://example.org/u/bob/");
        assert_eq!(entry.avatar_url, "https://img.example.org/Bob/64");
    }
}
