use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

static MAP_NAMES: OnceLock<HashMap<String, (String, String)>> = OnceLock::new();

/// Display name and emoji for a PUBG map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInfo {
    pub name: String,
    pub emoji: String,
}

impl fmt::Display for MapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.emoji, self.name)
        }
    }
}

fn load_map_names() -> &'static HashMap<String, (String, String)> {
    MAP_NAMES.get_or_init(|| {
        let mut map = HashMap::new();
        let data = include_str!("../../../assets/pubg/maps.txt");
        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let mut parts = line.split_whitespace();
            let raw = parts.next().unwrap_or("");
            let emoji = parts.next().unwrap_or("");
            let name = parts.collect::<Vec<_>>().join(" ");
            if !raw.is_empty() && !name.is_empty() {
                map.insert(raw.to_string(), (name, emoji.to_string()));
            }
        }
        map
    })
}

/// Looks up a raw map id exactly as the API reports it. Unknown ids come back
/// unchanged with no emoji.
pub fn lookup_map(raw: &str) -> MapInfo {
    match load_map_names().get(raw) {
        Some((name, emoji)) => MapInfo { name: name.clone(), emoji: emoji.clone() },
        None => MapInfo { name: raw.to_string(), emoji: String::new() },
    }
}
