use std::collections::{BTreeMap, HashMap};

use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings a component currently reacts to, with the text shown for
/// them in the help bar.
#[derive(Clone, Default)]
pub struct KeyMaps(HashMap<KeyId, KeyDesc>);

#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct KeyId {
    pub key_code: KeyCode,
    pub key_modifiers: KeyModifiers,
}

/// Help bar entries are ordered by `prio` first, so lower values come first.
#[derive(Eq, Hash, PartialEq, Clone, PartialOrd, Ord, Debug)]
pub struct KeyDesc {
    pub prio: i64,
    pub desc: String,
}

/// All keys sharing one description.
pub struct KeyMap {
    pub key_ids: Vec<KeyId>,
    pub description: KeyDesc,
}

impl KeyMaps {
    pub fn insert(&mut self, key_id: KeyId, description: KeyDesc) {
        self.0.insert(key_id, description);
    }

    pub fn get(&self, key_id: &KeyId) -> Option<&KeyDesc> {
        self.0.get(key_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union of both maps. A key bound in `higher_prio` keeps that binding.
    pub fn merge_mappings(higher_prio: &Self, lower_prio: &Self) -> Self {
        let mut merged = lower_prio.clone();
        merged.0.extend(
            higher_prio
                .0
                .iter()
                .map(|(key_id, desc)| (key_id.clone(), desc.clone())),
        );
        merged
    }

    /// Keys grouped by description, in help bar order.
    pub fn grouped(&self) -> Vec<KeyMap> {
        let mut groups: BTreeMap<&KeyDesc, Vec<KeyId>> = BTreeMap::new();
        for (key_id, desc) in &self.0 {
            groups.entry(desc).or_default().push(key_id.clone());
        }
        groups
            .into_iter()
            .map(|(desc, mut key_ids)| {
                key_ids.sort_by_key(KeyId::to_string);
                KeyMap {
                    key_ids,
                    description: desc.clone(),
                }
            })
            .collect()
    }
}

impl<const N: usize> From<[(KeyId, KeyDesc); N]> for KeyMaps {
    fn from(value: [(KeyId, KeyDesc); N]) -> Self {
        KeyMaps(HashMap::from(value))
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let modifiers: Vec<&str> = self
            .key_modifiers
            .iter()
            .filter_map(modifier_label)
            .collect();
        if modifiers.is_empty() {
            write!(f, "{}", key_label(self.key_code))
        } else {
            write!(f, "{}-{}", modifiers.join("+"), key_label(self.key_code))
        }
    }
}

fn key_label(key_code: KeyCode) -> String {
    match key_code {
        KeyCode::Char(' ') => "<space>".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::BackTab => "Shift-Tab".to_string(),
        code => code.to_string(),
    }
}

fn modifier_label(modifier: KeyModifiers) -> Option<&'static str> {
    match modifier {
        KeyModifiers::CONTROL => Some("Ctrl"),
        KeyModifiers::ALT => Some("Alt"),
        KeyModifiers::SHIFT => Some("Shift"),
        _ => None,
    }
}

impl From<char> for KeyId {
    fn from(ch: char) -> Self {
        KeyId::from(KeyCode::Char(ch))
    }
}

impl From<KeyCode> for KeyId {
    fn from(key_code: KeyCode) -> Self {
        KeyId::from((key_code, KeyModifiers::NONE))
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyId {
    fn from((key_code, key_modifiers): (KeyCode, KeyModifiers)) -> Self {
        KeyId {
            key_code,
            key_modifiers,
        }
    }
}

impl KeyDesc {
    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn prio(self, prio: i64) -> Self {
        KeyDesc { prio, ..self }
    }
}

impl From<&str> for KeyDesc {
    fn from(desc: &str) -> Self {
        KeyDesc {
            prio: 0,
            desc: desc.to_string(),
        }
    }
}

impl KeyMap {
    pub fn key_ids_to_string(&self) -> String {
        self.key_ids
            .iter()
            .map(KeyId::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    }
}
