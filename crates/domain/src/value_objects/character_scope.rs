//! Character scoping for storage keys.

/// Where a settings key applies.
///
/// Only the equipment table keeps per-character settings; every other surface
/// shares one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopeMode {
    /// Single shared key, no character disambiguation.
    #[default]
    Shared,
    /// Per-character keys for the equipment table.
    EquipmentTable,
}

/// Optional character identity attached to a settings key.
///
/// A character fetched from the game API has a stable id; a manually entered
/// one may only have a name. Either (or neither) may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsScope {
    pub character_id: Option<String>,
    pub character_name: Option<String>,
    pub mode: ScopeMode,
}

impl SettingsScope {
    /// The shared, non-character scope.
    pub fn shared() -> Self {
        Self::default()
    }

    /// Equipment-table scope for the given character identity.
    pub fn equipment_table(
        character_id: Option<String>,
        character_name: Option<String>,
    ) -> Self {
        Self {
            character_id,
            character_name,
            mode: ScopeMode::EquipmentTable,
        }
    }

    /// Compute the storage key for a logical setting name under this scope.
    ///
    /// Two different characters in equipment-table mode never collide: the id
    /// wins when present, otherwise a sanitized form of the name is used.
    /// Without any character identity (or outside equipment-table mode) the
    /// logical name itself is the key.
    pub fn storage_key(&self, logical_name: &str) -> String {
        if self.mode != ScopeMode::EquipmentTable {
            return logical_name.to_string();
        }
        if let Some(id) = non_empty(self.character_id.as_deref()) {
            return format!("{logical_name}-{id}");
        }
        if let Some(name) = non_empty(self.character_name.as_deref()) {
            return format!("{logical_name}-{}", sanitize(name));
        }
        logical_name.to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Replace every non-alphanumeric character with `_` to keep keys
/// storage-safe. Non-ASCII letters and digits are preserved so distinct
/// character names stay distinct.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
