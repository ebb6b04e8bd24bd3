use std::collections::HashMap;

/// Logical icon ids used in the markup and the id the icon library knows
/// them by. Ids missing from the map pass through unchanged.
const FEATHER_NAMES: &[(&str, &str)] = &[
    ("map-pin", "map-pin"),
    ("user", "user"),
    ("calendar", "calendar"),
    ("tool", "tool"),
    ("alert-triangle", "alert-triangle"),
    ("lightbulb", "zap"),
    ("cpu", "cpu"),
    ("package", "package"),
    ("building", "home"),
    ("eye", "eye"),
    ("external-link", "external-link"),
    ("help-circle", "help-circle"),
    ("image", "image"),
    ("check", "check"),
    ("x", "x"),
];

/// Read-only alias table consulted by every normalization pass
#[derive(Debug, Clone)]
pub struct IconNameMap {
    names: HashMap<&'static str, &'static str>,
}

impl IconNameMap {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            names: entries.iter().copied().collect(),
        }
    }

    /// Aliases for the Feather icon set
    pub fn feather() -> Self {
        Self::new(FEATHER_NAMES)
    }

    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        self.names.get(name).copied().unwrap_or(name)
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.names.get(name).is_some_and(|target| *target != name)
    }
}

impl Default for IconNameMap {
    fn default() -> Self {
        Self::feather()
    }
}
