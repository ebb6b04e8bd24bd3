use serde::{Deserialize, Serialize};

/// Urgency of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Baixa,
    Media,
    Alta,
    Critica,
}

impl Urgency {
    pub fn code(&self) -> &'static str {
        match self {
            Urgency::Baixa => "baixa",
            Urgency::Media => "media",
            Urgency::Alta => "alta",
            Urgency::Critica => "critica",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Urgency::Baixa => "Baixa",
            Urgency::Media => "Média",
            Urgency::Alta => "Alta",
            Urgency::Critica => "Crítica",
        }
    }

    /// CSS modifier for the urgency badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Urgency::Baixa => "badge badge--low",
            Urgency::Media => "badge badge--medium",
            Urgency::Alta => "badge badge--high",
            Urgency::Critica => "badge badge--critical",
        }
    }

    pub fn all() -> Vec<Urgency> {
        vec![Urgency::Baixa, Urgency::Media, Urgency::Alta, Urgency::Critica]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|u| u.code() == code)
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
