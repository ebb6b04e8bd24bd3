use serde::{Deserialize, Serialize};

/// Kind of maintenance service requested by a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Hidraulica,
    Eletrica,
    Pintura,
    Telhado,
    Carpintaria,
    Outros,
}

impl ServiceType {
    /// Form value of the service type (`<option value=…>`)
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::Hidraulica => "hidraulica",
            ServiceType::Eletrica => "eletrica",
            ServiceType::Pintura => "pintura",
            ServiceType::Telhado => "telhado",
            ServiceType::Carpintaria => "carpintaria",
            ServiceType::Outros => "outros",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::Hidraulica => "Hidráulica",
            ServiceType::Eletrica => "Elétrica",
            ServiceType::Pintura => "Pintura",
            ServiceType::Telhado => "Telhado",
            ServiceType::Carpintaria => "Carpintaria",
            ServiceType::Outros => "Outros",
        }
    }

    pub fn all() -> Vec<ServiceType> {
        vec![
            ServiceType::Hidraulica,
            ServiceType::Eletrica,
            ServiceType::Pintura,
            ServiceType::Telhado,
            ServiceType::Carpintaria,
            ServiceType::Outros,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
