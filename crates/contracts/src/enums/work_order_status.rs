use serde::{Deserialize, Serialize};

/// Kanban column of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Aberta,
    EmAndamento,
    AguardandoMaterial,
    Concluida,
}

impl WorkOrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WorkOrderStatus::Aberta => "aberta",
            WorkOrderStatus::EmAndamento => "em_andamento",
            WorkOrderStatus::AguardandoMaterial => "aguardando_material",
            WorkOrderStatus::Concluida => "concluida",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkOrderStatus::Aberta => "Abertas",
            WorkOrderStatus::EmAndamento => "Em Andamento",
            WorkOrderStatus::AguardandoMaterial => "Aguardando Material",
            WorkOrderStatus::Concluida => "Concluídas",
        }
    }

    /// Column order on the board
    pub fn all() -> Vec<WorkOrderStatus> {
        vec![
            WorkOrderStatus::Aberta,
            WorkOrderStatus::EmAndamento,
            WorkOrderStatus::AguardandoMaterial,
            WorkOrderStatus::Concluida,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Next column, used by the "advance" button of a kanban card
    pub fn next(&self) -> Option<WorkOrderStatus> {
        match self {
            WorkOrderStatus::Aberta => Some(WorkOrderStatus::EmAndamento),
            WorkOrderStatus::EmAndamento => Some(WorkOrderStatus::AguardandoMaterial),
            WorkOrderStatus::AguardandoMaterial => Some(WorkOrderStatus::Concluida),
            WorkOrderStatus::Concluida => None,
        }
    }
}

impl Default for WorkOrderStatus {
    fn default() -> Self {
        WorkOrderStatus::Aberta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_columns_in_board_order() {
        let mut walked = vec![WorkOrderStatus::Aberta];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(walked, WorkOrderStatus::all());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            WorkOrderStatus::from_code("em_andamento"),
            Some(WorkOrderStatus::EmAndamento)
        );
        assert_eq!(WorkOrderStatus::from_code("arquivada"), None);
    }
}
