use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{ServiceType, Urgency, WorkOrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique id of a work order (OS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkOrderId(pub Uuid);

impl WorkOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for WorkOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WorkOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Message shown when a starred field of the OS form is empty
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Por favor, preencha todos os campos obrigatórios marcados com *";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Maintenance work order ("Ordem de Serviço")
///
/// `base.code` holds the OS number (`YYYY-NNNN`), `base.description` the
/// free-text description of the problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<WorkOrderId>,

    /// SEI process number, optional
    #[serde(rename = "seiNumber")]
    pub sei_number: Option<String>,
    /// Person who requested the service
    pub requester: String,
    /// Requesting agency ("órgão")
    pub agency: String,
    /// Building / address where the service happens
    pub location: String,
    #[serde(rename = "serviceType")]
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub status: WorkOrderStatus,
}

impl WorkOrder {
    /// Format an OS number: `2025-0912`
    pub fn format_number(year: i32, sequence: u32) -> String {
        format!("{}-{:04}", year, sequence)
    }

    /// Build a new work order from the create form
    pub fn new_for_insert(number: String, dto: &WorkOrderDto) -> Result<Self, String> {
        dto.validate()?;
        let service_type = ServiceType::from_code(dto.service_type.trim())
            .ok_or_else(|| format!("Tipo de serviço desconhecido: {}", dto.service_type))?;
        let urgency = Urgency::from_code(dto.urgency.trim())
            .ok_or_else(|| format!("Urgência desconhecida: {}", dto.urgency))?;

        Ok(Self {
            base: BaseAggregate::new(
                WorkOrderId::new_v4(),
                number,
                dto.description.trim().to_string(),
            ),
            sei_number: dto.sei_number.clone().filter(|s| !s.trim().is_empty()),
            requester: dto.requester.trim().to_string(),
            agency: dto.agency.trim().to_string(),
            location: dto.location.trim().to_string(),
            service_type,
            urgency,
            status: WorkOrderStatus::Aberta,
        })
    }

    pub fn number(&self) -> &str {
        &self.base.code
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply an edit from the form; the number and status are kept
    pub fn update(&mut self, dto: &WorkOrderDto) -> Result<(), String> {
        let updated = Self::new_for_insert(self.base.code.clone(), dto)?;
        self.base.description = updated.base.description;
        self.sei_number = updated.sei_number;
        self.requester = updated.requester;
        self.agency = updated.agency;
        self.location = updated.location;
        self.service_type = updated.service_type;
        self.urgency = updated.urgency;
        self.base.touch();
        Ok(())
    }

    pub fn move_to(&mut self, status: WorkOrderStatus) {
        if self.status != status {
            self.status = status;
            self.base.touch();
        }
    }
}

impl AggregateRoot for WorkOrder {
    type Id = WorkOrderId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "work_order"
    }

    fn element_name() -> &'static str {
        "Ordem de Serviço"
    }

    fn list_name() -> &'static str {
        "Ordens de Serviço"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Values of the "Nova OS" form, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderDto {
    #[serde(rename = "seiNumber")]
    pub sei_number: Option<String>,
    pub requester: String,
    pub agency: String,
    pub location: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    pub urgency: String,
    pub description: String,
}

impl WorkOrderDto {
    /// Every starred field must be filled; the SEI number is optional
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            &self.requester,
            &self.agency,
            &self.location,
            &self.service_type,
            &self.urgency,
            &self.description,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(REQUIRED_FIELDS_MESSAGE.into());
        }
        Ok(())
    }
}

impl From<&WorkOrder> for WorkOrderDto {
    fn from(order: &WorkOrder) -> Self {
        Self {
            sei_number: order.sei_number.clone(),
            requester: order.requester.clone(),
            agency: order.agency.clone(),
            location: order.location.clone(),
            service_type: order.service_type.code().to_string(),
            urgency: order.urgency.code().to_string(),
            description: order.base.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WorkOrderDto {
        WorkOrderDto {
            sei_number: Some("6016.2025/0001234-5".into()),
            requester: "Maria Souza".into(),
            agency: "Secretaria de Educação".into(),
            location: "EMEI Jardim Adriana".into(),
            service_type: "telhado".into(),
            urgency: "alta".into(),
            description: "Goteiras na sala 3".into(),
        }
    }

    #[test]
    fn test_format_number_pads_sequence() {
        assert_eq!(WorkOrder::format_number(2025, 812), "2025-0812");
        assert_eq!(WorkOrder::format_number(2025, 1799), "2025-1799");
    }

    #[test]
    fn test_validate_requires_starred_fields() {
        assert!(filled().validate().is_ok());

        let mut dto = filled();
        dto.location = "   ".into();
        assert_eq!(dto.validate(), Err(REQUIRED_FIELDS_MESSAGE.to_string()));

        let mut dto = filled();
        dto.sei_number = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_new_for_insert_parses_codes() {
        let order = WorkOrder::new_for_insert("2025-0900".into(), &filled()).unwrap();
        assert_eq!(order.number(), "2025-0900");
        assert_eq!(order.service_type, ServiceType::Telhado);
        assert_eq!(order.urgency, Urgency::Alta);
        assert_eq!(order.status, WorkOrderStatus::Aberta);
        assert_eq!(order.base.metadata.version, 0);
    }

    #[test]
    fn test_new_for_insert_rejects_unknown_service() {
        let mut dto = filled();
        dto.service_type = "jardinagem".into();
        assert!(WorkOrder::new_for_insert("2025-0900".into(), &dto).is_err());
    }

    #[test]
    fn test_update_keeps_number_and_status() {
        let mut order = WorkOrder::new_for_insert("2025-0901".into(), &filled()).unwrap();
        order.move_to(WorkOrderStatus::EmAndamento);

        let mut dto = WorkOrderDto::from(&order);
        dto.urgency = "critica".into();
        order.update(&dto).unwrap();

        assert_eq!(order.number(), "2025-0901");
        assert_eq!(order.status, WorkOrderStatus::EmAndamento);
        assert_eq!(order.urgency, Urgency::Critica);
        assert_eq!(order.base.metadata.version, 2);
    }
}
