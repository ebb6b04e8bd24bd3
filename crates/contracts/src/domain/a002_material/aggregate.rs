use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of a stock material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
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

impl AggregateId for MaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MaterialId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Material held in the maintenance warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    #[serde(flatten)]
    pub base: BaseAggregate<MaterialId>,

    /// Unit of measure ("un", "m", "L", "saco")
    pub unit: String,
    /// Quantity currently in stock
    pub quantity: f64,
    /// Stock level that triggers a replenishment alert
    #[serde(rename = "minimumStock")]
    pub minimum_stock: f64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl Material {
    pub fn new_for_insert(
        code: String,
        description: String,
        unit: String,
        quantity: f64,
        minimum_stock: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MaterialId::new_v4(), code, description),
            unit,
            quantity,
            minimum_stock,
            unit_price,
        }
    }

    pub fn is_below_minimum(&self) -> bool {
        self.quantity < self.minimum_stock
    }

    /// Value of the stock on hand
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Add (positive) or withdraw (negative) stock
    pub fn adjust(&mut self, delta: f64) -> Result<(), String> {
        let next = self.quantity + delta;
        if next < 0.0 {
            return Err(format!(
                "Estoque insuficiente de {}: disponível {} {}",
                self.base.description, self.quantity, self.unit
            ));
        }
        self.quantity = next;
        self.base.touch();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Código não pode ficar vazio".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Descrição não pode ficar vazia".into());
        }
        if self.unit.trim().is_empty() {
            return Err("Unidade não pode ficar vazia".into());
        }
        if self.quantity < 0.0 || self.minimum_stock < 0.0 {
            return Err("Quantidades não podem ser negativas".into());
        }
        if self.unit_price < 0.0 {
            return Err("Preço unitário não pode ser negativo".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Material {
    type Id = MaterialId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Material"
    }

    fn list_name() -> &'static str {
        "Estoque de Materiais"
    }
}
