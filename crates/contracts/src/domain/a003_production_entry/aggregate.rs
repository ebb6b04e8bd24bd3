use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of a factory production record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductionEntryId(pub Uuid);

impl ProductionEntryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductionEntryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductionEntryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Output of the municipal factory (blocks, curbs, signs…) for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionEntry {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductionEntryId>,

    /// Document number (e.g. "F-00000084")
    #[serde(rename = "documentNo")]
    pub document_no: String,
    #[serde(rename = "documentDate")]
    pub document_date: NaiveDate,
    /// Product article
    pub article: String,
    /// Units produced
    pub count: i64,
    /// Total production cost
    pub amount: f64,
    /// Cost per unit (amount / count)
    #[serde(rename = "costPerUnit")]
    pub cost_per_unit: Option<f64>,
}

impl ProductionEntry {
    pub fn new_for_insert(
        document_no: String,
        document_date: NaiveDate,
        description: String,
        article: String,
        count: i64,
        amount: f64,
    ) -> Self {
        let base = BaseAggregate::new(
            ProductionEntryId::new(Uuid::new_v4()),
            document_no.clone(),
            description,
        );
        Self {
            base,
            document_no,
            document_date,
            article,
            count,
            amount,
            cost_per_unit: Self::unit_cost(count, amount),
        }
    }

    fn unit_cost(count: i64, amount: f64) -> Option<f64> {
        if count > 0 {
            Some(amount / count as f64)
        } else {
            None
        }
    }

    /// Correct count/amount; the unit cost follows
    pub fn update_totals(&mut self, count: i64, amount: f64) {
        self.count = count;
        self.amount = amount;
        self.cost_per_unit = Self::unit_cost(count, amount);
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.document_no.trim().is_empty() {
            return Err("Número do documento não pode ficar vazio".into());
        }
        if self.article.trim().is_empty() {
            return Err("Artigo não pode ficar vazio".into());
        }
        if self.count < 0 {
            return Err("Quantidade produzida não pode ser negativa".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ProductionEntry {
    type Id = ProductionEntryId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "production_entry"
    }

    fn element_name() -> &'static str {
        "Registro de Produção"
    }

    fn list_name() -> &'static str {
        "Produção da Fábrica"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(count: i64, amount: f64) -> ProductionEntry {
        ProductionEntry::new_for_insert(
            "F-00000084".into(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            "Bloco de concreto 14x19x39".into(),
            "BLC-1419".into(),
            count,
            amount,
        )
    }

    #[test]
    fn test_cost_per_unit() {
        assert_eq!(entry(400, 1000.0).cost_per_unit, Some(2.5));
        assert_eq!(entry(0, 1000.0).cost_per_unit, None);
    }

    #[test]
    fn test_update_totals_recomputes_cost() {
        let mut e = entry(400, 1000.0);
        e.update_totals(500, 1000.0);
        assert_eq!(e.cost_per_unit, Some(2.0));
        assert_eq!(e.base.metadata.version, 1);
    }

    #[test]
    fn test_full_name_is_tab_key() {
        assert_eq!(ProductionEntry::full_name(), "a003_production_entry");
    }
}
