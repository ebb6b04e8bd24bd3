//! In-memory records behind the board. Nothing is persisted; a reload
//! starts again from the seed.

use contracts::domain::a001_work_order::{WorkOrder, WorkOrderDto, WorkOrderId};
use contracts::domain::a002_material::{Material, MaterialId};
use contracts::domain::a003_production_entry::{ProductionEntry, ProductionEntryId};
use contracts::enums::WorkOrderStatus;
use std::collections::BTreeMap;

/// Sequence range of generated OS numbers (`YYYY-0800` .. `YYYY-1799`)
pub const WORK_ORDER_SEQUENCE: std::ops::Range<u32> = 800..1800;

#[derive(Debug, Clone, Default)]
pub struct MockStore {
    work_orders: BTreeMap<WorkOrderId, WorkOrder>,
    materials: BTreeMap<MaterialId, Material>,
    production: BTreeMap<ProductionEntryId, ProductionEntry>,
}

/// Figures of the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub open: usize,
    pub in_progress: usize,
    pub waiting_material: usize,
    pub done: usize,
    pub low_stock: usize,
    pub stock_value: f64,
    pub units_produced: i64,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store filled with the demo records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for order in super::seed::work_orders() {
            store.work_orders.insert(order.base.id, order);
        }
        for material in super::seed::materials() {
            store.materials.insert(material.base.id, material);
        }
        for entry in super::seed::production_entries() {
            store.production.insert(entry.base.id, entry);
        }
        store
    }

    // ------------------------------------------------------------------------
    // Work orders
    // ------------------------------------------------------------------------

    pub fn work_order(&self, id: WorkOrderId) -> Option<&WorkOrder> {
        self.work_orders.get(&id)
    }

    /// All work orders by number
    pub fn work_orders(&self) -> Vec<&WorkOrder> {
        let mut orders: Vec<&WorkOrder> = self.work_orders.values().collect();
        orders.sort_by(|a, b| a.number().cmp(b.number()));
        orders
    }

    pub fn work_orders_in(&self, status: WorkOrderStatus) -> Vec<&WorkOrder> {
        self.work_orders()
            .into_iter()
            .filter(|o| o.status == status)
            .collect()
    }

    pub fn number_in_use(&self, number: &str) -> bool {
        self.work_orders.values().any(|o| o.number() == number)
    }

    /// Draw sequence numbers until one is free for `year`. After the range
    /// is exhausted by bad luck, continue after the highest number in use.
    pub fn pick_work_order_number(&self, year: i32, mut draw: impl FnMut() -> u32) -> String {
        for _ in 0..WORK_ORDER_SEQUENCE.len() {
            let sequence = draw();
            let candidate = WorkOrder::format_number(year, sequence);
            if WORK_ORDER_SEQUENCE.contains(&sequence) && !self.number_in_use(&candidate) {
                return candidate;
            }
        }
        let prefix = format!("{}-", year);
        let highest = self
            .work_orders
            .values()
            .filter_map(|o| o.number().strip_prefix(&prefix))
            .filter_map(|s| s.parse::<u32>().ok())
            .max()
            .unwrap_or(WORK_ORDER_SEQUENCE.start);
        WorkOrder::format_number(year, highest + 1)
    }

    pub fn create_work_order(
        &mut self,
        number: String,
        dto: &WorkOrderDto,
    ) -> Result<WorkOrderId, String> {
        if self.number_in_use(&number) {
            return Err(format!("OS #{} já existe", number));
        }
        let order = WorkOrder::new_for_insert(number, dto)?;
        let id = order.base.id;
        self.work_orders.insert(id, order);
        Ok(id)
    }

    pub fn update_work_order(&mut self, id: WorkOrderId, dto: &WorkOrderDto) -> Result<(), String> {
        self.work_orders
            .get_mut(&id)
            .ok_or_else(|| "OS não encontrada".to_string())?
            .update(dto)
    }

    /// Move a card to another column; `Ok(false)` when it already was there
    pub fn move_work_order(
        &mut self,
        id: WorkOrderId,
        status: WorkOrderStatus,
    ) -> Result<bool, String> {
        let order = self
            .work_orders
            .get_mut(&id)
            .ok_or_else(|| "OS não encontrada".to_string())?;
        if order.status == status {
            return Ok(false);
        }
        order.move_to(status);
        Ok(true)
    }

    /// Cards per kanban column; every column is present
    pub fn kanban_counts(&self) -> BTreeMap<WorkOrderStatus, usize> {
        let mut counts: BTreeMap<WorkOrderStatus, usize> =
            WorkOrderStatus::all().into_iter().map(|s| (s, 0)).collect();
        for order in self.work_orders.values() {
            *counts.entry(order.status).or_default() += 1;
        }
        counts
    }

    // ------------------------------------------------------------------------
    // Materials
    // ------------------------------------------------------------------------

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// All materials by code
    pub fn materials(&self) -> Vec<&Material> {
        let mut materials: Vec<&Material> = self.materials.values().collect();
        materials.sort_by(|a, b| a.base.code.cmp(&b.base.code));
        materials
    }

    pub fn upsert_material(&mut self, material: Material) -> Result<MaterialId, String> {
        material.validate()?;
        let duplicate = self
            .materials
            .values()
            .any(|m| m.base.code == material.base.code && m.base.id != material.base.id);
        if duplicate {
            return Err(format!("Código {} já cadastrado", material.base.code));
        }
        let id = material.base.id;
        self.materials.insert(id, material);
        Ok(id)
    }

    pub fn adjust_stock(&mut self, id: MaterialId, delta: f64) -> Result<(), String> {
        self.materials
            .get_mut(&id)
            .ok_or_else(|| "Material não encontrado".to_string())?
            .adjust(delta)
    }

    pub fn low_stock(&self) -> Vec<&Material> {
        self.materials()
            .into_iter()
            .filter(|m| m.is_below_minimum())
            .collect()
    }

    // ------------------------------------------------------------------------
    // Production
    // ------------------------------------------------------------------------

    /// Newest first
    pub fn production_entries(&self) -> Vec<&ProductionEntry> {
        let mut entries: Vec<&ProductionEntry> = self.production.values().collect();
        entries.sort_by(|a, b| {
            b.document_date
                .cmp(&a.document_date)
                .then_with(|| b.document_no.cmp(&a.document_no))
        });
        entries
    }

    pub fn add_production_entry(&mut self, entry: ProductionEntry) -> Result<ProductionEntryId, String> {
        entry.validate()?;
        let id = entry.base.id;
        self.production.insert(id, entry);
        Ok(id)
    }

    // ------------------------------------------------------------------------

    pub fn stats(&self) -> DashboardStats {
        let counts = self.kanban_counts();
        let count = |s: WorkOrderStatus| counts.get(&s).copied().unwrap_or(0);
        DashboardStats {
            open: count(WorkOrderStatus::Aberta),
            in_progress: count(WorkOrderStatus::EmAndamento),
            waiting_material: count(WorkOrderStatus::AguardandoMaterial),
            done: count(WorkOrderStatus::Concluida),
            low_stock: self.low_stock().len(),
            stock_value: self.materials.values().map(Material::stock_value).sum(),
            units_produced: self.production.values().map(|e| e.count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> WorkOrderDto {
        WorkOrderDto {
            sei_number: None,
            requester: "João Lima".into(),
            agency: "Secretaria de Saúde".into(),
            location: "UBS Centro".into(),
            service_type: "hidraulica".into(),
            urgency: "media".into(),
            description: "Vazamento no banheiro".into(),
        }
    }

    #[test]
    fn test_seed_has_every_kind_of_record() {
        let store = MockStore::seeded();
        assert_eq!(store.work_orders().len(), 5);
        assert_eq!(store.materials().len(), 6);
        assert_eq!(store.production_entries().len(), 4);
        assert_eq!(store.production_entries()[0].document_no, "F-00000084");
        assert!(!store.low_stock().is_empty());
    }

    #[test]
    fn test_create_and_read_work_order() {
        let mut store = MockStore::new();
        let id = store.create_work_order("2025-0900".into(), &dto()).unwrap();

        let order = store.work_order(id).unwrap();
        assert_eq!(order.number(), "2025-0900");
        assert_eq!(order.status, WorkOrderStatus::Aberta);
        assert!(store.number_in_use("2025-0900"));
    }

    #[test]
    fn test_create_rejects_duplicate_number_and_invalid_form() {
        let mut store = MockStore::new();
        store.create_work_order("2025-0900".into(), &dto()).unwrap();
        assert!(store.create_work_order("2025-0900".into(), &dto()).is_err());

        let mut empty = dto();
        empty.requester.clear();
        assert!(store.create_work_order("2025-0901".into(), &empty).is_err());
        assert_eq!(store.work_orders().len(), 1);
    }

    #[test]
    fn test_move_updates_kanban_counts() {
        let mut store = MockStore::new();
        let id = store.create_work_order("2025-0900".into(), &dto()).unwrap();
        store.create_work_order("2025-0901".into(), &dto()).unwrap();

        assert!(store.move_work_order(id, WorkOrderStatus::Concluida).unwrap());
        assert!(!store.move_work_order(id, WorkOrderStatus::Concluida).unwrap());

        let counts = store.kanban_counts();
        assert_eq!(counts.len(), WorkOrderStatus::all().len());
        assert_eq!(counts[&WorkOrderStatus::Aberta], 1);
        assert_eq!(counts[&WorkOrderStatus::Concluida], 1);
        assert_eq!(counts[&WorkOrderStatus::EmAndamento], 0);
    }

    #[test]
    fn test_move_unknown_work_order() {
        let mut store = MockStore::new();
        assert!(store
            .move_work_order(WorkOrderId::new_v4(), WorkOrderStatus::Concluida)
            .is_err());
    }

    #[test]
    fn test_pick_number_skips_numbers_in_use() {
        let mut store = MockStore::new();
        store.create_work_order("2025-0812".into(), &dto()).unwrap();

        let mut draws = vec![812, 813].into_iter();
        let number = store.pick_work_order_number(2025, || draws.next().unwrap_or(812));
        assert_eq!(number, "2025-0813");
    }

    #[test]
    fn test_pick_number_falls_back_after_highest() {
        let mut store = MockStore::new();
        store.create_work_order("2025-0812".into(), &dto()).unwrap();

        let number = store.pick_work_order_number(2025, || 812);
        assert_eq!(number, "2025-0813");
    }

    #[test]
    fn test_adjust_stock_and_low_stock() {
        let mut store = MockStore::new();
        let id = store
            .upsert_material(Material::new_for_insert(
                "MAT-0100".into(),
                "Disjuntor 20A".into(),
                "un".into(),
                10.0,
                4.0,
                32.9,
            ))
            .unwrap();

        assert!(store.low_stock().is_empty());
        store.adjust_stock(id, -7.0).unwrap();
        assert_eq!(store.low_stock().len(), 1);
        assert!(store.adjust_stock(id, -5.0).is_err());
        assert_eq!(store.material(id).unwrap().quantity, 3.0);
    }

    #[test]
    fn test_upsert_rejects_duplicate_code() {
        let mut store = MockStore::new();
        let make = || {
            Material::new_for_insert("MAT-0100".into(), "Fita".into(), "un".into(), 1.0, 0.0, 1.0)
        };
        store.upsert_material(make()).unwrap();
        assert!(store.upsert_material(make()).is_err());
    }

    #[test]
    fn test_stats_sum_records() {
        let store = MockStore::seeded();
        let stats = store.stats();
        assert_eq!(
            stats.open + stats.in_progress + stats.waiting_material + stats.done,
            store.work_orders().len()
        );
        assert_eq!(stats.low_stock, store.low_stock().len());
        assert!(stats.units_produced > 0);
    }
}
