//! Demo records loaded on startup

use chrono::NaiveDate;
use contracts::domain::a001_work_order::{WorkOrder, WorkOrderDto};
use contracts::domain::a002_material::Material;
use contracts::domain::a003_production_entry::ProductionEntry;
use contracts::enums::WorkOrderStatus;

struct SeedOrder {
    number: &'static str,
    requester: &'static str,
    agency: &'static str,
    location: &'static str,
    service_type: &'static str,
    urgency: &'static str,
    description: &'static str,
    status: WorkOrderStatus,
}

const ORDERS: &[SeedOrder] = &[
    SeedOrder {
        number: "2025-0847",
        requester: "Ana Paula Ribeiro",
        agency: "Secretaria de Saúde",
        location: "UBS Centro",
        service_type: "hidraulica",
        urgency: "alta",
        description: "Vazamento na pia da sala de vacinação",
        status: WorkOrderStatus::Aberta,
    },
    SeedOrder {
        number: "2025-0853",
        requester: "Carlos Menezes",
        agency: "Secretaria de Educação",
        location: "EMEI Jardim Adriana",
        service_type: "telhado",
        urgency: "critica",
        description: "Goteiras nas salas 2 e 3 após a chuva",
        status: WorkOrderStatus::Aberta,
    },
    SeedOrder {
        number: "2025-0861",
        requester: "Fernanda Alves",
        agency: "Secretaria de Cultura",
        location: "Biblioteca Municipal",
        service_type: "pintura",
        urgency: "baixa",
        description: "Repintura da fachada lateral",
        status: WorkOrderStatus::EmAndamento,
    },
    SeedOrder {
        number: "2025-0872",
        requester: "Roberto Dias",
        agency: "Secretaria de Educação",
        location: "CEU Vila Galvão",
        service_type: "eletrica",
        urgency: "alta",
        description: "Disjuntor do quadro geral desarmando",
        status: WorkOrderStatus::AguardandoMaterial,
    },
    SeedOrder {
        number: "2025-0880",
        requester: "Juliana Prado",
        agency: "Secretaria de Esportes",
        location: "CEU Santos Dumont",
        service_type: "carpintaria",
        urgency: "media",
        description: "Portas do vestiário empenadas",
        status: WorkOrderStatus::Concluida,
    },
];

pub fn work_orders() -> Vec<WorkOrder> {
    ORDERS
        .iter()
        .filter_map(|seed| {
            let dto = WorkOrderDto {
                sei_number: None,
                requester: seed.requester.into(),
                agency: seed.agency.into(),
                location: seed.location.into(),
                service_type: seed.service_type.into(),
                urgency: seed.urgency.into(),
                description: seed.description.into(),
            };
            let mut order = WorkOrder::new_for_insert(seed.number.into(), &dto).ok()?;
            order.move_to(seed.status);
            Some(order)
        })
        .collect()
}

pub fn materials() -> Vec<Material> {
    [
        ("MAT-0001", "Tubo PVC 25mm", "m", 120.0, 50.0, 6.9),
        ("MAT-0002", "Cimento CP-II 50kg", "saco", 18.0, 30.0, 36.5),
        ("MAT-0003", "Tinta acrílica branca 18L", "lata", 9.0, 5.0, 289.9),
        ("MAT-0004", "Telha fibrocimento 2,44m", "un", 14.0, 20.0, 54.0),
        ("MAT-0005", "Disjuntor bipolar 40A", "un", 6.0, 4.0, 48.75),
        ("MAT-0006", "Fio flexível 2,5mm", "m", 300.0, 100.0, 2.3),
    ]
    .into_iter()
    .map(|(code, description, unit, quantity, minimum, price)| {
        Material::new_for_insert(
            code.into(),
            description.into(),
            unit.into(),
            quantity,
            minimum,
            price,
        )
    })
    .collect()
}

pub fn production_entries() -> Vec<ProductionEntry> {
    [
        ("F-00000081", (2025, 3, 10), "Bloco de concreto 14x19x39", "BLC-1419", 1200, 2760.0),
        ("F-00000082", (2025, 3, 11), "Guia de concreto 100x30", "GUI-1030", 80, 2240.0),
        ("F-00000083", (2025, 3, 12), "Piso intertravado 10x20", "PIS-1020", 2500, 3375.0),
        ("F-00000084", (2025, 3, 14), "Placa de sinalização 50x50", "PLC-5050", 40, 1580.0),
    ]
    .into_iter()
    .filter_map(|(document_no, (y, m, d), description, article, count, amount)| {
        Some(ProductionEntry::new_for_insert(
            document_no.into(),
            NaiveDate::from_ymd_opt(y, m, d)?,
            description.into(),
            article.into(),
            count,
            amount,
        ))
    })
    .collect()
}
