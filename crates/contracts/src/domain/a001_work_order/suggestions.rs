//! Static "similar case" hints shown under the OS form once a service
//! type is picked. Icon ids are logical ids; the frontend maps them to the
//! icon library names.

use crate::enums::ServiceType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub icon: &'static str,
    pub title: &'static str,
    /// Main line of the card
    pub body: Option<&'static str>,
    /// Secondary lines (materials, average time, team)
    pub details: Vec<&'static str>,
    /// Bullet list
    pub items: Vec<&'static str>,
}

impl Suggestion {
    fn similar_case(body: &'static str, materials: &'static str, stats: &'static str) -> Self {
        Self {
            icon: "lightbulb",
            title: "Caso Similar",
            body: Some(body),
            details: vec![materials, stats],
            items: Vec::new(),
        }
    }

    fn note(icon: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            icon,
            title,
            body: Some(body),
            details: Vec::new(),
            items: Vec::new(),
        }
    }

    fn list(title: &'static str, items: Vec<&'static str>) -> Self {
        Self {
            icon: "package",
            title,
            body: None,
            details: Vec::new(),
            items,
        }
    }
}

/// Suggestions for a service type; `None` (nothing selected yet) and
/// `Outros` get the waiting card.
pub fn suggestions_for(service_type: Option<ServiceType>) -> Vec<Suggestion> {
    match service_type {
        Some(ServiceType::Hidraulica) => vec![
            Suggestion::similar_case(
                "OS #2024-1156 - Vazamento na UBS Centro (Set/2024)",
                "Materiais: Cano PVC 100mm (5m), Conexões (8 un), Vedante (2 tubos)",
                "Tempo médio: 2,5 dias | Equipe mais eficiente: SAR03.03-B",
            ),
            Suggestion::list(
                "Materiais Frequentes",
                vec![
                    "Canos PVC (diversos diâmetros)",
                    "Conexões e registros",
                    "Massa de vedação",
                    "Fita veda rosca",
                ],
            ),
        ],
        Some(ServiceType::Eletrica) => vec![
            Suggestion::similar_case(
                "OS #2024-1278 - Quadro elétrico CEU Vila Galvão (Out/2024)",
                "Materiais: Disjuntores 20A (4 un), Fios 2,5mm (50m), Quadro de distribuição",
                "Tempo médio: 1,8 dias | Equipe mais eficiente: SAR03.03-A",
            ),
            Suggestion::note(
                "alert-triangle",
                "Atenção",
                "Sempre verificar se precisa desligar energia geral antes de iniciar os trabalhos",
            ),
        ],
        Some(ServiceType::Pintura) => vec![
            Suggestion::similar_case(
                "OS #2024-1089 - Pintura externa Biblioteca Municipal (Ago/2024)",
                "Materiais: Tinta acrílica (25L), Primer (10L), Rolo e pincéis",
                "Tempo médio: 4,2 dias | Equipe mais eficiente: SAR03.03-C",
            ),
            Suggestion::note(
                "cloud-rain",
                "Dica Importante",
                "Verificar previsão do tempo - evitar período chuvoso para melhor aderência",
            ),
        ],
        Some(ServiceType::Telhado) => vec![
            Suggestion::similar_case(
                "OS #2024-1247 - Reparo telhado EMEI Jardim Adriana (Nov/2024)",
                "Materiais: Telhas cerâmicas (60 un), Argamassa (8 sacos), Impermeabilizante",
                "Tempo médio: 3,1 dias | Equipe mais eficiente: SAR03.03-A",
            ),
            Suggestion::list(
                "Materiais Padrão",
                vec![
                    "Telhas cerâmicas ou fibrocimento",
                    "Argamassa colante",
                    "Impermeabilizante",
                    "Ripas de madeira",
                ],
            ),
        ],
        Some(ServiceType::Carpintaria) => vec![Suggestion::similar_case(
            "OS #2024-0956 - Reparo de portas CEU Santos Dumont (Jul/2024)",
            "Materiais: Madeira compensada, Dobradiças, Fechaduras",
            "Tempo médio: 2,8 dias | Equipe mais eficiente: SAR03.03-B",
        )],
        Some(ServiceType::Outros) | None => vec![Suggestion::note(
            "info",
            "Aguardando Seleção",
            "Casos similares serão sugeridos após seleção do tipo de serviço",
        )],
    }
}
