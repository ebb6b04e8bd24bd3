//! Report exports. Generation is simulated: a notice, a delay, then the
//! success toast.
use crate::shared::notifications::NotificationService;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    /// Simulated generation time
    pub fn delay_ms(&self) -> u32 {
        match self {
            ExportFormat::Pdf => 2000,
            ExportFormat::Excel => 1500,
        }
    }

    pub fn started_message(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Gerando relatório em PDF...",
            ExportFormat::Excel => "Exportando dados para Excel...",
        }
    }

    pub fn done_message(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Relatório PDF gerado com sucesso!",
            ExportFormat::Excel => "Dados exportados para Excel com sucesso!",
        }
    }
}

pub fn export(format: ExportFormat, notifications: NotificationService) {
    log::info!("export started: {:?}", format);
    notifications.info(format.started_message());
    spawn_local(async move {
        TimeoutFuture::new(format.delay_ms()).await;
        notifications.success(format.done_message());
    });
}

pub fn export_pdf(notifications: NotificationService) {
    export(ExportFormat::Pdf, notifications);
}

pub fn export_excel(notifications: NotificationService) {
    export(ExportFormat::Excel, notifications);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_delays() {
        assert_eq!(ExportFormat::Pdf.delay_ms(), 2000);
        assert_eq!(ExportFormat::Excel.delay_ms(), 1500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ExportFormat::Pdf.done_message(), "Relatório PDF gerado com sucesso!");
        assert_eq!(
            ExportFormat::Excel.started_message(),
            "Exportando dados para Excel..."
        );
    }
}
