use eframe::egui;

use crate::core::tasks::TaskFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

/// Blocking notification: stays up until dismissed with "Aceptar".
pub struct NotificationModal {
    open: bool,
    notice: Notice,
}

impl NotificationModal {
    pub fn new() -> Self {
        Self { open: false, notice: Notice::default() }
    }

    pub fn show_error(&mut self, title: impl Into<String>, failure: &TaskFailure) {
        self.notice = Notice {
            kind: NoticeKind::Error,
            title: title.into(),
            message: failure.message.clone(),
            details: Some(failure.details.clone()).filter(|d| !d.is_empty()),
        };
        self.open = true;
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notice = Notice {
            kind: NoticeKind::Success,
            title: "Operación exitosa".to_string(),
            message: message.into(),
            details: None,
        };
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Returns true on the frame the notification is dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        let (icon, color) = match self.notice.kind {
            NoticeKind::Error => ("⚠", ctx.style().visuals.error_fg_color),
            NoticeKind::Success => ("✔", egui::Color32::from_rgb(0x10, 0xb9, 0x81)),
        };

        let modal = egui::Modal::new(egui::Id::new("notification_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(24.0).color(color));
                ui.label(egui::RichText::new(&self.notice.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(egui::RichText::new(&self.notice.message).size(14.0));

            if let Some(details) = &self.notice.details {
                ui.add_space(10.0);
                ui.collapsing("Detalles técnicos", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Aceptar").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.notice = Notice::default();
            return true;
        }
        false
    }
}

impl Default for NotificationModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_from_failure() {
        let mut modal = NotificationModal::new();
        let failure = TaskFailure { message: "Error de red".to_string(), details: String::new() };
        modal.show_error("No se pudo guardar", &failure);

        assert!(modal.is_open());
        assert_eq!(modal.notice().kind, NoticeKind::Error);
        assert_eq!(modal.notice().message, "Error de red");
        assert!(modal.notice().details.is_none());

        modal.show_success("Socio creado exitosamente.");
        assert_eq!(modal.notice().kind, NoticeKind::Success);
    }
}
