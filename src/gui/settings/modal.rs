use eframe::egui;

use super::data::SettingsData;
use crate::gui::modal::{
    action_buttons,
    Modal,
    ModalConfig,
    ModalResult,
};

pub struct SettingsModal {
    modal: Modal<SettingsData>,
}

impl SettingsModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            min_size: Some(egui::Vec2::new(520.0, 180.0)),
            close_on_outside_click: false,
            ..Default::default()
        };

        Self { modal: Modal::new("Configuración").with_config(config) }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.modal.open_with(current_settings);
    }

    pub fn is_settings_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Returns the edited settings on the frame they are confirmed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        let result = self.modal.show(ctx, |ui, data| {
            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("URL del servicio:");
                ui.add(
                    egui::TextEdit::singleline(&mut data.api_url)
                        .hint_text("https://script.google.com/macros/s/.../exec")
                        .desired_width(380.0),
                );
                ui.end_row();

                ui.label("Tema oscuro:");
                ui.checkbox(&mut data.dark_mode, "");
                ui.end_row();
            });

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Al guardar se recargan los socios desde el servicio.")
                    .small()
                    .weak(),
            );
            ui.separator();

            let valid = !data.api_url.trim().is_empty();
            action_buttons(ui, data, "Guardar", "Cancelar", valid)
        });

        match result {
            Some(ModalResult::Confirmed(mut settings)) => {
                settings.api_url = settings.api_url.trim().to_string();
                Some(settings)
            }
            _ => None,
        }
    }
}
