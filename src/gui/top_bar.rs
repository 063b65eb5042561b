use eframe::egui::{
    self,
    containers,
};

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::View,
    theme::Theme,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        view: View,
        member_count: usize,
        busy: bool,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.label(theme.heading(ui.ctx(), "AEDIS"));
                ui.add_space(8.0);

                ui.menu_button("Archivo", |ui| {
                    if ui.button("📥 Exportar CSV").clicked() {
                        actions.push(UiAction::ExportCsv);
                    }
                    if ui.add_enabled(!busy, egui::Button::new("🔄 Recargar")).clicked() {
                        actions.push(UiAction::Reload);
                    }
                    ui.separator();
                    if ui.button("Salir").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                if ui.button("⚙ Configuración").clicked() {
                    actions.push(UiAction::OpenSettings);
                }

                ui.separator();
                for (target, label) in [
                    (View::Dashboard, "📊 Dashboard"),
                    (View::List, "👥 Socios"),
                    (View::Create, "➕ Registrar Socio"),
                ] {
                    if ui.selectable_label(view == target, label).clicked() {
                        actions.push(UiAction::Navigate(target));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, member_count, busy);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, member_count: usize, busy: bool) {
        let (color, tooltip) = if busy {
            (egui::Color32::from_rgb(230, 170, 40), "Sincronizando con el servicio")
        } else {
            (egui::Color32::from_rgb(0, 200, 0), "Datos sincronizados")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(format!("{} socios", member_count)).on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
