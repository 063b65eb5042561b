use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::{
        record::{
            drive_direct_link,
            is_pdf_link,
            record_sections,
            RecordSection,
        },
        Member,
    },
    gui::theme::Theme,
};

/// Read-only "Ficha de Socio" window.
#[derive(Default)]
pub struct MemberCard {
    member: Option<Member>,
}

impl MemberCard {
    pub fn open(&mut self, member: Member) {
        self.member = Some(member);
    }

    pub fn close(&mut self) {
        self.member = None;
    }

    pub fn is_open(&self) -> bool {
        self.member.is_some()
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some(member) = &self.member else {
            return;
        };

        let mut keep_open = true;
        let mut close_clicked = false;

        egui::Window::new("Ficha de Socio")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(true)
            .default_width(640.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    document_links(ui, member);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Cerrar").clicked() {
                            close_clicked = true;
                        }
                    });
                });
                ui.separator();

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(theme.heading(ui.ctx(), "AEDIS").size(24.0));
                        ui.label(theme.muted(
                            ui.ctx(),
                            "Asociación Ecuatoriana del Acuerdo por la Discapacidad",
                        ));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let registry = if member.carnet_registro.trim().is_empty() {
                            "S/N"
                        } else {
                            member.carnet_registro.as_str()
                        };
                        ui.vertical(|ui| {
                            ui.label(theme.muted(ui.ctx(), "Nro. Registro"));
                            ui.label(RichText::new(registry).size(18.0).strong());
                        });
                    });
                });
                ui.add_space(8.0);

                egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                    for section in record_sections(member) {
                        show_section(ui, theme, member, &section);
                    }
                });
            });

        if !keep_open || close_clicked {
            self.close();
        }
    }
}

fn document_links(ui: &mut egui::Ui, member: &Member) {
    match member.link_cedula_digital.as_deref().filter(|link| !link.trim().is_empty()) {
        Some(link) => {
            let label = if is_pdf_link(link) {
                "📄 Ver Cédula Digital (PDF)"
            } else {
                "📄 Ver Cédula Digital"
            };
            if ui.button(label).on_hover_text(link).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(link));
            }
            let direct = drive_direct_link(link);
            if direct != link {
                ui.hyperlink_to("Vista directa", direct);
            }
        }
        None => {
            ui.label(RichText::new("No hay cédula digital registrada").small().weak());
        }
    }
}

fn show_section(ui: &mut egui::Ui, theme: &Theme, member: &Member, section: &RecordSection) {
    ui.add_space(6.0);
    ui.label(theme.heading(ui.ctx(), section.title).size(15.0));
    ui.separator();

    egui::Grid::new(("record_section", section.title, member.cedula.as_str()))
        .num_columns(4)
        .spacing([18.0, 4.0])
        .show(ui, |ui| {
            for (i, (label, value)) in section.fields.iter().enumerate() {
                ui.label(theme.muted(ui.ctx(), label).small());
                if section.title == "Estado" && *label == "Estado" {
                    let color = if member.is_active() {
                        theme.green(ui.ctx())
                    } else {
                        theme.red(ui.ctx())
                    };
                    ui.label(RichText::new(value).color(color).strong());
                } else {
                    ui.label(RichText::new(value).strong());
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
