use eframe::egui::{
    self,
    RichText,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    theme::Theme,
    ActionQueue,
    UiAction,
};
use crate::core::Member;

pub mod pagination;
pub mod search;
pub mod sort;
mod state;

use pagination::PAGE_SIZES;
pub use sort::{
    SortDirection,
    SortField,
};
pub use state::ListState;

const ROW_HEIGHT: f32 = 28.0;

/// "Listado de Socios": search, sortable columns, row actions and pagination.
pub fn member_table(
    ui: &mut Ui,
    members: &[Member],
    state: &mut ListState,
    theme: &Theme,
    busy: bool,
    actions: &mut ActionQueue,
) {
    state.ensure_indices(members);

    ui.horizontal(|ui| {
        ui.heading(RichText::new("Listado de Socios").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("📥 Exportar").on_hover_text("Exportar CSV").clicked() {
                actions.push(UiAction::ExportCsv);
            }
        });
    });
    ui.add_space(6.0);

    ui_controls_row(ui, state, actions);
    ui.add_space(8.0);

    if state.filtered_count() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(theme.muted(ui.ctx(), "No se encontraron resultados."));
            ui.add_space(40.0);
        });
    } else {
        let available = ui.available_height() - 40.0;
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.set_max_height(available.max(ROW_HEIGHT * 3.0));
            ui_rows(ui, members, state, theme, busy, actions);
        });
    }

    ui.separator();
    ui_pagination_row(ui, state, theme, actions);
}

fn ui_controls_row(ui: &mut Ui, state: &ListState, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        let mut search = state.search().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Buscar por nombre o cédula...")
                .desired_width(320.0),
        );
        if response.changed() {
            actions.push(UiAction::SetSearch(search));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut page_size = state.page_size();
            egui::ComboBox::from_id_salt("page_size")
                .width(60.0)
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZES {
                        ui.selectable_value(&mut page_size, size, size.to_string());
                    }
                });
            ui.label("Registros por página:");

            if page_size != state.page_size() {
                actions.push(UiAction::SetPageSize(page_size));
            }
        });
    });
}

fn ui_rows(
    ui: &mut Ui,
    members: &[Member],
    state: &ListState,
    theme: &Theme,
    busy: bool,
    actions: &mut ActionQueue,
) {
    let sort = state.sort_state();
    let page = state.page_indices();

    TableBuilder::new(ui)
        .id_salt("member_table")
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(220.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder().at_least(240.0))
        .header(ROW_HEIGHT, |mut header| {
            for field in SortField::ALL {
                header.col(|ui| {
                    let arrow = match sort.field {
                        Some(active) if active == field => sort.direction.arrow(),
                        _ => "",
                    };
                    let text = theme.heading(ui.ctx(), &format!("{} {}", field.label(), arrow));
                    let label = egui::Label::new(text).sense(egui::Sense::click());
                    if ui.add(label).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        actions.push(UiAction::ToggleSort(field));
                    }
                });
            }
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Acciones"));
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page.len(), |mut row| {
                let index = page[row.index()];
                let member = &members[index];

                row.col(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            member.apellidos_completos, member.nombres_completos
                        ))
                        .strong(),
                    );
                });
                row.col(|ui| {
                    ui.monospace(&member.cedula);
                });
                row.col(|ui| {
                    ui.label(disability_text(member));
                });
                row.col(|ui| {
                    ui.label(&member.provincia_canton);
                });
                row.col(|ui| {
                    let color =
                        if member.is_active() { theme.green(ui.ctx()) } else { theme.red(ui.ctx()) };
                    ui.label(RichText::new(&member.estado_socio).color(color).strong());
                });
                row.col(|ui| {
                    if ui.small_button("👁 Ver Ficha").clicked() {
                        actions.push(UiAction::ShowRecord(index));
                    }
                    if ui.small_button("✏ Editar").clicked() {
                        actions.push(UiAction::EditMember(index));
                    }
                    let delete = egui::Button::new(
                        RichText::new("🗑 Eliminar").small().color(theme.red(ui.ctx())),
                    );
                    if ui.add_enabled(!busy, delete).clicked() {
                        actions.push(UiAction::RequestDelete(index));
                    }
                });
            });
        });
}

fn ui_pagination_row(ui: &mut Ui, state: &ListState, theme: &Theme, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.label(theme.muted(ui.ctx(), &state.caption()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(state.has_next(), egui::Button::new("Siguiente ▶")).clicked() {
                actions.push(UiAction::NextPage);
            }
            ui.label(format!("{} / {}", state.page(), state.total_pages().max(1)));
            if ui.add_enabled(state.has_previous(), egui::Button::new("◀ Anterior")).clicked() {
                actions.push(UiAction::PreviousPage);
            }
        });
    });
}

pub fn disability_text(member: &Member) -> String {
    if member.discapacidad_porcentaje.trim().is_empty() {
        member.discapacidad_tipo.clone()
    } else {
        format!("{} ({}%)", member.discapacidad_tipo, member.discapacidad_porcentaje)
    }
}
