use eframe::egui::{
    self,
    RichText,
    Ui,
};
use log::{
    error,
    info,
};

use crate::{
    core::{
        attachment::{
            Attachment,
            ACCEPTED_EXTENSIONS,
        },
        catalog::{
            COMMISSION_OPTIONS,
            DISABILITY_TYPES,
            EDUCATION_LEVELS,
            GENDERS,
            HOUSING_TYPES,
            MARITAL_STATUSES,
            MEMBER_STATUSES,
            MEMBER_TYPES,
            OCCUPATIONS,
            PROVINCES,
            YES_NO,
        },
    },
    gui::theme::Theme,
};

mod state;

pub use state::{
    FormState,
    Submission,
};

/// Outcome of one frame of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit(Submission),
    Cancel,
    /// A message to raise as a blocking notification.
    Notify(String),
}

const PLACEHOLDER: &str = "Seleccione";

pub fn member_form(
    ui: &mut Ui,
    form: &mut FormState,
    theme: &Theme,
    busy: bool,
) -> Option<FormEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.heading(RichText::new(form.title()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Cancelar").clicked() {
                event = Some(FormEvent::Cancel);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        section(ui, theme, "Datos Personales", "form_personal", |ui| {
            personal_fields(ui, form);
        });
        section(ui, theme, "Datos de Discapacidad", "form_disability", |ui| {
            if let Some(message) = disability_fields(ui, form) {
                event = Some(FormEvent::Notify(message));
            }
        });
        section(ui, theme, "Datos Socioeconómicos", "form_socioeconomic", |ui| {
            socioeconomic_fields(ui, form);
        });
        section(ui, theme, "Ubicación y Contacto", "form_location", |ui| {
            location_fields(ui, form);
        });
        section(ui, theme, "Datos del Representante (Si aplica)", "form_representative", |ui| {
            text_row(ui, "Nombre del Representante", &mut form.draft.nombre_representante);
            text_row(ui, "Parentesco", &mut form.draft.parentesco);
            text_row(ui, "Cédula del Representante", &mut form.draft.cedula_representante);
        });
        section(ui, theme, "AEDIS y Documentación", "form_membership", |ui| {
            membership_fields(ui, form);
        });

        ui.add_space(8.0);
        ui.label("Observaciones");
        ui.add(
            egui::TextEdit::multiline(&mut form.draft.observaciones)
                .hint_text("Información adicional relevante...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        if let Some(message) = document_picker(ui, form, theme) {
            event = Some(FormEvent::Notify(message));
        }

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            let save_text = if busy { "Guardando..." } else { "Guardar Socio" };
            if ui.add_enabled(!busy, egui::Button::new(save_text)).clicked() {
                event = Some(match form.submit() {
                    Ok(submission) => FormEvent::Submit(submission),
                    Err(e) => FormEvent::Notify(e.to_string()),
                });
            }
            if ui.add_enabled(!busy, egui::Button::new("Cancelar")).clicked() {
                event = Some(FormEvent::Cancel);
            }
        });
    });

    event
}

fn section(
    ui: &mut Ui,
    theme: &Theme,
    title: &str,
    grid_id: &str,
    add_contents: impl FnOnce(&mut Ui),
) {
    ui.add_space(10.0);
    ui.label(theme.heading(ui.ctx(), title).size(16.0));
    ui.separator();
    egui::Grid::new(grid_id).num_columns(2).spacing([16.0, 6.0]).striped(false).show(
        ui,
        |ui| {
            add_contents(ui);
        },
    );
}

fn text_row(ui: &mut Ui, label: &str, value: &mut String) -> egui::Response {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(value).desired_width(280.0));
    ui.end_row();
    response
}

fn hinted_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(label);
    let response =
        ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(280.0));
    ui.end_row();
    response
}

fn combo_row(ui: &mut Ui, label: &str, value: &mut String, options: &[&str]) {
    ui.label(label);
    let selected = if value.is_empty() { PLACEHOLDER } else { value.as_str() };
    egui::ComboBox::from_id_salt(label).selected_text(selected).width(280.0).show_ui(ui, |ui| {
        for option in options {
            ui.selectable_value(value, option.to_string(), *option);
        }
    });
    ui.end_row();
}

/// Selector over a (stored value, label) catalog.
fn labeled_combo_row(ui: &mut Ui, label: &str, value: &mut String, options: &[(&str, &str)]) {
    ui.label(label);
    let selected = options
        .iter()
        .find(|(stored, _)| *stored == value.as_str())
        .map(|(_, shown)| shown.to_string())
        .unwrap_or_else(|| if value.is_empty() { PLACEHOLDER.to_string() } else { value.clone() });

    egui::ComboBox::from_id_salt(label).selected_text(selected).width(280.0).show_ui(ui, |ui| {
        for (stored, shown) in options {
            ui.selectable_value(value, stored.to_string(), *shown);
        }
    });
    ui.end_row();
}

fn personal_fields(ui: &mut Ui, form: &mut FormState) {
    let mut cedula = form.draft.cedula.clone();
    if hinted_row(ui, "Cédula * (10 dígitos)", &mut cedula, "0000000000").changed() {
        form.set_cedula(&cedula);
    }
    text_row(ui, "Nombres Completos *", &mut form.draft.nombres_completos);
    text_row(ui, "Apellidos Completos *", &mut form.draft.apellidos_completos);
    hinted_row(ui, "Fecha Nacimiento", &mut form.draft.fecha_nacimiento, "aaaa-mm-dd");
    combo_row(ui, "Género", &mut form.draft.genero, &GENDERS);
    labeled_combo_row(ui, "Estado Civil", &mut form.draft.estado_civil, &MARITAL_STATUSES);
    text_row(ui, "Nacionalidad", &mut form.draft.nacionalidad);
    labeled_combo_row(
        ui,
        "Nivel de Instrucción",
        &mut form.draft.nivel_instruccion,
        &EDUCATION_LEVELS,
    );
    hinted_row(
        ui,
        "Condición de Salud",
        &mut form.draft.condicion_salud,
        "Ej: Diabetes, Hipertensión",
    );
}

fn disability_fields(ui: &mut Ui, form: &mut FormState) -> Option<String> {
    let mut message = None;

    labeled_combo_row(
        ui,
        "Tipo de Discapacidad *",
        &mut form.draft.discapacidad_tipo,
        &DISABILITY_TYPES,
    );
    hinted_row(ui, "Porcentaje (%) *", &mut form.draft.discapacidad_porcentaje, "0 - 100");

    ui.label("Nro. Carnet/Registro");
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut form.draft.carnet_registro).desired_width(240.0));
        if ui.button("⎘").on_hover_text("Copiar la Cédula").clicked() {
            if let Err(e) = form.copy_cedula_to_registration() {
                message = Some(e.to_string());
            }
        }
    });
    ui.end_row();

    labeled_combo_row(ui, "Discapacidad Múltiple", &mut form.draft.discapacidad_multiple, &YES_NO);
    hinted_row(
        ui,
        "Ayudas Técnicas",
        &mut form.draft.ayudas_tecnicas,
        "Ej: Silla de ruedas, Bastón",
    );

    message
}

fn socioeconomic_fields(ui: &mut Ui, form: &mut FormState) {
    ui.label("Ocupación Actual");
    let mut choice = form.occupation_choice().to_string();
    let selected = if choice.is_empty() { PLACEHOLDER.to_string() } else { choice.clone() };
    egui::ComboBox::from_id_salt("form_occupation").selected_text(selected).width(280.0).show_ui(
        ui,
        |ui| {
            for option in OCCUPATIONS {
                ui.selectable_value(&mut choice, option.to_string(), option);
            }
        },
    );
    ui.end_row();
    if choice != form.occupation_choice() {
        form.select_occupation(&choice);
    }

    if form.is_custom_occupation() {
        let mut custom = form.custom_occupation_text().to_string();
        if hinted_row(ui, "Especifique", &mut custom, "Ocupación").changed() {
            form.set_custom_occupation(&custom);
        }
    }

    hinted_row(ui, "Ingresos Mensuales ($)", &mut form.draft.ingresos_mensuales, "0.00");
    combo_row(ui, "Tipo de Vivienda", &mut form.draft.tipo_vivienda, &HOUSING_TYPES);
    labeled_combo_row(ui, "Bono de Desarrollo", &mut form.draft.bono_desarrollo, &YES_NO);
    hinted_row(
        ui,
        "Habilidades / Talentos",
        &mut form.draft.habilidades_talentos,
        "Ej: Música, Manualidades, Deporte",
    );
}

fn location_fields(ui: &mut Ui, form: &mut FormState) {
    let mut province = form.province().to_string();
    combo_row(ui, "Provincia *", &mut province, &PROVINCES);
    if province != form.province() {
        form.set_province(&province);
    }

    let mut canton = form.canton().to_string();
    if text_row(ui, "Cantón", &mut canton).changed() {
        form.set_canton(&canton);
    }

    hinted_row(ui, "Parroquia / Barrio", &mut form.draft.parroquia_barrio, "Parroquia y/o Barrio");
    text_row(ui, "Dirección Domiciliaria", &mut form.draft.direccion_domiciliaria);
    hinted_row(ui, "Referencia", &mut form.draft.referencia, "Ej: Frente al parque");

    let mut celular = form.draft.celular.clone();
    let response = hinted_row(ui, "Celular * (Inicia con 09)", &mut celular, "09XXXXXXXX");
    if response.changed() {
        form.set_celular(&celular);
    }
    if response.lost_focus() {
        form.celular_blur();
    }
    if let Some(warning) = form.celular_warning() {
        ui.label("");
        ui.colored_label(ui.visuals().warn_fg_color, warning);
        ui.end_row();
    }

    text_row(ui, "Teléfono Convencional", &mut form.draft.convencional);
    text_row(ui, "Email", &mut form.draft.email);
    hinted_row(
        ui,
        "Contacto de Emergencia",
        &mut form.draft.contacto_emergencia,
        "Nombre y Teléfono",
    );
}

fn membership_fields(ui: &mut Ui, form: &mut FormState) {
    combo_row(ui, "Estado del Socio", &mut form.draft.estado_socio, &MEMBER_STATUSES);
    combo_row(ui, "Tipo de Socio", &mut form.draft.tipo_de_socio, &MEMBER_TYPES);
    hinted_row(ui, "Fecha de Ingreso", &mut form.draft.fecha_ingreso, "aaaa-mm-dd");
    text_row(ui, "No. Registro MIES", &mut form.draft.numero_registro_mies);
    text_row(ui, "Aportes Mensuales", &mut form.draft.aportes_mensuales);

    ui.label("Comité / Comisión");
    ui.vertical(|ui| {
        let summary = if form.draft.comite_comision.is_empty() {
            "Seleccione...".to_string()
        } else {
            form.draft.comite_comision.to_string()
        };
        if ui.button(summary).clicked() {
            form.commissions_open = !form.commissions_open;
        }
        if form.commissions_open {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                for option in COMMISSION_OPTIONS {
                    let mut checked = form.draft.comite_comision.contains(option);
                    if ui.checkbox(&mut checked, option).changed() {
                        form.toggle_commission(option);
                    }
                }
                if ui.small_button("Cerrar").clicked() {
                    form.commissions_open = false;
                }
            });
        }
    });
    ui.end_row();
}

fn document_picker(ui: &mut Ui, form: &mut FormState, theme: &Theme) -> Option<String> {
    let mut message = None;

    ui.label("Cédula Digital (PDF o Imagen)");
    ui.horizontal(|ui| {
        if ui.button("📎 Click para subir").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF o Imagen", &ACCEPTED_EXTENSIONS)
                .pick_file()
            {
                match Attachment::from_path(&path) {
                    Ok(attachment) => {
                        info!("Attached {}", attachment.name);
                        form.attach(attachment);
                    }
                    Err(e) => {
                        error!("Failed to read {}: {}", path.display(), e);
                        message = Some(e.user_message());
                    }
                }
            }
        }
        ui.label(theme.muted(ui.ctx(), "PDF, PNG, JPG (MAX. 5MB)").small());
    });

    if let Some(attachment) = form.attachment() {
        ui.colored_label(theme.green(ui.ctx()), format!("Nuevo archivo: {}", attachment.name));
    } else if form.has_stored_document() {
        ui.colored_label(theme.accent(ui.ctx()), "Documento actual registrado.");
    }

    message
}
