//! Read-only presentation of a single member: the printable record card.

use std::sync::OnceLock;

use chrono::{
    DateTime,
    NaiveDate,
};
use regex::Regex;

use super::{
    catalog::{
        label_for,
        DISABILITY_TYPES,
        EDUCATION_LEVELS,
        MARITAL_STATUSES,
        YES_NO,
    },
    models::Member,
};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl RecordSection {
    fn new(title: &'static str) -> Self {
        Self { title, fields: Vec::new() }
    }

    fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|(name, _)| *name == label).map(|(_, value)| value.as_str())
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    raw.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// `dd/mm/yyyy` for ISO dates, `N/A` when empty, the raw text otherwise.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None if raw.trim().is_empty() => NOT_AVAILABLE.to_string(),
        None => raw.to_string(),
    }
}

/// `yyyy-mm-dd` form of a stored date, used to seed the date inputs.
pub fn input_date(raw: &str) -> String {
    parse_date(raw).map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn drive_file_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"drive\.google\.com/file/d/([\w-]+)(?:/|$|\?)").expect("valid drive regex")
    })
}

/// Rewrites a Drive share link into a direct view link; other links pass through.
pub fn drive_direct_link(link: &str) -> String {
    match drive_file_regex().captures(link) {
        Some(captures) => format!("https://drive.google.com/uc?export=view&id={}", &captures[1]),
        None => link.to_string(),
    }
}

pub fn is_pdf_link(link: &str) -> bool {
    link.to_lowercase().contains(".pdf")
}

pub fn record_sections(member: &Member) -> Vec<RecordSection> {
    let multiple = if member.discapacidad_multiple == "Si" { "Sí" } else { "No" };
    let income = if member.ingresos_mensuales.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("${}", member.ingresos_mensuales.trim())
    };

    let mut sections = vec![
        RecordSection::new("Estado")
            .field("Estado", or_placeholder(&member.estado_socio, "Indefinido"))
            .field("Tipo de Socio", or_placeholder(&member.tipo_de_socio, "Adherente"))
            .field("Fecha Ingreso", display_date(&member.fecha_ingreso)),
        RecordSection::new("Datos Personales")
            .field("Apellidos", member.apellidos_completos.clone())
            .field("Nombres", member.nombres_completos.clone())
            .field("Cédula", member.cedula.clone())
            .field("Nacionalidad", member.nacionalidad.clone())
            .field("Fecha Nacimiento", display_date(&member.fecha_nacimiento))
            .field("Género", member.genero.clone())
            .field("Estado Civil", label_for(&MARITAL_STATUSES, &member.estado_civil))
            .field("Nivel Instrucción", label_for(&EDUCATION_LEVELS, &member.nivel_instruccion))
            .field("Condición Salud", or_placeholder(&member.condicion_salud, NOT_AVAILABLE)),
    ];

    if !member.nombre_representante.trim().is_empty() {
        sections.push(
            RecordSection::new("Representante")
                .field("Nombre", member.nombre_representante.clone())
                .field("Parentesco", member.parentesco.clone())
                .field(
                    "Cédula del Representante",
                    or_placeholder(&member.cedula_representante, "No registrada"),
                )
                .field(
                    "Contacto Emergencia",
                    or_placeholder(&member.contacto_emergencia, "No registrado"),
                ),
        );
    }

    sections.push(
        RecordSection::new("Socioeconómico")
            .field("Ocupación Actual", or_placeholder(&member.ocupacion_actual, "No registrada"))
            .field("Ingresos Mensuales", income)
            .field("Bono Desarrollo", label_for(&YES_NO, &member.bono_desarrollo))
            .field("Tipo Vivienda", member.tipo_vivienda.clone())
            .field("Habilidades / Talentos", or_placeholder(&member.habilidades_talentos, "Ninguna")),
    );
    sections.push(
        RecordSection::new("Discapacidad")
            .field("Tipo Discapacidad", label_for(&DISABILITY_TYPES, &member.discapacidad_tipo))
            .field("Porcentaje", format!("{}%", member.discapacidad_porcentaje.trim()))
            .field("Nro. Carnet/Registro", or_placeholder(&member.carnet_registro, "S/N"))
            .field("Ayudas Técnicas", or_placeholder(&member.ayudas_tecnicas, "Ninguna"))
            .field("Discapacidad Múltiple", multiple),
    );
    sections.push(
        RecordSection::new("Ubicación y Contacto")
            .field("Provincia", member.provincia_canton.clone())
            .field("Cantón / Parroquia", member.parroquia_barrio.clone())
            .field("Celular", member.celular.clone())
            .field("Convencional", or_placeholder(&member.convencional, NOT_AVAILABLE))
            .field("Dirección", member.direccion_domiciliaria.clone())
            .field("Referencia", member.referencia.clone())
            .field("Email", member.email.clone()),
    );
    sections.push(
        RecordSection::new("Información Adicional")
            .field("Comisión", member.comite_comision.to_string())
            .field("Reg. MIES", or_placeholder(&member.numero_registro_mies, NOT_AVAILABLE))
            .field("Aportes Mensuales", or_placeholder(&member.aportes_mensuales, NOT_AVAILABLE))
            .field("Observaciones", member.observaciones.clone()),
    );

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_display() {
        assert_eq!(display_date("2021-03-04"), "04/03/2021");
        assert_eq!(display_date("1990-05-12T05:00:00.000Z"), "12/05/1990");
        assert_eq!(display_date(""), "N/A");
        assert_eq!(display_date("mayo 2020"), "mayo 2020");
        assert_eq!(input_date("1990-05-12T05:00:00.000Z"), "1990-05-12");
        assert_eq!(input_date("ayer"), "");
    }

    #[test]
    fn test_drive_links() {
        assert_eq!(
            drive_direct_link("https://drive.google.com/file/d/1AbC-x_9/view?usp=sharing"),
            "https://drive.google.com/uc?export=view&id=1AbC-x_9"
        );
        assert_eq!(
            drive_direct_link("https://drive.google.com/file/d/XYZ"),
            "https://drive.google.com/uc?export=view&id=XYZ"
        );
        assert_eq!(drive_direct_link("https://example.org/a.png"), "https://example.org/a.png");
        assert!(is_pdf_link("https://host/Cedula.PDF"));
        assert!(!is_pdf_link("https://host/cedula.png"));
    }

    #[test]
    fn test_sections_and_placeholders() {
        let member = Member {
            nombres_completos: "Ana".to_string(),
            discapacidad_tipo: "Fisica".to_string(),
            discapacidad_porcentaje: "40".to_string(),
            discapacidad_multiple: "Si".to_string(),
            ingresos_mensuales: "450".to_string(),
            ..Member::new_draft()
        };

        let sections = record_sections(&member);
        assert!(sections.iter().all(|s| s.title != "Representante"));

        let find = |title: &str| sections.iter().find(|s| s.title == title).unwrap();
        assert_eq!(find("Estado").value("Fecha Ingreso"), Some("N/A"));
        assert_eq!(find("Discapacidad").value("Tipo Discapacidad"), Some("Física"));
        assert_eq!(find("Discapacidad").value("Porcentaje"), Some("40%"));
        assert_eq!(find("Discapacidad").value("Nro. Carnet/Registro"), Some("S/N"));
        assert_eq!(find("Discapacidad").value("Discapacidad Múltiple"), Some("Sí"));
        assert_eq!(find("Socioeconómico").value("Ingresos Mensuales"), Some("$450"));
        assert_eq!(find("Socioeconómico").value("Habilidades / Talentos"), Some("Ninguna"));

        let dependent = Member { nombre_representante: "Rosa".to_string(), ..member };
        let sections = record_sections(&dependent);
        let representative = sections.iter().find(|s| s.title == "Representante").unwrap();
        assert_eq!(representative.value("Cédula del Representante"), Some("No registrada"));
    }
}
