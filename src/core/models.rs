use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use serde_json::Value;

use super::committee::CommitteeSet;

pub const STATUS_ACTIVE: &str = "Activo";

/// One association member as stored by the spreadsheet backend.
///
/// Every textual field decodes leniently: the backend hands back cells as
/// strings, numbers, booleans or null depending on how the sheet was edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Datos personales
    #[serde(deserialize_with = "lenient_string")]
    pub nombres_completos: String,
    #[serde(deserialize_with = "lenient_string")]
    pub apellidos_completos: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cedula: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fecha_nacimiento: String,
    #[serde(deserialize_with = "lenient_string")]
    pub genero: String,
    #[serde(deserialize_with = "lenient_string")]
    pub estado_civil: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nacionalidad: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nivel_instruccion: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condicion_salud: String,

    // Discapacidad
    #[serde(deserialize_with = "lenient_string")]
    pub discapacidad_tipo: String,
    #[serde(deserialize_with = "lenient_string")]
    pub discapacidad_porcentaje: String,
    #[serde(deserialize_with = "lenient_string")]
    pub carnet_registro: String,
    #[serde(deserialize_with = "lenient_string")]
    pub discapacidad_multiple: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ayudas_tecnicas: String,

    // Socioeconómico
    #[serde(deserialize_with = "lenient_string")]
    pub ocupacion_actual: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ingresos_mensuales: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tipo_vivienda: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bono_desarrollo: String,
    #[serde(deserialize_with = "lenient_string")]
    pub habilidades_talentos: String,

    // Ubicación y contacto
    #[serde(deserialize_with = "lenient_string")]
    pub provincia_canton: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parroquia_barrio: String,
    #[serde(deserialize_with = "lenient_string")]
    pub direccion_domiciliaria: String,
    #[serde(deserialize_with = "lenient_string")]
    pub referencia: String,
    #[serde(deserialize_with = "lenient_string")]
    pub celular: String,
    #[serde(deserialize_with = "lenient_string")]
    pub convencional: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,

    // Representante (solo socios dependientes)
    #[serde(deserialize_with = "lenient_string")]
    pub nombre_representante: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parentesco: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cedula_representante: String,
    #[serde(deserialize_with = "lenient_string")]
    pub contacto_emergencia: String,

    // Membresía
    #[serde(deserialize_with = "lenient_string")]
    pub estado_socio: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tipo_de_socio: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fecha_ingreso: String,
    #[serde(deserialize_with = "lenient_string")]
    pub aportes_mensuales: String,
    pub comite_comision: CommitteeSet,
    #[serde(deserialize_with = "lenient_string")]
    pub numero_registro_mies: String,
    #[serde(deserialize_with = "lenient_string")]
    pub observaciones: String,

    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub link_cedula_digital: Option<String>,

    // Only present on the wire while a create/update carries an upload.
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub file_data: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Member {
    /// Blank record with the defaults the registration form starts from.
    pub fn new_draft() -> Self {
        Self {
            nacionalidad: "Ecuatoriana".to_string(),
            estado_socio: STATUS_ACTIVE.to_string(),
            tipo_de_socio: "Adherente".to_string(),
            bono_desarrollo: "No".to_string(),
            discapacidad_porcentaje: "0".to_string(),
            discapacidad_multiple: "No".to_string(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombres_completos.trim(), self.apellidos_completos.trim())
            .trim()
            .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.estado_socio == STATUS_ACTIVE
    }

    /// Province part of `provinciaCanton`, trimmed. Empty when unknown.
    pub fn province(&self) -> &str {
        split_province_canton(&self.provincia_canton).0
    }

    pub fn canton(&self) -> &str {
        split_province_canton(&self.provincia_canton).1
    }

    /// Disability percentage, 0 when missing or unparseable.
    pub fn disability_percentage(&self) -> f64 {
        parse_leading_f64(&self.discapacidad_porcentaje).unwrap_or(0.0)
    }

    pub fn has_id(&self) -> bool {
        self.id.as_deref().map_or(false, |id| !id.trim().is_empty())
    }

    pub fn cedula_matches(&self, cedula: &str) -> bool {
        self.cedula.trim() == cedula.trim()
    }

    /// Identity used when applying an edit: id when both records carry one,
    /// cedula otherwise.
    pub fn same_record(&self, other: &Member) -> bool {
        match (&self.id, &other.id) {
            (Some(left), Some(right)) if self.has_id() && other.has_id() => {
                left.trim() == right.trim()
            }
            _ => self.cedula_matches(&other.cedula),
        }
    }

    pub fn clear_upload(&mut self) {
        self.file_data = None;
        self.file_name = None;
    }
}

/// Splits `"Province/Canton"` into its trimmed parts.
pub fn split_province_canton(value: &str) -> (&str, &str) {
    match value.split_once('/') {
        Some((province, canton)) => (province.trim(), canton.trim()),
        None => (value.trim(), ""),
    }
}

pub fn join_province_canton(province: &str, canton: &str) -> String {
    let province = province.trim();
    let canton = canton.trim();
    if canton.is_empty() {
        province.to_string()
    } else {
        format!("{province}/{canton}")
    }
}

/// Parses the longest numeric prefix of `input` (after leading whitespace),
/// so `"50%"` reads as 50. Returns `None` when no digits lead the string.
pub fn parse_leading_f64(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    let mantissa = trimmed[..end].trim_end_matches('.');

    // Exponent only counts when at least one digit follows `e[+-]`.
    let mut exponent_end = end;
    if matches!(bytes.get(exponent_end), Some(b'e') | Some(b'E')) {
        exponent_end += 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end == digits_start {
            exponent_end = end;
        }
    }

    format!("{}{}", mantissa, &trimmed[end..exponent_end])
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                integer.to_string()
            } else if let Some(integer) = number.as_u64() {
                integer.to_string()
            } else {
                match number.as_f64() {
                    Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => {
                        format!("{}", float as i64)
                    }
                    _ => number.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

pub(crate) fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let text = value_to_string(Value::deserialize(deserializer)?);
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// One bar of a dashboard chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub name: String,
    pub value: usize,
}

impl Distribution {
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self { name: name.into(), value }
    }
}

/// Snapshot of the dashboard figures for one member collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: usize,
    pub active_members: usize,
    pub avg_disability: u32,
    pub total_provinces: usize,
    pub disability_distribution: Vec<Distribution>,
    pub province_distribution: Vec<Distribution>,
    pub gender_distribution: Vec<Distribution>,
    pub education_distribution: Vec<Distribution>,
    pub status_distribution: Vec<Distribution>,
    pub type_distribution: Vec<Distribution>,
    pub percentage_ranges: Vec<Distribution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_decoding() {
        let json = r#"{
            "id": 17,
            "nombresCompletos": "Ana María",
            "apellidosCompletos": null,
            "cedula": 1712345678,
            "discapacidadPorcentaje": 45.0,
            "bonoDesarrollo": true,
            "comiteComision": "Salud, Deportes",
            "columnaExtra": "ignorada"
        }"#;

        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.id.as_deref(), Some("17"));
        assert_eq!(member.apellidos_completos, "");
        assert_eq!(member.cedula, "1712345678");
        assert_eq!(member.discapacidad_porcentaje, "45");
        assert_eq!(member.bono_desarrollo, "true");
        assert_eq!(member.comite_comision.to_string(), "Salud, Deportes");
        assert!(member.link_cedula_digital.is_none());
    }

    #[test]
    fn test_serialization_omits_transient_fields() {
        let member = Member::new_draft();
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["estadoSocio"], "Activo");
        assert_eq!(json["tipoDeSocio"], "Adherente");
        assert!(json.get("fileData").is_none());
        assert!(json.get("id").is_none());

        let mut with_upload = member.clone();
        with_upload.file_data = Some("data:application/pdf;base64,AA==".to_string());
        with_upload.file_name = Some("cedula.pdf".to_string());
        let json = serde_json::to_value(&with_upload).unwrap();
        assert_eq!(json["fileName"], "cedula.pdf");
    }

    #[test]
    fn test_province_split() {
        let member = Member { provincia_canton: " Guayas / Daule".to_string(), ..Default::default() };
        assert_eq!(member.province(), "Guayas");
        assert_eq!(member.canton(), "Daule");

        assert_eq!(split_province_canton("Loja"), ("Loja", ""));
        assert_eq!(split_province_canton("/Quito"), ("", "Quito"));
        assert_eq!(join_province_canton("Pichincha", ""), "Pichincha");
        assert_eq!(join_province_canton("Pichincha", " Quito "), "Pichincha/Quito");
    }

    #[test]
    fn test_percentage_parsing() {
        assert_eq!(parse_leading_f64("50"), Some(50.0));
        assert_eq!(parse_leading_f64(" 34.9"), Some(34.9));
        assert_eq!(parse_leading_f64("75%"), Some(75.0));
        assert_eq!(parse_leading_f64("abc"), None);
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("7.5e1"), Some(75.0));
        assert_eq!(parse_leading_f64("3E-1%"), Some(0.3));
        assert_eq!(parse_leading_f64("1e+20"), Some(1e20));
        assert_eq!(parse_leading_f64("2e"), Some(2.0));
        assert_eq!(parse_leading_f64("5e+x"), Some(5.0));
        assert_eq!(parse_leading_f64("8.e1"), Some(80.0));

        let member = Member { discapacidad_porcentaje: "n/a".to_string(), ..Default::default() };
        assert_eq!(member.disability_percentage(), 0.0);
    }

    #[test]
    fn test_exponent_cells_read_as_numbers() {
        let member = Member { discapacidad_porcentaje: "7.5e1".to_string(), ..Default::default() };
        assert_eq!(member.disability_percentage(), 75.0);

        let decoded: Member =
            serde_json::from_str(r#"{"discapacidadPorcentaje": 1e20}"#).unwrap();
        assert_eq!(decoded.disability_percentage(), 1e20);
    }

    #[test]
    fn test_full_name() {
        let member = Member {
            nombres_completos: " Ana ".to_string(),
            apellidos_completos: "Pérez".to_string(),
            ..Default::default()
        };
        assert_eq!(member.full_name(), "Ana Pérez");
        assert_eq!(Member::default().full_name(), "");
    }

    #[test]
    fn test_record_identity() {
        let with_id = Member {
            id: Some("4".to_string()),
            cedula: "0912345678".to_string(),
            ..Default::default()
        };
        let same_id = Member {
            id: Some("4".to_string()),
            cedula: "0999999999".to_string(),
            ..Default::default()
        };
        let no_id = Member { cedula: "0912345678 ".to_string(), ..Default::default() };

        assert!(with_id.same_record(&same_id));
        assert!(with_id.same_record(&no_id));
        assert!(!no_id.same_record(&same_id));
    }
}
