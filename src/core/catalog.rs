//! Fixed option lists offered by the member form.

pub const COMMISSION_OPTIONS: [&str; 9] = [
    "Presidente",
    "Presidente Provincial",
    "Deportes",
    "Salud",
    "Empleo",
    "Asuntos Sociales",
    "Ministerios",
    "Conadis",
    "Asuntos Legales",
];

pub const PROVINCES: [&str; 24] = [
    "Azuay",
    "Bolívar",
    "Cañar",
    "Carchi",
    "Chimborazo",
    "Cotopaxi",
    "El Oro",
    "Esmeraldas",
    "Galápagos",
    "Guayas",
    "Imbabura",
    "Loja",
    "Los Ríos",
    "Manabí",
    "Morona Santiago",
    "Napo",
    "Orellana",
    "Pastaza",
    "Pichincha",
    "Santa Elena",
    "Santo Domingo de los Tsáchilas",
    "Sucumbíos",
    "Tungurahua",
    "Zamora Chinchipe",
];

/// Sentinel occupation that switches the form to free text.
pub const OTHER_OCCUPATION: &str = "Otra";

pub const OCCUPATIONS: [&str; 9] = [
    "Estudiante",
    "Empleado Privado",
    "Empleado Público",
    "Comerciante",
    "Agricultor",
    "Jubilado",
    "Desempleado",
    "Hogar",
    OTHER_OCCUPATION,
];

pub const HOUSING_TYPES: [&str; 4] = ["Propia", "Arrendada", "Prestada / Familiar", "Anticresis"];

pub const GENDERS: [&str; 3] = ["Masculino", "Femenino", "LGBTIQ+"];

/// (stored value, label)
pub const MARITAL_STATUSES: [(&str, &str); 5] = [
    ("Soltero", "Soltero/a"),
    ("Casado", "Casado/a"),
    ("Divorciado", "Divorciado/a"),
    ("Viudo", "Viudo/a"),
    ("Union Libre", "Unión Libre"),
];

pub const EDUCATION_LEVELS: [(&str, &str); 5] = [
    ("Primaria", "Primaria"),
    ("Secundaria", "Secundaria"),
    ("Tercer Nivel", "Tercer Nivel"),
    ("Cuarto Nivel", "Cuarto Nivel"),
    ("Sin Instruccion", "Sin Instrucción"),
];

pub const DISABILITY_TYPES: [(&str, &str); 6] = [
    ("Fisica", "Física"),
    ("Auditiva", "Auditiva"),
    ("Visual", "Visual"),
    ("Intelectual", "Intelectual"),
    ("Psicosocial", "Psicosocial"),
    ("Lenguaje", "Lenguaje"),
];

pub const YES_NO: [(&str, &str); 2] = [("No", "No"), ("Si", "Sí")];

pub const MEMBER_STATUSES: [&str; 2] = ["Activo", "Inactivo"];

pub const MEMBER_TYPES: [&str; 3] = ["Fundador", "Adherente", "Honorario"];

pub fn is_standard_occupation(value: &str) -> bool {
    OCCUPATIONS.contains(&value)
}

/// Label for a stored value in a (value, label) catalog, or the value itself.
pub fn label_for<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options.iter().find(|(stored, _)| *stored == value).map(|(_, label)| *label).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupation_catalog() {
        assert!(is_standard_occupation("Jubilado"));
        assert!(is_standard_occupation(OTHER_OCCUPATION));
        assert!(!is_standard_occupation("Artesano"));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for(&DISABILITY_TYPES, "Fisica"), "Física");
        assert_eq!(label_for(&YES_NO, "Si"), "Sí");
        assert_eq!(label_for(&MARITAL_STATUSES, "Otro"), "Otro");
    }
}
