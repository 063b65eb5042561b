use thiserror::Error;

use super::models::{
    parse_leading_f64,
    Member,
};

pub const ID_DIGITS: usize = 10;
pub const MOBILE_PREFIX: &str = "09";

/// Reasons a member draft cannot be submitted. The display text is the
/// message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("La cédula debe tener 10 dígitos")]
    CedulaLength,

    #[error("El celular debe tener 10 dígitos y empezar con 09")]
    CelularFormat,

    #[error("El porcentaje de discapacidad debe estar entre 0 y 100")]
    PercentageRange,

    #[error("Ingrese primero la Cédula")]
    MissingCedula,
}

/// Keeps only ASCII digits and truncates to ten characters, the way the
/// cedula and celular inputs are normalized while typing.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(ID_DIGITS).collect()
}

fn is_ten_digits(value: &str) -> bool {
    value.len() == ID_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_cedula(cedula: &str) -> Result<(), ValidationError> {
    if cedula.is_empty() || is_ten_digits(cedula) {
        Ok(())
    } else {
        Err(ValidationError::CedulaLength)
    }
}

pub fn validate_celular(celular: &str) -> Result<(), ValidationError> {
    if celular.is_empty() || (is_ten_digits(celular) && celular.starts_with(MOBILE_PREFIX)) {
        Ok(())
    } else {
        Err(ValidationError::CelularFormat)
    }
}

/// Early warning used when the celular input loses focus: only the prefix is
/// checked, the length is left to submit time.
pub fn celular_prefix_warning(celular: &str) -> Option<&'static str> {
    if !celular.is_empty() && !celular.starts_with(MOBILE_PREFIX) {
        Some("El número de celular debe empezar con \"09\"")
    } else {
        None
    }
}

pub fn validate_percentage(raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    match parse_leading_f64(raw) {
        Some(pct) if (0.0..=100.0).contains(&pct) => Ok(()),
        _ => Err(ValidationError::PercentageRange),
    }
}

/// Submit-time checks. Stops at the first failure, celular first.
pub fn validate_member(member: &Member) -> Result<(), ValidationError> {
    validate_celular(&member.celular)?;
    validate_cedula(&member.cedula)?;
    validate_percentage(&member.discapacidad_porcentaje)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(cedula: &str, celular: &str) -> Member {
        Member { cedula: cedula.to_string(), celular: celular.to_string(), ..Member::new_draft() }
    }

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("09-1234 5678"), "0912345678");
        assert_eq!(normalize_digits("0912345678999"), "0912345678");
        assert_eq!(normalize_digits("abc"), "");
        assert_eq!(normalize_digits("０9１"), "9");
    }

    #[test]
    fn test_valid_member_passes() {
        assert_eq!(validate_member(&draft("0912345678", "0987654321")), Ok(()));
        assert_eq!(validate_member(&draft("", "")), Ok(()));
    }

    #[test]
    fn test_celular_rules() {
        assert_eq!(
            validate_member(&draft("0912345678", "0887654321")),
            Err(ValidationError::CelularFormat)
        );
        assert_eq!(validate_celular("098765432"), Err(ValidationError::CelularFormat));
        assert_eq!(validate_celular("09876543a1"), Err(ValidationError::CelularFormat));
        assert_eq!(
            ValidationError::CelularFormat.to_string(),
            "El celular debe tener 10 dígitos y empezar con 09"
        );
    }

    #[test]
    fn test_cedula_rules() {
        assert_eq!(validate_member(&draft("091234567", "")), Err(ValidationError::CedulaLength));
        assert_eq!(validate_cedula("09123456789"), Err(ValidationError::CedulaLength));
    }

    #[test]
    fn test_prefix_warning() {
        assert!(celular_prefix_warning("08").is_some());
        assert!(celular_prefix_warning("09").is_none());
        assert!(celular_prefix_warning("").is_none());
    }

    #[test]
    fn test_percentage_rules() {
        assert_eq!(validate_percentage(""), Ok(()));
        assert_eq!(validate_percentage("0"), Ok(()));
        assert_eq!(validate_percentage("100"), Ok(()));
        assert_eq!(validate_percentage("101"), Err(ValidationError::PercentageRange));
        assert_eq!(validate_percentage("-1"), Err(ValidationError::PercentageRange));
        assert_eq!(validate_percentage("mucho"), Err(ValidationError::PercentageRange));
        assert_eq!(validate_percentage("7.5e1"), Ok(()));
        assert_eq!(validate_percentage("1e+20"), Err(ValidationError::PercentageRange));

        let mut member = draft("", "");
        member.discapacidad_porcentaje = "150".to_string();
        assert_eq!(validate_member(&member), Err(ValidationError::PercentageRange));
    }
}
