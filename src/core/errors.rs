use thiserror::Error;

use super::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AedisError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Network { status: u16, url: String },

    #[error("Remote store reported a failure: {0}")]
    Remote(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No member with cedula '{cedula}' in the current collection")]
    MemberNotFound { cedula: String },

    #[error("AedisError: {0}")]
    Custom(String),
}

impl AedisError {
    /// Text shown to the user in the blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            AedisError::Io(_) => "No se pudo leer o escribir el archivo.".to_string(),
            AedisError::Json(_) => "La respuesta del servidor no es válida.".to_string(),
            AedisError::Reqwest(_) | AedisError::Network { .. } => {
                "Error de red al comunicarse con el servidor de socios.".to_string()
            }
            AedisError::Remote(message) => {
                if message.is_empty() {
                    "El servidor rechazó la operación.".to_string()
                } else {
                    format!("El servidor rechazó la operación: {message}")
                }
            }
            AedisError::Validation(error) => error.to_string(),
            AedisError::MemberNotFound { .. } => {
                "No se pudo identificar al socio para eliminar (Error de coincidencia de Cédula)."
                    .to_string()
            }
            AedisError::Custom(message) => message.clone(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AedisError::Reqwest(_) | AedisError::Network { .. })
    }
}

impl From<std::io::Error> for AedisError {
    fn from(error: std::io::Error) -> Self {
        AedisError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AedisError {
    fn from(error: reqwest::Error) -> Self {
        AedisError::Reqwest(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_localized() {
        let network = AedisError::Network { status: 500, url: "http://x".to_string() };
        assert!(network.is_network());
        assert_eq!(
            network.user_message(),
            "Error de red al comunicarse con el servidor de socios."
        );

        let remote = AedisError::Remote("hoja bloqueada".to_string());
        assert!(!remote.is_network());
        assert!(remote.user_message().ends_with("hoja bloqueada"));

        let missing = AedisError::MemberNotFound { cedula: "0912345678".to_string() };
        assert!(missing.user_message().contains("Cédula"));
        assert!(missing.to_string().contains("0912345678"));
    }

    #[test]
    fn test_validation_error_passes_message_through() {
        let error: AedisError = ValidationError::CedulaLength.into();
        assert_eq!(error.user_message(), "La cédula debe tener 10 dígitos");
    }
}
