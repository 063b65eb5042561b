use std::{
    fs,
    path::Path,
};

use base64::{
    engine::general_purpose::STANDARD,
    Engine,
};
use log::warn;

use super::{
    models::Member,
    AedisError,
};

/// Size the backend is expected to accept. Not enforced, only reported.
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "png", "jpg", "jpeg", "gif", "webp"];

/// A scanned ID document encoded for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// `data:<mime>;base64,<payload>`
    pub data: String,
    pub name: String,
}

impl Attachment {
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let name = name.into();
        if bytes.len() > MAX_ATTACHMENT_BYTES {
            warn!(
                "Attachment '{}' is {} bytes, above the {} byte limit the backend expects",
                name,
                bytes.len(),
                MAX_ATTACHMENT_BYTES
            );
        }
        let mime = mime_for(&name);
        let data = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));
        Self { data, name }
    }

    pub fn from_path(path: &Path) -> Result<Self, AedisError> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("documento")
            .to_string();
        Ok(Self::from_bytes(name, &bytes))
    }

    /// Embeds the upload into the record as the transient wire fields.
    pub fn attach_to(&self, member: &mut Member) {
        member.file_data = Some(self.data.clone());
        member.file_name = Some(self.name.clone());
    }
}

pub fn mime_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_data_uri_encoding() {
        let attachment = Attachment::from_bytes("Cedula.PDF", b"%PDF");
        assert_eq!(attachment.data, "data:application/pdf;base64,JVBERg==");
        assert_eq!(attachment.name, "Cedula.PDF");
    }

    #[test]
    fn test_mime_lookup() {
        assert_eq!(mime_for("foto.jpeg"), "image/jpeg");
        assert_eq!(mime_for("scan.png"), "image/png");
        assert_eq!(mime_for("sin_extension"), "application/octet-stream");
    }

    #[test]
    fn test_from_path_and_attach() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[1, 2, 3]).unwrap();

        let attachment = Attachment::from_path(file.path()).unwrap();
        assert!(attachment.name.ends_with(".png"));
        assert_eq!(attachment.data, "data:image/png;base64,AQID");

        let mut member = Member::new_draft();
        attachment.attach_to(&mut member);
        assert_eq!(member.file_name.as_deref(), Some(attachment.name.as_str()));
        member.clear_upload();
        assert!(member.file_data.is_none());
    }
}
