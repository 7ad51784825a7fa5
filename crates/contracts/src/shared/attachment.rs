use serde::{Deserialize, Serialize};

/// Kind of an uploaded file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    Pdf,
    File,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

impl AttachmentType {
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentType::Image
        } else if ext == "pdf" {
            AttachmentType::Pdf
        } else {
            AttachmentType::File
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentType::Image => "image",
            AttachmentType::Pdf => "pdf",
            AttachmentType::File => "file",
        }
    }
}

/// Public URL of a stored upload
pub fn media_url(file_name: &str) -> String {
    format!("/media/{}", file_name)
}

/// Keeps only the final path component and replaces characters that are unsafe in file names.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_type() {
        assert_eq!(AttachmentType::from_file_name("nic.JPG"), AttachmentType::Image);
        assert_eq!(AttachmentType::from_file_name("scan.webp"), AttachmentType::Image);
        assert_eq!(AttachmentType::from_file_name("contract.pdf"), AttachmentType::Pdf);
        assert_eq!(AttachmentType::from_file_name("notes.docx"), AttachmentType::File);
        assert_eq!(AttachmentType::from_file_name("README"), AttachmentType::File);
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\docs\\my scan.png"), "my_scan.png");
        assert_eq!(sanitize_file_name(".."), "upload");
    }
}
