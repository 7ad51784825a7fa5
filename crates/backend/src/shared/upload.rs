use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use contracts::shared::attachment::sanitize_file_name;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::{ServiceError, ServiceResult};

static MEDIA_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Creates the media directory and remembers it for later uploads
pub fn initialize_media_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    MEDIA_DIR
        .set(dir.to_path_buf())
        .map_err(|_| anyhow::anyhow!("Media directory already initialized"))?;
    tracing::info!("Media directory: {}", dir.display());
    Ok(())
}

pub(crate) fn media_dir() -> anyhow::Result<&'static PathBuf> {
    MEDIA_DIR
        .get()
        .ok_or_else(|| anyhow::anyhow!("Media directory has not been initialized"))
}

/// Request body cap for the routes that accept uploads
pub const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

fn multipart_error(e: MultipartError, message: String) -> ServiceError {
    tracing::warn!("{}: {}", message, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::TooLarge("حجم فایل بیشتر از ۲۰ مگابایت است".to_string())
    } else {
        ServiceError::Validation(message)
    }
}

#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Text fields and at most one file of a multipart form
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Reads every part; the part named `file_field` is taken as the file.
    pub async fn read(mut multipart: Multipart, file_field: &str) -> ServiceResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "فرم ارسال شده نامعتبر است".to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == file_field {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "فایل ارسال شده نامعتبر است".to_string()))?;
                if !bytes.is_empty() {
                    form.file = Some(UploadedFile {
                        original_name,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, format!("فیلد {} نامعتبر است", name)))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Unique stored name: `<uuid>_<sanitized original>`
pub fn stored_file_name(original_name: &str) -> String {
    format!("{}_{}", uuid::Uuid::new_v4().simple(), sanitize_file_name(original_name))
}

/// Writes the file into the media directory and returns its stored name
pub async fn save_upload(file: &UploadedFile) -> anyhow::Result<String> {
    let name = stored_file_name(&file.original_name);
    let path = media_dir()?.join(&name);
    tokio::fs::write(&path, &file.bytes).await?;
    tracing::info!("Stored upload {} ({} bytes)", name, file.bytes.len());
    Ok(name)
}

/// Saves the optional file of a form
pub async fn save_optional(file: Option<&UploadedFile>) -> ServiceResult<Option<String>> {
    match file {
        Some(f) => Ok(Some(save_upload(f).await?)),
        None => Ok(None),
    }
}

/// Deletes a stored upload; a file that is already gone is not an error
pub async fn remove_upload(name: &str) {
    let path = match media_dir() {
        Ok(dir) => dir.join(sanitize_file_name(name)),
        Err(e) => {
            tracing::warn!("Cannot remove upload {}: {:#}", name, e);
            return;
        }
    };
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::info!("Removed upload {}", name),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Cannot remove upload {}: {}", name, e),
    }
}

/// Swaps the stored file of a record once the write went through:
/// on success the replaced file goes, on failure the fresh one does.
pub async fn settle_replacement<T, E>(
    result: Result<T, E>,
    fresh: Option<&str>,
    replaced: Option<&str>,
) -> Result<T, E> {
    match (&result, fresh) {
        (Ok(_), Some(_)) => {
            if let Some(old) = replaced {
                remove_upload(old).await;
            }
        }
        (Err(_), Some(new)) => remove_upload(new).await,
        (_, None) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_file_name_is_unique_and_safe() {
        let a = stored_file_name("../nic scan.png");
        let b = stored_file_name("../nic scan.png");
        assert_ne!(a, b);
        assert!(a.ends_with("_nic_scan.png"));
        assert!(!a.contains('/'));
    }

    #[test]
    fn test_form_text_helpers() {
        let mut form = MultipartForm::default();
        form.fields.insert("name".into(), "احمد".into());
        form.fields.insert("blank".into(), "  ".into());
        assert_eq!(form.text("name"), "احمد");
        assert_eq!(form.text("missing"), "");
        assert_eq!(form.opt_text("blank"), None);
    }

    #[test]
    fn test_failed_write_drops_the_fresh_file_and_keeps_the_old() {
        crate::shared::test_support::run(async {
            let old = save_upload(&UploadedFile {
                original_name: "old.png".into(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap();
            let new = save_upload(&UploadedFile {
                original_name: "new.png".into(),
                bytes: vec![4, 5],
            })
            .await
            .unwrap();
            let dir = media_dir().unwrap();

            let failed: Result<(), &str> =
                settle_replacement(Err("db down"), Some(&new), Some(&old)).await;
            assert!(failed.is_err());
            assert!(dir.join(&old).exists());
            assert!(!dir.join(&new).exists());

            let newer = save_upload(&UploadedFile {
                original_name: "newer.png".into(),
                bytes: vec![6],
            })
            .await
            .unwrap();
            let ok: Result<u8, &str> = settle_replacement(Ok(1), Some(&newer), Some(&old)).await;
            assert_eq!(ok, Ok(1));
            assert!(!dir.join(&old).exists());
            assert!(dir.join(&newer).exists());
        });
    }

    #[test]
    fn test_removing_a_missing_upload_is_quiet() {
        crate::shared::test_support::run(async {
            remove_upload("never_stored.png").await;
        });
    }
}
