//! Archive Export Service
//!
//! Packages the current markup as a one-entry ZIP and hands it to the browser
//! as a download. Packaging is pure and deterministic; only the download
//! trigger touches the DOM.

use std::io::{Cursor, Write};

use thiserror::Error;
use wasm_bindgen::JsCast;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the single entry inside the archive.
pub const ARCHIVE_ENTRY_NAME: &str = "index.html";
/// Filename the browser saves the archive under.
pub const DOWNLOAD_FILE_NAME: &str = "website.zip";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The buffer is empty or whitespace-only.
    #[error("Nothing to download!")]
    NothingToExport,
    /// Archive construction or the download handoff failed.
    #[error("Failed to create zip file.")]
    PackagingFailed,
}

/// Serializes `content` into a ZIP archive holding a single `index.html`
/// entry with the content's UTF-8 bytes. Equal content yields byte-identical
/// archives (the crate is built without timestamps).
pub fn package_site(content: &str) -> Result<Vec<u8>, ExportError> {
    if content.trim().is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    writer
        .start_file(ARCHIVE_ENTRY_NAME, options)
        .map_err(|_| ExportError::PackagingFailed)?;
    writer
        .write_all(content.as_bytes())
        .map_err(|_| ExportError::PackagingFailed)?;
    let cursor = writer.finish().map_err(|_| ExportError::PackagingFailed)?;
    Ok(cursor.into_inner())
}

/// Packages `content` and triggers a download of the resulting archive.
/// The download fires only after serialization completed, so a packaging
/// failure never leaves a partial file behind.
pub fn export(content: &str) -> Result<(), ExportError> {
    let bytes = package_site(content)?;
    trigger_download(&bytes)
}

/// Hands the archive bytes to the browser as `website.zip`. The temporary
/// object URL is revoked right after the click, on every path.
fn trigger_download(bytes: &[u8]) -> Result<(), ExportError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(array.as_ref());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/zip");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| ExportError::PackagingFailed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| ExportError::PackagingFailed)?;

    let result = click_download_anchor(&url);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn click_download_anchor(url: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::PackagingFailed)?;
    let anchor = document
        .create_element("a")
        .map_err(|_| ExportError::PackagingFailed)?;
    anchor
        .set_attribute("href", url)
        .map_err(|_| ExportError::PackagingFailed)?;
    anchor
        .set_attribute("download", DOWNLOAD_FILE_NAME)
        .map_err(|_| ExportError::PackagingFailed)?;
    let body = document.body().ok_or(ExportError::PackagingFailed)?;
    body.append_child(&anchor)
        .map_err(|_| ExportError::PackagingFailed)?;
    if let Some(html_anchor) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        html_anchor.click();
    }
    let _ = body.remove_child(&anchor);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_single_entry(bytes: Vec<u8>) -> (String, String) {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_index(0).expect("entry readable");
        let name = entry.name().to_string();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).expect("utf-8 entry");
        (name, contents)
    }

    // ========================================================================
    // package_site Tests
    // ========================================================================

    #[test]
    fn test_package_site_single_index_html_entry() {
        let bytes = package_site("<h1>Hi</h1>").expect("packaging succeeds");
        let (name, contents) = read_single_entry(bytes);
        assert_eq!(name, ARCHIVE_ENTRY_NAME);
        assert_eq!(contents, "<h1>Hi</h1>");
    }

    #[test]
    fn test_package_site_preserves_content_exactly() {
        let content = "<!DOCTYPE html>\n<html>\n<body>\n  <p>héllo — ✓</p>\n</body>\n</html>\n";
        let bytes = package_site(content).expect("packaging succeeds");
        let (_, contents) = read_single_entry(bytes);
        assert_eq!(contents, content);
    }

    #[test]
    fn test_package_site_is_deterministic() {
        let first = package_site("<h1>Hi</h1>").expect("packaging succeeds");
        let second = package_site("<h1>Hi</h1>").expect("packaging succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn test_package_site_rejects_empty_content() {
        assert_eq!(package_site(""), Err(ExportError::NothingToExport));
    }

    #[test]
    fn test_package_site_rejects_whitespace_only_content() {
        assert_eq!(package_site("  \n\t  "), Err(ExportError::NothingToExport));
    }

    #[test]
    fn test_export_error_messages() {
        assert_eq!(
            ExportError::NothingToExport.to_string(),
            "Nothing to download!"
        );
        assert_eq!(
            ExportError::PackagingFailed.to_string(),
            "Failed to create zip file."
        );
    }
}
