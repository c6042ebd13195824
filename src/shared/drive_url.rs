//! Google Drive share-link to direct-image URL rewriting.
//!
//! Spreadsheet editors paste whatever link the Drive UI gives them;
//! the browser needs a hot-linkable image host. Both functions are
//! total: any input comes back as *some* trimmed string, unknown
//! hosts pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const DIRECT_IMAGE_HOST: &str = "lh3.googleusercontent.com";

static FILE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/file/d/([^/]+)").unwrap());

fn direct_image_url(file_id: &str) -> String {
    format!("https://{}/d/{}", DIRECT_IMAGE_HOST, file_id)
}

/// Rewrite a Drive `/file/d/<id>` share link to the direct-image form.
/// Already-direct URLs and unrelated URLs are returned trimmed,
/// unchanged. Idempotent.
pub fn normalize_drive_image_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains(DIRECT_IMAGE_HOST) {
        return trimmed.to_string();
    }
    if let Some(caps) = FILE_ID_PATTERN.captures(trimmed) {
        return direct_image_url(&caps[1]);
    }
    trimmed.to_string()
}

/// Extended variant for collaborator avatars: additionally treats
/// `uc?`-style Drive URLs as already canonical and accepts the
/// `id=<id>` query-parameter share form.
pub fn normalize_shared_image_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains(DIRECT_IMAGE_HOST) || trimmed.contains("/uc?") {
        return trimmed.to_string();
    }
    if let Some(caps) = FILE_ID_PATTERN.captures(trimmed) {
        return direct_image_url(&caps[1]);
    }
    if let Ok(url) = Url::parse(trimmed) {
        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "id") {
            if !id.is_empty() {
                return direct_image_url(&id);
            }
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(normalize_drive_image_url(""), "");
        assert_eq!(normalize_drive_image_url("   "), "");
        assert_eq!(normalize_shared_image_url(" "), "");
    }

    #[test]
    fn test_direct_url_is_idempotent() {
        let direct = "https://lh3.googleusercontent.com/d/ABC123";
        assert_eq!(normalize_drive_image_url(direct), direct);
        assert_eq!(
            normalize_drive_image_url(&normalize_drive_image_url(direct)),
            direct
        );
    }

    #[test]
    fn test_file_share_link_is_rewritten() {
        assert_eq!(
            normalize_drive_image_url("https://drive.google.com/file/d/ABC123/view"),
            "https://lh3.googleusercontent.com/d/ABC123"
        );
    }

    #[test]
    fn test_unrelated_url_passes_through_trimmed() {
        assert_eq!(
            normalize_drive_image_url("  https://example.com/a.png  "),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_shared_variant_passes_uc_urls_through() {
        let uc = "https://drive.google.com/uc?export=view&id=ABC123";
        assert_eq!(normalize_shared_image_url(uc), uc);
    }

    #[test]
    fn test_shared_variant_accepts_id_query_parameter() {
        assert_eq!(
            normalize_shared_image_url("https://drive.google.com/open?id=XYZ789"),
            "https://lh3.googleusercontent.com/d/XYZ789"
        );
    }

    #[test]
    fn test_shared_variant_rewrites_file_links_too() {
        assert_eq!(
            normalize_shared_image_url("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
            "https://lh3.googleusercontent.com/d/ABC123"
        );
    }
}
