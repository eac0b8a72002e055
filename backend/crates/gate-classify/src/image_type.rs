use crate::{ClassifyError, ClassifyResult};

use std::path::Path;

/// Subtype of a MIME type: the part after the last '/', lower-cased and
/// without parameters. `"image/JPEG; q=1"` -> `"jpeg"`.
pub fn mime_subtype(content_type: &str) -> String {
    let essence = content_type.split(';').next().unwrap_or_default();
    essence
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Check an upload's content type against the accepted subtypes.
///
/// Returns the matched subtype. Runs before any request is issued.
#[track_caller]
pub fn validate_image_type(content_type: &str, accepted: &[String]) -> ClassifyResult<String> {
    let subtype = mime_subtype(content_type);

    if !subtype.is_empty() && accepted.iter().any(|a| a.eq_ignore_ascii_case(&subtype)) {
        Ok(subtype)
    } else {
        Err(ClassifyError::unsupported_type(content_type))
    }
}

/// Content type for a local file, from its extension
pub fn guess_content_type(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "jfif" => "image/jfif",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}
