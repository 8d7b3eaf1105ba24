//! Supported image extensions
//!
//! Matching is case-sensitive and includes the leading dot, so `photo.JPG`
//! is not picked up.

/// Extensions (with leading dot) of the image files the scanner visits
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Extension of the final path element, from its last `.` onwards
///
/// Returns `None` when the final element has no dot.
pub fn extension_of(path: &str) -> Option<&str> {
    let name_start = path
        .rfind(std::path::is_separator)
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let name = &path[name_start..];

    name.rfind('.').map(|dot| &name[dot..])
}

/// Whether `path` names a supported image file
///
/// Pure string inspection: the filesystem is never touched.
pub fn is_supported_image_ext(path: &str) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext))
}
