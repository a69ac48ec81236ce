use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{CarouselError, Result};
use crate::item::ImageItem;

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| CarouselError::io(dir_path, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CarouselError::io(dir_path, e))?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_supported_image(path: &Path) -> bool {
    matches!(
        lowercase_extension(path).as_str(),
        "png" | "jpg" | "jpeg" | "bmp" | "gif"
    )
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

#[derive(Debug, Default, PartialEq)]
struct ExifInfo {
    orientation: u16,
    description: Option<String>,
}

// EXIF is only read reliably from JPEG containers
fn read_exif(image_path: &Path, file_bytes: &[u8]) -> ExifInfo {
    let mut info = ExifInfo {
        orientation: 1, // Default: no rotation
        description: None,
    };

    let extension = lowercase_extension(image_path);
    if extension != "jpg" && extension != "jpeg" {
        return info;
    }

    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&orientation) = values.first() {
                        info.orientation = orientation;
                    }
                }
            }
            if let Some(field) = exif.get_field(Tag::ImageDescription, In::PRIMARY) {
                if let Value::Ascii(values) = &field.value {
                    info.description = values
                        .first()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned());
                }
            }
        }
        Err(e) => {
            // Non-critical: proceed without rotation or caption
            warn!(path = ?image_path, error = %e, "could not read EXIF data");
        }
    }
    info
}

/// Describes one picture; the EXIF image description becomes the caption.
pub fn describe_image(image_path: &Path) -> Result<ImageItem> {
    let file_bytes = fs::read(image_path).map_err(|e| CarouselError::io(image_path, e))?;
    let exif = read_exif(image_path, &file_bytes);
    Ok(ImageItem::from_path(image_path).with_caption(exif.description))
}

/// Scans `dir_path` for pictures. Unreadable files are skipped; an empty
/// directory yields an empty gallery.
pub fn load_gallery(dir_path: &Path) -> Result<Vec<ImageItem>> {
    let mut items = Vec::new();
    for path in load_sorted_image_paths(dir_path)? {
        match describe_image(&path) {
            Ok(item) => items.push(item),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }
    if items.is_empty() {
        warn!(dir = ?dir_path, "no images found");
    }
    Ok(items)
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    item: &ImageItem,
) -> Result<Texture2D> {
    let image_path = item.source.as_path();
    let file_bytes = fs::read(image_path).map_err(|e| CarouselError::io(image_path, e))?;
    let exif = read_exif(image_path, &file_bytes);

    // Provide extension hint for loading from memory
    let extension = lowercase_extension(image_path);
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| CarouselError::ImageDecode {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        })?;

    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored here.
    match exif.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if exif.orientation != 1 {
        debug!(path = ?image_path, orientation = exif.orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| CarouselError::Texture {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        })?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn keeps_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "nail-2.jpg", b"");
        touch(dir.path(), "nail-1.PNG", b"");
        touch(dir.path(), "notes.txt", b"");
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["nail-1.PNG", "nail-2.jpg"]);
    }

    #[test]
    fn empty_directory_gives_empty_gallery() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_gallery(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/no/such/gallery")).unwrap_err();
        assert!(matches!(err, CarouselError::Io { .. }));
    }

    #[test]
    fn unreadable_exif_leaves_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(dir.path(), "glitter_accent.jpg", b"not really a jpeg");
        let item = describe_image(&path).unwrap();
        assert_eq!(item.alt_text, "glitter accent");
        assert_eq!(item.caption, None);
        assert_eq!(
            read_exif(&path, b"not really a jpeg"),
            ExifInfo { orientation: 1, description: None }
        );
    }

    #[test]
    fn gallery_describes_each_picture() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.png", b"");
        touch(dir.path(), "a.gif", b"");
        let items = load_gallery(dir.path()).unwrap();
        let alts: Vec<_> = items.iter().map(|i| i.alt_text.as_str()).collect();
        assert_eq!(alts, ["a", "b"]);
    }
}
