use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by file name. The sort order
/// is the slide order.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read an entry of {}", dir.display()))?
            .path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in {}", dir.display());
    }
    log::info!("found {} images in {}", paths.len(), dir.display());
    Ok(paths)
}

/// Reads the EXIF orientation tag of a JPEG. 1 (upright) when absent.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            log::warn!("could not read EXIF data of {}: {}", path.display(), e);
            1
        }
    }
}

/// Loads an image, turns it upright according to its EXIF orientation and
/// uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = match extension.as_str() {
        "jpg" | "jpeg" => exif_orientation(path, &bytes),
        _ => 1,
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", path.display(), e))?;

    // 3 = 180°, 6 = 90° clockwise, 8 = 90° counter-clockwise. Mirrored
    // orientations are left as they are.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("{}: applied EXIF orientation {}", path.display(), orientation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.jpeg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let names: Vec<String> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.jpeg"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"").unwrap();
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_sorted_image_paths(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn garbage_exif_defaults_to_upright() {
        assert_eq!(exif_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
