use super::error::FilterError;
use std::path::{Path, PathBuf};

/// Splits the final path component into `(name, ext)`.
///
/// Exactly one `.` must be present in the file name; directory components
/// are left alone and may contain dots.
pub fn split_file_name(path: &Path) -> Result<(&str, &str), FilterError> {
    let invalid = || FilterError::InvalidFileName(path.display().to_string());

    let file_name = path.file_name().and_then(|f| f.to_str()).ok_or_else(invalid)?;
    let mut parts = file_name.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(ext), None) => Ok((name, ext)),
        _ => Err(invalid()),
    }
}

fn sibling(path: &Path, file_name: String) -> PathBuf {
    match path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// `photo.png` -> `photo_g.png`
pub fn greyscale_output(path: &Path) -> Result<PathBuf, FilterError> {
    let (name, ext) = split_file_name(path)?;
    Ok(sibling(path, format!("{}_g.{}", name, ext)))
}

/// `photo.png` -> `photo.txt`
pub fn text_output(path: &Path) -> Result<PathBuf, FilterError> {
    let (name, _) = split_file_name(path)?;
    Ok(sibling(path, format!("{}.txt", name)))
}

/// `photo.txt` -> `photo_filtered.jpg`, whatever the input extension was.
pub fn restored_output(path: &Path) -> Result<PathBuf, FilterError> {
    let (name, _) = split_file_name(path)?;
    Ok(sibling(path, format!("{}_filtered.jpg", name)))
}

/// `photo.txt` -> `photo_f.txt`
pub fn filtered_text_output(path: &Path) -> Result<PathBuf, FilterError> {
    let (name, _) = split_file_name(path)?;
    Ok(sibling(path, format!("{}_f.txt", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_output_names() {
        let png = Path::new("photo.png");
        assert_eq!(greyscale_output(png).unwrap(), PathBuf::from("photo_g.png"));
        assert_eq!(text_output(png).unwrap(), PathBuf::from("photo.txt"));

        let txt = Path::new("photo.txt");
        assert_eq!(
            restored_output(txt).unwrap(),
            PathBuf::from("photo_filtered.jpg")
        );
        assert_eq!(
            filtered_text_output(txt).unwrap(),
            PathBuf::from("photo_f.txt")
        );
    }

    #[test]
    fn keeps_directory_components() {
        let path = Path::new("shots.2024/photo.png");
        assert_eq!(
            greyscale_output(path).unwrap(),
            Path::new("shots.2024").join("photo_g.png")
        );
    }

    #[test]
    fn rejects_names_without_exactly_one_dot() {
        for name in ["photo", "photo.tar.gz", "a.b.c.png"] {
            let err = split_file_name(Path::new(name)).unwrap_err();
            assert!(matches!(err, FilterError::InvalidFileName(_)), "{}", name);
        }
    }

    #[test]
    fn restored_output_ignores_input_extension() {
        assert_eq!(
            restored_output(Path::new("grid.dat")).unwrap(),
            PathBuf::from("grid_filtered.jpg")
        );
    }
}
