use crate::*;
use image::ImageFormat;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// List of image files to pixelate.
#[derive(Clone, Debug, Default)]
pub struct Source {
    paths: Vec<PathBuf>,
}

impl Source {
    /// Accepts either a single file, taken as-is, or a directory (see
    /// [`Source::from_dir`]).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            Self::from_dir(path)
        } else {
            ensure!(path.is_file(), "Couldn't find image: {}", path.display());

            Ok(Self {
                paths: vec![path.to_owned()],
            })
        }
    }

    /// Picks up every file inside `path` (non-recursively) whose extension
    /// names an image format; other files are skipped.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let dir = path.as_ref();
        let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.*");
        let paths = glob::glob(&pattern.to_string_lossy()).context("Couldn't find images")?;

        let mut images = Vec::new();

        for path in paths {
            let path = path.context("Couldn't find image")?;

            if !path.is_file() {
                continue;
            }

            if ImageFormat::from_path(&path).is_err() {
                debug!("Skipping non-image file: {}", path.display());
                continue;
            }

            images.push(path);
        }

        debug!("Found {} image(s) in {}", images.len(), dir.display());

        Ok(Self { paths: images })
    }

    pub fn extend(&mut self, other: Source) {
        self.paths.extend(other.paths);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    pub fn load(path: impl AsRef<Path>) -> Result<RgbaImage> {
        let path = path.as_ref();

        let bytes =
            fs::read(path).with_context(|| format!("Couldn't open image: {}", path.display()))?;

        decode(&bytes).with_context(|| format!("Couldn't load image: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, encode(img, OutputFormat::Png).unwrap()).unwrap();
        path
    }

    #[test]
    fn from_dir_lists_sorted_files() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::new(2, 2);

        write_png(dir.path(), "b.png", &img);
        write_png(dir.path(), "a.png", &img);
        fs::create_dir(dir.path().join("nested.d")).unwrap();

        let source = Source::from_path(dir.path()).unwrap();
        let names: Vec<_> = source
            .paths()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(vec!["a.png", "b.png"], names);
    }

    #[test]
    fn from_dir_skips_non_images() {
        let dir = tempfile::tempdir().unwrap();

        write_png(dir.path(), "a.png", &RgbaImage::new(2, 2));
        fs::write(dir.path().join("README.txt"), b"not an image").unwrap();
        fs::write(dir.path().join("notes.md"), b"# nope").unwrap();

        let source = Source::from_dir(dir.path()).unwrap();

        assert_eq!(vec![dir.path().join("a.png")], source.into_paths());
    }

    #[test]
    fn from_dir_with_glob_characters_in_name() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("shots[1]");
        fs::create_dir(&dir).unwrap();
        fs::create_dir(root.path().join("shots1")).unwrap();

        write_png(&dir, "a.png", &RgbaImage::new(1, 1));
        write_png(&root.path().join("shots1"), "b.png", &RgbaImage::new(1, 1));

        let source = Source::from_dir(&dir).unwrap();

        assert_eq!(vec![dir.join("a.png")], source.into_paths());
    }

    #[test]
    fn from_path_accepts_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "one.png", &RgbaImage::new(1, 1));

        let source = Source::from_path(&path).unwrap();

        assert_eq!(1, source.len());
        assert_eq!(vec![path.as_path()], source.paths().collect::<Vec<_>>());
    }

    #[test]
    fn from_path_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Source::from_path(dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn load_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 6]));
        let path = write_png(dir.path(), "img.png", &img);

        assert_eq!(img, Source::load(&path).unwrap());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"nope").unwrap();

        let err = Source::load(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("broken.png"));
    }
}
