use crate::WallpaperError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// The working directories downloaded images are kept in between fetching and composing.
/// Each run starts from empty directories, so nothing is reused from a previous run.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> ImageStore {
        ImageStore { root: root.into() }
    }

    pub fn apod_dir(&self) -> PathBuf {
        self.root.join("APOD")
    }

    pub fn rover_dir(&self) -> PathBuf {
        self.root.join("mars_pics")
    }

    /// Delete anything left over from a previous run and recreate the working directories
    pub fn reset(&self) -> Result<(), WallpaperError> {
        for dir in [self.apod_dir(), self.rover_dir()] {
            match std::fs::remove_dir_all(&dir) {
                Ok(()) => log::debug!("cleared {}", dir.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Save the picture of the day, named after its date
    pub fn save_apod(&self, date: NaiveDate, bytes: &[u8]) -> Result<PathBuf, WallpaperError> {
        let path = self.apod_dir().join(format!("{}.jpg", date.format("%Y-%m-%d")));
        write(&path, bytes)?;
        Ok(path)
    }

    /// Save a rover photo. `index` counts from 1 within the sol.
    pub fn save_rover_photo(
        &self,
        sol: u32,
        camera: &str,
        index: usize,
        bytes: &[u8],
    ) -> Result<PathBuf, WallpaperError> {
        let path = self
            .rover_dir()
            .join(format!("sol_{sol}-{camera}_{index}.jpg"));
        write(&path, bytes)?;
        Ok(path)
    }

    /// All downloaded rover photos, sorted by file name
    pub fn rover_photos(&self) -> Result<Vec<PathBuf>, WallpaperError> {
        let mut photos: Vec<PathBuf> = std::fs::read_dir(self.rover_dir())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_jpeg_name(path))
            .collect();
        photos.sort();
        Ok(photos)
    }

    /// The downloaded rover photo with the largest file size, which tends to be the most
    /// detailed one. The first photo wins a tie.
    pub fn largest_rover_photo(&self) -> Result<PathBuf, WallpaperError> {
        let mut largest: Option<(u64, PathBuf)> = None;
        for path in self.rover_photos()? {
            let size = std::fs::metadata(&path)?.len();
            if largest.as_ref().map(|(best, _)| size > *best).unwrap_or(true) {
                largest = Some((size, path));
            }
        }

        largest
            .map(|(_, path)| path)
            .ok_or_else(|| WallpaperError::NoImages(self.rover_dir()))
    }
}

fn write(path: &Path, bytes: &[u8]) -> Result<(), WallpaperError> {
    std::fs::write(path, bytes)?;
    log::info!("saved {}", path.display());
    Ok(())
}

fn is_jpeg_name(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_previous_runs() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        store.reset().unwrap();
        store.save_rover_photo(10, "MAST", 1, b"old").unwrap();

        store.reset().unwrap();
        assert!(store.rover_dir().is_dir());
        assert!(store.apod_dir().is_dir());
        assert!(store.rover_photos().unwrap().is_empty());
    }

    #[test]
    fn names_files_after_their_origin() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        store.reset().unwrap();

        let apod = store
            .save_apod(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), b"img")
            .unwrap();
        assert_eq!(apod, dir.path().join("APOD").join("2024-03-14.jpg"));

        let photo = store.save_rover_photo(1234, "MCZ_LEFT", 3, b"img").unwrap();
        assert_eq!(
            photo,
            dir.path().join("mars_pics").join("sol_1234-MCZ_LEFT_3.jpg")
        );
        assert_eq!(std::fs::read(photo).unwrap(), b"img");
    }

    #[test]
    fn picks_the_largest_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        store.reset().unwrap();

        store.save_rover_photo(5, "MAST", 1, &[0; 10]).unwrap();
        let biggest = store.save_rover_photo(5, "MAST", 2, &[0; 30]).unwrap();
        store.save_rover_photo(5, "MAST", 3, &[0; 30]).unwrap();
        // not a jpeg, however big
        std::fs::write(store.rover_dir().join("notes.txt"), [0u8; 100]).unwrap();
        std::fs::write(store.rover_dir().join("other.JPEG"), [0u8; 20]).unwrap();

        assert_eq!(store.largest_rover_photo().unwrap(), biggest);
        assert_eq!(store.rover_photos().unwrap().len(), 4);
    }

    #[test]
    fn no_photos_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        store.reset().unwrap();
        assert!(matches!(
            store.largest_rover_photo(),
            Err(WallpaperError::NoImages(_))
        ));
    }
}
