use crate::WallpaperError;
use std::path::Path;

/// Set the image at `path` as the desktop background.
///
/// Only Windows is supported; everywhere else this fails with
/// [`WallpaperError::UnsupportedPlatform`] and the image is left where it was saved.
pub fn set_desktop_wallpaper<P: AsRef<Path>>(path: P) -> Result<(), WallpaperError> {
    let path = std::path::absolute(path.as_ref())?;
    log::info!("setting {} as the desktop background", path.display());
    platform::set_wallpaper(&path)
}

#[cfg(windows)]
mod platform {
    use crate::WallpaperError;
    use std::ffi::c_void;
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;

    const SPI_SETDESKWALLPAPER: u32 = 0x0014;
    const SPIF_UPDATEINIFILE: u32 = 0x01;
    const SPIF_SENDCHANGE: u32 = 0x02;

    #[link(name = "user32")]
    extern "system" {
        fn SystemParametersInfoW(action: u32, param: u32, pv_param: *mut c_void, win_ini: u32) -> i32;
    }

    pub fn set_wallpaper(path: &Path) -> Result<(), WallpaperError> {
        let mut wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();
        // SAFETY: `wide` is a nul-terminated UTF-16 string that outlives the call
        let ok = unsafe {
            SystemParametersInfoW(
                SPI_SETDESKWALLPAPER,
                0,
                wide.as_mut_ptr().cast(),
                SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
            )
        };
        if ok == 0 {
            return Err(WallpaperError::SetWallpaper(
                std::io::Error::last_os_error().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(not(windows))]
mod platform {
    use crate::WallpaperError;
    use std::path::Path;

    pub fn set_wallpaper(_path: &Path) -> Result<(), WallpaperError> {
        Err(WallpaperError::UnsupportedPlatform)
    }
}
