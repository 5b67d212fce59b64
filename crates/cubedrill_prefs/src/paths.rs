//! Locations of files read and written by Cubedrill.

use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};
use time::OffsetDateTime;

/// Environment variable naming a single directory for every Cubedrill file.
pub const DIR_ENV_VAR: &str = "CUBEDRILL_DIR";

const PREFS_FILE: &str = "cubedrill-prefs.yaml";
const SESSION_FILE: &str = "cubedrill-session.yaml";

lazy_static! {
    static ref PATHS: Option<AppPaths> = AppPaths::locate(env::var_os(DIR_ENV_VAR));
}

fn get() -> Result<&'static AppPaths> {
    PATHS.as_ref().ok_or_eyre("unable to locate the cubedrill directories")
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    Ok(&get()?.prefs_file)
}
/// Returns the file storing the solves of the timer session.
pub fn session_file() -> Result<&'static Path> {
    Ok(&get()?.session_file)
}

/// Moves a file that failed to load out of the way so that it is not
/// overwritten, keeping it next to the original with a timestamped name.
pub fn move_to_backup_file(original: &Path) {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let backup = backup_path(original, now);
    match std::fs::rename(original, &backup) {
        Ok(()) => log::info!("moved {} to {}", original.display(), backup.display()),
        Err(e) if original.is_file() => {
            log::error!("error backing up {}: {e}", original.display());
        }
        Err(_) => (),
    }
}

/// Returns `dir/stem_YYYY-MM-DD_HH-MM-SS_bak.ext` for `dir/stem.ext`.
fn backup_path(original: &Path, now: OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .unwrap_or(OsStr::new("unknown"))
        .to_string_lossy();
    let extension = original
        .extension()
        .map_or(Cow::Borrowed("txt"), OsStr::to_string_lossy);
    let (h, m, s) = now.time().as_hms();
    original.with_file_name(format!(
        "{stem}_{}_{h:02}-{m:02}-{s:02}_bak.{extension}",
        now.date(),
    ))
}

#[derive(Debug, PartialEq)]
struct AppPaths {
    prefs_file: PathBuf,
    session_file: PathBuf,
}
impl AppPaths {
    /// Uses `override_dir` if set, and the platform's config and data
    /// directories otherwise.
    fn locate(override_dir: Option<impl AsRef<OsStr>>) -> Option<Self> {
        if let Some(dir) = override_dir {
            let dir = Path::new(dir.as_ref());
            log::info!("using {DIR_ENV_VAR}={}", dir.display());
            return Some(Self::in_dirs(dir, dir));
        }

        let Some(dirs) = ProjectDirs::from("", "", "Cubedrill") else {
            log::error!("no home directory; set {DIR_ENV_VAR} to store cubedrill files");
            return None;
        };
        Some(Self::in_dirs(dirs.config_dir(), dirs.data_dir()))
    }

    fn in_dirs(config_dir: &Path, data_dir: &Path) -> Self {
        Self {
            prefs_file: config_dir.join(PREFS_FILE),
            session_file: data_dir.join(SESSION_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_backup_path() {
        let epoch = OffsetDateTime::UNIX_EPOCH;
        assert_eq!(
            backup_path(Path::new("/tmp/cubedrill-prefs.yaml"), epoch),
            Path::new("/tmp/cubedrill-prefs_1970-01-01_00-00-00_bak.yaml"),
        );
        assert_eq!(
            backup_path(Path::new("/tmp/notes"), epoch),
            Path::new("/tmp/notes_1970-01-01_00-00-00_bak.txt"),
        );
    }

    #[test]
    fn test_override_dir_holds_every_file() {
        let paths = AppPaths::locate(Some("/srv/cubedrill")).expect("override dir");
        assert_eq!(
            paths,
            AppPaths {
                prefs_file: PathBuf::from("/srv/cubedrill/cubedrill-prefs.yaml"),
                session_file: PathBuf::from("/srv/cubedrill/cubedrill-session.yaml"),
            },
        );
    }
}
