//! Project root discovery and conventional asset locations.
//!
//! All three tools agree on a single layout relative to the project root:
//!
//! ```text
//! <root>/
//! ├── pubspec.yaml
//! ├── assets/images/
//! │   ├── cat.png         ← mascot (background input)
//! │   ├── logo.png        ← app icon (app-icon output, tray-icon input)
//! │   └── tray_icon.png   ← tray-icon output
//! └── installer/dmg/      ← background@2x.png, background.png
//! ```

use std::path::{Path, PathBuf};

use crate::utils::path::normalize_path;

/// Marker file of the host project.
pub const ROOT_MARKER: &str = "pubspec.yaml";

const ASSETS_IMAGES: [&str; 2] = ["assets", "images"];
const INSTALLER_DMG: [&str; 2] = ["installer", "dmg"];

/// Resolved filesystem layout of the host project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Use `root` as-is (normalized to an absolute path).
    pub fn new(root: &Path) -> Self {
        Self {
            root: normalize_path(root),
        }
    }

    /// Resolve from an explicit `--root`, or by searching upward from cwd.
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(root) = explicit {
            return Self::new(root);
        }
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(&find_project_root(&cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/assets/images`
    pub fn images_dir(&self) -> PathBuf {
        ASSETS_IMAGES.iter().fold(self.root.clone(), |p, c| p.join(c))
    }

    /// Mascot drawn on the installer background.
    pub fn mascot(&self) -> PathBuf {
        self.images_dir().join("cat.png")
    }

    /// App logo: written by `app-icon`, default source of `tray-icon`.
    pub fn logo(&self) -> PathBuf {
        self.images_dir().join("logo.png")
    }

    /// Destination of `tray-icon`.
    pub fn tray_icon(&self) -> PathBuf {
        self.images_dir().join("tray_icon.png")
    }

    /// Default output directory of `background`.
    pub fn dmg_dir(&self) -> PathBuf {
        INSTALLER_DMG.iter().fold(self.root.clone(), |p, c| p.join(c))
    }
}

/// Find the project root by walking up from `start`.
///
/// The first ancestor containing [`ROOT_MARKER`] wins; failing that, the
/// first ancestor that already has an `assets/images` directory; failing
/// that, `start` itself.
///
/// # Example
/// ```text
/// /home/user/app/installer/dmg/  ← start
/// /home/user/app/pubspec.yaml    ← found!
/// ```
pub fn find_project_root(start: &Path) -> PathBuf {
    if let Some(found) = walk_up(start, |dir| dir.join(ROOT_MARKER).is_file()) {
        return found;
    }
    let images = ASSETS_IMAGES.iter().collect::<PathBuf>();
    walk_up(start, |dir| dir.join(&images).is_dir()).unwrap_or_else(|| start.to_path_buf())
}

fn walk_up(start: &Path, matches: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if matches(current) {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_conventional_paths() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        let root = paths.root().to_path_buf();

        assert_eq!(paths.images_dir(), root.join("assets").join("images"));
        assert_eq!(paths.mascot(), root.join("assets/images/cat.png"));
        assert_eq!(paths.logo(), root.join("assets/images/logo.png"));
        assert_eq!(paths.tray_icon(), root.join("assets/images/tray_icon.png"));
        assert_eq!(paths.dmg_dir(), root.join("installer").join("dmg"));
    }

    #[test]
    fn test_find_root_by_marker() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("installer/dmg");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(ROOT_MARKER), "name: app\n").unwrap();

        assert_eq!(find_project_root(&nested), dir.path());
    }

    #[test]
    fn test_find_root_by_assets_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/images")).unwrap();
        let nested = dir.path().join("scripts");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), dir.path());
    }

    #[test]
    fn test_explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::discover(Some(dir.path()));
        assert_eq!(paths, ProjectPaths::new(dir.path()));
    }
}
