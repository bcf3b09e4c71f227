//! Native platform icon regeneration.
//!
//! After the master `logo.png` is rewritten, the per-platform icon sets
//! (macOS `AppIcon.appiconset`, Windows `.ico`, ...) are regenerated by the
//! host project's own tooling. The tool runs in the project root and only
//! its exit status is inspected.

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::AssetError;
use crate::image::icon::squircle::mask_file;
use crate::log;
use crate::utils::exec::{Cmd, FilterRule};

/// Command line of the launcher-icons generator.
pub const LAUNCHER_ICONS_CMD: [&str; 4] = ["flutter", "pub", "run", "flutter_launcher_icons"];

/// Pub's own progress chatter; the generator's stdout and stderr lines are logged.
static LAUNCHER_ICONS_FILTER: FilterRule = FilterRule::new(&[
    "Building package executable",
    "Built flutter_launcher_icons",
    "Resolving dependencies",
    "Got dependencies",
]);

/// Something that rebuilds platform icon sets from the master icon.
pub trait IconGenerator {
    /// Human-readable command, for messages.
    fn name(&self) -> String;

    /// Regenerate icons for the project at `root`, blocking until done.
    fn regenerate(&self, root: &Path) -> Result<()>;
}

/// `flutter pub run flutter_launcher_icons`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlutterLauncherIcons {
    /// Run inside a pseudo-terminal so the tool keeps its colors.
    pub pty: bool,
}

impl IconGenerator for FlutterLauncherIcons {
    fn name(&self) -> String {
        LAUNCHER_ICONS_CMD.join(" ")
    }

    fn regenerate(&self, root: &Path) -> Result<()> {
        let [program, args @ ..] = LAUNCHER_ICONS_CMD;
        which::which(program).map_err(|_| AssetError::ToolNotFound(program.to_string()))?;

        Cmd::new(program)
            .args(args)
            .cwd(root)
            .pty(self.pty)
            .filter(&LAUNCHER_ICONS_FILTER)
            .run()
            .with_context(|| format!("`{}` failed", self.name()))?;
        Ok(())
    }
}

/// Result of an app icon update.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The master icon could not be produced; nothing was launched.
    MaskFailed(AssetError),
    /// The master icon was written but platform icons were not regenerated.
    NativeFailed(anyhow::Error),
    /// Master icon written and platform icons regenerated.
    Updated,
    /// Master icon written; regeneration was not requested.
    MaskOnly,
}

/// Mask `source` into `dest`, then regenerate platform icons with `generator`.
///
/// The generator only runs when the mask stage succeeded. A generator failure
/// leaves `dest` in place.
pub fn update_app_icon(
    source: &Path,
    dest: &Path,
    root: &Path,
    generator: Option<&dyn IconGenerator>,
) -> UpdateOutcome {
    log!("icon"; "masking {} to squircle", source.display());
    if let Err(e) = mask_file(source, dest) {
        return UpdateOutcome::MaskFailed(e);
    }
    log!("icon"; "saved {}", dest.display());

    let Some(generator) = generator else {
        return UpdateOutcome::MaskOnly;
    };

    log!("native"; "running `{}`", generator.name());
    match generator.regenerate(root) {
        Ok(()) => UpdateOutcome::Updated,
        Err(e) => UpdateOutcome::NativeFailed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::save_png;
    use image::{Rgba, RgbaImage};
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct FakeGenerator {
        calls: Cell<usize>,
        root: RefCell<Option<PathBuf>>,
        fail: bool,
    }

    impl FakeGenerator {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                root: RefCell::new(None),
                fail,
            }
        }
    }

    impl IconGenerator for FakeGenerator {
        fn name(&self) -> String {
            "fake".into()
        }

        fn regenerate(&self, root: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            *self.root.borrow_mut() = Some(root.to_path_buf());
            if self.fail {
                anyhow::bail!("exit code 1");
            }
            Ok(())
        }
    }

    fn write_source(dir: &Path) -> PathBuf {
        let source = dir.join("source.png");
        save_png(&RgbaImage::from_pixel(64, 64, Rgba([50, 60, 70, 255])), &source).unwrap();
        source
    }

    #[test]
    fn test_missing_source_never_launches_generator() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("logo.png");
        let fake = FakeGenerator::new(false);

        let outcome = update_app_icon(&dir.path().join("nope.png"), &dest, dir.path(), Some(&fake));

        assert!(matches!(outcome, UpdateOutcome::MaskFailed(ref e) if e.is_missing_input()));
        assert_eq!(fake.calls.get(), 0);
        assert!(!dest.exists());
    }

    #[test]
    fn test_corrupt_source_never_launches_generator() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"\x89PNG truncated").unwrap();
        let dest = dir.path().join("logo.png");
        let fake = FakeGenerator::new(false);

        let outcome = update_app_icon(&source, &dest, dir.path(), Some(&fake));

        assert!(matches!(outcome, UpdateOutcome::MaskFailed(AssetError::Decode(..))));
        assert_eq!(fake.calls.get(), 0);
        assert!(!dest.exists());
    }

    #[test]
    fn test_generator_runs_once_in_project_root() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path());
        let dest = dir.path().join("assets/images/logo.png");
        let fake = FakeGenerator::new(false);

        let outcome = update_app_icon(&source, &dest, dir.path(), Some(&fake));

        assert!(matches!(outcome, UpdateOutcome::Updated));
        assert_eq!(fake.calls.get(), 1);
        assert_eq!(fake.root.borrow().as_deref(), Some(dir.path()));
        assert!(dest.is_file());
    }

    #[test]
    fn test_generator_failure_keeps_master_icon() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path());
        let dest = dir.path().join("logo.png");
        let fake = FakeGenerator::new(true);

        let outcome = update_app_icon(&source, &dest, dir.path(), Some(&fake));

        assert!(matches!(outcome, UpdateOutcome::NativeFailed(_)));
        assert!(dest.is_file());
    }

    #[test]
    fn test_skipping_generator_is_mask_only() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path());
        let dest = dir.path().join("logo.png");

        let outcome = update_app_icon(&source, &dest, dir.path(), None);
        assert!(matches!(outcome, UpdateOutcome::MaskOnly));
        assert!(dest.is_file());
    }

    #[test]
    fn test_launcher_icons_name() {
        let generator = FlutterLauncherIcons::default();
        assert_eq!(generator.name(), "flutter pub run flutter_launcher_icons");
    }
}
