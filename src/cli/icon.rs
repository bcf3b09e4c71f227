//! `assetkit app-icon`: squircle master icon plus native icon sets.

use std::path::Path;

use anyhow::Result;

use crate::log;
use crate::logger::status_success;
use crate::native::{FlutterLauncherIcons, IconGenerator, UpdateOutcome, update_app_icon};
use crate::project::ProjectPaths;
use crate::utils::path::expand_user_path;

/// Write `<root>/assets/images/logo.png` from `source`, then regenerate
/// platform icons unless `skip_native` is set.
pub fn run(paths: &ProjectPaths, source: &Path, skip_native: bool, pty: bool) -> Result<()> {
    let source = expand_user_path(source, paths.root());
    let launcher = FlutterLauncherIcons { pty };
    let generator = (!skip_native).then_some(&launcher as &dyn IconGenerator);

    match update_app_icon(&source, &paths.logo(), paths.root(), generator) {
        UpdateOutcome::Updated => {
            status_success("app icon updated");
            log!("hint"; "rebuild the app (e.g. `flutter run -d macos`) to see the changes");
            Ok(())
        }
        UpdateOutcome::MaskOnly => {
            status_success("logo.png updated");
            log!("hint"; "run `{}` to regenerate native icons", launcher.name());
            Ok(())
        }
        UpdateOutcome::MaskFailed(e) => {
            Err(anyhow::Error::new(e).context("failed to process image"))
        }
        UpdateOutcome::NativeFailed(e) => Err(e.context("failed to update native icons")),
    }
}
