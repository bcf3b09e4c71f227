//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-asset tools for the desktop app bundle
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (default: nearest ancestor containing pubspec.yaml)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose the DMG installer window background (1x and 2x)
    #[command(visible_alias = "bg")]
    Background {
        /// Output directory (default: <root>/installer/dmg)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Mascot image (default: <root>/assets/images/cat.png)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        mascot: Option<PathBuf>,
    },

    /// Resize an image into the 32x32 tray icon
    #[command(visible_alias = "t")]
    TrayIcon {
        /// Source image (default: <root>/assets/images/logo.png)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: Option<PathBuf>,
    },

    /// Mask an image into the squircle app icon and regenerate native icons
    #[command(visible_alias = "i")]
    AppIcon {
        /// Source image
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: PathBuf,

        /// Only write logo.png, do not run flutter_launcher_icons
        #[arg(long)]
        skip_native: bool,

        /// Run flutter_launcher_icons in a pseudo-terminal
        #[arg(long)]
        pty: bool,
    },
}
