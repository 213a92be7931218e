//! Command-line argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use navgate_common::{PathNamespace, PlatformClass};

/// Get default config path help text for current platform
fn default_config_help() -> String {
    #[cfg(target_os = "linux")]
    return "Config file path (default: ~/.config/navgate/config.json)".to_string();

    #[cfg(target_os = "macos")]
    return "Config file path (default: ~/Library/Application Support/navgate/config.json)"
        .to_string();

    #[cfg(target_os = "windows")]
    return "Config file path (default: %APPDATA%\\navgate\\config.json)".to_string();

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    return "Config file path (overrides platform default)".to_string();
}

/// Platform class as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Desktop,
    Mobile,
}

impl From<PlatformArg> for PlatformClass {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Desktop => PlatformClass::Desktop,
            PlatformArg::Mobile => PlatformClass::Mobile,
        }
    }
}

/// Inspect navigation access for the asset console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read the tree from a saved JSON document instead of the provider
    #[arg(short, long, global = true)]
    pub tree: Option<PathBuf>,

    /// Tree provider host (overrides config)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Tree provider port (overrides config)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// User to fetch the tree for (overrides config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Session token sent with the tree request
    #[arg(long, env = "NAVGATE_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Platform class to request the tree for (overrides config)
    #[arg(long, value_enum, global = true)]
    pub platform: Option<PlatformArg>,

    /// Fetch timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Config file path (overrides platform default)
    #[arg(short, long, help = default_config_help(), global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the access level granted for a feature
    Access {
        feature: String,
    },
    /// Resolve the route path for a feature
    Path {
        feature: String,
        /// Resolve in the admin settings namespace
        #[arg(long)]
        admin: bool,
    },
    /// Print the menu visible to the user
    Menu {
        /// Show the admin settings namespace
        #[arg(long)]
        admin: bool,
        /// Mark the entry active for this path
        #[arg(long)]
        current: Option<String>,
        /// Print the filtered tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a path activates a feature's menu entry
    Active {
        current: String,
        feature: String,
        /// Resolve in the admin settings namespace
        #[arg(long)]
        admin: bool,
    },
    /// Check whether the user may open a feature's route
    Gate {
        feature: String,
    },
}

/// Namespace selected by an `--admin` flag
pub fn namespace(admin: bool) -> PathNamespace {
    PathNamespace::for_screen(admin)
}
