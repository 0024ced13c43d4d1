//! Use Case Factory
//!
//! Creates the install use case with infrastructure dependencies wired up,
//! and turns the parsed command line plus the process environment into
//! `InstallOptions`. This is the dependency injection point for the binary.

use std::path::{Path, PathBuf};

use crate::application::{InstallOptions, InstallUseCase};
use crate::config::PACKAGE_CONFIG_FILE;
use crate::domain::services::ResolutionMode;
use crate::domain::value_objects::InstallScope;
use crate::error::{InstallError, InstallResult};
use crate::infrastructure::fs::{expand_tilde, home_dir};
use crate::infrastructure::probe::SystemProbe;
use crate::infrastructure::{JsonManifestRepository, LocalFs};

use super::cli::Cli;

/// Environment variable naming the default custom destination root
pub const CONFIG_DIR_VAR: &str = "CLAUDE_CONFIG_DIR";

/// Directory name of the destination root under home or the project
pub const CLAUDE_DIR: &str = ".claude";

/// Type alias for the concrete InstallUseCase with all dependencies
pub type ConcreteInstallUseCase =
    InstallUseCase<LocalFs, JsonManifestRepository<LocalFs>, SystemProbe>;

/// Create an install use case with all dependencies wired up
pub fn create_install_use_case() -> ConcreteInstallUseCase {
    InstallUseCase::new(LocalFs::new(), JsonManifestRepository::new(), SystemProbe)
}

/// Process state the options depend on, captured once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEnv {
    pub home: Option<PathBuf>,
    pub cwd: PathBuf,
    /// Value of `CLAUDE_CONFIG_DIR`, if set and non-empty
    pub config_dir: Option<PathBuf>,
    /// Directory holding the running executable
    pub exe_dir: Option<PathBuf>,
    /// Whether stdin is attached to a terminal
    pub interactive: bool,
}

impl InstallEnv {
    pub fn from_process() -> InstallResult<Self> {
        use is_terminal::IsTerminal;

        let config_dir = std::env::var_os(CONFIG_DIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Ok(Self {
            home: home_dir(),
            cwd: std::env::current_dir()?,
            config_dir,
            exe_dir,
            interactive: std::io::stdin().is_terminal(),
        })
    }

    fn home(&self) -> InstallResult<&Path> {
        self.home.as_deref().ok_or(InstallError::HomeDirUnavailable)
    }

    fn expand(&self, path: &Path) -> InstallResult<PathBuf> {
        if path.starts_with("~") {
            Ok(expand_tilde(path, self.home()?))
        } else {
            Ok(path.to_path_buf())
        }
    }

    /// Custom global root: `--config-dir` first, then `CLAUDE_CONFIG_DIR`.
    pub fn custom_root(&self, cli: &Cli) -> InstallResult<Option<PathBuf>> {
        cli.config_dir
            .as_deref()
            .or(self.config_dir.as_deref())
            .map(|p| self.expand(p))
            .transpose()
    }

    /// Destination root for a global install, and whether it is custom.
    pub fn global_root(&self, cli: &Cli) -> InstallResult<(PathBuf, bool)> {
        match self.custom_root(cli)? {
            Some(root) => Ok((root, true)),
            None => Ok((self.home()?.join(CLAUDE_DIR), false)),
        }
    }

    /// Destination root for `scope`, and whether it is custom.
    pub fn dest_root(&self, cli: &Cli, scope: InstallScope) -> InstallResult<(PathBuf, bool)> {
        match scope {
            InstallScope::Global => self.global_root(cli),
            InstallScope::Local => Ok((self.cwd.join(CLAUDE_DIR), false)),
        }
    }

    /// Package root: `--source`, else the package the binary was installed
    /// from (`<pkg>/bin/<exe>`), else the working directory.
    pub fn package_root(&self, cli: &Cli) -> InstallResult<PathBuf> {
        if let Some(source) = &cli.source {
            let source = self.expand(source)?;
            return Ok(if source.is_absolute() {
                source
            } else {
                self.cwd.join(source)
            });
        }

        let bundled = self
            .exe_dir
            .as_deref()
            .and_then(Path::parent)
            .filter(|pkg| looks_like_package(pkg));
        Ok(bundled
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone()))
    }

    /// Display form of a destination: `~` for home, `.` for the project.
    pub fn location_label(&self, dest_root: &Path, scope: InstallScope) -> String {
        let (base, short) = match scope {
            InstallScope::Global => (self.home.as_deref(), "~"),
            InstallScope::Local => (Some(self.cwd.as_path()), "."),
        };
        match base.and_then(|b| dest_root.strip_prefix(b).ok()) {
            Some(rest) if rest.as_os_str().is_empty() => short.to_string(),
            Some(rest) => format!("{}/{}", short, rest.to_string_lossy().replace('\\', "/")),
            None => dest_root.display().to_string(),
        }
    }
}

fn looks_like_package(dir: &Path) -> bool {
    dir.join(PACKAGE_CONFIG_FILE).is_file() || dir.join("commands").join("ms").is_dir()
}

/// Conflict handling for this run.
pub fn resolution_mode(force: bool, interactive: bool) -> ResolutionMode {
    if force {
        ResolutionMode::Force
    } else if interactive {
        ResolutionMode::Interactive
    } else {
        ResolutionMode::NonInteractive
    }
}

/// Build the immutable options for one run.
pub fn build_options(cli: &Cli, env: &InstallEnv, scope: InstallScope) -> InstallResult<InstallOptions> {
    if scope.is_local() && cli.config_dir.is_some() {
        return Err(InstallError::Config(
            "cannot use --config-dir with --local".to_string(),
        ));
    }

    let (dest_root, custom_root) = env.dest_root(cli, scope)?;
    Ok(InstallOptions::new(env.package_root(cli)?, dest_root)
        .with_scope(scope)
        .with_custom_root(custom_root)
        .with_mode(resolution_mode(cli.force, env.interactive)))
}
