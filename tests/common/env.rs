//! Test environment builder for isolated installer testing.
//!
//! Provides `TestEnv` - temp directories for the package, the home directory
//! and a project, plus helpers to run the installer binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use mindsystem_install::infrastructure::repositories::from_json;
use mindsystem_install::Manifest;
use tempfile::TempDir;

use super::fixtures::default_package;

/// Result of running the installer binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// - `package`: the source tree being installed
/// - `home`: stands in for `~` via `MINDSYSTEM_TEST_HOME`
/// - `project`: working directory for `--local` installs
pub struct TestEnv {
    pub package: TempDir,
    pub home: TempDir,
    pub project: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the default fixture package.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Default global destination (`~/.claude`)
    pub fn global_root(&self) -> PathBuf {
        self.home.path().join(".claude")
    }

    pub fn global_path(&self, logical: &str) -> PathBuf {
        self.global_root().join(logical)
    }

    pub fn local_path(&self, logical: &str) -> PathBuf {
        self.project.path().join(".claude").join(logical)
    }

    pub fn package_path(&self, relative: &str) -> PathBuf {
        self.package.path().join(relative)
    }

    /// Run the installer with `--source <package>` prepended.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let package = self.package.path().display().to_string();
        let mut full = vec!["--source", package.as_str()];
        full.extend_from_slice(args);
        self.run_raw_with_input(&full, env_vars, None)
    }

    /// Run with exactly `args`, nothing prepended.
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        self.run_raw_with_input(args, &[], None)
    }

    /// Run with `input` piped to stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let package = self.package.path().display().to_string();
        let mut full = vec!["--source", package.as_str()];
        full.extend_from_slice(args);
        self.run_raw_with_input(&full, &[], Some(input))
    }

    fn run_raw_with_input(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        input: Option<&str>,
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project.path())
            .args(args)
            .env("MINDSYSTEM_TEST_HOME", self.home.path())
            .env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("CLAUDE_CONFIG_DIR")
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = match input {
            Some(input) => {
                use std::io::Write;
                cmd.stdin(Stdio::piped());
                let mut child = cmd.spawn().expect("Failed to spawn installer");
                child
                    .stdin
                    .take()
                    .expect("stdin piped")
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
                child.wait_with_output().expect("Failed to wait for installer")
            }
            None => cmd
                .stdin(Stdio::null())
                .output()
                .expect("Failed to execute installer"),
        };

        output_to_result(output)
    }

    /// Parse the global manifest.
    pub fn read_manifest(&self) -> Manifest {
        read_manifest_at(&self.global_root())
    }

    /// Read an installed file under the global destination.
    pub fn read_installed(&self, logical: &str) -> String {
        let path = self.global_path(logical);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read installed file {}: {}", logical, e))
    }

    /// Overwrite an installed file (a "local edit").
    pub fn edit_installed(&self, logical: &str, content: &str) {
        write_file(&self.global_path(logical), content);
    }

    pub fn write_package_file(&self, relative: &str, content: &str) {
        write_file(&self.package_path(relative), content);
    }

    pub fn remove_package_file(&self, relative: &str) {
        std::fs::remove_file(self.package_path(relative)).expect("Failed to remove package file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_manifest_at(dest_root: &Path) -> Manifest {
    let path = dest_root.join("mindsystem").join(".install-manifest.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read manifest {}: {}", path.display(), e));
    from_json(&content).expect("manifest should parse")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    package_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            package_files: default_package()
                .into_iter()
                .map(|(path, content)| (path.to_string(), content))
                .collect(),
        }
    }

    /// Start from an empty package.
    pub fn empty_package(mut self) -> Self {
        self.package_files.clear();
        self
    }

    pub fn package_file(mut self, relative: &str, content: &str) -> Self {
        self.package_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            package: TempDir::new().expect("Failed to create package dir"),
            home: TempDir::new().expect("Failed to create home dir"),
            project: TempDir::new().expect("Failed to create project dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mindsystem-install")),
        };
        for (relative, content) in &self.package_files {
            env.write_package_file(relative, content);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
