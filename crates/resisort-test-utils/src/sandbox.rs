//! Hermetic sandbox for running workspace binaries in tests.
//!
//! - Every sandbox owns an `assert_fs::TempDir` that is removed on drop
//! - Commands run with a scrubbed environment (private `HOME`, no `RUST_LOG`,
//!   `NO_COLOR=1`) so output is stable across machines
//! - `snapshot_run` captures exit code, stdout and stderr in one string for
//!   `insta` snapshots
//!
//! ## Quick example
//! ```no_run
//! use resisort_test_utils::sandbox::Sandbox;
//!
//! let output = Sandbox::new()
//!     .write("values.txt", "4k7\n10R\n")
//!     .snapshot_run("resisort", ["--containers", "1", "--file", "values.txt"]);
//! assert!(output.starts_with("Exit Code: 0"));
//! ```

use assert_fs::fixture::PathChild;
use assert_fs::TempDir;
use duct::Expression;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

pub struct Sandbox {
    root: TempDir,
    home: PathBuf,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Create a new sandbox; all state is under an auto-cleaned TempDir.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create sandbox TempDir");
        let home = root.child("home").to_path_buf();
        fs::create_dir_all(&home).expect("create home dir");
        Self { root, home }
    }

    /// Absolute path to the sandbox root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write/overwrite a file relative to the sandbox root.
    pub fn write<P: AsRef<Path>, S: AsRef<[u8]>>(&mut self, rel: P, contents: S) -> &mut Self {
        let p = self.root_path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(p, contents).expect("write file");
        self
    }

    /// Build a `duct::Expression` for a cargo binary, pre-wired with the
    /// sandbox env, running from the sandbox root. You can chain `.stdin_bytes()` etc. and
    /// then `.run()` or `.read()`.
    pub fn cmd<I>(&self, program: &str, args: I) -> Expression
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let args: Vec<_> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().to_string())
            .collect();
        let expr = duct::cmd(cargo_bin_path(program), args).dir(self.root_path());
        self.inject_env(expr)
    }

    /// Run a cargo binary inside this sandbox and return stdout as String.
    /// Errors if the process exits with non-zero status.
    pub fn run<I>(&self, program: &str, args: I, stdin: Option<&str>) -> Result<String, String>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let expr = self.cmd(program, args);
        let expr = match stdin {
            Some(input) => expr.stdin_bytes(input.as_bytes().to_vec()),
            None => expr.stdin_null(),
        };
        expr.read().map_err(|e| format!("command failed: {e}"))
    }

    /// Run a cargo binary and render exit code, stdout and stderr for a snapshot.
    pub fn snapshot_run<I>(&self, program: &str, args: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let output = self
            .cmd(program, args)
            .stdin_null()
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .expect("spawn command");
        self.render_output(&output)
    }

    /// Like [`Sandbox::snapshot_run`], feeding `stdin` to the process.
    pub fn snapshot_run_with_stdin<I>(&self, program: &str, args: I, stdin: &str) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let output = self
            .cmd(program, args)
            .stdin_bytes(stdin.as_bytes().to_vec())
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .expect("spawn command");
        self.render_output(&output)
    }

    fn inject_env(&self, expr: Expression) -> Expression {
        let mut env_map: HashMap<String, String> = HashMap::new();
        if let Ok(path) = std::env::var("PATH") {
            env_map.insert("PATH".into(), path);
        }
        env_map.insert("HOME".into(), self.home.to_string_lossy().into_owned());
        env_map.insert("NO_COLOR".into(), "1".into());
        expr.full_env(&env_map)
    }

    fn render_output(&self, output: &Output) -> String {
        let code = output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        format!(
            "Exit Code: {code}\n\n--- STDOUT ---\n{}\n--- STDERR ---\n{}",
            self.normalize(&output.stdout),
            self.normalize(&output.stderr)
        )
    }

    /// Replace sandbox paths so snapshots do not depend on the temp dir.
    fn normalize(&self, bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        let root = self.root_path().to_string_lossy();
        text.replace(&*root, "<SANDBOX>")
    }
}

fn cargo_bin_path(program: &str) -> String {
    assert_cmd::cargo::cargo_bin(program)
        .to_string_lossy()
        .to_string()
}
