use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};
use tempfile::tempdir;

/// Inputs and runner variables the tests control. Cleared so an outer CI job can't leak in.
const CONTROLLED_ENV: &[&str] = &[
    "INPUT_GITHUB-TOKEN",
    "INPUT_FPM-VERSION",
    "INPUT_FPM-REPOSITORY",
    "SETUP_FPM_PLATFORM",
    "GITHUB_API_URL",
    "GITHUB_PATH",
    "RUNNER_TEMP",
    "RUNNER_DEBUG",
];

#[derive(Debug)]
pub struct TestCfg {
    /// The setup-fpm binary under test.
    pub bin: PathBuf,
    /// Stands in for `$RUNNER_TEMP`.
    pub runner_temp: PathBuf,
    /// The file later workflow steps would read their extra PATH entries from.
    pub github_path: PathBuf,
    pub home: PathBuf,
}

#[derive(Debug)]
pub struct TestOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

impl TestCfg {
    pub fn exec<I, K, V>(&self, args: &[&str], envs: I) -> TestOutput
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.bin);
        for var in CONTROLLED_ENV {
            cmd.env_remove(var);
        }
        let output = cmd
            .args(args)
            .current_dir(&self.home)
            .env("HOME", &self.home)
            .env("RUNNER_TEMP", &self.runner_temp)
            .env("GITHUB_PATH", &self.github_path)
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .envs(envs)
            .output()
            .expect("Failed to execute command");
        TestOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status,
        }
    }

    pub fn setup_fpm(&self, args: &[&str]) -> TestOutput {
        self.exec(args, std::iter::empty::<(&str, &str)>())
    }

    /// Directories the run asked to put on PATH, one per line.
    pub fn added_paths(&self) -> Vec<PathBuf> {
        match fs::read_to_string(&self.github_path) {
            Ok(contents) => contents.lines().map(PathBuf::from).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub fn setup(f: &dyn Fn(&TestCfg)) {
    let tmp = tempdir().expect("Failed to create temp dir");
    let root = tmp.path();
    let runner_temp = root.join("_temp");
    let home = root.join("home");
    fs::create_dir_all(&runner_temp).unwrap();
    fs::create_dir_all(&home).unwrap();

    let cfg = TestCfg {
        bin: PathBuf::from(env!("CARGO_BIN_EXE_setup-fpm")),
        runner_temp,
        github_path: root.join("add_path"),
        home,
    };

    f(&cfg);
}

#[cfg(unix)]
pub fn is_user_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o100 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_user_executable(path: &Path) -> bool {
    path.is_file()
}
