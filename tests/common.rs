#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn bl() -> Command {
    cargo_bin_cmd!("babylog")
}

/// A private HOME plus database for one test.
///
/// HOME is redirected so a developer's own `~/.babylog/babylog.conf`
/// never leaks into the run, and `BABYLOG_USER` is cleared for the same reason.
pub struct Sandbox {
    pub dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir
            .path()
            .join("babylog_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    /// Sandbox with an initialized database.
    pub fn init() -> Self {
        let sb = Self::new();
        sb.cmd().args(["--test", "init"]).assert().success();
        sb
    }

    /// `babylog --db <db>` with no user selected, in a zone without DST so
    /// that `+09:00` fixtures land on their own wall-clock day and hour.
    pub fn cmd(&self) -> Command {
        let mut c = bl();
        c.env("HOME", self.dir.path())
            .env("TZ", "Asia/Tokyo")
            .env_remove("BABYLOG_USER")
            .env_remove("BABYLOG_LOG")
            .args(["--db", &self.db]);
        c
    }

    /// `babylog --db <db> --user <user>`.
    pub fn as_user(&self, user: &str) -> Command {
        let mut c = self.cmd();
        c.args(["--user", user]);
        c
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn add(&self, user: &str, kind: &str, at: &str) {
        self.as_user(user)
            .args(["add", kind, "--at", at])
            .assert()
            .success();
    }
}

/// Parse the JSON printed on stdout by a successful command.
pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid JSON on stdout")
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}
