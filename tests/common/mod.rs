//! Shared testing utilities for ipex integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace directory used by the standard fixture.
pub const WORKSPACE: &str = "workdir/puf.srcs";

/// Testing harness providing an isolated project root.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an empty project root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a project with the two-IP fixture (`clk_wiz_0`, `fifo_0`).
    pub fn with_scenario() -> Self {
        let ctx = Self::new();
        ctx.write(&format!("{WORKSPACE}/sources_1/ip/clk_wiz_0/clk_wiz_0.xci"), "<clk_wiz_0/>");
        ctx.write(&format!("{WORKSPACE}/sources_1/ip/fifo_0/fifo_0.xci"), "<fifo_0/>");
        ctx.write(&format!("{WORKSPACE}/sources_1/ip/fifo_0/fifo_0.xml"), "generated");
        ctx
    }

    /// Absolute path to the project root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Fixture handle for a path relative to the project root.
    pub fn child(&self, rel: &str) -> assert_fs::fixture::ChildPath {
        self.root.child(rel)
    }

    /// Write a file (and its parents) relative to the project root.
    pub fn write(&self, rel: &str, content: &str) {
        self.root.child(rel).write_str(content).expect("Failed to write fixture file");
    }

    /// Create a directory (and its parents) relative to the project root.
    pub fn mkdir(&self, rel: &str) {
        self.root.child(rel).create_dir_all().expect("Failed to create fixture directory");
    }

    /// Build a command for invoking the compiled `ipex` binary in the project root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ipex").expect("Failed to locate ipex binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }

    /// Every file under `rel`, keyed by path relative to `rel`, with its contents.
    pub fn snapshot(&self, rel: &str) -> BTreeMap<PathBuf, Vec<u8>> {
        let base = self.root().join(rel);
        let mut files = BTreeMap::new();
        if base.exists() {
            collect(&base, &base, &mut files);
        }
        files
    }
}

fn collect(base: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let rel = path.strip_prefix(base).expect("path under base").to_path_buf();
            files.insert(rel, fs::read(&path).expect("Failed to read file"));
        }
    }
}
