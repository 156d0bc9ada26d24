//! Common test utilities for deck integration tests.
//!
//! Provides:
//! - TestDeck for writing a markdown deck into a temporary directory
//! - ScriptedIds for deterministic identifier allocation
#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use mdflash_core::IdGenerator;

/// Markdown deck living in its own temporary directory.
pub struct TestDeck {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestDeck {
    /// Write `content` to `<tmp>/<name>`.
    pub fn new(name: &str, content: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write deck");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read deck")
    }

    pub fn read_path(path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }
}

/// Replays a fixed list of ids, then counts up from `0001`.
pub struct ScriptedIds {
    script: Vec<String>,
    counter: usize,
}

impl ScriptedIds {
    pub fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().rev().map(|s| s.to_string()).collect(),
            counter: 0,
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&mut self) -> String {
        if let Some(id) = self.script.pop() {
            return id;
        }
        self.counter += 1;
        format!("{:04}", self.counter)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
