use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphws() -> Command {
    cargo_bin_cmd!("graphws")
}

/// Write an edge-list file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write graph fixture");
    path
}

/// Directed chain 0 -> 1 -> 2 with a costly shortcut 0 -> 2
#[allow(dead_code)]
pub const CHAIN: &str = "\
3 3
0 1 2
1 2 3
0 2 10
";

/// Undirected square 0-1-2-3 with both diagonals, read with --undirected
#[allow(dead_code)]
pub const SQUARE: &str = "\
4 6
0 1 2
1 2 2
2 3 2
3 0 2
0 2 4
1 3 4
";

/// Two undirected pairs plus an isolated vertex, read with --undirected
#[allow(dead_code)]
pub const SPLIT: &str = "\
5 2
0 1 1
2 3 1
";
