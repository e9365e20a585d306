#![allow(dead_code)]
use assert_cmd::Command;
use assert_fs::{TempDir, prelude::*};

/// Builds a fixture tree:
/// root/
///   src/hello.rs
///   data/blob.bin  (64 KiB)
///   README.md
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    src.create_dir_all().unwrap();
    src.child("hello.rs")
        .write_str("fn main() { println!(\"hello\"); }\n")
        .unwrap();

    let data = td.child("data");
    data.create_dir_all().unwrap();
    data.child("blob.bin").write_binary(&[7u8; 64 * 1024]).unwrap();

    td.child("README.md").write_str("# readme\n").unwrap();
    td
}

/// colordu with a clean color environment.
pub fn colordu() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colordu");
    cmd.env_remove("NO_COLOR")
        .env_remove("COLORDU_COLORSCHEME")
        .env_remove("COLORDU_COLOR")
        .env_remove("COLORDU_LOG");
    cmd
}
