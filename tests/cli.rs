use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_MAP: &str = "# Path: /Users/build/Demo.app/Demo\n\
# Arch: arm64\n\
# Object files:\n\
[  0] linker synthesized\n\
[  1] /Users/build/Demo.build/main.o\n\
[  2] /Users/build/libNet.a(Socket.o)\n\
[  3] /Users/build/libNet.a(Dns.o)\n\
# Sections:\n\
# Address\tSize    \tSegment\tSection\n\
0x100000000\t0x00001000\t__TEXT\t__text\n\
# Symbols:\n\
# Address\tSize    \tFile  Name\n\
0x100000000\t0x00000400\t[  1] _main\n\
0x100000400\t0x00000064\t[  2] _socket_open\n\
0x100000464\t0x000000C8\t[  3] _dns_lookup\n\
0x10000052C\t0x00000010\t[  9] _orphan\n";

fn cmd() -> Command {
    Command::cargo_bin("linkmap-analyzer").unwrap()
}

fn write_map(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("demo-linkmap.txt");
    fs::write(&path, SAMPLE_MAP).unwrap();
    path
}

#[test]
fn flat_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir);

    cmd()
        .arg(&map)
        .args(["--no-banner", "--no-progress"])
        .assert()
        .success()
        .stdout(contains("文件大小\t文件名称"))
        .stdout(contains("1.00K\tmain.o"))
        .stdout(contains("0.10K\tlibNet.a(Socket.o)"))
        .stdout(contains("总大小: 0.00M"));
}

#[test]
fn grouped_report_collapses_library() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir);

    cmd()
        .arg(&map)
        .args(["--group", "--no-banner", "--no-progress"])
        .assert()
        .success()
        .stdout(contains("库大小\t库名称"))
        // 0x64 + 0xC8 = 300 bytes for libNet.a
        .stdout(contains("0.29K\tlibNet.a"))
        .stdout(contains("Socket.o").not());
}

#[test]
fn search_filters_by_substring() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir);

    cmd()
        .arg(&map)
        .args(["--search", "libNet", "--no-banner", "--no-progress"])
        .assert()
        .success()
        .stdout(contains("Socket.o"))
        .stdout(contains("Dns.o"))
        .stdout(contains("main.o").not());
}

#[test]
fn output_directory_gets_default_file_name() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir);
    let out_dir = TempDir::new().unwrap();

    cmd()
        .arg(&map)
        .arg("--output")
        .arg(out_dir.path())
        .args(["--no-banner", "--no-progress"])
        .assert()
        .success();

    let saved = fs::read_to_string(out_dir.path().join("LPLinkMap.txt")).unwrap();
    assert!(saved.contains("1.00K\tmain.o"));
    assert!(saved.ends_with("总大小: 0.00M\r\n"));
}

#[test]
fn json_dump_has_raw_sizes() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir);

    cmd()
        .arg(&map)
        .args(["--json", "--no-banner", "--no-progress"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"main.o\""))
        .stdout(contains("\"size\": 1024"));
}

#[test]
fn rejects_non_link_map_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notamap.txt");
    fs::write(&path, "just some text\nwith no markers\n").unwrap();

    cmd()
        .arg(&path)
        .args(["--no-banner", "--no-progress"])
        .assert()
        .code(2)
        .stderr(contains("Not a recognizable link map file"));
}

#[test]
fn missing_input_fails() {
    cmd()
        .arg("/definitely/not/here.txt")
        .args(["--no-banner", "--no-progress"])
        .assert()
        .failure()
        .stderr(contains("failed to read"));
}
