use std::fs;
use std::process::Command;

fn testdoc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_testdoc"))
}

#[test]
fn binary_writes_fixture_and_confirms_once() {
    let dir = tempfile::tempdir().unwrap();
    let out = testdoc().current_dir(dir.path()).output().expect("run testdoc");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "Test document image created: test_document.png\n");

    let path = dir.path().join("test_document.png");
    assert!(fs::metadata(&path).unwrap().len() > 0);
    let img = image::open(&path).expect("decode");
    assert_eq!((img.width(), img.height()), (800, 600));
}

#[test]
fn binary_reruns_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_document.png");

    assert!(testdoc().current_dir(dir.path()).status().unwrap().success());
    let first = fs::read(&path).unwrap();
    assert!(testdoc().current_dir(dir.path()).status().unwrap().success());
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn failed_write_exits_nonzero_without_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the output name makes the write fail
    fs::create_dir(dir.path().join("test_document.png")).unwrap();

    let out = testdoc().current_dir(dir.path()).output().expect("run testdoc");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "confirmation must follow a successful write");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("testdoc failed"), "stderr: {}", stderr);
}
