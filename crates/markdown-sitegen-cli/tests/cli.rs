use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_render_prints_html() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.md", "# Title\n\nSome **bold** text.");

    let mut cmd = cargo_bin_cmd!("markdown-sitegen");
    cmd.arg("render").arg(&file);

    cmd.assert().success().stdout(predicate::str::contains(
        "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>",
    ));
}

#[test]
fn test_render_reports_unclosed_delimiter() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "broken.md", "This is invalid ` markdown");

    let mut cmd = cargo_bin_cmd!("markdown-sitegen");
    cmd.arg("render").arg(&file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed inline syntax"))
        .stderr(predicate::str::contains("broken.md"));
}

#[test]
fn test_render_missing_file() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("markdown-sitegen");
    cmd.arg("render").arg(dir.path().join("absent.md"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_blocks_prints_json() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.md", "## Heading\n\n- one\n- two");

    let mut cmd = cargo_bin_cmd!("markdown-sitegen");
    cmd.arg("blocks").arg(&file);

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json[0]["kind"]["type"], "heading");
    assert_eq!(json[0]["kind"]["level"], 2);
    assert_eq!(json[0]["text"], "## Heading");
    assert_eq!(json[1]["kind"]["type"], "unordered_list");
}

#[test]
fn test_init_then_build() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("markdown-sitegen")
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sitegen.toml"));

    assert!(dir.path().join("template.html").exists());
    write(&dir, "content/index.md", "# Home\n\nHello *world*");
    write(&dir, "content/about.md", "# About\n\n1. one\n2. two");
    write(&dir, "static/index.css", "body {}");

    cargo_bin_cmd!("markdown-sitegen")
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("sitegen.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 2 pages and copied 1 static files"));

    let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(home.contains("<title>Home</title>"));
    assert!(home.contains("<p>Hello <i>world</i></p>"));
    let about = fs::read_to_string(dir.path().join("public/about/index.html")).unwrap();
    assert!(about.contains("<ol><li>one</li><li>two</li></ol>"));
    assert!(dir.path().join("public/index.css").exists());
}

#[test]
fn test_init_keeps_existing_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "template.html", "{{ Content }}");

    cargo_bin_cmd!("markdown-sitegen")
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("template.html")).unwrap(),
        "{{ Content }}"
    );
}

#[test]
fn test_build_uses_default_layout_without_config() {
    let dir = TempDir::new().unwrap();
    write(&dir, "content/index.md", "# Home");
    write(&dir, "template.html", "<title>{{ Title }}</title>{{ Content }}");

    cargo_bin_cmd!("markdown-sitegen")
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("public/index.html")).unwrap(),
        "<title>Home</title><div><h1>Home</h1></div>"
    );
}

#[test]
fn test_build_reports_page_without_title() {
    let dir = TempDir::new().unwrap();
    write(&dir, "content/notes.md", "no heading here");
    write(&dir, "template.html", "{{ Content }}");

    cargo_bin_cmd!("markdown-sitegen")
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes.md"));
}
