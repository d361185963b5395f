//! CLI tests against the built binary
//!
//! Every test points HOME at a fresh temp dir so no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn chromatext(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chromatext").expect("binary is built");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("CHROMATEXT_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY");
    cmd
}

// ============================================================================
// encode
// ============================================================================

#[test]
fn encode_prints_fenced_block() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "Hello", "-s", "0..5=red", "-s", "0..5=bold"])
        .assert()
        .success()
        .stdout("```ansi\n\x1b[1;31mHello\x1b[0m\n```\n");
}

#[test]
fn encode_reads_piped_stdin() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "-s", "3..5=light-blue", "--no-fence"])
        .write_stdin("ab\ncd\n")
        .assert()
        .success()
        .stdout("ab\n\x1b[34mcd\x1b[0m\n");
}

#[test]
fn encode_without_input_uses_initial_text() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .arg("encode")
        .assert()
        .success()
        .stdout("```ansi\nWelcome to Rebane's Discord Colored Text Generator!\n```\n");
}

#[test]
fn encode_line_policy_reopen() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "--no-fence", "--line-policy", "reopen", "-s", "..=36"])
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout("\x1b[36ma\x1b[0m\n\x1b[36mb\x1b[0m\n");
}

#[test]
fn encode_from_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("motd.txt");
    fs::write(&input, "motd\n").unwrap();
    chromatext(&home)
        .args(["encode", "--no-fence", "-s", "0..4=underline", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout("\x1b[4mmotd\x1b[0m\n");
}

#[test]
fn encode_warns_about_blank_selection() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "a  b", "--no-fence", "-s", "1..3=bold"])
        .assert()
        .success()
        .stdout("a  b\n")
        .stderr(predicate::str::contains("covers no text"));
}

#[test]
fn encode_rejects_unknown_code() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "x", "-s", "0..1=38"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown style '38'"));
}

#[test]
fn encode_honours_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("chromatext");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[editor]\ninitial_text = \"from config\"\n\n[output]\nfence = false\n",
    )
    .unwrap();

    chromatext(&home)
        .args(["encode", "-s", "0..4=gold"])
        .assert()
        .success()
        .stdout("\x1b[33mfrom\x1b[0m config\n");
}

#[test]
fn encode_copy_failure_is_only_a_warning() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["encode", "x", "--copy", "--no-fence"])
        .env("PATH", home.path())
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("Warning:"));
}

// ============================================================================
// palette / import / markup
// ============================================================================

#[test]
fn palette_lists_every_code() {
    let home = TempDir::new().unwrap();
    let assert = chromatext(&home).arg("palette").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    for slug in ["bold", "underline", "dark-gray-33", "light-blue", "blurple", "cream-white"] {
        assert!(stdout.contains(slug), "missing {slug}");
    }
    assert!(stdout.contains("#dc322f"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn import_lists_runs() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .arg("import")
        .write_stdin("```ansi\n\x1b[1;31mHi\x1b[0m there\n```\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1;31"))
        .stdout(predicate::str::contains("\" there\""));
}

#[test]
fn import_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let assert = chromatext(&home)
        .args(["import", "--json"])
        .write_stdin("\x1b[45mX\x1b[0m\ny")
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["kind"], "run");
    assert_eq!(segments[0]["text"], "X");
    assert_eq!(segments[1]["kind"], "line_break");
}

#[test]
fn import_encode_minimizes_escapes() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["import", "--encode"])
        .write_stdin("\x1b[31ma\x1b[0m\x1b[31mb\x1b[0m")
        .assert()
        .success()
        .stdout("```ansi\n\x1b[31mab\x1b[0m\n```\n");
}

#[test]
fn markup_render_then_ingest() {
    let home = TempDir::new().unwrap();
    let rendered = chromatext(&home)
        .args(["markup", "render"])
        .write_stdin("\x1b[1;34mblue\x1b[0m & plain")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rendered = String::from_utf8(rendered).unwrap();
    assert_eq!(
        rendered,
        "<span style=\"color: #268bd2; font-weight: bold\">blue</span> &amp; plain\n"
    );

    chromatext(&home)
        .args(["markup", "ingest"])
        .write_stdin(rendered)
        .assert()
        .success()
        .stdout("```ansi\n\x1b[1;34mblue\x1b[0m & plain\n```\n");
}

#[test]
fn markup_ingest_strips_scripts() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["markup", "ingest"])
        .write_stdin("<b onclick=\"x()\">ok</b><script>alert(1)</script>")
        .assert()
        .success()
        .stdout("```ansi\nok\n```\n");
}

// ============================================================================
// config / completions
// ============================================================================

#[test]
fn config_init_writes_defaults_once() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let path = home.path().join(".config/chromatext/config.toml");
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("line_policy = \"carry\""));

    chromatext(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    chromatext(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_toml() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("max_size_kb = 512"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    chromatext(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chromatext"));
}
