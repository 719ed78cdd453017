//! Binary-level tests: exit codes, stdout/stderr split, files written

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{GenericImageView, ImageBuffer, Rgb};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config and environment.
fn imgedit(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("imgedit").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("IMGEDIT_OUTPUT_SUFFIX")
        .env_remove("IMGEDIT_JPEG_QUALITY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = ImageBuffer::from_fn(width, height, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 128]));
    image.save(&path).unwrap();
    path
}

#[test]
fn given_help_flag_when_running_then_usage_on_stdout_and_success() {
    let temp = TempDir::new().unwrap();

    imgedit(temp.path())
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[sub command]"))
        .stdout(predicate::str::contains("reverse"))
        .stdout(predicate::str::contains("grayscale"))
        .stdout(predicate::str::contains("png/jpg/jpeg/gif"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn given_version_flag_when_running_then_version_printed() {
    let temp = TempDir::new().unwrap();

    imgedit(temp.path())
        .arg("-version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn given_resize_with_trailing_flags_when_running_then_output_written() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 8, 4);

    imgedit(temp.path())
        .args(["resize", input.to_str().unwrap(), "-width", "4", "-height", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test_imgedit.png"));

    let output = image::open(temp.path().join("test_imgedit.png")).unwrap();
    assert_eq!(output.dimensions(), (4, 2));
}

#[test]
fn given_output_suffix_env_when_running_then_suffix_used() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "photo.png", 4, 4);

    imgedit(temp.path())
        .env("IMGEDIT_OUTPUT_SUFFIX", "_flipped")
        .args(["-vertical", "reverse", input.to_str().unwrap()])
        .assert()
        .success();

    assert!(temp.path().join("photo_flipped.png").is_file());
}

#[test]
fn given_width_without_height_when_running_then_failure_with_hint() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 4, 4);

    imgedit(temp.path())
        .args(["resize", input.to_str().unwrap(), "-width", "500"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid option combination for resize"))
        .stderr(predicate::str::contains("see:"));

    assert!(!temp.path().join("test_imgedit.png").exists());
}

#[test]
fn given_missing_file_when_running_then_failure() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.png");

    imgedit(temp.path())
        .args(["grayscale", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn given_unknown_subcommand_when_running_then_failure() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 4, 4);

    imgedit(temp.path())
        .args(["rotate", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rotate is not a supported subcommand"));
}

#[test]
fn given_no_arguments_when_running_then_failure() {
    let temp = TempDir::new().unwrap();

    imgedit(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("see:"));
}

#[test]
fn given_unsupported_extension_when_running_then_engine_error_reported() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("notes.txt");
    std::fs::write(&input, "not an image").unwrap();

    imgedit(temp.path())
        .args(["grayscale", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("txt"));
}

#[test]
fn given_invalid_quality_env_and_invalid_options_when_running_then_option_error_wins() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 4, 4);

    imgedit(temp.path())
        .env("IMGEDIT_JPEG_QUALITY", "0")
        .args(["resize", input.to_str().unwrap(), "-width", "500"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid option combination for resize"))
        .stderr(predicate::str::contains("jpeg_quality").not());
}

#[test]
fn given_malformed_config_file_and_unknown_subcommand_when_running_then_subcommand_error_wins() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 4, 4);
    let config_dir = temp.path().join("imgedit");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("imgedit.toml"), "jpeg_quality = \"loud\"\n").unwrap();

    imgedit(temp.path())
        .args(["rotate", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rotate is not a supported subcommand"));
}

#[test]
fn given_invalid_quality_env_and_valid_invocation_when_running_then_config_error() {
    let temp = TempDir::new().unwrap();
    let input = write_png(temp.path(), "test.png", 4, 4);

    imgedit(temp.path())
        .env("IMGEDIT_JPEG_QUALITY", "0")
        .args(["grayscale", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("jpeg_quality must be between 1 and 100"));

    assert!(!temp.path().join("test_imgedit.png").exists());
}
