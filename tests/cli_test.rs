use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn generate-icons failed")
}

#[test]
fn missing_source_exits_non_zero_with_failure_banner() {
    let dir = tempfile::tempdir().expect("create tempdir failed");

    let output = run_in(dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("图标生成失败"), "stderr: {stderr}");
    assert!(stderr.contains("logo_original.png"), "stderr: {stderr}");
    assert!(!dir.path().join("app").exists());
}

#[test]
fn valid_source_exits_zero_with_success_banner() {
    let dir = tempfile::tempdir().expect("create tempdir failed");
    let res = dir.path().join("app/src/main/res");
    fs::create_dir_all(&res).expect("mkdir res failed");
    RgbImage::from_pixel(100, 100, Rgb([12, 34, 56]))
        .save(res.join("logo_original.png"))
        .expect("write source image failed");

    let output = run_in(dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("全部图标生成成功"), "stdout: {stdout}");
    assert!(stdout.contains("xxxhdpi round：192x192"), "stdout: {stdout}");
    assert!(res.join("mipmap-xxxhdpi/ic_launcher_round.png").is_file());
}

#[test]
fn corrupt_source_exits_non_zero() {
    let dir = tempfile::tempdir().expect("create tempdir failed");
    let res = dir.path().join("app/src/main/res");
    fs::create_dir_all(&res).expect("mkdir res failed");
    fs::write(res.join("logo_original.png"), b"garbage").expect("write source failed");

    let output = run_in(dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("解码错误"), "stderr: {stderr}");
    assert!(stderr.contains("图标生成失败"), "stderr: {stderr}");
}
