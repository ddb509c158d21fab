use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};

fn trimbox(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trimbox"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn crop_defaults_report_each_image_and_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = RgbImage::from_pixel(80, 80, Rgb([255, 255, 255]));
    for y in 30..40 {
        for x in 30..50 {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    img.save(dir.path().join("hero.png")).unwrap();
    // hero_storage.png deliberately missing

    let out = trimbox(dir.path(), &["crop"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Processing hero.png..."));
    assert!(stdout.contains("  Found content at (30, 30, 50, 40)"));
    assert!(stdout.contains("  Cropped and saved to hero.png"));
    assert!(stdout.contains("  Error processing hero_storage.png:"));

    let saved = image::open(dir.path().join("hero.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (60, 50));
}

#[test]
fn crop_reports_blank_images() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]))
        .save(dir.path().join("blank.png"))
        .unwrap();

    let out = trimbox(dir.path(), &["crop", "blank.png", "--padding", "5"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("No content found (image matches background entirely?)"));
}

#[test]
fn crop_flags_override_preset_and_can_be_saved() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("crop.preset"),
        "// crop preset\n{ \"padding\": 0, \"contrast\": null }\n",
    )
    .unwrap();
    let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
    img.put_pixel(20, 20, Rgb([250, 250, 250]));
    img.save(dir.path().join("faint.png")).unwrap();

    let out = trimbox(
        dir.path(),
        &[
            "crop",
            "faint.png",
            "--preset",
            "crop.preset",
            "--padding",
            "2",
            "--save-preset",
            "effective.preset",
        ],
    );
    assert!(out.status.success());

    // contrast disabled by the preset, so the faint pixel counts
    let saved = image::open(dir.path().join("faint.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (5, 5));

    let effective = trimbox::CropParams::load_preset(&dir.path().join("effective.preset")).unwrap();
    assert_eq!(effective.padding, 2);
    assert_eq!(effective.contrast, None);
}

#[test]
fn measure_missing_stl_prints_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = trimbox(dir.path(), &["measure"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "Error: reference/iphone-12-mini.stl not found");
}

#[test]
fn measure_prints_text_and_json_reports() {
    let dir = tempfile::tempdir().unwrap();
    let stl = "solid t\nfacet normal 0 0 0\nouter loop\nvertex 1 2 3\nvertex 0 0 0\nvertex -1 4 2\nendloop\nendfacet\nendsolid t\n";
    std::fs::write(dir.path().join("t.stl"), stl).unwrap();

    let out = trimbox(dir.path(), &["measure", "t.stl"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Loading t.stl...\nSolid: t\n"));
    assert!(stdout.contains("X: -1.00 to 1.00"));
    assert!(stdout.contains("Rotated ([0, 90, 0]) Bounds:"));
    assert!(stdout.contains("Max X (Right side?): 3.00"));
    assert!(stdout.contains("Min X (Left side?): 0.00 (Absolute value)"));

    let out = trimbox(dir.path(), &["measure", "t.stl", "--format", "json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["name"], "t");
    assert_eq!(json["triangles"], 1);
    assert_eq!(json["rotation"], "Y90");
    assert_eq!(json["rotated"]["z"]["max"], 1.0);
}

fn faint_image(dir: &Path) {
    let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
    img.put_pixel(20, 20, Rgb([245, 245, 245]));
    img.save(dir.join("faint.png")).unwrap();
}

#[test]
fn default_contrast_ignores_faint_pixel() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());

    let out = trimbox(dir.path(), &["crop", "faint.png"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("No content found"));
}

#[test]
fn gain_and_offset_flags_reveal_faint_pixel() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());

    let out = trimbox(
        dir.path(),
        &["crop", "faint.png", "--gain", "2", "--offset", "-10", "--padding", "1"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("  Found content at (20, 20, 21, 21)"));
    let saved = image::open(dir.path().join("faint.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (3, 3));
}

#[test]
fn gain_alone_keeps_preset_offset() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());
    std::fs::write(
        dir.path().join("soft.preset"),
        "{ \"padding\": 0, \"contrast\": { \"gain\": 1.0, \"offset\": -15.0 } }\n",
    )
    .unwrap();

    // 10 * 2 - 15 survives; with the default offset of -100 it would not
    let out = trimbox(
        dir.path(),
        &[
            "crop",
            "faint.png",
            "--preset",
            "soft.preset",
            "--gain",
            "2",
            "--save-preset",
            "out.preset",
        ],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("  Found content at (20, 20, 21, 21)"));

    let effective = trimbox::CropParams::load_preset(&dir.path().join("out.preset")).unwrap();
    assert_eq!(
        effective.contrast,
        Some(trimbox::ContrastStretch {
            gain: 2.0,
            offset: -15.0
        })
    );
}

#[test]
fn gain_alone_keeps_default_offset() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());

    // 10 * 2 - 100 is still below zero
    let out = trimbox(dir.path(), &["crop", "faint.png", "--gain", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("No content found"));
}

#[test]
fn no_contrast_overrides_preset_stretch() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());
    std::fs::write(
        dir.path().join("strict.preset"),
        "// strict\n{ \"padding\": 0, \"contrast\": { \"gain\": 1.0, \"offset\": -100.0 } }\n",
    )
    .unwrap();

    let out = trimbox(
        dir.path(),
        &["crop", "faint.png", "--preset", "strict.preset", "--no-contrast"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("  Found content at (20, 20, 21, 21)"));
    let saved = image::open(dir.path().join("faint.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (1, 1));
}

#[test]
fn non_finite_gain_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    faint_image(dir.path());
    let before = std::fs::read(dir.path().join("faint.png")).unwrap();

    let out = trimbox(dir.path(), &["crop", "faint.png", "--gain", "inf"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("InvalidContrast"));
    assert!(stderr.contains("gain"));
    assert_eq!(std::fs::read(dir.path().join("faint.png")).unwrap(), before);
}

#[test]
fn processing_header_precedes_the_work() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = RgbImage::from_pixel(30, 30, Rgb([255, 255, 255]));
    img.put_pixel(10, 10, Rgb([0, 0, 0]));
    img.save(dir.path().join("hero.png")).unwrap();

    // log lines share stdout with the report
    let out = trimbox(dir.path(), &["--log", "crop", "hero.png"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let header = stdout.find("Processing hero.png...").unwrap();
    let wrote = stdout.find("Wrote").unwrap();
    let saved = stdout.find("Cropped and saved to hero.png").unwrap();
    assert!(header < wrote);
    assert!(wrote < saved);
}

#[test]
fn malformed_stl_reports_loading_before_failing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.stl"), "solid x\n  vertex 1 2\nendsolid x\n").unwrap();

    let out = trimbox(dir.path(), &["measure", "bad.stl"]);
    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "Loading bad.stl...");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Malformed"));
}
