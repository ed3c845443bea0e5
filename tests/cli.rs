extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn renders_a_png_of_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("julia.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "64x40", "-c", "-0.8,0.156", "-i", "50"])
        .assert()
        .success();

    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (64, 40));
}

#[test]
fn renders_a_preset() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("polar.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "48x48", "-P", "Polar Spiral", "-t", "1"])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn hidden_layers_leave_a_transparent_image() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("empty.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "16x16", "--no-field", "--no-orbit"])
        .assert()
        .success();

    let img = image::open(&out).unwrap().to_rgba();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn polar_mode_takes_the_polar_seed() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("orbit.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "32x32",
            "-c",
            "0.285,0.01",
            "-m",
            "polar",
            "-p",
            "0.8,45",
            "--no-field",
        ])
        .assert()
        .success();

    // 0.8 at 45 degrees lands at (25.05, 25.05) on a 32x32 canvas.
    let img = image::open(&out).unwrap().to_rgba();
    assert_eq!(img.get_pixel(25, 25).0, [255, 0, 0, 255]);
}

fn render_rgba(out: &std::path::Path, extra: &[&str]) -> Vec<u8> {
    let mut args = vec!["-o", out.to_str().unwrap(), "-s", "40x40"];
    args.extend_from_slice(extra);
    Command::cargo_bin("julia").unwrap().args(&args).assert().success();
    image::open(out).unwrap().to_rgba().into_raw()
}

#[test]
fn preset_replaces_flags_but_keeps_layer_toggles() {
    let dir = TempDir::new().unwrap();
    let flagged = render_rgba(
        &dir.path().join("flagged.png"),
        &["-P", "Petal Loops", "--no-field", "-i", "3", "--zoom", "9", "-c", "0.5,0.5"],
    );
    let plain = render_rgba(&dir.path().join("plain.png"), &["-P", "Petal Loops", "--no-field"]);

    assert_eq!(flagged, plain);
    assert!(plain.chunks(4).any(|px| px == &[255, 0, 0, 255][..]));
    assert!(plain
        .chunks(4)
        .all(|px| px == &[255, 0, 0, 255][..] || px == &[0, 0, 0, 0][..]));
}

#[test]
fn rejects_a_canvas_too_large_to_encode() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("huge.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "70000x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
    assert!(!out.exists());
}

#[test]
fn lists_presets() {
    Command::cargo_bin("julia")
        .unwrap()
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dendrite Spiral"))
        .stdout(predicate::str::contains("Polar Spiral"));
}

#[test]
fn rejects_an_empty_canvas() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nothing.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn rejects_an_unknown_preset() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nothing.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-P", "Mandelbrot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No preset named"));
}

#[test]
fn requires_an_output_file() {
    Command::cargo_bin("julia").unwrap().assert().failure();
}

#[test]
fn unwritable_output_is_a_render_failure() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("julia.png");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
