use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use tonelab::adjust::{adjust_brightness, Adjustments};
use tonelab::display::{Panel, Present};
use tonelab::error::{Error, Result};
use tonelab::session;

const SEED: u64 = 0xA11CE;

/// Display double: records the presented titles and dismisses immediately.
#[derive(Default)]
struct RecordingDisplay {
    presentations: Vec<Vec<String>>,
}

impl Present for RecordingDisplay {
    fn present(&mut self, panels: &[Panel]) -> Result<()> {
        self.presentations
            .push(panels.iter().map(|p| p.title.clone()).collect());
        Ok(())
    }
}

struct SessionRun {
    result: Result<()>,
    transcript: String,
    presentations: Vec<Vec<String>>,
}

fn run_session(script: &str) -> SessionRun {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut display = RecordingDisplay::default();

    let result = session::run(&mut input, &mut output, &mut rng, &mut display);
    SessionRun {
        result,
        transcript: String::from_utf8(output).unwrap(),
        presentations: display.presentations,
    }
}

fn gray_image(dir: &Path) -> PathBuf {
    let path = dir.join("gray.png");
    RgbImage::from_pixel(2, 2, Rgb([128, 128, 128]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn save_yes_writes_the_brightness_adjusted_image() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());
    let out = dir.path().join("out.png");

    let run = run_session(&format!(
        "{}\nyes\n{}\nno\n",
        source.display(),
        out.display()
    ));
    run.result.unwrap();
    assert!(run.transcript.contains("Image saved as"));

    // The file on disk must decode back to exactly the brightness variant,
    // which used the first offset drawn from the seeded RNG.
    let expected_params = Adjustments::sample(&mut StdRng::seed_from_u64(SEED));
    let original = image::open(&source).unwrap().to_rgb8();
    let expected = adjust_brightness(&original, expected_params.brightness);

    let written = image::open(&out).unwrap().to_rgb8();
    assert_eq!(written, expected);
}

#[test]
fn save_no_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!("{}\nno\nno\n", source.display()));
    run.result.unwrap();
    assert!(run.transcript.contains("Image not saved."));

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1, "only the source image should exist");
}

#[test]
fn invalid_save_answer_is_reported_and_treated_as_decline() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!("{}\nmaybe\nno\n", source.display()));
    run.result.unwrap();
    assert!(run.transcript.contains("Invalid option. Image not saved."));

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn failed_write_is_reported_but_the_session_continues() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());
    let bad_target = dir.path().join("missing-subdir").join("out.png");

    let run = run_session(&format!(
        "{}\nyes\n{}\nno\n",
        source.display(),
        bad_target.display()
    ));
    run.result.unwrap();
    assert!(run.transcript.contains("Error saving image to"));
    assert!(run.transcript.contains("Program finished."));
}

#[test]
fn repeat_yes_runs_another_iteration() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!(
        "{p}\nno\nYES\n{p}\nno\nno\n",
        p = source.display()
    ));
    run.result.unwrap();
    assert_eq!(run.presentations.len(), 2);
    assert_eq!(run.transcript.matches("Program finished.").count(), 1);
}

#[test]
fn any_other_repeat_answer_terminates() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!("{}\nno\nnah\n", source.display()));
    run.result.unwrap();
    assert_eq!(run.presentations.len(), 1);
    assert!(run.transcript.contains("Program finished."));
}

#[test]
fn panels_are_presented_in_the_fixed_order() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!("{}\nno\nno\n", source.display()));
    run.result.unwrap();

    let titles = &run.presentations[0];
    assert_eq!(titles.len(), 3);
    assert_eq!(titles[0], "Original Image");
    assert!(titles[1].starts_with("Contrast Adjusted (Factor: "));
    assert!(titles[2].starts_with("Brightness Adjusted (Offset: "));
}

#[test]
fn path_validation_reprompts_until_a_real_file_is_given() {
    let dir = TempDir::new().unwrap();
    let source = gray_image(dir.path());

    let run = run_session(&format!(
        "\n{missing}\n{p}\nno\nno\n",
        missing = dir.path().join("nope.png").display(),
        p = source.display()
    ));
    run.result.unwrap();
    assert!(run.transcript.contains("Please enter a valid image path."));
    assert!(run.transcript.contains("does not exist. Please try again."));
}

#[test]
fn decode_failure_is_fatal_and_skips_display_and_save() {
    let dir = TempDir::new().unwrap();
    let not_an_image = dir.path().join("notes.txt");
    std::fs::write(&not_an_image, "definitely not pixels").unwrap();

    let run = run_session(&format!("{}\n", not_an_image.display()));
    assert!(matches!(run.result, Err(Error::ImageLoad { path, .. }) if path == not_an_image));
    assert!(run.presentations.is_empty());
    assert!(!run.transcript.contains("Do you want to save"));
}
