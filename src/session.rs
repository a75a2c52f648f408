//! The interactive adjustment session.
//!
//! Each iteration runs one strictly sequential pass:
//! path prompt, decode, transform, display, save prompt, repeat prompt.
//! Nothing survives an iteration except the user's decision to continue.

use std::io::{BufRead, Write};

use colored::Colorize;
use image::RgbImage;
use rand::Rng;

use crate::adjust::{adjust_brightness, adjust_contrast, Adjustments};
use crate::display::{Panel, Present};
use crate::error::{Error, Result};
use crate::prompt::{self, Answer, InvalidAnswer};

/// Runs the session until the user declines to continue.
///
/// Decode failure is the one fatal path: it is returned as an error without
/// re-prompting, and the caller is expected to terminate. Every other
/// recoverable condition is handled inside the loop.
pub fn run<In, Out, R, P>(
    input: &mut In,
    output: &mut Out,
    rng: &mut R,
    display: &mut P,
) -> Result<()>
where
    In: BufRead,
    Out: Write,
    R: Rng,
    P: Present,
{
    loop {
        let path = prompt::prompt_image_path(input, output)?;

        let original = image::open(&path)
            .map_err(|source| Error::ImageLoad {
                path: path.clone(),
                source,
            })?
            .to_rgb8();

        let adjustments = Adjustments::sample(rng);
        log::debug!("sampled {adjustments:?} for {}", path.display());

        let contrast_adjusted = adjust_contrast(&original, adjustments.contrast);
        let brightness_adjusted = adjust_brightness(&original, adjustments.brightness);

        let panels = [
            Panel {
                image: original,
                title: "Original Image".to_string(),
            },
            Panel {
                image: contrast_adjusted,
                title: format!("Contrast Adjusted (Factor: {:.2})", adjustments.contrast),
            },
            Panel {
                image: brightness_adjusted,
                title: format!("Brightness Adjusted (Offset: {})", adjustments.brightness),
            },
        ];
        display.present(&panels)?;

        // Only the brightness variant is ever offered for saving.
        save_flow(input, output, &panels[2].image)?;

        let again = prompt::ask_yes_no(
            input,
            output,
            "Do you want to try again? (yes/no): ",
            InvalidAnswer::TreatAsNo,
        )?;
        if again != Answer::Yes {
            writeln!(output, "Program finished.")?;
            return Ok(());
        }
    }
}

fn save_flow<In, Out>(input: &mut In, output: &mut Out, image: &RgbImage) -> Result<()>
where
    In: BufRead,
    Out: Write,
{
    let verdict = prompt::ask_yes_no(
        input,
        output,
        "Do you want to save the resulting image? (yes/no): ",
        InvalidAnswer::TreatAsNo,
    )?;

    match verdict {
        Answer::Yes => {
            let filename = prompt::read_line(
                input,
                output,
                "Enter the filename to save (with extension, e.g., result.jpg): ",
            )?;
            // A failed write is surfaced but not fatal: the session still
            // moves on to the repeat prompt.
            match image.save(&filename) {
                Ok(()) => {
                    writeln!(output, "{}", format!("Image saved as {filename}").green())?
                }
                Err(err) => writeln!(
                    output,
                    "{}",
                    format!("Error saving image to {filename}: {err}").red()
                )?,
            }
        }
        Answer::No => writeln!(output, "Image not saved.")?,
        Answer::Other => writeln!(output, "Invalid option. Image not saved.")?,
    }
    Ok(())
}
