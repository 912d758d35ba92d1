//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Found 3 image(s) in /Users/me/shots
//! 01-home.png: 1290x2796 -> 2064x2752 => 01-home_2064x2752.jpg
//! 02-detail.png: 2048x1536 -> 2752x2064 => 02-detail_2752x2064.jpg
//! 03-menu.jpg: 2732x2048 -> 2732x2048 => 03-menu_2732x2048.jpg
//! Done. Output in: /Users/me/shots/resized
//! ```
//!
//! With nothing to do:
//!
//! ```text
//! No images found in /Users/me/empty
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::process::ProcessEvent;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_size((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}

/// Lines for a single progress event.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started {
            in_dir,
            image_count,
        } => vec![format!(
            "Found {} image(s) in {}",
            image_count,
            in_dir.display()
        )],
        ProcessEvent::ImageProcessed { image, .. } => vec![format!(
            "{}: {} -> {} => {}",
            file_name(&image.source),
            format_size(image.source_dims),
            format_size(image.target),
            file_name(&image.output)
        )],
        ProcessEvent::Finished { out_dir, .. } => {
            vec![format!("Done. Output in: {}", out_dir.display())]
        }
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Message for an input directory with no supported images.
pub fn format_no_images(in_dir: &Path) -> Vec<String> {
    vec![format!("No images found in {}", in_dir.display())]
}

pub fn print_no_images(in_dir: &Path) {
    for line in format_no_images(in_dir) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::ResizedImage;
    use std::path::PathBuf;

    #[test]
    fn started_reports_count_and_dir() {
        let lines = format_process_event(&ProcessEvent::Started {
            in_dir: PathBuf::from("/shots"),
            image_count: 3,
        });
        assert_eq!(lines, vec!["Found 3 image(s) in /shots"]);
    }

    #[test]
    fn processed_shows_sizes_and_output_name() {
        let lines = format_process_event(&ProcessEvent::ImageProcessed {
            index: 1,
            image: ResizedImage {
                source: PathBuf::from("/shots/home.png"),
                source_dims: (2048, 1536),
                target: (2752, 2064),
                output: PathBuf::from("/shots/resized/home_2752x2064.jpg"),
            },
        });
        assert_eq!(
            lines,
            vec!["home.png: 2048x1536 -> 2752x2064 => home_2752x2064.jpg"]
        );
    }

    #[test]
    fn finished_reports_output_dir() {
        let lines = format_process_event(&ProcessEvent::Finished {
            out_dir: PathBuf::from("/shots/resized"),
            image_count: 3,
        });
        assert_eq!(lines, vec!["Done. Output in: /shots/resized"]);
    }

    #[test]
    fn no_images_message() {
        assert_eq!(
            format_no_images(Path::new("/empty")),
            vec!["No images found in /empty"]
        );
    }
}
