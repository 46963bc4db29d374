use flexi_logger::Logger;
use lbp::io::{ImageFormat, read_image, write_image};
use lbp::preview::{build_panels, preview_path};
use log::info;
use std::env;
use std::path::Path;

fn usage() -> String {
    "Usage: lbp-preview <image_path> <radius>\n\
     Example: lbp-preview textures/brick.png 1"
        .to_string()
}

#[derive(Debug, PartialEq)]
enum ArgError {
    /// Wrong number of arguments
    Usage,
    Invalid(String),
}

fn parse_args(args: &[String]) -> Result<(&Path, u32), ArgError> {
    let [input, radius] = args else {
        return Err(ArgError::Usage);
    };
    let radius: u32 = radius
        .parse()
        .map_err(|e| ArgError::Invalid(format!("Invalid radius '{radius}': {e}")))?;
    if radius == 0 {
        return Err(ArgError::Invalid("Radius must be at least 1".to_string()));
    }
    Ok((Path::new(input), radius))
}

fn main() {
    // level from RUST_LOG, "info" otherwise; the handle must outlive run()
    let _logger = Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("Logger initialization failed: {e}"))
        .ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let (input, radius) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(ArgError::Usage) => {
            eprintln!("{}", usage());
            std::process::exit(1);
        }
        Err(ArgError::Invalid(msg)) => {
            eprintln!("Error: {msg}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(input, radius) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(input: &Path, radius: u32) -> Result<(), String> {
    let image = read_image(input).map_err(|e| format!("Failed to read {}: {e}", input.display()))?;
    info!(
        "Loaded {} ({}x{}, {} channel(s))",
        input.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let panels = build_panels(&image, radius).map_err(|e| e.to_string())?;
    if panels.lbp.is_empty() {
        info!("Radius {radius} leaves no interior pixels; code maps are empty");
    }

    let output = preview_path(input);
    write_image(&panels.compose(), &output, ImageFormat::Png)
        .map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
    info!("Wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let argv = args(&["lena.jpg", "3"]);
        assert_eq!(parse_args(&argv), Ok((Path::new("lena.jpg"), 3)));
    }

    #[test]
    fn test_parse_args_wrong_count_is_usage() {
        assert_eq!(parse_args(&args(&[])), Err(ArgError::Usage));
        assert_eq!(parse_args(&args(&["lena.jpg"])), Err(ArgError::Usage));
        assert_eq!(parse_args(&args(&["a", "1", "b"])), Err(ArgError::Usage));
        assert!(usage().starts_with("Usage: lbp-preview"));
    }

    #[test]
    fn test_parse_args_bad_radius() {
        assert!(matches!(
            parse_args(&args(&["lena.jpg", "three"])),
            Err(ArgError::Invalid(_))
        ));
        assert_eq!(
            parse_args(&args(&["lena.jpg", "0"])),
            Err(ArgError::Invalid("Radius must be at least 1".to_string()))
        );
    }
}
