use anyhow::Result;
use log::info;
use std::path::PathBuf;

use fcsparse::ParserConfig;

/// Validate FCS HEADER offsets and standard keywords
pub fn run(file: PathBuf, config: &ParserConfig) -> Result<()> {
    use fcsparse::validator::validate;

    info!("FCS Validator");
    info!("=============");
    info!("File: {}", file.display());

    let fcs = match super::load(&file, config) {
        Ok(fcs) => fcs,
        Err(e) => {
            eprintln!("Validation error: {:#}", e);
            std::process::exit(1);
        }
    };

    let report = validate(&fcs, file.display().to_string());

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
