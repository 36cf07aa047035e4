use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use xyz_heightmap_rs::heightmap::{
    ConversionConfig, XyzToImagePipeline, output_path_for, validate_input_path,
};
use xyz_heightmap_rs::logger;

use tracing::{debug, error};

const USAGE: &str = "Usage: xyz_heightmap <input.xyz>";

fn main() -> ExitCode {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(Path::new(input)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path) -> anyhow::Result<()> {
    validate_input_path(input)?;

    let config = ConversionConfig::default();
    let output = output_path_for(input, config.format);
    let pipeline = XyzToImagePipeline::new(config);
    debug!("Output format: {:?}", pipeline.config().format);

    pipeline
        .convert_file(input, &output)
        .with_context(|| format!("converting {}", input.display()))?;

    Ok(())
}
