use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::ParallelProgressIterator;
use log::{error, info};
use pixelator_lib::{encode, BlockSize, OutputFormat, Params, Pixelator, Source, Stats};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Pixelates images by flattening square blocks to the color of their
/// top-left pixel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image files or directories of images
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the pixelated images are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Fixed block size, in pixels
    #[arg(
        short,
        long,
        conflicts_with = "columns",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    block_size: Option<u32>,

    /// Derive block size from each image's width, so that roughly this many
    /// blocks span it
    #[arg(
        short,
        long,
        default_value_t = Params::DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    columns: u32,

    /// Format of the pixelated images
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Png,
    Bmp,
    Tiff,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => OutputFormat::Png,
            Format::Bmp => OutputFormat::Bmp,
            Format::Tiff => OutputFormat::Tiff,
        }
    }
}

impl Args {
    fn params(&self) -> Result<Params> {
        let block_size = match self.block_size {
            Some(block_size) => BlockSize::Fixed(block_size),
            None => BlockSize::Auto {
                columns: self.columns,
            },
        };

        Ok(Params::new(block_size)?)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(0) => ExitCode::SUCCESS,

        Ok(failed) => {
            error!("{} image(s) couldn't be pixelated; try different files", failed);
            ExitCode::FAILURE
        }

        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<usize> {
    let params = args.params()?;
    let source = load_source(&args.inputs)?;
    let format = OutputFormat::from(args.format);

    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Couldn't create output directory: {}",
            args.output.display()
        )
    })?;

    info!(
        "Pixelating {} image(s) into {}",
        source.len(),
        args.output.display()
    );

    let (stats, failed) = perform_pixelations(&params, source, &args.output, format);

    info!("{:#?}", stats);

    Ok(failed)
}

fn load_source(inputs: &[PathBuf]) -> Result<Source> {
    let mut source = Source::default();

    for input in inputs {
        source.extend(Source::from_path(input)?);
    }

    Ok(source)
}

fn perform_pixelations(
    params: &Params,
    source: Source,
    output: &Path,
    format: OutputFormat,
) -> (Stats, usize) {
    let mut targets = HashSet::new();
    let mut jobs = Vec::new();
    let mut failed = 0;

    for path in source.into_paths() {
        let target = output_path(&path, output, format);

        if targets.insert(target.clone()) {
            jobs.push((path, target));
        } else {
            error!(
                "{}: another input already writes to {}",
                path.display(),
                target.display()
            );

            failed += 1;
        }
    }

    let len = jobs.len();

    let results: Vec<_> = jobs
        .into_par_iter()
        .progress_count(len as u64)
        .map(|(path, target)| {
            let result = perform_pixelation(params, &path, &target, format);

            (path, result)
        })
        .collect();

    let mut stats = Stats::default();

    for (path, result) in results {
        match result {
            Ok(image_stats) => {
                stats = stats.merge(image_stats);
            }

            Err(err) => {
                error!("{}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }

    (stats, failed)
}

fn perform_pixelation(
    params: &Params,
    path: &Path,
    target: &Path,
    format: OutputFormat,
) -> Result<Stats> {
    let image = Source::load(path)?;
    let mut pixelator = Pixelator::new(params);
    let image = pixelator.add(&image)?;
    let bytes = encode(&image, format)?;

    fs::write(target, bytes)
        .with_context(|| format!("Couldn't write image: {}", target.display()))?;

    Ok(pixelator.finish())
}

/// `photos/cat.jpeg` becomes `<output>/cat.jpeg.pixelated.png`; the source
/// extension is kept so that `cat.png` and `cat.bmp` don't collide.
fn output_path(path: &Path, output: &Path, format: OutputFormat) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".into());

    output.join(format!("{}.pixelated.{}", name, format.extension()))
}
