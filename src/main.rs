use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use hueprint::cli::{Args, Command};
use hueprint::pipeline::extract_palette;
use hueprint::preview::print_swatches;
use hueprint::scheme::Palette;
use hueprint::{adjust, contrast, harmony, Adjustments, Color, ExtractOptions, ImageSource};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Extract {
            image,
            sampling,
            preview,
            share,
            json,
        } => {
            let palette = extract(&image, &sampling.options()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else if preview {
                print_swatches("Palette", palette.colors());
            } else {
                for color in palette.iter() {
                    println!("{color}");
                }
            }
            if share {
                println!("{}", palette.to_share_string());
            }
        }

        Command::Formats { color, json } => {
            let formats = parse_color(&color)?.formats();
            if json {
                println!("{}", serde_json::to_string_pretty(&formats)?);
            } else {
                println!("hex  {}", formats.hex);
                println!("rgb  {}", formats.rgb);
                println!("hsl  {}", formats.hsl);
                println!("lch  {}", formats.lch);
            }
        }

        Command::Harmony {
            kind,
            color,
            preview,
            json,
        } => {
            let base = parse_color(&color)?;
            let derived = harmony(kind, base);
            if json {
                println!("{}", serde_json::to_string_pretty(&derived)?);
            } else if preview {
                print_swatches("Base", &[base]);
                print_swatches(kind.name(), &derived);
            } else {
                for c in derived {
                    println!("{c}");
                }
            }
        }

        Command::Adjust {
            color,
            brightness,
            saturation,
            warmth,
        } => {
            let base = parse_color(&color)?;
            println!("{}", adjust(base, Adjustments::new(brightness, saturation, warmth)));
        }

        Command::Contrast {
            foreground,
            background,
            json,
        } => {
            let report = contrast(parse_color(&foreground)?, parse_color(&background)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let mark = |ok: bool| if ok { "pass" } else { "fail" };
                println!("ratio     {:.2}:1", report.ratio);
                println!("AA        {}", mark(report.aa));
                println!("AAA       {}", mark(report.aaa));
                println!("AA large  {}", mark(report.aa_large));
            }
        }

        Command::Export {
            image,
            palette,
            format,
            output,
            sampling,
        } => {
            let palette = match (image, palette) {
                (_, Some(reference)) => {
                    Palette::from_share_string(&reference, reference.split(',').count())
                        .context("invalid palette reference")?
                }
                (Some(image), None) => extract(&image, &sampling.options()).await?,
                (None, None) => bail!("an image path or --palette is required"),
            };
            let exporter = format.exporter();
            match output {
                Some(path) => {
                    exporter.write_to(&palette, &path)?;
                    eprintln!("Wrote {} to {}", exporter.name(), path.display());
                }
                None => {
                    let bytes = exporter.render(&palette)?;
                    std::io::stdout()
                        .write_all(&bytes)
                        .context("failed to write to stdout")?;
                }
            }
        }

        Command::Share { reference, colors } => {
            let palette = Palette::from_share_string(&reference, colors)
                .context("invalid palette reference")?;
            print_swatches("Shared palette", palette.colors());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

async fn extract(image: &Path, options: &ExtractOptions) -> Result<Palette> {
    let palette = extract_palette(ImageSource::from(image), options)
        .await
        .with_context(|| format!("failed to extract a palette from {}", image.display()))?;
    log::debug!("extracted {} colors from {}", palette.len(), image.display());
    Ok(palette)
}

fn parse_color(input: &str) -> Result<Color> {
    Ok(Color::parse(input)?)
}
