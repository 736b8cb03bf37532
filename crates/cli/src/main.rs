#![deny(unsafe_code)]
//! CLI binary for hueshift color conversions.
//!
//! Subcommands:
//! - `convert <value>` — convert a color between representations
//! - `gray <value>` — luminance-weighted grayscale in the same representation
//! - `hue <fraction>` — fully saturated color for a hue
//! - `hue-of <value>` — hue of a color as a fraction of a turn
//! - `list` — print available color kinds
//!
//! Set `RUST_LOG=debug` to trace parsing and conversion steps on stderr.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hueshift_core::{hue_to_rgb, rgb_to_hue, AnyColor, Color, ColorKind};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hueshift", about = "Convert colors between RGB, HSV, HSL and CMYK")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color to another representation.
    Convert {
        /// Channels separated by commas or spaces (alpha optional), or a hex
        /// string for rgb32.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source color kind (rgb32, rgb, hsv, hsl, cmyk).
        #[arg(short, long, default_value = "rgb32")]
        from: String,

        /// Target color kind. Converts to every kind when omitted.
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Project a color to grayscale, keeping its representation.
    Gray {
        /// Channels separated by commas or spaces, or a hex string for rgb32.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Color kind of the value.
        #[arg(short, long, default_value = "rgb32")]
        kind: String,
    },
    /// Print the fully saturated color for a hue (fraction of a turn).
    Hue {
        /// Hue as a fraction of a full turn; wrapped onto [0, 1).
        #[arg(allow_negative_numbers = true)]
        hue: f64,
    },
    /// Print the hue of a color as a fraction of a turn.
    HueOf {
        /// Channels separated by commas or spaces, or a hex string for rgb32.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Color kind of the value.
        #[arg(short, long, default_value = "rgb")]
        kind: String,
    },
    /// List available color kinds.
    List,
}

fn parse_color(value: &str, kind: &str) -> Result<AnyColor, CliError> {
    let kind = ColorKind::from_name(kind)?;
    let color = AnyColor::parse(kind, value)?;
    debug!(%kind, %color, "parsed input color");
    Ok(color)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let kinds = ColorKind::list_names();
            if cli.json {
                let info = serde_json::json!({ "kinds": kinds });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Color kinds:");
                for name in kinds {
                    println!("  {name}");
                }
            }
        }
        Command::Convert { value, from, to } => {
            let color = parse_color(&value, &from)?;
            let targets = match to {
                Some(name) => vec![ColorKind::from_name(&name)?],
                None => ColorKind::ALL.to_vec(),
            };

            let converted: Vec<AnyColor> = targets
                .into_iter()
                .map(|target| {
                    let out = color.convert(target);
                    debug!(from = %color.kind(), to = %target, %out, "converted");
                    out
                })
                .collect();

            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "output": converted,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for out in converted {
                    println!("{:>5}  {out}", out.kind());
                }
            }
        }
        Command::Gray { value, kind } => {
            let color = parse_color(&value, &kind)?;
            let gray = color.grayscale();
            debug!(%gray, "grayscale");
            if cli.json {
                let info = serde_json::json!({ "input": color, "output": gray });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{gray}");
            }
        }
        Command::Hue { hue } => {
            if !hue.is_finite() {
                return Err(CliError::Input(format!("hue must be finite, got {hue}")));
            }
            let rgb = hue_to_rgb(hue);
            let rgb32 = rgb.to_rgb32();
            debug!(hue, %rgb, "synthesized hue");
            if cli.json {
                let info = serde_json::json!({
                    "hue": hue,
                    "rgb": rgb,
                    "rgb32": rgb32,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{rgb}");
                println!("{rgb32} ({})", rgb32.to_hex());
            }
        }
        Command::HueOf { value, kind } => {
            let color = parse_color(&value, &kind)?;
            let hue = rgb_to_hue(color.to_rgb());
            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "hue": hue,
                    "degrees": hue * 360.0,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{hue} ({} degrees)", hue * 360.0);
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
