#![deny(unsafe_code)]
//! CLI binary for the chromakit color engine.
//!
//! Subcommands:
//! - `convert <color>`: show a color in every space, or one with `--to`
//! - `contrast <fg> <bg>`: WCAG ratio, pass flags, colorblind risk
//! - `delta-e <a> <b>`: CIE76 distance and how visible it is
//! - `harmony <color>`: six-color harmonies
//! - `scale <color>`: light-to-dark ramp
//! - `gradient <color>`: gradient stops and CSS
//! - `random`: seeded random palette
//! - `list`: supported spaces, harmonies, modes and gradient ends

mod error;

use chromakit_core::format::fixed;
use chromakit_core::{
    best_text_color, compare, harmony_in, parse_color, scale_with, ColorSpace, ColorValue,
    EngineConfig, Gradient, GradientEnd, GradientKind, Harmony, HueSpace, ScaleMode, WcagReport,
};
use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(name = "chromakit", about = "Color science toolkit for palette design")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Engine configuration file (JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on unparsable colors instead of using the fallback color.
    #[arg(long, global = true)]
    strict: bool,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color in every supported space.
    Convert {
        color: String,

        /// Only this space (hex, rgb, hsl, hsv, cmyk, lab, lch, oklch, ypbpr, xvycc).
        #[arg(long)]
        to: Option<ColorSpace>,
    },
    /// WCAG contrast between a foreground and a background color.
    Contrast { foreground: String, background: String },
    /// Perceptual distance between two colors.
    DeltaE { a: String, b: String },
    /// Six-color harmonies of a base color.
    Harmony {
        color: String,

        /// Harmony kind; all kinds when omitted.
        #[arg(short, long)]
        kind: Option<Harmony>,

        /// Hue space for the offsets (hsl or oklch); defaults to the config.
        #[arg(long)]
        space: Option<HueSpace>,
    },
    /// Light-to-dark ramp of a base color.
    Scale {
        color: String,

        #[arg(short = 'n', long, default_value_t = 9)]
        steps: usize,

        /// uniform or wcag.
        #[arg(short, long, default_value = "uniform")]
        mode: ScaleMode,
    },
    /// Gradient stops from a base color.
    Gradient {
        color: String,

        #[arg(short = 'n', long, default_value_t = 5)]
        stops: usize,

        /// auto, complementary, analogous, triadic or monochromatic.
        #[arg(short, long, default_value = "auto")]
        end: GradientEnd,

        /// linear, radial or conic.
        #[arg(short, long, default_value = "linear")]
        kind: String,

        /// Linear angle or conic start angle, in degrees.
        #[arg(long, default_value_t = 90.0)]
        angle: f64,
    },
    /// Random palette of distinct colors.
    Random {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// PRNG seed for a reproducible palette.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List supported spaces, harmonies, scale modes and gradient ends.
    List,
}

/// Settings shared by every subcommand.
struct Session {
    config: EngineConfig,
    strict: bool,
    json: bool,
}

impl Session {
    /// Parses `input`, substituting the configured fallback unless strict.
    fn color(&self, input: &str) -> Result<ColorValue, CliError> {
        match parse_color(input) {
            Ok(color) => Ok(color),
            Err(e) if self.strict => Err(e.into()),
            Err(error) => {
                let fallback = self.config.fallback;
                tracing::warn!(input, %error, %fallback, "unparsable color, using fallback");
                Ok(fallback)
            }
        }
    }

    fn print(&self, value: serde_json::Value, human: impl FnOnce()) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            human();
        }
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    match path {
        None => Ok(EngineConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            let config = EngineConfig::from_json(&text)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
    }
}

fn gradient_kind(name: &str, angle: f64) -> Result<GradientKind, CliError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "linear" => Ok(GradientKind::Linear { angle }),
        "radial" => Ok(GradientKind::Radial),
        "conic" => Ok(GradientKind::Conic { from: angle }),
        other => Err(CliError::Input(format!(
            "unknown gradient kind '{other}' (expected linear, radial or conic)"
        ))),
    }
}

fn hexes(colors: &[ColorValue]) -> Vec<String> {
    colors.iter().map(|c| c.to_hex()).collect()
}

fn pass(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let session = Session {
        config: load_config(cli.config.as_deref())?,
        strict: cli.strict,
        json: cli.json,
    };

    match cli.command {
        Command::Convert { color, to } => {
            let color = session.color(&color)?;
            let spaces = match to {
                Some(space) => vec![space],
                None => ColorSpace::ALL.to_vec(),
            };
            let projections: Vec<_> = spaces.iter().map(|&s| color.project(s)).collect();
            let info = serde_json::json!({
                "hex": color,
                "projections": projections
                    .iter()
                    .map(|p| serde_json::json!({
                        "space": p.space(),
                        "text": p.to_string(),
                        "components": p.components(),
                    }))
                    .collect::<Vec<_>>(),
            });
            session.print(info, || {
                if let [single] = projections.as_slice() {
                    println!("{single}");
                } else {
                    for p in &projections {
                        println!("{:>6}  {p}", p.space().name());
                    }
                }
            })?;
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let fg = session.color(&foreground)?;
            let bg = session.color(&background)?;
            let report = WcagReport::evaluate(fg, bg);
            let best = best_text_color(bg);
            let info = serde_json::json!({
                "foreground": fg,
                "background": bg,
                "report": report,
                "best_text": best,
            });
            session.print(info, || {
                println!("{fg} on {bg}: {}:1 ({})", fixed(report.ratio, 2), report.level);
                println!(
                    "normal text   AA {}  AAA {}",
                    pass(report.normal_aa),
                    pass(report.normal_aaa)
                );
                println!(
                    "large text    AA {}  AAA {}",
                    pass(report.large_aa),
                    pass(report.large_aaa)
                );
                println!("ui component  {}", pass(report.ui_component));
                let mut risks = Vec::new();
                if report.colorblind.red_green {
                    risks.push("red/green");
                }
                if report.colorblind.blue_yellow {
                    risks.push("blue/yellow");
                }
                if risks.is_empty() {
                    println!("colorblind    no risk");
                } else {
                    println!("colorblind    {} risk", risks.join(", "));
                }
                println!("best text on {bg}: {best}");
            })?;
        }
        Command::DeltaE { a, b } => {
            let a = session.color(&a)?;
            let b = session.color(&b)?;
            let diff = compare(a, b);
            let info = serde_json::json!({ "a": a, "b": b, "difference": diff });
            session.print(info, || {
                println!("ΔE {} ({})", fixed(diff.delta_e, 2), diff.perceptibility);
            })?;
        }
        Command::Harmony { color, kind, space } => {
            let base = session.color(&color)?;
            let space = space.unwrap_or(session.config.harmony.space);
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => Harmony::ALL.to_vec(),
            };
            let results: Vec<(Harmony, Vec<String>)> = kinds
                .iter()
                .map(|&k| (k, hexes(&harmony_in(base, k, space))))
                .collect();
            let harmonies: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .map(|(k, colors)| (k.name().to_string(), serde_json::json!(colors)))
                .collect();
            let info = serde_json::json!({
                "base": base,
                "space": space,
                "harmonies": harmonies,
            });
            session.print(info, || {
                for (k, colors) in &results {
                    println!("{:<20} {}", k.name(), colors.join(" "));
                }
            })?;
        }
        Command::Scale { color, steps, mode } => {
            let base = session.color(&color)?;
            let colors = scale_with(base, steps, mode, &session.config.scale)?;
            let info = serde_json::json!({
                "base": base,
                "mode": mode,
                "colors": colors,
            });
            session.print(info, || {
                for c in &colors {
                    println!("{c}");
                }
            })?;
        }
        Command::Gradient {
            color,
            stops,
            end,
            kind,
            angle,
        } => {
            let base = session.color(&color)?;
            let gradient = Gradient::build(base, stops, end, gradient_kind(&kind, angle)?)?;
            let css = gradient.to_string();
            let info = serde_json::json!({
                "base": base,
                "end": end,
                "gradient": gradient,
                "css": css,
            });
            session.print(info, || {
                println!("{css}");
            })?;
        }
        Command::Random { count, seed } => {
            let mut sampler = session.config.sampler(seed);
            let colors = sampler.sample(count)?;
            let info = serde_json::json!({ "seed": seed, "colors": colors });
            session.print(info, || {
                for c in &colors {
                    println!("{c}");
                }
            })?;
        }
        Command::List => {
            let spaces: Vec<_> = ColorSpace::ALL.iter().map(|s| s.name()).collect();
            let harmonies: Vec<_> = Harmony::ALL.iter().map(|h| h.name()).collect();
            let modes: Vec<_> = ScaleMode::ALL.iter().map(|m| m.name()).collect();
            let ends: Vec<_> = GradientEnd::ALL.iter().map(|e| e.name()).collect();
            let info = serde_json::json!({
                "spaces": spaces,
                "harmonies": harmonies,
                "scale_modes": modes,
                "gradient_ends": ends,
                "gradient_kinds": ["linear", "radial", "conic"],
            });
            session.print(info, || {
                println!("Spaces:         {}", spaces.join(", "));
                println!("Harmonies:      {}", harmonies.join(", "));
                println!("Scale modes:    {}", modes.join(", "));
                println!("Gradient ends:  {}", ends.join(", "));
                println!("Gradient kinds: linear, radial, conic");
            })?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
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
