#[macro_use]
extern crate log;

mod colors;
mod window;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use huewheel::{presets::PRESETS, ColorFormat, ColorState, Picker, Rgb};

#[derive(Debug, Clone, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(
        long,
        global = true,
        default_value = "info",
        help = "off, error, warn, info, debug or trace"
    )]
    log_level: log::LevelFilter,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the interactive picker
    Window {
        #[clap(long, default_value = "360", help = "width of the hue wheel in pixels")]
        size: f64,

        #[clap(long, help = "starting color as #RRGGBB")]
        color: Option<Rgb>,

        #[clap(long, short, arg_enum, value_parser, default_value = "rgba")]
        format: ColorFormat,
    },
    /// Print a hex color in one or every format
    Convert {
        color: Rgb,

        #[clap(long, short, default_value = "255", help = "alpha, 0-255")]
        alpha: u8,

        #[clap(long, short, arg_enum, value_parser)]
        format: Option<ColorFormat>,
    },
    /// Print the preset swatches
    Presets {
        #[clap(long, short, arg_enum, value_parser, default_value = "hex")]
        format: ColorFormat,
    },
    /// Print a random color
    Random {
        #[clap(long, help = "seed for a repeatable color")]
        seed: Option<u64>,

        #[clap(long, short, arg_enum, value_parser, default_value = "rgba")]
        format: ColorFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(args.log_level)
        .init();

    info!("Initialized");

    match args.command {
        Command::Window {
            size,
            color,
            format,
        } => {
            let mut state = color.map(ColorState::from_rgb).unwrap_or_default();
            state.set_format(format);
            window::run(size, state).context("picker window failed")?;
        }
        Command::Convert {
            color,
            alpha,
            format,
        } => {
            let mut state = ColorState::from_rgb(color);
            state.set_alpha(alpha);
            match format {
                Some(format) => println!("{}", state.text_in(format)),
                None => {
                    for format in ColorFormat::ALL {
                        println!("{:<5} {}", format.name(), state.text_in(format));
                    }
                }
            }
        }
        Command::Presets { format } => {
            let mut picker = Picker::default();
            for (index, hex) in PRESETS.iter().enumerate() {
                let refresh = picker
                    .preset(index)
                    .with_context(|| format!("preset {hex} is not a color"))?;
                println!("{index:>2} {}", refresh.state.text_in(format));
            }
        }
        Command::Random { seed, format } => {
            let mut picker = Picker::default();
            picker.set_format(format);
            let refresh = match seed {
                Some(seed) => picker.randomize(&mut StdRng::seed_from_u64(seed)),
                None => picker.randomize(&mut rand::thread_rng()),
            };
            debug!("seed {seed:?} gave {}", refresh.state.rgb());
            println!("{}", refresh.display_text());
        }
    }
    Ok(())
}
