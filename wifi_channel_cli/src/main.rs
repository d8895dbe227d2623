use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};
use wifi_channel_lib::util::format_channels;
use wifi_channel_lib::{classify_all, BandFilter, Frequency};

#[derive(Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: simplelog::LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

/**
 * Available CLI commands
 */
#[derive(Subcommand)]
enum Commands {
    /// Classify frequencies (MHz) into band and channel
    Find {
        /// Frequencies in MHz
        #[arg(required = true, value_name = "MHZ", allow_negative_numbers = true)]
        frequencies: Vec<i32>,

        /// Fail on frequencies outside all known bands
        #[arg(short, long)]
        strict: bool,
    },
    /// List the channels of a band
    Channels {
        /// Band to list: all, 2.4 or 5
        #[arg(short, long, default_value = "all", value_name = "BAND")]
        band: BandFilter,

        /// Print one channel per line instead of compacted ranges
        #[arg(short, long)]
        list: bool,
    },
    /// Print the centre frequency of a channel
    Frequency {
        /// Channel number
        #[arg(value_name = "CHANNEL", allow_negative_numbers = true)]
        channel: i32,
    },
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Find {
            frequencies,
            strict,
        } => {
            if strict {
                for &frequency in &frequencies {
                    Frequency::try_find(frequency)
                        .with_context(|| format!("Classifying {} MHz failed", frequency))?;
                }
            }

            for classification in classify_all(&frequencies) {
                debug!("{:?}", classification);
                println!("{}", classification);
            }
        }

        Commands::Channels { band, list } => {
            let channels = Frequency::find_channels(band);
            info!("{} channels in band {}", channels.len(), band);

            if list {
                for channel in &channels {
                    println!("{}", channel);
                }
            } else {
                println!("{}: {}", band, format_channels(&channels));
            }
        }

        Commands::Frequency { channel } => {
            let frequency = Frequency::find_frequency(channel)
                .with_context(|| format!("Looking up channel {} failed", channel))?;
            println!("channel {}: {} MHz", channel, frequency);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _ = simplelog::SimpleLogger::init(cli.log_level, simplelog::Config::default());

    match cli.command {
        Some(command) => run(command),
        None => Ok(()),
    }
}
