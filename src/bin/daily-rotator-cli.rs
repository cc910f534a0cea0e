#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use daily_rotator::{
    io,
    model::{Rotation, RotationConfig},
    parse_timezone, RotationCalculator, RotationDefaults, SystemClock,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation quotidienne
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Paramètres communs d'une rotation
#[derive(Args, Debug)]
struct RotationArgs {
    /// Nombre d'éléments (>= 1)
    #[arg(long, allow_negative_numbers = true)]
    items: String,
    /// Fuseau IANA, ex. Europe/Paris
    #[arg(long, default_value = "UTC")]
    tz: String,
    /// Jour 0 (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,
    /// Élément actif au jour 0
    #[arg(long, allow_negative_numbers = true)]
    start_item: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Élément du jour
    Today {
        #[command(flatten)]
        rotation: RotationArgs,
        /// Date locale à utiliser au lieu de l'horloge (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Aperçu des prochains jours, avec export optionnel
    Schedule {
        #[command(flatten)]
        rotation: RotationArgs,
        /// Premier jour (YYYY-MM-DD), aujourd'hui par défaut
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long, default_value_t = 7)]
        days: u32,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let calculator = RotationCalculator::new(SystemClock);

    match cli.cmd {
        Commands::Today { rotation, date } => {
            let (config, tz) = resolve(&rotation)?;
            let result = match date {
                Some(d) => Rotation::on(config, tz, d),
                None => calculator.active(&config, tz),
            };
            println!(
                "Use item {} today! ({} in {})",
                result.item,
                result.display_date(),
                result.timezone_name()
            );
        }
        Commands::Schedule {
            rotation,
            from,
            days,
            out_csv,
            out_json,
        } => {
            let (config, tz) = resolve(&rotation)?;
            let from = from.unwrap_or_else(|| calculator.today(tz));
            let entries = daily_rotator::build_schedule(&config, from, days)?;
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &entries)?;
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, &entries)?;
            }
            for e in &entries {
                println!("{} | {} | {}", e.date, e.weekday, e.item);
            }
        }
    }

    Ok(())
}

fn resolve(args: &RotationArgs) -> Result<(RotationConfig, chrono_tz::Tz)> {
    let config = io::parse_config(
        &args.items,
        args.start.as_deref(),
        args.start_item.as_deref(),
        &RotationDefaults::default(),
    )?;
    let tz = parse_timezone(&args.tz)?;
    Ok((config, tz))
}
