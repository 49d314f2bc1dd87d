use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tropos_almanac::{accuracy_metrics, current_period, resolve_zodiac_position, CalendarCache};
use tropos_search::{cardinal_points, SearchConfig};
use tropos_solar::solar_longitude;
use tropos_time::UtcTime;

#[derive(Parser)]
#[command(name = "tropos", about = "Tropical solar ephemeris and zodiac calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apparent solar longitude and zodiac position for an instant
    Position {
        /// UTC instant (RFC 3339, e.g. 2025-06-21T02:42:00Z); defaults to now
        #[arg(long)]
        date: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Current period: sign, decan, next ingress, solar speed
    Current {
        /// UTC instant (RFC 3339); defaults to now
        #[arg(long)]
        date: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Annual sign-ingress calendar for a year
    Calendar {
        /// Calendar year
        #[arg(long)]
        year: i32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Equinoxes and solstices for a year
    Cardinal {
        /// Calendar year
        #[arg(long)]
        year: i32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Nominal accuracy of the longitude series
    Accuracy {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_instant(date: Option<String>) -> Result<UtcTime, Box<dyn std::error::Error>> {
    match date {
        Some(s) => {
            let dt = s.parse::<DateTime<Utc>>()?;
            Ok(UtcTime::from(dt))
        }
        None => Ok(UtcTime::now()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SearchConfig::default();

    match cli.command {
        Commands::Position { date, json } => {
            let utc = parse_instant(date)?;
            let longitude = solar_longitude(&utc)?;
            let position = resolve_zodiac_position(&utc)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&position)?);
            } else {
                println!("instant:    {utc}");
                println!("longitude:  {longitude:.5} deg");
                println!(
                    "sign:       {} ({:.3} deg in sign)",
                    position.sign.name(),
                    position.degrees_in_sign
                );
                println!(
                    "decan:      {} of {} (ruler {})",
                    position.decan.decan_index,
                    position.sign.name(),
                    position.decan.ruler.name()
                );
                println!("keywords:   {}", position.decan.keywords.join(", "));
            }
        }
        Commands::Current { date, json } => {
            let utc = parse_instant(date)?;
            let cache = CalendarCache::new(config);
            let period = current_period(&cache, &utc)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&period)?);
            } else {
                println!("instant:      {utc}");
                println!(
                    "sign:         {} ({:.3} deg in sign), decan {} ruled by {}",
                    period.position.sign.name(),
                    period.position.degrees_in_sign,
                    period.position.decan.decan_index,
                    period.position.decan.ruler.name()
                );
                println!(
                    "next ingress: {} at {} ({:.2} days)",
                    period.next_ingress.sign.name(),
                    period.next_ingress.instant,
                    period.next_ingress.days_until
                );
                println!(
                    "solar speed:  {:.5} deg/day",
                    period.solar_speed_deg_per_day
                );
            }
        }
        Commands::Calendar { year, json } => {
            let cache = CalendarCache::new(config);
            let calendar = cache.get_or_build(year)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&*calendar)?);
            } else {
                println!("annual calendar {year}");
                for entry in &calendar.entries {
                    println!(
                        "  {:<11} {}  ({:.3} days)",
                        entry.sign.name(),
                        entry.ingress,
                        entry.duration_days()
                    );
                }
            }
        }
        Commands::Cardinal { year, json } => {
            let points = cardinal_points(year, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                println!("cardinal points {year}");
                println!("  spring equinox:  {}", points.spring_equinox.utc);
                println!("  summer solstice: {}", points.summer_solstice.utc);
                println!("  autumn equinox:  {}", points.autumn_equinox.utc);
                println!("  winter solstice: {}", points.winter_solstice.utc);
            }
        }
        Commands::Accuracy { json } => {
            let metrics = accuracy_metrics();
            if json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                println!("precision class: {}", metrics.precision_class);
                println!("features:");
                for feature in metrics.features {
                    println!("  - {feature}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
