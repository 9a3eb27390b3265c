use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use natal_chart::{
    Chart, ChartConfig, ChartInput, ChartReport, ChartRequest, ErrorResponse, GeoLocation, Locale,
    deg_to_dms, find_aspects, handle_request, house_cusps, sign_position,
};
use natal_core::{Body, body_position_with};
use natal_time::{JulianDay, OffsetSource, UtcOffset, julian_day_from_strings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart calculator", version)]
struct Cli {
    /// JSON config file (locale, orbs, retrograde baseline)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output language: en or fr (overrides the config file)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Reject a --timezone that is not exactly UTC±N instead of using UTC+0
    #[arg(long, global = true)]
    strict_timezone: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart from birth data
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// UTC offset (UTC+N / UTC-N)
        #[arg(long, default_value = "UTC+0", allow_hyphen_values = true)]
        timezone: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Print the JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Answer a JSON chart request read from a file, or stdin with "-"
    Request {
        /// Path to the request body
        input: String,
    },
    /// Julian Day for a civil date and time
    Jd {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Local time (HH:MM)
        time: String,
        /// UTC offset (UTC+N / UTC-N)
        #[arg(long, default_value = "UTC+0", allow_hyphen_values = true)]
        timezone: String,
    },
    /// Position of one body at a Julian Day
    Position {
        /// Body name (Sun, Moon, ..., Pluto, North Node)
        body: String,
        /// Julian Day
        #[arg(long)]
        jd: f64,
    },
    /// Twelve house cusps at a Julian Day and location
    Houses {
        /// Julian Day
        #[arg(long)]
        jd: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Zodiac sign and degree of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Aspects among bodies given as NAME=LONGITUDE
    Aspects {
        /// e.g. Sun=10 Moon=190 Mars=72.5
        #[arg(required = true)]
        positions: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, lang: Option<&str>) -> ChartConfig {
    let mut config = match path {
        Some(p) => ChartConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", p.display());
            std::process::exit(1);
        }),
        None => ChartConfig::default(),
    };
    if let Some(tag) = lang {
        config.locale = Locale::from_tag(tag).unwrap_or_else(|| {
            eprintln!("Invalid language: {tag} (en or fr)");
            std::process::exit(1);
        });
    }
    debug!(?config, "effective config");
    config
}

fn require_body(name: &str) -> Body {
    Body::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid body name: {name}");
        eprintln!(
            "Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto, North Node"
        );
        std::process::exit(1);
    })
}

fn parse_position(arg: &str) -> (Body, f64) {
    let Some((name, lon)) = arg.split_once('=') else {
        eprintln!("Expected NAME=LONGITUDE, got '{arg}'");
        std::process::exit(1);
    };
    let lon: f64 = lon.trim().parse().unwrap_or_else(|e| {
        eprintln!("Invalid longitude '{lon}': {e}");
        std::process::exit(1);
    });
    (require_body(name), lon)
}

fn check_strict_timezone(timezone: &str) {
    if let Err(e) = timezone.parse::<UtcOffset>() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_input(input: &str) -> String {
    let result = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(input)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to read {input}: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(chart: &Chart, report: &ChartReport) {
    println!("{}", chart.julian_day);
    println!();
    println!("Bodies:");
    for p in &report.planets {
        let dms = deg_to_dms(p.degree);
        println!(
            "  {:<12} {:>10.4}  {:<12} {:>2}°{:02}'  house {:>2}{}",
            p.name,
            p.longitude,
            p.sign,
            dms.degrees,
            dms.minutes,
            p.house,
            if p.retrograde { "  R" } else { "" }
        );
    }
    println!();
    println!("Houses:");
    for h in &report.houses {
        println!("  {:>2}  {:>10.4}  {}", h.number, h.longitude, h.sign);
    }
    println!();
    println!("Aspects:");
    for a in &report.aspects {
        println!(
            "  {:<12} {:<12} {:<12} {:>5.1}°  orb {:.2}°",
            a.planet1, a.aspect, a.planet2, a.angle, a.orb
        );
    }
    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for w in &report.warnings {
            println!("  {}", w.message);
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.lang.as_deref());

    match cli.command {
        Commands::Chart {
            date,
            time,
            timezone,
            lat,
            lon,
            json,
        } => {
            if cli.strict_timezone {
                check_strict_timezone(&timezone);
            }
            let chart = ChartInput::parse(&date, &time, &timezone, &lat, &lon)
                .and_then(|input| natal_chart::compute_chart(&input, &config))
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            let report = ChartReport::new(&chart, config.locale);
            if json {
                print_json(&report);
            } else {
                print_chart(&chart, &report);
            }
        }

        Commands::Request { input } => {
            let body = read_input(&input);
            let outcome = match serde_json::from_str::<ChartRequest>(&body) {
                Ok(request) => handle_request(&request, &config),
                Err(e) => Err(ErrorResponse {
                    status: 400,
                    error: format!("malformed request body: {e}"),
                }),
            };
            match outcome {
                Ok(report) => print_json(&report),
                Err(resp) => {
                    print_json(&resp);
                    eprintln!("status {}", resp.status);
                    std::process::exit(1);
                }
            }
        }

        Commands::Jd {
            date,
            time,
            timezone,
        } => {
            if cli.strict_timezone {
                check_strict_timezone(&timezone);
            }
            match julian_day_from_strings(&date, &time, &timezone) {
                Ok((jd, source)) => {
                    println!("{:.6}", jd.value());
                    if source == OffsetSource::Defaulted {
                        eprintln!("warning: timezone '{timezone}' not understood, used UTC+0");
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Position { body, jd } => {
            let body = require_body(&body);
            let pos = body_position_with(body, JulianDay::from_value(jd), &config.position);
            let sp = sign_position(pos.longitude_deg);
            let sign = match config.locale {
                Locale::English => sp.sign.name(),
                Locale::French => sp.sign.french_name(),
            };
            println!("Longitude: {:.6} deg", pos.longitude_deg);
            println!("Latitude:  {:.6} deg", pos.latitude_deg);
            println!("Sign:      {sign} {}", sp.dms);
            println!("Retrograde: {}", pos.retrograde);
        }

        Commands::Houses { jd, lat, lon } => {
            let cusps = house_cusps(JulianDay::from_value(jd), &GeoLocation::new(lat, lon))
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            for (i, &cusp) in cusps.as_array().iter().enumerate() {
                let sp = sign_position(cusp);
                println!("House {:>2}: {:>10.4} deg  {} {}", i + 1, cusp, sp.sign, sp.dms);
            }
            if !cusps.is_circular_sequence() {
                eprintln!("warning: cusps are not in circular order; houses overlap");
            }
        }

        Commands::Sign { lon } => {
            let sp = sign_position(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in sign)",
                sp.sign.name(),
                sp.sign.french_name(),
                sp.dms,
                sp.degrees_in_sign
            );
        }

        Commands::Aspects { positions } => {
            let bodies: Vec<(Body, f64)> = positions.iter().map(|p| parse_position(p)).collect();
            for (i, (body, _)) in bodies.iter().enumerate() {
                if bodies[..i].iter().any(|(seen, _)| seen == body) {
                    eprintln!("Body given more than once: {body}");
                    std::process::exit(1);
                }
            }
            let aspects = find_aspects(&bodies, &config.orbs);
            if aspects.is_empty() {
                println!("No aspects");
            }
            for a in &aspects {
                let kind = match config.locale {
                    Locale::English => a.kind.name(),
                    Locale::French => a.kind.french_name(),
                };
                println!(
                    "{} - {}: {kind} ({:.0}°), separation {:.4}°, orb {:.4}°",
                    a.first,
                    a.second,
                    a.angle_deg(),
                    a.separation_deg,
                    a.orb_deg
                );
            }
        }
    }
}
