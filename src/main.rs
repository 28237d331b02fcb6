use clap::{Parser, Subcommand};
use engnotation::domains;
use engnotation::logging::{init_logging, LogConfig};
use engnotation::notation::{format_scaled, Engine, EngineConfig, Normalized, DEFAULT_DIGITS};
use std::borrow::Cow;

#[derive(Parser)]
#[command(name = "engnotation")]
#[command(about = "Parse and format numbers in engineering notation", long_about = None)]
struct Cli {
    /// Built-in unit domain (see `engnotation domains`)
    #[arg(short, long, default_value = "generic", global = true)]
    domain: String,

    /// Unit table in TOML format, replaces --domain
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a value into marker, number, prefix and unit
    Split {
        /// Value to split (e.g., "1k234 Ω")
        input: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert values to the base unit of the domain
    Normalize {
        /// Values to normalize (e.g., "2.5 MHz" "100 mV")
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Print the full results as JSON
        #[arg(long)]
        json: bool,

        /// Report unparseable values as "-" instead of failing
        #[arg(long)]
        safe: bool,
    },

    /// Format numbers with an SI prefix. Several values share one prefix.
    Format {
        /// Values in the base unit
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<f64>,

        /// Unit appended after the prefix
        #[arg(short, long, default_value = "")]
        unit: String,

        /// Significant digits
        #[arg(short = 'n', long, default_value_t = DEFAULT_DIGITS)]
        digits: usize,
    },

    /// List the built-in domains
    Domains,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let engine = match load_engine(cli.config.as_deref(), &cli.domain) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Split { input, json } => split_value(&engine, &input, json),
        Commands::Normalize { inputs, json, safe } => {
            normalize_values(&engine, inputs, json, safe)
        }
        Commands::Format {
            values,
            unit,
            digits,
        } => format_values(&engine, &values, &unit, digits),
        Commands::Domains => {
            list_domains();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_engine(
    config: Option<&str>,
    domain: &str,
) -> Result<Cow<'static, Engine>, Box<dyn std::error::Error>> {
    if let Some(path) = config {
        let config = EngineConfig::load_from_file(path)?;
        return Ok(Cow::Owned(Engine::new(config)?));
    }
    match domains::engine(domain) {
        Some(engine) => Ok(Cow::Borrowed(engine)),
        None => Err(format!("Unknown domain '{}'", domain).into()),
    }
}

fn split_value(engine: &Engine, input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let token = engine.split(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&token)?);
        return Ok(());
    }

    println!("Marker: {}", token.marker);
    println!("Number: {}", token.number);
    println!("Prefix: {}", token.prefix);
    println!("Unit marker: {}", token.unit_marker);
    println!("Unit: {}", token.unit);
    Ok(())
}

fn normalize_values(
    engine: &Engine,
    inputs: Vec<String>,
    json: bool,
    safe: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let normalized = if safe {
        engine.safe_normalize(inputs.clone())
    } else {
        engine.normalize(inputs.clone())?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
        return Ok(());
    }

    let results = match normalized {
        Normalized::Many(results) => results,
        Normalized::One(result) => vec![result],
    };
    // Values of the built-in domains are in the domain's base unit
    let base = domains::base_unit(engine.domain()).filter(|unit| !unit.is_empty());

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Some(result) => {
                let unit = match base {
                    Some(base) => base,
                    None => result.unit.as_str(),
                };
                println!("{}\t{}", input, with_unit(result.value, unit));
            }
            None => println!("{}\t-", input),
        }
    }
    Ok(())
}

fn with_unit(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

fn format_values(
    engine: &Engine,
    values: &[f64],
    unit: &str,
    digits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if let [value] = values {
        println!("{}", engine.format(*value, unit, digits)?);
        return Ok(());
    }

    let (multiplier, prefix) = engine.auto_prefix_for(values, unit);
    let suffix = format!("{}{}", prefix, unit);
    for value in values {
        println!("{}", format_scaled(value * multiplier, &suffix, digits));
    }
    Ok(())
}

fn list_domains() {
    println!("Domains ({}):", domains::DOMAINS.len());
    for (name, base) in domains::DOMAINS {
        let units = domains::engine(name)
            .map(|engine| engine.table().unit_symbols().count())
            .unwrap_or(0);
        let base = if base.is_empty() { "-" } else { *base };
        println!("  - {} (base unit: {}, {} units)", name, base, units);
    }
}
