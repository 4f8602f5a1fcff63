// Panlatin CLI
// Try out, inspect and validate diacritic-combination profiles

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use panlatin_core::config::Config;
use panlatin_core::{check_table, transliterate, CharCode, Digit, MarkFamily, ProfileRegistry};

/// Type accented Latin letters with a plain keyboard: letter, then digit
#[derive(Parser, Debug)]
#[command(name = "panlatin")]
#[command(author = "panlatin contributors")]
#[command(version)]
#[command(about = "Letter + digit diacritic combiner", long_about = None)]
struct Args {
    /// TOML configuration file (default: ~/.config/panlatin/config.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Profile to use instead of the configured default
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate config and exit
    #[arg(long)]
    check_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show what DIGIT typed after CHAR turns into
    Combine {
        /// Base character (a single character, U+XXXX, or decimal code)
        #[arg(value_name = "CHAR")]
        base: String,
        #[arg(value_name = "DIGIT", allow_hyphen_values = true)]
        digit: i64,
    },
    /// Feed keystrokes through a text field and print the result
    Type {
        #[arg(value_name = "KEYS")]
        keys: Vec<String>,
    },
    /// List registered profiles
    Profiles,
    /// Dump every row of a profile
    Table {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Print what each digit does
    Marks,
    /// Check the cross-references of one or all profiles
    Check {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}

/// Main application state
struct Application {
    config: Config,
    registry: ProfileRegistry,
    profile: String,
}

impl Application {
    /// Load the config and register its profiles on top of the built-ins
    fn new(args: &Args) -> anyhow::Result<Self> {
        let config = match &args.config {
            Some(path) => Config::from_toml_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::load_default().context("loading default config")?,
        };

        let registry = ProfileRegistry::with_defaults();
        let loaded = config.register_into(&registry)?;
        log::debug!("Registered {} profile(s) from config", loaded);

        let profile = args
            .profile
            .clone()
            .unwrap_or_else(|| config.default_profile.clone());

        Ok(Self {
            config,
            registry,
            profile,
        })
    }

    /// Validate configuration
    fn validate(&self) -> anyhow::Result<bool> {
        let mut clean = true;
        for definition in &self.config.profiles {
            let profile = self.registry.lookup(&definition.name)?;
            let report = check_table(profile.table());
            clean &= report.is_clean();
            for violation in &report.violations {
                println!("{}: {}", definition.name, violation);
            }
        }
        if !self.registry.contains(&self.profile) {
            println!("Default profile '{}' is not defined", self.profile);
            clean = false;
        }
        if clean {
            println!("Configuration is valid");
        }
        Ok(clean)
    }

    fn run(&self, command: &Command) -> anyhow::Result<bool> {
        match command {
            Command::Combine { base, digit } => {
                let base: CharCode = base.parse().map_err(anyhow::Error::msg)?;
                match self.registry.combine(&self.profile, base, *digit)? {
                    Some(code) => {
                        println!("{} + {} -> {} (U+{:04X})", base, digit, code, code.value())
                    }
                    None => println!("{} + {} -> no-op", base, digit),
                }
            }
            Command::Type { keys } => {
                if !self.registry.contains(&self.profile) {
                    log::warn!(
                        "Unknown profile '{}', digits are typed literally",
                        self.profile
                    );
                }
                let text = transliterate(&self.registry, &self.profile, &keys.join(" "));
                println!("{}", text);
            }
            Command::Profiles => {
                for profile in self.registry.profiles() {
                    let marker = if profile.name() == self.profile { "*" } else { " " };
                    println!(
                        "{} {:<12} {:>4} rows",
                        marker,
                        profile.name(),
                        profile.table().len()
                    );
                }
            }
            Command::Table { name } => {
                let name = name.as_deref().unwrap_or(&self.profile);
                let profile = self.registry.lookup(name)?;
                print!("{:<8}", "base");
                for digit in Digit::all() {
                    print!("{:>3}", digit.value());
                }
                println!();
                for (code, row) in profile.table().sorted_rows() {
                    print!("{:<8}", code.to_string());
                    for (_, target) in row.entries() {
                        match target {
                            Some(target) => print!("{:>3}", target.to_string()),
                            None => print!("{:>3}", "."),
                        }
                    }
                    println!();
                }
            }
            Command::Marks => {
                for family in MarkFamily::all() {
                    println!(
                        "{}  {:<11} {:<16} {}",
                        family.digit(),
                        family.to_string(),
                        family.applies_to(),
                        family.description()
                    );
                }
                println!("\\  escape      then a digit: type the digit itself");
            }
            Command::Check { name } => {
                let profiles = match name {
                    Some(name) => vec![self.registry.lookup(name)?],
                    None => self.registry.profiles(),
                };
                let mut clean = true;
                for profile in profiles {
                    let report = check_table(profile.table());
                    println!(
                        "{}: {} rows, {} transitions, {} problem(s)",
                        profile.name(),
                        report.rows,
                        report.transitions,
                        report.violations.len()
                    );
                    for violation in &report.violations {
                        println!("  {}", violation);
                    }
                    clean &= report.is_clean();
                }
                return Ok(clean);
            }
        }
        Ok(true)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let app = Application::new(&args)?;

    if args.check_config {
        let clean = app.validate()?;
        return Ok(if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let Some(command) = &args.command else {
        bail!("no command given (try --help)");
    };

    let ok = app.run(command)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
