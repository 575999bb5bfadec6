//! Stimulus Rater - headless experiment tooling
//!
//! Simulates stimulus trajectories, builds trial schedules, and inspects
//! recorded session logs.

use stimulus_rater::app::cli::{Cli, Commands, ConfigAction};
use stimulus_rater::app::config::Config;
use stimulus_rater::motion::{Approach, UniformJitter};
use stimulus_rater::trial::{nominal, rating_schedule, SessionLog};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Simulate { speed, seed, output } => {
            run_simulate(speed, seed, output, &config)?;
        }
        Commands::Schedule { stimuli, seed } => {
            run_schedule(&stimuli, seed, &config);
        }
        Commands::Inspect { detailed } => {
            run_inspect(detailed)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_simulate(
    speed: i32,
    seed: Option<u64>,
    output: Option<std::path::PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let params = config.motion_params(speed);
    let mut jitter = match seed {
        Some(s) => UniformJitter::seeded(s),
        None => UniformJitter::from_entropy(),
    };

    info!(
        speed,
        crossover_y = params.crossover_y,
        stop_y = config.motion.stop_y,
        "Simulating trajectory"
    );

    let poses: Vec<_> = Approach::new(params, &mut jitter, config.motion.stop_y).collect();
    info!("Trajectory finished after {} ticks", poses.len());

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&poses)?;
            std::fs::write(&path, json)?;
            info!("Wrote {} poses to {:?}", poses.len(), path);
        }
        None => {
            println!("tick    x      y   rotation");
            for (tick, pose) in poses.iter().enumerate() {
                println!(
                    "{:>4} {:>5} {:>6} {:>10}",
                    tick + 1,
                    pose.x,
                    pose.y,
                    pose.rotation_deg
                );
            }
        }
    }

    Ok(())
}

fn run_schedule(stimuli: &[String], seed: Option<u64>, config: &Config) {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    for stimulus in stimuli {
        let speeds = rating_schedule(config.trials.repeats_per_speed, &mut rng);
        println!("{} ({} trials):", stimulus, speeds.len());
        for speed in speeds {
            println!("  speed {:>2} (nominal {})", speed, nominal(speed));
        }
    }
}

fn run_inspect(detailed: bool) -> anyhow::Result<()> {
    let sessions_dir = Cli::sessions_dir();

    if !sessions_dir.exists() {
        println!("No session logs found in {}", sessions_dir.display());
        return Ok(());
    }

    let mut entries: Vec<_> = std::fs::read_dir(&sessions_dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.path());

    println!("Session logs in {:?}:", sessions_dir);

    for entry in &entries {
        let path = entry.path();
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        match SessionLog::load(&path) {
            Ok(log) => {
                println!(
                    "  {}  (participant: {}, {} trials, questionnaire total: {})",
                    file_name,
                    log.metadata.participant,
                    log.metadata.trial_count,
                    log.questionnaire_total()
                );
                if detailed {
                    for record in &log.records {
                        println!(
                            "    {}  nominal {}  scored {}",
                            record.stimulus_id, record.nominal_speed, record.score
                        );
                    }
                }
            }
            Err(_) => {
                let fs_meta = entry.metadata()?;
                println!("  {}  ({} bytes, failed to parse)", file_name, fs_meta.len());
            }
        }
    }

    if entries.is_empty() {
        println!("  (none)");
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(Cli::sessions_dir())?;
    println!("Created sessions directory: {:?}", Cli::sessions_dir());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => {
            let value: toml::Value = toml::from_str(&config.to_toml()?)?;
            match lookup_toml(&value, &key) {
                Some(v) => println!("{} = {}", key, v),
                None => anyhow::bail!("Configuration key '{}' not found", key),
            }
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}

/// Walk a parsed TOML document by dotted key
fn lookup_toml<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.get(part))
}
