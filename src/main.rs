//! Balance simulator entry point — CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use gridmix_sim::config::ScenarioConfig;
use gridmix_sim::io::export::export_csv;
use gridmix_sim::sim::engine::run_week;
use gridmix_sim::sim::kpi::KpiReport;
use gridmix_sim::sim::season;
use gridmix_sim::sim::types::Month;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    month_override: Option<Month>,
    seed_override: Option<u64>,
    telemetry_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("gridmix-sim — weekly generation/demand balance simulator");
    eprintln!();
    eprintln!("Usage: gridmix-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, summer_export, winter_stress)");
    eprintln!("  --month <Mmm>            Override the analysis month (Jan..Dec)");
    eprintln!("  --seed <u64>             Override the demand noise seed");
    eprintln!("  --telemetry-out <path>   Export hourly records to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive dashboard");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        month_override: None,
        seed_override: None,
        telemetry_out: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--month" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --month requires a month argument (Jan..Dec)");
                    process::exit(1);
                }
                match args[i].parse::<Month>() {
                    Ok(m) => cli.month_override = Some(m),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply overrides
    if let Some(month) = cli.month_override {
        scenario.simulation.month = month;
    }
    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        let name = cli.preset.as_deref().unwrap_or(if cli.scenario_path.is_some() {
            "custom"
        } else {
            "baseline"
        });
        gridmix_sim::tui::run(&scenario, name);
        return;
    }

    // Headless run
    let input = scenario.build();
    let records = run_week(&input);
    let kpi = KpiReport::from_records(&records, &input);
    let advisory = season::advisory(input.month);

    println!(
        "Strategic outlook: {} (horizon {})",
        input.month.label(),
        input.planning_year.label()
    );
    for r in &records {
        println!("{r}");
    }
    println!("\n{kpi}");
    println!("\n{}", advisory.text);

    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&records, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
