//! End-to-end CLI runs of the shipped scenario files.

use std::process::Command;

#[derive(Debug)]
struct Kpis {
    avg_demand_gw: f64,
    peak_shortage_gw: f64,
    export_revenue_kusd: f64,
}

#[test]
fn scenario_files_run_via_cli_and_produce_distinct_dynamics() {
    let baseline = run_and_parse_kpis("scenarios/baseline.toml");
    let summer = run_and_parse_kpis("scenarios/summer_export.toml");
    let winter = run_and_parse_kpis("scenarios/winter_stress.toml");

    assert!(
        winter.avg_demand_gw > baseline.avg_demand_gw,
        "2050 electrification should raise demand: winter={:.2}, baseline={:.2}",
        winter.avg_demand_gw,
        baseline.avg_demand_gw
    );

    assert!(
        winter.peak_shortage_gw > baseline.peak_shortage_gw,
        "thin winter fleet should have worse shortage: winter={:.2}, baseline={:.2}",
        winter.peak_shortage_gw,
        baseline.peak_shortage_gw
    );

    assert!(
        summer.export_revenue_kusd > baseline.export_revenue_kusd,
        "VRE-heavy summer should outearn baseline: summer={:.1}, baseline={:.1}",
        summer.export_revenue_kusd,
        baseline.export_revenue_kusd
    );

    assert!(
        summer.avg_demand_gw < baseline.avg_demand_gw,
        "July demand should sit below January: summer={:.2}, baseline={:.2}",
        summer.avg_demand_gw,
        baseline.avg_demand_gw
    );
}

#[test]
fn month_override_changes_the_outlook_header() {
    let output = Command::new(env!("CARGO_BIN_EXE_gridmix-sim"))
        .args(["--preset", "baseline", "--month", "Jul"])
        .output()
        .expect("gridmix-sim process should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Strategic outlook: Jul"),
        "header should reflect the month override: {stdout}"
    );
}

#[test]
fn unknown_preset_fails_with_message() {
    let output = Command::new(env!("CARGO_BIN_EXE_gridmix-sim"))
        .args(["--preset", "nonexistent"])
        .output()
        .expect("gridmix-sim process should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"));
}

fn run_and_parse_kpis(path: &str) -> Kpis {
    let output = Command::new(env!("CARGO_BIN_EXE_gridmix-sim"))
        .args(["--scenario", path])
        .output()
        .expect("gridmix-sim process should run");

    assert!(
        output.status.success(),
        "scenario run failed for {path}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    Kpis {
        avg_demand_gw: parse_metric(&stdout, "Average demand:"),
        peak_shortage_gw: parse_metric(&stdout, "Peak shortage:"),
        export_revenue_kusd: parse_metric(&stdout, "Est. export revenue:"),
    }
}

fn parse_metric(stdout: &str, label: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing KPI line `{label}` in output: {stdout}"));

    let value = line
        .trim_start()
        .strip_prefix(label)
        .map(str::trim)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| panic!("invalid KPI format for line `{line}`"));

    value
        .parse()
        .unwrap_or_else(|e| panic!("cannot parse `{value}` from `{line}`: {e}"))
}
