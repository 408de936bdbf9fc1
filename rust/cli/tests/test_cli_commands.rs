use railbird_cli::run;
use railbird_engine::logger::HandRecord;
use serial_test::serial;
use std::fs;

const VARS: [&str; 8] = [
    "RAILBIRD_CONFIG",
    "RAILBIRD_SEED",
    "RAILBIRD_BOTS",
    "RAILBIRD_DIFFICULTY",
    "RAILBIRD_STARTING_CHIPS",
    "RAILBIRD_SMALL_BLIND",
    "RAILBIRD_BIG_BLIND",
    "RAILBIRD_SHOWDOWN",
];

fn clear_env() {
    for v in VARS {
        unsafe { std::env::remove_var(v) };
    }
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["railbird"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn hands_played(stdout: &str) -> usize {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Hands played: "))
        .and_then(|n| n.trim().parse().ok())
        .expect("summary line")
}

#[test]
fn help_goes_to_stdout_with_success() {
    let (code, out, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));
    assert!(out.contains("sim"));
    assert!(out.contains("cfg"));
}

#[test]
fn unknown_command_lists_the_commands() {
    let (code, _, err) = run_cli(&["deal"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: railbird <command>"));
    assert!(err.contains("  sim"));
}

#[test]
#[serial]
fn sim_writes_one_record_per_hand() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("hands.jsonl");
    let (code, out, err) = run_cli(&[
        "sim",
        "--hands",
        "5",
        "--seed",
        "1",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Chips in play: 30000 (conserved)"));

    let played = hands_played(&out);
    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), played);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.hand_number as usize, i + 1);
        assert_eq!(r.seed, Some(1));
        assert!(!r.winners.is_empty());
        assert!(r.pot > 0);
        assert!(r.ts.is_some());
    }
}

#[test]
#[serial]
fn sim_is_reproducible_for_a_seed() {
    clear_env();
    let a = run_cli(&["sim", "--hands", "4", "--seed", "99", "--bots", "3"]);
    let b = run_cli(&["sim", "--hands", "4", "--seed", "99", "--bots", "3"]);
    assert_eq!(a.0, 0);
    assert_eq!(a.1, b.1);
}

#[test]
#[serial]
fn sim_rejects_zero_hands() {
    clear_env();
    let (code, _, err) = run_cli(&["sim", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn bots_out_of_range_fail_parsing() {
    let (code, _, err) = run_cli(&["sim", "--hands", "1", "--bots", "12"]);
    assert_eq!(code, 2);
    assert!(err.contains("bots must be within 1..=10"));
}

#[test]
#[serial]
fn cfg_reports_values_and_sources() {
    clear_env();
    unsafe { std::env::set_var("RAILBIRD_DIFFICULTY", "hard") };
    let (code, out, _) = run_cli(&["cfg"]);
    clear_env();

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["difficulty"]["source"], "env");
    assert_eq!(json["bots"]["value"], 5);
    assert_eq!(json["bots"]["source"], "default");
    assert_eq!(json["big_blind"]["value"], 50);
}

#[test]
#[serial]
fn broken_config_file_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("railbird.toml");
    fs::write(&path, "bots = \"many\"").unwrap();
    unsafe { std::env::set_var("RAILBIRD_CONFIG", &path) };
    let (code, _, err) = run_cli(&["cfg"]);
    clear_env();

    assert_eq!(code, 2);
    assert!(err.contains("Configuration error: cannot parse config file"));
}

#[test]
#[serial]
fn config_file_feeds_the_simulation() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("railbird.toml");
    fs::write(
        &path,
        "bots = 2\nstarting_chips = 1000\nsmall_blind = 10\nbig_blind = 20\nshowdown = \"best-hand\"\n",
    )
    .unwrap();
    unsafe { std::env::set_var("RAILBIRD_CONFIG", &path) };
    let (code, out, err) = run_cli(&["sim", "--hands", "3", "--seed", "5"]);
    clear_env();

    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("bots=2"));
    assert!(out.contains("Chips in play: 3000 (conserved)"));
}
