use std::io::Cursor;

use blackjack_cli::run_with_input;
use serde_json::Value;
use serial_test::serial;

const VARS: [&str; 4] = [
    "BLACKJACK_CONFIG",
    "BLACKJACK_SEED",
    "BLACKJACK_STARTING_BALANCE",
    "BLACKJACK_MIN_BET",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn run_capture(args: &[&str], input: &str) -> (i32, String, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run_capture(&["blackjack", "cfg"], "");
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).unwrap()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["starting_balance"]["value"].as_u64(), Some(10_000));
    assert_eq!(json["starting_balance"]["source"].as_str(), Some("default"));
    assert_eq!(json["min_bet"]["value"].as_u64(), Some(1));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blackjack.toml");
    std::fs::write(&path, "starting_balance = 500\nmin_bet = 5\nseed = 456\n").unwrap();
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
    }

    let json = cfg_json();
    assert_eq!(json["starting_balance"]["value"].as_u64(), Some(500));
    assert_eq!(json["starting_balance"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));

    unsafe {
        std::env::set_var("BLACKJACK_SEED", "789");
        std::env::set_var("BLACKJACK_MIN_BET", "25");
    }
    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["min_bet"]["value"].as_u64(), Some(25));
    assert_eq!(json["min_bet"]["source"].as_str(), Some("env"));
    assert_eq!(json["starting_balance"]["source"].as_str(), Some("file"));
    clear_env();
}

#[test]
#[serial]
fn cli_flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_SEED", "1");
        std::env::set_var("BLACKJACK_STARTING_BALANCE", "300");
    }
    let (code, out, _) = run_capture(
        &["blackjack", "play", "--players", "1", "--seed", "2"],
        "Ann\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("play: seed=2 balance=300 min_bet=1"));
    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_is_reported() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_MIN_BET", "lots");
    }
    let (code, _, err) = run_capture(&["blackjack", "cfg"], "");
    assert_eq!(code, 2);
    assert!(err.contains("Invalid BLACKJACK_MIN_BET"));
    clear_env();
}

#[test]
#[serial]
fn min_bet_above_balance_is_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_STARTING_BALANCE", "50");
        std::env::set_var("BLACKJACK_MIN_BET", "100");
    }
    let (code, _, err) = run_capture(&["blackjack", "cfg"], "");
    assert_eq!(code, 2);
    assert!(err.contains("min_bet must not exceed starting_balance"));
    clear_env();
}

#[test]
#[serial]
fn unreadable_config_file_is_reported() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", "/nonexistent/blackjack.toml");
    }
    let (code, _, err) = run_capture(&["blackjack", "cfg"], "");
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
    clear_env();
}
