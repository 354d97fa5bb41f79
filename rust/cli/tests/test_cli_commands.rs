use blackjack_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run_args(&["blackjack", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "deal", "score", "sim", "cfg"] {
        assert!(
            stdout.contains(cmd),
            "help should list subcommand `{}`",
            cmd
        );
    }
}

#[test]
fn version_exits_zero() {
    let (code, stdout, _) = run_args(&["blackjack", "--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (code, _, stderr) = run_args(&["blackjack"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: blackjack <command> [options]"));
}

#[test]
fn deal_is_deterministic_per_seed() {
    let (code_a, a, _) = run_args(&["blackjack", "deal", "--seed", "42"]);
    let (code_b, b, _) = run_args(&["blackjack", "deal", "--seed", "42"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(a, b);
    assert!(a.contains("Deck: 48 cards left"));
    assert!(!a.contains("??"), "deal shows both dealer cards: {a}");
}

#[test]
fn deal_differs_across_seeds() {
    let (_, a, _) = run_args(&["blackjack", "deal", "--seed", "1"]);
    let (_, b, _) = run_args(&["blackjack", "deal", "--seed", "2"]);
    assert_ne!(a, b);
}

#[test]
fn score_reports_blackjack() {
    let (code, stdout, stderr) = run_args(&["blackjack", "score", "AS", "KH"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Score: 21"));
    assert!(stdout.contains("Blackjack: yes"));
    assert!(stdout.contains("Bust: no"));
}

#[test]
fn score_demotes_aces_when_needed() {
    let (code, stdout, _) = run_args(&["blackjack", "score", "as", "ad", "9c"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 21"));
    assert!(stdout.contains("Soft: yes"));
}

#[test]
fn score_reports_bust() {
    let (code, stdout, _) = run_args(&["blackjack", "score", "KS", "QS", "2H"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 22"));
    assert!(stdout.contains("Bust: yes"));
}

#[test]
fn score_rejects_bad_notation() {
    let (code, stdout, stderr) = run_args(&["blackjack", "score", "AS", "1X"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: Invalid input"));
}

#[test]
fn sim_prints_tallies() {
    let (code, stdout, stderr) =
        run_args(&["blackjack", "sim", "--rounds", "25", "--seed", "7"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("sim: rounds=25 seed=7"));
    assert!(stdout.contains("Player wins:"));
    assert!(stdout.contains("Dealer wins:"));
    assert!(stdout.contains("Draws:"));
}

#[test]
fn sim_rejects_zero_rounds() {
    let (code, _, stderr) = run_args(&["blackjack", "sim", "--rounds", "0"]);
    assert_eq!(code, 2);
    assert!(!stderr.is_empty());
}

#[test]
fn sim_writes_round_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("rounds.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, _, stderr) = run_args(&[
        "blackjack", "sim", "--rounds", "8", "--seed", "3", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 8);
    for rec in &records {
        assert_eq!(rec["seed"].as_u64(), Some(3));
        let result = rec["result"].as_str().unwrap();
        assert!(["player_win", "dealer_win", "draw"].contains(&result));
        assert!(rec["ts"].is_string());
    }
}
