use std::process::Command;

fn run_replay(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .arg("replay")
        .args(args)
        .output()
        .expect("failed to run tictactoe binary")
}

#[test]
fn replay_reports_winner() {
    let output = run_replay(&["1,1", "2,1", "1,2", "2,2", "1,3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["winner"], "X");
    assert_eq!(v["starting_player"], "X");
    assert_eq!(v["status"]["Win"], "X");
    assert_eq!(v["steps"].as_array().unwrap().len(), 5);
    assert_eq!(v["board"][0], "MarkX");
    assert_eq!(v["board"][3], "MarkO");
    assert_eq!(v["board"][8], "Empty");
}

#[test]
fn replay_records_rejections() {
    let output = run_replay(&["--first", "o", "2,2", "2,2", "4,1", "1,1"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid json");
    let steps = v["steps"].as_array().unwrap();
    assert_eq!(steps[0]["player"], "O");
    assert_eq!(steps[0]["accepted"], "Continue");
    assert_eq!(steps[1]["rejected"], "CellOccupied");
    assert_eq!(steps[2]["rejected"], "OutOfBounds");
    assert_eq!(steps[3]["player"], "X");
    assert!(v["winner"].is_null());
    assert_eq!(v["status"], "Continue");
}

#[test]
fn replay_rejects_malformed_move() {
    let output = run_replay(&["1,1", "middle"]);
    assert!(!output.status.success());
}
