use irms::cli::{run_command, Commands};
use irms::config::IrmsConfig;
use irms::replay::ReplaySummary;
use std::fs;
use tempfile::TempDir;

#[test]
fn replay_script_file_end_to_end() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = dir.path().join("session.irms");
    fs::write(
        &script,
        "\
# scenario: member floor then supervisor override
register john GoodPass1!
authenticate john GoodPass1!
submit john M1 3
submit john M2 4
submit john M3 3
saved M3 3
promote john 1234
submit john M3 3
get john 2
get john -1
",
    )
    .expect("should write script");

    let mut config = IrmsConfig::default();
    config.badges.allow_list = vec!["1234".to_string()];

    let mut out = Vec::new();
    let summary = run_command(&Commands::Replay { script }, &config, &mut out)
        .expect("replay should run")
        .expect("replay returns a summary");
    let text = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        summary,
        ReplaySummary {
            commands: 10,
            failures: 2
        }
    );
    assert!(lines[4].starts_with("error submit john M3 3"));
    assert_eq!(lines[5], "saved M3 3 -> false");
    assert_eq!(lines[7], "ok submit john M3 3");
    assert_eq!(lines[8], "ok get john 2 -> M3 3");
    assert!(lines[9].ends_with("[IndexOutOfBounds]"));
}
