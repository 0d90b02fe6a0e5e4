use std::fs;
use std::path::PathBuf;

use hoops_model::{FeaturePlan, JoinHow, PlanError};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("hoops_model_plan_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_plan_from_file() {
    let path = temp_file(
        "plan.toml",
        "game_count = false\n\n[[rolling]]\nstats = [\"pts\", \"ast\"]\nwindow = 10\n",
    );
    let plan = FeaturePlan::load(&path).expect("load plan");
    assert!(!plan.game_count);
    assert_eq!(plan.rolling.len(), 1);
    assert_eq!(plan.rolling[0].stats, vec!["pts", "ast"]);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn missing_plan_file_reports_path() {
    let path = std::env::temp_dir().join("hoops_model_plan_missing.toml");
    let err = FeaturePlan::load(&path).unwrap_err();
    assert!(matches!(err, PlanError::Io { .. }));
    assert!(err.to_string().contains("hoops_model_plan_missing.toml"));
}

#[test]
fn join_how_deserializes_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        how: JoinHow,
    }
    let parsed: Wrapper = serde_json::from_str(r#"{"how":"outer"}"#).unwrap();
    assert_eq!(parsed.how, JoinHow::Outer);
}
