//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mcqmark() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mcqmark").unwrap()
}

const PAPER: &str = "Question 1. Which lens has virtual focus? a. Convex lens b. Concave lens c. Both d. None

Question 2. A small electric lamp placed at the focal point of convex lens produces- a. Converging beam b. Parallel beam c. Diverging beam d. Diffused beam

Question 3. In a circuit- a. Ammeter in parallel b. Both in series c. Both in parallel d. Ammeter in series and voltmeter in parallel

Question 4. A convex lens forms an image equal in size to the object when the object is placed at- a. Greater than 2f b. Less than f c. Equal to 2f d. None
";

const OFFLINE_CONFIG: &str = r#"
default_provider = "offline"
default_model = "lookup"

[providers.offline]
type = "offline"
default_answer = "a"

[providers.offline.answers]
1 = "b"
2 = "b"
3 = "d"
4 = "c"
"#;

#[test]
fn grade_inline_all_correct() {
    mcqmark()
        .args(["grade", "--model-key", "1A 2B 3C 4D", "--student", "1a2b3c4d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4/4 (100.0%)"));
}

#[test]
fn grade_partial_with_details() {
    mcqmark()
        .args([
            "grade",
            "--model-key",
            "1A 2B 3C 4D 5A",
            "--student",
            "1a 3d 5a",
            "--details",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/5 (40.0%)"))
        .stdout(predicate::str::contains("missing"))
        .stdout(predicate::str::contains("wrong"));
}

#[test]
fn grade_json_output() {
    let output = mcqmark()
        .args([
            "grade",
            "--model-key",
            "1A 2B 3C 4D 5A",
            "--student",
            "1a 2b 3d 4c 5a",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 3);
    assert_eq!(json["total"], 5);
    assert_eq!(json["results"]["3"]["submitted"], "D");
}

#[test]
fn grade_from_files() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("model.txt");
    let student = dir.path().join("student.txt");
    std::fs::write(&model, "1A\n2B\n3C\n4D\n").unwrap();
    std::fs::write(&student, "1 a\n2b\n3 c\n4d\n").unwrap();

    mcqmark()
        .arg("grade")
        .arg("--model-key-file")
        .arg(&model)
        .arg("--student-file")
        .arg(&student)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4/4"));
}

#[test]
fn grade_missing_file_fails() {
    mcqmark()
        .args([
            "grade",
            "--model-key-file",
            "does-not-exist.txt",
            "--student",
            "1A",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn grade_requires_student_answers() {
    mcqmark()
        .args(["grade", "--model-key", "1A"])
        .assert()
        .failure();
}

#[test]
fn grade_empty_model_key() {
    mcqmark()
        .args(["grade", "--model-key", "", "--student", "1 A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/0 (0.0%)"));
}

#[test]
fn parse_prints_canonical_key() {
    let output = mcqmark()
        .args(["parse", "--text", "1 a\n2B\n3 c\n4d"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"1": "A", "2": "B", "3": "C", "4": "D"})
    );
}

#[test]
fn parse_text_format() {
    mcqmark()
        .args(["parse", "--text", "2b 1a", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1 A\n2 B\n"));
}

#[test]
fn split_question_paper() {
    let dir = TempDir::new().unwrap();
    let paper = dir.path().join("paper.txt");
    std::fs::write(&paper, PAPER).unwrap();

    mcqmark()
        .arg("split")
        .arg("--file")
        .arg(&paper)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Which lens has virtual focus?"))
        .stdout(predicate::str::contains("[4] A convex lens"))
        .stderr(predicate::str::contains("4 question(s)"));
}

#[test]
fn json_from_stdin() {
    let output = mcqmark()
        .arg("json")
        .write_stdin(r#"{"model_answers": "1A 2B 3C 4D 5A", "student_answers": "1a 3c 5a"}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 3);
    assert_eq!(json["total"], 5);
    assert_eq!(json["results"]["2"]["submitted"], serde_json::Value::Null);
}

#[test]
fn json_missing_field_fails() {
    mcqmark()
        .arg("json")
        .write_stdin(r#"{"model_answers": "1A"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"))
        .stderr(predicate::str::contains("student_answers"));
}

#[test]
fn generate_with_offline_provider() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("mcqmark.toml");
    let paper = dir.path().join("paper.txt");
    let key_out = dir.path().join("key.txt");
    std::fs::write(&config, OFFLINE_CONFIG).unwrap();
    std::fs::write(&paper, PAPER).unwrap();

    mcqmark()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--questions")
        .arg(&paper)
        .arg("--student")
        .arg("1 b 2 b 3 a 4 c")
        .arg("--output")
        .arg(&key_out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 B\n2 B\n3 D\n4 C"))
        .stdout(predicate::str::contains("Score: 3/4 (75.0%)"));

    let saved = std::fs::read_to_string(&key_out).unwrap();
    assert_eq!(saved, "1 B\n2 B\n3 D\n4 C\n");
}

#[test]
fn generate_unknown_provider_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("mcqmark.toml");
    let paper = dir.path().join("paper.txt");
    std::fs::write(&config, OFFLINE_CONFIG).unwrap();
    std::fs::write(&paper, PAPER).unwrap();

    mcqmark()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--questions")
        .arg(&paper)
        .arg("--provider")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider 'nope' not found"));
}

#[test]
fn list_models_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("mcqmark.toml");
    std::fs::write(&config, OFFLINE_CONFIG).unwrap();

    mcqmark()
        .arg("list-models")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider: offline"))
        .stdout(predicate::str::contains("lookup"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    mcqmark()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mcqmark.toml"));

    let written = std::fs::read_to_string(dir.path().join("mcqmark.toml")).unwrap();
    assert!(written.contains("[providers.offline]"));

    mcqmark()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
