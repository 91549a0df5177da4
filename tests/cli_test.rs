//! `locale-merge` コマンドの統合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]
#![allow(deprecated)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{
    Value,
    json,
};
use tempfile::TempDir;

const LANGUAGES: [&str; 4] = ["en", "fr", "es", "de"];

/// 設定ファイルと 4 言語分のロケールファイルを用意する
fn setup_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let locales = temp_dir.path().join("locales");
    fs::create_dir(&locales).unwrap();

    for language in LANGUAGES {
        fs::write(
            locales.join(format!("{language}.json")),
            r#"{"common": {"success": {"en": "Old"}, "cancel": "Cancel"}}"#,
        )
        .unwrap();
    }

    let config = json!({
        "languages": LANGUAGES,
        "targets": {
            "en": "locales/en.json",
            "fr": "locales/fr.json",
            "es": "locales/es.json",
            "de": "locales/de.json"
        },
        "updates": {
            "common": {
                "success": {"en": "Success", "fr": "Succès", "es": "Éxito", "de": "Erfolg"},
                "error": {"en": "Error", "fr": "Erreur", "es": "Error", "de": "Fehler"}
            }
        }
    });
    let config_path = temp_dir.path().join(".locale-merge.json");
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    (temp_dir, config_path)
}

fn locale(root: &Path, language: &str) -> PathBuf {
    root.join("locales").join(format!("{language}.json"))
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn locale_merge() -> Command {
    Command::cargo_bin("locale-merge").unwrap()
}

#[test]
fn test_updates_every_locale_file() {
    let (temp_dir, config_path) = setup_workspace();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ en: updated"))
        .stdout(predicate::str::contains("✅ de: updated"));

    assert_eq!(
        read_json(&locale(temp_dir.path(), "fr")),
        json!({"common": {"success": "Succès", "cancel": "Cancel", "error": "Erreur"}})
    );
    let written = fs::read_to_string(locale(temp_dir.path(), "de")).unwrap();
    assert_eq!(
        written,
        "{\n  \"common\": {\n    \"success\": \"Erfolg\",\n    \"cancel\": \"Cancel\",\n    \"error\": \"Fehler\"\n  }\n}"
    );
}

#[test]
fn test_missing_locale_file_fails_only_that_language() {
    let (temp_dir, config_path) = setup_workspace();
    fs::remove_file(locale(temp_dir.path(), "es")).unwrap();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ es:"))
        .stdout(predicate::str::contains("✅ en: updated"))
        .stdout(predicate::str::contains("✅ fr: updated"))
        .stdout(predicate::str::contains("✅ de: updated"));

    assert_eq!(read_json(&locale(temp_dir.path(), "de"))["common"]["success"], json!("Erfolg"));
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let (temp_dir, config_path) = setup_workspace();
    let before = fs::read_to_string(locale(temp_dir.path(), "en")).unwrap();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ en: would update"));

    assert_eq!(fs::read_to_string(locale(temp_dir.path(), "en")).unwrap(), before);
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let (temp_dir, config_path) = setup_workspace();
    fs::write(
        &config_path,
        r#"{"targets": {"en": "locales/en.json"}, "updates": {"title": {"en": "Title"}}}"#,
    )
    .unwrap();
    let before = fs::read_to_string(locale(temp_dir.path(), "en")).unwrap();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"))
        .stderr(predicate::str::contains("targets.fr"))
        .stderr(predicate::str::contains("updates.title"));

    assert_eq!(fs::read_to_string(locale(temp_dir.path(), "en")).unwrap(), before);
}

#[test]
fn test_missing_config_file_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();

    locale_merge()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_subset_of_languages_with_wider_translations_is_rejected() {
    let (temp_dir, config_path) = setup_workspace();
    let mut config = read_json(&config_path);
    config["languages"] = json!(["en", "fr"]);
    config["targets"] = json!({"en": "locales/en.json", "fr": "locales/fr.json"});
    fs::write(&config_path, config.to_string()).unwrap();
    let before = fs::read_to_string(locale(temp_dir.path(), "en")).unwrap();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("updates.common.success"))
        .stderr(predicate::str::contains("No target file for \"de\", \"es\""));

    assert_eq!(fs::read_to_string(locale(temp_dir.path(), "en")).unwrap(), before);
}

#[test]
fn test_log_file_receives_diagnostics() {
    let (temp_dir, config_path) = setup_workspace();
    let log_dir = temp_dir.path().join("logs");
    fs::create_dir(&log_dir).unwrap();
    let log_path = log_dir.join("locale-merge.log");

    locale_merge()
        .env("RUST_LOG", "debug")
        .arg("--config")
        .arg(&config_path)
        .arg("--log-file")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ en: updated"));

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Loading configuration"), "unexpected log content: {log}");
    assert!(!log.contains('\u{1b}'), "log file must not contain ANSI escapes: {log}");
}

#[test]
fn test_log_file_without_file_name_exits_with_failure() {
    let (temp_dir, config_path) = setup_workspace();
    let before = fs::read_to_string(locale(temp_dir.path(), "en")).unwrap();

    locale_merge()
        .arg("--config")
        .arg(&config_path)
        .arg("--log-file")
        .arg("..")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a file path"));

    assert_eq!(fs::read_to_string(locale(temp_dir.path(), "en")).unwrap(), before);
}

/// `demos/toasts` を一時ディレクトリへコピーする
fn copy_toasts_demo() -> TempDir {
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("toasts");
    let temp_dir = TempDir::new().unwrap();
    fs::copy(demo.join("locale-merge.json"), temp_dir.path().join(".locale-merge.json")).unwrap();
    fs::create_dir(temp_dir.path().join("locales")).unwrap();
    for language in LANGUAGES {
        let file_name = format!("{language}.json");
        fs::copy(demo.join("locales").join(&file_name), temp_dir.path().join("locales").join(&file_name))
            .unwrap();
    }
    temp_dir
}

#[test]
fn test_toasts_demo_updates_all_languages() {
    let temp_dir = copy_toasts_demo();

    locale_merge()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ en: updated"))
        .stdout(predicate::str::contains("✅ fr: updated"))
        .stdout(predicate::str::contains("✅ es: updated"))
        .stdout(predicate::str::contains("✅ de: updated"));

    let fr = read_json(&locale(temp_dir.path(), "fr"));
    assert_eq!(fr["marketingDashboard"]["toasts"]["campaignCreated"], json!("Campagne créée avec succès !"));
    assert_eq!(fr["common"], json!({"cancel": "Annuler", "success": "Succès", "error": "Erreur"}));
    assert_eq!(
        read_json(&locale(temp_dir.path(), "de"))["login"],
        json!({"title": "Anmelden", "toasts": {"signInFailed": "Anmeldung fehlgeschlagen"}})
    );
    let es = fs::read_to_string(locale(temp_dir.path(), "es")).unwrap();
    assert!(es.contains("\"projectUploaded\": \"¡Proyecto subido! (Modo demostración - no guardado)\""));
}
