//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Value,
    json,
};

use crate::ir::update_tree::{
    Translations,
    UpdateTree,
};

/// テストで使用する言語コード（設定のデフォルトと同じ順序）
pub(crate) const LANGUAGES: [&str; 4] = ["en", "fr", "es", "de"];

/// `LANGUAGES` を `Vec<String>` に変換する
pub(crate) fn languages() -> Vec<String> {
    LANGUAGES.iter().map(ToString::to_string).collect()
}

/// 4 言語分の翻訳を作成する（引数は en, fr, es, de の順）
pub(crate) fn translations(en: &str, fr: &str, es: &str, de: &str) -> Translations {
    Translations::new().with("en", en).with("fr", fr).with("es", es).with("de", de)
}

/// `common.success` と `common.error` のみを含む更新ツリー
pub(crate) fn common_update_tree() -> UpdateTree {
    UpdateTree::new().namespace(
        "common",
        UpdateTree::new()
            .leaf("success", translations("Success", "Succès", "Éxito", "Erfolg"))
            .leaf("error", translations("Error", "Erreur", "Error", "Fehler")),
    )
}

/// 機能領域 → トースト種別 → メッセージキー の階層を含む更新ツリー
///
/// `sample_updates_json` と同じ内容
pub(crate) fn sample_update_tree() -> UpdateTree {
    let toast = UpdateTree::new()
        .namespace(
            "success",
            UpdateTree::new()
                .leaf(
                    "created",
                    translations("Project created", "Projet créé", "Proyecto creado", "Projekt erstellt"),
                )
                .leaf(
                    "deleted",
                    translations(
                        "Project deleted",
                        "Projet supprimé",
                        "Proyecto eliminado",
                        "Projekt gelöscht",
                    ),
                ),
        )
        .namespace(
            "error",
            UpdateTree::new().leaf(
                "saveFailed",
                translations(
                    "Could not save the project",
                    "Impossible d'enregistrer le projet",
                    "No se pudo guardar el proyecto",
                    "Projekt konnte nicht gespeichert werden",
                ),
            ),
        );

    common_update_tree().namespace("projects", UpdateTree::new().namespace("toast", toast))
}

/// 設定ファイルの `updates` に書く形式の `sample_update_tree`
pub(crate) fn sample_updates_json() -> Value {
    json!({
        "common": {
            "success": {"en": "Success", "fr": "Succès", "es": "Éxito", "de": "Erfolg"},
            "error": {"en": "Error", "fr": "Erreur", "es": "Error", "de": "Fehler"}
        },
        "projects": {
            "toast": {
                "success": {
                    "created": {
                        "en": "Project created",
                        "fr": "Projet créé",
                        "es": "Proyecto creado",
                        "de": "Projekt erstellt"
                    },
                    "deleted": {
                        "en": "Project deleted",
                        "fr": "Projet supprimé",
                        "es": "Proyecto eliminado",
                        "de": "Projekt gelöscht"
                    }
                },
                "error": {
                    "saveFailed": {
                        "en": "Could not save the project",
                        "fr": "Impossible d'enregistrer le projet",
                        "es": "No se pudo guardar el proyecto",
                        "de": "Projekt konnte nicht gespeichert werden"
                    }
                }
            }
        }
    })
}

/// ロケールファイルを書き込み、そのパスを返す
pub(crate) fn write_locale(dir: &Path, file_name: &str, content: &Value) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    path
}

/// ロケールファイルを読み込んで JSON として返す
pub(crate) fn read_locale(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
