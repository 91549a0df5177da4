//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    MergeJob,
    MergeSettings,
};

/// 設定ファイルのデフォルト名
pub const CONFIG_FILE_NAME: &str = ".locale-merge.json";

/// 設定ファイルを読み込む
///
/// # Arguments
/// * `config_path` - 設定ファイルのパス
///
/// # Returns
/// - `Ok(settings)`: 読み込みに成功（バリデーションは未実施）
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイルが存在しない
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_settings(config_path: &Path) -> Result<MergeSettings, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Err(ConfigError::NotFound(config_path.to_path_buf()));
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: MergeSettings = serde_json::from_str(&content)?;

    Ok(settings)
}

/// 設定ファイルを読み込み、バリデーションして実行可能なジョブに変換する
///
/// 相対パスのターゲットは設定ファイルのディレクトリを基準に解決する。
/// この時点ではロケールファイルには一切触れない。
///
/// # Errors
/// - [`load_settings`] のエラー
/// - バリデーションエラー
pub fn load_job(config_path: &Path) -> Result<MergeJob, ConfigError> {
    let settings = load_settings(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));

    let job = settings.to_job(base_dir)?;
    tracing::debug!(
        languages = job.targets().len(),
        entries = job.updates().len(),
        "Configuration loaded successfully"
    );

    Ok(job)
}
