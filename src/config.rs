//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HangulizeError, Result};
use crate::language::registry::{Registry, DEFAULT_SUGGEST_THRESHOLD};

/// Hangulize 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HangulizeConfig {
    /// 언어를 지정하지 않았을 때 쓸 코드
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// 시작할 때 등록할 JSON 언어 플러그인 파일
    #[serde(default)]
    pub plugins: Vec<PathBuf>,
    /// "did you mean" 제안 기준 (정규화된 편집 거리, 0~1)
    #[serde(default = "default_suggest_threshold")]
    pub suggest_threshold: f64,
}

fn default_lang() -> String {
    "spa".to_string()
}

fn default_suggest_threshold() -> f64 {
    DEFAULT_SUGGEST_THRESHOLD
}

impl Default for HangulizeConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            plugins: Vec::new(),
            suggest_threshold: default_suggest_threshold(),
        }
    }
}

impl HangulizeConfig {
    /// 내장 언어 + 플러그인이 등록된 레지스트리
    ///
    /// 읽을 수 없는 플러그인은 경고만 남기고 건너뜀
    pub fn build_registry(&self) -> Registry {
        let mut registry = Registry::with_builtins().with_suggest_threshold(self.suggest_threshold);
        for path in &self.plugins {
            match registry.load_plugin(path) {
                Ok(code) => log::info!("loaded plugin '{}' from {}", code, path.display()),
                Err(e) => log::warn!("skipping plugin {}: {}", path.display(), e),
            }
        }
        registry
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hangulize/config.json, 없으면 ~/.config/hangulize/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("hangulize").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HangulizeConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(HangulizeError::Io(_)) => HangulizeConfig::default(),
        Err(e) => {
            log::warn!("{}: {}", path.display(), e);
            HangulizeConfig::default()
        }
    }
}

/// 지정한 파일에서 설정 로드
pub fn load_config_from(path: impl AsRef<Path>) -> Result<HangulizeConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| HangulizeError::Config(format!("{}: {}", path.display(), e)))
}

/// 설정 파일 저장
pub fn save_config(config: &HangulizeConfig) -> Result<()> {
    save_config_to(config, config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(config: &HangulizeConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| HangulizeError::Config(format!("serialization failed: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}
