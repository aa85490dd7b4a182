//! JSON 언어 플러그인
//!
//! # 파일 형식
//! ```json
//! {
//!   "code": "ita",
//!   "name": "이탈리아어",
//!   "iso639": { "part1": "it", "part2": "ita", "part3": "ita" },
//!   "vowels": "aeiou",
//!   "variables": { "soft": "ei" },
//!   "temporary": "%",
//!   "normalize_overrides": { "À": "a" },
//!   "notation": [
//!     ["h", null],
//!     ["c{<soft>}", "C"],
//!     ["C", [{ "cho": "ㅊ" }]],
//!     ["a", [{ "jung": "ㅏ" }]]
//!   ]
//! }
//! ```
//!
//! 규칙 값은 `null`(삭제), 문자열(바꿔 쓰기), 음소 목록(확정) 중 하나입니다.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::jamo::{is_choseong, is_jungseong, jongseong_index};
use crate::core::phoneme::Phoneme;
use crate::error::{HangulizeError, Result};
use crate::language::{Iso639, Language, Normalizer, DEFAULT_SPECIAL};
use crate::notation::{Notation, Replacement, Rule};

/// 플러그인 파일의 언어 정의
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub iso639: Iso639,
    pub vowels: String,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    /// 생략하면 기본 보호 문자
    #[serde(default)]
    pub special: Option<String>,
    #[serde(default)]
    pub temporary: String,
    #[serde(default)]
    pub normalize_overrides: BTreeMap<String, String>,
    pub notation: Vec<RuleSpec>,
}

/// `[pattern, value]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec(pub String, pub Option<ValueSpec>);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    Rewrite(String),
    Resolve(Vec<Phoneme>),
}

impl LanguageSpec {
    /// JSON 문자열에서 로드
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HangulizeError::PluginLoad(e.to_string()))
    }

    /// JSON 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| HangulizeError::PluginLoad(format!("{}: {}", path.display(), e)))
    }

    /// 언어 값으로 변환 (자모와 대응표 형식 검사)
    pub fn into_language(self) -> Result<Language> {
        if self.code.trim().is_empty() {
            return Err(HangulizeError::PluginLoad("empty language code".into()));
        }

        let mut rules = Vec::with_capacity(self.notation.len());
        for RuleSpec(pattern, value) in self.notation {
            let replacement = match value {
                None => Replacement::Delete,
                Some(ValueSpec::Rewrite(text)) => Replacement::Rewrite(text),
                Some(ValueSpec::Resolve(phonemes)) => {
                    for phoneme in &phonemes {
                        check_phoneme(&pattern, phoneme)?;
                    }
                    Replacement::Resolve(phonemes)
                }
            };
            rules.push(Rule::new(pattern, replacement));
        }

        let mut overrides = Vec::with_capacity(self.normalize_overrides.len());
        for (key, value) in &self.normalize_overrides {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => overrides.push((c, value.as_str())),
                _ => {
                    return Err(HangulizeError::PluginLoad(format!(
                        "normalize override key '{}' must be one character",
                        key
                    )))
                }
            }
        }

        let mut language = Language::new(self.code.to_lowercase(), Notation::new(rules))
            .with_name(self.name.unwrap_or_else(|| self.code.clone()))
            .with_iso639(self.iso639)
            .with_vowels(&self.vowels)
            .with_special(self.special.as_deref().unwrap_or(DEFAULT_SPECIAL))
            .with_temporary(&self.temporary)
            .with_normalizer(Normalizer::roman(&overrides));
        for (name, chars) in &self.variables {
            language = language.with_variable(name.as_str(), chars);
        }
        Ok(language)
    }
}

fn check_phoneme(pattern: &str, phoneme: &Phoneme) -> Result<()> {
    let valid = match phoneme {
        Phoneme::Choseong(c) => is_choseong(*c),
        Phoneme::Jungseong(c) => is_jungseong(*c),
        Phoneme::Jongseong(c) => jongseong_index(*c).is_some(),
        Phoneme::Impurity(_) => true,
    };
    if valid {
        Ok(())
    } else {
        Err(HangulizeError::PluginLoad(format!(
            "rule '{}': {:?} is not a valid jamo for its position",
            pattern, phoneme
        )))
    }
}
