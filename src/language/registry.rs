//! 언어 레지스트리
//!
//! 코드 -> 언어. 내장 언어는 처음 조회될 때 한 번만 만들어지고
//! 이후에는 같은 인스턴스를 공유합니다.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, LazyLock, OnceLock};

use crate::error::{HangulizeError, Result};
use crate::language::spec::LanguageSpec;
use crate::language::{tables, Language};

/// "did you mean" 제안 기준 (정규화된 편집 거리)
pub const DEFAULT_SUGGEST_THRESHOLD: f64 = 0.5;

/// 내장 언어 레지스트리
pub static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::with_builtins);

enum Source {
    Builtin(fn() -> Language),
    Loaded(Arc<Language>),
}

struct Entry {
    name: String,
    source: Source,
    instance: OnceLock<Arc<Language>>,
}

impl Entry {
    fn language(&self) -> Arc<Language> {
        match &self.source {
            Source::Loaded(language) => Arc::clone(language),
            Source::Builtin(build) => Arc::clone(self.instance.get_or_init(|| {
                let language = build();
                log::debug!("constructed language '{}'", language.code());
                Arc::new(language)
            })),
        }
    }
}

/// 언어 코드 -> 언어
pub struct Registry {
    entries: BTreeMap<String, Entry>,
    suggest_threshold: f64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("codes", &self.codes())
            .field("suggest_threshold", &self.suggest_threshold)
            .finish()
    }
}

impl Registry {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            suggest_threshold: DEFAULT_SUGGEST_THRESHOLD,
        }
    }

    /// 내장 언어가 등록된 레지스트리
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &(code, name, build) in tables::BUILTINS {
            registry.register(code, name, build);
        }
        registry
    }

    pub fn with_suggest_threshold(mut self, threshold: f64) -> Self {
        self.suggest_threshold = threshold;
        self
    }

    /// 언어 생성 함수 등록 (생성은 첫 조회 때)
    pub fn register(&mut self, code: &str, name: &str, build: fn() -> Language) {
        self.entries.insert(
            code.to_lowercase(),
            Entry {
                name: name.to_string(),
                source: Source::Builtin(build),
                instance: OnceLock::new(),
            },
        );
    }

    /// 플러그인 정의 등록. 모든 규칙을 바로 컴파일해 설정 오류를 드러냄
    pub fn register_spec(&mut self, spec: LanguageSpec) -> Result<String> {
        let language = spec.into_language()?;
        validate_code(language.code())?;
        language.compile_all()?;

        let code = language.code().to_string();
        log::debug!("registered plugin language '{}'", code);
        self.entries.insert(
            code.clone(),
            Entry {
                name: language.name().to_string(),
                source: Source::Loaded(Arc::new(language)),
                instance: OnceLock::new(),
            },
        );
        Ok(code)
    }

    /// JSON 플러그인 파일 등록
    pub fn load_plugin(&mut self, path: impl AsRef<Path>) -> Result<String> {
        self.register_spec(LanguageSpec::load(path)?)
    }

    /// 코드로 언어 조회 (대소문자 무시)
    pub fn lookup(&self, code: &str) -> Result<Arc<Language>> {
        let code = code.trim().to_lowercase();
        validate_code(&code)?;
        match self.entries.get(&code) {
            Some(entry) => Ok(entry.language()),
            None => Err(HangulizeError::UnsupportedLanguage {
                suggestion: self.suggest(&code),
                code,
            }),
        }
    }

    /// 지원 여부 (에러 없이)
    pub fn supports(&self, code: &str) -> bool {
        let code = code.trim().to_lowercase();
        validate_code(&code).is_ok() && self.entries.contains_key(&code)
    }

    /// 등록된 코드 (정렬됨)
    pub fn codes(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// (코드, 이름) 목록
    pub fn list(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(code, entry)| (code.clone(), entry.name.clone()))
            .collect()
    }

    /// 가장 가까운 등록 코드
    fn suggest(&self, code: &str) -> Option<String> {
        self.entries
            .keys()
            .map(|candidate| (candidate, normalized_distance(code, candidate)))
            .filter(|&(_, distance)| distance <= self.suggest_threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.clone())
    }
}

/// `primary[.variant...]`, primary는 2~3글자 영문
fn validate_code(code: &str) -> Result<()> {
    let mut segments = code.split('.');
    let head = segments.next().unwrap_or("");
    let head_ok = (2..=3).contains(&head.len()) && head.chars().all(|c| c.is_ascii_alphabetic());
    let rest_ok = segments.all(|s| !s.is_empty());
    if head_ok && rest_ok {
        Ok(())
    } else {
        Err(HangulizeError::Validation(code.to_string()))
    }
}

/// 편집 거리 / 긴 쪽 길이
fn normalized_distance(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}

fn levenshtein(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let mut prev: Vec<usize> = (0..=target.len()).collect();
    let mut curr = vec![0; target.len() + 1];
    for i in 1..=source.len() {
        curr[0] = i;
        for j in 1..=target.len() {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[target.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{Notation, Rule};

    fn toy() -> Language {
        Language::new("toy", Notation::new(vec![Rule::delete("x")])).with_name("장난감")
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("spa").is_ok());
        assert!(validate_code("kat.narrow").is_ok());
        assert!(validate_code("s").is_err());
        assert!(validate_code("spain").is_err());
        assert!(validate_code("sp1").is_err());
        assert!(validate_code("kat.").is_err());
    }

    #[test]
    fn test_lookup_builtin_once() {
        let registry = Registry::with_builtins();
        let a = registry.lookup("spa").unwrap();
        let b = registry.lookup("SPA").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.code(), "spa");
    }

    #[test]
    fn test_lookup_errors() {
        let registry = Registry::with_builtins();
        assert!(matches!(
            registry.lookup("x"),
            Err(HangulizeError::Validation(_))
        ));
        match registry.lookup("spn") {
            Err(HangulizeError::UnsupportedLanguage { code, suggestion }) => {
                assert_eq!(code, "spn");
                assert_eq!(suggestion.as_deref(), Some("spa"));
            }
            other => panic!("unexpected {:?}", other),
        }
        match registry.lookup("zzz") {
            Err(HangulizeError::UnsupportedLanguage { suggestion, .. }) => {
                assert_eq!(suggestion, None)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_supports() {
        let registry = Registry::with_builtins();
        assert!(registry.supports("fin"));
        assert!(registry.supports("kat.narrow"));
        assert!(!registry.supports("kat"));
        assert!(!registry.supports("!!"));
    }

    #[test]
    fn test_register_and_list() {
        let mut registry = Registry::new();
        registry.register("toy", "장난감", toy);
        assert_eq!(registry.codes(), vec!["toy"]);
        assert_eq!(registry.list(), vec![("toy".to_string(), "장난감".to_string())]);
        assert_eq!(registry.lookup("toy").unwrap().name(), "장난감");
    }

    #[test]
    fn test_register_spec_fails_fast() {
        let mut registry = Registry::new();
        let spec = LanguageSpec::from_json(
            r#"{"code": "bad", "vowels": "a", "notation": [["<nope>", null]]}"#,
        )
        .unwrap();
        assert!(matches!(
            registry.register_spec(spec),
            Err(HangulizeError::NotationConfig { .. })
        ));
        assert!(registry.codes().is_empty());
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("spa", "spa"), 0);
        assert!((normalized_distance("spn", "spa") - 1.0 / 3.0).abs() < 1e-9);
    }
}
