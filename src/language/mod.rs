//! 언어 정의와 전사 파이프라인
//!
//! 언어 하나는 변수(문자 집합), 보호할 특수 문자, 임시 문자, 표기 규칙,
//! 정규화 방식을 묶은 불변 값입니다. 규칙은 처음 쓰일 때 컴파일되어
//! 규칙마다 한 번만 캐시됩니다.

pub mod normalize;
mod pipeline;
pub mod registry;
pub mod spec;
pub mod tables;

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::phoneme::Phoneme;
use crate::core::syllable::assemble;
use crate::error::{HangulizeError, Result};
use crate::notation::{CompiledRule, Notation, Replacement, Variables};

pub use normalize::Normalizer;
pub use registry::Registry;
pub use spec::LanguageSpec;

/// 기본 보호 문자
pub const DEFAULT_SPECIAL: &str = ".,;?~\"()[]{}";

/// ISO 639 코드 (1: 두 글자, 2/3: 세 글자)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso639 {
    #[serde(default)]
    pub part1: Option<String>,
    #[serde(default)]
    pub part2: Option<String>,
    #[serde(default)]
    pub part3: Option<String>,
}

impl Iso639 {
    pub fn new(part1: Option<&str>, part2: Option<&str>, part3: Option<&str>) -> Self {
        Self {
            part1: part1.map(str::to_string),
            part2: part2.map(str::to_string),
            part3: part3.map(str::to_string),
        }
    }
}

/// 전사 대상 언어
#[derive(Debug)]
pub struct Language {
    code: String,
    name: String,
    iso639: Iso639,
    variables: Variables,
    special: Vec<char>,
    temporary: Vec<char>,
    normalizer: Normalizer,
    notation: Notation,
    /// 규칙별 컴파일 결과 (실패도 캐시)
    compiled: Vec<OnceLock<Result<CompiledRule>>>,
    strip_temporary: OnceLock<Result<Option<CompiledRule>>>,
}

impl Language {
    pub fn new(code: impl Into<String>, notation: Notation) -> Self {
        let code = code.into();
        let compiled = (0..notation.len()).map(|_| OnceLock::new()).collect();
        Self {
            name: code.clone(),
            code,
            iso639: Iso639::default(),
            variables: Variables::new(),
            special: DEFAULT_SPECIAL.chars().collect(),
            temporary: Vec::new(),
            normalizer: Normalizer::default(),
            notation,
            compiled,
            strip_temporary: OnceLock::new(),
        }
    }

    /// 표시 이름 설정
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_iso639(mut self, iso639: Iso639) -> Self {
        self.iso639 = iso639;
        self
    }

    /// `vowels` 변수 설정 (`@`)
    pub fn with_vowels(self, vowels: &str) -> Self {
        self.with_variable("vowels", vowels)
    }

    /// 변수 설정. 문자 순서가 변수 대 변수 치환의 대응 순서
    pub fn with_variable(mut self, name: impl Into<String>, chars: &str) -> Self {
        self.variables.insert(name.into(), chars.chars().collect());
        self
    }

    /// 보호 문자 교체
    pub fn with_special(mut self, special: &str) -> Self {
        self.special = special.chars().collect();
        self
    }

    /// 임시 문자 설정 (출력 전에 제거됨)
    pub fn with_temporary(mut self, temporary: &str) -> Self {
        self.temporary = temporary.chars().collect();
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// 로마자 정규화 대응표 설정
    pub fn with_overrides(self, overrides: &[(char, &str)]) -> Self {
        self.with_normalizer(Normalizer::roman(overrides))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso639(&self) -> &Iso639 {
        &self.iso639
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    pub fn special_chars(&self) -> &[char] {
        &self.special
    }

    pub fn temporary_chars(&self) -> &[char] {
        &self.temporary
    }

    /// index번째 규칙의 컴파일 결과 (첫 호출에서 컴파일)
    pub fn compiled_rule(&self, index: usize) -> Result<&CompiledRule> {
        let (Some(rule), Some(cell)) = (self.notation.rules().get(index), self.compiled.get(index))
        else {
            return Err(HangulizeError::notation(
                "",
                format!("{} has no rule #{}", self.code, index),
            ));
        };
        cell.get_or_init(|| {
            let compiled = CompiledRule::compile(rule, &self.variables);
            if let Err(e) = &compiled {
                log::debug!("{}: {}", self.code, e);
            }
            compiled
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    /// 모든 규칙을 미리 컴파일 (설정 오류 조기 발견용)
    pub fn compile_all(&self) -> Result<()> {
        for index in 0..self.notation.len() {
            self.compiled_rule(index)?;
        }
        self.strip_temporary_rule()?;
        Ok(())
    }

    fn strip_temporary_rule(&self) -> Result<Option<&CompiledRule>> {
        self.strip_temporary
            .get_or_init(|| {
                if self.temporary.is_empty() {
                    return Ok(None);
                }
                let alternation = self
                    .temporary
                    .iter()
                    .map(|c| fancy_regex::escape(&c.to_string()).into_owned())
                    .collect::<Vec<_>>()
                    .join("|");
                CompiledRule::from_regex(&format!("(?:{})", alternation), Replacement::Delete)
                    .map(Some)
            })
            .as_ref()
            .map(Option::as_ref)
            .map_err(Clone::clone)
    }

    /// 언어별 정규화
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// 정규화부터 평탄화까지 실행해 음소열을 만듦
    ///
    /// 규칙 설정 오류(정의되지 않은 변수 등)만 에러로 반환됩니다.
    /// 어떤 규칙에도 걸리지 않은 문자는 Impurity로 그대로 남습니다.
    pub fn transcribe(&self, text: &str) -> Result<Vec<Phoneme>> {
        let normalized = self.normalize(text);
        log::debug!(">> '{}'", normalized);

        let mut work = pipeline::wrap(&normalized);
        let protected: Vec<char> = self.special.iter().chain(&self.temporary).copied().collect();
        let stolen = pipeline::protect(&mut work, &protected);

        for index in 0..self.notation.len() {
            self.compiled_rule(index)?.apply(&mut work);
        }
        if let Some(strip) = self.strip_temporary_rule()? {
            strip.apply(&mut work);
        }

        pipeline::restore(&mut work, stolen);
        pipeline::trim(&mut work);
        pipeline::settle(&mut work);
        Ok(work.into_phonemes())
    }

    /// 한글 문자열로 전사
    ///
    /// 음절 조립에 실패하면 빈 문자열을 돌려줍니다.
    pub fn hangulize(&self, text: &str) -> Result<String> {
        let phonemes = self.transcribe(text)?;
        let hangulized = match assemble(&phonemes) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("{}: could not assemble '{}': {}", self.code, text, e);
                String::new()
            }
        };
        log::debug!("=> {}", hangulized);
        Ok(hangulized)
    }

    /// 규칙 패턴에 등장하지 않는 문자들을 기준으로 단어를 나눔
    pub fn split_words(&self, text: &str) -> Vec<String> {
        let known: BTreeSet<char> = self.notation.chars();
        let mut words = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            if known.contains(&c) {
                current.push(c);
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::*;
    use crate::core::phoneme::{cho, jong, jung};
    use crate::notation::Rule;

    fn toy() -> Language {
        Language::new(
            "toy",
            Notation::new(vec![
                Rule::resolve("ㅹ", &[cho(BB), jung(U), jong(NG)]),
                Rule::resolve("㉠", &[cho(G)]),
                Rule::resolve("ㅣ", &[jung(I)]),
                Rule::resolve("ㅋ", &[cho(K), jung(I), jong(G)]),
            ]),
        )
    }

    fn ka() -> Language {
        Language::new(
            "ka",
            Notation::new(vec![
                Rule::rewrite("{@}x", "k%"),
                Rule::resolve("k", &[cho(K)]),
                Rule::resolve("a", &[jung(A)]),
            ]),
        )
        .with_vowels("a")
        .with_temporary("%")
    }

    #[test]
    fn test_toy_glyphs() {
        assert_eq!(toy().hangulize("ㅹ㉠ㅣㅋㅋㅋ").unwrap(), "뿡기킥킥킥");
    }

    #[test]
    fn test_unmatched_passthrough() {
        assert_eq!(toy().hangulize("123").unwrap(), "123");
        assert_eq!(toy().hangulize("ㅋ 12 ㅋ").unwrap(), "킥 12 킥");
    }

    #[test]
    fn test_specials_restored() {
        assert_eq!(toy().hangulize("(ㅋ.)").unwrap(), "(킥.)");
    }

    #[test]
    fn test_transcribe_phonemes() {
        assert_eq!(
            toy().transcribe("ㅣ ㅣ").unwrap(),
            vec![jung(I), Phoneme::Impurity(" ".into()), jung(I)]
        );
    }

    #[test]
    fn test_temporary_chars_removed() {
        // 규칙이 남긴 %는 지워지고, 입력에 있던 %는 보존
        assert_eq!(ka().hangulize("ax").unwrap(), "아크");
        assert_eq!(ka().hangulize("a%").unwrap(), "아%");
    }

    #[test]
    fn test_normalize_before_rules() {
        assert_eq!(ka().hangulize("KÁ").unwrap(), "카");
    }

    #[test]
    fn test_assembly_failure_falls_back_to_empty() {
        let broken = Language::new("bad", Notation::new(vec![Rule::resolve("x", &[cho(LG)])]));
        assert_eq!(broken.hangulize("x").unwrap(), "");
    }

    #[test]
    fn test_compile_error_is_cached() {
        let lang = Language::new("bad", Notation::new(vec![Rule::delete("<nope>")]));
        let first = lang.hangulize("a").unwrap_err();
        let second = lang.compiled_rule(0).unwrap_err();
        assert_eq!(first, second);
        assert!(lang.compile_all().is_err());
        assert!(lang.compiled_rule(5).is_err());
    }

    #[test]
    fn test_compiled_rule_is_reused() {
        let lang = ka();
        for index in 0..lang.notation().len() {
            let first = lang.compiled_rule(index).unwrap();
            let second = lang.compiled_rule(index).unwrap();
            assert!(std::ptr::eq(first, second));
        }
        // 전사 후에도 같은 컴파일 결과
        let before = lang.compiled_rule(0).unwrap() as *const CompiledRule;
        lang.hangulize("ax").unwrap();
        assert!(std::ptr::eq(before, lang.compiled_rule(0).unwrap()));
    }

    #[test]
    fn test_concurrent_first_use() {
        // 아무 규칙도 컴파일되지 않은 언어를 여러 스레드가 동시에 사용
        let lang = tables::spanish();
        let results: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| lang.hangulize("Barcelona").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| r == "바르셀로나"));

        let first = lang.compiled_rule(0).unwrap();
        assert!(std::ptr::eq(first, lang.compiled_rule(0).unwrap()));
    }

    #[test]
    fn test_split_words() {
        let lang = ka();
        assert_eq!(lang.split_words("ka-ak, kak"), vec!["ka", "ak", "kak"]);
    }

    #[test]
    fn test_builders() {
        let lang = ka()
            .with_name("카어")
            .with_iso639(Iso639::new(Some("ka"), None, None))
            .with_special("!");
        assert_eq!(lang.name(), "카어");
        assert_eq!(lang.iso639().part1.as_deref(), Some("ka"));
        assert_eq!(lang.special_chars(), &['!']);
        assert_eq!(lang.temporary_chars(), &['%']);
        assert_eq!(lang.variables()["vowels"], vec!['a']);
    }
}
