//! 입력 정규화
//!
//! 로마자 계열 언어는 대응표에 있는 문자만 지정한 값으로 바꾸고,
//! 나머지는 분음 부호를 떼어 소문자로 만듭니다.

use std::collections::HashMap;

use icu_normalizer::DecomposingNormalizer;
use icu_properties::{maps, GeneralCategory};

/// 언어별 정규화 방식
#[derive(Debug, Clone)]
pub enum Normalizer {
    /// 대응표 + 분음 부호 제거 + 소문자화
    Roman(HashMap<char, String>),
    /// 언어 고유 정규화 함수
    Custom(fn(&str) -> String),
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::Roman(HashMap::new())
    }
}

impl Normalizer {
    /// (문자, 대체 문자열) 목록으로 로마자 정규화기 생성
    pub fn roman(overrides: &[(char, &str)]) -> Self {
        Normalizer::Roman(
            overrides
                .iter()
                .map(|&(c, s)| (c, s.to_string()))
                .collect(),
        )
    }

    pub fn normalize(&self, text: &str) -> String {
        match self {
            Normalizer::Roman(overrides) => normalize_roman(text, overrides),
            Normalizer::Custom(f) => f(text),
        }
    }
}

/// 로마자 정규화
///
/// - 대응표의 키 -> 값
/// - 대응표의 값에 쓰인 문자 -> 그대로 (분음 부호 보존)
/// - 그 밖의 문자 -> NFD 분해 후 결합 부호 제거, 소문자화
///   (기타 문자(Lo) 범주의 문자는 그대로)
pub fn normalize_roman(text: &str, overrides: &HashMap<char, String>) -> String {
    let nfd = DecomposingNormalizer::new_nfd();
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if let Some(replacement) = overrides.get(&c) {
            out.push_str(replacement);
        } else if overrides.values().any(|v| v.contains(c)) {
            out.push(c);
        } else {
            strip_marks(c, &nfd, &mut out);
        }
    }

    out
}

fn strip_marks(c: char, nfd: &DecomposingNormalizer, out: &mut String) {
    let categories = maps::general_category();
    if categories.get(c) == GeneralCategory::OtherLetter {
        out.push(c);
        return;
    }

    let mut buf = [0u8; 4];
    for d in nfd.normalize(c.encode_utf8(&mut buf)).chars() {
        if categories.get(d) != GeneralCategory::NonspacingMark {
            out.extend(d.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_lowercases() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("Ángel Müller"), "angel muller");
        assert_eq!(normalizer.normalize("ÇA"), "ca");
    }

    #[test]
    fn test_override_keys_and_values() {
        let normalizer = Normalizer::roman(&[('Ñ', "ñ"), ('Ü', "ü")]);
        // 키는 값으로, 값에 쓰인 문자는 그대로
        assert_eq!(normalizer.normalize("ÑANDU"), "ñandu");
        assert_eq!(normalizer.normalize("pingüino"), "pingüino");
        assert_eq!(normalizer.normalize("PINGÜINO"), "pingüino");
        // 대응표에 없는 분음 부호는 제거
        assert_eq!(normalizer.normalize("á"), "a");
    }

    #[test]
    fn test_multi_char_override() {
        let normalizer = Normalizer::roman(&[('Љ', "lj"), ('љ', "lj")]);
        assert_eq!(normalizer.normalize("Љубљана"), "ljубljана");
    }

    #[test]
    fn test_other_letters_kept() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("თბილისი"), "თბილისი");
        assert_eq!(normalizer.normalize("한글"), "한글");
    }

    #[test]
    fn test_custom() {
        fn shout(s: &str) -> String {
            s.to_uppercase()
        }
        assert_eq!(Normalizer::Custom(shout).normalize("abc"), "ABC");
    }
}
