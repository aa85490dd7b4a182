//! 내장 언어 표기 규칙

mod fin;
mod hbs;
mod hun;
mod kat_narrow;
mod spa;

use crate::core::phoneme::Phoneme;
use crate::language::Language;
use crate::notation::Rule;

pub use fin::finnish;
pub use hbs::serbo_croatian;
pub use hun::hungarian;
pub use kat_narrow::georgian_narrow;
pub use spa::spanish;

/// (코드, 이름, 생성 함수)
pub const BUILTINS: &[(&str, &str, fn() -> Language)] = &[
    ("fin", "핀란드어", finnish),
    ("hbs", "세르보크로아트어", serbo_croatian),
    ("hun", "헝가리어", hungarian),
    ("kat.narrow", "조지아어 정밀전사", georgian_narrow),
    ("spa", "스페인어", spanish),
];

fn rw(pattern: &str, template: &str) -> Rule {
    Rule::rewrite(pattern, template)
}

fn del(pattern: &str) -> Rule {
    Rule::delete(pattern)
}

fn res(pattern: &str, phonemes: &[Phoneme]) -> Rule {
    Rule::resolve(pattern, phonemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codes_match_languages() {
        for &(code, name, build) in BUILTINS {
            let language = build();
            assert_eq!(language.code(), code);
            assert_eq!(language.name(), name);
            assert!(language.variables().contains_key("vowels"));
        }
    }
}
