//! 음소 모델
//!
//! 표기 규칙이 확정한 한글 구성 요소(초성/중성/종성) 또는 그대로 통과시킬 문자열을 나타냅니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 음절 내 자리. 순서가 곧 음절 조립 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Choseong,
    Jungseong,
    Jongseong,
}

/// 확정된 음소
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phoneme {
    /// 초성
    #[serde(rename = "cho")]
    Choseong(char),
    /// 중성
    #[serde(rename = "jung")]
    Jungseong(char),
    /// 종성
    #[serde(rename = "jong")]
    Jongseong(char),
    /// 조합하지 않고 그대로 출력할 문자열
    #[serde(rename = "impurity")]
    Impurity(String),
}

impl Phoneme {
    /// 음절 내 자리 (Impurity는 None)
    pub fn component(&self) -> Option<Component> {
        match self {
            Phoneme::Choseong(_) => Some(Component::Choseong),
            Phoneme::Jungseong(_) => Some(Component::Jungseong),
            Phoneme::Jongseong(_) => Some(Component::Jongseong),
            Phoneme::Impurity(_) => None,
        }
    }

    /// 자모 글자 (Impurity는 None)
    pub fn jamo(&self) -> Option<char> {
        match self {
            Phoneme::Choseong(c) | Phoneme::Jungseong(c) | Phoneme::Jongseong(c) => Some(*c),
            Phoneme::Impurity(_) => None,
        }
    }

    pub fn is_impurity(&self) -> bool {
        matches!(self, Phoneme::Impurity(_))
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phoneme::Choseong(c) | Phoneme::Jungseong(c) | Phoneme::Jongseong(c) => {
                write!(f, "{}", c)
            }
            Phoneme::Impurity(s) => f.write_str(s),
        }
    }
}

/// 초성 음소 생성
pub fn cho(letter: char) -> Phoneme {
    Phoneme::Choseong(letter)
}

/// 중성 음소 생성
pub fn jung(letter: char) -> Phoneme {
    Phoneme::Jungseong(letter)
}

/// 종성 음소 생성
pub fn jong(letter: char) -> Phoneme {
    Phoneme::Jongseong(letter)
}
