//! 한글화 에러 정의

use thiserror::Error;

/// 한글화 과정에서 발생하는 에러
///
/// 규칙 컴파일 실패는 규칙별로 캐시되어 이후 호출에서도 같은 값이 반환되므로
/// `Clone`이 필요합니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangulizeError {
    /// 언어 코드 형식 오류 (첫 마디가 2~3글자가 아님)
    #[error("'{0}' is an invalid language code")]
    Validation(String),

    /// 등록되지 않은 언어
    #[error("hangulize does not support '{code}'{}", suggestion_suffix(.suggestion))]
    UnsupportedLanguage {
        code: String,
        suggestion: Option<String>,
    },

    /// 표기 규칙 설정 오류 (정의되지 않은 변수, 변수 길이 불일치 등)
    #[error("invalid notation rule '{pattern}': {reason}")]
    NotationConfig { pattern: String, reason: String },

    /// 한글 자모가 아닌 문자 또는 잘못된 초성/중성/종성 조합
    #[error("invalid hangul letter: {0}")]
    InvalidHangulLetter(String),

    /// 언어 플러그인 파일 파싱 실패
    #[error("failed to load language plugin: {0}")]
    PluginLoad(String),

    /// 설정 파일 형식 오류
    #[error("invalid config: {0}")]
    Config(String),

    /// 파일 입출력 실패
    #[error("io error: {0}")]
    Io(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(code) => format!(" (did you mean '{}'?)", code),
        None => String::new(),
    }
}

impl HangulizeError {
    pub(crate) fn notation(pattern: &str, reason: impl Into<String>) -> Self {
        HangulizeError::NotationConfig {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for HangulizeError {
    fn from(e: std::io::Error) -> Self {
        HangulizeError::Io(e.to_string())
    }
}

/// 크레이트 공통 Result
pub type Result<T> = std::result::Result<T, HangulizeError>;
