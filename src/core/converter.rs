//! 외래어 -> 한글 통합 변환기

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::language::registry::{Registry, BUILTIN};

/// 내장 언어로 문자열을 한글로 전사
/// 규칙에 걸리지 않은 문자(숫자, 기호 등)는 그대로 유지
pub fn hangulize(text: &str, code: &str) -> Result<String> {
    hangulize_with(&BUILTIN, text, code)
}

/// 지정한 레지스트리의 언어로 전사
pub fn hangulize_with(registry: &Registry, text: &str, code: &str) -> Result<String> {
    registry.lookup(code)?.hangulize(text)
}

/// 여러 문자열을 한 언어로 전사 (`parallel` 기능이 켜져 있으면 병렬)
pub fn hangulize_batch<S>(registry: &Registry, texts: &[S], code: &str) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let language = registry.lookup(code)?;
    // 작업 스레드들이 같은 규칙을 동시에 컴파일하지 않도록 미리 컴파일
    language.compile_all()?;

    #[cfg(feature = "parallel")]
    {
        texts
            .par_iter()
            .map(|text| language.hangulize(text.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        texts
            .iter()
            .map(|text| language.hangulize(text.as_ref()))
            .collect()
    }
}

/// 내장 언어 지원 여부
pub fn supports(code: &str) -> bool {
    BUILTIN.supports(code)
}

/// 내장 언어 (코드, 이름) 목록
pub fn list_languages() -> Vec<(String, String)> {
    BUILTIN.list()
}
