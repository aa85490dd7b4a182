//! 표기 규칙 (패턴 문법, 컴파일, 적용)

pub mod pattern;
pub mod rewrite;
pub mod rule;

use std::collections::BTreeMap;

pub use pattern::CompiledRule;
pub use rewrite::{Slot, WorkingText};
pub use rule::{Computed, Notation, Replacement, Rule, RuleMatch};

/// 언어 변수: 이름 -> 문자 목록 (순서가 변수 대 변수 치환의 대응 순서)
pub type Variables = BTreeMap<String, Vec<char>>;
