//! 표기 규칙 정의

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use crate::core::phoneme::Phoneme;

/// 규칙 하나가 매칭된 구간
#[derive(Debug, Clone)]
pub struct RuleMatch<'t> {
    text: &'t str,
    groups: Vec<Option<&'t str>>,
}

impl<'t> RuleMatch<'t> {
    pub(crate) fn new(text: &'t str, groups: Vec<Option<&'t str>>) -> Self {
        Self { text, groups }
    }

    /// 매칭된 문자열 전체
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// 변수 캡처 그룹 (1부터)
    pub fn group(&self, index: usize) -> Option<&'t str> {
        match index {
            0 => Some(self.text),
            i => self.groups.get(i - 1).copied().flatten(),
        }
    }
}

/// 매칭 결과로 치환값을 계산하는 함수
#[derive(Clone)]
pub struct Computed(Arc<dyn Fn(&RuleMatch<'_>) -> Replacement + Send + Sync>);

impl Computed {
    pub fn call(&self, m: &RuleMatch<'_>) -> Replacement {
        (self.0)(m)
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Computed(..)")
    }
}

/// 규칙의 치환값
#[derive(Debug, Clone)]
pub enum Replacement {
    /// 매칭 구간 삭제
    Delete,
    /// 음소로 확정 (구간 첫 자리에 기록)
    Resolve(Vec<Phoneme>),
    /// 다른 문자열로 바꿔 씀. `<name>`, `\N` 사용 가능
    Rewrite(String),
    /// 매칭마다 치환값 계산. 결과 문자열은 템플릿으로 해석하지 않음
    Computed(Computed),
}

impl Replacement {
    /// 클로저로 계산형 치환값 생성
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&RuleMatch<'_>) -> Replacement + Send + Sync + 'static,
    {
        Replacement::Computed(Computed(Arc::new(f)))
    }

    /// 삭제와 같은 효과인지 (빈 음소열, 빈 문자열 포함)
    pub fn is_deletion(&self) -> bool {
        match self {
            Replacement::Delete => true,
            Replacement::Resolve(phonemes) => phonemes.is_empty(),
            Replacement::Rewrite(s) => s.is_empty(),
            Replacement::Computed(_) => false,
        }
    }
}

/// (패턴, 치환값) 규칙
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: String,
    pub replacement: Replacement,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            pattern: pattern.into(),
            replacement,
        }
    }

    pub fn delete(pattern: impl Into<String>) -> Self {
        Self::new(pattern, Replacement::Delete)
    }

    pub fn rewrite(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self::new(pattern, Replacement::Rewrite(template.into()))
    }

    pub fn resolve(pattern: impl Into<String>, phonemes: &[Phoneme]) -> Self {
        Self::new(pattern, Replacement::Resolve(phonemes.to_vec()))
    }
}

/// 순서 있는 표기 규칙 목록
#[derive(Debug, Clone, Default)]
pub struct Notation {
    rules: Vec<Rule>,
}

impl Notation {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// 뒤에 규칙을 이어 붙인 새 표기법
    pub fn extend(&self, other: &Notation) -> Notation {
        let mut rules = self.rules.clone();
        rules.extend(other.rules.iter().cloned());
        Notation { rules }
    }

    /// 패턴에 등장하는 문자 집합 (변수 참조와 패턴 문법 기호 제외)
    pub fn chars(&self) -> BTreeSet<char> {
        let mut chest = BTreeSet::new();
        for rule in &self.rules {
            let mut chars = rule.pattern.chars();
            while let Some(c) = chars.next() {
                match c {
                    '<' => {
                        // <name> 건너뛰기
                        for inner in chars.by_ref() {
                            if inner == '>' {
                                break;
                            }
                        }
                    }
                    '{' | '}' | '@' | '[' | ']' | '^' | '$' | '|' | '~' => {}
                    _ => {
                        chest.insert(c);
                    }
                }
            }
        }
        chest
    }
}

impl Add for Notation {
    type Output = Notation;

    fn add(mut self, rhs: Notation) -> Notation {
        self.rules.extend(rhs.rules);
        self
    }
}

impl<'a> IntoIterator for &'a Notation {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
