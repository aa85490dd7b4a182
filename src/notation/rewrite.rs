//! 규칙 적용
//!
//! 작업 문자열과 같은 길이(문자 수)의 음소 슬롯 배열을 함께 들고 다니며,
//! 규칙 하나를 적용할 때는 먼저 매칭을 모두 모은 뒤(1단계)
//! 한 번에 새 문자열과 슬롯을 만듭니다(2단계).
//! 1단계의 매칭 위치는 원래 문자열 기준이므로 치환 도중 위치가 어긋나지 않습니다.

use std::iter;
use std::ops::Range;

use crate::core::phoneme::Phoneme;
use crate::notation::pattern::{CompiledRule, Template, DONE};
use crate::notation::rule::{Replacement, RuleMatch};

/// 문자 하나에 대응하는 음소 자리. 확정된 음소가 있으면 Some
pub type Slot = Option<Vec<Phoneme>>;

/// 규칙 적용 중인 문자열과 음소 슬롯
///
/// 항상 `slots.len() == text.chars().count()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingText {
    pub(crate) text: String,
    pub(crate) slots: Vec<Slot>,
}

impl WorkingText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let slots = vec![None; text.chars().count()];
        Self { text, slots }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// 문자 수
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 슬롯 순서대로 음소를 펼침
    pub fn into_phonemes(self) -> Vec<Phoneme> {
        self.slots.into_iter().flatten().flatten().collect()
    }

    /// 편집 목록으로 문자열과 슬롯을 다시 만듦 (편집은 위치순, 겹치지 않음)
    fn rebuild(&mut self, edits: Vec<Edit>) {
        let old_text = std::mem::take(&mut self.text);
        let mut old_slots = std::mem::take(&mut self.slots).into_iter();
        let mut text = String::with_capacity(old_text.len());
        let mut slots = Vec::with_capacity(old_slots.len());
        let (mut byte_cursor, mut char_cursor) = (0, 0);

        for edit in edits {
            text.push_str(&old_text[byte_cursor..edit.bytes.start]);
            slots.extend(old_slots.by_ref().take(edit.chars.start - char_cursor));
            let span: Vec<Slot> = old_slots.by_ref().take(edit.chars.len()).collect();

            match edit.action {
                Action::Delete => {}
                // 빈 매칭에는 기록할 자리가 없음
                Action::Resolve(phonemes) if !span.is_empty() => {
                    text.extend(iter::repeat(DONE).take(span.len()));
                    slots.push(Some(phonemes));
                    slots.extend(span.into_iter().skip(1));
                }
                Action::Resolve(_) => {}
                Action::Rewrite(replacement) => {
                    let new_len = replacement.chars().count();
                    text.push_str(&replacement);
                    if new_len >= span.len() {
                        slots.extend(iter::repeat(None).take(new_len - span.len()));
                        slots.extend(span);
                    } else {
                        let dropped = span.len() - new_len;
                        slots.extend(span.into_iter().skip(dropped));
                    }
                }
            }

            byte_cursor = edit.bytes.end;
            char_cursor = edit.chars.end;
        }

        text.push_str(&old_text[byte_cursor..]);
        slots.extend(old_slots);
        self.text = text;
        self.slots = slots;
    }
}

/// 매칭 하나에 대한 처리
#[derive(Debug)]
enum Action {
    Delete,
    Resolve(Vec<Phoneme>),
    Rewrite(String),
}

impl Action {
    /// 치환값 -> 처리. 계산형 치환값은 여기서 다시 계산하지 않음
    fn from_value(value: &Replacement, template: Option<&Template>, m: &RuleMatch<'_>) -> Option<Self> {
        if value.is_deletion() {
            return Some(Action::Delete);
        }
        match value {
            Replacement::Delete => Some(Action::Delete),
            Replacement::Resolve(phonemes) => Some(Action::Resolve(phonemes.clone())),
            Replacement::Rewrite(text) => {
                let text = match template {
                    Some(template) => template.expand(m),
                    None => text.clone(),
                };
                // 템플릿이 빈 문자열로 펼쳐져도 삭제
                if text.is_empty() {
                    Some(Action::Delete)
                } else {
                    Some(Action::Rewrite(text))
                }
            }
            Replacement::Computed(_) => None,
        }
    }

    fn describe(&self, pattern: &str) -> String {
        match self {
            Action::Delete => format!("remove {}", pattern),
            Action::Resolve(phonemes) => {
                let letters: String = phonemes.iter().map(|p| p.to_string()).collect();
                format!("hangulize {} -> {}", pattern, letters)
            }
            Action::Rewrite(text) => format!("rewrite {} -> {}", pattern, text),
        }
    }
}

#[derive(Debug)]
struct Edit {
    bytes: Range<usize>,
    chars: Range<usize>,
    action: Action,
}

impl CompiledRule {
    /// 작업 문자열에 규칙 적용. 매칭이 하나라도 있었으면 true
    pub fn apply(&self, work: &mut WorkingText) -> bool {
        let edits = self.collect_edits(&work.text);
        if edits.is_empty() {
            return false;
        }

        let summary = log::log_enabled!(log::Level::Trace)
            .then(|| edits.last().map(|e| e.action.describe(&self.pattern)))
            .flatten();
        work.rebuild(edits);
        if let Some(summary) = summary {
            log::trace!(".. '{}'\t{}", work.text.escape_debug(), summary);
        }
        true
    }

    /// 1단계: 원래 문자열 기준으로 매칭과 처리를 모두 수집
    fn collect_edits(&self, text: &str) -> Vec<Edit> {
        let mut edits = Vec::new();
        let (mut byte_cursor, mut char_cursor) = (0, 0);

        for caps in self.regex.captures_iter(text) {
            let caps = match caps {
                Ok(caps) => caps,
                Err(e) => {
                    log::warn!("matching '{}' stopped: {}", self.pattern, e);
                    break;
                }
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };

            char_cursor += text[byte_cursor..whole.start()].chars().count();
            let start = char_cursor;
            char_cursor += whole.as_str().chars().count();
            byte_cursor = whole.end();

            let groups = (1..caps.len())
                .map(|i| caps.get(i).map(|g| g.as_str()))
                .collect();
            let m = RuleMatch::new(whole.as_str(), groups);

            if let Some(action) = self.action_for(&m) {
                edits.push(Edit {
                    bytes: whole.start()..whole.end(),
                    chars: start..char_cursor,
                    action,
                });
            }
        }

        edits
    }

    fn action_for(&self, m: &RuleMatch<'_>) -> Option<Action> {
        match &self.replacement {
            Replacement::Computed(f) => {
                let value = f.call(m);
                if matches!(value, Replacement::Computed(_)) {
                    log::warn!("'{}' computed another computed replacement, skipped", self.pattern);
                }
                Action::from_value(&value, None, m)
            }
            fixed => Action::from_value(fixed, self.template.as_ref(), m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::{A, G, I, K};
    use crate::core::phoneme::{cho, jung};
    use crate::notation::pattern::EDGE;
    use crate::notation::rule::Rule;
    use crate::notation::Variables;

    fn vars() -> Variables {
        let mut v = Variables::new();
        v.insert("vowels".into(), "aeiou".chars().collect());
        v.insert("soft".into(), "bdg".chars().collect());
        v.insert("hard".into(), "ptk".chars().collect());
        v
    }

    fn compile(rule: Rule) -> CompiledRule {
        CompiledRule::compile(&rule, &vars()).unwrap()
    }

    fn work(text: &str) -> WorkingText {
        WorkingText::new(format!("{}{}{}", EDGE, text, EDGE))
    }

    fn assert_aligned(work: &WorkingText) {
        assert_eq!(work.slots.len(), work.text.chars().count());
    }

    #[test]
    fn test_rewrite_grows_and_shrinks() {
        let mut w = work("xax");
        assert!(compile(Rule::rewrite("x", "ks")).apply(&mut w));
        assert_eq!(w.text(), "\u{3}ksaks\u{3}");
        assert_aligned(&w);

        assert!(compile(Rule::rewrite("ks", "x")).apply(&mut w));
        assert_eq!(w.text(), "\u{3}xax\u{3}");
        assert_aligned(&w);
    }

    #[test]
    fn test_no_match() {
        let mut w = work("abc");
        assert!(!compile(Rule::delete("z")).apply(&mut w));
        assert_eq!(w, work("abc"));
    }

    #[test]
    fn test_delete_excises_slots() {
        let mut w = work("aga");
        compile(Rule::resolve("g", &[cho(G)])).apply(&mut w);
        assert!(compile(Rule::delete("a")).apply(&mut w));
        assert_eq!(w.text(), "\u{3}\u{0}\u{3}");
        assert_eq!(w.slots()[1], Some(vec![cho(G)]));
        assert_aligned(&w);
    }

    #[test]
    fn test_resolve_marks_span() {
        let mut w = work("kia");
        assert!(compile(Rule::resolve("ki", &[cho(K), jung(I)])).apply(&mut w));
        assert_eq!(w.text(), "\u{3}\u{0}\u{0}a\u{3}");
        assert_eq!(w.slots()[1], Some(vec![cho(K), jung(I)]));
        assert_eq!(w.slots()[2], None);
        assert_aligned(&w);
    }

    #[test]
    fn test_resolved_positions_do_not_match_again() {
        let rule = compile(Rule::resolve("a", &[jung(A)]));
        let mut w = work("aa");
        assert!(rule.apply(&mut w));
        let once = w.clone();
        assert!(!rule.apply(&mut w));
        assert_eq!(w, once);
    }

    #[test]
    fn test_rewrite_keeps_resolved_neighbours() {
        let mut w = work("gx");
        compile(Rule::resolve("g", &[cho(G)])).apply(&mut w);
        compile(Rule::rewrite("x", "yy")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}\u{0}yy\u{3}");
        assert_eq!(w.slots()[1], Some(vec![cho(G)]));
        assert_eq!(w.slots()[2], None);
        assert_eq!(w.slots()[3], None);
    }

    #[test]
    fn test_matches_come_from_original_text() {
        // 치환 결과가 다시 매칭되지 않음
        let mut w = work("aa");
        compile(Rule::rewrite("a", "aa")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}aaaa\u{3}");
    }

    #[test]
    fn test_backreference_template() {
        let mut w = work("abo");
        compile(Rule::rewrite("<soft>", "\\1\\1")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}abbo\u{3}");
    }

    #[test]
    fn test_backreference_counts_lookbehind_variables() {
        // \1은 lookbehind의 모음, \2는 본문의 <soft>
        let mut w = work("abo");
        compile(Rule::rewrite("{@}<soft>", "\\1\\1")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}aaao\u{3}");

        let mut w = work("abo");
        compile(Rule::rewrite("{@}<soft>", "\\2\\1")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}abao\u{3}");
    }

    #[test]
    fn test_backreference_to_lookahead_variable() {
        let mut w = work("abo");
        compile(Rule::rewrite("<soft>{@}", "\\2")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}aoo\u{3}");
        assert_aligned(&w);
    }

    #[test]
    fn test_variable_to_variable_with_lookbehind() {
        let mut w = work("ab ob");
        compile(Rule::rewrite("{@}<soft>$", "<hard>")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}ap op\u{3}");
    }

    #[test]
    fn test_variable_to_variable() {
        let mut w = work("ab ad");
        compile(Rule::rewrite("<soft>$", "<hard>")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}ap at\u{3}");
    }

    #[test]
    fn test_computed_result_is_literal() {
        let rule = Rule::new(
            "x",
            Replacement::computed(|_| Replacement::Rewrite("\\1<soft>".into())),
        );
        let mut w = work("x");
        compile(rule).apply(&mut w);
        assert_eq!(w.text(), "\u{3}\\1<soft>\u{3}");
        assert_aligned(&w);
    }

    #[test]
    fn test_computed_can_resolve() {
        let rule = Rule::new(
            "<hard>",
            Replacement::computed(|m| match m.group(1) {
                Some("k") => Replacement::Resolve(vec![cho(K)]),
                _ => Replacement::Delete,
            }),
        );
        let mut w = work("kpk");
        compile(rule).apply(&mut w);
        assert_eq!(w.text(), "\u{3}\u{0}\u{0}\u{3}");
        assert_eq!(w.slots()[1], Some(vec![cho(K)]));
        assert_eq!(w.slots()[2], Some(vec![cho(K)]));
    }

    #[test]
    fn test_empty_rewrite_is_deletion() {
        let mut w = work("aha");
        compile(Rule::rewrite("h", "")).apply(&mut w);
        assert_eq!(w.text(), "\u{3}aa\u{3}");
        assert_aligned(&w);
    }

    #[test]
    fn test_empty_resolve_is_deletion() {
        let mut w = work("aha");
        compile(Rule::resolve("h", &[])).apply(&mut w);
        assert_eq!(w.text(), "\u{3}aa\u{3}");
        assert_aligned(&w);

        // 계산 결과가 빈 음소열이어도 삭제
        let rule = Rule::new("a", Replacement::computed(|_| Replacement::Resolve(Vec::new())));
        compile(rule).apply(&mut w);
        assert_eq!(w.text(), "\u{3}\u{3}");
        assert_aligned(&w);
    }

    #[test]
    fn test_into_phonemes_flattens_in_order() {
        let mut w = work("ka");
        compile(Rule::resolve("k", &[cho(K)])).apply(&mut w);
        compile(Rule::resolve("a", &[jung(A)])).apply(&mut w);
        assert_eq!(w.into_phonemes(), vec![cho(K), jung(A)]);
    }
}
