//! 전사 단계별 작업 문자열 처리
//!
//! 감싸기 -> 특수 문자 보호 -> (규칙 적용) -> 특수 문자 복원 -> 다듬기 -> 잔여 문자 정리

use std::collections::VecDeque;
use std::iter;

use crate::core::phoneme::Phoneme;
use crate::notation::pattern::{DONE, EDGE, SPACE, SPECIAL, ZWSP};
use crate::notation::rewrite::{Slot, WorkingText};

/// 공백 묶음을 SPACE 하나로 줄이고 양 끝을 EDGE로 감쌈
pub(crate) fn wrap(text: &str) -> WorkingText {
    let mut wrapped = String::with_capacity(text.len() + 2);
    wrapped.push(EDGE);
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                wrapped.push(SPACE);
            }
            in_space = true;
        } else {
            wrapped.push(c);
            in_space = false;
        }
    }
    wrapped.push(EDGE);
    WorkingText::new(wrapped)
}

/// 보호 대상 문자를 SPECIAL로 바꾸고 원래 문자를 순서대로 보관
pub(crate) fn protect(work: &mut WorkingText, protected: &[char]) -> VecDeque<char> {
    let mut stolen = VecDeque::new();
    if !work.text.chars().any(|c| protected.contains(&c)) {
        return stolen;
    }
    work.text = work
        .text
        .chars()
        .map(|c| {
            if protected.contains(&c) {
                stolen.push_back(c);
                SPECIAL
            } else {
                c
            }
        })
        .collect();
    stolen
}

/// SPECIAL 자리에 보관한 문자를 Impurity로 확정
pub(crate) fn restore(work: &mut WorkingText, mut stolen: VecDeque<char>) {
    if stolen.is_empty() {
        return;
    }
    let mut text = String::with_capacity(work.text.len());
    for (i, c) in work.text.chars().enumerate() {
        if c == SPECIAL {
            if let Some(original) = stolen.pop_front() {
                text.push(DONE);
                work.slots[i] = Some(vec![Phoneme::Impurity(original.to_string())]);
                continue;
            }
        }
        text.push(c);
    }
    work.text = text;
}

fn is_boundary(c: char) -> bool {
    matches!(c, SPACE | ZWSP | EDGE)
}

/// 양 끝의 경계 문자 묶음 제거 (슬롯도 함께)
pub(crate) fn trim(work: &mut WorkingText) {
    let chars: Vec<char> = work.text.chars().collect();
    let start = chars
        .iter()
        .position(|&c| !is_boundary(c))
        .unwrap_or(chars.len());
    let end = chars
        .iter()
        .rposition(|&c| !is_boundary(c))
        .map_or(start, |i| i + 1);

    work.text = chars[start..end].iter().collect();
    work.slots.truncate(end);
    work.slots.drain(..start);
}

/// 남은 문자 정리
///
/// - 가운데 남은 SPACE/EDGE -> Impurity(" ")
/// - ZWSP -> Impurity("") (음절 끊기)
/// - 확정되지 않은 문자 묶음 -> 묶음 첫 자리에 Impurity(묶음)
pub(crate) fn settle(work: &mut WorkingText) {
    let chars: Vec<char> = work.text.chars().collect();
    let mut run: Option<(usize, String)> = None;

    for (i, &c) in chars.iter().enumerate() {
        let boundary = match c {
            DONE => None,
            SPACE | EDGE => Some(" "),
            ZWSP => Some(""),
            _ if work.slots[i].is_some() => None,
            _ => {
                run.get_or_insert_with(|| (i, String::new())).1.push(c);
                continue;
            }
        };
        flush_run(&mut run, &mut work.slots);
        if let Some(s) = boundary {
            work.slots[i] = Some(vec![Phoneme::Impurity(s.to_string())]);
        }
    }
    flush_run(&mut run, &mut work.slots);

    work.text = iter::repeat(DONE).take(chars.len()).collect();
}

fn flush_run(run: &mut Option<(usize, String)>, slots: &mut [Slot]) {
    if let Some((at, text)) = run.take() {
        slots[at] = Some(vec![Phoneme::Impurity(text)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::G;
    use crate::core::phoneme::cho;

    #[test]
    fn test_wrap_collapses_whitespace() {
        let work = wrap("a \t b\n");
        assert_eq!(work.text(), "\u{3}a b \u{3}");
        assert_eq!(work.len(), 6);
    }

    #[test]
    fn test_protect_and_restore_in_order() {
        let mut work = wrap("a.b,");
        let stolen = protect(&mut work, &['.', ',']);
        assert_eq!(work.text(), "\u{3}a\u{6}b\u{6}\u{3}");
        assert_eq!(stolen, VecDeque::from(vec!['.', ',']));

        restore(&mut work, stolen);
        assert_eq!(work.text(), "\u{3}a\u{0}b\u{0}\u{3}");
        assert_eq!(work.slots()[2], Some(vec![Phoneme::Impurity(".".into())]));
        assert_eq!(work.slots()[4], Some(vec![Phoneme::Impurity(",".into())]));
    }

    #[test]
    fn test_trim_boundary_runs() {
        let mut work = WorkingText::new("\u{3} /ab /\u{3}");
        trim(&mut work);
        assert_eq!(work.text(), "ab");
        assert_eq!(work.len(), 2);

        let mut blank = WorkingText::new("\u{3} \u{3}");
        trim(&mut blank);
        assert!(blank.is_empty());
    }

    #[test]
    fn test_settle_groups_unresolved_runs() {
        let mut work = WorkingText::new("12\u{0} 3/");
        work.slots[2] = Some(vec![cho(G)]);
        settle(&mut work);
        assert_eq!(
            work.into_phonemes(),
            vec![
                Phoneme::Impurity("12".into()),
                cho(G),
                Phoneme::Impurity(" ".into()),
                Phoneme::Impurity("3".into()),
                Phoneme::Impurity(String::new()),
            ]
        );
    }
}
