//! 음소열 -> 음절 조립
//!
//! 초성 < 중성 < 종성 순서로 음소를 묶어 음절 블록을 만들고,
//! 빠진 자리는 기본값(초성 ㅇ, 중성 ㅡ, 종성 없음)으로 채웁니다.

use crate::core::jamo::{EU, NG};
use crate::core::phoneme::{Component, Phoneme};
use crate::core::unicode::{compose, decompose, JamoTriple};
use crate::error::Result;

/// 조립된 블록
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// 완성된 (초성, 중성, 종성?) 음절
    Syllable(char, char, Option<char>),
    /// 그대로 출력할 문자열
    Impurity(String),
}

/// 음절 블록 조립기
///
/// 음소를 하나씩 받아 열린 블록에 쌓고, 자리 순서가 역행하거나
/// Impurity가 들어오면 현재 블록을 확정합니다.
#[derive(Debug, Default)]
pub struct SyllableAssembler {
    /// 조립 중인 블록
    open: Vec<(Component, char)>,
    /// 확정된 블록
    blocks: Vec<Block>,
}

impl SyllableAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 음소 입력
    pub fn feed(&mut self, phoneme: &Phoneme) {
        match (phoneme.component(), phoneme.jamo()) {
            (Some(component), Some(letter)) => {
                let starts_new = self
                    .open
                    .last()
                    .is_some_and(|&(last, _)| component <= last);
                if starts_new {
                    self.flush_current();
                }
                self.open.push((component, letter));
            }
            _ => {
                self.flush_current();
                self.blocks.push(Block::Impurity(phoneme.to_string()));
            }
        }
    }

    /// 열린 블록을 기본값으로 채워 확정
    fn flush_current(&mut self) {
        if self.open.is_empty() {
            return;
        }
        let (lead, vowel, trail) = complete_syllable(&self.open);
        self.blocks.push(Block::Syllable(lead, vowel, trail));
        self.open.clear();
    }

    /// 조립 종료 및 블록 목록 반환
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_current();
        self.blocks
    }
}

/// 한 블록의 빠진 자리를 채움
///
/// ```
/// use hangulize::core::phoneme::Component;
/// use hangulize::core::syllable::complete_syllable;
///
/// assert_eq!(
///     complete_syllable(&[(Component::Jungseong, 'ㅛ')]),
///     ('ㅇ', 'ㅛ', None)
/// );
/// ```
pub fn complete_syllable(block: &[(Component, char)]) -> (char, char, Option<char>) {
    let find = |wanted: Component| {
        block
            .iter()
            .find(|(component, _)| *component == wanted)
            .map(|&(_, letter)| letter)
    };
    (
        find(Component::Choseong).unwrap_or(NG),
        find(Component::Jungseong).unwrap_or(EU),
        find(Component::Jongseong),
    )
}

/// 음소열을 블록 단위로 나눔
pub fn complete_syllables(phonemes: &[Phoneme]) -> Vec<Block> {
    let mut assembler = SyllableAssembler::new();
    for phoneme in phonemes {
        assembler.feed(phoneme);
    }
    assembler.finish()
}

/// 음소열을 한글 문자열로 조립
///
/// 블록 하나라도 조합할 수 없으면 에러 (호출자가 전체 결과를 버림)
pub fn assemble(phonemes: &[Phoneme]) -> Result<String> {
    let mut output = String::new();
    for block in complete_syllables(phonemes) {
        match block {
            Block::Syllable(lead, vowel, trail) => {
                output.push(compose(Some(lead), Some(vowel), trail)?);
            }
            Block::Impurity(text) => output.push_str(&text),
        }
    }
    Ok(output)
}

/// 한글 문자열을 음소열로 분해 (한글이 아닌 문자는 Impurity)
pub fn split_phonemes(word: &str) -> Vec<Phoneme> {
    let mut result = Vec::new();
    for c in word.chars() {
        match decompose(c) {
            Ok(triple) => push_triple(&mut result, triple),
            Err(_) => result.push(Phoneme::Impurity(c.to_string())),
        }
    }
    result
}

fn push_triple(result: &mut Vec<Phoneme>, (lead, vowel, trail): JamoTriple) {
    result.extend(lead.map(Phoneme::Choseong));
    result.extend(vowel.map(Phoneme::Jungseong));
    result.extend(trail.map(Phoneme::Jongseong));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::*;
    use crate::core::phoneme::{cho, jong, jung};

    #[test]
    fn test_complete_single_vowel() {
        let blocks = complete_syllables(&[jung(YO)]);
        assert_eq!(blocks, vec![Block::Syllable(NG, YO, None)]);
        assert_eq!(assemble(&[jung(YO)]).unwrap(), "요");
    }

    #[test]
    fn test_complete_single_consonant() {
        assert_eq!(assemble(&[cho(D)]).unwrap(), "드");
        assert_eq!(assemble(&[jong(L)]).unwrap(), "을");
    }

    #[test]
    fn test_join_annyeong() {
        let phonemes = [jung(A), jong(N), cho(N), jung(YEO), jong(NG)];
        assert_eq!(assemble(&phonemes).unwrap(), "안녕");
    }

    #[test]
    fn test_split_annyeong() {
        assert_eq!(
            split_phonemes("안녕"),
            vec![cho(NG), jung(A), jong(N), cho(N), jung(YEO), jong(NG)]
        );
    }

    #[test]
    fn test_split_join_round_trip() {
        let word = "한글 만세!";
        assert_eq!(assemble(&split_phonemes(word)).unwrap(), word);
    }

    #[test]
    fn test_component_order_breaks_block() {
        // 중성 뒤 중성 -> 새 블록
        assert_eq!(assemble(&[cho(G), jung(A), jung(I)]).unwrap(), "가이");
        // 종성 뒤 초성 -> 새 블록
        assert_eq!(assemble(&[cho(G), jung(A), jong(G), cho(G), jung(I)]).unwrap(), "각기");
    }

    #[test]
    fn test_impurity_breaks_block() {
        let phonemes = [
            cho(G),
            Phoneme::Impurity("-".into()),
            jung(A),
            Phoneme::Impurity(String::new()),
            jong(N),
        ];
        assert_eq!(assemble(&phonemes).unwrap(), "그-아은");
    }

    #[test]
    fn test_invalid_letter_fails() {
        // ㄺ은 초성 불가
        assert!(assemble(&[cho(LG), jung(A)]).is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(assemble(&[]).unwrap(), "");
    }
}
