//! 유니코드 한글 조합/분해 유틸리티

use crate::core::jamo::{
    choseong_index, is_jaeum_char, is_moeum_char, jongseong_index, jungseong_index, CHOSEONG,
    JONGSEONG, JUNGSEONG,
};
use crate::error::{HangulizeError, Result};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 첫가끝 초성/중성/종성 시작 코드포인트
const CONJOINING_CHOSEONG_BASE: u32 = 0x1100;
const CONJOINING_JUNGSEONG_BASE: u32 = 0x1161;
const CONJOINING_JONGSEONG_BASE: u32 = 0x11A8;
/// 첫가끝 채움 문자
const CHOSEONG_FILLER: char = '\u{115F}';
const JUNGSEONG_FILLER: char = '\u{1160}';

/// (초성, 중성, 종성) 자모 조합. 없는 자리는 None
pub type JamoTriple = (Option<char>, Option<char>, Option<char>);

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자모 글자로 음절 조합
///
/// 초성과 중성이 모두 있으면 음절을 만들고, 세 자리 중 하나만 있으면 그 자모를 그대로 반환합니다.
/// 그 밖의 조합이나 순서표에 없는 자모는 `InvalidHangulLetter`.
pub fn compose(lead: Option<char>, vowel: Option<char>, trail: Option<char>) -> Result<char> {
    match (lead, vowel, trail) {
        (Some(l), Some(v), t) => {
            let cho = choseong_index(l).ok_or_else(|| invalid(l, "not a leading consonant"))?;
            let jung = jungseong_index(v).ok_or_else(|| invalid(v, "not a vowel"))?;
            let jong = match t {
                Some(t) => jongseong_index(t).ok_or_else(|| invalid(t, "not a trailing consonant"))?,
                None => 0,
            };
            compose_syllable(cho, jung, jong)
                .ok_or_else(|| HangulizeError::InvalidHangulLetter(format!("{}{}", l, v)))
        }
        (Some(c), None, None) | (None, Some(c), None) | (None, None, Some(c)) => {
            if is_jaeum_char(c) || is_moeum_char(c) {
                Ok(c)
            } else {
                Err(invalid(c, "not a hangul jamo"))
            }
        }
        _ => Err(HangulizeError::InvalidHangulLetter(
            "needs a leading consonant and a vowel".into(),
        )),
    }
}

/// 한글 한 글자를 자모로 분해
///
/// 완성형 음절은 (초성, 중성, 종성?)으로, 호환용 자모는 해당 자리 하나만 채워서 반환합니다.
pub fn decompose(c: char) -> Result<JamoTriple> {
    if is_jaeum_char(c) {
        return Ok((Some(c), None, None));
    }
    if is_moeum_char(c) {
        return Ok((None, Some(c), None));
    }
    let (cho, jung, jong) =
        decompose_syllable(c).ok_or_else(|| invalid(c, "needs 1 hangul letter"))?;
    let trail = match jong {
        0 => None,
        j => Some(JONGSEONG[(j - 1) as usize]),
    };
    Ok((
        Some(CHOSEONG[cho as usize]),
        Some(JUNGSEONG[jung as usize]),
        trail,
    ))
}

fn invalid(c: char, reason: &str) -> HangulizeError {
    HangulizeError::InvalidHangulLetter(format!("'{}' ({})", c.escape_debug(), reason))
}

/// 완성형 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 한글 문자인지 확인 (완성형, 첫가끝 자모, 호환용 자모)
pub fn is_hangul_char(c: char) -> bool {
    is_syllable(c)
        || ('\u{1100}'..='\u{11FF}').contains(&c)
        || ('\u{3131}'..='\u{318E}').contains(&c)
}

/// 문자열 전체가 한글인지 확인 (빈 문자열은 false)
pub fn is_hangul(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hangul_char)
}

/// 완성형 음절과 호환용 자모를 첫가끝 자모열로 풀어씀
/// 한글이 아닌 문자(초성이 될 수 없는 겹자음 포함)는 그대로 유지
pub fn disjoint(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        let Ok((lead, vowel, trail)) = decompose(c) else {
            out.push(c);
            continue;
        };
        let cho = match lead {
            Some(l) => match choseong_index(l) {
                Some(i) => char::from_u32(CONJOINING_CHOSEONG_BASE + i),
                None => None,
            },
            None => Some(CHOSEONG_FILLER),
        };
        let Some(cho) = cho else {
            out.push(c);
            continue;
        };
        out.push(cho);
        match vowel.and_then(jungseong_index) {
            Some(i) => out.extend(char::from_u32(CONJOINING_JUNGSEONG_BASE + i)),
            None => out.push(JUNGSEONG_FILLER),
        }
        if let Some(i) = trail.and_then(jongseong_index) {
            out.extend(char::from_u32(CONJOINING_JONGSEONG_BASE + i - 1));
        }
    }
    out
}

/// 첫가끝 자모열을 완성형 음절로 모아씀 (`disjoint`의 역변환)
pub fn conjoin(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(lead) = conjoining_choseong(c) {
            if let Some(vowel) = chars.get(i + 1).copied().and_then(conjoining_jungseong) {
                let trail = chars.get(i + 2).copied().and_then(conjoining_jongseong);
                let width = if trail.is_some() { 3 } else { 2 };
                match compose(lead, vowel, trail) {
                    Ok(syllable) => out.push(syllable),
                    // 채움 문자만 있는 경우 등 조합 불가 -> 원문 유지
                    Err(_) => out.extend(&chars[i..i + width]),
                }
                i += width;
                continue;
            }
            match lead {
                Some(l) => out.push(l),
                None => out.push(c),
            }
        } else if let Some(Some(v)) = conjoining_jungseong(c) {
            out.push(v);
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

/// 첫가끝 초성 -> 호환용 자음 (채움 문자는 Some(None))
fn conjoining_choseong(c: char) -> Option<Option<char>> {
    if c == CHOSEONG_FILLER {
        return Some(None);
    }
    let offset = (c as u32).checked_sub(CONJOINING_CHOSEONG_BASE)?;
    CHOSEONG.get(offset as usize).map(|&l| Some(l))
}

/// 첫가끝 중성 -> 호환용 모음 (채움 문자는 Some(None))
fn conjoining_jungseong(c: char) -> Option<Option<char>> {
    if c == JUNGSEONG_FILLER {
        return Some(None);
    }
    let offset = (c as u32).checked_sub(CONJOINING_JUNGSEONG_BASE)?;
    JUNGSEONG.get(offset as usize).map(|&v| Some(v))
}

/// 첫가끝 종성 -> 호환용 자음
fn conjoining_jongseong(c: char) -> Option<char> {
    let offset = (c as u32).checked_sub(CONJOINING_JONGSEONG_BASE)?;
    JONGSEONG.get(offset as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_compose_letters() {
        assert_eq!(compose(Some(G), Some(A), None), Ok('가'));
        assert_eq!(compose(Some(NG), Some(A), Some(N)), Ok('안'));
        assert_eq!(compose(Some(N), Some(YEO), Some(NG)), Ok('녕'));
    }

    #[test]
    fn test_compose_single_jamo() {
        assert_eq!(compose(Some(G), None, None), Ok(G));
        assert_eq!(compose(None, Some(YO), None), Ok(YO));
        assert_eq!(compose(None, None, Some(LG)), Ok(LG));
    }

    #[test]
    fn test_compose_invalid() {
        assert!(matches!(
            compose(None, None, None),
            Err(HangulizeError::InvalidHangulLetter(_))
        ));
        assert!(matches!(
            compose(Some(G), None, Some(N)),
            Err(HangulizeError::InvalidHangulLetter(_))
        ));
        // 겹받침 자음은 초성 불가
        assert!(compose(Some(LG), Some(A), None).is_err());
        // ㄸ은 종성 불가
        assert!(compose(Some(G), Some(A), Some(DD)).is_err());
        assert!(compose(Some('x'), None, None).is_err());
    }

    #[test]
    fn test_decompose_letters() {
        assert_eq!(decompose('한'), Ok((Some(H), Some(A), Some(N))));
        assert_eq!(decompose('요'), Ok((Some(NG), Some(YO), None)));
        assert_eq!(decompose('ㄱ'), Ok((Some(G), None, None)));
        assert_eq!(decompose('ㅏ'), Ok((None, Some(A), None)));
        assert!(decompose('a').is_err());
    }

    #[test]
    fn test_round_trip_all_syllables() {
        for &lead in CHOSEONG.iter() {
            for &vowel in JUNGSEONG.iter() {
                let trails = std::iter::once(None).chain(JONGSEONG.iter().map(|&t| Some(t)));
                for trail in trails {
                    let c = compose(Some(lead), Some(vowel), trail).unwrap();
                    assert_eq!(decompose(c).unwrap(), (Some(lead), Some(vowel), trail));
                }
            }
        }
    }

    #[test]
    fn test_hangul_predicates() {
        assert!(is_hangul("한글"));
        assert!(is_hangul("ㄱㅏ"));
        assert!(is_hangul("\u{1100}\u{1161}"));
        assert!(!is_hangul("한a"));
        assert!(!is_hangul(""));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('ㄱ'));
    }

    #[test]
    fn test_disjoint_conjoin() {
        let disjointed = disjoint("한글");
        assert_eq!(disjointed, "\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}");
        assert_eq!(conjoin(&disjointed), "한글");
    }

    #[test]
    fn test_disjoint_single_jamo() {
        assert_eq!(disjoint("ㄱ"), "\u{1100}\u{1160}");
        assert_eq!(disjoint("ㅏ"), "\u{115F}\u{1161}");
        assert_eq!(disjoint("a한"), "a\u{1112}\u{1161}\u{11AB}");
    }

    #[test]
    fn test_conjoin_passthrough() {
        assert_eq!(conjoin("abc"), "abc");
        assert_eq!(conjoin("\u{1100}"), "ㄱ");
        assert_eq!(conjoin("\u{1161}"), "ㅏ");
        assert_eq!(conjoin("\u{1100}\u{1160}"), "ㄱ");
    }
}
