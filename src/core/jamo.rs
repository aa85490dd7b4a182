//! 한글 자모 상수 및 분류
//!
//! 호환용 자모(U+3131 ~ U+3163) 기준으로 초성/중성/종성 순서표를 정의합니다.
//! 언어 표기 규칙은 이 상수들로 음소를 지정합니다.

// 자음
pub const G: char = 'ㄱ';
pub const GG: char = 'ㄲ';
pub const GS: char = 'ㄳ';
pub const N: char = 'ㄴ';
pub const NJ: char = 'ㄵ';
pub const NH: char = 'ㄶ';
pub const D: char = 'ㄷ';
pub const DD: char = 'ㄸ';
pub const L: char = 'ㄹ';
pub const LG: char = 'ㄺ';
pub const LM: char = 'ㄻ';
pub const LB: char = 'ㄼ';
pub const LS: char = 'ㄽ';
pub const LT: char = 'ㄾ';
pub const LP: char = 'ㄿ';
pub const LH: char = 'ㅀ';
pub const M: char = 'ㅁ';
pub const B: char = 'ㅂ';
pub const BB: char = 'ㅃ';
pub const BS: char = 'ㅄ';
pub const S: char = 'ㅅ';
pub const SS: char = 'ㅆ';
pub const NG: char = 'ㅇ';
pub const J: char = 'ㅈ';
pub const JJ: char = 'ㅉ';
pub const C: char = 'ㅊ';
pub const K: char = 'ㅋ';
pub const T: char = 'ㅌ';
pub const P: char = 'ㅍ';
pub const H: char = 'ㅎ';

// 모음
pub const A: char = 'ㅏ';
pub const AE: char = 'ㅐ';
pub const YA: char = 'ㅑ';
pub const YAE: char = 'ㅒ';
pub const EO: char = 'ㅓ';
pub const E: char = 'ㅔ';
pub const YEO: char = 'ㅕ';
pub const YE: char = 'ㅖ';
pub const O: char = 'ㅗ';
pub const WA: char = 'ㅘ';
pub const WAE: char = 'ㅙ';
pub const OE: char = 'ㅚ';
pub const YO: char = 'ㅛ';
pub const U: char = 'ㅜ';
pub const WEO: char = 'ㅝ';
pub const WE: char = 'ㅞ';
pub const WI: char = 'ㅟ';
pub const YU: char = 'ㅠ';
pub const EU: char = 'ㅡ';
pub const YI: char = 'ㅢ';
pub const I: char = 'ㅣ';

/// 초성 순서표 (19개)
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    G, GG, N, D, DD, L, M, B, BB, S, SS, NG, J, JJ, C, K, T, P, H,
];

/// 중성 순서표 (21개)
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    A, AE, YA, YAE, EO, E, YEO, YE, O, WA, WAE, OE, YO, U, WEO, WE, WI, YU, EU, YI, I,
];

/// 종성 순서표 (27개, 인덱스 0 = 종성 없음은 제외)
#[rustfmt::skip]
pub const JONGSEONG: [char; 27] = [
    G, GG, GS, N, NJ, NH, D, L, LG, LM, LB, LS, LT, LP, LH, M, B, BS, S, SS, NG, J, C, K, T, P, H,
];

/// 초성 인덱스 (0~18)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 중성 인덱스 (0~20)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 종성 인덱스 (1~27, 0은 종성 없음)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG
        .iter()
        .position(|&x| x == c)
        .map(|i| i as u32 + 1)
}

/// 호환용 자음(ㄱ~ㅎ)인지 확인
pub fn is_jaeum_char(c: char) -> bool {
    ('\u{3131}'..='\u{314E}').contains(&c)
}

/// 호환용 모음(ㅏ~ㅣ)인지 확인
pub fn is_moeum_char(c: char) -> bool {
    ('\u{314F}'..='\u{3163}').contains(&c)
}

/// 초성이 될 수 있는 자음인지 확인
pub fn is_choseong(c: char) -> bool {
    choseong_index(c).is_some()
}

/// 중성(모음)인지 확인
pub fn is_jungseong(c: char) -> bool {
    jungseong_index(c).is_some()
}

/// 문자열 전체가 자음으로만 이루어졌는지 확인 (빈 문자열은 false)
pub fn is_jaeum(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_jaeum_char)
}

/// 문자열 전체가 모음으로만 이루어졌는지 확인 (빈 문자열은 false)
pub fn is_moeum(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_moeum_char)
}

/// 겹자음/겹모음을 구성 자모로 분리
///
/// 홑자모는 None
pub fn split_compound(c: char) -> Option<&'static [char]> {
    let parts: &'static [char] = match c {
        GG => &[G, G],
        GS => &[G, S],
        NJ => &[N, J],
        NH => &[N, H],
        DD => &[D, D],
        LG => &[L, G],
        LM => &[L, M],
        LB => &[L, B],
        LS => &[L, S],
        LT => &[L, T],
        LP => &[L, P],
        LH => &[L, H],
        BB => &[B, B],
        BS => &[B, S],
        SS => &[S, S],
        JJ => &[J, J],
        AE => &[A, I],
        YAE => &[YA, I],
        YE => &[YEO, I],
        WA => &[O, A],
        WAE => &[O, A, I],
        OE => &[O, I],
        WEO => &[U, EO],
        WE => &[U, E],
        WI => &[U, I],
        YI => &[EU, I],
        _ => return None,
    };
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHOSEONG.len(), 19);
        assert_eq!(JUNGSEONG.len(), 21);
        assert_eq!(JONGSEONG.len(), 27);
    }

    #[test]
    fn test_indices() {
        assert_eq!(choseong_index(G), Some(0));
        assert_eq!(choseong_index(H), Some(18));
        assert_eq!(choseong_index(GS), None); // 초성 불가
        assert_eq!(jungseong_index(A), Some(0));
        assert_eq!(jungseong_index(I), Some(20));
        assert_eq!(jongseong_index(G), Some(1));
        assert_eq!(jongseong_index(NG), Some(21));
        assert_eq!(jongseong_index(H), Some(27));
        assert_eq!(jongseong_index(DD), None); // 종성 불가
    }

    #[test]
    fn test_char_predicates() {
        assert!(is_jaeum_char('ㄱ'));
        assert!(is_jaeum_char('ㅎ'));
        assert!(!is_jaeum_char('ㅏ'));
        assert!(is_moeum_char('ㅏ'));
        assert!(!is_moeum_char('가'));
        assert!(is_choseong(SS));
        assert!(!is_choseong(LG));
        assert!(is_jungseong(YI));
        assert!(!is_jungseong(G));
    }

    #[test]
    fn test_string_predicates() {
        assert!(is_jaeum("ㄱㄴㄷ"));
        assert!(!is_jaeum("ㄱㅏ"));
        assert!(!is_jaeum(""));
        assert!(is_moeum("ㅏㅑ"));
        assert!(!is_moeum("a"));
    }

    #[test]
    fn test_split_compound() {
        assert_eq!(split_compound(LG), Some(&[L, G][..]));
        assert_eq!(split_compound(WAE), Some(&[O, A, I][..]));
        assert_eq!(split_compound(G), None);
        assert_eq!(split_compound(A), None);
    }
}
