//! 핀란드어
//!
//! 규칙 안에서 A = ä, O = ö. `,`는 받침, `;`는 첫소리 표시이고 `%`는 ㅇ 첫소리

use super::{del, res, rw};
use crate::core::jamo::*;
use crate::core::phoneme::{cho, jong, jung};
use crate::language::{Iso639, Language};
use crate::notation::Notation;

pub fn finnish() -> Language {
    let notation = Notation::new(vec![
        rw("å", "o"),
        rw("ä", "A"),
        rw("ö", "O"),
        rw("w", "v"),
        rw("xx", "x"),
        rw("x", "ks"),
        rw("z", "s"),
        rw("ds", "T"),
        rw("ts", "T"),
        rw("c{e|i|y}", "s"),
        rw("c", "k"),
        rw("q", "k"),
        rw("ng", "N"),
        rw("nk", "Nk"),
        rw("mn{@}", "m,n"),
        rw("mn", "m"),
        rw("th", "t"),
        rw("^j{@}", "J"),
        rw("{@}j{@}", "J"),
        rw("{h|s|T}j", "%J"),
        rw("j", "i"),
        rw("aa", "a"),
        rw("bb", "b"),
        rw("dd", "d"),
        rw("ee", "e"),
        rw("AA", "A"),
        rw("ff", "f"),
        rw("gg", "g"),
        rw("hh", "h"),
        rw("ii", "i"),
        rw("jj", "j"),
        rw("kk", "k"),
        rw("ll", "l"),
        rw("{@}mm{@}", "m,m"),
        rw("mm", "m"),
        rw("{@}nn{@}", "n,n"),
        rw("nn", "n"),
        rw("oo", "o"),
        rw("pp", "p"),
        rw("rr", "r"),
        rw("ss", "s"),
        rw("tt", "t"),
        rw("uu", "u"),
        rw("vv", "v"),
        rw("yy", "y"),
        rw("zz", "z"),
        rw("{@}b{<ob>}", "p,"),
        rw("{@}g{<ob>}", "k,"),
        rw("{@}k{<ob>}", "k,"),
        rw("{@}p{<ob>}", "p,"),
        rw("{@}t{<ob>}", "t,"),
        rw("^l", "l;"),
        rw("^m", "m;"),
        rw("^n", "n;"),
        rw("l$", "l,"),
        rw("m$", "m,"),
        rw("n$", "n,"),
        rw("l{@|m,|n,|N}", "l;"),
        rw("{,}l", "l;"),
        rw("m{@}", "m;"),
        rw("n{@}", "n;"),
        rw("l", "l,"),
        rw("m", "m,"),
        rw("n", "n,"),
        rw("N", "N,"),
        rw(",,", ","),
        del(",;"),
        rw(",l,", "l,"),
        rw(",m,", "m,"),
        rw(",n,", "n,"),
        rw(",N,", "N,"),
        rw("l{m;|n;}", "l,"),
        del(";"),
        res("b", &[cho(B)]),
        res("d", &[cho(D)]),
        res("f", &[cho(P)]),
        res("g", &[cho(G)]),
        res("h", &[cho(H)]),
        res("k,", &[jong(G)]),
        res("k", &[cho(K)]),
        res("^l", &[cho(L)]),
        res("{,|-}l", &[cho(L)]),
        del("-"),
        res("l,", &[jong(L)]),
        res("l", &[jong(L), cho(L)]),
        res("m,", &[jong(M)]),
        res("m", &[cho(M)]),
        res("n,", &[jong(N)]),
        res("n", &[cho(N)]),
        res("N", &[jong(NG)]),
        res("p,", &[jong(B)]),
        res("p", &[cho(P)]),
        res("r", &[cho(L)]),
        res("s", &[cho(S)]),
        res("t,", &[jong(S)]),
        res("t", &[cho(T)]),
        res("T", &[cho(C)]),
        res("v", &[cho(B)]),
        res("%", &[cho(NG)]),
        res("Ja", &[jung(YA)]),
        res("JA", &[jung(YAE)]),
        res("Je", &[jung(YE)]),
        res("Ji", &[jung(I)]),
        res("Jo", &[jung(YO)]),
        res("JO", &[jung(OE)]),
        res("Ju", &[jung(YU)]),
        res("Jy", &[jung(WI)]),
        res("a", &[jung(A)]),
        res("A", &[jung(AE)]),
        res("e", &[jung(E)]),
        res("i", &[jung(I)]),
        res("o", &[jung(O)]),
        res("u", &[jung(U)]),
        res("y", &[jung(WI)]),
        res("O", &[jung(OE)]),
    ]);

    Language::new("fin", notation)
        .with_name("핀란드어")
        .with_iso639(Iso639::new(Some("fi"), Some("fin"), Some("fin")))
        .with_vowels("aAeioOuy")
        .with_variable("ob", "bdfgkpstT")
        .with_temporary(",;%")
        .with_overrides(&[('Å', "å"), ('Ǻ', "å"), ('ǻ', "å"), ('Ä', "ä"), ('Ö', "ö")])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hangulize(word: &str) -> String {
        finnish().hangulize(word).unwrap()
    }

    #[test]
    fn test_rules_compile() {
        finnish().compile_all().unwrap();
    }

    #[test]
    fn test_words() {
        assert_eq!(hangulize("Helsinki"), "헬싱키");
    }

    #[test]
    fn test_umlaut_kept_through_normalization() {
        // ä는 대응표 값이므로 분해되지 않음
        assert_eq!(finnish().normalize("Ä"), "ä");
        assert_eq!(finnish().normalize("å"), "å");
    }
}
