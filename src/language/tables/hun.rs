//! 헝가리어

use super::{del, res, rw};
use crate::core::jamo::*;
use crate::core::phoneme::{cho, jong, jung};
use crate::language::{Iso639, Language};
use crate::notation::Notation;

pub fn hungarian() -> Language {
    let notation = Notation::new(vec![
        rw("á", "A"),
        rw("ö", "O"),
        rw("ü", "U"),
        rw("j", "y"),
        rw("cc", "c"),
        rw("cs", "C"),
        // 옛 철자
        rw("ch", "C"),
        rw("cz", "c"),
        rw("dd", "d"),
        rw("dy", "D"),
        rw("dzs", "D"),
        rw("gg", "g"),
        rw("gy", "D"),
        rw("ny{@}", "nJ"),
        rw("ny", "ni"),
        rw("qq", "q"),
        rw("q{@}", "kv"),
        rw("q", "k"),
        rw("xx", "x"),
        rw("x", "kS"),
        rw("ss", "s"),
        rw("sz", "S"),
        rw("tt", "t"),
        rw("th", "t"),
        rw("ts", "C"),
        rw("ty", "C"),
        rw("tz", "c"),
        rw("zz", "z"),
        rw("zs", "Z"),
        rw("ll", "l"),
        rw("ly{@}", "J"),
        rw("ly", "i"),
        rw("^y{@}", "J"),
        rw("{@}y{@}", "J"),
        rw("y", "i"),
        rw("^Je", "Ye"),
        rw("{@|s|S}Je", "Ye"),
        rw("Je", "e"),
        rw("Y", "J"),
        rw("aa", "a"),
        rw("bb", "b"),
        rw("ee", "e"),
        rw("eO", "O"),
        rw("ew", "O"),
        rw("ff", "f"),
        rw("hh", "h"),
        rw("ii", "i"),
        rw("kk", "k"),
        rw("{@}mm{@}", "m,m"),
        rw("mm", "m"),
        rw("{@}nn{@|J}", "n,n"),
        rw("nn", "n"),
        rw("oo", "o"),
        rw("OO", "O"),
        rw("pp", "p"),
        rw("rr", "r"),
        rw("s{@}", "SJ"),
        rw("s$", "Si"),
        rw("s", "SJu"),
        rw("uu", "u"),
        rw("UU", "U"),
        rw("w", "v"),
        rw("vv", "v"),
        rw("C{<cs>}", "Ci"),
        rw("C$", "Ci"),
        rw("D{<cs>}", "Di"),
        rw("D$", "Di"),
        rw("Z{<cs>}", "Zu"),
        rw("Z$", "Zu"),
        rw("^l", "l;"),
        rw("^m", "m;"),
        rw("^n", "n;"),
        rw("l$", "l,"),
        rw("m$", "m,"),
        rw("n$", "n,"),
        rw("l{@|m,|n,}", "l;"),
        rw("{,}l", "l;"),
        rw("m{@}", "m;"),
        rw("n{@|J}", "n;"),
        rw("l", "l,"),
        rw("m", "m,"),
        rw("n", "n,"),
        rw(",,", ","),
        del(",;"),
        rw(",l,", "l,"),
        rw(",m,", "m,"),
        rw(",n,", "n,"),
        rw("l{m;|n;}", "l,"),
        del(";"),
        rw("{@}k{<vl>}", "k,"),
        rw("{@}p{<vl>}", "p,"),
        res("b", &[cho(B)]),
        res("c", &[cho(C)]),
        res("C", &[cho(C)]),
        res("d", &[cho(D)]),
        res("D", &[cho(J)]),
        res("f", &[cho(P)]),
        res("g", &[cho(G)]),
        res("h", &[cho(H)]),
        res("k,", &[jong(G)]),
        res("k", &[cho(K)]),
        res("^l", &[cho(L)]),
        res("{,}l", &[cho(L)]),
        res("l,", &[jong(L)]),
        res("l", &[jong(L), cho(L)]),
        res("m,", &[jong(M)]),
        res("m", &[cho(M)]),
        res("n,", &[jong(N)]),
        res("n", &[cho(N)]),
        res("p,", &[jong(B)]),
        res("p", &[cho(P)]),
        res("r", &[cho(L)]),
        res("S", &[cho(S)]),
        res("t", &[cho(T)]),
        res("v", &[cho(B)]),
        res("z", &[cho(J)]),
        res("Z", &[cho(J)]),
        res("Ja", &[jung(YEO)]),
        res("JA", &[jung(YA)]),
        res("Je", &[jung(YE)]),
        res("Ji", &[jung(I)]),
        res("Jo", &[jung(YO)]),
        res("JO", &[jung(OE)]),
        res("Ju", &[jung(YU)]),
        res("JU", &[jung(WI)]),
        res("a", &[jung(EO)]),
        res("A", &[jung(A)]),
        res("e", &[jung(E)]),
        res("i", &[jung(I)]),
        res("o", &[jung(O)]),
        res("O", &[jung(OE)]),
        res("u", &[jung(U)]),
        res("U", &[jung(WI)]),
    ]);

    Language::new("hun", notation)
        .with_name("헝가리어")
        .with_iso639(Iso639::new(Some("hu"), Some("hun"), Some("hun")))
        .with_vowels("aAeioOuU")
        .with_variable("cs", "bcCdDfghklmnpqrsStvwxzZ")
        .with_variable("vl", "cCfhkpsSt")
        .with_temporary(",;")
        .with_overrides(&[
            ('Á', "á"),
            ('Ö', "ö"),
            ('Ő', "ö"),
            ('ő', "ö"),
            ('Ü', "ü"),
            ('Ű', "ü"),
            ('ű', "ü"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        hungarian().compile_all().unwrap();
    }

    #[test]
    fn test_words() {
        assert_eq!(hungarian().hangulize("Budapest").unwrap(), "부더페슈트");
    }

    #[test]
    fn test_double_acute_folds_to_umlaut() {
        assert_eq!(hungarian().normalize("Győr"), "györ");
    }
}
