//! 세르보크로아트어 (키릴 문자는 정규화 단계에서 라틴 문자로)

use super::{del, res, rw};
use crate::core::jamo::*;
use crate::core::phoneme::{cho, jong, jung};
use crate::language::{Iso639, Language};
use crate::notation::Notation;

pub fn serbo_croatian() -> Language {
    let notation = Notation::new(vec![
        rw("č", "C"),
        rw("ć", "C"),
        rw("đ", "D"),
        rw("š", "S"),
        rw("dž", "D"),
        rw("ž", "Z"),
        rw("tj", "C"),
        rw("S{@}", "sJ"),
        rw("S$", "si"),
        rw("S", "sJu"),
        rw("^je", "Je"),
        rw("{@|s}je", "Je"),
        rw("je", "e"),
        rw("{l|n}j{@}", "J"),
        del("{l|n}j"),
        rw("j{@}", "J"),
        rw("j", "i"),
        rw("xx", "x"),
        rw("x", "ks"),
        rw("qu", "kv"),
        rw("q", "k"),
        rw("w", "v"),
        rw("^y{@}", "J"),
        rw("y", "i"),
        rw("aa", "a"),
        rw("bb", "b"),
        rw("dd", "d"),
        rw("ee", "e"),
        rw("ff", "f"),
        rw("gg", "g"),
        rw("hh", "h"),
        rw("ii", "i"),
        rw("kk", "k"),
        rw("ll", "l"),
        res("{@}mm{@}", &[jong(M), cho(M)]),
        rw("mm", "m"),
        res("{@}nn{@}", &[jong(N), cho(N)]),
        rw("nn", "n"),
        rw("oo", "o"),
        rw("pp", "p"),
        rw("rr", "r"),
        rw("ss", "s"),
        rw("tt", "t"),
        rw("uu", "u"),
        rw("vv", "v"),
        rw("zz", "z"),
        res("^k", &[cho(K)]),
        res("{@}k{<consonants>|p}", &[jong(G)]),
        res("^p", &[cho(P)]),
        res("{@}p{<consonants>|k}", &[jong(B)]),
        res("k", &[cho(K)]),
        res("p", &[cho(P)]),
        res("C{@}", &[cho(C)]),
        res("C", &[cho(C), jung(I)]),
        res("b", &[cho(B)]),
        res("c", &[cho(C)]),
        res("d", &[cho(D)]),
        res("D{@}", &[cho(J)]),
        res("D", &[cho(J), jung(I)]),
        res("f", &[cho(P)]),
        res("g", &[cho(G)]),
        res("h", &[cho(H)]),
        rw("^m", "P"),
        rw("^n", "Q"),
        res("^l", &[cho(L)]),
        res("{m|n}l", &[cho(L)]),
        res("l{@|J}", &[jong(L), cho(L)]),
        res("l", &[jong(L)]),
        res("P", &[cho(M)]),
        res("m{@|J|l|r|n}", &[cho(M)]),
        res("m", &[jong(M)]),
        res("Q", &[cho(N)]),
        res("n{@|J}", &[cho(N)]),
        res("n", &[jong(N)]),
        res("r", &[cho(L)]),
        res("s", &[cho(S)]),
        res("t", &[cho(T)]),
        res("v", &[cho(B)]),
        res("z", &[cho(J)]),
        res("Z{@}", &[cho(J)]),
        res("Z", &[cho(J), jung(U)]),
        res("Ja", &[jung(YA)]),
        res("Je", &[jung(YE)]),
        res("Ji", &[jung(I)]),
        res("Jo", &[jung(YO)]),
        res("Ju", &[jung(YU)]),
        res("a", &[jung(A)]),
        res("e", &[jung(E)]),
        res("i", &[jung(I)]),
        res("o", &[jung(O)]),
        res("u", &[jung(U)]),
    ]);

    Language::new("hbs", notation)
        .with_name("세르보크로아트어")
        .with_iso639(Iso639::new(None, None, Some("hbs")))
        .with_vowels("aeiouy")
        .with_variable("consonants", "cCfhst")
        .with_overrides(CYRILLIC)
}

/// 키릴 문자, 이중 글자 -> 라틴 문자
#[rustfmt::skip]
const CYRILLIC: &[(char, &str)] = &[
    ('А', "a"), ('а', "a"), ('Б', "b"), ('б', "b"), ('В', "v"),
    ('в', "v"), ('Г', "g"), ('г', "g"), ('Д', "d"), ('д', "d"),
    ('Ђ', "đ"), ('ђ', "đ"), ('Е', "e"), ('е', "e"), ('Ж', "ž"),
    ('ж', "ž"), ('З', "z"), ('з', "z"), ('И', "i"), ('и', "i"),
    ('Ј', "j"), ('ј', "j"), ('К', "k"), ('к', "k"), ('Л', "l"),
    ('л', "l"), ('Љ', "lj"), ('љ', "lj"), ('М', "m"), ('м', "m"),
    ('Н', "n"), ('н', "n"), ('Њ', "nj"), ('њ', "nj"), ('О', "o"),
    ('о', "o"), ('П', "p"), ('п', "p"), ('Р', "r"), ('р', "r"),
    ('С', "s"), ('с', "s"), ('Т', "t"), ('т', "t"), ('Ћ', "ć"),
    ('ћ', "ć"), ('У', "u"), ('у', "u"), ('Ф', "f"), ('ф', "f"),
    ('Х', "h"), ('х', "h"), ('Ц', "c"), ('ц', "c"), ('Ч', "C"),
    ('ч', "C"), ('Џ', "dž"), ('џ', "dž"), ('Ш', "š"), ('ш', "š"),
    ('Č', "č"), ('Ć', "ć"), ('Đ', "đ"), ('Š', "š"), ('Ž', "ž"),
    // DŽ, Dž, LJ, Lj, NJ, Nj 합자
    ('Ǆ', "dž"), ('ǅ', "dž"), ('Ǉ', "lj"), ('ǈ', "lj"), ('Ǌ', "nj"), ('ǋ', "nj"),
];
