//! 스페인어

use super::{del, res, rw};
use crate::core::jamo::*;
use crate::core::phoneme::{cho, jong, jung};
use crate::language::{Iso639, Language};
use crate::notation::Notation;

pub fn spanish() -> Language {
    // X: 앞 글자가 받침이 되지 않도록 끼워 넣는 임시 문자
    let notation = Notation::new(vec![
        rw("ññ", "ñ"),
        rw("ñ{@}", "nY"),
        rw("^y{@}", "Y"),
        rw("{@}y{@}", "Y"),
        rw("y", "i"),
        rw("aa", "a"),
        rw("ee", "e"),
        rw("ii", "i"),
        rw("oo", "o"),
        rw("uu", "u"),
        rw("hh", "h"),
        rw("k$", "kX"),
        rw("{@}cc{e|i}", "ks"),
        rw("ch{@}", "C"),
        del("h"),
        rw("ll", "Y"),
        del("c{k|q|x}"),
        rw("cc", "c"),
        rw("c{e|i}", "s"),
        rw("c", "k"),
        rw("n{j|k|g|q|x}", "N"),
        rw("g{e|i}", "j"),
        rw("{g|q}ü{a|e|i}", "W"),
        rw("ü", "u"),
        del("{g|q}u{e|i}"),
        rw("{g|q}ua", "Wa"),
        rw("q", "k"),
        rw("ww", "w"),
        rw("^w{@}", "W"),
        rw("{@}w{@}", "W"),
        rw("w", "XW"),
        rw("xx", "x"),
        rw("^x{@}", "s"),
        rw("{@}x", "ks"),
        rw("bb", "b"),
        rw("dd", "d"),
        rw("ff", "f"),
        rw("gg", "g"),
        rw("jj", "j"),
        rw("kk", "k"),
        rw("mm", "m"),
        rw("nn", "n"),
        rw("pp", "p"),
        rw("rr", "r"),
        rw("z", "s"),
        rw("ss", "s"),
        rw("tt", "t"),
        rw("vv", "v"),
        res("b", &[cho(B)]),
        res("C", &[cho(C)]),
        res("d", &[cho(D)]),
        res("f", &[cho(P)]),
        res("g", &[cho(G)]),
        res("j{@}", &[cho(H)]),
        del("j"),
        res("^k", &[cho(K)]),
        res("k{@|l|m|n|r|X}", &[cho(K)]),
        res("{@}k", &[jong(G)]),
        res("k", &[cho(K)]),
        rw("^m", "P"),
        rw("^n", "Q"),
        res("{m|n}l", &[cho(L)]),
        res("^l", &[cho(L)]),
        res("l{@}", &[jong(L), cho(L)]),
        res("l", &[jong(L)]),
        res("P", &[cho(M)]),
        res("m{@}", &[cho(M)]),
        res("m", &[jong(M)]),
        res("Q", &[cho(N)]),
        res("n{@|Y}", &[cho(N)]),
        res("n", &[jong(N)]),
        res("N", &[jong(NG)]),
        res("p{@|l|m|n|r|X}", &[cho(P)]),
        res("{@}p", &[jong(B)]),
        res("p", &[cho(P)]),
        res("r", &[cho(L)]),
        res("s", &[cho(S)]),
        res("t", &[cho(T)]),
        res("v", &[cho(B)]),
        res("Ya", &[jung(YA)]),
        res("Ye", &[jung(YE)]),
        res("Yi", &[jung(I)]),
        res("Yo", &[jung(YO)]),
        res("Yu", &[jung(YU)]),
        res("Wa", &[jung(WA)]),
        res("We", &[jung(WE)]),
        res("Wi", &[jung(WI)]),
        res("a", &[jung(A)]),
        res("e", &[jung(E)]),
        res("i", &[jung(I)]),
        res("o", &[jung(O)]),
        res("u", &[jung(U)]),
    ]);

    Language::new("spa", notation)
        .with_name("스페인어")
        .with_iso639(Iso639::new(Some("es"), Some("spa"), Some("spa")))
        .with_vowels("aeiouüy")
        .with_temporary("X")
        .with_overrides(&[('Ñ', "ñ"), ('Ǘ', "ü"), ('Ü', "ü")])
}
