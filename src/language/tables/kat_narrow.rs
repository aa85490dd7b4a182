//! 조지아어 정밀전사
//!
//! 평음, 경음, 격음을 모두 구별해 적습니다. ვ는 장애음 뒤 모음 앞에서 /w/,
//! 모음 뒤 무성 파열음/파찰음 앞에서 /f/, 그 밖에는 /v/로 읽습니다.
//! 규칙 안의 V는 /w/로 읽는 ვ 표시

use super::{del, res, rw};
use crate::core::jamo::*;
use crate::core::phoneme::{cho, jong, jung};
use crate::language::{Iso639, Language};
use crate::notation::Notation;

pub fn georgian_narrow() -> Language {
    let notation = Notation::new(vec![
        // 옛 글자
        rw("ჱ", "ეჲ"),
        rw("ჲ", "ი"),
        rw("უჳ", "უ"),
        rw("ჳ", "უ"),
        rw("ჴ", "ხ"),
        rw("ჵ", "ო"),
        rw("ჶ", "ფ"),
        rw("{@}ვ{<vl>}", "ჶ"),
        rw("ვ$", "ჶ"),
        rw("ბბ", "ბ"),
        rw("გგ", "გ"),
        rw("დდ", "დ"),
        rw("ვვ", "ვ"),
        rw("ზზ", "ზ"),
        rw("თთ", "თ"),
        rw("კკ", "კ"),
        rw("ლლ", "ლ"),
        rw("მმ", "მ,მ"),
        rw("ნნ", "ნ,ნ"),
        rw("პპ", "პ"),
        rw("ჟჟ", "ჟ"),
        rw("რრ", "რ"),
        rw("სს", "ს"),
        rw("ტტ", "ტ"),
        rw("ფფ", "ფ"),
        rw("ქქ", "ქ"),
        rw("ღღ", "ღ"),
        rw("ყყ", "ყ"),
        rw("შშ", "შ"),
        rw("ხხ", "ხ"),
        rw("ჰჰ", "ჰ"),
        del("დ{ძ|ჯ}"),
        del("თ{ჩ|ც}"),
        del("ტ{წ|ჭ}"),
        rw("დჟ", "ჯ"),
        rw("თშ", "ჩ"),
        rw("ტშ", "ჭ"),
        rw("დზ", "ძ"),
        rw("თს", "ც"),
        rw("ტს", "წ"),
        rw("{<ob>}ვ{ა|ე|ი}", "V"),
        rw("ჟ{<cs>}", "ჟუ"),
        rw("ჟ$", "ჟუ"),
        rw("შ{<cs>}", "შუ"),
        rw("შ$", "ში"),
        rw("ჩ{V}", "ჩუ"),
        rw("ჩ{<cs>}", "ჩი"),
        rw("ჩ$", "ჩი"),
        rw("ძ{V}", "ძუ"),
        rw("ძ{<cs>}", "ძი"),
        rw("ძ$", "ძი"),
        rw("ჭ{V}", "ჭუ"),
        rw("ჭ{<cs>}", "ჭი"),
        rw("ჭ$", "ძი"),
        rw("^ლ", "ლ;"),
        rw("^მ$", "მ;"),
        rw("^ნ", "ნ;"),
        rw("ლ$", "ლ,"),
        rw("მ$", "მ,"),
        rw("ნ$", "ნ,"),
        rw("ლ{@|მ,|ნ,}", "ლ;"),
        rw("{,}ლ", "ლ;"),
        rw("მ{@}", "მ;"),
        rw("ნ{@}", "ნ;"),
        rw("ლ", "ლ,"),
        rw("მ", "მ,"),
        rw("ნ", "ნ,"),
        rw(",,", ","),
        del(",;"),
        rw(",ლ,", "ლ,"),
        rw(",მ,", "მ,"),
        rw(",ნ,", "ნ,"),
        rw("ლ{მნ}", "ლ,"),
        del(";"),
        rw("აა", "ა"),
        rw("ეე", "ე"),
        rw("იი", "ი"),
        rw("ოო", "ო"),
        rw("უუ", "უ"),
        res("ბ", &[cho(B)]),
        res("გ", &[cho(G)]),
        res("დ", &[cho(D)]),
        res("ვ", &[cho(B)]),
        res("ზ", &[cho(J)]),
        res("თ", &[cho(T)]),
        res("კ", &[cho(GG)]),
        res("^ლ", &[cho(L)]),
        res("{,}ლ", &[cho(L)]),
        res("ლ,", &[jong(L)]),
        res("ლ", &[jong(L), cho(L)]),
        res("მ,", &[jong(M)]),
        res("მ", &[cho(M)]),
        res("ნ,", &[jong(N)]),
        res("ნ", &[cho(N)]),
        res("პ", &[cho(BB)]),
        res("ჟ", &[cho(J)]),
        res("რ", &[cho(L)]),
        res("ს", &[cho(S)]),
        res("ტ", &[cho(DD)]),
        res("ფ", &[cho(P)]),
        res("ქ", &[cho(K)]),
        res("ღ", &[cho(G)]),
        res("ყ", &[cho(GG)]),
        res("ჩ", &[cho(C)]),
        res("ც", &[cho(C)]),
        res("ძ", &[cho(J)]),
        res("წ", &[cho(JJ)]),
        res("ჭ", &[cho(JJ)]),
        res("ხ", &[cho(H)]),
        res("ჯ", &[cho(J)]),
        res("ჰ", &[cho(H)]),
        res("ჶ", &[cho(P)]),
        res("ჸ", &[cho(NG)]),
        res("შა", &[cho(S), jung(YA)]),
        res("შე", &[cho(S), jung(YE)]),
        res("ში", &[cho(S), jung(I)]),
        res("შო", &[cho(S), jung(YO)]),
        res("შუ", &[cho(S), jung(YU)]),
        res("შჷ", &[cho(S), jung(YEO)]),
        res("Vა", &[cho(NG), jung(WA)]),
        res("Vე", &[cho(NG), jung(WE)]),
        res("Vი", &[cho(NG), jung(WI)]),
        res("ა", &[jung(A)]),
        res("ე", &[jung(E)]),
        res("ი", &[jung(I)]),
        res("ო", &[jung(O)]),
        res("უ", &[jung(U)]),
        res("ჷ", &[jung(EO)]),
    ]);

    Language::new("kat.narrow", notation)
        .with_name("조지아어 정밀전사")
        .with_iso639(Iso639::new(Some("ka"), Some("geo"), Some("kat")))
        .with_vowels("აეიოუ")
        .with_variable("cs", "ბგდვზთკლმნპჟრსტფქღყშჩცძწჭხჯჰV")
        .with_variable("vl", "თკპტფქყჩცწჭ")
        .with_variable("ob", "ბგდვზთკპჟსტფქღყშჩცძწჭხჯჰ")
        .with_temporary(",;")
        .with_overrides(ASOMTAVRULI)
}

/// 아솜타브룰리/누스후리 -> 음헤드룰리
#[rustfmt::skip]
const ASOMTAVRULI: &[(char, &str)] = &[
    ('Ⴀ', "ა"), ('ⴀ', "ა"), ('Ⴁ', "ბ"), ('ⴁ', "ბ"), ('Ⴂ', "გ"),
    ('ⴂ', "გ"), ('Ⴃ', "დ"), ('ⴃ', "დ"), ('Ⴄ', "ე"), ('ⴄ', "ე"),
    ('Ⴅ', "ვ"), ('ⴅ', "ვ"), ('Ⴆ', "ზ"), ('ⴆ', "ზ"), ('Ⴡ', "ჱ"),
    ('ⴡ', "ჱ"), ('Ⴇ', "თ"), ('ⴇ', "თ"), ('Ⴈ', "ი"), ('ⴈ', "ი"),
    ('Ⴉ', "კ"), ('ⴉ', "კ"), ('Ⴊ', "ლ"), ('ⴊ', "ლ"), ('Ⴋ', "მ"),
    ('ⴋ', "მ"), ('Ⴌ', "ნ"), ('ⴌ', "ნ"), ('Ⴢ', "ჲ"), ('ⴢ', "ჲ"),
    ('Ⴍ', "ო"), ('ⴍ', "ო"), ('Ⴎ', "პ"), ('ⴎ', "პ"), ('Ⴏ', "ჟ"),
    ('ⴏ', "ჟ"), ('Ⴐ', "რ"), ('ⴐ', "რ"), ('Ⴑ', "ს"), ('ⴑ', "ს"),
    ('Ⴒ', "ტ"), ('ⴒ', "ტ"), ('Ⴣ', "ჳ"), ('ⴣ', "ჳ"), ('Ⴓ', "უ"),
    ('ⴓ', "უ"), ('Ⴔ', "ფ"), ('ⴔ', "ფ"), ('Ⴕ', "ქ"), ('ⴕ', "ქ"),
    ('Ⴖ', "ღ"), ('ⴖ', "ღ"), ('Ⴗ', "ყ"), ('ⴗ', "ყ"), ('Ⴘ', "შ"),
    ('ⴘ', "შ"), ('Ⴙ', "ჩ"), ('ⴙ', "ჩ"), ('Ⴚ', "ც"), ('ⴚ', "ც"),
    ('Ⴛ', "ძ"), ('ⴛ', "ძ"), ('Ⴜ', "წ"), ('ⴜ', "წ"), ('Ⴝ', "ჭ"),
    ('ⴝ', "ჭ"), ('Ⴞ', "ხ"), ('ⴞ', "ხ"), ('Ⴤ', "ჴ"), ('ⴤ', "ჴ"),
    ('Ⴟ', "ჯ"), ('ⴟ', "ჯ"), ('Ⴠ', "ჰ"), ('ⴠ', "ჰ"), ('Ⴥ', "ჵ"),
    ('ⴥ', "ჵ"),
];
