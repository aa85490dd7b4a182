//! 표기 규칙 패턴 컴파일러
//!
//! 규칙 패턴 문법을 lookaround가 있는 정규식으로 바꿉니다.
//!
//! | 문법         | 의미                                              |
//! |--------------|---------------------------------------------------|
//! | `@`          | `<vowels>`                                        |
//! | `<name>`     | 언어 변수의 문자 중 하나 (캡처 그룹, `\N`으로 참조)   |
//! | `a\|b`       | 선택                                              |
//! | `^` / `^^`   | 단어 시작 / 입력 전체의 시작                      |
//! | `$` / `$$`   | 단어 끝 / 입력 전체의 끝                          |
//! | `{x}` (앞)   | lookbehind, `{~x}`는 부정형                       |
//! | `{x}` (뒤)   | lookahead, `{~x}`는 부정형                        |
//!
//! 그 밖의 문자는 문자 그대로 매칭합니다.

use std::collections::HashMap;

use fancy_regex::Regex;

use crate::error::{HangulizeError, Result};
use crate::notation::rule::{Replacement, Rule, RuleMatch};
use crate::notation::Variables;

/// 공백 경계
pub const SPACE: char = ' ';
/// 폭 없는 경계
pub const ZWSP: char = '/';
/// 입력 양 끝 경계
pub const EDGE: char = '\u{3}';
/// 보호된 특수 문자 자리
pub const SPECIAL: char = '\u{6}';
/// 음소가 확정된 자리
pub const DONE: char = '\u{0}';

/// 경계 문자 클래스
const BLANK: &str = r"[ /\x03\x06]";
/// `@`가 가리키는 변수
const VOWELS: &str = "vowels";

/// 컴파일된 규칙
#[derive(Debug)]
pub struct CompiledRule {
    pub(crate) pattern: String,
    pub(crate) regex: Regex,
    pub(crate) replacement: Replacement,
    pub(crate) template: Option<Template>,
}

impl CompiledRule {
    /// 언어 변수로 규칙 패턴을 컴파일
    pub fn compile(rule: &Rule, variables: &Variables) -> Result<Self> {
        let mut compiler = PatternCompiler::new(&rule.pattern, variables);
        let source = compiler.regexify()?;
        let regex = Regex::new(&source)
            .map_err(|e| HangulizeError::notation(&rule.pattern, format!("regex error: {}", e)))?;
        let template = match &rule.replacement {
            Replacement::Rewrite(text) => Some(compiler.template(text)?),
            _ => None,
        };
        log::debug!("compiled '{}' -> /{}/", rule.pattern, source.escape_debug());
        Ok(Self {
            pattern: rule.pattern.clone(),
            regex,
            replacement: rule.replacement.clone(),
            template,
        })
    }

    /// 정규식을 그대로 쓰는 내부 규칙 (치환 문자열은 템플릿으로 해석하지 않음)
    pub fn from_regex(source: &str, replacement: Replacement) -> Result<Self> {
        let regex = Regex::new(source)
            .map_err(|e| HangulizeError::notation(source, format!("regex error: {}", e)))?;
        Ok(Self {
            pattern: source.to_string(),
            regex,
            replacement,
            template: None,
        })
    }

    /// 원래 규칙 패턴
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 컴파일된 정규식 원문
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }
}

/// 경계 앵커
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Open,
    Word,
    Text,
}

/// `{...}` lookaround
#[derive(Debug, Clone, Copy)]
struct Lookaround<'p> {
    negative: bool,
    content: &'p str,
}

impl<'p> Lookaround<'p> {
    fn parse(inner: &'p str) -> Self {
        match inner.strip_prefix('~') {
            Some(content) => Self {
                negative: true,
                content,
            },
            None => Self {
                negative: false,
                content: inner,
            },
        }
    }
}

/// 패턴을 경계/lookaround/본문으로 나눈 결과
#[derive(Debug)]
struct PatternParts<'p> {
    left: Edge,
    behind: Option<Lookaround<'p>>,
    body: &'p str,
    ahead: Option<Lookaround<'p>>,
    right: Edge,
}

fn split_pattern(pattern: &str) -> PatternParts<'_> {
    let mut rest = pattern;

    let left = if let Some(r) = rest.strip_prefix("^^") {
        rest = r;
        Edge::Text
    } else if let Some(r) = rest.strip_prefix('^') {
        rest = r;
        Edge::Word
    } else {
        Edge::Open
    };

    let mut behind = None;
    if rest.starts_with('{') {
        if let Some(close) = rest.find('}').filter(|&close| close > 1) {
            behind = Some(Lookaround::parse(&rest[1..close]));
            rest = &rest[close + 1..];
        }
    }

    let right = if let Some(r) = rest.strip_suffix("$$") {
        rest = r;
        Edge::Text
    } else if let Some(r) = rest.strip_suffix('$') {
        rest = r;
        Edge::Word
    } else {
        Edge::Open
    };

    let mut ahead = None;
    if let Some(without_close) = rest.strip_suffix('}') {
        if let Some(open) = without_close.rfind('{').filter(|&open| open + 1 < without_close.len()) {
            ahead = Some(Lookaround::parse(&without_close[open + 1..]));
            rest = &without_close[..open];
        }
    }

    PatternParts {
        left,
        behind,
        body: rest,
        ahead,
        right,
    }
}

/// 캡처 그룹으로 펼친 변수 (정규식 안의 순서대로)
#[derive(Debug, Clone)]
struct CaptureVar {
    name: String,
    /// `<name>`으로 쓴 변수인지 (`@`는 false)
    named: bool,
    /// lookaround가 아닌 매칭 구간 안의 변수인지
    in_body: bool,
}

struct PatternCompiler<'a> {
    pattern: &'a str,
    variables: &'a Variables,
    captures: Vec<CaptureVar>,
}

impl<'a> PatternCompiler<'a> {
    fn new(pattern: &'a str, variables: &'a Variables) -> Self {
        Self {
            pattern,
            variables,
            captures: Vec::new(),
        }
    }

    fn error(&self, reason: impl Into<String>) -> HangulizeError {
        HangulizeError::notation(self.pattern, reason)
    }

    /// 패턴 -> 정규식 원문
    ///
    /// 캡처 그룹 번호가 정규식 안의 순서와 같도록 lookbehind, 본문, lookahead 순으로 번역
    fn regexify(&mut self) -> Result<String> {
        let parts = split_pattern(self.pattern);
        if parts.body.is_empty() {
            return Err(self.error("pattern has nothing to match"));
        }

        let behind = match parts.behind {
            Some(look) => format!(
                "(?{}{}(?:{}))",
                if look.negative { "<!" } else { "<=" },
                left_edge(parts.left),
                self.translate_lookaround(look)?
            ),
            None if parts.left == Edge::Open => String::new(),
            None => format!("(?<={})", left_edge(parts.left)),
        };

        let body = self.translate(parts.body, true)?;

        let ahead = match parts.ahead {
            Some(look) => format!(
                "(?{}(?:{}){})",
                if look.negative { "!" } else { "=" },
                self.translate_lookaround(look)?,
                right_edge(parts.right)
            ),
            None if parts.right == Edge::Open => String::new(),
            None => format!("(?={})", right_edge(parts.right)),
        };

        Ok(format!("{}(?:{}){}", behind, body, ahead))
    }

    fn translate_lookaround(&mut self, look: Lookaround<'_>) -> Result<String> {
        if look.content.is_empty() {
            return Err(self.error("empty lookaround"));
        }
        self.translate(look.content, false)
    }

    /// 패턴 조각 번역. 변수는 모두 캡처 그룹이 되고, `in_body`는 매칭 구간 안인지 표시
    fn translate(&mut self, src: &str, in_body: bool) -> Result<String> {
        let chars: Vec<char> = src.chars().collect();
        let mut out = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '@' => {
                    out.push_str(&self.variable(VOWELS, in_body, false)?);
                    i += 1;
                }
                '<' => match variable_name(&chars[i + 1..]) {
                    Some(name) => {
                        i += name.chars().count() + 2;
                        out.push_str(&self.variable(&name, in_body, true)?);
                    }
                    None => {
                        out.push_str(&escape_char('<'));
                        i += 1;
                    }
                },
                '|' => {
                    out.push('|');
                    i += 1;
                }
                c => {
                    out.push_str(&escape_char(c));
                    i += 1;
                }
            }
        }

        Ok(out)
    }

    /// 변수 -> 문자 선택 그룹
    fn variable(&mut self, name: &str, in_body: bool, named: bool) -> Result<String> {
        let chars = self
            .variables
            .get(name)
            .ok_or_else(|| self.error(format!("undefined variable '{}'", name)))?;
        if chars.is_empty() {
            return Err(self.error(format!("variable '{}' is empty", name)));
        }
        let alternation = chars
            .iter()
            .map(|&c| escape_char(c))
            .collect::<Vec<_>>()
            .join("|");
        self.captures.push(CaptureVar {
            name: name.to_string(),
            named,
            in_body,
        });
        Ok(format!("({})", alternation))
    }

    /// 치환 템플릿 컴파일 (`\N` 역참조, 변수 대 변수 치환)
    fn template(&self, text: &str) -> Result<Template> {
        let chars: Vec<char> = text.chars().collect();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut placeholders = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '\\' if chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()) => {
                    let digits: String = chars[i + 1..]
                        .iter()
                        .take_while(|c| c.is_ascii_digit())
                        .collect();
                    let group: usize = digits
                        .parse()
                        .map_err(|_| self.error(format!("invalid backreference \\{}", digits)))?;
                    if group == 0 || group > self.captures.len() {
                        return Err(self.error(format!(
                            "backreference \\{} has no matching variable",
                            group
                        )));
                    }
                    flush_literal(&mut literal, &mut pieces);
                    pieces.push(Piece::Group(group));
                    i += digits.len() + 1;
                }
                '<' => match variable_name(&chars[i + 1..]) {
                    Some(name) => {
                        flush_literal(&mut literal, &mut pieces);
                        i += name.chars().count() + 2;
                        placeholders.push(pieces.len());
                        pieces.push(Piece::Placeholder(name));
                    }
                    None => {
                        literal.push('<');
                        i += 1;
                    }
                },
                c => {
                    literal.push(c);
                    i += 1;
                }
            }
        }
        flush_literal(&mut literal, &mut pieces);

        if !placeholders.is_empty() {
            self.bind_placeholders(&mut pieces, &placeholders)?;
        }

        Ok(Template { pieces })
    }

    /// 본문 변수 하나와 템플릿 변수 하나를 위치별 문자 대응표로 연결
    fn bind_placeholders(&self, pieces: &mut [Piece], placeholders: &[usize]) -> Result<()> {
        let sources: Vec<(usize, &CaptureVar)> = self
            .captures
            .iter()
            .enumerate()
            .filter(|(_, var)| var.named && var.in_body)
            .collect();
        let (&[(index, source)], &[at]) = (sources.as_slice(), placeholders) else {
            return Err(self.error(
                "variable replacement needs exactly one variable in both pattern and replacement",
            ));
        };
        let Piece::Placeholder(dst_name) = &pieces[at] else {
            return Err(self.error("variable placeholder expected"));
        };

        let src = self
            .variables
            .get(&source.name)
            .ok_or_else(|| self.error(format!("undefined variable '{}'", source.name)))?;
        let dst = self
            .variables
            .get(dst_name)
            .ok_or_else(|| self.error(format!("undefined variable '{}'", dst_name)))?;
        if src.len() != dst.len() {
            return Err(self.error(format!(
                "the destination variable '{}' should have the same length with the source variable '{}'",
                dst_name, source.name
            )));
        }

        let map = src.iter().copied().zip(dst.iter().copied()).collect();
        pieces[at] = Piece::Mapped {
            group: index + 1,
            map,
        };
        Ok(())
    }
}

fn flush_literal(literal: &mut String, pieces: &mut Vec<Piece>) {
    if !literal.is_empty() {
        pieces.push(Piece::Literal(std::mem::take(literal)));
    }
}

/// `<` 다음 문자들에서 `name>` 읽기
fn variable_name(rest: &[char]) -> Option<String> {
    let close = rest.iter().position(|&c| c == '>')?;
    let name: String = rest[..close].iter().collect();
    let mut chars = name.chars();
    let first = chars.next()?;
    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}

fn escape_char(c: char) -> String {
    let mut buf = [0u8; 4];
    fancy_regex::escape(c.encode_utf8(&mut buf)).into_owned()
}

fn left_edge(edge: Edge) -> String {
    match edge {
        Edge::Open => String::new(),
        Edge::Word => BLANK.to_string(),
        Edge::Text => format!("^{}", BLANK),
    }
}

fn right_edge(edge: Edge) -> String {
    match edge {
        Edge::Open => String::new(),
        Edge::Word => BLANK.to_string(),
        Edge::Text => format!("{}$", BLANK),
    }
}

#[derive(Debug, Clone)]
enum Piece {
    Literal(String),
    /// `\N`
    Group(usize),
    /// 바인딩 전 `<name>`
    Placeholder(String),
    /// 캡처된 문자를 대응표로 바꿈
    Mapped { group: usize, map: HashMap<char, char> },
}

/// 컴파일된 치환 템플릿
#[derive(Debug, Clone)]
pub(crate) struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub(crate) fn expand(&self, m: &RuleMatch<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Group(i) => out.push_str(m.group(*i).unwrap_or("")),
                Piece::Placeholder(name) => {
                    out.push('<');
                    out.push_str(name);
                    out.push('>');
                }
                Piece::Mapped { group, map } => {
                    for c in m.group(*group).unwrap_or("").chars() {
                        out.push(map.get(&c).copied().unwrap_or(c));
                    }
                }
            }
        }
        out
    }
}
