//! Functions and data structures for lexing dialect assembly source.
//!
//! Lexing splits a source string into an ordered sequence of [`Token`]s. A
//! token is either one "word" of the source (a keyword, identifier, or
//! punctuation run, exactly as spelled) or the dedicated newline marker.
//! Here's an example:
//!
//! ```
//! use portugasm::lexer::{Lexer, Token, TokenKind::*};
//!
//! let tokens = Lexer::new("mover eax <- 1\n").collect::<Vec<_>>();
//! assert_eq!(tokens,
//!     vec![
//!         Token { src: "mover", kind: Word },
//!         Token { src: "eax",   kind: Word },
//!         Token { src: "<-",    kind: Word },
//!         Token { src: "1",     kind: Word },
//!         Token { src: "\n",    kind: Newline },
//!     ]);
//! ```
//!
//! Words are separated by runs of spaces, which are not represented in the
//! output at all; consecutive separators therefore never produce an empty
//! token. Tabs do not separate words, but leading tabs are stripped from the
//! word they precede. The lexer does no lookahead across line boundaries and
//! attaches no meaning to the words it emits; adjacency concerns such as the
//! operand separator are the rewriter's job.

use regex::Regex;

/// One lexical unit of the source text.
///
/// Identity is purely positional; no source location is retained beyond the
/// order of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub src: &'input str,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-space, non-newline text.
    Word,
    /// A line terminator. Matches line feeds, carriage returns, and CRLF.
    Newline,
}

/// What a raw pattern match classifies as, before filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Class {
    Space,
    Newline,
    Word,
}

pub struct Lexer<'input> {
    src: &'input str,
    patterns: Vec<(Regex, Class)>,
    cur_pos: usize,
}

impl<'input> Lexer<'input> {
    // The lexer tries these patterns in this order. Registering a pattern
    // anchors it to the start of the slice under examination, so don't
    // use ^ here.
    const PATTERNS: [(&'static str, Class); 3] = [
        (r" +", Class::Space),
        (r"(\r\n|\r|\n)", Class::Newline),
        (r"[^ \r\n]+", Class::Word),
    ];

    pub fn new(src: &'input str) -> Lexer<'input> {
        let mut this = Lexer {
            src,
            patterns: Vec::new(),
            cur_pos: 0,
        };

        for (pattern, class) in Self::PATTERNS.iter() {
            this.register_pattern(pattern, *class);
        }

        this
    }

    fn register_pattern(&mut self, pattern: &str, class: Class) {
        assert!(!pattern.starts_with('^'));
        let pattern = format!("^{}", pattern);
        let regex = Regex::new(pattern.as_str()).expect("Invalid regex");
        self.patterns.push((regex, class));
    }

    fn tail(&self) -> &'input str {
        &self.src[self.cur_pos..]
    }

    fn scan(&mut self) -> (&'input str, Class) {
        let tail = self.tail();
        for (pattern, class) in &self.patterns {
            if let Some(found) = pattern.find(tail) {
                self.cur_pos += found.end();
                return (found.as_str(), *class);
            }
        }

        unreachable!("the pattern table does not cover some input character");
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.src.len() <= self.cur_pos {
                return None;
            }

            let (text, class) = self.scan();
            match class {
                Class::Space => continue,
                Class::Newline => {
                    return Some(Token {
                        src: text,
                        kind: TokenKind::Newline,
                    })
                }
                Class::Word => {
                    let text = text.trim_start_matches(|c: char| c == ' ' || c == '\t');
                    if text.is_empty() {
                        // A fragment of pure tabs carries no word.
                        continue;
                    }
                    return Some(Token {
                        src: text,
                        kind: TokenKind::Word,
                    });
                }
            }
        }
    }
}
