//! The substitution engine: walks the token sequence once, substitutes each
//! word through the dictionary, and reassembles the output text.
//!
//! Processing is strictly sequential with a single explicit one-position
//! peek, used only for the separator spacing rule. Words with no dictionary
//! pairing are emitted unchanged; permissiveness here is deliberate, not an
//! error path.

use crate::dictionary::Dictionary;
use crate::lexer::{Token, TokenKind};
use crate::{Direction, OutputFormat};

/// The dialect spelling of the program entry point, and its label form.
const ENTRY_POINT: &str = "principal";
const ENTRY_POINT_LABEL: &str = "principal:";

/// The fixed symbol the ELF64 format expects the entry point to carry.
const ENTRY_SYMBOL: &str = "_start";
const ENTRY_SYMBOL_LABEL: &str = "_start:";

/// The entry-point special case. Only the ELF64 format rewrites the entry
/// keyword, only when translating to canonical, and only on an exact match;
/// the colon of the label form is mirrored. A hit skips dictionary lookup.
fn entry_point_symbol(
    token: &str,
    direction: Direction,
    format: OutputFormat,
) -> Option<&'static str> {
    if format != OutputFormat::Elf64 || direction != Direction::ToCanonical {
        return None;
    }

    match token {
        ENTRY_POINT => Some(ENTRY_SYMBOL),
        ENTRY_POINT_LABEL => Some(ENTRY_SYMBOL_LABEL),
        _ => None,
    }
}

/// Rewrites `tokens` into the final output text.
///
/// Every emitted word is followed by a single space, except when the next
/// token is the operand separator in its source-side spelling; the separator
/// binds tightly to the operand before it (`eax,` rather than `eax ,`).
/// Newline markers are emitted verbatim and carry no translation.
pub fn rewrite(
    tokens: &[Token],
    dictionary: &Dictionary,
    direction: Direction,
    format: OutputFormat,
) -> String {
    let separator = dictionary.separator(direction);
    let mut out = String::new();

    for (position, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Newline => out.push('\n'),
            TokenKind::Word => {
                let text = entry_point_symbol(token.src, direction, format)
                    .or_else(|| dictionary.translate(token.src, direction))
                    .unwrap_or(token.src);
                out.push_str(text);

                let next_is_separator = tokens.get(position + 1).map_or(false, |next| {
                    next.kind == TokenKind::Word && next.src == separator
                });
                if !next_is_separator {
                    out.push(' ');
                }
            }
        }
    }

    out
}
