//! A little translator for Portuguese-dialect x86 assembly.
//!
//! Source files written with Portuguese keywords (`mover`, `secao_texto`,
//! `principal:`, ...) are rewritten into standard NASM mnemonics so that an
//! ordinary toolchain can assemble them. The reverse direction is also
//! available through the library API.
//!
//! The pipeline is a strict two-phase batch: [`lexer`] splits the source into
//! an ordered token sequence, then [`rewriter`] walks it once, substituting
//! each token through the bilingual [`dictionary`] and reassembling the
//! output text. Tokens with no dictionary pairing pass through unchanged;
//! nothing about the instruction stream is validated.

pub mod dictionary;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod rewriter;

use lexer::Lexer;

/// Which side of the dictionary the input text is written in.
///
/// Fixed for the duration of one run; never auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Portuguese dialect in, standard mnemonics out.
    ///
    /// Lookups match the localized side case-insensitively.
    ToCanonical,
    /// Standard mnemonics in, Portuguese dialect out.
    ///
    /// Lookups match the canonical side with exact case.
    ToLocalized,
}

/// Output file format requested for the run.
///
/// A two-valued switch: `Elf64` additionally rewrites the program
/// entry-point keyword to the fixed `_start` symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Default,
    Elf64,
}

/// Translates a whole source text in one pass.
pub fn translate(source: &str, direction: Direction, format: OutputFormat) -> String {
    let tokens = Lexer::new(source).collect::<Vec<_>>();
    rewriter::rewrite(
        &tokens,
        &dictionary::Dictionary::standard(),
        direction,
        format,
    )
}
