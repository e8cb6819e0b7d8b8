//! The fixed bilingual keyword table and direction-aware lookup.
//!
//! Each [`Entry`] pairs a standard NASM spelling with its Portuguese dialect
//! spelling. The table is static configuration: loaded once, never mutated.
//! Table order is the deterministic tie-break (first matching entry wins),
//! and no two entries may collide under the comparison rules of either
//! direction.
//!
//! Compound entries such as `section .data` are ordinary entries; they rely
//! on plain string equality and can only ever match on their single-word
//! side, since the lexer never emits a word containing a space.

use crate::Direction;

/// The canonical spelling of the operand separator.
pub const OPERAND_SEPARATOR: &str = ",";

/// One immutable keyword pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub canonical: &'static str,
    pub localized: &'static str,
}

impl Entry {
    /// The side this entry is matched against under `direction`.
    pub fn source(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::ToCanonical => self.localized,
            Direction::ToLocalized => self.canonical,
        }
    }

    /// The side this entry rewrites to under `direction`.
    pub fn target(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::ToCanonical => self.canonical,
            Direction::ToLocalized => self.localized,
        }
    }

    fn matches(&self, token: &str, direction: Direction) -> bool {
        match direction {
            // Dialect keywords match in any letter-casing.
            Direction::ToCanonical => self.localized.eq_ignore_ascii_case(token),
            // Canonical mnemonics match as spelled.
            Direction::ToLocalized => self.canonical == token,
        }
    }
}

static STANDARD: [Entry; 33] = [
    Entry { canonical: "section", localized: "secao" },
    Entry { canonical: ".data", localized: ".dados" },
    Entry { canonical: "section .data", localized: "secao_dados" },
    Entry { canonical: ".bss", localized: ".blcinc" },
    Entry { canonical: "section .bss", localized: "secao_inicial" },
    Entry { canonical: ".text", localized: ".texto" },
    Entry { canonical: "section .text", localized: "secao_texto" },
    Entry { canonical: "_start", localized: "principal" },
    Entry { canonical: "_start:", localized: "principal:" },
    Entry { canonical: ",", localized: "<-" },
    // Data definition types.
    Entry { canonical: "db", localized: "1byte" },
    Entry { canonical: "dw", localized: "2byte" },
    Entry { canonical: "dd", localized: "4byte" },
    Entry { canonical: "dq", localized: "8byte" },
    Entry { canonical: "dt", localized: "10byte" },
    // Instructions.
    Entry { canonical: "add", localized: "adicionar" },
    Entry { canonical: "mov", localized: "mover" },
    Entry { canonical: "sub", localized: "subtrair" },
    Entry { canonical: "div", localized: "dividir" },
    Entry { canonical: "mul", localized: "multiplicar" },
    Entry { canonical: "ret", localized: "retorna" },
    Entry { canonical: "syscall", localized: "chamadasis" },
    Entry { canonical: "call", localized: "chamada" },
    Entry { canonical: "push", localized: "insere" },
    Entry { canonical: "pop", localized: "retira" },
    Entry { canonical: "inc", localized: "incremente" },
    Entry { canonical: "dec", localized: "decremento" },
    Entry { canonical: "imult", localized: "multiplicarint" },
    Entry { canonical: "idiv", localized: "dividirint" },
    Entry { canonical: "not", localized: "nao" },
    Entry { canonical: "neg", localized: "negar" },
    Entry { canonical: "jump", localized: "salto" },
    Entry { canonical: "cmp", localized: "compare" },
];

/// A read-only view over a keyword table.
///
/// [`Dictionary::standard`] is the process-wide table; tests may supply
/// alternate tables (including an empty one).
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    entries: &'static [Entry],
}

impl Dictionary {
    pub const fn new(entries: &'static [Entry]) -> Dictionary {
        Dictionary { entries }
    }

    pub fn standard() -> Dictionary {
        Dictionary::new(&STANDARD)
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Looks `token` up under `direction`, returning the paired form of the
    /// first matching entry.
    pub fn translate(&self, token: &str, direction: Direction) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(token, direction))
            .map(|entry| entry.target(direction))
    }

    /// The source-side spelling of the operand separator under `direction`:
    /// the form the separator takes in the *input* text.
    pub fn separator(&self, direction: Direction) -> &'static str {
        self.entries
            .iter()
            .find(|entry| entry.canonical == OPERAND_SEPARATOR)
            .map(|entry| entry.source(direction))
            .unwrap_or(OPERAND_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn dialect_keywords_match_in_any_casing() {
        let dictionary = Dictionary::standard();
        assert_eq!(dictionary.translate("mover", ToCanonical), Some("mov"));
        assert_eq!(dictionary.translate("MOVER", ToCanonical), Some("mov"));
        assert_eq!(dictionary.translate("MoVeR", ToCanonical), Some("mov"));
    }

    #[test]
    fn canonical_mnemonics_match_exact_case_only() {
        let dictionary = Dictionary::standard();
        assert_eq!(dictionary.translate("mov", ToLocalized), Some("mover"));
        assert_eq!(dictionary.translate("MOV", ToLocalized), None);
    }

    #[test]
    fn unknown_tokens_are_not_found() {
        let dictionary = Dictionary::standard();
        assert_eq!(dictionary.translate("eax", ToCanonical), None);
        assert_eq!(dictionary.translate("eax", ToLocalized), None);
    }

    #[test]
    fn compound_entries_match_on_their_single_word_side() {
        let dictionary = Dictionary::standard();
        assert_eq!(
            dictionary.translate("secao_dados", ToCanonical),
            Some("section .data"),
        );
        assert_eq!(
            dictionary.translate("secao_texto", ToCanonical),
            Some("section .text"),
        );
    }

    #[test]
    fn separator_spelling_follows_the_direction() {
        let dictionary = Dictionary::standard();
        assert_eq!(dictionary.separator(ToCanonical), "<-");
        assert_eq!(dictionary.separator(ToLocalized), ",");
    }

    #[test]
    fn separator_defaults_to_comma_without_a_table_pair() {
        let dictionary = Dictionary::new(&[]);
        assert_eq!(dictionary.separator(ToCanonical), ",");
        assert_eq!(dictionary.separator(ToLocalized), ",");
    }

    #[test]
    fn no_two_entries_collide() {
        for (a, b) in STANDARD.iter().tuple_combinations() {
            assert!(
                !a.localized.eq_ignore_ascii_case(b.localized),
                "localized forms collide: {:?} and {:?}",
                a,
                b,
            );
            assert_ne!(a.canonical, b.canonical, "canonical forms collide");
        }
    }
}
