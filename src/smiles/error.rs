use thiserror::Error;

/// Errors reported by the validating front end.
///
/// The default parse path never produces these: it trusts its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmilesError {
    /// The input string was empty or contained only whitespace.
    #[error("empty SMILES string")]
    EmptyInput,
    /// A character outside the supported alphabet, or in a position where it
    /// cannot appear.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },
    /// A bracket atom whose element is not in the organic subset.
    #[error("unsupported bracket atom '{text}' at position {pos}")]
    UnsupportedBracketAtom { pos: usize, text: String },
    /// A `[` without a closing `]`.
    #[error("unclosed bracket atom starting at position {pos}")]
    UnclosedBracket { pos: usize },
    /// A parenthesis was opened without a matching close, or vice versa.
    #[error("unmatched parenthesis at position {pos}")]
    UnmatchedParen { pos: usize },
    /// A ring-closure digit occurring an odd number of times.
    #[error("unclosed ring {digit}")]
    UnclosedRing { digit: u8 },
    /// A ring-closure digit used for more than one ring.
    #[error("ring label {digit} is reused")]
    RingDigitReused { digit: u8 },
    /// A ring-closure digit above the highest label that is resolved.
    #[error("ring label {digit} at position {pos} is not supported")]
    UnresolvedRingDigit { digit: u8, pos: usize },
    /// A bond marker placed on a ring closure (`C=1CCCCC=1`).
    #[error("bond '{ch}' on ring closure at position {pos} is not supported")]
    RingBondOrder { pos: usize, ch: char },
    /// A bond marker without an atom on both sides.
    #[error("bond '{ch}' at position {pos} is not between two atoms")]
    DanglingBond { pos: usize, ch: char },
}
