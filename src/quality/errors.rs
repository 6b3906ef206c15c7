//! quality::errors — contract errors for quality analysis.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the quality-analysis entry
//! points. Data problems (missing samples, outliers, stuck sensors) are
//! never errors here — they are what the analyzer measures and reports.
//! The only failures are caller contract violations.
//!
//! Key behaviors
//! -------------
//! - Define [`QualityResult`] and [`QualityError`] as the canonical result
//!   and error types for the quality subtree.
//! - Attach human-readable `Display` messages carrying both offending
//!   lengths so a mismatch is diagnosable from the message alone.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`QualityError`] values are small, cheap to clone, and comparable, so
//!   tests can assert on them directly.
//! - Analyzer entry points return [`QualityResult<T>`] and never panic on
//!   numeric input; a returned error always indicates a caller bug, not a
//!   data problem.
//!
//! Conventions
//! -----------
//! - This module covers quality-analysis errors only; the vacuum subtree
//!   carries its own `errors` module with the same shape.
//! - Error messages are phrased in terms of the violated contract
//!   ("values and timestamps must have equal length") rather than
//!   implementation details.
//!
//! Downstream usage
//! ----------------
//! - [`crate::quality::QualityAnalyzer::analyze`] returns
//!   [`QualityResult<QualityReport>`](crate::quality::QualityReport) and is
//!   the only producer of these errors.
//!
//! Testing notes
//! -------------
//! - Unit tests here verify that the `Display` message embeds both payload
//!   lengths.

pub type QualityResult<T> = Result<T, QualityError>;

/// QualityError — caller contract violations in quality analysis.
///
/// Variants
/// --------
/// - `LengthMismatch { values, timestamps }`
///   A timestamp array was supplied whose length differs from the value
///   array. The two must be parallel; nothing sensible can be analyzed
///   from misaligned inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityError {
    LengthMismatch { values: usize, timestamps: usize },
}

impl std::error::Error for QualityError {}

impl std::fmt::Display for QualityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityError::LengthMismatch { values, timestamps } => {
                write!(
                    f,
                    "values and timestamps must have equal length: got {values} values and {timestamps} timestamps."
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for QualityError, including payload embedding.
    //
    // They intentionally DO NOT cover:
    // - Production of these errors by the analyzer; that is exercised in
    //   the analyzer's own tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `QualityError::LengthMismatch` embeds both offending
    // lengths in its `Display` representation.
    //
    // Given
    // -----
    // - A mismatch of 5 values against 7 timestamps.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains both "5" and "7".
    fn length_mismatch_includes_both_lengths_in_display() {
        // Arrange
        let err = QualityError::LengthMismatch { values: 5, timestamps: 7 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('5') && msg.contains('7'),
            "Display message should include both lengths.\nGot: {msg}"
        );
    }
}
