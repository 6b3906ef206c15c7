//! vacuum::errors — contract errors for vacuum-metric estimation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the vacuum-analysis entry
//! points. Degenerate data (empty traces, all-missing pressure, flat
//! series) is never an error here — every estimator degrades to a
//! documented sentinel. The only failure is a caller contract violation.
//!
//! Key behaviors
//! -------------
//! - Define [`VacuumResult`] and [`VacuumError`] as the canonical result
//!   and error types for the vacuum subtree.
//! - Attach human-readable `Display` messages carrying both offending
//!   lengths so a mismatch is diagnosable from the message alone.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`VacuumError`] values are small, cheap to clone, and comparable, so
//!   tests can assert on them directly.
//! - Estimator entry points never panic on numeric input; a returned error
//!   always indicates misaligned caller inputs.
//!
//! Conventions
//! -----------
//! - This module covers vacuum-analysis errors only; the quality subtree
//!   carries its own `errors` module with the same shape.
//! - Error messages are phrased in terms of the violated contract rather
//!   than implementation details.
//!
//! Downstream usage
//! ----------------
//! - Produced by the spike, leak-rate, and pump-down entry points when a
//!   timestamp array is supplied whose length differs from the pressure
//!   array's.
//!
//! Testing notes
//! -------------
//! - Unit tests here verify that the `Display` message embeds both payload
//!   lengths.

pub type VacuumResult<T> = Result<T, VacuumError>;

/// VacuumError — caller contract violations in vacuum analysis.
///
/// Variants
/// --------
/// - `LengthMismatch { values, timestamps }`
///   A timestamp array was supplied whose length differs from the pressure
///   array. The two must be parallel; misaligned inputs have no sensible
///   interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VacuumError {
    LengthMismatch { values: usize, timestamps: usize },
}

impl std::error::Error for VacuumError {}

impl std::fmt::Display for VacuumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VacuumError::LengthMismatch { values, timestamps } => {
                write!(
                    f,
                    "pressure and timestamps must have equal length: got {values} pressure samples and {timestamps} timestamps."
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
    // - `Display` formatting for VacuumError, including payload embedding.
    //
    // They intentionally DO NOT cover:
    // - Production of these errors by the estimators; that is exercised in
    //   their own tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `VacuumError::LengthMismatch` embeds both offending
    // lengths in its `Display` representation.
    //
    // Given
    // -----
    // - A mismatch of 4 pressure samples against 6 timestamps.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains both "4" and "6".
    fn length_mismatch_includes_both_lengths_in_display() {
        // Arrange
        let err = VacuumError::LengthMismatch { values: 4, timestamps: 6 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('4') && msg.contains('6'),
            "Display message should include both lengths.\nGot: {msg}"
        );
    }
}
