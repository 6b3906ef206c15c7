//! vacuum — physical characterization of pressure traces.
//!
//! Purpose
//! -------
//! Answer "what did the system physically do" from one pressure trace:
//! find transient spikes, estimate the base pressure and leak rate, and
//! condense a pump-down into its milestone profile.
//!
//! Key behaviors
//! -------------
//! - Detect pressure excursions against a locally adaptive rolling
//!   threshold and group them into [`SpikeEvent`]s ([`spikes`]).
//! - Estimate base pressure from the most temporally stable plateau,
//!   with a strictly positive sentinel floor ([`base_pressure`]).
//! - Estimate leak rate from a closed-form log-linear fit, with slope,
//!   R², and time constant available via [`LeakRateFit`] ([`leak_rate`]).
//! - Compose the above into a [`PumpdownProfile`] with structured failure
//!   diagnostics ([`pumpdown`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Non-finite samples mean "missing" and are skipped or dropped
//!   pairwise with their times; they never poison an estimate.
//! - Estimators hold read-only configuration and degrade to documented
//!   sentinels on degenerate data; the only error, [`VacuumError`], is a
//!   length-mismatched time array.
//!
//! Conventions
//! -----------
//! - Event and milestone times are in the caller's timestamp units when a
//!   time axis is supplied, sample-index units otherwise.
//! - Pressure units are the caller's throughout; only ratios, logarithms,
//!   and differences of them are formed.
//!
//! Downstream usage
//! ----------------
//! - Typical code imports the main surface as:
//!
//!   ```rust
//!   use vacuum_timeseries::vacuum::{PumpdownAnalyzer, SpikeDetector};
//!
//!   let pressure = [1000.0, 100.0, 10.0, 1.0, 0.9, 0.9];
//!   let outcome = PumpdownAnalyzer::new().analyze(&pressure, None)?;
//!   let spikes = SpikeDetector::new().detect(&pressure, None)?;
//!   assert!(outcome.profile.base_pressure > 0.0);
//!   # Ok::<(), vacuum_timeseries::vacuum::VacuumError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule pins its own detection and degradation rules; the
//!   crate's integration test drives the composite pipeline end to end.

pub mod base_pressure;
pub mod errors;
pub mod leak_rate;
pub mod pumpdown;
pub mod spikes;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::base_pressure::BasePressureEstimator;
pub use self::errors::{VacuumError, VacuumResult};
pub use self::leak_rate::{LeakRateEstimator, LeakRateFit};
pub use self::pumpdown::{PumpdownAnalyzer, PumpdownDiagnostic, PumpdownOutcome, PumpdownProfile};
pub use self::spikes::{SpikeDetector, SpikeEvent, SpikeSeverity};
