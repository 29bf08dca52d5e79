// futures-calc: leveraged futures pre-trade risk calculator.
// takes one position as a trader describes it and answers: how much balance
// do I need, where do I get liquidated, and does my stop-loss ever fill.
// all computation is deterministic and stateless with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Side, PositionInput, Field
//   1.3  input.rs: raw text field normalization, side parsing
//   2.x  validation.rs: per-field rules, InvalidFields report
//   3.x  margin.rs: position units, notional, initial margin, min balance
//   4.x  conditional.rs: take profit / stop loss levels and pnl
//   5.x  liquidation.rs: liquidation distance and price, SL reachability
//   6.x  risk.rs: leverage risk tiers
//   7.x  config.rs: leverage limits + risk tiers
//   8.x  calculator.rs: full derivation chain
//   8.1  report.rs: validate + compute + classify in one call
//   9.x  format.rs: currency / percent / number display

// calculation modules
pub mod calculator;
pub mod conditional;
pub mod liquidation;
pub mod margin;
pub mod types;

// gating and classification
pub mod risk;
pub mod validation;

// caller facing helpers
pub mod config;
pub mod format;
pub mod input;
pub mod report;

// re exports for convenience
pub use calculator::*;
pub use risk::*;
pub use types::*;
pub use validation::*;
pub use config::{CalculatorConfig, ConfigError, InputLimits};
pub use format::{format_currency, format_number, format_percent};
pub use input::{ParseSideError, RawPositionInput};
pub use report::{assess, assess_with, AssessError, Assessment, StopLossOutcome};
