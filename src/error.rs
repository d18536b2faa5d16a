/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Every grammar rule that can fail has its own error kind, so callers
/// can report exactly which construct failed to match.
///
/// Evaluation deliberately has no error domain: type mismatches, undefined
/// identifiers and unsupported operand combinations all resolve to the `Nil`
/// value instead of failing.
pub mod parse_error;

pub use parse_error::ParseError;
