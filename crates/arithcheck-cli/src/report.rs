//! Plain-text rendering of validation results.

use std::io::{self, Write};

use arithcheck::{Strategy, Validator, tokenize};

fn heading(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Recursive => "=== ValidateExpression (Recursive Parser) ===",
        Strategy::Linear => "=== ValidateLinear (State Machine) ===",
    }
}

/// Writes one `[VALID]`/`[INVALID]` line per expression and returns how many
/// were invalid.
pub(crate) fn write_verdicts(
    out: &mut impl Write,
    validator: &Validator,
    strategy: Strategy,
    expressions: &[String],
) -> io::Result<usize> {
    writeln!(out, "{}", heading(strategy))?;
    let mut invalid = 0;
    for expr in expressions {
        match validator.validate(strategy, expr) {
            Ok(()) => writeln!(out, "[VALID]   {expr}")?,
            Err(err) => {
                invalid += 1;
                writeln!(out, "[INVALID] {expr} -> {err}")?;
            }
        }
    }
    Ok(invalid)
}

/// Writes both verdicts side by side and returns the number of expressions
/// the strategies disagree on.
pub(crate) fn write_comparison(
    out: &mut impl Write,
    validator: &Validator,
    expressions: &[String],
) -> io::Result<usize> {
    writeln!(out, "=== Recursive vs Linear ===")?;
    let mut disagreements = 0;
    for expr in expressions {
        let comparison = validator.compare(expr);
        let mark = if comparison.agrees() {
            "[AGREE]   "
        } else {
            disagreements += 1;
            "[DISAGREE]"
        };
        let verdict = |strategy| match comparison.get(strategy) {
            Ok(()) => "valid".to_string(),
            Err(err) => format!("invalid ({err})"),
        };
        writeln!(
            out,
            "{mark} {expr} -> recursive: {}, linear: {}",
            verdict(Strategy::Recursive),
            verdict(Strategy::Linear)
        )?;
    }
    Ok(disagreements)
}

/// Writes the token stream of each expression, or the tokenizer error.
pub(crate) fn write_tokens(out: &mut impl Write, expressions: &[String]) -> io::Result<()> {
    writeln!(out, "=== Tokens ===")?;
    for expr in expressions {
        match tokenize(expr) {
            Ok(tokens) => {
                let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                writeln!(out, "{expr} -> [{}]", rendered.join(" "))?;
            }
            Err(err) => writeln!(out, "{expr} -> error: {err}")?,
        }
    }
    Ok(())
}
