//! Built-in commands: `clear`, `out` and `lc`.
//!
//! `help` is answered by the registry itself.

use vterm_types::error::{Result, VtermError};

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(OutCmd));
    reg.register(Box::new(LcCmd));
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear all output, or remove one line by index"
    }
    fn usage(&self) -> &str {
        "clear [[-r] line]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        // With a flag and an index both pops run: `-r` drops the last line
        // first, then the index is resolved against the shortened buffer.
        match args {
            [] => {
                env.lines.clear();
                return Ok(());
            },
            [_, _, _, ..] => {
                return Err(VtermError::BadArguments("too many args".into()));
            },
            ["-r", _] => {
                env.lines.pop()?;
            },
            [_, _] => {
                // Reported, but the index pop below still runs.
                env.lines.put(
                    VtermError::BadArguments("args[1] != valid flag".into()).to_string(),
                );
            },
            [_] => {},
        }

        let index = args
            .last()
            .and_then(|last| parse_index(last))
            .ok_or_else(|| VtermError::BadArguments("args[-1] != int".into()))?;
        env.lines.pop_at(index)?;
        Ok(())
    }
}

/// Read a decimal integer: surrounding whitespace, an optional sign, and
/// single `_` separators between digits are accepted. Values past the range
/// of `isize` saturate, so they still fail as an out-of-range index.
fn parse_index(token: &str) -> Option<isize> {
    let token = token.trim();
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let mut value: isize = 0;
    for b in digits.bytes() {
        let digit = match b {
            b'_' => continue,
            b'0'..=b'9' => isize::from(b - b'0'),
            _ => return None,
        };
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    Some(value)
}

// ---------------------------------------------------------------------------
// out
// ---------------------------------------------------------------------------

struct OutCmd;
impl Command for OutCmd {
    fn name(&self) -> &str {
        "out"
    }
    fn description(&self) -> &str {
        "Print one word or one double-quoted phrase"
    }
    fn usage(&self) -> &str {
        "out [word | \"quoted text\"]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        if args.is_empty() {
            env.lines.put("");
            return Ok(());
        }

        let joined = quote_join(args)?;
        let [arg] = joined.as_slice() else {
            return Err(VtermError::BadArguments(
                "expected a single argument".into(),
            ));
        };
        env.lines.put(strip_quotes(arg));
        Ok(())
    }
}

/// Regroup space-split tokens into arguments, keeping double-quoted spans
/// together. Span members are re-joined with single spaces and keep their
/// quotes.
fn quote_join(tokens: &[&str]) -> Result<Vec<String>> {
    let mut result = Vec::new();
    let mut span: Vec<&str> = Vec::new();
    let mut in_quotes = false;

    for &tok in tokens {
        let opens = tok.starts_with('"');
        let closes = tok.ends_with('"');
        if !in_quotes && opens && closes {
            result.push(tok.to_string());
        } else if !in_quotes && opens {
            span.push(tok);
            in_quotes = true;
        } else if in_quotes && closes {
            span.push(tok);
            in_quotes = false;
            result.push(span.join(" "));
            span.clear();
        } else if opens || closes {
            return Err(VtermError::Quote);
        } else if in_quotes {
            span.push(tok);
        } else {
            result.push(tok.to_string());
        }
    }

    if in_quotes {
        return Err(VtermError::Quote);
    }
    Ok(result)
}

/// Drop one pair of surrounding double quotes. A lone `"` becomes empty.
fn strip_quotes(arg: &str) -> &str {
    if arg.starts_with('"') && arg.ends_with('"') {
        arg.get(1..arg.len() - 1).unwrap_or_default()
    } else {
        arg
    }
}

// ---------------------------------------------------------------------------
// lc
// ---------------------------------------------------------------------------

struct LcCmd;
impl Command for LcCmd {
    fn name(&self) -> &str {
        "lc"
    }
    fn description(&self) -> &str {
        "Number output lines"
    }
    fn usage(&self) -> &str {
        "lc"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        *env.line_count = true;
        Ok(())
    }
}
