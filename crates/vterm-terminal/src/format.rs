//! Template substitution for `put_formatted`.
//!
//! Placeholders are `{}` (next positional value), `{N}` (positional value N)
//! and `{name}` (named value). `{{` and `}}` produce literal braces. Format
//! specs such as `{:>4}` are rejected.

use std::collections::HashMap;
use std::fmt::Display;

use vterm_types::error::{Result, VtermError};

/// Ordered and named values substituted into a template.
#[derive(Default)]
pub struct FormatArgs<'a> {
    positional: Vec<&'a dyn Display>,
    named: HashMap<&'a str, &'a dyn Display>,
}

impl<'a> FormatArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value.
    pub fn arg(mut self, value: &'a dyn Display) -> Self {
        self.positional.push(value);
        self
    }

    /// Bind a named value. A later binding of the same name wins.
    pub fn named(mut self, name: &'a str, value: &'a dyn Display) -> Self {
        self.named.insert(name, value);
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unset,
    Automatic,
    Manual,
}

/// Substitute every placeholder in `template`.
pub fn format_template(template: &str, args: &FormatArgs<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut numbering = Numbering::Unset;
    let mut next_auto = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            },
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            },
            '}' => return Err(format_error("single '}' encountered in template")),
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => {
                            return Err(format_error("unexpected '{' in field name"));
                        },
                        Some(c) => field.push(c),
                        None => return Err(format_error("single '{' encountered in template")),
                    }
                }
                let value = resolve_field(&field, args, &mut numbering, &mut next_auto)?;
                out.push_str(&value.to_string());
            },
            _ => out.push(ch),
        }
    }
    Ok(out)
}

fn resolve_field<'a>(
    field: &str,
    args: &FormatArgs<'a>,
    numbering: &mut Numbering,
    next_auto: &mut usize,
) -> Result<&'a dyn Display> {
    if field.contains([':', '!']) {
        return Err(format_error(&format!(
            "format specs are not supported: {{{field}}}"
        )));
    }

    if field.is_empty() {
        if *numbering == Numbering::Manual {
            return Err(format_error(
                "cannot switch from manual field numbering to automatic",
            ));
        }
        *numbering = Numbering::Automatic;
        let index = *next_auto;
        *next_auto += 1;
        return positional(args, index);
    }

    if field.bytes().all(|b| b.is_ascii_digit()) {
        if *numbering == Numbering::Automatic {
            return Err(format_error(
                "cannot switch from automatic field numbering to manual",
            ));
        }
        *numbering = Numbering::Manual;
        let index: usize = field
            .parse()
            .map_err(|_| format_error(&format!("bad field index {field}")))?;
        return positional(args, index);
    }

    args.named
        .get(field)
        .copied()
        .ok_or_else(|| format_error(&format!("missing named argument {field:?}")))
}

fn positional<'a>(args: &FormatArgs<'a>, index: usize) -> Result<&'a dyn Display> {
    args.positional
        .get(index)
        .copied()
        .ok_or_else(|| format_error(&format!("missing positional argument {index}")))
}

fn format_error(msg: &str) -> VtermError {
    VtermError::Format(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automatic_numbering() {
        let args = FormatArgs::new().arg(&"a").arg(&2);
        assert_eq!(format_template("{}-{}", &args).unwrap(), "a-2");
    }

    #[test]
    fn manual_numbering_can_repeat() {
        let args = FormatArgs::new().arg(&"x").arg(&"y");
        assert_eq!(format_template("{1}{0}{1}", &args).unwrap(), "yxy");
    }

    #[test]
    fn named_values() {
        let user = "root";
        let args = FormatArgs::new().named("user", &user).named("n", &3);
        assert_eq!(
            format_template("{user} has {n} jobs", &args).unwrap(),
            "root has 3 jobs"
        );
    }

    #[test]
    fn escaped_braces() {
        let args = FormatArgs::new().arg(&1);
        assert_eq!(format_template("{{{}}}", &args).unwrap(), "{1}");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(
            format_template("no placeholders", &FormatArgs::new()).unwrap(),
            "no placeholders"
        );
    }

    #[test]
    fn missing_positional() {
        let err = format_template("{} {}", &FormatArgs::new().arg(&1)).unwrap_err();
        assert!(format!("{err}").contains("missing positional argument 1"));
    }

    #[test]
    fn missing_named() {
        let err = format_template("{who}", &FormatArgs::new()).unwrap_err();
        assert!(format!("{err}").contains("\"who\""));
    }

    #[test]
    fn mixed_numbering_rejected() {
        let args = FormatArgs::new().arg(&1).arg(&2);
        assert!(format_template("{}{1}", &args).is_err());
        assert!(format_template("{0}{}", &args).is_err());
    }

    #[test]
    fn unmatched_braces_rejected() {
        assert!(format_template("{", &FormatArgs::new()).is_err());
        assert!(format_template("}", &FormatArgs::new()).is_err());
        assert!(format_template("{a{b}", &FormatArgs::new()).is_err());
    }

    #[test]
    fn format_spec_rejected() {
        let err = format_template("{:>4}", &FormatArgs::new().arg(&1)).unwrap_err();
        assert!(matches!(err, VtermError::Format(_)));
    }
}
