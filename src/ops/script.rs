//! Line-oriented intent scripts for headless replay.
//!
//! ```text
//! # comment
//! draft Buy milk
//! add
//! add Walk dog
//! toggle 1
//! delete 2
//! clear
//! filter active
//! ```

use crate::model::{Filter, Intent, TaskId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command: {command}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} requires {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: invalid task id: {value}")]
    InvalidId { line: usize, value: String },
    #[error("line {line}: invalid filter: {value} (expected all, active, or completed)")]
    InvalidFilter { line: usize, value: String },
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<Intent>, ScriptError> {
    let mut intents = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        intents.extend(parse_line(idx + 1, line)?);
    }
    Ok(intents)
}

/// Parse one script line into zero or more intents.
///
/// The argument of `draft` and `add` is taken verbatim after the first
/// space, so `add    ` submits a whitespace-only draft.
pub fn parse_line(line_no: usize, line: &str) -> Result<Vec<Intent>, ScriptError> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(Vec::new());
    }
    let (command, arg) = match line.split_once(' ') {
        Some((c, rest)) => (c, Some(rest)),
        None => (line.trim_end(), None),
    };

    let intents = match command {
        "draft" => vec![Intent::SetDraft(arg.unwrap_or_default().to_string())],
        "add" => match arg {
            Some(text) => vec![Intent::SetDraft(text.to_string()), Intent::Submit],
            None => vec![Intent::Submit],
        },
        "toggle" => vec![Intent::Toggle(parse_id(line_no, "toggle", arg)?)],
        "delete" => vec![Intent::Delete(parse_id(line_no, "delete", arg)?)],
        "clear" => vec![Intent::ClearCompleted],
        "filter" => {
            let value = required(line_no, "filter", "a filter name", arg)?;
            let filter =
                Filter::parse_filter(value).ok_or_else(|| ScriptError::InvalidFilter {
                    line: line_no,
                    value: value.to_string(),
                })?;
            vec![Intent::SelectFilter(filter)]
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            });
        }
    };
    Ok(intents)
}

fn required<'a>(
    line: usize,
    command: &'static str,
    expected: &'static str,
    arg: Option<&'a str>,
) -> Result<&'a str, ScriptError> {
    match arg.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ScriptError::MissingArgument {
            line,
            command,
            expected,
        }),
    }
}

fn parse_id(line: usize, command: &'static str, arg: Option<&str>) -> Result<TaskId, ScriptError> {
    let value = required(line, command, "a task id", arg)?;
    value.parse().map_err(|_| ScriptError::InvalidId {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_command() {
        let script = "\
# setup
draft Buy milk
add
add Walk dog

toggle 1
delete 2
clear
filter Completed
";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![
                Intent::SetDraft("Buy milk".into()),
                Intent::Submit,
                Intent::SetDraft("Walk dog".into()),
                Intent::Submit,
                Intent::Toggle(TaskId(1)),
                Intent::Delete(TaskId(2)),
                Intent::ClearCompleted,
                Intent::SelectFilter(Filter::Completed),
            ]
        );
    }

    #[test]
    fn add_keeps_whitespace_argument() {
        assert_eq!(
            parse_line(1, "add    ").unwrap(),
            vec![Intent::SetDraft("   ".into()), Intent::Submit]
        );
        assert_eq!(
            parse_line(1, "draft  padded ").unwrap(),
            vec![Intent::SetDraft(" padded ".into())]
        );
    }

    #[test]
    fn bare_draft_clears() {
        assert_eq!(
            parse_line(1, "draft").unwrap(),
            vec![Intent::SetDraft(String::new())]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_script("add x\nfrobnicate\n").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 2,
                command: "frobnicate".into()
            }
        );
        assert_eq!(
            parse_line(3, "toggle").unwrap_err(),
            ScriptError::MissingArgument {
                line: 3,
                command: "toggle",
                expected: "a task id"
            }
        );
        assert_eq!(
            parse_line(4, "delete abc").unwrap_err(),
            ScriptError::InvalidId {
                line: 4,
                value: "abc".into()
            }
        );
        assert_eq!(
            parse_line(5, "filter someday").unwrap_err(),
            ScriptError::InvalidFilter {
                line: 5,
                value: "someday".into()
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = parse_line(7, "filter").unwrap_err();
        assert_eq!(err.to_string(), "line 7: filter requires a filter name");
    }
}
