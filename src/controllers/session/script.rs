use thiserror::Error;

use crate::controllers::interactive::events::input::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: expected `click <x> <y>`, got `{text}`")]
    MalformedClick { line: usize, text: String },
}

/// Parses one script line into an input event.
///
/// Blank lines and `#` comments yield `Ok(None)`. `line` is 1-based and only used for errors.
pub fn parse_line(
    text: &str,
    line: usize,
    is_undo_key: impl Fn(char) -> bool,
) -> Result<Option<InputEvent>, ScriptError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut words = trimmed.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    match command.to_ascii_lowercase().as_str() {
        "click" => {
            let malformed = || ScriptError::MalformedClick {
                line,
                text: trimmed.to_string(),
            };
            let x = words.next().and_then(|w| w.parse::<i32>().ok()).ok_or_else(malformed)?;
            let y = words.next().and_then(|w| w.parse::<i32>().ok()).ok_or_else(malformed)?;
            if words.next().is_some() {
                return Err(malformed());
            }
            Ok(Some(InputEvent::pointer_down(x, y)))
        }
        "undo" => Ok(Some(InputEvent::UndoRequested)),
        "quit" => Ok(Some(InputEvent::Quit)),
        _ => {
            let mut chars = command.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) if is_undo_key(key) => Ok(Some(InputEvent::UndoRequested)),
                _ => Err(ScriptError::UnknownCommand {
                    line,
                    command: command.to_string(),
                }),
            }
        }
    }
}
