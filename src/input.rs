// Input layer: the single gate through which user-typed values enter the
// program. Every prompt loops until the value passes its transform and
// predicate, or until the user skips a skippable field.
//
// Prompts go through the `Prompter` trait so the same loops run against the
// real terminal (`Terminal`, backed by `dialoguer`) and against a canned
// script in tests (`Scripted`).

use std::collections::VecDeque;
use std::io;

use crossterm::style::Stylize;
use dialoguer::Input;
use tracing::debug;

use crate::error::TransformError;

/// Appended to the prompt of every skippable request.
pub const SKIP_HINT: &str = "[press Enter to skip]";

/// Line-oriented terminal boundary.
pub trait Prompter {
    /// Show `prompt` and block until one line is available.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Plain output: menus, tables, results.
    fn say(&mut self, message: &str);

    /// Feedback about rejected input.
    fn warn(&mut self, message: &str);
}

/// Interactive terminal prompter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Prompter for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        // `allow_empty` so that pressing Enter can mean "skip".
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.yellow());
    }
}

/// Prompter fed from a fixed list of lines. Everything shown to the user is
/// recorded in `transcript`. Running out of lines is an `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    lines: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Number of scripted lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Whole transcript as one string, for `contains` assertions.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }
}

impl Prompter for Scripted {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.transcript.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

/// Result of a request: a validated value, or an explicit skip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer<T> {
    Value(T),
    Skipped,
}

impl<T> Answer<T> {
    /// The entered value, or `default` when skipped.
    pub fn or(self, default: T) -> T {
        match self {
            Answer::Value(value) => value,
            Answer::Skipped => default,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Answer::Value(value) => Some(value),
            Answer::Skipped => None,
        }
    }
}

/// What to ask for and how to explain a rejection.
#[derive(Debug, Clone)]
pub struct Request {
    pub prompt: String,
    /// Used in "'<raw>' is not a valid <label>".
    pub label: String,
    pub guidance: String,
    pub allow_skip: bool,
}

impl Request {
    pub fn new(
        prompt: impl Into<String>,
        label: impl Into<String>,
        guidance: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            label: label.into(),
            guidance: guidance.into(),
            allow_skip: false,
        }
    }

    pub fn skippable(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }
}

/// Ask until `transform` succeeds and `predicate` holds, or until the user
/// skips (empty line on a skippable request).
pub fn request<T, F, P>(
    io: &mut dyn Prompter,
    req: &Request,
    transform: F,
    predicate: P,
) -> io::Result<Answer<T>>
where
    F: Fn(&str) -> Result<T, TransformError>,
    P: Fn(&T) -> bool,
{
    let prompt = if req.allow_skip {
        format!("{} {}", req.prompt, SKIP_HINT)
    } else {
        req.prompt.clone()
    };

    loop {
        let raw = io.read_line(&prompt)?;

        if req.allow_skip && raw.is_empty() {
            return Ok(Answer::Skipped);
        }

        match transform(&raw) {
            Ok(value) if predicate(&value) => return Ok(Answer::Value(value)),
            Ok(_) => debug!(label = %req.label, %raw, "input rejected by predicate"),
            Err(err) => debug!(label = %req.label, %raw, %err, "input could not be converted"),
        }

        io.warn(&format!("'{raw}' is not a valid {}", req.label));
        io.warn(&req.guidance);
    }
}

/// Like `request`, but never skippable.
pub fn require<T, F, P>(
    io: &mut dyn Prompter,
    req: &Request,
    transform: F,
    predicate: P,
) -> io::Result<T>
where
    F: Fn(&str) -> Result<T, TransformError>,
    P: Fn(&T) -> bool,
{
    let req = Request {
        allow_skip: false,
        ..req.clone()
    };
    loop {
        if let Answer::Value(value) = request(io, &req, &transform, &predicate)? {
            return Ok(value);
        }
    }
}

/// Ask for one record field. With a `current` value the field becomes
/// skippable and skipping keeps `current`.
pub fn field<T, F, P>(
    io: &mut dyn Prompter,
    req: Request,
    current: Option<T>,
    transform: F,
    predicate: P,
) -> io::Result<T>
where
    F: Fn(&str) -> Result<T, TransformError>,
    P: Fn(&T) -> bool,
{
    match current {
        Some(old) => Ok(request(io, &req.skippable(true), transform, predicate)?.or(old)),
        None => require(io, &req, transform, predicate),
    }
}

/// Identity transform for free-text fields.
pub fn text(raw: &str) -> Result<String, TransformError> {
    Ok(raw.to_string())
}

/// Parse a decimal number.
pub fn number(raw: &str) -> Result<f64, TransformError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TransformError::NotANumber(raw.to_string()))
}

/// Parse a 1-based position.
pub fn position(raw: &str) -> Result<usize, TransformError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| TransformError::NotANumber(raw.to_string()))
}

/// Ask for a 1-based index into a list of `count` entries.
pub fn select_index(io: &mut dyn Prompter, what: &str, count: usize) -> io::Result<usize> {
    let req = Request::new(
        format!("Please input the index of the {what}"),
        "index",
        "Please input a number that is present in the column 'no.'",
    );
    require(io, &req, position, |i| (1..=count).contains(i))
}

/// Show a numbered menu line and ask for one of its `count` options.
pub fn menu(io: &mut dyn Prompter, menu: &str, count: usize) -> io::Result<usize> {
    io.say(menu);
    let options: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
    let guidance = match options.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("Please input either {} or {last} as the command", rest.join(", "))
        }
        _ => "Please input 1 as the command".to_string(),
    };
    let req = Request::new("command", "command", guidance);
    require(io, &req, position, |choice| (1..=count).contains(choice))
}

/// Ask a Y/N question. Returns true iff the (case-insensitive) answer equals
/// `affirmative`.
pub fn confirm_with(io: &mut dyn Prompter, message: &str, affirmative: &str) -> io::Result<bool> {
    let req = Request::new(
        format!("{message} (Y/N)"),
        "answer",
        "Please answer with either Y or N",
    );
    let answer = require(
        io,
        &req,
        |raw| Ok(raw.trim().to_ascii_uppercase()),
        |s: &String| s == "Y" || s == "N",
    )?;
    Ok(answer.eq_ignore_ascii_case(affirmative))
}

/// `confirm_with` where "Y" is the affirmative answer.
pub fn confirm(io: &mut dyn Prompter, message: &str) -> io::Result<bool> {
    confirm_with(io, message, "Y")
}
