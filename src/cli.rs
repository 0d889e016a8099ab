//! Command-line argument parsing for the tagbox binary
//!
//! Supports:
//! - Text from arguments or stdin
//! - Limit / base URL overrides on top of the config file
//! - JSON or human-readable output
//! - Running the submission gate

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::TextBoxConfig;
use crate::controller::{Controller, Host};
use crate::messages::InputEvent;
use crate::model::Snapshot;
use crate::render::Segment;

/// How the resulting snapshot is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Snapshot as pretty-printed JSON
    #[default]
    Json,
    /// Counter, overflow and entities as plain lines
    Summary,
}

/// Run text through a character-limited compose box
#[derive(Parser, Debug)]
#[command(
    name = "tagbox",
    version,
    about = "Highlight entities and mark overflow in compose-box text"
)]
pub struct CliArgs {
    /// Text to process (joined with spaces); read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Character limit
    #[arg(short, long, value_name = "N", conflicts_with = "extended")]
    pub limit: Option<usize>,

    /// Use the extended (10000 chars) limit
    #[arg(short, long)]
    pub extended: bool,

    /// Prefix for entity links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file (defaults to ~/.config/tagbox/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Trigger submission after the text is entered
    #[arg(short, long)]
    pub submit: bool,

    /// Also write debug logs to the log directory
    #[arg(long)]
    pub log: bool,
}

impl CliArgs {
    /// Text given on the command line, if any
    pub fn text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }

    /// Load the config file, then apply command-line overrides
    pub fn text_box_config(&self) -> Result<TextBoxConfig> {
        let base = match &self.config {
            Some(path) => TextBoxConfig::load_from(path)?,
            None => TextBoxConfig::load(),
        };
        self.apply_overrides(base)
    }

    fn apply_overrides(&self, mut config: TextBoxConfig) -> Result<TextBoxConfig> {
        if self.extended {
            config.char_limit = crate::config::EXTENDED_CHAR_LIMIT;
        }
        if let Some(limit) = self.limit {
            config.char_limit = limit;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Why a `--submit` run did not submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    /// Whitespace only, with `ignore_blank_submit` set
    Blank,
    /// Chars past the limit
    OverLimit(i64),
}

impl Rejection {
    fn for_snapshot(snapshot: &Snapshot) -> Self {
        if snapshot.is_empty() {
            Rejection::Empty
        } else if snapshot.is_over_limit() {
            Rejection::OverLimit(-snapshot.chars_left)
        } else {
            Rejection::Blank
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => f.write_str("text is empty"),
            Rejection::Blank => f.write_str("text is blank"),
            Rejection::OverLimit(n) => write!(f, "{} chars over the limit", n),
        }
    }
}

/// Host for a one-shot run. It adopts every requested value, so both value
/// modes end up with the same snapshot.
#[derive(Debug, Default)]
struct RunHost {
    pending: Vec<String>,
    submitted: Option<Snapshot>,
}

impl Host for RunHost {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        tracing::debug!(chars_left = snapshot.chars_left, "snapshot");
    }

    fn on_change_requested(&mut self, value: &str) {
        self.pending.push(value.to_string());
    }

    fn on_submit(&mut self, snapshot: &Snapshot) {
        tracing::info!(chars_left = snapshot.chars_left, "submitted");
        self.submitted = Some(snapshot.clone());
    }
}

/// Feed requested values back in, in order
fn settle(controller: &mut Controller<RunHost>) {
    let pending: Vec<String> = controller.host_mut().pending.drain(..).collect();
    for value in pending {
        controller.set_value(value);
    }
}

/// Result of [`process`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The submitted snapshot, or the snapshot of the entered text
    pub snapshot: Snapshot,
    pub rejection: Option<Rejection>,
}

/// Enter `text` as one paste and optionally trigger submission
pub fn process(config: TextBoxConfig, text: String, submit: bool) -> RunOutcome {
    let mut controller = Controller::new(config, RunHost::default());
    controller.on_input(InputEvent::Paste(text));
    settle(&mut controller);

    let entered = controller.snapshot().clone();
    let mut rejection = None;
    if submit {
        if controller.on_submit_trigger() {
            settle(&mut controller);
        } else {
            rejection = Some(Rejection::for_snapshot(&entered));
        }
    }

    let snapshot = controller.into_host().submitted.unwrap_or(entered);
    RunOutcome {
        snapshot,
        rejection,
    }
}

/// Human-readable lines for `--format summary`
pub fn summary_lines(snapshot: &Snapshot, warning_threshold: i64) -> Vec<String> {
    let mut lines = vec![
        format!(
            "chars left: {} ({:?})",
            snapshot.chars_left,
            snapshot.counter_status(warning_threshold)
        ),
        format!("encoded: {}", snapshot.encoded_text),
    ];
    if let Some(overflow) = &snapshot.overflow {
        lines.push(format!("overflow: {}", overflow));
    }

    let tags = &snapshot.tags;
    lines.extend(tags.hash.iter().map(|t| format!("hashtag: {}", t)));
    lines.extend(tags.mention.iter().map(|n| format!("mention: {}", n)));
    lines.extend(tags.cash.iter().map(|s| format!("cashtag: {}", s)));
    lines.extend(snapshot.urls.iter().map(|u| format!("url: {}", u)));

    push_links(&snapshot.segments, &mut lines);
    lines
}

fn push_links(segments: &[Segment], lines: &mut Vec<String>) {
    for segment in segments {
        match segment {
            Segment::Highlighted {
                text,
                entity_kind,
                href,
                ..
            } => lines.push(format!("link: {} {} -> {}", entity_kind, text, href)),
            Segment::Overflow { children } => push_links(children, lines),
            Segment::Plain { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("tagbox").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_text_reads_stdin() {
        assert_eq!(parse(&[]).text(), None);
    }

    #[test]
    fn test_text_args_joined() {
        let args = parse(&["hello", "#world"]);
        assert_eq!(args.text().as_deref(), Some("hello #world"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&["--limit", "10", "--base-url", "https://x.com", "hi"]);
        let config = args.apply_overrides(TextBoxConfig::default()).unwrap();
        assert_eq!(config.char_limit, 10);
        assert_eq!(config.base_url, "https://x.com");
    }

    #[test]
    fn test_extended_flag() {
        let args = parse(&["-e"]);
        let config = args.apply_overrides(TextBoxConfig::default()).unwrap();
        assert_eq!(config.char_limit, 10_000);
    }

    #[test]
    fn test_limit_conflicts_with_extended() {
        assert!(CliArgs::try_parse_from(["tagbox", "-e", "-l", "5"]).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let args = parse(&["--limit", "0"]);
        assert!(args.apply_overrides(TextBoxConfig::default()).is_err());
    }

    // ========================================================================
    // One-shot runs
    // ========================================================================

    #[test]
    fn test_external_mode_from_config_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: external\nchar_limit: 10").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = parse(&["--config", &path, "hello", "#world", "test"]);
        let config = args.text_box_config().unwrap();
        assert_eq!(config.mode, crate::model::ValueMode::External);

        let outcome = process(config, args.text().unwrap(), false);
        assert_eq!(outcome.snapshot.chars_left, -7);
        assert_eq!(outcome.snapshot.encoded_text, "hello #wor<limit>ld test</limit>");
        assert_eq!(outcome.snapshot.tags.hash, vec!["world"]);
    }

    #[test]
    fn test_modes_agree() {
        let text = "hi @bob $ABC".to_string();
        let owned = process(TextBoxConfig::with_limit(8), text.clone(), false);
        let external = process(
            TextBoxConfig::with_limit(8).mode(crate::model::ValueMode::External),
            text,
            false,
        );
        assert_eq!(owned, external);
    }

    #[test]
    fn test_submit_in_external_mode() {
        let config = TextBoxConfig::with_limit(5).mode(crate::model::ValueMode::External);
        let outcome = process(config, "hi".into(), true);
        assert_eq!(outcome.rejection, None);
        assert_eq!(outcome.snapshot.text, "hi");
    }

    #[test]
    fn test_rejection_reasons() {
        let limit = TextBoxConfig::with_limit(3);
        assert_eq!(
            process(limit.clone(), String::new(), true).rejection,
            Some(Rejection::Empty)
        );
        assert_eq!(
            process(limit, "abcde".into(), true).rejection,
            Some(Rejection::OverLimit(2))
        );

        let mut blank = TextBoxConfig::with_limit(480);
        blank.ignore_blank_submit = true;
        let outcome = process(blank, "   ".into(), true);
        assert_eq!(outcome.rejection, Some(Rejection::Blank));
        assert_eq!(outcome.rejection.map(|r| r.to_string()).as_deref(), Some("text is blank"));
    }

    #[test]
    fn test_summary_lists_links_in_overflow() {
        let outcome = process(TextBoxConfig::with_limit(3), "abc @bob".into(), false);
        let lines = summary_lines(&outcome.snapshot, 20);
        assert!(lines.contains(&"overflow:  @bob".to_string()));
        assert!(lines.contains(&"mention: bob".to_string()));
        assert!(lines.contains(&"link: mention @bob -> /bob".to_string()));
    }

    #[test]
    fn test_summary_format() {
        let args = parse(&["--format", "summary", "-s", "x"]);
        assert_eq!(args.format, OutputFormat::Summary);
        assert!(args.submit);
    }
}
