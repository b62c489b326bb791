use indicatif::{ProgressBar, ProgressStyle};
use nu_ansi_term::{Color, Style};
use std::fmt::Display;
use std::io::IsTerminal;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Auto,
    Light,
    Dark,
    Plain,
}

/// Colors for one theme. `None` on [`Ui`] means no escapes at all.
struct Styles {
    title: Style,
    label: Style,
    word: Style,
    arrow: Style,
    ok: Style,
    warn: Style,
}

impl Styles {
    fn for_theme(theme: Theme) -> Option<Self> {
        let (accent, text, ok, warn) = match theme {
            Theme::Plain => return None,
            Theme::Light => (Color::Blue, Color::Black, Color::Green, Color::Red),
            Theme::Dark | Theme::Auto => (
                Color::LightCyan,
                Color::White,
                Color::LightGreen,
                Color::Yellow,
            ),
        };
        Some(Self {
            title: accent.bold(),
            label: accent.normal(),
            word: text.bold(),
            arrow: accent.dimmed(),
            ok: ok.bold(),
            warn: warn.bold(),
        })
    }
}

/// Text-mode output of the `ladder` commands.
pub struct Ui {
    styles: Option<Styles>,
    quiet: bool,
}

impl Ui {
    pub fn new(theme: Theme, quiet: bool) -> Self {
        let styles = if quiet || !std::io::stdout().is_terminal() {
            None
        } else {
            Styles::for_theme(theme)
        };
        #[cfg(windows)]
        if styles.is_some() {
            let _ = nu_ansi_term::enable_ansi_support();
        }
        Self { styles, quiet }
    }

    fn paint(&self, pick: fn(&Styles) -> Style, text: impl Display) -> String {
        match &self.styles {
            Some(styles) => pick(styles).paint(text.to_string()).to_string(),
            None => text.to_string(),
        }
    }

    /// A titled block of right-aligned `label: value` rows.
    pub fn section<'a, I, V>(&self, title: &str, rows: I)
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        if self.quiet {
            return;
        }
        let rows: Vec<(&str, String)> = rows
            .into_iter()
            .map(|(label, value)| (label, value.to_string()))
            .collect();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        println!("{}", self.paint(|s| s.title, title));
        for (label, value) in rows {
            let label = self.paint(|s| s.label, format!("{label:>width$}"));
            println!("  {label}  {value}");
        }
    }

    /// Prints a ladder as `first -> second -> ... -> last`, or the bare
    /// words separated by spaces when quiet.
    pub fn ladder(&self, words: &[String]) {
        if self.quiet {
            println!("{}", words.join(" "));
            return;
        }
        let arrow = self.paint(|s| s.arrow, " -> ");
        let rungs: Vec<String> = words.iter().map(|w| self.paint(|s| s.word, w)).collect();
        println!("  {}", rungs.join(arrow.as_str()));
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", self.paint(|s| s.ok, "ok:"));
        }
    }

    /// Warnings go to stderr, even when quiet.
    pub fn warn(&self, message: &str) {
        eprintln!("{} {message}", self.paint(|s| s.warn, "warning:"));
    }

    /// Starts a timed step. A spinner is shown only on a styled terminal.
    pub fn task(&self, label: impl Into<String>) -> Task<'_> {
        let label = label.into();
        let spinner = self.styles.as_ref().and_then(|_| {
            let style = ProgressStyle::with_template("{spinner} {msg}").ok()?;
            let spinner = ProgressBar::new_spinner().with_style(style);
            spinner.set_message(label.clone());
            spinner.enable_steady_tick(Duration::from_millis(100));
            Some(spinner)
        });
        Task {
            ui: self,
            label,
            started: Instant::now(),
            spinner,
            done: false,
        }
    }
}

/// Guard for a step started with [`Ui::task`]. Dropping it unfinished
/// reports the step as failed.
pub struct Task<'a> {
    ui: &'a Ui,
    label: String,
    started: Instant,
    spinner: Option<ProgressBar>,
    done: bool,
}

impl Task<'_> {
    pub fn finish(mut self) -> Duration {
        self.done = true;
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.started.elapsed()
    }
}

impl Drop for Task<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        if !self.ui.quiet {
            let elapsed = format_duration(self.started.elapsed());
            self.ui.warn(&format!("{} failed after {elapsed}", self.label));
        }
    }
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        format!("{:.0}ms", secs * 1_000.0)
    }
}
