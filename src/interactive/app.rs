//! TUI application state and logic

use crate::checker::Verdict;
use crate::core::ClassifiedDictionary;
use crate::dictionary::MAX_WORD_LEN;
use crate::round::{Round, RoundConfig};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: RoundConfig,
    rng: StdRng,
    pub round: Round,
    pub dictionary: ClassifiedDictionary,
    pub submitted: Vec<String>,
    pub input_buffer: String,
    pub verdict: Option<Verdict>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Results,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals for the current session; nothing is saved on exit
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    pub words_found: usize,
    pub words_missed: usize,
}

impl App {
    /// Create the app and deal the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded.
    pub fn new(config: RoundConfig) -> Result<Self> {
        let mut rng = config.rng();
        let round = Round::random_with_size(&mut rng, config.grid_size);
        let dictionary = round
            .load_dictionary(&config.dictionary)
            .context("cannot start the first round")?;

        let mut app = Self {
            config,
            rng,
            round,
            dictionary,
            submitted: Vec::new(),
            input_buffer: String::new(),
            verdict: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        };
        app.add_message(
            "Type words starting with the grid letters. Space adds a word.",
            MessageStyle::Info,
        );
        app.add_message(
            "Press Enter on an empty line to finish the round.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Deal a new round and reload the dictionary for its letters
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded.
    pub fn new_round(&mut self) -> Result<()> {
        let round = Round::random_with_size(&mut self.rng, self.config.grid_size);
        debug!("new round {round}");

        self.dictionary = round
            .load_dictionary(&self.config.dictionary)
            .context("cannot start a new round")?;
        self.round = round;
        self.submitted.clear();
        self.input_buffer.clear();
        self.verdict = None;
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New round! Good luck.", MessageStyle::Info);
        Ok(())
    }

    /// Move the typed word into the submitted list
    pub fn submit_word(&mut self) {
        let word = self.input_buffer.trim().to_lowercase();
        self.input_buffer.clear();

        if word.is_empty() {
            return;
        }

        if !self.round.letters.starts(&word) {
            self.add_message(
                &format!("'{word}' does not start with a grid letter"),
                MessageStyle::Error,
            );
            return;
        }

        if self.submitted.contains(&word) {
            self.add_message(&format!("'{word}' is already entered"), MessageStyle::Error);
            return;
        }

        self.submitted.push(word);
    }

    /// Score the submitted words and switch to the results view
    pub fn finish_round(&mut self) {
        let verdict = self.round.check(&self.submitted, &self.dictionary);

        self.stats.rounds += 1;
        self.stats.words_found += verdict.score();
        self.stats.words_missed += verdict.missed.len();

        let summary = format!(
            "Found {} of {} {}s",
            verdict.score(),
            verdict.score() + verdict.missed.len(),
            self.round.part
        );
        let style = if verdict.score() > 0 {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&summary, style);
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);

        self.verdict = Some(verdict);
        self.input_mode = InputMode::Results;
    }

    /// Take back the most recently submitted word
    pub fn undo_last(&mut self) {
        if let Some(word) = self.submitted.pop() {
            self.add_message(&format!("Removed '{word}'"), MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_WORD_LEN {
            self.input_buffer.extend(c.to_lowercase());
        } else {
            self.add_message(
                &format!("Words have at most {MAX_WORD_LEN} letters"),
                MessageStyle::Error,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a new round cannot load the
/// dictionary.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Results => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round()?;
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(' ') => app.submit_word(),
                    KeyCode::Enter => {
                        if app.input_buffer.trim().is_empty() {
                            app.finish_round();
                        } else {
                            app.submit_word();
                        }
                    }
                    KeyCode::Backspace => {
                        if app.input_buffer.pop().is_none() {
                            app.undo_last();
                        }
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PartOfSpeech;
    use std::io::Write;

    fn app_with(
        lines: &[&str],
        letters: &str,
        part: PartOfSpeech,
    ) -> (App, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }

        let config = RoundConfig {
            seed: Some(11),
            ..RoundConfig::new(file.path())
        };
        let mut app = App::new(config).unwrap();

        // Pin the round so the test does not depend on the draw
        app.round = Round::new(letters.parse().unwrap(), part);
        app.dictionary = app.round.load_dictionary(file.path()).unwrap();
        (app, file)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_word();
    }

    #[test]
    fn full_round_flow() {
        let (mut app, _file) =
            app_with(&["брати /v", "мити /v", "мак /n"], "бм", PartOfSpeech::Verb);

        type_word(&mut app, "МИТИ");
        type_word(&mut app, "мак");
        assert_eq!(app.submitted, ["мити", "мак"]);

        app.finish_round();
        let verdict = app.verdict.as_ref().unwrap();
        assert_eq!(verdict.correct, ["мити"]);
        assert_eq!(verdict.missed, ["брати"]);
        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.stats.rounds, 1);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.words_missed, 1);
    }

    #[test]
    fn duplicate_and_foreign_words_rejected() {
        let (mut app, _file) = app_with(&["брати /v"], "б", PartOfSpeech::Verb);

        type_word(&mut app, "брати");
        type_word(&mut app, "брати");
        type_word(&mut app, "мити");
        assert_eq!(app.submitted, ["брати"]);
    }

    #[test]
    fn input_capped_at_word_length() {
        let (mut app, _file) = app_with(&["брати /v"], "б", PartOfSpeech::Verb);

        for c in "бігати".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "бігат");
    }

    #[test]
    fn undo_removes_last_word() {
        let (mut app, _file) = app_with(&["біг /n"], "б", PartOfSpeech::Noun);

        type_word(&mut app, "біг");
        app.undo_last();
        assert!(app.submitted.is_empty());
    }

    #[test]
    fn new_round_resets_state() {
        let (mut app, _file) = app_with(&["біг /n"], "б", PartOfSpeech::Noun);

        type_word(&mut app, "біг");
        app.finish_round();
        app.new_round().unwrap();

        assert!(app.submitted.is_empty());
        assert!(app.verdict.is_none());
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.stats.rounds, 1);
    }

    #[test]
    fn messages_capped_at_five() {
        let (mut app, _file) = app_with(&["біг /n"], "б", PartOfSpeech::Noun);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
