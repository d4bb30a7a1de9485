//! Typing/deleting cycle over a fixed list of phrases.
//!
//! The machine only computes the next visible text and how long the host
//! should wait before calling [`Typewriter::step`] again; scheduling belongs
//! to whatever timer the host has.

use crate::constants::*;
use crate::error::FolioError;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterTimings {
    pub typing: Duration,
    pub deleting: Duration,
    /// Hold time once a phrase is fully typed.
    pub pause: Duration,
    /// Gap between an emptied phrase and the first char of the next one.
    pub next_phrase: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(TYPING_INTERVAL_MS),
            deleting: Duration::from_millis(DELETING_INTERVAL_MS),
            pause: Duration::from_millis(FULL_PHRASE_PAUSE_MS),
            next_phrase: Duration::from_millis(NEXT_PHRASE_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    phrase_index: usize,
    char_index: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, timings: TypewriterTimings) -> Result<Self, FolioError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(FolioError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timings,
            phrase_index: 0,
            char_index: 0,
            mode: Mode::Typing,
        })
    }

    /// Split a `|`-separated attribute value into phrases, dropping blanks.
    pub fn parse_phrases(attr: &str) -> Vec<String> {
        attr.split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Text currently shown: the first `char_index` chars of the phrase.
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        match phrase.char_indices().nth(self.char_index) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    pub fn step(&mut self) -> Step {
        let len = self.phrases[self.phrase_index].chars().count();
        let delay = match self.mode {
            Mode::Typing if len == 0 => self.advance_phrase(),
            Mode::Typing => {
                self.char_index += 1;
                if self.char_index >= len {
                    self.char_index = len;
                    self.mode = Mode::Deleting;
                    self.timings.pause
                } else {
                    self.timings.typing
                }
            }
            Mode::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.advance_phrase()
                } else {
                    self.timings.deleting
                }
            }
        };
        Step {
            text: self.text().to_owned(),
            delay,
        }
    }

    fn advance_phrase(&mut self) -> Duration {
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        self.char_index = 0;
        self.mode = Mode::Typing;
        self.timings.next_phrase
    }
}
