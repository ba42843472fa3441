//! Shortcut binding and raw key translation for the palette.
//!
//! [`LifecycleController`] owns the one global listener for the palette
//! shortcut. The host installs it once at load and tears it down on unload;
//! every key press goes through [`LifecycleController::translate`], which
//! decides what, if anything, the key means for the palette.

use super::handler::Event;
use super::palette::FocusToken;
use crate::domain::{DocportalError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Delay between opening the palette and focusing its input.
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Modifier half of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Alt,
}

/// A modifier plus a single letter, e.g. `Ctrl+k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub modifier: Modifier,
    pub letter: char,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            modifier: Modifier::Ctrl,
            letter: 'k',
        }
    }
}

impl Shortcut {
    /// Parses `ctrl+k`, `Alt+P` and similar. Case-insensitive; the letter is
    /// stored lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`DocportalError::Config`] if the modifier is unknown or the
    /// key is not a single ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use docportal::app::lifecycle::{Modifier, Shortcut};
    ///
    /// let shortcut = Shortcut::parse("Alt+P")?;
    /// assert_eq!(shortcut.modifier, Modifier::Alt);
    /// assert_eq!(shortcut.letter, 'p');
    /// assert!(Shortcut::parse("ctrl+enter").is_err());
    /// # Ok::<(), docportal::DocportalError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || DocportalError::Config(format!("invalid shortcut '{input}'"));

        let (modifier, key) = input.trim().split_once('+').ok_or_else(invalid)?;

        let modifier = match modifier.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Modifier::Ctrl,
            "alt" => Modifier::Alt,
            _ => return Err(invalid()),
        };

        let mut chars = key.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(invalid()),
        };

        Ok(Self { modifier, letter })
    }

    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        let modifier_held = match self.modifier {
            Modifier::Ctrl => press.ctrl && !press.alt,
            Modifier::Alt => press.alt && !press.ctrl,
        };
        modifier_held && matches!(press.key, Key::Char(c) if c.to_ascii_lowercase() == self.letter)
    }
}

impl FromStr for Shortcut {
    type Err = DocportalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = match self.modifier {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
        };
        write!(f, "{modifier}+{}", self.letter)
    }
}

/// Host-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Other,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            alt: false,
        }
    }

    #[must_use]
    pub const fn alt(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: true,
        }
    }

    const fn has_modifiers(&self) -> bool {
        self.ctrl || self.alt
    }
}

/// Owner of the palette shortcut and of focus-session tokens.
#[derive(Debug, Clone)]
pub struct LifecycleController {
    shortcut: Shortcut,
    focus_delay: Duration,
    installed: bool,
    next_token: u64,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new(Shortcut::default(), DEFAULT_FOCUS_DELAY)
    }
}

impl LifecycleController {
    #[must_use]
    pub const fn new(shortcut: Shortcut, focus_delay: Duration) -> Self {
        Self {
            shortcut,
            focus_delay,
            installed: false,
            next_token: 0,
        }
    }

    #[must_use]
    pub const fn shortcut(&self) -> Shortcut {
        self.shortcut
    }

    #[must_use]
    pub const fn focus_delay(&self) -> Duration {
        self.focus_delay
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.installed
    }

    /// Installs the shortcut listener. Returns `false` if it already was.
    pub fn install(&mut self) -> bool {
        if self.installed {
            tracing::debug!(shortcut = %self.shortcut, "shortcut listener already installed");
            return false;
        }
        self.installed = true;
        tracing::debug!(shortcut = %self.shortcut, "shortcut listener installed");
        true
    }

    pub fn teardown(&mut self) {
        if self.installed {
            tracing::debug!(shortcut = %self.shortcut, "shortcut listener removed");
        }
        self.installed = false;
    }

    /// Issues the token for a new open session.
    pub fn next_focus_token(&mut self) -> FocusToken {
        self.next_token = self.next_token.wrapping_add(1);
        FocusToken(self.next_token)
    }

    /// Maps a raw key press to a palette event.
    ///
    /// While closed only the shortcut maps to anything. While open the
    /// shortcut still toggles; arrows, Enter and Escape drive navigation;
    /// unmodified characters and Backspace edit the query. Nothing is
    /// translated before [`install`](Self::install) or after
    /// [`teardown`](Self::teardown).
    #[must_use]
    pub fn translate(&self, press: &KeyPress, palette_open: bool) -> Option<Event> {
        if !self.installed {
            return None;
        }
        if self.shortcut.matches(press) {
            return Some(Event::Toggle);
        }
        if !palette_open {
            return None;
        }

        match press.key {
            Key::Up => Some(Event::MoveUp),
            Key::Down => Some(Event::MoveDown),
            Key::Enter => Some(Event::Activate),
            Key::Esc => Some(Event::Cancel),
            Key::Backspace if !press.has_modifiers() => Some(Event::Backspace),
            Key::Char(c) if !press.has_modifiers() => Some(Event::Char(c)),
            _ => None,
        }
    }
}
