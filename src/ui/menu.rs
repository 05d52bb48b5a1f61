use std::io::{self, BufRead, Write};

use crate::error::MenuError;

use super::console::Console;

pub const DEFAULT_PROMPT: &str = "Enter an option:";

/// Which part of a label is the shortcut key, shown in brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `[Play]`
    Whole,
    /// First `n` characters: `[Pl]ay`
    Prefix(usize),
    /// Characters `start..end`: `P[la]y`
    Span(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub bracket: Bracket,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, bracket: Bracket) -> Self {
        MenuOption {
            label: label.into(),
            bracket,
        }
    }

    /// Bracketed character range of the label, clamped to the label so an
    /// option that never went through `Menu::new` still formats.
    fn range(&self) -> (usize, usize) {
        let len = self.label.chars().count();
        let (start, end) = match self.bracket {
            Bracket::Whole => (0, len),
            Bracket::Prefix(end) => (0, end),
            Bracket::Span(start, end) => (start, end),
        };
        let end = end.min(len);
        (start.min(end), end)
    }

    /// Text the player types to choose this option
    pub fn key(&self) -> String {
        let (start, end) = self.range();
        self.label.chars().skip(start).take(end - start).collect()
    }

    /// Label with its key in brackets
    pub fn formatted(&self) -> String {
        let (start, end) = self.range();
        let chars: Vec<char> = self.label.chars().collect();
        let before: String = chars[..start].iter().collect();
        let key: String = chars[start..end].iter().collect();
        let after: String = chars[end..].iter().collect();
        format!("{before}[{key}]{after}")
    }
}

/// A validated list of options chosen by typing their bracketed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    options: Vec<MenuOption>,
}

impl Menu {
    pub fn new(options: Vec<MenuOption>) -> Result<Self, MenuError> {
        if options.is_empty() {
            return Err(MenuError::NoOptions);
        }

        for option in &options {
            let len = option.label.chars().count();
            let (start, end) = match option.bracket {
                Bracket::Whole => continue,
                Bracket::Prefix(end) => (0, end),
                Bracket::Span(start, end) => (start, end),
            };
            if start > len || end > len {
                return Err(MenuError::BracketOutOfRange {
                    label: option.label.clone(),
                    start,
                    end,
                });
            }
            if end < start {
                return Err(MenuError::ReversedBracket {
                    label: option.label.clone(),
                });
            }
        }

        Ok(Menu { options })
    }

    /// `[P]lay` / `[Q]uit`
    pub fn play_or_quit() -> Self {
        Menu {
            options: vec![
                MenuOption::new("Play", Bracket::Prefix(1)),
                MenuOption::new("Quit", Bracket::Prefix(1)),
            ],
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Print the options laid out in `columns` columns
    pub fn display<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        columns: usize,
    ) -> io::Result<()> {
        let columns = columns.max(1);
        let width = self.max_label_len() + 4;

        for (i, option) in self.options.iter().enumerate() {
            let formatted = option.formatted();
            if (i + 1) % columns == 0 {
                console.say(&formatted)?;
            } else {
                let pad = width.saturating_sub(formatted.chars().count());
                console.print(&format!("{formatted}{}", " ".repeat(pad)))?;
            }
        }

        if self.options.len() % columns != 0 {
            console.put_blank_line()?;
        }
        Ok(())
    }

    /// Read keys until one matches (case-insensitive), returning its index
    pub fn take_input<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> io::Result<usize> {
        loop {
            console.print(&format!("{prompt} "))?;
            let answer = console.read_line()?.trim().to_lowercase();
            if let Some(index) = self
                .options
                .iter()
                .position(|option| option.key().to_lowercase() == answer)
            {
                return Ok(index);
            }
            console.say("Invalid option, please try again.")?;
        }
    }

    fn max_label_len(&self) -> usize {
        self.options
            .iter()
            .map(|option| option.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}
