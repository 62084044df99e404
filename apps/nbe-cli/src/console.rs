//! Non-interactive stand-ins for the native picker and the GUI host.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use nbe_app::{GuiHost, PathPicker};

/// Answers each picker prompt with the next queued path.
pub struct ScriptedPicker {
    answers: VecDeque<PathBuf>,
}

impl ScriptedPicker {
    pub fn new<I, P>(answers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    fn next(&mut self, title: &str) -> Option<PathBuf> {
        let answer = self.answers.pop_front();
        tracing::debug!(?answer, "{}", title);
        answer
    }
}

impl PathPicker for ScriptedPicker {
    fn open_file(&mut self, title: &str, _start: &Path, _filters: &[String]) -> Option<PathBuf> {
        self.next(title)
    }

    fn save_file(&mut self, title: &str, _start: &Path, _filters: &[String]) -> Option<PathBuf> {
        self.next(title)
    }

    fn select_folder(&mut self, title: &str, _start: &Path) -> Option<PathBuf> {
        self.next(title)
    }
}

/// Message boxes go to stderr, text windows to stdout.
#[derive(Default)]
pub struct ConsoleHost;

impl GuiHost for ConsoleHost {
    fn message_box(&mut self, title: &str, body: &str) {
        eprintln!("{}: {}", title, body.replace("\n\t", " "));
    }

    fn show_text(&mut self, _title: &str, text: &str) {
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_cancels() {
        let mut picker = ScriptedPicker::new(["a.nbe", "b.lua"]);
        let start = Path::new("");
        assert_eq!(picker.open_file("Open", start, &[]), Some(PathBuf::from("a.nbe")));
        assert_eq!(picker.save_file("Save", start, &[]), Some(PathBuf::from("b.lua")));
        assert_eq!(picker.select_folder("Folder", start), None);
    }
}
