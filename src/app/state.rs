use crate::calc::eval::{EvalError, Evaluation, Op};
use crate::calc::history::History;
use crate::config::{AppConfig, RecomputePolicy};

/// Identifies one of the two operand fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    A,
    B,
}

/// An editable single-line text field with a byte-offset cursor.
#[derive(Debug)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Replace the whole contents, cursor at the end. Returns `false` when
    /// the new text equals the current text; the field is untouched then.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        self.cursor = self.text.len();
        true
    }
}

/// Which of the result row / warning row is visible. The two are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validity {
    Valid,
    Invalid(EvalError),
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    OperandA,
    Operator,
    OperandB,
    History,
}

pub struct AppState {
    pub config: AppConfig,
    pub a: FieldInput,
    pub b: FieldInput,
    pub op: Op,
    /// Last successful computation; stays on screen while input is invalid.
    pub output: Evaluation,
    pub validity: Validity,
    pub history: History,
    /// Lines scrolled up from the end of the history list. 0 = pinned to end.
    pub history_scroll: usize,
    pub focus: FocusPanel,
    pub policy: RecomputePolicy,
    pub show_history: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let policy = config.behavior.recompute;
        let show_history = config.ui.show_history;
        Self {
            config,
            a: FieldInput::new("0"),
            b: FieldInput::new("0"),
            op: Op::Add,
            output: Evaluation {
                a: 0,
                b: 0,
                op: Op::Add,
                value: 0,
            },
            validity: Validity::Valid,
            history: History::new(),
            history_scroll: 0,
            focus: FocusPanel::OperandA,
            policy,
            show_history,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn field(&mut self, slot: Slot) -> &mut FieldInput {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    /// Whether Calculate may run right now. Under eager recompute the button
    /// is disabled while input is invalid; under on-demand it is always
    /// enabled and failures surface through the warning row instead.
    pub fn calculate_enabled(&self) -> bool {
        match self.policy {
            RecomputePolicy::Eager => self.validity.is_valid(),
            RecomputePolicy::OnDemand => true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::OperandA => FocusPanel::Operator,
            FocusPanel::Operator => FocusPanel::OperandB,
            FocusPanel::OperandB if self.show_history => FocusPanel::History,
            FocusPanel::OperandB => FocusPanel::OperandA,
            FocusPanel::History => FocusPanel::OperandA,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::OperandA if self.show_history => FocusPanel::History,
            FocusPanel::OperandA => FocusPanel::OperandB,
            FocusPanel::Operator => FocusPanel::OperandA,
            FocusPanel::OperandB => FocusPanel::Operator,
            FocusPanel::History => FocusPanel::OperandB,
        };
        self.dirty = true;
    }
}
