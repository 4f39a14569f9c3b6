use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::calc::eval::{self, Op};
use crate::calc::history::HistoryEntry;
use crate::config::RecomputePolicy;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Randomized { a, b } => {
            if set_operands(state, a, b) {
                state.dirty = true;
                if state.policy == RecomputePolicy::Eager {
                    recompute(state);
                }
            }
            vec![]
        }
    }
}

/// Write both operand fields. Returns whether either actually changed.
fn set_operands(state: &mut AppState, a: i32, b: i32) -> bool {
    // Both writes must run; a short-circuit would skip the second field
    let a_changed = state.a.set_text(&a.to_string());
    let b_changed = state.b.set_text(&b.to_string());
    a_changed || b_changed
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        return vec![Action::Randomize];
    }

    match key.code {
        KeyCode::Enter => return calculate(state),
        KeyCode::F(2) => {
            toggle_policy(state);
            return vec![];
        }
        KeyCode::F(3) => {
            state.show_history = !state.show_history;
            if !state.show_history && state.focus == FocusPanel::History {
                state.focus = FocusPanel::OperandA;
            }
            return vec![];
        }
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::PageUp => {
            scroll_history_up(state, 5);
            return vec![];
        }
        KeyCode::PageDown => {
            scroll_history_down(state, 5);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::OperandA => handle_operand_key(state, Slot::A, key),
        FocusPanel::OperandB => handle_operand_key(state, Slot::B, key),
        FocusPanel::Operator => handle_operator_key(state, key),
        FocusPanel::History => handle_history_key(state, key),
    }
}

/// Refresh result and validity from the current fields and operator.
fn recompute(state: &mut AppState) {
    match eval::evaluate(&state.a.text, &state.b.text, state.op) {
        Ok(ev) => {
            state.output = ev;
            state.validity = Validity::Valid;
        }
        Err(e) => {
            state.validity = Validity::Invalid(e);
        }
    }
}

fn calculate(state: &mut AppState) -> Vec<Action> {
    if !state.calculate_enabled() {
        return vec![];
    }
    match eval::evaluate(&state.a.text, &state.b.text, state.op) {
        Ok(ev) => {
            debug!(a = ev.a, b = ev.b, op = ev.op.ascii(), value = ev.value, "calculated");
            state.output = ev;
            state.validity = Validity::Valid;
            state.history.append(HistoryEntry { a: ev.a, b: ev.b });
            state.history_scroll = 0;
        }
        Err(e) => {
            state.validity = Validity::Invalid(e);
        }
    }
    vec![]
}

fn toggle_policy(state: &mut AppState) {
    state.policy = match state.policy {
        RecomputePolicy::Eager => RecomputePolicy::OnDemand,
        RecomputePolicy::OnDemand => RecomputePolicy::Eager,
    };
    debug!(policy = ?state.policy, "recompute policy toggled");
    if state.policy == RecomputePolicy::Eager {
        // Entering eager: derived state must match the current inputs
        recompute(state);
    }
}

fn handle_operand_key(state: &mut AppState, slot: Slot, key: KeyEvent) -> Vec<Action> {
    let field = state.field(slot);
    let mut edited = true;
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                field.delete_word_back();
            } else {
                field.delete_back();
            }
        }
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => {
            field.move_left();
            edited = false;
        }
        KeyCode::Right => {
            field.move_right();
            edited = false;
        }
        KeyCode::Home => {
            field.move_home();
            edited = false;
        }
        KeyCode::End => {
            field.move_end();
            edited = false;
        }
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
            'a' => {
                field.move_home();
                edited = false;
            }
            'e' => {
                field.move_end();
                edited = false;
            }
            'w' => field.delete_word_back(),
            'u' => field.clear(),
            _ => edited = false,
        },
        KeyCode::Char(c) => field.insert_char(c),
        _ => edited = false,
    }
    if edited && state.policy == RecomputePolicy::Eager {
        recompute(state);
    }
    vec![]
}

fn handle_operator_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let next = match key.code {
        KeyCode::Up | KeyCode::Left => state.op.prev(),
        KeyCode::Down | KeyCode::Right => state.op.next(),
        KeyCode::Char(c) => match Op::from_char(c) {
            Some(op) => op,
            None => return vec![],
        },
        _ => return vec![],
    };
    if next != state.op {
        state.op = next;
        if state.policy == RecomputePolicy::Eager {
            recompute(state);
        }
    }
    vec![]
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => scroll_history_up(state, 1),
        KeyCode::Down => scroll_history_down(state, 1),
        KeyCode::Home => {
            state.history_scroll = state.history.len().saturating_sub(1);
        }
        KeyCode::End => state.history_scroll = 0,
        _ => {}
    }
    vec![]
}

fn scroll_history_up(state: &mut AppState, lines: usize) {
    let max_scroll = state.history.len().saturating_sub(1);
    state.history_scroll = (state.history_scroll + lines).min(max_scroll);
}

fn scroll_history_down(state: &mut AppState, lines: usize) {
    state.history_scroll = state.history_scroll.saturating_sub(lines);
}
