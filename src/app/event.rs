use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Operand pair drawn by the randomizer, fed back by the main loop
    Randomized { a: i32, b: i32 },
}
