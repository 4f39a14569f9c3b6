/// Side effects requested by the event handler, performed by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Draw a fresh operand pair and feed it back as a `Randomized` event.
    Randomize,
    Quit,
}
