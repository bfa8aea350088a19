/// The result of dispatching one input event. Quit is an explicit state
/// propagated up through the event loop, never a thrown signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep the event loop running.
    Continue,
    /// Leave the event loop; the runner restores the terminal.
    Exit,
}
