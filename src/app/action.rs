/// Side effects the event loop carries out after the handler has updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ring the terminal bell.
    Bell,
    Quit,
}
