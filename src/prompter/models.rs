use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next statement.
    Ready,
    /// `pending` stopped at `token`; the next line must define it.
    AwaitingDefinition { token: String, pending: Vec<String> },
}
