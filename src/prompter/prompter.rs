use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use std::io::{self, BufRead, BufReader, ErrorKind};

/// Line loop: render, read one line, hand it to the flow. End of input ends
/// the loop without error.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let stdin = io::stdin();
        let reader = BufReader::new(stdin);
        self.run_with_reader(flow, reader)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            flow.render()?;

            let mut line = String::new();
            let n = match reader.read_line(&mut line) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => return Ok(()),
                Err(err) => return Err(Error::Io(err)),
            };
            if n == 0 {
                return Ok(());
            }
            match flow.handle_input(line.trim())? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
