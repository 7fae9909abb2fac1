use std::io::{self, Write};

use crate::core::context::AppContext;
use crate::core::types::Keyword;
use crate::errors::{Error, Result, join_tokens};
use crate::interpreter::{Reply, missing_prompt, tokenize};
use crate::logging::{LogTarget, Logger};
use crate::numeral::Symbol;
use crate::prompter::models::{Flow, FlowCtrl, SessionState};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;

/// Feeds each line to the interpreter. When a statement stops at an
/// undefined token, the flow holds the statement and treats following lines
/// as answers to the missing-definition prompt until one is accepted.
pub struct InterpreterFlow<'a> {
    ctx: &'a mut AppContext,
    state: SessionState,
    logger: Logger,
}

impl<'a> InterpreterFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            state: SessionState::Ready,
            logger,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl<'a> Flow for InterpreterFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.print_prompt();
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        let line = input.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Ok(FlowCtrl::Finish);
        }
        let tokens = tokenize(line);

        match std::mem::replace(&mut self.state, SessionState::Ready) {
            SessionState::Ready => {
                if !tokens.is_empty() {
                    self.run_statement(tokens)?;
                }
            }
            SessionState::AwaitingDefinition { token, pending } => {
                self.answer_missing(token, pending, &tokens)?;
            }
        }
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> InterpreterFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.ctx.startup_displayed = true;
        if !self.ctx.config.show_banner() {
            return;
        }
        let chrome = UiChrome::new();
        chrome.print_banner();
        println!();
        println!("Teach symbols with 'glob is I', prices with 'glob glob Silver is 34 Credits'.");
        println!("Ask 'how much is glob glob ?' or 'how many Credits is glob Silver ?'.");
        println!("Type 'exit' to leave.");
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        for (key, _, value) in self.ctx.config.rows() {
            println!("  {key} = {value}");
        }
        if let Some(dir) = self.logger.log_dir() {
            println!("Logs path: {}", dir.display());
        }
        println!();
    }

    fn print_prompt(&self) {
        UiChrome::new().print_prompt("> ");
    }

    fn prepare_output_space(&self) {
        UiChrome::new().print_prompt_bottom_padding();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn run_statement(&mut self, tokens: Vec<String>) -> Result<()> {
        let line = join_tokens(&tokens);
        self.logger
            .info(format!("Statement run: {line}"), LogTarget::FileOnly);

        match self.ctx.interpreter.execute(&tokens) {
            Ok(reply) => self.handle_reply(reply, tokens),
            Err(err) => {
                self.note_bad_symbol(&line, &tokens);
                self.handle_error(&line, err)
            }
        }
    }

    /// The reply to a definition with a non-canonical symbol only echoes the
    /// line; the file log also gets the list of valid symbols.
    fn note_bad_symbol(&self, line: &str, tokens: &[String]) {
        if let [_, copula, symbol] = tokens {
            if Keyword::Is.matches(copula) {
                if let Err(detail) = Symbol::try_from(symbol.as_str()) {
                    self.logger.warn(
                        format!("Definition refused for '{line}': {detail}"),
                        LogTarget::FileOnly,
                    );
                }
            }
        }
    }

    fn answer_missing(
        &mut self,
        token: String,
        pending: Vec<String>,
        tokens: &[String],
    ) -> Result<()> {
        match self.ctx.interpreter.supply_definition(&token, tokens) {
            Ok(reply) => {
                self.handle_reply(reply, Vec::new())?;
                self.run_statement(pending)
            }
            Err(err) if err.is_user_error() => {
                self.logger.warn(
                    format!("Rejected definition for '{token}': {err}"),
                    LogTarget::FileOnly,
                );
                self.ask_for(token, pending);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn handle_reply(&mut self, reply: Reply, tokens: Vec<String>) -> Result<()> {
        match reply {
            Reply::Learned(note) => self.logger.info(note, LogTarget::FileOnly),
            Reply::Answer(text) => self.logger.info(text, LogTarget::ConsoleAndFile),
            Reply::Missing(token) => self.ask_for(token, tokens),
        }
        Ok(())
    }

    fn ask_for(&mut self, token: String, pending: Vec<String>) {
        self.logger
            .info(missing_prompt(&token), LogTarget::ConsoleAndFile);
        self.state = SessionState::AwaitingDefinition { token, pending };
    }

    /// Statement errors are reported and the session goes on; anything else
    /// ends the loop.
    fn handle_error(&self, line: &str, err: Error) -> Result<()> {
        if !err.is_user_error() {
            return Err(err);
        }
        if let Error::InvalidNumeral { violation, .. } = &err {
            self.logger.warn(
                format!("Numeral refused for '{line}': {violation}"),
                LogTarget::FileOnly,
            );
        }
        self.logger.warn(err.to_string(), LogTarget::ConsoleAndFile);
        Ok(())
    }
}
