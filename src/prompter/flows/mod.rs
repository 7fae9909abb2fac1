pub mod interpreter_flow;
