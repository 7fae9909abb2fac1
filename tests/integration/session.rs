use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_input, write_config,
    write_quiet_config,
};

const TRADE_FACTS: &str = "glob is I
prok is V
pish is X
tegj is L
glob glob Silver is 34 Credits
glob prok Gold is 57800 Credits
pish pish Iron is 3910 Credits
";

fn run_session(queries: &str) -> (Vec<String>, Vec<String>) {
    let dir = make_temp_dir("session");
    write_quiet_config(&dir);
    let output = run_with_input(&dir, &format!("{TRADE_FACTS}{queries}"));
    assert!(output.status.success(), "session should end cleanly");
    (
        normalized_lines(&output.stdout),
        normalized_lines(&output.stderr),
    )
}

#[test]
fn answers_the_classic_merchant_queries() {
    let (stdout, stderr) = run_session(
        "how much is pish tegj glob glob ?
how many Credits is glob prok Silver ?
how many Credits is glob prok Gold ?
how many Credits is glob prok Iron ?
how many Credits is glob Iron ?
",
    );
    assert_eq!(
        stdout,
        vec![
            "pish tegj glob glob is 42",
            "glob prok Silver is 68 Credits",
            "glob prok Gold is 57800 Credits",
            "glob prok Iron is 782 Credits",
            "glob Iron is 195.5 Credits",
        ]
    );
    assert!(stderr.is_empty(), "unexpected errors: {stderr:?}");
}

#[test]
fn learned_facts_print_nothing() {
    let (stdout, stderr) = run_session("");
    assert!(stdout.is_empty(), "unexpected output: {stdout:?}");
    assert!(stderr.is_empty(), "unexpected errors: {stderr:?}");
}

#[test]
fn bad_lines_get_distinct_replies_and_session_continues() {
    let (stdout, stderr) = run_session(
        "how much wood could a woodchuck chuck if a woodchuck could chuck wood ?
glob is
how many Credits is glob Tin ?
how many Credits is glob pish ?
how much is glob glob glob glob ?
how much is glob ?
",
    );
    assert_eq!(
        stderr,
        vec![
            "I have no idea what you are talking about",
            "invalid input, ignored: glob is",
            "unknown material: Tin",
            "not a material: pish",
            "no valid numeral: glob glob glob glob",
        ]
    );
    assert_eq!(stdout, vec!["glob is 1"]);
}

#[test]
fn malformed_facts_are_ignored_with_the_line_echoed() {
    let (stdout, stderr) = run_session(
        "glob is i
glob is IV
glob glob Silver is +34 Credits
how much is glob ?
how many Credits is glob Silver ?
",
    );
    assert_eq!(
        stderr,
        vec![
            "invalid input, ignored: glob is i",
            "invalid input, ignored: glob is IV",
            "invalid input, ignored: glob glob Silver is +34 Credits",
        ]
    );
    assert_eq!(stdout, vec!["glob is 1", "glob Silver is 17 Credits"]);
}

#[test]
fn missing_definition_is_requested_until_supplied() {
    let (stdout, _) = run_session(
        "how much is pish blub ?
zorg is I
blub is V
how much is blub ?
",
    );
    assert_eq!(
        stdout,
        vec![
            "missing information / invalid input: How much is blub ?",
            "missing information / invalid input: How much is blub ?",
            "pish blub is 15",
            "blub is 5",
        ]
    );
}

#[test]
fn end_of_input_while_waiting_exits_silently() {
    let (stdout, stderr) = run_session("how much is blub ?\n");
    assert_eq!(
        stdout,
        vec!["missing information / invalid input: How much is blub ?"]
    );
    assert!(stderr.is_empty());
}

#[test]
fn redefinition_changes_later_answers() {
    let (stdout, _) = run_session(
        "glob is X
how much is glob glob ?
",
    );
    assert_eq!(stdout, vec!["glob glob is 20"]);
}

#[test]
fn whole_credits_policy_refuses_fractional_prices() {
    let dir = make_temp_dir("policy");
    write_config(&dir, "whole-credits", false);
    let output = run_with_input(
        &dir,
        "pish is X
pish pish Iron is 3910 Credits
how many Credits is Iron ?
",
    );
    assert!(output.status.success());
    assert_eq!(
        normalized_lines(&output.stderr),
        vec![
            "unit price of Iron is not a whole number of Credits: 195.5",
            "unknown material: Iron",
        ]
    );
}

#[test]
fn session_is_written_to_log_file() {
    let dir = make_temp_dir("log");
    write_quiet_config(&dir);
    let output = run_with_input(
        &dir,
        "glob is I
how much is glob ?
how much is glob glob glob glob ?
",
    );
    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Statement run: glob is I"));
    assert!(log.contains("Defined glob as I"));
    assert!(log.contains("glob is 1"));
    assert!(log.contains("I repeated more than three times"));
}
