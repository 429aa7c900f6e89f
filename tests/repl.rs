use leftcalc::repl::{Mode, ReplOptions, Session, run};

fn session(input: &str, options: &ReplOptions) -> (Session, String, String) {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let session = run(input.as_bytes(), &mut output, &mut errors, options).expect("in-memory i/o");

    (session,
     String::from_utf8(output).expect("utf-8 output"),
     String::from_utf8(errors).expect("utf-8 errors"))
}

#[test]
fn each_line_is_evaluated_independently() {
    let (summary, output, errors) = session("3+5\n7 - 2 * 3\n10 / 4\n", &ReplOptions::default());

    assert_eq!(summary,
               Session { evaluated: 3,
                         failed:    0, });
    assert!(summary.succeeded());
    assert_eq!(output, "8\n15\n2.5\n");
    assert!(errors.is_empty());
}

#[test]
fn errors_do_not_stop_the_loop() {
    let (summary, output, errors) = session("9 *\n9 @ 1\n1 + 1\n", &ReplOptions::default());

    assert_eq!(summary.failed, 2);
    assert!(!summary.succeeded());
    assert_eq!(output, "2\n");
    assert_eq!(errors,
               "Error at column 4: Expected integer, found end of input.\nError at column 3: \
                Unrecognized character '@'.\n");
}

#[test]
fn blank_lines_are_skipped() {
    let (summary, output, errors) = session("\n   \n\t\n4\n", &ReplOptions::default());

    assert_eq!(summary.evaluated, 1);
    assert_eq!(output, "4\n");
    assert!(errors.is_empty());
}

#[test]
fn last_line_without_newline_and_crlf_endings() {
    let (_, output, _) = session("1 + 2\r\n5 * 5", &ReplOptions::default());
    assert_eq!(output, "3\n25\n");
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let (summary, output, errors) = session("", &ReplOptions::default());

    assert_eq!(summary, Session::default());
    assert!(output.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn prompt_is_written_before_every_read() {
    let options = ReplOptions { prompt: Some("calc> ".to_owned()),
                                mode:   Mode::Evaluate, };
    let (_, output, _) = session("1\n2\n", &options);

    assert_eq!(output, "calc> 1\ncalc> 2\ncalc> \n");
}

#[test]
fn token_mode_prints_positions_and_tokens() {
    let options = ReplOptions { prompt: None,
                                mode:   Mode::Tokens, };
    let (summary, output, errors) = session("3+5\n9 *\n2 ! 2\n", &options);

    assert_eq!(summary.failed, 1);
    assert_eq!(output,
               "0:Integer(3) 1:Plus 2:Integer(5) 3:EndOfInput\n0:Integer(9) 2:Multiply \
                3:EndOfInput\n");
    assert_eq!(errors, "Error at column 3: Unrecognized character '!'.\n");
}
