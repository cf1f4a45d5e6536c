use pretty_assertions::assert_eq;
use reckon::{
    error::{EvalError, Symbol},
    evaluate,
    interpreter::parser::unary::MAX_NESTING_DEPTH,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "expression {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: EvalError) {
    assert_eq!(evaluate(src), Err(expected), "expression {src:?}");
}

const fn unexpected(found: char, position: usize) -> EvalError {
    EvalError::UnexpectedCharacter { found: Symbol::Char(found),
                                     position }
}

const fn end_of_input(position: usize) -> EvalError {
    EvalError::UnexpectedCharacter { found: Symbol::EndOfInput,
                                     position }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2-3*4", -10.0);
    assert_value("8-3-2", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("7", 7.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("((2+3)*4)-5", 15.0);
    assert_value("2+(3*4)-(5/2)", 11.5);
    assert_value("(2.5+1.5)*2", 8.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn unary_signs_compose() {
    assert_value("--5", 5.0);
    assert_value("+-5", -5.0);
    assert_value("-+-+1", 1.0);
    assert_value("-(2+3)", -5.0);
    assert_value("2*-3", -6.0);
    assert_value("2--3", 5.0);
}

#[test]
fn long_sign_chains_do_not_recurse() {
    assert_value(&format!("{}5", "-".repeat(200_000)), 5.0);
    assert_value(&format!("{}5", "-".repeat(200_001)), -5.0);
    assert_value(&format!("{}5", "+-".repeat(100_001)), -5.0);
    assert_value(&format!("2*{}3", "- ".repeat(1_000)), 6.0);
}

#[test]
fn nesting_is_capped() {
    let depth = MAX_NESTING_DEPTH;
    assert_value(&format!("{}5{}", "(".repeat(depth), ")".repeat(depth)), 5.0);
    assert_failure(&format!("{}5{}", "(".repeat(depth + 1), ")".repeat(depth + 1)),
                   EvalError::NestingTooDeep { position:  depth,
                                               max_depth: depth, });
    assert_failure(&format!("{}5", "(".repeat(100_000)),
                   EvalError::NestingTooDeep { position:  depth,
                                               max_depth: depth, });
}

#[test]
fn closed_groups_release_nesting() {
    let src = vec!["((1))"; MAX_NESTING_DEPTH * 2].join("+");
    assert_value(&src, (MAX_NESTING_DEPTH * 2) as f64);
    assert_value(&format!("{}1{}", "-(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH)),
                 1.0);
}

#[test]
fn decimal_literal_forms() {
    assert_value("1.", 1.0);
    assert_value(".5", 0.5);
    assert_value("007", 7.0);
    assert_value("0.25*4", 1.0);
}

#[test]
fn spaces_around_tokens_are_skipped() {
    assert_value(" 2 + 3 * 4 ", 14.0);
    assert_value("( 1 + 2 ) * 3", 9.0);
    assert_value("- 5", -5.0);
    assert_value("   42", 42.0);
}

#[test]
fn spaces_inside_literals_are_not_skipped() {
    assert_failure("1 2", EvalError::TrailingInput { found: '2', position: 2 });
    assert_failure("1 .5", EvalError::TrailingInput { found: '.', position: 2 });
}

#[test]
fn only_plain_spaces_count_as_whitespace() {
    assert_failure("1\t+2", EvalError::TrailingInput { found: '\t', position: 1 });
    assert_failure("\t1", unexpected('\t', 0));
}

#[test]
fn division_by_zero_is_reported() {
    assert_failure("10/0", EvalError::DivisionByZero { position: 2 });
    assert_failure("5+10/0", EvalError::DivisionByZero { position: 4 });
    assert_failure("1/(2-2)", EvalError::DivisionByZero { position: 1 });
    assert_failure("0/0", EvalError::DivisionByZero { position: 1 });
    assert_failure("1/-0", EvalError::DivisionByZero { position: 1 });
    assert_failure("1/0.0", EvalError::DivisionByZero { position: 1 });
}

#[test]
fn zero_is_fine_everywhere_but_the_divisor() {
    assert_value("0/5", 0.0);
    assert_value("5*0", 0.0);
    assert_value("5-0", 5.0);
}

#[test]
fn unmatched_parentheses() {
    assert_failure("(2+3", EvalError::UnmatchedParen { position: 0 });
    assert_failure("((1)", EvalError::UnmatchedParen { position: 0 });
    assert_failure("1+ (2", EvalError::UnmatchedParen { position: 3 });
    assert_failure("(1 2)", EvalError::UnmatchedParen { position: 0 });
    assert_failure("2+3)", EvalError::TrailingInput { found: ')', position: 3 });
}

#[test]
fn empty_and_dangling_input() {
    assert_failure("", end_of_input(0));
    assert_failure("   ", end_of_input(3));
    assert_failure("2+", end_of_input(2));
    assert_failure("2*", end_of_input(2));
    assert_failure("-", end_of_input(1));
    assert_failure("(", end_of_input(1));
}

#[test]
fn unexpected_characters() {
    assert_failure("()", unexpected(')', 1));
    assert_failure("2+x", unexpected('x', 2));
    assert_failure("x", unexpected('x', 0));
    assert_failure("*2", unexpected('*', 0));
    assert_failure("2 x", EvalError::TrailingInput { found: 'x', position: 2 });
    assert_failure("2^3", EvalError::TrailingInput { found: '^', position: 1 });
    assert_failure("2×3", EvalError::TrailingInput { found: '×', position: 1 });
}

#[test]
fn malformed_numbers_are_errors() {
    assert_failure("1.2.3",
                   EvalError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                position: 0, });
    assert_failure(".", EvalError::MalformedNumber { literal:  ".".to_string(),
                                                     position: 0, });
    assert_failure("2+..", EvalError::MalformedNumber { literal:  "..".to_string(),
                                                        position: 2, });
}

#[test]
fn first_failure_wins() {
    assert_failure("1.2.3/0",
                   EvalError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                position: 0, });
    assert_failure("(1/0", EvalError::DivisionByZero { position: 2 });
    assert_failure("1/0+(", EvalError::DivisionByZero { position: 1 });
}

#[test]
fn errors_render_with_position() {
    let err = evaluate("5+10/0").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 4: Division by zero.");
    assert_eq!(end_of_input(2).to_string(),
               "Error at position 2: Unexpected end of input.");
    assert_eq!(unexpected('x', 0).to_string(),
               "Error at position 0: Unexpected 'x'.");
}

#[test]
fn evaluations_are_independent_across_threads() {
    let inputs = ["2+3*4", "(2+3)*4", "10/0", "--5", "(2+3"];
    let expected: Vec<_> = inputs.iter().map(|src| evaluate(src)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| {
                                        scope.spawn(|| {
                                                 inputs.iter()
                                                       .map(|src| evaluate(src))
                                                       .collect::<Vec<_>>()
                                             })
                                    })
                                    .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
