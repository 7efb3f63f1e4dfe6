use std::fs;

use exprcalc::{
    get_result,
    interpreter::{evaluator::builtin::lookup, object::Object},
    repl::{render, run_script},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_calc_examples(&content) {
            count += 1;
            assert_eq!(render(&source).trim_end(),
                       expected,
                       "example `{source}` in {path:?} printed the wrong result");
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((source, expected)) = line.split_once(" => ") {
            examples.push((source.to_string(), expected.to_string()));
        }
    }

    examples
}

fn assert_output(src: &str, expected: &str) {
    let value = get_result(src).unwrap_or_else(|e| panic!("Script failed to parse: {e:?}"))
                               .unwrap_or_else(|| panic!("Script produced no value"));
    assert_eq!(value.to_string(), expected, "for `{src}`");
}

fn assert_error_contains(src: &str, needle: &str) {
    match get_result(src) {
        Ok(Some(Object::Error(e))) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "error `{message}` for `{src}` does not mention `{needle}`");
        },
        other => panic!("Script `{src}` was expected to fail, got {other:?}"),
    }
}

#[test]
fn precedence_of_sum_and_product() {
    assert_output("1+2*3", "7.00");
    assert_output("(1+2)*3", "9.00");
    assert_output("2*3+4", "10.00");
    assert_output("10-4-3", "3.00");
    assert_output("100/10/5", "2.00");
}

#[test]
fn exponent_is_right_associative() {
    assert_output("2**3**2", "512.00");
    assert_output("(2**3)**2", "64.00");
    assert_output("4**0.5", "2.00");
}

#[test]
fn unary_minus_binds_tighter_than_exponent() {
    assert_output("-2**2", "4.00");
    assert_output("-(2**2)", "-4.00");
    assert_output("2**-2", "0.25");
    assert_output("-3*-3", "9.00");
}

#[test]
fn builtin_application() {
    assert_output("sqrt(16)", "4.00");
    assert_output("pow(2,10)", "1024.00");
    assert_output("abs(-5)", "5.00");
    assert_output("pow(sqrt(4), 3) - 1", "7.00");
}

#[test]
fn bare_builtin_evaluates_to_its_registry_entry() {
    let value = get_result("sqrt").unwrap().unwrap();
    assert_eq!(value, Object::Builtin(lookup("sqrt").unwrap()));
}

#[test]
fn division_by_zero_is_error() {
    assert_error_contains("1/0", "division by zero");
    assert_error_contains("1/(2-2)", "division by zero");
    assert_error_contains("0/0", "division by zero");
}

#[test]
fn small_divisor_is_not_division_by_zero() {
    assert_output("1/0.0000001", "10000000.00");
    assert_output("1/0.001", "1000.00");
    assert!(!get_result("1/0.0000001").unwrap().unwrap().is_error());
}

#[test]
fn builtin_arity_and_types_are_enforced() {
    assert_error_contains("sqrt(1,2)", "2");
    assert_error_contains("sqrt(1,2)", "sqrt accepts 1 argument");
    assert_error_contains("pow(2)", "pow accepts 2 arguments. got=1");
    assert_error_contains("abs()", "got=0");
    assert_error_contains("sqrt(cos)", "sqrt only accepts numbers. got=BUILTIN");
    assert_error_contains("pow(sin, 2)", "got=BUILTIN and NUMBER");
}

#[test]
fn unknown_identifier_is_error() {
    assert_error_contains("foo", "foo");
    assert_error_contains("1 + foo", "unexpected identifier: foo");
    assert_error_contains("foo(1)", "unexpected identifier: foo");
}

#[test]
fn operators_on_builtins_are_errors() {
    assert_error_contains("-sqrt", "unknown operator: -BUILTIN");
    assert_error_contains("+sqrt", "unknown operator: +BUILTIN");
    assert_error_contains("1 * sqrt", "type mismatch: NUMBER * BUILTIN");
    assert_error_contains("sqrt ** 2", "type mismatch: BUILTIN ** NUMBER");
    assert_error_contains("sin - cos", "unknown operator: BUILTIN - BUILTIN");
}

#[test]
fn calling_a_number_is_error() {
    assert_error_contains("2(3)", "not callable: NUMBER");
    assert_error_contains("(1 + 1)()", "not callable");
}

#[test]
fn first_error_is_propagated_unchanged() {
    assert_error_contains("-(1/0)", "division by zero");
    assert_error_contains("sqrt(1/0)", "division by zero");
    assert_error_contains("pow(foo, 1/0)", "unexpected identifier: foo");
    assert_error_contains("(1/0) + foo", "division by zero");
    assert_error_contains("2 * sqrt(1, 2) + foo", "sqrt accepts 1 argument");
}

#[test]
fn first_failing_statement_halts_the_program() {
    assert_output("1 2 3", "3.00");
    assert_error_contains("1/0 foo", "division by zero");
    assert_error_contains("1 foo 3", "unexpected identifier: foo");
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["1+2*3", "sqrt(2)", "1/0", "pow(2, 0.5) * 3", "foo"] {
        assert_eq!(render(src), render(src));
        assert_eq!(get_result(src), get_result(src));
    }
}

#[test]
fn malformed_input_is_not_evaluated() {
    let errors = get_result("(1+2").unwrap_err();
    assert!(!errors.is_empty());

    let errors = get_result("1/0 + (").unwrap_err();
    assert!(!errors.is_empty());
}

#[test]
fn empty_input_has_no_value() {
    assert_eq!(get_result("").unwrap(), None);
    assert_eq!(get_result(" \t ").unwrap(), None);
    assert_eq!(render(""), "nil\n");
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let expected = fs::read_to_string("tests/example.out").expect("missing file");

    let mut output = Vec::new();
    run_script(&script, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn deep_nesting_is_reported_not_fatal() {
    let output = render(&format!("{}1", "-".repeat(200_000)));
    assert!(output.starts_with("\texpression nested too deeply"), "{output:?}");

    let output = render(&format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000)));
    assert!(output.contains("expression nested too deeply"));
}

#[test]
fn moderately_nested_input_evaluates() {
    let src = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_output(&src, "1.00");
    assert_output(&format!("{}2", "--".repeat(100)), "2.00");
}
