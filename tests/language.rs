use std::fs::{self};

use umni::{
    Error, Session,
    error::{ErrorKind, RuntimeError},
    get_result,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_umni_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("umni example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No umni examples found in docs");
}

fn extract_umni_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```umni") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `src` and returns the rendered value of its last line.
fn shown(src: &str) -> String {
    match get_result(src, false) {
        Ok(Some(value)) => value.render(),
        Ok(None) => panic!("Script produced no value"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn value_of(src: &str) -> Value {
    match get_result(src, false) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match get_result(src, false) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Script failed before evaluation: {e}"),
        Ok(_) => panic!("Script succeeded but was expected to fail"),
    }
}

fn failure_kind(src: &str) -> ErrorKind {
    runtime_failure(src).kind()
}

#[test]
fn literals() {
    assert_eq!(value_of("42"), Value::Natural(42));
    assert_eq!(value_of("2.5"), Value::Real(2.5));
    assert_eq!(value_of("1_000_000"), Value::Natural(1_000_000));
    assert_eq!(value_of("5km"), Value::WithUnit(5.0, "km".to_string()));
    assert_eq!(value_of("'single'"), Value::from("single"));
    assert_eq!(value_of("\"double\""), Value::from("double"));
    assert_eq!(value_of("true"), Value::LogicalValue(true));
}

#[test]
fn arithmetic_and_promotion() {
    assert_eq!(value_of("2 + 3"), Value::Natural(5));
    assert_eq!(value_of("2 + 3.5"), Value::Real(5.5));
    assert_eq!(value_of("2.5 * 2"), Value::Natural(5));
    assert_eq!(value_of("10 / 2"), Value::Real(5.0));
    assert_eq!(value_of("2 + 3 * 4"), Value::Natural(14));
    assert_eq!(value_of("(2 + 3) * 4"), Value::Natural(20));
    assert_eq!(value_of("6 times 7"), Value::Natural(42));
    assert_eq!(value_of("10 - 4 - 3"), Value::Natural(3));
    assert_eq!(value_of("-2 * -3"), Value::Natural(6));
    assert_eq!(value_of("type(1000000 * 1000000)"), Value::from("integer"));
    assert_eq!(value_of("type(100000000 * 100000000)"), Value::from("double"));
}

#[test]
fn rendering() {
    assert_eq!(shown("1234567"), "1,234,567");
    assert_eq!(shown("1234567.891"), "1,234,567.891");
    assert_eq!(shown("1 / 3"), "0.3333");
    assert_eq!(shown("10 / 4"), "2.5");
    assert_eq!(shown("1500m"), "1,500m");
    assert_eq!(shown("-1500"), "-1,500");
    assert_eq!(shown("fn f(x) = x"), "function");
}

#[test]
fn units_and_conversion() {
    assert_eq!(shown("5km to m"), "5,000m");
    assert_eq!(shown("1024kb to mb"), "1mb");
    assert_eq!(shown("1km + 500m"), "1.5km");
    assert_eq!(shown("500m + 1km"), "1,500m");
    assert_eq!(shown("5km * 2"), "10km");
    assert_eq!(shown("2 * 5km"), "10km");
    assert_eq!(shown("1km / 500m"), "2km");
    assert_eq!(shown("5km to m to cm"), "500,000cm");
}

#[test]
fn conversion_binds_looser_than_additive() {
    assert_eq!(shown("1km - 500m to m"), "500m");
}

#[test]
fn bare_numbers_convert_from_metres() {
    assert_eq!(shown("5 to cm"), "500cm");
    assert_eq!(shown("2.5 to mm"), "2,500mm");
}

#[test]
fn cross_dimension_conversion_is_numeric() {
    assert_eq!(shown("1mb to m"), "1,048,576m");
    assert_eq!(shown("1km to kb"), "0.9765kb");
}

#[test]
fn unit_comparisons_convert_first() {
    assert_eq!(value_of("1km == 1000m"), Value::LogicalValue(true));
    assert_eq!(value_of("1km > 999m"), Value::LogicalValue(true));
    assert_eq!(value_of("1024kb < 1mb"), Value::LogicalValue(false));
}

#[test]
fn strings() {
    assert_eq!(value_of("\"Hello, \" + 'World'"), Value::from("Hello, World"));
    assert_eq!(value_of("\"total: \" + 1500"), Value::from("total: 1,500"));
    assert_eq!(value_of("1500 + \" total\""), Value::from("1,500 total"));
    assert_eq!(value_of("\"d = \" + 5km"), Value::from("d = 5km"));
    assert_eq!(value_of("\"ab\" * 3"), Value::from("ababab"));
    assert_eq!(value_of("\"ab\" * 0"), Value::from(""));
    assert_eq!(value_of("length(\"안녕하세요\")"), Value::Natural(5));
}

#[test]
fn huge_repetition_fails_the_statement_only() {
    let mut session = Session::new();
    assert!(matches!(session.execute_line("\"ab\" * 9007199254740991"),
                     Err(Error::Runtime(RuntimeError::InvalidOperands { .. }))));
    assert_eq!(session.execute_line("\"ab\" * 2"), Ok(Some(Value::from("abab"))));
}

#[test]
fn string_subtraction_is_a_type_error() {
    assert_eq!(runtime_failure("\"a\" - \"b\""),
               RuntimeError::InvalidOperands { op:    "-".to_string(),
                                               left:  "a".to_string(),
                                               right: "b".to_string(), });
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(value_of("2 < 3"), Value::LogicalValue(true));
    assert_eq!(value_of("3 >= 3"), Value::LogicalValue(true));
    assert_eq!(value_of("2 != 3"), Value::LogicalValue(true));
    assert_eq!(value_of("2 == 2.0"), Value::LogicalValue(true));
    assert_eq!(value_of("\"apple\" < \"banana\""), Value::LogicalValue(true));
    assert_eq!(value_of("1 == \"1\""), Value::LogicalValue(false));
    assert_eq!(value_of("1 != \"1\""), Value::LogicalValue(true));
    assert_eq!(value_of("!(1 == 2)"), Value::LogicalValue(true));
    assert_eq!(value_of("!true == false"), Value::LogicalValue(true));
    assert_eq!(failure_kind("1 < \"1\""), ErrorKind::Type);
    assert_eq!(failure_kind("!1"), ErrorKind::Type);
}

#[test]
fn assignment() {
    assert_eq!(value_of("x = 5\nx * 2"), Value::Natural(10));
    assert_eq!(value_of("x = y = 5\nx + y"), Value::Natural(10));
    assert_eq!(value_of("x = 1\nx = x + 1\nx"), Value::Natural(2));
}

#[test]
fn only_variables_can_be_assigned() {
    assert_eq!(runtime_failure("1 = 2"), RuntimeError::InvalidAssignmentTarget);
    assert_eq!(runtime_failure("fn f(x) = x\nf(1) = 2"), RuntimeError::InvalidAssignmentTarget);
    assert_eq!(failure_kind("x + 1 = 2"), ErrorKind::Name);
}

#[test]
fn constants() {
    assert_eq!(value_of("pi"), Value::Real(std::f64::consts::PI));
    assert_eq!(value_of("e"), Value::Real(std::f64::consts::E));
    assert_eq!(runtime_failure("pi = 3"),
               RuntimeError::AssignToConstant { name: "pi".to_string() });
    assert_eq!(runtime_failure("fn pi() = 3"),
               RuntimeError::ConstantAsFunction { name: "pi".to_string() });
    assert_eq!(failure_kind("true = 1"), ErrorKind::Name);
}

#[test]
fn failed_statements_keep_earlier_effects() {
    let mut session = Session::new();
    assert!(session.execute_line("pi = x = 5").is_err());
    assert_eq!(session.execute_line("x"), Ok(Some(Value::Natural(5))));
}

#[test]
fn ternary() {
    assert_eq!(value_of("1 < 2 ? \"yes\" : \"no\""), Value::from("yes"));
    assert_eq!(value_of("n = 0\nn < 0 ? -1 : n == 0 ? 0 : 1"), Value::Natural(0));
    assert_eq!(value_of("true ? 1 : undefined_name"), Value::Natural(1));
    assert_eq!(runtime_failure("1 ? 2 : 3"), RuntimeError::NonBooleanCondition);
}

#[test]
fn user_defined_functions() {
    assert_eq!(value_of("fn double(x) = x * 2\ndouble(21)"), Value::Natural(42));
    assert_eq!(value_of("fn double(x) = x * 2\ndouble(double(5))"), Value::Natural(20));
    assert_eq!(value_of("fn hyp(a, b) = a * a + b * b\nhyp(3, 4)"), Value::Natural(25));
    assert_eq!(value_of("fn answer() = 42\nanswer()"), Value::Natural(42));
    assert_eq!(value_of("fn f(x) = x + 1\nfn f(x) = x + 2\nf(1)"), Value::Natural(3));
}

#[test]
fn recursion_through_ternary() {
    assert_eq!(value_of("fn fact(n) = n <= 1 ? 1 : n * fact(n - 1)\nfact(10)"),
               Value::Natural(3_628_800));
    assert_eq!(value_of("fn fib(n) = n < 2 ? n : fib(n - 1) + fib(n - 2)\nfib(15)"),
               Value::Natural(610));
}

#[test]
fn runaway_recursion_fails_the_statement_only() {
    // deep evaluation needs more than the default test thread stack
    let (shown, kind) = std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                                   .spawn(|| {
                                                       let mut session = Session::new();
                                                       let shown = session.render_document("fn f(n) = f(n)\nf(1)\n\"after\"");
                                                       let kind = match session.execute_line("f(2)") {
                                                           Err(Error::Runtime(e)) => Some(e.kind()),
                                                           _ => None,
                                                       };
                                                       (shown, kind)
                                                   })
                                                   .unwrap()
                                                   .join()
                                                   .unwrap();
    assert_eq!(shown, ["function", "", "after"]);
    assert_eq!(kind, Some(ErrorKind::Resource));
}

#[test]
fn function_scoping() {
    // globals are read when the call happens
    assert_eq!(value_of("rate = 2\nfn scale(x) = x * rate\nrate = 3\nscale(10)"),
               Value::Natural(30));
    // parameters shadow globals
    assert_eq!(value_of("x = 100\nfn id(x) = x\nid(1)"), Value::Natural(1));
    // a callee sees its caller's parameters
    assert_eq!(value_of("fn inner() = a\nfn outer(a) = inner()\nouter(3)"), Value::Natural(3));
    // parameters do not leak into the session
    assert_eq!(runtime_failure("fn id(p) = p\nid(1)\np"),
               RuntimeError::UndefinedVariable { name: "p".to_string() });
}

#[test]
fn constants_shadow_parameters() {
    assert_eq!(value_of("fn f(pi) = pi\nf(3)"), Value::Real(std::f64::consts::PI));
}

#[test]
fn builtins() {
    assert_eq!(value_of("sin(0)"), Value::Real(0.0));
    assert_eq!(value_of("cos(pi)"), Value::Real(-1.0));
    assert_eq!(value_of("b64Encode(\"Hello\")"), Value::from("SGVsbG8="));
    assert_eq!(value_of("b64Decode(b64Encode(\"안녕하세요\"))"), Value::from("안녕하세요"));
    assert_eq!(value_of("type(1)"), Value::from("integer"));
    assert_eq!(value_of("type(1.5)"), Value::from("double"));
    assert_eq!(value_of("type(5km)"), Value::from("double with unit"));
    assert_eq!(value_of("type(\"s\")"), Value::from("string"));
    assert_eq!(value_of("type(1 < 2)"), Value::from("boolean"));
    assert_eq!(failure_kind("b64Decode(\"not base64!\")"), ErrorKind::Type);
    assert_eq!(failure_kind("length(12)"), ErrorKind::Type);
}

#[test]
fn arity_errors() {
    assert_eq!(runtime_failure("fn double(x) = x * 2\ndouble(1, 2)"),
               RuntimeError::ArgumentCountMismatch { name:     "double".to_string(),
                                                     expected: 1,
                                                     found:    2, });
    assert_eq!(failure_kind("sin()"), ErrorKind::Arity);
    assert_eq!(failure_kind("sin(1, 2)"), ErrorKind::Arity);
}

#[test]
fn arity_is_checked_before_arguments() {
    assert_eq!(failure_kind("sin(missing, 2)"), ErrorKind::Arity);
    assert_eq!(failure_kind("fn f(x) = x\nf(1 / 0, 2)"), ErrorKind::Arity);
}

#[test]
fn unknown_names() {
    assert_eq!(runtime_failure("foo + 1"),
               RuntimeError::UndefinedVariable { name: "foo".to_string() });
    assert_eq!(runtime_failure("foo(1)"),
               RuntimeError::UndefinedFunction { name: "foo".to_string() });
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_failure("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_failure("1.5 / 0.0"), RuntimeError::DivisionByZero);
    assert_eq!(failure_kind("5km / 0m"), ErrorKind::Arithmetic);
}

#[test]
fn conversions_need_numbers() {
    assert_eq!(runtime_failure("\"5\" to m"), RuntimeError::NonNumericConversion);
    assert_eq!(runtime_failure("true to km"), RuntimeError::NonNumericConversion);
}

#[test]
fn lex_and_parse_errors() {
    assert!(matches!(get_result("5ft", false), Err(Error::Lex(_))));
    assert!(matches!(get_result("\"open", false), Err(Error::Lex(_))));
    assert!(matches!(get_result("1 +", false), Err(Error::Parse(_))));
    assert!(matches!(get_result("5 to", false), Err(Error::Parse(_))));
    assert!(matches!(get_result("1 2", false), Err(Error::Parse(_))));
    assert!(matches!(get_result("1 ? 2", false), Err(Error::Parse(_))));
    assert!(matches!(get_result("x = (1 = 2)", false), Err(Error::Parse(_))));
}

#[test]
fn documents_continue_after_errors() {
    let mut session = Session::new();
    let shown = session.render_document("d = 1500m\nd / 0\nd to km\n\nundefined\n\"done\"");
    assert_eq!(shown, ["1,500m", "", "1.5km", "", "", "done"]);
}
