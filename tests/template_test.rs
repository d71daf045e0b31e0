// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// tests/template_test.rs
// Tests reusable chain templates and the functions they produce

use chain::*;

fn add(n: i64) -> OpFn {
    op1(move |x| Ok(Value::Int(x.as_int()? + n)))
}

#[test]
fn test_template_replays_steps() {
    // with_given(add, 2)(add, 3)(add, 4)(add, 5)(add, 6) applied to 1 == 21
    let operation = Template::new()
        .call(add(2))
        .call(add(3))
        .call(add(4))
        .call(add(5))
        .call(add(6))
        .end();
    assert_eq!(operation.apply(1), Ok(Value::Int(21)));
}

#[test]
fn test_template_is_reusable() {
    let operation = Template::new().call(add(10)).end();
    assert_eq!(operation.apply(1), Ok(Value::Int(11)));
    assert_eq!(operation.apply(32), Ok(Value::Int(42)));
}

#[test]
fn test_template_with_explicit_sentinel() {
    // Recorded steps substitute ANS at replay time.
    let subtract = op2(|x, y| Ok(Value::Int(x.as_int()? - y.as_int()?)));
    let operation = Template::new()
        .call_with(subtract, [100.into(), ANS])
        .end();
    assert_eq!(operation.apply(40), Ok(Value::Int(60)));
}

#[test]
fn test_template_with_sequence() {
    let operation = Template::new()
        .seq(Seq::over(ANS).map(|i| Ok(Value::Int(i.as_int()? * 2))))
        .call(ops::list())
        .end();
    let result = operation.apply(Value::list([1, 2, 3].map(Value::from)));
    assert_eq!(result, Ok(Value::list([2, 4, 6].map(Value::from))));
}

#[test]
fn test_template_with_method_step() {
    let operation = Template::new().invoke("upper", []).end();
    assert_eq!(operation.apply("abc"), Ok(Value::Str("ABC".to_string())));
}

#[test]
fn test_template_returns_value_not_chain() {
    // The produced operation yields the final value directly.
    let operation = Template::new().call(ops::to_str()).end();
    assert_eq!(operation.apply(7), Ok(Value::Str("7".to_string())));
}

#[test]
fn test_template_as_step_in_a_chain() {
    let triple = Template::named("triple").call_with(
        op2(|x, y| Ok(Value::Int(x.as_int()? * y.as_int()?))),
        [3.into()],
    );
    let operation = triple.end();
    let result = given(5).call(operation.as_op()).call(add(1)).end();
    assert_eq!(result, Ok(Value::Int(16)));
}

#[test]
fn test_template_error_propagates() {
    let operation = Template::new()
        .call(op1(|_| Err(ChainError::failure("broken"))))
        .call(add(1))
        .end();
    assert_eq!(operation.apply(1), Err(ChainError::failure("broken")));
}

#[test]
fn test_named_template_debug() {
    let operation = Template::named("triple").call(add(0)).end();
    assert_eq!(operation.name(), Some("triple"));
    assert_eq!(format!("{:?}", operation), "<function triple>");
}

#[test]
fn test_anonymous_template_debug() {
    let operation = Template::new().call(add(0)).end();
    assert_eq!(operation.name(), None);
    assert_eq!(format!("{:?}", operation), "<anonymous function>");
}
