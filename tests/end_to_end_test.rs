// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// tests/end_to_end_test.rs
// Whole-chain scenarios combining steps, sequences, methods, and templates

use chain::*;

#[test]
fn test_reverse_uppercase_collect() {
    // chain("abcd")(reversed)(c.upper() for c in ANS)(list).end
    let result = given("abcd")
        .call(ops::reversed())
        .seq(Seq::over(ANS).map(|c| Ok(Value::Str(c.as_str()?.to_uppercase()))))
        .call(ops::list())
        .end();
    assert_eq!(
        result,
        Ok(Value::list(["D", "C", "B", "A"].map(Value::from)))
    );
}

#[test]
fn test_reverse_uppercase_join() {
    let result = given("abcd")
        .call(ops::reversed())
        .seq(Seq::over(ANS).map(|c| Ok(Value::Str(c.as_str()?.to_uppercase()))))
        .call(ops::join(""))
        .end();
    assert_eq!(result, Ok(Value::str("DCBA")));
}

#[test]
fn test_method_steps_mixed_with_sequences() {
    // chain("abcdefghi").upper().replace("E", " ")(c.lower() for c in ANS)
    //     (list)("".join).end == "abcd fghi"
    let result = given("abcdefghi")
        .invoke("upper", [])
        .invoke("replace", ["E".into(), " ".into()])
        .seq(Seq::over(ANS).map(|c| Ok(Value::Str(c.as_str()?.to_lowercase()))))
        .call(ops::list())
        .call(ops::join(""))
        .end();
    assert_eq!(result, Ok(Value::str("abcd fghi")));
}

#[test]
fn test_sequences_stack_without_consuming() {
    let result = given(Value::list([1, 2, 3].map(Value::from)))
        .seq(Seq::over(ANS).map(|i| Ok(Value::Int(i.as_int()? * 2))))
        .seq(Seq::over(ANS).map(|i| Ok(Value::Int(i.as_int()? * 3))))
        .call(ops::sum())
        .end();
    // (1+2+3) * 6
    assert_eq!(result, Ok(Value::Int(36)));
}

#[test]
fn test_template_and_cascade_together() {
    let enlarge = Template::named("enlarge")
        .seq(Seq::over(ANS).map(|i| Ok(Value::Int(i.as_int()? * 10))))
        .call(ops::list())
        .end();

    let seed = Cascade::new(Value::list([]))
        .call("append", [Value::Int(2)])
        .call("append", [Value::Int(1)])
        .call("reverse", [])
        .end()
        .unwrap();

    let result = given(seed).call(enlarge.as_op()).end();
    assert_eq!(result, Ok(Value::list([10, 20].map(Value::from))));
}

#[test]
fn test_failure_skips_the_rest_of_the_pipeline() {
    let result = given("abc")
        .seq(Seq::over(Value::Int(0)))
        .call(ops::list())
        .call(ops::join(""))
        .end();
    assert_eq!(
        result,
        Err(ChainError::IterateOver {
            kind: ValueKind::Int
        })
    );
}

#[test]
fn test_filter_map_sum_pipeline() {
    let result = given(Value::list([1, 2, 3, 4, 5, 6].map(Value::from)))
        .seq(
            Seq::over(ANS)
                .filter(|i| Ok(Value::Bool(i.as_int()? % 2 == 0)))
                .map(|i| Ok(Value::Int(i.as_int()? * i.as_int()?))),
        )
        .call(ops::list())
        .end();
    // Squares of the even items.
    assert_eq!(result, Ok(Value::list([4, 16, 36].map(Value::from))));
}
