// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// tests/unpack_test.rs
// Tests spreading values into an operation's arguments

use chain::*;

#[test]
fn test_list_spreads_into_positional_arguments() {
    let vector = Value::list([1, 2, 3].map(Value::from));
    let collect = op3(|x, y, z| Ok(Value::list([x, y, z])));
    assert_eq!(
        unpack(&vector, &collect),
        Ok(Value::list([1, 2, 3].map(Value::from)))
    );
}

#[test]
fn test_map_spreads_into_keyword_arguments() {
    let record = Value::map([
        ("x", Value::Int(1)),
        ("y", Value::Int(2)),
        ("z", Value::Int(3)),
    ]);
    let total = OpFn::new(|call| {
        let mut sum = 0;
        for key in ["x", "y", "z"] {
            sum += call
                .kwarg(key)
                .ok_or_else(|| ChainError::failure(format!("missing keyword '{}'", key)))?
                .as_int()?;
        }
        Ok(Value::Int(sum))
    });
    assert_eq!(unpack(&record, &total), Ok(Value::Int(6)));
}

#[test]
fn test_scalar_passes_as_single_argument() {
    let identity = op1(Ok);
    assert_eq!(unpack(&Value::Int(1), &identity), Ok(Value::Int(1)));
}

#[test]
fn test_spread_step_in_a_chain() {
    // chain([1, 2])(unpack, [x, y])(double).end == [1, 2, 1, 2]
    let pair = op2(|x, y| Ok(Value::list([x, y])));
    let repeat = op1(|v| {
        let items = v.as_list()?.to_vec();
        let mut out = items.clone();
        out.extend(items);
        Ok(Value::List(out))
    });
    let result = given(Value::list([1, 2].map(Value::from)))
        .spread(pair)
        .call(repeat)
        .end();
    assert_eq!(result, Ok(Value::list([1, 2, 1, 2].map(Value::from))));
}

#[test]
fn test_spread_step_with_a_map() {
    let record = Value::map([("x", Value::Int(4)), ("y", Value::Int(5))]);
    let total = OpFn::new(|call| {
        let x = call
            .kwarg("x")
            .ok_or_else(|| ChainError::failure("missing keyword 'x'"))?
            .as_int()?;
        let y = call
            .kwarg("y")
            .ok_or_else(|| ChainError::failure("missing keyword 'y'"))?
            .as_int()?;
        Ok(Value::Int(x + y))
    });
    let result = given(record).spread(total).end();
    assert_eq!(result, Ok(Value::Int(9)));
}

#[test]
fn test_spreading_a_lazy_sequence_forces_it() {
    let pair = op2(|x, y| Ok(Value::list([x, y])));
    let result = given(Value::list([1, 2].map(Value::from)))
        .seq(Seq::over(ANS).map(|i| Ok(Value::Int(i.as_int()? * 10))))
        .spread(pair)
        .end();
    assert_eq!(result, Ok(Value::list([10, 20].map(Value::from))));
}

#[test]
fn test_spread_arity_mismatch() {
    let pair = op2(|x, y| Ok(Value::list([x, y])));
    let result = given(Value::list([1, 2, 3].map(Value::from)))
        .spread(pair)
        .end();
    assert_eq!(result, Err(ChainError::Arity { expected: 2, got: 3 }));
}
