use std::thread;

use fluent_webapi_core::{
    check_for_exception, get_method_name, resolve_method_arguments, Exception, Expr, Lambda,
    Value,
};

#[test]
fn shared_lambda_resolves_identically_across_threads() {
    let lambda = Lambda::new(
        "c",
        Expr::call(
            Expr::parameter("c"),
            "Post",
            [
                Expr::constant(1),
                Expr::computed("factory", || Ok(Value::from("built"))),
            ],
        ),
    );
    let expected = resolve_method_arguments(&lambda).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (
                        get_method_name(&lambda).unwrap(),
                        resolve_method_arguments(&lambda).unwrap(),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (name, args) = handle.join().expect("thread panicked");
            assert_eq!(name, "Post");
            assert_eq!(args, expected);
        }
    });
}

#[test]
fn exception_messages_are_deterministic_across_threads() {
    let aggregate = Exception::aggregate(vec![
        Exception::null_reference("a"),
        Exception::argument(""),
    ]);

    let messages: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| check_for_exception(Some(&aggregate)).unwrap_err().to_string()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    assert!(messages.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        messages[0],
        "AggregateException (containing NullReferenceException with 'a' message, \
         ArgumentException) was thrown but was not caught or expected."
    );
}
