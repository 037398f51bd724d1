use callorder::*;

trait Mailer {}

#[test]
fn verification_failure_names_both_behaviors_and_the_relation() {
    let order = OrderTracker::new();
    let mailer = Stub::<dyn Mailer>::new();

    mailer.arrange_with_order(behavior!(connect()), &order);
    mailer.arrange_with_order(behavior!(send(_)), &order);

    mailer.invoke::<()>(&behavior!(send("hi")));
    mailer.invoke::<()>(&behavior!(connect()));

    let error = mailer
        .verify_was_called_before(&behavior!(connect()), &mailer, &behavior!(send(_)), &order)
        .unwrap_err();

    let OrderError::VerificationFailed {
        behavior,
        other,
        relation,
    } = &error
    else {
        panic!("unexpected error: {error}");
    };

    assert_eq!("connect()", behavior.behavior());
    assert_eq!("send(_)", other.behavior());
    assert!(behavior.subject().contains("Mailer"));
    assert_eq!(Relation::CalledBefore, *relation);

    let message = error.to_string();
    assert!(message.starts_with("Expected connect() of "));
    assert!(message.contains(" to be called before send(_) of "));
}

#[test]
fn setup_missing_is_distinct_from_a_failed_relation() {
    let order = OrderTracker::new();
    let mailer = Stub::<dyn Mailer>::new();

    mailer.arrange_with_order(behavior!(connect()), &order);

    let error = mailer
        .verify_was_called_before(&behavior!(connect()), &mailer, &behavior!(quit()), &order)
        .unwrap_err();

    assert!(matches!(&error, OrderError::SetupMissing { behavior } if behavior.behavior() == "quit()"));
    assert!(error
        .to_string()
        .ends_with("There was no setup with order for this behavior."));
}

#[test]
fn first_missing_setup_is_reported() {
    let order = OrderTracker::new();
    let mailer = Stub::<dyn Mailer>::new();

    let error = mailer
        .verify_was_only_called_after(&behavior!(a()), &mailer, &behavior!(b()), &order)
        .unwrap_err();

    assert!(matches!(&error, OrderError::SetupMissing { behavior } if behavior.behavior() == "a()"));
}

#[test]
fn logging_an_unregistered_behavior() {
    let order = OrderTracker::new();
    let mailer = Stub::<dyn Mailer>::new();

    let error = order
        .log_invocation(&mailer, &behavior!(send(1)))
        .unwrap_err();

    assert!(matches!(error, OrderError::NotRegistered { .. }));
    let message = error.to_string();
    assert!(message.starts_with("send(1) of "));
    assert!(message.contains("Mailer"));
}

#[test]
fn missing_key_argument() {
    let error = BehaviorKey::<Behavior>::try_new::<Stub<dyn Mailer>>(None, Some(behavior!(a())))
        .unwrap_err();

    assert_eq!(
        "Cannot identify a behavior without a subject.",
        error.to_string()
    );
}

#[test]
#[should_panic(expected = "Expected connect() of")]
fn order_errors_can_be_asserted_with_a_panic() {
    let order = OrderTracker::new();
    let mailer = Stub::<dyn Mailer>::new();

    mailer.arrange_with_order(behavior!(connect()), &order);
    mailer.arrange_with_order(behavior!(quit()), &order);

    mailer.invoke::<()>(&behavior!(quit()));

    if let Err(error) =
        mailer.verify_was_called_before(&behavior!(connect()), &mailer, &behavior!(quit()), &order)
    {
        panic!("{error}");
    }
}
