use callorder::*;

use pretty_assertions::assert_eq;

#[test]
fn property() {
    assert_eq!(Behavior::property("len"), behavior!(len));
    assert_eq!(MemberKind::Property, behavior!(len).kind());
}

#[test]
fn method_arguments_are_evaluated() {
    let key = "a";

    assert_eq!(
        Behavior::method("get", vec![Arg::exact("a"), Arg::Any]),
        behavior!(get(key, _))
    );
    assert_eq!(behavior!(sum(3)), behavior!(sum(1 + 2)));
}

#[test]
fn independently_written_behaviors_collide_as_keys() {
    struct Subject1;

    impl Subject for Subject1 {}

    let order = OrderTracker::new();
    order.register(&Subject1, behavior!(call(String::from("x"), _)));

    assert!(order
        .logger(&Subject1, &behavior!(call(String::from("x"), _)))
        .is_ok());
    assert!(matches!(
        order.logger(&Subject1, &behavior!(call(String::from("y"), _))),
        Err(OrderError::SetupMissing { .. })
    ));
}

#[test]
fn raw_identifiers() {
    assert_eq!("type", behavior!(r#type).member());
}

#[test]
fn rendering() {
    assert_eq!("put(_, 7)", behavior!(put(_, 7)).to_string());
    assert_eq!("close()", behavior!(close()).to_string());
    assert_eq!("name", format!("{:?}", behavior!(name)));
}
