use monad_rail::Monad;

fn make_loud(x: &str) -> String {
    x.to_uppercase()
}

#[test]
fn chain_of_arithmetic_steps_holds_final_value() {
    let x = Monad::new(4).bind(|x| x + 6).bind(|x| x - 2);
    assert_eq!(x, Monad::new(8));
    assert_eq!(*x.value(), 8);
}

#[test]
fn infix_pipeline_matches_named_bind() {
    let infix = Monad::new(4) >> (|x: i32| x + 6) >> (|x: i32| x - 2);
    let named = Monad::new(4).bind(|x| x + 6).bind(|x| x - 2);
    assert_eq!(infix, named);
}

#[test]
fn steps_may_change_the_held_type() {
    let x = Monad::new("hello world!") >> make_loud >> (|s: String| s.len());
    assert_eq!(x.unwrap(), 12);
}

#[test]
fn bind_returns_a_new_container_and_leaves_copies_alone() {
    let original = Monad::new(3);
    let chained = original.bind(|x| x + 1);

    assert_eq!(original, Monad::new(3));
    assert_eq!(chained, Monad::new(4));
}

#[test]
fn equality_is_structural_on_the_held_value() {
    assert_eq!(Monad::new(vec![1, 2]), Monad::new(vec![1, 2]));
    assert_ne!(Monad::new("a"), Monad::new("b"));
    assert_eq!(Monad::from(5), Monad::new(5));
}

#[test]
fn unwrap_and_into_inner_return_the_value() {
    assert_eq!(Monad::new(4).unwrap(), 4);
    assert_eq!(Monad::new("x").into_inner(), "x");
}

#[test]
#[should_panic(expected = "boom")]
fn panics_in_steps_propagate_to_the_caller() {
    let _ = Monad::new(1).bind(|_: i32| -> i32 { panic!("boom") });
}
