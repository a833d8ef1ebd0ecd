use core::cell::Cell;

use monad_rail::types::{Nomad, StepOutcome};
use monad_rail::Failure;

fn add_six(x: i32) -> Result<i32, Failure> {
    Ok(x + 6)
}

fn subtract_two(x: i32) -> Result<i32, Failure> {
    Ok(x - 2)
}

fn divide_by_zero(x: i32) -> Result<i32, Failure> {
    x.checked_div(0).ok_or_else(|| Failure::msg("division by zero"))
}

fn outcomes<T, E>(nomad: &Nomad<T, E>) -> Vec<StepOutcome> {
    nomad.call_graph().iter().map(|step| step.outcome()).collect()
}

fn names<T, E>(nomad: &Nomad<T, E>) -> Vec<&'static str> {
    nomad.call_graph().iter().map(|step| step.name()).collect()
}

#[test]
fn records_every_step_in_order() {
    let x = Nomad::new(4) >> add_six << subtract_two;

    assert_eq!(x.value(), Some(&8));
    assert_eq!(names(&x), ["add_six", "subtract_two"]);
    assert_eq!(outcomes(&x), [StepOutcome::Completed, StepOutcome::Completed]);
    assert!(x.failed_step().is_none());
}

#[test]
fn records_the_failed_step_and_the_skipped_ones() {
    let x = Nomad::new(4) >> add_six >> divide_by_zero >> subtract_two;

    assert!(x.is_failed());
    assert_eq!(names(&x), ["add_six", "divide_by_zero", "subtract_two"]);
    assert_eq!(
        outcomes(&x),
        [StepOutcome::Completed, StepOutcome::Failed, StepOutcome::Skipped]
    );
    assert_eq!(x.failed_step().map(|step| step.name()), Some("divide_by_zero"));
    assert_eq!(x.failure().map(Failure::message), Some("division by zero"));
    assert_eq!(x.unwrap_or(42), 42);
}

#[test]
fn skipped_steps_are_never_called() {
    let calls = Cell::new(0);
    let x = (Nomad::new(1) >> divide_by_zero).map(|x| {
        calls.set(calls.get() + 1);
        x
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(outcomes(&x), [StepOutcome::Failed, StepOutcome::Skipped]);
}

#[test]
fn closures_can_be_named() {
    let x = Nomad::<&str, &str>::ok("7")
        .bind_named("parse", |s| s.parse::<i32>().map_err(|_| "not a number"))
        .map(|n| n * 6);

    assert_eq!(names(&x), ["parse", "{{closure}}"]);
    assert_eq!(x.unwrap(), Ok(42));
}

#[test]
fn generate_graph_links_consecutive_steps() {
    let x = Nomad::new(4) >> add_six >> divide_by_zero >> subtract_two;

    assert_eq!(
        x.generate_graph(),
        "graph TD\n\
         A0[add_six]\n\
         A1[divide_by_zero]\n\
         A0 --> A1\n\
         A2[subtract_two]\n\
         A1 --> A2\n"
    );
    assert_eq!(Nomad::new(0).generate_graph(), "graph TD\n");
}

#[test]
fn retry_runs_the_alternative_after_a_failure() {
    let x = Nomad::new(10).retry(divide_by_zero, subtract_two);

    assert_eq!(x.value(), Some(&8));
    assert_eq!(names(&x), ["divide_by_zero", "subtract_two"]);
    assert_eq!(outcomes(&x), [StepOutcome::Replaced, StepOutcome::Completed]);

    let primary = Nomad::new(10).retry(add_six, subtract_two);
    assert_eq!(primary.value(), Some(&16));
    assert_eq!(names(&primary), ["add_six"]);
}

#[test]
fn retry_keeps_the_alternative_failure() {
    let x = Nomad::new(10).retry(divide_by_zero, divide_by_zero);

    assert!(x.is_failed());
    assert_eq!(outcomes(&x), [StepOutcome::Replaced, StepOutcome::Failed]);
}

#[test]
fn alternate_bind_falls_back_to_the_last_resort() {
    let x = Nomad::new(10).alternate_bind(divide_by_zero, divide_by_zero, |x| x * 2);

    assert_eq!(x.value(), Some(&20));
    assert_eq!(
        outcomes(&x),
        [StepOutcome::Replaced, StepOutcome::Replaced, StepOutcome::Completed]
    );

    let first_try = Nomad::new(10).alternate_bind(add_six, divide_by_zero, |_| 0);
    assert_eq!(first_try.value(), Some(&16));
    assert_eq!(outcomes(&first_try), [StepOutcome::Completed]);
}

#[test]
fn alternate_bind_does_not_leave_an_earlier_failure() {
    let x = (Nomad::new(1) >> divide_by_zero).alternate_bind(add_six, add_six, |_| 0);

    assert!(x.is_failed());
    assert_eq!(outcomes(&x), [StepOutcome::Failed, StepOutcome::Skipped]);
}

#[test]
fn inspect_failure_reports_the_captured_failure() {
    let mut handled = Vec::new();
    let x = (Nomad::new(3) >> divide_by_zero)
        .inspect_failure(|failure| handled.push(failure.message().to_string()));

    assert_eq!(handled, ["division by zero"]);
    let (state, call_graph) = x.into_parts();
    assert!(state.is_failed());
    assert_eq!(call_graph.len(), 1);
}
