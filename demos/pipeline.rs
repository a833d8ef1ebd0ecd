use std::fmt;

use monad_rail::{Encapsulate, Failure, Monad, Nomad};

#[derive(Debug)]
struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("division by zero")
    }
}

impl std::error::Error for DivisionByZero {}

fn add_six(x: i32) -> Result<i32, Failure> {
    Ok(x + 6)
}

fn divide_by_zero(x: i32) -> Result<i32, Failure> {
    Ok(x.checked_div(0).ok_or(DivisionByZero)?)
}

fn subtract_two(x: i32) -> Result<i32, Failure> {
    Ok(x - 2)
}

fn main() {
    let plain = Monad::new(4) >> (|x: i32| x + 6) >> (|x: i32| x - 2);
    println!("plain chain => {plain}");

    let captured = Encapsulate::new(4) >> add_six >> divide_by_zero >> subtract_two;
    match captured.failure() {
        Some(failure) => eprintln!("captured => {failure:#}"),
        None => println!("value => {:?}", captured.value()),
    }
    println!("unwrap_or(42) => {}", captured.unwrap_or(42));

    let trail = Nomad::new(4) >> add_six >> divide_by_zero >> subtract_two;
    if let Some(step) = trail.failed_step() {
        eprintln!("failed at step `{}`", step.name());
    }
    println!("{}", trail.generate_graph());
}
