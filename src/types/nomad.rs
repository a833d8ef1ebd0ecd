use core::fmt::Write;
use core::ops::{Shl, Shr};

use crate::types::alloc_type::{String, Vec};
use crate::types::encapsulate::Encapsulate;
use crate::types::failure::Failure;

/// What happened to a step recorded by a [`Nomad`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StepOutcome {
    /// The step ran and produced a value.
    Completed,
    /// The step ran and its failure was captured.
    Failed,
    /// The step failed and an alternative ran in its place.
    Replaced,
    /// The step was not run because an earlier step failed.
    Skipped,
}

/// One entry of a [`Nomad`] call graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Step {
    name: &'static str,
    outcome: StepOutcome,
}

impl Step {
    fn of<F>(outcome: StepOutcome) -> Self {
        Self { name: step_name::<F>(), outcome }
    }

    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    #[inline]
    pub const fn outcome(&self) -> StepOutcome {
        self.outcome
    }
}

/// Failure-capturing container that also records every step it is given.
///
/// A `Nomad` chains exactly like [`Encapsulate`], and keeps a call graph of the
/// steps in the order they were bound, including the ones skipped after a
/// failure. The graph tells which step failed and what ran before it, and can
/// be rendered as a Mermaid flowchart with [`generate_graph`](Self::generate_graph).
///
/// Steps are named after their Rust type: the function name for function items,
/// `{{closure}}` for closures. Use [`bind_named`](Self::bind_named) to label a
/// closure.
///
/// # Examples
///
/// ```
/// use monad_rail::types::{Nomad, StepOutcome};
/// use monad_rail::Failure;
///
/// fn add_six(x: i32) -> Result<i32, Failure> {
///     Ok(x + 6)
/// }
///
/// fn divide_by_zero(x: i32) -> Result<i32, Failure> {
///     x.checked_div(0).ok_or_else(|| Failure::msg("division by zero"))
/// }
///
/// let x = Nomad::new(4) >> add_six >> divide_by_zero >> add_six;
///
/// let outcomes: Vec<_> = x.call_graph().iter().map(|step| step.outcome()).collect();
/// assert_eq!(outcomes, [StepOutcome::Completed, StepOutcome::Failed, StepOutcome::Skipped]);
/// assert_eq!(x.failed_step().map(|step| step.name()), Some("divide_by_zero"));
/// assert_eq!(x.unwrap_or(42), 42);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Nomad<T, E = Failure> {
    state: Encapsulate<T, E>,
    call_graph: Vec<Step>,
}

impl<T> Nomad<T> {
    /// Starts a trail from an initial value, using [`Failure`] as the failure type.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::ok(value)
    }
}

impl<T, E> Nomad<T, E> {
    /// Starts a trail from an initial value with an arbitrary failure type.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { state: Encapsulate::ok(value), call_graph: Vec::new() }
    }

    /// Applies a fallible step and records it under its type name.
    ///
    /// The `>>` and `<<` operators are aliases for this method.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Nomad<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.bind_named(step_name::<F>(), f)
    }

    /// Applies a fallible step and records it under `name`.
    ///
    /// ```
    /// use monad_rail::types::Nomad;
    ///
    /// let x = Nomad::<i32, &str>::ok(2).bind_named("double", |x| Ok(x * 2));
    /// assert_eq!(x.call_graph()[0].name(), "double");
    /// assert_eq!(x.unwrap(), Ok(4));
    /// ```
    pub fn bind_named<U, F>(self, name: &'static str, f: F) -> Nomad<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let Self { state, mut call_graph } = self;
        let skipped = state.is_failed();
        let state = state.bind(f);
        let outcome = match (skipped, state.is_failed()) {
            (true, _) => StepOutcome::Skipped,
            (false, true) => StepOutcome::Failed,
            (false, false) => StepOutcome::Completed,
        };
        call_graph.push(Step { name, outcome });
        Nomad { state, call_graph }
    }

    /// Applies an infallible step and records it.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Nomad<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.bind_named(step_name::<F>(), |value| Ok(f(value)))
    }

    /// Applies `f`, retrying with `alternative` on the same input if `f` fails.
    ///
    /// A failed `f` is recorded as [`StepOutcome::Replaced`] and followed by the
    /// alternative's own entry.
    pub fn retry<U, F, A>(self, f: F, alternative: A) -> Nomad<U, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<U, E>,
        A: FnOnce(T) -> Result<U, E>,
    {
        let Self { state, mut call_graph } = self;
        match state.unwrap() {
            Ok(value) => match f(value.clone()) {
                Ok(next) => {
                    call_graph.push(Step::of::<F>(StepOutcome::Completed));
                    Nomad { state: Encapsulate::ok(next), call_graph }
                }
                Err(_) => {
                    call_graph.push(Step::of::<F>(StepOutcome::Replaced));
                    Nomad { state: Encapsulate::ok(value), call_graph }.bind(alternative)
                }
            },
            Err(error) => {
                call_graph.push(Step::of::<F>(StepOutcome::Skipped));
                Nomad { state: Encapsulate::failed(error), call_graph }
            }
        }
    }

    /// Like [`retry`](Self::retry), with an infallible `last_resort` that runs
    /// when the alternative fails too.
    ///
    /// Only a failure from before this step keeps the trail failed.
    ///
    /// ```
    /// use monad_rail::types::Nomad;
    ///
    /// let x = Nomad::<&str, &str>::ok("n/a").alternate_bind(
    ///     |s| s.parse::<i32>().map_err(|_| "not decimal"),
    ///     |s| i32::from_str_radix(s, 16).map_err(|_| "not hex"),
    ///     |_| -1,
    /// );
    /// assert_eq!(x.call_graph().len(), 3);
    /// assert_eq!(x.unwrap(), Ok(-1));
    /// ```
    pub fn alternate_bind<U, F, A, L>(self, f: F, alternative: A, last_resort: L) -> Nomad<U, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<U, E>,
        A: FnOnce(T) -> Result<U, E>,
        L: FnOnce(T) -> U,
    {
        let Self { state, mut call_graph } = self;
        let value = match state.unwrap() {
            Ok(value) => value,
            Err(error) => {
                call_graph.push(Step::of::<F>(StepOutcome::Skipped));
                return Nomad { state: Encapsulate::failed(error), call_graph };
            }
        };
        let attempt =
            Nomad { state: Encapsulate::ok(value.clone()), call_graph }.retry(f, alternative);
        if attempt.state.is_ok() {
            return attempt;
        }
        let Nomad { mut call_graph, .. } = attempt;
        if let Some(last) = call_graph.last_mut() {
            last.outcome = StepOutcome::Replaced;
        }
        Nomad { state: Encapsulate::ok(value), call_graph }.map(last_resort)
    }

    /// Calls `handler` with the captured failure, if any.
    #[inline]
    pub fn inspect_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E),
    {
        let Self { state, call_graph } = self;
        Self { state: state.inspect_failure(handler), call_graph }
    }

    /// The steps bound so far, oldest first.
    #[must_use]
    #[inline]
    pub fn call_graph(&self) -> &[Step] {
        &self.call_graph
    }

    /// The step whose failure the trail is carrying, if any.
    #[must_use]
    pub fn failed_step(&self) -> Option<&Step> {
        self.call_graph.iter().rev().find(|step| step.outcome == StepOutcome::Failed)
    }

    /// Renders the call graph as a top-down Mermaid flowchart.
    ///
    /// Node `A{i}` is the `i`-th step, linked to the one before it.
    ///
    /// ```
    /// use monad_rail::types::Nomad;
    ///
    /// let x = Nomad::<i32, &str>::ok(1)
    ///     .bind_named("load", |x| Ok(x + 1))
    ///     .bind_named("store", |x| Ok(x * 2));
    /// assert_eq!(x.generate_graph(), "graph TD\nA0[load]\nA1[store]\nA0 --> A1\n");
    /// ```
    #[must_use]
    pub fn generate_graph(&self) -> String {
        let mut graph = String::from("graph TD\n");
        for (index, step) in self.call_graph.iter().enumerate() {
            let _ = writeln!(graph, "A{}[{}]", index, step.name);
            if index > 0 {
                let _ = writeln!(graph, "A{} --> A{}", index - 1, index);
            }
        }
        graph
    }

    /// Borrows the held value; `None` once a step has failed.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.state.value()
    }

    /// Borrows the captured failure, if any.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&E> {
        self.state.failure()
    }

    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Returns the held value, or re-signals the captured failure as `Err`.
    #[inline]
    pub fn unwrap(self) -> Result<T, E> {
        self.state.unwrap()
    }

    /// Returns the held value, or `default` if a step failed.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.state.unwrap_or(default)
    }

    /// Splits the trail into its outcome and its call graph.
    #[inline]
    pub fn into_parts(self) -> (Encapsulate<T, E>, Vec<Step>) {
        (self.state, self.call_graph)
    }
}

/// Short name of a step type: the last path segment without generic arguments.
fn step_name<F>() -> &'static str {
    let full = core::any::type_name::<F>();
    let path = strip_generics(full);
    path.rsplit("::").next().unwrap_or(path)
}

fn strip_generics(name: &str) -> &str {
    if !name.ends_with('>') {
        return name;
    }
    let mut depth = 0usize;
    for (index, byte) in name.bytes().enumerate().rev() {
        match byte {
            b'>' => depth += 1,
            b'<' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &name[..index];
                }
            }
            _ => {}
        }
    }
    name
}

impl<T, E> From<Encapsulate<T, E>> for Nomad<T, E> {
    #[inline]
    fn from(state: Encapsulate<T, E>) -> Self {
        Self { state, call_graph: Vec::new() }
    }
}

impl<T, U, E, F> Shr<F> for Nomad<T, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Nomad<U, E>;

    #[inline]
    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, U, E, F> Shl<F> for Nomad<T, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Nomad<U, E>;

    #[inline]
    fn shl(self, f: F) -> Self::Output {
        self.bind(f)
    }
}
