//! Reader monad - computations that depend on a read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step without passing it explicitly. The
//! validation layer uses `Reader<Context, Validation<A>>` so that validators
//! stay unaware of where in a structure they run until the caller supplies
//! the context path.
//!
//! # Note on Type Classes
//!
//! Reader provides `fmap`, `flat_map` and `map2` as inherent methods rather
//! than implementing the `Functor`/`Monad` traits: the wrapped function lives
//! behind `Rc<dyn Fn>`, which needs `'static` bounds the traits do not carry.
//!
//! # Laws
//!
//! ```text
//! Reader::pure(a).flat_map(f) == f(a)
//! m.flat_map(Reader::pure) == m
//! Reader::local(|r| r, m) == m
//! Reader::ask().run(r) == r
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .map2(Reader::asks(|config: Config| config.port), |host, port| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".into(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that reads an environment of type `R` and produces an `A`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    ///
    /// A reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment and yields `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// A reader that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs this reader against an environment rewritten by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = Reader::local(|environment: i32| environment + 1, reader);
    /// assert_eq!(shifted.run(20), 42);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let inner = computation.run_function;
        Self::new(move |environment| inner(modifier(environment)))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        Reader::new(move |environment| function(inner(environment)))
    }

    /// Feeds the result into a function producing the next reader; both
    /// readers see the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let inner = self.run_function;
        Reader::new(move |environment: R| {
            let value = inner(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs two independent readers against the same environment and
    /// combines their results.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |environment: R| {
            let a = first(environment.clone());
            let b = second(environment);
            function(a, b)
        })
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// A reader that yields the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Debug for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Reader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ask_returns_environment() {
        assert_eq!(Reader::<i32, i32>::ask().run(7), 7);
    }

    #[rstest]
    fn pure_ignores_environment() {
        let reader: Reader<i32, &str> = Reader::pure("constant");
        assert_eq!(reader.run(0), "constant");
        assert_eq!(reader.run(100), "constant");
    }

    #[rstest]
    fn flat_map_shares_environment() {
        let reader = Reader::<i32, i32>::ask()
            .flat_map(|value| Reader::new(move |environment: i32| value + environment));
        assert_eq!(reader.run(10), 20);
    }

    #[rstest]
    fn local_identity_is_noop() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 3);
        let localised = Reader::local(|environment| environment, reader.clone());
        assert_eq!(localised.run(5), reader.run(5));
    }

    #[rstest]
    fn fmap_composition_law() {
        let reader: Reader<i32, i32> = Reader::ask();
        let sequential = reader.clone().fmap(|n| n + 1).fmap(|n| n * 2);
        let fused = reader.fmap(|n| (n + 1) * 2);
        assert_eq!(sequential.run(4), fused.run(4));
    }
}
