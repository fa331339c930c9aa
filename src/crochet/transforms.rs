//! Composable stage pipeline
//!
//! The streaming [`LineProcessor`](crate::crochet::pipeline::LineProcessor) is what turns lines
//! into display tokens. This module exposes the same stages as whole-line, materializing steps
//! that can be chained and stopped at any point, which is what stage dumps and tests want.
//!
//! # The `Runnable` Trait
//!
//! Any type implementing `Runnable<I, O>` transforms an `I` into an `O`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O>;
//! }
//! ```
//!
//! # The `Transform<I, O>` Type
//!
//! A wrapper that enables composition. `.then()` chains a stage whose input type matches the
//! current output type:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenization::default())   // String → Vec<Command>
//!     .then(Expansion);                // Vec<Command> → Vec<Stitch>
//! ```
//!
//! Pre-built pipelines live in [`standard`] as lazily initialized statics.

pub mod stages;
pub mod standard;

use crate::crochet::error::Result;

/// Anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O>;
}

/// A composable transformation from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage onto this transform's output
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crochet::error::CrochetError;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> Result<i32> {
            Ok(input * 2)
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn run(&self, input: i32) -> Result<String> {
            Ok(input.to_string())
        }
    }

    struct FailingStage;
    impl Runnable<i32, i32> for FailingStage {
        fn run(&self, input: i32) -> Result<i32> {
            Err(CrochetError::unknown_input(input.to_string()))
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|x: i32| Ok(x * 2));
        assert_eq!(transform.run(5).unwrap(), 10);
    }

    #[test]
    fn test_type_changing_stage() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(IntToString);
        assert_eq!(transform.run(5).unwrap(), "10");
    }

    #[test]
    fn test_error_propagation() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(FailingStage)
            .then(DoubleNumber);
        assert_eq!(
            transform.run(5).unwrap_err(),
            CrochetError::UnknownInput("10".into())
        );
    }

    #[test]
    fn test_transform_as_stage() {
        let inner = Transform::from_fn(|x: i32| Ok(x)).then(DoubleNumber);
        let outer = Transform::from_fn(|x: i32| Ok(x + 1)).then(inner);
        assert_eq!(outer.run(1).unwrap(), 4);
    }
}
