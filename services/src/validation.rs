//! Ordered validation chains.
//!
//! A chain is a fixed list of named validators run front to back against one
//! context value. The first failing validator ends the run; later validators
//! never see the request.

use crate::error::ServiceError;

/// A single check over a request context.
pub type Validator<C> = fn(&C) -> Result<(), ServiceError>;

/// A validator together with the name it is logged under.
pub type Step<C> = (&'static str, Validator<C>);

pub struct Chain<C: 'static> {
    name: &'static str,
    steps: &'static [Step<C>],
}

impl<C: 'static> Chain<C> {
    pub const fn new(name: &'static str, steps: &'static [Step<C>]) -> Self {
        Self { name, steps }
    }

    /// Names of the steps in run order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(name, _)| *name).collect()
    }

    /// Runs every step in order, stopping at the first failure.
    pub fn run(&self, ctx: &C) -> Result<(), ServiceError> {
        for (step, validate) in self.steps {
            if let Err(err) = validate(ctx) {
                log::debug!("{} rejected at {}: {}", self.name, step, err);
                return Err(err);
            }
        }
        Ok(())
    }
}
