//! Pizza builder: a consuming builder whose `build` validates and returns a
//! `Result`. Reporting success or failure is the caller's job.
//!
//! Run with: cargo run --bin pizza_builder

use std::fmt;

use crate::error::BuildError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    size: String,
    crust: String,
    toppings: Vec<String>,
}

impl Pizza {
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::new()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza(size={}, crust={}, toppings=[{}])",
            self.size,
            self.crust,
            self.toppings.join(", ")
        )
    }
}

#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until build() is called"]
pub struct PizzaBuilder {
    size: Option<String>,
    crust: Option<String>,
    toppings: Vec<String>,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn crust(mut self, crust: impl Into<String>) -> Self {
        self.crust = Some(crust.into());
        self
    }

    // Order is preserved; duplicates are allowed (double cheese).
    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    pub fn build(self) -> Result<Pizza, BuildError> {
        let size = self
            .size
            .filter(|s| !s.trim().is_empty())
            .ok_or(BuildError::MissingField("size"))?;
        let crust = self
            .crust
            .filter(|c| !c.trim().is_empty())
            .ok_or(BuildError::MissingField("crust"))?;
        if self.toppings.iter().any(|t| t.trim().is_empty()) {
            return Err(BuildError::EmptyTopping);
        }

        Ok(Pizza {
            size,
            crust,
            toppings: self.toppings,
        })
    }
}
