//! `fieldcheck-rules` -- the standard rule set.
//!
//! Concrete [`Rule`](fieldcheck_core::Rule) implementations and
//! [`standard_registry`], which registers each of them under its short name:
//!
//! | Name         | Parameters        | Rule            |
//! |--------------|-------------------|-----------------|
//! | `required`   | --                | [`Required`]    |
//! | `number`     | --                | [`Number`]      |
//! | `integer`    | --                | [`Integer`]     |
//! | `boolean`    | --                | [`Boolean`]     |
//! | `string`     | --                | [`Text`]        |
//! | `email`      | --                | [`Email`]       |
//! | `min_length` | `[len]`           | [`MinLength`]   |
//! | `max_length` | `[len]`           | [`MaxLength`]   |
//! | `min`        | `[n]`             | [`Min`]         |
//! | `max`        | `[n]`             | [`Max`]         |
//! | `between`    | `[min, max]`      | [`Between`]     |
//! | `in`         | `[v1, v2, ...]`   | [`OneOf`]       |
//! | `regex`      | `[pattern]`       | [`Pattern`]     |
//! | `same`       | `[other_field]`   | [`Same`]        |
//!
//! Every rule except `required` lets `null` through, so optional fields only
//! need `required` when they must be filled in.

mod params;

pub mod fields;
pub mod format;
pub mod presence;
pub mod range;

use std::sync::Arc;

use fieldcheck_core::{RuleRegistry, SharedRule};

pub use fields::Same;
pub use format::{Email, OneOf, Pattern};
pub use presence::{Boolean, Integer, Number, Required, Text};
pub use range::{Between, Max, MaxLength, Min, MinLength};

/// A registry holding every standard rule.
pub fn standard_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    register_standard(&mut registry);
    registry
}

/// Add the standard rules to an existing registry. Entries already present
/// under the same names are replaced.
pub fn register_standard(registry: &mut RuleRegistry) {
    registry
        .register("required", |p| unit(p, Required))
        .register("number", |p| unit(p, Number))
        .register("integer", |p| unit(p, Integer))
        .register("boolean", |p| unit(p, Boolean))
        .register("string", |p| unit(p, Text))
        .register("email", |p| unit(p, Email))
        .register("min_length", |p| {
            params::expect_count(p, 1)?;
            Ok(Arc::new(MinLength(params::length(p, 0)?)) as SharedRule)
        })
        .register("max_length", |p| {
            params::expect_count(p, 1)?;
            Ok(Arc::new(MaxLength(params::length(p, 0)?)) as SharedRule)
        })
        .register("min", |p| {
            params::expect_count(p, 1)?;
            Ok(Arc::new(Min(params::number(p, 0)?)) as SharedRule)
        })
        .register("max", |p| {
            params::expect_count(p, 1)?;
            Ok(Arc::new(Max(params::number(p, 0)?)) as SharedRule)
        })
        .register("between", |p| {
            params::expect_count(p, 2)?;
            let rule = Between::new(params::number(p, 0)?, params::number(p, 1)?)?;
            Ok(Arc::new(rule) as SharedRule)
        })
        .register("in", |p| {
            if p.is_empty() {
                return Err("expected at least one allowed value".to_string());
            }
            Ok(Arc::new(OneOf(p.to_vec())) as SharedRule)
        })
        .register("regex", |p| {
            params::expect_count(p, 1)?;
            let rule = Pattern::new(&params::string(p, 0)?).map_err(|e| e.to_string())?;
            Ok(Arc::new(rule) as SharedRule)
        })
        .register("same", |p| {
            params::expect_count(p, 1)?;
            Ok(Arc::new(Same::new(params::string(p, 0)?)) as SharedRule)
        });
}

/// Factory body for rules that take no parameters.
fn unit<R: fieldcheck_core::Rule + 'static>(
    params: &[serde_json::Value],
    rule: R,
) -> Result<SharedRule, String> {
    params::expect_count(params, 0)?;
    Ok(Arc::new(rule))
}
