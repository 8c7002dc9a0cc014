//! Allocation template model
//!
//! A template is an ordered list of entries, each naming a category and a
//! rule for computing its share of the month's money, plus an advisory
//! `remainder` field. Entries are kept in their raw YAML form when loaded and
//! only validated when a resolution asks for them, so a template with a bad
//! entry still loads.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{TemplateError, TemplateResult};

/// Key names used in template files
pub mod keys {
    pub const REMAINDER: &str = "remainder";
    pub const CATEGORIES: &str = "categories";
    pub const CATEGORY: &str = "category";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
}

/// The recognized entry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Fixed,
    Percent,
}

impl RuleKind {
    /// The spelling used in template files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percent => "percent",
        }
    }
}

impl FromStr for RuleKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "percent" => Ok(Self::Percent),
            other => Err(TemplateError::TemplateFormat(format!(
                "unrecognized entry type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How an entry's amount is computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllocationRule {
    /// A literal amount
    Fixed(Money),
    /// A percentage of the total; values outside 0..=100 are accepted as-is
    Percent(f64),
}

impl AllocationRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Fixed(_) => RuleKind::Fixed,
            Self::Percent(_) => RuleKind::Percent,
        }
    }

    /// Compute this rule's amount against a total budget
    ///
    /// Percentages are evaluated as `value * total / 100.0` in floating point
    /// and rounded to the nearest milli-unit. Returns `None` when the result
    /// does not fit in a [`Money`].
    pub fn amount_for(&self, total: Money) -> Option<Money> {
        match *self {
            Self::Fixed(amount) => Some(amount),
            Self::Percent(percent) => Money::from_decimal(percent * total.to_decimal() / 100.0),
        }
    }
}

impl fmt::Display for AllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(amount) => write!(f, "fixed {}", amount),
            Self::Percent(percent) => write!(f, "{}%", percent),
        }
    }
}

/// One validated template line
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub category_name: String,
    pub rule: AllocationRule,
}

impl TemplateEntry {
    pub fn fixed(category_name: impl Into<String>, amount: Money) -> Self {
        Self {
            category_name: category_name.into(),
            rule: AllocationRule::Fixed(amount),
        }
    }

    pub fn percent(category_name: impl Into<String>, percent: f64) -> Self {
        Self {
            category_name: category_name.into(),
            rule: AllocationRule::Percent(percent),
        }
    }

    /// Validate a raw template record
    ///
    /// Keys are checked in the order `category`, `type`, `value`; the first
    /// problem found is reported.
    pub fn from_value(raw: &Value) -> TemplateResult<Self> {
        let map = raw.as_mapping().ok_or_else(|| {
            TemplateError::TemplateFormat("category entry is not a mapping".into())
        })?;

        let category_name = match required(map, keys::CATEGORY)? {
            Value::String(name) => name.clone(),
            _ => {
                return Err(TemplateError::TemplateFormat(
                    "'category' must be a string".into(),
                ))
            }
        };

        let kind: RuleKind = match required(map, keys::TYPE)? {
            Value::String(kind) => kind.parse()?,
            other => {
                return Err(TemplateError::TemplateFormat(format!(
                    "unrecognized entry type '{}' for category '{}'",
                    describe(other),
                    category_name
                )))
            }
        };

        let value = required(map, keys::VALUE)?
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                TemplateError::TemplateFormat(format!(
                    "'value' for category '{}' must be a finite number",
                    category_name
                ))
            })?;

        let rule = match kind {
            RuleKind::Fixed => AllocationRule::Fixed(
                Money::from_decimal(value)
                    .ok_or_else(|| TemplateError::out_of_range(&category_name))?,
            ),
            RuleKind::Percent => AllocationRule::Percent(value),
        };

        Ok(Self {
            category_name,
            rule,
        })
    }

    /// Convert back to the raw record shape written to template files
    pub fn to_value(&self) -> Value {
        let value = match self.rule {
            AllocationRule::Fixed(amount) if amount.truncate_to_units() == amount => {
                Value::Number(amount.units().into())
            }
            AllocationRule::Fixed(amount) => Value::Number(amount.to_decimal().into()),
            AllocationRule::Percent(percent) => Value::Number(percent.into()),
        };

        let mut map = Mapping::new();
        map.insert(keys::CATEGORY.into(), self.category_name.clone().into());
        map.insert(keys::TYPE.into(), self.rule.kind().as_str().into());
        map.insert(keys::VALUE.into(), value);
        Value::Mapping(map)
    }
}

fn required<'a>(map: &'a Mapping, key: &str) -> TemplateResult<&'a Value> {
    map.get(key).ok_or_else(|| TemplateError::missing_key(key))
}

fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "?".to_string())
}

/// A parsed allocation template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Template {
    /// Advisory remainder rule; carried through but not used in computation
    pub remainder: Option<Value>,

    /// Raw entries in file order
    pub categories: Vec<Value>,
}

impl Template {
    /// Build a template from validated entries
    pub fn from_entries(entries: &[TemplateEntry]) -> Self {
        Self {
            remainder: None,
            categories: entries.iter().map(TemplateEntry::to_value).collect(),
        }
    }

    /// Parse template YAML
    ///
    /// Only the top-level shape is checked here: the document must be a
    /// mapping with a `categories` list.
    pub fn from_yaml_str(yaml: &str) -> TemplateResult<Self> {
        if yaml.trim().is_empty() {
            return Err(TemplateError::missing_key(keys::CATEGORIES));
        }

        let doc: Value = serde_yaml::from_str(yaml)?;

        let map = match doc {
            Value::Mapping(map) => map,
            Value::Null => return Err(TemplateError::missing_key(keys::CATEGORIES)),
            _ => {
                return Err(TemplateError::TemplateFormat(
                    "template must be a mapping".into(),
                ))
            }
        };

        let categories = match map.get(keys::CATEGORIES) {
            None => return Err(TemplateError::missing_key(keys::CATEGORIES)),
            Some(Value::Sequence(entries)) => entries.clone(),
            Some(Value::Null) => Vec::new(),
            Some(_) => {
                return Err(TemplateError::TemplateFormat(
                    "'categories' must be a list".into(),
                ))
            }
        };

        Ok(Self {
            remainder: map.get(keys::REMAINDER).filter(|v| !v.is_null()).cloned(),
            categories,
        })
    }

    /// Serialize to template YAML
    pub fn to_yaml_string(&self) -> TemplateResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every entry, failing on the first malformed one
    pub fn entries(&self) -> TemplateResult<Vec<TemplateEntry>> {
        self.categories.iter().map(TemplateEntry::from_value).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
