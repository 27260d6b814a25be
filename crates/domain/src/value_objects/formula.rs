//! Roll formulas for rollable sheet fields
//!
//! Supports formulas like "1d20+@STR", "2d6-1", "d8 + @level + 2": dice terms,
//! integer constants and `@name` references to the record's numeric
//! attributes, joined by `+` and `-`.
//!
//! Randomness is injected as a closure so the domain stays free of an RNG.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_DICE_COUNT: u32 = 100;
const MAX_DIE_SIZE: u32 = 1000;

/// Error when parsing or evaluating a roll formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("Empty roll formula")]
    Empty,
    #[error("Unexpected token in roll formula: '{0}'")]
    UnexpectedToken(String),
    #[error("Invalid dice term: {0}")]
    InvalidDice(String),
    #[error("Unknown attribute in roll formula: @{0}")]
    UnknownAttribute(String),
    #[error("Roll total overflowed")]
    Overflow,
}

/// One operand of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormulaTerm {
    Dice { count: u32, sides: u32 },
    Constant { value: i64 },
    Attribute { name: String },
}

impl fmt::Display for FormulaTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, sides } => write!(f, "{}d{}", count, sides),
            Self::Constant { value } => write!(f, "{}", value),
            Self::Attribute { name } => write!(f, "@{}", name),
        }
    }
}

/// A term with its sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTerm {
    pub negative: bool,
    pub term: FormulaTerm,
}

/// A parsed roll formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollFormula {
    terms: Vec<SignedTerm>,
}

/// A single die result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    pub sides: u32,
    pub value: u32,
}

/// Result of evaluating a formula against a roll context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaResult {
    /// The formula with attributes replaced by their values, e.g. "1d20 + 3".
    pub resolved: String,
    pub dice: Vec<DieRoll>,
    pub total: i64,
}

impl RollFormula {
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(FormulaError::Empty);
        }

        let mut terms = Vec::new();
        let mut negative = false;
        let mut current = String::new();
        for (pos, c) in compact.char_indices() {
            match c {
                '+' | '-' => {
                    if current.is_empty() {
                        // Leading sign on the first term only
                        if pos != 0 {
                            return Err(FormulaError::UnexpectedToken(c.to_string()));
                        }
                    } else {
                        terms.push(SignedTerm {
                            negative,
                            term: parse_term(&current)?,
                        });
                        current.clear();
                    }
                    negative = c == '-';
                }
                _ => current.push(c),
            }
        }
        if current.is_empty() {
            return Err(FormulaError::UnexpectedToken(compact));
        }
        terms.push(SignedTerm {
            negative,
            term: parse_term(&current)?,
        });

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[SignedTerm] {
        &self.terms
    }

    /// Evaluate, rolling each die with `roll_die(sides)` (expected 1..=sides).
    pub fn evaluate(
        &self,
        context: &BTreeMap<String, i64>,
        mut roll_die: impl FnMut(u32) -> u32,
    ) -> Result<FormulaResult, FormulaError> {
        let mut total: i64 = 0;
        let mut dice = Vec::new();
        let mut resolved = String::new();

        for (i, signed) in self.terms.iter().enumerate() {
            let value = match &signed.term {
                FormulaTerm::Dice { count, sides } => {
                    let mut sum: i64 = 0;
                    for _ in 0..*count {
                        let value = roll_die(*sides).clamp(1, *sides);
                        dice.push(DieRoll {
                            sides: *sides,
                            value,
                        });
                        sum += i64::from(value);
                    }
                    sum
                }
                FormulaTerm::Constant { value } => *value,
                FormulaTerm::Attribute { name } => *context
                    .get(name)
                    .ok_or_else(|| FormulaError::UnknownAttribute(name.clone()))?,
            };

            total = if signed.negative {
                total.checked_sub(value)
            } else {
                total.checked_add(value)
            }
            .ok_or(FormulaError::Overflow)?;

            let shown = match &signed.term {
                FormulaTerm::Attribute { .. } => value.to_string(),
                other => other.to_string(),
            };
            match (i, signed.negative) {
                (0, false) => resolved.push_str(&shown),
                (0, true) => resolved.push_str(&format!("-{}", shown)),
                (_, false) => resolved.push_str(&format!(" + {}", shown)),
                (_, true) => resolved.push_str(&format!(" - {}", shown)),
            }
        }

        Ok(FormulaResult {
            resolved,
            dice,
            total,
        })
    }
}

impl fmt::Display for RollFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, signed) in self.terms.iter().enumerate() {
            match (i, signed.negative) {
                (0, false) => write!(f, "{}", signed.term)?,
                (0, true) => write!(f, "-{}", signed.term)?,
                (_, false) => write!(f, " + {}", signed.term)?,
                (_, true) => write!(f, " - {}", signed.term)?,
            }
        }
        Ok(())
    }
}

fn parse_term(token: &str) -> Result<FormulaTerm, FormulaError> {
    if let Some(name) = token.strip_prefix('@') {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(FormulaError::UnexpectedToken(token.to_string()));
        }
        return Ok(FormulaTerm::Attribute {
            name: name.to_string(),
        });
    }

    let lower = token.to_ascii_lowercase();
    if let Some((count, sides)) = lower.split_once('d') {
        let count: u32 = if count.is_empty() {
            1 // "d20" means "1d20"
        } else {
            count
                .parse()
                .map_err(|_| FormulaError::InvalidDice(token.to_string()))?
        };
        let sides: u32 = sides
            .parse()
            .map_err(|_| FormulaError::InvalidDice(token.to_string()))?;
        if count == 0 || count > MAX_DICE_COUNT || !(2..=MAX_DIE_SIZE).contains(&sides) {
            return Err(FormulaError::InvalidDice(token.to_string()));
        }
        return Ok(FormulaTerm::Dice { count, sides });
    }

    token
        .parse::<i64>()
        .map(|value| FormulaTerm::Constant { value })
        .map_err(|_| FormulaError::UnexpectedToken(token.to_string()))
}
