use crate::env::{ConfigError, lookup, parsed_or};

/// bcrypt work factor used when `BCRYPT_COST` is unset.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordConfig {
    pub cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(lookup("BCRYPT_COST"))
    }

    pub fn from_value(cost: Option<String>) -> Result<Self, ConfigError> {
        let cost = parsed_or("BCRYPT_COST", cost, DEFAULT_BCRYPT_COST)?;

        // bcrypt only accepts 4..=31
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                reason: format!("{} is outside 4..=31", cost),
            });
        }

        Ok(Self { cost })
    }
}
