//! Templates and substitution tokens.
//!
//! Both templates are opaque text. Substitution is purely textual: each
//! [`Token`] placeholder is replaced verbatim with a decimal value, and nothing
//! else in the template is interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Instance;

/// A literal placeholder in the service template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Index,
    IpIndex,
    PortIndex,
}

impl Token {
    /// All tokens, in substitution order.
    pub const ALL: [Token; 3] = [Token::Index, Token::IpIndex, Token::PortIndex];

    /// The literal text replaced in the template.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Index => "{index}",
            Self::IpIndex => "{ip_index}",
            Self::PortIndex => "{port_index}",
        }
    }

    /// The value this token takes for `instance`.
    pub const fn value_for(self, instance: &Instance) -> u32 {
        match self {
            Self::Index => instance.index,
            Self::IpIndex => instance.ip_index,
            Self::PortIndex => instance.port_index,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Static text written once at the top of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTemplate(String);

impl BaseTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Text block repeated once per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTemplate(String);

impl ServiceTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Tokens that occur at least once in the template, in substitution order.
    pub fn tokens(&self) -> Vec<Token> {
        Token::ALL
            .into_iter()
            .filter(|t| self.0.contains(t.placeholder()))
            .collect()
    }

    /// Substitute every token for `instance`.
    ///
    /// No replacement value contains a placeholder, so the order of the
    /// three passes never changes the result.
    pub fn render(&self, instance: &Instance) -> String {
        Token::ALL.into_iter().fold(self.0.clone(), |text, token| {
            text.replace(token.placeholder(), &token.value_for(instance).to_string())
        })
    }
}
