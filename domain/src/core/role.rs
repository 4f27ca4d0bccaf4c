//! Role value object representing an executive persona

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Executive roles on the council (Value Object)
///
/// This is a domain concept representing the personas that review a
/// document independently in each deliberation stage. The canonical
/// four-role council is [`Role::default_council`]; arbitrary personas
/// are supported through [`Role::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Chief Product Officer
    Cpo,
    /// Chief Technology Officer
    Cto,
    /// Chief Operating Officer
    Coo,
    /// Chief Information Security Officer
    Ciso,
    /// Custom role
    Custom(String),
}

impl Role {
    /// Get the canonical name for this role
    pub fn as_str(&self) -> &str {
        match self {
            Role::Cpo => "CPO",
            Role::Cto => "CTO",
            Role::Coo => "COO",
            Role::Ciso => "CISO",
            Role::Custom(s) => s,
        }
    }

    /// The canonical ordered council: CPO, CTO, COO, CISO.
    ///
    /// Stage call order and result order always follow this sequence.
    pub fn default_council() -> Vec<Role> {
        vec![Role::Cpo, Role::Cto, Role::Coo, Role::Ciso]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "CPO" => Role::Cpo,
            "CTO" => Role::Cto,
            "COO" => Role::Coo,
            "CISO" => Role::Ciso,
            _ => Role::Custom(s.to_string()),
        })
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in Role::default_council() {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_for_builtins() {
        let parsed: Role = "cto".parse().unwrap();
        assert_eq!(parsed, Role::Cto);
        assert_eq!(parsed.as_str(), "CTO");
    }

    #[test]
    fn test_custom_role() {
        let role: Role = "CFO".parse().unwrap();
        assert_eq!(role, Role::Custom("CFO".to_string()));
        assert_eq!(role.to_string(), "CFO");
    }

    #[test]
    fn test_default_council_order() {
        let roles = Role::default_council();
        assert_eq!(roles, vec![Role::Cpo, Role::Cto, Role::Coo, Role::Ciso]);
    }
}
