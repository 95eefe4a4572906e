//! SQL dialect selection
//!
//! The dialect is fixed at deployment time. Unknown names are rejected when
//! the configuration is parsed so no statement is ever built for a guessed
//! dialect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::QueryError;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// MySQL / MariaDB, `?` placeholders
    MySql,
    /// PostgreSQL, `$n` placeholders
    Postgres,
}

impl Dialect {
    /// Canonical dialect name
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }

    /// Placeholder for the 1-based bind position `n`
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Dialect::MySql => "?".to_string(),
            Dialect::Postgres => format!("${}", n),
        }
    }

    /// Default server port for the dialect
    pub fn default_port(&self) -> u16 {
        match self {
            Dialect::MySql => 3306,
            Dialect::Postgres => 5432,
        }
    }

    /// Whether a connection URL scheme belongs to this dialect
    pub fn accepts_scheme(&self, scheme: &str) -> bool {
        match self {
            Dialect::MySql => scheme.eq_ignore_ascii_case("mysql"),
            Dialect::Postgres => {
                scheme.eq_ignore_ascii_case("postgres") || scheme.eq_ignore_ascii_case("postgresql")
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            _ => Err(QueryError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_dialects() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::Postgres);
    }

    #[test]
    fn test_unknown_dialect_fails_closed() {
        let err = "sqlserver".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, QueryError::UnknownDialect(ref name) if name == "sqlserver"));
        assert!("".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Dialect::MySql.placeholder(3), "?");
        assert_eq!(Dialect::Postgres.placeholder(3), "$3");
    }

    #[test]
    fn test_scheme_matching() {
        assert!(Dialect::MySql.accepts_scheme("mysql"));
        assert!(!Dialect::MySql.accepts_scheme("postgres"));
        assert!(Dialect::Postgres.accepts_scheme("postgresql"));
        assert!(!Dialect::Postgres.accepts_scheme("sqlite"));
    }

    #[test]
    fn test_serde_round_trip_rejects_unknown() {
        let dialect: Dialect = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(dialect, Dialect::Postgres);
        assert_eq!(serde_json::to_string(&Dialect::MySql).unwrap(), "\"mysql\"");
        assert!(serde_json::from_str::<Dialect>("\"oracle\"").is_err());
    }
}
