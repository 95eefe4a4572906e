//! # Query Builder
//!
//! Produces parameterized statement text in the dialect's native placeholder
//! syntax together with the ordered bind values. Values are never
//! interpolated into the SQL text.

use tracing::trace;

use crate::model::{Company, COLUMNS, TABLE};

use super::dialect::Dialect;

/// A single bind value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

/// Statement text plus binds in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Operation to build a statement for
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    /// Insert a full record
    Create(&'a Company),
    /// Rows with `Company_ID > after`, ascending, optionally bounded
    List { after: i64, limit: Option<i64> },
    /// Single row lookup
    Get { id: i64 },
    /// Overwrite every column of the row keyed by `id`
    Update { id: i64, company: &'a Company },
    /// Remove the row keyed by `id`
    Delete { id: i64 },
}

impl Operation<'_> {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Create(_) => "create",
            Operation::List { .. } => "list",
            Operation::Get { .. } => "get",
            Operation::Update { .. } => "update",
            Operation::Delete { .. } => "delete",
        }
    }
}

/// Builds statements for one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBuilder {
    dialect: Dialect,
}

impl QueryBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Build the statement for an operation
    pub fn build(&self, op: Operation<'_>) -> Statement {
        let stmt = match op {
            Operation::Create(company) => self.insert(company),
            Operation::List { after, limit } => self.list(after, limit),
            Operation::Get { id } => self.get(id),
            Operation::Update { id, company } => self.update(id, company),
            Operation::Delete { id } => self.delete(id),
        };
        trace!(operation = op.kind(), dialect = %self.dialect, binds = stmt.binds.len(), "Built statement");
        stmt
    }

    fn insert(&self, company: &Company) -> Statement {
        let placeholders: Vec<String> = (1..=COLUMNS.len())
            .map(|n| self.dialect.placeholder(n))
            .collect();

        Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                TABLE,
                COLUMNS.join(", "),
                placeholders.join(", ")
            ),
            binds: company_binds(company),
        }
    }

    fn list(&self, after: i64, limit: Option<i64>) -> Statement {
        let mut sql = format!(
            "{} WHERE {} > {} ORDER BY {} ASC",
            select_clause(),
            key_column(),
            self.dialect.placeholder(1),
            key_column()
        );
        let mut binds = vec![BindValue::Int(after)];

        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", self.dialect.placeholder(2)));
            binds.push(BindValue::Int(limit));
        }

        Statement { sql, binds }
    }

    fn get(&self, id: i64) -> Statement {
        Statement {
            sql: format!(
                "{} WHERE {} = {}",
                select_clause(),
                key_column(),
                self.dialect.placeholder(1)
            ),
            binds: vec![BindValue::Int(id)],
        }
    }

    fn update(&self, id: i64, company: &Company) -> Statement {
        let assignments: Vec<String> = COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = {}", column, self.dialect.placeholder(i + 1)))
            .collect();

        let mut binds = company_binds(company);
        binds.push(BindValue::Int(id));

        Statement {
            sql: format!(
                "UPDATE {} SET {} WHERE {} = {}",
                TABLE,
                assignments.join(", "),
                key_column(),
                self.dialect.placeholder(COLUMNS.len() + 1)
            ),
            binds,
        }
    }

    fn delete(&self, id: i64) -> Statement {
        Statement {
            sql: format!(
                "DELETE FROM {} WHERE {} = {}",
                TABLE,
                key_column(),
                self.dialect.placeholder(1)
            ),
            binds: vec![BindValue::Int(id)],
        }
    }
}

fn key_column() -> &'static str {
    COLUMNS[1]
}

fn select_clause() -> String {
    format!("SELECT {} FROM {}", COLUMNS.join(", "), TABLE)
}

fn company_binds(company: &Company) -> Vec<BindValue> {
    let mut binds = Vec::with_capacity(COLUMNS.len() + 1);
    binds.push(BindValue::Int(company.client_id));
    binds.push(BindValue::Int(company.company_id));
    binds.extend(company.text_fields().into_iter().map(BindValue::from));
    binds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Company {
        Company {
            client_id: 42,
            company_id: 5,
            company_name: "Acme".into(),
            asic: "004 085 616".into(),
            flight_risk_status: "High".into(),
            recruit_status: "Open".into(),
            total_flight_risk: "12".into(),
            total_backfill: "3".into(),
            create_date: "2023-01-01".into(),
            last_update: "2023-06-30".into(),
            data_as_of_date: "2023-06-30".into(),
        }
    }

    fn placeholder_count(sql: &str, dialect: Dialect) -> usize {
        match dialect {
            Dialect::MySql => sql.matches('?').count(),
            Dialect::Postgres => sql.matches('$').count(),
        }
    }

    #[test]
    fn test_insert_mysql() {
        let stmt = QueryBuilder::new(Dialect::MySql).build(Operation::Create(&sample()));

        assert_eq!(
            stmt.sql,
            "INSERT INTO Company_Detail (Client_ID, Company_ID, Company_Name, ASIC, \
             Flight_Risk_Status, Recruit_Status, Total_Flight_Risk, Total_Backfill, \
             Create_Date, Last_Update, Data_as_of_Date) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        assert_eq!(stmt.binds.len(), 11);
        assert_eq!(stmt.binds[0], BindValue::Int(42));
        assert_eq!(stmt.binds[1], BindValue::Int(5));
        assert_eq!(stmt.binds[2], BindValue::from("Acme"));
        assert_eq!(stmt.binds[10], BindValue::from("2023-06-30"));
    }

    #[test]
    fn test_insert_postgres_uses_ordinals() {
        let stmt = QueryBuilder::new(Dialect::Postgres).build(Operation::Create(&sample()));

        assert!(stmt.sql.ends_with("VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"));
        assert!(!stmt.sql.contains('?'));
        assert!(!stmt.sql.contains("title"));
    }

    #[test]
    fn test_list_without_limit() {
        let stmt = QueryBuilder::new(Dialect::MySql).build(Operation::List {
            after: 0,
            limit: None,
        });

        assert!(stmt.sql.starts_with("SELECT Client_ID, Company_ID,"));
        assert!(stmt
            .sql
            .ends_with("FROM Company_Detail WHERE Company_ID > ? ORDER BY Company_ID ASC"));
        assert_eq!(stmt.binds, vec![BindValue::Int(0)]);
    }

    #[test]
    fn test_list_with_limit() {
        let stmt = QueryBuilder::new(Dialect::Postgres).build(Operation::List {
            after: 2,
            limit: Some(2),
        });

        assert!(stmt
            .sql
            .ends_with("WHERE Company_ID > $1 ORDER BY Company_ID ASC LIMIT $2"));
        assert_eq!(stmt.binds, vec![BindValue::Int(2), BindValue::Int(2)]);
    }

    #[test]
    fn test_get_and_delete_target_key() {
        let qb = QueryBuilder::new(Dialect::MySql);

        let get = qb.build(Operation::Get { id: 9 });
        assert!(get.sql.ends_with("FROM Company_Detail WHERE Company_ID = ?"));
        assert_eq!(get.binds, vec![BindValue::Int(9)]);

        let delete = qb.build(Operation::Delete { id: 9 });
        assert_eq!(delete.sql, "DELETE FROM Company_Detail WHERE Company_ID = ?");
        assert_eq!(delete.binds, vec![BindValue::Int(9)]);
    }

    #[test]
    fn test_update_binds_path_id_last() {
        let company = sample();
        let stmt = QueryBuilder::new(Dialect::Postgres).build(Operation::Update {
            id: 77,
            company: &company,
        });

        assert!(stmt.sql.starts_with("UPDATE Company_Detail SET Client_ID = $1, Company_ID = $2,"));
        assert!(stmt.sql.ends_with("Data_as_of_Date = $11 WHERE Company_ID = $12"));
        assert_eq!(stmt.binds.len(), 12);
        assert_eq!(stmt.binds.last(), Some(&BindValue::Int(77)));
    }

    #[test]
    fn test_placeholder_count_matches_binds() {
        let company = sample();
        for dialect in [Dialect::MySql, Dialect::Postgres] {
            let qb = QueryBuilder::new(dialect);
            let ops = [
                Operation::Create(&company),
                Operation::List { after: 1, limit: None },
                Operation::List { after: 1, limit: Some(10) },
                Operation::Get { id: 1 },
                Operation::Update { id: 1, company: &company },
                Operation::Delete { id: 1 },
            ];
            for op in ops {
                let stmt = qb.build(op);
                assert_eq!(
                    placeholder_count(&stmt.sql, dialect),
                    stmt.binds.len(),
                    "{} {}",
                    dialect,
                    op.kind()
                );
            }
        }
    }

    #[test]
    fn test_values_are_never_interpolated() {
        let company = Company::new(1, "x'); DROP TABLE Company_Detail; --");
        let stmt = QueryBuilder::new(Dialect::MySql).build(Operation::Create(&company));

        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.binds[2], BindValue::from(company.company_name.as_str()));
    }
}
