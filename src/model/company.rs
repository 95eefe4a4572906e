//! Company record
//!
//! JSON keys keep the historical `Client_ID` / `Company_Name` casing that
//! existing API consumers send. Missing keys and `null` values decode to
//! zero values.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// Table holding company records
pub const TABLE: &str = "Company_Detail";

/// Column list in bind/scan order. `Company_ID` is the row key.
pub const COLUMNS: [&str; 11] = [
    "Client_ID",
    "Company_ID",
    "Company_Name",
    "ASIC",
    "Flight_Risk_Status",
    "Recruit_Status",
    "Total_Flight_Risk",
    "Total_Backfill",
    "Create_Date",
    "Last_Update",
    "Data_as_of_Date",
];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A company detail record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Owning client
    #[serde(rename = "Client_ID", deserialize_with = "null_as_default")]
    pub client_id: i64,

    /// Row key
    #[serde(rename = "Company_ID", deserialize_with = "null_as_default")]
    pub company_id: i64,

    #[serde(rename = "Company_Name", deserialize_with = "null_as_default")]
    pub company_name: String,

    /// External registration code
    #[serde(rename = "ASIC", deserialize_with = "null_as_default")]
    pub asic: String,

    #[serde(rename = "Flight_Risk_Status", deserialize_with = "null_as_default")]
    pub flight_risk_status: String,

    #[serde(rename = "Recruit_Status", deserialize_with = "null_as_default")]
    pub recruit_status: String,

    /// Numeric-looking, kept as text
    #[serde(rename = "Total_Flight_Risk", deserialize_with = "null_as_default")]
    pub total_flight_risk: String,

    /// Numeric-looking, kept as text
    #[serde(rename = "Total_Backfill", deserialize_with = "null_as_default")]
    pub total_backfill: String,

    /// `YYYY-MM-DD`, unvalidated
    #[serde(rename = "Create_Date", deserialize_with = "null_as_default")]
    pub create_date: String,

    /// `YYYY-MM-DD`, unvalidated
    #[serde(rename = "Last_Update", deserialize_with = "null_as_default")]
    pub last_update: String,

    /// `YYYY-MM-DD`, unvalidated
    #[serde(rename = "Data_As_Of_Date", deserialize_with = "null_as_default")]
    pub data_as_of_date: String,
}

impl Company {
    /// Create a record with only the key and name set
    pub fn new(company_id: i64, company_name: impl Into<String>) -> Self {
        Self {
            company_id,
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    /// Text fields in column order, after the two integer columns
    pub(crate) fn text_fields(&self) -> [&str; 9] {
        [
            self.company_name.as_str(),
            self.asic.as_str(),
            self.flight_risk_status.as_str(),
            self.recruit_status.as_str(),
            self.total_flight_risk.as_str(),
            self.total_backfill.as_str(),
            self.create_date.as_str(),
            self.last_update.as_str(),
            self.data_as_of_date.as_str(),
        ]
    }
}

// Positional, so it does not depend on how the server folds identifier case.
impl<'r> FromRow<'r, AnyRow> for Company {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            client_id: row.try_get(0)?,
            company_id: row.try_get(1)?,
            company_name: row.try_get(2)?,
            asic: row.try_get(3)?,
            flight_risk_status: row.try_get(4)?,
            recruit_status: row.try_get(5)?,
            total_flight_risk: row.try_get(6)?,
            total_backfill: row.try_get(7)?,
            create_date: row.try_get(8)?,
            last_update: row.try_get(9)?,
            data_as_of_date: row.try_get(10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_keys() {
        let company = Company::new(5, "Acme");
        let json = serde_json::to_value(&company).unwrap();

        assert_eq!(json["Company_ID"], 5);
        assert_eq!(json["Company_Name"], "Acme");
        assert_eq!(json["Data_As_Of_Date"], "");
        assert_eq!(json.as_object().unwrap().len(), COLUMNS.len());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let company: Company = serde_json::from_value(json!({
            "Company_ID": 7,
            "ASIC": "123 456 789",
            "Unknown": true
        }))
        .unwrap();

        assert_eq!(company.company_id, 7);
        assert_eq!(company.client_id, 0);
        assert_eq!(company.asic, "123 456 789");
        assert!(company.company_name.is_empty());
    }

    #[test]
    fn test_null_is_zero_value() {
        let company: Company = serde_json::from_value(json!({
            "Client_ID": null,
            "Company_ID": 7,
            "ASIC": null
        }))
        .unwrap();

        assert_eq!(company, Company::new(7, ""));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Company, _> =
            serde_json::from_value(json!({ "Company_ID": "not a number" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_text_fields_follow_column_order() {
        let company = Company {
            company_name: "Acme".into(),
            data_as_of_date: "2024-01-31".into(),
            ..Default::default()
        };
        let fields = company.text_fields();

        assert_eq!(fields.len() + 2, COLUMNS.len());
        assert_eq!(fields[0], "Acme");
        assert_eq!(fields[8], "2024-01-31");
    }
}
