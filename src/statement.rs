use serde::{Deserialize, Serialize};

/// How a driver marks bound parameter positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    /// `?, ?, ?`
    Question,
    /// `?1, ?2, ?3`
    #[default]
    Numbered,
}

impl Placeholder {
    fn slot(self, ordinal: usize) -> String {
        match self {
            Placeholder::Question => "?".to_string(),
            Placeholder::Numbered => format!("?{ordinal}"),
        }
    }
}

/// An INSERT described by table and column order only. Bind values must be
/// supplied in the same order as `columns`.
#[derive(Debug, Clone, Copy)]
pub struct InsertStatement {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

impl InsertStatement {
    pub fn render(&self, style: Placeholder) -> String {
        let slots: Vec<String> = (1..=self.columns.len()).map(|i| style.slot(i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            slots.join(", ")
        )
    }
}

pub const USERS: InsertStatement = InsertStatement {
    table: "users",
    columns: &["username", "password", "role", "full_name", "position", "is_active"],
};

pub const DFUR_PROJECTS: InsertStatement = InsertStatement {
    table: "dfur_projects",
    columns: &[
        "transaction_id",
        "transaction_date",
        "name_of_collection",
        "project",
        "location",
        "total_cost_approved",
        "total_cost_incurred",
        "date_started",
        "target_completion_date",
        "stats",
        "no_extensions",
        "remarks",
    ],
};

pub const BUDGET_ENTRIES: InsertStatement = InsertStatement {
    table: "budget_entries",
    columns: &[
        "transaction_id",
        "transaction_date",
        "category",
        "subcategory",
        "amount",
        "fund_source",
        "payee",
        "dv_number",
        "expenditure_program",
        "program_description",
        "remarks",
        "allocation_id",
        "created_by",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbered() {
        let sql = USERS.render(Placeholder::Numbered);
        assert_eq!(
            sql,
            "INSERT INTO users (username, password, role, full_name, position, is_active) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        );
    }

    #[test]
    fn test_render_question() {
        let sql = BUDGET_ENTRIES.render(Placeholder::Question);
        assert!(sql.starts_with("INSERT INTO budget_entries (transaction_id, "));
        assert_eq!(sql.matches('?').count(), 13);
        assert!(sql.ends_with("created_by) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"));
    }

    #[test]
    fn test_role_listed_once() {
        assert_eq!(USERS.columns.iter().filter(|c| **c == "role").count(), 1);
    }

    #[test]
    fn test_placeholder_serde_names() {
        assert_eq!(serde_json::to_string(&Placeholder::Question).unwrap(), "\"question\"");
        let p: Placeholder = serde_json::from_str("\"numbered\"").unwrap();
        assert_eq!(p, Placeholder::Numbered);
    }
}
