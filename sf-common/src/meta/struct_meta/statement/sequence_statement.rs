use crate::utils::sql_util::SqlUtil;

#[derive(Debug, Clone)]
pub struct SequenceStatement {
    pub sequence_name: String,
    pub database_name: String,
    pub schema_name: String,
    pub start_value: i64,
    pub increment: i64,
    pub comment: String,
}

impl SequenceStatement {
    pub fn new(sequence_name: &str, database_name: &str, schema_name: &str) -> Self {
        Self {
            sequence_name: sequence_name.to_string(),
            database_name: database_name.to_string(),
            schema_name: schema_name.to_string(),
            start_value: 1,
            increment: 1,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_start(mut self, start_value: i64) -> Self {
        self.start_value = start_value;
        self
    }

    pub fn qualified_name(&self) -> String {
        format!(
            "{}.{}.{}",
            SqlUtil::quote_identifier(&self.database_name),
            SqlUtil::quote_identifier(&self.schema_name),
            SqlUtil::quote_identifier(&self.sequence_name)
        )
    }

    /// START and INCREMENT are emitted only when they differ from the
    /// warehouse default of 1.
    pub fn create_sql(&self) -> String {
        let mut sql = format!("CREATE SEQUENCE {}", self.qualified_name());
        if self.start_value != 1 {
            sql.push_str(&format!(" START = {}", self.start_value));
        }
        if self.increment != 1 {
            sql.push_str(&format!(" INCREMENT = {}", self.increment));
        }
        if !self.comment.is_empty() {
            sql.push_str(&format!(
                " COMMENT = '{}'",
                SqlUtil::escape_literal(&self.comment)
            ));
        }
        sql
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP SEQUENCE {}", self.qualified_name())
    }

    // the name lands in the LIKE pattern verbatim, metacharacters included
    pub fn show_sql(&self) -> String {
        format!(
            r#"SHOW SEQUENCES LIKE '{}' IN SCHEMA "{}"."{}""#,
            self.sequence_name, self.database_name, self.schema_name
        )
    }

    pub fn remove_comment_sql(&self) -> String {
        format!("ALTER SEQUENCE {} UNSET COMMENT", self.qualified_name())
    }

    pub fn change_comment_sql(&self, comment: &str) -> String {
        format!(
            "ALTER SEQUENCE {} SET COMMENT = '{}'",
            self.qualified_name(),
            SqlUtil::escape_literal(comment)
        )
    }

    pub fn rename_sql(&self, new_name: &str) -> String {
        format!(
            r#"ALTER SEQUENCE {} RENAME TO "{}"."{}"."{}""#,
            self.qualified_name(),
            self.database_name,
            self.schema_name,
            new_name
        )
    }

    pub fn nextval_sql(&self) -> String {
        format!("SELECT {}.nextval", self.qualified_name())
    }
}
