/// One row of a sequence listing. Every column is nullable on the
/// warehouse side, so each field keeps absent distinct from empty.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub name: Option<String>,
    pub database_name: Option<String>,
    pub schema_name: Option<String>,
    pub next_value: Option<String>,
    pub interval: Option<String>,
    pub created_on: Option<String>,
    pub owner: Option<String>,
    pub comment: Option<String>,
}
