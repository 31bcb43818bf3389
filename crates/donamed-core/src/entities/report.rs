//! Aggregate report rows

/// Count of equipment rows sharing one status label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub estado: String,
    pub cantidad: i64,
}
