//! Donor entity - a person or organization donating medical equipment

use chrono::{DateTime, Utc};

/// Donor record as stored in the donantes table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub id_donante: i64,
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    pub fecha_registro: DateTime<Utc>,
}

/// Field values for inserting or replacing a donor row
///
/// `fecha_registro` is optional; on insert the storage engine fills in the
/// registration timestamp when it is absent.
#[derive(Debug, Clone, Default)]
pub struct NewDonor {
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    pub fecha_registro: Option<DateTime<Utc>>,
}
