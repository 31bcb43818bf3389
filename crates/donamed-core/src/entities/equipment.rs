//! Equipment entity - a donated (or not yet donated) piece of medical equipment

use chrono::NaiveDate;

/// Equipment record as stored in the equipos_medicos table
///
/// `id_donante` is a weak reference: equipment may exist without a donor,
/// and deleting a donor does not cascade here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id_equipo: i64,
    pub nombre_equipo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: String,
    pub fecha_fabricacion: Option<NaiveDate>,
    pub fecha_donacion: Option<NaiveDate>,
    pub id_donante: Option<i64>,
}

impl Equipment {
    /// Check whether this equipment is linked to a donor
    #[inline]
    pub fn is_donated(&self) -> bool {
        self.id_donante.is_some()
    }
}

/// Equipment joined with the referenced donor's display name
///
/// Only the single-item fetch carries `nombre_donante`; the list endpoint
/// intentionally returns the bare row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentWithDonor {
    pub equipment: Equipment,
    pub nombre_donante: Option<String>,
}

/// Field values for inserting or replacing an equipment row
///
/// `fecha_donacion` is optional; on insert the storage engine fills in the
/// current date when it is absent.
#[derive(Debug, Clone, Default)]
pub struct NewEquipment {
    pub nombre_equipo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: String,
    pub fecha_fabricacion: Option<NaiveDate>,
    pub fecha_donacion: Option<NaiveDate>,
    pub id_donante: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(id_donante: Option<i64>) -> Equipment {
        Equipment {
            id_equipo: 1,
            nombre_equipo: "Ventilador".to_string(),
            marca: None,
            modelo: None,
            estado: "Operativo".to_string(),
            fecha_fabricacion: None,
            fecha_donacion: None,
            id_donante,
        }
    }

    #[test]
    fn test_is_donated() {
        assert!(equipment(Some(7)).is_donated());
        assert!(!equipment(None).is_donated());
    }
}
