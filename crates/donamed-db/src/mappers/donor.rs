//! Donor entity <-> model mapper

use donamed_core::entities::Donor;

use crate::models::DonorModel;

impl From<DonorModel> for Donor {
    fn from(model: DonorModel) -> Self {
        Donor {
            id_donante: model.id_donante,
            nombre: model.nombre,
            contacto: model.contacto,
            direccion: model.direccion,
            fecha_registro: model.fecha_registro,
        }
    }
}
