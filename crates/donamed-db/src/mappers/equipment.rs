//! Equipment entity <-> model mappers

use donamed_core::entities::{Equipment, EquipmentWithDonor};

use crate::models::{EquipmentModel, EquipmentWithDonorModel};

impl From<EquipmentModel> for Equipment {
    fn from(model: EquipmentModel) -> Self {
        Equipment {
            id_equipo: model.id_equipo,
            nombre_equipo: model.nombre_equipo,
            marca: model.marca,
            modelo: model.modelo,
            estado: model.estado,
            fecha_fabricacion: model.fecha_fabricacion,
            fecha_donacion: model.fecha_donacion,
            id_donante: model.id_donante,
        }
    }
}

impl From<EquipmentWithDonorModel> for EquipmentWithDonor {
    fn from(model: EquipmentWithDonorModel) -> Self {
        EquipmentWithDonor {
            equipment: Equipment {
                id_equipo: model.id_equipo,
                nombre_equipo: model.nombre_equipo,
                marca: model.marca,
                modelo: model.modelo,
                estado: model.estado,
                fecha_fabricacion: model.fecha_fabricacion,
                fecha_donacion: model.fecha_donacion,
                id_donante: model.id_donante,
            },
            nombre_donante: model.nombre_donante,
        }
    }
}
