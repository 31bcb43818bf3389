//! Entity → response DTO conversions

use donamed_core::entities::{
    DeliveryWithEquipment, Donor, Equipment, EquipmentWithDonor, StatusCount,
};

use super::responses::{
    DeliveryResponse, DonorResponse, EquipmentDetailResponse, EquipmentResponse,
    StatusCountResponse,
};

impl From<Donor> for DonorResponse {
    fn from(donor: Donor) -> Self {
        Self {
            id_donante: donor.id_donante,
            nombre: donor.nombre,
            contacto: donor.contacto,
            direccion: donor.direccion,
            fecha_registro: donor.fecha_registro,
        }
    }
}

impl From<Equipment> for EquipmentResponse {
    fn from(equipment: Equipment) -> Self {
        Self {
            id_equipo: equipment.id_equipo,
            nombre_equipo: equipment.nombre_equipo,
            marca: equipment.marca,
            modelo: equipment.modelo,
            estado: equipment.estado,
            fecha_fabricacion: equipment.fecha_fabricacion,
            fecha_donacion: equipment.fecha_donacion,
            id_donante: equipment.id_donante,
        }
    }
}

impl From<EquipmentWithDonor> for EquipmentDetailResponse {
    fn from(detail: EquipmentWithDonor) -> Self {
        let equipment = detail.equipment;
        Self {
            id_equipo: equipment.id_equipo,
            nombre_equipo: equipment.nombre_equipo,
            marca: equipment.marca,
            modelo: equipment.modelo,
            estado: equipment.estado,
            fecha_fabricacion: equipment.fecha_fabricacion,
            fecha_donacion: equipment.fecha_donacion,
            id_donante: equipment.id_donante,
            nombre_donante: detail.nombre_donante,
        }
    }
}

impl From<DeliveryWithEquipment> for DeliveryResponse {
    fn from(delivery: DeliveryWithEquipment) -> Self {
        Self {
            id_entrega: delivery.id_entrega,
            fecha_entrega: delivery.fecha_entrega,
            estado_equipo: delivery.estado_equipo,
            id_equipo: delivery.id_equipo,
            nombre_equipo: delivery.nombre_equipo,
        }
    }
}

impl From<StatusCount> for StatusCountResponse {
    fn from(count: StatusCount) -> Self {
        Self {
            estado: count.estado,
            cantidad: count.cantidad,
        }
    }
}
