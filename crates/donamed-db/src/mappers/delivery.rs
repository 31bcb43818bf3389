//! Delivery entity <-> model mapper

use donamed_core::entities::DeliveryWithEquipment;

use crate::models::DeliveryWithEquipmentModel;

impl From<DeliveryWithEquipmentModel> for DeliveryWithEquipment {
    fn from(model: DeliveryWithEquipmentModel) -> Self {
        DeliveryWithEquipment {
            id_entrega: model.id_entrega,
            fecha_entrega: model.fecha_entrega,
            estado_equipo: model.estado_equipo,
            id_equipo: model.id_equipo,
            nombre_equipo: model.nombre_equipo,
        }
    }
}
