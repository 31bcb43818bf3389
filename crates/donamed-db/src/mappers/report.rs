//! Report row mapper

use donamed_core::entities::StatusCount;

use crate::models::StatusCountModel;

impl From<StatusCountModel> for StatusCount {
    fn from(model: StatusCountModel) -> Self {
        StatusCount {
            estado: model.estado,
            cantidad: model.cantidad,
        }
    }
}
