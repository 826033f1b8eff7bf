use axum::Json;
use crate::data::{FEEDING_LOG, PETS};
use crate::models::{DataResponse, FeedingRecord, Pet};

pub async fn pets_handler() -> Json<DataResponse<&'static [Pet]>> {
    Json(DataResponse::ok(&PETS[..]))
}

pub async fn feeding_handler() -> Json<DataResponse<&'static [FeedingRecord]>> {
    Json(DataResponse::ok(&FEEDING_LOG[..]))
}
