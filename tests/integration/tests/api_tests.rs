//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the three tables provisioned
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Donor Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_donor_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = DonorPayload::unique();

    let response = server.post("/donantes", &payload).await.unwrap();
    let created: DonorCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Donor created successfully");

    let response = server
        .get(&format!("/donantes/{}", created.id_donante))
        .await
        .unwrap();
    let donor: DonorResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(donor.id_donante, created.id_donante);
    assert_eq!(donor.nombre, payload.nombre);
    assert_eq!(donor.contacto, payload.contacto);
    assert_eq!(donor.direccion, payload.direccion);
    // Engine-side default fills in the registration timestamp
    assert!(!donor.fecha_registro.is_empty());

    server
        .delete(&format!("/donantes/{}", created.id_donante))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_donors_never_errors() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/donantes").await.unwrap();
    let donors: Vec<DonorResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Empty list is a valid, non-error result
    let _ = donors;
}

#[tokio::test]
async fn test_get_missing_donor_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/donantes/99999999").await.unwrap();
    let body: Message = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Donor not found");
}

#[tokio::test]
async fn test_update_missing_donor_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = DonorPayload::unique();

    let response = server.put("/donantes/99999999", &payload).await.unwrap();
    let body: Message = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Donor not found");

    // The store must be unchanged: nothing with that payload exists
    let response = server.get("/donantes").await.unwrap();
    let donors: Vec<DonorResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(donors.iter().all(|d| d.nombre != payload.nombre));
}

#[tokio::test]
async fn test_update_donor_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/donantes", &DonorPayload::unique()).await.unwrap();
    let created: DonorCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut replacement = DonorPayload::unique();
    replacement.direccion = "Avenida 2".to_string();

    let response = server
        .put(&format!("/donantes/{}", created.id_donante), &replacement)
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Donor updated successfully");

    let response = server
        .get(&format!("/donantes/{}", created.id_donante))
        .await
        .unwrap();
    let donor: DonorResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(donor.nombre, replacement.nombre);
    assert_eq!(donor.direccion, "Avenida 2");

    server
        .delete(&format!("/donantes/{}", created.id_donante))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // contacto and direccion are required
    let body = serde_json::json!({ "nombre": "Ana" });
    let response = server.post("/donantes", &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let base_url = server.base_url();

    let mut handles = Vec::new();
    for _ in 0..5 {
        let client = server.client.clone();
        let url = format!("{base_url}/donantes");
        handles.push(tokio::spawn(async move {
            let response = client
                .post(&url)
                .json(&DonorPayload::unique())
                .send()
                .await
                .unwrap();
            response.json::<DonorCreated>().await.unwrap().id_donante
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len(), "generated identifiers collided");

    for id in ids {
        server.delete(&format!("/donantes/{id}")).await.unwrap();
    }
}

// ============================================================================
// Equipment Tests
// ============================================================================

#[tokio::test]
async fn test_delete_missing_equipment_is_404_with_fixed_message() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.delete("/equipos-medicos/99999").await.unwrap();
    let body: Message = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Equipment not found");
}

#[tokio::test]
async fn test_equipment_detail_includes_donor_name_but_list_does_not() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let donor_payload = DonorPayload::unique();
    let response = server.post("/donantes", &donor_payload).await.unwrap();
    let donor: DonorCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/equipos-medicos",
            &EquipmentPayload::unique(Some(donor.id_donante)),
        )
        .await
        .unwrap();
    let created: EquipmentCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Single-item fetch carries the joined donor name
    let response = server
        .get(&format!("/equipos-medicos/{}", created.id_equipo))
        .await
        .unwrap();
    let detail: EquipmentDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.nombre_donante.as_deref(), Some(donor_payload.nombre.as_str()));

    // The list shape has no nombre_donante key at all
    let response = server.get("/equipos-medicos").await.unwrap();
    let list: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = list
        .iter()
        .find(|e| e["id_equipo"].as_i64() == Some(created.id_equipo))
        .expect("created equipment missing from list");
    assert!(row.get("nombre_donante").is_none());

    server
        .delete(&format!("/equipos-medicos/{}", created.id_equipo))
        .await
        .unwrap();
    server
        .delete(&format!("/donantes/{}", donor.id_donante))
        .await
        .unwrap();
}

// ============================================================================
// Delivery Tests
// ============================================================================

#[tokio::test]
async fn test_delivery_round_trip_includes_equipment_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let equipment_payload = EquipmentPayload::unique(None);
    let response = server.post("/equipos-medicos", &equipment_payload).await.unwrap();
    let equipment: EquipmentCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/entregas", &DeliveryPayload::for_equipment(equipment.id_equipo))
        .await
        .unwrap();
    let created: DeliveryCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Delivery created successfully");

    let response = server
        .get(&format!("/entregas/{}", created.id_entrega))
        .await
        .unwrap();
    let delivery: DeliveryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(delivery.id_equipo, equipment.id_equipo);
    assert_eq!(delivery.nombre_equipo, equipment_payload.nombre_equipo);
    assert!(!delivery.fecha_entrega.is_empty());

    server
        .delete(&format!("/entregas/{}", created.id_entrega))
        .await
        .unwrap();
    server
        .delete(&format!("/equipos-medicos/{}", equipment.id_equipo))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delivery_with_dangling_equipment_is_500_and_rolled_back() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/entregas", &DeliveryPayload::for_equipment(i64::MAX))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!error.error.is_empty());

    // Nothing referencing the dangling equipment may have been inserted
    let response = server.get("/entregas").await.unwrap();
    let deliveries: Vec<DeliveryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deliveries.iter().all(|d| d.id_equipo != i64::MAX));
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_equipment_by_status_counts_and_orders() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Unique status labels keep this test independent of other rows
    let common = format!("Operativo-{}", unique_suffix());
    let rare = format!("Danado-{}", unique_suffix());

    let mut created = Vec::new();
    for estado in [&common, &common, &common, &rare] {
        let mut payload = EquipmentPayload::unique(None);
        payload.estado.clone_from(estado);
        let response = server.post("/equipos-medicos", &payload).await.unwrap();
        let equipment: EquipmentCreated =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        created.push(equipment.id_equipo);
    }

    let response = server.get("/reportes/equipos-por-estado").await.unwrap();
    let counts: Vec<StatusCount> = assert_json(response, StatusCode::OK).await.unwrap();

    let common_pos = counts.iter().position(|c| c.estado == common).unwrap();
    let rare_pos = counts.iter().position(|c| c.estado == rare).unwrap();
    assert_eq!(counts[common_pos].cantidad, 3);
    assert_eq!(counts[rare_pos].cantidad, 1);
    assert!(common_pos < rare_pos, "larger group must sort first");

    for id in created {
        server.delete(&format!("/equipos-medicos/{id}")).await.unwrap();
    }
}

#[tokio::test]
async fn test_recent_deliveries_report_uses_dynamic_keys() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/equipos-medicos", &EquipmentPayload::unique(None))
        .await
        .unwrap();
    let equipment: EquipmentCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/entregas", &DeliveryPayload::for_equipment(equipment.id_equipo))
        .await
        .unwrap();
    let created: DeliveryCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/reportes/entregas-recientes").await.unwrap();
    let rows: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let row = rows
        .iter()
        .find(|r| r["id_entrega"].as_i64() == Some(created.id_entrega))
        .expect("fresh delivery missing from the trailing-30-day report");

    // Keys equal the selected column names, including the left-joined donor
    for key in [
        "id_entrega",
        "fecha_entrega",
        "estado_equipo",
        "nombre_equipo",
        "marca",
        "modelo",
        "donante",
    ] {
        assert!(row.get(key).is_some(), "missing report column {key}");
    }
    // Undonated equipment yields a null donor, not a missing key
    assert!(row["donante"].is_null());

    server
        .delete(&format!("/entregas/{}", created.id_entrega))
        .await
        .unwrap();
    server
        .delete(&format!("/equipos-medicos/{}", equipment.id_equipo))
        .await
        .unwrap();
}
