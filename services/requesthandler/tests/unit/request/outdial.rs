use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use requesthandler::api::rpc::dto::outdial::{OutdialtargetStatusDto, NUM_DESTINATIONS};
use requesthandler::request::{timeout, AppRequestErrorReason};
use voipbin_common::constant::content_type;
use voipbin_common::model::address::{Address, AddressType};
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_raw, ut_setup_handler};

const UT_ROUTE: &str = "bin-manager.outdial-manager.request";

fn ut_outdial_id() -> Uuid {
    Uuid::parse_str("4d8f6f2a-b0c3-11ec-8f3e-1f2b8a0c6d11").unwrap()
}

#[tokio::test]
async fn create_target_skip_absent_destinations() {
    let reply = json!({
        "id": "7b0f3a9c-b0c3-11ec-a1e4-2b9c7d3f8e22",
        "outdial_id": "4d8f6f2a-b0c3-11ec-8f3e-1f2b8a0c6d11",
        "status": "idle",
        "destination_0": {"type": "tel", "target": "+821100000001"},
        "destination_1": null,
        "try_count_0": 0
    });
    let setup = ut_setup_handler(vec![ut_reply(200, reply)]);
    let dest0 = Address::new(AddressType::Tel, "+821100000001");
    let dest2 = Address {
        type_: AddressType::Email,
        target: "tester@example.com".to_string(),
        name: "tester".to_string(),
        ..Default::default()
    };
    let destinations = [Some(&dest0), None, Some(&dest2), None, None];
    let result = setup
        .handler
        .outdial_v1_outdialtarget_create(
            ut_outdial_id(),
            "test name",
            "test detail",
            "test data",
            destinations,
        )
        .await;
    let target = result.unwrap();
    assert_eq!(target.status, OutdialtargetStatusDto::Idle);
    assert_eq!(target.destination_0, Some(dest0.clone()));
    assert!(target.destination_1.is_none());
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/outdials/4d8f6f2a-b0c3-11ec-8f3e-1f2b8a0c6d11/targets"
    );
    let expect = json!({
        "name": "test name",
        "detail": "test detail",
        "data": "test data",
        "destination_0": {"type": "tel", "target": "+821100000001"},
        "destination_2": {"type": "email", "target": "tester@example.com", "name": "tester"}
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn gets_available_query() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!([]))]);
    let result = setup
        .handler
        .outdial_v1_outdialtarget_gets_available(ut_outdial_id(), [3, 3, 2, 0, 0], 1)
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    let expect = "/v1/outdials/4d8f6f2a-b0c3-11ec-8f3e-1f2b8a0c6d11/available\
        ?try_count_0=3&try_count_1=3&try_count_2=2&try_count_3=0&try_count_4=0&limit=1";
    assert_eq!(sent.request.uri.as_str(), expect);
    assert_eq!(sent.request.data_type.as_str(), content_type::JSON);
}

#[tokio::test]
async fn progressing_index_range() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({"status": "progressing"}))]);
    let id = Uuid::parse_str("7b0f3a9c-b0c3-11ec-a1e4-2b9c7d3f8e22").unwrap();
    let result = setup
        .handler
        .outdial_v1_outdialtarget_update_status_progressing(id, NUM_DESTINATIONS)
        .await;
    let e = result.err().unwrap();
    assert!(matches!(e.reason, AppRequestErrorReason::EncodeRequest(_)));
    assert!(setup.sent().is_empty());
    let result = setup
        .handler
        .outdial_v1_outdialtarget_update_status_progressing(id, 2)
        .await;
    let target = result.unwrap();
    assert_eq!(target.status, OutdialtargetStatusDto::Progressing);
    let sent = setup.single();
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/outdialtargets/7b0f3a9c-b0c3-11ec-a1e4-2b9c7d3f8e22/progressing"
    );
    assert_eq!(sent.body(), json!({"destination_index": 2}));
}

#[tokio::test]
async fn gets_by_outdial_id() {
    let setup = ut_setup_handler(vec![ut_reply_raw(
        200,
        r#"[{"id":"957b59ec-c78e-11ec-9d18-0b17e7b3a2ed"}]"#,
    )]);
    let outdial_id = Uuid::parse_str("835e7280-c78e-11ec-9d4c-871c179d2bd9").unwrap();
    let result = setup
        .handler
        .outdial_v1_outdialtarget_gets_by_outdial_id(
            outdial_id,
            "2021-03-02 03:23:20.995000",
            10,
        )
        .await;
    let targets = result.unwrap();
    assert_eq!(targets.len(), 1);
    assert!(targets[0].destination_0.is_none());
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.method, RequestMethod::Get);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/outdials/835e7280-c78e-11ec-9d4c-871c179d2bd9/targets?page_token=2021-03-02+03%3A23%3A20.995000&page_size=10"
    );
    let expect = Duration::from_millis(timeout::LIST as u64);
    assert_eq!(sent.timeout, Some(expect));
}

#[tokio::test]
async fn get_and_delete_target() {
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, r#"{"id":"53ca0620-b658-11ec-99ca-7fe26b40d142"}"#),
        ut_reply_raw(200, r#"{"id":"86e32246-b656-11ec-b2f8-f7db504bdc2e"}"#),
    ]);
    let hdlr = &setup.handler;
    let id_get = Uuid::parse_str("53ca0620-b658-11ec-99ca-7fe26b40d142").unwrap();
    let id_del = Uuid::parse_str("7ca49c9a-b658-11ec-839e-4732258c6c84").unwrap();
    let target = hdlr.outdial_v1_outdialtarget_get(id_get).await.unwrap();
    assert_eq!(target.id, id_get);
    assert_eq!(target.status, OutdialtargetStatusDto::None);
    assert!(hdlr.outdial_v1_outdialtarget_delete(id_del).await.is_ok());
    let sent = setup.sent();
    assert_eq!(sent[0].request.method, RequestMethod::Get);
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/outdialtargets/53ca0620-b658-11ec-99ca-7fe26b40d142"
    );
    assert_eq!(sent[1].request.method, RequestMethod::Delete);
    assert_eq!(
        sent[1].request.uri.as_str(),
        "/v1/outdialtargets/7ca49c9a-b658-11ec-839e-4732258c6c84"
    );
    assert_eq!(sent[1].request.data_type.as_str(), content_type::JSON);
}

#[tokio::test]
async fn update_status_idle() {
    let setup = ut_setup_handler(vec![ut_reply_raw(
        200,
        r#"{"id":"16b4b4c2-b65f-11ec-92be-dba3f52ebb01","status":"idle"}"#,
    )]);
    let id = Uuid::parse_str("16b4b4c2-b65f-11ec-92be-dba3f52ebb01").unwrap();
    let result = setup
        .handler
        .outdial_v1_outdialtarget_update_status(id, OutdialtargetStatusDto::Idle)
        .await;
    assert_eq!(result.unwrap().status, OutdialtargetStatusDto::Idle);
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Put);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/outdialtargets/16b4b4c2-b65f-11ec-92be-dba3f52ebb01/status"
    );
    assert_eq!(sent.body(), json!({"status": "idle"}));
}
