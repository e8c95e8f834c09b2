use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use requesthandler::api::rpc::dto::campaign::{
    CampaignEndHandleDto, CampaignResourceInfo, CampaignStatusDto, CampaignTypeDto,
};
use requesthandler::api::rpc::dto::flow::ActionDto;
use voipbin_common::constant::content_type;
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_raw, ut_setup_handler};

const UT_ROUTE: &str = "bin-manager.campaign-manager.request";

fn ut_campaign_id() -> Uuid {
    Uuid::parse_str("2ac4ec6e-c4f5-11ec-bc52-2b5c5fbd3b5a").unwrap()
}

fn ut_resource_info() -> CampaignResourceInfo {
    CampaignResourceInfo {
        outplan_id: Uuid::parse_str("2ad4c0ee-c4f5-11ec-ba2c-8f5a0b1c4d53").unwrap(),
        outdial_id: Uuid::parse_str("2ae3a6a0-c4f5-11ec-9a63-6b1e3c0ec7b4").unwrap(),
        queue_id: Uuid::parse_str("2af2e7e4-c4f5-11ec-8c4b-4f1a2d0e6c2f").unwrap(),
        next_campaign_id: Uuid::nil(),
    }
}

#[tokio::test]
async fn create_flattened_resource() {
    let reply = json!({
        "id": "2ac4ec6e-c4f5-11ec-bc52-2b5c5fbd3b5a",
        "type": "call",
        "status": "stop",
        "service_level": 100,
        "end_handle": "stop"
    });
    let setup = ut_setup_handler(vec![ut_reply(200, reply)]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let actions = [ActionDto::new("answer")];
    let result = setup
        .handler
        .campaign_v1_campaign_create(
            ut_campaign_id(),
            customer_id,
            CampaignTypeDto::Call,
            "test name",
            "test detail",
            &actions,
            100,
            CampaignEndHandleDto::Stop,
            &ut_resource_info(),
        )
        .await;
    let campaign = result.unwrap();
    assert_eq!(campaign.status, CampaignStatusDto::Stop);
    assert_eq!(campaign.type_, CampaignTypeDto::Call);
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.uri.as_str(), "/v1/campaigns");
    assert_eq!(sent.request.method, RequestMethod::Post);
    let expect = json!({
        "id": "2ac4ec6e-c4f5-11ec-bc52-2b5c5fbd3b5a",
        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
        "type": "call",
        "name": "test name",
        "detail": "test detail",
        "service_level": 100,
        "end_handle": "stop",
        "actions": [{
            "id": "00000000-0000-0000-0000-000000000000",
            "next_id": "00000000-0000-0000-0000-000000000000",
            "type": "answer"
        }],
        "outplan_id": "2ad4c0ee-c4f5-11ec-ba2c-8f5a0b1c4d53",
        "outdial_id": "2ae3a6a0-c4f5-11ec-9a63-6b1e3c0ec7b4",
        "queue_id": "2af2e7e4-c4f5-11ec-8c4b-4f1a2d0e6c2f",
        "next_campaign_id": "00000000-0000-0000-0000-000000000000"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn gets_by_customer_id() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!([]))]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let result = setup
        .handler
        .campaign_v1_campaign_gets_by_customer_id(customer_id, "2020-10-10 03:30:17.000000", 10)
        .await;
    assert!(result.unwrap().is_empty());
    let sent = setup.single();
    let expect = "/v1/campaigns?page_token=2020-10-10+03%3A30%3A17.000000&page_size=10\
        &customer_id=5e4a0680-804e-11ec-8477-2fea5968d85b";
    assert_eq!(sent.request.uri.as_str(), expect);
    assert_eq!(sent.request.data_type.as_str(), content_type::JSON);
}

#[tokio::test]
async fn execute_scheduled() {
    let setup = ut_setup_handler(Vec::new());
    let result = setup
        .handler
        .campaign_v1_campaign_execute(ut_campaign_id(), 1000)
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/campaigns/2ac4ec6e-c4f5-11ec-bc52-2b5c5fbd3b5a/execute"
    );
    assert_eq!(sent.delay, Some(Duration::from_millis(1000)));
    assert_eq!(sent.request.data_type.as_str(), content_type::JSON);
}

#[tokio::test]
async fn update_resource_info() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({}))]);
    let result = setup
        .handler
        .campaign_v1_campaign_update_resource_info(ut_campaign_id(), &ut_resource_info())
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Put);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/campaigns/2ac4ec6e-c4f5-11ec-bc52-2b5c5fbd3b5a/resource_info"
    );
    let expect = json!({
        "outplan_id": "2ad4c0ee-c4f5-11ec-ba2c-8f5a0b1c4d53",
        "outdial_id": "2ae3a6a0-c4f5-11ec-9a63-6b1e3c0ec7b4",
        "queue_id": "2af2e7e4-c4f5-11ec-8c4b-4f1a2d0e6c2f",
        "next_campaign_id": "00000000-0000-0000-0000-000000000000"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn get_and_delete() {
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, r#"{"id":"1692450e-c50f-11ec-8e6c-07b184583eb1"}"#),
        ut_reply_raw(200, r#"{"id":"8633f201-cf6d-42e7-af63-d63fbc36f637"}"#),
    ]);
    let hdlr = &setup.handler;
    let id0 = Uuid::parse_str("1692450e-c50f-11ec-8e6c-07b184583eb1").unwrap();
    let id1 = Uuid::parse_str("8633f201-cf6d-42e7-af63-d63fbc36f637").unwrap();
    let campaign = hdlr.campaign_v1_campaign_get(id0).await.unwrap();
    assert_eq!(campaign.id, id0);
    assert_eq!(campaign.status, CampaignStatusDto::Stop);
    let campaign = hdlr.campaign_v1_campaign_delete(id1).await.unwrap();
    assert_eq!(campaign.id, id1);
    let sent = setup.sent();
    assert_eq!(sent[0].request.method, RequestMethod::Get);
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/campaigns/1692450e-c50f-11ec-8e6c-07b184583eb1"
    );
    assert_eq!(sent[1].request.method, RequestMethod::Delete);
    assert_eq!(sent[1].request.data_type.as_str(), content_type::JSON);
}

#[tokio::test]
async fn update_basic_info() {
    let setup = ut_setup_handler(vec![ut_reply_raw(
        200,
        r#"{"id":"22d9075d-08bd-4eb0-b868-3b102f0bcb39"}"#,
    )]);
    let id = Uuid::parse_str("22d9075d-08bd-4eb0-b868-3b102f0bcb39").unwrap();
    let result = setup
        .handler
        .campaign_v1_campaign_update_basic_info(
            id,
            "update name",
            "update detail",
            CampaignTypeDto::Call,
            100,
            CampaignEndHandleDto::Continue,
        )
        .await;
    assert_eq!(result.unwrap().id, id);
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Put);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/campaigns/22d9075d-08bd-4eb0-b868-3b102f0bcb39"
    );
    let expect = json!({
        "name": "update name",
        "detail": "update detail",
        "type": "call",
        "service_level": 100,
        "end_handle": "continue"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn update_single_fields() {
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, r#"{"id":"f08f88a9-1e97-4da3-8052-3506ec5d73ae","status":"run"}"#),
        ut_reply_raw(200, r#"{"id":"4a334640-35f9-4742-8428-97d386804c8b"}"#),
        ut_reply_raw(200, r#"{"id":"381d05c3-5cc2-4296-89c9-80aa751e2d2c"}"#),
        ut_reply_raw(200, r#"{"id":"42a6943c-c6b4-11ec-a70b-cb75b0197d55"}"#),
    ]);
    let hdlr = &setup.handler;
    let id_status = Uuid::parse_str("f08f88a9-1e97-4da3-8052-3506ec5d73ae").unwrap();
    let id_level = Uuid::parse_str("4a334640-35f9-4742-8428-97d386804c8b").unwrap();
    let id_actions = Uuid::parse_str("381d05c3-5cc2-4296-89c9-80aa751e2d2c").unwrap();
    let id_next = Uuid::parse_str("42a6943c-c6b4-11ec-a70b-cb75b0197d55").unwrap();
    let next_campaign_id = Uuid::parse_str("2bed4c36-c6b4-11ec-92e6-1b01011d10cf").unwrap();
    let result = hdlr
        .campaign_v1_campaign_update_status(id_status, CampaignStatusDto::Run)
        .await;
    assert_eq!(result.unwrap().status, CampaignStatusDto::Run);
    let result = hdlr
        .campaign_v1_campaign_update_service_level(id_level, 100)
        .await;
    assert!(result.is_ok());
    let actions = [ActionDto::new("answer")];
    let result = hdlr
        .campaign_v1_campaign_update_actions(id_actions, &actions)
        .await;
    assert!(result.is_ok());
    let result = hdlr
        .campaign_v1_campaign_update_next_campaign_id(id_next, next_campaign_id)
        .await;
    assert!(result.is_ok());
    let sent = setup.sent();
    assert!(sent.iter().all(|s| s.request.method == RequestMethod::Put));
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/campaigns/f08f88a9-1e97-4da3-8052-3506ec5d73ae/status"
    );
    assert_eq!(sent[0].body(), json!({"status": "run"}));
    assert_eq!(
        sent[1].request.uri.as_str(),
        "/v1/campaigns/4a334640-35f9-4742-8428-97d386804c8b/service_level"
    );
    assert_eq!(sent[1].body(), json!({"service_level": 100}));
    assert_eq!(
        sent[2].request.uri.as_str(),
        "/v1/campaigns/381d05c3-5cc2-4296-89c9-80aa751e2d2c/actions"
    );
    let expect = json!({"actions": [{
        "id": "00000000-0000-0000-0000-000000000000",
        "next_id": "00000000-0000-0000-0000-000000000000",
        "type": "answer"
    }]});
    assert_eq!(sent[2].body(), expect);
    assert_eq!(
        sent[3].request.uri.as_str(),
        "/v1/campaigns/42a6943c-c6b4-11ec-a70b-cb75b0197d55/next_campaign_id"
    );
    assert_eq!(
        sent[3].body(),
        json!({"next_campaign_id": "2bed4c36-c6b4-11ec-92e6-1b01011d10cf"})
    );
}
