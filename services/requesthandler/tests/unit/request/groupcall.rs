use std::collections::BTreeMap;

use serde_json::json;
use uuid::Uuid;

use requesthandler::api::rpc::dto::call::{
    GroupcallAnswerMethodDto, GroupcallRingMethodDto, GroupcallStatusDto,
};
use voipbin_common::model::address::{Address, AddressType};
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_empty, ut_reply_raw, ut_setup_handler};

const UT_ROUTE: &str = "bin-manager.call-manager.request";

#[tokio::test]
async fn create_groupcall() {
    let reply = json!({
        "id": "c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b",
        "status": "progressing",
        "ring_method": "ring_all",
        "answer_method": "hangup_others",
        "call_ids": ["d4e5f6a7-2b74-11ee-8b9c-0d1e2f3a4b5c"],
        "call_count": 1
    });
    let setup = ut_setup_handler(vec![ut_reply(200, reply)]);
    let id = Uuid::parse_str("c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b").unwrap();
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let flow_id = Uuid::parse_str("1ad9bd1e-6bd4-11ed-8a6f-4b7f5c5cda7e").unwrap();
    let source = Address::new(AddressType::Tel, "+821100000001");
    let destinations = [
        Address::new(AddressType::Tel, "+821100000002"),
        Address::new(AddressType::Extension, "2001"),
    ];
    let result = setup
        .handler
        .call_v1_groupcall_create(
            id,
            customer_id,
            flow_id,
            &source,
            &destinations,
            Uuid::nil(),
            Uuid::nil(),
            GroupcallRingMethodDto::RingAll,
            GroupcallAnswerMethodDto::HangupOthers,
        )
        .await;
    let gcall = result.unwrap();
    assert_eq!(gcall.status, GroupcallStatusDto::Progressing);
    assert_eq!(gcall.ring_method, GroupcallRingMethodDto::RingAll);
    assert_eq!(gcall.call_ids.map(|v| v.len()), Some(1));
    assert!(gcall.destinations.is_none());
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.uri.as_str(), "/v1/groupcalls");
    let expect = json!({
        "id": "c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b",
        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
        "flow_id": "1ad9bd1e-6bd4-11ed-8a6f-4b7f5c5cda7e",
        "source": {"type": "tel", "target": "+821100000001"},
        "destinations": [
            {"type": "tel", "target": "+821100000002"},
            {"type": "extension", "target": "2001"}
        ],
        "master_call_id": "00000000-0000-0000-0000-000000000000",
        "master_groupcall_id": "00000000-0000-0000-0000-000000000000",
        "ring_method": "ring_all",
        "answer_method": "hangup_others"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn update_answer_groupcall_id() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({}))]);
    let id = Uuid::parse_str("c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b").unwrap();
    let answer_id = Uuid::parse_str("e5f6a7b8-2b74-11ee-a1b2-c3d4e5f6a7b8").unwrap();
    let result = setup
        .handler
        .call_v1_groupcall_update_answer_groupcall_id(id, answer_id)
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Post);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/groupcalls/c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b/answer_groupcall_id"
    );
    assert_eq!(
        sent.body(),
        json!({"answer_groupcall_id": "e5f6a7b8-2b74-11ee-a1b2-c3d4e5f6a7b8"})
    );
}

#[tokio::test]
async fn hangup_parts() {
    let setup = ut_setup_handler(vec![
        ut_reply_empty(200),
        ut_reply_empty(200),
        ut_reply_empty(200),
    ]);
    let id = Uuid::parse_str("c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b").unwrap();
    let hdlr = &setup.handler;
    assert!(hdlr.call_v1_groupcall_hangup_others(id).await.is_ok());
    assert!(hdlr.call_v1_groupcall_hangup_call(id).await.is_ok());
    assert!(hdlr.call_v1_groupcall_hangup_groupcall(id).await.is_ok());
    let uris = setup
        .sent()
        .into_iter()
        .map(|r| r.request.uri)
        .collect::<Vec<_>>();
    let expect = [
        "/v1/groupcalls/c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b/hangup_others",
        "/v1/groupcalls/c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b/hangup_call",
        "/v1/groupcalls/c3d4e5f6-2b74-11ee-9a0b-1c2d3e4f5a6b/hangup_groupcall",
    ];
    assert_eq!(uris, expect);
}

#[tokio::test]
async fn gets_get_delete_hangup() {
    let setup = ut_setup_handler(vec![
        ut_reply_raw(
            200,
            r#"[{"id":"d789d812-be33-11ed-9f54-1b18b82aa8f8"},{"id":"d7af6dfc-be33-11ed-939f-b3e2f9be4bd5"}]"#,
        ),
        ut_reply_raw(200, r#"{"id":"06d9ec2a-be33-11ed-acc5-876b594da79c"}"#),
        ut_reply_raw(200, r#"{"id":"1717ba30-be34-11ed-87e7-5739c7ea8622"}"#),
        ut_reply_raw(200, r#"{"id":"3d82215c-be33-11ed-aed4-7b9daa884e9f"}"#),
    ]);
    let hdlr = &setup.handler;
    let filters = BTreeMap::from([("deleted".to_string(), "false".to_string())]);
    let groupcalls = hdlr
        .call_v1_groupcall_gets("2020-09-20T03:23:20.995000", 10, &filters)
        .await
        .unwrap();
    assert_eq!(groupcalls.len(), 2);
    let id_get = Uuid::parse_str("06d9ec2a-be33-11ed-acc5-876b594da79c").unwrap();
    let id_del = Uuid::parse_str("1717ba30-be34-11ed-87e7-5739c7ea8622").unwrap();
    let id_hangup = Uuid::parse_str("3d82215c-be33-11ed-aed4-7b9daa884e9f").unwrap();
    let groupcall = hdlr.call_v1_groupcall_get(id_get).await.unwrap();
    assert_eq!(groupcall.id, id_get);
    assert_eq!(groupcall.status, GroupcallStatusDto::None);
    let groupcall = hdlr.call_v1_groupcall_delete(id_del).await.unwrap();
    assert_eq!(groupcall.id, id_del);
    let groupcall = hdlr.call_v1_groupcall_hangup(id_hangup).await.unwrap();
    assert_eq!(groupcall.id, id_hangup);
    let sent = setup.sent();
    assert!(sent.iter().all(|s| s.route.as_str() == UT_ROUTE));
    let actual = sent
        .iter()
        .map(|s| (s.request.method, s.request.uri.clone()))
        .collect::<Vec<_>>();
    let expect = vec![
        (
            RequestMethod::Get,
            "/v1/groupcalls?page_token=2020-09-20T03%3A23%3A20.995000&page_size=10&filter_deleted=false"
                .to_string(),
        ),
        (
            RequestMethod::Get,
            "/v1/groupcalls/06d9ec2a-be33-11ed-acc5-876b594da79c".to_string(),
        ),
        (
            RequestMethod::Delete,
            "/v1/groupcalls/1717ba30-be34-11ed-87e7-5739c7ea8622".to_string(),
        ),
        (
            RequestMethod::Post,
            "/v1/groupcalls/3d82215c-be33-11ed-aed4-7b9daa884e9f/hangup".to_string(),
        ),
    ];
    assert_eq!(actual, expect);
}
