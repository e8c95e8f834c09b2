use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use requesthandler::api::rpc::dto::agent::{permission, AgentRingMethodDto, AgentStatusDto};
use requesthandler::request::timeout;
use voipbin_common::constant::content_type;
use voipbin_common::model::address::{Address, AddressType};
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_raw, ut_setup_handler};

const UT_ROUTE: &str = "bin-manager.agent-manager.request";

#[tokio::test]
async fn create_agent() {
    let reply = json!({
        "id": "4f0b3a6c-2b70-11ee-8d2e-6f0a5b1c2d3e",
        "username": "agent-leah",
        "ring_method": "ringall",
        "status": "offline",
        "permission": 16,
        "tag_ids": ["c1f2e3d4-2b70-11ee-a5b6-8b9c0d1e2f3a"],
        "tm_create": "2023-07-26 05:12:33.000000"
    });
    let setup = ut_setup_handler(vec![ut_reply(200, reply)]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let tag_ids = [Uuid::parse_str("c1f2e3d4-2b70-11ee-a5b6-8b9c0d1e2f3a").unwrap()];
    let addresses = [Address::new(AddressType::Tel, "+821100000001")];
    let result = setup
        .handler
        .agent_v1_agent_create(
            5000,
            customer_id,
            "agent-leah",
            "pass1234",
            "leah",
            "night shift",
            AgentRingMethodDto::RingAll,
            permission::CUSTOMER_AGENT,
            &tag_ids,
            &addresses,
        )
        .await;
    let agent = result.unwrap();
    assert_eq!(agent.ring_method, AgentRingMethodDto::RingAll);
    assert_eq!(agent.status, AgentStatusDto::Offline);
    assert_eq!(agent.permission, permission::CUSTOMER_AGENT);
    assert_eq!(agent.tag_ids.len(), 1);
    assert!(agent.addresses.is_empty());
    assert!(agent.tm_create.is_some());
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.method, RequestMethod::Post);
    assert_eq!(sent.request.uri.as_str(), "/v1/agents");
    assert_eq!(sent.timeout, Some(Duration::from_millis(5000)));
    let expect = json!({
        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
        "username": "agent-leah",
        "password": "pass1234",
        "name": "leah",
        "detail": "night shift",
        "ring_method": "ringall",
        "permission": 16,
        "tag_ids": ["c1f2e3d4-2b70-11ee-a5b6-8b9c0d1e2f3a"],
        "addresses": [{"type": "tel", "target": "+821100000001"}]
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn gets_by_tag_ids_and_status() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!([{"status": "available"}]))]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let tag_ids = [
        Uuid::parse_str("c1f2e3d4-2b70-11ee-a5b6-8b9c0d1e2f3a").unwrap(),
        Uuid::parse_str("d2a3b4c5-2b70-11ee-9f8e-7d6c5b4a3f2e").unwrap(),
    ];
    let result = setup
        .handler
        .agent_v1_agent_gets_by_tag_ids_and_status(customer_id, &tag_ids, AgentStatusDto::Available)
        .await;
    let agents = result.unwrap();
    assert_eq!(agents[0].status, AgentStatusDto::Available);
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Get);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/agents?customer_id=5e4a0680-804e-11ec-8477-2fea5968d85b\
         &tag_ids=c1f2e3d4-2b70-11ee-a5b6-8b9c0d1e2f3a,d2a3b4c5-2b70-11ee-9f8e-7d6c5b4a3f2e\
         &status=available"
    );
    assert!(sent.request.data.is_empty());
}

#[tokio::test]
async fn update_status_and_permission() {
    let setup = ut_setup_handler(vec![
        ut_reply(200, json!({"status": "busy"})),
        ut_reply(200, json!({"permission": 32})),
    ]);
    let id = Uuid::parse_str("4f0b3a6c-2b70-11ee-8d2e-6f0a5b1c2d3e").unwrap();
    let hdlr = &setup.handler;
    let result = hdlr.agent_v1_agent_update_status(id, AgentStatusDto::Busy).await;
    assert_eq!(result.unwrap().status, AgentStatusDto::Busy);
    let result = hdlr
        .agent_v1_agent_update_permission(id, permission::CUSTOMER_ADMIN)
        .await;
    assert_eq!(result.unwrap().permission, permission::CUSTOMER_ADMIN);
    let sent = setup.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].request.method, RequestMethod::Put);
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/agents/4f0b3a6c-2b70-11ee-8d2e-6f0a5b1c2d3e/status"
    );
    assert_eq!(sent[0].body(), json!({"status": "busy"}));
    assert_eq!(
        sent[1].request.uri.as_str(),
        "/v1/agents/4f0b3a6c-2b70-11ee-8d2e-6f0a5b1c2d3e/permission"
    );
    assert_eq!(sent[1].body(), json!({"permission": 32}));
}

#[tokio::test]
async fn get_by_customer_id_and_address() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({"username": "agent-leah"}))]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let address = Address::new(AddressType::Extension, "2001");
    let result = setup
        .handler
        .agent_v1_agent_get_by_customer_id_and_address(1000, customer_id, &address)
        .await;
    assert_eq!(result.unwrap().username.as_str(), "agent-leah");
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Post);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/agents/get_by_customer_id_address"
    );
    assert_eq!(sent.timeout, Some(Duration::from_millis(1000)));
    let expect = json!({
        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
        "address": {"type": "extension", "target": "2001"}
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn create_agent_original_reply() {
    let raw = r#"{"id":"bbb3bed0-4d89-11ec-9cf7-4351c0fdbd4a","customer_id":"7fdb8e66-7fe7-11ec-ac90-878b581c2615","username":"test1","password_hash":"password","name":"test agent1","detail":"test agent1 detail","ring_method":"ringall","status":"offline","permission":1,"tag_ids":["27d3bc3e-4d88-11ec-a61d-af78fdede455"],"addresses":[{"type":"tel","target":"+821021656521"}],"tm_create":"2021-11-23T17:55:39.712Z"}"#;
    let setup = ut_setup_handler(vec![ut_reply_raw(200, raw)]);
    let customer_id = Uuid::parse_str("7fdb8e66-7fe7-11ec-ac90-878b581c2615").unwrap();
    let tag_ids = [Uuid::parse_str("ce0c4b4a-4e76-11ec-b6fe-9b57b172471a").unwrap()];
    let addresses = [Address::new(AddressType::Tel, "+821021656521")];
    let result = setup
        .handler
        .agent_v1_agent_create(
            timeout::DEFAULT,
            customer_id,
            "test1",
            "password1",
            "test agent1",
            "test agent1 detail",
            AgentRingMethodDto::RingAll,
            permission::NONE,
            &tag_ids,
            &addresses,
        )
        .await;
    let agent = result.unwrap();
    assert_eq!(agent.password_hash.as_str(), "password");
    assert_eq!(agent.permission, permission::PROJECT_SUPER_ADMIN);
    assert_eq!(agent.addresses, addresses.to_vec());
    let tm = agent.tm_create.unwrap();
    assert_eq!(tm.to_rfc3339().as_str(), "2021-11-23T17:55:39.712+00:00");
    let sent = setup.single();
    let expect = json!({
        "customer_id": "7fdb8e66-7fe7-11ec-ac90-878b581c2615",
        "username": "test1",
        "password": "password1",
        "name": "test agent1",
        "detail": "test agent1 detail",
        "ring_method": "ringall",
        "permission": 0,
        "tag_ids": ["ce0c4b4a-4e76-11ec-b6fe-9b57b172471a"],
        "addresses": [{"type": "tel", "target": "+821021656521"}]
    });
    assert_eq!(sent.body(), expect);
    assert_eq!(sent.timeout, Some(Duration::from_millis(timeout::DEFAULT as u64)));
}

#[tokio::test]
async fn get_and_delete_agent() {
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, r#"{"id":"7ab80df4-4c72-11ec-b095-17146a0e7e4c"}"#),
        ut_reply_raw(200, r#"{"id":"f4b44b28-4e79-11ec-be3c-73450ec23a51"}"#),
    ]);
    let hdlr = &setup.handler;
    let id_get = Uuid::parse_str("7ab80df4-4c72-11ec-b095-17146a0e7e4c").unwrap();
    let id_del = Uuid::parse_str("f4b44b28-4e79-11ec-be3c-73450ec23a51").unwrap();
    assert_eq!(hdlr.agent_v1_agent_get(id_get).await.unwrap().id, id_get);
    assert_eq!(hdlr.agent_v1_agent_delete(id_del).await.unwrap().id, id_del);
    let sent = setup.sent();
    assert_eq!(sent[0].request.method, RequestMethod::Get);
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/agents/7ab80df4-4c72-11ec-b095-17146a0e7e4c"
    );
    assert_eq!(sent[1].request.method, RequestMethod::Delete);
    assert_eq!(
        sent[1].request.uri.as_str(),
        "/v1/agents/f4b44b28-4e79-11ec-be3c-73450ec23a51"
    );
    assert!(sent.iter().all(|s| s.request.data.is_empty()));
}

#[tokio::test]
async fn list_with_filter_body() {
    let raw = r#"[{"id":"11cfd8e8-4c73-11ec-8f06-b73cd86fc9ae"},{"id":"12237ce6-4c73-11ec-8a2a-57b7a8d6a6f4"}]"#;
    let setup = ut_setup_handler(vec![ut_reply_raw(200, raw)]);
    let filters = BTreeMap::from([("deleted".to_string(), json!(false))]);
    let result = setup
        .handler
        .agent_v1_agent_list("2020-09-20T03:23:20.995000Z", 10, &filters)
        .await;
    assert_eq!(result.unwrap().len(), 2);
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Get);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/agents?page_token=2020-09-20T03%3A23%3A20.995000Z&page_size=10"
    );
    assert_eq!(sent.request.data_type.as_str(), content_type::JSON);
    assert_eq!(sent.body(), json!({"deleted": false}));
    assert_eq!(sent.timeout, Some(Duration::from_millis(timeout::LIST as u64)));
}

#[tokio::test]
async fn gets_by_tag_ids() {
    let raw = r#"[{"id":"36a057ee-4e79-11ec-a0c6-5fc332a14527"},{"id":"36c77248-4e79-11ec-8aa9-93ecdefec6c9"}]"#;
    let setup = ut_setup_handler(vec![ut_reply_raw(200, raw)]);
    let customer_id = Uuid::parse_str("7fdb8e66-7fe7-11ec-ac90-878b581c2615").unwrap();
    let tag_ids = [
        Uuid::parse_str("36a057ee-4e79-11ec-a0c6-5fc332a14527").unwrap(),
        Uuid::parse_str("36c77248-4e79-11ec-8aa9-93ecdefec6c9").unwrap(),
    ];
    let result = setup
        .handler
        .agent_v1_agent_gets_by_tag_ids(customer_id, &tag_ids)
        .await;
    let agents = result.unwrap();
    assert_eq!(agents[0].id, tag_ids[0]);
    let sent = setup.single();
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/agents?customer_id=7fdb8e66-7fe7-11ec-ac90-878b581c2615\
         &tag_ids=36a057ee-4e79-11ec-a0c6-5fc332a14527,36c77248-4e79-11ec-8aa9-93ecdefec6c9"
    );
}

#[tokio::test]
async fn update_fields() {
    let raw = r#"{"id":"1e60cb12-4e7b-11ec-9d7b-532466c1faf1"}"#;
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, raw),
        ut_reply_raw(200, raw),
        ut_reply_raw(200, raw),
        ut_reply_raw(200, raw),
    ]);
    let hdlr = &setup.handler;
    let id = Uuid::parse_str("1e60cb12-4e7b-11ec-9d7b-532466c1faf1").unwrap();
    let result = hdlr
        .agent_v1_agent_update(id, "update name", "update detail", AgentRingMethodDto::RingAll)
        .await;
    assert_eq!(result.unwrap().id, id);
    let addresses = [Address::new(AddressType::Tel, "+821021656521")];
    let result = hdlr.agent_v1_agent_update_addresses(id, &addresses).await;
    assert!(result.is_ok());
    let result = hdlr
        .agent_v1_agent_update_password(timeout::DEFAULT, id, "password1")
        .await;
    assert!(result.is_ok());
    let tag_ids = [Uuid::parse_str("000c4a82-4e7c-11ec-a7e0-fff54f4ae71d").unwrap()];
    let result = hdlr.agent_v1_agent_update_tag_ids(id, &tag_ids).await;
    assert!(result.is_ok());

    let prefix = "/v1/agents/1e60cb12-4e7b-11ec-9d7b-532466c1faf1";
    let expect = [
        (
            prefix.to_string(),
            json!({"name": "update name", "detail": "update detail", "ring_method": "ringall"}),
        ),
        (
            format!("{prefix}/addresses"),
            json!({"addresses": [{"type": "tel", "target": "+821021656521"}]}),
        ),
        (
            format!("{prefix}/password"),
            json!({"password": "password1"}),
        ),
        (
            format!("{prefix}/tag_ids"),
            json!({"tag_ids": ["000c4a82-4e7c-11ec-a7e0-fff54f4ae71d"]}),
        ),
    ];
    let sent = setup.sent();
    assert_eq!(sent.len(), expect.len());
    for (item, (uri, body)) in sent.iter().zip(expect) {
        assert_eq!(item.route.as_str(), UT_ROUTE);
        assert_eq!(item.request.method, RequestMethod::Put);
        assert_eq!(item.request.uri, uri);
        assert_eq!(item.body(), body);
    }
}
