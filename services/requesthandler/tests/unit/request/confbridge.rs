use serde_json::json;
use uuid::Uuid;

use requesthandler::api::rpc::dto::call::{
    ConfbridgeFlagDto, ConfbridgeTypeDto, ExternalMediaArgs, MediaDirectionDto,
    RecordingFormatDto,
};
use requesthandler::request::AppRequestErrorReason;
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_empty, ut_reply_raw, ut_setup_handler};

const UT_ROUTE: &str = "bin-manager.call-manager.request";
const UT_CONFBRIDGE_ID: &str = "b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b";

#[tokio::test]
async fn create_confbridge() {
    let reply = json!({
        "id": UT_CONFBRIDGE_ID,
        "type": "conference",
        "flags": null,
        "channel_call_ids": {}
    });
    let setup = ut_setup_handler(vec![ut_reply(200, reply)]);
    let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
    let result = setup
        .handler
        .call_v1_confbridge_create(customer_id, ConfbridgeTypeDto::Conference)
        .await;
    let cbridge = result.unwrap();
    assert_eq!(cbridge.type_, ConfbridgeTypeDto::Conference);
    assert!(cbridge.flags.is_none());
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.uri.as_str(), "/v1/confbridges");
    let expect = json!({
        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
        "type": "conference"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn flag_add_remove() {
    let setup = ut_setup_handler(vec![
        ut_reply(200, json!({"flags": ["no_auto_leave"]})),
        ut_reply(200, json!({"flags": []})),
    ]);
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    let hdlr = &setup.handler;
    let result = hdlr
        .call_v1_confbridge_flag_add(id, ConfbridgeFlagDto::NoAutoLeave)
        .await;
    let flags = result.unwrap().flags.unwrap();
    assert_eq!(flags, vec![ConfbridgeFlagDto::NoAutoLeave]);
    let result = hdlr
        .call_v1_confbridge_flag_remove(id, ConfbridgeFlagDto::NoAutoLeave)
        .await;
    assert!(result.unwrap().flags.unwrap().is_empty());
    let sent = setup.sent();
    assert_eq!(sent[0].request.method, RequestMethod::Post);
    assert_eq!(sent[1].request.method, RequestMethod::Delete);
    for item in sent.iter() {
        assert_eq!(
            item.request.uri.as_str(),
            "/v1/confbridges/b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b/flags"
        );
        assert_eq!(item.body(), json!({"flag": "no_auto_leave"}));
    }
}

#[tokio::test]
async fn external_media_start() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({"id": UT_CONFBRIDGE_ID}))]);
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    let args = ExternalMediaArgs {
        external_media_id: Uuid::parse_str("e1f2a3b4-2b73-11ee-b5c6-d7e8f9a0b1c2").unwrap(),
        external_host: "127.0.0.1:5060".to_string(),
        encapsulation: "rtp".to_string(),
        transport: "udp".to_string(),
        connection_type: "client".to_string(),
        format: "ulaw".to_string(),
        direction_listen: MediaDirectionDto::In,
        direction_speak: MediaDirectionDto::None,
    };
    let result = setup
        .handler
        .call_v1_confbridge_external_media_start(id, &args)
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/confbridges/b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b/external-media"
    );
    let expect = json!({
        "external_media_id": "e1f2a3b4-2b73-11ee-b5c6-d7e8f9a0b1c2",
        "external_host": "127.0.0.1:5060",
        "encapsulation": "rtp",
        "transport": "udp",
        "connection_type": "client",
        "format": "ulaw",
        "direction_listen": "in",
        "direction_speak": ""
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn recording_start() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({}))]);
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    let result = setup
        .handler
        .call_v1_confbridge_recording_start(id, RecordingFormatDto::Wav, 0, "#", 600, Uuid::nil())
        .await;
    assert!(result.is_ok());
    let sent = setup.single();
    let expect = json!({
        "format": "wav",
        "end_of_silence": 0,
        "end_of_key": "#",
        "duration": 600,
        "on_end_flow_id": "00000000-0000-0000-0000-000000000000"
    });
    assert_eq!(sent.body(), expect);
}

#[tokio::test]
async fn ring_answer_status_only() {
    let setup = ut_setup_handler(vec![ut_reply_empty(200), ut_reply_empty(409)]);
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    let hdlr = &setup.handler;
    let result = hdlr.call_v1_confbridge_ring(id).await;
    assert!(result.is_ok());
    let result = hdlr.call_v1_confbridge_answer(id).await;
    let e = result.unwrap_err();
    assert!(matches!(e.reason, AppRequestErrorReason::RemoteStatus(409)));
    let sent = setup.sent();
    assert_eq!(
        sent[0].request.uri.as_str(),
        "/v1/confbridges/b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b/ring"
    );
    assert_eq!(
        sent[1].request.uri.as_str(),
        "/v1/confbridges/b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b/answer"
    );
    assert!(sent[1].request.data.is_empty());
}

#[tokio::test]
async fn get_with_channel_calls() {
    let raw = r#"{"id":"b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b","type":"connect","bridge_id":"","channel_call_ids":{"1589711094.100":"ecf1e0a2-5fa1-11ed-9c8b-f7b2a1ad6b56"},"recording_id":"","recording_ids":null,"tm_create":"2020-09-20 03:23:20.995000"}"#;
    let setup = ut_setup_handler(vec![ut_reply_raw(200, raw)]);
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    let cbridge = setup.handler.call_v1_confbridge_get(id).await.unwrap();
    assert_eq!(cbridge.type_, ConfbridgeTypeDto::Connect);
    assert!(cbridge.recording_id.is_nil());
    assert!(cbridge.recording_ids.is_none());
    assert!(cbridge.tm_create.is_some());
    let call_ids = cbridge.channel_call_ids.unwrap();
    let expect = Uuid::parse_str("ecf1e0a2-5fa1-11ed-9c8b-f7b2a1ad6b56").unwrap();
    assert_eq!(call_ids.get("1589711094.100"), Some(&expect));
    let sent = setup.single();
    assert_eq!(sent.request.method, RequestMethod::Get);
    assert_eq!(
        sent.request.uri.as_str(),
        "/v1/confbridges/b7e1c2d0-2b73-11ee-8a1b-2c3d4e5f6a7b"
    );
}

#[tokio::test]
async fn stop_media_and_terminate() {
    let reply = format!(r#"{{"id":"{UT_CONFBRIDGE_ID}"}}"#);
    let setup = ut_setup_handler(vec![
        ut_reply_raw(200, reply.as_str()),
        ut_reply_raw(200, reply.as_str()),
        ut_reply_raw(200, reply.as_str()),
    ]);
    let hdlr = &setup.handler;
    let id = Uuid::parse_str(UT_CONFBRIDGE_ID).unwrap();
    assert!(hdlr.call_v1_confbridge_external_media_stop(id).await.is_ok());
    assert!(hdlr.call_v1_confbridge_recording_stop(id).await.is_ok());
    assert!(hdlr.call_v1_confbridge_terminate(id).await.is_ok());
    let sent = setup.sent();
    let actual = sent
        .iter()
        .map(|s| (s.request.method, s.request.uri.clone()))
        .collect::<Vec<_>>();
    let expect = vec![
        (
            RequestMethod::Delete,
            format!("/v1/confbridges/{UT_CONFBRIDGE_ID}/external-media"),
        ),
        (
            RequestMethod::Post,
            format!("/v1/confbridges/{UT_CONFBRIDGE_ID}/recording_stop"),
        ),
        (
            RequestMethod::Post,
            format!("/v1/confbridges/{UT_CONFBRIDGE_ID}/terminate"),
        ),
    ];
    assert_eq!(actual, expect);
}
