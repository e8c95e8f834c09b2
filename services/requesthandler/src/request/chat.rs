use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::chat::{
    ChatBasicInfoReqDto, ChatCreateReqDto, ChatDto, ChatParticipantReqDto, ChatRoomOwnerReqDto,
    ChatTypeDto,
};

const RESOURCE: &str = "chat/chats";

impl RequestHandler {
    #[allow(clippy::too_many_arguments)]
    pub async fn chat_v1_chat_create(
        &self,
        customer_id: Uuid,
        type_: ChatTypeDto,
        room_owner_id: Uuid,
        participant_ids: &[Uuid],
        name: &str,
        detail: &str,
    ) -> Result<ChatDto, AppRequestError> {
        let body = ChatCreateReqDto {
            customer_id,
            type_,
            room_owner_id,
            participant_ids,
            name,
            detail,
        };
        let uri = "/v1/chats".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_get(&self, id: Uuid) -> Result<ChatDto, AppRequestError> {
        let uri = format!("/v1/chats/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<ChatDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/chats", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_delete(&self, id: Uuid) -> Result<ChatDto, AppRequestError> {
        let uri = format!("/v1/chats/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_update_basic_info(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<ChatDto, AppRequestError> {
        let body = ChatBasicInfoReqDto { name, detail };
        let uri = format!("/v1/chats/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_update_room_owner_id(
        &self,
        id: Uuid,
        room_owner_id: Uuid,
    ) -> Result<ChatDto, AppRequestError> {
        let body = ChatRoomOwnerReqDto { room_owner_id };
        let uri = format!("/v1/chats/{id}/room_owner_id");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_add_participant_id(
        &self,
        id: Uuid,
        participant_id: Uuid,
    ) -> Result<ChatDto, AppRequestError> {
        let body = ChatParticipantReqDto { participant_id };
        let uri = format!("/v1/chats/{id}/participant_ids");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }

    pub async fn chat_v1_chat_remove_participant_id(
        &self,
        id: Uuid,
        participant_id: Uuid,
    ) -> Result<ChatDto, AppRequestError> {
        let uri = format!("/v1/chats/{id}/participant_ids/{participant_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Chat, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
