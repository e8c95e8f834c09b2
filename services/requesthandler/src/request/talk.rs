use uuid::Uuid;

use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{page_uri, parse_response, timeout, AppRequestError, AppRequestProps, RequestHandler};
use crate::api::rpc::dto::talk::{
    TalkMessageCreateReqDto, TalkMessageDto, TalkMessageTypeDto, TalkReactionReqDto,
};

const RESOURCE: &str = "talk/messages";

impl RequestHandler {
    pub async fn talk_v1_message_get(&self, id: Uuid) -> Result<TalkMessageDto, AppRequestError> {
        let uri = format!("/v1/messages/{id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Talk, props).await?;
        parse_response(resp)
    }

    /// `parent_id` starts or continues a thread under the given message
    pub async fn talk_v1_message_create(
        &self,
        chat_id: Uuid,
        parent_id: Option<Uuid>,
        owner_type: &str,
        owner_id: Uuid,
        type_: TalkMessageTypeDto,
        text: &str,
    ) -> Result<TalkMessageDto, AppRequestError> {
        let body = TalkMessageCreateReqDto {
            chat_id,
            parent_id,
            owner_type,
            owner_id,
            type_,
            text,
        };
        let uri = "/v1/messages".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Talk, props).await?;
        parse_response(resp)
    }

    pub async fn talk_v1_message_delete(
        &self,
        id: Uuid,
    ) -> Result<TalkMessageDto, AppRequestError> {
        let uri = format!("/v1/messages/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Talk, props).await?;
        parse_response(resp)
    }

    pub async fn talk_v1_message_list(
        &self,
        page_token: &str,
        page_size: u64,
    ) -> Result<Vec<TalkMessageDto>, AppRequestError> {
        let uri = page_uri("/v1/messages", page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).timeout(timeout::LIST);
        let resp = self.send_to(QueueName::Talk, props).await?;
        parse_response(resp)
    }

    /// the message with all its reactions is returned
    pub async fn talk_v1_message_reaction_create(
        &self,
        id: Uuid,
        owner_type: &str,
        owner_id: Uuid,
        emoji: &str,
    ) -> Result<TalkMessageDto, AppRequestError> {
        let body = TalkReactionReqDto {
            owner_type,
            owner_id,
            emoji,
        };
        let uri = format!("/v1/messages/{id}/reactions");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "talk/messages/reactions")
            .json(&body)?;
        let resp = self.send_to(QueueName::Talk, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
