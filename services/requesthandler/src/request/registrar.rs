use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, timeout, AppRequestError, AppRequestErrorReason,
    AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::registrar::{
    ExtensionCreateReqDto, ExtensionDto, ExtensionUpdateReqDto,
};

const RESOURCE: &str = "registrar/extensions";

impl RequestHandler {
    pub async fn registrar_v1_extension_create(
        &self,
        customer_id: Uuid,
        extension: &str,
        password: &str,
        name: &str,
        detail: &str,
    ) -> Result<ExtensionDto, AppRequestError> {
        let body = ExtensionCreateReqDto {
            customer_id,
            extension,
            password,
            domain_id: Uuid::nil(),
            name,
            detail,
        };
        let uri = "/v1/extensions".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }

    pub async fn registrar_v1_extension_update(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
        password: &str,
    ) -> Result<ExtensionDto, AppRequestError> {
        let body = ExtensionUpdateReqDto {
            name,
            detail,
            password,
        };
        let uri = format!("/v1/extensions/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }

    pub async fn registrar_v1_extension_get(
        &self,
        id: Uuid,
    ) -> Result<ExtensionDto, AppRequestError> {
        let uri = format!("/v1/extensions/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }

    pub async fn registrar_v1_extension_delete(
        &self,
        id: Uuid,
    ) -> Result<ExtensionDto, AppRequestError> {
        let uri = format!("/v1/extensions/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }

    pub async fn registrar_v1_extension_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<ExtensionDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/extensions", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }

    /// extension number is a path segment, it must not contain `/`, `?`
    /// or `#`
    pub async fn registrar_v1_extension_get_by_extension(
        &self,
        customer_id: Uuid,
        extension: &str,
    ) -> Result<ExtensionDto, AppRequestError> {
        if extension.is_empty() || extension.contains(['/', '?', '#']) {
            let detail = format!("extension: {extension}");
            return Err(AppRequestError {
                reason: AppRequestErrorReason::EncodeRequest("invalid-path-segment".to_string()),
                detail: Some(detail),
            });
        }
        let uri = format!("/v1/extensions/extension/{extension}?customer_id={customer_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Registrar, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
