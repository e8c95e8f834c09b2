use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{is_empty_map, is_empty_str};

/// hangup causes defined by Q.850, only the ones used in practice
pub mod channel_cause {
    pub const UNALLOCATED: u16 = 1;
    pub const NORMAL_CLEARING: u16 = 16;
    pub const USER_BUSY: u16 = 17;
    pub const NO_ANSWER: u16 = 19;
    pub const CALL_REJECTED: u16 = 21;
    pub const INTERWORKING: u16 = 127;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AriChannelStateDto {
    #[default]
    #[serde(rename = "")]
    None,
    Down,
    Rsrvd,
    OffHook,
    Dialing,
    Ring,
    Ringing,
    Up,
    Busy,
    #[serde(rename = "Dialing Offhook")]
    DialingOffHook,
    #[serde(rename = "Pre-ring")]
    PreRing,
    Mute,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AriCallerIdDto {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AriDialplanDto {
    pub context: String,
    pub exten: String,
    pub priority: i64,
    pub app_name: String,
    pub app_data: String,
}

/// channel as reported by the Asterisk REST interface
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AriChannelDto {
    pub id: String,
    pub name: String,
    pub state: AriChannelStateDto,
    pub caller: AriCallerIdDto,
    pub connected: AriCallerIdDto,
    pub accountcode: String,
    pub dialplan: AriDialplanDto,
    // not RFC3339, e.g. `2020-05-17T10:24:54.396+0000`
    pub creationtime: String,
    pub language: String,
    pub channelvars: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelTechDto {
    #[default]
    #[serde(rename = "")]
    None,
    Local,
    Pjsip,
    Sip,
    Snoop,
    Unicastrtp,
}

impl ChannelTechDto {
    /// technology is the prefix of channel name, e.g. `PJSIP/call-in-0019`
    fn from_channel_name(name: &str) -> Self {
        let prefix = name.split('/').next().unwrap_or_default();
        match prefix.to_lowercase().as_str() {
            "local" => Self::Local,
            "pjsip" => Self::Pjsip,
            "sip" => Self::Sip,
            "snoop" => Self::Snoop,
            "unicastrtp" => Self::Unicastrtp,
            _others => Self::None,
        }
    }
}

/// channel in the form the call manager keeps track of
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelDto {
    pub id: String,
    pub asterisk_id: String,
    pub name: String,
    pub tech: ChannelTechDto,
    pub source_name: String,
    pub source_number: String,
    pub destination_name: String,
    pub destination_number: String,
    pub state: AriChannelStateDto,
    pub data: BTreeMap<String, String>,
}

impl From<AriChannelDto> for ChannelDto {
    fn from(value: AriChannelDto) -> Self {
        let AriChannelDto {
            id,
            name,
            state,
            caller,
            connected,
            dialplan,
            channelvars,
            ..
        } = value;
        let tech = ChannelTechDto::from_channel_name(name.as_str());
        Self {
            id,
            asterisk_id: String::new(),
            name,
            tech,
            source_name: caller.name,
            source_number: caller.number,
            destination_name: connected.name,
            destination_number: dialplan.exten,
            state,
            data: channelvars.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnoopDirectionDto {
    #[default]
    #[serde(rename = "")]
    None,
    Both,
    Out,
    In,
}

impl SnoopDirectionDto {
    pub(crate) fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AriPlaybackDto {
    pub id: String,
    pub media_uri: String,
    pub target_uri: String,
    pub language: String,
    pub state: String,
}

/// fields of a channel originated through the Asterisk REST interface,
/// empty fields are omitted from the request
#[derive(Debug, Clone, Default)]
pub struct AstChannelCreateArgs {
    pub channel_id: String,
    pub app_args: String,
    pub endpoint: String,
    pub other_channel_id: String,
    pub originator: String,
    pub formats: String,
    pub variables: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AstChannelCreateReqDto<'a> {
    #[serde(skip_serializing_if = "is_empty_str")]
    pub endpoint: &'a str,
    pub app: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub app_args: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub channel_id: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub other_channel_id: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub originator: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub formats: &'a str,
    #[serde(skip_serializing_if = "is_empty_map")]
    pub variables: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
pub(crate) struct AstContinueReqDto<'a> {
    pub context: &'a str,
    pub extension: &'a str,
    pub priority: i64,
    pub label: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AstHangupReqDto {
    pub reason_code: String,
}

#[derive(Serialize)]
pub(crate) struct AstVariableReqDto<'a> {
    pub variable: &'a str,
    pub value: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AstVariableQuery<'a> {
    pub variable: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct AstVariableReplyDto {
    #[serde(default)]
    pub value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AstSnoopReqDto<'a> {
    #[serde(skip_serializing_if = "SnoopDirectionDto::is_none")]
    pub spy: SnoopDirectionDto,
    #[serde(skip_serializing_if = "SnoopDirectionDto::is_none")]
    pub whisper: SnoopDirectionDto,
    pub app: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub app_args: &'a str,
    pub snoop_id: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AstDtmfReqDto<'a> {
    pub dtmf: &'a str,
    pub duration: u32,
    pub before: u32,
    pub between: u32,
    pub after: u32,
}

#[derive(Serialize)]
pub(crate) struct AstDialReqDto<'a> {
    #[serde(skip_serializing_if = "is_empty_str")]
    pub caller: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AstPlayReqDto<'a> {
    pub media: &'a [String],
    #[serde(skip_serializing_if = "is_empty_str")]
    pub playback_id: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub lang: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    pub offsetms: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub skipms: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AstRecordReqDto<'a> {
    pub name: &'a str,
    pub format: &'a str,
    pub max_duration_seconds: u32,
    pub max_silence_seconds: u32,
    pub beep: bool,
    pub terminate_on: &'a str,
    pub if_exists: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AstExternalMediaReqDto<'a> {
    pub channel_id: &'a str,
    pub app: &'a str,
    pub external_host: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub encapsulation: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub transport: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub connection_type: &'a str,
    pub format: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub direction: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    pub data: &'a str,
    #[serde(skip_serializing_if = "is_empty_map")]
    pub variables: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
pub(crate) struct AstMuteReqDto<'a> {
    pub direction: &'a str,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}
