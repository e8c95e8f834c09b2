/// Request queues of the managers, each manager consumes requests from
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueName {
    Agent,
    AI,
    Billing,
    Call,
    Campaign,
    Chat,
    Conference,
    Customer,
    Flow,
    Number,
    Outdial,
    Queue,
    Registrar,
    Talk,
    // label of scheduled requests, the broker holds them in the delay
    // exchange until their scheduled time
    Delay,
}

impl QueueName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "bin-manager.agent-manager.request",
            Self::AI => "bin-manager.ai-manager.request",
            Self::Billing => "bin-manager.billing-manager.request",
            Self::Call => "bin-manager.call-manager.request",
            Self::Campaign => "bin-manager.campaign-manager.request",
            Self::Chat => "bin-manager.chat-manager.request",
            Self::Conference => "bin-manager.conference-manager.request",
            Self::Customer => "bin-manager.customer-manager.request",
            Self::Flow => "bin-manager.flow-manager.request",
            Self::Number => "bin-manager.number-manager.request",
            Self::Outdial => "bin-manager.outdial-manager.request",
            Self::Queue => "bin-manager.queue-manager.request",
            Self::Registrar => "bin-manager.registrar-manager.request",
            Self::Talk => "bin-manager.talk-manager.request",
            Self::Delay => "bin-manager.delay",
        }
    }
}

/// request queue of the Asterisk proxy running next to the given Asterisk
/// instance, the identifier is usually the MAC address of the instance
pub fn asterisk_request_queue(asterisk_id: &str) -> String {
    format!("asterisk.{asterisk_id}.request")
}
