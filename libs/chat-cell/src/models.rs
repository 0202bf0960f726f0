use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use directory_cell::models::{AvailabilitySlot, ConsultationMode, Doctor};
use location_cell::GeoLocation;

// ==============================================================================
// MESSAGES AND OPTIONS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Bot,
}

/// One entry in the conversation log. Bot entries may carry clickable
/// options; user entries never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: MessageSender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChatOption>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: MessageSender::User,
            timestamp: Utc::now(),
            options: Vec::new(),
        }
    }

    pub fn bot(text: impl Into<String>, options: Vec<ChatOption>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: MessageSender::Bot,
            timestamp: Utc::now(),
            options,
        }
    }
}

/// A clickable reply attached to a bot message. The action rides along with
/// its payload so a click can be dispatched without consulting the message
/// it was served in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatOption {
    pub id: Uuid,
    pub text: String,
    #[serde(flatten)]
    pub action: OptionAction,
}

impl ChatOption {
    pub fn new(text: impl Into<String>, action: OptionAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            action,
        }
    }
}

/// Everything an option click can carry, as one closed union. Serialized
/// adjacently tagged, e.g. `{"action": "SELECT_MODE", "data": "video"}`, so
/// clients echo the pair back verbatim when the option is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionAction {
    FindDoctor,
    ViewConsultations,
    GetPrescriptions,
    SelectDoctor(Doctor),
    ConfirmAppointment,
    GoBack,
    SelectSlot(AvailabilitySlot),
    ConfirmSlot,
    SelectAnotherSlot,
    UseLocation,
    ShowAllDoctors,
    SelectMode(ConsultationMode),
    ShowAllPrescriptions,
    SpecifyDate,
    Restart,
}

impl OptionAction {
    /// Wire name of the action, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            OptionAction::FindDoctor => "FIND_DOCTOR",
            OptionAction::ViewConsultations => "VIEW_CONSULTATIONS",
            OptionAction::GetPrescriptions => "GET_PRESCRIPTIONS",
            OptionAction::SelectDoctor(_) => "SELECT_DOCTOR",
            OptionAction::ConfirmAppointment => "CONFIRM_APPOINTMENT",
            OptionAction::GoBack => "GO_BACK",
            OptionAction::SelectSlot(_) => "SELECT_SLOT",
            OptionAction::ConfirmSlot => "CONFIRM_SLOT",
            OptionAction::SelectAnotherSlot => "SELECT_ANOTHER_SLOT",
            OptionAction::UseLocation => "USE_LOCATION",
            OptionAction::ShowAllDoctors => "SHOW_ALL_DOCTORS",
            OptionAction::SelectMode(_) => "SELECT_MODE",
            OptionAction::ShowAllPrescriptions => "SHOW_ALL_PRESCRIPTIONS",
            OptionAction::SpecifyDate => "SPECIFY_DATE",
            OptionAction::Restart => "RESTART",
        }
    }

    /// Rebuild an action from the `(action, data)` pair a client echoes
    /// back. Unknown names and payloads of the wrong shape yield `None`.
    pub fn decode(action: &str, data: Option<Value>) -> Option<Self> {
        let mut raw = serde_json::Map::new();
        raw.insert("action".to_string(), Value::String(action.to_string()));
        if let Some(data) = data {
            raw.insert("data".to_string(), data);
        }
        serde_json::from_value(Value::Object(raw)).ok()
    }
}

/// The three entry points offered whenever the conversation is (re)oriented.
pub fn top_level_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Find a doctor", OptionAction::FindDoctor),
        ChatOption::new("View my consultations", OptionAction::ViewConsultations),
        ChatOption::new("Get my prescriptions", OptionAction::GetPrescriptions),
    ]
}

// ==============================================================================
// DIALOGUE STATE
// ==============================================================================

/// Which handler the next free-text input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatStep {
    #[default]
    Initial,
    AskSymptoms,
    ConfirmLocation,
    DoctorSelection,
    AppointmentConfirmation,
    CollectName,
    CollectPhone,
    CollectConsultationMode,
    ConsultationHistoryPhone,
    PrescriptionPhone,
    PrescriptionDate,
}

impl ChatStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatStep::Initial => "INITIAL",
            ChatStep::AskSymptoms => "ASK_SYMPTOMS",
            ChatStep::ConfirmLocation => "CONFIRM_LOCATION",
            ChatStep::DoctorSelection => "DOCTOR_SELECTION",
            ChatStep::AppointmentConfirmation => "APPOINTMENT_CONFIRMATION",
            ChatStep::CollectName => "COLLECT_NAME",
            ChatStep::CollectPhone => "COLLECT_PHONE",
            ChatStep::CollectConsultationMode => "COLLECT_CONSULTATION_MODE",
            ChatStep::ConsultationHistoryPhone => "CONSULTATION_HISTORY_PHONE",
            ChatStep::PrescriptionPhone => "PRESCRIPTION_PHONE",
            ChatStep::PrescriptionDate => "PRESCRIPTION_DATE",
        }
    }

    /// Parse a stored step name. Anything unrecognized restarts the dialogue
    /// at `Initial` rather than wedging the session.
    pub fn parse(value: &str) -> Self {
        match value {
            "INITIAL" => ChatStep::Initial,
            "ASK_SYMPTOMS" => ChatStep::AskSymptoms,
            "CONFIRM_LOCATION" => ChatStep::ConfirmLocation,
            "DOCTOR_SELECTION" => ChatStep::DoctorSelection,
            "APPOINTMENT_CONFIRMATION" => ChatStep::AppointmentConfirmation,
            "COLLECT_NAME" => ChatStep::CollectName,
            "COLLECT_PHONE" => ChatStep::CollectPhone,
            "COLLECT_CONSULTATION_MODE" => ChatStep::CollectConsultationMode,
            "CONSULTATION_HISTORY_PHONE" => ChatStep::ConsultationHistoryPhone,
            "PRESCRIPTION_PHONE" => ChatStep::PrescriptionPhone,
            "PRESCRIPTION_DATE" => ChatStep::PrescriptionDate,
            _ => ChatStep::Initial,
        }
    }
}

/// Booking details collected step by step through the appointment flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProspect {
    pub name: String,
    pub phone_number: String,
    pub preferred_mode: ConsultationMode,
}

impl PatientProspect {
    /// A fresh prospect carrying nothing but a name. The mode starts at
    /// video, matching the booking form default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: String::new(),
            preferred_mode: ConsultationMode::Video,
        }
    }
}

/// Accumulated dialogue state for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatContext {
    pub current_step: ChatStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_prospect: Option<PatientProspect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_doctor: Option<Doctor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_slot: Option<AvailabilitySlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<GeoLocation>,
}

/// Partial context write: `Some` fields overwrite, `None` fields keep their
/// current value. Fields are never cleared mid-conversation, only by reset.
#[derive(Debug, Clone, Default)]
pub struct ContextUpdate {
    pub current_step: Option<ChatStep>,
    pub patient_prospect: Option<PatientProspect>,
    pub selected_doctor: Option<Doctor>,
    pub selected_slot: Option<AvailabilitySlot>,
    pub user_query: Option<String>,
    pub user_location: Option<GeoLocation>,
}

impl ContextUpdate {
    /// An update that only moves the dialogue to another step.
    pub fn step(step: ChatStep) -> Self {
        Self {
            current_step: Some(step),
            ..Default::default()
        }
    }

    pub fn apply_to(self, context: &mut ChatContext) {
        if let Some(step) = self.current_step {
            context.current_step = step;
        }
        if let Some(prospect) = self.patient_prospect {
            context.patient_prospect = Some(prospect);
        }
        if let Some(doctor) = self.selected_doctor {
            context.selected_doctor = Some(doctor);
        }
        if let Some(slot) = self.selected_slot {
            context.selected_slot = Some(slot);
        }
        if let Some(query) = self.user_query {
            context.user_query = Some(query);
        }
        if let Some(location) = self.user_location {
            context.user_location = Some(location);
        }
    }
}

// ==============================================================================
// REQUEST PAYLOADS
// ==============================================================================

/// Body of `POST /chat/sessions/{session_id}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTextRequest {
    pub text: String,
}

/// Body of `POST /chat/sessions/{session_id}/options`: the `(action, data)`
/// pair copied from a previously served option.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOptionRequest {
    pub action: String,
    #[serde(default)]
    pub data: Option<Value>,
}
