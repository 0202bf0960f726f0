use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use directory_cell::models::{AvailabilitySlot, ConsultationMode, Doctor};
use directory_cell::services::{
    DoctorDirectoryService, MedicalRecordsService, DEFAULT_NEARBY_RADIUS_KM,
};
use location_cell::LocationProvider;

use crate::models::{
    top_level_options, ChatOption, ChatStep, ContextUpdate, OptionAction, PatientProspect,
};
use crate::services::intents::{self, Intent};
use crate::store::ConversationStore;

/// Display format for slot and record dates (month/day/year, no padding).
const DATE_DISPLAY: &str = "%-m/%-d/%Y";

/// Display format for consultation times, e.g. "09:00 AM".
const TIME_DISPLAY: &str = "%I:%M %p";

/// Formats accepted when the user types a date by hand, most common first.
const DATE_INPUT_FORMATS: &[&str] =
    &["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// Shortest input accepted as a phone number.
const MIN_PHONE_LEN: usize = 10;

/// The deterministic dialogue core. Free-text input dispatches on the
/// session's current step; option clicks dispatch on the action alone, so a
/// click on an old message still acts on the current context. Every event
/// appends at least one bot reply before returning.
pub struct DialogueEngine {
    directory: DoctorDirectoryService,
    records: MedicalRecordsService,
    location: Arc<dyn LocationProvider>,
}

impl DialogueEngine {
    pub fn new(location: Arc<dyn LocationProvider>) -> Self {
        Self::with_services(
            DoctorDirectoryService::new(),
            MedicalRecordsService::new(),
            location,
        )
    }

    pub fn with_services(
        directory: DoctorDirectoryService,
        records: MedicalRecordsService,
        location: Arc<dyn LocationProvider>,
    ) -> Self {
        Self {
            directory,
            records,
            location,
        }
    }

    /// Record a free-text message and answer it according to the current
    /// step. Empty input is handled like any other text.
    pub async fn process_text(&self, store: &mut ConversationStore, input: &str) {
        store.push_user(input);

        let step = store.context().current_step;
        let lower = input.to_lowercase();
        debug!("Processing text input at step {}", step.as_str());

        match step {
            ChatStep::Initial => self.text_at_initial(store, &lower),
            ChatStep::AskSymptoms => self.record_symptoms(store, input),
            ChatStep::ConfirmLocation => self.text_at_confirm_location(store, &lower).await,
            ChatStep::DoctorSelection => self.text_at_doctor_selection(store, &lower),
            ChatStep::AppointmentConfirmation => {
                self.text_at_appointment_confirmation(store, &lower)
            }
            ChatStep::CollectName => self.collect_name(store, input),
            ChatStep::CollectPhone => self.collect_phone(store, input),
            ChatStep::CollectConsultationMode => self.collect_consultation_mode(store, &lower),
            ChatStep::ConsultationHistoryPhone => self.lookup_consultations(store, input),
            ChatStep::PrescriptionPhone => self.lookup_prescriptions(store, input),
            ChatStep::PrescriptionDate => self.prescriptions_for_date_input(store, input),
        }
    }

    /// Dispatch a clicked option against the current context, whichever turn
    /// the option was served in.
    pub async fn process_option(&self, store: &mut ConversationStore, action: OptionAction) {
        debug!("Processing option action {}", action.name());

        match action {
            OptionAction::FindDoctor => self.prompt_symptoms(store),
            OptionAction::ViewConsultations => self.prompt_history_phone(store),
            OptionAction::GetPrescriptions => self.prompt_prescription_phone(store),
            OptionAction::SelectDoctor(doctor) => self.select_doctor(store, doctor),
            OptionAction::ConfirmAppointment => self.prompt_patient_name(store),
            OptionAction::GoBack => {
                let query = store.context().user_query.clone().unwrap_or_default();
                self.record_symptoms(store, &query);
            }
            OptionAction::SelectSlot(slot) => self.select_slot(store, slot),
            OptionAction::ConfirmSlot => self.complete_booking(store),
            OptionAction::SelectAnotherSlot => match store.context().selected_doctor.clone() {
                Some(doctor) => self.list_doctor_slots(store, &doctor),
                None => {
                    warn!("SELECT_ANOTHER_SLOT clicked with no doctor in context");
                    self.fallback(store);
                }
            },
            OptionAction::UseLocation => self.locate_and_list_doctors(store).await,
            OptionAction::ShowAllDoctors => self.show_all_doctors(store),
            OptionAction::SelectMode(mode) => self.select_mode(store, mode),
            OptionAction::ShowAllPrescriptions => self.show_all_prescriptions(store),
            OptionAction::SpecifyDate => self.prompt_prescription_date(store),
            OptionAction::Restart => self.restart(store),
        }
    }

    /// Entry point for clicks whose `(action, data)` pair failed to decode.
    pub fn handle_unknown_action(&self, store: &mut ConversationStore, action: &str) {
        warn!("Unknown option action {:?}", action);
        self.fallback(store);
    }

    // ==============================================================================
    // FREE-TEXT HANDLERS
    // ==============================================================================

    fn text_at_initial(&self, store: &mut ConversationStore, lower: &str) {
        match intents::classify(lower) {
            Some(Intent::FindDoctor) => self.prompt_symptoms(store),
            Some(Intent::ConsultationHistory) => self.prompt_history_phone(store),
            Some(Intent::Prescriptions) => self.prompt_prescription_phone(store),
            None => {
                store.push_bot(
                    "I can help you find a doctor, view your consultation history, or retrieve prescriptions. What would you like to do?",
                    top_level_options(),
                );
            }
        }
    }

    /// Store the symptom description and move on to the location question.
    /// Also re-entered via GO_BACK and a declined doctor selection, replaying
    /// the remembered query.
    fn record_symptoms(&self, store: &mut ConversationStore, symptoms: &str) {
        store.apply(ContextUpdate {
            user_query: Some(symptoms.to_string()),
            ..Default::default()
        });
        store.push_bot(
            "Thank you for providing your symptoms. Would you like me to use your current location to find doctors near you?",
            vec![
                ChatOption::new("Yes, use my location", OptionAction::UseLocation),
                ChatOption::new("No, show all doctors", OptionAction::ShowAllDoctors),
            ],
        );
        store.apply(ContextUpdate::step(ChatStep::ConfirmLocation));
    }

    async fn text_at_confirm_location(&self, store: &mut ConversationStore, lower: &str) {
        if intents::contains_any(lower, intents::LOCATION_YES_WORDS) {
            self.locate_and_list_doctors(store).await;
        } else {
            self.show_all_doctors(store);
        }
    }

    fn text_at_doctor_selection(&self, store: &mut ConversationStore, lower: &str) {
        if intents::contains_any(lower, intents::SCHEDULE_YES_WORDS) {
            self.prompt_patient_name(store);
        } else {
            let query = store.context().user_query.clone().unwrap_or_default();
            self.record_symptoms(store, &query);
        }
    }

    fn text_at_appointment_confirmation(&self, store: &mut ConversationStore, lower: &str) {
        if intents::contains_any(lower, intents::CONFIRM_YES_WORDS) {
            self.complete_booking(store);
        } else {
            match store.context().selected_doctor.clone() {
                Some(doctor) => self.list_doctor_slots(store, &doctor),
                None => {
                    warn!("Appointment declined with no doctor in context");
                    self.fallback(store);
                }
            }
        }
    }

    fn collect_name(&self, store: &mut ConversationStore, input: &str) {
        let name = if input == "anonymous" {
            "Anonymous Patient"
        } else {
            input
        };

        store.apply(ContextUpdate {
            patient_prospect: Some(PatientProspect::new(name)),
            current_step: Some(ChatStep::CollectPhone),
            ..Default::default()
        });
        store.push_bot("Thank you. Please provide your phone number:", Vec::new());
    }

    fn collect_phone(&self, store: &mut ConversationStore, input: &str) {
        if input.chars().count() < MIN_PHONE_LEN {
            store.push_bot(
                "Please provide a valid phone number with at least 10 digits.",
                Vec::new(),
            );
            return;
        }

        let mut prospect = store
            .context()
            .patient_prospect
            .clone()
            .unwrap_or_else(|| PatientProspect::new(""));
        prospect.phone_number = input.to_string();

        store.apply(ContextUpdate {
            patient_prospect: Some(prospect),
            current_step: Some(ChatStep::CollectConsultationMode),
            ..Default::default()
        });

        match store.context().selected_doctor.clone() {
            Some(doctor) => {
                let options = doctor
                    .supported_modes
                    .iter()
                    .map(|mode| {
                        ChatOption::new(
                            format!("{} Call", mode.display_name()),
                            OptionAction::SelectMode(*mode),
                        )
                    })
                    .collect();
                store.push_bot(
                    "Thank you. Please select your preferred consultation mode:",
                    options,
                );
            }
            None => {
                warn!("Phone number collected with no doctor in context");
                self.fallback(store);
            }
        }
    }

    fn collect_consultation_mode(&self, store: &mut ConversationStore, lower: &str) {
        let mode = if lower.contains("video") {
            ConsultationMode::Video
        } else if lower.contains("audio") {
            ConsultationMode::Audio
        } else {
            ConsultationMode::Chat
        };

        self.store_preferred_mode(store, mode);

        match store.context().selected_doctor.clone() {
            Some(doctor) => self.list_doctor_slots(store, &doctor),
            None => {
                warn!("Consultation mode chosen with no doctor in context");
                self.fallback(store);
            }
        }
    }

    fn lookup_consultations(&self, store: &mut ConversationStore, phone: &str) {
        let consultations = self.records.consultations_by_phone(phone);

        if consultations.is_empty() {
            store.push_bot(
                format!(
                    "I couldn't find any consultations for phone number {}. Would you like to schedule a new consultation?",
                    phone
                ),
                vec![
                    ChatOption::new("Yes, find a doctor", OptionAction::FindDoctor),
                    ChatOption::new("No, start over", OptionAction::Restart),
                ],
            );
        } else {
            store.push_bot(
                format!(
                    "I found {} consultations for phone number {}:",
                    consultations.len(),
                    phone
                ),
                Vec::new(),
            );

            for consultation in &consultations {
                store.push_bot(
                    format!(
                        "Date: {} at {}\nDoctor: {}\nSymptoms: {}\nStatus: {}",
                        consultation.consultation_date.format(DATE_DISPLAY),
                        consultation.consultation_date.format(TIME_DISPLAY),
                        consultation.doctor_name,
                        consultation.symptoms,
                        consultation.status
                    ),
                    Vec::new(),
                );
            }

            store.push_bot(
                "Is there anything else I can help you with?",
                vec![
                    ChatOption::new("Find a doctor", OptionAction::FindDoctor),
                    ChatOption::new("Get my prescriptions", OptionAction::GetPrescriptions),
                    ChatOption::new("Start over", OptionAction::Restart),
                ],
            );
        }

        store.apply(ContextUpdate::step(ChatStep::Initial));
    }

    fn lookup_prescriptions(&self, store: &mut ConversationStore, phone: &str) {
        let prescriptions = self.records.prescriptions_by_phone(phone, None);

        if prescriptions.is_empty() {
            store.push_bot(
                format!(
                    "I couldn't find any prescriptions for phone number {}. Would you like to schedule a consultation with a doctor?",
                    phone
                ),
                vec![
                    ChatOption::new("Yes, find a doctor", OptionAction::FindDoctor),
                    ChatOption::new("No, start over", OptionAction::Restart),
                ],
            );
            store.apply(ContextUpdate::step(ChatStep::Initial));
            return;
        }

        store.push_bot(
            format!(
                "I found {} prescriptions for phone number {}. Would you like to see all prescriptions or specify a date?",
                prescriptions.len(),
                phone
            ),
            vec![
                ChatOption::new("Show all prescriptions", OptionAction::ShowAllPrescriptions),
                ChatOption::new("Specify a date", OptionAction::SpecifyDate),
            ],
        );

        // Remember the phone so the follow-up turn can run the date filter.
        let mut prospect = store
            .context()
            .patient_prospect
            .clone()
            .unwrap_or_else(|| PatientProspect::new(""));
        prospect.phone_number = phone.to_string();

        store.apply(ContextUpdate {
            patient_prospect: Some(prospect),
            current_step: Some(ChatStep::PrescriptionDate),
            ..Default::default()
        });
    }

    fn prescriptions_for_date_input(&self, store: &mut ConversationStore, input: &str) {
        let Some(phone) = self.stored_phone(store) else {
            store.push_bot(
                "I need your phone number first to find your prescriptions.",
                Vec::new(),
            );
            store.apply(ContextUpdate::step(ChatStep::PrescriptionPhone));
            return;
        };

        let lower = input.to_lowercase();
        if lower == "all" || lower.contains("show all") {
            self.list_all_prescriptions(store, &phone);
            store.apply(ContextUpdate::step(ChatStep::Initial));
            return;
        }

        match parse_user_date(input) {
            Some(date) => {
                let prescriptions = self.records.prescriptions_by_phone(&phone, Some(date));

                if prescriptions.is_empty() {
                    store.push_bot(
                        format!("No prescriptions found for {}.", date.format(DATE_DISPLAY)),
                        Vec::new(),
                    );
                } else {
                    store.push_bot(
                        format!("Here are prescriptions for {}:", date.format(DATE_DISPLAY)),
                        Vec::new(),
                    );
                    for prescription in &prescriptions {
                        store.push_bot(format!("Prescription: {}", prescription.text), Vec::new());
                    }
                }

                store.push_bot(
                    "Is there anything else I can help you with?",
                    vec![
                        ChatOption::new("Find a doctor", OptionAction::FindDoctor),
                        ChatOption::new("View all prescriptions", OptionAction::GetPrescriptions),
                        ChatOption::new("Start over", OptionAction::Restart),
                    ],
                );
                store.apply(ContextUpdate::step(ChatStep::Initial));
            }
            None => {
                // Stay on this step so the user can try the date again.
                store.push_bot(
                    "I couldn't understand that date. Please enter a date in MM/DD/YYYY format or type 'all' to see all prescriptions.",
                    Vec::new(),
                );
            }
        }
    }

    // ==============================================================================
    // OPTION HANDLERS
    // ==============================================================================

    fn prompt_symptoms(&self, store: &mut ConversationStore) {
        store.push_bot(
            "I can help you find a doctor. Can you tell me briefly about your symptoms?",
            Vec::new(),
        );
        store.apply(ContextUpdate::step(ChatStep::AskSymptoms));
    }

    fn prompt_history_phone(&self, store: &mut ConversationStore) {
        store.push_bot(
            "I can help you access your consultation history. Please provide the phone number you used for your consultations:",
            Vec::new(),
        );
        store.apply(ContextUpdate::step(ChatStep::ConsultationHistoryPhone));
    }

    fn prompt_prescription_phone(&self, store: &mut ConversationStore) {
        store.push_bot(
            "I can help you retrieve your prescriptions. Please provide the phone number you used for your consultations:",
            Vec::new(),
        );
        store.apply(ContextUpdate::step(ChatStep::PrescriptionPhone));
    }

    fn select_doctor(&self, store: &mut ConversationStore, doctor: Doctor) {
        let name = doctor.name.clone();
        store.apply(ContextUpdate {
            selected_doctor: Some(doctor),
            current_step: Some(ChatStep::DoctorSelection),
            ..Default::default()
        });
        store.push_bot(
            format!(
                "You've selected {}. Would you like to schedule an appointment with them?",
                name
            ),
            vec![
                ChatOption::new("Yes, schedule appointment", OptionAction::ConfirmAppointment),
                ChatOption::new("No, go back", OptionAction::GoBack),
            ],
        );
    }

    fn prompt_patient_name(&self, store: &mut ConversationStore) {
        store.push_bot(
            "Great! I'll need some information to book your appointment. What is your full name? (You may choose 'anonymous' if preferred)",
            Vec::new(),
        );
        store.apply(ContextUpdate::step(ChatStep::CollectName));
    }

    fn select_slot(&self, store: &mut ConversationStore, slot: AvailabilitySlot) {
        let formatted_date = slot.date.format(DATE_DISPLAY).to_string();
        let time = slot.time.clone();
        store.apply(ContextUpdate {
            selected_slot: Some(slot),
            current_step: Some(ChatStep::AppointmentConfirmation),
            ..Default::default()
        });
        store.push_bot(
            format!(
                "You've selected the slot on {} at {}. Would you like to confirm this appointment?",
                formatted_date, time
            ),
            confirm_slot_options(),
        );
    }

    fn select_mode(&self, store: &mut ConversationStore, mode: ConsultationMode) {
        self.store_preferred_mode(store, mode);

        let context = store.context();
        match (
            context.selected_doctor.clone(),
            context.selected_slot.clone(),
        ) {
            (Some(doctor), Some(slot)) => self.confirm_slot_choice(store, &doctor, &slot),
            (Some(doctor), None) => self.list_doctor_slots(store, &doctor),
            _ => {
                warn!("SELECT_MODE clicked with no doctor in context");
                self.fallback(store);
            }
        }
    }

    fn show_all_prescriptions(&self, store: &mut ConversationStore) {
        let Some(phone) = self.stored_phone(store) else {
            store.push_bot(
                "I need your phone number first to find your prescriptions.",
                Vec::new(),
            );
            store.apply(ContextUpdate::step(ChatStep::PrescriptionPhone));
            return;
        };

        self.list_all_prescriptions(store, &phone);
        store.apply(ContextUpdate::step(ChatStep::Initial));
    }

    fn prompt_prescription_date(&self, store: &mut ConversationStore) {
        store.push_bot("Please enter the date in MM/DD/YYYY format:", Vec::new());
        store.apply(ContextUpdate::step(ChatStep::PrescriptionDate));
    }

    /// Reorient the conversation without discarding what is already known.
    fn restart(&self, store: &mut ConversationStore) {
        store.apply(ContextUpdate::step(ChatStep::Initial));
        store.push_bot("How can I help you today?", top_level_options());
    }

    // ==============================================================================
    // SHARED FLOWS
    // ==============================================================================

    /// Announce the lookup, resolve a position, then list doctors: the ones
    /// nearby when a position comes back and any are in range, the whole
    /// roster otherwise.
    async fn locate_and_list_doctors(&self, store: &mut ConversationStore) {
        store.push_bot("Accessing your location...", Vec::new());

        match self.location.request_location().await {
            Some(location) => {
                store.apply(ContextUpdate {
                    user_location: Some(location.clone()),
                    ..Default::default()
                });

                let nearby = self.directory.find_nearby(
                    location.latitude,
                    location.longitude,
                    DEFAULT_NEARBY_RADIUS_KM,
                );

                if nearby.is_empty() {
                    store.push_bot(
                        "I couldn't find any doctors near your location. Here are all available doctors:",
                        Vec::new(),
                    );
                    self.list_doctors(store, &self.directory.list_doctors());
                } else {
                    info!("Offering {} doctors near the user's position", nearby.len());
                    store.push_bot(
                        format!(
                            "I found {} doctors near your location. Here they are:",
                            nearby.len()
                        ),
                        Vec::new(),
                    );
                    self.list_doctors(store, &nearby);
                }
            }
            None => {
                store.push_bot(
                    "I couldn't access your location. Here are all available doctors:",
                    Vec::new(),
                );
                self.list_doctors(store, &self.directory.list_doctors());
            }
        }
    }

    fn show_all_doctors(&self, store: &mut ConversationStore) {
        store.push_bot("Here are all available doctors:", Vec::new());
        self.list_doctors(store, &self.directory.list_doctors());
    }

    fn list_doctors(&self, store: &mut ConversationStore, doctors: &[Doctor]) {
        let options = doctors
            .iter()
            .map(|doctor| {
                ChatOption::new(
                    format!(
                        "{} - {} ({} yrs)",
                        doctor.name, doctor.specialization, doctor.experience
                    ),
                    OptionAction::SelectDoctor(doctor.clone()),
                )
            })
            .collect();
        store.push_bot("Please select a doctor from the list:", options);
    }

    fn list_doctor_slots(&self, store: &mut ConversationStore, doctor: &Doctor) {
        let options = doctor
            .available_slots
            .iter()
            .map(|slot| {
                ChatOption::new(
                    format!("{} at {}", slot.date.format(DATE_DISPLAY), slot.time),
                    OptionAction::SelectSlot(slot.clone()),
                )
            })
            .collect();
        store.push_bot(
            format!("Here are the available slots for {}:", doctor.name),
            options,
        );
    }

    fn confirm_slot_choice(
        &self,
        store: &mut ConversationStore,
        doctor: &Doctor,
        slot: &AvailabilitySlot,
    ) {
        store.push_bot(
            format!(
                "You've selected {} on {} at {}. Would you like to confirm this appointment?",
                doctor.name,
                slot.date.format(DATE_DISPLAY),
                slot.time
            ),
            confirm_slot_options(),
        );
        store.apply(ContextUpdate::step(ChatStep::AppointmentConfirmation));
    }

    fn complete_booking(&self, store: &mut ConversationStore) {
        let context = store.context();
        let (Some(doctor), Some(slot), Some(prospect)) = (
            context.selected_doctor.clone(),
            context.selected_slot.clone(),
            context.patient_prospect.clone(),
        ) else {
            warn!("Booking confirmed with an incomplete context");
            self.fallback(store);
            return;
        };

        let formatted_date = slot.date.format(DATE_DISPLAY).to_string();
        info!(
            "Booked {} with {} on {} at {} via {}",
            prospect.name, doctor.name, formatted_date, slot.time, prospect.preferred_mode
        );

        store.push_bot(
            format!(
                "Appointment confirmed! Your consultation with {} is scheduled for {} at {} via {}.",
                doctor.name, formatted_date, slot.time, prospect.preferred_mode
            ),
            Vec::new(),
        );
        store.push_bot(
            format!(
                "Your consultation time starts at {}. Please wait 5 minutes for the doctor to contact you via your selected {} mode.",
                slot.time, prospect.preferred_mode
            ),
            vec![ChatOption::new("Start over", OptionAction::Restart)],
        );
        store.apply(ContextUpdate::step(ChatStep::Initial));
    }

    fn list_all_prescriptions(&self, store: &mut ConversationStore, phone: &str) {
        let prescriptions = self.records.prescriptions_by_phone(phone, None);

        if prescriptions.is_empty() {
            store.push_bot(
                format!(
                    "I couldn't find any prescriptions for phone number {}.",
                    phone
                ),
                Vec::new(),
            );
        } else {
            store.push_bot(
                format!("Here are all prescriptions for phone number {}:", phone),
                Vec::new(),
            );
            for prescription in &prescriptions {
                store.push_bot(
                    format!(
                        "Date: {}\nPrescription: {}",
                        prescription.date.format(DATE_DISPLAY),
                        prescription.text
                    ),
                    Vec::new(),
                );
            }
        }

        store.push_bot(
            "Is there anything else I can help you with?",
            vec![
                ChatOption::new("Find a doctor", OptionAction::FindDoctor),
                ChatOption::new("View my consultations", OptionAction::ViewConsultations),
                ChatOption::new("Start over", OptionAction::Restart),
            ],
        );
    }

    fn store_preferred_mode(&self, store: &mut ConversationStore, mode: ConsultationMode) {
        let mut prospect = store
            .context()
            .patient_prospect
            .clone()
            .unwrap_or_else(|| PatientProspect::new(""));
        prospect.preferred_mode = mode;
        store.apply(ContextUpdate {
            patient_prospect: Some(prospect),
            ..Default::default()
        });
    }

    /// The phone number remembered from an earlier prescription lookup.
    fn stored_phone(&self, store: &ConversationStore) -> Option<String> {
        store
            .context()
            .patient_prospect
            .as_ref()
            .map(|prospect| prospect.phone_number.clone())
            .filter(|phone| !phone.is_empty())
    }

    /// Last-resort reply: apologize, re-offer the entry points, reorient.
    fn fallback(&self, store: &mut ConversationStore) {
        store.push_bot(
            "I'm not sure how to help with that. Can you try asking something else?",
            top_level_options(),
        );
        store.apply(ContextUpdate::step(ChatStep::Initial));
    }
}

fn confirm_slot_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Yes, confirm", OptionAction::ConfirmSlot),
        ChatOption::new("No, select another", OptionAction::SelectAnotherSlot),
    ]
}

fn parse_user_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parsing_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 4, 15).unwrap();

        assert_eq!(parse_user_date("04/15/2023"), Some(expected));
        assert_eq!(parse_user_date("4/15/2023"), Some(expected));
        assert_eq!(parse_user_date("04-15-2023"), Some(expected));
        assert_eq!(parse_user_date("2023-04-15"), Some(expected));
        assert_eq!(parse_user_date("April 15, 2023"), Some(expected));
        assert_eq!(parse_user_date(" 04/15/2023 "), Some(expected));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert_eq!(parse_user_date("not a date"), None);
        assert_eq!(parse_user_date("13/45/2023"), None);
        assert_eq!(parse_user_date(""), None);
    }
}
