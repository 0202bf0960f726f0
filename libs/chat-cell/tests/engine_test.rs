use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use chat_cell::models::{ChatMessage, ChatStep, OptionAction};
use chat_cell::services::DialogueEngine;
use chat_cell::session::ChatSession;
use chat_cell::store::ConversationStore;
use directory_cell::models::ConsultationMode;
use location_cell::{GeoLocation, LocationProvider, StaticLocationProvider};

fn sf_center() -> GeoLocation {
    GeoLocation {
        latitude: 37.7749,
        longitude: -122.4194,
        address: "Test Location".to_string(),
    }
}

fn engine_with_location(location: Option<GeoLocation>) -> DialogueEngine {
    DialogueEngine::new(Arc::new(StaticLocationProvider::new(location)))
}

fn last(store: &ConversationStore) -> &ChatMessage {
    store.messages().last().unwrap()
}

fn texts(store: &ConversationStore) -> Vec<&str> {
    store.messages().iter().map(|m| m.text.as_str()).collect()
}

#[tokio::test]
async fn test_full_booking_flow() {
    let engine = engine_with_location(Some(sf_center()));
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "I have a headache").await;
    assert_eq!(store.context().current_step, ChatStep::AskSymptoms);
    assert_eq!(
        last(&store).text,
        "I can help you find a doctor. Can you tell me briefly about your symptoms?"
    );

    engine
        .process_text(&mut store, "Severe migraine for two days")
        .await;
    assert_eq!(store.context().current_step, ChatStep::ConfirmLocation);
    assert_eq!(
        store.context().user_query.as_deref(),
        Some("Severe migraine for two days")
    );

    engine
        .process_option(&mut store, OptionAction::UseLocation)
        .await;
    let doctor_list = last(&store).clone();
    assert_eq!(doctor_list.text, "Please select a doctor from the list:");
    assert_eq!(doctor_list.options.len(), 5);
    assert!(doctor_list.options[0]
        .text
        .starts_with("Dr. Sarah Johnson - Neurologist"));

    // Click the first doctor option exactly as it was served.
    let select_doctor = doctor_list.options[0].action.clone();
    engine.process_option(&mut store, select_doctor).await;
    assert_eq!(store.context().current_step, ChatStep::DoctorSelection);
    assert_eq!(
        store.context().selected_doctor.as_ref().unwrap().name,
        "Dr. Sarah Johnson"
    );

    engine
        .process_option(&mut store, OptionAction::ConfirmAppointment)
        .await;
    assert_eq!(store.context().current_step, ChatStep::CollectName);

    engine.process_text(&mut store, "anonymous").await;
    assert_eq!(store.context().current_step, ChatStep::CollectPhone);
    assert_eq!(
        store.context().patient_prospect.as_ref().unwrap().name,
        "Anonymous Patient"
    );

    // Too-short phone numbers are rejected without advancing the step or
    // touching the prospect.
    engine.process_text(&mut store, "12345").await;
    assert_eq!(
        last(&store).text,
        "Please provide a valid phone number with at least 10 digits."
    );
    assert_eq!(store.context().current_step, ChatStep::CollectPhone);
    assert_eq!(
        store.context().patient_prospect.as_ref().unwrap().phone_number,
        ""
    );

    engine.process_text(&mut store, "4155550123").await;
    assert_eq!(store.context().current_step, ChatStep::CollectConsultationMode);
    let mode_options = last(&store).options.clone();
    assert_eq!(mode_options.len(), 3);
    assert_eq!(mode_options[0].text, "Video Call");

    engine
        .process_option(&mut store, OptionAction::SelectMode(ConsultationMode::Audio))
        .await;
    let slot_list = last(&store).clone();
    assert_eq!(
        slot_list.text,
        "Here are the available slots for Dr. Sarah Johnson:"
    );
    assert_eq!(slot_list.options.len(), 3);

    let select_slot = slot_list.options[0].action.clone();
    engine.process_option(&mut store, select_slot).await;
    assert_eq!(store.context().current_step, ChatStep::AppointmentConfirmation);

    engine
        .process_option(&mut store, OptionAction::ConfirmSlot)
        .await;
    assert_eq!(store.context().current_step, ChatStep::Initial);

    let all = texts(&store);
    let confirmation = all
        .iter()
        .find(|t| t.starts_with("Appointment confirmed!"))
        .unwrap();
    assert!(confirmation.contains("Dr. Sarah Johnson"));
    assert!(confirmation.ends_with("via audio."));

    let closing = last(&store);
    assert!(closing.text.contains("Please wait 5 minutes"));
    assert_eq!(closing.options.len(), 1);
    assert_eq!(closing.options[0].action, OptionAction::Restart);
}

#[tokio::test]
async fn test_typed_mode_keywords() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "persistent cough").await;
    engine
        .process_option(&mut store, OptionAction::ShowAllDoctors)
        .await;
    let select_doctor = last(&store).options[0].action.clone();
    engine.process_option(&mut store, select_doctor).await;
    engine
        .process_option(&mut store, OptionAction::ConfirmAppointment)
        .await;
    engine.process_text(&mut store, "Jane Roe").await;
    engine.process_text(&mut store, "4155550123").await;

    engine.process_text(&mut store, "audio please").await;

    let prospect = store.context().patient_prospect.clone().unwrap();
    assert_eq!(prospect.name, "Jane Roe");
    assert_eq!(prospect.preferred_mode, ConsultationMode::Audio);
    assert!(last(&store)
        .text
        .starts_with("Here are the available slots for"));
}

#[tokio::test]
async fn test_go_back_replays_location_question() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "migraine").await;
    engine
        .process_option(&mut store, OptionAction::ShowAllDoctors)
        .await;
    let select_doctor = last(&store).options[0].action.clone();
    engine.process_option(&mut store, select_doctor).await;

    engine.process_option(&mut store, OptionAction::GoBack).await;

    assert_eq!(store.context().current_step, ChatStep::ConfirmLocation);
    assert_eq!(store.context().user_query.as_deref(), Some("migraine"));
    assert!(last(&store)
        .text
        .starts_with("Thank you for providing your symptoms."));
}

#[tokio::test]
async fn test_nearby_search_with_location() {
    let engine = engine_with_location(Some(sf_center()));
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "fever").await;
    engine.process_text(&mut store, "yes please").await;

    let all = texts(&store);
    assert!(all.contains(&"Accessing your location..."));
    assert!(all.contains(&"I found 5 doctors near your location. Here they are:"));
    assert_eq!(last(&store).options.len(), 5);
    assert!(store.context().user_location.is_some());
}

#[tokio::test]
async fn test_unavailable_location_fallback() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "fever").await;
    engine.process_text(&mut store, "sure").await;

    let all = texts(&store);
    assert!(all.contains(&"Accessing your location..."));
    assert!(all.contains(&"I couldn't access your location. Here are all available doctors:"));
    assert_eq!(last(&store).options.len(), 5);
    assert!(store.context().user_location.is_none());
}

#[tokio::test]
async fn test_remote_location_fallback() {
    let remote = GeoLocation {
        latitude: 0.0,
        longitude: 0.0,
        address: "Null Island".to_string(),
    };
    let engine = engine_with_location(Some(remote));
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "fever").await;
    engine.process_option(&mut store, OptionAction::UseLocation).await;

    let all = texts(&store);
    assert!(all
        .contains(&"I couldn't find any doctors near your location. Here are all available doctors:"));
    assert_eq!(last(&store).options.len(), 5);
}

#[tokio::test]
async fn test_decline_location_shows_all_doctors() {
    let engine = engine_with_location(Some(sf_center()));
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "fever").await;
    engine.process_text(&mut store, "no thanks").await;

    let all = texts(&store);
    assert!(all.contains(&"Here are all available doctors:"));
    assert!(!all.contains(&"Accessing your location..."));
    assert_eq!(last(&store).options.len(), 5);
}

#[tokio::test]
async fn test_consultation_history_lookup() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "show my history").await;
    assert_eq!(
        store.context().current_step,
        ChatStep::ConsultationHistoryPhone
    );

    engine.process_text(&mut store, "555-123-4567").await;
    assert_eq!(store.context().current_step, ChatStep::Initial);

    let all = texts(&store);
    assert!(all.contains(&"I found 1 consultations for phone number 555-123-4567:"));
    let record = all.iter().find(|t| t.starts_with("Date:")).unwrap();
    assert_eq!(
        *record,
        "Date: 4/15/2023 at 09:00 AM\nDoctor: Dr. Sarah Johnson\nSymptoms: Headache and dizziness\nStatus: completed"
    );

    let closing = last(&store);
    assert_eq!(closing.text, "Is there anything else I can help you with?");
    assert_eq!(closing.options.len(), 3);
}

#[tokio::test]
async fn test_consultation_history_not_found() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "my past visits").await;
    engine.process_text(&mut store, "000-000-0000").await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    let closing = last(&store);
    assert_eq!(
        closing.text,
        "I couldn't find any consultations for phone number 000-000-0000. Would you like to schedule a new consultation?"
    );
    assert_eq!(closing.options.len(), 2);
    assert_eq!(closing.options[0].action, OptionAction::FindDoctor);
    assert_eq!(closing.options[1].action, OptionAction::Restart);
}

#[tokio::test]
async fn test_prescription_lookup_by_date() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "i need my medicine").await;
    assert_eq!(store.context().current_step, ChatStep::PrescriptionPhone);

    engine.process_text(&mut store, "555-123-4567").await;
    assert_eq!(store.context().current_step, ChatStep::PrescriptionDate);
    let ask = last(&store);
    assert!(ask
        .text
        .starts_with("I found 1 prescriptions for phone number 555-123-4567."));
    assert_eq!(ask.options.len(), 2);

    engine.process_option(&mut store, OptionAction::SpecifyDate).await;
    assert_eq!(last(&store).text, "Please enter the date in MM/DD/YYYY format:");

    engine.process_text(&mut store, "04/15/2023").await;
    assert_eq!(store.context().current_step, ChatStep::Initial);

    let all = texts(&store);
    assert!(all.contains(&"Here are prescriptions for 4/15/2023:"));
    assert!(all
        .iter()
        .any(|t| t.starts_with("Prescription: Take Ibuprofen 400mg")));
}

#[tokio::test]
async fn test_prescription_date_no_matches() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "medicine").await;
    engine.process_text(&mut store, "555-123-4567").await;
    engine.process_text(&mut store, "06/11/2023").await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    assert!(texts(&store).contains(&"No prescriptions found for 6/11/2023."));
}

#[tokio::test]
async fn test_unparseable_prescription_date() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "medicine").await;
    engine.process_text(&mut store, "555-123-4567").await;
    engine.process_text(&mut store, "sometime next week").await;

    assert_eq!(store.context().current_step, ChatStep::PrescriptionDate);
    assert_eq!(
        last(&store).text,
        "I couldn't understand that date. Please enter a date in MM/DD/YYYY format or type 'all' to see all prescriptions."
    );
}

#[tokio::test]
async fn test_show_all_prescriptions_keyword() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "medicine").await;
    engine.process_text(&mut store, "555-123-4567").await;
    engine.process_text(&mut store, "all").await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    let all = texts(&store);
    assert!(all.contains(&"Here are all prescriptions for phone number 555-123-4567:"));
    assert!(all
        .iter()
        .any(|t| t.starts_with("Date: 4/15/2023\nPrescription: Take Ibuprofen 400mg")));
}

#[tokio::test]
async fn test_prescription_lookup_not_found() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "medicine").await;
    engine.process_text(&mut store, "000-000-0000").await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    let closing = last(&store);
    assert_eq!(
        closing.text,
        "I couldn't find any prescriptions for phone number 000-000-0000. Would you like to schedule a consultation with a doctor?"
    );
    assert_eq!(closing.options.len(), 2);
}

#[tokio::test]
async fn test_show_all_prescriptions_without_phone() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine
        .process_option(&mut store, OptionAction::ShowAllPrescriptions)
        .await;

    assert_eq!(store.context().current_step, ChatStep::PrescriptionPhone);
    assert_eq!(
        last(&store).text,
        "I need your phone number first to find your prescriptions."
    );
}

#[tokio::test]
async fn test_consult_keyword_precedence() {
    // "consultations" contains "consult", which the doctor rule claims first.
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "consultations").await;

    assert_eq!(store.context().current_step, ChatStep::AskSymptoms);
}

#[tokio::test]
async fn test_unrecognized_text_fallback() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "what's the weather like").await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    let reply = last(&store);
    assert_eq!(
        reply.text,
        "I can help you find a doctor, view your consultation history, or retrieve prescriptions. What would you like to do?"
    );
    assert_eq!(reply.options.len(), 3);
}

#[tokio::test]
async fn test_empty_text_input() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_text(&mut store, "").await;

    // Welcome, echoed empty input, and the reorientation reply.
    assert_eq!(store.message_count(), 3);
    assert_eq!(store.context().current_step, ChatStep::Initial);
}

#[tokio::test]
async fn test_unknown_action_fallback() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.handle_unknown_action(&mut store, "MAKE_COFFEE");

    assert_eq!(store.context().current_step, ChatStep::Initial);
    let reply = last(&store);
    assert_eq!(
        reply.text,
        "I'm not sure how to help with that. Can you try asking something else?"
    );
    assert_eq!(reply.options.len(), 3);
}

#[tokio::test]
async fn test_confirm_slot_without_context() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::ConfirmSlot).await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    assert!(last(&store)
        .text
        .starts_with("I'm not sure how to help with that."));
}

#[tokio::test]
async fn test_restart_preserves_context() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "migraine").await;
    engine
        .process_option(&mut store, OptionAction::ShowAllDoctors)
        .await;
    let select_doctor = last(&store).options[0].action.clone();
    engine.process_option(&mut store, select_doctor).await;

    engine.process_option(&mut store, OptionAction::Restart).await;

    assert_eq!(store.context().current_step, ChatStep::Initial);
    assert_eq!(last(&store).text, "How can I help you today?");
    assert_eq!(last(&store).options.len(), 3);
    // Only the step moves; the accumulated context survives.
    assert!(store.context().selected_doctor.is_some());
    assert_eq!(store.context().user_query.as_deref(), Some("migraine"));
}

#[tokio::test]
async fn test_stale_option_dispatch() {
    let engine = engine_with_location(None);
    let mut store = ConversationStore::new();

    engine.process_option(&mut store, OptionAction::FindDoctor).await;
    engine.process_text(&mut store, "migraine").await;
    engine
        .process_option(&mut store, OptionAction::ShowAllDoctors)
        .await;
    let select_doctor = last(&store).options[1].action.clone();

    // The conversation moves on before the old option is clicked.
    engine.process_option(&mut store, OptionAction::Restart).await;
    engine.process_option(&mut store, select_doctor).await;

    assert_eq!(store.context().current_step, ChatStep::DoctorSelection);
    assert_eq!(
        store.context().selected_doctor.as_ref().unwrap().name,
        "Dr. Michael Chen"
    );
}

struct SlowProvider {
    location: GeoLocation,
    delay: Duration,
}

#[async_trait]
impl LocationProvider for SlowProvider {
    async fn request_location(&self) -> Option<GeoLocation> {
        tokio::time::sleep(self.delay).await;
        Some(self.location.clone())
    }
}

#[tokio::test]
async fn test_concurrent_events_serialize() {
    let engine = Arc::new(DialogueEngine::new(Arc::new(SlowProvider {
        location: sf_center(),
        delay: Duration::from_millis(50),
    })));
    let session = Arc::new(ChatSession::new());

    // Drive the conversation to the location question.
    {
        let mut store = session.lock().await;
        engine.process_text(&mut store, "i need a doctor").await;
        engine.process_text(&mut store, "headache").await;
    }

    let slow = {
        let engine = engine.clone();
        let session = session.clone();
        tokio::spawn(async move {
            let mut store = session.lock().await;
            engine
                .process_option(&mut store, OptionAction::UseLocation)
                .await;
        })
    };

    // Let the slow event take the lock before the second input arrives.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let fast = {
        let engine = engine.clone();
        let session = session.clone();
        tokio::spawn(async move {
            let mut store = session.lock().await;
            engine.process_text(&mut store, "hello").await;
        })
    };

    slow.await.unwrap();
    fast.await.unwrap();

    let store = session.lock().await;
    let all: Vec<&str> = store.messages().iter().map(|m| m.text.as_str()).collect();

    // The whole location event, slow lookup included, lands before the
    // input that arrived while it was running.
    let accessing = all
        .iter()
        .position(|t| *t == "Accessing your location...")
        .unwrap();
    let found = all
        .iter()
        .position(|t| *t == "I found 5 doctors near your location. Here they are:")
        .unwrap();
    let hello = all.iter().position(|t| *t == "hello").unwrap();
    assert!(accessing < found);
    assert!(found < hello);
}
