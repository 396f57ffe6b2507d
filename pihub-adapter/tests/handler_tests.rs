mod common;

use common::{DeviceCall, RecordingPi, command, schedule};
use pihub_adapter::{
    COMMAND_ITEM_TYPE, CommandHandler, HandlerRegistry, RecordError, RecordHandler,
    SCHEDULE_ITEM_TYPE, ScheduleHandler, action_from_record, schedule_from_record,
};
use pihub_types::{CanonicalItemId, FieldError, PublicationIntent, Record};
use std::sync::Arc;

// ── Transformation ───────────────────────────────────────────────

#[test]
fn action_from_command_record() {
    let action = action_from_record(&command(1, "relay-1", "off")).unwrap();
    assert_eq!(action.name, "relay-1");
    assert_eq!(action.value, "off");
}

#[test]
fn action_requires_name() {
    let record = Record::new(COMMAND_ITEM_TYPE, CanonicalItemId::new(1)).with_field("value", "on");
    assert_eq!(
        action_from_record(&record).unwrap_err(),
        FieldError::Missing {
            field: "name".to_string()
        }
    );
}

#[test]
fn schedule_from_schedule_record() {
    let schedule = schedule_from_record(&schedule(1, "wake", PublicationIntent::Create)).unwrap();
    assert_eq!(schedule.name, "wake");
    assert_eq!(schedule.action_name, "lamp");
    assert_eq!(schedule.action_value, "on");
    assert_eq!(schedule.cron_trigger, "0 30 6 * * ?");
}

#[test]
fn schedule_requires_cron_trigger() {
    let mut record = schedule(1, "wake", PublicationIntent::Create);
    record.fields.remove("cronTrigger");
    assert!(matches!(
        schedule_from_record(&record),
        Err(FieldError::Missing { field }) if field == "cronTrigger"
    ));
}

// ── Handlers ─────────────────────────────────────────────────────

#[test]
fn handlers_accept_only_their_item_type() {
    let pi = RecordingPi::new();
    let commands = CommandHandler::new(pi.clone());
    let schedules = ScheduleHandler::new(pi);

    let cmd = command(1, "led", "on");
    let sched = schedule(2, "wake", PublicationIntent::Create);

    assert!(commands.accepts(&cmd));
    assert!(!commands.accepts(&sched));
    assert!(schedules.accepts(&sched));
    assert!(!schedules.accepts(&cmd));
}

#[tokio::test]
async fn delete_still_requires_complete_schedule() {
    let pi = RecordingPi::new();
    let handler = ScheduleHandler::new(pi.clone());
    let mut record = schedule(1, "wake", PublicationIntent::Delete);
    record.fields.remove("actionValue");

    let err = handler.handle(&record).await.unwrap_err();
    assert!(matches!(err, RecordError::Field(_)));
    assert!(pi.calls().is_empty());
}

#[tokio::test]
async fn command_handler_propagates_send_failure() {
    let pi = RecordingPi::new();
    pi.fail_for("led");
    let handler = CommandHandler::new(pi.clone());

    let err = handler.handle(&command(1, "led", "on")).await.unwrap_err();
    assert!(matches!(err, RecordError::Send(_)));
    assert_eq!(pi.calls().len(), 1);
}

#[tokio::test]
async fn schedule_handler_routes_by_intent() {
    let pi = RecordingPi::new();
    let handler = ScheduleHandler::new(pi.clone());

    handler
        .handle(&schedule(1, "a", PublicationIntent::Create))
        .await
        .unwrap();
    handler
        .handle(&schedule(2, "b", PublicationIntent::Delete))
        .await
        .unwrap();

    let calls = pi.calls();
    assert!(matches!(&calls[0], DeviceCall::CreateSchedule(s) if s.name == "a"));
    assert_eq!(calls[1], DeviceCall::DeleteSchedule("b".to_string()));
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn registry_looks_up_by_item_type() {
    let pi = RecordingPi::new();
    let mut registry = HandlerRegistry::new();
    assert!(registry.is_empty());

    registry.register(Arc::new(CommandHandler::new(pi.clone())));
    registry.register(Arc::new(ScheduleHandler::new(pi.clone())));
    registry.register(Arc::new(CommandHandler::new(pi)));

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get(COMMAND_ITEM_TYPE).unwrap().item_type(),
        COMMAND_ITEM_TYPE
    );
    assert_eq!(
        registry.get(SCHEDULE_ITEM_TYPE).unwrap().item_type(),
        SCHEDULE_ITEM_TYPE
    );
    assert!(registry.get("RaspberryPiSensorTargetItem").is_none());
}
