//! End-to-end conversation scenarios against the public engine API.

use std::io::Write;
use std::sync::Arc;

use cyberwing_chat::{DialogueEngine, ReminderPrompt, ResponseCatalog};
use cyberwing_core::{CyberwingConfig, Timestamp};
use cyberwing_quiz::QuestionBank;

const NOW: Timestamp = Timestamp(1_750_000_000);

fn seeded_config() -> CyberwingConfig {
    let mut config = CyberwingConfig::default();
    config.dialogue.seed = Some(7);
    config
}

fn session_for(name: &str) -> DialogueEngine {
    let mut engine = DialogueEngine::from_config(&seeded_config()).unwrap();
    engine.process_input_at(name, NOW);
    engine
}

fn say(engine: &mut DialogueEngine, input: &str) -> String {
    let reply = engine.process_input_at(input, NOW);
    reply
        .text()
        .unwrap_or_else(|| panic!("unexpected terminate for {:?}", input))
        .to_string()
}

#[test]
fn test_worried_about_phishing_prefixes_sentiment() {
    let mut engine = session_for("sam");
    let text = say(&mut engine, "I'm worried about phishing");

    let (head, advice) = text.split_once("\n\n").unwrap();
    assert!(head.starts_with("Sam, 😟 It's okay to feel that way."));
    let phishing = engine.catalog().topic("phishing").unwrap();
    assert!(phishing.responses().iter().any(|r| r == advice));
    assert_eq!(engine.session().current_topic(), Some("phishing"));
}

#[test]
fn test_add_task_then_reminder_in_two_hours() {
    let mut engine = session_for("sam");

    let text = say(&mut engine, "add task buy milk");
    assert!(text.ends_with("Would you like a reminder?"));

    let text = say(&mut engine, "yes");
    assert!(text.contains("how long"));
    assert!(engine.session().awaiting_reminder_time());

    let text = say(&mut engine, "remind me in 2 hours");
    assert_eq!(text, "Got it! I'll remind you in 2 hours.");

    let task = engine.tasks().last_task().unwrap();
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.reminder, Some(Timestamp(NOW.0 + 7_200)));
    assert!(!engine.session().awaiting_reminder_time());
    assert!(engine.session().pending_task().is_none());
}

#[test]
fn test_remind_in_three_days_is_exact() {
    let mut engine = session_for("sam");
    say(&mut engine, "add task rotate keys");
    say(&mut engine, "okay");
    say(&mut engine, "please remind me in 3 days");
    assert_eq!(
        engine.tasks().last_task().unwrap().reminder,
        Some(Timestamp(NOW.0 + 3 * 86_400))
    );
    assert_eq!(engine.session().reminder_prompt(), ReminderPrompt::Idle);
}

#[test]
fn test_spelled_out_amount_keeps_waiting() {
    let mut engine = session_for("sam");
    say(&mut engine, "add task rotate keys");
    say(&mut engine, "yes");

    let text = say(&mut engine, "remind me in five days");
    assert!(text.starts_with("Sorry, I couldn't understand that."));
    assert!(engine.session().awaiting_reminder_time());
    assert!(engine.tasks().last_task().unwrap().reminder.is_none());
}

#[test]
fn test_quiz_override_is_absolute() {
    let mut engine = session_for("sam");
    say(&mut engine, "start quiz");
    let total = engine.quiz().total_questions();

    for i in 0..total {
        assert!(engine.quiz().is_active(), "quiz ended early at {}", i);
        let reply = engine.process_input_at("exit", NOW);
        assert!(!reply.is_terminate());
    }
    assert!(!engine.quiz().is_active());
    assert!(engine.process_input_at("exit", NOW).is_terminate());
}

#[test]
fn test_topic_counter_escalates_and_stays_escalated() {
    let mut engine = session_for("sam");
    let mut nudged = Vec::new();
    for _ in 0..5 {
        nudged.push(say(&mut engine, "how do I spot a scam?").starts_with("🔁"));
        // Unrelated turns never reset the counter.
        say(&mut engine, "how are you");
    }
    assert_eq!(nudged, vec![false, false, true, true, true]);
    assert_eq!(engine.session().topic_request_count("PHISHING"), 5);
}

#[test]
fn test_delete_first_of_three_shifts() {
    let mut engine = session_for("sam");
    for title in ["one", "two", "three"] {
        say(&mut engine, &format!("add task {}", title));
        say(&mut engine, "no");
    }

    assert_eq!(say(&mut engine, "delete task 1"), "Task 'one' has been deleted.");
    assert_eq!(engine.tasks().len(), 2);
    assert_eq!(engine.tasks().at_position(1).unwrap().title, "two");

    let view = say(&mut engine, "view tasks");
    assert!(view.contains("1. [ ] two: Review or perform task: two"));
    assert!(view.contains("2. [ ] three"));
}

#[test]
fn test_complete_out_of_range_mutates_nothing() {
    let mut engine = session_for("sam");
    for title in ["one", "two", "three"] {
        say(&mut engine, &format!("add task {}", title));
    }
    assert_eq!(say(&mut engine, "complete task 0"), "Invalid task number.");
    assert_eq!(say(&mut engine, "complete task 99"), "Invalid task number.");
    assert!(engine.tasks().iter().all(|t| !t.completed));
}

#[test]
fn test_activity_log_is_bounded() {
    let mut config = seeded_config();
    config.activity.max_entries = 3;
    let mut engine = DialogueEngine::from_config(&config).unwrap();
    engine.process_input_at("sam", NOW);
    assert_eq!(engine.activity().max_entries(), 3);

    for i in 1..=5 {
        say(&mut engine, &format!("add task t{}", i));
    }
    let messages: Vec<String> = engine
        .activity()
        .entries()
        .map(|e| e.message.clone())
        .collect();
    assert_eq!(
        messages,
        vec!["Task added: 't3'", "Task added: 't4'", "Task added: 't5'"]
    );

    let summary = say(&mut engine, "show activity log");
    assert!(summary.contains("3. ["));
    assert!(!summary.contains("4. ["));
}

#[test]
fn test_custom_question_bank_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[{"text": "Is 2FA worth enabling?", "correct_answer": "True",
              "explanation": "Correct! It blocks most account takeovers.", "is_true_false": true}]"#,
    )
    .unwrap();

    let mut config = seeded_config();
    config.quiz.question_bank = Some(file.path().display().to_string());
    let mut engine = DialogueEngine::from_config(&config).unwrap();
    engine.process_input_at("sam", NOW);

    let text = say(&mut engine, "start quiz");
    assert!(text.contains("You will be asked 1 questions."));
    assert!(text.contains("Please answer 'True' or 'False'."));

    let text = say(&mut engine, "true");
    assert!(text.starts_with("✅ Correct! It blocks most account takeovers."));
    assert!(text.contains("You scored 1 out of 1."));
    assert!(!engine.quiz().is_active());
}

#[test]
fn test_same_seed_same_conversation() {
    let script = ["ada", "password", "how are you", "tell me more", "vpn", "anything"];
    let run = || {
        let mut engine = DialogueEngine::from_config(&seeded_config()).unwrap();
        script
            .iter()
            .map(|line| engine.process_input_at(line, NOW))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_engine_from_explicit_parts() {
    let catalog = Arc::new(ResponseCatalog::cybersecurity().unwrap());
    let mut engine = DialogueEngine::new(
        Arc::clone(&catalog),
        QuestionBank::cybersecurity(),
        &seeded_config(),
    );
    assert_eq!(engine.start_conversation(), "👋 Hello! Welcome to CyberSecurityBot.\nWhat's your name?");
    engine.process_input_at("", NOW);
    assert_eq!(engine.session().user_name(), "Friend");
    assert_eq!(Arc::strong_count(&catalog), 2);
}
