//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `journal_core` linkage with ping/version calls.
//! - Walk one scripted quick-log flow over in-memory collaborators.

use chrono::{Local, NaiveDateTime};
use journal_core::{
    FixedClock, HomeScreen, InMemoryIncidentStore, InMemoryLifeEventProvider, LifeEvent,
    QuickLogConfig,
};

fn main() {
    println!("journal_core ping={}", journal_core::ping());
    println!("journal_core version={}", journal_core::core_version());

    let today = Local::now().date_naive();
    let at = |hour: u32, minute: u32| -> Option<NaiveDateTime> { today.and_hms_opt(hour, minute, 0) };
    let (Some(work_start), Some(work_end), Some(first_log), Some(second_log)) =
        (at(9, 0), at(17, 0), at(9, 12), at(13, 5))
    else {
        eprintln!("could not build demo timestamps");
        return;
    };

    let provider = InMemoryLifeEventProvider::with_events(vec![
        LifeEvent::new("work", "Work day", work_start, Some(work_end)),
        LifeEvent::ongoing("storm", "Storm outside"),
    ]);
    let store = InMemoryIncidentStore::new();
    let clock = FixedClock::new(first_log);
    let mut screen = HomeScreen::new(&QuickLogConfig::default(), &provider, &store, &clock);

    screen.log_now();
    if let Err(err) = screen.toggle_life_event("work") {
        eprintln!("toggle failed: {err}");
    }
    let symptoms = screen.session().candidate_symptoms().to_vec();
    if let Some(symptom) = symptoms.first() {
        report(screen.select_symptom(symptom));
    }

    clock.set(second_log);
    screen.log_now();
    report(screen.select_symptom("Calm walk in park"));

    match screen.day_summary(today) {
        Ok(summary) => {
            println!("last logged: {}", summary.last_logged_text());
            for card in &summary.life_events {
                println!("event: {} [{}]", card.description, card.time_label);
            }
            for entry in &summary.timeline {
                let label = entry.life_event_label.as_deref().unwrap_or("-");
                println!(
                    "{} {} {} ({label})",
                    entry.time_label, entry.marker, entry.main_symptom
                );
            }
        }
        Err(err) => eprintln!("summary failed: {err}"),
    }
}

fn report(result: Result<journal_core::CommitOutcome, journal_core::QuickLogError>) {
    match result {
        Ok(outcome) if outcome.is_committed() => println!("logged"),
        Ok(_) => println!("log failed; try again"),
        Err(err) => eprintln!("quick log rejected: {err}"),
    }
}
