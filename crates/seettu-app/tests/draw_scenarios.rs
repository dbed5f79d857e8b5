//! End-to-end draw scenarios on a controllable clock.

use assert_matches::assert_matches;
use seettu_app::views::ToastLevel;
use seettu_app::{AppCore, DispatchError, DrawError, DrawPhase, Intent, Screen};
use seettu_core::{DrawRecord, Member, MemberId, PoolConfig};
use seettu_testkit::{
    family_roster, past_winners, pool_admin, ControllableClock, RecordingDialer, SeededRandom,
};
use std::sync::Arc;

// 2024-04-15T00:00:00Z
const APRIL_15: u64 = 1_713_139_200_000;

fn build_app(roster: Vec<Member>, history: Vec<DrawRecord>, seed: u64) -> Arc<AppCore> {
    Arc::new(
        AppCore::new(
            PoolConfig::default(),
            roster,
            history,
            pool_admin(),
            Arc::new(ControllableClock::new(APRIL_15)),
            Arc::new(SeededRandom::from_seed(seed)),
            Arc::new(RecordingDialer::new()),
        )
        .unwrap(),
    )
}

fn three_paid_members() -> Vec<Member> {
    vec![
        Member::paid(MemberId::new(1), "Appa", "+91 98765 43210"),
        Member::paid(MemberId::new(2), "Amma", "+91 98765 43211"),
        Member::paid(MemberId::new(3), "Anna", "+91 98765 43212"),
    ]
}

#[tokio::test]
async fn a_full_draw_records_exactly_one_winner() {
    let app = build_app(three_paid_members(), Vec::new(), 17);
    assert_eq!(app.draw_view().pool_amount, 3000);

    app.dispatch(Intent::StartDraw).await.unwrap();

    let history = app.history_view();
    assert_eq!(history.total_draws, 1);
    let entry = &history.entries[0];
    assert_eq!(entry.round, 1);
    assert_eq!(entry.amount, 3000);
    assert!((1..=3).contains(&entry.winner_id.value()));

    // The settlement announcement fired exactly once.
    let winner_toasts: Vec<_> = app
        .drain_notifications()
        .into_iter()
        .filter(|t| t.level == ToastLevel::Success)
        .collect();
    assert_eq!(winner_toasts.len(), 1);
    assert_eq!(winner_toasts[0].title, "We have a winner!");

    assert_eq!(app.draw_view().phase, DrawPhase::Idle);
}

#[tokio::test]
async fn the_record_carries_the_clock_date() {
    let app = build_app(three_paid_members(), Vec::new(), 17);
    app.dispatch(Intent::StartDraw).await.unwrap();

    let entry = &app.history_view().entries[0];
    let day = entry.date;
    assert_eq!((day.year(), day.month() as u8, day.day()), (2024, 4, 15));
}

#[tokio::test]
async fn a_past_winner_is_excluded_even_when_paid() {
    let roster = vec![
        Member::paid(MemberId::new(1), "Appa", "+91 98765 43210"),
        Member::paid(MemberId::new(2), "Amma", "+91 98765 43211"),
    ];
    let history = vec![DrawRecord {
        id: seettu_core::RecordId::new(1),
        winner_id: MemberId::new(2),
        winner_name: "Amma".to_string(),
        amount: 2000,
        date: time::macros::date!(2024 - 03 - 15),
        round: 1,
    }];
    let app = build_app(roster, history, 23);

    let view = app.draw_view();
    assert_eq!(view.eligible.len(), 1);
    assert_eq!(view.eligible[0].id, MemberId::new(1));

    app.dispatch(Intent::StartDraw).await.unwrap();
    let history = app.history_view();
    assert_eq!(history.total_draws, 2);
    assert_eq!(history.entries[1].winner_id, MemberId::new(1));
    assert_eq!(history.entries[1].round, 2);
}

#[tokio::test]
async fn an_empty_eligible_set_rejects_the_draw() {
    let roster = vec![
        Member::new(MemberId::new(1), "Appa", "+91 98765 43210"),
        Member::new(MemberId::new(2), "Amma", "+91 98765 43211"),
    ];
    let app = build_app(roster, Vec::new(), 5);

    let err = app.dispatch(Intent::StartDraw).await.unwrap_err();
    assert_matches!(err, DispatchError::Draw(DrawError::NoEligibleMembers));

    assert_eq!(app.history_view().total_draws, 0);
    assert_eq!(app.draw_view().phase, DrawPhase::Idle);

    let toasts = app.drain_notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].title, "No Eligible Members");
}

#[tokio::test]
async fn a_second_draw_cannot_start_while_one_runs() {
    let app = build_app(three_paid_members(), Vec::new(), 29);
    let running = app.clone();
    let task = tokio::spawn(async move { running.dispatch(Intent::StartDraw).await });

    // Let the first draw reach its countdown.
    tokio::task::yield_now().await;
    assert_matches!(app.draw_view().phase, DrawPhase::Countdown { .. });

    let err = app.dispatch(Intent::StartDraw).await.unwrap_err();
    assert_matches!(err, DispatchError::Draw(DrawError::DrawInProgress));

    task.await.unwrap().unwrap();
    assert_eq!(app.history_view().total_draws, 1);
}

#[tokio::test]
async fn navigating_away_cancels_the_draw_without_a_record() {
    let app = build_app(three_paid_members(), Vec::new(), 31);
    app.dispatch(Intent::NavigateTo {
        screen: Screen::Draw,
    })
    .await
    .unwrap();

    let running = app.clone();
    let task = tokio::spawn(async move { running.dispatch(Intent::StartDraw).await });
    tokio::task::yield_now().await;

    app.dispatch(Intent::NavigateTo {
        screen: Screen::Dashboard,
    })
    .await
    .unwrap();

    let err = task.await.unwrap().unwrap_err();
    assert_matches!(err, DispatchError::Draw(DrawError::Cancelled));
    assert_eq!(app.history_view().total_draws, 0);
    assert_eq!(app.draw_view().phase, DrawPhase::Idle);
}

#[tokio::test]
async fn the_sample_pool_draws_its_fourth_round() {
    let app = build_app(family_roster(), past_winners(), 37);

    // Seven paid members, three of them past winners.
    let view = app.draw_view();
    assert_eq!(view.pool_amount, 7000);
    assert_eq!(view.eligible.len(), 4);

    app.dispatch(Intent::StartDraw).await.unwrap();

    let history = app.history_view();
    assert_eq!(history.total_draws, 4);
    let entry = &history.entries[3];
    assert_eq!(entry.round, 4);
    assert_eq!(entry.amount, 7000);
    let eligible_ids = [1, 6, 8, 9];
    assert!(eligible_ids.contains(&entry.winner_id.value()));
    assert_eq!(history.total_distributed, 30_000 + 7000);
}

#[tokio::test]
async fn drawing_twice_excludes_the_first_winner() {
    let app = build_app(three_paid_members(), Vec::new(), 41);

    app.dispatch(Intent::StartDraw).await.unwrap();
    let first_winner = app.history_view().entries[0].winner_id;
    assert_eq!(app.draw_view().eligible.len(), 2);

    app.dispatch(Intent::StartDraw).await.unwrap();
    let history = app.history_view();
    assert_eq!(history.total_draws, 2);
    let second_winner = history.entries[1].winner_id;
    assert_ne!(first_winner, second_winner);
    assert_eq!(history.entries[1].round, 2);
    // Pool is unchanged: winners stay in the roster and stay paid.
    assert_eq!(history.entries[1].amount, 3000);
}
