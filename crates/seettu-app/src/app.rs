//! # App Core
//!
//! The top-level owner of pool state, UI state, notifications, and the draw
//! engine. Frontends construct one `AppCore`, dispatch intents into it, and
//! re-read view projections after each dispatch.
//!
//! Mutation is synchronous per command under a single lock; the only
//! suspension points are the engine's clock sleeps and the dialer call.

use crate::engine::{DrawEngine, DrawError};
use crate::errors::DispatchError;
use crate::intent::{Intent, Screen};
use crate::state::PoolState;
use crate::views::{
    DashboardView, DrawView, HistoryView, NotificationsState, RosterView, Toast,
};
use parking_lot::Mutex;
use seettu_core::effects::{tel_target, ClockEffects, RandomEffects, TelephonyEffects};
use seettu_core::{CoreError, CurrentUser, DrawRecord, Member, MemberId, PoolConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Frontend-local state that is not pool data: the active screen and the
/// cosmetic group-call flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UiState {
    screen: Screen,
    group_call_active: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            group_call_active: false,
        }
    }
}

/// The state-owning application core.
pub struct AppCore {
    config: PoolConfig,
    state: Mutex<PoolState>,
    notifications: Mutex<NotificationsState>,
    ui: Mutex<UiState>,
    engine: DrawEngine,
    clock: Arc<dyn ClockEffects>,
    dialer: Arc<dyn TelephonyEffects>,
}

impl AppCore {
    /// Create an app core over an initial roster and history.
    pub fn new(
        config: PoolConfig,
        roster: Vec<Member>,
        history: Vec<DrawRecord>,
        current_user: CurrentUser,
        clock: Arc<dyn ClockEffects>,
        random: Arc<dyn RandomEffects>,
        dialer: Arc<dyn TelephonyEffects>,
    ) -> Result<Self, CoreError> {
        let state = PoolState::new(roster, history, current_user, &config)?;
        let engine = DrawEngine::new(config.clone(), clock.clone(), random);
        Ok(Self {
            config,
            state: Mutex::new(state),
            notifications: Mutex::new(NotificationsState::new()),
            ui: Mutex::new(UiState::default()),
            engine,
            clock,
            dialer,
        })
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch a user intent.
    ///
    /// `StartDraw` resolves only after the full draw sequence; frontends
    /// typically spawn it and keep reading `draw_view` for phase updates.
    pub async fn dispatch(&self, intent: Intent) -> Result<(), DispatchError> {
        debug!(intent = intent.description(), "dispatching intent");
        match intent {
            Intent::TogglePayment { member } => self.toggle_payment(member),
            Intent::StartDraw => self.start_draw().await,
            Intent::ToggleGroupCall => self.toggle_group_call(),
            Intent::CallMember { member } => self.call_member(member).await,
            Intent::NavigateTo { screen } => self.navigate_to(screen),
        }
    }

    fn toggle_payment(&self, id: MemberId) -> Result<(), DispatchError> {
        match self.state.lock().toggle_payment(id) {
            Some(_) => {
                self.notifications.lock().push(Toast::info(
                    "Payment Status Updated",
                    "Member payment status has been updated successfully.",
                ));
                Ok(())
            }
            None => Err(DispatchError::UnknownMember { id }),
        }
    }

    async fn start_draw(&self) -> Result<(), DispatchError> {
        let (eligible, prize) = {
            let state = self.state.lock();
            let eligible: Vec<Member> = state.eligible_members().into_iter().cloned().collect();
            (eligible, state.pool_amount(&self.config))
        };

        let result = self
            .engine
            .run(eligible, |winner| {
                self.notifications.lock().push(Toast::success(
                    "We have a winner!",
                    format!("{} has won ₹{}!", winner.name, prize),
                ));
            })
            .await;

        match result {
            Ok(winner) => {
                let date = self.clock.today().await;
                let mut state = self.state.lock();
                let amount = state.pool_amount(&self.config);
                if state.record_draw_winner(winner.id, amount, date).is_none() {
                    warn!(winner = %winner.id, "settled winner is missing from the roster");
                }
                Ok(())
            }
            Err(DrawError::NoEligibleMembers) => {
                self.notifications.lock().push(Toast::error(
                    "No Eligible Members",
                    "There are no members eligible for the draw. \
                     Make sure members have paid and haven't won before.",
                ));
                Err(DrawError::NoEligibleMembers.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn toggle_group_call(&self) -> Result<(), DispatchError> {
        let active = {
            let mut ui = self.ui.lock();
            ui.group_call_active = !ui.group_call_active;
            ui.group_call_active
        };
        let toast = if active {
            Toast::info(
                "Group Call Started",
                "All members can now speak during the lucky draw!",
            )
        } else {
            Toast::info("Group Call Ended", "The group call has been ended.")
        };
        self.notifications.lock().push(toast);
        Ok(())
    }

    async fn call_member(&self, id: MemberId) -> Result<(), DispatchError> {
        let target = {
            let state = self.state.lock();
            let member = state
                .member(id)
                .ok_or(DispatchError::UnknownMember { id })?;
            tel_target(&member.phone)
        };
        self.dialer.dial(&target).await?;
        Ok(())
    }

    fn navigate_to(&self, screen: Screen) -> Result<(), DispatchError> {
        let left_draw_screen = {
            let mut ui = self.ui.lock();
            let leaving = ui.screen == Screen::Draw && screen != Screen::Draw;
            ui.screen = screen;
            leaving
        };
        // Leaving the draw screen disposes the draw, matching the per-mount
        // lifetime of the engine's ephemeral state.
        if left_draw_screen {
            self.engine.cancel();
        }
        Ok(())
    }

    // =========================================================================
    // Snapshot Reads
    // =========================================================================

    /// Project the dashboard screen.
    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView::project(&self.state.lock(), &self.config)
    }

    /// Project the roster screen.
    pub fn roster_view(&self) -> RosterView {
        RosterView::project(&self.state.lock(), &self.config)
    }

    /// Project the draw screen.
    pub fn draw_view(&self) -> DrawView {
        let group_call_active = self.ui.lock().group_call_active;
        DrawView::project(
            &self.state.lock(),
            &self.config,
            self.engine.phase(),
            group_call_active,
        )
    }

    /// Project the history screen.
    pub fn history_view(&self) -> HistoryView {
        HistoryView::project(&self.state.lock())
    }

    /// The currently active screen.
    pub fn active_screen(&self) -> Screen {
        self.ui.lock().screen
    }

    /// Take all pending toasts, oldest first.
    pub fn drain_notifications(&self) -> Vec<Toast> {
        self.notifications.lock().drain()
    }

    /// Cancel an in-flight draw, if any.
    ///
    /// The explicit disposal path: hosts call this before dropping the core
    /// so no sequence keeps mutating state after teardown.
    pub fn cancel_draw(&self) {
        self.engine.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use seettu_testkit::{family_roster, ControllableClock, RecordingDialer, SeededRandom};

    fn app() -> Arc<AppCore> {
        app_with_dialer(Arc::new(RecordingDialer::new()))
    }

    fn app_with_dialer(dialer: Arc<RecordingDialer>) -> Arc<AppCore> {
        let user = CurrentUser {
            id: MemberId::new(1),
            name: "Appa".to_string(),
            is_admin: true,
        };
        Arc::new(
            AppCore::new(
                PoolConfig::default(),
                family_roster(),
                Vec::new(),
                user,
                Arc::new(ControllableClock::new(0)),
                Arc::new(SeededRandom::from_seed(11)),
                dialer,
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn toggle_payment_updates_state_and_toasts() {
        let app = app();
        let before = app.roster_view().paid_count;

        app.dispatch(Intent::TogglePayment {
            member: MemberId::new(4),
        })
        .await
        .unwrap();

        assert_eq!(app.roster_view().paid_count, before + 1);
        let toasts = app.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Payment Status Updated");
    }

    #[tokio::test]
    async fn toggle_payment_for_unknown_member_is_an_error() {
        let app = app();
        let err = app
            .dispatch(Intent::TogglePayment {
                member: MemberId::new(99),
            })
            .await
            .unwrap_err();
        assert_matches!(err, DispatchError::UnknownMember { .. });
        assert!(app.drain_notifications().is_empty());
    }

    #[tokio::test]
    async fn group_call_toggle_flips_the_flag_and_toasts() {
        let app = app();
        app.dispatch(Intent::ToggleGroupCall).await.unwrap();
        assert!(app.draw_view().group_call_active);

        app.dispatch(Intent::ToggleGroupCall).await.unwrap();
        assert!(!app.draw_view().group_call_active);

        let titles: Vec<String> = app
            .drain_notifications()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Group Call Started", "Group Call Ended"]);
    }

    #[tokio::test]
    async fn call_member_dials_the_stripped_number() {
        let dialer = Arc::new(RecordingDialer::new());
        let app = app_with_dialer(dialer.clone());

        app.dispatch(Intent::CallMember {
            member: MemberId::new(1),
        })
        .await
        .unwrap();

        assert_eq!(dialer.calls(), vec!["tel:+919876543210".to_string()]);
    }

    #[tokio::test]
    async fn call_member_with_unknown_id_is_an_error() {
        let dialer = Arc::new(RecordingDialer::new());
        let app = app_with_dialer(dialer.clone());

        let err = app
            .dispatch(Intent::CallMember {
                member: MemberId::new(99),
            })
            .await
            .unwrap_err();
        assert_matches!(err, DispatchError::UnknownMember { .. });
        assert!(dialer.calls().is_empty());
    }

    #[tokio::test]
    async fn navigation_switches_the_active_screen() {
        let app = app();
        assert_eq!(app.active_screen(), Screen::Dashboard);
        app.dispatch(Intent::NavigateTo {
            screen: Screen::History,
        })
        .await
        .unwrap();
        assert_eq!(app.active_screen(), Screen::History);
        assert!(app.drain_notifications().is_empty());
    }
}
