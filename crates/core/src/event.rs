use crate::state::FeedSnapshot;

/// All messages (events) that can flow through the dashboard event bus.
///
/// Sources:
/// - Feed driver tasks     → `FeedUpdated`
/// - Config watcher task   → `ConfigReloaded`
/// - User actions          → `WaterGlassAdded`, `WaterGlassRemoved`, `WorkoutDaySelected`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Feeds ─────────────────────────────────────────────────────────────────
    /// A feed ticked and published a fresh snapshot.
    FeedUpdated(FeedSnapshot),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── User actions ──────────────────────────────────────────────────────────
    /// One more glass of water logged.
    WaterGlassAdded,
    /// Undo the last logged glass.
    WaterGlassRemoved,
    /// Weekday selected in the workout planner (0 = Monday).
    WorkoutDaySelected(u8),

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Graceful shutdown requested.
    Shutdown,
}
