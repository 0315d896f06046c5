//! Lifetime play statistics.

/// Counters persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl Stats {
    /// Fold one finished game into the counters.
    pub fn record(&mut self, won: bool) {
        self.played = self.played.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Integer win percentage; 0 before any game was played.
    ///
    /// Counters come from a user-editable file, so `wins > played` is
    /// possible and yields more than 100.
    pub fn win_percentage(&self) -> u32 {
        let pct = u64::from(self.wins) * 100 / u64::from(self.played.max(1));
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}
