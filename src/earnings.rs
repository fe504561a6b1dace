//! Earnings display: the two-slot header counter and its helpers.
//!
//! The header shows either the running total or, for a short reveal, the
//! amount just earned. Amounts are integer points; 100 points = $1.00.

/// How long the header shows the earned delta before merging it.
pub const HEADER_REVEAL_MS: i32 = 1500;
/// How long a clicked word dims and shows its floating `+$x.xx`.
pub const WORD_PULSE_MS: i32 = 800;
/// Count-up animation for the total slot.
pub const COUNTER_TWEEN_MS: i32 = 500;
pub const COUNTER_TWEEN_STEPS: u32 = 20;
/// The header only auto-hides once the page is scrolled past this.
pub const HIDE_AFTER_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle { total: i64 },
    Revealing { total: i64, delta: i64 },
}

/// What the caller must do after a reward arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Idle -> Revealing: show the header and arm the timer.
    Started,
    /// Already revealing: the delta grew, re-arm the timer.
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsDisplay {
    state: DisplayState,
}

impl EarningsDisplay {
    pub fn new(total: i64) -> Self {
        Self {
            state: DisplayState::Idle { total },
        }
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.state, DisplayState::Revealing { .. })
    }

    /// Total shown in the main slot. Excludes a delta still being revealed.
    pub fn shown_total(&self) -> i64 {
        match self.state {
            DisplayState::Idle { total } | DisplayState::Revealing { total, .. } => total,
        }
    }

    /// Amount shown in the delta slot, zero when idle.
    pub fn shown_delta(&self) -> i64 {
        match self.state {
            DisplayState::Idle { .. } => 0,
            DisplayState::Revealing { delta, .. } => delta,
        }
    }

    /// Total including anything still pending in the delta slot.
    pub fn settled_total(&self) -> i64 {
        self.shown_total() + self.shown_delta()
    }

    /// Replace the committed total, keeping any pending delta.
    pub fn rebase(&mut self, total: i64) {
        self.state = match self.state {
            DisplayState::Idle { .. } => DisplayState::Idle { total },
            DisplayState::Revealing { delta, .. } => DisplayState::Revealing { total, delta },
        };
    }

    /// A reward arrived. Deltas landing during a reveal accumulate, so a
    /// burst of clicks is never undercounted.
    pub fn receive(&mut self, delta: i64) -> Option<Reveal> {
        if delta <= 0 {
            return None;
        }
        match self.state {
            DisplayState::Idle { total } => {
                self.state = DisplayState::Revealing { total, delta };
                Some(Reveal::Started)
            }
            DisplayState::Revealing { total, delta: pending } => {
                self.state = DisplayState::Revealing {
                    total,
                    delta: pending + delta,
                };
                Some(Reveal::Extended)
            }
        }
    }

    /// Reveal timer fired: merge the delta into the total. Returns the
    /// committed amount, or `None` if nothing was being revealed.
    pub fn complete(&mut self) -> Option<i64> {
        match self.state {
            DisplayState::Idle { .. } => None,
            DisplayState::Revealing { total, delta } => {
                self.state = DisplayState::Idle {
                    total: total + delta,
                };
                Some(delta)
            }
        }
    }

    /// Take back an optimistic award whose write did not count.
    pub fn revoke(&mut self, amount: i64) {
        if amount <= 0 {
            return;
        }
        self.state = match self.state {
            DisplayState::Revealing { total, delta } if delta > amount => {
                DisplayState::Revealing {
                    total,
                    delta: delta - amount,
                }
            }
            DisplayState::Revealing { total, delta } => DisplayState::Idle {
                total: (total - (amount - delta)).max(0),
            },
            DisplayState::Idle { total } => DisplayState::Idle {
                total: (total - amount).max(0),
            },
        };
    }
}

/// Scroll-direction auto-hide for the fixed header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisibility {
    visible: bool,
    last_scroll: f64,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll: 0.0,
        }
    }
}

impl HeaderVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A reveal started: show the header until the next scroll says
    /// otherwise.
    pub fn pin(&mut self) {
        self.visible = true;
    }

    /// Feed a new scroll position. While a reveal is showing the header
    /// stays pinned and the position is not recorded.
    pub fn on_scroll(&mut self, scroll_y: f64, revealing: bool) -> bool {
        if revealing {
            self.visible = true;
            return self.visible;
        }
        let scrolling_down = scroll_y > self.last_scroll && scroll_y > HIDE_AFTER_PX;
        self.visible = !scrolling_down;
        self.last_scroll = scroll_y;
        self.visible
    }
}

/// Linear count-up from one amount to another in a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    from: f64,
    to: i64,
    step: u32,
    steps: u32,
}

impl CounterTween {
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from: from as f64,
            to,
            step: 0,
            steps: COUNTER_TWEEN_STEPS,
        }
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one step and return the value to display. The last step
    /// lands exactly on the target.
    pub fn advance(&mut self) -> i64 {
        if self.step < self.steps {
            self.step += 1;
        }
        if self.is_done() {
            return self.to;
        }
        let increment = (self.to as f64 - self.from) / self.steps as f64;
        (self.from + increment * self.step as f64).round() as i64
    }

    pub fn interval_ms(&self) -> i32 {
        COUNTER_TWEEN_MS / self.steps as i32
    }
}

/// Render points as US dollars: `150000` -> `"$1,500.00"`.
pub fn format_money(points: i64) -> String {
    let sign = if points < 0 { "-" } else { "" };
    let abs = points.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let cents = abs % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, cents)
}

/// Render an award: `500` -> `"+$5.00"`.
pub fn format_delta(points: i64) -> String {
    format!("+{}", format_money(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_then_commit() {
        let mut display = EarningsDisplay::new(1000);
        assert_eq!(display.receive(500), Some(Reveal::Started));
        assert_eq!(display.shown_total(), 1000);
        assert_eq!(display.shown_delta(), 500);

        assert_eq!(display.complete(), Some(500));
        assert_eq!(display.state, DisplayState::Idle { total: 1500 });
        assert_eq!(display.complete(), None);
    }

    #[test]
    fn test_burst_accumulates() {
        let mut display = EarningsDisplay::new(1000);
        display.receive(500);
        assert_eq!(display.receive(2500), Some(Reveal::Extended));
        assert_eq!(display.shown_delta(), 3000);
        assert_eq!(display.settled_total(), 4000);

        display.complete();
        assert_eq!(display.shown_total(), 4000);
    }

    #[test]
    fn test_non_positive_delta_ignored() {
        let mut display = EarningsDisplay::new(1000);
        assert_eq!(display.receive(0), None);
        assert_eq!(display.receive(-5), None);
        assert!(!display.is_revealing());
    }

    #[test]
    fn test_rebase_keeps_pending_delta() {
        let mut display = EarningsDisplay::new(1000);
        display.receive(500);
        display.rebase(4000);
        assert_eq!(display.state, DisplayState::Revealing { total: 4000, delta: 500 });

        let mut idle = EarningsDisplay::new(1000);
        idle.rebase(2200);
        assert_eq!(idle.shown_total(), 2200);
    }

    #[test]
    fn test_revoke_while_revealing() {
        let mut display = EarningsDisplay::new(1000);
        display.receive(500);
        display.receive(300);
        display.revoke(300);
        assert_eq!(display.state, DisplayState::Revealing { total: 1000, delta: 500 });

        display.revoke(500);
        assert_eq!(display.state, DisplayState::Idle { total: 1000 });
    }

    #[test]
    fn test_revoke_after_commit() {
        let mut display = EarningsDisplay::new(1000);
        display.receive(500);
        display.complete();
        display.revoke(500);
        assert_eq!(display.shown_total(), 1000);

        display.revoke(5000);
        assert_eq!(display.shown_total(), 0);
    }

    #[test]
    fn test_header_hides_when_scrolling_down() {
        let mut header = HeaderVisibility::default();
        assert!(header.on_scroll(50.0, false));
        assert!(!header.on_scroll(300.0, false));
        assert!(header.on_scroll(250.0, false));
    }

    #[test]
    fn test_header_pinned_while_revealing() {
        let mut header = HeaderVisibility::default();
        header.on_scroll(400.0, false);
        assert!(!header.is_visible());

        assert!(header.on_scroll(800.0, true));
        // Position was not recorded, so the next downward step still hides
        assert!(!header.on_scroll(500.0, false));
    }

    #[test]
    fn test_pin_holds_until_next_scroll() {
        let mut header = HeaderVisibility::default();
        header.on_scroll(400.0, false);
        header.pin();
        assert!(header.is_visible());

        // Still measured from the last real scroll position
        assert!(!header.on_scroll(450.0, false));
    }

    #[test]
    fn test_counter_tween_lands_on_target() {
        let mut tween = CounterTween::new(1000, 1500);
        assert_eq!(tween.interval_ms(), 25);
        assert_eq!(tween.advance(), 1025);

        let mut last = 0;
        while !tween.is_done() {
            let next = tween.advance();
            assert!(next >= last);
            last = next;
        }
        assert_eq!(last, 1500);
        assert_eq!(tween.advance(), 1500);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(5), "$0.05");
        assert_eq!(format_money(1000), "$10.00");
        assert_eq!(format_money(150_000), "$1,500.00");
        assert_eq!(format_money(123_456_789), "$1,234,567.89");
        assert_eq!(format_money(-250), "-$2.50");
        assert_eq!(format_delta(500), "+$5.00");
    }
}
