use crate::constants::TICK_RATE_DEFAULT_MS;
use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(TICK_RATE_DEFAULT_MS))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
