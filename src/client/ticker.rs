use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use super::{board::BoardEvent, edit_window::EditWindow};

/// Sends [`BoardEvent::Tick`] once a second for as long as the edit window
/// it was started for has left, then closes the channel. Stopping or
/// dropping it ends the countdown early.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Starts the countdown for `window`, or nothing when it is idle.
    pub fn for_window(
        window: &EditWindow,
        events: mpsc::UnboundedSender<BoardEvent>,
    ) -> Option<Self> {
        match window.seconds_left() {
            0 => None,
            ticks => Some(Self::spawn(ticks, events)),
        }
    }

    pub fn spawn(ticks: u32, events: mpsc::UnboundedSender<BoardEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // the first tick completes immediately
            interval.tick().await;

            for _ in 0..ticks {
                interval.tick().await;
                if events.send(BoardEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Ticker { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{board::Board, edit_window::EDIT_WINDOW_SECS},
        models::note::Note,
    };

    #[tokio::test(start_paused = true)]
    async fn countdown_runs_out_after_sixty_ticks() {
        let note = Note {
            id: "abc123".to_string(),
            message: "Happy 40th!".to_string(),
            signature: "Ada".to_string(),
            timestamp: 1719792000,
        };
        let mut board = Board::default().reduce(BoardEvent::NoteCreated(note));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::for_window(&board.edit_window, tx).unwrap();
        let started = tokio::time::Instant::now();

        let mut ticks = 0;
        while board.is_counting_down() {
            let event = rx.recv().await.unwrap();
            assert_eq!(event, BoardEvent::Tick);
            board = board.reduce(event);
            ticks += 1;
        }

        // the countdown ends on its own once the window is used up
        assert_eq!(rx.recv().await, None);
        assert!(ticker.is_finished());

        assert_eq!(ticks, EDIT_WINDOW_SECS);
        assert!(started.elapsed() >= Duration::from_secs(EDIT_WINDOW_SECS as u64));
        assert!(started.elapsed() < Duration::from_secs(EDIT_WINDOW_SECS as u64 + 1));
        assert_eq!(board.edit_window, EditWindow::Idle);
        assert_eq!(board.edit_badge("abc123"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_closes_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        Ticker::spawn(EDIT_WINDOW_SECS, tx).stop();
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_window_starts_no_countdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(Ticker::for_window(&EditWindow::Idle, tx).is_none());
        assert_eq!(rx.recv().await, None);
    }
}
