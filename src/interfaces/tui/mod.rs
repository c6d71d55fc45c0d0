//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for shortening URLs and
//! browsing the session link list

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc;

mod app;
mod constants;
mod event_handler;
mod events;
mod input_handler;
mod ui;

use app::App;
use events::TuiEvent;
use ui::ui;

use crate::services::SubmissionService;

/// Run the TUI application
pub async fn run_tui(service: SubmissionService) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
///
/// 键盘事件由阻塞任务轮询后送入 channel，和后台提交结果、
/// 复制标记过期共用同一条队列，所有状态修改都发生在本循环里。
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            // Poll for keyboard events
            if event::poll(Duration::from_millis(100)).unwrap_or(false)
                && let Ok(Event::Key(key)) = event::read()
                && input_tx.send(TuiEvent::Key(key)).is_err()
            {
                // Channel closed
                break;
            }
        }
    });

    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events
        if let Ok(tui_event) = event_rx.try_recv() {
            match tui_event {
                TuiEvent::Key(key) => {
                    let should_exit = event_handler::handle_key_event(app, key, &event_tx);
                    if should_exit {
                        return Ok(());
                    }
                }
                TuiEvent::SubmissionFinished(result) => app.finish_submission(result),
                TuiEvent::CopiedExpired { token } => app.expire_copied(token),
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await;
    }
}
