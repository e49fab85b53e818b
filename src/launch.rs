//! Process level wiring of the console loop and the window

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::app::CadApp;
use crate::config::Config;
use crate::console::{Console, ConsoleExit, NoWindow, RenderSignal};
use crate::document::SharedDocument;
use crate::error::{CadError, Result};

type ConsoleHandle = JoinHandle<io::Result<ConsoleExit>>;

/// Console loop alone on the calling thread
pub fn run_headless() -> Result<()> {
    let document = SharedDocument::new();
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), document, NoWindow);
    let exit = console.run()?;
    log::info!("Console finished: {exit:?}");
    Ok(())
}

/// Window on the calling thread, console loop on a background thread
///
/// Returns once the window is closed, either by the user or by the console's
/// `exit`. In the second case the console thread is joined before returning.
pub fn run_windowed(config: Config) -> Result<()> {
    let document = SharedDocument::new();
    let console_slot: Arc<Mutex<Option<ConsoleHandle>>> = Arc::default();
    let console_closed = Arc::new(AtomicBool::new(false));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    let app_name = config.window.title.clone();
    let slot = Arc::clone(&console_slot);
    let closed = Arc::clone(&console_closed);
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let signal = WindowSignal {
                ctx: cc.egui_ctx.clone(),
                console_closed: closed,
            };
            *slot.lock() = Some(spawn_console(document.clone(), signal)?);
            Ok(Box::new(CadApp::new(cc, &config, document)))
        }),
    )?;

    let handle = console_slot.lock().take();
    finish_console(handle, console_closed.load(Ordering::SeqCst))
}

fn spawn_console(document: SharedDocument, signal: WindowSignal) -> io::Result<ConsoleHandle> {
    thread::Builder::new()
        .name("console".to_owned())
        .spawn(move || Console::new(io::stdin().lock(), io::stdout(), document, signal).run())
}

/// Join the console thread if it is done or about to be. A console still
/// blocked on stdin cannot be interrupted, so it is left to die with the process.
fn finish_console(handle: Option<ConsoleHandle>, console_closed: bool) -> Result<()> {
    let Some(handle) = handle else {
        return Ok(());
    };

    if !console_closed && !handle.is_finished() {
        log::info!("Window closed while the console waits for input; not joining it");
        return Ok(());
    }

    match handle.join() {
        Ok(result) => {
            let exit = result?;
            log::info!("Console finished: {exit:?}");
            Ok(())
        }
        Err(_) => Err(CadError::ConsoleThread),
    }
}

/// Lets the console thread repaint and close the window
struct WindowSignal {
    ctx: egui::Context,
    console_closed: Arc<AtomicBool>,
}

impl RenderSignal for WindowSignal {
    fn request_redraw(&self) {
        self.ctx.request_repaint();
    }

    fn close(&self) {
        self.console_closed.store(true, Ordering::SeqCst);
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        self.ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_console_is_joined() {
        let handle = thread::spawn(|| Ok(ConsoleExit::Command));
        assert!(finish_console(Some(handle), true).is_ok());
    }

    #[test]
    fn test_console_error_is_propagated() {
        let handle = thread::spawn(|| Err(io::Error::other("stdin gone")));
        assert!(matches!(
            finish_console(Some(handle), true),
            Err(CadError::Console(_))
        ));
    }

    #[test]
    fn test_panicked_console_is_reported() {
        let handle = thread::spawn(|| -> io::Result<ConsoleExit> { panic!("boom") });
        assert!(matches!(
            finish_console(Some(handle), true),
            Err(CadError::ConsoleThread)
        ));
    }

    #[test]
    fn test_blocked_console_is_left_alone() {
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let _ = rx.recv();
            Ok(ConsoleExit::EndOfInput)
        });
        assert!(finish_console(Some(handle), false).is_ok());
        drop(tx);
    }

    #[test]
    fn test_window_signal_marks_close() {
        let closed = Arc::new(AtomicBool::new(false));
        let signal = WindowSignal {
            ctx: egui::Context::default(),
            console_closed: Arc::clone(&closed),
        };
        signal.request_redraw();
        assert!(!closed.load(Ordering::SeqCst));
        signal.close();
        assert!(closed.load(Ordering::SeqCst));
    }
}
