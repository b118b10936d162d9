//! Runs a [`Picker`] on its own thread so several threads can drive one color.
//!
//! The picker is owned by exactly one thread and commands are applied in the
//! order they arrive, so the HSV/RGB pairing never sees interleaved writes.

use std::thread::{self, JoinHandle};

use crate::{
    controls::ControlId, error::ActorError, format::ColorFormat, picker::Picker,
    picker::Refresh, state::ColorState, vec2::F64x2,
};

#[derive(Debug)]
pub enum Command {
    Press(ControlId, F64x2),
    Drag(ControlId, F64x2),
    Release,
    SetHsv(f64, f64, f64),
    SetRgb(u8, u8, u8),
    SetAlpha(u8),
    SetFormat(ColorFormat),
    Preset(String),
    Resize(ControlId, F64x2),
    Snapshot(flume::Sender<ColorState>),
    /// stop after the commands already queued
    Shutdown,
}

/// Cloneable sender side. The actor stops once every handle is gone.
#[derive(Debug, Clone)]
pub struct PickerHandle {
    commands: flume::Sender<Command>,
}

impl PickerHandle {
    pub fn send(&self, command: Command) -> Result<(), ActorError> {
        self.commands
            .send(command)
            .map_err(|_| ActorError::Disconnected)
    }

    /// Current state, after every command sent before this call has been applied.
    pub fn snapshot(&self) -> Result<ColorState, ActorError> {
        let (tx, rx) = flume::bounded(1);
        self.send(Command::Snapshot(tx))?;
        rx.recv().map_err(|_| ActorError::Disconnected)
    }

    pub fn shutdown(&self) -> Result<(), ActorError> {
        self.send(Command::Shutdown)
    }
}

pub struct PickerActor {
    thread: JoinHandle<Picker>,
    /// every refresh the picker produced, in order
    pub refreshes: flume::Receiver<Refresh>,
}

impl PickerActor {
    pub fn spawn(picker: Picker) -> (Self, PickerHandle) {
        let (command_tx, command_rx) = flume::unbounded::<Command>();
        let (refresh_tx, refresh_rx) = flume::unbounded::<Refresh>();
        let thread = thread::spawn(move || {
            let mut picker = picker;
            // ends on shutdown, or once every handle has been dropped
            for command in command_rx.iter() {
                trace!("picker actor: {command:?}");
                let refresh = match command {
                    Command::Press(id, pos) => picker.press(id, pos),
                    Command::Drag(id, pos) => picker.drag(id, pos),
                    Command::Release => {
                        picker.release();
                        None
                    }
                    Command::SetHsv(h, s, v) => Some(picker.set_from_hsv(h, s, v)),
                    Command::SetRgb(r, g, b) => Some(picker.set_from_rgb(r, g, b)),
                    Command::SetAlpha(a) => Some(picker.set_alpha(a)),
                    Command::SetFormat(format) => Some(picker.set_format(format)),
                    Command::Preset(hex) => picker.select_preset(&hex),
                    Command::Resize(id, container) => {
                        picker.resize(id, container);
                        Some(picker.refresh_all())
                    }
                    Command::Snapshot(reply) => {
                        // the asker may have given up waiting
                        let _ = reply.send(*picker.state());
                        None
                    }
                    Command::Shutdown => break,
                };
                if let Some(refresh) = refresh {
                    // nobody listening is fine, keep applying commands
                    let _ = refresh_tx.send(refresh);
                }
            }
            debug!("picker actor exiting");
            picker
        });
        (
            Self {
                thread,
                refreshes: refresh_rx,
            },
            PickerHandle {
                commands: command_tx,
            },
        )
    }

    /// Waits for the actor to stop and returns the picker. Call
    /// [`PickerHandle::shutdown`] or drop every handle first.
    pub fn join(self) -> Result<Picker, ActorError> {
        self.thread.join().map_err(|_| ActorError::Panicked)
    }
}
