// Copyright (c) 2026 rezky_nightky

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use crate::field::{Field, MAX_INTENSITY};
use crate::input::Command;
use crate::render::render;
use crate::terminal::Terminal;

pub const HELP_TEXT: &str = "[0-9]: set intensity\ni: increase intensity\nd: decrease intensity\nx: exit simulation\nh: toggle this help";

pub struct Simulation {
    field: Field,
    tick_interval: Duration,
    show_help: bool,
    running: bool,
}

impl Simulation {
    pub fn new(field: Field, tick_interval: Duration) -> Self {
        Self {
            field,
            tick_interval,
            show_help: true,
            running: true,
        }
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::SetIntensity(v) => self.field.intensity = v,
            Command::Increase => {
                self.field.intensity = self.field.intensity.saturating_add(1).min(MAX_INTENSITY);
            }
            Command::Decrease => {
                self.field.intensity = self.field.intensity.saturating_sub(1);
            }
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Exit => self.running = false,
            Command::Unknown => {}
        }
    }

    // A disconnected channel means the input thread is gone; treat that like
    // an exit command.
    fn drain(&mut self, commands: &Receiver<Command>) {
        loop {
            match commands.try_recv() {
                Ok(cmd) => self.apply(cmd),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.running = false;
                    return;
                }
            }
        }
    }

    // The tick suspension doubles as the wait on the command channel, so an
    // exit arriving mid-sleep interrupts it and shutdown latency stays under
    // one tick interval.
    fn sleep_until(&mut self, deadline: Instant, commands: &Receiver<Command>) {
        while self.running {
            let Some(timeout) = deadline.checked_duration_since(Instant::now()) else {
                return;
            };
            if timeout.is_zero() {
                return;
            }
            match commands.recv_timeout(timeout) {
                Ok(cmd) => self.apply(cmd),
                Err(RecvTimeoutError::Timeout) => return,
                Err(RecvTimeoutError::Disconnected) => {
                    self.running = false;
                    return;
                }
            }
        }
    }

    pub fn run<W: Write>(
        &mut self,
        term: &mut Terminal<W>,
        commands: &Receiver<Command>,
    ) -> io::Result<()> {
        while self.running {
            self.drain(commands);
            if !self.running {
                break;
            }

            self.field.tick();
            let scene = render(&self.field);
            let footer = self.show_help.then_some(HELP_TEXT);
            term.draw(&scene, footer)?;

            let deadline = Instant::now() + self.tick_interval;
            self.sleep_until(deadline, commands);
        }
        Ok(())
    }
}
