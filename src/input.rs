// Copyright (c) 2026 rezky_nightky

use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetIntensity(u8),
    Increase,
    Decrease,
    ToggleHelp,
    Exit,
    Unknown,
}

impl Command {
    // Decode one input line, first match wins. Anything unrecognized,
    // including an empty line, is Unknown.
    pub fn decode(line: &str) -> Self {
        match line {
            "x" => Command::Exit,
            "i" => Command::Increase,
            "d" => Command::Decrease,
            "h" => Command::ToggleHelp,
            _ => match line.as_bytes() {
                &[digit @ b'0'..=b'9'] => Command::SetIntensity(digit - b'0'),
                _ => Command::Unknown,
            },
        }
    }
}

// Dedicated stdin listener. Its only job is decode-and-forward; rendering
// and timing stay on the simulation thread.
pub fn spawn_listener(tx: Sender<Command>) -> io::Result<()> {
    thread::Builder::new()
        .name("snowfall-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            read_loop(stdin.lock(), &tx);
        })?;
    Ok(())
}

fn read_loop(input: impl BufRead, tx: &Sender<Command>) {
    for line in input.lines() {
        let Ok(line) = line else { break };
        let cmd = Command::decode(&line);
        if tx.send(cmd).is_err() || cmd == Command::Exit {
            return;
        }
    }
    // End of input is an implicit exit.
    let _ = tx.send(Command::Exit);
}
