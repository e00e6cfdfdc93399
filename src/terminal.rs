// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{cursor, style::Print, terminal, ExecutableCommand, QueueableCommand};

// Raw mode stays off: commands arrive as whole buffered lines on stdin, and
// canonical input has to keep working while the scene redraws.
pub struct Terminal<W: Write = Stdout> {
    out: W,
}

impl Terminal<Stdout> {
    pub fn new() -> Result<Self> {
        Self::with_writer(stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_writer(mut out: W) -> Result<Self> {
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(terminal::Clear(terminal::ClearType::All))?;
        out.flush()?;
        Ok(Self { out })
    }

    // Full-screen redraw: clear, home the cursor, print the scene and the
    // optional footer, one flush.
    pub fn draw(&mut self, scene: &str, footer: Option<&str>) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(Print(scene))?;
        if let Some(footer) = footer {
            self.out.queue(Print('\n'))?;
            self.out.queue(Print(footer))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = self.out.flush();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = out.flush();
}
