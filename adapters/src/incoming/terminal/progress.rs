use std::io::{self, Write};

const BAR_WIDTH: usize = 40;

/// One rendered progress line, e.g. `[####----...] 10%`.
#[must_use]
pub fn progress_line(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for index in 0..BAR_WIDTH {
        bar.push(if index < filled { '#' } else { '-' });
    }
    format!("[{bar}] {percent:3}%")
}

/// In-place progress indicator. Hidden until the first draw, blanked out on
/// clear so the result line does not collide with leftover bar characters.
pub struct ProgressView<W: Write> {
    out: W,
    visible: bool,
}

impl<W: Write> ProgressView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visible: false,
        }
    }

    pub fn draw(&mut self, percent: u8) -> io::Result<()> {
        self.visible = true;
        write!(self.out, "\r{}", progress_line(percent))?;
        self.out.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }
        self.visible = false;
        let blank = " ".repeat(progress_line(100).len());
        write!(self.out, "\r{blank}\r")?;
        self.out.flush()
    }
}
