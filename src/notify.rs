use std::io::{self, Write};

use crate::logger;

/// Cue played when an answer is scored.
pub trait Notifier {
    fn on_correct(&mut self);
    fn on_incorrect(&mut self);
}

/// Rings the terminal bell: once for a correct answer, twice for a miss.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl TerminalBell {
    fn ring(times: usize) {
        let mut stdout = io::stdout();
        let bells = "\x07".repeat(times);
        if let Err(e) = stdout
            .write_all(bells.as_bytes())
            .and_then(|_| stdout.flush())
        {
            logger::log(&format!("Failed to ring terminal bell: {}", e));
        }
    }
}

impl Notifier for TerminalBell {
    fn on_correct(&mut self) {
        Self::ring(1);
    }

    fn on_incorrect(&mut self) {
        Self::ring(2);
    }
}

#[derive(Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn on_correct(&mut self) {}
    fn on_incorrect(&mut self) {}
}

pub fn notifier_for(sound_enabled: bool) -> Box<dyn Notifier> {
    if sound_enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_notifier_does_nothing() {
        let mut notifier = notifier_for(false);
        notifier.on_correct();
        notifier.on_incorrect();
    }
}
