//! Boot screen and password gate: BOOT -> PASSWORD -> DESKTOP.

use shared_types::Screen;

const PASSWORD: &str = "alcon1";
const HINT: &str = "Forgot your password?";
const HINT_REVEALED: &str = "Really....";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootLineKind {
    Text(&'static str),
    Spacer,
    /// "Press Any Key to boot system"
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootLine {
    pub kind: BootLineKind,
    /// Pause after this line before the next one appears
    pub delay_ms: u32,
}

const fn text(text: &'static str, delay_ms: u32) -> BootLine {
    BootLine {
        kind: BootLineKind::Text(text),
        delay_ms,
    }
}

const fn spacer() -> BootLine {
    BootLine {
        kind: BootLineKind::Spacer,
        delay_ms: 50,
    }
}

pub const BOOT_SCRIPT: &[BootLine] = &[
    text("YuriOS v1.0.0", 500),
    text("Copyright (c) 2049, 2050. All Rights Reserved", 100),
    text("BIOS Version: 2945170 Release 3", 100),
    spacer(),
    text("Battery Pack: 100% OK", 400),
    text("Memory Test: 16384K OK", 400),
    text("Initialization USB Controllers... Done", 600),
    spacer(),
    BootLine {
        kind: BootLineKind::Prompt,
        delay_ms: 200,
    },
];

/// Fade between the boot screen and the password screen
pub const BOOT_EXIT_DELAY_MS: u32 = 100;

/// Keys that produce no character on their own.
const MODIFIER_KEYS: &[&str] = &[
    "Alt",
    "AltGraph",
    "CapsLock",
    "Control",
    "Fn",
    "FnLock",
    "Meta",
    "NumLock",
    "OS",
    "ScrollLock",
    "Shift",
    "Super",
    "Tab",
];

/// Whether a `KeyboardEvent.key` value counts as "any key" on the boot screen.
pub fn key_advances_boot(key: &str) -> bool {
    !MODIFIER_KEYS.contains(&key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootInput {
    /// Jumped to the final line
    FastForwarded,
    /// Left the boot screen
    Finished,
}

/// Pacing of the scripted boot lines.
///
/// The timer owner asks [`next_tick`](Self::next_tick) for a delay and reports
/// back with the generation it was given; ticks from before a fast-forward are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequence {
    script: &'static [BootLine],
    step: usize,
    generation: u64,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new(BOOT_SCRIPT)
    }
}

impl BootSequence {
    pub fn new(script: &'static [BootLine]) -> Self {
        Self {
            script,
            step: 0,
            generation: 0,
        }
    }

    /// Lines revealed so far
    pub fn visible_lines(&self) -> &'static [BootLine] {
        let end = (self.step + 1).min(self.script.len());
        &self.script[..end]
    }

    pub fn at_final_line(&self) -> bool {
        self.step + 1 >= self.script.len()
    }

    pub fn shows_cursor(&self) -> bool {
        !self.at_final_line()
    }

    pub fn next_tick(&self) -> Option<(u64, u32)> {
        self.script
            .get(self.step)
            .map(|line| (self.generation, line.delay_ms))
    }

    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.step >= self.script.len() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn input(&mut self) -> BootInput {
        if self.at_final_line() {
            return BootInput::Finished;
        }
        self.step = self.script.len().saturating_sub(1);
        self.generation += 1;
        BootInput::FastForwarded
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordGate {
    input: String,
    error: bool,
    hint_revealed: bool,
}

impl PasswordGate {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn hint(&self) -> &'static str {
        if self.hint_revealed {
            HINT_REVEALED
        } else {
            HINT
        }
    }

    pub fn reveal_hint(&mut self) {
        self.hint_revealed = true;
    }

    pub fn edit(&mut self, value: String) {
        self.input = value;
        self.error = false;
    }

    /// Check the current input. Mismatches flag the error and may be retried.
    pub fn submit(&mut self) -> bool {
        let accepted = self.input.to_lowercase() == PASSWORD;
        self.error = !accepted;
        accepted
    }
}

/// The whole pre-desktop flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gate {
    screen: Screen,
    pub boot: BootSequence,
    pub password: PasswordGate,
}

impl Gate {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn boot_input(&mut self) -> BootInput {
        if self.screen != Screen::Boot {
            return BootInput::Finished;
        }
        self.boot.input()
    }

    pub fn finish_boot(&mut self) {
        if self.screen == Screen::Boot {
            self.screen = Screen::Password;
        }
    }

    pub fn submit_password(&mut self) -> bool {
        if self.screen != Screen::Password {
            return false;
        }
        let unlocked = self.password.submit();
        if unlocked {
            self.screen = Screen::Desktop;
        }
        unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_keys_do_not_advance_boot() {
        for key in ["Shift", "Control", "Alt", "Meta", "Tab", "CapsLock"] {
            assert!(!key_advances_boot(key), "{key}");
        }
        for key in ["a", "Enter", " ", "Escape", "ArrowDown"] {
            assert!(key_advances_boot(key), "{key}");
        }
    }

    fn enter_password(gate: &mut Gate, value: &str) -> bool {
        gate.password.edit(value.to_string());
        gate.submit_password()
    }

    #[test]
    fn boot_reveals_lines_one_tick_at_a_time() {
        let mut boot = BootSequence::default();
        assert_eq!(boot.visible_lines().len(), 1);
        assert!(boot.shows_cursor());

        let (generation, delay) = boot.next_tick().unwrap();
        assert_eq!(delay, 500);
        assert!(boot.tick(generation));
        assert_eq!(boot.visible_lines().len(), 2);
    }

    #[test]
    fn key_before_final_line_fast_forwards() {
        let mut boot = BootSequence::default();
        let (stale, _) = boot.next_tick().unwrap();

        assert_eq!(boot.input(), BootInput::FastForwarded);
        assert!(boot.at_final_line());
        assert_eq!(boot.visible_lines().len(), BOOT_SCRIPT.len());
        assert!(!boot.shows_cursor());

        // Timer armed before the skip must not advance the script.
        assert!(!boot.tick(stale));
        assert_eq!(boot.visible_lines().len(), BOOT_SCRIPT.len());
    }

    #[test]
    fn key_on_final_line_finishes() {
        let mut gate = Gate::default();
        assert_eq!(gate.boot_input(), BootInput::FastForwarded);
        assert_eq!(gate.screen(), Screen::Boot);

        assert_eq!(gate.boot_input(), BootInput::Finished);
        gate.finish_boot();
        assert_eq!(gate.screen(), Screen::Password);
    }

    #[test]
    fn playing_script_to_the_end_reaches_final_line() {
        let mut boot = BootSequence::default();
        while let Some((generation, _)) = boot.next_tick() {
            assert!(boot.tick(generation));
        }
        assert!(boot.at_final_line());
        assert_eq!(boot.input(), BootInput::Finished);
    }

    #[test]
    fn password_is_case_insensitive() {
        for candidate in ["ALCON1", "alcon1", "Alcon1"] {
            let mut gate = Gate::default();
            gate.boot_input();
            gate.boot_input();
            gate.finish_boot();
            assert!(enter_password(&mut gate, candidate), "{candidate}");
            assert_eq!(gate.screen(), Screen::Desktop);
        }
    }

    #[test]
    fn wrong_password_flags_error_and_stays() {
        let mut gate = Gate::default();
        gate.finish_boot();

        for candidate in ["", "alcon", "alcon12", " alcon1", "password"] {
            assert!(!enter_password(&mut gate, candidate), "{candidate}");
            assert_eq!(gate.screen(), Screen::Password);
            assert!(gate.password.has_error());
        }

        gate.password.edit("a".to_string());
        assert!(!gate.password.has_error());
        assert!(enter_password(&mut gate, "alcon1"));
    }

    #[test]
    fn hint_changes_once_clicked() {
        let mut gate = PasswordGate::default();
        assert_eq!(gate.hint(), "Forgot your password?");
        gate.reveal_hint();
        assert_eq!(gate.hint(), "Really....");
    }

    #[test]
    fn password_before_boot_finishes_is_ignored() {
        let mut gate = Gate::default();
        assert!(!enter_password(&mut gate, "alcon1"));
        assert_eq!(gate.screen(), Screen::Boot);
    }
}
