//! Host collaborators the gameplay core talks to
//!
//! Every collaborator is optional. An absent one turns the matching side
//! effect into a no-op; gameplay never fails because a text field, button or
//! audio source was not wired up.

/// Audio cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball touched anything
    Impact,
    /// Ball hit a block whose template asks for a hit sound
    BlockHit,
    /// Ball crossed the kill boundary
    GameOver,
    /// Fewer than two blocks left
    GameClear,
}

/// A text element (score readout, end-of-game message)
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
    fn set_visible(&mut self, visible: bool);
}

/// A clickable control (start / restart button)
pub trait Control {
    fn set_visible(&mut self, visible: bool);
}

/// Plays one-shot audio cues
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Optional collaborator handles
#[derive(Default)]
pub struct Hooks {
    pub score_text: Option<Box<dyn TextDisplay>>,
    pub message_text: Option<Box<dyn TextDisplay>>,
    pub start_control: Option<Box<dyn Control>>,
    pub restart_control: Option<Box<dyn Control>>,
    pub audio: Option<Box<dyn CuePlayer>>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("score_text", &self.score_text.is_some())
            .field("message_text", &self.message_text.is_some())
            .field("start_control", &self.start_control.is_some())
            .field("restart_control", &self.restart_control.is_some())
            .field("audio", &self.audio.is_some())
            .finish()
    }
}

impl Hooks {
    /// No collaborators at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_start_control(&self) -> bool {
        self.start_control.is_some()
    }

    pub fn set_score_text(&mut self, text: &str) {
        if let Some(display) = &mut self.score_text {
            display.set_text(text);
        }
    }

    /// Set and reveal the end-of-game message
    pub fn show_message(&mut self, text: &str) {
        if let Some(display) = &mut self.message_text {
            display.set_text(text);
            display.set_visible(true);
        }
    }

    pub fn hide_message(&mut self) {
        if let Some(display) = &mut self.message_text {
            display.set_visible(false);
        }
    }

    pub fn set_start_visible(&mut self, visible: bool) {
        if let Some(control) = &mut self.start_control {
            control.set_visible(visible);
        }
    }

    pub fn set_restart_visible(&mut self, visible: bool) {
        if let Some(control) = &mut self.restart_control {
            control.set_visible(visible);
        }
    }

    pub fn play(&mut self, cue: Cue) {
        if let Some(audio) = &mut self.audio {
            audio.play(cue);
        }
    }
}

/// Collaborators that only write to the log (headless hosts)
pub mod logging {
    use super::{Control, Cue, CuePlayer, Hooks, TextDisplay};

    pub struct LogText(pub &'static str);

    impl TextDisplay for LogText {
        fn set_text(&mut self, text: &str) {
            log::info!("[{}] {}", self.0, text);
        }

        fn set_visible(&mut self, visible: bool) {
            log::debug!("[{}] visible={}", self.0, visible);
        }
    }

    pub struct LogControl(pub &'static str);

    impl Control for LogControl {
        fn set_visible(&mut self, visible: bool) {
            log::debug!("[{}] visible={}", self.0, visible);
        }
    }

    pub struct LogAudio;

    impl CuePlayer for LogAudio {
        fn play(&mut self, cue: Cue) {
            log::debug!("cue {:?}", cue);
        }
    }

    /// Wire every hook to the log. `with_start` controls whether a start
    /// button exists (without one the ball launches on start).
    pub fn hooks(with_start: bool) -> Hooks {
        Hooks {
            score_text: Some(Box::new(LogText("score"))),
            message_text: Some(Box::new(LogText("message"))),
            start_control: if with_start {
                Some(Box::new(LogControl("start")))
            } else {
                None
            },
            restart_control: Some(Box::new(LogControl("restart"))),
            audio: Some(Box::new(LogAudio)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::recording_hooks;
    use super::*;

    #[test]
    fn test_missing_collaborators_are_noops() {
        let mut hooks = Hooks::none();
        hooks.set_score_text("Score: 1");
        hooks.show_message("Game Over");
        hooks.hide_message();
        hooks.set_start_visible(true);
        hooks.set_restart_visible(true);
        hooks.play(Cue::Impact);
        assert!(!hooks.has_start_control());
    }

    #[test]
    fn test_show_message_reveals_text() {
        let (mut hooks, rec) = recording_hooks();
        hooks.show_message("Congratulations!");
        assert_eq!(rec.borrow().message_text.as_deref(), Some("Congratulations!"));
        assert_eq!(rec.borrow().message_visible, Some(true));

        hooks.hide_message();
        assert_eq!(rec.borrow().message_visible, Some(false));
    }
}
