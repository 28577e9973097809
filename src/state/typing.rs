// Typewriter reveal for the hero heading.
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    chars: Rc<[char]>,
    shown: usize,
    done: bool,
}

pub enum TypeAction {
    Tick,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            done: false,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The caret stays visible until one tick after the last character.
    pub fn caret_visible(&self) -> bool {
        !self.done
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// Delay before the next tick: `start_delay_ms` before the first
    /// character, `tick_ms` afterwards.
    pub fn next_delay(&self, start_delay_ms: u32, tick_ms: u32) -> u32 {
        if self.shown == 0 { start_delay_ms } else { tick_ms }
    }

    pub fn tick(&mut self) {
        if self.shown < self.chars.len() {
            self.shown += 1;
        } else {
            self.done = true;
        }
    }
}

impl Reducible for Typewriter {
    type Action = TypeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypeAction::Tick if !self.done => {
                let mut next = (*self).clone();
                next.tick();
                Rc::new(next)
            }
            TypeAction::Tick => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_one_char_per_tick_then_drops_caret() {
        let mut tw = Typewriter::new("Touch");
        assert_eq!(tw.visible_text(), "");
        assert!(tw.caret_visible());
        for expected in ["T", "To", "Tou", "Touc", "Touch"] {
            tw.tick();
            assert_eq!(tw.visible_text(), expected);
            assert!(tw.caret_visible());
        }
        tw.tick();
        assert!(tw.is_done());
        assert!(!tw.caret_visible());
        assert_eq!(tw.visible_text(), "Touch");
    }

    #[test]
    fn multibyte_text_is_typed_by_char() {
        let mut tw = Typewriter::new("née ✓");
        for _ in 0..6 {
            tw.tick();
        }
        assert!(tw.is_done());
        assert_eq!(tw.visible_text(), "née ✓");
    }

    #[test]
    fn first_tick_waits_for_start_delay() {
        let mut tw = Typewriter::new("ab");
        assert_eq!(tw.next_delay(1000, 100), 1000);
        tw.tick();
        assert_eq!(tw.next_delay(1000, 100), 100);
    }

    #[test]
    fn empty_heading_finishes_on_first_tick() {
        let tw = Rc::new(Typewriter::new(""));
        let after = tw.reduce(TypeAction::Tick);
        assert!(after.is_done());
        let again = after.clone().reduce(TypeAction::Tick);
        assert!(Rc::ptr_eq(&after, &again));
    }
}
