//! Home page animation math. Everything is a pure function of elapsed ticks.

use super::state::{Counter, HomeState, PALETTE_COUNT};

pub fn tick(state: &mut HomeState, delta_ticks: u32) {
    state.elapsed_ticks += delta_ticks as u64;
}

/// The part of the title the typewriter has revealed so far.
pub fn typed_title(state: &HomeState) -> &str {
    let per_char = state.ticks_per_char.max(1) as u64;
    let shown = (state.elapsed_ticks / per_char) as usize;
    match state.title.char_indices().nth(shown) {
        Some((byte, _)) => &state.title[..byte],
        None => &state.title,
    }
}

pub fn typing_done(state: &HomeState) -> bool {
    typed_title(state).len() == state.title.len()
}

/// Counter value: linear ramp to `target` over `counter_ticks`, then fixed.
pub fn counter_value(state: &HomeState, counter: &Counter) -> u32 {
    let duration = state.counter_ticks as u64;
    if duration == 0 || state.elapsed_ticks >= duration {
        return counter.target;
    }
    (counter.target as u64 * state.elapsed_ticks / duration) as u32
}

/// Index of the hero palette shown right now.
pub fn palette_index(state: &HomeState) -> usize {
    if state.hero_cycle_ticks == 0 {
        return 0;
    }
    ((state.elapsed_ticks / state.hero_cycle_ticks as u64) % PALETTE_COUNT as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> HomeState {
        let mut s = HomeState::new("Hack", "tagline");
        s.counters.push(Counter { label: "Problems", target: 58 });
        s
    }

    #[test]
    fn typewriter_reveals_one_char_per_tick() {
        let mut s = state();
        assert_eq!(typed_title(&s), "");
        tick(&mut s, 1);
        assert_eq!(typed_title(&s), "H");
        tick(&mut s, 2);
        assert_eq!(typed_title(&s), "Hac");
        assert!(!typing_done(&s));
        tick(&mut s, 10);
        assert_eq!(typed_title(&s), "Hack");
        assert!(typing_done(&s));
    }

    #[test]
    fn typewriter_respects_speed_and_multibyte_chars() {
        let mut s = HomeState::new("Hé✓", "");
        s.ticks_per_char = 2;
        tick(&mut s, 3);
        assert_eq!(typed_title(&s), "H");
        tick(&mut s, 1);
        assert_eq!(typed_title(&s), "Hé");
        tick(&mut s, 2);
        assert_eq!(typed_title(&s), "Hé✓");
    }

    #[test]
    fn counter_ramps_then_holds() {
        let mut s = state();
        let c = s.counters[0].clone();
        assert_eq!(counter_value(&s, &c), 0);
        tick(&mut s, 10);
        assert_eq!(counter_value(&s, &c), 29);
        tick(&mut s, 10);
        assert_eq!(counter_value(&s, &c), 58);
        tick(&mut s, 1000);
        assert_eq!(counter_value(&s, &c), 58);
    }

    #[test]
    fn counter_without_duration_is_immediate() {
        let mut s = state();
        s.counter_ticks = 0;
        let c = s.counters[0].clone();
        assert_eq!(counter_value(&s, &c), 58);
    }

    #[test]
    fn palette_cycles() {
        let mut s = state();
        assert_eq!(palette_index(&s), 0);
        tick(&mut s, 99);
        assert_eq!(palette_index(&s), 0);
        tick(&mut s, 1);
        assert_eq!(palette_index(&s), 1);
        tick(&mut s, 300);
        assert_eq!(palette_index(&s), 0);
        s.hero_cycle_ticks = 0;
        assert_eq!(palette_index(&s), 0);
    }
}
