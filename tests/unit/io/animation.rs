//! Tests for the animated terminal view

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ucsgrid::algorithm::events::{SearchEvent, SearchObserver};
    use ucsgrid::io::animation::TerminalAnimator;
    use ucsgrid::spatial::grid::{Flag, Grid};

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

    fn animator() -> TerminalAnimator<Vec<u8>> {
        TerminalAnimator::new(Vec::new(), Duration::ZERO)
    }

    // Tests the interval is converted from microseconds
    // Verified by treating the interval as milliseconds
    #[test]
    fn test_stdout_interval() {
        let animator = TerminalAnimator::stdout(1500);
        assert_eq!(animator.interval(), Duration::from_micros(1500));
    }

    // Tests a frame draws start, goal and terrain glyphs
    // Verified by drawing the raw map glyph for every cell
    #[test]
    fn test_draw_frame_glyphs() {
        let mut grid = Grid::from_rows(&[".:="]).unwrap();
        grid.cell_mut(6).unwrap().flags.insert(Flag::Start);
        grid.cell_mut(8).unwrap().flags.insert(Flag::Goal);

        let mut animator = animator();
        animator.draw(&grid).unwrap();
        let output = String::from_utf8(animator.into_inner()).unwrap();

        assert!(output.contains('A'));
        assert!(output.contains(':'));
        assert!(output.contains('B'));
        assert!(!output.contains('='));
        assert!(!output.contains('#'));
    }

    // Tests frontier cells are drawn with the path glyph
    // Verified by drawing frontier cells with their map glyph
    #[test]
    fn test_draw_frontier() {
        let mut grid = Grid::from_rows(&["+"]).unwrap();
        grid.cell_mut(4).unwrap().flags.insert(Flag::Frontier);

        let mut animator = animator();
        animator.draw(&grid).unwrap();
        let output = String::from_utf8(animator.into_inner()).unwrap();

        assert!(output.contains('o'));
        assert!(!output.contains('+'));
    }

    // Tests every event triggers a redraw
    // Verified by ignoring neighbor check events
    #[test]
    fn test_observer_redraws() {
        let grid = Grid::from_rows(&[".."]).unwrap();
        let mut animator = animator();

        animator
            .on_event(&grid, SearchEvent::Examined { from: 5, to: 6 })
            .unwrap();
        let once = animator.into_inner().len();

        let mut animator = TerminalAnimator::new(Vec::new(), Duration::ZERO);
        for _ in 0..2 {
            animator
                .on_event(&grid, SearchEvent::Examined { from: 5, to: 6 })
                .unwrap();
        }
        assert_eq!(animator.into_inner().len(), once * 2);
    }

    // Tests finishing leaves the alternate screen exactly once
    // Verified by skipping the active check
    #[test]
    fn test_start_and_finish() {
        let mut animator = animator();
        animator.start().unwrap();
        animator.finish(false).unwrap();
        animator.finish(false).unwrap();

        let output = String::from_utf8(animator.into_inner()).unwrap();
        assert_eq!(output.matches(LEAVE_ALTERNATE_SCREEN).count(), 1);
    }

    // Tests an animator that never started writes no restore sequence
    // Verified by always leaving on finish
    #[test]
    fn test_finish_without_start() {
        let mut animator = animator();
        animator.finish(false).unwrap();
        assert!(animator.into_inner().is_empty());
    }
}
