use crate::info_log;
use crate::letterbox::Letterbox;
use crate::solver::{SearchStrategy, Solution, Solver};
use std::io;

/// Somewhere to show a solved puzzle: the plain printer in `cli` or the
/// terminal UI in `tui`.
pub trait SolutionView {
    fn display_puzzle(&mut self, letterbox: &Letterbox) -> io::Result<()>;
    fn display_solutions(&mut self, solutions: &[Solution]) -> io::Result<()>;
    fn display_no_solutions(&mut self) -> io::Result<()>;

    /// Called last. Interactive views block here until the user leaves.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs the search and hands the result to `view`.
pub fn present_solutions<V: SolutionView + ?Sized>(
    solver: &Solver,
    strategy: SearchStrategy,
    view: &mut V,
) -> io::Result<Vec<Solution>> {
    view.display_puzzle(solver.letterbox())?;

    let solutions = solver.solve_with(strategy);
    if solutions.is_empty() {
        info_log!("present_solutions() - No solutions for {}", solver.letterbox());
        view.display_no_solutions()?;
    } else {
        view.display_solutions(&solutions)?;
    }

    view.finish()?;
    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        events: Vec<String>,
    }

    impl SolutionView for RecordingView {
        fn display_puzzle(&mut self, letterbox: &Letterbox) -> io::Result<()> {
            self.events.push(format!("puzzle {letterbox}"));
            Ok(())
        }

        fn display_solutions(&mut self, solutions: &[Solution]) -> io::Result<()> {
            self.events.push(format!("solutions {}", solutions.len()));
            Ok(())
        }

        fn display_no_solutions(&mut self) -> io::Result<()> {
            self.events.push("none".to_string());
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.events.push("finish".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_present_solutions_found() {
        let solver =
            Solver::from_sides(&["abc", "def", "ghi", "jkl"], &["gadjek", "kibflhc"]).unwrap();
        let mut view = RecordingView::default();
        let solutions = present_solutions(&solver, SearchStrategy::FirstMatch, &mut view).unwrap();

        assert_eq!(solutions.len(), 1);
        assert_eq!(
            view.events,
            vec!["puzzle abc-def-ghi-jkl", "solutions 1", "finish"]
        );
    }

    #[test]
    fn test_present_no_solutions() {
        let solver = Solver::from_sides(&["abc", "def", "ghi", "jkl"], &["gal"]).unwrap();
        let mut view = RecordingView::default();
        let solutions = present_solutions(&solver, SearchStrategy::Exhaustive, &mut view).unwrap();

        assert!(solutions.is_empty());
        assert_eq!(view.events, vec!["puzzle abc-def-ghi-jkl", "none", "finish"]);
    }

    #[test]
    fn test_present_through_trait_object() {
        let solver = Solver::from_sides(&["abc", "def", "ghi", "jkl"], &["gal"]).unwrap();
        let mut recording = RecordingView::default();
        let view: &mut dyn SolutionView = &mut recording;
        present_solutions(&solver, SearchStrategy::FirstMatch, view).unwrap();
        assert_eq!(recording.events.len(), 3);
    }
}
