use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The search runs until it either finds a
/// solution or exhausts the domains.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
