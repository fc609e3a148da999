//! Ordered predicate-action rules.
//!
//! A `DecisionList` is scanned in registration order and the first rule whose
//! predicate holds wins, like a firewall rule chain. Rules after the winner
//! are never evaluated.

use bifold_algebraics::LazySeq;

/// A boxed predicate over `I`, shareable across threads once frozen.
pub type Predicate<I> = Box<dyn Fn(&I) -> bool + Send + Sync>;

struct Rule<I, A> {
    predicate: Predicate<I>,
    action: A,
}

/// Append-only list of `(predicate, action)` pairs.
pub struct DecisionList<I, A> {
    rules: Vec<Rule<I, A>>,
}

impl<I, A> DecisionList<I, A> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after every rule registered so far.
    pub fn push(&mut self, predicate: impl Fn(&I) -> bool + Send + Sync + 'static, action: A) {
        self.rules.push(Rule {
            predicate: Box::new(predicate),
            action,
        });
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index and action of the first rule matching `input`.
    pub fn first_match(&self, input: &I) -> Option<(usize, &A)> {
        self.rules
            .iter()
            .enumerate()
            .first_or_none(|(_, rule)| (rule.predicate)(input))
            .map(|(index, rule)| (index, &rule.action))
    }
}

impl<I, A> Default for DecisionList<I, A> {
    fn default() -> Self {
        Self::new()
    }
}
