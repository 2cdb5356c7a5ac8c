//! # Variable labels
//!
//! Every constraint row and every variable column of a tableau carries the name of the variable
//! that is bound to it. A pivot exchanges the labels of the pivot row and the pivot column.
use std::fmt;
use std::fmt::Display;

/// Name of the variable on a tableau row or column.
///
/// The objective row and the right hand side column are always the last row and column, so they
/// have no label.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Label {
    /// Original variable `x_i` of the primal problem, paired with dual marker `v_i`.
    Primal(usize),
    /// Slack variable `y_i` of constraint `i`, paired with dual marker `u_i`.
    Dual(usize),
    /// Slack of a cutting plane.
    Slack,
    /// An equality constraint that still needs to be pivoted out of the basis.
    Zero,
}

impl Label {
    /// Index of the primal variable, if this is one.
    pub fn primal_index(self) -> Option<usize> {
        match self {
            Label::Primal(index) => Some(index),
            _ => None,
        }
    }

    /// Index of the dual variable, if this is one.
    pub fn dual_index(self) -> Option<usize> {
        match self {
            Label::Dual(index) => Some(index),
            _ => None,
        }
    }

    /// Name of the paired variable in the dual problem, if there is one.
    pub fn dual_marker(self) -> Option<String> {
        match self {
            Label::Primal(index) => Some(format!("v{}", index)),
            Label::Dual(index) => Some(format!("u{}", index)),
            Label::Slack | Label::Zero => None,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Primal(index) => write!(f, "x{}", index),
            Label::Dual(index) => write!(f, "y{}", index),
            Label::Slack => f.write_str("s"),
            Label::Zero => f.write_str("0"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::tableau::label::Label;

    #[test]
    fn indices() {
        assert_eq!(Label::Primal(3).primal_index(), Some(3));
        assert_eq!(Label::Primal(3).dual_index(), None);
        assert_eq!(Label::Dual(1).dual_index(), Some(1));
        assert_eq!(Label::Zero.primal_index(), None);
    }

    #[test]
    fn names() {
        assert_eq!(Label::Primal(0).to_string(), "x0");
        assert_eq!(Label::Dual(2).to_string(), "y2");
        assert_eq!(Label::Slack.to_string(), "s");
        assert_eq!(Label::Zero.to_string(), "0");
        assert_eq!(Label::Primal(1).dual_marker().as_deref(), Some("v1"));
        assert_eq!(Label::Dual(1).dual_marker().as_deref(), Some("u1"));
        assert_eq!(Label::Slack.dual_marker(), None);
    }
}
