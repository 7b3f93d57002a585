use std::fmt::Display;

use enumset::EnumSetType;

/// A description of the kinds of events that can happen on a domain.
///
/// For ordered domains (integers and floats) the bound events refer to the bounds of the interval.
/// For set domains, [`DomainEvent::LowerBound`] means that the set of definitely included elements
/// grew and [`DomainEvent::UpperBound`] means that the set of possibly included elements shrank.
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// The domain collapsed to a single value.
    Assign,
    /// The lower bound of the domain was tightened.
    LowerBound,
    /// The upper bound of the domain was tightened.
    UpperBound,
    /// Some value was removed from the domain. Every narrowing raises this event.
    Removal,
}

impl Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainEvent::Assign => write!(f, "[Event:Assign]"),
            DomainEvent::LowerBound => write!(f, "[Event:LB]"),
            DomainEvent::UpperBound => write!(f, "[Event:UB]"),
            DomainEvent::Removal => write!(f, "[Event:Remove]"),
        }
    }
}
