//! Modification events and the subscription registry which maps them to propagators.
mod domain_event;
mod domain_events;
mod event_sink;
mod opaque_domain_event;
mod watch_list;

pub use domain_event::DomainEvent;
pub use domain_events::DomainEvents;
pub(crate) use event_sink::EventSink;
pub use opaque_domain_event::OpaqueDomainEvent;
pub(crate) use watch_list::Subscription;
pub(crate) use watch_list::VariableRef;
pub(crate) use watch_list::WatchList;
pub(crate) use watch_list::Watchers;
