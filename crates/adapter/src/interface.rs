//! Sink for registered coupling handlers.

use crate::handler::CouplingDataUser;
use vv_domain::channel::ChannelRole;

/// Accepts named readers and writers. Ownership of each handler passes to the registry.
pub trait CouplingRegistry {
    fn add_reader(&mut self, name: &str, handler: Box<dyn CouplingDataUser>);

    fn add_writer(&mut self, name: &str, handler: Box<dyn CouplingDataUser>);
}

/// A handler registered under a channel name.
#[derive(Debug)]
pub struct Registration {
    name: String,
    handler: Box<dyn CouplingDataUser>,
}

impl Registration {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn handler(&self) -> &dyn CouplingDataUser {
        self.handler.as_ref()
    }
}

/// In-memory coupling interface keeping every registration in arrival order.
///
/// Registrations are never merged: registering the same name twice keeps two entries.
#[derive(Debug, Default)]
pub struct Interface {
    readers: Vec<Registration>,
    writers: Vec<Registration>,
}

impl Interface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn readers(&self) -> &[Registration] {
        &self.readers
    }

    #[must_use]
    pub fn writers(&self) -> &[Registration] {
        &self.writers
    }

    /// Registrations for `role`.
    #[must_use]
    pub fn registrations(&self, role: ChannelRole) -> &[Registration] {
        match role {
            ChannelRole::Read => &self.readers,
            ChannelRole::Write => &self.writers,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readers.len() + self.writers.len()
    }
}

impl CouplingRegistry for Interface {
    fn add_reader(&mut self, name: &str, handler: Box<dyn CouplingDataUser>) {
        self.readers.push(Registration { name: name.to_owned(), handler });
    }

    fn add_writer(&mut self, name: &str, handler: Box<dyn CouplingDataUser>) {
        self.writers.push(Registration { name: name.to_owned(), handler });
    }
}
