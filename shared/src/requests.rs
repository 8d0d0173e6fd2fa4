use std::collections::HashMap;

/// Remote collections the client fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Transactions,
    Categories,
    Users,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Transactions, Resource::Categories, Resource::Users];
}

/// Handle for one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    resource: Resource,
    generation: u64,
}

impl RequestTicket {
    pub fn resource(&self) -> Resource {
        self.resource
    }
}

/// Tracks the newest request per resource. A response is applied only
/// while its ticket is still current; starting a newer request for the
/// same resource invalidates every older ticket.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: HashMap<Resource, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, resource: Resource) -> RequestTicket {
        let generation = self.bump(resource);
        RequestTicket { resource, generation }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generations.get(&ticket.resource).copied() == Some(ticket.generation)
    }

    /// Drop whatever is in flight for `resource`
    pub fn invalidate(&mut self, resource: Resource) {
        self.bump(resource);
    }

    pub fn invalidate_all(&mut self) {
        for resource in Resource::ALL {
            self.bump(resource);
        }
    }

    fn bump(&mut self, resource: Resource) -> u64 {
        let generation = self.generations.entry(resource).or_insert(0);
        *generation += 1;
        *generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(Resource::Transactions);
        assert!(tracker.is_current(&first));

        let second = tracker.begin(Resource::Transactions);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut tracker = RequestTracker::new();
        let transactions = tracker.begin(Resource::Transactions);
        let categories = tracker.begin(Resource::Categories);
        tracker.begin(Resource::Categories);

        assert!(tracker.is_current(&transactions));
        assert!(!tracker.is_current(&categories));
        assert_eq!(categories.resource(), Resource::Categories);
    }

    #[test]
    fn test_invalidate() {
        let mut tracker = RequestTracker::new();
        let users = tracker.begin(Resource::Users);
        tracker.invalidate(Resource::Users);
        assert!(!tracker.is_current(&users));

        let transactions = tracker.begin(Resource::Transactions);
        let categories = tracker.begin(Resource::Categories);
        tracker.invalidate_all();
        assert!(!tracker.is_current(&transactions));
        assert!(!tracker.is_current(&categories));
    }
}
