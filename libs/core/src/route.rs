use std::fmt;

use serde::{Deserialize, Serialize};

/// One addressable participant in the pipeline
///
/// `node` and `correlation_id` are empty until the infrastructure binds the
/// instance to a host and a per-hop transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingInstance {
    pub service: String,
    #[serde(alias = "srvId")]
    pub service_instance_id: String,
    #[serde(default)]
    pub node: String,
    #[serde(default, alias = "instId")]
    pub correlation_id: String,
}

impl ProcessingInstance {
    /// Create an unbound instance (empty node and correlation id)
    pub fn new(service: impl Into<String>, service_instance_id: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            service_instance_id: service_instance_id.into(),
            node: String::new(),
            correlation_id: String::new(),
        }
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = correlation_id.into();
        self
    }

    /// Whether a node or per-hop correlation is attached
    pub fn is_bound(&self) -> bool {
        !self.node.is_empty() || !self.correlation_id.is_empty()
    }

    /// Drop the node and correlation binding, keeping the logical identity
    pub fn unbind(&mut self) {
        self.node.clear();
        self.correlation_id.clear();
    }
}

impl fmt::Display for ProcessingInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessingInstance{{service: {}, serviceInstanceId: {}, node: {}, correlationId: {}}}",
            self.service, self.service_instance_id, self.node, self.correlation_id
        )
    }
}

/// How a reply travels back along the incoming path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapMode {
    /// Same connection back; origin and destination are exchanged as-is
    Synchronous,
    /// Decoupled return hop; the new destination loses its node and
    /// correlation binding and must be resolved again at send time
    Asynchronous,
}

/// Addressing for one envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(alias = "trxId")]
    pub correlation_key: String,
    #[serde(alias = "org")]
    pub origin: ProcessingInstance,
    #[serde(alias = "dst")]
    pub destination: ProcessingInstance,
}

impl Route {
    pub fn new(
        correlation_key: impl Into<String>,
        origin: ProcessingInstance,
        destination: ProcessingInstance,
    ) -> Self {
        Self {
            correlation_key: correlation_key.into(),
            origin,
            destination,
        }
    }

    /// Exchange origin and destination in place
    pub fn swap_synchronous(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
        tracing::trace!(correlation_key = %self.correlation_key, "route swapped (synchronous)");
    }

    /// Exchange origin and destination, then clear the binding of the new
    /// destination
    ///
    /// The clear applies to whatever now sits in `destination`, even when
    /// origin and destination were equal before the swap.
    pub fn swap_asynchronous(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
        self.destination.unbind();
        tracing::trace!(correlation_key = %self.correlation_key, "route swapped (asynchronous)");
    }

    pub fn swap(&mut self, mode: SwapMode) {
        match mode {
            SwapMode::Synchronous => self.swap_synchronous(),
            SwapMode::Asynchronous => self.swap_asynchronous(),
        }
    }

    /// Return a swapped copy, leaving `self` untouched
    pub fn reversed(&self, mode: SwapMode) -> Self {
        let mut route = self.clone();
        route.swap(mode);
        route
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route{{correlationKey: {}, origin: {}, destination: {}}}",
            self.correlation_key, self.origin, self.destination
        )
    }
}
