//! Function Registry
//!
//! Maps every host-visible function name to its arity range, usage line and
//! handler. A host binding registers nothing itself: it forwards
//! `(name, args)` to [`FunctionRegistry::call`] and hands the returned
//! output list back to the caller.

use std::collections::HashMap;
use std::sync::OnceLock;

use adapters_socket::{SocketSys, SystemSockets};
use entities_data_handling::Term;
use entities_socket::constants;

use crate::common_facades::SocketError;
use crate::constant_facades;
use crate::socket_facades::{signatures, Signature, SocketFacade};

/// Operation handler: façade plus host arguments to host outputs
pub type Operation<S> = fn(&SocketFacade<S>, &[Term]) -> Result<Vec<Term>, SocketError>;

/// How a registered function is carried out
pub enum Handler<S> {
    /// A socket operation
    Operation(Operation<S>),
    /// A zero-argument constant query
    Constant,
}

/// Registry entry
///
/// The signature is the one the handler checks its arguments against.
pub struct FunctionEntry<S> {
    pub signature: Signature,
    pub handler: Handler<S>,
}

/// Function registry
pub struct FunctionRegistry<S = SystemSockets> {
    facade: SocketFacade<S>,
    entries: HashMap<&'static str, FunctionEntry<S>>,
}

impl<S: SocketSys> FunctionRegistry<S> {
    /// Create a registry of every socket operation and constant over `facade`
    pub fn new(facade: SocketFacade<S>) -> Self {
        let mut registry = Self {
            facade,
            entries: HashMap::new(),
        };

        registry.operation(signatures::SOCKET, |f, a| Ok(vec![f.socket(a)?]));
        registry.operation(signatures::CONNECT, |f, a| Ok(vec![f.connect(a)?]));
        registry.operation(signatures::DISCONNECT, |f, a| Ok(vec![f.disconnect(a)?]));
        registry.operation(signatures::GETHOSTBYNAME, |f, a| Ok(vec![f.gethostbyname(a)?]));
        registry.operation(signatures::SEND, |f, a| Ok(vec![f.send(a)?]));
        registry.operation(signatures::RECV, |f, a| {
            let (data, status) = f.recv(a)?;
            Ok(vec![data, status])
        });
        registry.operation(signatures::BIND, |f, a| Ok(vec![f.bind(a)?]));
        registry.operation(signatures::LISTEN, |f, a| Ok(vec![f.listen(a)?]));
        registry.operation(signatures::ACCEPT, |f, a| {
            let (handle, info) = f.accept(a)?;
            Ok(vec![handle, info])
        });
        registry.operation(signatures::SETSOCKOPT, |f, a| {
            f.setsockopt(a)?;
            Ok(Vec::new())
        });
        registry.operation(signatures::GETSOCKOPT, |f, a| Ok(vec![f.getsockopt(a)?]));

        for constant in constants::constants() {
            registry.insert(Signature::constant(constant.name), Handler::Constant);
        }

        registry
    }

    fn operation(&mut self, signature: Signature, operation: Operation<S>) {
        self.insert(signature, Handler::Operation(operation));
    }

    fn insert(&mut self, signature: Signature, handler: Handler<S>) {
        self.entries
            .insert(signature.name, FunctionEntry { signature, handler });
    }

    /// Call a function by name
    ///
    /// # Returns
    ///
    /// The host output list: empty for `setsockopt`, two values for `recv`
    /// and `accept`, one value otherwise.
    ///
    /// # Errors
    ///
    /// `SocketError::UnknownFunction` for unregistered names, otherwise
    /// whatever the function itself reports.
    pub fn call(&self, name: &str, args: &[Term]) -> Result<Vec<Term>, SocketError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SocketError::UnknownFunction(name.to_string()))?;
        match entry.handler {
            Handler::Operation(operation) => operation(&self.facade, args),
            Handler::Constant => Ok(vec![constant_facades::query(entry.signature.name, args)?]),
        }
    }

    /// Look up a registered function
    pub fn entry(&self, name: &str) -> Option<&FunctionEntry<S>> {
        self.entries.get(name)
    }

    /// Usage line of a registered function
    pub fn usage(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|e| e.signature.usage)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The façade calls are dispatched to
    pub fn facade(&self) -> &SocketFacade<S> {
        &self.facade
    }
}

impl Default for FunctionRegistry<SystemSockets> {
    fn default() -> Self {
        Self::new(SocketFacade::system())
    }
}

/// Global function registry instance
static GLOBAL_FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// Get the global function registry
///
/// Built on first use over the operating system's sockets.
pub fn get_global_registry() -> &'static FunctionRegistry {
    GLOBAL_FUNCTION_REGISTRY.get_or_init(FunctionRegistry::default)
}
