//! Render hooks fired by the grid for every header cell.
//!
//! A [`Hook<Args>`] is a synchronous observer list: handlers are invoked
//! immediately, on the emitting thread, in the order they were connected.
//! [`HeaderHooks`] bundles the two hooks the grid fires while rendering
//! headers.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_header_tooltips::Hook;
//!
//! let hook = Hook::<usize>::new();
//! let id = hook.connect(|index| println!("rendered header {index}"));
//! hook.emit(3);
//! assert!(hook.disconnect(id));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::header::HeaderElement;
use crate::logging::targets;

new_key_type! {
    /// Identifies one handler connected to a [`Hook`].
    ///
    /// Returned by [`Hook::connect`] and consumed by [`Hook::disconnect`].
    pub struct HookId;
}

type Handler<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Handlers<Args> {
    slots: SlotMap<HookId, Handler<Args>>,
    /// Connection order, used for delivery.
    order: Vec<HookId>,
}

/// A named host event with any number of connected handlers.
pub struct Hook<Args> {
    name: &'static str,
    handlers: Mutex<Handlers<Args>>,
    blocked: AtomicBool,
}

impl<Args> Default for Hook<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Hook<Args> {
    /// Create an anonymous hook with no handlers.
    pub fn new() -> Self {
        Self::named("hook")
    }

    /// Create a hook with a name used in log output.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            handlers: Mutex::new(Handlers {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
            blocked: AtomicBool::new(false),
        }
    }

    /// The hook's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Connect a handler. It runs after every handler connected before it.
    pub fn connect<F>(&self, handler: F) -> HookId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.lock();
        let id = handlers.slots.insert(Arc::new(handler));
        handlers.order.push(id);
        tracing::trace!(target: targets::HOOKS, hook = self.name, ?id, "handler connected");
        id
    }

    /// Disconnect a handler.
    ///
    /// Returns `true` if the handler was connected, `false` otherwise.
    pub fn disconnect(&self, id: HookId) -> bool {
        let mut handlers = self.handlers.lock();
        if handlers.slots.remove(id).is_none() {
            return false;
        }
        handlers.order.retain(|&existing| existing != id);
        tracing::trace!(target: targets::HOOKS, hook = self.name, ?id, "handler disconnected");
        true
    }

    /// Disconnect every handler.
    pub fn disconnect_all(&self) {
        let mut handlers = self.handlers.lock();
        handlers.slots.clear();
        handlers.order.clear();
    }

    /// Number of connected handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().slots.len()
    }

    /// Whether `id` is still connected.
    pub fn is_connected(&self, id: HookId) -> bool {
        self.handlers.lock().slots.contains_key(id)
    }

    /// Suppress or resume emission.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is currently suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Invoke every connected handler with `args`, in connection order.
    ///
    /// The handler list is snapshotted first, so a handler may connect or
    /// disconnect handlers on this hook without deadlocking. Changes take
    /// effect from the next emission.
    #[tracing::instrument(skip_all, target = "horizon_lattice_header_tooltips::hooks", level = "trace", fields(hook = self.name))]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::HOOKS, "hook blocked, skipping emit");
            return;
        }

        let snapshot: Vec<Handler<Args>> = {
            let handlers = self.handlers.lock();
            handlers
                .order
                .iter()
                .filter_map(|id| handlers.slots.get(*id).cloned())
                .collect()
        };

        for handler in snapshot {
            handler(&args);
        }
    }
}

/// Arguments of a header render hook.
#[derive(Clone)]
pub struct HeaderRendered {
    /// Logical column or row index. Negative for corner headers.
    pub index: i32,
    /// The rendered header cell.
    pub header: Arc<dyn HeaderElement>,
}

impl HeaderRendered {
    pub fn new(index: i32, header: Arc<dyn HeaderElement>) -> Self {
        Self { index, header }
    }
}

impl std::fmt::Debug for HeaderRendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderRendered")
            .field("index", &self.index)
            .field("kind", &self.header.kind())
            .finish()
    }
}

/// The header render hooks a grid exposes.
pub struct HeaderHooks {
    /// Fired once per rendered column header cell.
    pub after_get_column_header: Hook<HeaderRendered>,
    /// Fired once per rendered row header cell.
    pub after_get_row_header: Hook<HeaderRendered>,
}

impl Default for HeaderHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderHooks {
    pub fn new() -> Self {
        Self {
            after_get_column_header: Hook::named("afterGetColumnHeader"),
            after_get_row_header: Hook::named("afterGetRowHeader"),
        }
    }

    /// Report a rendered column header.
    pub fn fire_column_header(&self, index: i32, header: Arc<dyn HeaderElement>) {
        self.after_get_column_header
            .emit(HeaderRendered::new(index, header));
    }

    /// Report a rendered row header.
    pub fn fire_row_header(&self, index: i32, header: Arc<dyn HeaderElement>) {
        self.after_get_row_header
            .emit(HeaderRendered::new(index, header));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HeaderKind, SimpleHeader};

    #[test]
    fn test_hook_connect_emit() {
        let hook = Hook::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        hook.connect(move |&value| {
            received_clone.lock().push(value);
        });

        hook.emit(42);
        hook.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_hook_disconnect() {
        let hook = Hook::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let id = hook.connect(move |&value| {
            received_clone.lock().push(value);
        });

        hook.emit(1);
        assert!(hook.disconnect(id));
        assert!(!hook.disconnect(id));
        hook.emit(2);

        assert_eq!(*received.lock(), vec![1]);
        assert!(!hook.is_connected(id));
    }

    #[test]
    fn test_delivery_follows_connection_order() {
        let hook = Hook::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut ids = Vec::new();
        for n in 0..4 {
            let order_clone = order.clone();
            ids.push(hook.connect(move |_| order_clone.lock().push(n)));
        }

        // Freeing a slot and reusing it must not move the new handler forward
        hook.disconnect(ids[1]);
        let order_clone = order.clone();
        hook.connect(move |_| order_clone.lock().push(4));

        hook.emit(());
        assert_eq!(*order.lock(), vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_hook_blocked() {
        let hook = Hook::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        hook.connect(move |&value| {
            received_clone.lock().push(value);
        });

        hook.emit(1);
        hook.set_blocked(true);
        hook.emit(2);
        hook.set_blocked(false);
        hook.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_reentrant_disconnect() {
        let hook = Arc::new(Hook::<()>::new());
        let calls = Arc::new(Mutex::new(0));
        let own_id = Arc::new(Mutex::new(None));

        let hook_clone = hook.clone();
        let calls_clone = calls.clone();
        let own_id_clone = own_id.clone();
        let id = hook.connect(move |_| {
            *calls_clone.lock() += 1;
            if let Some(id) = own_id_clone.lock().take() {
                hook_clone.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        hook.emit(());
        hook.emit(());

        assert_eq!(*calls.lock(), 1);
        assert_eq!(hook.handler_count(), 0);
    }

    #[test]
    fn test_disconnect_all() {
        let hook = Hook::<()>::new();
        for _ in 0..5 {
            hook.connect(|_| {});
        }

        assert_eq!(hook.handler_count(), 5);
        hook.disconnect_all();
        assert_eq!(hook.handler_count(), 0);
    }

    #[test]
    fn test_header_hooks_route_by_event() {
        let hooks = HeaderHooks::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        hooks.after_get_column_header.connect(move |event| {
            seen_clone.lock().push(("column", event.index));
        });
        let seen_clone = seen.clone();
        hooks.after_get_row_header.connect(move |event| {
            seen_clone.lock().push(("row", event.index));
        });

        hooks.fire_column_header(2, Arc::new(SimpleHeader::new(HeaderKind::Column, "B")));
        hooks.fire_row_header(7, Arc::new(SimpleHeader::new(HeaderKind::Row, "8")));

        assert_eq!(*seen.lock(), vec![("column", 2), ("row", 7)]);
        assert_eq!(hooks.after_get_column_header.name(), "afterGetColumnHeader");
    }
}
