use dioxus::{logger::tracing, prelude::*};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{self, LocalStorage};

/// State that survives page reloads through one local storage key.
///
/// The first render shows the default; a stored value replaces it right
/// after mount. Every change is written back to the same key.
pub fn use_persistent<T>(key: &'static str, init: impl FnOnce() -> T) -> UsePersistent<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let mut state = use_signal(init);

    use_effect(move || match storage::read::<T, _>(&LocalStorage, key) {
        Ok(Some(stored)) => state.set(stored),
        Ok(None) => {}
        Err(error) => tracing::error!("failed to restore {key}: {error:?}"),
    });

    use_effect(move || {
        let value = state.read().clone();

        if let Err(error) = storage::write(&LocalStorage, key, &value) {
            tracing::error!("failed to persist {key}: {error:?}");
        }
    });

    UsePersistent { state }
}

pub struct UsePersistent<T: 'static> {
    state: Signal<T>,
}

impl<T: 'static> Clone for UsePersistent<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UsePersistent<T> {}

impl<T: Clone + 'static> UsePersistent<T> {
    pub fn get(&self) -> T {
        self.state.cloned()
    }

    pub fn set(&mut self, value: T) {
        self.state.set(value);
    }
}
